// Simple particle struct to keep track of individual position, velocity, and draw radius

use crate::config::FieldConfig;
use rand::Rng;
use vecmath::Vector2;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vector2<f64>,
    pub vel: Vector2<f64>,
    radius: f64,
}

impl Particle {
    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    // Uniform position inside the canvas, small symmetric velocity, small positive radius
    pub fn spawn<R: Rng + ?Sized>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let speed = config.initial_speed;
        Particle::new(
            rng.gen::<f64>() * width,
            rng.gen::<f64>() * height,
            uniform(rng, -speed, speed),
            uniform(rng, -speed, speed),
            uniform(rng, config.min_radius, config.max_radius),
        )
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn speed(&self) -> f64 {
        vecmath::vec2_len(self.vel)
    }
}

// gen_range panics on an empty range, which a zeroed config would produce
fn uniform<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> f64 {
    if high > low {
        rng.gen_range(low, high)
    } else {
        low
    }
}
