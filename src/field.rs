// The hero backdrop simulation: a fixed set of particles pushed away from the
// pointer, damped every frame, bouncing off the canvas edges, and drawn with
// faint lines between close neighbours.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;
use vecmath::Vector2;

pub struct ParticleField {
    width: f64,
    height: f64,
    pointer: Vector2<f64>,
    particles: Vec<Particle>,
    config: FieldConfig,
}

/// `min(max_particles, floor(width / particle_spacing))`, zero for widths
/// that aren't positive and finite.
pub fn particle_count(width: f64, config: &FieldConfig) -> usize {
    if !width.is_finite() || width <= 0.0 || config.particle_spacing <= 0.0 {
        return 0;
    }
    let by_width = (width / config.particle_spacing).floor() as usize;
    by_width.min(config.max_particles)
}

// Points one velocity component back into [0, extent) while its coordinate is
// outside. Only outward motion is flipped, so a particle several steps out
// keeps heading home instead of bouncing in place; the return speed floor
// stops damping from stalling it off-canvas.
fn reflect(pos: f64, vel: &mut f64, extent: f64, return_speed: f64) {
    let inward = if pos < 0.0 {
        1.0
    } else if pos >= extent {
        -1.0
    } else {
        return;
    };
    if *vel * inward <= 0.0 {
        *vel = -*vel;
    }
    if vel.abs() < return_speed {
        *vel = inward * return_speed;
    }
}

impl ParticleField {
    pub fn initialize<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        config: FieldConfig,
        rng: &mut R,
    ) -> ParticleField {
        let count = particle_count(width, &config);
        let mut particles = Vec::with_capacity(count);
        for _ in 0..count {
            particles.push(Particle::spawn(rng, width, height, &config));
        }
        log::debug!("spawned {} particles for {}x{}", count, width, height);
        ParticleField::from_particles(width, height, config, particles)
    }

    pub fn from_particles(
        width: f64,
        height: f64,
        config: FieldConfig,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            pointer: FieldConfig::POINTER_PARKED,
            particles,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn pointer(&self) -> Vector2<f64> {
        self.pointer
    }

    pub fn set_pointer(&mut self, x: f64, y: f64) {
        self.pointer = [x, y];
    }

    // Bounds only. Particles left outside the new rectangle bounce back in
    // through the reflection rule on the next tick.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by `dt` frames.
    pub fn tick(&mut self, dt: f64) {
        let config = &self.config;
        let damping = config.damping.powf(dt);
        for particle in &mut self.particles {
            let to_pointer = vecmath::vec2_sub(self.pointer, particle.pos);
            let distance = vecmath::vec2_len(to_pointer);
            if distance > 0.0 && distance < config.interaction_radius {
                let force = (config.interaction_radius - distance) / config.interaction_radius;
                let push = vecmath::vec2_scale(
                    to_pointer,
                    force * config.repulsion_strength * dt / distance,
                );
                particle.vel = vecmath::vec2_sub(particle.vel, push);
            }

            particle.pos = vecmath::vec2_add(particle.pos, vecmath::vec2_scale(particle.vel, dt));
            particle.vel = vecmath::vec2_scale(particle.vel, damping);

            if let Some(max_speed) = config.max_speed {
                let speed = particle.speed();
                if speed > max_speed && speed > 0.0 {
                    particle.vel = vecmath::vec2_scale(particle.vel, max_speed / speed);
                }
            }

            reflect(particle.pos[0], &mut particle.vel[0], self.width, config.return_speed);
            reflect(particle.pos[1], &mut particle.vel[1], self.height, config.return_speed);
        }
    }

    /// Opacity of the line joining two particles `distance` apart, or `None`
    /// when they are too far apart to be joined.
    pub fn connection_opacity(&self, distance: f64) -> Option<f64> {
        let threshold = self.config.connection_distance;
        if distance > threshold {
            None
        } else {
            Some(self.config.edge_max_alpha * (1.0 - distance / threshold))
        }
    }

    /// Every unordered pair `(i, j)`, `i < j`, close enough to be joined.
    pub fn connections<'a>(&'a self) -> impl Iterator<Item = (usize, usize, f64)> + 'a {
        let particles = &self.particles;
        (0..particles.len()).flat_map(move |i| {
            ((i + 1)..particles.len()).filter_map(move |j| {
                let distance =
                    vecmath::vec2_len(vecmath::vec2_sub(particles[i].pos, particles[j].pos));
                self.connection_opacity(distance).map(|opacity| (i, j, opacity))
            })
        })
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.width, self.height);
        for particle in &self.particles {
            surface.fill_circle(particle.pos, particle.radius(), self.config.particle_color);
        }
        for (i, j, opacity) in self.connections() {
            surface.stroke_line(
                self.particles[i].pos,
                self.particles[j].pos,
                self.config.edge_width,
                self.config.edge_color.with_alpha(opacity),
            );
        }
    }
}
