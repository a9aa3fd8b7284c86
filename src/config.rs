// Tunables for the hero backdrop. Defaults reproduce the portfolio site's
// look; the builder methods exist for hosts that want a denser or calmer field.

use crate::color::Color;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldConfig {
    /// Upper bound on the particle count, whatever the viewport width.
    pub max_particles: usize,
    /// One particle per this many pixels of viewport width.
    pub particle_spacing: f64,
    /// Spawn velocity is drawn from `[-initial_speed, initial_speed)` per axis.
    pub initial_speed: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Pointer repulsion reaches this far, in canvas pixels.
    pub interaction_radius: f64,
    pub repulsion_strength: f64,
    /// Per-frame multiplicative velocity decay.
    pub damping: f64,
    /// Optional hard cap on speed. Off by default: only damping balances
    /// sustained pointer pressure.
    pub max_speed: Option<f64>,
    /// Minimum inward speed of a particle that is outside the canvas, e.g.
    /// after the window shrank.
    pub return_speed: f64,
    /// Pairs closer than this get a connecting line.
    pub connection_distance: f64,
    pub particle_color: Color,
    pub edge_color: Color,
    pub edge_max_alpha: f64,
    pub edge_width: f64,
    /// Largest dt (in frames) a single tick may integrate, so a tab coming
    /// back from the background doesn't fling everything across the canvas.
    pub max_frame_step: f64,
}

impl FieldConfig {
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
    // Parked pointer position before the first mouse event
    pub const POINTER_PARKED: [f64; 2] = [-1000.0, -1000.0];

    pub fn with_max_particles(mut self, max_particles: usize) -> Self {
        self.max_particles = max_particles;
        self
    }

    pub fn with_connection_distance(mut self, distance: f64) -> Self {
        self.connection_distance = distance;
        self
    }

    pub fn with_interaction_radius(mut self, radius: f64) -> Self {
        self.interaction_radius = radius;
        self
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_max_speed(mut self, max_speed: Option<f64>) -> Self {
        self.max_speed = max_speed;
        self
    }

    pub fn with_colors(mut self, particle: Color, edge: Color) -> Self {
        self.particle_color = particle;
        self.edge_color = edge;
        self
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        let cyan = Color::from_u32(0x66fcf1);
        FieldConfig {
            max_particles: 80,
            particle_spacing: 20.0,
            initial_speed: 0.25,
            min_radius: 1.0,
            max_radius: 3.0,
            interaction_radius: 200.0,
            repulsion_strength: 0.5,
            damping: 0.99,
            max_speed: None,
            return_speed: 0.25,
            connection_distance: 150.0,
            particle_color: cyan.with_alpha(0.6),
            edge_color: cyan,
            edge_max_alpha: 0.2,
            edge_width: 0.5,
            max_frame_step: 3.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_override_single_fields() {
        let config = FieldConfig::default()
            .with_max_particles(10)
            .with_max_speed(Some(4.0));
        assert_eq!(config.max_particles, 10);
        assert_eq!(config.max_speed, Some(4.0));
        assert_eq!(config.damping, FieldConfig::default().damping);
    }

    #[test]
    fn physics_and_paint_builders() {
        let white = Color::from_u32(0xffffff);
        let black = Color::from_u32(0x000000);
        let config = FieldConfig::default()
            .with_connection_distance(90.0)
            .with_interaction_radius(120.0)
            .with_damping(0.95)
            .with_colors(white, black);
        assert_eq!(config.connection_distance, 90.0);
        assert_eq!(config.interaction_radius, 120.0);
        assert_eq!(config.damping, 0.95);
        assert_eq!(config.particle_color, white);
        assert_eq!(config.edge_color, black);
        assert_eq!(config.max_particles, 80);
    }
}
