// Tuning constants for the two background layers. The defaults are the
// values the site ships with; tests construct their own.

use crate::color::Color;

#[derive(Clone, Debug)]
pub struct FieldConfig {
    /// Particles maintained at all times between rebuilds.
    pub particle_count: usize,
    /// Center-to-center distance below which two particles are joined by a
    /// line. Also the distance at which line opacity reaches zero.
    pub connection_distance: f64,
    pub min_radius: f64,
    pub max_radius: f64,
    /// Per-axis speed bound; draws are symmetric around zero.
    pub max_speed: f64,
    pub particle_color: Color,
    pub particle_alpha: f64,
    pub line_color: Color,
}

impl Default for FieldConfig {
    fn default() -> FieldConfig {
        FieldConfig {
            particle_count: 60,
            connection_distance: 120.0,
            min_radius: 1.0,
            max_radius: 3.0,
            max_speed: 0.5,
            particle_color: Color::from_u32(0x64ffda),
            particle_alpha: 0.7,
            line_color: Color::from_u32(0x64ffda),
        }
    }
}

#[derive(Clone, Debug)]
pub struct TrailConfig {
    pub spawn_radius: f64,
    pub growth_per_frame: f64,
    pub fade_per_frame: f64,
    pub color: Color,
}

impl Default for TrailConfig {
    fn default() -> TrailConfig {
        TrailConfig {
            spawn_radius: 5.0,
            growth_per_frame: 0.2,
            fade_per_frame: 0.02,
            color: Color::from_u32(0x00ffff),
        }
    }
}
