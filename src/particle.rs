// Simple particle struct to keep track of individual position, velocity,
// and drawn radius

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64, radius: f64) -> Particle {
        Particle { x, y, vx, vy, radius }
    }

    /// Uniform draws: position anywhere on the surface, radius within the
    /// configured range, each velocity component symmetric around zero.
    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64, config: &FieldConfig) -> Particle {
        let x = rng.gen::<f64>() * width;
        let y = rng.gen::<f64>() * height;
        let vx = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let vy = (rng.gen::<f64>() * 2.0 - 1.0) * config.max_speed;
        let radius = rng.gen::<f64>() * (config.max_radius - config.min_radius) + config.min_radius;

        Particle::new(x, y, vx, vy, radius)
    }

    pub fn speed(&self) -> f64 {
        (self.vx * self.vx + self.vy * self.vy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::Particle;
    use crate::config::FieldConfig;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn random_draws_land_inside_the_configured_ranges() {
        let mut rng = SmallRng::seed_from_u64(42);
        let config = FieldConfig::default();
        for _ in 0..200 {
            let p = Particle::random(&mut rng, 800.0, 600.0, &config);
            assert!(p.x >= 0.0 && p.x < 800.0);
            assert!(p.y >= 0.0 && p.y < 600.0);
            assert!(p.vx.abs() <= config.max_speed);
            assert!(p.vy.abs() <= config.max_speed);
            assert!(p.radius >= config.min_radius && p.radius < config.max_radius);
        }
    }
}
