// The particle field: a fixed-size set of drifting points plus the
// proximity mesh drawn between nearby pairs. All randomness comes in
// through the caller's Rng so the field stays deterministic under test.

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField {
    config: FieldConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> ParticleField {
        ParticleField {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
        }
    }

    /// Updates the surface dimensions. Existing particles keep their
    /// positions; callers that want them redistributed follow up with
    /// [`rebuild_particles`](ParticleField::rebuild_particles).
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Throws away the current set and draws a fresh one inside the current
    /// bounds. The count always lands exactly on `particle_count`.
    pub fn rebuild_particles<R: Rng>(&mut self, rng: &mut R) {
        self.particles.clear();
        self.particles.reserve(self.config.particle_count);
        for _ in 0..self.config.particle_count {
            self.particles
                .push(Particle::random(rng, self.width, self.height, &self.config));
        }
    }

    /// One integration step. Each axis reflects independently: leaving the
    /// surface on x flips `vx` and clamps x back onto it, likewise for y.
    /// Speed magnitude never changes, only signs.
    pub fn advance(&mut self) {
        for particle in &mut self.particles {
            particle.x += particle.vx;
            particle.y += particle.vy;
            if particle.x < 0.0 || particle.x > self.width {
                particle.vx = -particle.vx;
                particle.x = particle.x.max(0.0).min(self.width);
            }
            if particle.y < 0.0 || particle.y > self.height {
                particle.vy = -particle.vy;
                particle.y = particle.y.max(0.0).min(self.height);
            }
        }
    }

    /// Draws the current state: clear, every particle as a filled circle,
    /// then a line for every unordered pair closer than
    /// `connection_distance`, fading out linearly with distance.
    pub fn render(&self, surface: &mut dyn Surface) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.radius,
                self.config.particle_color,
                self.config.particle_alpha,
            );
        }
        // Quadratic in the particle count; fine for the tens of particles
        // this runs with.
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let distance = (dx * dx + dy * dy).sqrt();
                if distance < self.config.connection_distance {
                    let alpha = 1.0 - distance / self.config.connection_distance;
                    surface.stroke_line(a.x, a.y, b.x, b.y, self.config.line_color, alpha);
                }
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}
