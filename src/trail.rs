// Cursor trail: a dot spawns wherever the pointer moves, then fades and
// widens a little each frame until it disappears.

use crate::config::TrailConfig;
use crate::surface::Surface;

#[derive(Copy, Clone, Debug)]
pub struct TrailParticle {
    pub x: f64,
    pub y: f64,
    pub alpha: f64,
    pub radius: f64,
}

pub struct CursorTrail {
    config: TrailConfig,
    particles: Vec<TrailParticle>,
}

impl CursorTrail {
    pub fn new(config: TrailConfig) -> CursorTrail {
        CursorTrail {
            config,
            particles: Vec::new(),
        }
    }

    pub fn spawn(&mut self, x: f64, y: f64) {
        self.particles.push(TrailParticle {
            x,
            y,
            alpha: 1.0,
            radius: self.config.spawn_radius,
        });
    }

    /// Fades every dot by `fade_per_frame`, grows it by `growth_per_frame`,
    /// and drops the ones that have faded out entirely.
    pub fn advance(&mut self) {
        let fade = self.config.fade_per_frame;
        let growth = self.config.growth_per_frame;
        for particle in &mut self.particles {
            particle.alpha -= fade;
            particle.radius += growth;
        }
        self.particles.retain(|particle| particle.alpha > 0.0);
    }

    // Drawn after the field so the trail sits on top of the mesh; the
    // field's render owns the clear.
    pub fn render(&self, surface: &mut dyn Surface) {
        for particle in &self.particles {
            surface.fill_circle(
                particle.x,
                particle.y,
                particle.radius,
                self.config.color,
                particle.alpha,
            );
        }
    }

    pub fn particles(&self) -> &[TrailParticle] {
        &self.particles
    }
}
