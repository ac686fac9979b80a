//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.

#![cfg(target_arch = "wasm32")]

use portfolio_particles_backend::config::FieldConfig;
use portfolio_particles_backend::field::ParticleField;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn field_rebuilds_with_browser_entropy() {
    let config = FieldConfig::default();
    let count = config.particle_count;
    let mut field = ParticleField::new(config);
    field.resize(640.0, 480.0);
    field.rebuild_particles(&mut rand::thread_rng());
    assert_eq!(field.particles().len(), count);
}

#[wasm_bindgen_test]
fn advancing_keeps_particles_on_the_surface() {
    let mut field = ParticleField::new(FieldConfig::default());
    field.resize(320.0, 240.0);
    field.rebuild_particles(&mut rand::thread_rng());
    for _ in 0..600 {
        field.advance();
    }
    for p in field.particles() {
        assert!(p.x >= 0.0 && p.x <= 320.0);
        assert!(p.y >= 0.0 && p.y <= 240.0);
    }
}
