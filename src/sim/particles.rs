//! Smoke trail particles
//!
//! One puff is emitted per active frame from the vehicle's exhaust. Puffs
//! drift left, shrink and fade, and are dropped once invisible.

use rand::Rng;

use super::state::{Particle, Vehicle};
use crate::tuning::Tuning;

/// Uniform sample from [min, max); degenerate ranges collapse to `min`
fn sample<R: Rng>(rng: &mut R, min: f32, max: f32) -> f32 {
    if max > min {
        rng.random_range(min..max)
    } else {
        min
    }
}

/// Emit one smoke puff at the vehicle's exhaust
pub fn spawn_particle<R: Rng>(
    particles: &mut Vec<Particle>,
    vehicle: &Vehicle,
    tuning: &Tuning,
    rng: &mut R,
) {
    let size = sample(rng, tuning.particle_min_size, tuning.particle_max_size);
    let speed = sample(rng, tuning.particle_min_speed, tuning.particle_max_speed);
    particles.push(Particle {
        pos: vehicle.exhaust(),
        size,
        speed,
        opacity: 1.0,
        shrink: tuning.particle_shrink,
    });
}

/// Advance every puff by one frame and drop the dead ones.
///
/// `retain_mut` visits each element exactly once, so removal never skips a
/// neighbour.
pub fn age_particles(particles: &mut Vec<Particle>, tuning: &Tuning) {
    particles.retain_mut(|p| {
        p.pos.x -= p.speed;
        p.size -= p.shrink;
        p.opacity -= tuning.particle_fade;
        p.is_alive()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn vehicle() -> Vehicle {
        Vehicle {
            x: 50.0,
            y: 300.0,
            width: 40.0,
            height: 30.0,
            velocity: 0.0,
            gravity: 0.3,
            lift: -8.0,
        }
    }

    fn puff(size: f32, opacity: f32) -> Particle {
        Particle {
            pos: Vec2::new(50.0, 315.0),
            size,
            speed: 1.5,
            opacity,
            shrink: 0.05,
        }
    }

    #[test]
    fn test_spawn_at_exhaust_with_ranges() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut particles = Vec::new();
        for _ in 0..200 {
            spawn_particle(&mut particles, &vehicle(), &tuning, &mut rng);
        }
        assert_eq!(particles.len(), 200);
        for p in &particles {
            assert_eq!(p.pos, Vec2::new(50.0, 315.0));
            assert!((5.0..10.0).contains(&p.size));
            assert!((1.0..2.0).contains(&p.speed));
            assert_eq!(p.opacity, 1.0);
            assert_eq!(p.shrink, 0.05);
        }
    }

    #[test]
    fn test_degenerate_range_uses_min() {
        let tuning = Tuning {
            particle_min_size: 6.0,
            particle_max_size: 6.0,
            ..Default::default()
        };
        let mut rng = Pcg32::seed_from_u64(3);
        let mut particles = Vec::new();
        spawn_particle(&mut particles, &vehicle(), &tuning, &mut rng);
        assert_eq!(particles[0].size, 6.0);
    }

    #[test]
    fn test_age_moves_shrinks_fades() {
        let tuning = Tuning::default();
        let mut particles = vec![puff(8.0, 1.0)];
        age_particles(&mut particles, &tuning);
        let p = &particles[0];
        assert!((p.pos.x - 48.5).abs() < 1e-5);
        assert_eq!(p.pos.y, 315.0);
        assert!((p.size - 7.95).abs() < 1e-5);
        assert!((p.opacity - 0.98).abs() < 1e-5);
    }

    #[test]
    fn test_fade_outlives_shrink_for_default_sizes() {
        // Opacity hits zero after 50 frames, before any 5-10px puff shrinks away
        let tuning = Tuning::default();
        let mut particles = vec![puff(5.0, 1.0)];
        let mut frames = 0;
        while !particles.is_empty() {
            age_particles(&mut particles, &tuning);
            frames += 1;
            assert!(frames <= 60, "puff never expired");
        }
        assert!((49..=51).contains(&frames), "expired after {frames} frames");
    }

    #[test]
    fn test_adjacent_dead_particles_all_removed() {
        // In-place splicing would skip the second of two neighbours dying together
        let tuning = Tuning::default();
        let mut particles = vec![
            puff(0.01, 1.0),
            puff(0.02, 1.0),
            puff(8.0, 1.0),
            puff(8.0, 0.01),
            puff(8.0, 0.015),
        ];
        age_particles(&mut particles, &tuning);
        assert_eq!(particles.len(), 1);
        assert!((particles[0].size - 7.95).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn prop_aging_is_linear(size in 5.0f32..10.0, k in 0usize..40) {
            let tuning = Tuning::default();
            let mut particles = vec![puff(size, 1.0)];
            for _ in 0..k {
                age_particles(&mut particles, &tuning);
            }
            let expected_size = size - 0.05 * k as f32;
            let expected_opacity = 1.0 - 0.02 * k as f32;
            if expected_size > 1e-3 && expected_opacity > 1e-3 {
                prop_assert_eq!(particles.len(), 1);
                prop_assert!((particles[0].size - expected_size).abs() < 1e-3);
                prop_assert!((particles[0].opacity - expected_opacity).abs() < 1e-3);
            }
        }

        #[test]
        fn prop_no_dead_particle_survives(sizes in prop::collection::vec(0.0f32..10.0, 0..30)) {
            let tuning = Tuning::default();
            let mut particles: Vec<Particle> = sizes.iter().map(|&s| puff(s, 1.0)).collect();
            for _ in 0..10 {
                age_particles(&mut particles, &tuning);
                prop_assert!(particles.iter().all(|p| p.size > 0.0 && p.opacity > 0.0));
            }
        }
    }
}
