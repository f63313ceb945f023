//! Property tests for the simulation's invariants

use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use smash_runner::Tuning;
use smash_runner::sim::{Aabb, GamePhase, GameState, TickInput, Viewport, tick};

const DT: f64 = 1000.0 / 60.0;

fn aabb(x: f32, y: f32, w: f32, h: f32) -> Aabb {
    Aabb::new(glam::Vec2::new(x, y), glam::Vec2::new(w, h))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn intersects_is_symmetric(
        ax in -500.0f32..500.0, ay in -500.0f32..500.0, aw in 1.0f32..100.0, ah in 1.0f32..100.0,
        bx in -500.0f32..500.0, by in -500.0f32..500.0, bw in 1.0f32..100.0, bh in 1.0f32..100.0,
    ) {
        let a = aabb(ax, ay, aw, ah);
        let b = aabb(bx, by, bw, bh);
        prop_assert_eq!(a.intersects(&b), b.intersects(&a));
    }

    #[test]
    fn touching_boxes_never_intersect(
        x in -500.0f32..500.0, y in -500.0f32..500.0, w in 1.0f32..100.0, h in 1.0f32..100.0,
        other in 1.0f32..100.0,
    ) {
        let a = aabb(x, y, w, h);
        let right = aabb(a.right(), y, other, other);
        let below = aabb(x, a.bottom(), other, other);
        prop_assert!(!a.intersects(&right));
        prop_assert!(!a.intersects(&below));
    }

    #[test]
    fn run_invariants_hold(
        seed in any::<u64>(),
        jumps in prop::collection::vec(any::<bool>(), 1..900)
    ) {
        let mut state = GameState::new(Viewport::new(800.0, 600.0), Tuning::default());
        let mut rng = Pcg32::seed_from_u64(seed);

        for jump in jumps {
            let before_phase = state.phase;
            let before = (state.score, state.level, state.scroll_speed);

            tick(&mut state, &TickInput { jump }, DT, &mut rng);

            let rest = state.ground_y - state.player.size.y;
            prop_assert!(state.player.pos.y <= rest);
            prop_assert!(state.scroll_speed <= 12.0);

            if before_phase == GamePhase::Playing && state.phase != GamePhase::Waiting {
                prop_assert!(state.score >= before.0);
                prop_assert!(state.level >= before.1);
                prop_assert!(state.scroll_speed >= before.2);
            }

            if before_phase == GamePhase::GameOver && state.phase == GamePhase::Waiting {
                prop_assert_eq!(state.score, 0);
                prop_assert_eq!(state.level, 1);
                prop_assert_eq!(state.scroll_speed, 4.0);
                prop_assert!(state.obstacles.is_empty());
                prop_assert!(state.collectibles.is_empty());
                prop_assert!(state.particles.is_empty());
            }

            for obstacle in &state.obstacles {
                prop_assert_eq!(obstacle.pos.y + obstacle.size.y, state.ground_y);
            }
            state.events.clear();
        }
    }
}
