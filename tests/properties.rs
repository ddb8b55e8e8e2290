//! Property tests for the frame advance invariants

use glam::Vec2;
use proptest::prelude::*;

use polyarena::sim::{Actor, ArenaBounds, Heading, StepConfig, advance, rectangle};

const BOUNDS: ArenaBounds = ArenaBounds {
    width: 200.0,
    height: 200.0,
};

fn square(pos: Vec2, heading: f32, speed: f32) -> Actor {
    Actor::polygon(pos, heading, speed, rectangle(10.0, 10.0)).unwrap()
}

proptest! {
    #[test]
    fn heading_always_in_range(degrees in -1.0e6f32..1.0e6f32) {
        let heading = Heading::new(degrees).degrees();
        prop_assert!((0.0..360.0).contains(&heading));
    }

    #[test]
    fn trail_length_is_min_of_frames_and_capacity(frames in 0usize..40, capacity in 0usize..12) {
        let mut actors = vec![square(Vec2::new(100.0, 100.0), 37.0, 3.0)];
        let config = StepConfig { trail_length: capacity, ..Default::default() };

        for _ in 0..frames {
            advance(&mut actors, 0, BOUNDS, &config);
        }

        prop_assert_eq!(actors[0].trail.len(), frames.min(capacity));
        if let Some(newest) = actors[0].trail.first() {
            prop_assert_eq!(*newest, actors[0].pos);
        }
    }

    #[test]
    fn speed_sum_is_preserved(
        x in 20.0f32..180.0,
        y in 20.0f32..180.0,
        heading in 0.0f32..360.0,
        speed_a in 0u8..10,
        speed_b in 0u8..10,
    ) {
        let mut actors = vec![
            square(Vec2::new(x, y), heading, f32::from(speed_a)),
            square(Vec2::new(95.0, 95.0), 0.0, f32::from(speed_b)),
        ];
        let before = actors[0].speed + actors[1].speed;

        let report = advance(&mut actors, 0, BOUNDS, &StepConfig::default());

        prop_assert_eq!(actors[0].speed + actors[1].speed, before);
        if speed_a == speed_b {
            prop_assert_eq!(actors[0].speed, f32::from(speed_a));
            prop_assert_eq!(actors[1].speed, f32::from(speed_b));
        } else if !report.contacts.is_empty() {
            prop_assert_eq!((actors[0].speed - f32::from(speed_a)).abs(), 1.0);
        }
    }

    #[test]
    fn backtrack_clears_contact(
        dx in -4.0f32..4.0,
        dy in -4.0f32..4.0,
        heading in 0.0f32..360.0,
        speed in 1.0f32..8.0,
    ) {
        let target = square(Vec2::new(100.0, 100.0), 0.0, -1.0);
        let velocity = polyarena::heading_to_velocity(heading, speed);
        // Start so that this frame's translation lands on top of the target
        let start = target.pos + Vec2::new(dx, dy) - velocity;
        let mut actors = vec![square(start, heading, speed), target];

        let report = advance(&mut actors, 0, BOUNDS, &StepConfig::default());

        prop_assert_eq!(report.contacts.len(), 1);
        prop_assert!(!report.contacts[0].unresolved);
        prop_assert!(!actors[0].has_contact(&actors[1]));
    }
}
