// Host-side tests for a whole scene session. These never touch the DOM: the
// clock is a plain counter and randomness comes from a seeded generator.

#![allow(unused_crate_dependencies)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use swamp_vibes::SwampConfig;
use swamp_vibes::SwampState;
use swamp_vibes::components::swamp::motion::{Direction, Position, Velocity};
use swamp_vibes::components::swamp::viewport::Viewport;

const FRAME_MS: f64 = 16.0;

fn session(seed: u64) -> (SwampState, StdRng) {
	let mut seeded = StdRng::seed_from_u64(seed);
	let state = {
		let mut rng = || seeded.random::<f64>();
		SwampState::new(
			SwampConfig::default(),
			Viewport::new(1080.0, 800.0),
			0.0,
			&mut rng,
		)
	};
	(state, seeded)
}

#[test]
fn session_starts_from_defaults() {
	let (state, _) = session(1);
	assert_eq!(state.position, Position { x: 100.0, y: 100.0 });
	assert_eq!(state.velocity, Velocity { vx: 3.0, vy: 2.0 });
	assert_eq!(state.direction, Direction::Right);
	assert_eq!(state.fireflies.len(), 20);
	assert!(state.trail.is_empty());
	assert!(state.speech_bubble().is_none());
}

#[test]
fn first_tick_moves_and_leaves_a_footprint() {
	let (mut state, mut seeded) = session(2);
	let mut rng = || seeded.random::<f64>();
	state.tick(FRAME_MS, &mut rng);

	assert_eq!(state.position, Position { x: 103.0, y: 102.0 });
	assert_eq!(state.velocity, Velocity { vx: 3.0, vy: 2.0 });
	let marks: Vec<_> = state.trail.iter().collect();
	assert_eq!(marks.len(), 1);
	assert_eq!((marks[0].x, marks[0].y), (128.0, 192.0));
	assert_eq!(marks[0].rotation, 0.0);
}

#[test]
fn long_run_keeps_every_invariant() {
	let (mut state, mut seeded) = session(3);
	let mut rng = || seeded.random::<f64>();
	let config = SwampConfig::default();
	let (max_x, max_y) = (1080.0 - 80.0, 800.0 - 100.0 - 60.0);

	let mut highest_id = None;
	let mut bubble_frames = 0;
	let mut now = 0.0;
	while now < 60_000.0 {
		now += FRAME_MS;
		state.tick(now, &mut rng);

		assert!((0.0..=max_x).contains(&state.position.x));
		assert!((0.0..=max_y).contains(&state.position.y));
		let speed = state.velocity.magnitude();
		assert!(speed >= config.motion.min_speed - 1e-9);
		assert!(speed <= config.motion.max_speed + 1e-9);
		assert_eq!(state.direction, Direction::from_vx(state.velocity.vx));

		assert!(state.trail.len() <= 16);
		let ids: Vec<u64> = state.trail.iter().map(|m| m.id).collect();
		assert!(ids.windows(2).all(|w| w[0] < w[1]));
		if let Some(&newest) = ids.last() {
			if let Some(prev) = highest_id {
				assert!(newest >= prev);
			}
			highest_id = Some(newest);
		}
		for mark in state.trail.iter() {
			assert_eq!(mark.is_faded(), now >= mark.fade_at);
		}

		if state.speech_bubble().is_some() {
			bubble_frames += 1;
		}
	}

	// Gaps are under ~10s, so at least five announcements of ~2s each.
	assert!(bubble_frames * FRAME_MS as usize >= 5 * 2000 - 5 * 16);
}

#[test]
fn bubble_follows_the_character() {
	let (mut state, mut seeded) = session(4);
	let mut rng = || seeded.random::<f64>();
	let mut now = 0.0;
	while state.speech_bubble().is_none() {
		now += FRAME_MS;
		state.tick(now, &mut rng);
		assert!(now <= 10_016.0, "no announcement within the jitter window");
	}

	let (_, (x, y)) = state.speech_bubble().unwrap();
	let offset = match state.direction {
		Direction::Right => 70.0,
		Direction::Left => -120.0,
	};
	assert_eq!((x, y), (state.position.x + offset, state.position.y - 20.0));
}

#[test]
fn shrinking_window_pulls_character_back() {
	let (mut state, _) = session(5);
	state.position = Position { x: 500.0, y: 500.0 };
	let velocity = state.velocity;

	state.resize(Viewport::new(400.0, 2000.0));

	assert_eq!(state.position, Position { x: 320.0, y: 500.0 });
	assert_eq!(state.velocity, velocity);
	assert_eq!(state.viewport, Viewport::new(400.0, 2000.0));
}

#[test]
fn resize_then_tick_lands_inside_new_bounds() {
	let (mut state, mut seeded) = session(6);
	let mut rng = || seeded.random::<f64>();
	state.position = Position { x: 900.0, y: 600.0 };
	state.resize(Viewport::new(300.0, 300.0));
	state.tick(FRAME_MS, &mut rng);

	assert!((0.0..=220.0).contains(&state.position.x));
	assert!((0.0..=140.0).contains(&state.position.y));
}
