//! Per-frame bounce physics for the wandering character.
//!
//! Motion is linear between walls. Hitting a wall reflects the matching
//! velocity component with a little random gain and nudges the other
//! component, after which the overall speed is kept within
//! `[min_speed, max_speed]` so the character never stalls or races off.

use super::config::MotionConfig;
use super::jitter::RandomSource;

/// Top-left anchor of the character, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Position {
	pub x: f64,
	pub y: f64,
}

/// Signed per-frame displacement.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
	pub vx: f64,
	pub vy: f64,
}

impl Velocity {
	pub fn magnitude(&self) -> f64 {
		self.vx.hypot(self.vy)
	}
}

/// Facing of the sprite, derived from the horizontal velocity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
	#[default]
	Right,
	Left,
}

impl Direction {
	/// `Right` only for strictly positive `vx`; a standstill counts as `Left`.
	pub fn from_vx(vx: f64) -> Self {
		if vx > 0.0 { Self::Right } else { Self::Left }
	}

	/// +1 or -1, for mirroring transforms.
	pub fn sign(self) -> f64 {
		match self {
			Self::Right => 1.0,
			Self::Left => -1.0,
		}
	}
}

/// Largest legal top-left coordinate on each axis. Both are kept `>= 0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
	pub max_x: f64,
	pub max_y: f64,
}

impl Bounds {
	pub fn new(max_x: f64, max_y: f64) -> Self {
		Self {
			max_x: max_x.max(0.0),
			max_y: max_y.max(0.0),
		}
	}
}

/// Result of advancing the character by one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
	pub position: Position,
	pub velocity: Velocity,
	pub direction: Direction,
}

/// Outcome of testing one axis against its walls.
struct AxisHit {
	coord: f64,
	hit: bool,
}

fn check_axis(coord: f64, max: f64) -> AxisHit {
	if coord <= 0.0 {
		AxisHit { coord: 0.0, hit: true }
	} else if coord >= max {
		AxisHit { coord: max, hit: true }
	} else {
		AxisHit { coord, hit: false }
	}
}

/// Advance position and velocity by one tick.
///
/// When both axes hit a wall in the same frame (a corner), each reflection is
/// kept and the cross-axis jitter is applied on top of the already reflected
/// component.
pub fn step(
	position: Position,
	velocity: Velocity,
	bounds: Bounds,
	config: &MotionConfig,
	rng: &mut impl RandomSource,
) -> Step {
	let x = check_axis(position.x + velocity.vx, bounds.max_x);
	let y = check_axis(position.y + velocity.vy, bounds.max_y);
	let mut next = velocity;

	if x.hit {
		next.vx = -velocity.vx * rng.range(config.bounce_min, config.bounce_max);
		next.vy += rng.jitter(config.cross_jitter);
	}
	if y.hit {
		next.vy = -next.vy * rng.range(config.bounce_min, config.bounce_max);
		next.vx += rng.jitter(config.cross_jitter);
	}

	let next = clamp_speed(next, config.min_speed, config.max_speed);

	Step {
		position: Position {
			x: x.coord,
			y: y.coord,
		},
		velocity: next,
		direction: Direction::from_vx(next.vx),
	}
}

/// Rescale `velocity` so its magnitude lies in `[min_speed, max_speed]`.
///
/// A zero vector has no direction to preserve, so it becomes
/// `(min_speed, 0)`.
pub fn clamp_speed(velocity: Velocity, min_speed: f64, max_speed: f64) -> Velocity {
	let speed = velocity.magnitude();
	if !speed.is_normal() {
		return Velocity {
			vx: min_speed,
			vy: 0.0,
		};
	}

	let target = if speed > max_speed {
		max_speed
	} else if speed < min_speed {
		min_speed
	} else {
		return velocity;
	};

	Velocity {
		vx: velocity.vx / speed * target,
		vy: velocity.vy / speed * target,
	}
}

#[cfg(test)]
mod tests {
	use rand::rngs::StdRng;
	use rand::{Rng, SeedableRng};

	use super::*;

	const EPS: f64 = 1e-9;

	fn cfg() -> MotionConfig {
		MotionConfig::default()
	}

	#[test]
	fn free_flight_moves_linearly() {
		let mut never = || -> f64 { panic!("no randomness expected without a bounce") };
		let step = step(
			Position { x: 0.0, y: 100.0 },
			Velocity { vx: 3.0, vy: 2.0 },
			Bounds::new(1000.0, 800.0),
			&cfg(),
			&mut never,
		);
		assert_eq!(step.position, Position { x: 3.0, y: 102.0 });
		assert_eq!(step.velocity, Velocity { vx: 3.0, vy: 2.0 });
		assert_eq!(step.direction, Direction::Right);
	}

	#[test]
	fn right_wall_reflects_with_gain() {
		for sample in [0.0_f64, 0.25, 0.5, 0.75, 0.999_999] {
			let mut rng = || sample;
			let step = step(
				Position { x: 998.0, y: 100.0 },
				Velocity { vx: 3.0, vy: 2.0 },
				Bounds::new(920.0, 800.0),
				&cfg(),
				&mut rng,
			);
			assert_eq!(step.position.x, 920.0);
			// Reflected vx is in [-3.3, -2.7] and speed stays in range, so no
			// rescale happens for vy within [1, 3).
			assert!(step.velocity.vx <= -2.7 + EPS);
			assert!(step.velocity.vx > -3.3);
			assert_eq!(step.direction, Direction::Left);
		}
	}

	#[test]
	fn left_wall_clamps_to_zero() {
		let mut rng = || 0.5_f64;
		let step = step(
			Position { x: 1.0, y: 50.0 },
			Velocity { vx: -4.0, vy: 0.0 },
			Bounds::new(500.0, 500.0),
			&cfg(),
			&mut rng,
		);
		assert_eq!(step.position.x, 0.0);
		// f = 1.0 and jitter = 0 at sample 0.5.
		assert!((step.velocity.vx - 4.0).abs() < EPS);
		assert!(step.velocity.vy.abs() < EPS);
		assert_eq!(step.direction, Direction::Right);
	}

	#[test]
	fn floor_reflects_vertical_and_nudges_horizontal() {
		let mut samples = [0.5_f64, 1.0].into_iter();
		let mut rng = || samples.next().unwrap();
		let step = step(
			Position { x: 200.0, y: 399.0 },
			Velocity { vx: 2.0, vy: 3.0 },
			Bounds::new(1000.0, 400.0),
			&cfg(),
			&mut rng,
		);
		assert_eq!(step.position.y, 400.0);
		assert!((step.velocity.vy + 3.0).abs() < EPS);
		assert!((step.velocity.vx - 3.0).abs() < EPS);
	}

	#[test]
	fn corner_hit_reflects_both_axes() {
		let mut rng = || 0.5_f64;
		let step = step(
			Position { x: 99.0, y: 99.0 },
			Velocity { vx: 3.0, vy: 3.0 },
			Bounds::new(100.0, 100.0),
			&cfg(),
			&mut rng,
		);
		assert_eq!(step.position, Position { x: 100.0, y: 100.0 });
		assert!(step.velocity.vx < 0.0);
		assert!(step.velocity.vy < 0.0);
	}

	#[test]
	fn clamp_speed_bounds_magnitude() {
		let fast = clamp_speed(Velocity { vx: 30.0, vy: 40.0 }, 2.0, 6.0);
		assert!((fast.magnitude() - 6.0).abs() < EPS);
		assert!((fast.vx / fast.vy - 0.75).abs() < EPS);

		let slow = clamp_speed(Velocity { vx: 0.3, vy: -0.4 }, 2.0, 6.0);
		assert!((slow.magnitude() - 2.0).abs() < EPS);
		assert!(slow.vy < 0.0);

		let ok = Velocity { vx: 3.0, vy: 2.0 };
		assert_eq!(clamp_speed(ok, 2.0, 6.0), ok);
	}

	#[test]
	fn clamp_speed_handles_standstill() {
		let v = clamp_speed(Velocity::default(), 2.0, 6.0);
		assert_eq!(v, Velocity { vx: 2.0, vy: 0.0 });
	}

	#[test]
	fn direction_treats_zero_as_left() {
		assert_eq!(Direction::from_vx(0.0), Direction::Left);
		assert_eq!(Direction::from_vx(-0.1), Direction::Left);
		assert_eq!(Direction::from_vx(0.1), Direction::Right);
		assert_eq!(Direction::Left.sign(), -1.0);
	}

	#[test]
	fn random_walk_respects_bounds_and_speed() {
		let mut seeded = StdRng::seed_from_u64(0x5eed);
		let mut rng = || seeded.random::<f64>();
		let config = cfg();
		let bounds = Bounds::new(640.0, 320.0);
		let mut position = Position { x: 100.0, y: 100.0 };
		let mut velocity = Velocity { vx: 3.0, vy: 2.0 };

		for _ in 0..20_000 {
			let next = step(position, velocity, bounds, &config, &mut rng);
			let speed = next.velocity.magnitude();
			assert!(speed >= config.min_speed - EPS && speed <= config.max_speed + EPS);
			assert!((0.0..=bounds.max_x).contains(&next.position.x));
			assert!((0.0..=bounds.max_y).contains(&next.position.y));
			position = next.position;
			velocity = next.velocity;
		}
	}

	#[test]
	fn zero_size_bounds_pin_to_origin() {
		let mut rng = || 0.3_f64;
		let bounds = Bounds::new(-50.0, -10.0);
		assert_eq!(bounds, Bounds::new(0.0, 0.0));
		let next = step(
			Position { x: 0.0, y: 0.0 },
			Velocity { vx: 2.0, vy: 2.0 },
			bounds,
			&cfg(),
			&mut rng,
		);
		assert_eq!(next.position, Position { x: 0.0, y: 0.0 });
	}
}
