//! Ambient fireflies for visual atmosphere.

use std::f64::consts::TAU;

use super::jitter::RandomSource;

/// A single firefly. Positions are percentages of the viewport so the field
/// survives resizes without regeneration.
#[derive(Clone, Debug, PartialEq)]
pub struct Firefly {
	pub id: usize,
	/// Horizontal position, 0..=100 percent.
	pub x: f64,
	/// Vertical position, 10..=80 percent.
	pub y: f64,
	/// Seconds before the pulse starts.
	pub delay: f64,
	/// Seconds per pulse cycle.
	pub duration: f64,
	/// Core radius in pixels.
	pub size: f64,
}

impl Firefly {
	/// Pixel position on a `width` x `height` surface.
	pub fn screen_position(&self, width: f64, height: f64) -> (f64, f64) {
		(self.x / 100.0 * width, self.y / 100.0 * height)
	}

	/// Opacity at `time` seconds since the field appeared.
	pub fn pulse_alpha(&self, time: f64) -> f64 {
		pulse(time, self.delay, self.duration)
	}
}

/// Breathing factor in `[0.5, 1.0]`: 1.0 until `delay` seconds have passed,
/// then dipping to 0.5 halfway through each `period`.
pub fn pulse(time: f64, delay: f64, period: f64) -> f64 {
	let elapsed = time - delay;
	if elapsed <= 0.0 || period <= 0.0 {
		return 1.0;
	}
	let phase = (elapsed / period).fract();
	0.75 + 0.25 * (phase * TAU).cos()
}

/// Immutable set of fireflies generated once per session.
#[derive(Clone, Debug, Default)]
pub struct FireflyField {
	fireflies: Vec<Firefly>,
}

impl FireflyField {
	/// Scatter `count` fireflies with independently randomized attributes.
	pub fn generate(count: usize, rng: &mut impl RandomSource) -> Self {
		let fireflies = (0..count)
			.map(|id| Firefly {
				id,
				x: rng.next_f64() * 100.0,
				y: rng.range(10.0, 80.0),
				delay: rng.range(0.0, 5.0),
				duration: rng.range(2.0, 5.0),
				size: rng.range(3.0, 7.0),
			})
			.collect();
		Self { fireflies }
	}

	pub fn iter(&self) -> impl Iterator<Item = &Firefly> {
		self.fireflies.iter()
	}

	pub fn len(&self) -> usize {
		self.fireflies.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fireflies.is_empty()
	}
}
