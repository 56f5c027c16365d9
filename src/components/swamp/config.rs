//! Tunable constants for the scene.
//!
//! Everything here has a sensible `Default`, and every struct deserializes with
//! `#[serde(default)]`, so a page can override a single field through the
//! `swamp-config` JSON block without restating the rest.

use serde::Deserialize;

/// Speed limits and initial motion of the character.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
	/// Lower bound on velocity magnitude (px per frame).
	pub min_speed: f64,
	/// Upper bound on velocity magnitude (px per frame).
	pub max_speed: f64,
	/// Bounce factor range applied to the reflected component.
	pub bounce_min: f64,
	pub bounce_max: f64,
	/// Amplitude of the cross-axis perturbation added on a bounce.
	pub cross_jitter: f64,
	pub start_x: f64,
	pub start_y: f64,
	pub start_vx: f64,
	pub start_vy: f64,
}

impl Default for MotionConfig {
	fn default() -> Self {
		Self {
			min_speed: 2.0,
			max_speed: 6.0,
			bounce_min: 0.9,
			bounce_max: 1.1,
			cross_jitter: 1.0,
			start_x: 100.0,
			start_y: 100.0,
			start_vx: 3.0,
			start_vy: 2.0,
		}
	}
}

/// Character sprite footprint on screen, used to derive viewport bounds.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
	pub width: f64,
	pub height: f64,
	/// Height of the footer strip the character never walks into.
	pub footer_height: f64,
	/// Vertical space reserved when re-clamping after a resize.
	pub resize_reserved_height: f64,
}

impl Default for SpriteConfig {
	fn default() -> Self {
		Self {
			width: 80.0,
			height: 100.0,
			footer_height: 60.0,
			resize_reserved_height: 160.0,
		}
	}
}

/// Footprint trail timing and layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrailConfig {
	/// Minimum time between two footprints (ms).
	pub min_interval_ms: f64,
	/// Maximum number of footprints kept alive.
	pub capacity: usize,
	/// Delay before a footprint turns transparent (ms).
	pub fade_delay_ms: f64,
	/// Duration of the visual fade once the delay has elapsed (ms).
	pub fade_transition_ms: f64,
	pub initial_opacity: f64,
	/// Offset from the character's top-left corner to its feet.
	pub offset_x: f64,
	pub offset_y: f64,
}

impl Default for TrailConfig {
	fn default() -> Self {
		Self {
			min_interval_ms: 200.0,
			capacity: 16,
			fade_delay_ms: 2000.0,
			fade_transition_ms: 1000.0,
			initial_opacity: 0.6,
			offset_x: 25.0,
			offset_y: 90.0,
		}
	}
}

/// Ambient firefly field.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FireflyConfig {
	pub count: usize,
}

impl Default for FireflyConfig {
	fn default() -> Self {
		Self { count: 20 }
	}
}

/// Speech bubble timing and phrase list.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct QuoteConfig {
	/// How long a bubble stays up (ms).
	pub display_ms: f64,
	/// Shortest gap between two bubbles (ms).
	pub interval_min_ms: f64,
	/// Random extra gap added on top of `interval_min_ms` (ms).
	pub interval_jitter_ms: f64,
	pub phrases: Vec<String>,
}

impl Default for QuoteConfig {
	fn default() -> Self {
		Self {
			display_ms: 2000.0,
			interval_min_ms: 5000.0,
			interval_jitter_ms: 5000.0,
			phrases: [
				"DONKEY!",
				"What are ye doin' in mah swamp?!",
				"Ogres are like onions",
				"Better out than in!",
				"This is the part where you run away",
				"I'm making waffles!",
				"Do the roar",
			]
			.into_iter()
			.map(String::from)
			.collect(),
		}
	}
}

/// Complete scene configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwampConfig {
	pub motion: MotionConfig,
	pub sprite: SpriteConfig,
	pub trail: TrailConfig,
	pub fireflies: FireflyConfig,
	pub quotes: QuoteConfig,
}

impl SwampConfig {
	/// Parse a (possibly partial) JSON override.
	pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str::<Self>(text).map(Self::sanitized)
	}

	/// Repair values that would break the scene's invariants.
	///
	/// Swapped ranges are reordered, non-positive speeds fall back to the
	/// defaults and an empty trail or phrase list is restored.
	pub fn sanitized(mut self) -> Self {
		let defaults = Self::default();

		let m = &mut self.motion;
		if m.min_speed.is_nan() || m.min_speed <= 0.0 {
			m.min_speed = defaults.motion.min_speed;
		}
		if m.max_speed.is_nan() || m.max_speed <= 0.0 {
			m.max_speed = defaults.motion.max_speed;
		}
		if m.min_speed > m.max_speed {
			std::mem::swap(&mut m.min_speed, &mut m.max_speed);
		}
		if m.bounce_min > m.bounce_max {
			std::mem::swap(&mut m.bounce_min, &mut m.bounce_max);
		}
		if m.start_vx == 0.0 && m.start_vy == 0.0 {
			m.start_vx = defaults.motion.start_vx;
			m.start_vy = defaults.motion.start_vy;
		}

		if self.trail.capacity == 0 {
			self.trail.capacity = defaults.trail.capacity;
		}
		if self.quotes.phrases.is_empty() {
			self.quotes.phrases = defaults.quotes.phrases;
		}
		self.quotes.interval_min_ms = self.quotes.interval_min_ms.max(0.0);
		self.quotes.interval_jitter_ms = self.quotes.interval_jitter_ms.max(0.0);

		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn partial_override_keeps_defaults() {
		let config = SwampConfig::from_json(r#"{ "motion": { "max_speed": 9.5 } }"#).unwrap();
		assert_eq!(config.motion.max_speed, 9.5);
		assert_eq!(config.motion.min_speed, 2.0);
		assert_eq!(config.trail, TrailConfig::default());
		assert_eq!(config.quotes.phrases.len(), 7);
	}

	#[test]
	fn empty_object_is_default() {
		assert_eq!(SwampConfig::from_json("{}").unwrap(), SwampConfig::default());
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(SwampConfig::from_json("{ motion: ").is_err());
	}

	#[test]
	fn sanitize_repairs_inverted_ranges() {
		let config = SwampConfig::from_json(
			r#"{
				"motion": { "min_speed": 8, "max_speed": 3, "bounce_min": 1.2, "bounce_max": 0.8 },
				"trail": { "capacity": 0 },
				"quotes": { "phrases": [] }
			}"#,
		)
		.unwrap();
		assert_eq!(config.motion.min_speed, 3.0);
		assert_eq!(config.motion.max_speed, 8.0);
		assert_eq!(config.motion.bounce_min, 0.8);
		assert_eq!(config.motion.bounce_max, 1.2);
		assert_eq!(config.trail.capacity, 16);
		assert!(!config.quotes.phrases.is_empty());
	}

	#[test]
	fn zero_start_velocity_is_replaced() {
		let config =
			SwampConfig::from_json(r#"{ "motion": { "start_vx": 0, "start_vy": 0 } }"#).unwrap();
		assert_eq!((config.motion.start_vx, config.motion.start_vy), (3.0, 2.0));
	}
}
