//! Speech bubble that pops up on a jittered schedule.
//!
//! The announcer is a two-state machine polled with the current time. Each
//! fire picks a phrase, shows it for `display_ms`, and schedules the next fire
//! `interval_min_ms + random(0, interval_jitter_ms)` later.

use log::debug;

use super::config::QuoteConfig;
use super::jitter::RandomSource;
use super::motion::{Direction, Position};

/// Horizontal offset of the bubble when the character faces right.
const ANCHOR_RIGHT_X: f64 = 70.0;
/// Horizontal offset of the bubble when the character faces left.
const ANCHOR_LEFT_X: f64 = -120.0;
const ANCHOR_Y: f64 = -20.0;

#[derive(Clone, Debug, PartialEq)]
enum Phase {
	Idle,
	Visible { quote: usize, hide_at: f64 },
}

/// The announcement currently on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Announcement<'a> {
	pub text: &'a str,
}

/// Drives the speech bubble lifecycle.
#[derive(Clone, Debug)]
pub struct QuoteAnnouncer {
	config: QuoteConfig,
	phase: Phase,
	next_fire_at: f64,
}

impl QuoteAnnouncer {
	/// Start hidden, with the first fire one randomized interval after `now`.
	pub fn new(config: QuoteConfig, now: f64, rng: &mut impl RandomSource) -> Self {
		let mut announcer = Self {
			config,
			phase: Phase::Idle,
			next_fire_at: now,
		};
		announcer.next_fire_at = now + announcer.draw_interval(rng);
		announcer
	}

	fn draw_interval(&self, rng: &mut impl RandomSource) -> f64 {
		self.config.interval_min_ms + rng.next_f64() * self.config.interval_jitter_ms
	}

	/// Advance the state machine to `now`.
	///
	/// Hiding is handled before firing, so a fire landing on the same instant
	/// as a hide leaves the new quote visible. A fire while a quote is still
	/// up replaces it and restarts the display window.
	pub fn update(&mut self, now: f64, rng: &mut impl RandomSource) {
		if let Phase::Visible { hide_at, .. } = self.phase {
			if now >= hide_at {
				self.phase = Phase::Idle;
			}
		}

		if now >= self.next_fire_at {
			self.fire(now, rng);
		}
	}

	fn fire(&mut self, now: f64, rng: &mut impl RandomSource) {
		let quote = rng.pick_index(self.config.phrases.len());
		debug!(
			"swamp: announcing {:?}",
			self.config.phrases.get(quote).map(String::as_str).unwrap_or_default()
		);
		self.phase = Phase::Visible {
			quote,
			hide_at: now + self.config.display_ms,
		};
		self.next_fire_at = now + self.draw_interval(rng);
	}

	pub fn is_visible(&self) -> bool {
		matches!(self.phase, Phase::Visible { .. })
	}

	/// The visible announcement, if any.
	pub fn current(&self) -> Option<Announcement<'_>> {
		match self.phase {
			Phase::Visible { quote, .. } => self
				.config
				.phrases
				.get(quote)
				.map(|text| Announcement { text }),
			Phase::Idle => None,
		}
	}

	/// Time (ms) of the next scheduled fire.
	pub fn next_fire_at(&self) -> f64 {
		self.next_fire_at
	}
}

/// Top-left of the bubble for a character at `position` facing `direction`.
/// Read at render time so the bubble follows the character.
pub fn bubble_anchor(position: Position, direction: Direction) -> (f64, f64) {
	let dx = match direction {
		Direction::Right => ANCHOR_RIGHT_X,
		Direction::Left => ANCHOR_LEFT_X,
	};
	(position.x + dx, position.y + ANCHOR_Y)
}
