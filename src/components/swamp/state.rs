//! Scene state for one page session.
//!
//! Created once when the component mounts, then mutated by the animation loop
//! (`tick`) and the window resize handler (`resize`). Every handler runs to
//! completion on the UI thread, so the state needs no locking.

use log::{debug, info};

use super::config::SwampConfig;
use super::fireflies::FireflyField;
use super::footprints::FootprintTrail;
use super::jitter::RandomSource;
use super::motion::{self, Direction, Position, Velocity};
use super::quotes::{self, Announcement, QuoteAnnouncer};
use super::viewport::Viewport;

/// Everything the renderer reads each frame.
pub struct SwampState {
	pub position: Position,
	pub velocity: Velocity,
	pub direction: Direction,
	pub viewport: Viewport,
	pub trail: FootprintTrail,
	pub fireflies: FireflyField,
	pub announcer: QuoteAnnouncer,
	/// Time (ms) the session started, for ambient animation clocks.
	pub started_at: f64,
	/// Time (ms) of the most recent tick.
	pub now: f64,
	config: SwampConfig,
}

impl SwampState {
	pub fn new(
		config: SwampConfig,
		viewport: Viewport,
		now: f64,
		rng: &mut impl RandomSource,
	) -> Self {
		let velocity = Velocity {
			vx: config.motion.start_vx,
			vy: config.motion.start_vy,
		};
		let fireflies = FireflyField::generate(config.fireflies.count, rng);
		let announcer = QuoteAnnouncer::new(config.quotes.clone(), now, rng);
		info!(
			"swamp: session started on {}x{} with {} fireflies",
			viewport.width,
			viewport.height,
			fireflies.len()
		);

		Self {
			position: Position {
				x: config.motion.start_x,
				y: config.motion.start_y,
			},
			velocity,
			direction: Direction::from_vx(velocity.vx),
			viewport,
			trail: FootprintTrail::new(config.trail.clone()),
			fireflies,
			announcer,
			started_at: now,
			now,
			config,
		}
	}

	/// Advance one frame: move, leave a footprint, expire fades, and poll the
	/// speech bubble schedule.
	pub fn tick(&mut self, now: f64, rng: &mut impl RandomSource) {
		self.now = now;

		let bounds = self.viewport.bounds(&self.config.sprite);
		let step = motion::step(self.position, self.velocity, bounds, &self.config.motion, rng);
		self.position = step.position;
		self.velocity = step.velocity;
		self.direction = step.direction;

		self.trail
			.try_add(step.position.x, step.position.y, step.velocity.vx, now);
		self.trail.update(now);
		self.trail.prune(now);

		self.announcer.update(now, rng);
	}

	/// Adopt a new surface size and pull the character back into view.
	pub fn resize(&mut self, viewport: Viewport) {
		debug!("swamp: resized to {}x{}", viewport.width, viewport.height);
		self.viewport = viewport;
		self.position = viewport.clamp(self.position, &self.config.sprite);
	}

	/// Speech bubble text and its top-left anchor, if one is showing.
	pub fn speech_bubble(&self) -> Option<(Announcement<'_>, (f64, f64))> {
		self.announcer
			.current()
			.map(|a| (a, quotes::bubble_anchor(self.position, self.direction)))
	}

	/// Seconds since the session started.
	pub fn elapsed_secs(&self) -> f64 {
		(self.now - self.started_at) / 1000.0
	}

	pub fn config(&self) -> &SwampConfig {
		&self.config
	}
}
