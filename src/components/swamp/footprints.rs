//! Fading footprint trail left behind the character.
//!
//! Footprints are throttled to one per `min_interval_ms`, capped at
//! `capacity` entries (oldest dropped first), and each carries a `fade_at`
//! deadline instead of a timer. `update` flips expired footprints to zero
//! opacity; `prune` drops them once the visual fade has finished.

use std::collections::VecDeque;

use super::config::TrailConfig;

/// A single trail mark.
#[derive(Clone, Debug, PartialEq)]
pub struct Footprint {
	/// Monotonic, never reused within a session.
	pub id: u64,
	pub x: f64,
	pub y: f64,
	/// Degrees; 0 when walking right, 180 when walking left.
	pub rotation: f64,
	/// Target opacity. Starts at `initial_opacity`, becomes 0 once faded.
	pub opacity: f64,
	/// Time (ms) after which the footprint turns transparent.
	pub fade_at: f64,
}

impl Footprint {
	pub fn is_faded(&self) -> bool {
		self.opacity <= 0.0
	}
}

/// Bounded, time-decaying sequence of footprints.
#[derive(Clone, Debug)]
pub struct FootprintTrail {
	marks: VecDeque<Footprint>,
	next_id: u64,
	last_created: Option<f64>,
	config: TrailConfig,
}

impl FootprintTrail {
	pub fn new(config: TrailConfig) -> Self {
		Self {
			marks: VecDeque::with_capacity(config.capacity + 1),
			next_id: 0,
			last_created: None,
			config,
		}
	}

	/// Record a footprint under a character at `(x, y)` moving with `vx`.
	///
	/// Returns the new id, or `None` when throttled. The very first call always
	/// succeeds.
	pub fn try_add(&mut self, x: f64, y: f64, vx: f64, now: f64) -> Option<u64> {
		if let Some(last) = self.last_created {
			if now - last < self.config.min_interval_ms {
				return None;
			}
		}
		self.last_created = Some(now);

		let id = self.next_id;
		self.next_id += 1;

		self.marks.push_back(Footprint {
			id,
			x: x + self.config.offset_x,
			y: y + self.config.offset_y,
			rotation: if vx > 0.0 { 0.0 } else { 180.0 },
			opacity: self.config.initial_opacity,
			fade_at: now + self.config.fade_delay_ms,
		});
		while self.marks.len() > self.config.capacity {
			self.marks.pop_front();
		}

		Some(id)
	}

	/// Fade every footprint whose deadline has passed. Returns how many changed.
	pub fn update(&mut self, now: f64) -> usize {
		let mut faded = 0;
		for mark in self.marks.iter_mut() {
			if !mark.is_faded() && now >= mark.fade_at {
				mark.opacity = 0.0;
				faded += 1;
			}
		}
		faded
	}

	/// Fade a single footprint immediately. Unknown ids are ignored.
	pub fn fade(&mut self, id: u64) -> bool {
		match self.marks.iter_mut().find(|m| m.id == id) {
			Some(mark) => {
				mark.opacity = 0.0;
				true
			}
			None => false,
		}
	}

	/// Drop footprints whose fade transition has completed.
	pub fn prune(&mut self, now: f64) {
		let transition = self.config.fade_transition_ms;
		self.marks
			.retain(|m| !(m.is_faded() && now >= m.fade_at + transition));
	}

	/// Opacity to draw right now, easing from `initial_opacity` to 0 over the
	/// fade transition.
	pub fn visual_opacity(&self, mark: &Footprint, now: f64) -> f64 {
		if !mark.is_faded() {
			return mark.opacity;
		}
		let transition = self.config.fade_transition_ms;
		if transition <= 0.0 {
			return 0.0;
		}
		let t = ((now - mark.fade_at) / transition).clamp(0.0, 1.0);
		self.config.initial_opacity * (1.0 - t)
	}

	pub fn iter(&self) -> impl Iterator<Item = &Footprint> {
		self.marks.iter()
	}

	pub fn len(&self) -> usize {
		self.marks.len()
	}

	pub fn is_empty(&self) -> bool {
		self.marks.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn trail() -> FootprintTrail {
		FootprintTrail::new(TrailConfig::default())
	}

	#[test]
	fn first_footprint_is_offset_under_the_feet() {
		let mut t = trail();
		assert_eq!(t.try_add(100.0, 50.0, 3.0, 0.0), Some(0));
		let mark = t.iter().next().unwrap();
		assert_eq!((mark.x, mark.y), (125.0, 140.0));
		assert_eq!(mark.rotation, 0.0);
		assert_eq!(mark.opacity, 0.6);
		assert_eq!(mark.fade_at, 2000.0);
	}

	#[test]
	fn walking_left_flips_rotation() {
		let mut t = trail();
		t.try_add(0.0, 0.0, -1.0, 0.0);
		t.try_add(0.0, 0.0, 0.0, 500.0);
		let rotations: Vec<f64> = t.iter().map(|m| m.rotation).collect();
		assert_eq!(rotations, vec![180.0, 180.0]);
	}

	#[test]
	fn attempts_inside_window_create_one() {
		let mut t = trail();
		let created = [1000.0, 1050.0, 1100.0, 1150.0, 1199.9]
			.into_iter()
			.filter_map(|now| t.try_add(0.0, 0.0, 1.0, now))
			.count();
		assert_eq!(created, 1);
		assert_eq!(t.len(), 1);
	}

	#[test]
	fn skipped_attempts_do_not_move_the_window() {
		let mut t = trail();
		assert!(t.try_add(0.0, 0.0, 1.0, 0.0).is_some());
		assert!(t.try_add(0.0, 0.0, 1.0, 150.0).is_none());
		// 200ms after the last *successful* creation, not after the skip.
		assert!(t.try_add(0.0, 0.0, 1.0, 200.0).is_some());
	}

	#[test]
	fn trail_is_capped_and_ids_keep_growing() {
		let mut t = trail();
		let mut last = None;
		for i in 0..40 {
			let id = t.try_add(i as f64, 0.0, 1.0, i as f64 * 200.0).unwrap();
			if let Some(prev) = last {
				assert!(id > prev);
			}
			last = Some(id);
			assert!(t.len() <= 16);
		}
		let ids: Vec<u64> = t.iter().map(|m| m.id).collect();
		assert_eq!(ids, (24..40).collect::<Vec<u64>>());
	}

	#[test]
	fn update_fades_after_delay() {
		let mut t = trail();
		t.try_add(0.0, 0.0, 1.0, 0.0);
		t.try_add(0.0, 0.0, 1.0, 1000.0);
		assert_eq!(t.update(1999.0), 0);
		assert_eq!(t.update(2000.0), 1);
		let opacities: Vec<f64> = t.iter().map(|m| m.opacity).collect();
		assert_eq!(opacities, vec![0.0, 0.6]);
		// Already faded marks are not counted twice.
		assert_eq!(t.update(3000.0), 1);
		assert_eq!(t.update(4000.0), 0);
	}

	#[test]
	fn fading_unknown_id_is_a_no_op() {
		let mut t = trail();
		for i in 0..20 {
			t.try_add(0.0, 0.0, 1.0, i as f64 * 200.0);
		}
		// Id 0 was truncated away.
		assert!(!t.fade(0));
		assert!(t.fade(19));
		assert_eq!(t.iter().filter(|m| m.is_faded()).count(), 1);
	}

	#[test]
	fn prune_waits_for_transition() {
		let mut t = trail();
		t.try_add(0.0, 0.0, 1.0, 0.0);
		t.update(2000.0);
		t.prune(2500.0);
		assert_eq!(t.len(), 1);
		t.prune(3000.0);
		assert!(t.is_empty());
	}

	#[test]
	fn visual_opacity_eases_out() {
		let mut t = trail();
		t.try_add(0.0, 0.0, 1.0, 0.0);
		t.update(2000.0);
		let mark = t.iter().next().unwrap().clone();
		assert!((t.visual_opacity(&mark, 2000.0) - 0.6).abs() < 1e-12);
		assert!((t.visual_opacity(&mark, 2500.0) - 0.3).abs() < 1e-12);
		assert_eq!(t.visual_opacity(&mark, 3500.0), 0.0);
	}
}
