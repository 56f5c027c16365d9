//! Viewport geometry: walkable bounds and re-clamping on resize.

use super::config::SpriteConfig;
use super::motion::{Bounds, Position};

/// Size of the rendering surface in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

impl Viewport {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Walkable area for the character's top-left corner: the surface minus
	/// the sprite and the footer strip.
	pub fn bounds(&self, sprite: &SpriteConfig) -> Bounds {
		Bounds::new(
			self.width - sprite.width,
			self.height - sprite.height - sprite.footer_height,
		)
	}

	/// Pull `position` back inside after the surface shrank.
	///
	/// Only ever moves the character up/left. On a surface smaller than the
	/// sprite the result may be negative; the next tick's wall check brings it
	/// back to zero.
	pub fn clamp(&self, position: Position, sprite: &SpriteConfig) -> Position {
		Position {
			x: position.x.min(self.width - sprite.width),
			y: position.y.min(self.height - sprite.resize_reserved_height),
		}
	}
}
