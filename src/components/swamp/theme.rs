//! Visual theming for the swamp scene.
//!
//! Colors and per-layer styles consumed by the renderer.

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
	pub a: f64,
}

impl Color {
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// Scale the existing alpha by `factor`.
	pub fn fade(self, factor: f64) -> Self {
		Self {
			a: self.a * factor.clamp(0.0, 1.0),
			..self
		}
	}

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Night sky, fog and water behind the character.
#[derive(Clone, Debug)]
pub struct BackdropStyle {
	/// Vertical gradient stops (top, middle, bottom).
	pub sky: [Color; 3],
	/// Fog bands: (vertical position as fraction of height, band height px, color, period s, delay s).
	pub fog: Vec<(f64, f64, Color, f64, f64)>,
	/// Peak fog opacity.
	pub fog_opacity: f64,
	pub water: Color,
	/// Fraction of the height covered by water.
	pub water_height: f64,
	pub lily_pad: Color,
	pub lily_vein: Color,
	pub tree: Color,
	pub moon: Color,
	pub moon_glow: Color,
}

/// Firefly rendering.
#[derive(Clone, Debug)]
pub struct FireflyStyle {
	pub core: Color,
	pub glow: Color,
}

/// Footprint rendering.
#[derive(Clone, Debug)]
pub struct FootprintStyle {
	pub sole: Color,
	pub toes: Color,
}

/// Character sprite palette.
#[derive(Clone, Debug)]
pub struct CharacterStyle {
	pub skin: Color,
	pub skin_light: Color,
	pub skin_dark: Color,
	pub vest: Color,
	pub vest_seam: Color,
	pub eye_white: Color,
	pub iris: Color,
	pub boots: Color,
	/// Running bob amplitude (px) and period (s).
	pub bob_height: f64,
	pub bob_period: f64,
}

/// Speech bubble rendering.
#[derive(Clone, Debug)]
pub struct BubbleStyle {
	pub fill: Color,
	pub text: Color,
	pub font: &'static str,
	pub padding: f64,
	pub radius: f64,
	pub max_width: f64,
	pub line_height: f64,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub name: &'static str,
	pub backdrop: BackdropStyle,
	pub fireflies: FireflyStyle,
	pub footprints: FootprintStyle,
	pub character: CharacterStyle,
	pub bubble: BubbleStyle,
}

impl Theme {
	/// Murky night swamp (default)
	pub fn swamp() -> Self {
		Self {
			name: "swamp",
			backdrop: BackdropStyle {
				sky: [
					Color::rgb(26, 47, 26),
					Color::rgb(13, 31, 13),
					Color::rgb(10, 26, 10),
				],
				fog: vec![
					(0.25, 128.0, Color::rgb(45, 74, 45), 8.0, 0.0),
					(0.50, 96.0, Color::rgb(61, 90, 61), 12.0, 2.0),
					(0.75, 160.0, Color::rgb(29, 58, 29), 10.0, 4.0),
				],
				fog_opacity: 0.2,
				water: Color::rgb(26, 48, 32),
				water_height: 0.25,
				lily_pad: Color::rgba(45, 90, 45, 0.4),
				lily_vein: Color::rgba(26, 58, 26, 0.4),
				tree: Color::rgba(10, 21, 10, 0.55),
				moon: Color::rgba(255, 250, 205, 0.7),
				moon_glow: Color::rgba(255, 250, 100, 0.2),
			},
			fireflies: FireflyStyle {
				core: Color::rgb(255, 250, 205),
				glow: Color::rgba(255, 250, 100, 0.6),
			},
			footprints: FootprintStyle {
				sole: Color::rgba(59, 42, 28, 0.4),
				toes: Color::rgba(59, 42, 28, 0.3),
			},
			character: CharacterStyle {
				skin: Color::rgb(107, 155, 74),
				skin_light: Color::rgb(93, 138, 62),
				skin_dark: Color::rgb(74, 122, 52),
				vest: Color::rgb(139, 105, 20),
				vest_seam: Color::rgb(107, 79, 15),
				eye_white: Color::rgb(255, 254, 240),
				iris: Color::rgb(93, 78, 55),
				boots: Color::rgb(93, 64, 55),
				bob_height: 6.0,
				bob_period: 1.0,
			},
			bubble: BubbleStyle {
				fill: Color::rgb(255, 254, 240),
				text: Color::rgb(61, 42, 28),
				font: "bold 14px 'Fraunces', serif",
				padding: 10.0,
				radius: 16.0,
				max_width: 200.0,
				line_height: 18.0,
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::swamp()
	}
}
