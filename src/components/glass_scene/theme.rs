//! Visual styling for the glass scene.

use super::particles::DEFAULT_TRAIL_SAMPLES;

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

	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Background fill.
#[derive(Clone, Debug)]
pub struct BackgroundStyle {
	pub color: Color,
}

/// Reference grid on the XY plane behind the particles.
#[derive(Clone, Debug)]
pub struct GridStyle {
	pub enabled: bool,
	/// Plane depth (z) in world units.
	pub depth: f64,
	/// Half-extent of the drawn grid in world units.
	pub extent: f64,
	/// Spacing of minor lines in world units.
	pub cell_size: f64,
	pub cell_color: Color,
	/// Minor line width in pixels.
	pub cell_thickness: f64,
	/// Every `section_every` cells a major line is drawn.
	pub section_every: u32,
	pub section_color: Color,
	pub section_thickness: f64,
	/// Distance from the view center at which lines have faded out.
	pub fade_distance: f64,
}

/// Particle head and trail styling.
#[derive(Clone, Debug)]
pub struct ParticleStyle {
	pub color: Color,
	/// Plane depth (z), slightly in front of the grid.
	pub depth: f64,
	/// Head sphere radius in world units.
	pub head_radius: f64,
	/// Trail width in pixels at full attenuation.
	pub trail_width: f64,
	/// Samples kept per trail.
	pub trail_samples: usize,
}

/// Overlay drawn when `debug` is on.
#[derive(Clone, Debug)]
pub struct DebugStyle {
	pub path_color: Color,
	pub text_color: Color,
	pub font: &'static str,
}

/// Complete visual theme.
#[derive(Clone, Debug)]
pub struct Theme {
	pub background: BackgroundStyle,
	pub grid: GridStyle,
	pub particles: ParticleStyle,
	pub debug: DebugStyle,
}

impl Theme {
	/// White studio backdrop with a light grid and deep blue trails.
	pub fn studio() -> Self {
		Self {
			background: BackgroundStyle {
				color: Color::rgb(255, 255, 255),
			},
			grid: GridStyle {
				enabled: true,
				depth: -5.0,
				extent: 50.0,
				cell_size: 1.0,
				cell_color: Color::rgb(204, 204, 204),
				cell_thickness: 0.5,
				section_every: 5,
				section_color: Color::rgb(238, 242, 255),
				section_thickness: 1.0,
				fade_distance: 50.0,
			},
			particles: ParticleStyle {
				color: Color::rgb(0, 0, 253),
				depth: 0.1,
				head_radius: 0.15,
				trail_width: 3.0,
				trail_samples: DEFAULT_TRAIL_SAMPLES,
			},
			debug: DebugStyle {
				path_color: Color::rgba(255, 64, 64, 0.6),
				text_color: Color::rgba(0, 0, 0, 0.7),
				font: "12px monospace",
			},
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::studio()
	}
}
