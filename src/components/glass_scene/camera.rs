//! Perspective projection from scene space to canvas pixels.
//!
//! The camera sits on the +z axis looking down -z at the XY plane. Embed
//! offsets shift the whole scene in world units before projection, so a
//! positive `offset_x` slides the logo and particles to the right.

use glam::DVec3;

use super::config::EmbedConfig;

/// Camera distance from the particle plane.
pub const CAMERA_Z: f64 = 50.0;

/// Points closer to the camera than this are not drawn.
const NEAR_PLANE: f64 = 0.1;

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
	pub width: f64,
	pub height: f64,
}

/// A projected point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
	pub x: f64,
	pub y: f64,
	/// Pixels per world unit at this point's depth.
	pub scale: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
	pub position_z: f64,
	/// Vertical field of view in degrees.
	pub fov: f64,
	pub offset_x: f64,
	pub offset_y: f64,
}

impl Default for Camera {
	fn default() -> Self {
		Self::from_config(&EmbedConfig::default())
	}
}

impl Camera {
	pub fn from_config(config: &EmbedConfig) -> Self {
		Self {
			position_z: CAMERA_Z,
			fov: config.fov,
			offset_x: config.offset_x,
			offset_y: config.offset_y,
		}
	}

	/// Focal length in pixels for the given viewport.
	fn focal(&self, viewport: Viewport) -> f64 {
		(viewport.height / 2.0) / (self.fov.to_radians() / 2.0).tan()
	}

	/// Project a world point, or `None` if it is behind the near plane.
	pub fn project(&self, point: DVec3, viewport: Viewport) -> Option<ScreenPoint> {
		let depth = self.position_z - point.z;
		if depth < NEAR_PLANE {
			return None;
		}
		let scale = self.focal(viewport) / depth;
		Some(ScreenPoint {
			x: viewport.width / 2.0 + (point.x + self.offset_x) * scale,
			y: viewport.height / 2.0 - (point.y + self.offset_y) * scale,
			scale,
		})
	}

	/// Half of the visible world height on the plane at depth `z`.
	pub fn half_height_at(&self, z: f64) -> f64 {
		(self.position_z - z) * (self.fov.to_radians() / 2.0).tan()
	}
}
