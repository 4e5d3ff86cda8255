//! Canvas rendering for the glass scene.
//!
//! Drawing happens back to front:
//! 1. Background fill
//! 2. Reference grid (z = -5)
//! 3. Particle trails, then particle heads (z = 0.1)
//! 4. Debug overlay (paths and status line) when enabled

use std::f64::consts::PI;

use glam::DVec3;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::camera::{Camera, Viewport};
use super::entropy::Entropy;
use super::particles::ParticleSystem;
use super::theme::{Color, GridStyle, Theme};

/// Opacity of a grid line `distance` world units from the scene center.
fn grid_fade(distance: f64, fade_distance: f64) -> f64 {
	if fade_distance <= 0.0 {
		return 1.0;
	}
	(1.0 - distance.abs() / fade_distance).clamp(0.0, 1.0)
}

/// Renders one frame.
pub fn render<E: Entropy>(
	system: &ParticleSystem<E>,
	ctx: &CanvasRenderingContext2d,
	camera: &Camera,
	viewport: Viewport,
	theme: &Theme,
	debug: bool,
) {
	draw_background(ctx, viewport, theme);

	if theme.grid.enabled {
		draw_grid(ctx, camera, viewport, &theme.grid);
	}

	draw_trails(system, ctx, camera, viewport, theme);
	draw_heads(system, ctx, camera, viewport, theme);

	if debug {
		draw_debug(system, ctx, camera, viewport, theme);
	}
}

fn draw_background(ctx: &CanvasRenderingContext2d, viewport: Viewport, theme: &Theme) {
	ctx.set_fill_style_str(&theme.background.color.to_css());
	ctx.fill_rect(0.0, 0.0, viewport.width, viewport.height);
}

fn stroke_world_line(
	ctx: &CanvasRenderingContext2d,
	camera: &Camera,
	viewport: Viewport,
	from: DVec3,
	to: DVec3,
) {
	let (Some(a), Some(b)) = (camera.project(from, viewport), camera.project(to, viewport)) else {
		return;
	};
	ctx.begin_path();
	ctx.move_to(a.x, a.y);
	ctx.line_to(b.x, b.y);
	ctx.stroke();
}

fn draw_grid(ctx: &CanvasRenderingContext2d, camera: &Camera, viewport: Viewport, grid: &GridStyle) {
	if grid.cell_size <= 0.0 {
		return;
	}
	let steps = (grid.extent / grid.cell_size).floor() as i64;
	let extent = steps as f64 * grid.cell_size;

	for i in -steps..=steps {
		let offset = i as f64 * grid.cell_size;
		let alpha = grid_fade(offset, grid.fade_distance);
		if alpha < 0.01 {
			continue;
		}

		let is_section = grid.section_every > 0 && i % grid.section_every as i64 == 0;
		let (color, width) = if is_section {
			(grid.section_color, grid.section_thickness)
		} else {
			(grid.cell_color, grid.cell_thickness)
		};
		ctx.set_stroke_style_str(&color.with_alpha(color.a * alpha).to_css());
		ctx.set_line_width(width);

		// Vertical then horizontal line at this offset.
		stroke_world_line(
			ctx,
			camera,
			viewport,
			DVec3::new(offset, -extent, grid.depth),
			DVec3::new(offset, extent, grid.depth),
		);
		stroke_world_line(
			ctx,
			camera,
			viewport,
			DVec3::new(-extent, offset, grid.depth),
			DVec3::new(extent, offset, grid.depth),
		);
	}
}

fn draw_trails<E: Entropy>(
	system: &ParticleSystem<E>,
	ctx: &CanvasRenderingContext2d,
	camera: &Camera,
	viewport: Viewport,
	theme: &Theme,
) {
	let style = &theme.particles;
	ctx.set_line_cap("round");

	for (snapshot, trail) in system.snapshots().zip(system.trails()) {
		if !snapshot.visible || trail.len() < 2 {
			continue;
		}

		let mut prev = None;
		for (point, attenuation) in trail.attenuated() {
			let lifted = DVec3::new(point.x, point.y, point.z + style.depth);
			let Some(screen) = camera.project(lifted, viewport) else {
				prev = None;
				continue;
			};
			if let Some((px, py)) = prev {
				ctx.set_stroke_style_str(&style.color.with_alpha(attenuation).to_css());
				ctx.set_line_width(style.trail_width * attenuation);
				ctx.begin_path();
				ctx.move_to(px, py);
				ctx.line_to(screen.x, screen.y);
				ctx.stroke();
			}
			prev = Some((screen.x, screen.y));
		}
	}
}

fn draw_heads<E: Entropy>(
	system: &ParticleSystem<E>,
	ctx: &CanvasRenderingContext2d,
	camera: &Camera,
	viewport: Viewport,
	theme: &Theme,
) {
	let style = &theme.particles;
	ctx.set_fill_style_str(&style.color.to_css());

	for snapshot in system.snapshots().filter(|s| s.visible) {
		let p = snapshot.position;
		let lifted = DVec3::new(p.x, p.y, p.z + style.depth);
		if let Some(screen) = camera.project(lifted, viewport) {
			let radius = (style.head_radius * screen.scale).max(1.0);
			ctx.begin_path();
			let _ = ctx.arc(screen.x, screen.y, radius, 0.0, PI * 2.0);
			ctx.fill();
		}
	}
}

fn set_dash(ctx: &CanvasRenderingContext2d, pattern: &[f64]) {
	let array = js_sys::Array::new();
	for value in pattern {
		array.push(&JsValue::from_f64(*value));
	}
	let _ = ctx.set_line_dash(&array);
}

fn draw_debug<E: Entropy>(
	system: &ParticleSystem<E>,
	ctx: &CanvasRenderingContext2d,
	camera: &Camera,
	viewport: Viewport,
	theme: &Theme,
) {
	let style = &theme.debug;
	let depth = theme.particles.depth;

	ctx.set_stroke_style_str(&style.path_color.to_css());
	ctx.set_line_width(1.0);
	set_dash(ctx, &[4.0, 4.0]);

	for particle in system.particles().iter().filter(|p| p.is_visible()) {
		for segment in particle.path().segments() {
			let lift = DVec3::new(0.0, 0.0, depth);
			stroke_world_line(ctx, camera, viewport, segment.start + lift, segment.end + lift);
		}
	}
	set_dash(ctx, &[]);

	// Square the particles roam in.
	let bound = system.params().bound;
	let corners = [(-bound, -bound), (bound, -bound), (bound, bound), (-bound, bound)];
	ctx.set_stroke_style_str(&Color::rgba(0, 0, 0, 0.15).to_css());
	for i in 0..corners.len() {
		let (x0, y0) = corners[i];
		let (x1, y1) = corners[(i + 1) % corners.len()];
		stroke_world_line(
			ctx,
			camera,
			viewport,
			DVec3::new(x0, y0, depth),
			DVec3::new(x1, y1, depth),
		);
	}

	let visible = system.snapshots().filter(|s| s.visible).count();
	let respawns: u64 = system
		.snapshots()
		.map(|s| s.trail_generation as u64)
		.sum();
	ctx.set_fill_style_str(&style.text_color.to_css());
	ctx.set_font(style.font);
	let _ = ctx.fill_text(
		&format!(
			"particles {}/{}  respawns {}  t={:.1}s  fov {}  offset ({}, {})",
			visible,
			system.len(),
			respawns,
			system.elapsed(),
			camera.fov,
			camera.offset_x,
			camera.offset_y
		),
		8.0,
		16.0,
	);
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn grid_fades_linearly() {
		assert_eq!(grid_fade(0.0, 50.0), 1.0);
		assert_eq!(grid_fade(25.0, 50.0), 0.5);
		assert_eq!(grid_fade(-25.0, 50.0), 0.5);
		assert_eq!(grid_fade(80.0, 50.0), 0.0);
		assert_eq!(grid_fade(80.0, 0.0), 1.0);
	}
}
