//! Leptos component wrapping the glass scene canvas.
//!
//! The component creates an HTML canvas element, builds the particle system
//! from the embed configuration, and drives it from a `requestAnimationFrame`
//! loop that measures real frame time.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::camera::{Camera, Viewport};
use super::config::EmbedConfig;
use super::entropy::RngEntropy;
use super::particles::ParticleSystem;
use super::path::MotionParams;
use super::render;
use super::theme::Theme;

/// Longest frame step fed to the simulation; hidden tabs resume with one big delta.
const MAX_FRAME_DT: f64 = 0.25;

/// Bundles the particle simulation with its view configuration.
struct SceneContext {
	system: ParticleSystem,
	camera: Camera,
	viewport: Viewport,
	theme: Theme,
	debug: bool,
	/// `performance.now()` of the previous frame, in milliseconds.
	last_frame_ms: Option<f64>,
	elapsed: f64,
}

impl SceneContext {
	/// Advance the simulation to the frame timestamp `now_ms`.
	fn frame(&mut self, now_ms: f64) {
		let dt = match self.last_frame_ms {
			Some(last) => ((now_ms - last) / 1000.0).clamp(0.0, MAX_FRAME_DT),
			None => 0.0,
		};
		self.last_frame_ms = Some(now_ms);
		self.elapsed += dt;
		self.system.tick(self.elapsed, dt);
	}
}

fn window_size(window: &Window) -> Option<Viewport> {
	Some(Viewport {
		width: window.inner_width().ok()?.as_f64()?,
		height: window.inner_height().ok()?.as_f64()?,
	})
}

fn now_ms() -> f64 {
	web_sys::window()
		.and_then(|w| w.performance())
		.map(|p| p.now())
		.unwrap_or(0.0)
}

/// Renders the glass scene on a canvas element.
///
/// The canvas sizes itself to its parent container by default; set
/// `fullscreen = true` to fill the viewport and follow window resizes.
#[component]
pub fn GlassSceneCanvas(
	/// Camera offset, field of view, particle count and debug overlay.
	config: EmbedConfig,
	#[prop(default = false)] fullscreen: bool,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let context: Rc<RefCell<Option<SceneContext>>> = Rc::new(RefCell::new(None));
	let animate: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
	let resize_cb: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let Some(window) = web_sys::window() else {
			warn!("glass-logo: no window, scene disabled");
			return;
		};

		let viewport = if fullscreen {
			window_size(&window)
		} else {
			canvas.parent_element().map(|p| Viewport {
				width: p.client_width() as f64,
				height: p.client_height() as f64,
			})
		}
		.unwrap_or(Viewport {
			width: 800.0,
			height: 600.0,
		});
		canvas.set_width(viewport.width as u32);
		canvas.set_height(viewport.height as u32);

		let Some(ctx) = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
		else {
			warn!("glass-logo: 2d canvas context unavailable");
			return;
		};

		let theme = Theme::default();
		let system = ParticleSystem::new(
			config.count,
			MotionParams::default(),
			theme.particles.trail_samples,
			RngEntropy::from_entropy(),
		);
		info!(
			"glass-logo: scene mounted {}x{} with {}",
			viewport.width,
			viewport.height,
			config.to_query()
		);

		*context.borrow_mut() = Some(SceneContext {
			system,
			camera: Camera::from_config(&config),
			viewport,
			theme,
			debug: config.debug,
			last_frame_ms: None,
			elapsed: 0.0,
		});

		if fullscreen {
			let (context_resize, canvas_resize) = (context.clone(), canvas.clone());
			*resize_cb.borrow_mut() = Some(Closure::new(move || {
				let Some(size) = web_sys::window().as_ref().and_then(window_size) else {
					return;
				};
				canvas_resize.set_width(size.width as u32);
				canvas_resize.set_height(size.height as u32);
				if let Some(ref mut c) = *context_resize.borrow_mut() {
					c.viewport = size;
				}
			}));
			if let Some(ref cb) = *resize_cb.borrow() {
				let _ =
					window.add_event_listener_with_callback("resize", cb.as_ref().unchecked_ref());
			}
		}

		let (context_anim, animate_inner) = (context.clone(), animate.clone());
		*animate.borrow_mut() = Some(Closure::new(move || {
			if let Some(ref mut c) = *context_anim.borrow_mut() {
				c.frame(now_ms());
				render::render(&c.system, &ctx, &c.camera, c.viewport, &c.theme, c.debug);
			}
			if let (Some(cb), Some(win)) = (animate_inner.borrow().as_ref(), web_sys::window()) {
				let _ = win.request_animation_frame(cb.as_ref().unchecked_ref());
			}
		}));
		if let Some(ref cb) = *animate.borrow() {
			let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="glass-scene-canvas"
			style="display: block; width: 100%; height: 100%;"
		/>
	}
}
