//! glass-logo: Embeddable glass logo scene with wandering particle trails.
//!
//! This crate provides a WASM canvas component that renders particles
//! tracing dog-leg paths over a reference grid, configured through the
//! embedding iframe's URL (`offsetX`, `offsetY`, `fov`, `count`, `debug`).

// Enables the `js` backend so `rand` can seed from the browser.
use getrandom as _;
use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};

pub mod components;

pub use components::glass_scene::{
	Breakpoint, EmbedConfig, GlassSceneCanvas, ParticleSystem, generate_embed_code,
};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("glass-logo: logging initialized");
}

/// Read the embed configuration from the page URL's query string.
fn load_embed_config() -> EmbedConfig {
	let search = web_sys::window()
		.map(|w| w.location())
		.and_then(|location| location.search().ok());

	match search {
		Some(query) => EmbedConfig::from_query(&query),
		None => {
			warn!("glass-logo: no location available, using default embed config");
			EmbedConfig::default()
		}
	}
}

/// Main application component.
/// Reads the embed configuration from the URL and renders the scene full-page.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_embed_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Glass Logo" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="fullscreen-scene" style="width: 100vw; height: 100vh;">
			<GlassSceneCanvas config=config fullscreen=true />
		</div>
	}
}
