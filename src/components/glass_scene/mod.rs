//! Glass logo scene: wandering particle trails over a reference grid.
//!
//! The interesting part is the particle motion:
//! - [`PathGenerator`] builds dog-leg paths with one left and one right turn
//!   that always leave the roaming square
//! - [`Particle`] waits out a start delay, then walks its path at constant
//!   speed and respawns at its anchor once it leaves the square
//! - [`ParticleSystem`] owns the particles and their fading trails
//!
//! Around it sit the embed plumbing (URL configuration, responsive embed
//! snippets) and a small canvas renderer.
//!
//! # Example
//!
//! ```ignore
//! use glass_logo::components::glass_scene::{EmbedConfig, GlassSceneCanvas};
//!
//! let config = EmbedConfig::from_query("?offsetX=12&fov=40&count=6");
//! view! { <GlassSceneCanvas config=config fullscreen=true /> }
//! ```

pub mod camera;
mod component;
pub mod config;
pub mod direction;
pub mod embed;
pub mod entropy;
pub mod error;
pub mod particle;
pub mod particles;
pub mod path;
mod render;
pub mod theme;
pub mod trail;

pub use component::GlassSceneCanvas;
pub use config::EmbedConfig;
pub use direction::{Direction, Turn};
pub use embed::{Breakpoint, default_breakpoints, generate_embed_code};
pub use entropy::{Entropy, RngEntropy};
pub use error::ConfigError;
pub use particle::{MotionState, Particle, TickOutcome};
pub use particles::{ParticleSnapshot, ParticleSystem};
pub use path::{MotionParams, Path, PathGenerator, PathSegment, generate_path};
pub use theme::Theme;
