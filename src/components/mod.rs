//! UI components.

pub mod glass_scene;
