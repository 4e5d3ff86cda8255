//! Errors surfaced by embed configuration handling.

use thiserror::Error;

/// Rejected embed configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// A numeric query parameter did not parse.
	#[error("query parameter `{key}` is not a number: {value:?}")]
	InvalidNumber { key: &'static str, value: String },

	/// A numeric query parameter parsed but lies outside its accepted range.
	#[error("query parameter `{key}` = {value} is outside {min}..={max}")]
	OutOfRange {
		key: &'static str,
		value: f64,
		min: f64,
		max: f64,
	},

	/// The breakpoint table could not be serialized into the embed snippet.
	#[error("failed to serialize breakpoints: {0}")]
	Serialize(#[from] serde_json::Error),
}
