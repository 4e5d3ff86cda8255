//! Embed configuration read from the iframe URL.
//!
//! Recognised query parameters: `offsetX`, `offsetY`, `fov`, `count`, `debug`.
//! [`EmbedConfig::from_query`] never fails: bad values fall back to defaults
//! with a warning, the same way the page treats a missing parameter.
//! [`EmbedConfig::parse_strict`] reports the first bad value instead.

use log::warn;

use super::error::ConfigError;

pub const DEFAULT_FOV: f64 = 50.0;
pub const MIN_FOV: f64 = 10.0;
pub const MAX_FOV: f64 = 120.0;
pub const DEFAULT_COUNT: usize = 4;
pub const MAX_COUNT: usize = 200;

/// Camera offset, field of view and particle settings for one embed.
#[derive(Clone, Debug, PartialEq)]
pub struct EmbedConfig {
	/// Horizontal scene offset in world units.
	pub offset_x: f64,
	/// Vertical scene offset in world units.
	pub offset_y: f64,
	/// Vertical field of view in degrees.
	pub fov: f64,
	/// Number of particles.
	pub count: usize,
	/// Draw particle paths and a status line.
	pub debug: bool,
}

impl Default for EmbedConfig {
	fn default() -> Self {
		Self {
			offset_x: 0.0,
			offset_y: 0.0,
			fov: DEFAULT_FOV,
			count: DEFAULT_COUNT,
			debug: false,
		}
	}
}

/// Decodes `+` and `%XX` escapes; malformed escapes are kept literally.
fn percent_decode(raw: &str) -> String {
	let bytes = raw.as_bytes();
	let mut out = Vec::with_capacity(bytes.len());
	let mut i = 0;
	while i < bytes.len() {
		match bytes[i] {
			b'+' => out.push(b' '),
			b'%' if i + 2 < bytes.len()
				&& bytes[i + 1].is_ascii_hexdigit()
				&& bytes[i + 2].is_ascii_hexdigit() =>
			{
				// Both digits are ASCII, so the slice sits on char boundaries.
				match u8::from_str_radix(&raw[i + 1..i + 3], 16) {
					Ok(byte) => {
						out.push(byte);
						i += 2;
					}
					Err(_) => out.push(b'%'),
				}
			}
			b => out.push(b),
		}
		i += 1;
	}
	String::from_utf8_lossy(&out).into_owned()
}

/// Splits `?a=1&b&c=` into decoded key/value pairs; a bare key has an empty
/// value. Only the first occurrence of a key is kept.
fn query_pairs(query: &str) -> Vec<(String, String)> {
	let mut pairs: Vec<(String, String)> = Vec::new();
	for pair in query.trim_start_matches('?').split('&') {
		if pair.is_empty() {
			continue;
		}
		let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
		let key = percent_decode(key);
		if pairs.iter().any(|(seen, _)| *seen == key) {
			continue;
		}
		pairs.push((key, percent_decode(value)));
	}
	pairs
}

fn parse_number(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
	raw.trim()
		.parse::<f64>()
		.ok()
		.filter(|v| v.is_finite())
		.ok_or_else(|| ConfigError::InvalidNumber {
			key,
			value: raw.to_string(),
		})
}

/// Longest leading numeric prefix, so `12px` reads as 12.
fn parse_number_prefix(key: &'static str, raw: &str) -> Result<f64, ConfigError> {
	let trimmed = raw.trim_start();
	trimmed
		.char_indices()
		.map(|(i, c)| i + c.len_utf8())
		.rev()
		.filter_map(|end| trimmed[..end].parse::<f64>().ok())
		.find(|v| v.is_finite())
		.ok_or_else(|| ConfigError::InvalidNumber {
			key,
			value: raw.to_string(),
		})
}

fn check_range(key: &'static str, value: f64, min: f64, max: f64) -> Result<f64, ConfigError> {
	if (min..=max).contains(&value) {
		Ok(value)
	} else {
		Err(ConfigError::OutOfRange {
			key,
			value,
			min,
			max,
		})
	}
}

fn parse_flag(raw: &str) -> bool {
	matches!(
		raw.trim().to_ascii_lowercase().as_str(),
		"" | "1" | "true" | "yes" | "on"
	)
}

impl EmbedConfig {
	/// Lenient parse; unknown keys are ignored, bad values use defaults.
	pub fn from_query(query: &str) -> Self {
		let mut config = Self::default();

		for (key, raw) in query_pairs(query) {
			let raw = raw.as_str();
			match key.as_str() {
				"offsetX" => config.offset_x = lenient_number("offsetX", raw, 0.0),
				"offsetY" => config.offset_y = lenient_number("offsetY", raw, 0.0),
				"fov" => {
					let fov = lenient_number("fov", raw, DEFAULT_FOV);
					config.fov = if fov <= 0.0 {
						DEFAULT_FOV
					} else {
						fov.clamp(MIN_FOV, MAX_FOV)
					};
				}
				"count" => {
					let count = lenient_number("count", raw, DEFAULT_COUNT as f64);
					config.count = count.clamp(0.0, MAX_COUNT as f64) as usize;
				}
				"debug" => config.debug = parse_flag(raw),
				_ => {}
			}
		}

		config
	}

	/// Strict parse; the first malformed or out-of-range value is an error.
	pub fn parse_strict(query: &str) -> Result<Self, ConfigError> {
		let mut config = Self::default();

		for (key, raw) in query_pairs(query) {
			let raw = raw.as_str();
			match key.as_str() {
				"offsetX" => config.offset_x = parse_number("offsetX", raw)?,
				"offsetY" => config.offset_y = parse_number("offsetY", raw)?,
				"fov" => {
					config.fov = check_range("fov", parse_number("fov", raw)?, MIN_FOV, MAX_FOV)?
				}
				"count" => {
					let count = parse_number("count", raw)?;
					config.count = check_range("count", count.trunc(), 0.0, MAX_COUNT as f64)? as usize;
				}
				"debug" => config.debug = parse_flag(raw),
				_ => {}
			}
		}

		Ok(config)
	}

	/// Canonical query string, without the leading `?`.
	pub fn to_query(&self) -> String {
		let mut query = format!(
			"offsetX={}&offsetY={}&fov={}&count={}",
			self.offset_x, self.offset_y, self.fov, self.count
		);
		if self.debug {
			query.push_str("&debug=1");
		}
		query
	}
}

fn lenient_number(key: &'static str, raw: &str, fallback: f64) -> f64 {
	parse_number_prefix(key, raw).unwrap_or_else(|e| {
		warn!("glass-logo: {}, using {}", e, fallback);
		fallback
	})
}
