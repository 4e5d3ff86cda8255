//! Random source used by path generation and particle spawning.
//!
//! Everything random in the scene goes through [`Entropy`], so tests can
//! substitute a scripted sequence and assert exact paths.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Minimal random source.
pub trait Entropy {
	/// Uniform integer in `0..n`. `n` is always at least 1.
	fn index(&mut self, n: usize) -> usize;
	/// Uniform float in `[0, 1)`.
	fn unit(&mut self) -> f64;
}

/// Adapts any `rand` generator to [`Entropy`].
#[derive(Clone, Debug)]
pub struct RngEntropy<R> {
	rng: R,
}

impl<R: Rng> RngEntropy<R> {
	/// Wrap an existing generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
}

impl RngEntropy<StdRng> {
	/// Seeded from the platform source (`crypto.getRandomValues` in the browser).
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_entropy())
	}

	/// Reproducible sequence for a fixed seed.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> Entropy for RngEntropy<R> {
	fn index(&mut self, n: usize) -> usize {
		self.rng.gen_range(0..n.max(1))
	}

	fn unit(&mut self) -> f64 {
		self.rng.r#gen::<f64>()
	}
}

/// Replays fixed draws, cycling when exhausted.
#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct Scripted {
	pub indices: Vec<usize>,
	pub units: Vec<f64>,
	next_index: usize,
	next_unit: usize,
}

#[cfg(test)]
impl Scripted {
	pub fn new(indices: &[usize], units: &[f64]) -> Self {
		Self {
			indices: indices.to_vec(),
			units: units.to_vec(),
			..Self::default()
		}
	}
}

#[cfg(test)]
impl Entropy for Scripted {
	fn index(&mut self, n: usize) -> usize {
		let value = self.indices[self.next_index % self.indices.len()];
		self.next_index += 1;
		value % n.max(1)
	}

	fn unit(&mut self) -> f64 {
		let value = self.units[self.next_unit % self.units.len()];
		self.next_unit += 1;
		value
	}
}
