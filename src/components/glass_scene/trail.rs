//! Fading position history drawn behind each particle.

use std::collections::VecDeque;

use glam::DVec3;

/// Bounded history of recent positions, newest last.
///
/// The owning particle's trail generation is tracked so a respawn wipes the
/// history instead of drawing a streak back to the anchor.
#[derive(Clone, Debug)]
pub struct Trail {
	points: VecDeque<DVec3>,
	capacity: usize,
	generation: u32,
}

impl Trail {
	/// Empty trail keeping at most `capacity` samples.
	pub fn new(capacity: usize) -> Self {
		Self {
			points: VecDeque::with_capacity(capacity),
			capacity,
			generation: 0,
		}
	}

	/// Record a sample, clearing history first if `generation` changed.
	pub fn record(&mut self, position: DVec3, generation: u32) {
		if generation != self.generation {
			self.points.clear();
			self.generation = generation;
		}
		if self.capacity == 0 {
			return;
		}
		if self.points.len() == self.capacity {
			self.points.pop_front();
		}
		self.points.push_back(position);
	}

	/// Samples currently held.
	pub fn len(&self) -> usize {
		self.points.len()
	}

	/// True until the first sample is recorded.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// Trail generation of the samples currently held.
	pub fn generation(&self) -> u32 {
		self.generation
	}

	/// Points oldest to newest, each paired with its attenuation in `(0, 1]`.
	///
	/// Attenuation is linear in age: the newest point is 1, the oldest
	/// slot of a full trail approaches 0.
	pub fn attenuated(&self) -> impl Iterator<Item = (DVec3, f64)> + '_ {
		let n = self.points.len() as f64;
		self.points
			.iter()
			.enumerate()
			.map(move |(i, p)| (*p, (i as f64 + 1.0) / n))
	}
}
