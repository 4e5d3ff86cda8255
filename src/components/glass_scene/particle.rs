//! Per-particle motion along dog-leg paths.
//!
//! A particle waits out its start delay, then moves at constant speed along
//! the current path segment. Reaching a segment end snaps it onto the corner
//! and advances to the next segment; leaving the roaming square respawns it at
//! its anchor with a fresh path and bumps its trail generation.

use glam::DVec3;
use log::trace;

use super::entropy::Entropy;
use super::path::{PATH_SEGMENTS, Path, PathGenerator, PathSegment};

/// Motion phase of a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MotionState {
	/// Hidden, accumulating time until the start delay has passed.
	Waiting,
	/// Visible and following its path. Never left once entered.
	Moving,
}

/// What a single [`Particle::tick`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
	/// Non-positive or non-finite delta; nothing changed.
	Idle,
	/// Still inside the start delay.
	Waiting,
	/// Delay elapsed this tick; now visible at the path start.
	Started,
	/// Advanced along the current segment.
	Moved,
	/// Snapped onto the end of the current segment.
	ReachedCorner,
	/// Left the roaming square and restarted on a new path.
	Respawned,
}

/// A single wandering particle.
#[derive(Clone, Debug)]
pub struct Particle {
	start: DVec3,
	path: Path,
	segment_index: usize,
	position: DVec3,
	state: MotionState,
	elapsed_wait: f64,
	delay: f64,
	trail_generation: u32,
}

impl Particle {
	/// Waiting particle anchored at `start` that will follow `path` after `delay` seconds.
	pub fn new(start: DVec3, delay: f64, path: Path) -> Self {
		Self {
			start,
			path,
			segment_index: 0,
			position: start,
			state: MotionState::Waiting,
			elapsed_wait: 0.0,
			delay,
			trail_generation: 0,
		}
	}

	/// Create a particle anchored at `start` with a freshly generated path.
	pub fn spawn(
		start: DVec3,
		delay: f64,
		generator: &PathGenerator,
		entropy: &mut impl Entropy,
	) -> Self {
		Self::new(start, delay, generator.generate(start, entropy))
	}

	/// Current location; the anchor until the particle starts.
	pub fn position(&self) -> DVec3 {
		self.position
	}

	/// Anchor every path starts from.
	pub fn start(&self) -> DVec3 {
		self.start
	}

	/// Path currently being followed.
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Index of the segment being followed, `0..=2`.
	pub fn segment_index(&self) -> usize {
		self.segment_index
	}

	/// Segment at [`Particle::segment_index`].
	pub fn current_segment(&self) -> &PathSegment {
		&self.path.segments()[self.segment_index]
	}

	/// Seconds to wait before appearing.
	pub fn delay(&self) -> f64 {
		self.delay
	}

	/// Bumped on every respawn.
	pub fn trail_generation(&self) -> u32 {
		self.trail_generation
	}

	/// Current motion phase.
	pub fn state(&self) -> MotionState {
		self.state
	}

	/// True once the start delay has passed.
	pub fn is_started(&self) -> bool {
		self.state == MotionState::Moving
	}

	/// Particles become visible the moment they start and stay visible.
	pub fn is_visible(&self) -> bool {
		self.is_started()
	}

	/// Advance by `dt` seconds.
	pub fn tick(
		&mut self,
		dt: f64,
		generator: &PathGenerator,
		entropy: &mut impl Entropy,
	) -> TickOutcome {
		if !dt.is_finite() || dt <= 0.0 {
			return TickOutcome::Idle;
		}

		match self.state {
			MotionState::Waiting => {
				self.elapsed_wait += dt;
				if self.elapsed_wait >= self.delay {
					self.state = MotionState::Moving;
					self.position = self.path.first_start();
					trace!(
						"particle started after {:.2}s heading {:?}",
						self.elapsed_wait,
						self.current_segment().direction
					);
					TickOutcome::Started
				} else {
					TickOutcome::Waiting
				}
			}
			MotionState::Moving => self.advance(dt, generator, entropy),
		}
	}

	fn advance(
		&mut self,
		dt: f64,
		generator: &PathGenerator,
		entropy: &mut impl Entropy,
	) -> TickOutcome {
		let params = generator.params();
		let step = params.speed * dt;
		let segment = *self.current_segment();

		self.position += segment.direction.to_vec3() * step;

		// Bounds win over corner arrival within the same tick.
		if self.position.x.abs() > params.bound || self.position.y.abs() > params.bound {
			self.respawn(generator, entropy);
			return TickOutcome::Respawned;
		}

		// Arrival window is two frames of travel so a slow frame cannot skip a corner.
		if self.position.distance(segment.end) < step * 2.0 {
			self.position = segment.end;
			if self.segment_index < PATH_SEGMENTS - 1 {
				self.segment_index += 1;
			}
			return TickOutcome::ReachedCorner;
		}

		TickOutcome::Moved
	}

	fn respawn(&mut self, generator: &PathGenerator, entropy: &mut impl Entropy) {
		self.path = generator.generate(self.start, entropy);
		self.segment_index = 0;
		self.position = self.path.first_start();
		self.trail_generation = self.trail_generation.wrapping_add(1);
		trace!(
			"particle respawned (generation {}) heading {:?}",
			self.trail_generation,
			self.current_segment().direction
		);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::glass_scene::direction::Direction;
	use crate::components::glass_scene::entropy::{RngEntropy, Scripted};
	use crate::components::glass_scene::path::{BOUNDS, MotionParams, SPEED};

	fn right_left_particle(delay: f64) -> (Particle, PathGenerator, Scripted) {
		let generator = PathGenerator::default();
		let mut entropy = Scripted::new(&[0, 0, 0], &[0.9]);
		let particle = Particle::spawn(DVec3::ZERO, delay, &generator, &mut entropy);
		(particle, generator, entropy)
	}

	#[test]
	fn waits_out_delay_exactly() {
		let (mut p, generator, mut entropy) = right_left_particle(2.0);

		for _ in 0..3 {
			assert_eq!(p.tick(0.5, &generator, &mut entropy), TickOutcome::Waiting);
			assert!(!p.is_visible());
		}
		assert_eq!(p.tick(0.5, &generator, &mut entropy), TickOutcome::Started);
		assert!(p.is_visible());
		assert_eq!(p.state(), MotionState::Moving);
		assert_eq!(p.position(), DVec3::ZERO);
	}

	#[test]
	fn follows_first_segment_direction() {
		let (mut p, generator, mut entropy) = right_left_particle(0.0);
		assert_eq!(p.tick(0.01, &generator, &mut entropy), TickOutcome::Started);

		for _ in 0..10 {
			assert_eq!(p.tick(0.01, &generator, &mut entropy), TickOutcome::Moved);
		}
		let pos = p.position();
		assert!(pos.x > 0.0);
		assert_eq!(pos.y, 0.0);
		assert!((pos.x - 10.0 * 0.01 * SPEED).abs() < 1e-9);
	}

	#[test]
	fn snaps_to_corner_and_turns() {
		let (mut p, generator, mut entropy) = right_left_particle(0.0);
		p.tick(0.1, &generator, &mut entropy);

		// First leg is 5 units at 4 u/s; 0.1s ticks travel 0.4 units.
		let mut outcome = TickOutcome::Moved;
		let mut ticks = 0;
		while outcome != TickOutcome::ReachedCorner {
			outcome = p.tick(0.1, &generator, &mut entropy);
			ticks += 1;
			assert!(ticks < 100);
		}
		assert_eq!(p.position(), DVec3::new(5.0, 0.0, 0.0));
		assert_eq!(p.segment_index(), 1);
		assert_eq!(p.current_segment().direction, Direction::Up);

		p.tick(0.1, &generator, &mut entropy);
		assert_eq!(p.position().x, 5.0);
		assert!(p.position().y > 0.0);
	}

	#[test]
	fn leaving_bounds_respawns() {
		let generator = PathGenerator::default();
		let mut entropy = RngEntropy::seeded(3);
		let mut p = Particle::spawn(DVec3::ZERO, 0.0, &generator, &mut entropy);
		p.tick(1.0 / 60.0, &generator, &mut entropy);

		let mut ticks = 0;
		loop {
			let before = p.trail_generation();
			let outcome = p.tick(1.0 / 60.0, &generator, &mut entropy);
			ticks += 1;
			assert!(ticks < 60 * 60, "particle never left the square");

			let pos = p.position();
			assert!(pos.x.abs() <= BOUNDS && pos.y.abs() <= BOUNDS);

			if outcome == TickOutcome::Respawned {
				assert_eq!(p.trail_generation(), before + 1);
				assert_eq!(p.segment_index(), 0);
				assert_eq!(p.position(), p.path().first_start());
				assert_eq!(p.position(), p.start());
				break;
			}
			assert_eq!(p.trail_generation(), before);
		}
	}

	#[test]
	fn bounds_check_wins_over_corner_arrival() {
		// Right-first 5-unit leg in a square of half-width 3: with 1.2-unit steps
		// the particle crosses the bound at x = 3.6, already inside the corner window.
		let generator = PathGenerator::new(MotionParams {
			bound: 3.0,
			..MotionParams::default()
		});
		let mut entropy = Scripted::new(&[0, 0, 0], &[0.9]);
		let mut p = Particle::spawn(DVec3::ZERO, 0.0, &generator, &mut entropy);
		assert_eq!(p.tick(0.3, &generator, &mut entropy), TickOutcome::Started);

		assert_eq!(p.tick(0.3, &generator, &mut entropy), TickOutcome::Moved);
		assert_eq!(p.tick(0.3, &generator, &mut entropy), TickOutcome::Moved);
		assert!((p.position().x - 2.4).abs() < 1e-9);

		assert_eq!(p.tick(0.3, &generator, &mut entropy), TickOutcome::Respawned);
		assert_eq!(p.segment_index(), 0);
		assert_eq!(p.trail_generation(), 1);
		assert_eq!(p.position(), DVec3::ZERO);
	}

	#[test]
	fn final_segment_index_is_sticky() {
		let (mut p, generator, mut entropy) = right_left_particle(0.0);
		p.tick(0.1, &generator, &mut entropy);

		let mut max_index = 0;
		while p.trail_generation() == 0 {
			p.tick(0.1, &generator, &mut entropy);
			max_index = max_index.max(p.segment_index());
		}
		assert_eq!(max_index, 2);
	}

	#[test]
	fn non_positive_delta_is_a_noop() {
		let (mut p, generator, mut entropy) = right_left_particle(0.0);
		assert_eq!(p.tick(0.0, &generator, &mut entropy), TickOutcome::Idle);
		assert_eq!(p.tick(-1.0, &generator, &mut entropy), TickOutcome::Idle);
		assert_eq!(p.tick(f64::NAN, &generator, &mut entropy), TickOutcome::Idle);
		assert!(!p.is_started());

		p.tick(0.1, &generator, &mut entropy);
		p.tick(0.1, &generator, &mut entropy);
		let pos = p.position();
		assert_eq!(p.tick(-0.5, &generator, &mut entropy), TickOutcome::Idle);
		assert_eq!(p.position(), pos);
	}

	#[test]
	fn zero_speed_stands_still() {
		let generator = PathGenerator::new(MotionParams {
			speed: 0.0,
			..MotionParams::default()
		});
		let mut entropy = Scripted::new(&[0, 0, 0], &[0.9]);
		let mut p = Particle::spawn(DVec3::ZERO, 0.0, &generator, &mut entropy);
		p.tick(0.1, &generator, &mut entropy);

		for _ in 0..100 {
			assert_eq!(p.tick(0.1, &generator, &mut entropy), TickOutcome::Moved);
		}
		assert_eq!(p.position(), DVec3::ZERO);
		assert_eq!(p.segment_index(), 0);
	}
}
