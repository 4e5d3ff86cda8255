//! Dog-leg path generation.
//!
//! Every path has three contiguous segments along the cardinal directions of
//! the XY plane: a short leg, a turn, a second short leg, the opposite turn,
//! and a final leg long enough to leave the roaming square from anywhere the
//! first two legs can reach.

use glam::DVec3;

use super::direction::{Direction, Turn};
use super::entropy::Entropy;

/// Length unit of path segments, shared with the background grid cell size.
pub const GRID_UNIT: f64 = 1.0;
/// Particle speed in world units per second.
pub const SPEED: f64 = 4.0;
/// Half-width of the square particles roam in before respawning.
pub const BOUNDS: f64 = 50.0;

/// Shortest first/second leg, in grid units.
const MIN_SEGMENT_STEPS: usize = 5;
/// Number of distinct leg lengths (5..=14 grid units).
const SEGMENT_STEP_CHOICES: usize = 10;

/// Segments per path.
pub const PATH_SEGMENTS: usize = 3;

/// Numbers shared by path generation and motion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionParams {
	/// Leg length unit.
	pub grid_unit: f64,
	/// World units per second.
	pub speed: f64,
	/// Half-width of the roaming square.
	pub bound: f64,
}

impl Default for MotionParams {
	fn default() -> Self {
		Self {
			grid_unit: GRID_UNIT,
			speed: SPEED,
			bound: BOUNDS,
		}
	}
}

/// One straight leg of a [`Path`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSegment {
	/// Where the leg begins; equals the previous leg's end.
	pub start: DVec3,
	/// Corner (or exit point) the leg runs to.
	pub end: DVec3,
	/// Heading along the leg.
	pub direction: Direction,
}

impl PathSegment {
	fn new(start: DVec3, direction: Direction, length: f64) -> Self {
		Self {
			start,
			end: start + direction.to_vec3() * length,
			direction,
		}
	}

	/// Distance from start to end.
	pub fn length(&self) -> f64 {
		self.start.distance(self.end)
	}
}

/// Three contiguous segments with exactly one left and one right turn.
///
/// Paths are immutable once generated; a particle replaces its path wholesale
/// when it respawns.
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
	segments: [PathSegment; PATH_SEGMENTS],
	first_turn: Turn,
}

impl Path {
	/// All three legs in travel order.
	pub fn segments(&self) -> &[PathSegment; PATH_SEGMENTS] {
		&self.segments
	}

	/// Leg `index`, if it exists.
	pub fn segment(&self, index: usize) -> Option<&PathSegment> {
		self.segments.get(index)
	}

	/// Where a particle following this path appears.
	pub fn first_start(&self) -> DVec3 {
		self.segments[0].start
	}

	/// The turn taken at each of the two corners.
	pub fn turns(&self) -> [Turn; 2] {
		[self.first_turn, self.first_turn.opposite()]
	}
}

/// Produces dog-leg paths for a fixed set of [`MotionParams`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PathGenerator {
	params: MotionParams,
}

impl PathGenerator {
	/// Generator for the given motion numbers.
	pub fn new(params: MotionParams) -> Self {
		Self { params }
	}

	/// Motion numbers this generator was built with.
	pub fn params(&self) -> &MotionParams {
		&self.params
	}

	/// Generate a fresh path starting at `start`.
	///
	/// Draw order: initial direction, turn order, first leg, second leg.
	pub fn generate(&self, start: DVec3, entropy: &mut impl Entropy) -> Path {
		let d0 = Direction::ALL[entropy.index(Direction::ALL.len())];
		let first_turn = if entropy.unit() > 0.5 {
			Turn::Left
		} else {
			Turn::Right
		};

		let first = PathSegment::new(start, d0, self.leg_length(entropy));
		let d1 = d0.turn(first_turn);
		let second = PathSegment::new(first.end, d1, self.leg_length(entropy));
		let d2 = d1.turn(first_turn.opposite());
		let exit = PathSegment::new(second.end, d2, self.params.bound * 2.0);

		Path {
			segments: [first, second, exit],
			first_turn,
		}
	}

	fn leg_length(&self, entropy: &mut impl Entropy) -> f64 {
		(MIN_SEGMENT_STEPS + entropy.index(SEGMENT_STEP_CHOICES)) as f64 * self.params.grid_unit
	}
}

/// Generate a path with the default [`MotionParams`].
pub fn generate_path(start: DVec3, entropy: &mut impl Entropy) -> Path {
	PathGenerator::default().generate(start, entropy)
}
