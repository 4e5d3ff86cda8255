//! Cardinal directions in the particle plane and the turns between them.

use glam::DVec3;

/// One of the four axis-aligned unit directions of the XY plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
	/// +x
	Right,
	/// -x
	Left,
	/// +y
	Up,
	/// -y
	Down,
}

/// A quarter turn, counter-clockwise (`Left`) or clockwise (`Right`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
	/// Counter-clockwise.
	Left,
	/// Clockwise.
	Right,
}

impl Turn {
	/// The complementary turn.
	pub fn opposite(self) -> Self {
		match self {
			Turn::Left => Turn::Right,
			Turn::Right => Turn::Left,
		}
	}
}

impl Direction {
	/// All directions, in the order random draws index them.
	pub const ALL: [Direction; 4] = [
		Direction::Right,
		Direction::Left,
		Direction::Up,
		Direction::Down,
	];

	/// right -> up -> left -> down -> right
	pub fn turn_left(self) -> Self {
		match self {
			Direction::Right => Direction::Up,
			Direction::Up => Direction::Left,
			Direction::Left => Direction::Down,
			Direction::Down => Direction::Right,
		}
	}

	/// Inverse of [`Direction::turn_left`].
	pub fn turn_right(self) -> Self {
		match self {
			Direction::Right => Direction::Down,
			Direction::Down => Direction::Left,
			Direction::Left => Direction::Up,
			Direction::Up => Direction::Right,
		}
	}

	/// Apply a quarter turn.
	pub fn turn(self, turn: Turn) -> Self {
		match turn {
			Turn::Left => self.turn_left(),
			Turn::Right => self.turn_right(),
		}
	}

	/// Unit vector for this direction (z is always 0).
	pub fn to_vec3(self) -> DVec3 {
		match self {
			Direction::Right => DVec3::X,
			Direction::Left => DVec3::NEG_X,
			Direction::Up => DVec3::Y,
			Direction::Down => DVec3::NEG_Y,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn four_turns_return_to_start() {
		for dir in Direction::ALL {
			let left = dir.turn_left().turn_left().turn_left().turn_left();
			let right = dir.turn_right().turn_right().turn_right().turn_right();
			assert_eq!(left, dir);
			assert_eq!(right, dir);
		}
	}

	#[test]
	fn left_and_right_are_inverse() {
		for dir in Direction::ALL {
			assert_eq!(dir.turn_left().turn_right(), dir);
			assert_eq!(dir.turn_right().turn_left(), dir);
			assert_ne!(dir.turn_left(), dir.turn_right());
		}
	}

	#[test]
	fn turn_left_is_counter_clockwise() {
		// Rotating a vector 90 degrees CCW in the XY plane maps (x, y) to (-y, x).
		for dir in Direction::ALL {
			let v = dir.to_vec3();
			let rotated = dir.turn_left().to_vec3();
			assert_eq!(rotated, DVec3::new(-v.y, v.x, 0.0));
		}
	}

	#[test]
	fn turn_dispatches_by_kind() {
		assert_eq!(Direction::Up.turn(Turn::Left), Direction::Left);
		assert_eq!(Direction::Up.turn(Turn::Right), Direction::Right);
		assert_eq!(Turn::Left.opposite(), Turn::Right);
		assert_eq!(Turn::Right.opposite(), Turn::Left);
	}
}
