use std::fmt;

/// A Cell on the Grid.
///
/// Locations are compared and hashed by their coordinates and are used as the keys of the
/// open and closed sets. The ordering (`x` first, then `y`) is what
/// [`AStarState::min_open_waypoint`](crate::AStarState::min_open_waypoint) uses to pick
/// between Waypoints of equal cost.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
	x: i32,
	y: i32,
}

impl Location {
	/// Creates a new Location at `(x, y)`
	pub const fn new(x: i32, y: i32) -> Location {
		Location { x, y }
	}

	/// The horizontal coordinate
	pub const fn x(self) -> i32 {
		self.x
	}

	/// The vertical coordinate
	pub const fn y(self) -> i32 {
		self.y
	}

	/// The Location shifted by `(dx, dy)`, or `None` if that leaves the range of `i32`
	pub const fn offset(self, dx: i32, dy: i32) -> Option<Location> {
		match (self.x.checked_add(dx), self.y.checked_add(dy)) {
			(Some(x), Some(y)) => Some(Location::new(x, y)),
			_ => None,
		}
	}
}

impl From<(i32, i32)> for Location {
	fn from((x, y): (i32, i32)) -> Location {
		Location::new(x, y)
	}
}

impl From<Location> for (i32, i32) {
	fn from(loc: Location) -> (i32, i32) {
		(loc.x, loc.y)
	}
}

impl fmt::Display for Location {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "({}, {})", self.x, self.y)
	}
}
