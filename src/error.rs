use crate::Location;
use std::error::Error;
use std::fmt;

/// Errors returned by the searches and the Grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchError {
	/// An [`AStarState`](crate::AStarState) was created without a Topology to search on
	MissingTopology,
	/// A Location was closed that has no Waypoint in the open set.
	///
	/// This means the driver closed something it never opened, or closed it twice.
	NotOpen(Location),
	/// A [`Map2D`](crate::Map2D) was created with a width or height of 0
	InvalidDimensions {
		/// requested width
		width: usize,
		/// requested height
		height: usize,
	},
	/// A Location outside of the [`Map2D`](crate::Map2D) was written to
	OutOfBounds(Location),
	/// The search expanded [`SearchConfig::expansion_limit`](crate::SearchConfig::expansion_limit)
	/// Waypoints without reaching the goal
	ExpansionLimit {
		/// number of Waypoints expanded before giving up
		expanded: usize,
	},
}

impl fmt::Display for SearchError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::MissingTopology => write!(f, "no topology to search on"),
			Self::NotOpen(loc) => write!(f, "no open waypoint at {loc}"),
			Self::InvalidDimensions { width, height } => {
				write!(f, "invalid map size {width}x{height}")
			}
			Self::OutOfBounds(loc) => write!(f, "{loc} is outside of the map"),
			Self::ExpansionLimit { expanded } => {
				write!(f, "gave up after expanding {expanded} waypoints")
			}
		}
	}
}

impl Error for SearchError {}

#[test]
fn display() {
	assert_eq!(
		SearchError::NotOpen(Location::new(2, 2)).to_string(),
		"no open waypoint at (2, 2)"
	);
	assert_eq!(
		SearchError::InvalidDimensions {
			width: 0,
			height: 3
		}
		.to_string(),
		"invalid map size 0x3"
	);
}
