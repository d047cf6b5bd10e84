use crate::{Cost, Location};
use std::cmp::Ordering;

/// The Type used to reference a Waypoint stored in an [`AStarState`](crate::AStarState)
pub type WaypointID = usize;

/// A Location reached during a search, together with how it was reached.
///
/// `previous` points to the Waypoint this one was reached from (`None` for the start), so
/// following it repeatedly walks back to the start of the search. The referenced Waypoint has
/// to be stored in the same [`AStarState`](crate::AStarState) as this one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Waypoint {
	location: Location,
	previous: Option<WaypointID>,
	previous_cost: Cost,
	heuristic_cost: Cost,
}

impl Waypoint {
	/// Creates a new Waypoint
	///
	/// ## Arguments
	/// - `location` - the Cell this Waypoint sits on
	/// - `previous` - the Waypoint it was reached from, `None` for the start
	/// - `previous_cost` - the Cost of walking from the start to `location`
	/// - `heuristic_cost` - the estimated Cost of walking from `location` to the goal
	pub fn new(
		location: Location,
		previous: Option<WaypointID>,
		previous_cost: Cost,
		heuristic_cost: Cost,
	) -> Waypoint {
		debug_assert!(previous_cost >= 0.0, "negative previous cost {}", previous_cost);
		debug_assert!(heuristic_cost >= 0.0, "negative heuristic cost {}", heuristic_cost);
		Waypoint {
			location,
			previous,
			previous_cost,
			heuristic_cost,
		}
	}

	/// Creates the Waypoint a search starts from
	pub fn start(location: Location, heuristic_cost: Cost) -> Waypoint {
		Waypoint::new(location, None, 0.0, heuristic_cost)
	}

	/// The Cell this Waypoint sits on
	pub fn location(&self) -> Location {
		self.location
	}

	/// The Waypoint this one was reached from
	pub fn previous(&self) -> Option<WaypointID> {
		self.previous
	}

	/// Cost of the best known route from the start
	pub fn previous_cost(&self) -> Cost {
		self.previous_cost
	}

	/// Estimated Cost from here to the goal
	pub fn heuristic_cost(&self) -> Cost {
		self.heuristic_cost
	}

	/// `previous_cost + heuristic_cost`, the key the open set is ranked by
	pub fn total_cost(&self) -> Cost {
		self.previous_cost + self.heuristic_cost
	}

	/// Ranks Waypoints by total cost, falling back to the Location for equal costs.
	pub(crate) fn rank(&self, other: &Waypoint) -> Ordering {
		self.total_cost()
			.total_cmp(&other.total_cost())
			.then_with(|| self.location.cmp(&other.location))
	}
}
