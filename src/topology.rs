use crate::{Cost, Location};

/// Everything a search needs to know about the Grid it runs on.
///
/// [`AStarState`](crate::AStarState) only stores a Topology; it is the driver
/// ([`a_star_search`](crate::a_star_search)) that asks it for neighbors, costs and the goal.
///
/// [`Map2D`](crate::Map2D) is the provided implementation for plain Grids.
pub trait Topology {
	/// All Locations that can be entered directly from `location`.
	///
	/// Solid Cells are expected to be filtered out already.
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location> + '_>;
	/// The Cost of stepping from `from` onto the neighboring Location `to`. Never negative.
	fn step_cost(&self, from: Location, to: Location) -> Cost;
	/// Estimates the Cost of walking from `location` to the goal.
	///
	/// Returning 0 always works, but makes the search visit a lot more Locations. An estimate
	/// that is larger than the actual Cost may lead to Paths that are not the cheapest.
	fn heuristic(&self, location: Location) -> Cost;
	/// `true` if `location` is the goal of the search.
	fn is_goal(&self, location: Location) -> bool;
}

impl<T: Topology + ?Sized> Topology for &T {
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location> + '_> {
		(**self).neighbors(location)
	}
	fn step_cost(&self, from: Location, to: Location) -> Cost {
		(**self).step_cost(from, to)
	}
	fn heuristic(&self, location: Location) -> Cost {
		(**self).heuristic(location)
	}
	fn is_goal(&self, location: Location) -> bool {
		(**self).is_goal(location)
	}
}
