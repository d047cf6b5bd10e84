//! A module with the most common Neighborhoods

use crate::{Cost, Location};
use std::fmt::Debug;

/// Defines how a Path can move along the Grid.
///
/// Different Scenarios may have different constraints as to how a Path may be formed.
/// For example if Agents can only move along the 4 cardinal directions, any Paths generated should
/// reflect that by only containing those steps.
///
/// This Trait provides a function to query all neighboring Locations of a Location, the length
/// of a single step and a Heuristic for how far away a goal is.
///
/// The most common implementations of this Trait are already provided by this Module:
/// - [`ManhattanNeighborhood`] for Agents that can move
/// up, down, left or right
/// - [`MooreNeighborhood`] for Agents that can move
/// up, down, left, right, as well as the 4 diagonals (up-right, ...)
pub trait Neighborhood: Clone + Debug {
	/// Provides all Neighbors of a Location
	///
	/// Note that it is not necessary to check bounds or weather the Tile at a Location is solid.
	/// That is done by the [`Map2D`](crate::Map2D).
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location>>;
	/// The distance covered by a single step from `from` to the neighboring `to`
	fn step_length(&self, from: Location, to: Location) -> Cost;
	/// Gives a Heuristic for how long it takes to reach `goal` from `location`.
	///
	/// This is usually the Distance between the two Locations in the Metric of your Neighborhood.
	///
	/// If there is no proper way of calculation how long it takes, simply return 0. This will
	/// increase the time it takes to calculate the Path, but at least it will always be correct.
	fn heuristic(&self, location: Location, goal: Location) -> Cost;
}

const CARDINAL: [(i32, i32); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];

const CARDINAL_AND_DIAGONAL: [(i32, i32); 8] = [
	(0, -1),
	(1, -1),
	(1, 0),
	(1, 1),
	(0, 1),
	(-1, 1),
	(-1, 0),
	(-1, -1),
];

fn manhattan(a: Location, b: Location) -> Cost {
	a.x().abs_diff(b.x()) as Cost + a.y().abs_diff(b.y()) as Cost
}

fn euclid(a: Location, b: Location) -> Cost {
	let dx = a.x().abs_diff(b.x()) as Cost;
	let dy = a.y().abs_diff(b.y()) as Cost;
	dx.hypot(dy)
}

/// A Neighborhood for Agents moving along the 4 cardinal directions.
///
/// Also known as [Von Neumann Neighborhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood),
/// Manhattan Metric or [Taxicab Geometry](https://en.wikipedia.org/wiki/Taxicab_geometry).
///
/// Every step has a length of 1.
///
/// ```no_code
/// A: Agent, o: reachable in one step
///   o
///   |
/// o-A-o
///   |
///   o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ManhattanNeighborhood;

impl ManhattanNeighborhood {
	/// Creates a new ManhattanNeighborhood.
	pub fn new() -> ManhattanNeighborhood {
		ManhattanNeighborhood
	}
}

impl Neighborhood for ManhattanNeighborhood {
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location>> {
		Box::new(
			CARDINAL
				.iter()
				.filter_map(move |&(dx, dy)| location.offset(dx, dy)),
		)
	}
	fn step_length(&self, from: Location, to: Location) -> Cost {
		manhattan(from, to)
	}
	fn heuristic(&self, location: Location, goal: Location) -> Cost {
		manhattan(location, goal)
	}
}

/// A Neighborhood for Agents moving along the 4 cardinal directions and the 4 diagonals.
///
/// Also known as [Moore Neighborhood](https://en.wikipedia.org/wiki/Moore_neighborhood).
///
/// Steps are measured by their Euclidean length, so a diagonal step costs `√2`. The Heuristic is
/// the straight-line distance to the goal.
///
/// ```no_code
/// A: Agent, o: reachable in one step
/// o o o
///  \|/
/// o-A-o
///  /|\
/// o o o
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct MooreNeighborhood;

impl MooreNeighborhood {
	/// Creates a new MooreNeighborhood.
	pub fn new() -> MooreNeighborhood {
		MooreNeighborhood
	}
}

impl Neighborhood for MooreNeighborhood {
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location>> {
		Box::new(
			CARDINAL_AND_DIAGONAL
				.iter()
				.filter_map(move |&(dx, dy)| location.offset(dx, dy)),
		)
	}
	fn step_length(&self, from: Location, to: Location) -> Cost {
		euclid(from, to)
	}
	fn heuristic(&self, location: Location, goal: Location) -> Cost {
		euclid(location, goal)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn locations(list: &[(i32, i32)]) -> Vec<Location> {
		list.iter().map(|&p| p.into()).collect()
	}

	#[test]
	fn test_manhattan_neighbors() {
		let neighborhood = ManhattanNeighborhood::new();
		assert_eq!(
			neighborhood.neighbors(Location::new(0, 2)).collect::<Vec<_>>(),
			locations(&[(0, 1), (1, 2), (0, 3), (-1, 2)]),
		);
	}

	#[test]
	fn test_manhattan_heuristic() {
		let neighborhood = ManhattanNeighborhood::new();
		let h = neighborhood.heuristic(Location::new(3, 1), Location::new(0, 0));
		assert_eq!(h, (3 + 1) as Cost);
		assert_eq!(
			neighborhood.step_length(Location::new(0, 0), Location::new(0, 1)),
			1.0
		);
	}

	#[test]
	fn test_moore_neighbors() {
		let neighborhood = MooreNeighborhood::new();
		let neighbors: Vec<_> = neighborhood.neighbors(Location::new(0, 2)).collect();
		assert_eq!(neighbors.len(), 8);
		assert_eq!(neighbors[1], Location::new(1, 1));
		assert!(!neighbors.contains(&Location::new(0, 2)));
	}

	#[test]
	fn test_neighbors_at_the_edge() {
		let corner = Location::new(i32::MAX, i32::MIN);
		let manhattan: Vec<_> = ManhattanNeighborhood::new().neighbors(corner).collect();
		assert_eq!(
			manhattan,
			locations(&[(i32::MAX, i32::MIN + 1), (i32::MAX - 1, i32::MIN)]),
		);
		assert_eq!(MooreNeighborhood::new().neighbors(corner).count(), 3);
	}

	#[test]
	fn test_heuristic_across_the_whole_range() {
		let (low, high) = (Location::new(i32::MIN, i32::MIN), Location::new(i32::MAX, i32::MAX));
		let side = u32::MAX as Cost;
		assert_eq!(ManhattanNeighborhood::new().heuristic(low, high), 2.0 * side);
		assert!(MooreNeighborhood::new().heuristic(low, high) > side);
	}

	#[test]
	fn test_moore_heuristic() {
		let neighborhood = MooreNeighborhood::new();
		assert_eq!(
			neighborhood.heuristic(Location::new(3, 4), Location::new(0, 0)),
			5.0
		);
		let diagonal = neighborhood.step_length(Location::new(0, 0), Location::new(1, 1));
		assert!((diagonal - std::f64::consts::SQRT_2).abs() < 1e-12);
	}
}
