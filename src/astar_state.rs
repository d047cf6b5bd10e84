use crate::{Location, LocationMap, Path, SearchError, Waypoint, WaypointID};

/// The open and closed Waypoints of a single A* search.
///
/// Every Location is in one of three states: unseen, open (discovered, but not finalized) or
/// closed (finalized). A Location is never in both sets, and once it is closed it stays closed
/// until [`clear`](AStarState::clear) is called.
///
/// The Waypoints themselves are stored in an arena inside the state. Closed Waypoints are
/// never touched again, so the `previous` chain of any Waypoint whose parents are closed
/// stays valid for the whole search.
///
/// ## Examples
/// Basic usage:
/// ```
/// use waypoint_astar::{prelude::*, Location, Waypoint};
///
/// let map = Map2D::new(5, 5)?;
/// let mut state = AStarState::new(&map);
///
/// let start = Location::new(0, 0);
/// state.add_open_waypoint(Waypoint::start(start, 5.0));
/// assert_eq!(state.num_open_waypoints(), 1);
///
/// let (id, best) = state.min_open_waypoint().unwrap();
/// assert_eq!(best.location(), start);
///
/// state.close_waypoint(start)?;
/// assert!(state.is_location_closed(start));
/// assert!(state.min_open_waypoint().is_none());
///
/// // offering a cheaper route replaces the current one
/// let next = Location::new(1, 0);
/// assert!(state.add_open_waypoint(Waypoint::new(next, Some(id), 10.0, 4.0)));
/// assert!(state.add_open_waypoint(Waypoint::new(next, Some(id), 3.0, 4.0)));
/// assert!(!state.add_open_waypoint(Waypoint::new(next, Some(id), 7.0, 4.0)));
/// assert_eq!(state.open_waypoint(next).unwrap().previous_cost(), 3.0);
/// # Ok::<(), waypoint_astar::SearchError>(())
/// ```
#[derive(Clone, Debug)]
pub struct AStarState<T> {
	topology: T,
	waypoints: slab::Slab<Waypoint>,
	open: LocationMap<WaypointID>,
	closed: LocationMap<WaypointID>,
}

impl<T> AStarState<T> {
	/// Creates a new, empty state that searches on `topology`.
	pub fn new(topology: T) -> AStarState<T> {
		AStarState {
			topology,
			waypoints: slab::Slab::new(),
			open: LocationMap::default(),
			closed: LocationMap::default(),
		}
	}

	/// Creates a new, empty state with room for `capacity` Waypoints before reallocating.
	pub fn with_capacity(topology: T, capacity: usize) -> AStarState<T> {
		AStarState {
			topology,
			waypoints: slab::Slab::with_capacity(capacity),
			open: LocationMap::with_capacity(capacity / 2),
			closed: LocationMap::with_capacity(capacity),
		}
	}

	/// Creates a new state from a Topology that might not be present.
	///
	/// ## Errors
	/// [`SearchError::MissingTopology`] if `topology` is `None`.
	pub fn try_new(topology: Option<T>) -> Result<AStarState<T>, SearchError> {
		topology
			.map(AStarState::new)
			.ok_or(SearchError::MissingTopology)
	}

	/// The Topology this state is searching on
	pub fn topology(&self) -> &T {
		&self.topology
	}

	/// Returns the open Waypoint with the lowest total cost, or `None` if nothing is open.
	///
	/// Waypoints with the same total cost are decided by their Location (smaller `x`, then
	/// smaller `y`), so the result does not depend on the order the Waypoints were added in.
	///
	/// `None` means the frontier is exhausted and the goal is unreachable.
	pub fn min_open_waypoint(&self) -> Option<(WaypointID, &Waypoint)> {
		let waypoints = &self.waypoints;

		#[cfg(feature = "parallel")]
		let min = {
			use rayon::prelude::*;
			self.open
				.par_values()
				.map(|&id| (id, &waypoints[id]))
				.min_by(|(_, a), (_, b)| a.rank(b))
		};
		#[cfg(not(feature = "parallel"))]
		let min = self
			.open
			.values()
			.map(|&id| (id, &waypoints[id]))
			.min_by(|(_, a), (_, b)| a.rank(b));

		min
	}

	/// Adds a Waypoint to the open set, or replaces the one already open at its Location.
	///
	/// An existing open Waypoint is only replaced if `waypoint` reached the Location with a
	/// strictly lower `previous_cost`. The replacement takes over the slot (and [`WaypointID`])
	/// of the old Waypoint, so open Waypoints must not be used as `previous` of another one.
	/// The closed set is not checked: closed Locations must be filtered out before calling this.
	///
	/// Returns `true` if `waypoint` was stored.
	pub fn add_open_waypoint(&mut self, waypoint: Waypoint) -> bool {
		debug_assert!(
			waypoint.previous().map_or(true, |id| self.waypoints.contains(id)),
			"previous Waypoint of {} is not part of this search",
			waypoint.location()
		);
		let location = waypoint.location();
		if let Some(&resident) = self.open.get(&location) {
			if waypoint.previous_cost() >= self.waypoints[resident].previous_cost() {
				return false;
			}
			#[cfg(feature = "log")]
			log::trace!(
				"relaxed {}: {} -> {}",
				location,
				self.waypoints[resident].previous_cost(),
				waypoint.previous_cost()
			);
			debug_assert_ne!(
				waypoint.previous(),
				Some(resident),
				"{} reached from itself",
				location
			);
			self.waypoints[resident] = waypoint;
			return true;
		}
		let id = self.waypoints.insert(waypoint);
		self.open.insert(location, id);
		true
	}

	/// The number of Locations in the open set
	pub fn num_open_waypoints(&self) -> usize {
		self.open.len()
	}

	/// The number of Locations in the closed set
	pub fn num_closed_waypoints(&self) -> usize {
		self.closed.len()
	}

	/// Moves the Waypoint at `location` from the open set to the closed set.
	///
	/// Returns the ID of the closed Waypoint.
	///
	/// ## Errors
	/// [`SearchError::NotOpen`] if there is no open Waypoint at `location`. Nothing is changed
	/// in that case.
	pub fn close_waypoint(&mut self, location: Location) -> Result<WaypointID, SearchError> {
		let id = self
			.open
			.remove(&location)
			.ok_or(SearchError::NotOpen(location))?;
		self.closed.insert(location, id);
		Ok(id)
	}

	/// `true` if `location` has been closed
	pub fn is_location_closed(&self, location: Location) -> bool {
		self.closed.contains_key(&location)
	}

	/// The open Waypoint at `location`, if any
	pub fn open_waypoint(&self, location: Location) -> Option<&Waypoint> {
		self.open.get(&location).map(|&id| &self.waypoints[id])
	}

	/// The closed Waypoint at `location`, if any
	pub fn closed_waypoint(&self, location: Location) -> Option<&Waypoint> {
		self.closed.get(&location).map(|&id| &self.waypoints[id])
	}

	/// Looks up a Waypoint stored in this state
	pub fn waypoint(&self, id: WaypointID) -> Option<&Waypoint> {
		self.waypoints.get(id)
	}

	/// Builds the Path from the start of the search to the Waypoint `id`.
	///
	/// The steps are collected by following `previous` back to the start. The Cost of the
	/// Path is the `previous_cost` of the Waypoint.
	///
	/// Returns `None` if `id` is unknown or its chain does not lead back to a start.
	pub fn path_to(&self, id: WaypointID) -> Option<Path<Location>> {
		let target = self.waypoints.get(id)?;
		let mut steps = vec![target.location()];
		let mut current = target.previous();

		while let Some(prev) = current {
			if steps.len() > self.waypoints.len() {
				return None;
			}
			let waypoint = self.waypoints.get(prev)?;
			steps.push(waypoint.location());
			current = waypoint.previous();
		}
		steps.reverse();

		Some(Path::new(steps, target.previous_cost()))
	}

	/// Forgets all Waypoints, keeping the allocations and the Topology.
	///
	/// All [`WaypointID`]s handed out before are invalid afterwards.
	pub fn clear(&mut self) {
		self.waypoints.clear();
		self.open.clear();
		self.closed.clear();
	}
}

use std::ops::Index;
impl<T> Index<WaypointID> for AStarState<T> {
	type Output = Waypoint;
	#[track_caller]
	fn index(&self, index: WaypointID) -> &Waypoint {
		&self.waypoints[index]
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn state() -> AStarState<()> {
		AStarState::new(())
	}

	fn waypoint(x: i32, y: i32, previous_cost: f64, heuristic_cost: f64) -> Waypoint {
		Waypoint::new(Location::new(x, y), None, previous_cost, heuristic_cost)
	}

	#[test]
	fn missing_topology() {
		let state = AStarState::<()>::try_new(None);
		assert_eq!(state.err(), Some(SearchError::MissingTopology));

		let state = AStarState::try_new(Some(42)).unwrap();
		assert_eq!(*state.topology(), 42);
	}

	#[test]
	fn empty() {
		let state = state();
		assert!(state.min_open_waypoint().is_none());
		assert_eq!(state.num_open_waypoints(), 0);
		assert_eq!(state.num_closed_waypoints(), 0);
	}

	#[test]
	fn single_waypoint() {
		let mut state = state();
		assert!(state.add_open_waypoint(waypoint(0, 0, 0.0, 5.0)));

		assert_eq!(state.num_open_waypoints(), 1);
		let (_, min) = state.min_open_waypoint().unwrap();
		assert_eq!(min.location(), Location::new(0, 0));
		assert_eq!(min.total_cost(), 5.0);
	}

	#[test]
	fn relaxation() {
		let mut state = state();
		let loc = Location::new(1, 0);

		assert!(state.add_open_waypoint(waypoint(1, 0, 10.0, 1.0)));
		assert!(state.add_open_waypoint(waypoint(1, 0, 3.0, 1.0)));
		assert_eq!(state.open_waypoint(loc).unwrap().previous_cost(), 3.0);

		assert!(!state.add_open_waypoint(waypoint(1, 0, 7.0, 1.0)));
		assert_eq!(state.open_waypoint(loc).unwrap().previous_cost(), 3.0);

		// equal cost does not replace
		assert!(!state.add_open_waypoint(waypoint(1, 0, 3.0, 0.0)));
		assert_eq!(state.open_waypoint(loc).unwrap().heuristic_cost(), 1.0);

		assert_eq!(state.num_open_waypoints(), 1);
	}

	#[test]
	fn relaxation_reuses_slot() {
		let mut state = state();
		let loc = Location::new(1, 0);
		state.add_open_waypoint(waypoint(1, 0, 10.0, 1.0));
		let (id, _) = state.min_open_waypoint().unwrap();

		for cost in [8.0, 6.0, 9.0, 3.0] {
			state.add_open_waypoint(waypoint(1, 0, cost, 1.0));
		}

		let (relaxed_id, relaxed) = state.min_open_waypoint().unwrap();
		assert_eq!(relaxed_id, id);
		assert_eq!(relaxed.previous_cost(), 3.0);
		assert_eq!(state.open_waypoint(loc), state.waypoint(id));
		assert!(state.waypoint(id + 1).is_none());
	}

	#[test]
	fn relaxation_ignores_heuristic() {
		let mut state = state();
		assert!(state.add_open_waypoint(waypoint(1, 1, 4.0, 10.0)));
		// lower total cost, but a longer route
		assert!(!state.add_open_waypoint(waypoint(1, 1, 5.0, 0.0)));
		assert_eq!(
			state.open_waypoint(Location::new(1, 1)).unwrap().previous_cost(),
			4.0
		);
	}

	#[test]
	fn min_open() {
		let mut state = state();
		state.add_open_waypoint(waypoint(0, 0, 4.0, 4.0));
		state.add_open_waypoint(waypoint(3, 1, 1.0, 2.0));
		state.add_open_waypoint(waypoint(2, 2, 2.0, 2.0));

		let (id, min) = state.min_open_waypoint().unwrap();
		assert_eq!(min.location(), Location::new(3, 1));
		assert_eq!(state[id].location(), Location::new(3, 1));
	}

	#[test]
	fn min_open_tie_break() {
		let mut state = state();
		state.add_open_waypoint(waypoint(4, 0, 1.0, 1.0));
		state.add_open_waypoint(waypoint(2, 7, 2.0, 0.0));
		state.add_open_waypoint(waypoint(2, 3, 0.0, 2.0));

		let (_, min) = state.min_open_waypoint().unwrap();
		assert_eq!(min.location(), Location::new(2, 3));
	}

	#[test]
	fn close() {
		let mut state = state();
		let loc = Location::new(2, 2);
		state.add_open_waypoint(waypoint(2, 2, 0.0, 0.0));

		let id = state.close_waypoint(loc).unwrap();

		assert!(state.is_location_closed(loc));
		assert_eq!(state.num_open_waypoints(), 0);
		assert_eq!(state.num_closed_waypoints(), 1);
		assert!(state.open_waypoint(loc).is_none());
		assert_eq!(state.closed_waypoint(loc), state.waypoint(id));
	}

	#[test]
	fn close_unknown() {
		let mut state = state();
		state.add_open_waypoint(waypoint(0, 0, 0.0, 0.0));
		let missing = Location::new(5, 5);

		assert_eq!(
			state.close_waypoint(missing),
			Err(SearchError::NotOpen(missing))
		);
		assert!(!state.is_location_closed(missing));
		assert_eq!(state.num_open_waypoints(), 1);
		assert_eq!(state.num_closed_waypoints(), 0);
	}

	#[test]
	fn close_twice() {
		let mut state = state();
		let loc = Location::new(1, 1);
		state.add_open_waypoint(waypoint(1, 1, 0.0, 0.0));

		assert!(state.close_waypoint(loc).is_ok());
		assert_eq!(state.close_waypoint(loc), Err(SearchError::NotOpen(loc)));
		assert!(state.is_location_closed(loc));
	}

	#[test]
	fn path_to() {
		let mut state = state();
		let a = Location::new(0, 0);
		let b = Location::new(1, 0);
		let c = Location::new(1, 1);

		state.add_open_waypoint(Waypoint::start(a, 2.0));
		let a_id = state.close_waypoint(a).unwrap();
		state.add_open_waypoint(Waypoint::new(b, Some(a_id), 1.0, 1.0));
		let b_id = state.close_waypoint(b).unwrap();
		state.add_open_waypoint(Waypoint::new(c, Some(b_id), 2.0, 0.0));
		let (c_id, _) = state.min_open_waypoint().unwrap();

		let path = state.path_to(c_id).unwrap();
		assert_eq!(path, vec![a, b, c]);
		assert_eq!(path.cost(), 2.0);

		assert!(state.path_to(42).is_none());
	}

	#[test]
	fn clear() {
		let mut state = state();
		state.add_open_waypoint(waypoint(0, 0, 0.0, 0.0));
		state.add_open_waypoint(waypoint(0, 1, 0.0, 0.0));
		state.close_waypoint(Location::new(0, 0)).unwrap();

		state.clear();

		assert_eq!(state.num_open_waypoints(), 0);
		assert!(!state.is_location_closed(Location::new(0, 0)));
		assert!(state.waypoint(0).is_none());
	}
}
