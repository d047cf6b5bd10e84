use crate::{AStarState, Location, Path, SearchConfig, SearchError, Topology, Waypoint};

/// Searches the cheapest Path from `start` to the goal of `topology` using the
/// [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm).
///
/// The search repeatedly takes the open Waypoint with the lowest total cost, stops if it is the
/// goal, and otherwise closes it and offers all of its neighbors that are not closed yet to the
/// open set. Closed Locations are never opened again, so the result is only guaranteed to be the
/// cheapest Path if the Heuristic of `topology` never overestimates.
///
/// ## Examples
/// Basic usage:
/// ```
/// use waypoint_astar::{prelude::*, Location};
///
/// let mut map = Map2D::with_neighborhood(4, 4, ManhattanNeighborhood::new())?;
/// map.set_start(Location::new(0, 0))?;
/// map.set_finish(Location::new(3, 3))?;
///
/// let path = a_star_search(&map, map.start(), &SearchConfig::default())?;
///
/// assert!(path.is_some());
/// let path = path.unwrap();
/// assert_eq!(path.cost(), 6.0);
/// assert_eq!(path[0], Location::new(0, 0));
/// assert_eq!(path[path.len() - 1], Location::new(3, 3));
/// # Ok::<(), waypoint_astar::SearchError>(())
/// ```
///
/// ## Returns
/// - `Ok(Some(path))` with the first step being `start` and the last one the goal.
/// - `Ok(None)` if the goal cannot be reached from `start`.
///
/// ## Errors
/// [`SearchError::ExpansionLimit`] if [`config.expansion_limit`](SearchConfig::expansion_limit)
/// was reached before the goal.
pub fn a_star_search<T: Topology>(
	topology: T,
	start: Location,
	config: &SearchConfig,
) -> Result<Option<Path<Location>>, SearchError> {
	#[cfg(feature = "log")]
	let timer = std::time::Instant::now();

	let mut state = AStarState::with_capacity(topology, config.capacity);
	let heuristic = state.topology().heuristic(start);
	state.add_open_waypoint(Waypoint::start(start, heuristic));

	let mut expanded = 0;
	let mut neighbors = vec![];

	while let Some((current_id, current)) = state.min_open_waypoint() {
		let current_location = current.location();
		let current_cost = current.previous_cost();

		if state.topology().is_goal(current_location) {
			#[cfg(feature = "log")]
			log::debug!(
				"found path to {} with cost {} after {} expansions in {:?}",
				current_location,
				current_cost,
				expanded,
				timer.elapsed()
			);
			return Ok(state.path_to(current_id));
		}
		if config.expansion_limit.is_some_and(|limit| expanded >= limit) {
			return Err(SearchError::ExpansionLimit { expanded });
		}

		state.close_waypoint(current_location)?;
		#[cfg(feature = "log")]
		log::trace!("expanding {} (cost {})", current_location, current_cost);

		neighbors.clear();
		neighbors.extend(state.topology().neighbors(current_location));
		for &other in neighbors.iter() {
			if state.is_location_closed(other) {
				continue;
			}
			let other_cost = current_cost + state.topology().step_cost(current_location, other);
			let heuristic = state.topology().heuristic(other);
			state.add_open_waypoint(Waypoint::new(
				other,
				Some(current_id),
				other_cost,
				heuristic,
			));
		}
		expanded += 1;
	}

	#[cfg(feature = "log")]
	log::debug!(
		"no path from {} after {} expansions in {:?}",
		start,
		expanded,
		timer.elapsed()
	);
	Ok(None)
}
