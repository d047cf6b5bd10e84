#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate for the bookkeeping of A* searches on a Grid.
//!
//! ## Introduction
//! An A* search keeps track of two sets of Locations: the *open* set of Locations that were
//! discovered but not yet finalized, and the *closed* set of Locations whose cheapest route is
//! known. In every step, the open Location with the lowest estimated total cost is expanded:
//! its neighbors are offered to the open set and it is moved to the closed set.
//!
//! [`AStarState`] implements exactly that bookkeeping. Each discovered Location is stored as a
//! [`Waypoint`], which remembers the Waypoint it was reached from, the Cost of getting there
//! and an estimate for the remaining Cost to the goal. If a Location is reached again on a
//! cheaper route, the cheaper Waypoint replaces the old one.
//!
//! The Grid itself is described by the [`Topology`] Trait. This crate provides [`Map2D`] as a
//! simple implementation, together with the [`neighbors`] that define how Agents move on it,
//! and [`a_star_search`] as a driver that runs a complete search.
//!
//! ## Examples
//! Running a complete search:
//! ```
//! use waypoint_astar::{prelude::*, Location};
//!
//! // 5x5 Map, start at (0, 2), finish at (4, 2)
//! let mut map = Map2D::with_neighborhood(5, 5, ManhattanNeighborhood::new())?;
//!
//! // a wall in the way, with a gap at the bottom
//! for y in 0..4 {
//!     map.set_cell_cost(Location::new(2, y), -1)?;
//! }
//!
//! let path = a_star_search(&map, map.start(), &SearchConfig::default())?;
//!
//! let path = path.unwrap();
//! assert_eq!(path.cost(), 8.0);
//! assert!(path.iter().any(|&loc| loc == Location::new(2, 4)));
//! # Ok::<(), waypoint_astar::SearchError>(())
//! ```
//!
//! Driving a search manually:
//! ```
//! use waypoint_astar::{prelude::*, Location, Waypoint};
//!
//! let map = Map2D::with_neighborhood(3, 1, ManhattanNeighborhood::new())?;
//! let mut state = AStarState::new(&map);
//!
//! let start = map.start();
//! state.add_open_waypoint(Waypoint::start(start, map.heuristic(start)));
//!
//! while let Some((id, best)) = state.min_open_waypoint() {
//!     let (location, cost) = (best.location(), best.previous_cost());
//!     if map.is_goal(location) {
//!         let path = state.path_to(id).unwrap();
//!         assert_eq!(path, vec![Location::new(0, 0), Location::new(1, 0), Location::new(2, 0)]);
//!         break;
//!     }
//!     state.close_waypoint(location)?;
//!     for next in map.neighbors(location) {
//!         if !state.is_location_closed(next) {
//!             let cost = cost + map.step_cost(location, next);
//!             state.add_open_waypoint(Waypoint::new(next, Some(id), cost, map.heuristic(next)));
//!         }
//!     }
//! }
//! # Ok::<(), waypoint_astar::SearchError>(())
//! ```
//!
//! ## Features
//! - `parallel` (default): scans the open set on multiple threads using rayon. The selected
//!   Waypoint is the same as without the feature.
//! - `log`: logs relaxations and expansions at trace level and the outcome of every
//!   [`a_star_search`] at debug level, including how long it took.

/// The Type used for all Costs
pub type Cost = f64;

/// A specialized [`HashMap`](hashbrown::HashMap) keyed by [`Location`]
pub type LocationMap<V> = hashbrown::HashMap<Location, V>;

mod location;
pub use self::location::Location;

mod waypoint;
pub use self::waypoint::{Waypoint, WaypointID};

mod error;
pub use self::error::SearchError;

mod astar_state;
pub use self::astar_state::AStarState;

mod topology;
pub use self::topology::Topology;

pub mod neighbors;

mod map;
pub use self::map::Map2D;

mod path;
pub use self::path::Path;

mod search_config;
pub use self::search_config::SearchConfig;

mod a_star;
pub use self::a_star::a_star_search;

/// The prelude for this crate.
pub mod prelude {
	pub use crate::{
		a_star_search,
		neighbors::{ManhattanNeighborhood, MooreNeighborhood, Neighborhood},
		AStarState, Map2D, SearchConfig, Topology,
	};
}
