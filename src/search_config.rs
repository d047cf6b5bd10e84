/// Options for configuring [`a_star_search`](crate::a_star_search)
///
/// Default options:
/// ```
/// # use waypoint_astar::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		capacity: 64,
/// 		expansion_limit: None,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
	/// The number of Waypoints to reserve memory for up front (defaults to `64`)
	///
	/// This is only a hint. Searches that visit more Waypoints grow their storage as needed.
	pub capacity: usize,
	/// `None` (default): search until the goal is found or every reachable Location was visited.
	///
	/// `Some(n)`: give up with [`SearchError::ExpansionLimit`](crate::SearchError::ExpansionLimit)
	/// after `n` Waypoints were expanded without reaching the goal.
	pub expansion_limit: Option<usize>,
}

impl SearchConfig {
	/// an example SearchConfig for small Grids or short Paths
	///
	/// Values:
	/// ```
	/// # use waypoint_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		capacity: 16,
	/// 		expansion_limit: Some(1024),
	/// 	},
	/// 	SearchConfig::SMALL
	/// );
	/// ```
	pub const SMALL: SearchConfig = SearchConfig {
		capacity: 16,
		expansion_limit: Some(1024),
	};
	/// an example SearchConfig for large Grids, trading memory for fewer reallocations
	///
	/// Values:
	/// ```
	/// # use waypoint_astar::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		capacity: 4096,
	/// 		expansion_limit: None,
	/// 	},
	/// 	SearchConfig::LARGE
	/// );
	/// ```
	pub const LARGE: SearchConfig = SearchConfig {
		capacity: 4096,
		expansion_limit: None,
	};

	/// Creates the default SearchConfig with a different `capacity`
	pub fn with_capacity(capacity: usize) -> SearchConfig {
		SearchConfig {
			capacity,
			..Default::default()
		}
	}

	/// Returns a copy of this SearchConfig that gives up after `limit` expansions
	pub fn expansion_limit(self, limit: usize) -> SearchConfig {
		SearchConfig {
			expansion_limit: Some(limit),
			..self
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			capacity: 64,
			expansion_limit: None,
		}
	}
}
