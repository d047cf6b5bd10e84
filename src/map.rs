use crate::{
	neighbors::{MooreNeighborhood, Neighborhood},
	Cost, Location, SearchError, Topology,
};

/// A rectangular Grid with a start and a finish.
///
/// Every Cell stores the extra Cost of entering it, on top of the length of the step
/// (see [`Neighborhood::step_length`]). A negative Cost marks the Cell as solid.
///
/// The start defaults to the middle of the left edge and the finish to the middle of the right
/// edge.
///
/// ## Examples
/// ```
/// use waypoint_astar::{prelude::*, Location};
///
/// let mut map = Map2D::with_neighborhood(5, 3, ManhattanNeighborhood::new())?;
/// assert_eq!(map.start(), Location::new(0, 1));
/// assert_eq!(map.finish(), Location::new(4, 1));
///
/// // build a wall with a swamp in the gap
/// map.set_cell_cost(Location::new(2, 0), -1)?;
/// map.set_cell_cost(Location::new(2, 1), 5)?;
/// map.set_cell_cost(Location::new(2, 2), -1)?;
///
/// let path = a_star_search(&map, map.start(), &SearchConfig::default())?.unwrap();
/// assert_eq!(path.cost(), 4.0 + 5.0);
/// # Ok::<(), waypoint_astar::SearchError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Map2D<N: Neighborhood = MooreNeighborhood> {
	width: usize,
	height: usize,
	cells: Vec<isize>,
	start: Location,
	finish: Location,
	neighborhood: N,
}

impl Map2D {
	/// Creates a new Map where Agents can move in all 8 directions.
	///
	/// ## Errors
	/// [`SearchError::InvalidDimensions`] if `width` or `height` is 0.
	pub fn new(width: usize, height: usize) -> Result<Map2D, SearchError> {
		Map2D::with_neighborhood(width, height, MooreNeighborhood::new())
	}
}

impl<N: Neighborhood> Map2D<N> {
	/// Creates a new Map of free Cells
	///
	/// ## Errors
	/// [`SearchError::InvalidDimensions`] if `width` or `height` is 0 or too large to be
	/// addressed by a [`Location`].
	pub fn with_neighborhood(
		width: usize,
		height: usize,
		neighborhood: N,
	) -> Result<Map2D<N>, SearchError> {
		let max = i32::MAX as usize;
		if width == 0 || height == 0 || width > max || height > max {
			return Err(SearchError::InvalidDimensions { width, height });
		}
		let mid = (height / 2) as i32;
		Ok(Map2D {
			width,
			height,
			cells: vec![0; width * height],
			start: Location::new(0, mid),
			finish: Location::new(width as i32 - 1, mid),
			neighborhood,
		})
	}

	/// The number of columns
	pub fn width(&self) -> usize {
		self.width
	}

	/// The number of rows
	pub fn height(&self) -> usize {
		self.height
	}

	/// The Neighborhood used to move on this Map
	pub fn neighborhood(&self) -> &N {
		&self.neighborhood
	}

	fn index(&self, location: Location) -> Option<usize> {
		if self.contains(location) {
			Some(location.y() as usize * self.width + location.x() as usize)
		} else {
			None
		}
	}

	/// `true` if `location` is on the Map
	pub fn contains(&self, location: Location) -> bool {
		location.x() >= 0
			&& location.y() >= 0
			&& (location.x() as usize) < self.width
			&& (location.y() as usize) < self.height
	}

	/// The Cost of entering the Cell at `location`, or `None` if it is not on the Map
	pub fn cell_cost(&self, location: Location) -> Option<isize> {
		self.index(location).map(|i| self.cells[i])
	}

	/// Changes the Cost of entering the Cell at `location`. Negative Costs make it solid.
	///
	/// ## Errors
	/// [`SearchError::OutOfBounds`] if `location` is not on the Map
	pub fn set_cell_cost(&mut self, location: Location, cost: isize) -> Result<(), SearchError> {
		let i = self
			.index(location)
			.ok_or(SearchError::OutOfBounds(location))?;
		self.cells[i] = cost;
		Ok(())
	}

	/// `true` if `location` is on the Map and not solid
	pub fn is_passable(&self, location: Location) -> bool {
		self.cell_cost(location).map_or(false, |cost| cost >= 0)
	}

	/// Where searches on this Map start
	pub fn start(&self) -> Location {
		self.start
	}

	/// Moves the start of the Map
	///
	/// ## Errors
	/// [`SearchError::OutOfBounds`] if `location` is not on the Map
	pub fn set_start(&mut self, location: Location) -> Result<(), SearchError> {
		if !self.contains(location) {
			return Err(SearchError::OutOfBounds(location));
		}
		self.start = location;
		Ok(())
	}

	/// The goal of searches on this Map
	pub fn finish(&self) -> Location {
		self.finish
	}

	/// Moves the goal of the Map
	///
	/// ## Errors
	/// [`SearchError::OutOfBounds`] if `location` is not on the Map
	pub fn set_finish(&mut self, location: Location) -> Result<(), SearchError> {
		if !self.contains(location) {
			return Err(SearchError::OutOfBounds(location));
		}
		self.finish = location;
		Ok(())
	}
}

impl<N: Neighborhood> Topology for Map2D<N> {
	fn neighbors(&self, location: Location) -> Box<dyn Iterator<Item = Location> + '_> {
		Box::new(
			self.neighborhood
				.neighbors(location)
				.filter(move |&other| self.is_passable(other)),
		)
	}
	fn step_cost(&self, from: Location, to: Location) -> Cost {
		let cell = self.cell_cost(to).unwrap_or(0).max(0);
		cell as Cost + self.neighborhood.step_length(from, to)
	}
	fn heuristic(&self, location: Location) -> Cost {
		self.neighborhood.heuristic(location, self.finish)
	}
	fn is_goal(&self, location: Location) -> bool {
		location == self.finish
	}
}
