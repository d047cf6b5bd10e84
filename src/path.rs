use crate::Cost;

#[cfg(not(target_arch = "wasm32"))]
use std::sync::Arc;

#[cfg(target_arch = "wasm32")]
use std::rc::Rc as Arc;

/// A Path found by a search.
///
/// The first step is the start of the search and the last one is the goal.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<P> {
	path: Arc<[P]>,
	cost: Cost,
}

impl<P> Path<P> {
	/// Creates a new Path from its steps and total Cost
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path {
			path: path.into(),
			cost,
		}
	}

	/// The Cost of walking the entire Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// The number of steps, including start and goal
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path has no steps
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns an Iterator over the steps of the Path
	pub fn iter(&self) -> std::slice::Iter<P> {
		self.path.iter()
	}
}

use std::ops::Index;

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path[..] == rhs[..]
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
