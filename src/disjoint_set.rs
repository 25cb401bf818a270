// https://en.wikipedia.org/wiki/Disjoint-set_data_structure
//
// Weighted quick-union: the smaller tree is hung under the root of the
// larger one, and `find` compresses every path it walks. Both together give
// amortized near-constant union/find.
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
	parent: Vec<usize>,
	size: Vec<usize>,
	count: usize,
}

impl DisjointSet {
	/// Builds `len` singleton components labelled `0..len`.
	pub fn new(len: usize) -> Result<DisjointSet> {
		if len == 0 {
			return Err(Error::InvalidArgument { name: "universe size", value: 0 });
		}
		Ok(DisjointSet {
			parent: (0..len).collect(),
			size: vec![1; len],
			count: len,
		})
	}

	pub fn len(&self) -> usize {
		self.parent.len()
	}

	/// Number of components.
	pub fn count(&self) -> usize {
		self.count
	}

	fn validate(&self, x: usize) -> Result<()> {
		if x >= self.parent.len() {
			return Err(Error::ElementOutOfRange { index: x, len: self.parent.len() });
		}
		Ok(())
	}

	/// Canonical representative of the component containing `x`.
	pub fn find(&mut self, x: usize) -> Result<usize> {
		self.validate(x)?;
		let mut root = x;
		while self.parent[root] != root {
			root = self.parent[root];
		}
		let mut node = x;
		while node != root {
			let next = self.parent[node];
			self.parent[node] = root;
			node = next;
		}
		Ok(root)
	}

	pub fn connected(&mut self, x: usize, y: usize) -> Result<bool> {
		Ok(self.find(x)? == self.find(y)?)
	}

	/// Merges the components of `x` and `y`. Returns `false` if they were
	/// already one component.
	pub fn union(&mut self, x: usize, y: usize) -> Result<bool> {
		let x_root = self.find(x)?;
		let y_root = self.find(y)?;
		if x_root == y_root {
			return Ok(false);
		}
		if self.size[x_root] < self.size[y_root] {
			self.parent[x_root] = y_root;
			self.size[y_root] += self.size[x_root];
		} else {
			self.parent[y_root] = x_root;
			self.size[x_root] += self.size[y_root];
		}
		self.count -= 1;
		Ok(true)
	}

	pub fn component_size(&mut self, x: usize) -> Result<usize> {
		let root = self.find(x)?;
		Ok(self.size[root])
	}
}
