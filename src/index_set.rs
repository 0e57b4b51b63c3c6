/// A fixed-capacity bitset over block indices. The seating code uses it for the conflict set of
/// each block, and for the set of blocks that are forbidden in each group.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DenseIndexSet {
	raw: Vec<u64>
}

impl DenseIndexSet {
	/// Creates an empty set that can hold the indices `0 .. capacity`
	pub fn with_capacity(capacity: usize) -> DenseIndexSet {
		DenseIndexSet { raw: vec![0; capacity.div_ceil(64)] }
	}

	pub fn contains(&self, index: usize) -> bool {
		self.raw[index / 64] & (1 << (index % 64)) != 0
	}

	pub fn insert(&mut self, index: usize) {
		self.raw[index / 64] |= 1 << (index % 64);
	}

	/// Adds all elements of `other` to this set. Both sets must have the same capacity.
	pub fn union_with(&mut self, other: &DenseIndexSet) {
		debug_assert_eq!(self.raw.len(), other.raw.len());
		for (mine, theirs) in self.raw.iter_mut().zip(&other.raw) {
			*mine |= *theirs;
		}
	}

	pub fn len(&self) -> usize {
		self.raw.iter().map(|word| word.count_ones() as usize).sum()
	}
}
