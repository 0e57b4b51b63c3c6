use rand::Rng;
use rand::seq::SliceRandom;

/// The order in which the blocks are handed to the greedy assignment
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BlockOrdering {
	blocks: Vec<usize>
}

impl BlockOrdering {
	/// Visits the blocks in the order of their first member in the roster
	pub fn identity(num_blocks: usize) -> Self {
		Self { blocks: (0 .. num_blocks).collect() }
	}

	pub fn shuffled<R: Rng + ?Sized>(num_blocks: usize, rng: &mut R) -> Self {
		let mut ordering = Self::identity(num_blocks);
		ordering.blocks.shuffle(rng);
		ordering
	}

	#[cfg(test)]
	pub fn from_blocks(blocks: Vec<usize>) -> Self {
		debug_assert!({
			let mut sorted = blocks.clone();
			sorted.sort_unstable();
			sorted.iter().enumerate().all(|(index, block)| index == *block)
		});
		Self { blocks }
	}

	pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
		self.blocks.iter().copied()
	}
}
