use rand::Rng;
use tracing::{debug, warn};

use crate::error::*;
use crate::graph::ConstraintGraph;
pub use attempt::{AttemptResult, assignment_attempt};
pub use ordering::BlockOrdering;

mod attempt;
mod ordering;

/// Randomized greedy best-fit packing of blocks into groups. Without a group cap, a single
/// attempt always succeeds because a new empty group can take any block that passed validation.
/// With a group cap, fresh orderings are tried until one fits or `max_attempts` is exhausted.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GroupAssigner {
	max_size: usize,
	num_groups: Option<usize>,
	max_attempts: usize,
}

impl GroupAssigner {
	pub fn new(max_size: usize, num_groups: Option<usize>, max_attempts: usize) -> Self {
		Self { max_size, num_groups, max_attempts }
	}

	/// Returns the roster indices of the members of each group. Within a group, the members of
	/// each block stay in roster order, and the blocks are in placement order.
	pub fn assign<R: Rng + ?Sized>(
		&self, graph: &ConstraintGraph, rng: &mut R
	) -> SeatingResult<Vec<Vec<usize>>> {
		let Some(num_groups) = self.num_groups else {
			let ordering = BlockOrdering::shuffled(graph.num_blocks(), rng);
			let result = assignment_attempt(graph, &ordering, self.max_size, None);
			debug_assert!(!result.exceeded_group_cap);
			return Ok(self.members_of(graph, result.groups));
		};

		let num_people: usize = graph.get_blocks().iter().map(Vec::len).sum();
		if num_people > num_groups.saturating_mul(self.max_size) {
			debug!("{} people can never fit in {} groups of {}", num_people, num_groups, self.max_size);
			return Err(SeatingError::Unsatisfiable { num_groups, attempts: 0 });
		}

		for attempt in 1 ..= self.max_attempts {
			let ordering = BlockOrdering::shuffled(graph.num_blocks(), rng);
			let result = assignment_attempt(graph, &ordering, self.max_size, Some(num_groups));
			if !result.exceeded_group_cap {
				return Ok(self.members_of(graph, result.groups));
			}
			warn!("Attempt {}/{} needed more than {} groups", attempt, self.max_attempts, num_groups);
		}
		Err(SeatingError::Unsatisfiable { num_groups, attempts: self.max_attempts })
	}

	fn members_of(&self, graph: &ConstraintGraph, groups: Vec<Vec<usize>>) -> Vec<Vec<usize>> {
		groups.into_iter().map(|blocks| {
			let size = blocks.iter().map(|block| graph.get_block(*block).len()).sum();
			let mut members = Vec::with_capacity(size);
			for block in blocks {
				members.extend_from_slice(graph.get_block(block));
			}
			members
		}).collect()
	}
}
