use tracing::debug;

use crate::assigner::ordering::BlockOrdering;
use crate::graph::ConstraintGraph;
use crate::index_set::DenseIndexSet;

struct OpenGroup {
	blocks: Vec<usize>,
	size: usize,

	/// The blocks that conflict with at least 1 block in this group
	forbidden: DenseIndexSet,
}

impl OpenGroup {
	fn new(num_blocks: usize) -> Self {
		Self { blocks: Vec::new(), size: 0, forbidden: DenseIndexSet::with_capacity(num_blocks) }
	}

	fn accepts(&self, block: usize, block_size: usize, max_size: usize) -> bool {
		self.size + block_size <= max_size && !self.forbidden.contains(block)
	}

	fn place(&mut self, block: usize, block_size: usize, graph: &ConstraintGraph) {
		self.blocks.push(block);
		self.size += block_size;
		self.forbidden.union_with(graph.get_conflicts(block));
	}
}

#[derive(Debug, Eq, PartialEq)]
pub struct AttemptResult {
	/// The blocks in each group, in the order in which the groups were opened
	pub groups: Vec<Vec<usize>>,

	/// True when some block did not fit in any group, and opening another group would exceed
	/// `num_groups`. In that case, `groups` only contains the blocks that were placed.
	pub exceeded_group_cap: bool,
}

/// Places the blocks one by one, in the order given by `ordering`. Each block goes to the
/// feasible group with the least remaining capacity (the earliest-opened one on ties), or to a
/// new group when no existing group can take it.
pub fn assignment_attempt(
	graph: &ConstraintGraph, ordering: &BlockOrdering, max_size: usize, num_groups: Option<usize>
) -> AttemptResult {
	let mut groups: Vec<OpenGroup> = Vec::new();

	for block in ordering.iter() {
		let block_size = graph.get_block(block).len();
		let best_fit = groups.iter().enumerate()
			.filter(|(_, group)| group.accepts(block, block_size, max_size))
			.min_by_key(|(_, group)| max_size - group.size)
			.map(|(index, _)| index);

		let target = match best_fit {
			Some(index) => index,
			None => {
				if num_groups.is_some_and(|cap| groups.len() >= cap) {
					debug!("Block {} does not fit in any of the {} groups", block, groups.len());
					return AttemptResult {
						groups: groups.into_iter().map(|group| group.blocks).collect(),
						exceeded_group_cap: true
					};
				}
				groups.push(OpenGroup::new(graph.num_blocks()));
				groups.len() - 1
			}
		};
		debug!("Placed block {} of size {} in group {}", block, block_size, target);
		groups[target].place(block, block_size, graph);
	}

	AttemptResult {
		groups: groups.into_iter().map(|group| group.blocks).collect(),
		exceeded_group_cap: false
	}
}

#[cfg(test)]
mod tests {
	use crate::problem::SeatingProblem;
	use super::*;

	fn graph_of(problem: &SeatingProblem) -> ConstraintGraph {
		ConstraintGraph::new(&problem.roster, &problem.together, &problem.apart).unwrap()
	}

	#[test]
	fn test_without_constraints() {
		let problem = SeatingProblem::new(["A", "B", "C", "D", "E"], 2);
		let graph = graph_of(&problem);
		assert_eq!(
			AttemptResult { groups: vec![vec![0, 1], vec![2, 3], vec![4]], exceeded_group_cap: false },
			assignment_attempt(&graph, &BlockOrdering::identity(5), 2, None)
		);
	}

	#[test]
	fn test_best_fit() {
		let problem = SeatingProblem::new(["A", "B", "C", "D", "E", "F"], 4)
			.together(["A", "B"])
			.together(["C", "D", "E"]);
		let graph = graph_of(&problem);

		// F fits in both groups, but the second group has the least space left
		assert_eq!(
			AttemptResult { groups: vec![vec![0], vec![1, 2]], exceeded_group_cap: false },
			assignment_attempt(&graph, &BlockOrdering::identity(3), 4, None)
		);
	}

	#[test]
	fn test_conflicts() {
		let problem = SeatingProblem::new(["A", "B", "C"], 3).apart(["A", "B"]);
		let graph = graph_of(&problem);
		assert_eq!(
			AttemptResult { groups: vec![vec![0, 2], vec![1]], exceeded_group_cap: false },
			assignment_attempt(&graph, &BlockOrdering::identity(3), 3, None)
		);

		// A must leave the group of C and B, since it conflicts with B
		assert_eq!(
			AttemptResult { groups: vec![vec![2, 1], vec![0]], exceeded_group_cap: false },
			assignment_attempt(&graph, &BlockOrdering::from_blocks(vec![2, 1, 0]), 3, None)
		);
	}

	#[test]
	fn test_group_cap() {
		let problem = SeatingProblem::new(["A", "B", "C"], 3).apart(["A", "B"]);
		let graph = graph_of(&problem);
		assert_eq!(
			AttemptResult { groups: vec![vec![0]], exceeded_group_cap: true },
			assignment_attempt(&graph, &BlockOrdering::identity(3), 3, Some(1))
		);
		assert!(!assignment_attempt(&graph, &BlockOrdering::identity(3), 3, Some(2)).exceeded_group_cap);
	}

	#[test]
	fn test_empty() {
		let problem = SeatingProblem::new(Vec::<String>::new(), 3);
		let graph = graph_of(&problem);
		assert_eq!(
			AttemptResult { groups: vec![], exceeded_group_cap: false },
			assignment_attempt(&graph, &BlockOrdering::identity(0), 3, Some(1))
		);
	}
}
