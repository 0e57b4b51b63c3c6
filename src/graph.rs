use std::collections::HashMap;

use tracing::debug;

use crate::error::*;
use crate::index_set::DenseIndexSet;

/// Union-find over roster indices, with path halving and union by size
struct DisjointSets {
	parent: Vec<usize>,
	size: Vec<usize>,
}

impl DisjointSets {
	fn new(num_elements: usize) -> Self {
		Self { parent: (0 .. num_elements).collect(), size: vec![1; num_elements] }
	}

	fn find(&mut self, mut element: usize) -> usize {
		while self.parent[element] != element {
			self.parent[element] = self.parent[self.parent[element]];
			element = self.parent[element];
		}
		element
	}

	fn union(&mut self, a: usize, b: usize) {
		let mut root_a = self.find(a);
		let mut root_b = self.find(b);
		if root_a == root_b { return; }
		if self.size[root_a] < self.size[root_b] {
			std::mem::swap(&mut root_a, &mut root_b);
		}
		self.parent[root_b] = root_a;
		self.size[root_a] += self.size[root_b];
	}
}

/// The blocks (clusters of people that must sit together) of a roster, and the conflicts between
/// those blocks. This only depends on the roster and the constraints, so it is computed once and
/// shared by every chart that is generated afterwards.
#[derive(Debug, Clone)]
pub struct ConstraintGraph {
	/// The members of each block, in roster order. Blocks are sorted by their first member.
	blocks: Vec<Vec<usize>>,
	conflicts: Vec<DenseIndexSet>,
}

impl ConstraintGraph {

	/// Merges the `together` constraints into blocks, and turns the `apart` constraints into
	/// conflicts between blocks.
	///
	/// Fails with `UnknownMember` when any constraint mentions someone outside the roster (this
	/// is checked before anything else), and with `Conflict` when 2 people that must be kept
	/// apart end up in the same block.
	pub fn new(
		roster: &[String], together: &[Vec<String>], apart: &[Vec<String>]
	) -> SeatingResult<Self> {
		let index_of: HashMap<&str, usize> = roster.iter().enumerate()
			.map(|(index, name)| (name.as_str(), index))
			.collect();
		let resolve = |names: &[String]| -> SeatingResult<Vec<usize>> {
			names.iter().map(|name| index_of.get(name.as_str()).copied().ok_or_else(
				|| SeatingError::UnknownMember { name: name.clone() }
			)).collect()
		};

		let together_indices = together.iter().map(|names| resolve(names.as_slice()))
			.collect::<SeatingResult<Vec<_>>>()?;
		let apart_indices = apart.iter().map(|names| resolve(names.as_slice()))
			.collect::<SeatingResult<Vec<_>>>()?;

		let mut sets = DisjointSets::new(roster.len());
		for cluster in &together_indices {
			for window in cluster.windows(2) {
				sets.union(window[0], window[1]);
			}
		}

		let mut block_of_root = vec![None; roster.len()];
		let mut block_of = Vec::with_capacity(roster.len());
		let mut blocks: Vec<Vec<usize>> = Vec::new();
		for member in 0 .. roster.len() {
			let root = sets.find(member);
			let block = *block_of_root[root].get_or_insert_with(|| {
				blocks.push(Vec::new());
				blocks.len() - 1
			});
			blocks[block].push(member);
			block_of.push(block);
		}

		let mut conflicts = vec![DenseIndexSet::with_capacity(blocks.len()); blocks.len()];
		for separated in &apart_indices {
			for (position, &first) in separated.iter().enumerate() {
				for &second in &separated[position + 1 ..] {
					let first_block = block_of[first];
					let second_block = block_of[second];
					if first_block == second_block {
						return Err(SeatingError::Conflict {
							first: roster[first].clone(), second: roster[second].clone()
						});
					}
					conflicts[first_block].insert(second_block);
					conflicts[second_block].insert(first_block);
				}
			}
		}

		let num_edges = conflicts.iter().map(DenseIndexSet::len).sum::<usize>() / 2;
		debug!("Found {} blocks and {} conflicts among {} people", blocks.len(), num_edges, roster.len());
		Ok(Self { blocks, conflicts })
	}

	pub fn num_blocks(&self) -> usize { self.blocks.len() }

	pub fn get_block(&self, block: usize) -> &[usize] { &self.blocks[block] }

	pub fn get_blocks(&self) -> &[Vec<usize>] { &self.blocks }

	pub fn get_conflicts(&self, block: usize) -> &DenseIndexSet { &self.conflicts[block] }
}

#[cfg(test)]
mod tests {
	use super::*;

	fn names(raw: &[&str]) -> Vec<String> {
		raw.iter().map(|name| name.to_string()).collect()
	}

	#[test]
	fn test_without_constraints() {
		let graph = ConstraintGraph::new(&names(&["A", "B", "C"]), &[], &[]).unwrap();
		assert_eq!(graph.get_blocks(), &[vec![0], vec![1], vec![2]]);
		for block in 0 .. 3 {
			assert_eq!(graph.get_conflicts(block).len(), 0);
		}
	}

	#[test]
	fn test_transitive_together() {
		let roster = names(&["A", "B", "C", "D", "E"]);
		let together = vec![names(&["D", "B"]), names(&["E", "B"]), names(&["B", "D"])];
		let graph = ConstraintGraph::new(&roster, &together, &[]).unwrap();
		assert_eq!(graph.get_blocks(), &[vec![0], vec![1, 3, 4], vec![2]]);
	}

	#[test]
	fn test_larger_together_sets() {
		let roster = names(&["A", "B", "C", "D", "E", "F"]);
		let together = vec![names(&["A", "C", "E"]), names(&["F", "E"])];
		let graph = ConstraintGraph::new(&roster, &together, &[]).unwrap();
		assert_eq!(graph.get_blocks(), &[vec![0, 2, 4, 5], vec![1], vec![3]]);
	}

	#[test]
	fn test_apart_between_blocks() {
		let roster = names(&["Amy", "Bob", "Cara", "Dan"]);
		let together = vec![names(&["Amy", "Bob"])];
		let apart = vec![names(&["Dan", "Bob", "Cara"])];
		let graph = ConstraintGraph::new(&roster, &together, &apart).unwrap();
		assert_eq!(graph.num_blocks(), 3);
		assert!(graph.get_conflicts(0).contains(2));
		assert!(graph.get_conflicts(2).contains(0));
		assert!(graph.get_conflicts(0).contains(1));
		assert!(graph.get_conflicts(1).contains(2));
		assert!(!graph.get_conflicts(0).contains(0));
		assert_eq!(graph.get_conflicts(0).len(), 2);
	}

	#[test]
	fn test_direct_contradiction() {
		let roster = names(&["A", "B"]);
		let result = ConstraintGraph::new(&roster, &[names(&["A", "B"])], &[names(&["A", "B"])]);
		assert_eq!(
			Err(SeatingError::Conflict { first: "A".to_string(), second: "B".to_string() }),
			result.map(|_| ())
		);
	}

	#[test]
	fn test_transitive_contradiction() {
		let roster = names(&["A", "B", "C"]);
		let together = vec![names(&["A", "B"]), names(&["B", "C"])];
		let result = ConstraintGraph::new(&roster, &together, &[names(&["C", "A"])]);
		assert_eq!(
			Err(SeatingError::Conflict { first: "C".to_string(), second: "A".to_string() }),
			result.map(|_| ())
		);
	}

	#[test]
	fn test_self_apart() {
		let roster = names(&["A", "B"]);
		let result = ConstraintGraph::new(&roster, &[], &[names(&["B", "B"])]);
		assert_eq!(
			Err(SeatingError::Conflict { first: "B".to_string(), second: "B".to_string() }),
			result.map(|_| ())
		);
	}

	#[test]
	fn test_unknown_member_is_reported_before_conflicts() {
		let roster = names(&["A", "B"]);
		let together = vec![names(&["A", "B"])];
		let apart = vec![names(&["A", "B"]), names(&["A", "Z"])];
		let result = ConstraintGraph::new(&roster, &together, &apart);
		assert_eq!(Err(SeatingError::UnknownMember { name: "Z".to_string() }), result.map(|_| ()));

		let result = ConstraintGraph::new(&roster, &[names(&["A", "Z"])], &[]);
		assert_eq!(Err(SeatingError::UnknownMember { name: "Z".to_string() }), result.map(|_| ()));
	}
}
