use std::collections::HashSet;

use crate::error::*;
use crate::graph::ConstraintGraph;
use crate::problem::SeatingProblem;

/// Checks the preconditions of building a `ConstraintGraph`: every roster name must be non-empty
/// and unique, and every constraint must mention at least 2 people.
pub fn validate_inputs(problem: &SeatingProblem) -> SeatingResult<()> {
	let mut seen = HashSet::with_capacity(problem.roster.len());
	for name in &problem.roster {
		if name.trim().is_empty() {
			return Err(SeatingError::invalid_config("roster names must not be empty"));
		}
		if !seen.insert(name.as_str()) {
			return Err(SeatingError::invalid_config(format!("'{name}' occurs more than once in the roster")));
		}
	}

	for (kind, constraints) in [("together", &problem.together), ("apart", &problem.apart)] {
		if let Some(short) = constraints.iter().find(|names| names.len() < 2) {
			return Err(SeatingError::invalid_config(
				format!("every {kind} constraint needs at least 2 names, but got {short:?}")
			));
		}
	}

	if problem.max_attempts == 0 {
		return Err(SeatingError::invalid_config("max_attempts must be at least 1"));
	}
	Ok(())
}

/// Checks that the blocks of `graph` can be seated in groups of at most `max_size` people. This
/// runs after the graph was built, and before any group is assigned.
pub fn validate_capacity(
	graph: &ConstraintGraph, roster: &[String], max_size: usize, num_groups: Option<usize>
) -> SeatingResult<()> {
	if max_size == 0 {
		return Err(SeatingError::invalid_config("max_size must be a positive integer"));
	}
	if num_groups == Some(0) {
		return Err(SeatingError::invalid_config("num_groups must be a positive integer"));
	}

	if let Some(block) = graph.get_blocks().iter().find(|block| block.len() > max_size) {
		return Err(SeatingError::OversizedBlock {
			members: block.iter().map(|member| roster[*member].clone()).collect(),
			size: block.len(),
			max_size,
		});
	}
	Ok(())
}
