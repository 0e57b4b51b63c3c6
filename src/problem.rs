pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

/// The input of a seating chart: who is seated, who must sit together, who must be kept apart,
/// and how large the groups may be.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SeatingProblem {
	pub roster: Vec<String>,

	/// Each entry lists at least 2 people that must all end up in the same group
	pub together: Vec<Vec<String>>,

	/// Each entry lists at least 2 people of which no 2 may end up in the same group
	pub apart: Vec<Vec<String>>,

	pub max_size: usize,

	/// The maximum number of groups, or `None` when any number of groups is fine
	pub num_groups: Option<usize>,

	/// When present, the sequence of generated charts is reproducible
	pub seed: Option<u64>,

	/// How many random orderings are tried before giving up on `num_groups`
	pub max_attempts: usize,
}

impl SeatingProblem {
	pub fn new<S: Into<String>>(roster: impl IntoIterator<Item = S>, max_size: usize) -> Self {
		Self {
			roster: roster.into_iter().map(Into::into).collect(),
			together: Vec::new(),
			apart: Vec::new(),
			max_size,
			num_groups: None,
			seed: None,
			max_attempts: DEFAULT_MAX_ATTEMPTS,
		}
	}

	pub fn together<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
		self.together.push(names.into_iter().map(Into::into).collect());
		self
	}

	pub fn apart<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
		self.apart.push(names.into_iter().map(Into::into).collect());
		self
	}

	pub fn num_groups(mut self, num_groups: usize) -> Self {
		self.num_groups = Some(num_groups);
		self
	}

	pub fn seed(mut self, seed: u64) -> Self {
		self.seed = Some(seed);
		self
	}

	pub fn max_attempts(mut self, max_attempts: usize) -> Self {
		self.max_attempts = max_attempts;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder() {
		let problem = SeatingProblem::new(["A", "B", "C"], 2)
			.together(["A", "B"])
			.apart(["B", "C"])
			.num_groups(2)
			.seed(5);
		assert_eq!(problem.roster, vec!["A", "B", "C"]);
		assert_eq!(problem.together, vec![vec!["A".to_string(), "B".to_string()]]);
		assert_eq!(problem.apart, vec![vec!["B".to_string(), "C".to_string()]]);
		assert_eq!(problem.max_size, 2);
		assert_eq!(problem.num_groups, Some(2));
		assert_eq!(problem.seed, Some(5));
		assert_eq!(problem.max_attempts, DEFAULT_MAX_ATTEMPTS);
	}
}
