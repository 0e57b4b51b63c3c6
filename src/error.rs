use thiserror::Error;

pub type SeatingResult<T> = Result<T, SeatingError>;

/// Everything that can go wrong while building a seating chart. All variants except
/// `Unsatisfiable` are caused by the input and are reported before any group is assigned.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum SeatingError {
	/// A constraint mentions someone who is not on the roster.
	#[error("'{name}' appears in a constraint but is not on the roster")]
	UnknownMember { name: String },

	/// Two people must be kept apart, but the together-constraints force them into the same
	/// group. This also covers someone being kept apart from themselves.
	#[error("'{first}' and '{second}' must be kept apart, but are required to sit together")]
	Conflict { first: String, second: String },

	/// A together-cluster is larger than any group can ever be.
	#[error("{members:?} must sit together, but {size} people do not fit in groups of at most {max_size}")]
	OversizedBlock { members: Vec<String>, size: usize, max_size: usize },

	#[error("invalid configuration: {message}")]
	InvalidConfig { message: String },

	/// Every attempt needed more groups than `num_groups` allows.
	#[error("could not fit everyone into {num_groups} groups after {attempts} attempt(s)")]
	Unsatisfiable { num_groups: usize, attempts: usize },
}

impl SeatingError {
	pub fn invalid_config(message: impl Into<String>) -> Self {
		Self::InvalidConfig { message: message.into() }
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_messages() {
		let error = SeatingError::Conflict { first: "Amy".to_string(), second: "Bob".to_string() };
		assert_eq!(
			"'Amy' and 'Bob' must be kept apart, but are required to sit together",
			error.to_string()
		);

		let error = SeatingError::OversizedBlock {
			members: vec!["A".to_string(), "B".to_string(), "C".to_string()], size: 3, max_size: 2
		};
		assert_eq!(
			"[\"A\", \"B\", \"C\"] must sit together, but 3 people do not fit in groups of at most 2",
			error.to_string()
		);

		assert_eq!(
			"invalid configuration: max_size must be positive",
			SeatingError::invalid_config("max_size must be positive").to_string()
		);
	}
}
