use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered list of groups, where each group is an ordered list of names. Every person on the
/// roster occurs in exactly 1 group.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Chart {
	groups: Vec<Vec<String>>
}

impl Chart {
	pub fn new(groups: Vec<Vec<String>>) -> Self {
		Self { groups }
	}

	pub fn groups(&self) -> &[Vec<String>] { &self.groups }

	pub fn len(&self) -> usize { self.groups.len() }

	pub fn is_empty(&self) -> bool { self.groups.is_empty() }

	pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> { self.groups.iter() }

	/// The index of the group that contains `name`, if any
	pub fn group_of(&self, name: &str) -> Option<usize> {
		self.groups.iter().position(|group| group.iter().any(|member| member == name))
	}

	/// Renders 1 line per group, like `Group 1: Amy, Bob, and Felix`
	pub fn pretty(&self) -> String {
		self.to_string()
	}
}

impl<'a> IntoIterator for &'a Chart {
	type Item = &'a Vec<String>;
	type IntoIter = std::slice::Iter<'a, Vec<String>>;

	fn into_iter(self) -> Self::IntoIter {
		self.groups.iter()
	}
}

impl fmt::Display for Chart {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, group) in self.groups.iter().enumerate() {
			if index > 0 {
				writeln!(f)?;
			}
			write!(f, "Group {}: {}", index + 1, oxford_join(group))?;
		}
		Ok(())
	}
}

fn oxford_join(names: &[String]) -> String {
	match names {
		[] => String::new(),
		[only] => only.clone(),
		[first, second] => format!("{first} and {second}"),
		[init @ .., last] => format!("{}, and {}", init.join(", "), last),
	}
}
