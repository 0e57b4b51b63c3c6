use std::fs::read_to_string;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::problem::{DEFAULT_MAX_ATTEMPTS, SeatingProblem};

/// The contents of a TOML problem file. Every field is optional, so that a file can for instance
/// only contain the constraints while the roster comes from a roster file.
#[derive(Debug, Default, Clone, Eq, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProblemFile {
	#[serde(default)]
	pub roster: Vec<String>,
	#[serde(default)]
	pub together: Vec<Vec<String>>,
	#[serde(default)]
	pub apart: Vec<Vec<String>>,
	pub max_size: Option<usize>,
	pub num_groups: Option<usize>,
	pub seed: Option<u64>,
	pub max_attempts: Option<usize>,
}

impl ProblemFile {
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
		let path = path.as_ref();
		let content = read_to_string(path)
			.with_context(|| format!("Couldn't read problem file {}", path.display()))?;
		Self::from_toml(&content).with_context(|| format!("Couldn't parse problem file {}", path.display()))
	}

	pub fn from_toml(content: &str) -> Result<Self> {
		Ok(toml::from_str(content)?)
	}
}

/// Values from the command line, which take precedence over the problem file
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq)]
pub struct Overrides {
	pub max_size: Option<usize>,
	pub num_groups: Option<usize>,
	pub seed: Option<u64>,
}

/// Parses a roster with 1 name per line. Blank lines and lines starting with `#` are skipped.
pub fn parse_roster(raw_text: &str) -> Vec<String> {
	raw_text.lines()
		.map(|line| line.trim())
		.filter(|line| !line.is_empty() && !line.starts_with('#'))
		.map(|line| line.to_string())
		.collect()
}

pub fn read_roster<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
	let path = path.as_ref();
	let raw_text = read_to_string(path)
		.with_context(|| format!("Couldn't read roster file {}", path.display()))?;
	Ok(parse_roster(&raw_text))
}

/// Combines the problem file, the roster file and the overrides into a `SeatingProblem`. Names
/// from the roster file are appended after the roster of the problem file.
pub fn load_problem(
	problem_file: Option<&Path>, roster_file: Option<&Path>, overrides: Overrides
) -> Result<SeatingProblem> {
	let mut file = match problem_file {
		Some(path) => ProblemFile::from_file(path)?,
		None => ProblemFile::default(),
	};
	if let Some(path) = roster_file {
		file.roster.extend(read_roster(path)?);
	}

	let Some(max_size) = overrides.max_size.or(file.max_size) else {
		bail!("The maximum group size must be given, either in the problem file or with --max-size");
	};

	Ok(SeatingProblem {
		roster: file.roster,
		together: file.together,
		apart: file.apart,
		max_size,
		num_groups: overrides.num_groups.or(file.num_groups),
		seed: overrides.seed.or(file.seed),
		max_attempts: file.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS),
	})
}
