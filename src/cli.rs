use std::path::PathBuf;

use clap::Parser;

const APP_NAME: &str = env!("CARGO_PKG_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser)]
#[command(name = APP_NAME)]
#[command(version = VERSION)]
#[command(about = "Splits a roster into groups while keeping some people together and others apart", long_about = None)]
pub struct Args {
	/// The TOML file containing the roster, constraints, and group size
	#[arg(short, long)]
	pub config: Option<PathBuf>,

	/// A text file with 1 name per line, which is appended to the roster
	#[arg(short, long)]
	pub roster_file: Option<PathBuf>,

	/// The maximum number of people per group
	#[arg(short, long)]
	pub max_size: Option<usize>,

	/// The maximum number of groups
	#[arg(short, long)]
	pub num_groups: Option<usize>,

	/// Makes the generated charts reproducible
	#[arg(short, long)]
	pub seed: Option<u64>,

	/// The number of alternative charts to print after the first one
	#[arg(short, long, default_value_t = 0)]
	pub alternatives: u32,

	/// Print the charts as JSON instead of text
	#[arg(long)]
	pub json: bool,
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;
	use super::*;

	#[test]
	fn test_arguments() {
		Args::command().debug_assert();

		let args = Args::parse_from([
			"seating-chart", "--config", "class.toml", "-m", "3", "-a", "2", "--json"
		]);
		assert_eq!(args.config, Some(PathBuf::from("class.toml")));
		assert_eq!(args.roster_file, None);
		assert_eq!(args.max_size, Some(3));
		assert_eq!(args.num_groups, None);
		assert_eq!(args.alternatives, 2);
		assert!(args.json);
	}
}
