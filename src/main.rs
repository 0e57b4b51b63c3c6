mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Args;
use seating_chart::SeatingChart;
use seating_chart::config::{Overrides, load_problem};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
	let args = Args::parse();

	tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("seating_chart=warn")))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();

	let overrides = Overrides { max_size: args.max_size, num_groups: args.num_groups, seed: args.seed };
	let problem = load_problem(args.config.as_deref(), args.roster_file.as_deref(), overrides)?;
	info!("Found {} people, {} together and {} apart constraints", problem.roster.len(), problem.together.len(), problem.apart.len());

	let mut seating = SeatingChart::new(problem)?;
	print_chart(seating.chart()?, args.json, None)?;
	for alternative in 1 ..= args.alternatives {
		print_chart(seating.regenerate()?, args.json, Some(alternative))?;
	}
	Ok(())
}

fn print_chart(chart: &seating_chart::Chart, json: bool, alternative: Option<u32>) -> Result<()> {
	if json {
		println!("{}", serde_json::to_string(chart)?);
		return Ok(());
	}
	match alternative {
		Some(alternative) => println!("\nAlternative {}:", alternative),
		None => println!("Seating chart:"),
	}
	println!("{}", chart);
	Ok(())
}
