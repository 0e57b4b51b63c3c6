use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::assigner::GroupAssigner;
use crate::chart::Chart;
use crate::error::*;
use crate::graph::ConstraintGraph;
use crate::problem::SeatingProblem;
use crate::validator::{validate_capacity, validate_inputs};

/// Splits a roster into groups of bounded size, while keeping the `together` people in the same
/// group and the `apart` people in different groups.
///
/// All configuration errors are reported by `SeatingChart::new`. The chart itself is only built
/// when it is first requested, and then cached until `regenerate` or `update` is called.
pub struct SeatingChart {
	problem: SeatingProblem,
	graph: ConstraintGraph,
	rng: StdRng,
	chart: Option<Chart>,
}

impl SeatingChart {
	pub fn new(problem: SeatingProblem) -> SeatingResult<Self> {
		validate_inputs(&problem)?;
		let graph = ConstraintGraph::new(&problem.roster, &problem.together, &problem.apart)?;
		validate_capacity(&graph, &problem.roster, problem.max_size, problem.num_groups)?;

		let rng = match problem.seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		};
		Ok(Self { problem, graph, rng, chart: None })
	}

	/// Returns the current chart, and builds it if this is the first request
	pub fn chart(&mut self) -> SeatingResult<&Chart> {
		let chart = match self.chart.take() {
			Some(chart) => chart,
			None => self.build_chart()?,
		};
		Ok(&*self.chart.insert(chart))
	}

	/// Builds a new chart using a fresh random ordering, and replaces the cached chart with it. The
	/// new chart is not guaranteed to differ from the previous one. When no chart can be built, the
	/// previous chart stays cached.
	pub fn regenerate(&mut self) -> SeatingResult<&Chart> {
		let chart = self.build_chart()?;
		Ok(&*self.chart.insert(chart))
	}

	/// Changes the maximum group size and the group cap, and immediately builds a new chart. When
	/// the new settings are invalid for the existing blocks, or no chart fits them, the previous
	/// settings and chart are kept.
	pub fn update(&mut self, max_size: usize, num_groups: Option<usize>) -> SeatingResult<&Chart> {
		validate_capacity(&self.graph, &self.problem.roster, max_size, num_groups)?;
		let old_max_size = std::mem::replace(&mut self.problem.max_size, max_size);
		let old_num_groups = std::mem::replace(&mut self.problem.num_groups, num_groups);

		match self.build_chart() {
			Ok(chart) => Ok(&*self.chart.insert(chart)),
			Err(error) => {
				self.problem.max_size = old_max_size;
				self.problem.num_groups = old_num_groups;
				Err(error)
			}
		}
	}

	/// Renders the current chart with 1 line per group
	pub fn pretty(&mut self) -> SeatingResult<String> {
		Ok(self.chart()?.pretty())
	}

	pub fn roster(&self) -> &[String] { &self.problem.roster }

	pub fn max_size(&self) -> usize { self.problem.max_size }

	pub fn num_groups(&self) -> Option<usize> { self.problem.num_groups }

	/// The clusters of people that always sit together, in roster order
	pub fn blocks(&self) -> Vec<Vec<&str>> {
		self.graph.get_blocks().iter().map(
			|block| block.iter().map(|member| self.problem.roster[*member].as_str()).collect()
		).collect()
	}

	fn build_chart(&mut self) -> SeatingResult<Chart> {
		let assigner = GroupAssigner::new(
			self.problem.max_size, self.problem.num_groups, self.problem.max_attempts
		);
		let groups = assigner.assign(&self.graph, &mut self.rng)?;
		info!("Seated {} people in {} groups", self.problem.roster.len(), groups.len());

		Ok(Chart::new(groups.into_iter().map(
			|group| group.into_iter().map(|member| self.problem.roster[member].clone()).collect()
		).collect()))
	}
}
