//! Splits a roster of people into groups of bounded size, such that people who must sit together
//! share a group and people who must be kept apart never do.
//!
//! ```
//! use seating_chart::{SeatingChart, SeatingProblem};
//!
//! let problem = SeatingProblem::new(["Amy", "Bob", "Cara", "Dan"], 2)
//! 	.together(["Amy", "Bob"])
//! 	.apart(["Cara", "Dan"]);
//! let mut seating = SeatingChart::new(problem).unwrap();
//! let chart = seating.chart().unwrap();
//! assert_eq!(chart.len(), 3);
//! assert_eq!(chart.group_of("Amy"), chart.group_of("Bob"));
//! ```

pub mod assigner;
mod chart;
pub mod config;
mod error;
pub mod graph;
pub mod index_set;
mod problem;
mod seating;
pub mod validator;

pub use assigner::GroupAssigner;
pub use chart::Chart;
pub use graph::ConstraintGraph;
pub use error::{SeatingError, SeatingResult};
pub use problem::{DEFAULT_MAX_ATTEMPTS, SeatingProblem};
pub use seating::SeatingChart;
