//! # mgplan-algo: Microgrid Siting Optimization
//!
//! This crate implements the core of the siting pipeline: candidate-site
//! generation, cost-matrix construction, binary quadratic model formulation
//! and solver orchestration.
//!
//! The problem is a facility-location-style binary quadratic program: choose
//! a subset of candidate microgrid sites that minimizes deployment plus
//! connection cost net of per-site revenue, under a cardinality constraint
//! on the number of selected sites. See the [`siting`] module documentation
//! for the full formulation.
//!
//! ## Example
//!
//! ```ignore
//! use mgplan_algo::siting::{
//!     generate_candidate_sites, solve_siting, SitingProblem, SitingSolver,
//! };
//! use mgplan_core::GeoBounds;
//!
//! let plants = mgplan_io::load_plants("solar_plants.csv")?;
//! let bounds = GeoBounds::from_points(plants.iter().map(|p| &p.location))
//!     .expect("non-empty dataset");
//! let sites = generate_candidate_sites(&bounds, 20, 42)?;
//!
//! let problem = SitingProblem::builder(plants, sites)
//!     .max_sites(15)
//!     .build()?;
//!
//! let solution = solve_siting(&problem, &SitingSolver::new())?;
//! println!("{}", solution.summary());
//! ```

pub mod siting;

pub use siting::{
    build_cost_matrices, compare_selections, formulate, generate_candidate_sites, solve_siting,
    BenefitPolicy, CostMatrices, SelectionComparison, SitingError, SitingModel, SitingProblem,
    SitingProblemBuilder, SitingSolution, SitingSolver, SolveStatus, SolverBackend,
};
