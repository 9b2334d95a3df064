//! Microgrid siting as a binary quadratic program.
//!
//! ## Problem Overview
//!
//! Given a set of existing solar power plants and a set of candidate
//! microgrid locations, decide which candidates to deploy so that total
//! cost is minimized while the number of deployed sites stays within a
//! cardinality band.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │  MICROGRID SITING                                                   │
//! │  ────────────────                                                   │
//! │                                                                     │
//! │  Given:                                                             │
//! │    • P power plants with locations and revenue potential            │
//! │    • N candidate microgrid sites (sampled in the plant bounding box)│
//! │    • Connection cost per km, fixed battery + solar capital cost     │
//! │                                                                     │
//! │  Decide:                                                            │
//! │    • Which candidate sites to deploy (binary decisions)             │
//! │                                                                     │
//! │  Minimize:                                                          │
//! │    Σᵢ xᵢ·(fixed + plant-connection costᵢ − benefitᵢ)                │
//! │      + Σ_{i<j} xᵢ·xⱼ·inter-site costᵢⱼ                              │
//! │                                                                     │
//! │  Subject to:                                                        │
//! │    min_sites ≤ Σᵢ xᵢ ≤ max_sites                                    │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The pairwise terms price the interconnection infrastructure between two
//! jointly active microgrids, proportional to their great-circle distance.
//! They make the objective a binary quadratic program (a QUBO once the
//! cardinality constraints are folded in), which is why the solver layer
//! supports both an exact branch-and-bound backend and an LP-relaxation
//! backend with the standard pairwise linearization — the formulation is
//! deliberately backend-agnostic so exact, heuristic or quantum-derived
//! assignments can be compared on equal footing (see [`compare_selections`]).
//!
//! ## Pipeline
//!
//! ```text
//! plants ──► GeoBounds ──► generate_candidate_sites ──► SitingProblem
//!               │                                            │
//!               └──────────► build_cost_matrices ◄───────────┘
//!                                   │
//!                              formulate
//!                                   │
//!                          SitingSolver::solve ──► SitingSolution
//! ```
//!
//! Every stage returns a new immutable value; nothing is mutated in place,
//! so stages cannot be invoked out of order on stale state.

mod compare;
mod costs;
mod model;
mod problem;
mod sites;
mod solution;
mod solver;

pub use compare::{compare_selections, SelectionComparison};
pub use costs::{build_cost_matrices, BenefitPolicy, CostMatrices};
pub use model::{formulate, SitingModel};
pub use problem::{SitingProblem, SitingProblemBuilder};
pub use sites::generate_candidate_sites;
pub use solution::{SitingSolution, SolveStatus};
pub use solver::{solve_siting, SitingSolver, SolverBackend};

use thiserror::Error;

/// Errors produced by the siting pipeline.
///
/// All variants are recoverable by the caller: adjust the inputs and retry,
/// or abort. The pipeline holds no state across runs, so nothing is left
/// corrupted behind an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SitingError {
    /// No power plants were provided; distances and benefits are undefined.
    #[error("no power plants provided")]
    NoPlants,

    /// No candidate sites were provided.
    #[error("no candidate sites provided")]
    NoSites,

    /// The plant bounding box has zero extent on one axis, so distinct
    /// in-box coordinates cannot be sampled.
    #[error("plant bounding box is degenerate on the {0} axis")]
    DegenerateBounds(&'static str),

    /// A tuning parameter is out of range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Benefit reconciliation produced a vector of the wrong length.
    #[error("benefit vector has length {actual}, expected {expected}")]
    BenefitLength { expected: usize, actual: usize },

    /// Two selection vectors of different lengths were compared.
    #[error("selection vectors have different lengths: {lhs} vs {rhs}")]
    SelectionLength { lhs: usize, rhs: usize },

    /// The model handed to the solver is internally inconsistent.
    #[error("malformed model: {0}")]
    MalformedModel(String),
}

impl From<SitingError> for mgplan_core::MgError {
    fn from(err: SitingError) -> Self {
        match err {
            SitingError::NoPlants
            | SitingError::NoSites
            | SitingError::DegenerateBounds(_)
            | SitingError::InvalidParameter(_)
            | SitingError::BenefitLength { .. }
            | SitingError::SelectionLength { .. } => {
                mgplan_core::MgError::Validation(err.to_string())
            }
            SitingError::MalformedModel(_) => mgplan_core::MgError::Solver(err.to_string()),
        }
    }
}
