//! Siting solvers.
//!
//! Two backends sit behind one entry point:
//!
//! - [`SolverBackend::BranchAndBound`] (default): exact depth-first search
//!   over the binary assignments with cardinality pruning and an additive
//!   lower bound. Suitable for the problem sizes the pipeline produces
//!   (tens of candidate sites).
//! - [`SolverBackend::LpRelaxation`]: the standard linearization of the
//!   pairwise terms solved as an LP with clarabel, then rounded. Mirrors
//!   what an external MILP engine would receive, at relaxation fidelity.
//!
//! Both report objectives through [`SitingModel::evaluate`], so their
//! results are directly comparable with each other and with externally
//! supplied (e.g. quantum-derived) selections.

use std::time::Instant;

use good_lp::solvers::clarabel::clarabel;
use good_lp::{constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel, Variable};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::costs::build_cost_matrices;
use super::model::{formulate, SitingModel};
use super::problem::SitingProblem;
use super::solution::SitingSolution;
use super::SitingError;

/// Solving backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolverBackend {
    /// Exact branch-and-bound over the binary assignments.
    #[default]
    BranchAndBound,
    /// LP relaxation of the linearized model, rounded.
    LpRelaxation,
}

/// Solver entry point for formulated siting models.
pub struct SitingSolver {
    backend: SolverBackend,
}

impl SitingSolver {
    /// Create a solver with the default (exact) backend.
    pub fn new() -> Self {
        Self {
            backend: SolverBackend::default(),
        }
    }

    /// Set the solving backend.
    pub fn with_backend(mut self, backend: SolverBackend) -> Self {
        self.backend = backend;
        self
    }

    /// Get the configured backend.
    pub fn backend(&self) -> SolverBackend {
        self.backend
    }

    /// Solve a formulated model.
    ///
    /// Infeasibility and backend failures are reported as structured
    /// statuses on the returned [`SitingSolution`]; `Err` is reserved for a
    /// model that is itself malformed.
    pub fn solve(&self, model: &SitingModel) -> Result<SitingSolution, SitingError> {
        validate_model(model)?;

        debug!(
            num_sites = model.num_sites,
            min_sites = model.min_sites,
            max_sites = ?model.max_sites,
            backend = ?self.backend,
            "solving siting model"
        );

        if !model.is_cardinality_feasible() {
            let solution = SitingSolution::infeasible(format!(
                "no selection of {} sites can satisfy min {} / max {:?}",
                model.num_sites, model.min_sites, model.max_sites
            ));
            info!(status = %solution.status, "siting solve finished");
            return Ok(solution);
        }

        let solution = match self.backend {
            SolverBackend::BranchAndBound => solve_branch_and_bound(model),
            SolverBackend::LpRelaxation => solve_lp_relaxation(model),
        };

        info!(
            status = %solution.status,
            selected = solution.num_selected(),
            solve_time = ?solution.solve_time,
            "siting solve finished"
        );
        Ok(solution)
    }
}

impl Default for SitingSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience orchestration: cost matrices → model → solve.
///
/// The solver round-trip is the single potentially long-running step of the
/// pipeline; it is all-or-nothing, with no partial result.
pub fn solve_siting(
    problem: &SitingProblem,
    solver: &SitingSolver,
) -> Result<SitingSolution, SitingError> {
    let costs = build_cost_matrices(problem)?;
    let model = formulate(&costs, problem.min_sites, problem.max_sites);
    solver.solve(&model)
}

fn validate_model(model: &SitingModel) -> Result<(), SitingError> {
    let n = model.num_sites;
    if n == 0 {
        return Err(SitingError::NoSites);
    }
    if model.linear.len() != n {
        return Err(SitingError::MalformedModel(format!(
            "linear terms have length {}, expected {n}",
            model.linear.len()
        )));
    }
    if model.quadratic.len() != n || model.quadratic.iter().any(|row| row.len() != n) {
        return Err(SitingError::MalformedModel(format!(
            "quadratic matrix is not {n}x{n}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Branch-and-bound backend
// ---------------------------------------------------------------------------

struct BranchAndBound<'a> {
    model: &'a SitingModel,
    /// `suffix[i]`: lower bound on the objective contribution of any subset
    /// of sites `i..n`, assuming every pairwise coupling takes its most
    /// favourable value. Non-positive by construction.
    suffix: Vec<f64>,
    selection: Vec<bool>,
    best_objective: f64,
    best_selection: Option<Vec<bool>>,
}

fn solve_branch_and_bound(model: &SitingModel) -> SitingSolution {
    let start = Instant::now();
    let n = model.num_sites;

    let floor: Vec<f64> = (0..n)
        .map(|i| {
            let coupling_floor: f64 = model.quadratic[i].iter().map(|&q| q.min(0.0)).sum();
            (model.linear[i] + coupling_floor).min(0.0)
        })
        .collect();
    let mut suffix = vec![0.0; n + 1];
    for i in (0..n).rev() {
        suffix[i] = suffix[i + 1] + floor[i];
    }

    let mut search = BranchAndBound {
        model,
        suffix,
        selection: vec![false; n],
        best_objective: f64::INFINITY,
        best_selection: None,
    };
    search.descend(0, 0, 0.0);

    match search.best_selection {
        Some(selection) => {
            // Re-evaluate from scratch so the reported objective is free of
            // accumulation drift.
            let objective = model.evaluate(&selection);
            SitingSolution::optimal(selection, objective, start.elapsed(), "optimal (exact)")
        }
        // Unreachable after the cardinality pre-check, kept as a guard.
        None => SitingSolution::infeasible("search exhausted without a feasible selection"),
    }
}

impl BranchAndBound<'_> {
    /// Marginal cost of activating `site` given the sites selected so far.
    fn activation_delta(&self, site: usize) -> f64 {
        let mut delta = self.model.linear[site];
        for j in 0..site {
            if self.selection[j] {
                delta += self.model.quadratic[site][j];
            }
        }
        delta
    }

    fn descend(&mut self, site: usize, count: usize, objective: f64) {
        let n = self.model.num_sites;

        // Cardinality pruning: the remaining sites cannot reach min_sites.
        if count + (n - site) < self.model.min_sites {
            return;
        }
        // Bound pruning: even the most favourable completion cannot beat
        // the incumbent.
        if objective + self.suffix[site] >= self.best_objective {
            return;
        }

        if site == n {
            if count >= self.model.min_sites && objective < self.best_objective {
                self.best_objective = objective;
                self.best_selection = Some(self.selection.clone());
            }
            return;
        }

        let can_take = self.model.max_sites.map_or(true, |max| count < max);
        let delta = self.activation_delta(site);

        // Explore the cheaper-looking branch first to tighten the incumbent
        // early.
        if can_take && delta < 0.0 {
            self.selection[site] = true;
            self.descend(site + 1, count + 1, objective + delta);
            self.selection[site] = false;
            self.descend(site + 1, count, objective);
        } else {
            self.descend(site + 1, count, objective);
            if can_take {
                self.selection[site] = true;
                self.descend(site + 1, count + 1, objective + delta);
                self.selection[site] = false;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// LP-relaxation backend
// ---------------------------------------------------------------------------

/// Solve the linearized relaxation with clarabel and round.
///
/// Pairwise products are linearized with the standard auxiliary variables
/// `y_ij` (`y ≤ x_i`, `y ≤ x_j`, `y ≥ x_i + x_j − 1`); all variables are
/// relaxed to `[0, 1]`. The fractional solution is rounded to the
/// cardinality band by taking the highest-valued sites, and the reported
/// objective is re-evaluated on the rounded selection.
fn solve_lp_relaxation(model: &SitingModel) -> SitingSolution {
    let start = Instant::now();
    let n = model.num_sites;

    let mut vars = variables!();
    let x: Vec<Variable> = (0..n)
        .map(|_| vars.add(variable().min(0.0).max(1.0)))
        .collect();

    let mut objective = Expression::from(0.0);
    for i in 0..n {
        objective += model.linear[i] * x[i];
    }

    let mut pair_vars: Vec<(usize, usize, Variable)> = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            let q = model.quadratic[i][j];
            if q != 0.0 {
                let y = vars.add(variable().min(0.0).max(1.0));
                objective += q * y;
                pair_vars.push((i, j, y));
            }
        }
    }

    let mut lp = vars.minimise(objective).using(clarabel);

    for &(i, j, y) in &pair_vars {
        lp = lp.with(constraint!(y <= x[i]));
        lp = lp.with(constraint!(y <= x[j]));
        lp = lp.with(constraint!(y >= x[i] + x[j] - 1.0));
    }

    let mut total = Expression::from(0.0);
    for &v in &x {
        total += v;
    }
    if model.min_sites > 0 {
        lp = lp.with(constraint!(total.clone() >= model.min_sites as f64));
    }
    if let Some(max) = model.max_sites {
        lp = lp.with(constraint!(total.clone() <= max as f64));
    }

    match lp.solve() {
        Ok(relaxed) => {
            let values: Vec<f64> = x.iter().map(|&v| relaxed.value(v)).collect();
            let selection = round_to_band(&values, model.min_sites, model.max_sites);
            let objective = model.evaluate(&selection);
            SitingSolution::optimal(
                selection,
                objective,
                start.elapsed(),
                "optimal (LP relaxation, rounded)",
            )
        }
        Err(ResolutionError::Infeasible) => {
            SitingSolution::infeasible("relaxation reported infeasible")
        }
        Err(ResolutionError::Unbounded) => {
            SitingSolution::unbounded("relaxation reported unbounded")
        }
        Err(err) => SitingSolution::error(format!("relaxation failed: {err:?}")),
    }
}

/// Round fractional activations to a binary selection whose cardinality
/// lies within `[min, max]`, preferring the highest-valued sites.
fn round_to_band(values: &[f64], min: usize, max: Option<usize>) -> Vec<bool> {
    let n = values.len();
    let upper = max.unwrap_or(n).min(n);

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| {
        values[b]
            .partial_cmp(&values[a])
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.cmp(&b))
    });

    let fractional_count = values.iter().filter(|&&v| v > 0.5).count();
    let k = fractional_count.max(min).min(upper);

    let mut selection = vec![false; n];
    for &i in order.iter().take(k) {
        selection[i] = true;
    }
    selection
}
