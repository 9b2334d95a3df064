//! Cost matrix construction.
//!
//! Converts the geography of a [`SitingProblem`] into the value objects the
//! model formulator consumes: per-site plant-connection costs, the symmetric
//! inter-site cost matrix, the fixed deployment cost and the per-site
//! benefit vector.

use serde::{Deserialize, Serialize};

use super::problem::SitingProblem;
use super::SitingError;

/// How per-site benefit values are derived from plant revenues.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BenefitPolicy {
    /// The plant revenue vector is cyclically tiled (or truncated) to the
    /// number of sites and assigned by position.
    ///
    /// This is a deliberate modeling simplification carried over from the
    /// original financial weighting: a site's benefit comes from an
    /// arbitrary cyclic index into the plant list, not from any spatial
    /// correspondence.
    #[default]
    Positional,
    /// Each site takes the revenue of its geographically nearest plant.
    NearestPlant,
}

/// Derived, read-only cost structures for one siting run.
///
/// Owned by and scoped to a single run: regenerate the candidate sites and
/// these matrices must be rebuilt with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostMatrices {
    /// `site_to_plant[i]`: cost of connecting site `i` to all plants.
    pub site_to_plant: Vec<f64>,
    /// Symmetric N×N inter-site connection cost matrix, zero diagonal.
    pub site_to_site: Vec<Vec<f64>>,
    /// Fixed per-site deployment cost (battery + solar capital).
    pub fixed_cost: f64,
    /// Per-site benefit/revenue vector, length exactly N.
    pub benefit: Vec<f64>,
}

impl CostMatrices {
    /// Number of candidate sites the matrices are indexed by.
    pub fn num_sites(&self) -> usize {
        self.site_to_plant.len()
    }
}

/// Build the cost matrices for a siting problem.
///
/// - `site_to_plant[i] = cost_coeff · Σ_p distance_km(site_i, plant_p)`
/// - `site_to_site[i][j] = cost_coeff · distance_km(site_i, site_j)`,
///   computed on the upper triangle and mirrored
/// - `fixed_cost = battery_cost + solar_cost`
/// - `benefit` per the problem's [`BenefitPolicy`]
pub fn build_cost_matrices(problem: &SitingProblem) -> Result<CostMatrices, SitingError> {
    if problem.plants.is_empty() {
        return Err(SitingError::NoPlants);
    }
    if problem.sites.is_empty() {
        return Err(SitingError::NoSites);
    }

    let n = problem.num_sites();

    let site_to_plant: Vec<f64> = problem
        .sites
        .iter()
        .map(|site| {
            let total_km: f64 = problem
                .plants
                .iter()
                .map(|plant| site.location.distance_km(plant.location))
                .sum();
            problem.cost_coeff * total_km
        })
        .collect();

    let mut site_to_site = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in (i + 1)..n {
            let cost = problem.cost_coeff
                * problem.sites[i]
                    .location
                    .distance_km(problem.sites[j].location);
            site_to_site[i][j] = cost;
            site_to_site[j][i] = cost;
        }
    }

    let benefit = match problem.benefit_policy {
        BenefitPolicy::Positional => positional_benefit(&problem.plants, n),
        BenefitPolicy::NearestPlant => nearest_plant_benefit(problem),
    };
    if benefit.len() != n {
        return Err(SitingError::BenefitLength {
            expected: n,
            actual: benefit.len(),
        });
    }

    Ok(CostMatrices {
        site_to_plant,
        site_to_site,
        fixed_cost: problem.fixed_cost(),
        benefit,
    })
}

/// Cyclically tile (P < N) or truncate (P > N) the plant revenue vector to
/// length N, assigned by position.
fn positional_benefit(plants: &[mgplan_core::PowerPlant], n: usize) -> Vec<f64> {
    plants.iter().map(|p| p.revenue).cycle().take(n).collect()
}

/// Assign each site the revenue of its nearest plant.
fn nearest_plant_benefit(problem: &SitingProblem) -> Vec<f64> {
    problem
        .sites
        .iter()
        .map(|site| {
            let mut best = (f64::INFINITY, 0.0);
            for plant in &problem.plants {
                let d = site.location.distance_km(plant.location);
                if d < best.0 {
                    best = (d, plant.revenue);
                }
            }
            best.1
        })
        .collect()
}
