//! Siting problem data structures
//!
//! Defines the input data for a microgrid siting run: the plants, the
//! candidate sites, the cost tuning coefficients and the cardinality band.

use serde::{Deserialize, Serialize};

use mgplan_core::{CandidateSite, PowerPlant};

use super::costs::BenefitPolicy;
use super::SitingError;

/// Default connection cost per kilometre of line.
pub const DEFAULT_COST_COEFF: f64 = 10_000.0;
/// Default battery capital cost per site.
pub const DEFAULT_BATTERY_COST: f64 = 38_000.0;
/// Default solar capital cost per site.
pub const DEFAULT_SOLAR_COST: f64 = 15_000.0;

/// A complete siting problem instance.
///
/// The candidate-site list fixes the variable indexing: everything derived
/// from a problem (cost matrices, models, selections) is indexed by position
/// in `sites` and is invalidated by regenerating that list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitingProblem {
    /// Existing power plants (collection size P).
    pub plants: Vec<PowerPlant>,
    /// Candidate microgrid locations (collection size N).
    pub sites: Vec<CandidateSite>,
    /// Connection cost per kilometre, applied to plant and inter-site links.
    pub cost_coeff: f64,
    /// Battery capital cost, identical for every site.
    pub battery_cost: f64,
    /// Solar capital cost, identical for every site.
    pub solar_cost: f64,
    /// How per-site benefits are derived from plant revenues.
    pub benefit_policy: BenefitPolicy,
    /// Lower cardinality bound on the selection.
    pub min_sites: usize,
    /// Upper cardinality bound; `None` leaves the selection unconstrained
    /// above (effectively N).
    pub max_sites: Option<usize>,
}

impl SitingProblem {
    /// Start building a problem from plants and candidate sites.
    pub fn builder(plants: Vec<PowerPlant>, sites: Vec<CandidateSite>) -> SitingProblemBuilder {
        SitingProblemBuilder::new(plants, sites)
    }

    /// Number of power plants.
    pub fn num_plants(&self) -> usize {
        self.plants.len()
    }

    /// Number of candidate sites (the number of decision variables).
    pub fn num_sites(&self) -> usize {
        self.sites.len()
    }

    /// Fixed per-site deployment cost (battery + solar capital).
    pub fn fixed_cost(&self) -> f64 {
        self.battery_cost + self.solar_cost
    }
}

/// Builder for [`SitingProblem`].
///
/// An infeasible cardinality band (`min > max`, or `min > N`) is *not* a
/// build error; it is reported as an infeasible solve status so the caller
/// can relax the constraints and retry.
pub struct SitingProblemBuilder {
    plants: Vec<PowerPlant>,
    sites: Vec<CandidateSite>,
    cost_coeff: f64,
    battery_cost: f64,
    solar_cost: f64,
    benefit_policy: BenefitPolicy,
    min_sites: usize,
    max_sites: Option<usize>,
}

impl SitingProblemBuilder {
    pub fn new(plants: Vec<PowerPlant>, sites: Vec<CandidateSite>) -> Self {
        Self {
            plants,
            sites,
            cost_coeff: DEFAULT_COST_COEFF,
            battery_cost: DEFAULT_BATTERY_COST,
            solar_cost: DEFAULT_SOLAR_COST,
            benefit_policy: BenefitPolicy::default(),
            min_sites: 1,
            max_sites: None,
        }
    }

    /// Set the connection cost per kilometre.
    pub fn cost_coeff(mut self, cost_coeff: f64) -> Self {
        self.cost_coeff = cost_coeff;
        self
    }

    /// Set the battery capital cost.
    pub fn battery_cost(mut self, battery_cost: f64) -> Self {
        self.battery_cost = battery_cost;
        self
    }

    /// Set the solar capital cost.
    pub fn solar_cost(mut self, solar_cost: f64) -> Self {
        self.solar_cost = solar_cost;
        self
    }

    /// Set the benefit derivation policy.
    pub fn benefit_policy(mut self, policy: BenefitPolicy) -> Self {
        self.benefit_policy = policy;
        self
    }

    /// Set the minimum number of sites to deploy.
    pub fn min_sites(mut self, min_sites: usize) -> Self {
        self.min_sites = min_sites;
        self
    }

    /// Set the maximum number of sites to deploy.
    pub fn max_sites(mut self, max_sites: usize) -> Self {
        self.max_sites = Some(max_sites);
        self
    }

    /// Validate and build the problem.
    pub fn build(self) -> Result<SitingProblem, SitingError> {
        if self.plants.is_empty() {
            return Err(SitingError::NoPlants);
        }
        if self.sites.is_empty() {
            return Err(SitingError::NoSites);
        }
        for (name, value) in [
            ("cost_coeff", self.cost_coeff),
            ("battery_cost", self.battery_cost),
            ("solar_cost", self.solar_cost),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SitingError::InvalidParameter(format!(
                    "{name} must be a finite value >= 0, got {value}"
                )));
            }
        }

        Ok(SitingProblem {
            plants: self.plants,
            sites: self.sites,
            cost_coeff: self.cost_coeff,
            battery_cost: self.battery_cost,
            solar_cost: self.solar_cost,
            benefit_policy: self.benefit_policy,
            min_sites: self.min_sites,
            max_sites: self.max_sites,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_plants() -> Vec<PowerPlant> {
        vec![
            PowerPlant::new(13.58, 100.20, 802_639.8),
            PowerPlant::new(14.17, 100.55, 2_501_433.6),
        ]
    }

    fn sample_sites() -> Vec<CandidateSite> {
        vec![
            CandidateSite::new(13.8, 100.3),
            CandidateSite::new(14.0, 100.4),
        ]
    }

    #[test]
    fn test_builder_defaults() {
        let problem = SitingProblem::builder(sample_plants(), sample_sites())
            .build()
            .unwrap();

        assert_eq!(problem.cost_coeff, DEFAULT_COST_COEFF);
        assert_eq!(problem.fixed_cost(), DEFAULT_BATTERY_COST + DEFAULT_SOLAR_COST);
        assert_eq!(problem.min_sites, 1);
        assert_eq!(problem.max_sites, None);
        assert_eq!(problem.num_plants(), 2);
        assert_eq!(problem.num_sites(), 2);
    }

    #[test]
    fn test_builder_overrides() {
        let problem = SitingProblem::builder(sample_plants(), sample_sites())
            .cost_coeff(1.0)
            .battery_cost(0.0)
            .solar_cost(0.0)
            .min_sites(0)
            .max_sites(1)
            .build()
            .unwrap();

        assert_eq!(problem.fixed_cost(), 0.0);
        assert_eq!(problem.max_sites, Some(1));
    }

    #[test]
    fn test_empty_inputs_rejected() {
        let err = SitingProblem::builder(Vec::new(), sample_sites())
            .build()
            .unwrap_err();
        assert_eq!(err, SitingError::NoPlants);

        let err = SitingProblem::builder(sample_plants(), Vec::new())
            .build()
            .unwrap_err();
        assert_eq!(err, SitingError::NoSites);
    }

    #[test]
    fn test_negative_coefficient_rejected() {
        let err = SitingProblem::builder(sample_plants(), sample_sites())
            .cost_coeff(-1.0)
            .build()
            .unwrap_err();
        assert!(matches!(err, SitingError::InvalidParameter(_)));
    }

    #[test]
    fn test_infeasible_band_is_not_a_build_error() {
        // min > max surfaces as an infeasible solve status, not here.
        let problem = SitingProblem::builder(sample_plants(), sample_sites())
            .min_sites(5)
            .max_sites(2)
            .build();
        assert!(problem.is_ok());
    }
}
