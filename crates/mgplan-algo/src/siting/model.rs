//! Model formulation.
//!
//! Assembles the binary quadratic objective and cardinality bounds from the
//! cost matrices. The model is solver-agnostic: any backend that accepts
//! linear + pairwise terms over binary variables can consume it.

use serde::{Deserialize, Serialize};

use super::costs::CostMatrices;

/// A formulated siting model.
///
/// Objective (minimize):
///
/// ```text
/// Σ_i x_i·linear[i]  +  Σ_{i<j} x_i·x_j·quadratic[i][j]
/// ```
///
/// with `linear[i] = fixed_cost + site_to_plant[i] − benefit[i]` and
/// `quadratic` the symmetric inter-site cost matrix (each unordered pair
/// counted once). Subject to `min_sites ≤ Σ x_i`, and `Σ x_i ≤ max_sites`
/// when set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitingModel {
    pub num_sites: usize,
    /// Per-site net activation cost.
    pub linear: Vec<f64>,
    /// Symmetric pairwise activation cost, zero diagonal.
    pub quadratic: Vec<Vec<f64>>,
    pub min_sites: usize,
    pub max_sites: Option<usize>,
}

/// Formulate a model from cost matrices and a cardinality band.
pub fn formulate(costs: &CostMatrices, min_sites: usize, max_sites: Option<usize>) -> SitingModel {
    let n = costs.num_sites();
    let linear = (0..n)
        .map(|i| costs.fixed_cost + costs.site_to_plant[i] - costs.benefit[i])
        .collect();

    SitingModel {
        num_sites: n,
        linear,
        quadratic: costs.site_to_site.clone(),
        min_sites,
        max_sites,
    }
}

impl SitingModel {
    /// Evaluate the objective for a selection vector.
    ///
    /// All backends report objectives through this function, so exact,
    /// relaxed and externally supplied selections are comparable.
    pub fn evaluate(&self, selection: &[bool]) -> f64 {
        assert_eq!(
            selection.len(),
            self.num_sites,
            "selection length must match the number of sites"
        );

        let mut total = 0.0;
        for i in 0..self.num_sites {
            if !selection[i] {
                continue;
            }
            total += self.linear[i];
            for j in (i + 1)..self.num_sites {
                if selection[j] {
                    total += self.quadratic[i][j];
                }
            }
        }
        total
    }

    /// Whether any selection can satisfy the cardinality band.
    pub fn is_cardinality_feasible(&self) -> bool {
        if self.min_sites > self.num_sites {
            return false;
        }
        match self.max_sites {
            Some(max) => self.min_sites <= max,
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_site_costs() -> CostMatrices {
        CostMatrices {
            site_to_plant: vec![200.0, 400.0],
            site_to_site: vec![vec![0.0, 50.0], vec![50.0, 0.0]],
            fixed_cost: 10.0,
            benefit: vec![100.0, 100.0],
        }
    }

    #[test]
    fn test_linear_terms() {
        let model = formulate(&two_site_costs(), 1, None);
        assert_eq!(model.num_sites, 2);
        assert_eq!(model.linear, vec![110.0, 310.0]);
        assert_eq!(model.min_sites, 1);
        assert_eq!(model.max_sites, None);
    }

    #[test]
    fn test_evaluate_counts_each_pair_once() {
        let model = formulate(&two_site_costs(), 1, None);
        assert_eq!(model.evaluate(&[false, false]), 0.0);
        assert_eq!(model.evaluate(&[true, false]), 110.0);
        assert_eq!(model.evaluate(&[false, true]), 310.0);
        // Both active: linear terms plus the pair cost, counted once.
        assert_eq!(model.evaluate(&[true, true]), 110.0 + 310.0 + 50.0);
    }

    #[test]
    fn test_cardinality_feasibility() {
        let costs = two_site_costs();
        assert!(formulate(&costs, 0, Some(0)).is_cardinality_feasible());
        assert!(formulate(&costs, 2, None).is_cardinality_feasible());
        assert!(!formulate(&costs, 3, None).is_cardinality_feasible());
        assert!(!formulate(&costs, 2, Some(1)).is_cardinality_feasible());
    }

    #[test]
    #[should_panic(expected = "selection length")]
    fn test_evaluate_rejects_wrong_length() {
        let model = formulate(&two_site_costs(), 1, None);
        model.evaluate(&[true]);
    }
}
