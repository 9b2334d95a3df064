//! Solver result data structures.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Terminal status of a solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SolveStatus {
    /// An optimal (or best-found, for relaxed backends) selection exists.
    Optimal,
    /// No binary assignment satisfies the cardinality band.
    Infeasible,
    /// The relaxation is unbounded below.
    Unbounded,
    /// The backend failed for reasons internal to it.
    Error,
}

impl SolveStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, SolveStatus::Optimal)
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SolveStatus::Optimal => write!(f, "optimal"),
            SolveStatus::Infeasible => write!(f, "infeasible"),
            SolveStatus::Unbounded => write!(f, "unbounded"),
            SolveStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of one siting solve.
///
/// On `Optimal`, `selection` holds the binary decisions in site-index order
/// and `objective` the value of the objective on that selection. On any
/// non-optimal terminal status both are `None` and `message` explains the
/// condition; the caller decides whether to relax constraints and retry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitingSolution {
    pub status: SolveStatus,
    pub selection: Option<Vec<bool>>,
    pub objective: Option<f64>,
    pub solve_time: Duration,
    pub message: String,
}

impl SitingSolution {
    pub fn optimal(selection: Vec<bool>, objective: f64, solve_time: Duration, message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            selection: Some(selection),
            objective: Some(objective),
            solve_time,
            message: message.into(),
        }
    }

    pub fn infeasible(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Infeasible,
            selection: None,
            objective: None,
            solve_time: Duration::ZERO,
            message: message.into(),
        }
    }

    pub fn unbounded(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Unbounded,
            selection: None,
            objective: None,
            solve_time: Duration::ZERO,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SolveStatus::Error,
            selection: None,
            objective: None,
            solve_time: Duration::ZERO,
            message: message.into(),
        }
    }

    /// Number of selected sites (0 when no selection exists).
    pub fn num_selected(&self) -> usize {
        self.selection
            .as_ref()
            .map(|s| s.iter().filter(|&&x| x).count())
            .unwrap_or(0)
    }

    /// Indices of the selected sites, in site-index order.
    pub fn selected_indices(&self) -> Vec<usize> {
        self.selection
            .as_ref()
            .map(|s| {
                s.iter()
                    .enumerate()
                    .filter(|(_, &x)| x)
                    .map(|(i, _)| i)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Format a human-readable summary.
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str(&format!("Siting Solution Summary\n{}\n", "=".repeat(40)));
        s.push_str(&format!("Status: {}\n", self.status));
        if let Some(obj) = self.objective {
            s.push_str(&format!("Objective: {obj:.2}\n"));
        }
        if let Some(selection) = &self.selection {
            s.push_str(&format!(
                "Sites Selected: {} of {}\n",
                self.num_selected(),
                selection.len()
            ));
            s.push_str(&format!("Selected Indices: {:?}\n", self.selected_indices()));
        }
        s.push_str(&format!("Solve Time: {:.2?}\n", self.solve_time));
        if !self.message.is_empty() {
            s.push_str(&format!("Message: {}\n", self.message));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_counts_and_indices() {
        let solution = SitingSolution::optimal(
            vec![true, false, true, false],
            -120.5,
            Duration::from_millis(3),
            "optimal",
        );
        assert!(solution.status.is_success());
        assert_eq!(solution.num_selected(), 2);
        assert_eq!(solution.selected_indices(), vec![0, 2]);
    }

    #[test]
    fn test_infeasible_has_no_selection() {
        let solution = SitingSolution::infeasible("min_sites exceeds site count");
        assert_eq!(solution.status, SolveStatus::Infeasible);
        assert!(solution.selection.is_none());
        assert!(solution.objective.is_none());
        assert_eq!(solution.num_selected(), 0);
        assert!(solution.selected_indices().is_empty());
    }

    #[test]
    fn test_json_roundtrip() {
        let solution = SitingSolution::optimal(
            vec![true, false],
            -3.5,
            Duration::from_millis(2),
            "optimal (exact)",
        );
        let json = serde_json::to_string(&solution).unwrap();
        assert!(json.contains("\"status\":\"optimal\""));
        let back: SitingSolution = serde_json::from_str(&json).unwrap();
        assert_eq!(solution, back);
    }

    #[test]
    fn test_summary_contents() {
        let solution = SitingSolution::optimal(
            vec![true, true, false],
            42.0,
            Duration::from_millis(1),
            "optimal",
        );
        let summary = solution.summary();
        assert!(summary.contains("Status: optimal"));
        assert!(summary.contains("Sites Selected: 2 of 3"));
        assert!(summary.contains("Objective: 42.00"));
    }
}
