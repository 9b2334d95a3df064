//! Selection comparison.
//!
//! Compares two selection vectors computed under the same cost matrices,
//! e.g. an exact solution against a heuristic or quantum-derived one. The
//! comparison is pure and does not re-derive objectives; callers evaluate
//! both selections through [`super::SitingModel::evaluate`] when they need
//! objective values on equal footing.

use serde::{Deserialize, Serialize};

use super::SitingError;

/// Outcome of comparing two selection vectors of equal length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionComparison {
    /// Whether the vectors are element-wise identical.
    pub identical: bool,
    /// Number of active sites in the left-hand selection.
    pub lhs_selected: usize,
    /// Number of active sites in the right-hand selection.
    pub rhs_selected: usize,
}

/// Compare two selection vectors.
///
/// Fails when the vectors have different lengths, since they then cannot
/// refer to the same candidate-site list.
pub fn compare_selections(
    lhs: &[bool],
    rhs: &[bool],
) -> Result<SelectionComparison, SitingError> {
    if lhs.len() != rhs.len() {
        return Err(SitingError::SelectionLength {
            lhs: lhs.len(),
            rhs: rhs.len(),
        });
    }

    Ok(SelectionComparison {
        identical: lhs == rhs,
        lhs_selected: lhs.iter().filter(|&&x| x).count(),
        rhs_selected: rhs.iter().filter(|&&x| x).count(),
    })
}
