// SPDX-FileCopyrightText: 2026 Pawcare Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Budget classification.
//!
//! The user enters a free-form number; the remote diet endpoint only
//! accepts a coarse tier. Classification is local and deterministic so
//! an out-of-range value never produces a doomed request.

use pawcare_core::{BudgetTier, PawcareError};

/// Smallest accepted budget (inclusive).
pub const MIN_BUDGET: f64 = 1.0;
/// Largest accepted budget (inclusive).
pub const MAX_BUDGET: f64 = 100.0;

/// Upper bound of the Bajo tier (inclusive).
const BAJO_MAX: f64 = 33.0;
/// Upper bound of the Medio tier (inclusive).
const MEDIO_MAX: f64 = 66.0;

/// Classify a raw budget into a [`BudgetTier`].
///
/// Accepts values in `[1, 100]`, both bounds valid. Ties at exactly 33
/// and 66 resolve toward the lower tier. Non-finite input and values
/// outside the range fail with [`PawcareError::InvalidBudget`].
pub fn classify_budget(raw: f64) -> Result<BudgetTier, PawcareError> {
    if !raw.is_finite() {
        return Err(PawcareError::InvalidBudget {
            value: raw,
            reason: "not a usable number".to_string(),
        });
    }
    if raw < MIN_BUDGET {
        return Err(PawcareError::InvalidBudget {
            value: raw,
            reason: format!("below the minimum of {MIN_BUDGET}"),
        });
    }
    if raw > MAX_BUDGET {
        return Err(PawcareError::InvalidBudget {
            value: raw,
            reason: format!("above the maximum of {MAX_BUDGET}"),
        });
    }

    if raw <= BAJO_MAX {
        Ok(BudgetTier::Bajo)
    } else if raw <= MEDIO_MAX {
        Ok(BudgetTier::Medio)
    } else {
        Ok(BudgetTier::Alto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_resolve_to_lower_tier() {
        assert_eq!(classify_budget(33.0).unwrap(), BudgetTier::Bajo);
        assert_eq!(classify_budget(34.0).unwrap(), BudgetTier::Medio);
        assert_eq!(classify_budget(66.0).unwrap(), BudgetTier::Medio);
        assert_eq!(classify_budget(67.0).unwrap(), BudgetTier::Alto);
    }

    #[test]
    fn range_bounds_are_inclusive() {
        assert_eq!(classify_budget(1.0).unwrap(), BudgetTier::Bajo);
        assert_eq!(classify_budget(100.0).unwrap(), BudgetTier::Alto);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        assert!(matches!(
            classify_budget(0.0),
            Err(PawcareError::InvalidBudget { .. })
        ));
        assert!(matches!(
            classify_budget(101.0),
            Err(PawcareError::InvalidBudget { .. })
        ));
        assert!(matches!(
            classify_budget(-5.0),
            Err(PawcareError::InvalidBudget { .. })
        ));
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert!(classify_budget(f64::NAN).is_err());
        assert!(classify_budget(f64::INFINITY).is_err());
        assert!(classify_budget(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn fractional_budgets_classify() {
        assert_eq!(classify_budget(33.5).unwrap(), BudgetTier::Medio);
        assert_eq!(classify_budget(66.01).unwrap(), BudgetTier::Alto);
        assert_eq!(classify_budget(1.5).unwrap(), BudgetTier::Bajo);
    }
}
