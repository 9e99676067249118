//! Passenger entry and weight resolution.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ensure_weight, Error, Result};
use crate::season::Season;
use crate::tables::standard_weight_lb;

/// Passenger categories that carry a standard weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassengerCategory {
    Male,
    Female,
    Child,
    Infant,
}

impl PassengerCategory {
    pub const ALL: [PassengerCategory; 4] = [
        PassengerCategory::Male,
        PassengerCategory::Female,
        PassengerCategory::Child,
        PassengerCategory::Infant,
    ];
}

impl fmt::Display for PassengerCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PassengerCategory::Male => "Male",
            PassengerCategory::Female => "Female",
            PassengerCategory::Child => "Child",
            PassengerCategory::Infant => "Infant",
        };
        f.write_str(value)
    }
}

/// Head counts per passenger category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassengerCounts {
    pub male: u32,
    pub female: u32,
    pub child: u32,
    pub infant: u32,
}

impl PassengerCounts {
    pub fn new(male: u32, female: u32, child: u32, infant: u32) -> Self {
        Self {
            male,
            female,
            child,
            infant,
        }
    }

    pub fn count(&self, category: PassengerCategory) -> u32 {
        match category {
            PassengerCategory::Male => self.male,
            PassengerCategory::Female => self.female,
            PassengerCategory::Child => self.child,
            PassengerCategory::Infant => self.infant,
        }
    }

    pub fn total(&self) -> u64 {
        PassengerCategory::ALL
            .iter()
            .map(|&category| u64::from(self.count(category)))
            .sum()
    }

    /// Exact standard weight (lb) of all passengers for `season`.
    pub fn standard_weight_lb(&self, season: Season) -> u64 {
        PassengerCategory::ALL
            .iter()
            .map(|&category| {
                u64::from(self.count(category)) * u64::from(standard_weight_lb(season, category))
            })
            .sum()
    }
}

/// How passenger weight is determined for an evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum PassengerSpec {
    /// Per-category counts weighed at the season's standard weights.
    StandardCounts(PassengerCounts),
    /// Individually entered weights; `declared_count` must equal `weights.len()`.
    ExplicitWeights {
        declared_count: usize,
        weights: Vec<f64>,
    },
}

impl Default for PassengerSpec {
    fn default() -> Self {
        PassengerSpec::StandardCounts(PassengerCounts::default())
    }
}

impl PassengerSpec {
    /// Build an explicit-weight spec whose declared count is the number of weights.
    pub fn explicit(weights: Vec<f64>) -> Self {
        PassengerSpec::ExplicitWeights {
            declared_count: weights.len(),
            weights,
        }
    }

    /// Require a matching explicit count and valid weights.
    pub fn validate(&self) -> Result<()> {
        if let PassengerSpec::ExplicitWeights {
            declared_count,
            weights,
        } = self
        {
            if *declared_count != weights.len() {
                return Err(Error::SpecMismatch {
                    declared: *declared_count,
                    supplied: weights.len(),
                });
            }
            for (idx, &weight) in weights.iter().enumerate() {
                ensure_weight(&format!("weight for passenger {}", idx + 1), weight)?;
            }
        }
        Ok(())
    }

    /// Total number of passengers on board.
    pub fn total_count(&self) -> u64 {
        match self {
            PassengerSpec::StandardCounts(counts) => counts.total(),
            PassengerSpec::ExplicitWeights { declared_count, .. } => *declared_count as u64,
        }
    }

    /// Passenger weight (lb) for `season`. Validates first; a sum that overflows to
    /// infinity is reported as invalid input.
    pub fn weight_lb(&self, season: Season) -> Result<f64> {
        self.validate()?;
        let weight = match self {
            PassengerSpec::StandardCounts(counts) => counts.standard_weight_lb(season) as f64,
            PassengerSpec::ExplicitWeights { weights, .. } => weights.iter().sum(),
        };
        ensure_weight("passenger weight", weight)
    }

    pub fn is_explicit(&self) -> bool {
        matches!(self, PassengerSpec::ExplicitWeights { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_weight_uses_season_table() {
        let counts = PassengerCounts::new(1, 1, 1, 1);
        assert_eq!(counts.standard_weight_lb(Season::Summer), 193 + 159 + 75 + 30);
        assert_eq!(counts.standard_weight_lb(Season::Winter), 199 + 165 + 75 + 30);
        assert_eq!(counts.total(), 4);
    }

    #[test]
    fn large_counts_stay_exact() {
        let counts = PassengerCounts::new(u32::MAX, 0, 0, 0);
        assert_eq!(
            counts.standard_weight_lb(Season::Winter),
            u64::from(u32::MAX) * 199
        );
    }

    #[test]
    fn explicit_weights_sum_fractional_values() {
        let spec = PassengerSpec::explicit(vec![180.5, 175.25, 0.25]);
        assert_eq!(spec.total_count(), 3);
        assert_eq!(spec.weight_lb(Season::Summer), Ok(356.0));
    }

    #[test]
    fn explicit_weights_reject_count_mismatch() {
        let spec = PassengerSpec::ExplicitWeights {
            declared_count: 3,
            weights: vec![180.0, 175.0],
        };
        assert_eq!(
            spec.weight_lb(Season::Summer),
            Err(Error::SpecMismatch {
                declared: 3,
                supplied: 2
            })
        );
    }

    #[test]
    fn explicit_weights_reject_negative_values() {
        let spec = PassengerSpec::explicit(vec![180.0, -1.0]);
        match spec.validate() {
            Err(Error::InvalidInput { field, .. }) => {
                assert_eq!(field, "weight for passenger 2")
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_explicit_spec_weighs_nothing() {
        let spec = PassengerSpec::explicit(Vec::new());
        assert_eq!(spec.total_count(), 0);
        assert_eq!(spec.weight_lb(Season::Winter), Ok(0.0));
    }
}
