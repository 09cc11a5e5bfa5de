//! Function Points analysis and sizing.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{FunctionPointsResults, round2};
use crate::error::{Result, ValidationError, ensure_positive};

/// Inclusive lower bound of the value adjustment factor.
pub const VAF_MIN: f64 = 0.65;
/// Inclusive upper bound of the value adjustment factor.
pub const VAF_MAX: f64 = 1.35;

/// IFPUG weights for external inputs (low / average / high).
pub const INPUT_WEIGHTS: [f64; 3] = [3.0, 4.0, 6.0];
/// IFPUG weights for external outputs.
pub const OUTPUT_WEIGHTS: [f64; 3] = [4.0, 5.0, 7.0];
/// IFPUG weights for external inquiries.
pub const QUERY_WEIGHTS: [f64; 3] = [3.0, 4.0, 6.0];
/// IFPUG weights for internal logical files.
pub const FILE_WEIGHTS: [f64; 3] = [7.0, 10.0, 15.0];
/// IFPUG weights for external interface files.
pub const INTERFACE_WEIGHTS: [f64; 3] = [5.0, 7.0, 10.0];

/// Occurrence counts for one function type across the complexity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TierCounts {
    /// Low-complexity occurrences.
    pub low: u32,
    /// Average-complexity occurrences.
    pub average: u32,
    /// High-complexity occurrences.
    pub high: u32,
}

impl TierCounts {
    /// Create counts for the three tiers.
    pub fn new(low: u32, average: u32, high: u32) -> Self {
        Self { low, average, high }
    }

    fn weighted(&self, weights: [f64; 3]) -> f64 {
        f64::from(self.low) * weights[0]
            + f64::from(self.average) * weights[1]
            + f64::from(self.high) * weights[2]
    }
}

/// Function-type counts for the five IFPUG categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCounts {
    /// External inputs.
    pub inputs: TierCounts,
    /// External outputs.
    pub outputs: TierCounts,
    /// External inquiries.
    pub queries: TierCounts,
    /// Internal logical files.
    pub files: TierCounts,
    /// External interface files.
    pub interfaces: TierCounts,
}

/// Sum of weighted counts over all fifteen (type x tier) cells.
pub fn unadjusted_function_points(counts: &FunctionCounts) -> f64 {
    counts.inputs.weighted(INPUT_WEIGHTS)
        + counts.outputs.weighted(OUTPUT_WEIGHTS)
        + counts.queries.weighted(QUERY_WEIGHTS)
        + counts.files.weighted(FILE_WEIGHTS)
        + counts.interfaces.weighted(INTERFACE_WEIGHTS)
}

/// Convert unadjusted function points into adjusted points and estimated LOC.
///
/// `conversion_factor` is the language-dependent LOC/FP ratio (see
/// [`crate::catalog`]). The value adjustment factor must lie in
/// `[0.65, 1.35]`, boundaries included. Outputs are rounded per [`round2`].
pub fn calculate_function_points(
    conversion_factor: f64,
    value_adjustment_factor: f64,
    total_unadjusted_fp: f64,
) -> Result<FunctionPointsResults> {
    ensure_positive(conversion_factor, "conversion factor")?;
    ensure_positive(total_unadjusted_fp, "total unadjusted function points")?;
    if !(VAF_MIN..=VAF_MAX).contains(&value_adjustment_factor) {
        return Err(ValidationError::OutOfRange {
            parameter: "value adjustment factor",
            value: value_adjustment_factor,
            min: VAF_MIN,
            max: VAF_MAX,
        });
    }

    let unadjusted = total_unadjusted_fp;
    let adjusted = unadjusted * value_adjustment_factor;
    let lines_of_code = adjusted * conversion_factor;

    Ok(FunctionPointsResults {
        unadjusted_function_points: round2(unadjusted),
        adjusted_function_points: round2(adjusted),
        lines_of_code: round2(lines_of_code),
    })
}

#[cfg(test)]
mod tests {
    use super::{
        FunctionCounts, TierCounts, calculate_function_points, unadjusted_function_points,
    };
    use crate::error::ValidationError;

    #[test]
    fn java_conversion_at_nominal_adjustment() {
        let results = calculate_function_points(53.0, 1.0, 100.0).expect("valid input");

        assert_eq!(results.unadjusted_function_points, 100.0);
        assert_eq!(results.adjusted_function_points, 100.0);
        assert_eq!(results.lines_of_code, 5300.0);
    }

    #[test]
    fn adjustment_factor_scales_points_and_loc() {
        let results = calculate_function_points(128.0, 0.8, 210.0).expect("valid input");

        assert_eq!(results.unadjusted_function_points, 210.0);
        assert_eq!(results.adjusted_function_points, 168.0);
        assert_eq!(results.lines_of_code, 21504.0);
    }

    #[test]
    fn adjustment_factor_boundaries_are_inclusive() {
        assert!(calculate_function_points(53.0, 0.65, 100.0).is_ok());
        assert!(calculate_function_points(53.0, 1.35, 100.0).is_ok());
    }

    #[test]
    fn out_of_range_adjustment_factor_is_rejected() {
        for vaf in [0.5, 1.5] {
            let error =
                calculate_function_points(53.0, vaf, 100.0).expect_err("vaf must be rejected");
            assert_eq!(
                error,
                ValidationError::OutOfRange {
                    parameter: "value adjustment factor",
                    value: vaf,
                    min: 0.65,
                    max: 1.35,
                }
            );
        }
    }

    #[test]
    fn rejects_non_positive_factor_and_points() {
        assert!(matches!(
            calculate_function_points(0.0, 1.0, 100.0),
            Err(ValidationError::NotPositive {
                parameter: "conversion factor",
                ..
            })
        ));
        assert!(matches!(
            calculate_function_points(53.0, 1.0, -1.0),
            Err(ValidationError::NotPositive {
                parameter: "total unadjusted function points",
                ..
            })
        ));
    }

    #[test]
    fn counts_apply_published_weights() {
        let one_of_each = TierCounts::new(1, 1, 1);
        let counts = FunctionCounts {
            inputs: one_of_each,
            outputs: one_of_each,
            queries: one_of_each,
            files: one_of_each,
            interfaces: one_of_each,
        };
        // 13 + 16 + 13 + 32 + 22
        assert_eq!(unadjusted_function_points(&counts), 96.0);
    }

    #[test]
    fn empty_counts_produce_zero_points() {
        assert_eq!(unadjusted_function_points(&FunctionCounts::default()), 0.0);
    }
}
