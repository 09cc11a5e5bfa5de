//! COCOMO 81 effort and schedule estimation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{CocomoResults, DevelopmentMode, round2};
use crate::error::{Result, ensure_positive};

/// Monthly developer salary applied when the caller supplies none.
pub const DEFAULT_MONTHLY_SALARY: f64 = 5000.0;

/// Constant quadruple (a, b, c, d) for one development mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeConstants {
    /// Effort equation coefficient.
    pub a: f64,
    /// Effort equation exponent.
    pub b: f64,
    /// Schedule equation coefficient.
    pub c: f64,
    /// Schedule equation exponent.
    pub d: f64,
}

/// Published COCOMO 81 constants for a development mode.
pub fn mode_constants(mode: DevelopmentMode) -> ModeConstants {
    match mode {
        DevelopmentMode::Organic => ModeConstants {
            a: 2.4,
            b: 1.05,
            c: 2.5,
            d: 0.38,
        },
        DevelopmentMode::SemiDetached => ModeConstants {
            a: 3.0,
            b: 1.12,
            c: 2.5,
            d: 0.35,
        },
        DevelopmentMode::Embedded => ModeConstants {
            a: 3.6,
            b: 1.20,
            c: 2.5,
            d: 0.32,
        },
    }
}

/// Inputs for a COCOMO 81 estimation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cocomo81Input {
    /// Project size in thousands of lines of code.
    pub kloc: f64,
    /// Development mode selecting the constant quadruple.
    pub development_mode: DevelopmentMode,
    /// Effort adjustment factor, the product of the cost-driver multipliers.
    pub eaf: f64,
    /// Monthly developer salary used for the cost figures.
    pub developer_salary: f64,
}

impl Cocomo81Input {
    /// Create an input with nominal EAF and the default salary.
    pub fn new(kloc: f64, development_mode: DevelopmentMode) -> Self {
        Self {
            kloc,
            development_mode,
            eaf: 1.0,
            developer_salary: DEFAULT_MONTHLY_SALARY,
        }
    }

    /// Replace the effort adjustment factor.
    pub fn with_eaf(mut self, eaf: f64) -> Self {
        self.eaf = eaf;
        self
    }

    /// Replace the monthly developer salary.
    pub fn with_salary(mut self, developer_salary: f64) -> Self {
        self.developer_salary = developer_salary;
        self
    }
}

/// Estimate effort, schedule, staffing and cost with the COCOMO 81 model.
///
/// Fails with a [`crate::ValidationError`] when the size, EAF or salary is
/// not strictly positive. Outputs are rounded per [`round2`].
pub fn calculate_cocomo81(input: &Cocomo81Input) -> Result<CocomoResults> {
    ensure_positive(input.kloc, "KLOC")?;
    ensure_positive(input.eaf, "EAF")?;
    ensure_positive(input.developer_salary, "developer salary")?;

    let ModeConstants { a, b, c, d } = mode_constants(input.development_mode);

    let effort = a * input.kloc.powf(b) * input.eaf;
    let duration = c * effort.powf(d);
    let staffing = effort / duration;
    let total_cost = effort * input.developer_salary;
    let cost_per_month = total_cost / duration;

    Ok(CocomoResults {
        effort: round2(effort),
        duration: round2(duration),
        staffing: round2(staffing),
        total_cost: round2(total_cost),
        cost_per_month: round2(cost_per_month),
        phase_breakdown: None,
        average_salary: None,
    })
}

#[cfg(test)]
mod tests {
    use super::{Cocomo81Input, calculate_cocomo81, mode_constants};
    use crate::domain::DevelopmentMode;
    use crate::error::ValidationError;

    #[test]
    fn mode_constants_match_published_quadruples() {
        let organic = mode_constants(DevelopmentMode::Organic);
        assert_eq!((organic.a, organic.b, organic.c, organic.d), (2.4, 1.05, 2.5, 0.38));

        let semi = mode_constants(DevelopmentMode::SemiDetached);
        assert_eq!((semi.a, semi.b, semi.c, semi.d), (3.0, 1.12, 2.5, 0.35));

        let embedded = mode_constants(DevelopmentMode::Embedded);
        assert_eq!(
            (embedded.a, embedded.b, embedded.c, embedded.d),
            (3.6, 1.20, 2.5, 0.32)
        );
    }

    #[test]
    fn organic_ten_kloc_matches_published_figures() {
        let input = Cocomo81Input::new(10.0, DevelopmentMode::Organic);
        let results = calculate_cocomo81(&input).expect("valid input");

        assert_eq!(results.effort, 26.93);
        assert_eq!(results.duration, 8.74);
        assert_eq!(results.staffing, 3.08);
        assert_eq!(results.total_cost, 134642.21);
        assert_eq!(results.cost_per_month, 15408.52);
        assert_eq!(results.phase_breakdown, None);
        assert_eq!(results.average_salary, None);
    }

    #[test]
    fn semi_detached_twenty_five_kloc() {
        let input = Cocomo81Input::new(25.0, DevelopmentMode::SemiDetached);
        let results = calculate_cocomo81(&input).expect("valid input");

        assert_eq!(results.effort, 110.36);
        assert_eq!(results.duration, 12.97);
        assert_eq!(results.staffing, 8.51);
    }

    #[test]
    fn embedded_applies_eaf_and_salary() {
        let input = Cocomo81Input::new(50.0, DevelopmentMode::Embedded)
            .with_eaf(1.2)
            .with_salary(6000.0);
        let results = calculate_cocomo81(&input).expect("valid input");

        assert_eq!(results.effort, 472.33);
        assert_eq!(results.duration, 17.93);
        assert_eq!(results.staffing, 26.34);
        assert_eq!(results.total_cost, 2833994.5);
        assert_eq!(results.cost_per_month, 158015.51);
    }

    #[test]
    fn effort_grows_strictly_with_size() {
        let mut previous = 0.0;
        for kloc in [1.0, 5.0, 10.0, 50.0, 200.0] {
            let results = calculate_cocomo81(&Cocomo81Input::new(kloc, DevelopmentMode::Organic))
                .expect("valid input");
            assert!(results.effort > previous, "effort not increasing at {kloc} KLOC");
            assert!(results.duration > 0.0);
            previous = results.effort;
        }
    }

    #[test]
    fn identical_inputs_produce_identical_results() {
        let input = Cocomo81Input::new(33.3, DevelopmentMode::SemiDetached).with_eaf(0.91);
        let first = calculate_cocomo81(&input).expect("valid input");
        let second = calculate_cocomo81(&input).expect("valid input");
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_non_positive_kloc() {
        for kloc in [0.0, -5.0] {
            let error = calculate_cocomo81(&Cocomo81Input::new(kloc, DevelopmentMode::Organic))
                .expect_err("kloc must be rejected");
            assert_eq!(
                error,
                ValidationError::NotPositive {
                    parameter: "KLOC",
                    value: kloc
                }
            );
        }
    }

    #[test]
    fn rejects_non_positive_eaf_and_salary() {
        let zero_eaf = Cocomo81Input::new(10.0, DevelopmentMode::Organic).with_eaf(0.0);
        assert!(matches!(
            calculate_cocomo81(&zero_eaf),
            Err(ValidationError::NotPositive { parameter: "EAF", .. })
        ));

        let negative_salary =
            Cocomo81Input::new(10.0, DevelopmentMode::Organic).with_salary(-100.0);
        assert!(matches!(
            calculate_cocomo81(&negative_salary),
            Err(ValidationError::NotPositive {
                parameter: "developer salary",
                ..
            })
        ));
    }
}
