//! Domain entities shared across the estimation models.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::ValidationError;

/// Development mode selecting the COCOMO 81 constant quadruple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum DevelopmentMode {
    /// Small teams working in familiar, flexible environments.
    Organic,
    /// Intermediate team size and requirement rigidity.
    SemiDetached,
    /// Tight hardware, software and operational constraints.
    Embedded,
}

impl DevelopmentMode {
    /// Canonical wire name for the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Organic => "organic",
            Self::SemiDetached => "semi-detached",
            Self::Embedded => "embedded",
        }
    }
}

impl FromStr for DevelopmentMode {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "organic" => Ok(Self::Organic),
            "semi-detached" => Ok(Self::SemiDetached),
            "embedded" => Ok(Self::Embedded),
            _ => Err(ValidationError::UnknownMode(value.to_string())),
        }
    }
}

/// Results of a COCOMO estimation run.
///
/// Derived once per calculation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CocomoResults {
    /// Estimated effort in person-months.
    pub effort: f64,
    /// Estimated schedule in months.
    pub duration: f64,
    /// Average staffing in people (effort / duration).
    pub staffing: f64,
    /// Total project cost (effort x monthly salary).
    pub total_cost: f64,
    /// Total cost spread over the schedule.
    pub cost_per_month: f64,
    /// Per-phase breakdown, when the caller distributes costs by phase.
    pub phase_breakdown: Option<DetailedCosts>,
    /// Percentage-weighted blended monthly salary, when phase costs are used.
    pub average_salary: Option<f64>,
}

/// Results of a Function Points analysis run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FunctionPointsResults {
    /// Total unadjusted function points.
    pub unadjusted_function_points: f64,
    /// Function points after applying the value adjustment factor.
    pub adjusted_function_points: f64,
    /// Estimated lines of code for the selected language.
    pub lines_of_code: f64,
}

/// One project phase's share of the total work.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PhaseData {
    /// Share of total work assigned to the phase, 0-100.
    pub percentage: f64,
    /// Monthly rate charged during the phase.
    pub cost: f64,
    /// Person-months allocated to the phase.
    pub effort: f64,
    /// Schedule months allocated to the phase.
    pub time: f64,
    /// Total cost of the phase (effort x monthly rate).
    pub total_cost: f64,
}

impl PhaseData {
    /// Create a phase assignment with no derived figures yet.
    pub fn new(percentage: f64, cost: f64) -> Self {
        Self {
            percentage,
            cost,
            ..Self::default()
        }
    }
}

/// Canonical phase names, in schedule order.
pub const PHASE_NAMES: [&str; 5] = ["requirements", "analysis", "design", "development", "testing"];

/// Percentage and rate assignments for the five fixed project phases.
///
/// The five percentages are expected to sum to 100; the engine tolerates any
/// total and leaves surfacing the inconsistency to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DetailedCosts {
    /// Requirements phase.
    pub requirements: PhaseData,
    /// Analysis phase.
    pub analysis: PhaseData,
    /// Design phase.
    pub design: PhaseData,
    /// Development phase.
    pub development: PhaseData,
    /// Testing phase.
    pub testing: PhaseData,
}

impl DetailedCosts {
    /// Phases in canonical order.
    pub fn phases(&self) -> [&PhaseData; 5] {
        [
            &self.requirements,
            &self.analysis,
            &self.design,
            &self.development,
            &self.testing,
        ]
    }

    /// Mutable phases in canonical order.
    pub fn phases_mut(&mut self) -> [&mut PhaseData; 5] {
        [
            &mut self.requirements,
            &mut self.analysis,
            &mut self.design,
            &mut self.development,
            &mut self.testing,
        ]
    }

    /// Sum of the five percentage fields.
    pub fn total_percentage(&self) -> f64 {
        self.phases().iter().map(|phase| phase.percentage).sum()
    }
}

/// Round to two decimals, half away from zero.
///
/// Every estimator computes at full precision and passes its outputs through
/// this before returning them, so identical inputs always produce identical
/// figures.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{DetailedCosts, DevelopmentMode, PhaseData, round2};
    use crate::error::ValidationError;

    #[test]
    fn mode_parses_canonical_names() {
        assert_eq!("organic".parse(), Ok(DevelopmentMode::Organic));
        assert_eq!("semi-detached".parse(), Ok(DevelopmentMode::SemiDetached));
        assert_eq!(" Embedded ".parse(), Ok(DevelopmentMode::Embedded));
    }

    #[test]
    fn mode_rejects_unknown_names() {
        let parsed: Result<DevelopmentMode, _> = "spiral".parse();
        assert_eq!(parsed, Err(ValidationError::UnknownMode("spiral".to_string())));
    }

    #[test]
    fn mode_round_trips_wire_names() {
        for mode in [
            DevelopmentMode::Organic,
            DevelopmentMode::SemiDetached,
            DevelopmentMode::Embedded,
        ] {
            assert_eq!(mode.as_str().parse(), Ok(mode));
        }
    }

    #[test]
    fn round2_is_half_away_from_zero() {
        assert_eq!(round2(26.928441), 26.93);
        // 0.125 is exact in binary, so the tie is real.
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn total_percentage_sums_all_phases() {
        let costs = DetailedCosts {
            requirements: PhaseData::new(10.0, 4000.0),
            analysis: PhaseData::new(20.0, 4500.0),
            design: PhaseData::new(20.0, 5000.0),
            development: PhaseData::new(40.0, 5500.0),
            testing: PhaseData::new(10.0, 4800.0),
        };
        assert_eq!(costs.total_percentage(), 100.0);
    }
}
