//! COCOMO II post-architecture effort and schedule estimation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::cocomo81::DEFAULT_MONTHLY_SALARY;
use crate::domain::{CocomoResults, round2};
use crate::error::{Result, ensure_positive};

/// Effort equation coefficient (Post-Architecture calibration).
pub const EFFORT_COEFFICIENT: f64 = 2.94;
/// Schedule equation coefficient.
pub const SCHEDULE_COEFFICIENT: f64 = 3.67;
/// Simplified function-point to KLOC conversion ratio.
pub const FP_TO_KLOC: f64 = 0.1;

/// The five COCOMO II scale drivers, each rated 0-6.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScaleDrivers {
    /// How novel the product is to the organization.
    pub precedentedness: f64,
    /// Degree of schedule and requirement flexibility.
    pub development_flexibility: f64,
    /// Architecture definition and risk retirement progress.
    pub architecture_risk_resolution: f64,
    /// How well the stakeholders cooperate.
    pub team_cohesion: f64,
    /// Process maturity of the organization.
    pub process_maturity: f64,
}

impl ScaleDrivers {
    /// Sum of the five ratings, driving the scale exponent.
    pub fn sum(&self) -> f64 {
        self.precedentedness
            + self.development_flexibility
            + self.architecture_risk_resolution
            + self.team_cohesion
            + self.process_maturity
    }
}

impl Default for ScaleDrivers {
    /// Published calibration averages.
    fn default() -> Self {
        Self {
            precedentedness: 3.72,
            development_flexibility: 3.04,
            architecture_risk_resolution: 3.29,
            team_cohesion: 3.12,
            process_maturity: 3.12,
        }
    }
}

/// The seventeen COCOMO II post-architecture cost-driver multipliers.
///
/// Each field holds one calibrated rating value; see
/// [`crate::drivers::COCOMO2_COST_DRIVERS`] for the discrete scales.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CostDrivers {
    /// Required software reliability.
    pub rely: f64,
    /// Database size.
    pub data: f64,
    /// Product complexity.
    pub cplx: f64,
    /// Developed for reusability.
    pub ruse: f64,
    /// Documentation match to life-cycle needs.
    pub docu: f64,
    /// Execution time constraint.
    pub time: f64,
    /// Main storage constraint.
    pub stor: f64,
    /// Platform volatility.
    pub pvol: f64,
    /// Analyst capability.
    pub acap: f64,
    /// Programmer capability.
    pub pcap: f64,
    /// Personnel continuity.
    pub pcon: f64,
    /// Applications experience.
    pub apex: f64,
    /// Platform experience.
    pub plex: f64,
    /// Language and toolset experience.
    pub ltex: f64,
    /// Use of software tools.
    pub tool: f64,
    /// Multisite development.
    pub site: f64,
    /// Required development schedule.
    pub sced: f64,
}

impl CostDrivers {
    /// Product of the seventeen multipliers, the effort multiplier (EM).
    pub fn product(&self) -> f64 {
        self.rely
            * self.data
            * self.cplx
            * self.ruse
            * self.docu
            * self.time
            * self.stor
            * self.pvol
            * self.acap
            * self.pcap
            * self.pcon
            * self.apex
            * self.plex
            * self.ltex
            * self.tool
            * self.site
            * self.sced
    }
}

impl Default for CostDrivers {
    /// Every driver at its nominal (1.00) rating.
    fn default() -> Self {
        Self {
            rely: 1.0,
            data: 1.0,
            cplx: 1.0,
            ruse: 1.0,
            docu: 1.0,
            time: 1.0,
            stor: 1.0,
            pvol: 1.0,
            acap: 1.0,
            pcap: 1.0,
            pcon: 1.0,
            apex: 1.0,
            plex: 1.0,
            ltex: 1.0,
            tool: 1.0,
            site: 1.0,
            sced: 1.0,
        }
    }
}

/// Inputs for a COCOMO II estimation run.
///
/// Built through exactly one of the two constructors: [`Self::from_summary`]
/// for pre-aggregated figures, or [`Self::from_drivers`] which derives the
/// scale-factor sum and effort multiplier from full driver structures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Cocomo2Input {
    /// Project size, in KLOC or unadjusted function points.
    pub size: f64,
    /// Sum of the five scale-driver ratings.
    pub scale_factor_sum: f64,
    /// Effort multiplier, the product of the cost-driver ratings.
    pub eaf: f64,
    /// Whether `size` is expressed in function points rather than KLOC.
    pub uses_function_points: bool,
    /// Monthly developer salary used for the cost figures.
    pub developer_salary: f64,
}

impl Cocomo2Input {
    /// Create an input from a pre-summed scale factor and scalar EAF.
    pub fn from_summary(size: f64, scale_factor_sum: f64, eaf: f64) -> Self {
        Self {
            size,
            scale_factor_sum,
            eaf,
            uses_function_points: false,
            developer_salary: DEFAULT_MONTHLY_SALARY,
        }
    }

    /// Create an input from full scale-driver and cost-driver structures.
    pub fn from_drivers(size: f64, scale_drivers: &ScaleDrivers, cost_drivers: &CostDrivers) -> Self {
        Self::from_summary(size, scale_drivers.sum(), cost_drivers.product())
    }

    /// Mark the size as expressed in unadjusted function points.
    pub fn sized_in_function_points(mut self) -> Self {
        self.uses_function_points = true;
        self
    }

    /// Replace the monthly developer salary.
    pub fn with_salary(mut self, developer_salary: f64) -> Self {
        self.developer_salary = developer_salary;
        self
    }
}

/// Estimate effort, schedule, staffing and cost with the COCOMO II model.
///
/// Uses the Post-Architecture calibration with the undivided schedule
/// exponent, `0.33 + 0.2 * (scale_factor - 1.01)`. Fails with a
/// [`crate::ValidationError`] when the size, EAF or salary is not strictly
/// positive. Outputs are rounded per [`round2`].
pub fn calculate_cocomo2(input: &Cocomo2Input) -> Result<CocomoResults> {
    ensure_positive(input.size, "size")?;
    ensure_positive(input.eaf, "EAF")?;
    ensure_positive(input.developer_salary, "developer salary")?;

    let kloc = if input.uses_function_points {
        input.size * FP_TO_KLOC
    } else {
        input.size
    };

    let scale_factor = 0.91 + 0.01 * input.scale_factor_sum;
    let effort = EFFORT_COEFFICIENT * kloc.powf(scale_factor) * input.eaf;

    let duration_exponent = 0.33 + 0.2 * (scale_factor - 1.01);
    let duration = SCHEDULE_COEFFICIENT * effort.powf(duration_exponent);

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
