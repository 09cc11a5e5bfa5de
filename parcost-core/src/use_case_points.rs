//! Use Case Points estimation.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::round2;

/// Actor weights per complexity tier (simple / average / complex).
pub const ACTOR_WEIGHTS: [f64; 3] = [1.0, 2.0, 3.0];
/// Use-case weights per complexity tier.
pub const USE_CASE_WEIGHTS: [f64; 3] = [5.0, 10.0, 15.0];

/// Weights for the thirteen technical complexity factors, T1 through T13.
pub const TECHNICAL_FACTOR_WEIGHTS: [f64; 13] =
    [2.0, 1.0, 1.0, 1.0, 1.0, 0.5, 0.5, 2.0, 1.0, 1.0, 1.0, 1.0, 1.0];

/// Weights for the eight environmental factors, E1 through E8.
///
/// Part-time staff (E7) and language difficulty (E8) weigh negative: more of
/// either lowers the environmental factor.
pub const ENVIRONMENTAL_FACTOR_WEIGHTS: [f64; 8] = [1.5, 0.5, 1.0, 0.5, 1.0, 2.0, -1.0, -1.0];

/// Hours per adjusted use case point applied when the caller supplies none.
pub const DEFAULT_PRODUCTIVITY_FACTOR: f64 = 20.0;

/// Actor counts per complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ActorCounts {
    /// Actors reached through a defined API.
    pub simple: u32,
    /// Actors reached through a protocol or data store.
    pub average: u32,
    /// Actors interacting through a GUI or web page.
    pub complex: u32,
}

/// Use-case counts per complexity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UseCaseCounts {
    /// Use cases with up to 3 transactions.
    pub simple: u32,
    /// Use cases with 4 to 7 transactions.
    pub average: u32,
    /// Use cases with more than 7 transactions.
    pub complex: u32,
}

/// Inputs for a Use Case Points estimation run.
///
/// Factor scores range 0-5; keeping them in range is a caller concern, not a
/// validation error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UseCasePointsInput {
    /// Actor counts per tier.
    pub actors: ActorCounts,
    /// Use-case counts per tier.
    pub use_cases: UseCaseCounts,
    /// Scores for T1 through T13.
    pub technical_scores: [f64; 13],
    /// Scores for E1 through E8.
    pub environmental_scores: [f64; 8],
    /// Hours per adjusted use case point, typically 15-30.
    pub productivity_factor: f64,
}

impl UseCasePointsInput {
    /// Create an input with all factor scores at zero and the default
    /// productivity factor.
    pub fn new(actors: ActorCounts, use_cases: UseCaseCounts) -> Self {
        Self {
            actors,
            use_cases,
            technical_scores: [0.0; 13],
            environmental_scores: [0.0; 8],
            productivity_factor: DEFAULT_PRODUCTIVITY_FACTOR,
        }
    }

    /// Replace the technical factor scores.
    pub fn with_technical_scores(mut self, scores: [f64; 13]) -> Self {
        self.technical_scores = scores;
        self
    }

    /// Replace the environmental factor scores.
    pub fn with_environmental_scores(mut self, scores: [f64; 8]) -> Self {
        self.environmental_scores = scores;
        self
    }

    /// Replace the productivity factor.
    pub fn with_productivity_factor(mut self, hours_per_point: f64) -> Self {
        self.productivity_factor = hours_per_point;
        self
    }
}

/// Results of a Use Case Points estimation run.
///
/// The two factors are reported at full precision; the point totals and the
/// effort figure are rounded per [`round2`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UseCasePointsResults {
    /// Unadjusted actor weight (UAW).
    pub unadjusted_actor_weight: f64,
    /// Unadjusted use-case weight (UUCW).
    pub unadjusted_use_case_weight: f64,
    /// Unadjusted use case points (UAW + UUCW).
    pub unadjusted_use_case_points: f64,
    /// Technical complexity factor (TCF).
    pub technical_complexity_factor: f64,
    /// Environmental complexity factor (ECF).
    pub environmental_complexity_factor: f64,
    /// Adjusted use case points (UUCP x TCF x ECF).
    pub adjusted_use_case_points: f64,
    /// Estimated effort in hours.
    pub effort_hours: f64,
}

/// Estimate effort with the Use Case Points method.
///
/// Pure and infallible: counts are unsigned by type and out-of-range factor
/// scores are left to the caller.
pub fn calculate_use_case_points(input: &UseCasePointsInput) -> UseCasePointsResults {
    let uaw = f64::from(input.actors.simple) * ACTOR_WEIGHTS[0]
        + f64::from(input.actors.average) * ACTOR_WEIGHTS[1]
        + f64::from(input.actors.complex) * ACTOR_WEIGHTS[2];
    let uucw = f64::from(input.use_cases.simple) * USE_CASE_WEIGHTS[0]
        + f64::from(input.use_cases.average) * USE_CASE_WEIGHTS[1]
        + f64::from(input.use_cases.complex) * USE_CASE_WEIGHTS[2];
    let uucp = uaw + uucw;

    let technical_sum: f64 = input
        .technical_scores
        .iter()
        .zip(TECHNICAL_FACTOR_WEIGHTS)
        .map(|(score, weight)| score * weight)
        .sum();
    let environmental_sum: f64 = input
        .environmental_scores
        .iter()
        .zip(ENVIRONMENTAL_FACTOR_WEIGHTS)
        .map(|(score, weight)| score * weight)
        .sum();

    let tcf = 0.6 + 0.01 * technical_sum;
    let ecf = 1.4 - 0.03 * environmental_sum;

    let adjusted = uucp * tcf * ecf;
    let effort_hours = adjusted * input.productivity_factor;

    UseCasePointsResults {
        unadjusted_actor_weight: uaw,
        unadjusted_use_case_weight: uucw,
        unadjusted_use_case_points: uucp,
        technical_complexity_factor: tcf,
        environmental_complexity_factor: ecf,
        adjusted_use_case_points: round2(adjusted),
        effort_hours: round2(effort_hours),
    }
}
