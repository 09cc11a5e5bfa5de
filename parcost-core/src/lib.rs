#![deny(missing_docs)]
//! Parcost core library.
//!
//! Parametric software cost estimation: the COCOMO 81 and COCOMO II
//! post-architecture models, Function Points analysis, Use Case Points, and
//! phase-level cost distribution. Every estimator is a pure, synchronous
//! function of its explicit inputs, so the crate holds no state and can be
//! called from any number of threads at once.

pub mod catalog;
pub mod cocomo2;
pub mod cocomo81;
pub mod domain;
pub mod drivers;
pub mod error;
pub mod function_points;
pub mod phases;
pub mod report;
pub mod use_case_points;

pub use catalog::{LOC_PER_FUNCTION_POINT, LocCatalog, StandardCatalog, estimate_lines_of_code};
pub use cocomo2::{
    Cocomo2Input, CostDrivers, EFFORT_COEFFICIENT, FP_TO_KLOC, SCHEDULE_COEFFICIENT, ScaleDrivers,
    calculate_cocomo2,
};
pub use cocomo81::{
    Cocomo81Input, DEFAULT_MONTHLY_SALARY, ModeConstants, calculate_cocomo81, mode_constants,
};
pub use domain::{
    CocomoResults, DetailedCosts, DevelopmentMode, FunctionPointsResults, PHASE_NAMES, PhaseData,
    round2,
};
pub use drivers::{
    COCOMO2_COST_DRIVERS, COCOMO81_COST_DRIVERS, DriverScale, effort_multiplier,
    nominal_selections,
};
pub use error::{Result, ValidationError};
pub use function_points::{
    FunctionCounts, TierCounts, VAF_MAX, VAF_MIN, calculate_function_points,
    unadjusted_function_points,
};
pub use phases::{average_salary, distribute_phase_effort};
pub use report::{
    render_cocomo_markdown, render_function_points_markdown, render_json,
    render_use_case_points_markdown,
};
pub use use_case_points::{
    ActorCounts, DEFAULT_PRODUCTIVITY_FACTOR, UseCaseCounts, UseCasePointsInput,
    UseCasePointsResults, calculate_use_case_points,
};
