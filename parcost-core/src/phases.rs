//! Phase-level distribution of estimated effort and cost.

use crate::cocomo81::{Cocomo81Input, calculate_cocomo81};
use crate::domain::{DetailedCosts, DevelopmentMode, PhaseData, round2};
use crate::error::Result;

/// Distribute a COCOMO 81 estimate across the five project phases.
///
/// Totals come from the COCOMO 81 formula for the given size, mode and EAF
/// (the salary plays no role here, costs are derived from the per-phase
/// monthly rates). Each phase with a positive percentage receives that share
/// of total effort and schedule, costed at the phase's rate; zero-percentage
/// phases get all derived fields set to 0. Percentages that do not sum to
/// 100 are tolerated; the shares are simply proportionally inconsistent and
/// surfacing that is left to the caller.
pub fn distribute_phase_effort(
    kloc: f64,
    development_mode: DevelopmentMode,
    eaf: f64,
    detailed_costs: &DetailedCosts,
) -> Result<DetailedCosts> {
    let totals = calculate_cocomo81(&Cocomo81Input::new(kloc, development_mode).with_eaf(eaf))?;

    let mut distributed = *detailed_costs;
    for phase in distributed.phases_mut() {
        *phase = distribute_phase(*phase, totals.effort, totals.duration);
    }
    Ok(distributed)
}

/// Percentage-weighted blended monthly rate across the five phases.
///
/// When per-phase costs replace a single salary figure, this is the
/// effective monthly salary to feed back into the COCOMO 81 estimator.
pub fn average_salary(detailed_costs: &DetailedCosts) -> f64 {
    let blended: f64 = detailed_costs
        .phases()
        .iter()
        .map(|phase| phase.percentage / 100.0 * phase.cost)
        .sum();
    round2(blended)
}

fn distribute_phase(mut phase: PhaseData, total_effort: f64, total_duration: f64) -> PhaseData {
    if phase.percentage <= 0.0 {
        phase.effort = 0.0;
        phase.time = 0.0;
        phase.total_cost = 0.0;
        return phase;
    }

    let share = phase.percentage / 100.0;
    let effort = share * total_effort;
    phase.effort = round2(effort);
    phase.time = round2(share * total_duration);
    phase.total_cost = round2(effort * phase.cost);
    phase
}
