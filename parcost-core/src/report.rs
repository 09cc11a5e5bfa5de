//! Rendering helpers for estimation results.

use std::fmt::Write;

use serde::Serialize;

use crate::domain::{CocomoResults, DetailedCosts, FunctionPointsResults, PHASE_NAMES};
use crate::use_case_points::UseCasePointsResults;

/// Render a COCOMO estimate as Markdown.
pub fn render_cocomo_markdown(title: &str, results: &CocomoResults) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# {title}\n");
    let _ = writeln!(output, "- Effort: {:.2} person-months", results.effort);
    let _ = writeln!(output, "- Duration: {:.2} months", results.duration);
    let _ = writeln!(output, "- Staffing: {:.2} people", results.staffing);
    let _ = writeln!(output, "- Total cost: {:.2}", results.total_cost);
    let _ = writeln!(output, "- Cost per month: {:.2}", results.cost_per_month);
    if let Some(average) = results.average_salary {
        let _ = writeln!(output, "- Average monthly salary: {average:.2}");
    }
    if let Some(breakdown) = &results.phase_breakdown {
        let _ = writeln!(output);
        append_phase_table(&mut output, breakdown);
    }
    output
}

/// Render a Function Points estimate as Markdown.
pub fn render_function_points_markdown(results: &FunctionPointsResults) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Function Points Estimate\n");
    let _ = writeln!(
        output,
        "- Unadjusted function points: {:.2}",
        results.unadjusted_function_points
    );
    let _ = writeln!(
        output,
        "- Adjusted function points: {:.2}",
        results.adjusted_function_points
    );
    let _ = writeln!(output, "- Estimated lines of code: {:.2}", results.lines_of_code);
    output
}

/// Render a Use Case Points estimate as Markdown.
pub fn render_use_case_points_markdown(results: &UseCasePointsResults) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "# Use Case Points Estimate\n");
    let _ = writeln!(
        output,
        "- Unadjusted use case points: {:.2}",
        results.unadjusted_use_case_points
    );
    let _ = writeln!(
        output,
        "- Technical complexity factor: {:.2}",
        results.technical_complexity_factor
    );
    let _ = writeln!(
        output,
        "- Environmental complexity factor: {:.2}",
        results.environmental_complexity_factor
    );
    let _ = writeln!(
        output,
        "- Adjusted use case points: {:.2}",
        results.adjusted_use_case_points
    );
    let _ = writeln!(output, "- Effort: {:.2} hours", results.effort_hours);
    output
}

/// Render any serializable result payload as JSON.
pub fn render_json<T: Serialize + ?Sized>(payload: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(payload)
}

fn append_phase_table(output: &mut String, costs: &DetailedCosts) {
    let _ = writeln!(output, "## Phases\n");
    let _ = writeln!(output, "| Phase | % | Effort (PM) | Time (months) | Cost |");
    let _ = writeln!(output, "|---|---|---|---|---|");
    for (name, phase) in PHASE_NAMES.iter().zip(costs.phases()) {
        let _ = writeln!(
            output,
            "| {name} | {:.0} | {:.2} | {:.2} | {:.2} |",
            phase.percentage, phase.effort, phase.time, phase.total_cost
        );
    }
}
