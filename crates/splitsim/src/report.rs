//! Markdown rendering of a sweep summary, for headless runs

use std::fmt::Write;

use splitsim_core::{ScenarioInputs, SensitivityParameter, SensitivityPoint, Summary};

use crate::util::format::{format_amount, format_percent, whole_percent};

/// One summary line per fact, without markdown decoration
pub fn summary_lines(inputs: &ScenarioInputs, summary: &Summary) -> Vec<(String, String)> {
    vec![
        (
            "Venue fee".to_string(),
            format!("{}%", whole_percent(inputs.venue_fee)),
        ),
        (
            "Pool share (fixed)".to_string(),
            format!("{}%", whole_percent(inputs.pool_dominance)),
        ),
        (
            format!(
                "Reward share at {} split",
                format_percent(inputs.highlight_split * 100.0, 0)
            ),
            format_percent(summary.highlighted_reward, 2),
        ),
        (
            "Maximum reward share".to_string(),
            format!(
                "{} at {} split",
                format_percent(summary.max_reward, 2),
                format_percent(summary.optimal_split * 100.0, 1)
            ),
        ),
    ]
}

/// The summary as a markdown section
pub fn summary_markdown(inputs: &ScenarioInputs, summary: &Summary) -> String {
    let mut out = String::from("### Summary:\n");
    for (label, value) in summary_lines(inputs, summary) {
        // Writing to a String cannot fail
        let _ = writeln!(out, "- {label}: **{value}**");
    }
    out
}

fn format_parameter_value(parameter: SensitivityParameter, value: f64) -> String {
    match parameter {
        SensitivityParameter::PoolDominance | SensitivityParameter::VenueFee => {
            format_percent(value * 100.0, 1)
        }
        SensitivityParameter::PrimaryHoldings => format_amount(value),
    }
}

/// Markdown table of the optimum for each sensitivity value
pub fn sensitivity_markdown(
    parameter: SensitivityParameter,
    points: &[SensitivityPoint],
) -> String {
    let mut out = format!("### Sensitivity: {}\n", parameter.label());
    let _ = writeln!(
        out,
        "| {} | Optimal split | Max reward share |",
        parameter.label()
    );
    out.push_str("|---:|---:|---:|\n");

    for point in points {
        let _ = writeln!(
            out,
            "| {} | {} | {} |",
            format_parameter_value(parameter, point.value),
            format_percent(point.optimal_split * 100.0, 1),
            format_percent(point.max_reward, 2),
        );
    }
    out
}
