//! Plain-text flight summaries.

use uav_core::{Comparison, ScenarioOutcome, ScenarioReport};

/// Multi-line summary of one scenario.
pub fn format_report(report: &ScenarioReport) -> String {
    let mut lines = vec![format!(
        "=== {} ({} traversal, altitude {} m) ===",
        report.name, report.rule, report.config.altitude_m
    )];

    match &report.outcome {
        ScenarioOutcome::NoPath => {
            lines.push("No path found between start and goal.".to_string());
        }
        ScenarioOutcome::Completed(metrics) => {
            let capacity = report.config.battery_capacity;
            lines.push(format!("Distance:  {} steps", metrics.distance));
            lines.push(format!("Time:      {:.2} s", metrics.time_s));
            lines.push(format!("Battery:   {:.2} %", metrics.battery_consumed));
            lines.push(format!(
                "Remaining: {:.2} % of {:.0} %",
                metrics.battery_remaining(capacity),
                capacity
            ));
            if !metrics.within_capacity(capacity) {
                lines.push("WARNING: route exceeds battery capacity".to_string());
            }
            let cells: Vec<String> = metrics
                .path
                .coordinates()
                .iter()
                .map(|c| c.to_string())
                .collect();
            lines.push(format!("Path:      {}", cells.join(" -> ")));
        }
    }
    finish(lines)
}

/// Summary of a comparison between two named scenarios.
pub fn format_comparison(baseline: &str, candidate: &str, comparison: &Comparison) -> String {
    let mut lines = vec![format!("=== {} vs {} ===", candidate, baseline)];
    match comparison {
        Comparison::Compared(delta) => {
            let rows = [
                ("Distance:", delta.distance_pct),
                ("Time:", delta.time_pct),
                ("Battery:", delta.battery_pct),
            ];
            for (label, pct) in rows {
                lines.push(match pct {
                    Some(pct) => format!("{:<9} {:+.2} %", label, pct),
                    None => format!("{:<9} n/a (baseline is zero)", label),
                });
            }
        }
        Comparison::Unavailable {
            baseline_missing,
            candidate_missing,
        } => {
            let sides = [
                (*baseline_missing, baseline),
                (*candidate_missing, candidate),
            ];
            let missing: Vec<&str> = sides
                .into_iter()
                .filter(|(missing, _)| *missing)
                .map(|(_, name)| name)
                .collect();
            lines.push(format!(
                "Comparison not performed: no path for {}",
                missing.join(" and ")
            ));
        }
    }
    finish(lines)
}

fn finish(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
