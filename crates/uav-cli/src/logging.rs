//! Tracing setup and scenario log events.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uav_core::ScenarioReport;

/// Directives applied on top of `RUST_LOG`. Scenario events are emitted from
/// this crate; engine events come from `uav_core`.
pub const DEFAULT_DIRECTIVES: [&str; 2] = ["uav_cli=info", "uav_core=info"];

/// `RUST_LOG` plus [`DEFAULT_DIRECTIVES`].
pub fn env_filter() -> Result<EnvFilter> {
    with_defaults(EnvFilter::from_default_env())
}

fn with_defaults(mut filter: EnvFilter) -> Result<EnvFilter> {
    for directive in DEFAULT_DIRECTIVES {
        filter = filter.add_directive(directive.parse()?);
    }
    Ok(filter)
}

/// Install the global subscriber. Logs go to stderr so stdout stays clean
/// for reports.
pub fn init_tracing(json: bool) -> Result<()> {
    let registry = tracing_subscriber::registry().with(env_filter()?);
    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

pub fn log_report(report: &ScenarioReport) {
    match report.outcome.metrics() {
        Some(metrics) => tracing::info!(
            scenario = %report.name,
            distance = metrics.distance,
            battery = metrics.battery_consumed,
            "route planned"
        ),
        None => tracing::warn!(scenario = %report.name, "no route between start and goal"),
    }
}
