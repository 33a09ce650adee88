//! UAV planner CLI - presentation layer over `uav-core`.
//!
//! This crate provides the `uav-planner` binary:
//! - run: plan a single scenario and print its flight summary
//! - compare: run the flat and height-threshold reference scenarios side by side

pub mod config;
pub mod logging;
pub mod map;
pub mod report;

pub use config::Config;
pub use map::{parse_coordinate, MapSource};
pub use report::{format_comparison, format_report};
