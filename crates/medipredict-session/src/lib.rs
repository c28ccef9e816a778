//! medipredict-session
//!
//! The orchestration boundary a front-end drives: the dashboard/form/result
//! state machine, the single-flight submit handle, the result view model,
//! plus the on-disk configuration and tracing setup.

pub mod config;
pub mod error;
pub mod handle;
pub mod render;
pub mod state;
pub mod telemetry;
