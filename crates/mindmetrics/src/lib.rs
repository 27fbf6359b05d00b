//! Domain library for the MindMetrics self-assessment platform.
//!
//! The crate is organized around the assessment lifecycle: static question
//! banks, a pure scoring engine, threshold classification, and the attempt
//! service plus HTTP router that persist and gate results. Configuration,
//! telemetry, and the shared error type live at the crate root.

pub mod assessments;
pub mod config;
pub mod error;
pub mod telemetry;
