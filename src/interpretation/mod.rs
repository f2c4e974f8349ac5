// src/interpretation/mod.rs

//! Result interpretation engine.
//!
//! Pure functions from an already-scored [`TestSession`](crate::models::session::TestSession)
//! snapshot to an [`InterpretationReport`](crate::models::report::InterpretationReport).
//! No I/O, no clock, no shared state.

pub mod answers;
pub mod aptitude;
pub mod assembler;
pub mod catalog;
pub mod category;
pub mod narrative;
pub mod percentage;
pub mod riasec;
pub mod thresholds;
pub mod zscore;

pub use assembler::{EngineSettings, ReportAssembler, assemble};
pub use percentage::percentage;
