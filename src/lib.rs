// src/lib.rs

pub mod config;
pub mod error;
pub mod handlers;
pub mod interpretation;
pub mod models;
pub mod routes;
pub mod state;

// Re-export specific items for convenience
pub use interpretation::{EngineSettings, ReportAssembler, assemble};
pub use models::report::InterpretationReport;
pub use routes::create_router;
