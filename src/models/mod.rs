// src/models/mod.rs

pub mod answer;
pub mod payload;
pub mod report;
pub mod session;
