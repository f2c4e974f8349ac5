// src/handlers/mod.rs

pub mod interpretation;
