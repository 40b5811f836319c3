// src/services/mod.rs
pub mod gemini;
pub mod provider;
pub mod relay;
