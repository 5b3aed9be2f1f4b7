//! Application layer for Clarity.
//!
//! This crate provides use case implementations that coordinate the analysis
//! service with the session state held in the domain layer.

pub mod analyze_usecase;

pub use analyze_usecase::AnalyzeUseCase;
