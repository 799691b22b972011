//! labcoach-core — Experiment catalog, prompts, and feedback parsing.
//!
//! This crate defines the fundamental data model, traits, and feedback
//! pipeline that the rest of labcoach builds on.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod traits;
