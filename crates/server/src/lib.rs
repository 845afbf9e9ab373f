//! Server crate for the mood-to-playlist engine.
//!
//! This crate contains the orchestrator that runs a journal entry through
//! classification and recommendation resolution, and the output payload
//! type that forms the engine's compatibility contract.

pub mod orchestrator;

pub use orchestrator::{MoodOrchestrator, RecommendationPayload};
