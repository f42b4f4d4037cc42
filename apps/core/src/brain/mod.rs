//! # Brain Module
//!
//! Fast, keyword-based analysis of what the user wrote.
//! Runs before anything is shown or stored, and never fails.
//!
//! ## Components
//! - `crisis`: High-risk phrase detection (short-circuits everything else)
//! - `emotion`: Whole-word trigger scoring into an emotion distribution
//! - `responses`: Templated supportive replies
//! - `reply_packet`: Output data structure
//! - `analyzer`: Main orchestrator

pub mod analyzer;
pub mod crisis;
pub mod emotion;
pub mod reply_packet;
pub mod responses;

pub use analyzer::BrainAnalyzer;
pub use crisis::{crisis_response, detect_crisis, CrisisDetector};
pub use emotion::{Emotion, EmotionAnalyzer, EmotionResult, EmotionScores};
pub use reply_packet::ReplyPacket;
pub use responses::{generate_response, ResponseBand};
