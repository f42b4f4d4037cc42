//! Test Module
//!
//! Test suite for the MindBot core.
//!
//! ## Test Categories
//! - `brain_tests`: Crisis detection, emotion scoring, reply generation
//! - `wellness_tests`: Activity recommendations and launching
//! - `database_tests`: Persistence of chat and mood histories
//! - `session_tests`: Full chat session workflows

pub mod brain_tests;
pub mod database_tests;
