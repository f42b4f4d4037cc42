//! MindBot core: emotion scoring, supportive replies, wellness activities and
//! mood tracking for a local chat companion.

pub mod brain;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod fs_manager;
pub mod models;
pub mod mood;
pub mod session;
pub mod telemetry;
pub mod wellness;

#[cfg(test)]
mod tests;
