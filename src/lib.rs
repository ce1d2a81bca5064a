//! repforge - Personal workout planner and training session tracker
//!
//! A questionnaire becomes a weekly plan drawn from a fixed exercise catalog;
//! live sessions run against one plan day at a time and completed sessions
//! drive a simple day rotation.

pub mod catalog;
pub mod db;
pub mod error;
pub mod plan;
pub mod progression;
pub mod questionnaire;
pub mod session;
pub mod tui;

pub use db::Database;
