//! Daily reading planner.
//!
//! Pulls the unread queue from Pocket, picks a random handful of articles that
//! fit a reading-time budget, and files each one as a Todoist task due today.

pub mod clients;
pub mod config;
pub mod models;
pub mod run;
pub mod selector;
