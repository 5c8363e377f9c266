//! Domain models for the daily reading run.
//!
//! - [`Article`]: an unread Pocket item reduced to what selection and task
//!   formatting need. Fetched fresh every run and never mutated.
//! - [`PocketItem`]: the raw item record as Pocket serves it.
//! - [`NewTask`] / [`CreatedTask`]: the Todoist task payload and the echo the
//!   service returns after creating it.

mod article;
mod task;

pub use article::*;
pub use task::*;
