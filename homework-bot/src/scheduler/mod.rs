//! Scheduler layer for the bot
//!
//! This layer runs the poll cycle: fetch statuses for the current window,
//! validate them, turn the latest change into a message, deliver it, and
//! wait for the next cycle.

pub mod outcome;
pub mod poller;

pub use outcome::{CycleError, Outcome};
pub use poller::StatusPoller;
