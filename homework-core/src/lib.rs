//! Homework Core
//!
//! Core types and rules for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework records and the review status table
//! - Validation: shape checks for the homework statuses API response
//! - Errors: the taxonomy for malformed responses and records

pub mod domain;
pub mod error;
pub mod validation;

pub use domain::homework::{Homework, HomeworkStatus, parse_status};
pub use error::{HomeworkError, Result};
pub use validation::check_response;
