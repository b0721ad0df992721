//! Core domain types
//!
//! Homework records as reported by the review API, and the fixed table of
//! review statuses with their human-readable verdicts.

pub mod homework;
