//! Service layer
//!
//! The poller reaches the outside world through two seams: a source of
//! homework status responses and a notifier that delivers chat messages.
//!
//! Both are trait-based so the poll cycle can be tested with in-memory fakes.

mod notifier;
mod source;

pub use notifier::Notifier;
pub use source::HomeworkSource;
