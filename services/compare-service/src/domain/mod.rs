pub mod attempt;

pub use attempt::{OutboundAttempt, RunFailure, RunReport};
