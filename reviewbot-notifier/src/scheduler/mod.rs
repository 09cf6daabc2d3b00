//! Scheduler layer for the notifier
//!
//! Drives discrete poll invocations off a fixed-interval ticker and owns
//! the change-detection state between cycles.

pub mod poller;

pub use poller::StatusPoller;
