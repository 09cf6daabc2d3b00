//! Reviewbot Core
//!
//! Core types and logic for the homework review notifier.
//!
//! This crate contains:
//! - Domain types: review statuses and their human-readable verdicts
//! - Response handling: shape validation and status extraction for the
//!   review API payload

pub mod domain;
pub mod response;
