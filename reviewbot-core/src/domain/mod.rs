//! Core domain types
//!
//! This module contains the domain structures shared across the notifier:
//! the closed set of review outcomes and the notification texts built from
//! them.

pub mod homework;
