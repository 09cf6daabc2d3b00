//! Service layer
//!
//! Trait seams between the scheduler and the outside world: where review
//! status payloads come from and where notifications go. Both sides are
//! trait-based to enable testing and dependency injection.

mod sink;
mod source;

// Re-export traits
pub use sink::MessageSink;
pub use source::StatusSource;

// Re-export implementations
pub use sink::TelegramSink;
