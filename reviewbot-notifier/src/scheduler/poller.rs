//! Status poller
//!
//! Polls the review API on a fixed interval, compares the extracted report
//! against the last one sent, and notifies the chat only on change. Cycle
//! failures are reported to the chat best-effort and never stop the loop.

use chrono::Utc;
use serde_json::Value;
use tokio::time;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::error::NotifierError;
use crate::service::{MessageSink, StatusSource};
use reviewbot_core::domain::homework::NO_CHANGES_REPORT;
use reviewbot_core::response::{check_response, parse_status};

/// Outcome of one successful poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A status change was reported to the chat
    Sent,

    /// The extracted report matched the last one sent
    Unchanged,

    /// The fetch window contained no homework updates
    NoChanges,
}

/// Status poller with fixed-interval change detection
///
/// The fetch window's lower bound is fixed at construction and never
/// advances between cycles; each cycle re-fetches from the same origin
/// timestamp and relies on report equality for deduplication.
pub struct StatusPoller<S, N> {
    config: Config,
    source: S,
    sink: N,
    from_date: i64,
    last_report: Option<String>,
}

impl<S: StatusSource, N: MessageSink> StatusPoller<S, N> {
    /// Creates a new status poller
    ///
    /// # Arguments
    /// * `from_date` - Fixed lower bound of every fetch window, in epoch
    ///   seconds; zero defers to the current time at each fetch
    pub fn new(config: Config, source: S, sink: N, from_date: i64) -> Self {
        Self {
            config,
            source,
            sink,
            from_date,
            last_report: None,
        }
    }

    /// Starts the polling loop
    ///
    /// Runs until the surrounding task is cancelled. The interval ticker
    /// paces every cycle, failed ones included.
    pub async fn run(&mut self) {
        info!(
            "Starting status poller (interval: {:?})",
            self.config.poll_interval
        );

        let mut interval = time::interval(self.config.poll_interval);

        loop {
            interval.tick().await;

            debug!("Polling for review status updates");

            match self.poll_once().await {
                Ok(CycleOutcome::Sent) => info!("Status change reported"),
                Ok(CycleOutcome::Unchanged) => info!("Review status unchanged"),
                Ok(CycleOutcome::NoChanges) => debug!("{}", NO_CHANGES_REPORT),
                Err(e) => self.report_failure(e).await,
            }
        }
    }

    /// Performs a single poll cycle
    async fn poll_once(&mut self) -> Result<CycleOutcome, NotifierError> {
        let from_date = if self.from_date > 0 {
            self.from_date
        } else {
            Utc::now().timestamp()
        };

        let response = self.source.homework_statuses(from_date).await?;

        self.handle_response(&response).await
    }

    /// Validates a response, extracts the newest report, and notifies on change
    async fn handle_response(&mut self, response: &Value) -> Result<CycleOutcome, NotifierError> {
        let homeworks = check_response(response)?;

        let Some(newest) = homeworks.first() else {
            return Ok(CycleOutcome::NoChanges);
        };

        let report = parse_status(newest)?;

        if self.last_report.as_deref() == Some(report.as_str()) {
            return Ok(CycleOutcome::Unchanged);
        }

        self.sink
            .send(&report)
            .await
            .map_err(NotifierError::NotifySend)?;

        // Recorded only after a successful send, so a failed delivery is
        // retried on the next cycle.
        self.last_report = Some(report);
        Ok(CycleOutcome::Sent)
    }

    /// Logs a cycle failure by kind and reports it to the chat best-effort
    async fn report_failure(&self, err: NotifierError) {
        match &err {
            NotifierError::Transport(e) => error!("Review API unreachable: {}", e),
            NotifierError::Protocol(message) => {
                error!("Review API contract violation: {}", message)
            }
            NotifierError::NotifySend(e) => error!("Failed to deliver notification: {}", e),
            NotifierError::Configuration(message) => error!("Configuration error: {}", message),
        }

        let report = format!("Notifier failure: {err}");
        if let Err(send_err) = self.sink.send(&report).await {
            warn!("Failed to report the failure to the chat: {}", send_err);
        }
    }
}
