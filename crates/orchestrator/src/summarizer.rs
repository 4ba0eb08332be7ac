//! Best-effort natural-language summaries of log lines.
//!
//! The actual model sits behind [`Summarizer`]. [`LogAnalyst`] bounds what
//! gets sent and turns every failure into a fallback message, so callers
//! never see an error from this module.
#![forbid(unsafe_code)]

use async_trait::async_trait;
use itertools::Itertools;
use std::sync::Arc;
use telemetry::{LogEntry, LogLevel};
use tracing::warn;

pub const ANALYSIS_FALLBACK: &str = "Failed to analyze logs. Please check system health manually.";
pub const EXPLANATION_FALLBACK: &str = "Unable to provide AI insights at this moment.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("summarization unavailable: {reason}")]
pub struct SummarizationUnavailable {
    pub reason: String,
}

impl SummarizationUnavailable {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum SummaryRequest<'a> {
    /// Look for anomalies across several lines.
    Backlog(&'a [LogEntry]),
    /// Explain one line.
    Entry(&'a LogEntry),
}

impl SummaryRequest<'_> {
    /// Prompt text for a remote language model.
    pub fn prompt(&self) -> String {
        match self {
            SummaryRequest::Backlog(logs) => {
                let lines = logs
                    .iter()
                    .map(|l| {
                        format!(
                            "[{}] {}: {} - {}",
                            l.timestamp.to_rfc3339(),
                            l.level,
                            l.service,
                            l.message
                        )
                    })
                    .join("\n");
                format!(
                    "Analyze the following system logs for anomalies, performance bottlenecks, \
                     or critical errors. Provide a concise summary and suggested remediation \
                     steps.\n\nLogs:\n{lines}"
                )
            }
            SummaryRequest::Entry(log) => {
                let metadata = log
                    .metadata
                    .as_ref()
                    .map(|m| serde_json::Value::Object(m.clone()).to_string())
                    .unwrap_or_else(|| "{}".to_owned());
                format!(
                    "Explain this specific error log entry for a DevOps engineer. Tell me what \
                     likely caused it and how to troubleshoot it.\n\nLog Entry:\n[{}] Service: \
                     {}\nMessage: {}\nMetadata: {metadata}",
                    log.level, log.service, log.message
                )
            }
        }
    }
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Given log text, return prose or fail.
    async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String, SummarizationUnavailable>;
}

/// Stand-in for a missing remote model.
#[derive(Debug, Default)]
pub struct UnavailableSummarizer;

#[async_trait]
impl Summarizer for UnavailableSummarizer {
    async fn summarize(&self, _request: &SummaryRequest<'_>) -> Result<String, SummarizationUnavailable> {
        Err(SummarizationUnavailable::new("no summarizer configured"))
    }
}

/// Local digest: level counts, the noisiest service and the newest error.
#[derive(Debug, Default)]
pub struct DigestSummarizer;

#[async_trait]
impl Summarizer for DigestSummarizer {
    async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String, SummarizationUnavailable> {
        match request {
            SummaryRequest::Backlog([]) => Err(SummarizationUnavailable::new("no log lines to digest")),
            SummaryRequest::Backlog(logs) => Ok(digest(logs)),
            SummaryRequest::Entry(log) => Ok(format!(
                "{} reported by {} at {}: {}",
                log.level,
                log.service,
                log.timestamp.to_rfc3339(),
                log.message
            )),
        }
    }
}

fn digest(logs: &[LogEntry]) -> String {
    let counts = logs.iter().map(|l| l.level).counts();
    let per_level = LogLevel::ALL
        .iter()
        .map(|level| format!("{level}={}", counts.get(level).copied().unwrap_or(0)))
        .join(" ");
    let mut out = format!("{} lines: {per_level}", logs.len());

    let noisiest = logs
        .iter()
        .map(|l| l.service.as_str())
        .counts()
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)));
    if let Some((service, n)) = noisiest {
        out.push_str(&format!(". Most active: {service} ({n})"));
    }

    if let Some(error) = logs
        .iter()
        .filter(|l| l.level == LogLevel::Error)
        .max_by_key(|l| l.timestamp)
    {
        out.push_str(&format!(". Latest error: {} on {}", error.message, error.service));
    }
    out
}

/// Bounds requests and swallows summarizer failures.
#[derive(Clone)]
pub struct LogAnalyst {
    summarizer: Arc<dyn Summarizer>,
    max_logs: usize,
}

impl LogAnalyst {
    pub fn new(summarizer: Arc<dyn Summarizer>, config: &config::Summarizer) -> Self {
        Self {
            summarizer,
            max_logs: config.max_logs,
        }
    }

    /// Summarize at most `max_logs` of `logs`, taken from the front.
    pub async fn analyze(&self, logs: &[LogEntry]) -> String {
        let bounded = &logs[..logs.len().min(self.max_logs)];
        match self
            .summarizer
            .summarize(&SummaryRequest::Backlog(bounded))
            .await
        {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, lines = bounded.len(), "log analysis failed");
                ANALYSIS_FALLBACK.to_owned()
            }
        }
    }

    pub async fn explain(&self, entry: &LogEntry) -> String {
        match self.summarizer.summarize(&SummaryRequest::Entry(entry)).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, log = %entry.id, "log explanation failed");
                EXPLANATION_FALLBACK.to_owned()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use parking_lot::Mutex;
    use telemetry::LogId;

    fn log(n: u8, level: LogLevel, service: &str, message: &str) -> LogEntry {
        LogEntry {
            id: LogId::from_random_bytes([n; 16]),
            timestamp: Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, u32::from(n)).unwrap(),
            level,
            service: service.into(),
            message: message.into(),
            metadata: None,
        }
    }

    /// Records how many lines each backlog request carried.
    #[derive(Default)]
    struct Recording(Mutex<Vec<usize>>);

    #[async_trait]
    impl Summarizer for Recording {
        async fn summarize(&self, request: &SummaryRequest<'_>) -> Result<String, SummarizationUnavailable> {
            if let SummaryRequest::Backlog(logs) = request {
                self.0.lock().push(logs.len());
            }
            Ok("ok".into())
        }
    }

    #[tokio::test]
    async fn failures_become_fallback_text() {
        let analyst = LogAnalyst::new(Arc::new(UnavailableSummarizer), &config::Summarizer::default());
        let entry = log(1, LogLevel::Error, "auth-service", "boom");

        assert_eq!(analyst.analyze(&[entry.clone()]).await, ANALYSIS_FALLBACK);
        assert_eq!(analyst.explain(&entry).await, EXPLANATION_FALLBACK);
    }

    #[tokio::test]
    async fn backlog_is_bounded() {
        let recording = Arc::new(Recording::default());
        let analyst = LogAnalyst::new(recording.clone(), &config::Summarizer { max_logs: 20 });
        let logs: Vec<_> = (0..45).map(|n| log(n, LogLevel::Info, "a", "m")).collect();

        analyst.analyze(&logs).await;
        analyst.analyze(&logs[..3]).await;
        assert_eq!(*recording.0.lock(), [20, 3]);
    }

    #[tokio::test]
    async fn digest_counts_levels_and_finds_latest_error() {
        let logs = [
            log(5, LogLevel::Error, "payment-gateway", "Deadlock detected in transaction pool"),
            log(4, LogLevel::Info, "auth-service", "User login successful"),
            log(3, LogLevel::Error, "auth-service", "Failed to parse JSON payload"),
            log(2, LogLevel::Warn, "auth-service", "Response time higher than average"),
        ];
        let text = DigestSummarizer
            .summarize(&SummaryRequest::Backlog(&logs))
            .await
            .unwrap();

        assert!(text.starts_with("4 lines: INFO=1 WARN=1 ERROR=2 DEBUG=0"), "{text}");
        assert!(text.contains("Most active: auth-service (3)"), "{text}");
        assert!(text.contains("Latest error: Deadlock detected in transaction pool on payment-gateway"), "{text}");
    }

    #[tokio::test]
    async fn digest_without_errors_is_exact() {
        let logs = [log(1, LogLevel::Debug, "search-index-worker", "Cache hit for key: user_123")];
        let text = DigestSummarizer
            .summarize(&SummaryRequest::Backlog(&logs))
            .await
            .unwrap();

        assert_eq!(
            text,
            "1 lines: INFO=0 WARN=0 ERROR=0 DEBUG=1. Most active: search-index-worker (1)"
        );
    }

    #[test]
    fn prompts_carry_log_fields() {
        let entry = log(7, LogLevel::Warn, "order-processor", "Slow query detected in payments DB");
        let prompt = SummaryRequest::Entry(&entry).prompt();
        assert!(prompt.contains("[WARN] Service: order-processor"));
        assert!(prompt.contains("Metadata: {}"));

        let logs = [entry];
        let prompt = SummaryRequest::Backlog(&logs).prompt();
        assert!(prompt.contains("WARN: order-processor - Slow query detected in payments DB"));
    }
}
