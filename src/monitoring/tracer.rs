/*!
 * Structured Tracing
 * Subscriber setup plus timed spans for file-system and facade operations
 *
 * Features:
 * - Trace ID per operation for log correlation
 * - JSON-formatted logs for structured parsing
 * - Slow-operation warnings against a configurable threshold
 */

use std::time::{Duration, Instant};
use tokio::time::Instant as ClockInstant;
use tracing::{debug, info, span, warn, Level};
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

use crate::core::limits::{ENV_TRACE_JSON, SLOW_FS_OPERATION_THRESHOLD};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - DESKTOP_SIM_TRACE_JSON: Enable JSON output (default: false)
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_line_number(true)
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_writer(std::io::stderr),
            )
            .init();
        info!("Structured tracing initialized with JSON output");
    } else {
        // Logs go to stderr so the shell session on stdout stays readable
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_span_events(FmtSpan::NONE)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
        info!("Structured tracing initialized");
    }
}

/// Generate a unique trace ID for log correlation
pub fn generate_trace_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span around one simulated file-system call
///
/// Timed on the tokio clock so paused-time tests see simulated durations.
pub struct FsOpSpan {
    span: tracing::Span,
    start: ClockInstant,
    operation: &'static str,
    trace_id: String,
    slow_threshold: Duration,
}

impl FsOpSpan {
    pub fn new(operation: &'static str, path: &str) -> Self {
        let trace_id = generate_trace_id();

        let span = span!(
            Level::DEBUG,
            "fs_op",
            trace_id = %trace_id,
            operation = operation,
            path = path,
            duration_ms = tracing::field::Empty,
            result = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        span.in_scope(|| debug!(operation, path, "fs operation started"));

        Self {
            span,
            start: ClockInstant::now(),
            operation,
            trace_id,
            slow_threshold: SLOW_FS_OPERATION_THRESHOLD,
        }
    }

    /// Override the slow-call threshold (latency-free configs use a tighter one)
    pub fn with_slow_threshold(mut self, threshold: Duration) -> Self {
        self.slow_threshold = threshold;
        self
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// Record the outcome of the call
    pub fn record_outcome<T, E: std::fmt::Display>(&self, outcome: &Result<T, E>) {
        match outcome {
            Ok(_) => {
                self.span.record("result", "success");
            }
            Err(e) => {
                self.span.record("result", "error");
                self.span.record("error", e.to_string().as_str());
            }
        }
    }
}

impl Drop for FsOpSpan {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        self.span.record("duration_ms", duration.as_millis() as u64);
        let _entered = self.span.enter();

        if duration > self.slow_threshold {
            warn!(
                trace_id = %self.trace_id,
                operation = self.operation,
                duration_ms = duration.as_millis() as u64,
                slow = true,
                "slow fs operation detected"
            );
        } else {
            debug!(
                trace_id = %self.trace_id,
                operation = self.operation,
                duration_us = duration.as_micros() as u64,
                "fs operation completed"
            );
        }
    }
}

/// Span around a facade-level operation (lifecycle, clipboard, shell)
pub struct OperationSpan {
    span: tracing::Span,
    start: Instant,
    trace_id: String,
}

impl OperationSpan {
    pub fn new(operation: &str) -> Self {
        let trace_id = generate_trace_id();
        let span = span!(
            Level::DEBUG,
            "operation",
            trace_id = %trace_id,
            operation = operation,
            result = tracing::field::Empty,
        );
        span.in_scope(|| debug!(operation, "operation started"));

        Self {
            span,
            start: Instant::now(),
            trace_id,
        }
    }

    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    pub fn record_result(&self, success: bool) {
        self.span
            .record("result", if success { "success" } else { "error" });
    }

    /// Enter the span context
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }
}

impl Drop for OperationSpan {
    fn drop(&mut self) {
        let _entered = self.span.enter();
        debug!(
            trace_id = %self.trace_id,
            duration_us = self.start.elapsed().as_micros() as u64,
            "operation completed"
        );
    }
}

/// Helper to create a file-system span
#[inline]
pub fn span_fs(operation: &'static str, path: &str) -> FsOpSpan {
    FsOpSpan::new(operation, path)
}

/// Helper to create an operation span
#[inline]
pub fn span_operation(name: &str) -> OperationSpan {
    OperationSpan::new(name)
}
