//! Diagnostic sinks.
//!
//! A [`Conf`](crate::Conf) reports add/remove/cap events as human-readable
//! trace lines to an attached sink. The sink is write-only and never
//! affects control flow; the default is [`NoopSink`].

/// Receiver for configuration trace lines.
pub trait DiagnosticSink {
    /// Records a routine event (item added or removed).
    fn record(&mut self, line: &str);

    /// Records a warning (e.g. an option value was capped).
    ///
    /// Defaults to [`record`](Self::record).
    fn warn(&mut self, line: &str) {
        self.record(line);
    }
}

/// A sink that discards everything. The default for a new configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl DiagnosticSink for NoopSink {
    fn record(&mut self, _line: &str) {}
}

/// A sink that forwards trace lines to the `tracing` ecosystem.
///
/// Routine events are emitted at `DEBUG`, cap warnings at `WARN`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn record(&mut self, line: &str) {
        tracing::debug!(target: "resolvconf", "{line}");
    }

    fn warn(&mut self, line: &str) {
        tracing::warn!(target: "resolvconf", "{line}");
    }
}
