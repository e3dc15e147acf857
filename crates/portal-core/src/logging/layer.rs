//! Tracing layer that mirrors events into a session JSONL file, and the
//! builder that installs the global subscriber.

use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

use super::entry::JsonLogEntry;
use super::writer::SessionLogWriter;
use crate::error::{PortalError, PortalResult};

/// Filter used when neither `RUST_LOG` nor an explicit filter is given
pub const DEFAULT_FILTER: &str = "cosplayer_portal=info,portal_core=info";

/// A tracing Layer that writes events to a JSONL file.
pub struct JsonlLayer {
    writer: Arc<SessionLogWriter>,
}

impl JsonlLayer {
    pub fn new(logs_dir: impl AsRef<Path>, session: impl Into<String>) -> std::io::Result<Self> {
        let writer = SessionLogWriter::new(logs_dir, session)?;
        Ok(Self {
            writer: Arc::new(writer),
        })
    }

    pub fn log_path(&self) -> &Path {
        self.writer.path()
    }

    pub fn session(&self) -> &str {
        self.writer.session()
    }
}

impl<S> Layer<S> for JsonlLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = metadata.level().as_str().to_lowercase();

        let mut visitor = JsonVisitor::default();
        event.record(&mut visitor);

        let mut entry = JsonLogEntry::new(
            level,
            self.writer.session(),
            metadata.target(),
            visitor.message.unwrap_or_default(),
        );

        if !visitor.fields.is_empty() {
            entry = entry.with_fields(serde_json::Value::Object(visitor.fields));
        }

        if let Some(scope) = ctx.event_scope(event) {
            let spans: Vec<&str> = scope.from_root().map(|span| span.name()).collect();
            if !spans.is_empty() {
                entry = entry.with_span(spans.join(" > "));
            }
        }

        // Logging must never take the app down
        let _ = self.writer.write(&entry);
    }
}

/// Collects the message and fields of one event.
#[derive(Default)]
struct JsonVisitor {
    message: Option<String>,
    fields: serde_json::Map<String, serde_json::Value>,
}

impl JsonVisitor {
    fn insert(&mut self, field: &Field, value: serde_json::Value) {
        self.fields.insert(field.name().to_string(), value);
    }
}

impl Visit for JsonVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let mut buf = String::new();
        let _ = write!(&mut buf, "{:?}", value);

        if field.name() == "message" {
            self.message = Some(buf);
        } else {
            self.insert(field, serde_json::Value::String(buf));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_string());
        } else {
            self.insert(field, serde_json::Value::String(value.to_string()));
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.insert(field, value.into());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        self.insert(field, value.into());
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        self.insert(field, value.into());
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        if let Some(n) = serde_json::Number::from_f64(value) {
            self.insert(field, serde_json::Value::Number(n));
        }
    }
}

/// Builder for the global tracing subscriber.
pub struct LoggingBuilder {
    logs_dir: PathBuf,
    session: String,
    jsonl_output: bool,
    env_filter: Option<String>,
}

impl LoggingBuilder {
    /// New builder writing into `logs_dir` under a random session name.
    pub fn new(logs_dir: impl Into<PathBuf>) -> Self {
        Self {
            logs_dir: logs_dir.into(),
            session: format!("{:06x}", rand::random::<u32>() & 0x00ff_ffff),
            jsonl_output: false,
            env_filter: None,
        }
    }

    pub fn with_session(mut self, session: impl Into<String>) -> Self {
        self.session = session.into();
        self
    }

    pub fn jsonl(mut self, enabled: bool) -> Self {
        self.jsonl_output = enabled;
        self
    }

    /// Filter used when `RUST_LOG` is unset (e.g., "cosplayer_portal=debug").
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Directives in force: `RUST_LOG`, then the configured filter, then [`DEFAULT_FILTER`].
    pub fn filter_directives(&self) -> String {
        resolve_filter(std::env::var("RUST_LOG").ok(), self.env_filter.as_deref())
    }

    /// Build the JSONL layer on its own (for manual composition).
    pub fn build_layer(&self) -> std::io::Result<JsonlLayer> {
        JsonlLayer::new(&self.logs_dir, &self.session)
    }

    /// Install the global subscriber. Returns the JSONL path when enabled.
    pub fn init(self) -> PortalResult<Option<PathBuf>> {
        let filter = EnvFilter::try_new(self.filter_directives())
            .map_err(|e| PortalError::Logging(format!("bad log filter: {}", e)))?;

        let jsonl = if self.jsonl_output {
            Some(self.build_layer()?)
        } else {
            None
        };
        let path = jsonl.as_ref().map(|layer| layer.log_path().to_path_buf());
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .with(jsonl)
            .try_init()
            .map_err(|e| PortalError::Logging(e.to_string()))?;

        Ok(path)
    }
}

fn resolve_filter(env: Option<String>, configured: Option<&str>) -> String {
    env.filter(|directives| !directives.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| DEFAULT_FILTER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::read_entries;
    use tempfile::TempDir;

    #[test]
    fn test_filter_precedence() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
        assert_eq!(
            resolve_filter(None, Some("portal_core=debug")),
            "portal_core=debug"
        );
        assert_eq!(
            resolve_filter(Some("warn".to_string()), Some("portal_core=debug")),
            "warn"
        );
        assert_eq!(resolve_filter(Some("  ".to_string()), None), DEFAULT_FILTER);
    }

    #[test]
    fn test_jsonl_layer_captures_events() {
        let temp = TempDir::new().unwrap();
        let layer = LoggingBuilder::new(temp.path().join("logs"))
            .with_session("test")
            .build_layer()
            .unwrap();
        let log_path = layer.log_path().to_path_buf();

        let subscriber = tracing_subscriber::registry().with(layer);
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("Door opening");
            let span = tracing::info_span!("home");
            let _guard = span.enter();
            tracing::warn!(count = 30, dark = true, "Particles");
        });

        let entries = read_entries(&log_path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].msg, "Door opening");
        assert_eq!(entries[0].level, "info");
        assert_eq!(entries[0].session, "test");

        let fields = entries[1].fields.as_ref().unwrap();
        assert_eq!(fields["count"], 30);
        assert_eq!(fields["dark"], true);
        assert_eq!(entries[1].span.as_deref(), Some("home"));
    }
}
