//! JSON Event Sink
//!
//! Outputs store events as NDJSON, one object per line, for audit
//! trails and automation.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;

use crate::domain::ports::{StoreEvent, StoreEventSink};

/// Event sink that writes NDJSON events
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a JSON event sink writing to stderr
    pub fn stderr() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stderr())),
        }
    }

    /// Create a JSON event sink appending to a file
    pub fn append(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_writer(file))
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl StoreEventSink for JsonEventSink {
    fn on_event(&self, event: StoreEvent) {
        let mut json = match serde_json::to_value(&event) {
            Ok(json) => json,
            Err(err) => serde_json::json!({
                "event": "encode_error",
                "error": err.to_string(),
            }),
        };
        if let Some(object) = json.as_object_mut() {
            object.insert("at".to_string(), serde_json::json!(Utc::now().to_rfc3339()));
        }
        self.write_event(json);
    }
}
