use crate::presentation::components::{LogEntry, LogLevel};
use anyhow::{Context, Result};
use std::sync::OnceLock;
use std::sync::mpsc::{Receiver, Sender, channel};
use tracing_subscriber::Layer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const CAPTURED_TARGET: &str = "catalog_admin::";

static LOG_SENDER: OnceLock<Sender<LogEntry>> = OnceLock::new();

/// Installs the global subscriber. Must be called once, before the UI starts.
pub fn init_log_capture() -> Result<Receiver<LogEntry>> {
    let (tx, rx) = channel();
    LOG_SENDER
        .set(tx.clone())
        .map_err(|_| anyhow::anyhow!("log capture already initialized"))?;

    tracing_subscriber::registry()
        .with(level_filter())
        .with(CaptureLayer { sender: tx })
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()
        .context("Failed to install tracing subscriber")?;

    Ok(rx)
}

fn level_filter() -> LevelFilter {
    if cfg!(any(debug_assertions, feature = "verbose-logging")) {
        LevelFilter::TRACE
    } else {
        LevelFilter::DEBUG
    }
}

struct CaptureLayer {
    sender: Sender<LogEntry>,
}

impl<S> Layer<S> for CaptureLayer
where
    S: tracing::Subscriber,
{
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let metadata = event.metadata();
        if !metadata.target().starts_with(CAPTURED_TARGET) {
            return;
        }

        let mut visitor = LogVisitor {
            message: String::new(),
        };
        event.record(&mut visitor);

        if !visitor.message.is_empty() {
            let entry = LogEntry::new(LogLevel::from_tracing(metadata.level()), visitor.message);
            let _ = self.sender.send(entry);
        }
    }
}

struct LogVisitor {
    message: String,
}

impl tracing::field::Visit for LogVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}
