//! Tracing subscriber setup: console formatter and initialisation.
use std::io::IsTerminal as _;

use tracing_subscriber::filter::LevelFilter;

/// Target for messages describing what a dry run would have done.
pub const DRY_RUN_TARGET: &str = "kcfg::dry_run";

/// Extracts the `message` field from a [`tracing::Event`].
#[derive(Default)]
struct MessageExtractor {
    message: String,
}

impl tracing::field::Visit for MessageExtractor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        }
    }
}

/// A [`tracing_subscriber::fmt::FormatEvent`] that emits kcfg-style
/// console output, optionally coloured.
struct KcfgFormatter {
    color: bool,
}

impl KcfgFormatter {
    fn paint(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }
}

impl<S, N> tracing_subscriber::fmt::FormatEvent<S, N> for KcfgFormatter
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    N: for<'a> tracing_subscriber::fmt::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: tracing_subscriber::fmt::format::Writer<'_>,
        event: &tracing::Event<'_>,
    ) -> std::fmt::Result {
        let metadata = event.metadata();
        let level = *metadata.level();
        let target = metadata.target();

        let mut extractor = MessageExtractor::default();
        event.record(&mut extractor);
        let msg = &extractor.message;

        match level {
            tracing::Level::ERROR => writeln!(writer, "{} {msg}", self.paint("31", "ERROR")),
            tracing::Level::WARN => writeln!(writer, "{}  {msg}", self.paint("33", "WARN")),
            tracing::Level::INFO if target == DRY_RUN_TARGET => {
                writeln!(writer, "{} {msg}", self.paint("33", "[DRY RUN]"))
            }
            tracing::Level::INFO => writeln!(writer, "{msg}"),
            _ => writeln!(writer, "{}", self.paint("2", msg)),
        }
    }
}

/// Console verbosity for the given flags.
const fn console_level(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::ERROR
    } else if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    }
}

/// Initialise the global [`tracing`] subscriber.
///
/// Sets up a stderr subscriber that formats events in the kcfg output style.
/// `quiet` keeps only errors; `verbose` adds debug messages.
/// Must be called once at program startup, before any logging.
pub fn init_subscriber(verbose: bool, quiet: bool) {
    use tracing_subscriber::{
        Layer as _, fmt, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let console_layer = fmt::layer()
        .event_format(KcfgFormatter {
            color: std::io::stderr().is_terminal(),
        })
        .with_writer(std::io::stderr)
        .with_filter(console_level(verbose, quiet));

    tracing_subscriber::registry().with(console_layer).init();
}
