//! Console logging context for a single run.
//!
//! Lines look like `2024-03-01 09:15:02,118 : geolocation_plotter::cli :: DEBUG : started`.

use chrono::Local;
use std::fmt;
use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// Formats events as `timestamp : target :: LEVEL : message`
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let metadata = event.metadata();
        write!(
            writer,
            "{} : {} :: {} : ",
            Local::now().format(TIMESTAMP_FORMAT),
            metadata.target(),
            metadata.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Owns the console handler for the lifetime of a run
///
/// Events are only emitted while the context is alive; `close` detaches it.
pub struct LogContext {
    _guard: tracing::subscriber::DefaultGuard,
}

impl LogContext {
    /// Attach a console handler; `RUST_LOG` overrides `default_level`
    pub fn init(default_level: &str) -> Self {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        Self::with_writer(filter, std::io::stderr)
    }

    /// Attach a handler writing to `make_writer` instead of stderr
    pub fn with_writer<W>(filter: EnvFilter, make_writer: W) -> Self
    where
        W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(make_writer)
            .event_format(ConsoleFormat)
            .finish();

        Self {
            _guard: tracing::subscriber::set_default(subscriber),
        }
    }

    pub fn close(self) {
        drop(self);
    }
}
