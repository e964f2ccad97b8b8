//! Browser console sink for `tracing` events.
//!
//! The client has no stdout, so each formatted event is handed to the
//! matching `console.*` call instead.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Console method an event is written with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Log,
    Warn,
    Error,
}

impl Channel {
    fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Channel::Error,
            Level::WARN => Channel::Warn,
            _ => Channel::Log,
        }
    }
}

/// Buffers one formatted event and flushes it to the console on drop
pub struct ConsoleWriter {
    channel: Channel,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(channel: Channel) -> Self {
        Self {
            channel,
            buffer: Vec::new(),
        }
    }

    fn line(&self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buffer);
        let line = text.trim_end();
        (!line.is_empty()).then(|| line.to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = self.line() else {
            return;
        };
        match self.channel {
            Channel::Log => leptos::leptos_dom::logging::console_log(&line),
            Channel::Warn => leptos::leptos_dom::logging::console_warn(&line),
            Channel::Error => leptos::leptos_dom::logging::console_error(&line),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Channel::Log)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(Channel::for_level(meta.level()))
    }
}

/// Install the console subscriber. Debug events are kept so coerced
/// preferences show up in the devtools console.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub fn init() {
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .try_init();

    if let Err(err) = installed {
        leptos::logging::warn!("tracing subscriber not installed: {err}");
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_channel_follows_level() {
        assert_eq!(Channel::for_level(&Level::ERROR), Channel::Error);
        assert_eq!(Channel::for_level(&Level::WARN), Channel::Warn);
        assert_eq!(Channel::for_level(&Level::INFO), Channel::Log);
        assert_eq!(Channel::for_level(&Level::DEBUG), Channel::Log);
        assert_eq!(Channel::for_level(&Level::TRACE), Channel::Log);
    }

    #[test]
    fn test_writer_collects_one_line() {
        let mut writer = ConsoleWriter::new(Channel::Log);
        write!(writer, " DEBUG unrecognized locale").unwrap();
        writeln!(writer, " preference stored=fr").unwrap();

        assert_eq!(
            writer.line().as_deref(),
            Some(" DEBUG unrecognized locale preference stored=fr")
        );
    }

    #[test]
    fn test_empty_writer_emits_nothing() {
        let mut writer = ConsoleWriter::new(Channel::Warn);
        assert!(writer.line().is_none());

        writer.write_all(b"\n").unwrap();
        assert!(writer.line().is_none());
    }
}
