//! The logger engine: message formatting, line splitting, decorated emission.
//!
//! A [`Logger`] renders a message into a retained buffer, splits it on
//! newlines, prepends the configured prefix fields to each fragment, and
//! writes the result to a file sink (uncolored) and a console sink (colored
//! when enabled).
//! All mutable state sits behind a single mutex, so one `log` call is atomic
//! relative to every other call on the same logger: lines from concurrent
//! threads never interleave mid-line.
//!
//! Prefix decoration is suppressed while the previous emission did not end in
//! a newline or carriage return, which keeps logically continuous lines built
//! across several calls (progress bars rewriting themselves with `\r`,
//! piecemeal status lines) free of repeated headers and timestamps.

use crate::term;
use chrono::Local;
use colored::Color;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::fmt::{self, Write as _};
use std::io::{self, Write};
use std::sync::Arc;
use vellum_types::{default_fields, default_levels, Field, LevelSpec};

/// A shared, non-owning handle to an output sink.
///
/// The logger writes through the handle but never closes it; the underlying
/// writer lives as long as some clone of the `Arc` does, so its lifetime is
/// the caller's to manage. Handing the same handle to several loggers is
/// allowed; writes then serialize at the sink's own mutex, at line
/// granularity.
pub type SharedSink = Arc<Mutex<dyn Write + Send>>;

/// Wrap a writer into a [`SharedSink`] handle.
pub fn sink<W: Write + Send + 'static>(writer: W) -> SharedSink {
    Arc::new(Mutex::new(writer))
}

/// Floor for the retained format buffer; growth beyond it is geometric.
const MIN_BUFFER_CAPACITY: usize = 256;

/// Column width the location field is padded to.
const LOCATION_WIDTH: usize = 16;

/// A leveled multi-sink logger with optional color.
///
/// Created with a header, a minimum level, and a separator character.
/// Everything else (prefix layout, level taxonomy, colors, sinks) can be
/// reconfigured at any time between (or during, from other threads) log
/// calls. Setters return `&Self` for chaining.
///
/// # Example
///
/// ```
/// use vellum_core::{Logger, vinfo};
/// use vellum_types::INFO;
///
/// let logger = Logger::new("app", INFO, '|');
/// logger.toggle_color(false);
/// vinfo!(logger, "listening on port {}", 8080);
/// logger.log(INFO, format_args!("plain call, no location\n"));
/// ```
pub struct Logger {
    inner: Mutex<Inner>,
}

struct Inner {
    console: Option<SharedSink>,
    file: Option<SharedSink>,
    header: String,
    min_level: u32,
    last_log_ended_with_newline: bool,
    color_enabled: bool,
    fields: Vec<Field>,
    separator: char,
    buffer: String,
    levels: BTreeMap<u32, LevelSpec>,
    max_name_len: usize,
}

impl Logger {
    /// Create a logger with the default prefix layout
    /// (header, level, time, location).
    ///
    /// The console sink starts as standard output, the file sink absent, the
    /// level taxonomy as the conventional five-level seed, and color enabled.
    pub fn new(header: impl Into<String>, min_level: u32, separator: char) -> Self {
        Self::with_fields(header, min_level, separator, default_fields())
    }

    /// Create a logger with an explicit prefix layout.
    pub fn with_fields(
        header: impl Into<String>,
        min_level: u32,
        separator: char,
        fields: Vec<Field>,
    ) -> Self {
        let mut levels = BTreeMap::new();
        for (level, spec) in default_levels() {
            levels.insert(*level, spec.clone());
        }
        let max_name_len = max_name_len(&levels);
        Self {
            inner: Mutex::new(Inner {
                console: Some(sink(io::stdout())),
                file: None,
                header: header.into(),
                min_level,
                last_log_ended_with_newline: true,
                color_enabled: true,
                fields,
                separator,
                buffer: String::new(),
                levels,
                max_name_len,
            }),
        }
    }

    /// The current header text.
    pub fn header(&self) -> String {
        self.inner.lock().header.clone()
    }

    /// The current minimum level threshold.
    pub fn log_level(&self) -> u32 {
        self.inner.lock().min_level
    }

    /// Replace the header text.
    pub fn set_header(&self, header: impl Into<String>) -> &Self {
        self.inner.lock().header = header.into();
        self
    }

    /// Replace the minimum level threshold. Messages below it are dropped.
    pub fn set_log_level(&self, min_level: u32) -> &Self {
        self.inner.lock().min_level = min_level;
        self
    }

    /// Replace the separator character rendered between prefix fields.
    pub fn set_separator(&self, separator: char) -> &Self {
        self.inner.lock().separator = separator;
        self
    }

    /// Replace the prefix layout. Order is display order; duplicates and
    /// omissions are legal, and an empty list yields bare message lines.
    pub fn configure(&self, fields: Vec<Field>) -> &Self {
        self.inner.lock().fields = fields;
        self
    }

    /// Enable or disable colored console output.
    pub fn toggle_color(&self, enable: bool) -> &Self {
        self.inner.lock().color_enabled = enable;
        self
    }

    /// Register a level or overwrite an existing one.
    ///
    /// The cached maximum name length is recomputed over the whole taxonomy
    /// so the level column stays aligned even when an update shrinks a name.
    pub fn add_or_update_log_level(
        &self,
        level: u32,
        name: impl Into<String>,
        fg: Option<Color>,
        bg: Option<Color>,
    ) -> &Self {
        let mut inner = self.inner.lock();
        inner.levels.insert(level, LevelSpec::new(name, fg, bg));
        inner.max_name_len = max_name_len(&inner.levels);
        self
    }

    /// Update the colors of a registered level; no-op if unregistered.
    pub fn set_color(&self, level: u32, fg: Option<Color>, bg: Option<Color>) -> &Self {
        let mut inner = self.inner.lock();
        if let Some(spec) = inner.levels.get_mut(&level) {
            spec.fg = fg;
            spec.bg = bg;
        }
        self
    }

    /// Remove every registered level.
    ///
    /// Until levels are registered again, every `log` call is a no-op; this
    /// is the escape hatch for consumers replacing the default taxonomy
    /// wholesale (e.g. with the eight syslog severities).
    pub fn clear_log_levels(&self) {
        let mut inner = self.inner.lock();
        inner.levels.clear();
        inner.max_name_len = 0;
    }

    /// Reinstate the conventional five-level seed.
    pub fn reset_log_levels(&self) -> &Self {
        let mut inner = self.inner.lock();
        inner.levels.clear();
        for (level, spec) in default_levels() {
            inner.levels.insert(*level, spec.clone());
        }
        inner.max_name_len = max_name_len(&inner.levels);
        self
    }

    /// Attach or detach the file sink. File output is never colored.
    pub fn set_file_handler(&self, file: Option<SharedSink>) -> &Self {
        self.inner.lock().file = file;
        self
    }

    /// Replace or detach the console sink (standard output by default).
    pub fn set_output_stream(&self, console: Option<SharedSink>) -> &Self {
        self.inner.lock().console = console;
        self
    }

    /// Log a message without location information.
    ///
    /// Use the [`vlog!`](crate::vlog) macro family to capture the call site
    /// automatically; this entry point is for callers that have none.
    pub fn log(&self, level: u32, args: fmt::Arguments) {
        self.log_with_location(level, "", args);
    }

    /// Log a message with an explicit source file and line.
    ///
    /// Only the basename of `file` is kept, so build-machine absolute paths
    /// never leak into the output.
    pub fn log_at(&self, level: u32, file: &str, line: u32, args: fmt::Arguments) {
        let location = assemble_location(file, line);
        self.log_with_location(level, &location, args);
    }

    fn log_with_location(&self, level: u32, location: &str, args: fmt::Arguments) {
        let mut inner = self.inner.lock();
        // Emit only when the level is registered AND at or above the
        // threshold; either miss drops the message silently.
        let spec = match inner.levels.get(&level) {
            Some(spec) if level >= inner.min_level => spec.clone(),
            _ => return,
        };
        inner.format_message(args);
        inner.write_log(&spec, location);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("Logger")
            .field("header", &inner.header)
            .field("min_level", &inner.min_level)
            .field("separator", &inner.separator)
            .field("color_enabled", &inner.color_enabled)
            .field("fields", &inner.fields)
            .field("levels", &inner.levels)
            .field(
                "last_log_ended_with_newline",
                &inner.last_log_ended_with_newline,
            )
            .field("console", &inner.console.is_some())
            .field("file", &inner.file.is_some())
            .finish()
    }
}

impl Inner {
    /// Render the message into the retained buffer.
    ///
    /// The buffer is reused across calls, so a warmed logger allocates
    /// nothing here. A failing `Display` impl clears the buffer instead of
    /// propagating: a malformed message must never abort logging.
    fn format_message(&mut self, args: fmt::Arguments) {
        self.buffer.clear();
        if self.buffer.capacity() < MIN_BUFFER_CAPACITY {
            self.buffer.reserve(MIN_BUFFER_CAPACITY);
        }
        if self.buffer.write_fmt(args).is_err() {
            self.buffer.clear();
        }
    }

    /// Split the rendered buffer on newlines and emit each fragment.
    ///
    /// Fragments keep their trailing `\n` so the ends-with-newline tracking
    /// sees it; a trailing piece without a newline is emitted last, as is.
    fn write_log(&mut self, spec: &LevelSpec, location: &str) {
        let buffer = std::mem::take(&mut self.buffer);
        let mut start = 0;
        while let Some(pos) = buffer[start..].find('\n') {
            let end = start + pos + 1;
            self.write_log_line(spec, location, &buffer[start..end]);
            start = end;
        }
        if start < buffer.len() {
            self.write_log_line(spec, location, &buffer[start..]);
        }
        // Hand the allocation back for the next call.
        self.buffer = buffer;
    }

    /// Emit one line fragment: optional decorated prefix, verbatim content,
    /// then the sink writes.
    fn write_log_line(&mut self, spec: &LevelSpec, location: &str, line: &str) {
        if line.is_empty() {
            return;
        }

        let mut out = String::new();

        // Decorate only if the previous emission completed its line;
        // otherwise this fragment continues it and gets no prefix.
        if self.last_log_ended_with_newline {
            for field in &self.fields {
                match field {
                    Field::Header if !self.header.is_empty() => {
                        let _ = write!(out, "{} {} ", self.header, self.separator);
                    }
                    Field::Level => {
                        let _ = write!(
                            out,
                            "{:<width$} {} ",
                            spec.name,
                            self.separator,
                            width = self.max_name_len
                        );
                    }
                    Field::Date => {
                        let _ = write!(
                            out,
                            "{} {} ",
                            Local::now().format("%d/%m/%y"),
                            self.separator
                        );
                    }
                    Field::Time => {
                        let _ = write!(out, "{} {} ", Local::now().format("%H:%M"), self.separator);
                    }
                    Field::Location if !location.is_empty() => {
                        let _ = write!(
                            out,
                            "{:<width$} {} ",
                            location,
                            self.separator,
                            width = LOCATION_WIDTH
                        );
                    }
                    _ => {}
                }
            }
        }

        out.push_str(line);
        self.last_log_ended_with_newline = matches!(line.as_bytes().last(), Some(b'\n' | b'\r'));

        if let Some(file) = &self.file {
            let mut sink = file.lock();
            let _ = sink.write_all(out.as_bytes());
        }

        if let Some(console) = &self.console {
            let mut sink = console.lock();
            if self.color_enabled {
                let styled = term::paint(&out, spec.fg, spec.bg);
                let _ = sink.write_all(styled.as_bytes());
                let _ = sink.write_all(term::ERASE_LINE.as_bytes());
            } else {
                let _ = sink.write_all(out.as_bytes());
            }
            let _ = sink.flush();
        }
    }
}

/// `basename(file):line`, splitting on both path separator flavors.
fn assemble_location(file: &str, line: u32) -> String {
    let base = file.rsplit(['/', '\\']).next().unwrap_or(file);
    format!("{}:{}", base, line)
}

fn max_name_len(levels: &BTreeMap<u32, LevelSpec>) -> usize {
    levels
        .values()
        .map(|spec| spec.name.chars().count())
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use vellum_types::{CRITICAL, DEBUG, INFO, WARNING};

    /// In-memory sink whose contents stay readable from the test.
    #[derive(Clone, Default)]
    struct Capture {
        data: Arc<Mutex<Vec<u8>>>,
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.data.lock()).into_owned()
        }
    }

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.lock().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capturing_logger(header: &str, fields: Vec<Field>) -> (Logger, Capture) {
        let capture = Capture::default();
        let logger = Logger::with_fields(header, DEBUG, '|', fields);
        logger
            .toggle_color(false)
            .set_output_stream(Some(sink(capture.clone())));
        (logger, capture)
    }

    #[test]
    fn test_registered_level_at_threshold_emits_one_line() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.log(INFO, format_args!("msg"));
        assert_eq!(capture.contents(), "msg");
    }

    #[test]
    fn test_below_threshold_is_dropped() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.set_log_level(WARNING);
        logger.log(INFO, format_args!("msg"));
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_unregistered_level_is_dropped_regardless_of_threshold() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.set_log_level(0);
        logger.log(99, format_args!("msg"));
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_clear_log_levels_silences_everything() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.clear_log_levels();
        for level in [DEBUG, INFO, WARNING, CRITICAL, 99] {
            logger.log(level, format_args!("msg\n"));
        }
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_reset_log_levels_restores_the_seed() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.clear_log_levels();
        logger.reset_log_levels();
        logger.log(INFO, format_args!("back\n"));
        assert_eq!(capture.contents(), "back\n");
    }

    #[test]
    fn test_multiline_message_decorates_every_fragment() {
        let (logger, capture) = capturing_logger("hdr", vec![Field::Header]);
        logger.log(INFO, format_args!("a\nb\nc"));
        assert_eq!(capture.contents(), "hdr | a\nhdr | b\nhdr | c");
    }

    #[test]
    fn test_continuation_without_newline_suppresses_prefix() {
        let (logger, capture) = capturing_logger("hdr", vec![Field::Header]);
        logger.log(INFO, format_args!("partial "));
        logger.log(INFO, format_args!("rest\n"));
        assert_eq!(capture.contents(), "hdr | partial rest\n");
    }

    #[test]
    fn test_carriage_return_counts_as_line_end() {
        let (logger, capture) = capturing_logger("hdr", vec![Field::Header]);
        logger.log(INFO, format_args!("50%\r"));
        logger.log(INFO, format_args!("100%\r"));
        assert_eq!(capture.contents(), "hdr | 50%\rhdr | 100%\r");
    }

    #[test]
    fn test_level_and_location_layout_never_renders_header() {
        let (logger, capture) =
            capturing_logger("SHOULD-NOT-APPEAR", vec![Field::Level, Field::Location]);
        logger.log_at(INFO, "app.c", 42, format_args!("msg\n"));
        let out = capture.contents();
        assert!(out.contains("INFO"));
        assert!(out.contains("app.c:42"));
        assert!(!out.contains("SHOULD-NOT-APPEAR"));
        assert!(out.ends_with("msg\n"));
    }

    #[test]
    fn test_level_column_is_aligned_to_longest_name() {
        let (logger, capture) = capturing_logger("", vec![Field::Level]);
        logger.log(INFO, format_args!("x\n"));
        logger.log(CRITICAL, format_args!("y\n"));
        // CRITICAL is the longest seeded name at 8 chars.
        assert_eq!(capture.contents(), "INFO     | x\nCRITICAL | y\n");
    }

    #[test]
    fn test_update_shrinking_a_name_realigns_the_column() {
        let (logger, capture) = capturing_logger("", vec![Field::Level]);
        logger.clear_log_levels();
        logger
            .add_or_update_log_level(0, "LONGNAME", None, None)
            .add_or_update_log_level(1, "OK", None, None)
            .add_or_update_log_level(0, "NO", None, None);
        logger.log(1, format_args!("x\n"));
        assert_eq!(capture.contents(), "OK | x\n");
    }

    #[test]
    fn test_location_is_reduced_to_basename() {
        let (logger, capture) = capturing_logger("", vec![Field::Location]);
        logger.log_at(INFO, "/home/builder/project/src/main.rs", 7, format_args!("m\n"));
        let out = capture.contents();
        assert!(out.starts_with("main.rs:7"));
        assert!(!out.contains("builder"));

        let (logger, capture) = capturing_logger("", vec![Field::Location]);
        logger.log_at(INFO, r"C:\project\src\main.rs", 7, format_args!("m\n"));
        assert!(capture.contents().starts_with("main.rs:7"));
    }

    #[test]
    fn test_empty_message_emits_nothing() {
        let (logger, capture) = capturing_logger("hdr", vec![Field::Header]);
        logger.log(INFO, format_args!(""));
        assert_eq!(capture.contents(), "");
    }

    #[test]
    fn test_custom_taxonomy_gates_on_threshold() {
        let (logger, capture) = capturing_logger("", vec![]);
        logger.clear_log_levels();
        logger
            .add_or_update_log_level(10, "NOTICE", None, None)
            .add_or_update_log_level(20, "ALERT", None, None)
            .set_log_level(20);
        logger.log(10, format_args!("dropped\n"));
        logger.log(20, format_args!("kept\n"));
        assert_eq!(capture.contents(), "kept\n");
    }

    #[test]
    fn test_file_sink_receives_plain_bytes_while_console_is_styled() {
        colored::control::set_override(true);
        let console = Capture::default();
        let file = Capture::default();
        let logger = Logger::with_fields("", DEBUG, '|', vec![]);
        logger
            .set_output_stream(Some(sink(console.clone())))
            .set_file_handler(Some(sink(file.clone())));
        logger.log(vellum_types::ERROR, format_args!("boom\n"));
        assert_eq!(file.contents(), "boom\n");
        let styled = console.contents();
        assert!(styled.contains("boom"));
        assert!(styled.contains('\u{1b}'));
        assert!(styled.ends_with(term::ERASE_LINE));
    }

    #[test]
    fn test_file_sink_writes_to_a_real_file() {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        let file = tmp.reopen().unwrap();
        let logger = Logger::with_fields("files", DEBUG, '|', vec![Field::Header]);
        logger
            .set_output_stream(None)
            .set_file_handler(Some(sink(file)));
        logger.log(INFO, format_args!("persisted\n"));

        let written = std::fs::read_to_string(tmp.path()).unwrap();
        assert_eq!(written, "files | persisted\n");
    }

    #[test]
    fn test_detached_console_still_writes_file() {
        let file = Capture::default();
        let logger = Logger::with_fields("", DEBUG, '|', vec![]);
        logger
            .set_output_stream(None)
            .set_file_handler(Some(sink(file.clone())));
        logger.log(INFO, format_args!("to file only\n"));
        assert_eq!(file.contents(), "to file only\n");
    }

    #[test]
    fn test_concurrent_logging_never_tears_lines() {
        let capture = Capture::default();
        let logger = Arc::new(Logger::with_fields("", DEBUG, '|', vec![]));
        logger
            .toggle_color(false)
            .set_output_stream(Some(sink(capture.clone())));

        let mut handles = Vec::new();
        for thread in 0..4 {
            let logger = Arc::clone(&logger);
            handles.push(std::thread::spawn(move || {
                for i in 0..50 {
                    logger.log(INFO, format_args!("t{} m{}\n", thread, i));
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        let out = capture.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 200);
        for line in lines {
            let mut parts = line.split_whitespace();
            let t = parts.next().unwrap();
            let m = parts.next().unwrap();
            assert!(t.starts_with('t') && m.starts_with('m'), "torn line: {line:?}");
            assert_eq!(parts.next(), None);
        }
    }

    proptest! {
        /// Splitting and re-emitting never alters message content: with an
        /// empty prefix layout the sink sees exactly the rendered message.
        #[test]
        fn prop_emission_preserves_content(msg in "[ -~\\r\\n]{0,200}") {
            let (logger, capture) = capturing_logger("", vec![]);
            logger.log(INFO, format_args!("{}", msg));
            prop_assert_eq!(capture.contents(), msg);
        }
    }
}
