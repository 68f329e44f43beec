//! Browser console output: plain messages, failed DOM calls and `tracing`
//! diagnostics from the slider engine.

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Once;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use wasm_bindgen::JsValue;

/// Sliders with diagnostics switched on.
static DEBUGGING: AtomicUsize = AtomicUsize::new(0);
static SUBSCRIBER: Once = Once::new();

/// Log to the browser console.
pub fn log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

/// Report a failed browser call.
pub fn error(context: &str, err: &JsValue) {
    web_sys::console::error_2(&JsValue::from_str(&format!("svg-slider: {context}")), err);
}

/// Collects one formatted event and logs it as a single console line.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        log(line.trim_end());
        self.buf.clear();
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

fn install_subscriber() {
    SUBSCRIBER.call_once(|| {
        let console = fmt::layer()
            .with_writer(ConsoleWriter::default)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_filter(filter_fn(|_| DEBUGGING.load(Ordering::Relaxed) > 0));
        if let Err(err) = tracing_subscriber::registry().with(console).try_init() {
            error("cannot install tracing subscriber", &JsValue::from_str(&err.to_string()));
        }
    });
}

/// Keeps `tracing` output flowing to the console while alive.
///
/// Output stops once every guard is dropped.
#[derive(Debug)]
pub struct DebugGuard(());

impl DebugGuard {
    /// Start console diagnostics.
    pub fn new() -> Self {
        install_subscriber();
        DEBUGGING.fetch_add(1, Ordering::Relaxed);
        Self(())
    }
}

impl Default for DebugGuard {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DebugGuard {
    fn drop(&mut self) {
        DEBUGGING.fetch_sub(1, Ordering::Relaxed);
    }
}
