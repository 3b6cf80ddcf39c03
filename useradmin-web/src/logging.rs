//! `tracing` output routed to the browser console.

use crate::config::FrontendConfig;
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;
use wasm_bindgen::JsValue;

/// Buffers one formatted event and hands it to `console.log` on flush.
#[derive(Debug, Default)]
pub struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.buffer.is_empty() {
            return Ok(());
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
        self.buffer.clear();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(config: &FrontendConfig) {
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleWriter::default)
        .finish()
        .try_init();

    if let Err(err) = installed {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "console logging already initialised: {err}"
        )));
    }
}
