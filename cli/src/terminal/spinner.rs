use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: Mutex<Option<ProgressBar>> = Mutex::new(None);

/// Shows a spinner until [`finish`] is called. Log lines are printed above it.
pub fn start(msg: &str) {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg} {elapsed:.dim}") {
        pb.set_style(style.tick_strings(&[
            "▁▁▁▁▁",
            "▁▂▂▂▁",
            "▁▄▂▄▁",
            "▂▄▆▄▂",
            "▄▆█▆▄",
            "▂▄▆▄▂",
            "▁▄▂▄▁",
            "▁▂▂▂▁",
        ]));
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));

    if let Ok(mut slot) = SPINNER.lock() {
        *slot = Some(pb);
    }
}

pub fn finish() {
    if let Ok(mut slot) = SPINNER.lock() {
        if let Some(pb) = slot.take() {
            pb.finish_and_clear();
        }
    }
}

/// Routes formatted log lines around the active spinner, or straight to
/// stdout when there is none.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let active = SPINNER
            .lock()
            .ok()
            .and_then(|slot| slot.as_ref().filter(|pb| !pb.is_hidden()).cloned());

        match active {
            Some(pb) => {
                let msg = String::from_utf8_lossy(buf);
                pb.println(msg.trim_end());
                Ok(buf.len())
            }
            None => std::io::stdout().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stdout().flush()
    }
}
