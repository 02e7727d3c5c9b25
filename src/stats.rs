use std::time::Duration;

/// Summary of an annotation run
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Bytes taken from the input
    pub bytes: u64,
    /// Stamped lines written, the trailing partial line included
    pub lines: u64,
    /// Whether the input ended without a terminator
    pub partial: bool,
    /// Whether the last line was cut short by a full line buffer
    pub truncated: bool,
    /// Time from loop entry to the end of input
    pub elapsed: Duration,
}

impl Stats {
    pub fn analyze(&self) {
        log::info!(
            "Stamped {} lines ({} bytes) in {:.6} s",
            self.lines,
            self.bytes,
            self.elapsed.as_secs_f64()
        );
        if self.partial {
            log::info!("Input ended mid-line, last line was terminated");
        }
        if self.truncated {
            log::warn!("Last line was truncated to the line buffer");
        }
    }
}
