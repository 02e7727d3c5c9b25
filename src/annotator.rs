use crate::{
    source::{Source, EOF_RETRIES},
    Error, Stats,
};
use derive_builder::Builder;
use std::io::{Read, Write};
use std::time::{Duration, Instant};

/// Default line buffer capacity in bytes
pub const LINE_CAPACITY: usize = 1 << 16;

/// Annotator tuning
#[derive(Debug, Builder, Clone, Copy, PartialEq, Eq)]
pub struct AnnotatorOpts {
    /// Line buffer capacity in bytes, terminator included
    #[builder(default = "LINE_CAPACITY")]
    capacity: usize,
    /// Consecutive end-of-input signals before the input is considered done
    #[builder(default = "EOF_RETRIES")]
    eof_retries: u32,
}

impl Default for AnnotatorOpts {
    fn default() -> Self {
        Self {
            capacity: LINE_CAPACITY,
            eof_retries: EOF_RETRIES,
        }
    }
}

/// Stamps each completed input line with the time elapsed since start
///
/// Output lines read `<microseconds>: <line>`.
pub struct Annotator<W> {
    sink: W,
    start: Instant,
    line: Vec<u8>,
    capacity: usize,
    eof_retries: u32,
    overflow: bool,
    stats: Stats,
}

impl<W: Write> Annotator<W> {
    /// Capture the start time. Construct right before reading begins.
    pub fn start(opts: AnnotatorOpts, sink: W) -> Self {
        Self {
            sink,
            start: Instant::now(),
            line: Vec::with_capacity(opts.capacity),
            // room for at least the terminator
            capacity: opts.capacity.max(1),
            eof_retries: opts.eof_retries,
            overflow: false,
            stats: Stats::default(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Consume one input byte, emitting a stamped line on `\n` or NUL.
    ///
    /// Content may fill the buffer up to one byte short of its capacity, the
    /// last byte is reserved for the terminator.
    pub fn push(&mut self, byte: u8) -> Result<(), Error> {
        if matches!(byte, b'\n' | b'\0') {
            self.stats.bytes += 1;
            // NUL terminated lines are emitted newline terminated
            self.line.push(b'\n');
            return self.emit();
        }
        if self.line.len() + 1 >= self.capacity {
            self.overflow = true;
            return Err(Error::BufferOverflow {
                capacity: self.capacity,
            });
        }
        self.stats.bytes += 1;
        self.line.push(byte);
        Ok(())
    }

    /// Read the input until it is exhausted.
    ///
    /// On error the caller should still [`Annotator::finish`] to release the sink.
    pub fn run<R: Read>(&mut self, input: R) -> Result<(), Error> {
        let mut source = Source::new(input, self.eof_retries);
        while let Some(byte) = source.next_byte()? {
            self.push(byte)?;
        }
        Ok(())
    }

    /// Run to the end of input, then finish and hand sink and stats to `close`.
    ///
    /// `close` is called whenever finishing succeeds, also after a failed run.
    /// A run error takes precedence over finishing or closing errors.
    pub fn process<R, F>(mut self, input: R, close: F) -> Result<Stats, Error>
    where
        R: Read,
        F: FnOnce(W, &Stats) -> Result<(), Error>,
    {
        let res = self.run(input);
        let closed = self.finish().and_then(|(sink, stats)| {
            close(sink, &stats)?;
            Ok(stats)
        });
        res.and(closed)
    }

    /// Flush a trailing unterminated line and hand back the sink.
    ///
    /// After an overflow the truncated line is flushed instead.
    pub fn finish(mut self) -> Result<(W, Stats), Error> {
        if !self.line.is_empty() {
            self.line.push(b'\n');
            if self.overflow {
                self.stats.truncated = true;
            } else {
                self.stats.partial = true;
            }
            self.emit()?;
        }
        self.sink.flush()?;
        self.stats.elapsed = self.elapsed();
        Ok((self.sink, self.stats))
    }

    fn emit(&mut self) -> Result<(), Error> {
        let micros = self.elapsed().as_micros();
        let mut out = format!("{}: ", micros).into_bytes();
        out.extend_from_slice(&self.line);
        self.sink.write_all(&out)?;
        self.line.clear();
        self.stats.lines += 1;
        Ok(())
    }
}
