use std::io::{BufReader, ErrorKind, IsTerminal, Read};

/// Consecutive end-of-input signals tolerated before a stream is considered done
pub const EOF_RETRIES: u32 = 5;

/// Refuse interactive input
///
/// The profiler only makes sense at the end of a pipe.
pub fn check_piped<T: IsTerminal>(input: &T) -> Result<(), crate::Error> {
    if input.is_terminal() {
        return Err(crate::Error::Usage);
    }
    Ok(())
}

/// Byte-wise input with end-of-input retries
#[derive(Debug)]
pub struct Source<R> {
    reader: BufReader<R>,
    eof_retries: u32,
    eofs: u32,
}

impl<R: Read> Source<R> {
    pub fn new(reader: R, eof_retries: u32) -> Self {
        Self {
            reader: BufReader::with_capacity(1 << 12, reader),
            eof_retries: eof_retries.max(1),
            eofs: 0,
        }
    }

    /// Read the next byte.
    ///
    /// Blocks until a byte is available. `None` once `eof_retries` consecutive
    /// reads have signalled end of input.
    pub fn next_byte(&mut self) -> std::io::Result<Option<u8>> {
        let mut buf = [0u8; 1];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => {
                    self.eofs += 1;
                    log::trace!("End of input {}/{}", self.eofs, self.eof_retries);
                    if self.eofs >= self.eof_retries {
                        return Ok(None);
                    }
                }
                Ok(_) => {
                    self.eofs = 0;
                    return Ok(Some(buf[0]));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::collections::VecDeque;

    /// Hands out scripted chunks, an empty chunk signalling end of input
    struct Flaky(VecDeque<&'static str>);

    impl Flaky {
        fn new(chunks: &[&'static str]) -> Self {
            Self(chunks.iter().copied().collect())
        }
    }

    impl Read for Flaky {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            match self.0.pop_front() {
                Some(chunk) => {
                    buf[..chunk.len()].copy_from_slice(chunk.as_bytes());
                    Ok(chunk.len())
                }
                None => Ok(0),
            }
        }
    }

    fn drain<R: Read>(src: &mut Source<R>) -> Vec<u8> {
        let mut out = vec![];
        while let Some(b) = src.next_byte().unwrap() {
            out.push(b);
        }
        out
    }

    #[test]
    fn bytes() {
        let mut src = Source::new(&b"ab\n"[..], EOF_RETRIES);
        assert_eq!(drain(&mut src), b"ab\n");
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn spurious_eof() {
        // fewer than the threshold of consecutive EOFs keeps reading
        let chunks = Flaky::new(&["a", "", "", "b", "", "", "", "", "c"]);
        let mut src = Source::new(chunks, EOF_RETRIES);
        assert_eq!(drain(&mut src), b"abc");

        let mut src = Source::new(Flaky::new(&["a", "", "", "b"]), 2);
        assert_eq!(drain(&mut src), b"a");
    }

    #[test]
    fn interrupted() {
        struct Once(bool);
        impl Read for Once {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                if !self.0 {
                    self.0 = true;
                    return Err(ErrorKind::Interrupted.into());
                }
                Ok(0)
            }
        }
        let mut src = Source::new(Once(false), 1);
        assert_eq!(src.next_byte().unwrap(), None);
    }

    #[test]
    fn piped() {
        let f = tempfile::tempfile().unwrap();
        assert!(check_piped(&f).is_ok());
    }
}
