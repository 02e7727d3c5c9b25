use crate::{config::Configuration, Error};
use std::{
    fs::File,
    io::{BufWriter, Stdout, Write},
};

/// Destination of stamped lines, chosen once at startup
#[derive(Debug)]
pub enum Sink {
    Console(Stdout),
    File(BufWriter<File>),
}

impl Sink {
    /// Open the sink selected by the configuration.
    ///
    /// A file is created or truncated.
    pub fn open(config: &Configuration) -> Result<Self, Error> {
        Ok(match &config.filename {
            Some(path) => {
                let file = File::create(path).map_err(|source| Error::FileOpen {
                    path: path.clone(),
                    source,
                })?;
                log::info!("Writing to {}", path.display());
                Self::File(BufWriter::new(file))
            }
            None => Self::Console(std::io::stdout()),
        })
    }

    /// Flush and release the underlying handle
    pub fn close(mut self) -> std::io::Result<()> {
        self.flush()?;
        if let Self::File(buf) = self {
            buf.into_inner().map_err(|e| e.into_error())?.sync_all()?;
        }
        Ok(())
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self {
            Self::Console(out) => out.write(buf),
            Self::File(fil) => fil.write(buf),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        match self {
            Self::Console(out) => out.lock().write_all(buf),
            Self::File(fil) => fil.write_all(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self {
            Self::Console(out) => out.flush(),
            Self::File(fil) => fil.flush(),
        }
    }
}
