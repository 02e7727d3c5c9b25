//! Command line resolution
//!
//! Options are `-name value` pairs where any number of leading hyphens marks a
//! name. Only `filename` is understood.

use std::path::PathBuf;

/// Resolved profiler configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Write stamped lines to this file instead of stdout
    pub filename: Option<PathBuf>,
    /// Option names that received a value but are not understood, in order
    pub unrecognised: Vec<String>,
}

impl Configuration {
    /// Resolve the configuration from the process arguments (program name excluded).
    ///
    /// Never fails: unknown options are logged and skipped, an option without a
    /// following value is dropped.
    pub fn resolve<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut config = Self::default();
        let mut pending: Option<String> = None;
        for arg in args {
            let arg = arg.as_ref();
            if let Some(name) = arg.strip_prefix('-') {
                let name = name.trim_start_matches('-');
                // a bare run of hyphens names nothing
                pending = (!name.is_empty()).then(|| name.to_owned());
            } else if let Some(name) = pending.take() {
                match name.as_str() {
                    "filename" => {
                        config.filename = (!arg.is_empty()).then(|| PathBuf::from(arg));
                    }
                    _ => {
                        log::warn!("Unrecognised input \"{}\"", name);
                        config.unrecognised.push(name);
                    }
                }
            }
        }
        if let Some(name) = pending {
            log::debug!("Dropping option \"{}\" without value", name);
        }
        config
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty() {
        let c = Configuration::resolve(Vec::<String>::new());
        assert_eq!(c, Configuration::default());
    }

    #[test]
    fn filename() {
        let c = Configuration::resolve(["-filename", "out.txt"]);
        assert_eq!(c.filename, Some(PathBuf::from("out.txt")));
        let c = Configuration::resolve(["---filename", "a", "--filename", "b"]);
        assert_eq!(c.filename, Some(PathBuf::from("b")));
        assert!(c.unrecognised.is_empty());
    }

    #[test]
    fn empty_filename_is_console() {
        let c = Configuration::resolve(["-filename", ""]);
        assert_eq!(c.filename, None);
    }

    #[test]
    fn unrecognised() {
        let c = Configuration::resolve(["-speed", "3", "-filename", "x", "--verbose", "yes"]);
        assert_eq!(c.filename, Some(PathBuf::from("x")));
        assert_eq!(c.unrecognised, ["speed", "verbose"]);
    }

    #[test]
    fn dangling_and_stray() {
        // stray values are skipped, a trailing name is dropped
        let c = Configuration::resolve(["stray", "-filename"]);
        assert_eq!(c, Configuration::default());
        // a name followed by another name loses its value slot
        let c = Configuration::resolve(["-foo", "-filename", "x"]);
        assert_eq!(c.filename, Some(PathBuf::from("x")));
        assert!(c.unrecognised.is_empty());
        // hyphens only inside an argument do not make it a name
        let c = Configuration::resolve(["-filename", "a-b.txt"]);
        assert_eq!(c.filename, Some(PathBuf::from("a-b.txt")));
        let c = Configuration::resolve(["---", "x"]);
        assert_eq!(c, Configuration::default());
    }
}
