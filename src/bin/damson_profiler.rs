//! Pipe DAMSON output in, get it back with per-line elapsed microseconds.
//!
//! Usage: `damson | damson-profiler [-filename <path>]`
//! Use `RUST_LOG=debug` to increase logging verbosity.

use anyhow::Result;
use damson_profiler::{
    config::Configuration, sink::Sink, source::check_piped, Annotator, AnnotatorOpts, Error,
};

fn run(config: &Configuration) -> Result<(), Error> {
    let stdin = std::io::stdin();
    check_piped(&stdin)?;
    let sink = Sink::open(config)?;

    let annotator = Annotator::start(AnnotatorOpts::default(), sink);
    annotator.process(stdin.lock(), |sink, stats| {
        stats.analyze();
        Ok(sink.close()?)
    })?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init()?;
    log::info!(
        "DAMSON Profiler version {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_AUTHORS")
    );

    let config = Configuration::resolve(
        std::env::args_os()
            .skip(1)
            .map(|a| a.to_string_lossy().into_owned()),
    );

    if let Err(e) = run(&config) {
        let code = e.exit_code();
        log::error!("{:#}", anyhow::Error::from(e));
        std::process::exit(code);
    }
    Ok(())
}
