use std::{env, process::ExitCode, thread};

use asynclog::{
    async_error, async_info, async_warn,
    config::Config,
    log::{LogError, LogValue, Logger, log_bridge::LogBridge},
    values,
};

const PRODUCERS: usize = 4;
const PER_PRODUCER: usize = 5;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("asynclog: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), LogError> {
    let config = match env::args().nth(1) {
        Some(path) => Config::load(&path)?,
        None => Config::empty(),
    };

    let logger = Logger::from_config(&config)?;
    LogBridge::install(logger.handle(), ::log::LevelFilter::Info)?;

    async_info!(logger, "starting {} producers", PRODUCERS);

    let workers: Vec<_> = (0..PRODUCERS)
        .map(|id| {
            let handle = logger.handle();
            thread::spawn(move || {
                for n in 0..PER_PRODUCER {
                    async_info!(handle, "producer {} message {}", id, n);
                }
                async_warn!(handle, "producer {} done after", id, PER_PRODUCER, "messages");
            })
        })
        .collect();

    for worker in workers {
        if worker.join().is_err() {
            async_error!(logger, "a producer panicked");
        }
    }

    ::log::info!("bridged from the log crate");
    logger.error(values![LogValue::unsupported::<()>(), "never printed"]);
    logger.info(values![]);

    let stats = logger.shutdown();
    println!("written={} dropped={}", stats.written, stats.dropped);
    Ok(())
}
