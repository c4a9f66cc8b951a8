use std::process::ExitCode;

use relic_engine::logging::{init_logging, LoggingConfig};
use relic_engine::window::{Runtime, RuntimeConfig};

fn main() -> ExitCode {
    init_logging(LoggingConfig::console());

    let result = Runtime::run(RuntimeConfig::default());
    if let Err(e) = &result {
        log::error!("{e}");
    }

    relic_engine::exit_code(&result)
}
