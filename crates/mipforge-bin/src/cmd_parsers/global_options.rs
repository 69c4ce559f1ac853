/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{info, Level};

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_flag(id)
}

/// Pick the log level from the logging flags, warn when none is given
pub fn log_level(options: &ArgMatches) -> Level {
    if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    }
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = log_level(options);

    if let Err(e) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {e}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

/// Whether the run should end with a JSON summary
pub fn json_output(options: &ArgMatches) -> bool {
    flag(options, "json")
}
