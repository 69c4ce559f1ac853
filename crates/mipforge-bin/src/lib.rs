/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry points of the mipforge command line tools
//!
//! Each `*_main` parses its own command line, sets up logging and
//! runs one pipeline, exiting with a non-zero status on the first error.
use std::io::{stdin, stdout};
use std::process::exit;

use clap::ArgMatches;
use log::error;
use mipforge::errors::MipforgeErrors;
use mipforge::pipelines;

use crate::cmd_parsers::global_options::{json_output, setup_logger};
use crate::cmd_parsers::tools::{
    background_config, enhance_config, mipmap_config, resize_remove_config
};
use crate::prompt::Prompter;
use crate::report::{Confirmation, Reporter};

pub mod cmd_args;
pub mod cmd_parsers;
pub mod prompt;
pub mod report;

fn exit_on_error(result: Result<(), MipforgeErrors>) {
    if let Err(reason) = result {
        println!();
        error!(" Could not complete, reason {:?}", reason);

        println!();
        exit(-1);
    }
}

fn run_enhance(options: &ArgMatches) -> Result<(), MipforgeErrors> {
    let config = enhance_config(options)?;
    let mut reporter = Reporter::new(stdout(), json_output(options), Confirmation::Enhanced);

    let written = pipelines::enhance(&config)?;

    reporter.written(&written)?;
    reporter.finish(&[written])
}

fn run_mipmap(options: &ArgMatches) -> Result<(), MipforgeErrors> {
    let config = mipmap_config(options)?;
    let mut reporter = Reporter::new(stdout(), json_output(options), Confirmation::Resized);

    let written = pipelines::generate_mipmaps(&config, |w| reporter.written(w))?;

    reporter.finish(&written)
}

fn run_remove_background(options: &ArgMatches) -> Result<(), MipforgeErrors> {
    let mut prompter = Prompter::new(stdin().lock(), stdout());

    let Some(config) = background_config(options, &mut prompter)? else {
        return Ok(());
    };
    let mut reporter = Reporter::new(stdout(), json_output(options), Confirmation::Processed);

    let written = pipelines::remove_background(&config, |w| reporter.written(w))?;

    reporter.finish(&written)
}

fn run_resize_and_remove(options: &ArgMatches) -> Result<(), MipforgeErrors> {
    let mut prompter = Prompter::new(stdin().lock(), stdout());

    let Some(config) = resize_remove_config(options, &mut prompter)? else {
        return Ok(());
    };
    let mut reporter = Reporter::new(stdout(), json_output(options), Confirmation::Processed);

    let written = pipelines::resize_and_remove(&config, |w| reporter.written(w))?;

    reporter.finish(&written)
}

/// Resize one image to a fixed size, `TicTacToe.png` to 1024x1024 by default
pub fn enhance_main() {
    let options = cmd_args::create_enhance_args().get_matches();
    setup_logger(&options);
    exit_on_error(run_enhance(&options));
}

/// Write the launcher icon mipmap set
pub fn mipmap_main() {
    let options = cmd_args::create_mipmap_args().get_matches();
    setup_logger(&options);
    exit_on_error(run_mipmap(&options));
}

/// Invert colors of an image or folder, next to the originals
pub fn remove_background_main() {
    let options = cmd_args::create_remove_background_args().get_matches();
    setup_logger(&options);
    exit_on_error(run_remove_background(&options));
}

/// Resize and invert an image or folder into an output directory
pub fn resize_and_remove_main() {
    let options = cmd_args::create_resize_and_remove_args().get_matches();
    setup_logger(&options);
    exit_on_error(run_resize_and_remove(&options));
}
