/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turn command line arguments and prompt answers into tool configurations
//!
//! This is the only place the tools ask questions, the answers are validated here
//! and the pipelines get a finished configuration.
use std::io::{BufRead, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};
use mipforge::batch::ModeSelector;
use mipforge::config::{
    BackgroundConfig, EnhanceConfig, MipmapConfig, ResizeRemoveConfig, TargetSize
};
use mipforge::errors::MipforgeErrors;
use mipforge_ops::mipmap::DensityTable;
use mipforge_ops::resize::ResizeFilter;

use crate::cmd_args::arg_parsers::IResizeFilter;
use crate::prompt::{
    Prompter, FOLDER_PROMPT, HEIGHT_PROMPT, IMAGE_PROMPT, INVALID_CHOICE, MODE_PROMPT,
    OUTPUT_DIRECTORY_PROMPT, OUTPUT_FOLDER_PROMPT, WIDTH_PROMPT
};

fn resize_filter(args: &ArgMatches) -> ResizeFilter {
    args.get_one::<IResizeFilter>("filter")
        .map_or(ResizeFilter::default(), |f| f.to_resize_filter())
}

fn side_or(args: &ArgMatches, id: &str, default: usize) -> Result<i64, MipforgeErrors> {
    match args.get_one::<String>(id) {
        Some(value) => TargetSize::parse_side(value),
        None => Ok(default as i64)
    }
}

pub fn enhance_config(args: &ArgMatches) -> Result<EnhanceConfig, MipforgeErrors> {
    let mut config = EnhanceConfig::default();

    if let Some(input) = args.get_one::<String>("in") {
        config.input = PathBuf::from(input);
    }
    if let Some(output) = args.get_one::<String>("out") {
        config.output = PathBuf::from(output);
    }
    let width = side_or(args, "width", config.size.width())?;
    let height = side_or(args, "height", config.size.height())?;

    config.size = TargetSize::new(width, height)?;
    config.filter = resize_filter(args);

    debug!("Enhance configuration {:?}", config);
    Ok(config)
}

pub fn mipmap_config(args: &ArgMatches) -> Result<MipmapConfig, MipforgeErrors> {
    let mut config = MipmapConfig::default();

    if let Some(input) = args.get_one::<String>("in") {
        config.input = PathBuf::from(input);
    }
    if let Some(out_dir) = args.get_one::<String>("out-dir") {
        config.output_dir = PathBuf::from(out_dir);
    }
    if let Some(base_size) = args.get_one::<usize>("base-size") {
        config.base_size = *base_size;
    }
    if let Some(densities) = args.get_many::<(String, f32)>("density") {
        let mut table = DensityTable::new();

        for (name, scale) in densities {
            table.insert(name, *scale)?;
        }
        info!("Using {} density(ies) from the command line", table.len());
        config.densities = table;
    }
    config.filter = resize_filter(args);

    debug!("Mipmap configuration {:?}", config);
    Ok(config)
}

/// Ask for the mode, printing the invalid choice message when it isn't `1` or `2`
fn read_mode<R: BufRead, W: Write>(
    args: &ArgMatches, prompter: &mut Prompter<R, W>
) -> Result<Option<ModeSelector>, MipforgeErrors> {
    let answer = prompter.answer_or_ask(args.get_one::<String>("mode"), MODE_PROMPT)?;

    match ModeSelector::parse(&answer) {
        Ok(mode) => Ok(Some(mode)),
        Err(MipforgeErrors::InvalidSelector(choice)) => {
            debug!("Rejected mode {:?}", choice);
            writeln!(prompter.output(), "{INVALID_CHOICE}")?;
            Ok(None)
        }
        Err(e) => Err(e)
    }
}

/// Build the background removal configuration
///
/// Returns `None` when the user picked an invalid mode, nothing should be processed then.
pub fn background_config<R: BufRead, W: Write>(
    args: &ArgMatches, prompter: &mut Prompter<R, W>
) -> Result<Option<BackgroundConfig>, MipforgeErrors> {
    let Some(mode) = read_mode(args, prompter)? else {
        return Ok(None);
    };
    let question = match mode {
        ModeSelector::Single => IMAGE_PROMPT,
        ModeSelector::Folder => FOLDER_PROMPT
    };
    let path = prompter.answer_or_ask(args.get_one::<String>("path"), question)?;

    Ok(Some(BackgroundConfig {
        target: mode.with_path(path)
    }))
}

/// Build the resize and remove configuration
///
/// The size is asked for and validated first, then the mode and paths.
/// Returns `None` when the user picked an invalid mode.
pub fn resize_remove_config<R: BufRead, W: Write>(
    args: &ArgMatches, prompter: &mut Prompter<R, W>
) -> Result<Option<ResizeRemoveConfig>, MipforgeErrors> {
    let width = TargetSize::parse_side(
        &prompter.answer_or_ask(args.get_one::<String>("width"), WIDTH_PROMPT)?
    )?;
    let height = TargetSize::parse_side(
        &prompter.answer_or_ask(args.get_one::<String>("height"), HEIGHT_PROMPT)?
    )?;
    let size = TargetSize::new(width, height)?;

    let Some(mode) = read_mode(args, prompter)? else {
        return Ok(None);
    };
    let (input_question, output_question) = match mode {
        ModeSelector::Single => (IMAGE_PROMPT, OUTPUT_DIRECTORY_PROMPT),
        ModeSelector::Folder => (FOLDER_PROMPT, OUTPUT_FOLDER_PROMPT)
    };
    let path = prompter.answer_or_ask(args.get_one::<String>("path"), input_question)?;
    let output_dir = prompter.answer_or_ask(args.get_one::<String>("out-dir"), output_question)?;

    Ok(Some(ResizeRemoveConfig {
        target: mode.with_path(path),
        output_dir: PathBuf::from(output_dir),
        size,
        filter: resize_filter(args)
    }))
}
