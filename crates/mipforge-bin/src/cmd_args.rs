/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_density, IResizeFilter};
use crate::cmd_args::help_strings::{
    DENSITY_HELP, ENHANCE_ABOUT, MIPMAP_ABOUT, MODE_HELP, REMOVE_BACKGROUND_ABOUT,
    RESIZE_AND_REMOVE_ABOUT
};

pub mod arg_parsers;
pub mod help_strings;

/// Logging and report options shared by every tool
#[rustfmt::skip]
fn add_global_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the files being processed"))
        .arg(Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print a JSON summary of written files instead of one line per file"))
}

#[rustfmt::skip]
fn filter_arg() -> Arg {
    Arg::new("filter")
        .long("filter")
        .help_heading("ADVANCED")
        .help("Resampling filter used when resizing")
        .default_value("lanczos")
        .value_parser(value_parser!(IResizeFilter))
}

#[rustfmt::skip]
fn mode_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("mode")
            .long("mode")
            .short('m')
            .help("Processing mode, 1 for a single image, 2 for a folder")
            .long_help(MODE_HELP))
        .arg(Arg::new("path")
            .long("path")
            .short('p')
            .help("Image or folder to process, asked for when missing"))
}

#[rustfmt::skip]
pub fn create_enhance_args() -> Command {
    let cmd = Command::new("enhance")
        .about(ENHANCE_ABOUT)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .default_value("TicTacToe.png"))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to")
            .default_value("enhanced_image.png"))
        .arg(Arg::new("width")
            .long("width")
            .help("Width of the enhanced image")
            .default_value("1024"))
        .arg(Arg::new("height")
            .long("height")
            .help("Height of the enhanced image")
            .default_value("1024"))
        .arg(filter_arg());

    add_global_args(cmd)
}

#[rustfmt::skip]
pub fn create_mipmap_args() -> Command {
    let cmd = Command::new("mipmap")
        .about(MIPMAP_ABOUT)
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .default_value("TicTacToe.png"))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("out-dir")
            .help("Directory to write the mipmaps to, created if missing")
            .default_value("resized_images"))
        .arg(Arg::new("base-size")
            .long("base-size")
            .help("Side of the mdpi (scale 1) image")
            .default_value("48")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("density")
            .long("density")
            .help("Density as NAME=SCALE, may be repeated")
            .long_help(DENSITY_HELP)
            .action(ArgAction::Append)
            .value_parser(parse_density))
        .arg(filter_arg());

    add_global_args(cmd)
}

pub fn create_remove_background_args() -> Command {
    let cmd = Command::new("remove-background").about(REMOVE_BACKGROUND_ABOUT);

    add_global_args(mode_args(cmd))
}

#[rustfmt::skip]
pub fn create_resize_and_remove_args() -> Command {
    let cmd = Command::new("resize-and-remove")
        .about(RESIZE_AND_REMOVE_ABOUT)
        .arg(Arg::new("width")
            .long("width")
            .help("Target width, asked for when missing"))
        .arg(Arg::new("height")
            .long("height")
            .help("Target height, asked for when missing"))
        .arg(Arg::new("out-dir")
            .short('o')
            .long("out-dir")
            .help("Directory to write processed images to, asked for when missing"))
        .arg(filter_arg());

    add_global_args(mode_args(cmd))
}
