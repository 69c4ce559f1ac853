/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during a mipforge run
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use mipforge_ops::mipmap::MipmapErrors;
use zune_image::errors::ImageErrors;

/// All possible errors that can occur when running a pipeline
pub enum MipforgeErrors {
    /// The input file or folder does not exist
    InputNotFound(PathBuf),
    /// The file exists but could not be decoded as an image
    InvalidFormat(PathBuf, String),
    /// The mode selector was neither `1` nor `2`
    InvalidSelector(String),
    /// A width or height answer was not an integer
    InvalidNumericInput(String),
    /// Width and height, at least one of them is out of range
    InvalidDimensions(i64, i64),
    /// A density scale is unusable
    InvalidDensity(String, f32),
    /// A `NAME=SCALE` density argument could not be parsed
    InvalidDensitySpec(String),
    /// No encoder matches the extension of an output path
    UnsupportedOutput(PathBuf),
    IoError(std::io::Error),
    ImageErrors(ImageErrors)
}

impl Debug for MipforgeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MipforgeErrors::InputNotFound(path) => {
                writeln!(f, "Path {path:?} does not exist")
            }
            MipforgeErrors::InvalidFormat(path, reason) => {
                writeln!(f, "Could not decode {path:?} as an image: {reason}")
            }
            MipforgeErrors::InvalidSelector(choice) => {
                writeln!(f, "Invalid choice {choice:?}, expected '1' or '2'")
            }
            MipforgeErrors::InvalidNumericInput(input) => {
                writeln!(f, "Expected an integer but found {input:?}")
            }
            MipforgeErrors::InvalidDimensions(width, height) => {
                writeln!(
                    f,
                    "Invalid target size {width}x{height}, both sides must be between 1 and 65536"
                )
            }
            MipforgeErrors::InvalidDensity(name, scale) => {
                writeln!(f, "Density {name:?} cannot use scale factor {scale}")
            }
            MipforgeErrors::InvalidDensitySpec(spec) => {
                writeln!(f, "Expected a density as NAME=SCALE but found {spec:?}")
            }
            MipforgeErrors::UnsupportedOutput(path) => {
                writeln!(f, "No encoder for the extension of {path:?}")
            }
            MipforgeErrors::IoError(err) => {
                writeln!(f, "IO error: {err:?}")
            }
            MipforgeErrors::ImageErrors(err) => {
                writeln!(f, "Image error: {err:?}")
            }
        }
    }
}

impl Display for MipforgeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for MipforgeErrors {}

impl From<std::io::Error> for MipforgeErrors {
    fn from(value: std::io::Error) -> Self {
        MipforgeErrors::IoError(value)
    }
}

impl From<ImageErrors> for MipforgeErrors {
    fn from(value: ImageErrors) -> Self {
        MipforgeErrors::ImageErrors(value)
    }
}

impl From<MipmapErrors> for MipforgeErrors {
    fn from(value: MipmapErrors) -> Self {
        match value {
            MipmapErrors::InvalidScale(name, scale) | MipmapErrors::ZeroSized(name, scale) => {
                MipforgeErrors::InvalidDensity(name, scale)
            }
        }
    }
}
