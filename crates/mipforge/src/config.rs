/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Configuration for each tool
//!
//! The defaults reproduce the fixed behaviour of the tools when run
//! without arguments.
use std::path::PathBuf;

use mipforge_ops::mipmap::DensityTable;
use mipforge_ops::resize::ResizeFilter;

use crate::batch::BatchTarget;
use crate::errors::MipforgeErrors;

/// Largest side accepted for a target size
pub const MAX_DIMENSION: i64 = 1 << 16;

/// Width and height of a resize target, both are non-zero
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TargetSize {
    width:  usize,
    height: usize
}

impl TargetSize {
    /// Create a target size, rejecting sides that are zero, negative or
    /// larger than [`MAX_DIMENSION`]
    pub fn new(width: i64, height: i64) -> Result<TargetSize, MipforgeErrors> {
        let valid = |side: i64| (1..=MAX_DIMENSION).contains(&side);

        if !valid(width) || !valid(height) {
            return Err(MipforgeErrors::InvalidDimensions(width, height));
        }
        Ok(TargetSize {
            width:  width as usize,
            height: height as usize
        })
    }

    /// Parse a prompt answer or argument into a side length
    ///
    /// Surrounding whitespace is ignored, anything that isn't an integer is an
    /// [`MipforgeErrors::InvalidNumericInput`]
    pub fn parse_side(input: &str) -> Result<i64, MipforgeErrors> {
        input
            .trim()
            .parse::<i64>()
            .map_err(|_| MipforgeErrors::InvalidNumericInput(input.trim().to_string()))
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }
}

/// Resize one image to a fixed size
#[derive(Clone, Debug)]
pub struct EnhanceConfig {
    pub input:  PathBuf,
    pub output: PathBuf,
    pub size:   TargetSize,
    pub filter: ResizeFilter
}

impl Default for EnhanceConfig {
    fn default() -> Self {
        EnhanceConfig {
            input:  PathBuf::from("TicTacToe.png"),
            output: PathBuf::from("enhanced_image.png"),
            size:   TargetSize {
                width:  1024,
                height: 1024
            },
            filter: ResizeFilter::Lanczos3
        }
    }
}

/// Produce one resized PNG per density
#[derive(Clone, Debug)]
pub struct MipmapConfig {
    pub input:      PathBuf,
    pub output_dir: PathBuf,
    pub base_size:  usize,
    pub densities:  DensityTable,
    pub filter:     ResizeFilter
}

impl Default for MipmapConfig {
    fn default() -> Self {
        MipmapConfig {
            input:      PathBuf::from("TicTacToe.png"),
            output_dir: PathBuf::from("resized_images"),
            base_size:  48,
            densities:  DensityTable::default(),
            filter:     ResizeFilter::Lanczos3
        }
    }
}

/// Invert colors of a file or every file of a folder, writing `_processed` siblings
#[derive(Clone, Debug)]
pub struct BackgroundConfig {
    pub target: BatchTarget
}

/// Resize then invert a file or every file of a folder into `output_dir`
#[derive(Clone, Debug)]
pub struct ResizeRemoveConfig {
    pub target:     BatchTarget,
    pub output_dir: PathBuf,
    pub size:       TargetSize,
    pub filter:     ResizeFilter
}
