/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The four tools as plain functions
//!
//! Each pipeline takes its configuration, decodes, transforms and writes
//! images strictly one after the other. `on_written` is called after every
//! successful write so callers can report progress before a later file fails,
//! an error it returns stops the run.
use std::path::{Path, PathBuf};

use log::{debug, info};
use mipforge_ops::invert::InvertColors;
use mipforge_ops::mipmap::generate_mipmap_dimensions;
use mipforge_ops::resize::{Resize, ResizeFilter};
use serde::Serialize;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;

use crate::batch::run_batch;
use crate::config::{BackgroundConfig, EnhanceConfig, MipmapConfig, ResizeRemoveConfig, TargetSize};
use crate::errors::MipforgeErrors;
use crate::file_io::{ensure_directory, open_image, save_image};
use crate::paths::{in_directory, processed_sibling};

/// A file written by a pipeline
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct WrittenImage {
    pub input:      PathBuf,
    pub output:     PathBuf,
    pub width:      usize,
    pub height:     usize,
    pub colorspace: String
}

impl WrittenImage {
    fn new(input: &Path, output: &Path, image: &Image) -> WrittenImage {
        let (width, height) = image.dimensions();

        WrittenImage {
            input: input.to_path_buf(),
            output: output.to_path_buf(),
            width,
            height,
            colorspace: format!("{:?}", image.colorspace())
        }
    }
}

/// Resize `image` to exactly `size`, leaving the source untouched
pub fn resize_image(
    image: &Image, size: TargetSize, filter: ResizeFilter
) -> Result<Image, MipforgeErrors> {
    let mut resized = image.clone();
    Resize::new(size.width(), size.height(), filter).execute(&mut resized)?;
    Ok(resized)
}

/// Convert to RGBA and invert every color channel, alpha stays as is
pub fn invert_colors(mut image: Image) -> Result<Image, MipforgeErrors> {
    InvertColors::new().execute(&mut image)?;
    Ok(image)
}

/// Resize a single image to a fixed size
pub fn enhance(config: &EnhanceConfig) -> Result<WrittenImage, MipforgeErrors> {
    info!("Enhancing {:?}", config.input);

    let image = open_image(&config.input)?;
    let enhanced = resize_image(&image, config.size, config.filter)?;

    save_image(&enhanced, &config.output)?;

    Ok(WrittenImage::new(&config.input, &config.output, &enhanced))
}

/// Write one `mipmap-{density}.png` per density into the output directory
///
/// Outputs are always PNG whatever the input format.
pub fn generate_mipmaps<F>(
    config: &MipmapConfig, mut on_written: F
) -> Result<Vec<WrittenImage>, MipforgeErrors>
where
    F: FnMut(&WrittenImage) -> Result<(), MipforgeErrors>
{
    // dimensions are validated before anything touches the disk
    let targets = generate_mipmap_dimensions(config.base_size, &config.densities)?;

    let image = open_image(&config.input)?;
    ensure_directory(&config.output_dir)?;

    let mut written = Vec::with_capacity(targets.len());

    for target in targets {
        debug!(
            "Generating {} at {}x{}",
            target.density, target.width, target.height
        );
        let size = TargetSize::new(target.width as i64, target.height as i64)?;
        let resized = resize_image(&image, size, config.filter)?;
        let output = config.output_dir.join(target.file_name());

        save_image(&resized, &output)?;

        let record = WrittenImage::new(&config.input, &output, &resized);
        on_written(&record)?;
        written.push(record);
    }
    Ok(written)
}

/// Invert colors of every selected file, writing `name_processed.ext` next to each
pub fn remove_background<F>(
    config: &BackgroundConfig, mut on_written: F
) -> Result<Vec<WrittenImage>, MipforgeErrors>
where
    F: FnMut(&WrittenImage) -> Result<(), MipforgeErrors>
{
    info!("Inverting colors under {:?}", config.target.path());

    run_batch(&config.target, |input| {
        let processed = invert_colors(open_image(input)?)?;
        let output = processed_sibling(input);

        save_image(&processed, &output)?;

        let record = WrittenImage::new(input, &output, &processed);
        on_written(&record)?;
        Ok(record)
    })
}

/// Resize then invert every selected file, writing into the output directory
/// under the original file name
pub fn resize_and_remove<F>(
    config: &ResizeRemoveConfig, mut on_written: F
) -> Result<Vec<WrittenImage>, MipforgeErrors>
where
    F: FnMut(&WrittenImage) -> Result<(), MipforgeErrors>
{
    info!(
        "Resizing and inverting {:?} into {:?}",
        config.target.path(),
        config.output_dir
    );
    // fail on a bad input before creating anything
    let inputs = config.target.collect_inputs()?;
    ensure_directory(&config.output_dir)?;

    inputs
        .iter()
        .map(|input| {
            let image = open_image(input)?;
            let processed = invert_colors(resize_image(&image, config.size, config.filter)?)?;
            let output = in_directory(input, &config.output_dir);

            save_image(&processed, &output)?;

            let record = WrittenImage::new(input, &output, &processed);
            on_written(&record)?;
            Ok(record)
        })
        .collect()
}
