/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::create_dir_all;
use std::path::Path;

use log::{debug, info};
use zune_image::codecs::ImageFormat;
use zune_image::image::Image;

use crate::errors::MipforgeErrors;

/// Open and decode an image
///
/// Missing paths are reported as [`MipforgeErrors::InputNotFound`] before
/// anything is read, any decoder failure is [`MipforgeErrors::InvalidFormat`]
pub fn open_image(path: &Path) -> Result<Image, MipforgeErrors> {
    if !path.exists() {
        return Err(MipforgeErrors::InputNotFound(path.to_path_buf()));
    }
    debug!("Decoding {:?}", path);

    let image = Image::open(path)
        .map_err(|e| MipforgeErrors::InvalidFormat(path.to_path_buf(), format!("{e:?}")))?;

    let (width, height) = image.dimensions();
    debug!(
        "Decoded {:?}, {}x{} {:?}",
        path,
        width,
        height,
        image.colorspace()
    );
    Ok(image)
}

/// Encode an image, the format comes from the extension of `path`
///
/// The extension is matched ignoring ascii case, `PHOTO.PNG` is written
/// as a PNG under that exact name.
pub fn save_image(image: &Image, path: &Path) -> Result<(), MipforgeErrors> {
    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();

    let format = ImageFormat::get_encoder_for_extension(extension.as_str())
        .map(|(format, _)| format)
        .ok_or_else(|| MipforgeErrors::UnsupportedOutput(path.to_path_buf()))?;

    debug!("Encoding {:?} as {:?}", path, format);
    image.save_to(path, format)?;
    info!("Wrote {:?}", path);
    Ok(())
}

/// Create `directory` and its parents if they don't exist
pub fn ensure_directory(directory: &Path) -> Result<(), MipforgeErrors> {
    if !directory.is_dir() {
        debug!("Creating directory {:?}", directory);
        create_dir_all(directory)?;
    }
    Ok(())
}
