/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! End to end tests of the mipforge pipelines on real files
#![allow(unused_imports, unused)]

use std::fs::read;
use std::path::{Path, PathBuf};

use mipforge::file_io::save_image;
use xxhash_rust::xxh3::xxh3_128;
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

mod background;
mod enhance;
mod mipmap;
mod resize_remove;

/// Write a `width` x `height` gradient image to `dir/name`, returning its path
///
/// The extension of `name` decides the format, ignoring case.
pub fn write_image(
    dir: &Path, name: &str, width: usize, height: usize, colorspace: ColorSpace
) -> PathBuf {
    let components = colorspace.num_components();
    let pixels: Vec<u8> = (0..width * height * components)
        .map(|i| (i * 7 % 251) as u8)
        .collect();

    let path = dir.join(name);
    save_image(&Image::from_u8(&pixels, width, height, colorspace), &path).unwrap();
    path
}

/// Decode an image written by a pipeline
pub fn reopen(path: &Path) -> Image {
    Image::open(path).unwrap()
}

fn hash(contents: &[u8]) -> u128 {
    xxh3_128(contents)
}

/// Hash the bytes of a file on disk
pub fn hash_file(path: &Path) -> u128 {
    hash(&read(path).unwrap())
}
