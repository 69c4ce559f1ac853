/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Where outputs are written
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix added to color inverted files written next to their source
pub const PROCESSED_SUFFIX: &str = "_processed";

/// Insert [`PROCESSED_SUFFIX`] between the file stem and its extension
///
/// `photos/cat.jpg` becomes `photos/cat_processed.jpg`, a file without
/// an extension just gets the suffix.
pub fn processed_sibling(input: &Path) -> PathBuf {
    let mut name = OsString::new();

    if let Some(stem) = input.file_stem() {
        name.push(stem);
    }
    name.push(PROCESSED_SUFFIX);

    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    input.with_file_name(name)
}

/// Keep the input's file name, but place it in `directory`
pub fn in_directory(input: &Path, directory: &Path) -> PathBuf {
    match input.file_name() {
        Some(name) => directory.join(name),
        None => directory.to_path_buf()
    }
}
