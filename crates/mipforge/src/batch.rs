/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Single file and folder dispatch
//!
//! A [`BatchTarget`] is decoded once from user input, after that the
//! pipelines only ever see the list of files it expands to.
use std::fs::read_dir;
use std::path::{Path, PathBuf};

use log::{debug, trace};

use crate::errors::MipforgeErrors;

/// The two processing modes offered to the user
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ModeSelector {
    /// `1`, process exactly one file
    Single,
    /// `2`, process every regular file of a folder
    Folder
}

impl ModeSelector {
    /// Parse the literal answer to the mode prompt
    ///
    /// Only the exact strings `1` and `2` are accepted.
    pub fn parse(choice: &str) -> Result<ModeSelector, MipforgeErrors> {
        match choice {
            "1" => Ok(ModeSelector::Single),
            "2" => Ok(ModeSelector::Folder),
            other => Err(MipforgeErrors::InvalidSelector(other.to_string()))
        }
    }

    /// Pair the mode with the path it applies to
    pub fn with_path(self, path: impl Into<PathBuf>) -> BatchTarget {
        match self {
            ModeSelector::Single => BatchTarget::SingleFile(path.into()),
            ModeSelector::Folder => BatchTarget::Folder(path.into())
        }
    }
}

/// What a batch operates on
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BatchTarget {
    SingleFile(PathBuf),
    Folder(PathBuf)
}

impl BatchTarget {
    pub fn path(&self) -> &Path {
        match self {
            BatchTarget::SingleFile(path) | BatchTarget::Folder(path) => path
        }
    }

    /// Expand the target to the files that will be processed
    ///
    /// A single file is returned as is, even if it turns out not to be a regular file,
    /// decoding will reject it later.
    ///
    /// For folders, only regular files directly inside it are returned, sorted by name.
    /// Subdirectories are skipped.
    pub fn collect_inputs(&self) -> Result<Vec<PathBuf>, MipforgeErrors> {
        match self {
            BatchTarget::SingleFile(path) => {
                if !path.exists() {
                    return Err(MipforgeErrors::InputNotFound(path.clone()));
                }
                Ok(vec![path.clone()])
            }
            BatchTarget::Folder(folder) => {
                if !folder.is_dir() {
                    return Err(MipforgeErrors::InputNotFound(folder.clone()));
                }
                let mut files = Vec::new();

                for entry in read_dir(folder)? {
                    let path = entry?.path();

                    if path.is_file() {
                        files.push(path);
                    } else {
                        trace!("Skipping {:?}, not a regular file", path);
                    }
                }
                files.sort();
                debug!("Found {} file(s) in {:?}", files.len(), folder);

                Ok(files)
            }
        }
    }
}

/// Run `process` on every input of `target` in order
///
/// The first error stops the batch, files already processed are kept.
pub fn run_batch<T, F>(target: &BatchTarget, mut process: F) -> Result<Vec<T>, MipforgeErrors>
where
    F: FnMut(&Path) -> Result<T, MipforgeErrors>
{
    target
        .collect_inputs()?
        .iter()
        .map(|path| process(path))
        .collect()
}
