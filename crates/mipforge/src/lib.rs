/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Batch pipelines for the mipforge tools
//!
//! This crate glues zune-image decoding and encoding to the operations in
//! `mipforge-ops`. It provides
//! - [`config`]: per tool configuration with the fixed defaults
//! - [`batch`]: single file and folder dispatch
//! - [`paths`]: output naming
//! - [`pipelines`]: the tools themselves
//!
//! Nothing here reads from standard input, prompting is left to the binaries.
//!
//! # Example
//! - Write the default mipmap set for an icon
//! ```no_run
//! use mipforge::config::MipmapConfig;
//! use mipforge::pipelines::generate_mipmaps;
//!
//! let config = MipmapConfig::default();
//! generate_mipmaps(&config, |written| {
//!     println!("{:?}", written.output);
//!     Ok(())
//! })
//! .unwrap();
//! ```
#![warn(
    clippy::correctness,
    clippy::perf,
    clippy::pedantic,
    clippy::inline_always,
    clippy::missing_errors_doc,
    clippy::panic
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::doc_markdown
)]

pub mod batch;
pub mod config;
pub mod errors;
pub mod file_io;
pub mod paths;
pub mod pipelines;
