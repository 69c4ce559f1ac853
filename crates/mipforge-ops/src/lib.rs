/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Image operations used by the mipforge tools
//!
//! Every image-level routine here implements the `OperationsTrait` defined by zune-image,
//! so it can be executed on any decoded [`Image`](zune_image::image::Image).
//!
//! # Example
//! - Resize an image to 48x48 using a lanczos filter
//! ```
//! use zune_core::colorspace::ColorSpace;
//! use zune_image::image::Image;
//! use zune_image::traits::OperationsTrait;
//! use mipforge_ops::resize::{Resize, ResizeFilter};
//!
//! let mut image = Image::fill::<u8>(233, ColorSpace::RGB, 100, 100);
//! Resize::new(48, 48, ResizeFilter::Lanczos3).execute(&mut image).unwrap();
//! assert_eq!(image.dimensions(), (48, 48));
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
    clippy::needless_return,
    clippy::similar_names,
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]

pub mod invert;
pub mod mipmap;
pub mod resize;
