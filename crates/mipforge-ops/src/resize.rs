/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Resize an image to exact dimensions
//!
//! The output always has exactly the requested width and height,
//! the aspect ratio of the source is not preserved and nothing is cropped.
//!
//! Two filters are offered
//! - [`ResizeFilter::Lanczos3`]: a separable windowed sinc filter, the default.
//!   When shrinking, the filter support is widened by the scale ratio so every
//!   source pixel contributes to the output, which keeps aliasing low.
//! - [`ResizeFilter::Bilinear`]: forwards to `zune_imageprocs`' bilinear resize.
use log::trace;
use zune_core::bit_depth::BitType;
use zune_core::colorspace::ColorSpace;
use zune_image::channel::Channel;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;
use zune_imageprocs::resize::{Resize as BilinearResize, ResizeMethod};

use crate::resize::kernel::{resample_separable, PrecomputedKernels};

mod kernel;

/// Resampling filter used when resizing
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum ResizeFilter {
    /// Windowed sinc with a lobe count of 3
    #[default]
    Lanczos3,
    /// Linear interpolation between the four nearest pixels
    Bilinear
}

impl ResizeFilter {
    /// Name of the filter on the command line
    pub const fn name(self) -> &'static str {
        match self {
            ResizeFilter::Lanczos3 => "lanczos",
            ResizeFilter::Bilinear => "bilinear"
        }
    }
}

/// Resize an image to a new width and height
///
/// # Example
/// Stretch a 100x50 image into a 64x64 square
/// ```
/// use zune_core::colorspace::ColorSpace;
/// use zune_image::image::Image;
/// use zune_image::traits::OperationsTrait;
/// use mipforge_ops::resize::{Resize, ResizeFilter};
///
/// let mut image = Image::fill(128_u8, ColorSpace::RGBA, 100, 50);
/// Resize::new(64, 64, ResizeFilter::Lanczos3).execute(&mut image).unwrap();
/// assert_eq!(image.dimensions(), (64, 64));
/// ```
#[derive(Copy, Clone, Debug)]
pub struct Resize {
    new_width:  usize,
    new_height: usize,
    filter:     ResizeFilter
}

impl Resize {
    /// Create a new resize operation
    ///
    /// # Arguments
    /// - new_width: The width of the resized image, must be greater than zero
    /// - new_height: The height of the resized image, must be greater than zero
    /// - filter: The resampling filter to use
    #[must_use]
    pub fn new(new_width: usize, new_height: usize, filter: ResizeFilter) -> Resize {
        Resize {
            new_width,
            new_height,
            filter
        }
    }
}

impl OperationsTrait for Resize {
    fn name(&self) -> &'static str {
        "Resize"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if self.new_width == 0 || self.new_height == 0 {
            return Err(ImageErrors::GenericString(format!(
                "Cannot resize to {}x{}, dimensions must be greater than zero",
                self.new_width, self.new_height
            )));
        }
        if self.filter == ResizeFilter::Bilinear {
            return BilinearResize::new(self.new_width, self.new_height, ResizeMethod::Bilinear)
                .execute(image);
        }

        let (old_width, old_height) = image.dimensions();
        let depth = image.depth();
        let new_length = self.new_width * self.new_height * depth.size_of();

        trace!(
            "Lanczos resize from {}x{} to {}x{}",
            old_width,
            old_height,
            self.new_width,
            self.new_height
        );

        // kernels only depend on geometry, share them between channels
        let kernels = PrecomputedKernels::new(
            old_width,
            old_height,
            self.new_width,
            self.new_height
        );

        for channel in image.channels_mut(false) {
            let mut new_channel =
                Channel::new_with_length_and_type(new_length, channel.get_type_id());

            match depth.bit_type() {
                BitType::U8 => resample_separable::<u8>(
                    channel.reinterpret_as()?,
                    new_channel.reinterpret_as_mut()?,
                    &kernels
                ),
                BitType::U16 => resample_separable::<u16>(
                    channel.reinterpret_as()?,
                    new_channel.reinterpret_as_mut()?,
                    &kernels
                ),
                BitType::F32 => resample_separable::<f32>(
                    channel.reinterpret_as()?,
                    new_channel.reinterpret_as_mut()?,
                    &kernels
                ),
                d => return Err(ImageErrors::ImageOperationNotImplemented(self.name(), d))
            }
            *channel = new_channel;
        }
        image.set_dimensions(self.new_width, self.new_height);

        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::RGB,
            ColorSpace::RGBA,
            ColorSpace::Luma,
            ColorSpace::LumaA,
            ColorSpace::YCbCr,
            ColorSpace::BGR,
            ColorSpace::BGRA,
            ColorSpace::CMYK
        ]
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}
