/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Color channel inversion
//!
//! This is what the tools call "background removal". It does not segment anything,
//! every color sample becomes `255 - sample` and alpha is left alone.
//!
//! The image is first normalized to 8 bit RGBA, images without alpha get
//! an opaque alpha channel.
use log::debug;
use zune_core::bit_depth::{BitDepth, BitType};
use zune_core::colorspace::ColorSpace;
use zune_image::errors::ImageErrors;
use zune_image::image::Image;
use zune_image::traits::OperationsTrait;
use zune_imageprocs::invert::invert;

/// Invert the color channels of an image, keeping alpha intact
///
/// # Example
/// ```
/// use zune_core::colorspace::ColorSpace;
/// use zune_image::image::Image;
/// use zune_image::traits::OperationsTrait;
/// use mipforge_ops::invert::InvertColors;
///
/// let mut image = Image::fill(255_u8, ColorSpace::RGB, 4, 4);
/// InvertColors::new().execute(&mut image).unwrap();
/// assert_eq!(image.colorspace(), ColorSpace::RGBA);
/// ```
#[derive(Default, Copy, Clone, Debug)]
pub struct InvertColors;

impl InvertColors {
    #[must_use]
    pub fn new() -> InvertColors {
        Self
    }
}

impl OperationsTrait for InvertColors {
    fn name(&self) -> &'static str {
        "Invert Colors"
    }

    fn execute_impl(&self, image: &mut Image) -> Result<(), ImageErrors> {
        if image.depth() != BitDepth::Eight {
            debug!("Converting image depth from {:?} to 8 bit", image.depth());
            image.convert_depth(BitDepth::Eight)?;
        }
        if image.colorspace() != ColorSpace::RGBA {
            debug!("Converting colorspace from {:?} to RGBA", image.colorspace());
            image.convert_color(ColorSpace::RGBA)?;
        }
        // ignore_alpha leaves us with R, G and B only
        for channel in image.channels_mut(true) {
            invert(channel.reinterpret_as_mut::<u8>()?);
        }
        Ok(())
    }

    fn supported_colorspaces(&self) -> &'static [ColorSpace] {
        &[
            ColorSpace::RGB,
            ColorSpace::RGBA,
            ColorSpace::Luma,
            ColorSpace::LumaA
        ]
    }

    fn supported_types(&self) -> &'static [BitType] {
        &[BitType::U8, BitType::U16, BitType::F32]
    }
}
