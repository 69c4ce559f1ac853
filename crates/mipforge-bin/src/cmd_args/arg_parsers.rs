/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use mipforge::errors::MipforgeErrors;
use mipforge_ops::resize::ResizeFilter;

#[derive(Copy, Clone, Debug)]
pub enum IResizeFilter {
    Lanczos,
    Bilinear
}

impl IResizeFilter {
    pub const fn to_resize_filter(self) -> ResizeFilter {
        match self {
            IResizeFilter::Lanczos => ResizeFilter::Lanczos3,
            IResizeFilter::Bilinear => ResizeFilter::Bilinear
        }
    }
}

impl ValueEnum for IResizeFilter {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Lanczos, Self::Bilinear]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Lanczos => PossibleValue::new(ResizeFilter::Lanczos3.name()),
            Self::Bilinear => PossibleValue::new(ResizeFilter::Bilinear.name())
        })
    }
}

/// Parse a `NAME=SCALE` density argument
///
/// Only the shape is checked here, the scale itself is validated when
/// the density table is built.
pub fn parse_density(value: &str) -> Result<(String, f32), String> {
    let invalid = || MipforgeErrors::InvalidDensitySpec(value.to_string()).to_string();

    let (name, scale) = value.split_once('=').ok_or_else(invalid)?;
    let name = name.trim();

    if name.is_empty() {
        return Err(invalid());
    }
    let scale = scale.trim().parse::<f32>().map_err(|_| invalid())?;

    Ok((name.to_string(), scale))
}
