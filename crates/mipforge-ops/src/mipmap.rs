/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Mipmap target sizes
//!
//! A mipmap here is one pre-scaled copy of a square asset, named after a display density.
//! Sizes are `floor(base_size * scale)` for both sides.
use core::fmt::{Debug, Display, Formatter};

/// Errors from building density tables or mipmap targets
#[derive(Clone, PartialEq)]
pub enum MipmapErrors {
    /// A density had a scale that is zero, negative or not finite
    InvalidScale(String, f32),
    /// A density produced a zero sized mipmap
    ZeroSized(String, f32)
}

impl Debug for MipmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            MipmapErrors::InvalidScale(name, scale) => {
                writeln!(f, "Density {name:?} has an invalid scale factor {scale}")
            }
            MipmapErrors::ZeroSized(name, scale) => {
                writeln!(f, "Density {name:?} with scale {scale} gives a zero sized image")
            }
        }
    }
}

impl Display for MipmapErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for MipmapErrors {}

/// A named density and the factor it scales the base size by
#[derive(Clone, Debug, PartialEq)]
pub struct Density {
    pub name:  String,
    pub scale: f32
}

/// An ordered set of densities
///
/// Order matters only for the order outputs are produced in.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityTable {
    densities: Vec<Density>
}

impl DensityTable {
    /// Create an empty table
    pub fn new() -> DensityTable {
        DensityTable {
            densities: Vec::new()
        }
    }

    /// Add a density, replacing the scale of an existing one with the same name
    pub fn insert(&mut self, name: &str, scale: f32) -> Result<(), MipmapErrors> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(MipmapErrors::InvalidScale(name.to_string(), scale));
        }
        match self.densities.iter_mut().find(|d| d.name == name) {
            Some(existing) => existing.scale = scale,
            None => self.densities.push(Density {
                name: name.to_string(),
                scale
            })
        }
        Ok(())
    }

    pub fn densities(&self) -> &[Density] {
        &self.densities
    }

    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }
}

impl Default for DensityTable {
    /// The Android launcher icon densities, mdpi through xxxhdpi
    fn default() -> Self {
        let densities = [
            ("mdpi", 1.0),
            ("hdpi", 1.5),
            ("xhdpi", 2.0),
            ("xxhdpi", 3.0),
            ("xxxhdpi", 4.0)
        ];
        DensityTable {
            densities: densities
                .iter()
                .map(|(name, scale)| Density {
                    name:  (*name).to_string(),
                    scale: *scale
                })
                .collect()
        }
    }
}

/// Size of a single mipmap output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MipmapTarget {
    pub density: String,
    pub width:   usize,
    pub height:  usize
}

impl MipmapTarget {
    /// File name this mipmap is written to, `mipmap-{density}.png`
    pub fn file_name(&self) -> String {
        format!("mipmap-{}.png", self.density)
    }
}

/// Compute the output dimensions for every density in `densities`
///
/// Both sides are `floor(base_size * scale)`, results keep the table's order.
///
/// # Example
/// ```
/// use mipforge_ops::mipmap::{generate_mipmap_dimensions, DensityTable};
///
/// let targets = generate_mipmap_dimensions(48, &DensityTable::default()).unwrap();
/// assert_eq!(targets[1].density, "hdpi");
/// assert_eq!((targets[1].width, targets[1].height), (72, 72));
/// ```
pub fn generate_mipmap_dimensions(
    base_size: usize, densities: &DensityTable
) -> Result<Vec<MipmapTarget>, MipmapErrors> {
    densities
        .densities()
        .iter()
        .map(|density| {
            if !density.scale.is_finite() || density.scale <= 0.0 {
                return Err(MipmapErrors::InvalidScale(
                    density.name.clone(),
                    density.scale
                ));
            }
            // f64 keeps sizes like 48 * 1.5 exact before flooring
            let side = (base_size as f64 * f64::from(density.scale)).floor() as usize;

            if side == 0 {
                return Err(MipmapErrors::ZeroSized(density.name.clone(), density.scale));
            }
            Ok(MipmapTarget {
                density: density.name.clone(),
                width:   side,
                height:  side
            })
        })
        .collect()
}
