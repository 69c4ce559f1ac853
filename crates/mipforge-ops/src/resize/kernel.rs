/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Separable lanczos resampling
//!
//! Resampling is done in two passes, first every row is convolved horizontally
//! into an `f32` scratch buffer of `out_width * in_height`, then every column of that
//! buffer is convolved vertically into the output.
//!
//! Weights for each output coordinate are computed once per axis and
//! normalized to sum to one, so flat regions stay flat.
use core::f32::consts::PI;

/// Lobes of the lanczos window
const LANCZOS_LOBES: usize = 3;

/// A pixel sample that can be moved in and out of the `f32` domain
pub(crate) trait Sample: Copy {
    fn to_f32(self) -> f32;
    /// Round and clamp to the type's valid range
    fn from_f32(value: f32) -> Self;
}

impl Sample for u8 {
    #[inline(always)]
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, 255.0) as u8
    }
}

impl Sample for u16 {
    #[inline(always)]
    fn to_f32(self) -> f32 {
        f32::from(self)
    }
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value.round().clamp(0.0, 65535.0) as u16
    }
}

impl Sample for f32 {
    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        // f32 images are normalized to 0..1, ringing may push past that
        value.clamp(0.0, 1.0)
    }
}

fn sinc(x: f32) -> f32 {
    if x == 0.0 {
        return 1.0;
    }
    let a = x * PI;
    a.sin() / a
}

fn lanczos_kernel<const LOBES: usize>(x: f32) -> f32 {
    let lobes = LOBES as f32;

    if x.abs() < lobes {
        sinc(x) * sinc(x / lobes)
    } else {
        0.0
    }
}

/// Contributions of the input to a single output coordinate
#[derive(Clone, Debug)]
pub(crate) struct ConvKernel {
    pub start:   usize,
    pub weights: Vec<f32>
}

pub(crate) struct PrecomputedKernels {
    pub in_width:   usize,
    pub in_height:  usize,
    pub out_width:  usize,
    pub out_height: usize,
    pub horizontal: Vec<ConvKernel>,
    pub vertical:   Vec<ConvKernel>
}

impl PrecomputedKernels {
    pub fn new(in_width: usize, in_height: usize, out_width: usize, out_height: usize) -> Self {
        PrecomputedKernels {
            in_width,
            in_height,
            out_width,
            out_height,
            horizontal: precompute_kernels(in_width, out_width),
            vertical: precompute_kernels(in_height, out_height)
        }
    }
}

/// Compute the kernel for every output position along one axis
///
/// Output pixel `i` is centered at `(i + 0.5) * ratio` in input space, when shrinking
/// the window is stretched by the ratio.
pub(crate) fn precompute_kernels(in_size: usize, out_size: usize) -> Vec<ConvKernel> {
    if in_size == 0 || out_size == 0 {
        return Vec::new();
    }
    let ratio = in_size as f32 / out_size as f32;
    let scale = ratio.max(1.0);
    let support = LANCZOS_LOBES as f32 * scale;

    (0..out_size)
        .map(|out_pos| {
            let center = (out_pos as f32 + 0.5) * ratio;

            let start = ((center - support).floor().max(0.0) as usize).min(in_size - 1);
            let end = ((center + support).ceil() as usize).clamp(start + 1, in_size);

            let mut weights: Vec<f32> = (start..end)
                .map(|pos| lanczos_kernel::<LANCZOS_LOBES>((pos as f32 + 0.5 - center) / scale))
                .collect();

            let sum: f32 = weights.iter().sum();

            if sum.abs() > f32::EPSILON {
                weights.iter_mut().for_each(|w| *w /= sum);
            } else {
                // degenerate window, fall back to the nearest pixel
                let nearest = (center as usize).clamp(start, end - 1);
                weights.iter_mut().for_each(|w| *w = 0.0);
                weights[nearest - start] = 1.0;
            }
            ConvKernel {
                start,
                weights
            }
        })
        .collect()
}

#[inline]
fn convolve_row<T: Sample>(in_row: &[T], kernel: &ConvKernel) -> f32 {
    in_row[kernel.start..kernel.start + kernel.weights.len()]
        .iter()
        .zip(kernel.weights.iter())
        .map(|(pixel, weight)| pixel.to_f32() * weight)
        .sum()
}

/// Resample a single channel
///
/// # Panics
/// - `in_channel.len()` is not `in_width * in_height`
/// - `out_channel.len()` is not `out_width * out_height`
pub(crate) fn resample_separable<T: Sample>(
    in_channel: &[T], out_channel: &mut [T], kernels: &PrecomputedKernels
) {
    let PrecomputedKernels {
        in_width,
        in_height,
        out_width,
        out_height,
        ..
    } = *kernels;

    assert_eq!(in_channel.len(), in_width * in_height);
    assert_eq!(out_channel.len(), out_width * out_height);

    if in_width == 0 || out_width == 0 {
        return;
    }
    if in_width == out_width && in_height == out_height {
        out_channel.copy_from_slice(in_channel);
        return;
    }

    // PASS 1: horizontal
    let mut scratch = vec![0.0_f32; out_width * in_height];

    for (in_row, scratch_row) in in_channel
        .chunks_exact(in_width)
        .zip(scratch.chunks_exact_mut(out_width))
    {
        for (out_pixel, kernel) in scratch_row.iter_mut().zip(kernels.horizontal.iter()) {
            *out_pixel = convolve_row(in_row, kernel);
        }
    }

    // PASS 2: vertical
    for (out_row, kernel) in out_channel
        .chunks_exact_mut(out_width)
        .zip(kernels.vertical.iter())
    {
        let rows = scratch
            .chunks_exact(out_width)
            .skip(kernel.start)
            .zip(kernel.weights.iter());

        let mut acc = vec![0.0_f32; out_width];

        for (scratch_row, weight) in rows {
            for (a, s) in acc.iter_mut().zip(scratch_row.iter()) {
                *a += s * weight;
            }
        }
        for (out_pixel, value) in out_row.iter_mut().zip(acc) {
            *out_pixel = T::from_f32(value);
        }
    }
}
