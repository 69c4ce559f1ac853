/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use mipforge::config::MipmapConfig;
use mipforge::errors::MipforgeErrors;
use mipforge::pipelines::generate_mipmaps;
use mipforge_ops::mipmap::DensityTable;
use zune_core::colorspace::ColorSpace;

use crate::{hash_file, reopen, write_image};

#[test]
fn default_densities_at_48() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "TicTacToe.png", 64, 64, ColorSpace::RGBA);

    let config = MipmapConfig {
        input,
        output_dir: dir.path().join("nested/resized_images"),
        ..MipmapConfig::default()
    };
    let mut printed = Vec::new();
    let written = generate_mipmaps(&config, |w| {
        printed.push(w.output.clone());
        Ok(())
    })
    .unwrap();

    let expected = [
        ("mdpi", 48),
        ("hdpi", 72),
        ("xhdpi", 96),
        ("xxhdpi", 144),
        ("xxxhdpi", 192)
    ];
    assert_eq!(written.len(), expected.len());
    assert_eq!(printed.len(), expected.len());

    for (density, side) in expected {
        let path = config.output_dir.join(format!("mipmap-{density}.png"));
        assert!(printed.contains(&path), "{path:?} not reported");
        assert_eq!(reopen(&path).dimensions(), (side, side));
    }
}

#[test]
fn mipmaps_are_reproducible() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "icon.png", 40, 25, ColorSpace::RGB);

    let mut table = DensityTable::new();
    table.insert("hdpi", 1.5).unwrap();

    let run = |out: &str| {
        let config = MipmapConfig {
            input: input.clone(),
            output_dir: dir.path().join(out),
            base_size: 10,
            densities: table.clone(),
            ..MipmapConfig::default()
        };
        generate_mipmaps(&config, |_| Ok(())).unwrap();
        hash_file(&config.output_dir.join("mipmap-hdpi.png"))
    };

    assert_eq!(run("first"), run("second"));
}

#[test]
fn missing_input_creates_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let config = MipmapConfig {
        input: dir.path().join("TicTacToe.png"),
        output_dir: dir.path().join("resized_images"),
        ..MipmapConfig::default()
    };
    assert!(matches!(
        generate_mipmaps(&config, |_| Ok(())),
        Err(MipforgeErrors::InputNotFound(_))
    ));
    assert!(!config.output_dir.exists());
}
