/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{create_dir, read_dir, write};

use mipforge::batch::BatchTarget;
use mipforge::config::BackgroundConfig;
use mipforge::errors::MipforgeErrors;
use mipforge::pipelines::remove_background;
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

use crate::{reopen, write_image};

#[test]
fn single_file_is_written_next_to_source() {
    let dir = tempfile::tempdir().unwrap();
    let red: Vec<u8> = [255, 0, 0, 255].repeat(16);
    let input = dir.path().join("red.png");
    Image::from_u8(&red, 4, 4, ColorSpace::RGBA)
        .save(&input)
        .unwrap();

    let config = BackgroundConfig {
        target: BatchTarget::SingleFile(input)
    };
    let written = remove_background(&config, |_| Ok(())).unwrap();

    let output = dir.path().join("red_processed.png");
    assert_eq!(written[0].output, output);

    let image = reopen(&output);
    assert_eq!(image.dimensions(), (4, 4));
    assert_eq!(image.colorspace(), ColorSpace::RGBA);
    assert_eq!(image.flatten_to_u8()[0], [0, 255, 255, 255].repeat(16));
}

#[test]
fn rgb_input_gets_alpha_and_inverted_colors() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "photo.png", 9, 5, ColorSpace::RGB);
    let source = reopen(&input).flatten_to_u8()[0].clone();

    let config = BackgroundConfig {
        target: BatchTarget::SingleFile(input)
    };
    remove_background(&config, |_| Ok(())).unwrap();

    let processed = reopen(&dir.path().join("photo_processed.png"));
    let pixels = &processed.flatten_to_u8()[0];

    for (rgb, rgba) in source.chunks_exact(3).zip(pixels.chunks_exact(4)) {
        assert_eq!([255 - rgb[0], 255 - rgb[1], 255 - rgb[2], 255], rgba);
    }
}

#[test]
fn upper_case_extension_is_preserved() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "PHOTO.PNG", 6, 3, ColorSpace::RGB);

    let config = BackgroundConfig {
        target: BatchTarget::SingleFile(input)
    };
    let written = remove_background(&config, |_| Ok(())).unwrap();

    let output = dir.path().join("PHOTO_processed.PNG");
    assert_eq!(written[0].output, output);
    assert_eq!(reopen(&output).dimensions(), (6, 3));
}

#[test]
fn folder_mode_processes_regular_files_only() {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "a.png", 8, 8, ColorSpace::RGB);
    write_image(dir.path(), "b.png", 3, 12, ColorSpace::RGBA);
    create_dir(dir.path().join("sub")).unwrap();
    write_image(&dir.path().join("sub"), "c.png", 4, 4, ColorSpace::RGB);

    let config = BackgroundConfig {
        target: BatchTarget::Folder(dir.path().to_path_buf())
    };
    let written = remove_background(&config, |_| Ok(())).unwrap();

    assert_eq!(written.len(), 2);
    assert!(dir.path().join("a_processed.png").exists());
    assert!(dir.path().join("b_processed.png").exists());
    assert!(!dir.path().join("sub/c_processed.png").exists());
    assert_eq!(reopen(&dir.path().join("b_processed.png")).dimensions(), (3, 12));
}

#[test]
fn empty_folder_produces_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let config = BackgroundConfig {
        target: BatchTarget::Folder(dir.path().to_path_buf())
    };
    assert!(remove_background(&config, |_| Ok(())).unwrap().is_empty());
    assert_eq!(read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn bad_file_aborts_the_rest_of_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    write_image(dir.path(), "a.png", 4, 4, ColorSpace::RGB);
    write(dir.path().join("b.txt"), b"hello").unwrap();
    write_image(dir.path(), "c.png", 4, 4, ColorSpace::RGB);

    let config = BackgroundConfig {
        target: BatchTarget::Folder(dir.path().to_path_buf())
    };
    let mut reported = 0;
    let result = remove_background(&config, |_| {
        reported += 1;
        Ok(())
    });

    assert!(matches!(result, Err(MipforgeErrors::InvalidFormat(_, _))));
    assert_eq!(reported, 1);
    // files are handled in name order, a.png was done before b.txt failed
    assert!(dir.path().join("a_processed.png").exists());
    assert!(!dir.path().join("c_processed.png").exists());
}
