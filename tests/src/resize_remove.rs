/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::create_dir;

use mipforge::batch::BatchTarget;
use mipforge::config::{ResizeRemoveConfig, TargetSize};
use mipforge::errors::MipforgeErrors;
use mipforge::pipelines::resize_and_remove;
use mipforge_ops::resize::ResizeFilter;
use zune_core::colorspace::ColorSpace;
use zune_image::image::Image;

use crate::{reopen, write_image};

fn config(target: BatchTarget, output_dir: std::path::PathBuf) -> ResizeRemoveConfig {
    ResizeRemoveConfig {
        target,
        output_dir,
        size: TargetSize::new(20, 10).unwrap(),
        filter: ResizeFilter::Lanczos3
    }
}

#[test]
fn folder_outputs_keep_file_names() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("in");
    create_dir(&input_dir).unwrap();

    write_image(&input_dir, "one.png", 50, 50, ColorSpace::RGB);
    write_image(&input_dir, "two.png", 7, 90, ColorSpace::RGBA);
    write_image(&input_dir, "three.png", 1, 1, ColorSpace::Luma);
    create_dir(input_dir.join("skipped")).unwrap();

    let out_dir = dir.path().join("out/deeper");
    let written = resize_and_remove(
        &config(BatchTarget::Folder(input_dir), out_dir.clone()),
        |_| Ok(())
    )
    .unwrap();

    assert_eq!(written.len(), 3);

    for name in ["one.png", "two.png", "three.png"] {
        let image = reopen(&out_dir.join(name));
        assert_eq!(image.dimensions(), (20, 10));
        assert_eq!(image.colorspace(), ColorSpace::RGBA);
    }
    assert!(!out_dir.join("skipped").exists());
}

#[test]
fn upper_case_extensions_in_a_folder() {
    let dir = tempfile::tempdir().unwrap();
    let input_dir = dir.path().join("in");
    create_dir(&input_dir).unwrap();

    write_image(&input_dir, "A.PNG", 12, 12, ColorSpace::RGB);
    write_image(&input_dir, "b.Png", 9, 4, ColorSpace::RGBA);

    let out_dir = dir.path().join("out");
    let written = resize_and_remove(
        &config(BatchTarget::Folder(input_dir), out_dir.clone()),
        |_| Ok(())
    )
    .unwrap();

    assert_eq!(written.len(), 2);
    for name in ["A.PNG", "b.Png"] {
        assert_eq!(reopen(&out_dir.join(name)).dimensions(), (20, 10));
    }
}

#[test]
fn flat_color_is_resized_then_inverted() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("flat.png");
    Image::from_u8(&[30, 60, 90].repeat(33 * 17), 33, 17, ColorSpace::RGB)
        .save(&input)
        .unwrap();

    let out_dir = dir.path().join("out");
    resize_and_remove(&config(BatchTarget::SingleFile(input), out_dir.clone()), |_| Ok(())).unwrap();

    let image = reopen(&out_dir.join("flat.png"));
    assert_eq!(image.flatten_to_u8()[0], [225, 195, 165, 255].repeat(20 * 10));
}

#[test]
fn missing_folder_is_reported_before_creating_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");

    let result = resize_and_remove(
        &config(BatchTarget::Folder(dir.path().join("missing")), out_dir.clone()),
        |_| Ok(())
    );

    assert!(matches!(result, Err(MipforgeErrors::InputNotFound(_))));
    assert!(!out_dir.exists());
}
