/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::write;

use mipforge::config::{EnhanceConfig, TargetSize};
use mipforge::errors::MipforgeErrors;
use mipforge::pipelines::enhance;
use zune_core::colorspace::ColorSpace;

use crate::{reopen, write_image};

#[test]
fn enhance_writes_exact_size() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "TicTacToe.png", 30, 20, ColorSpace::RGB);

    let config = EnhanceConfig {
        input,
        output: dir.path().join("enhanced_image.png"),
        size: TargetSize::new(256, 100).unwrap(),
        ..EnhanceConfig::default()
    };
    let written = enhance(&config).unwrap();

    assert_eq!((written.width, written.height), (256, 100));
    assert_eq!(reopen(&config.output).dimensions(), (256, 100));
}

#[test]
fn enhance_default_target_is_1024() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_image(dir.path(), "TicTacToe.png", 16, 16, ColorSpace::RGBA);

    let config = EnhanceConfig {
        input,
        output: dir.path().join("enhanced_image.png"),
        ..EnhanceConfig::default()
    };
    enhance(&config).unwrap();

    assert_eq!(reopen(&config.output).dimensions(), (1024, 1024));
}

#[test]
fn enhance_reports_missing_and_undecodable_inputs() {
    let dir = tempfile::tempdir().unwrap();

    let missing = EnhanceConfig {
        input: dir.path().join("TicTacToe.png"),
        output: dir.path().join("out.png"),
        ..EnhanceConfig::default()
    };
    assert!(matches!(
        enhance(&missing),
        Err(MipforgeErrors::InputNotFound(_))
    ));

    let text = dir.path().join("notes.png");
    write(&text, b"definitely not a png").unwrap();

    let garbage = EnhanceConfig {
        input: text,
        output: dir.path().join("out.png"),
        ..EnhanceConfig::default()
    };
    assert!(matches!(
        enhance(&garbage),
        Err(MipforgeErrors::InvalidFormat(_, _))
    ));
    assert!(!dir.path().join("out.png").exists());
}
