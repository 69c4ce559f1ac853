/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! User facing output of the tools
use std::io::Write;

use mipforge::errors::MipforgeErrors;
use mipforge::pipelines::WrittenImage;

/// Which confirmation line a tool prints for every written file
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Confirmation {
    Enhanced,
    Resized,
    Processed
}

impl Confirmation {
    pub fn line(self, written: &WrittenImage) -> String {
        match self {
            Confirmation::Enhanced => format!(
                "Image enhanced to {}x{} pixels.",
                written.width, written.height
            ),
            Confirmation::Resized => {
                format!("Resized image saved at: {}", written.output.display())
            }
            Confirmation::Processed => {
                format!("Processed image saved at: {}", written.output.display())
            }
        }
    }
}

/// Prints a confirmation per file, or a JSON summary once everything is written
pub struct Reporter<W: Write> {
    out:          W,
    json:         bool,
    confirmation: Confirmation
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, json: bool, confirmation: Confirmation) -> Reporter<W> {
        Reporter {
            out,
            json,
            confirmation
        }
    }

    /// Called as soon as a file is on disk
    pub fn written(&mut self, written: &WrittenImage) -> Result<(), MipforgeErrors> {
        if !self.json {
            writeln!(self.out, "{}", self.confirmation.line(written))?;
        }
        Ok(())
    }

    /// Called once the whole run succeeded
    pub fn finish(&mut self, all: &[WrittenImage]) -> Result<(), MipforgeErrors> {
        if self.json {
            let summary = serde_json::to_string_pretty(all).map_err(std::io::Error::other)?;
            writeln!(self.out, "{summary}")?;
        }
        Ok(())
    }
}
