/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{BufRead, ErrorKind, Write};

use mipforge::errors::MipforgeErrors;

pub static MODE_PROMPT: &str =
    "Enter '1' to process a single image or '2' to process images in a folder: ";
pub static IMAGE_PROMPT: &str = "Enter the path to the input image: ";
pub static FOLDER_PROMPT: &str = "Enter the path to the folder containing images: ";
pub static OUTPUT_DIRECTORY_PROMPT: &str = "Enter the path to the output directory: ";
pub static OUTPUT_FOLDER_PROMPT: &str = "Enter the path to the output folder: ";
pub static WIDTH_PROMPT: &str = "Enter the target width: ";
pub static HEIGHT_PROMPT: &str = "Enter the target height: ";

pub static INVALID_CHOICE: &str = "Invalid choice. Please enter either '1' or '2'.";

/// Asks questions on `output` and reads one line answers from `input`
pub struct Prompter<R: BufRead, W: Write> {
    input:  R,
    output: W
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Prompter<R, W> {
        Prompter { input, output }
    }

    /// Print `question` without a newline and wait for an answer
    ///
    /// The line terminator is stripped, anything else is returned as typed.
    /// Running out of input is an error.
    pub fn ask(&mut self, question: &str) -> Result<String, MipforgeErrors> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut answer = String::new();

        if self.input.read_line(&mut answer)? == 0 {
            return Err(std::io::Error::new(
                ErrorKind::UnexpectedEof,
                format!("No answer to {:?}", question.trim())
            )
            .into());
        }
        Ok(answer.trim_end_matches(['\n', '\r']).to_string())
    }

    /// Use `given` when the command line provided it, otherwise ask
    pub fn answer_or_ask(
        &mut self, given: Option<&String>, question: &str
    ) -> Result<String, MipforgeErrors> {
        match given {
            Some(answer) => Ok(answer.clone()),
            None => self.ask(question)
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }
}
