/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use swatch_image::swatch_png::PngOptions;
use swatch_image::FetchOptions;

/// What to do with every decoded input
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Operation {
    Describe,
    Mean,
    Probe
}

#[derive(Debug, Clone)]
pub struct CmdOptions {
    pub operation:     Operation,
    pub png_options:   PngOptions,
    pub fetch_options: FetchOptions
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            operation:     Operation::Describe,
            png_options:   PngOptions::default(),
            fetch_options: FetchOptions::default()
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if options.get_flag("mean") {
        cmd_options.operation = Operation::Mean;
    } else if options.get_flag("probe") {
        cmd_options.operation = Operation::Probe;
    }
    info!("Operation: {:?}", cmd_options.operation);

    // both have defaults
    let width = options.get_one::<usize>("max-width").copied().unwrap_or(1 << 17);
    let height = options.get_one::<usize>("max-height").copied().unwrap_or(1 << 17);

    cmd_options.png_options = cmd_options
        .png_options
        .set_max_width(width)
        .set_max_height(height);

    if options.value_source("verify-crc") == Some(ValueSource::CommandLine) {
        info!("Verifying chunk checksums");
        cmd_options.png_options = cmd_options.png_options.set_confirm_crc(true);
    }

    if let Some(seconds) = options.get_one::<u64>("timeout") {
        info!("Setting request timeout to {seconds} seconds");
        cmd_options.fetch_options = cmd_options
            .fetch_options
            .set_timeout(Some(Duration::from_secs(*seconds)));
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level;

    if options.get_flag("debug") {
        log_level = Level::Debug;
    } else if options.get_flag("trace") {
        log_level = Level::Trace;
    } else if options.get_flag("warn") {
        log_level = Level::Warn
    } else if options.get_flag("info") {
        log_level = Level::Info;
    } else {
        log_level = Level::Warn;
    }

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
