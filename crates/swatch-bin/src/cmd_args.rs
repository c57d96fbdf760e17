/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command
{
    Command::new("swatch")
        .about("Decode png images from files or https urls and report their average colour")
        .arg(Arg::new("in")
            .short('i')
            .help("Input file or https url to read data from")
            .long("input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("mean")
            .long("mean")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Print the average RGBA colour of each image"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help_heading("OPERATIONS")
            .help("Print image metadata as json without decoding pixels")
            .conflicts_with("mean"))
        .arg(Arg::new("verify-crc")
            .long("verify-crc")
            .action(ArgAction::SetTrue)
            .help_heading("ADVANCED")
            .help("Verify the checksum of every png chunk"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .help_heading("ADVANCED")
            .help("Refuse images wider than this")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("max-height")
            .long("max-height")
            .help_heading("ADVANCED")
            .help("Refuse images taller than this")
            .value_parser(value_parser!(usize))
            .default_value("131072"))
        .arg(Arg::new("timeout")
            .long("timeout")
            .help_heading("ADVANCED")
            .help("Give up on https requests after this many seconds")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
}
