/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A png decoder for 8 bit truecolor images
//!
//! This decodes non interlaced, 8 bit RGB and RGBA png images
//! and refuses everything else with a descriptive error instead of
//! approximating it.
//!
//! # Usage
//!
//! #### Decode to RGBA pixels
//!
//! RGB images gain an opaque alpha channel, so every pixel
//! is four bytes.
//!
//!```no_run
//! use swatch_png::PngDecoder;
//! let mut decoder = PngDecoder::new(&[]);
//!
//! let image = decoder.decode().unwrap();
//! println!("{}x{}", image.width(), image.height());
//! ```
//!
//! #### Decode to raw bytes
//!
//! The reconstructed samples, three or four bytes per pixel depending on
//! the source colour type.
//!
//!```no_run
//! use swatch_png::PngDecoder;
//! let mut decoder = PngDecoder::new(&[]);
//!
//! let pixels = decoder.decode_raw().unwrap();
//! ```
//!
//! # Extracting metadata
//!
//! [`PngDecoder::decode_headers`] walks chunks up to IHDR without decompressing
//! anything, after which [`PngDecoder::info`] returns the image metadata.
//!
//! # Checksums
//!
//! Chunk CRCs are trusted by default, enable verification with
//! [`PngOptions::set_confirm_crc`].
//!
pub use decoder::{PngDecoder, PngInfo};
pub use enums::{FilterMethod, PngColor};
pub use filters::{paeth, reconstruct};
pub use image::PngImage;
pub use options::PngOptions;

mod constants;
#[cfg(feature = "crc")]
mod crc;
mod decoder;
mod enums;
pub mod error;
mod filters;
mod headers;
mod image;
mod options;
