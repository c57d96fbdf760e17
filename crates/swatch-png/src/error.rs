/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when decoding a png
use core::fmt::{Debug, Display, Formatter};

use zune_inflate::errors::InflateDecodeErrors;

/// Errors that can occur when decoding a png image
///
/// Every variant is terminal, the decoder never hands out
/// a partially decoded image.
pub enum PngDecodeErrors
{
    /// The first eight bytes are not the png magic bytes
    InvalidSignature,
    /// A chunk declared more bytes than the buffer holds
    ///
    /// Fields are the chunk type, bytes requested and bytes left
    TruncatedInput([u8; 4], usize, usize),
    /// The image uses Adam7 interlacing
    InterlacedUnsupported,
    /// The image is an indexed (palette) image
    PaletteUnsupported,
    /// The image colour type is neither RGB nor RGBA
    UnsupportedColorType(u8),
    /// The image bit depth is not 8
    UnsupportedBitDepth(u8),
    /// zlib stream inside the IDAT chunks is corrupt
    DecompressionFailed(InflateDecodeErrors),
    /// Unknown scanline filter, fields are the filter byte and row
    UnsupportedFilter(u8, usize),
    /// IHDR chunk is malformed
    BadIhdr(&'static str),
    /// An image data or end chunk appeared before IHDR
    MissingHeader,
    /// The buffer ended before the IEND chunk
    MissingEndChunk,
    /// Dimension exceeds configured limit, fields are the dimension name,
    /// the limit and the value found
    TooLargeDimensions(&'static str, usize, usize),
    /// The decompressed stream is shorter than the image needs,
    /// fields are bytes expected and bytes found
    TooSmallImageData(usize, usize),
    /// Stored chunk CRC does not match the computed one
    BadCrc(u32, u32),
    /// Generic message
    Generic(&'static str)
}

impl Debug for PngDecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        match self
        {
            Self::InvalidSignature => writeln!(f, "Bad PNG signature, not a png"),
            Self::TruncatedInput(chunk, requested, remaining) =>
            {
                let name = core::str::from_utf8(chunk).unwrap_or("XXXX");
                writeln!(
                    f,
                    "Not enough bytes for chunk {name}, bytes requested are {requested}, but bytes present are {remaining}"
                )
            }
            Self::InterlacedUnsupported => writeln!(f, "Interlaced images are not supported"),
            Self::PaletteUnsupported => writeln!(f, "Indexed (palette) images are not supported"),
            Self::UnsupportedColorType(color) =>
            {
                writeln!(f, "Unsupported color type {color}, only RGB(2) and RGBA(6) are supported")
            }
            Self::UnsupportedBitDepth(depth) =>
            {
                writeln!(f, "Unsupported bit depth {depth}, only 8 bit images are supported")
            }
            Self::DecompressionFailed(err) => writeln!(f, "Could not decompress image data {err:?}"),
            Self::UnsupportedFilter(filter, row) =>
            {
                writeln!(f, "Unknown filter {filter} on scanline {row}")
            }
            Self::BadIhdr(reason) => writeln!(f, "Bad IHDR, {reason}"),
            Self::MissingHeader => writeln!(f, "Image data found before IHDR, corrupt PNG"),
            Self::MissingEndChunk => writeln!(f, "No IEND chunk found, corrupt or truncated PNG"),
            Self::TooLargeDimensions(dimension, expected, found) =>
            {
                writeln!(
                    f,
                    "Too large dimensions for {dimension}, {found} exceeds {expected}"
                )
            }
            Self::TooSmallImageData(expected, found) =>
            {
                writeln!(f, "Not enough pixels, expected {expected} but found {found}")
            }
            Self::BadCrc(expected, found) =>
            {
                writeln!(f, "CRC does not match, expected {expected} but found {found}")
            }
            Self::Generic(reason) => writeln!(f, "{reason}")
        }
    }
}

impl Display for PngDecodeErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for PngDecodeErrors {}

impl From<&'static str> for PngDecodeErrors
{
    fn from(value: &'static str) -> Self
    {
        Self::Generic(value)
    }
}

impl From<InflateDecodeErrors> for PngDecodeErrors
{
    fn from(value: InflateDecodeErrors) -> Self
    {
        Self::DecompressionFailed(value)
    }
}
