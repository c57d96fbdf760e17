/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Options influencing how the decoder treats input
///
/// Defaults allow images up to `1 << 17` pixels in each dimension,
/// trust chunk CRCs and verify the zlib adler checksum.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngOptions
{
    pub(crate) max_width:     usize,
    pub(crate) max_height:    usize,
    pub(crate) confirm_crc:   bool,
    pub(crate) confirm_adler: bool
}

impl Default for PngOptions
{
    fn default() -> Self
    {
        Self {
            max_width:     1 << 17,
            max_height:    1 << 17,
            confirm_crc:   false,
            confirm_adler: true
        }
    }
}

impl PngOptions
{
    /// Set the maximum width an image may declare before
    /// the decoder refuses it
    pub const fn set_max_width(mut self, width: usize) -> Self
    {
        self.max_width = width;
        self
    }
    /// Set the maximum height an image may declare before
    /// the decoder refuses it
    pub const fn set_max_height(mut self, height: usize) -> Self
    {
        self.max_height = height;
        self
    }
    /// Whether to verify the CRC stored after every chunk.
    ///
    /// Only has an effect when the `crc` feature is enabled
    pub const fn set_confirm_crc(mut self, yes: bool) -> Self
    {
        self.confirm_crc = yes;
        self
    }
    /// Whether the inflate decoder should verify the adler32
    /// checksum trailing the zlib stream
    pub const fn set_confirm_adler(mut self, yes: bool) -> Self
    {
        self.confirm_adler = yes;
        self
    }

    pub const fn max_width(&self) -> usize
    {
        self.max_width
    }
    pub const fn max_height(&self) -> usize
    {
        self.max_height
    }
    pub const fn confirm_crc(&self) -> bool
    {
        self.confirm_crc
    }
    pub const fn confirm_adler(&self) -> bool
    {
        self.confirm_adler
    }
}
