/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(clippy::upper_case_acronyms, non_camel_case_types)]

/// Chunk types the decoder acts on, see table 5.3 of
/// the png spec, https://www.w3.org/TR/2003/REC-PNG-20031110/
///
/// Everything else is ancillary as far as we are concerned
/// and is skipped.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PngChunkType
{
    IHDR,
    PLTE,
    IDAT,
    IEND,
    unkn
}

impl PngChunkType
{
    pub fn from_tag(tag: &[u8; 4]) -> PngChunkType
    {
        match tag
        {
            b"IHDR" => Self::IHDR,
            b"PLTE" => Self::PLTE,
            b"IDAT" => Self::IDAT,
            b"IEND" => Self::IEND,
            _ => Self::unkn
        }
    }
}

/// Per scanline filter selector
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum FilterMethod
{
    None,
    Sub,
    Up,
    Average,
    Paeth
}

impl FilterMethod
{
    pub fn from_int(int: u8) -> Option<FilterMethod>
    {
        match int
        {
            0 => Some(FilterMethod::None),
            1 => Some(FilterMethod::Sub),
            2 => Some(FilterMethod::Up),
            3 => Some(FilterMethod::Average),
            4 => Some(FilterMethod::Paeth),
            _ => None
        }
    }
}

/// Colour types a png header may declare.
///
/// Only [`PngColor::RGB`] and [`PngColor::RGBA`] are decodable,
/// the rest exist so that rejections can say what they saw.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum PngColor
{
    Luma,
    Palette,
    LumaA,
    RGB,
    #[default]
    RGBA
}

impl PngColor
{
    /// Number of samples making up one pixel
    pub const fn num_components(self) -> usize
    {
        match self
        {
            PngColor::Luma | PngColor::Palette => 1,
            PngColor::LumaA => 2,
            PngColor::RGB => 3,
            PngColor::RGBA => 4
        }
    }
    /// The colour type byte as stored in IHDR
    pub const fn to_int(self) -> u8
    {
        match self
        {
            PngColor::Luma => 0,
            PngColor::RGB => 2,
            PngColor::Palette => 3,
            PngColor::LumaA => 4,
            PngColor::RGBA => 6
        }
    }
    pub const fn from_int(int: u8) -> Option<PngColor>
    {
        match int
        {
            0 => Some(Self::Luma),
            2 => Some(Self::RGB),
            3 => Some(Self::Palette),
            4 => Some(Self::LumaA),
            6 => Some(Self::RGBA),
            _ => None
        }
    }
}
