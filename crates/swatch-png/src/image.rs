/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::decoder::PngInfo;

/// A decoded image, metadata plus row major RGBA pixels
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PngImage
{
    info:   PngInfo,
    pixels: Vec<[u8; 4]>
}

impl PngImage
{
    pub fn new(info: PngInfo, pixels: Vec<[u8; 4]>) -> PngImage
    {
        PngImage { info, pixels }
    }

    pub const fn info(&self) -> &PngInfo
    {
        &self.info
    }

    pub const fn width(&self) -> u32
    {
        self.info.width
    }

    pub const fn height(&self) -> u32
    {
        self.info.height
    }

    pub const fn depth(&self) -> u8
    {
        self.info.depth
    }

    /// Colour type byte of the source image (2 for RGB, 6 for RGBA)
    pub const fn color(&self) -> u8
    {
        self.info.color.to_int()
    }

    /// Pixels in row major order, always four channels
    pub fn data(&self) -> &[[u8; 4]]
    {
        &self.pixels
    }

    pub fn into_data(self) -> Vec<[u8; 4]>
    {
        self.pixels
    }
}
