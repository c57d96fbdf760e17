/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{info, trace};

use crate::constants::IHDR_LENGTH;
use crate::decoder::PngChunk;
use crate::enums::PngColor;
use crate::error::PngDecodeErrors;
use crate::PngDecoder;

impl<'a> PngDecoder<'a>
{
    pub(crate) fn parse_ihdr(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors>
    {
        if self.seen_hdr
        {
            return Err(PngDecodeErrors::BadIhdr("Multiple IHDR, corrupt PNG"));
        }

        if chunk.length != IHDR_LENGTH
        {
            return Err(PngDecodeErrors::BadIhdr("bad IHDR length"));
        }

        let mut ihdr = [0_u8; IHDR_LENGTH];
        ihdr.copy_from_slice(self.stream.peek_at(0, IHDR_LENGTH)?);

        let width = u32::from_be_bytes([ihdr[0], ihdr[1], ihdr[2], ihdr[3]]);
        let height = u32::from_be_bytes([ihdr[4], ihdr[5], ihdr[6], ihdr[7]]);
        let depth = ihdr[8];
        let color = ihdr[9];
        let compression_method = ihdr[10];
        let filter_method = ihdr[11];
        let interlace_method = ihdr[12];

        if width == 0 || height == 0
        {
            return Err(PngDecodeErrors::BadIhdr("Width or height cannot be zero"));
        }

        if width as usize > self.options.max_width
        {
            return Err(PngDecodeErrors::TooLargeDimensions(
                "width",
                self.options.max_width,
                width as usize
            ));
        }

        if height as usize > self.options.max_height
        {
            return Err(PngDecodeErrors::TooLargeDimensions(
                "height",
                self.options.max_height,
                height as usize
            ));
        }

        let color = match PngColor::from_int(color)
        {
            Some(c @ (PngColor::RGB | PngColor::RGBA)) => c,
            Some(PngColor::Palette) => return Err(PngDecodeErrors::PaletteUnsupported),
            _ => return Err(PngDecodeErrors::UnsupportedColorType(color))
        };

        if depth != 8
        {
            return Err(PngDecodeErrors::UnsupportedBitDepth(depth));
        }

        if compression_method != 0
        {
            return Err(PngDecodeErrors::BadIhdr("Unknown compression method"));
        }

        if filter_method != 0
        {
            return Err(PngDecodeErrors::BadIhdr("Unknown filter method"));
        }

        if interlace_method != 0
        {
            return Err(PngDecodeErrors::InterlacedUnsupported);
        }

        self.png_info.width = width;
        self.png_info.height = height;
        self.png_info.depth = depth;
        self.png_info.color = color;
        self.png_info.interlaced = false;

        self.skip_chunk(chunk);

        info!("Width: {}", self.png_info.width);
        info!("Height: {}", self.png_info.height);
        info!("Color type: {:?}", self.png_info.color);
        info!("Depth: {:?}", self.png_info.depth);

        self.seen_hdr = true;

        Ok(())
    }

    /// Palettes only matter for indexed images, which parse_ihdr
    /// refuses, so the chunk is skipped.
    pub(crate) fn parse_plte(&mut self, chunk: PngChunk)
    {
        trace!("Skipping PLTE chunk of {} bytes", chunk.length);

        self.skip_chunk(chunk);
    }

    pub(crate) fn parse_idat(&mut self, chunk: PngChunk) -> Result<(), PngDecodeErrors>
    {
        // push the IDAT stream, we will later pass these to the deflate
        // decoder as a whole, to get the whole uncompressed stream.
        let idat_stream = self.stream.peek_at(0, chunk.length)?;

        self.idat_chunks.extend_from_slice(idat_stream);

        trace!(
            "IDAT chunk of {} bytes, {} bytes accumulated",
            chunk.length,
            self.idat_chunks.len()
        );

        self.skip_chunk(chunk);

        Ok(())
    }
}
