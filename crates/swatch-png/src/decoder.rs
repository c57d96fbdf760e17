/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, trace, warn};
use zune_core::bytestream::ZByteReader;
use zune_inflate::{DeflateDecoder, DeflateOptions};

use crate::constants::{
    CHUNK_OVERHEAD, INFLATE_LIMIT_SLACK, MAX_SIZE_HINT, PNG_SIGNATURE, SIZE_HINT_RATIO
};
use crate::enums::{PngChunkType, PngColor};
use crate::error::PngDecodeErrors;
use crate::filters::reconstruct;
use crate::image::PngImage;
use crate::options::PngOptions;

#[derive(Copy, Clone, Debug)]
pub(crate) struct PngChunk
{
    pub length:     usize,
    pub chunk_type: PngChunkType,
    pub chunk:      [u8; 4]
}

/// Image metadata extracted from the IHDR chunk
#[derive(Default, Debug, Copy, Clone, Eq, PartialEq)]
pub struct PngInfo
{
    pub width:      u32,
    pub height:     u32,
    pub depth:      u8,
    pub color:      PngColor,
    pub interlaced: bool
}

impl PngInfo
{
    /// Number of bytes in one pixel
    pub const fn components(&self) -> usize
    {
        self.color.num_components()
    }
    /// Number of sample bytes in one scanline, excluding the filter byte
    pub const fn stride(&self) -> usize
    {
        self.width as usize * self.components()
    }
}

/// A png decoder for 8 bit RGB and RGBA images
///
/// The decoder is single use, create a new one per buffer.
pub struct PngDecoder<'a>
{
    pub(crate) seen_hdr:    bool,
    pub(crate) stream:      ZByteReader<&'a [u8]>,
    pub(crate) options:     PngOptions,
    pub(crate) png_info:    PngInfo,
    pub(crate) idat_chunks: Vec<u8>
}

impl<'a> PngDecoder<'a>
{
    pub fn new(data: &'a [u8]) -> PngDecoder<'a>
    {
        PngDecoder::new_with_options(data, PngOptions::default())
    }

    pub fn new_with_options(data: &'a [u8], options: PngOptions) -> PngDecoder<'a>
    {
        PngDecoder {
            seen_hdr: false,
            stream: ZByteReader::new(data),
            options,
            png_info: PngInfo::default(),
            idat_chunks: Vec::new()
        }
    }

    /// Image metadata, or `None` if headers haven't been decoded
    pub const fn info(&self) -> Option<PngInfo>
    {
        if !self.seen_hdr
        {
            return None;
        }
        Some(self.png_info)
    }

    pub const fn dimensions(&self) -> Option<(usize, usize)>
    {
        if !self.seen_hdr
        {
            return None;
        }
        Some((self.png_info.width as usize, self.png_info.height as usize))
    }

    pub const fn colorspace(&self) -> Option<PngColor>
    {
        if !self.seen_hdr
        {
            return None;
        }
        Some(self.png_info.color)
    }

    fn read_signature(&mut self) -> Result<(), PngDecodeErrors>
    {
        let signature = self
            .stream
            .get_u64_be_err()
            .map_err(|_| PngDecodeErrors::InvalidSignature)?;

        if signature != PNG_SIGNATURE
        {
            return Err(PngDecodeErrors::InvalidSignature);
        }
        Ok(())
    }

    fn read_chunk_header(&mut self) -> Result<PngChunk, PngDecodeErrors>
    {
        // Format is length - chunk type - [data] -  crc chunk
        let remaining = self.stream.remaining();
        let header_size = CHUNK_OVERHEAD - 4;

        if remaining < header_size
        {
            return Err(PngDecodeErrors::TruncatedInput(
                *b"????",
                header_size,
                remaining
            ));
        }
        let chunk_length = self.stream.get_u32_be_err()? as usize;
        let chunk_type_int = self.stream.get_u32_be_err()?.to_be_bytes();

        let chunk_type = PngChunkType::from_tag(&chunk_type_int);

        let needed = chunk_length.saturating_add(4 /*crc*/);

        if !self.stream.has(needed)
        {
            return Err(PngDecodeErrors::TruncatedInput(
                chunk_type_int,
                needed,
                self.stream.remaining()
            ));
        }

        // Confirm the CRC here, it covers chunk type + chunk data
        #[cfg(feature = "crc")]
        {
            if self.options.confirm_crc
            {
                let mut crc_bytes = [0; 4];
                crc_bytes.copy_from_slice(self.stream.peek_at(chunk_length, 4)?);
                let crc = u32::from_be_bytes(crc_bytes);

                let data = self.stream.peek_at(0, chunk_length)?;
                let calc_crc = crate::crc::chunk_crc(&chunk_type_int, data);

                if crc != calc_crc
                {
                    return Err(PngDecodeErrors::BadCrc(crc, calc_crc));
                }
            }
        }

        Ok(PngChunk {
            length: chunk_length,
            chunk: chunk_type_int,
            chunk_type
        })
    }

    /// Move past the chunk data and its crc
    pub(crate) fn skip_chunk(&mut self, chunk: PngChunk)
    {
        self.stream.skip(chunk.length + 4);
    }

    /// Read the signature and every chunk up to and including IHDR.
    ///
    /// After this, [`info`](Self::info) returns the image metadata.
    pub fn decode_headers(&mut self) -> Result<(), PngDecodeErrors>
    {
        if self.seen_hdr
        {
            return Ok(());
        }
        self.read_signature()?;

        while !self.seen_hdr
        {
            if self.stream.remaining() == 0
            {
                return Err(PngDecodeErrors::MissingHeader);
            }
            let chunk = self.read_chunk_header()?;

            match chunk.chunk_type
            {
                PngChunkType::IHDR => self.parse_ihdr(chunk)?,
                PngChunkType::PLTE | PngChunkType::IDAT | PngChunkType::IEND =>
                {
                    return Err(PngDecodeErrors::MissingHeader);
                }
                PngChunkType::unkn => self.skip_unknown(chunk)
            }
        }
        Ok(())
    }

    /// Decode the image and return the reconstructed samples
    ///
    /// The result holds `height` rows of `width * components` bytes,
    /// where components is 3 for RGB and 4 for RGBA images.
    pub fn decode_raw(&mut self) -> Result<Vec<u8>, PngDecodeErrors>
    {
        self.decode_headers()?;

        loop
        {
            if self.stream.remaining() == 0
            {
                return Err(PngDecodeErrors::MissingEndChunk);
            }
            let chunk = self.read_chunk_header()?;

            match chunk.chunk_type
            {
                PngChunkType::IHDR => self.parse_ihdr(chunk)?,
                PngChunkType::PLTE => self.parse_plte(chunk),
                PngChunkType::IDAT => self.parse_idat(chunk)?,
                PngChunkType::IEND =>
                {
                    self.skip_chunk(chunk);
                    break;
                }
                PngChunkType::unkn => self.skip_unknown(chunk)
            }
        }
        if self.stream.remaining() != 0
        {
            warn!(
                "Ignoring {} bytes after IEND chunk",
                self.stream.remaining()
            );
        }
        let deflate_data = self.inflate()?;
        // we are done with the compressed stream
        self.idat_chunks = Vec::new();

        let info = self.png_info;

        reconstruct(
            &deflate_data,
            info.stride(),
            info.height as usize,
            info.components()
        )
    }

    /// Decode the image into RGBA pixels
    ///
    /// RGB images get an opaque alpha channel added, the
    /// colour type in [`PngImage::info`] still reports the source
    /// colour type.
    pub fn decode(&mut self) -> Result<PngImage, PngDecodeErrors>
    {
        let raw = self.decode_raw()?;
        let info = self.png_info;

        let pixels = match info.color
        {
            PngColor::RGBA => raw
                .chunks_exact(4)
                .map(|px| [px[0], px[1], px[2], px[3]])
                .collect(),
            PngColor::RGB => raw
                .chunks_exact(3)
                .map(|px| [px[0], px[1], px[2], 255])
                .collect(),
            // parse_ihdr rejects everything else
            _ => return Err(PngDecodeErrors::UnsupportedColorType(info.color.to_int()))
        };

        Ok(PngImage::new(info, pixels))
    }

    fn skip_unknown(&mut self, chunk: PngChunk)
    {
        let chunk_name = core::str::from_utf8(&chunk.chunk).unwrap_or("XXXX");

        trace!("Encountered unknown chunk {:?}", chunk_name);
        trace!("Skipping {} bytes", chunk.length + 4);

        self.skip_chunk(chunk);
    }

    /// Undo deflate decoding of the concatenated IDAT chunks
    fn inflate(&mut self) -> Result<Vec<u8>, PngDecodeErrors>
    {
        let (size_hint, limit) = inflate_bounds(&self.png_info, self.idat_chunks.len());

        let option = DeflateOptions::default()
            .set_size_hint(size_hint)
            .set_limit(limit)
            .set_confirm_checksum(self.options.confirm_adler);

        let mut decoder = DeflateDecoder::new_with_options(&self.idat_chunks, option);

        let data = decoder.decode_zlib()?;

        debug!(
            "Inflated {} bytes of IDAT data to {} bytes",
            self.idat_chunks.len(),
            data.len()
        );
        Ok(data)
    }
}

/// Size hint and output limit for inflating `compressed_len` bytes of
/// IDAT data belonging to the image described by `info`.
///
/// The inflater preallocates the hint, it never exceeds a small multiple
/// of the compressed length. The limit admits any complete image.
pub(crate) fn inflate_bounds(info: &PngInfo, compressed_len: usize) -> (usize, usize)
{
    let expected = info
        .stride()
        .saturating_add(1)
        .saturating_mul(info.height as usize);

    let size_hint = expected
        .min(compressed_len.saturating_mul(SIZE_HINT_RATIO))
        .min(MAX_SIZE_HINT);

    (size_hint, expected.saturating_add(INFLATE_LIMIT_SLACK))
}

#[cfg(test)]
mod tests
{
    use crate::constants::MAX_SIZE_HINT;
    use crate::decoder::{inflate_bounds, PngInfo};
    use crate::enums::PngColor;

    fn info(width: u32, height: u32, color: PngColor) -> PngInfo
    {
        PngInfo {
            width,
            height,
            depth: 8,
            color,
            interlaced: false
        }
    }

    #[test]
    fn size_hint_follows_compressed_length()
    {
        // header claims 68 GB, the stream is a few bytes
        let (hint, _) = inflate_bounds(&info(1 << 17, 1 << 17, PngColor::RGBA), 13);
        assert_eq!(hint, 104);
    }

    #[test]
    fn size_hint_never_exceeds_image()
    {
        let (hint, limit) = inflate_bounds(&info(2, 2, PngColor::RGB), 1000);
        assert_eq!(hint, 14);
        assert!(limit >= 14);
    }

    #[test]
    fn size_hint_is_capped()
    {
        let (hint, _) = inflate_bounds(&info(1 << 14, 1 << 14, PngColor::RGBA), 1 << 30);
        assert_eq!(hint, MAX_SIZE_HINT);
    }

    #[test]
    fn limit_admits_images_past_one_gib()
    {
        // 19000 rows of 1 + 19000 * 3 bytes
        let (_, limit) = inflate_bounds(&info(19000, 19000, PngColor::RGB), 1 << 20);
        assert!(limit >= 1_083_019_000);
        assert!(limit > 1 << 30);
    }
}
