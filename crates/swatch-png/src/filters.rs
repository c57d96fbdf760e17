/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Scanline reconstruction, undoing the per row
//! predictive filters png applies before compression.
//!
//! Every function here works on a single row, `raw` is the
//! filtered row without its filter byte, `current` is where the
//! reconstructed row goes and `prev_row` is the already reconstructed
//! row above it.
use log::trace;

use crate::enums::FilterMethod;
use crate::error::PngDecodeErrors;

/// Reverse the filters of `height` scanlines stored in `deflate_data`.
///
/// Each scanline is a filter byte followed by `stride` sample bytes,
/// `components` is the number of bytes making up a pixel.
///
/// Returns `height * stride` reconstructed bytes.
pub fn reconstruct(
    deflate_data: &[u8], stride: usize, height: usize, components: usize
) -> Result<Vec<u8>, PngDecodeErrors>
{
    if components == 0 || stride % components != 0
    {
        return Err(PngDecodeErrors::Generic(
            "Scanline stride is not a multiple of the pixel size"
        ));
    }
    // filter type
    let chunk_size = stride
        .checked_add(1)
        .ok_or(PngDecodeErrors::Generic("Scanline stride overflows"))?;

    let expected = chunk_size
        .checked_mul(height)
        .ok_or(PngDecodeErrors::Generic("Image size overflows"))?;

    if deflate_data.len() < expected
    {
        return Err(PngDecodeErrors::TooSmallImageData(
            expected,
            deflate_data.len()
        ));
    }
    if deflate_data.len() > expected
    {
        trace!(
            "Ignoring {} bytes after the last scanline",
            deflate_data.len() - expected
        );
    }

    let mut out = vec![0_u8; stride * height];

    for (row, in_stride) in deflate_data.chunks_exact(chunk_size).take(height).enumerate()
    {
        // prev is every row we already wrote, current starts at the row we
        // are about to write
        let (prev, current) = out.split_at_mut(row * stride);
        let current = &mut current[..stride];

        let filter_byte = in_stride[0];
        let raw = &in_stride[1..];

        let filter = FilterMethod::from_int(filter_byte)
            .ok_or(PngDecodeErrors::UnsupportedFilter(filter_byte, row))?;

        if row == 0
        {
            // the row above the first scanline is treated as zero
            match filter
            {
                // up for the first row becomes a memcpy
                FilterMethod::None | FilterMethod::Up => current.copy_from_slice(raw),
                FilterMethod::Sub => handle_sub(raw, current, components),
                FilterMethod::Average => handle_avg_first(raw, current, components),
                FilterMethod::Paeth => handle_paeth_first(raw, current, components)
            }
            continue;
        }
        let prev_row = &prev[(row - 1) * stride..];

        match filter
        {
            FilterMethod::None => current.copy_from_slice(raw),
            FilterMethod::Sub => handle_sub(raw, current, components),
            FilterMethod::Up => handle_up(prev_row, raw, current),
            FilterMethod::Average => handle_avg(prev_row, raw, current, components),
            FilterMethod::Paeth => handle_paeth(prev_row, raw, current, components)
        }
    }
    Ok(out)
}

#[allow(clippy::manual_memcpy)]
pub fn handle_sub(raw: &[u8], current: &mut [u8], components: usize)
{
    if current.len() < components || raw.len() < components
    {
        return;
    }
    // handle leftmost pixel explicitly
    for i in 0..components
    {
        current[i] = raw[i];
    }
    // raw length is one row,so always keep it in check
    let end = current.len().min(raw.len());

    for i in components..end
    {
        let a = current[i - components];
        current[i] = raw[i].wrapping_add(a);
    }
}

pub fn handle_up(prev_row: &[u8], raw: &[u8], current: &mut [u8])
{
    for ((filt, recon), up) in raw.iter().zip(current).zip(prev_row)
    {
        *recon = (*filt).wrapping_add(*up)
    }
}

pub fn handle_avg(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize)
{
    if raw.len() < components || current.len() < components || prev_row.len() < components
    {
        return;
    }
    // handle leftmost pixel explicitly
    for i in 0..components
    {
        current[i] = raw[i].wrapping_add(prev_row[i] >> 1);
    }
    let end = current.len().min(raw.len()).min(prev_row.len());

    for i in components..end
    {
        let a = current[i - components];
        let b = prev_row[i];

        // floor((a + b) / 2) without leaving 8 bits,
        // from standford bit-hacks.
        let avg = (a & b) + ((a ^ b) >> 1);

        current[i] = raw[i].wrapping_add(avg);
    }
}

pub fn handle_paeth(prev_row: &[u8], raw: &[u8], current: &mut [u8], components: usize)
{
    if raw.len() < components || current.len() < components || prev_row.len() < components
    {
        return;
    }
    // handle leftmost pixel explicitly, a and c are zero there
    for i in 0..components
    {
        current[i] = raw[i].wrapping_add(paeth(0, prev_row[i], 0));
    }
    let end = current.len().min(raw.len()).min(prev_row.len());

    for i in components..end
    {
        let paeth_res = paeth(
            current[i - components],
            prev_row[i],
            prev_row[i - components]
        );
        current[i] = raw[i].wrapping_add(paeth_res)
    }
}

/// Handle images with the first scanline as paeth scanline
///
/// Special in that the above row is treated as zero
#[allow(clippy::manual_memcpy)]
pub fn handle_paeth_first(raw: &[u8], current: &mut [u8], components: usize)
{
    if raw.len() < components || current.len() < components
    {
        return;
    }

    for i in 0..components
    {
        current[i] = raw[i];
    }
    let end = current.len().min(raw.len());

    for i in components..end
    {
        let paeth_res = paeth(current[i - components], 0, 0);
        current[i] = raw[i].wrapping_add(paeth_res)
    }
}

/// Handle images with the first scanline as an average scanline
///
/// The above row is treated as zero
#[allow(clippy::manual_memcpy)]
pub fn handle_avg_first(raw: &[u8], current: &mut [u8], components: usize)
{
    if raw.len() < components || current.len() < components
    {
        return;
    }

    for i in 0..components
    {
        current[i] = raw[i];
    }
    let end = current.len().min(raw.len());

    for i in components..end
    {
        let avg = current[i - components] >> 1;
        current[i] = raw[i].wrapping_add(avg)
    }
}

/// The paeth predictor.
///
/// Picks whichever of left (`a`), above (`b`) and upper left (`c`)
/// is closest to `a + b - c`, ties go to `a` first then `b`.
#[inline(always)]
pub const fn paeth(a: u8, b: u8, c: u8) -> u8
{
    let p = a as i16 + b as i16 - c as i16;

    let pa = (p - a as i16).abs();
    let pb = (p - b as i16).abs();
    let pc = (p - c as i16).abs();

    if pa <= pb && pa <= pc
    {
        a
    }
    else if pb <= pc
    {
        b
    }
    else
    {
        c
    }
}
