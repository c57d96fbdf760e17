/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use swatch_png::PngImage;

/// Average colour of an image, each channel rounded to the nearest integer
pub fn mean_color(image: &PngImage) -> [u8; 4]
{
    mean_of_pixels(image.data())
}

/// Per channel mean of RGBA pixels, halves round up.
///
/// Returns all zeros for an empty slice.
#[allow(clippy::cast_possible_truncation)]
pub fn mean_of_pixels(pixels: &[[u8; 4]]) -> [u8; 4]
{
    if pixels.is_empty()
    {
        return [0; 4];
    }
    let mut sums = [0_u64; 4];

    for pixel in pixels
    {
        for (sum, channel) in sums.iter_mut().zip(pixel)
        {
            *sum += u64::from(*channel);
        }
    }
    let len = pixels.len() as u64;

    // mean of u8 values always fits in u8
    sums.map(|sum| ((sum + len / 2) / len) as u8)
}
