/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Round trip images through the png crate's encoder with every
//! filter type and check we get the same pixels back.

use nanorand::Rng;
use png::{BitDepth, ColorType, FilterType};
use swatch_png::PngDecoder;

fn encode_ref(width: u32, height: u32, color: ColorType, filter: FilterType, pixels: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(BitDepth::Eight);
        encoder.set_filter(filter);

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(pixels).unwrap();
        writer.finish().unwrap();
    }
    out
}

fn decode_ref(data: &[u8]) -> Vec<u8> {
    let decoder = png::Decoder::new(data);
    let mut reader = decoder.read_info().unwrap();

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    buf.truncate(info.buffer_size());

    buf
}

fn random_pixels(len: usize, seed: u64) -> Vec<u8> {
    let mut pixels = vec![0_u8; len];
    nanorand::WyRand::new_seed(seed).fill(&mut pixels);
    pixels
}

fn test_filter(filter: FilterType) {
    for (color, components) in [(ColorType::Rgb, 3), (ColorType::Rgba, 4)] {
        for (width, height) in [(1, 1), (7, 3), (33, 17), (64, 64)] {
            let pixels = random_pixels(width * height * components, (width * height) as u64);
            let data = encode_ref(width as u32, height as u32, color, filter, &pixels);

            let decoded = PngDecoder::new(&data).decode_raw().unwrap();

            assert_eq!(decoded, pixels, "{filter:?} {color:?} {width}x{height}");
            assert_eq!(decoded, decode_ref(&data));
        }
    }
}

#[test]
fn test_none() {
    test_filter(FilterType::NoFilter);
}

#[test]
fn test_sub() {
    test_filter(FilterType::Sub);
}

#[test]
fn test_up() {
    test_filter(FilterType::Up);
}

#[test]
fn test_average() {
    test_filter(FilterType::Avg);
}

#[test]
fn test_paeth() {
    test_filter(FilterType::Paeth);
}

#[test]
fn test_gradient_rgba_pixels() {
    // smooth content makes the encoder's predictions non trivial
    let (width, height) = (40_usize, 25_usize);
    let mut pixels = Vec::with_capacity(width * height * 4);

    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[(x * 6) as u8, (y * 10) as u8, ((x + y) * 3) as u8, 255]);
        }
    }
    let data = encode_ref(width as u32, height as u32, ColorType::Rgba, FilterType::Paeth, &pixels);

    let image = PngDecoder::new(&data).decode().unwrap();

    for (px, expected) in image.data().iter().zip(pixels.chunks_exact(4)) {
        assert_eq!(&px[..], expected);
    }
}
