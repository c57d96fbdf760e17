/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use swatch_png::{PngColor, PngDecoder, PngOptions};

const SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

fn write_chunk(out: &mut Vec<u8>, tag: &[u8; 4], data: &[u8]) {
    let mut crc = flate2::Crc::new();
    crc.update(tag);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(tag);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

fn ihdr(width: u32, height: u32, color: u8) -> Vec<u8> {
    let mut hdr = Vec::with_capacity(13);
    hdr.extend_from_slice(&width.to_be_bytes());
    hdr.extend_from_slice(&height.to_be_bytes());
    hdr.extend_from_slice(&[8, color, 0, 0, 0]);
    hdr
}

fn zlib(data: &[u8]) -> Vec<u8> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
}

/// Build a png, splitting the compressed stream into `idat_count` chunks
fn build_png(width: u32, height: u32, color: u8, scanlines: &[u8], idat_count: usize) -> Vec<u8> {
    let compressed = zlib(scanlines);
    let mut out = SIGNATURE.to_vec();

    write_chunk(&mut out, b"IHDR", &ihdr(width, height, color));

    let step = compressed.len().div_ceil(idat_count).max(1);
    for part in compressed.chunks(step) {
        write_chunk(&mut out, b"IDAT", part);
    }
    write_chunk(&mut out, b"IEND", &[]);
    out
}

#[test]
fn test_single_rgba_pixel() {
    let data = build_png(1, 1, 6, &[0, 10, 20, 30, 255], 1);

    let image = PngDecoder::new(&data).decode().unwrap();

    assert_eq!(image.width(), 1);
    assert_eq!(image.height(), 1);
    assert_eq!(image.depth(), 8);
    assert_eq!(image.color(), 6);
    assert_eq!(image.data(), &[[10, 20, 30, 255]]);
}

#[test]
fn test_rgb_gains_opaque_alpha() {
    // two rows of two pixels, second row uses the up filter
    let scanlines = [0, 1, 2, 3, 4, 5, 6, 2, 1, 1, 1, 1, 1, 1];
    let data = build_png(2, 2, 2, &scanlines, 1);

    let mut decoder = PngDecoder::new(&data);
    let image = decoder.decode().unwrap();

    assert_eq!(image.color(), 2);
    assert_eq!(
        image.data(),
        &[[1, 2, 3, 255], [4, 5, 6, 255], [2, 3, 4, 255], [5, 6, 7, 255]]
    );
}

#[test]
fn test_decode_raw_keeps_native_layout() {
    let scanlines = [0, 1, 2, 3, 4, 5, 6];
    let data = build_png(2, 1, 2, &scanlines, 1);

    let raw = PngDecoder::new(&data).decode_raw().unwrap();
    assert_eq!(raw, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_multiple_idat_chunks_are_concatenated() {
    let width = 16;
    let height = 8;
    let mut scanlines = Vec::new();

    for y in 0..height {
        scanlines.push(0);
        for x in 0..width * 4 {
            scanlines.push((x * 3 + y * 7) as u8);
        }
    }
    let single = build_png(width, height, 6, &scanlines, 1);
    let split = build_png(width, height, 6, &scanlines, 5);

    let a = PngDecoder::new(&single).decode().unwrap();
    let b = PngDecoder::new(&split).decode().unwrap();

    assert_eq!(a, b);
    assert_eq!(a.data().len(), (width * height) as usize);
}

#[test]
fn test_ancillary_and_palette_chunks_are_skipped() {
    let compressed = zlib(&[0, 9, 8, 7]);
    let mut data = SIGNATURE.to_vec();

    write_chunk(&mut data, b"IHDR", &ihdr(1, 1, 2));
    write_chunk(&mut data, b"gAMA", &[0, 0, 177, 143]);
    write_chunk(&mut data, b"PLTE", &[255, 0, 0, 0, 255, 0]);
    write_chunk(&mut data, b"tEXt", b"Comment\0hello");
    write_chunk(&mut data, b"IDAT", &compressed);
    write_chunk(&mut data, b"zzZZ", &[1, 2, 3, 4, 5]);
    write_chunk(&mut data, b"IEND", &[]);

    let image = PngDecoder::new(&data).decode().unwrap();
    assert_eq!(image.data(), &[[9, 8, 7, 255]]);
}

#[test]
fn test_trailing_bytes_after_iend() {
    let mut data = build_png(1, 1, 6, &[0, 1, 2, 3, 4], 1);
    data.extend_from_slice(b"garbage");

    let image = PngDecoder::new(&data).decode().unwrap();
    assert_eq!(image.data(), &[[1, 2, 3, 4]]);
}

#[test]
fn test_headers_are_idempotent() {
    let data = build_png(3, 2, 6, &[0; 26], 2);

    let mut first = PngDecoder::new(&data);
    first.decode_headers().unwrap();
    let mut second = PngDecoder::new(&data);
    second.decode_headers().unwrap();

    assert_eq!(first.info(), second.info());

    let info = first.info().unwrap();
    assert_eq!(info.width, 3);
    assert_eq!(info.height, 2);
    assert_eq!(info.depth, 8);
    assert_eq!(info.color, PngColor::RGBA);
    assert!(!info.interlaced);
    assert_eq!(info.stride(), 12);
    assert_eq!(first.dimensions(), Some((3, 2)));
}

#[test]
fn test_info_is_none_before_headers() {
    let data = build_png(1, 1, 6, &[0, 1, 2, 3, 4], 1);
    let decoder = PngDecoder::new(&data);

    assert!(decoder.info().is_none());
    assert!(decoder.colorspace().is_none());
}

#[test]
fn test_crc_verification_accepts_valid_file() {
    let data = build_png(1, 1, 6, &[0, 1, 2, 3, 4], 3);
    let options = PngOptions::default().set_confirm_crc(true);

    let image = PngDecoder::new_with_options(&data, options).decode().unwrap();
    assert_eq!(image.data(), &[[1, 2, 3, 4]]);
}
