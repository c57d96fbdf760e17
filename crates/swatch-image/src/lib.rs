/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Decode png images from local paths or `https://` urls and
//! compute their average colour.
//!
//! Fetching is the only step that waits, decoding runs to completion
//! on the calling task once the bytes are in memory.
//!
//! ```no_run
//! # async fn run() -> Result<(), swatch_image::errors::ImageErrors> {
//! let image = swatch_image::decode("https://example.com/logo.png").await?;
//! println!("{}x{}", image.width(), image.height());
//!
//! let [r, g, b, a] = swatch_image::mean("./logo.png").await?;
//! println!("#{r:02x}{g:02x}{b:02x}{a:02x}");
//! # Ok(())
//! # }
//! ```
//!
//! Plain `http://` urls are refused.
use log::debug;
pub use swatch_png;
use swatch_png::{PngDecoder, PngImage, PngOptions};

pub use crate::fetch::{acquire, read_response, Fetch, FetchOptions, FileFetcher, HttpsFetcher};
pub use crate::mean::{mean_color, mean_of_pixels};
pub use crate::source::Source;
use crate::errors::ImageErrors;

pub mod errors;
mod fetch;
mod mean;
mod source;

/// Fetch and decode the png at `source`
pub async fn decode(source: &str) -> Result<PngImage, ImageErrors>
{
    decode_with_options(source, PngOptions::default(), &FetchOptions::default()).await
}

/// Fetch and decode the png at `source` with custom options
pub async fn decode_with_options(
    source: &str, options: PngOptions, fetch_options: &FetchOptions
) -> Result<PngImage, ImageErrors>
{
    let source = Source::parse(source)?;
    let bytes = acquire(&source, fetch_options).await?;

    decode_bytes(&bytes, options, source.address())
}

/// Decode the png `fetcher` returns for `address`
pub async fn decode_from<F: Fetch>(
    fetcher: &F, address: &str, options: PngOptions
) -> Result<PngImage, ImageErrors>
{
    let bytes = fetcher.fetch(address).await?;

    decode_bytes(&bytes, options, address)
}

fn decode_bytes(bytes: &[u8], options: PngOptions, address: &str) -> Result<PngImage, ImageErrors>
{
    debug!("Decoding {} bytes from {address}", bytes.len());

    let image = PngDecoder::new_with_options(bytes, options).decode()?;

    debug!(
        "Decoded {address}, {}x{} color type {}",
        image.width(),
        image.height(),
        image.color()
    );
    Ok(image)
}

/// Fetch and decode the png at `source` and return its mean RGBA colour
pub async fn mean(source: &str) -> Result<[u8; 4], ImageErrors>
{
    let image = decode(source).await?;

    Ok(mean_color(&image))
}
