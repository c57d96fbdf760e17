/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when turning a source address into an image
use std::fmt::{Debug, Display, Formatter};

use swatch_png::error::PngDecodeErrors;

/// Errors from resolving a source address to bytes
pub enum AcquireErrors
{
    /// Plain `http://` addresses are refused
    InsecureScheme(String),
    /// The https request failed or returned a non success status
    Http(reqwest::Error),
    /// Reading a local file failed
    Io(std::io::Error)
}

impl Debug for AcquireErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::InsecureScheme(address) =>
            {
                writeln!(f, "Refusing to fetch {address}, only https is supported")
            }
            Self::Http(err) => writeln!(f, "HTTP error: {err}"),
            Self::Io(err) => writeln!(f, "I/O error: {err}")
        }
    }
}

impl Display for AcquireErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for AcquireErrors {}

impl From<reqwest::Error> for AcquireErrors
{
    fn from(value: reqwest::Error) -> Self
    {
        Self::Http(value)
    }
}

impl From<std::io::Error> for AcquireErrors
{
    fn from(value: std::io::Error) -> Self
    {
        Self::Io(value)
    }
}

/// All errors `decode` and `mean` can return
pub enum ImageErrors
{
    /// The bytes were fetched but are not a decodable png
    Decode(PngDecodeErrors),
    /// The bytes could not be fetched
    AcquisitionFailed(AcquireErrors)
}

impl Debug for ImageErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        match self
        {
            Self::Decode(err) => writeln!(f, "Could not decode image: {err:?}"),
            Self::AcquisitionFailed(err) => writeln!(f, "Could not read image: {err:?}")
        }
    }
}

impl Display for ImageErrors
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result
    {
        writeln!(f, "{:?}", self)
    }
}

impl std::error::Error for ImageErrors {}

impl From<PngDecodeErrors> for ImageErrors
{
    fn from(value: PngDecodeErrors) -> Self
    {
        Self::Decode(value)
    }
}

impl From<AcquireErrors> for ImageErrors
{
    fn from(value: AcquireErrors) -> Self
    {
        Self::AcquisitionFailed(value)
    }
}
