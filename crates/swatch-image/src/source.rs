/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use crate::errors::AcquireErrors;

/// Where image bytes come from
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Source
{
    /// An `https://` url
    Https(String),
    /// Anything that is not a url, treated as a filesystem path
    File(String)
}

impl Source
{
    /// Classify an address by its scheme.
    ///
    /// `http://` addresses are refused.
    pub fn parse(address: &str) -> Result<Source, AcquireErrors>
    {
        if has_scheme(address, "https://")
        {
            Ok(Source::Https(address.to_string()))
        }
        else if has_scheme(address, "http://")
        {
            Err(AcquireErrors::InsecureScheme(address.to_string()))
        }
        else
        {
            Ok(Source::File(address.to_string()))
        }
    }

    pub fn address(&self) -> &str
    {
        match self
        {
            Source::Https(address) | Source::File(address) => address
        }
    }
}

fn has_scheme(address: &str, scheme: &str) -> bool
{
    address
        .get(..scheme.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
}

#[cfg(test)]
mod tests
{
    use super::Source;
    use crate::errors::AcquireErrors;

    #[test]
    fn https_is_remote()
    {
        let source = Source::parse("https://example.com/a.png").unwrap();
        assert_eq!(source, Source::Https("https://example.com/a.png".to_string()));

        let source = Source::parse("HTTPS://example.com/a.png").unwrap();
        assert!(matches!(source, Source::Https(_)));
    }

    #[test]
    fn http_is_refused()
    {
        for address in ["http://example.com/a.png", "Http://example.com/a.png"]
        {
            assert!(matches!(
                Source::parse(address),
                Err(AcquireErrors::InsecureScheme(_))
            ));
        }
    }

    #[test]
    fn everything_else_is_a_file()
    {
        for address in ["a.png", "/tmp/https.png", "./http", "", "ftp://x/y.png"]
        {
            let source = Source::parse(address).unwrap();
            assert_eq!(source, Source::File(address.to_string()));
            assert_eq!(source.address(), address);
        }
    }
}
