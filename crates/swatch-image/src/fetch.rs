/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Byte acquisition, turning an address into the raw file contents
use std::future::Future;
use std::time::Duration;

use log::{debug, trace};

use crate::errors::AcquireErrors;
use crate::source::Source;

/// Something that can resolve an address into bytes
pub trait Fetch
{
    fn fetch(&self, address: &str) -> impl Future<Output = Result<Vec<u8>, AcquireErrors>> + Send;
}

/// Options for remote fetches
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct FetchOptions
{
    user_agent: String,
    timeout:    Option<Duration>
}

impl Default for FetchOptions
{
    fn default() -> Self
    {
        FetchOptions {
            user_agent: concat!("swatch/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout:    None
        }
    }
}

impl FetchOptions
{
    pub fn set_user_agent(mut self, user_agent: impl Into<String>) -> Self
    {
        self.user_agent = user_agent.into();
        self
    }
    /// Bound the total time of a request, no limit by default
    pub fn set_timeout(mut self, timeout: Option<Duration>) -> Self
    {
        self.timeout = timeout;
        self
    }
    pub fn user_agent(&self) -> &str
    {
        &self.user_agent
    }
    pub const fn timeout(&self) -> Option<Duration>
    {
        self.timeout
    }
}

/// Fetches `https://` urls
pub struct HttpsFetcher
{
    client: reqwest::Client
}

impl HttpsFetcher
{
    pub fn new(options: &FetchOptions) -> Result<HttpsFetcher, AcquireErrors>
    {
        let mut builder = reqwest::Client::builder()
            .user_agent(options.user_agent.clone())
            .https_only(true);

        if let Some(timeout) = options.timeout
        {
            builder = builder.timeout(timeout);
        }
        Ok(HttpsFetcher {
            client: builder.build()?
        })
    }
}

impl Fetch for HttpsFetcher
{
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, AcquireErrors>
    {
        trace!("GET {address}");

        let response = self.client.get(address).send().await?;
        let bytes = read_response(response).await?;

        debug!("Fetched {} bytes from {address}", bytes.len());

        Ok(bytes)
    }
}

/// Collect the body of `response`, statuses outside 2xx are errors
pub async fn read_response(response: reqwest::Response) -> Result<Vec<u8>, AcquireErrors>
{
    let response = response.error_for_status()?;

    Ok(response.bytes().await?.to_vec())
}

/// Reads local files
#[derive(Debug, Default, Copy, Clone)]
pub struct FileFetcher;

impl Fetch for FileFetcher
{
    async fn fetch(&self, address: &str) -> Result<Vec<u8>, AcquireErrors>
    {
        let bytes = tokio::fs::read(address).await?;

        debug!("Read {} bytes from {address}", bytes.len());

        Ok(bytes)
    }
}

/// Resolve a parsed source with the fetcher matching its scheme
pub async fn acquire(source: &Source, options: &FetchOptions) -> Result<Vec<u8>, AcquireErrors>
{
    match source
    {
        Source::Https(url) => HttpsFetcher::new(options)?.fetch(url).await,
        Source::File(path) => FileFetcher.fetch(path).await
    }
}
