/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{error, info};
use swatch_image::swatch_png::PngDecoder;
use swatch_image::{acquire, decode_with_options, mean_color, Source};
use tokio::task::JoinSet;

use crate::cmd_parsers::global_options::{CmdOptions, Operation};
use crate::serde::Metadata;

type WorkflowError = Box<dyn std::error::Error + Send + Sync>;

/// Process every input concurrently and print the results in
/// the order the inputs were given.
///
/// Returns the number of inputs that failed.
pub(crate) async fn run_from_cmd(args: &ArgMatches, cmd_opts: &CmdOptions) -> usize
{
    let inputs: Vec<String> = args
        .get_many::<String>("in")
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    info!("Processing {} input(s)", inputs.len());

    let mut tasks = JoinSet::new();

    for (position, input) in inputs.iter().enumerate()
    {
        let input = input.clone();
        let options = cmd_opts.clone();

        tasks.spawn(async move { (position, process(&input, &options).await) });
    }

    let mut results: Vec<Option<Result<String, WorkflowError>>> =
        inputs.iter().map(|_| None).collect();

    while let Some(joined) = tasks.join_next().await
    {
        match joined
        {
            Ok((position, result)) => results[position] = Some(result),
            Err(err) => error!("Worker task failed: {err}")
        }
    }

    let mut failures = 0;

    for (input, result) in inputs.iter().zip(results)
    {
        match result
        {
            Some(Ok(line)) => println!("{line}"),
            Some(Err(err)) =>
            {
                error!("{input}: {err}");
                failures += 1;
            }
            None => failures += 1
        }
    }
    failures
}

async fn process(input: &str, options: &CmdOptions) -> Result<String, WorkflowError>
{
    match options.operation
    {
        Operation::Probe =>
        {
            let source = Source::parse(input)?;
            let bytes = acquire(&source, &options.fetch_options).await?;

            let mut decoder = PngDecoder::new_with_options(&bytes, options.png_options);
            decoder.decode_headers()?;

            let info = decoder.info().ok_or("No image header found")?;

            Ok(serde_json::to_string_pretty(&Metadata::new(input, info))?)
        }
        Operation::Mean =>
        {
            let image =
                decode_with_options(input, options.png_options, &options.fetch_options).await?;
            let [r, g, b, a] = mean_color(&image);

            Ok(format!(
                "{input}: #{r:02x}{g:02x}{b:02x}{a:02x} [{r}, {g}, {b}, {a}]"
            ))
        }
        Operation::Describe =>
        {
            let image =
                decode_with_options(input, options.png_options, &options.fetch_options).await?;

            Ok(format!(
                "{input}: {}x{} depth={} color={}",
                image.width(),
                image.height(),
                image.depth(),
                image.color()
            ))
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::path::PathBuf;

    use super::process;
    use crate::cmd_parsers::global_options::{CmdOptions, Operation};

    fn write_png(name: &str, width: u32, height: u32, pixels: &[u8]) -> PathBuf
    {
        let mut out = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut out, width, height);
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(pixels).unwrap();
            writer.finish().unwrap();
        }
        let path = std::env::temp_dir().join(format!("swatch-bin-{}-{name}", std::process::id()));
        std::fs::write(&path, out).unwrap();
        path
    }

    fn options(operation: Operation) -> CmdOptions
    {
        let mut options = CmdOptions::new();
        options.operation = operation;
        options
    }

    #[tokio::test]
    async fn describe_mean_and_probe()
    {
        let path = write_png("ops.png", 2, 1, &[10, 20, 30, 255, 20, 30, 40, 255]);
        let input = path.to_str().unwrap();

        let line = process(input, &options(Operation::Describe)).await.unwrap();
        assert_eq!(line, format!("{input}: 2x1 depth=8 color=6"));

        let line = process(input, &options(Operation::Mean)).await.unwrap();
        assert_eq!(line, format!("{input}: #0f1923ff [15, 25, 35, 255]"));

        let json = process(input, &options(Operation::Probe)).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["width"], 2);
        assert_eq!(value["channels"], 4);

        std::fs::remove_file(path).unwrap();
    }

    #[tokio::test]
    async fn failures_are_errors()
    {
        assert!(process("http://example.com/a.png", &options(Operation::Mean))
            .await
            .is_err());
        assert!(process("/this/path/does/not/exist.png", &options(Operation::Probe))
            .await
            .is_err());
    }
}
