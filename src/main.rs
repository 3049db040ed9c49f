// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-TriViet-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Trí Việt and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Trí Việt mind-map CLI.
//!
//! Reads a mind map (the JSON the assistant returns, or an indented outline) from a file or
//! stdin, lays it out and writes SVG, terminal text or a JSON layout document to stdout.

use std::error::Error;
use std::io::{Read, Write};

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use triviet::format::{mind_tree_json_schema, parse_mind_tree, InputFormat};
use triviet::layout::LayoutConfig;
use triviet::model::demo_mind_map;
use triviet::render::{render_mind_map, OutputFormat, RenderOptions, SvgRenderOptions};

const LOG_ENV: &str = "TRIVIET_LOG";

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--input <path>|-] [--outline] [--format svg|text|json|schema] [--config <path>] [--no-animation] [--pretty] [-v|-vv]\n  {program} --demo [--format svg|text|json] [--config <path>] [--no-animation] [--pretty] [-v|-vv]\n\nReads the mind map from --input (or stdin when omitted or `-`) and writes the rendering to stdout.\n--outline reads an indented outline / Mermaid mindmap instead of JSON.\n--format schema prints the JSON Schema of the accepted input and ignores any input.\n--config reads layout constants from a JSON file; missing fields keep their defaults.\n--demo renders a built-in lesson and cannot be combined with --input or --outline.\n\nLogs go to stderr; -v/-vv raise the level, {LOG_ENV} takes an EnvFilter directive."
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliFormat {
    Render(OutputFormat),
    Schema,
}

impl Default for CliFormat {
    fn default() -> Self {
        Self::Render(OutputFormat::default())
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    input: Option<String>,
    input_format: InputFormat,
    format: CliFormat,
    config: Option<String>,
    no_animation: bool,
    pretty: bool,
    demo: bool,
    verbosity: u8,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();
    let mut format_seen = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--input" | "-i" => {
                if options.input.is_some() {
                    return Err(());
                }
                options.input = Some(args.next().ok_or(())?);
            }
            "--outline" => {
                if options.input_format == InputFormat::Outline {
                    return Err(());
                }
                options.input_format = InputFormat::Outline;
            }
            "--format" | "-f" => {
                if format_seen {
                    return Err(());
                }
                format_seen = true;
                let raw = args.next().ok_or(())?;
                options.format = match raw.as_str() {
                    "schema" => CliFormat::Schema,
                    other => CliFormat::Render(other.parse().map_err(|_| ())?),
                };
            }
            "--config" => {
                if options.config.is_some() {
                    return Err(());
                }
                options.config = Some(args.next().ok_or(())?);
            }
            "--no-animation" => {
                if options.no_animation {
                    return Err(());
                }
                options.no_animation = true;
            }
            "--pretty" => {
                if options.pretty {
                    return Err(());
                }
                options.pretty = true;
            }
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "-v" => options.verbosity = options.verbosity.saturating_add(1),
            "-vv" => options.verbosity = options.verbosity.saturating_add(2),
            _ => return Err(()),
        }
    }

    if options.demo && (options.input.is_some() || options.input_format == InputFormat::Outline) {
        return Err(());
    }
    if options.demo && options.format == CliFormat::Schema {
        return Err(());
    }

    Ok(options)
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false);

    // A subscriber may already be installed when embedded; keep that one.
    let _ = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init();
}

fn load_config(path: Option<&str>) -> Result<LayoutConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(LayoutConfig::default());
    };
    let raw = read_file(path)?;
    let config =
        serde_json::from_str::<LayoutConfig>(&raw).map_err(|err| format!("{path}: {err}"))?;
    tracing::info!(path, ?config, "loaded layout config");
    Ok(config)
}

fn read_input(path: Option<&str>) -> Result<String, Box<dyn Error>> {
    match path {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => read_file(path),
    }
}

fn read_file(path: &str) -> Result<String, Box<dyn Error>> {
    let raw = std::fs::read_to_string(path).map_err(|err| format!("{path}: {err}"))?;
    Ok(raw)
}

fn run(options: &CliOptions) -> Result<String, Box<dyn Error>> {
    let format = match options.format {
        CliFormat::Schema => return Ok(serde_json::to_string_pretty(&mind_tree_json_schema())?),
        CliFormat::Render(format) => format,
    };

    let config = load_config(options.config.as_deref())?;
    let root = if options.demo {
        demo_mind_map()
    } else {
        let input = read_input(options.input.as_deref())?;
        parse_mind_tree(&input, options.input_format)?
    };
    tracing::info!(
        nodes = root.node_count(),
        depth = root.depth(),
        ?format,
        "rendering mind map"
    );

    let render_options = RenderOptions {
        svg: SvgRenderOptions {
            staggered_reveal: !options.no_animation,
            ..SvgRenderOptions::default()
        },
        pretty_json: options.pretty,
        ..RenderOptions::default()
    };
    Ok(render_mind_map(&root, &config, format, &render_options)?)
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "triviet".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };
    setup_logging(options.verbosity);

    let result = run(&options).and_then(|mut output| {
        if !output.ends_with('\n') {
            output.push('\n');
        }
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    });

    if let Err(err) = result {
        eprintln!("triviet: {err}");
        std::process::exit(1);
    }
}
