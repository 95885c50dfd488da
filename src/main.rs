// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of mermaid-bridge and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! `mermaid-bridge` CLI entrypoint.
//!
//! Converts diagram JSON to fenced Mermaid markup (`export`), Mermaid markup back to diagram JSON
//! (`import`), and prints the diagram JSON schema (`schema`). Input is read from the given file,
//! or stdin when none is given; results go to stdout, diagnostics to stderr.

use std::error::Error;
use std::io::Read;

use mermaid_bridge::format::mermaid::{convert_with_report, from_mermaid};
use mermaid_bridge::{ConvertOptions, Diagram, FlowDirection};
use tracing::{debug, warn, Level};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--verbose] export [--direction <TB|TD|BT|LR|RL>] [--title <text>] [<diagram.json>]\n  {program} [--verbose] import [<diagram.mmd>]\n  {program} schema\n\nexport prints fenced Mermaid markup for a diagram JSON document.\nimport prints the diagram JSON for flowchart or sequence markup.\nschema prints the JSON schema of the diagram document.\n\nWithout a file argument, input is read from stdin.\n--title sets the Gantt chart title (default \"Project Timeline\").\n--verbose logs conversion details to stderr."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Export {
        direction: Option<FlowDirection>,
        title: Option<String>,
        input: Option<String>,
    },
    Import {
        input: Option<String>,
    },
    Schema,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    command: Command,
    verbose: bool,
}

fn set_input(input: &mut Option<String>, arg: String) -> Result<(), ()> {
    if input.is_some() {
        return Err(());
    }
    *input = Some(arg);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut verbose = false;
    let mut command = None;

    while let Some(arg) = args.next() {
        match (arg.as_str(), command.as_mut()) {
            ("--verbose" | "-v", _) => {
                if verbose {
                    return Err(());
                }
                verbose = true;
            }
            ("export", None) => {
                command = Some(Command::Export {
                    direction: None,
                    title: None,
                    input: None,
                });
            }
            ("import", None) => command = Some(Command::Import { input: None }),
            ("schema", None) => command = Some(Command::Schema),
            ("--direction", Some(Command::Export { direction, .. })) => {
                if direction.is_some() {
                    return Err(());
                }
                let raw = args.next().ok_or(())?;
                *direction = Some(raw.parse().map_err(|_| ())?);
            }
            ("--title", Some(Command::Export { title, .. })) => {
                if title.is_some() {
                    return Err(());
                }
                *title = Some(args.next().ok_or(())?);
            }
            _ if arg.starts_with('-') && arg != "-" => return Err(()),
            (_, Some(Command::Export { input, .. } | Command::Import { input })) => {
                set_input(input, arg)?;
            }
            _ => return Err(()),
        }
    }

    Ok(CliOptions {
        command: command.ok_or(())?,
        verbose,
    })
}

/// Read the named file, or stdin for `None` and `-`.
fn read_input(path: Option<&str>) -> std::io::Result<String> {
    match path {
        Some(path) if path != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn convert_options(direction: Option<FlowDirection>, title: Option<String>) -> ConvertOptions {
    let mut options = ConvertOptions::default();
    if let Some(direction) = direction {
        options = options.with_direction(direction);
    }
    if let Some(title) = title {
        options = options.with_gantt_title(title);
    }
    options
}

/// Decode diagram JSON and convert it, returning the fenced markup and the ids of skipped edges.
/// Skipped edges are also logged as a warning.
fn export_diagram(
    raw: &str,
    options: &ConvertOptions,
) -> Result<(String, Vec<String>), Box<dyn Error>> {
    let diagram: Diagram = serde_json::from_str(raw)?;
    debug!(
        nodes = diagram.nodes.len(),
        edges = diagram.edges.len(),
        "loaded diagram"
    );

    let conversion = convert_with_report(&diagram.nodes, &diagram.edges, options)?;
    let skipped = conversion
        .skipped_edges
        .into_iter()
        .map(|id| id.into_string())
        .collect::<Vec<_>>();
    if !skipped.is_empty() {
        warn!(
            count = skipped.len(),
            "skipped edges with unresolved endpoints: {}",
            skipped.join(", ")
        );
    }
    Ok((conversion.markup, skipped))
}

fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    match options.command {
        Command::Export {
            direction,
            title,
            input,
        } => {
            let raw = read_input(input.as_deref())?;
            let (markup, _skipped) = export_diagram(&raw, &convert_options(direction, title))?;
            println!("{markup}");
        }
        Command::Import { input } => {
            let raw = read_input(input.as_deref())?;
            let diagram = from_mermaid(&raw)?;
            println!("{}", serde_json::to_string_pretty(&diagram)?);
        }
        Command::Schema => {
            let schema = schemars::schema_for!(Diagram);
            println!("{}", serde_json::to_string_pretty(&schema)?);
        }
    }
    Ok(())
}

fn main() {
    let mut args = std::env::args();
    let program = args.next().unwrap_or_else(|| "mermaid-bridge".to_owned());

    let options = match parse_options(args) {
        Ok(options) => options,
        Err(()) => {
            print_usage(&program);
            std::process::exit(2);
        }
    };

    init_tracing(options.verbose);

    if let Err(err) = run(options) {
        eprintln!("mermaid-bridge: {err}");
        std::process::exit(1);
    }
}
