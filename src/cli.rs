//! Command line utilities.

use std::{
    io::{Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
pub use clap::Parser;
use clap::{Args, Subcommand};
use log::{debug, info};

use crate::{error::Error, Config};

/// Command line usage description.
#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Command line options.
    #[command(flatten)]
    pub opts: Opts,
}

/// List of commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Format CSS code
    Format {
        /// Input files [default: standard input]
        paths: Vec<PathBuf>,

        /// List files that are not formatted instead of printing the result
        #[arg(long)]
        check: bool,

        /// Indentation string [default: four spaces]
        #[arg(long)]
        indent: Option<String>,
    },

    /// Minify CSS code
    Minify {
        /// Input files [default: standard input]
        paths: Vec<PathBuf>,

        /// Do not inline custom properties
        #[arg(long)]
        keep_variables: bool,

        /// Do not flatten nested `calc()` expressions
        #[arg(long)]
        keep_calc: bool,
    },
}

/// Command line options.
#[derive(Debug, Args, Clone)]
pub struct Opts {
    /// Configuration file [default: "stylefmt.toml"]
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

/// CSS code read from a file or from the standard input.
#[derive(Debug)]
struct Input {
    /// File path, `None` for the standard input.
    path: Option<PathBuf>,

    /// Content of the file.
    content: String,
}

impl Input {
    /// Return a name suitable for messages.
    fn name(&self) -> String {
        self.path
            .as_ref()
            .map_or_else(|| "<stdin>".to_owned(), |path| path.display().to_string())
    }
}

/// Run the `format` command.
///
/// Returns `false` if `check` is set and some input is not formatted.
pub fn format(
    opts: &Opts,
    paths: &[PathBuf],
    check: bool,
    indent: Option<String>,
) -> Result<bool> {
    let config = Config::from_opts(opts).context("loading configuration")?;

    let options = match indent {
        Some(indent) => crate::FormatOptions { indent },
        None => config.format,
    };

    let mut unformatted = 0;

    for input in read_inputs(paths)? {
        debug!("Formatting {}", input.name());

        let output = render(crate::format_with(&input.content, &options));

        if check {
            if output != input.content {
                unformatted += 1;
                write_output(format!("{}\n", input.name()))?;
            }
        } else {
            write_output(output)?;
        }
    }

    if unformatted > 0 {
        info!("{} input(s) would be reformatted", unformatted);
    }

    Ok(unformatted == 0)
}

/// Run the `minify` command.
pub fn minify(opts: &Opts, paths: &[PathBuf], keep_variables: bool, keep_calc: bool) -> Result<()> {
    let config = Config::from_opts(opts).context("loading configuration")?;

    let options = crate::MinifyOptions {
        inline_variables: config.minify.inline_variables && !keep_variables,
        flatten_calc: config.minify.flatten_calc && !keep_calc,
    };

    for input in read_inputs(paths)? {
        debug!("Minifying {}", input.name());

        write_output(render(crate::minify_with(&input.content, &options)))?;
    }

    Ok(())
}

/// Read every input file, or the standard input if no path is given.
fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>> {
    if paths.is_empty() {
        let mut content = String::new();

        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|error| Error::ReadStdin {
                source: error.into(),
            })?;

        return Ok(vec![Input {
            path: None,
            content,
        }]);
    }

    paths
        .iter()
        .map(|path| -> Result<Input> {
            let content = std::fs::read_to_string(path).map_err(|error| Error::ReadInput {
                input_path: path.clone(),
                source: error.into(),
            })?;

            Ok(Input {
                path: Some(path.clone()),
                content,
            })
        })
        .collect()
}

/// Terminate non-empty output with a newline, as a text file.
fn render(output: String) -> String {
    if output.is_empty() {
        output
    } else {
        output + "\n"
    }
}

fn write_output(output: impl AsRef<str>) -> Result<()> {
    std::io::stdout()
        .lock()
        .write_all(output.as_ref().as_bytes())
        .map_err(|error| {
            Error::WriteOutput {
                source: error.into(),
            }
            .into()
        })
}
