use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use ariadne::Source;
use chillson::{Son, Value};
use clap::Parser as ClapParser;
use tracing::*;

use crate::config::{Config, OutputFormat};
use crate::query::Shape;

mod config;
mod edit_distance;
mod logging;
mod query;
mod report;

#[derive(Debug, ClapParser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The path to a JSON file, or `-` to read standard input.
    input: PathBuf,

    /// Value paths such as `[gophers][0][name]`. Without any, the whole document is printed.
    paths: Vec<String>,

    /// Require every resolved value to have this type.
    #[arg(long = "as", value_enum, default_value_t = Shape::Any)]
    shape: Shape,

    /// Overrides the `format` from the config file.
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Config file to use instead of `chill.toml` in the working directory.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Disable colored diagnostics.
    #[arg(long)]
    no_color: bool,
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read standard input")?;
        return Ok(buf);
    }

    match std::fs::read_to_string(input) {
        Ok(file) => Ok(file),
        Err(e) => {
            error!(path = ?input, "failed to read input");
            Err(e).with_context(|| format!("failed to read file `{}`", input.display()))
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::setup_logging();

    let cli = Args::parse();

    debug!(input = ?cli.input, paths = ?cli.paths);

    let config = Config::discover(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    let color = config.color && !cli.no_color;

    let json_string = read_input(&cli.input)?;
    let document: Value = serde_json::from_str(&json_string)
        .with_context(|| format!("`{}` is not valid JSON", cli.input.display()))?;
    let chill = Son::new(&document);

    let paths = if cli.paths.is_empty() {
        vec![String::new()]
    } else {
        cli.paths
    };

    let mut failed = 0;
    for (i, path) in paths.iter().enumerate() {
        match query::query(chill, path, cli.shape) {
            Ok(value) => println!("{}", query::render(&value, format)?),
            Err(failure) => {
                failed += 1;
                debug!(?path, ?failure);
                let src_id = format!("path #{}", i + 1);
                report::failure_report(&src_id, path, &failure, color)
                    .eprint((&src_id, Source::from(path)))?;
            }
        }
    }

    if failed > 0 {
        bail!("{failed} of {} paths could not be resolved", paths.len());
    }

    Ok(())
}
