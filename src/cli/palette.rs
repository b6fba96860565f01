//! Palette command: dry-run palette inspection.

use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::palette::Palette;
use crate::workspace::Workspace;

/// Build the palette only and print the fill rules to stdout
#[derive(Args, Debug)]
pub struct PaletteArgs {
    /// Workspace document to scan (default from pxtraits.yaml)
    pub input: Option<PathBuf>,
}

pub fn run(args: PaletteArgs, printer: &Printer) -> Result<()> {
    let input = match args.input {
        Some(path) => path,
        None => Manifest::discover()?.input,
    };

    let workspace = Workspace::load(&input)?;
    let layers = workspace.layers()?;
    let palette = Palette::scan(layers)?;

    printer.status(
        "Sampled",
        &format!(
            "{} from {}",
            plural(palette.len(), "colour", "colours"),
            display_path(&input)
        ),
    );

    // Fill rules go to stdout; no files are written
    print!("{}", palette.fill_rules());

    Ok(())
}
