//! Convert command implementation.
//!
//! Runs the full pipeline: palette scan over every layer, then per-layer
//! trait encoding against the finalized palette, then staged writes of both
//! artifacts. A failure anywhere aborts before the first output byte lands
//! on disk.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::encode::{encode_traits, traits_json};
use crate::error::{PxError, Result};
use crate::manifest::Manifest;
use crate::output::{display_path, plural, Printer};
use crate::palette::Palette;
use crate::workspace::Workspace;

/// Convert a workspace into a fills stylesheet and a trait manifest
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Workspace document to convert (default from pxtraits.yaml)
    pub input: Option<PathBuf>,

    /// Output path for the fills stylesheet
    #[arg(long)]
    pub fills: Option<PathBuf>,

    /// Output path for the trait manifest
    #[arg(long)]
    pub traits: Option<PathBuf>,
}

pub fn run(args: ConvertArgs, printer: &Printer) -> Result<()> {
    // Only consult pxtraits.yaml for paths the CLI left unset
    let manifest = if args.input.is_none() || args.fills.is_none() || args.traits.is_none() {
        Manifest::discover()?
    } else {
        Manifest::default()
    };

    let input = args.input.unwrap_or(manifest.input);
    let fills_path = args.fills.unwrap_or(manifest.fills);
    let traits_path = args.traits.unwrap_or(manifest.traits);

    let workspace = Workspace::load(&input)?;
    let layers = workspace.layers()?;

    printer.status(
        "Scanning",
        &format!(
            "{} from {}",
            plural(layers.len(), "layer", "layers"),
            display_path(&input)
        ),
    );

    let palette = Palette::scan(layers)?;
    printer.info("Indexed", &plural(palette.len(), "colour", "colours"));

    let traits = encode_traits(layers, &palette)?;

    // Render both artifacts fully before touching the filesystem
    let fills_text = palette.fill_rules();
    let traits_text = traits_json(&traits)?;

    write_atomic(&fills_path, &fills_text)?;
    write_atomic(&traits_path, &traits_text)?;

    printer.status(
        "Wrote",
        &format!(
            "{} ({})",
            display_path(&fills_path),
            plural(palette.len(), "fill rule", "fill rules")
        ),
    );
    printer.status(
        "Wrote",
        &format!(
            "{} ({})",
            display_path(&traits_path),
            plural(traits.len(), "trait", "traits")
        ),
    );

    Ok(())
}

/// Write via a temp sibling and rename, so a failed write never leaves a
/// partial file at the destination.
fn write_atomic(path: &Path, content: &str) -> Result<()> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PxError::Io {
            path: path.to_path_buf(),
            message: "Output path has no file name".to_string(),
        })?;

    let tmp = path.with_file_name(format!("{}.tmp", file_name));

    fs::write(&tmp, content).map_err(|e| PxError::Io {
        path: tmp.clone(),
        message: format!("Failed to write output: {}", e),
    })?;

    fs::rename(&tmp, path).map_err(|e| PxError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to move output into place: {}", e),
    })
}
