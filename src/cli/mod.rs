pub mod completions;
pub mod convert;
pub mod palette;

use clap::{Parser, Subcommand};

/// pxtraits - pixel-art workspace to trait-manifest converter
#[derive(Parser, Debug)]
#[command(name = "pxtraits")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert a workspace into a fills stylesheet and a trait manifest
    Convert(convert::ConvertArgs),

    /// Build the palette only and print the fill rules to stdout
    Palette(palette::PaletteArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
