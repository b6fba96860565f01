use clap::Parser;
use miette::Result;
use pxtraits::cli::{Cli, Commands};
use pxtraits::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    match cli.command {
        Commands::Convert(args) => pxtraits::cli::convert::run(args, &printer)?,
        Commands::Palette(args) => pxtraits::cli::palette::run(args, &printer)?,
        Commands::Completions(args) => pxtraits::cli::completions::run(args)?,
    }

    Ok(())
}
