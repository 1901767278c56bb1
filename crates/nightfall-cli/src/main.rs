//! Command-line front end for nightfall.
//!
//! Reads a complete light theme and a partial hand-authored dark theme,
//! derives the dark and black variants, and writes both next to the
//! inputs. Unreadable inputs and unwritable outputs are fatal; the run
//! never continues past a document it could not load.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use nightfall::{Document, ThemePipeline};

/// Derive dark and black theme variants from a light XAML theme.
#[derive(Parser, Debug)]
#[command(name = "nightfall", version)]
#[command(about = "Derive dark and black theme variants from a light theme document")]
struct Cli {
    /// The complete light theme document
    light: PathBuf,

    /// The hand-authored dark theme supplying partial overrides
    dark: PathBuf,

    /// Where to write the derived dark theme
    #[arg(long, default_value = "output.xaml")]
    out_dark: PathBuf,

    /// Where to write the derived black theme
    #[arg(long, default_value = "outputBlack.xaml")]
    out_black: PathBuf,

    /// Attribute that names a color entry's identity key
    #[arg(long, default_value = "x:Key")]
    key_attribute: String,
}

fn main() -> anyhow::Result<()> {
    run(&Cli::parse())
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let light_markup = fs::read_to_string(&cli.light)
        .with_context(|| format!("reading light theme {}", cli.light.display()))?;
    let dark_markup = fs::read_to_string(&cli.dark)
        .with_context(|| format!("reading dark theme {}", cli.dark.display()))?;

    let light = Document::parse(&light_markup)
        .with_context(|| format!("parsing {}", cli.light.display()))?;
    let dark = Document::parse(&dark_markup)
        .with_context(|| format!("parsing {}", cli.dark.display()))?;

    let derived = ThemePipeline::new(light, dark)
        .key_attribute(cli.key_attribute.as_str())
        .derive();

    let dark_xml = derived.dark.to_xml()?;
    fs::write(&cli.out_dark, dark_xml)
        .with_context(|| format!("writing {}", cli.out_dark.display()))?;

    let black_xml = derived.black.to_xml()?;
    fs::write(&cli.out_black, black_xml)
        .with_context(|| format!("writing {}", cli.out_black.display()))?;

    Ok(())
}
