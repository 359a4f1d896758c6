use std::{fs::File,
          io::{self, BufRead, BufWriter, Write},
          path::{Path, PathBuf}};
use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use color_ramp::{generate_scale, ColorScale, ScaleScheme};
use log::info;

mod render;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Scheme {
    /// 100–900 between white and black, anchor derived from the luma
    Symmetric,
    /// 050–900 from white through the seed at the chosen level
    AnchorRelative,
}

impl From<Scheme> for ScaleScheme {
    fn from(s: Scheme) -> Self {
        match s {
            Scheme::Symmetric => ScaleScheme::Symmetric,
            Scheme::AnchorRelative => ScaleScheme::AnchorRelative,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Table,
    Json,
}

const LEVELS: [&str; 9] = ["100", "200", "300", "400", "500", "600", "700",
                           "800", "900"];

/// Generate a tonal color scale from a seed color
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Seed HEX color, e.g. #036A8B (asked for when omitted)
    color: Option<String>,

    /// How levels are laid out around the seed
    #[arg(short, long, value_enum, default_value_t = Scheme::Symmetric)]
    scheme: Scheme,

    /// Level of the seed color (anchor-relative scheme, asked for when
    /// omitted)
    #[arg(short, long, value_parser = LEVELS)]
    level: Option<String>,

    /// Console output format
    #[arg(short, long, value_enum, default_value_t = Format::Table)]
    format: Format,

    /// Path of the HTML preview
    #[arg(long, default_value = "color-scale.html")]
    html: PathBuf,

    /// Do not write the HTML preview
    #[arg(long)]
    no_html: bool,
}

fn prompt(question: &str) -> Result<String> {
    let mut out = io::stdout().lock();
    write!(out, "{question}")?;
    out.flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)
        .context("cannot read from standard input")?;
    Ok(line.trim().to_string())
}

fn write_html(path: &Path, scale: &ColorScale) -> Result<()> {
    let mut fh = BufWriter::new(File::create(path)?);
    render::html(&mut fh, scale)?;
    fh.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let color = match args.color {
        Some(c) => c.trim().to_string(),
        None => prompt("HEX color (e.g. #036A8B): ")?,
    };
    let scheme = ScaleScheme::from(args.scheme);
    let level = match (scheme, args.level) {
        (ScaleScheme::AnchorRelative, None) =>
            Some(prompt(&format!("Level of {color} ({}): ",
                                 LEVELS.join(", ")))?),
        (_, level) => level,
    };
    let scale = generate_scale(&color, scheme, level.as_deref())
        .with_context(|| format!("cannot generate a scale for “{color}”"))?;

    let mut out = io::stdout().lock();
    match args.format {
        Format::Table => render::table(&mut out, &scale)?,
        Format::Json => render::json(&mut out, &scale)?,
    }
    drop(out);

    if !args.no_html {
        write_html(&args.html, &scale).with_context(|| {
            format!("cannot write the HTML preview to {}", args.html.display())
        })?;
        info!("HTML preview written to {}", args.html.display());
    }
    Ok(())
}
