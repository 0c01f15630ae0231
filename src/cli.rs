use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use qrglass_api::constants::{DEFAULT_OUTPUT_FILE, DEFAULT_OUTPUT_SIZE};
use qrglass_api::request::{BadgeMode, Theme};

#[derive(Parser)]
#[command(version, author, about, long_about = None)]
pub struct Cli {
    /// Optional path to a settings JSON file
    #[arg(short, long, value_name = "FILE")]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a styled QR code PNG for the given text
    Generate(GenerateArgs),

    /// Configure the CLI (theme preference)
    Config(ConfigArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Text or URL to encode
    pub text: String,

    /// How the center badge text is derived
    #[arg(long, value_enum, default_value_t = BadgeMode::Auto)]
    pub badge: BadgeMode,

    /// Edge length of the exported PNG in pixels
    #[arg(long, default_value_t = DEFAULT_OUTPUT_SIZE, value_parser = parse_output_size)]
    pub size: u32,

    /// Theme for this run, overriding the saved preference
    #[arg(long, value_enum)]
    pub theme: Option<Theme>,

    /// Output file path
    #[arg(long, value_name = "FILE", default_value = DEFAULT_OUTPUT_FILE)]
    pub out: PathBuf,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Theme preference to persist (light/dark)
    #[arg(long, value_enum)]
    pub theme: Theme,
}

fn parse_output_size(s: &str) -> Result<u32, String> {
    let v: u32 = s
        .trim()
        .parse()
        .map_err(|_| String::from("Output size must be a positive integer"))?;
    if (480..=2000).contains(&v) {
        Ok(v)
    } else {
        Err("Output size must be between 480 and 2000 pixels".into())
    }
}
