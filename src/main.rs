mod constants;
mod icon;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "appicon-gen")]
#[command(about = "Generate placeholder app icons for iOS App Store submission", long_about = None)]
struct Cli {
    /// Directory to write the PNG files into (must already exist)
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let count = icon::generate_all(&cli.out_dir)?;

    println!("\n✅ Generated {} icon files in {}", count, cli.out_dir.display());
    println!("📱 Icons ready for App Store submission!");
    Ok(())
}
