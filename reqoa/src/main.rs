use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "reqoa")]
#[command(version = "0.1.0")]
#[command(about = "qoa audio format converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode audio file to qoa format
    Encode {
        /// Input audio file (mp3, wav, flac, ogg, etc.)
        input: PathBuf,
        /// Output qoa file
        output: PathBuf,
    },
    /// Decode qoa file to WAV
    Decode {
        /// Input qoa file
        input: PathBuf,
        /// Output WAV file
        output: PathBuf,
    },
    /// Show information about a qoa file
    Info {
        /// Input qoa file
        input: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a qoa file by decoding it in full
    Validate {
        /// Input qoa file
        input: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode { input, output } => {
            encode(&input, &output)?;
        }
        Commands::Decode { input, output } => {
            decode(&input, &output)?;
        }
        Commands::Info { input, json } => {
            info(&input, json)?;
        }
        Commands::Validate { input } => {
            validate(&input)?;
        }
    }

    Ok(())
}

fn encode(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Reading {}...", input.display());

    // Read audio file
    let audio_bytes = fs::read(input).context("Failed to read input file")?;

    let info = reqoa::get_audio_info(&audio_bytes).context("Failed to read audio file")?;

    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Channels: {}", info.channels);
    println!("  Duration: {:.2}s", info.duration_secs);

    println!("Encoding to qoa...");

    let qoa_data = reqoa::encode_from_audio(&audio_bytes).context("Failed to encode audio")?;

    fs::write(output, &qoa_data).context("Failed to write output file")?;

    let original_size =
        (info.sample_rate as f32 * info.channels as f32 * info.duration_secs * 2.0) as usize;
    let compressed_size = qoa_data.len();
    let ratio = original_size as f32 / compressed_size as f32;

    println!("Done!");
    println!("  Output: {}", output.display());
    println!(
        "  Size: {} bytes ({:.1}x compression)",
        compressed_size, ratio
    );

    Ok(())
}

fn decode(input: &PathBuf, output: &PathBuf) -> Result<()> {
    println!("Reading {}...", input.display());

    let qoa_data = fs::read(input).context("Failed to read qoa file")?;

    // Get info first
    let file_info = reqoa::get_qoa_info(&qoa_data)?;

    println!("  Sample rate: {} Hz", file_info.sample_rate);
    println!("  Channels: {}", file_info.channels);
    println!("  Duration: {:.2}s", file_info.duration_secs);

    println!("Decoding...");

    let wav_bytes = reqoa::decode_to_wav(&qoa_data).context("Failed to decode qoa file")?;

    println!("Writing WAV...");

    fs::write(output, wav_bytes).context("Failed to write WAV file")?;

    println!("Done!");
    println!("  Output: {}", output.display());

    Ok(())
}

fn info(input: &PathBuf, json: bool) -> Result<()> {
    let qoa_data = fs::read(input).context("Failed to read qoa file")?;

    let file_info = reqoa::get_qoa_info(&qoa_data)?;

    if json {
        let json_str =
            serde_json::to_string_pretty(&file_info).context("Failed to serialize info")?;
        println!("{}", json_str);
        return Ok(());
    }

    println!("qoa Audio File");
    println!("───────────────────────────────");
    println!("  Sample rate: {} Hz", file_info.sample_rate);
    println!("  Channels:    {}", file_info.channels);
    println!("  Samples:     {} per channel", file_info.samples_per_channel);
    println!("  Duration:    {:.2}s", file_info.duration_secs);
    println!("  Frames:      {}", file_info.frames);
    println!("  File size:   {} bytes", file_info.file_size);
    println!("  Compression: {:.1}x", file_info.compression_ratio);

    Ok(())
}

fn validate(input: &PathBuf) -> Result<()> {
    let qoa_data = fs::read(input).context("Failed to read qoa file")?;

    match reqoa::validate_qoa(&qoa_data) {
        Ok(()) => {
            println!("✓ {} is a valid qoa file", input.display());
            Ok(())
        }
        Err(e) => bail!("✗ {}: {}", input.display(), e),
    }
}
