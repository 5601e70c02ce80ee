//! Example: Convert an audio file to qoa format and back
//!
//! Run with: cargo run --example convert_audio input.mp3 output.qoa

use reqoa::{decode_to_wav, encode_from_audio, get_qoa_info};
use std::env;
use std::fs;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <input-audio> <output-qoa>", args[0]);
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = &args[2];

    println!("Reading {}...", input_path);
    let audio_bytes = fs::read(input_path)?;

    // Get audio info
    let info = reqoa::get_audio_info(&audio_bytes)?;
    println!("  Sample rate: {} Hz", info.sample_rate);
    println!("  Channels: {}", info.channels);
    println!("  Duration: {:.2}s", info.duration_secs);

    // Encode
    println!("\nEncoding to qoa...");
    let qoa_bytes = encode_from_audio(&audio_bytes)?;

    // Show compression stats
    let original_size = audio_bytes.len();
    let compressed_size = qoa_bytes.len();
    let ratio = original_size as f32 / compressed_size as f32;

    println!("  Original: {} bytes", original_size);
    println!("  Compressed: {} bytes", compressed_size);
    println!("  Ratio: {:.1}x", ratio);

    // Write to file
    fs::write(output_path, &qoa_bytes)?;
    println!("\nWrote qoa file to {}", output_path);

    // Get qoa file info
    let qoa_info = get_qoa_info(&qoa_bytes)?;
    println!("\nqoa File Info:");
    println!("  Sample rate: {} Hz", qoa_info.sample_rate);
    println!("  Channels: {}", qoa_info.channels);
    println!("  Duration: {:.2}s", qoa_info.duration_secs);
    println!("  Frames: {}", qoa_info.frames);

    // Decode back to WAV for verification
    println!("\nDecoding back to WAV for verification...");
    let wav_bytes = decode_to_wav(&qoa_bytes)?;
    let wav_path = output_path.replace(".qoa", "_decoded.wav");
    fs::write(&wav_path, wav_bytes)?;
    println!("Wrote decoded WAV to {}", wav_path);

    Ok(())
}
