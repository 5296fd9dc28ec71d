/* Command line front end for the pink noise generator.
Dumps raw samples for parity checks, bounces to WAV, or plays on the default device.
*/

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufWriter, Write};

use pinknoise::utils::init_logger;
use pinknoise::PinkNoise;

/// Voss-McCartney pink noise generator
#[derive(Parser, Debug)]
#[command(name = "pinknoise")]
#[command(about = "Deterministic pink noise generator", long_about = None)]
struct Args {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print samples from a fresh generator with their f32 bit patterns
    Dump {
        /// Number of samples to print
        #[arg(short = 'n', long, default_value_t = 16)]
        count: usize,
    },

    /// Render pink noise to a 16-bit mono WAV file
    #[cfg(feature = "bounce")]
    Bounce {
        /// Output WAV path
        #[arg(short, long)]
        out: std::path::PathBuf,

        /// Sample rate in Hz
        #[arg(long, default_value_t = 22_050)]
        sample_rate: u32,

        /// Length in seconds
        #[arg(long, default_value_t = 1.0)]
        seconds: f32,

        /// Linear gain (0.0-1.0)
        #[arg(long, default_value_t = 1.0)]
        gain: f32,
    },

    /// Play pink noise on the default output device until Enter is pressed
    #[cfg(feature = "native")]
    Play {
        /// Linear gain (0.0-1.0)
        #[arg(long, default_value_t = 0.5)]
        gain: f32,
    },
}

fn dump(count: usize) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut noise = PinkNoise::new();

    for i in 0..count {
        let sample = noise.tick();
        writeln!(out, "{:>8} {:>14.10} 0x{:08X}", i, sample, sample.to_bits())
            .context("Failed to write to stdout")?;
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}

#[cfg(feature = "bounce")]
fn bounce(out: &std::path::Path, sample_rate: u32, seconds: f32, gain: f32) -> Result<()> {
    use pinknoise::bounce::{render_to_wav, BounceConfig};

    let config = BounceConfig::new(sample_rate, seconds, gain);
    if config.sample_rate != sample_rate {
        log::warn!("Sample rate {} Hz out of range, using {} Hz", sample_rate, config.sample_rate);
    }

    let frames = render_to_wav(out, &config)?;
    println!("Wrote {} frames to {}", frames, out.display());
    Ok(())
}

#[cfg(feature = "native")]
fn play(gain: f32) -> Result<()> {
    use pinknoise::platform::{AudioEngine, AudioOutput, CpalOutput};

    let mut cpal_output = CpalOutput::new();
    cpal_output.initialize(44100.0)?;

    // Voice gain is applied inside the audio callback
    let audio_engine = AudioEngine::new(cpal_output.sample_rate());
    audio_engine.with_voice(|voice| voice.set_gain(gain));

    cpal_output.create_stream_with_voice(audio_engine.voice())?;
    cpal_output.start()?;

    println!("Playing pink noise at gain {:.2}, press Enter to stop", gain);
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read from stdin")?;

    cpal_output.stop()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logger(args.verbose);

    match args.command {
        Command::Dump { count } => dump(count),
        #[cfg(feature = "bounce")]
        Command::Bounce {
            out,
            sample_rate,
            seconds,
            gain,
        } => bounce(&out, sample_rate, seconds, gain),
        #[cfg(feature = "native")]
        Command::Play { gain } => play(gain),
    }
}
