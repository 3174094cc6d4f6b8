//! humdrum - render a sine tone as raw PCM
//!
//! Writes mono, big-endian f64 samples with no header to stdout (or a file).
//! Play the result with e.g. `humdrum | ffplay -f f64be -ar 44100 -ac 1 -`.

use std::fs::File;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use humdrum::{ToneConfig, render_tone_to};

const USAGE: &str = "\
Usage: humdrum [OPTIONS]

Renders a sine tone as headerless mono 64-bit big-endian float PCM.

Options:
  -f, --frequency <HZ>   Oscillator frequency in Hz [default: 440]
  -d, --duration <SECS>  Length of the tone in seconds [default: 5]
  -r, --rate <HZ>        Sample rate in Hz [default: 44100]
  -o, --output <PATH>    Write to a file instead of stdout
  -h, --help             Print this help";

/// Parsed command line.
#[derive(Debug, PartialEq)]
struct Args {
    config: ToneConfig,
    output: Option<PathBuf>,
    help: bool,
}

impl Args {
    fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Args {
            config: ToneConfig::default(),
            output: None,
            help: false,
        };
        let mut args = args.into_iter();
        while let Some(flag) = args.next() {
            if flag == "-h" || flag == "--help" {
                parsed.help = true;
                continue;
            }
            let value = args
                .next()
                .with_context(|| format!("Missing value for {flag}"))?;
            match flag.as_str() {
                "-f" | "--frequency" => {
                    parsed.config.frequency = value
                        .parse()
                        .with_context(|| format!("Invalid frequency: {value}"))?;
                }
                "-d" | "--duration" => {
                    let secs: f64 = value
                        .parse()
                        .with_context(|| format!("Invalid duration: {value}"))?;
                    parsed.config.duration = Duration::try_from_secs_f64(secs)
                        .with_context(|| format!("Invalid duration: {value}"))?;
                }
                "-r" | "--rate" => {
                    parsed.config.sample_rate = value
                        .parse()
                        .with_context(|| format!("Invalid sample rate: {value}"))?;
                }
                "-o" | "--output" => parsed.output = Some(PathBuf::from(value)),
                _ => bail!("Unknown option: {flag}\n\n{USAGE}"),
            }
        }
        Ok(parsed)
    }
}

fn main() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;
    if args.help {
        println!("{USAGE}");
        return Ok(());
    }

    let config = args.config;
    let window = config.window().context("Invalid sampling parameters")?;
    eprintln!(
        "Rendering {} Hz for {:?}: {} frames, f64be mono @ {} Hz",
        config.frequency,
        config.duration,
        window.len(),
        config.sample_rate
    );

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            render_tone_to(&config, file)
                .with_context(|| format!("Failed to write {}", path.display()))?
        }
        None => render_tone_to(&config, stdout().lock()).context("Failed to write stdout")?,
    };

    eprintln!("Wrote {written} bytes");
    Ok(())
}
