use std::{fs, path::Path};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::info;
use rhuffman::{build_codec, decode, encode, load_reverse_table, EncodedText};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode text into a string of bits
    Encode {
        /// Text to encode, or the name of a .txt file containing it
        input: String,

        /// Save the encoding map (the key) to this file
        #[arg(short, long)]
        key_out: Option<String>,

        /// Save the encoded text to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Decode a string of bits with a previously saved key
    Decode {
        /// Encoded text, or the name of a .txt file containing it
        input: String,

        /// Encoding map, or the name of a .txt file containing it
        #[arg(short, long, env = "RHUFFMAN_KEY")]
        key: String,
    },
}

fn main() -> Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("warn"));
    let args = Args::parse();

    println!("{}", run(args)?);
    Ok(())
}

/// Executes one subcommand and returns the line to print.
fn run(args: Args) -> Result<String> {
    match args.command {
        Commands::Encode {
            input,
            key_out,
            output,
        } => {
            let text = read_input(&input)?;
            let table = build_codec(&text).context("failed to build the encoding map")?;
            let encoded = encode(&text, &table)?;

            if let Some(path) = key_out {
                write_output(&path, &table.to_string())?;
                info!("encoding map saved to {}", path);
            }
            if let Some(path) = output {
                write_output(&path, encoded.as_str())?;
                info!("encoded text saved to {}", path);
            }

            Ok(format!("Encoded Text: {}", encoded))
        }
        Commands::Decode { input, key } => {
            let encoded: EncodedText = read_input(&input)?
                .parse()
                .context("encoded text must only contain '0' and '1'")?;
            let reverse = load_reverse_table(&read_input(&key)?)
                .context("failed to load the encoding map")?;
            let decoded = decode(&encoded, &reverse).context("failed to decode")?;

            Ok(format!("Decoded Text: {}", decoded))
        }
    }
}

/// Arguments ending in `.txt` name a file to read, anything else is used as is.
fn read_input(arg: &str) -> Result<String> {
    if !arg.ends_with(".txt") {
        return Ok(arg.to_string());
    }
    let content =
        fs::read_to_string(arg).with_context(|| format!("Error reading file \"{}\"", arg))?;
    Ok(strip_line_ending(content))
}

fn strip_line_ending(mut content: String) -> String {
    if content.ends_with('\n') {
        content.pop();
        if content.ends_with('\r') {
            content.pop();
        }
    }
    content
}

fn write_output(path: &str, content: &str) -> Result<()> {
    fs::write(Path::new(path), content)
        .with_context(|| format!("Error writing file \"{}\"", path))
}
