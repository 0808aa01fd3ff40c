use log::{debug, LevelFilter};
use std::env;
use std::io::{self, Read, Write};
use z85_codec::{decode, decode_with_padding, encode, encode_with_padding, Result, Z85Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Encode,
    Decode,
}

#[derive(Debug)]
struct Options {
    mode: Mode,
    padding: bool,
    hex: bool,
    verbose: bool,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mode = match args.get(1).map(String::as_str) {
        Some("encode") => Mode::Encode,
        Some("decode") => Mode::Decode,
        _ => return None,
    };

    let mut options = Options {
        mode,
        padding: false,
        hex: false,
        verbose: false,
    };
    for arg in &args[2..] {
        match arg.as_str() {
            "--padding" => options.padding = true,
            "--hex" => options.hex = true,
            "--verbose" => options.verbose = true,
            _ => return None,
        }
    }
    Some(options)
}

fn init_logger(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

/// Applies the selected operation to `input` and returns the bytes to print.
fn transform(input: &[u8], options: &Options) -> Result<Vec<u8>> {
    match options.mode {
        Mode::Encode => {
            let decoded_hex;
            let bytes = if options.hex {
                // Hex text is the only non-raw input form; anything else is an argument error.
                decoded_hex = hex::decode(input.trim_ascii())
                    .map_err(|e| Z85Error::InvalidInput(e.to_string()))?;
                &decoded_hex[..]
            } else {
                input
            };
            let mut text = if options.padding {
                encode_with_padding(bytes)
            } else {
                encode(bytes)?
            };
            text.push('\n');
            Ok(text.into_bytes())
        }
        Mode::Decode => {
            let text = input.trim_ascii_end();
            let bytes = if options.padding {
                decode_with_padding(text)?
            } else {
                decode(text)?
            };
            if options.hex {
                let mut line = hex::encode(&bytes);
                line.push('\n');
                Ok(line.into_bytes())
            } else {
                Ok(bytes)
            }
        }
    }
}

fn run(options: &Options) -> Result<()> {
    let mut input = Vec::new();
    io::stdin().read_to_end(&mut input)?;
    debug!("Read {} bytes from stdin", input.len());

    let output = transform(&input, options)?;

    let mut stdout = io::stdout().lock();
    stdout.write_all(&output)?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let Some(options) = parse_args(&args) else {
        let program = args.first().map(String::as_str).unwrap_or("z85");
        eprintln!("Usage: {} <encode|decode> [--padding] [--hex] [--verbose]", program);
        eprintln!("Reads stdin and writes the result to stdout.");
        std::process::exit(1);
    };

    init_logger(options.verbose);

    if let Err(e) = run(&options) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
