/// huff – encode text with a Huffman code and inspect the result.
///
///   huff demo                    → encode and decode "Hello, World!"
///   huff demo "some text"        → same for any text
///   huff codes "some text"       → print the code table and tree
///   huff decode "some text" 0110 → decode bits against the tree for the text
///
/// Trees are never written anywhere, so decoding always rebuilds the tree
/// from the text it came from.
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use log::{info, LevelFilter, Log, Metadata, Record};

use huffcode::frequency::get_frequency;
use huffcode::{BuildOptions, Codec, TieBreak};

#[derive(Parser)]
#[command(name = "huff")]
#[command(about = "Huffman-code text and inspect the resulting codes", long_about = None)]
#[command(version)]
struct Cli {
    /// Log more (repeat for debug and trace output)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,
    /// Order among equal-weight nodes while building the tree
    #[arg(long, value_enum, default_value_t = TieBreakArg::Fifo, global = true)]
    tie_break: TieBreakArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum TieBreakArg {
    /// Oldest node first (minimum-variance codes)
    Fifo,
    /// Newest node first
    Lifo,
}

impl From<TieBreakArg> for TieBreak {
    fn from(arg: TieBreakArg) -> Self {
        match arg {
            TieBreakArg::Fifo => TieBreak::Fifo,
            TieBreakArg::Lifo => TieBreak::Lifo,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Encode TEXT, print the bits, then decode them back
    Demo {
        #[arg(default_value = "Hello, World!")]
        text: String,
    },
    /// Print the code table, entropy, and tree built from TEXT
    Codes { text: String },
    /// Decode BITS against the tree built from TEXT
    Decode { text: String, bits: String },
}

/// Writes log records to stderr.
struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}: {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => LevelFilter::Off,
        (false, 0) => LevelFilter::Warn,
        (false, 1) => LevelFilter::Info,
        (false, 2) => LevelFilter::Debug,
        (false, _) => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn demo(codec: &mut Codec<char>, text: &str) -> anyhow::Result<()> {
    println!("Original text: {}", text);
    let encoded = codec.encode_str(text);
    println!("Encoded text: {}", encoded);
    let decoded = codec.decode_str(&encoded).context("decoding failed")?;
    println!("Decoded text: {}", decoded);

    info!(
        "{} chars -> {} bits ({} bits uncompressed as UTF-8)",
        text.chars().count(),
        encoded.len(),
        text.len() * 8
    );
    if decoded != text {
        bail!("round trip mismatch");
    }
    Ok(())
}

fn codes(codec: &mut Codec<char>, text: &str) {
    let symbols: Vec<char> = text.chars().collect();
    let freq = get_frequency(&symbols);
    codec.encode(&symbols);

    println!("  SYMBOL  COUNT  CODE");
    for (symbol, code) in codec.table().iter() {
        println!("  {:6}  {:>5}  {}", format!("{:?}", symbol), freq.get(symbol), code);
    }
    println!();
    println!("entropy:             {:.4} bits/symbol", freq.entropy());
    println!(
        "average code length: {:.4} bits/symbol",
        codec.table().average_code_length(&freq)
    );
    if let Some(tree) = codec.tree() {
        println!();
        print!("{}", tree);
    }
}

fn decode(codec: &mut Codec<char>, text: &str, bits: &str) -> anyhow::Result<()> {
    codec.encode_str(text);
    let decoded = codec
        .decode_str(bits)
        .with_context(|| format!("cannot decode against the tree for {:?}", text))?;
    println!("{}", decoded);
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut codec = Codec::with_options(BuildOptions {
        tie_break: cli.tie_break.into(),
    });
    match cli.command {
        Commands::Demo { text } => demo(&mut codec, &text)?,
        Commands::Codes { text } => codes(&mut codec, &text),
        Commands::Decode { text, bits } => decode(&mut codec, &text, &bits)?,
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("huff: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
