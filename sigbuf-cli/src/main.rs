//! sigbuf-cli - Command-line codec tools for sigbuf messages
//!
//! Encodes broker requests to wire bytes, decodes wire bytes to JSON,
//! and inspects raw frames tag by tag.

mod commands;

use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::Colorize;
use sigbuf_val::Value;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sigbuf-cli")]
#[command(about = "Encode, decode and inspect vehicle-signal wire messages")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode wire bytes into JSON
    Decode {
        /// Message type to decode as
        kind: MessageKind,

        /// Wire bytes as hex (whitespace ignored)
        #[arg(long)]
        hex: Option<String>,

        /// Read wire bytes from a file
        #[arg(long)]
        file: Option<PathBuf>,

        /// Print compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Encode a message to wire bytes
    Encode {
        #[command(subcommand)]
        message: EncodeCommands,
    },

    /// Walk wire bytes tag by tag without a message type
    Inspect {
        /// Wire bytes as hex (whitespace ignored)
        #[arg(long)]
        hex: Option<String>,

        /// Read wire bytes from a file
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum EncodeCommands {
    /// Read request for the current value of one or more paths
    Get {
        /// Signal path (repeat for multiple entries)
        #[arg(short, long = "path", required = true)]
        paths: Vec<String>,

        /// Write wire bytes to a file instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Write request setting the current value of a path
    Set {
        /// Signal path
        #[arg(short, long)]
        path: String,

        #[command(flatten)]
        value: ValueArg,

        /// Write wire bytes to a file instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Server identity probe (encodes to zero bytes)
    ServerInfo {
        /// Write wire bytes to a file instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Encode any message type from its JSON form
    Json {
        /// Message type to encode
        kind: MessageKind,

        /// Message JSON (or @file.json to read from file)
        json: String,

        /// Write wire bytes to a file instead of printing hex
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Message types the decode and encode-json commands understand.
#[derive(Clone, Copy, ValueEnum)]
enum MessageKind {
    GetRequest,
    GetResponse,
    SetRequest,
    SetResponse,
    ServerInfoRequest,
    ServerInfoResponse,
    Datapoint,
    DataEntry,
    EntryUpdate,
}

/// Typed value for `encode set`. Exactly one flag must be given.
#[derive(Args, Default)]
struct ValueArg {
    /// String value
    #[arg(long)]
    string: Option<String>,

    /// Boolean value
    #[arg(long = "bool")]
    boolean: Option<bool>,

    /// Signed 32-bit value
    #[arg(long)]
    int32: Option<i32>,

    /// Signed 64-bit value
    #[arg(long)]
    int64: Option<i64>,

    /// Unsigned 32-bit value
    #[arg(long)]
    uint32: Option<u32>,

    /// Unsigned 64-bit value
    #[arg(long)]
    uint64: Option<u64>,

    /// 32-bit float value
    #[arg(long)]
    float: Option<f32>,

    /// 64-bit float value
    #[arg(long)]
    double: Option<f64>,
}

impl ValueArg {
    fn to_value(&self) -> Result<Value, String> {
        let mut values = Vec::new();
        if let Some(v) = &self.string {
            values.push(Value::String(v.clone()));
        }
        if let Some(v) = self.boolean {
            values.push(Value::Bool(v));
        }
        if let Some(v) = self.int32 {
            values.push(Value::Int32(v));
        }
        if let Some(v) = self.int64 {
            values.push(Value::Int64(v));
        }
        if let Some(v) = self.uint32 {
            values.push(Value::Uint32(v));
        }
        if let Some(v) = self.uint64 {
            values.push(Value::Uint64(v));
        }
        if let Some(v) = self.float {
            values.push(Value::Float(v));
        }
        if let Some(v) = self.double {
            values.push(Value::Double(v));
        }
        match values.len() {
            1 => Ok(values.remove(0)),
            0 => Err(
                "a value flag is required (--string, --bool, --int32, --int64, --uint32, \
                 --uint64, --float or --double)"
                    .to_string(),
            ),
            _ => Err("only one value flag may be given".to_string()),
        }
    }
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    match commands::execute(cli.command) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("{}: {}", "Error".red(), e);
            std::process::exit(1);
        }
    }
}
