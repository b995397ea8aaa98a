//! Command execution.

use crate::{Commands, EncodeCommands, MessageKind};
use colored::Colorize;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sigbuf_val::{
    DataEntry, Datapoint, EntryUpdate, GetRequest, GetResponse, GetServerInfoRequest,
    GetServerInfoResponse, SetRequest, SetResponse,
};
use sigbuf_wire::{decode, decode_varint, encode_to_bytes, ReadStream, Tag, WireMessage, WireType};
use std::path::PathBuf;
use tracing::debug;

/// Executes a command and returns the formatted output.
pub fn execute(cmd: Commands) -> Result<String, Box<dyn std::error::Error>> {
    match cmd {
        Commands::Decode {
            kind,
            hex,
            file,
            compact,
        } => {
            let bytes = read_input(hex, file)?;
            debug!(len = bytes.len(), "decoding frame");
            decode_rendered(kind, &bytes, compact)
        }

        Commands::Encode { message } => match message {
            EncodeCommands::Get { paths, out } => emit(&GetRequest::current_values(paths), out),

            EncodeCommands::Set { path, value, out } => {
                let value = value.to_value()?;
                emit(&SetRequest::current_value(path, value), out)
            }

            EncodeCommands::ServerInfo { out } => emit(&GetServerInfoRequest::default(), out),

            EncodeCommands::Json { kind, json, out } => {
                let text = read_json_arg(&json)?;
                encode_json(kind, &text, out)
            }
        },

        Commands::Inspect { hex, file } => {
            let bytes = read_input(hex, file)?;
            inspect(&bytes)
        }
    }
}

/// Reads wire bytes from `--hex` or `--file`, whichever was given.
fn read_input(
    hex_arg: Option<String>,
    file: Option<PathBuf>,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    match (hex_arg, file) {
        (Some(text), None) => {
            let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
            Ok(hex::decode(compact)?)
        }
        (None, Some(path)) => Ok(std::fs::read(path)?),
        _ => Err("provide exactly one of --hex or --file".into()),
    }
}

/// Reads a JSON argument (either inline JSON or @file.json).
fn read_json_arg(arg: &str) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(path) = arg.strip_prefix('@') {
        Ok(std::fs::read_to_string(path)?)
    } else {
        Ok(arg.to_string())
    }
}

fn decode_rendered(
    kind: MessageKind,
    bytes: &[u8],
    compact: bool,
) -> Result<String, Box<dyn std::error::Error>> {
    match kind {
        MessageKind::GetRequest => render::<GetRequest>(bytes, compact),
        MessageKind::GetResponse => render::<GetResponse>(bytes, compact),
        MessageKind::SetRequest => render::<SetRequest>(bytes, compact),
        MessageKind::SetResponse => render::<SetResponse>(bytes, compact),
        MessageKind::ServerInfoRequest => render::<GetServerInfoRequest>(bytes, compact),
        MessageKind::ServerInfoResponse => render::<GetServerInfoResponse>(bytes, compact),
        MessageKind::Datapoint => render::<Datapoint>(bytes, compact),
        MessageKind::DataEntry => render::<DataEntry>(bytes, compact),
        MessageKind::EntryUpdate => render::<EntryUpdate>(bytes, compact),
    }
}

fn render<M>(bytes: &[u8], compact: bool) -> Result<String, Box<dyn std::error::Error>>
where
    M: WireMessage + Default + Serialize,
{
    let message: M = decode(bytes)?;
    if compact {
        Ok(serde_json::to_string(&message)?)
    } else {
        Ok(serde_json::to_string_pretty(&message)?)
    }
}

fn encode_json(
    kind: MessageKind,
    json: &str,
    out: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    match kind {
        MessageKind::GetRequest => emit_json::<GetRequest>(json, out),
        MessageKind::GetResponse => emit_json::<GetResponse>(json, out),
        MessageKind::SetRequest => emit_json::<SetRequest>(json, out),
        MessageKind::SetResponse => emit_json::<SetResponse>(json, out),
        MessageKind::ServerInfoRequest => emit_json::<GetServerInfoRequest>(json, out),
        MessageKind::ServerInfoResponse => emit_json::<GetServerInfoResponse>(json, out),
        MessageKind::Datapoint => emit_json::<Datapoint>(json, out),
        MessageKind::DataEntry => emit_json::<DataEntry>(json, out),
        MessageKind::EntryUpdate => emit_json::<EntryUpdate>(json, out),
    }
}

fn emit_json<M>(json: &str, out: Option<PathBuf>) -> Result<String, Box<dyn std::error::Error>>
where
    M: WireMessage + DeserializeOwned,
{
    let message: M = serde_json::from_str(json)?;
    emit(&message, out)
}

/// Encodes `message`, then prints hex or writes the bytes to `out`.
fn emit<M: WireMessage>(
    message: &M,
    out: Option<PathBuf>,
) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = encode_to_bytes(message)?;
    debug!(len = bytes.len(), "encoded frame");
    match out {
        Some(path) => {
            std::fs::write(&path, &bytes)?;
            Ok(format!(
                "{} {} bytes to {}",
                "Wrote".green(),
                bytes.len(),
                path.display().to_string().cyan()
            ))
        }
        None => Ok(hex::encode(&bytes)),
    }
}

/// Walks raw wire bytes and lists each field's tag and payload.
fn inspect(bytes: &[u8]) -> Result<String, Box<dyn std::error::Error>> {
    let mut stream = ReadStream::new(bytes);
    let mut output = format!(
        "{} ({} bytes)\n{:<6}  {:<5}  {:<18}  value\n",
        "Wire layout".bold(),
        bytes.len(),
        "offset",
        "field",
        "wire"
    );

    while !stream.is_empty() {
        let offset = bytes.len() - stream.remaining();
        let tag = Tag::decode(&mut stream)?;
        let detail = match tag.wire_type {
            WireType::Varint => decode_varint(&mut stream)?.to_string(),
            WireType::Fixed64 => format!("0x{}", hex::encode(stream.read(8)?)),
            WireType::Fixed32 => format!("0x{}", hex::encode(stream.read(4)?)),
            WireType::LengthDelimited => {
                let len = decode_varint(&mut stream)?;
                let payload = stream.read(len as usize)?;
                format!("{} bytes, {}", len, preview(payload))
            }
        };
        output.push_str(&format!(
            "{:06x}  {:<5}  {:<18}  {}\n",
            offset,
            tag.field_number,
            tag.wire_type.to_string(),
            detail
        ));
    }

    Ok(output)
}

/// Shows a length-delimited payload as text when printable, hex otherwise.
fn preview(payload: &[u8]) -> String {
    if payload.is_empty() {
        return "empty".to_string();
    }
    if let Ok(text) = std::str::from_utf8(payload) {
        if text.chars().all(|c| !c.is_control()) {
            if text.chars().count() > 40 {
                let head: String = text.chars().take(40).collect();
                return format!("\"{}\"...", head);
            }
            return format!("\"{}\"", text);
        }
    }
    if payload.len() > 16 {
        format!("0x{}...", hex::encode(&payload[..16]))
    } else {
        format!("0x{}", hex::encode(payload))
    }
}
