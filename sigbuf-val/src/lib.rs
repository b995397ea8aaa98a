//! # sigbuf-val
//!
//! Vehicle-signal message catalog for the sigbuf wire codec.
//!
//! This crate defines the broker's VAL message set as plain Rust
//! structs, each paired with a static descriptor table that drives
//! `sigbuf-wire`'s streaming encode/decode engines:
//!
//! - Signal values ([`Value`]) and timestamped datapoints ([`Datapoint`])
//! - Entries binding a path to its value and actuation target ([`DataEntry`])
//! - Read and write exchanges ([`GetRequest`]/[`GetResponse`],
//!   [`SetRequest`]/[`SetResponse`])
//! - Server identity ([`GetServerInfoRequest`]/[`GetServerInfoResponse`])
//!
//! Decoding is memory-bounded: strings are capped at
//! [`limits::MAX_STRING_BYTES`] and repeated fields at
//! [`limits::MAX_ENTRIES`].

pub mod limits;
pub mod types;
pub mod val;
pub mod value;

pub use types::{DataEntry, DataEntryError, Datapoint, Error, Field, Timestamp, View};
pub use val::{
    EntryRequest, EntryUpdate, GetRequest, GetResponse, GetServerInfoRequest,
    GetServerInfoResponse, SetRequest, SetResponse,
};
pub use value::{Value, ValueKind};
