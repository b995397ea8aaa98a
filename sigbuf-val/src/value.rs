//! Datapoint values.

use serde::{Deserialize, Serialize};

/// One concrete signal value.
///
/// A datapoint carries at most one of these at a time; decoding a later
/// member of the value group replaces an earlier one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    String(String),
    Bool(bool),
    Int32(i32),
    Int64(i64),
    Uint32(u32),
    Uint64(u64),
    Float(f32),
    Double(f64),
}

impl Value {
    /// The discriminant for this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::String(_) => ValueKind::String,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int32(_) => ValueKind::Int32,
            Value::Int64(_) => ValueKind::Int64,
            Value::Uint32(_) => ValueKind::Uint32,
            Value::Uint64(_) => ValueKind::Uint64,
            Value::Float(_) => ValueKind::Float,
            Value::Double(_) => ValueKind::Double,
        }
    }
}

/// Discriminant of a [`Value`], tied to its field number in the
/// datapoint value group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    String,
    Bool,
    Int32,
    Int64,
    Uint32,
    Uint64,
    Float,
    Double,
}

impl ValueKind {
    /// Field number of this member inside the datapoint value group.
    pub fn field_number(&self) -> u32 {
        match self {
            ValueKind::String => 11,
            ValueKind::Bool => 12,
            ValueKind::Int32 => 13,
            ValueKind::Int64 => 14,
            ValueKind::Uint32 => 15,
            ValueKind::Uint64 => 16,
            ValueKind::Float => 17,
            ValueKind::Double => 18,
        }
    }

    /// Inverse of [`field_number`](Self::field_number).
    pub fn from_field_number(number: u32) -> Option<ValueKind> {
        match number {
            11 => Some(ValueKind::String),
            12 => Some(ValueKind::Bool),
            13 => Some(ValueKind::Int32),
            14 => Some(ValueKind::Int64),
            15 => Some(ValueKind::Uint32),
            16 => Some(ValueKind::Uint64),
            17 => Some(ValueKind::Float),
            18 => Some(ValueKind::Double),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int32(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int64(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Uint32(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Uint64(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(v)
    }
}
