//! Core signal types: timestamps, datapoints, entries, errors.
//!
//! Each message pairs a plain struct with a hand-written descriptor
//! table. Field numbers follow the broker's published layout and are
//! normative for wire compatibility; tables are sorted by number, so
//! encoded output is ascending and deterministic.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use sigbuf_wire::{
    decode_nested, decode_string, encode_nested_field, encode_string_field, Accessor,
    FieldDescriptor, FieldKind, Label, MessageDescriptor, ReadStream, ScalarKind, WireError,
    WireMessage, WriteStream,
};

use crate::limits::MAX_STRING_BYTES;
use crate::value::{Value, ValueKind};

/// Wall-clock instant: whole seconds since the Unix epoch plus
/// sub-second nanoseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    /// Captures the current wall-clock time.
    pub fn now() -> Self {
        let now = Utc::now();
        Timestamp {
            seconds: now.timestamp(),
            nanos: now.timestamp_subsec_nanos() as i32,
        }
    }

    /// Converts to a chrono instant. `None` when out of chrono's range.
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        if self.nanos < 0 {
            return None;
        }
        Utc.timestamp_opt(self.seconds, self.nanos as u32).single()
    }

    /// Builds from a chrono instant.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Timestamp {
            seconds: dt.timestamp(),
            nanos: dt.timestamp_subsec_nanos() as i32,
        }
    }
}

static TIMESTAMP_FIELDS: &[FieldDescriptor<Timestamp>] = &[
    FieldDescriptor {
        number: 1,
        name: "seconds",
        label: Label::Optional,
        kind: FieldKind::Scalar(ScalarKind::Int64(Accessor {
            set: |m, v| m.seconds = v,
            get: |m| (m.seconds != 0).then_some(m.seconds),
        })),
    },
    FieldDescriptor {
        number: 2,
        name: "nanos",
        label: Label::Optional,
        kind: FieldKind::Scalar(ScalarKind::Int32(Accessor {
            set: |m, v| m.nanos = v,
            get: |m| (m.nanos != 0).then_some(m.nanos),
        })),
    },
];

static TIMESTAMP: MessageDescriptor<Timestamp> = MessageDescriptor {
    name: "Timestamp",
    fields: TIMESTAMP_FIELDS,
};

impl WireMessage for Timestamp {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &TIMESTAMP
    }
}

/// A timestamped signal value.
///
/// The value lives in a single slot shared by fields 11 through 18;
/// whichever member decodes last wins.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Datapoint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl Datapoint {
    /// Creates a datapoint carrying `value`, without a timestamp.
    pub fn new(value: impl Into<Value>) -> Self {
        Datapoint {
            timestamp: None,
            value: Some(value.into()),
        }
    }

    /// Creates a datapoint stamped with the current time.
    pub fn timestamped(value: impl Into<Value>) -> Self {
        Datapoint {
            timestamp: Some(Timestamp::now()),
            value: Some(value.into()),
        }
    }

    /// Sets the timestamp.
    pub fn with_timestamp(mut self, timestamp: Timestamp) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Discriminant of the carried value, if any.
    pub fn value_kind(&self) -> Option<ValueKind> {
        self.value.as_ref().map(Value::kind)
    }
}

fn dec_dp_timestamp(
    m: &mut Datapoint,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<Datapoint>,
) -> Result<(), WireError> {
    m.timestamp = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_dp_timestamp(
    m: &Datapoint,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<Datapoint>,
) -> Result<(), WireError> {
    if let Some(timestamp) = &m.timestamp {
        encode_nested_field(stream, field.number, timestamp)?;
    }
    Ok(())
}

fn dec_dp_string(
    m: &mut Datapoint,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<Datapoint>,
) -> Result<(), WireError> {
    m.value = Some(Value::String(decode_string(stream, MAX_STRING_BYTES)?));
    Ok(())
}

fn enc_dp_string(
    m: &Datapoint,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<Datapoint>,
) -> Result<(), WireError> {
    if let Some(Value::String(s)) = &m.value {
        encode_string_field(stream, field.number, s)?;
    }
    Ok(())
}

static DATAPOINT_FIELDS: &[FieldDescriptor<Datapoint>] = &[
    FieldDescriptor {
        number: 1,
        name: "timestamp",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_dp_timestamp,
            encode: enc_dp_timestamp,
        },
    },
    FieldDescriptor {
        number: 11,
        name: "string",
        label: Label::Oneof(1),
        kind: FieldKind::Handler {
            decode: dec_dp_string,
            encode: enc_dp_string,
        },
    },
    FieldDescriptor {
        number: 12,
        name: "bool",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Bool(Accessor {
            set: |m, v| m.value = Some(Value::Bool(v)),
            get: |m| match &m.value {
                Some(Value::Bool(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 13,
        name: "int32",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Int32(Accessor {
            set: |m, v| m.value = Some(Value::Int32(v)),
            get: |m| match &m.value {
                Some(Value::Int32(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 14,
        name: "int64",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Int64(Accessor {
            set: |m, v| m.value = Some(Value::Int64(v)),
            get: |m| match &m.value {
                Some(Value::Int64(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 15,
        name: "uint32",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Uint32(Accessor {
            set: |m, v| m.value = Some(Value::Uint32(v)),
            get: |m| match &m.value {
                Some(Value::Uint32(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 16,
        name: "uint64",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Uint64(Accessor {
            set: |m, v| m.value = Some(Value::Uint64(v)),
            get: |m| match &m.value {
                Some(Value::Uint64(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 17,
        name: "float",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Float(Accessor {
            set: |m, v| m.value = Some(Value::Float(v)),
            get: |m| match &m.value {
                Some(Value::Float(v)) => Some(*v),
                _ => None,
            },
        })),
    },
    FieldDescriptor {
        number: 18,
        name: "double",
        label: Label::Oneof(1),
        kind: FieldKind::Scalar(ScalarKind::Double(Accessor {
            set: |m, v| m.value = Some(Value::Double(v)),
            get: |m| match &m.value {
                Some(Value::Double(v)) => Some(*v),
                _ => None,
            },
        })),
    },
];

static DATAPOINT: MessageDescriptor<Datapoint> = MessageDescriptor {
    name: "Datapoint",
    fields: DATAPOINT_FIELDS,
};

impl WireMessage for Datapoint {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &DATAPOINT
    }
}

/// A signal path with its current value and pending actuation target.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataEntry {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Datapoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actuator_target: Option<Datapoint>,
}

impl DataEntry {
    /// Creates an entry for `path` with nothing attached.
    pub fn new(path: impl Into<String>) -> Self {
        DataEntry {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Attaches the current-value datapoint.
    pub fn with_value(mut self, value: Datapoint) -> Self {
        self.value = Some(value);
        self
    }

    /// Attaches the actuation-target datapoint.
    pub fn with_actuator_target(mut self, target: Datapoint) -> Self {
        self.actuator_target = Some(target);
        self
    }
}

fn dec_entry_path(
    m: &mut DataEntry,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    m.path = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_entry_path(
    m: &DataEntry,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    if !m.path.is_empty() {
        encode_string_field(stream, field.number, &m.path)?;
    }
    Ok(())
}

fn dec_entry_value(
    m: &mut DataEntry,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    m.value = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_entry_value(
    m: &DataEntry,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    if let Some(value) = &m.value {
        encode_nested_field(stream, field.number, value)?;
    }
    Ok(())
}

fn dec_entry_target(
    m: &mut DataEntry,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    m.actuator_target = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_entry_target(
    m: &DataEntry,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<DataEntry>,
) -> Result<(), WireError> {
    if let Some(target) = &m.actuator_target {
        encode_nested_field(stream, field.number, target)?;
    }
    Ok(())
}

static DATA_ENTRY_FIELDS: &[FieldDescriptor<DataEntry>] = &[
    FieldDescriptor {
        number: 1,
        name: "path",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_entry_path,
            encode: enc_entry_path,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "value",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_entry_value,
            encode: enc_entry_value,
        },
    },
    FieldDescriptor {
        number: 3,
        name: "actuator_target",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_entry_target,
            encode: enc_entry_target,
        },
    },
];

static DATA_ENTRY: MessageDescriptor<DataEntry> = MessageDescriptor {
    name: "DataEntry",
    fields: DATA_ENTRY_FIELDS,
};

impl WireMessage for DataEntry {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &DATA_ENTRY
    }
}

/// Broker-reported failure, HTTP-like code plus text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Error {
    pub code: u32,
    pub reason: String,
    pub message: String,
}

fn dec_err_reason(
    m: &mut Error,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<Error>,
) -> Result<(), WireError> {
    m.reason = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_err_reason(
    m: &Error,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<Error>,
) -> Result<(), WireError> {
    if !m.reason.is_empty() {
        encode_string_field(stream, field.number, &m.reason)?;
    }
    Ok(())
}

fn dec_err_message(
    m: &mut Error,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<Error>,
) -> Result<(), WireError> {
    m.message = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_err_message(
    m: &Error,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<Error>,
) -> Result<(), WireError> {
    if !m.message.is_empty() {
        encode_string_field(stream, field.number, &m.message)?;
    }
    Ok(())
}

static ERROR_FIELDS: &[FieldDescriptor<Error>] = &[
    FieldDescriptor {
        number: 1,
        name: "code",
        label: Label::Optional,
        kind: FieldKind::Scalar(ScalarKind::Uint32(Accessor {
            set: |m, v| m.code = v,
            get: |m| (m.code != 0).then_some(m.code),
        })),
    },
    FieldDescriptor {
        number: 2,
        name: "reason",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_err_reason,
            encode: enc_err_reason,
        },
    },
    FieldDescriptor {
        number: 3,
        name: "message",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_err_message,
            encode: enc_err_message,
        },
    },
];

static ERROR: MessageDescriptor<Error> = MessageDescriptor {
    name: "Error",
    fields: ERROR_FIELDS,
};

impl WireMessage for Error {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &ERROR
    }
}

/// Failure scoped to one requested path.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataEntryError {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

fn dec_entry_error_path(
    m: &mut DataEntryError,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<DataEntryError>,
) -> Result<(), WireError> {
    m.path = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_entry_error_path(
    m: &DataEntryError,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<DataEntryError>,
) -> Result<(), WireError> {
    if !m.path.is_empty() {
        encode_string_field(stream, field.number, &m.path)?;
    }
    Ok(())
}

fn dec_entry_error_detail(
    m: &mut DataEntryError,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<DataEntryError>,
) -> Result<(), WireError> {
    m.error = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_entry_error_detail(
    m: &DataEntryError,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<DataEntryError>,
) -> Result<(), WireError> {
    if let Some(error) = &m.error {
        encode_nested_field(stream, field.number, error)?;
    }
    Ok(())
}

static DATA_ENTRY_ERROR_FIELDS: &[FieldDescriptor<DataEntryError>] = &[
    FieldDescriptor {
        number: 1,
        name: "path",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_entry_error_path,
            encode: enc_entry_error_path,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "error",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_entry_error_detail,
            encode: enc_entry_error_detail,
        },
    },
];

static DATA_ENTRY_ERROR: MessageDescriptor<DataEntryError> = MessageDescriptor {
    name: "DataEntryError",
    fields: DATA_ENTRY_ERROR_FIELDS,
};

impl WireMessage for DataEntryError {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &DATA_ENTRY_ERROR
    }
}

/// Which aspect of an entry a read addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Unspecified = 0,
    CurrentValue = 1,
    TargetValue = 2,
    Metadata = 3,
    Fields = 10,
    All = 20,
}

impl View {
    /// Wire value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a wire value back, falling back to `Unspecified` for values
    /// this build does not know.
    pub fn from_i32(value: i32) -> View {
        match value {
            0 => View::Unspecified,
            1 => View::CurrentValue,
            2 => View::TargetValue,
            3 => View::Metadata,
            10 => View::Fields,
            20 => View::All,
            other => {
                warn!(raw = other, "unknown view value, using unspecified");
                View::Unspecified
            }
        }
    }
}

/// Entry aspects named in get/set field masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    #[default]
    Unspecified = 0,
    Path = 1,
    Value = 2,
    ActuatorTarget = 3,
    Metadata = 10,
}

impl Field {
    /// Wire value.
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Maps a wire value back, falling back to `Unspecified` for values
    /// this build does not know.
    pub fn from_i32(value: i32) -> Field {
        match value {
            0 => Field::Unspecified,
            1 => Field::Path,
            2 => Field::Value,
            3 => Field::ActuatorTarget,
            10 => Field::Metadata,
            other => {
                warn!(raw = other, "unknown field value, using unspecified");
                Field::Unspecified
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigbuf_wire::{decode, encode_to_bytes, ErrorKind};

    #[test]
    fn test_descriptor_tables_validate() {
        Timestamp::descriptor().validate().unwrap();
        Datapoint::descriptor().validate().unwrap();
        DataEntry::descriptor().validate().unwrap();
        Error::descriptor().validate().unwrap();
        DataEntryError::descriptor().validate().unwrap();
    }

    #[test]
    fn test_timestamp_known_bytes() {
        let ts = Timestamp {
            seconds: 1,
            nanos: 2,
        };
        let bytes = encode_to_bytes(&ts).unwrap();
        assert_eq!(bytes.as_ref(), &[0x08, 0x01, 0x10, 0x02]);
    }

    #[test]
    fn test_timestamp_negative_nanos_round_trip() {
        let ts = Timestamp {
            seconds: -5,
            nanos: -1,
        };
        let bytes = encode_to_bytes(&ts).unwrap();
        let back: Timestamp = decode(&bytes).unwrap();
        assert_eq!(back, ts);
    }

    #[test]
    fn test_timestamp_datetime_conversion() {
        let now = Timestamp::now();
        let dt = now.to_datetime().unwrap();
        assert_eq!(Timestamp::from_datetime(dt), now);
        assert_eq!(
            Timestamp {
                seconds: 0,
                nanos: -1
            }
            .to_datetime(),
            None
        );
    }

    #[test]
    fn test_datapoint_float_known_bytes() {
        let dp = Datapoint::new(62.5f32);
        let bytes = encode_to_bytes(&dp).unwrap();
        // Field 17, fixed32: tag 0x8D 0x01, then 62.5f32 little-endian.
        assert_eq!(bytes.as_ref(), &[0x8D, 0x01, 0x00, 0x00, 0x7A, 0x42]);

        let back: Datapoint = decode(&bytes).unwrap();
        assert_eq!(back.value, Some(Value::Float(62.5)));
        assert_eq!(back.value_kind(), Some(ValueKind::Float));
    }

    #[test]
    fn test_datapoint_every_value_variant_round_trips() {
        let values = [
            Value::String("Vehicle.Speed".to_owned()),
            Value::Bool(true),
            Value::Int32(-40),
            Value::Int64(-1_000_000_007),
            Value::Uint32(88),
            Value::Uint64(u64::MAX),
            Value::Float(62.5),
            Value::Double(-0.125),
        ];
        for value in values {
            let dp = Datapoint::new(value.clone());
            let bytes = encode_to_bytes(&dp).unwrap();
            let back: Datapoint = decode(&bytes).unwrap();
            assert_eq!(back.value, Some(value));
        }
    }

    #[test]
    fn test_datapoint_timestamp_nests() {
        let dp = Datapoint::new(true).with_timestamp(Timestamp {
            seconds: 1_700_000_000,
            nanos: 500,
        });
        let bytes = encode_to_bytes(&dp).unwrap();
        let back: Datapoint = decode(&bytes).unwrap();
        assert_eq!(back, dp);
    }

    #[test]
    fn test_value_group_last_write_wins() {
        // int32 = 5 (field 13), then float (field 17): float stays.
        let bytes = [
            0x68, 0x05, // field 13 varint
            0x8D, 0x01, 0x00, 0x00, 0x7A, 0x42, // field 17 fixed32
        ];
        let dp: Datapoint = decode(&bytes).unwrap();
        assert_eq!(dp.value, Some(Value::Float(62.5)));

        // Reversed order: int32 stays.
        let bytes = [
            0x8D, 0x01, 0x00, 0x00, 0x7A, 0x42, // field 17
            0x68, 0x05, // field 13
        ];
        let dp: Datapoint = decode(&bytes).unwrap();
        assert_eq!(dp.value, Some(Value::Int32(5)));
    }

    #[test]
    fn test_data_entry_round_trip() {
        let entry = DataEntry::new("Vehicle.Speed")
            .with_value(Datapoint::new(62.5f32))
            .with_actuator_target(Datapoint::new(80.0f32));
        let bytes = encode_to_bytes(&entry).unwrap();
        let back: DataEntry = decode(&bytes).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_entry_path_over_limit_rejected() {
        let mut bytes = vec![0x0A, 0x81, 0x08]; // field 1, 1025 bytes declared
        bytes.extend(std::iter::repeat(b'a').take(1025));
        let err = decode::<DataEntry>(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Callback);
    }

    #[test]
    fn test_error_round_trip() {
        let error = Error {
            code: 404,
            reason: "not_found".to_owned(),
            message: "Path Vehicle.Nope does not exist".to_owned(),
        };
        let bytes = encode_to_bytes(&error).unwrap();
        let back: Error = decode(&bytes).unwrap();
        assert_eq!(back, error);
    }

    #[test]
    fn test_data_entry_error_round_trip() {
        let entry_error = DataEntryError {
            path: "Vehicle.Nope".to_owned(),
            error: Some(Error {
                code: 404,
                reason: "not_found".to_owned(),
                message: String::new(),
            }),
        };
        let bytes = encode_to_bytes(&entry_error).unwrap();
        let back: DataEntryError = decode(&bytes).unwrap();
        assert_eq!(back, entry_error);
    }

    #[test]
    fn test_view_wire_values() {
        assert_eq!(View::CurrentValue.as_i32(), 1);
        assert_eq!(View::Fields.as_i32(), 10);
        assert_eq!(View::All.as_i32(), 20);
        assert_eq!(View::from_i32(2), View::TargetValue);
        assert_eq!(View::from_i32(99), View::Unspecified);
    }

    #[test]
    fn test_field_wire_values() {
        assert_eq!(Field::Value.as_i32(), 2);
        assert_eq!(Field::Metadata.as_i32(), 10);
        assert_eq!(Field::from_i32(3), Field::ActuatorTarget);
        assert_eq!(Field::from_i32(7), Field::Unspecified);
    }
}
