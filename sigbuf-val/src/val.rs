//! Request and response messages for the broker's VAL service.
//!
//! Three exchanges, each a request/response pair:
//!
//! ```text
//! GetRequest            -> GetResponse
//! SetRequest            -> SetResponse
//! GetServerInfoRequest  -> GetServerInfoResponse
//! ```
//!
//! Repeated fields are bounded by [`MAX_ENTRIES`] on decode so a
//! hostile peer cannot balloon memory with a long entry list.

use serde::{Deserialize, Serialize};

use sigbuf_wire::{
    decode_nested, decode_string, decode_varint, encode_nested_field, encode_string_field,
    encode_varint_field, Accessor, FieldDescriptor, FieldKind, Label, MessageDescriptor,
    ReadStream, ScalarKind, WireError, WireMessage, WriteStream,
};

use crate::limits::{MAX_ENTRIES, MAX_STRING_BYTES};
use crate::types::{DataEntry, DataEntryError, Datapoint, Error, Field, View};
use crate::value::Value;

/// One path a read asks for, with the view and field mask to apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryRequest {
    pub path: String,
    #[serde(skip_serializing_if = "view_is_unspecified")]
    pub view: View,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

fn view_is_unspecified(view: &View) -> bool {
    *view == View::Unspecified
}

impl EntryRequest {
    /// Request for `path` under `view`, with an empty field mask.
    pub fn new(path: impl Into<String>, view: View) -> Self {
        EntryRequest {
            path: path.into(),
            view,
            fields: Vec::new(),
        }
    }

    /// Replaces the field mask.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = Field>) -> Self {
        self.fields = fields.into_iter().collect();
        self
    }

    /// Request for the current value of `path`.
    pub fn current_value(path: impl Into<String>) -> Self {
        EntryRequest::new(path, View::CurrentValue).with_fields([Field::Value])
    }
}

fn dec_request_path(
    m: &mut EntryRequest,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<EntryRequest>,
) -> Result<(), WireError> {
    m.path = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_request_path(
    m: &EntryRequest,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<EntryRequest>,
) -> Result<(), WireError> {
    if !m.path.is_empty() {
        encode_string_field(stream, field.number, &m.path)?;
    }
    Ok(())
}

fn dec_request_fields(
    m: &mut EntryRequest,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<EntryRequest>,
) -> Result<(), WireError> {
    if m.fields.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    let raw = decode_varint(stream)? as i32;
    m.fields.push(Field::from_i32(raw));
    Ok(())
}

fn enc_request_fields(
    m: &EntryRequest,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<EntryRequest>,
) -> Result<(), WireError> {
    for f in &m.fields {
        encode_varint_field(stream, field.number, f.as_i32() as i64 as u64)?;
    }
    Ok(())
}

static ENTRY_REQUEST_FIELDS: &[FieldDescriptor<EntryRequest>] = &[
    FieldDescriptor {
        number: 1,
        name: "path",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_request_path,
            encode: enc_request_path,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "view",
        label: Label::Optional,
        kind: FieldKind::Scalar(ScalarKind::Enum(Accessor {
            set: |m, v| m.view = View::from_i32(v),
            get: |m| (m.view != View::Unspecified).then_some(m.view.as_i32()),
        })),
    },
    FieldDescriptor {
        number: 3,
        name: "fields",
        label: Label::Repeated,
        kind: FieldKind::Handler {
            decode: dec_request_fields,
            encode: enc_request_fields,
        },
    },
];

static ENTRY_REQUEST: MessageDescriptor<EntryRequest> = MessageDescriptor {
    name: "EntryRequest",
    fields: ENTRY_REQUEST_FIELDS,
};

impl WireMessage for EntryRequest {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &ENTRY_REQUEST
    }
}

/// Read request covering one or more entries.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<EntryRequest>,
}

impl GetRequest {
    /// Requests the current value of every path in `paths`.
    pub fn current_values<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<String>,
    {
        GetRequest {
            entries: paths
                .into_iter()
                .map(EntryRequest::current_value)
                .collect(),
        }
    }

    /// Appends one entry request.
    pub fn push(&mut self, entry: EntryRequest) {
        self.entries.push(entry);
    }
}

fn dec_get_entries(
    m: &mut GetRequest,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<GetRequest>,
) -> Result<(), WireError> {
    if m.entries.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    m.entries.push(decode_nested(stream)?);
    Ok(())
}

fn enc_get_entries(
    m: &GetRequest,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetRequest>,
) -> Result<(), WireError> {
    for entry in &m.entries {
        encode_nested_field(stream, field.number, entry)?;
    }
    Ok(())
}

static GET_REQUEST_FIELDS: &[FieldDescriptor<GetRequest>] = &[FieldDescriptor {
    number: 1,
    name: "entries",
    label: Label::Repeated,
    kind: FieldKind::Handler {
        decode: dec_get_entries,
        encode: enc_get_entries,
    },
}];

static GET_REQUEST: MessageDescriptor<GetRequest> = MessageDescriptor {
    name: "GetRequest",
    fields: GET_REQUEST_FIELDS,
};

impl WireMessage for GetRequest {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &GET_REQUEST
    }
}

/// Read response: matched entries plus any per-path or global errors.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetResponse {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<DataEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DataEntryError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
}

impl GetResponse {
    /// Looks up the returned entry for `path`, if any.
    pub fn entry(&self, path: &str) -> Option<&DataEntry> {
        self.entries.iter().find(|e| e.path == path)
    }

    /// The request-wide error, when the broker reported one.
    ///
    /// A zero code means "no error" on the wire and is not reported.
    pub fn broker_error(&self) -> Option<&Error> {
        self.error.as_ref().filter(|e| e.code != 0)
    }
}

fn dec_resp_entries(
    m: &mut GetResponse,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    if m.entries.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    m.entries.push(decode_nested(stream)?);
    Ok(())
}

fn enc_resp_entries(
    m: &GetResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    for entry in &m.entries {
        encode_nested_field(stream, field.number, entry)?;
    }
    Ok(())
}

fn dec_resp_errors(
    m: &mut GetResponse,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    if m.errors.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    m.errors.push(decode_nested(stream)?);
    Ok(())
}

fn enc_resp_errors(
    m: &GetResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    for error in &m.errors {
        encode_nested_field(stream, field.number, error)?;
    }
    Ok(())
}

fn dec_resp_error(
    m: &mut GetResponse,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    m.error = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_resp_error(
    m: &GetResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetResponse>,
) -> Result<(), WireError> {
    if let Some(error) = &m.error {
        encode_nested_field(stream, field.number, error)?;
    }
    Ok(())
}

static GET_RESPONSE_FIELDS: &[FieldDescriptor<GetResponse>] = &[
    FieldDescriptor {
        number: 1,
        name: "entries",
        label: Label::Repeated,
        kind: FieldKind::Handler {
            decode: dec_resp_entries,
            encode: enc_resp_entries,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "errors",
        label: Label::Repeated,
        kind: FieldKind::Handler {
            decode: dec_resp_errors,
            encode: enc_resp_errors,
        },
    },
    FieldDescriptor {
        number: 3,
        name: "error",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_resp_error,
            encode: enc_resp_error,
        },
    },
];

static GET_RESPONSE: MessageDescriptor<GetResponse> = MessageDescriptor {
    name: "GetResponse",
    fields: GET_RESPONSE_FIELDS,
};

impl WireMessage for GetResponse {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &GET_RESPONSE
    }
}

/// One entry to write plus the field mask saying which parts apply.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<DataEntry>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<Field>,
}

impl EntryUpdate {
    /// Update that writes `value` as the current value of `path`.
    pub fn current_value(path: impl Into<String>, value: impl Into<Value>) -> Self {
        EntryUpdate {
            entry: Some(DataEntry::new(path).with_value(Datapoint::new(value))),
            fields: vec![Field::Value],
        }
    }
}

fn dec_update_entry(
    m: &mut EntryUpdate,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<EntryUpdate>,
) -> Result<(), WireError> {
    m.entry = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_update_entry(
    m: &EntryUpdate,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<EntryUpdate>,
) -> Result<(), WireError> {
    if let Some(entry) = &m.entry {
        encode_nested_field(stream, field.number, entry)?;
    }
    Ok(())
}

fn dec_update_fields(
    m: &mut EntryUpdate,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<EntryUpdate>,
) -> Result<(), WireError> {
    if m.fields.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    let raw = decode_varint(stream)? as i32;
    m.fields.push(Field::from_i32(raw));
    Ok(())
}

fn enc_update_fields(
    m: &EntryUpdate,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<EntryUpdate>,
) -> Result<(), WireError> {
    for f in &m.fields {
        encode_varint_field(stream, field.number, f.as_i32() as i64 as u64)?;
    }
    Ok(())
}

static ENTRY_UPDATE_FIELDS: &[FieldDescriptor<EntryUpdate>] = &[
    FieldDescriptor {
        number: 1,
        name: "entry",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_update_entry,
            encode: enc_update_entry,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "fields",
        label: Label::Repeated,
        kind: FieldKind::Handler {
            decode: dec_update_fields,
            encode: enc_update_fields,
        },
    },
];

static ENTRY_UPDATE: MessageDescriptor<EntryUpdate> = MessageDescriptor {
    name: "EntryUpdate",
    fields: ENTRY_UPDATE_FIELDS,
};

impl WireMessage for EntryUpdate {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &ENTRY_UPDATE
    }
}

/// Write request carrying one or more entry updates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetRequest {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updates: Vec<EntryUpdate>,
}

impl SetRequest {
    /// Request that writes `value` as the current value of `path`.
    pub fn current_value(path: impl Into<String>, value: impl Into<Value>) -> Self {
        SetRequest {
            updates: vec![EntryUpdate::current_value(path, value)],
        }
    }

    /// Appends one update.
    pub fn push(&mut self, update: EntryUpdate) {
        self.updates.push(update);
    }
}

fn dec_set_updates(
    m: &mut SetRequest,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<SetRequest>,
) -> Result<(), WireError> {
    if m.updates.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    m.updates.push(decode_nested(stream)?);
    Ok(())
}

fn enc_set_updates(
    m: &SetRequest,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<SetRequest>,
) -> Result<(), WireError> {
    for update in &m.updates {
        encode_nested_field(stream, field.number, update)?;
    }
    Ok(())
}

static SET_REQUEST_FIELDS: &[FieldDescriptor<SetRequest>] = &[FieldDescriptor {
    number: 1,
    name: "updates",
    label: Label::Repeated,
    kind: FieldKind::Handler {
        decode: dec_set_updates,
        encode: enc_set_updates,
    },
}];

static SET_REQUEST: MessageDescriptor<SetRequest> = MessageDescriptor {
    name: "SetRequest",
    fields: SET_REQUEST_FIELDS,
};

impl WireMessage for SetRequest {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &SET_REQUEST
    }
}

/// Write response: a request-wide error plus per-path failures.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SetResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Error>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<DataEntryError>,
}

impl SetResponse {
    /// The request-wide error, when the broker reported one.
    ///
    /// A zero code means "no error" on the wire and is not reported.
    pub fn broker_error(&self) -> Option<&Error> {
        self.error.as_ref().filter(|e| e.code != 0)
    }
}

fn dec_set_error(
    m: &mut SetResponse,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<SetResponse>,
) -> Result<(), WireError> {
    m.error = Some(decode_nested(stream)?);
    Ok(())
}

fn enc_set_error(
    m: &SetResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<SetResponse>,
) -> Result<(), WireError> {
    if let Some(error) = &m.error {
        encode_nested_field(stream, field.number, error)?;
    }
    Ok(())
}

fn dec_set_errors(
    m: &mut SetResponse,
    stream: &mut ReadStream<'_>,
    field: &FieldDescriptor<SetResponse>,
) -> Result<(), WireError> {
    if m.errors.len() >= MAX_ENTRIES {
        return Err(WireError::callback(field.name, "too many entries"));
    }
    m.errors.push(decode_nested(stream)?);
    Ok(())
}

fn enc_set_errors(
    m: &SetResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<SetResponse>,
) -> Result<(), WireError> {
    for error in &m.errors {
        encode_nested_field(stream, field.number, error)?;
    }
    Ok(())
}

static SET_RESPONSE_FIELDS: &[FieldDescriptor<SetResponse>] = &[
    FieldDescriptor {
        number: 1,
        name: "error",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_set_error,
            encode: enc_set_error,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "errors",
        label: Label::Repeated,
        kind: FieldKind::Handler {
            decode: dec_set_errors,
            encode: enc_set_errors,
        },
    },
];

static SET_RESPONSE: MessageDescriptor<SetResponse> = MessageDescriptor {
    name: "SetResponse",
    fields: SET_RESPONSE_FIELDS,
};

impl WireMessage for SetResponse {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &SET_RESPONSE
    }
}

/// Server identity probe. Carries no fields; encodes to zero bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GetServerInfoRequest {}

static GET_SERVER_INFO_REQUEST: MessageDescriptor<GetServerInfoRequest> = MessageDescriptor {
    name: "GetServerInfoRequest",
    fields: &[],
};

impl WireMessage for GetServerInfoRequest {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &GET_SERVER_INFO_REQUEST
    }
}

/// Server identity: broker name and version string.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GetServerInfoResponse {
    pub name: String,
    pub version: String,
}

fn dec_info_name(
    m: &mut GetServerInfoResponse,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<GetServerInfoResponse>,
) -> Result<(), WireError> {
    m.name = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_info_name(
    m: &GetServerInfoResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetServerInfoResponse>,
) -> Result<(), WireError> {
    if !m.name.is_empty() {
        encode_string_field(stream, field.number, &m.name)?;
    }
    Ok(())
}

fn dec_info_version(
    m: &mut GetServerInfoResponse,
    stream: &mut ReadStream<'_>,
    _field: &FieldDescriptor<GetServerInfoResponse>,
) -> Result<(), WireError> {
    m.version = decode_string(stream, MAX_STRING_BYTES)?;
    Ok(())
}

fn enc_info_version(
    m: &GetServerInfoResponse,
    stream: &mut WriteStream<'_>,
    field: &FieldDescriptor<GetServerInfoResponse>,
) -> Result<(), WireError> {
    if !m.version.is_empty() {
        encode_string_field(stream, field.number, &m.version)?;
    }
    Ok(())
}

static GET_SERVER_INFO_RESPONSE_FIELDS: &[FieldDescriptor<GetServerInfoResponse>] = &[
    FieldDescriptor {
        number: 1,
        name: "name",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_info_name,
            encode: enc_info_name,
        },
    },
    FieldDescriptor {
        number: 2,
        name: "version",
        label: Label::Optional,
        kind: FieldKind::Handler {
            decode: dec_info_version,
            encode: enc_info_version,
        },
    },
];

static GET_SERVER_INFO_RESPONSE: MessageDescriptor<GetServerInfoResponse> = MessageDescriptor {
    name: "GetServerInfoResponse",
    fields: GET_SERVER_INFO_RESPONSE_FIELDS,
};

impl WireMessage for GetServerInfoResponse {
    fn descriptor() -> &'static MessageDescriptor<Self> {
        &GET_SERVER_INFO_RESPONSE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use sigbuf_wire::{decode, encode, encode_to_bytes, ErrorKind};

    #[test]
    fn test_descriptor_tables_validate() {
        EntryRequest::descriptor().validate().unwrap();
        GetRequest::descriptor().validate().unwrap();
        GetResponse::descriptor().validate().unwrap();
        EntryUpdate::descriptor().validate().unwrap();
        SetRequest::descriptor().validate().unwrap();
        SetResponse::descriptor().validate().unwrap();
        GetServerInfoRequest::descriptor().validate().unwrap();
        GetServerInfoResponse::descriptor().validate().unwrap();
    }

    #[test]
    fn test_get_request_known_bytes() {
        let request = GetRequest::current_values(["Vehicle.Speed"]);
        let bytes = encode_to_bytes(&request).unwrap();

        let mut expected = vec![0x0A, 0x13]; // entries, 19-byte payload
        expected.extend([0x0A, 0x0D]); // path, 13 bytes
        expected.extend(b"Vehicle.Speed");
        expected.extend([0x10, 0x01]); // view = CURRENT_VALUE
        expected.extend([0x18, 0x02]); // fields += VALUE
        assert_eq!(bytes.as_ref(), expected.as_slice());
    }

    #[test]
    fn test_entry_request_builder_round_trips() {
        let request = EntryRequest::new("Vehicle.Speed", View::All)
            .with_fields([Field::Path, Field::Metadata]);
        let bytes = encode_to_bytes(&request).unwrap();
        let back: EntryRequest = decode(&bytes).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.view, View::All);
        assert_eq!(back.fields, vec![Field::Path, Field::Metadata]);
    }

    #[test]
    fn test_entry_request_fields_decode_packed_and_unpacked() {
        // Packed: one length-delimited run of varints.
        let packed = [0x1A, 0x02, 0x01, 0x02];
        let request: EntryRequest = decode(&packed).unwrap();
        assert_eq!(request.fields, vec![Field::Path, Field::Value]);

        // Unpacked: one varint per tag.
        let unpacked = [0x18, 0x01, 0x18, 0x02];
        let request: EntryRequest = decode(&unpacked).unwrap();
        assert_eq!(request.fields, vec![Field::Path, Field::Value]);
    }

    #[test]
    fn test_set_request_round_trip() {
        let mut request = SetRequest::current_value("Vehicle.Cabin.Lights.On", true);
        request.push(EntryUpdate::current_value("Vehicle.Speed", 62.5f32));
        let bytes = encode_to_bytes(&request).unwrap();
        let back: SetRequest = decode(&bytes).unwrap();
        assert_eq!(back, request);
        assert_eq!(back.updates.len(), 2);
    }

    #[test]
    fn test_get_response_order_and_lookup() {
        let response = GetResponse {
            entries: vec![
                DataEntry::new("Vehicle.Speed").with_value(Datapoint::new(62.5f32)),
                DataEntry::new("Vehicle.Width").with_value(Datapoint::new(1900u32)),
            ],
            errors: vec![DataEntryError {
                path: "Vehicle.Nope".to_owned(),
                error: Some(Error {
                    code: 404,
                    reason: "not_found".to_owned(),
                    message: String::new(),
                }),
            }],
            error: None,
        };
        let bytes = encode_to_bytes(&response).unwrap();
        let back: GetResponse = decode(&bytes).unwrap();
        assert_eq!(back, response);
        assert_eq!(back.entries[0].path, "Vehicle.Speed");
        assert_eq!(back.entries[1].path, "Vehicle.Width");
        assert!(back.entry("Vehicle.Width").is_some());
        assert!(back.entry("Vehicle.Nope").is_none());
    }

    #[test]
    fn test_broker_error_requires_nonzero_code() {
        let mut response = GetResponse {
            error: Some(Error::default()),
            ..Default::default()
        };
        assert!(response.broker_error().is_none());

        response.error = Some(Error {
            code: 403,
            reason: "forbidden".to_owned(),
            message: String::new(),
        });
        assert_eq!(response.broker_error().unwrap().code, 403);

        let set = SetResponse {
            error: Some(Error::default()),
            errors: Vec::new(),
        };
        assert!(set.broker_error().is_none());
    }

    #[test]
    fn test_server_info_request_encodes_empty() {
        let bytes = encode_to_bytes(&GetServerInfoRequest::default()).unwrap();
        assert!(bytes.is_empty());
        let back: GetServerInfoRequest = decode(&[]).unwrap();
        assert_eq!(back, GetServerInfoRequest::default());
    }

    #[test]
    fn test_server_info_response_skips_unknown_fields() {
        let mut bytes = vec![0x0A, 0x0A];
        bytes.extend(b"databroker");
        bytes.extend([0x12, 0x05]);
        bytes.extend(b"0.4.1");
        bytes.extend([0x48, 0x2A]); // field 9, varint 42: not in the table
        let info: GetServerInfoResponse = decode(&bytes).unwrap();
        assert_eq!(info.name, "databroker");
        assert_eq!(info.version, "0.4.1");
    }

    #[test]
    fn test_entry_list_bound_enforced() {
        let request =
            GetRequest::current_values((0..=MAX_ENTRIES).map(|i| format!("Vehicle.Row{i}")));
        let bytes = encode_to_bytes(&request).unwrap();
        let err = decode::<GetRequest>(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Callback);
    }

    #[test]
    fn test_set_request_exact_buffer_fit() {
        let request = SetRequest::current_value("Vehicle.Speed", 62.5f32);
        let bytes = encode_to_bytes(&request).unwrap();
        let mut buf = vec![0u8; bytes.len()];
        let written = encode(&request, &mut buf).unwrap();
        assert_eq!(written, bytes.len());
        assert_eq!(&buf[..], bytes.as_ref());

        let mut short = vec![0u8; bytes.len() - 1];
        let err = encode(&request, &mut short).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Overrun);
    }

    proptest! {
        #[test]
        fn prop_set_request_round_trips(
            signals in prop::collection::vec(
                ("[A-Za-z][A-Za-z.]{0,39}", -1.0e6f32..1.0e6f32),
                1..8,
            )
        ) {
            let mut request = SetRequest::default();
            for (path, value) in &signals {
                request.push(EntryUpdate::current_value(path.clone(), *value));
            }
            let bytes = encode_to_bytes(&request).unwrap();
            let back: SetRequest = decode(&bytes).unwrap();
            prop_assert_eq!(back, request);
        }
    }
}
