//! Field dispatch tables.
//!
//! Every message type carries a hand-written static [`MessageDescriptor`]:
//! a table of [`FieldDescriptor`]s sorted by field number. Scalar fields
//! store and load through typed accessors, so a field can only ever be
//! wired to a matching value type. Strings, nested messages and repeated
//! fields go through handler functions that receive a bounded sub-stream
//! and decide buffering for themselves.

use crate::error::WireError;
use crate::stream::{ReadStream, WriteStream};
use crate::tag::{WireType, MAX_FIELD_NUMBER};

/// Typed store/load pair for one scalar field of `M`.
///
/// `get` returning `None` means the field is absent and nothing is
/// emitted for it.
pub struct Accessor<M, T> {
    pub set: fn(&mut M, T),
    pub get: fn(&M) -> Option<T>,
}

/// Scalar encodings, each tied to the accessor type it stores.
pub enum ScalarKind<M> {
    Bool(Accessor<M, bool>),
    Int32(Accessor<M, i32>),
    Int64(Accessor<M, i64>),
    Uint32(Accessor<M, u32>),
    Uint64(Accessor<M, u64>),
    /// ZigZag-mapped i32.
    Sint32(Accessor<M, i32>),
    /// ZigZag-mapped i64.
    Sint64(Accessor<M, i64>),
    Fixed32(Accessor<M, u32>),
    Sfixed32(Accessor<M, i32>),
    Float(Accessor<M, f32>),
    Fixed64(Accessor<M, u64>),
    Sfixed64(Accessor<M, i64>),
    Double(Accessor<M, f64>),
    /// Open enum carried as its raw `i32` wire value.
    Enum(Accessor<M, i32>),
}

impl<M> ScalarKind<M> {
    /// Wire type this scalar is encoded with.
    pub fn wire_type(&self) -> WireType {
        match self {
            ScalarKind::Bool(_)
            | ScalarKind::Int32(_)
            | ScalarKind::Int64(_)
            | ScalarKind::Uint32(_)
            | ScalarKind::Uint64(_)
            | ScalarKind::Sint32(_)
            | ScalarKind::Sint64(_)
            | ScalarKind::Enum(_) => WireType::Varint,
            ScalarKind::Fixed32(_) | ScalarKind::Sfixed32(_) | ScalarKind::Float(_) => {
                WireType::Fixed32
            }
            ScalarKind::Fixed64(_) | ScalarKind::Sfixed64(_) | ScalarKind::Double(_) => {
                WireType::Fixed64
            }
        }
    }
}

/// Decode half of a handler field.
///
/// Called with a sub-stream bounded to the record's payload. For
/// length-delimited records the handler is called repeatedly until the
/// payload is consumed (once for an empty payload); for scalar wire
/// types it is called once with a sub-stream holding exactly one value.
pub type DecodeFn<M> =
    fn(&mut M, &mut ReadStream<'_>, &FieldDescriptor<M>) -> Result<(), WireError>;

/// Encode half of a handler field. Emits zero or more complete
/// tag-plus-value records.
pub type EncodeFn<M> = fn(&M, &mut WriteStream<'_>, &FieldDescriptor<M>) -> Result<(), WireError>;

/// How a field is decoded and encoded.
pub enum FieldKind<M> {
    /// Fixed-size value stored through a typed accessor.
    Scalar(ScalarKind<M>),
    /// Variable-length or repeated value routed through handlers.
    Handler {
        decode: DecodeFn<M>,
        encode: EncodeFn<M>,
    },
}

/// Cardinality and oneof membership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// At most one value; later wire occurrences overwrite earlier ones.
    Optional,
    /// Zero or more values in wire order.
    Repeated,
    /// Member of the oneof group with this id; storing any member
    /// replaces whatever member held the slot before.
    Oneof(u32),
}

/// One field of `M`.
pub struct FieldDescriptor<M> {
    pub number: u32,
    pub name: &'static str,
    pub label: Label,
    pub kind: FieldKind<M>,
}

impl<M> FieldDescriptor<M> {
    /// Wire type records for this field must carry, when fixed by the
    /// descriptor. Handler fields accept several wire types.
    pub fn wire_type(&self) -> Option<WireType> {
        match &self.kind {
            FieldKind::Scalar(kind) => Some(kind.wire_type()),
            FieldKind::Handler { .. } => None,
        }
    }
}

/// Static description of a message type: its name and its fields sorted
/// by strictly ascending field number.
pub struct MessageDescriptor<M: 'static> {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor<M>],
}

impl<M> MessageDescriptor<M> {
    /// Looks up a field by number.
    pub fn field(&self, number: u32) -> Option<&FieldDescriptor<M>> {
        self.fields
            .binary_search_by_key(&number, |f| f.number)
            .ok()
            .map(|idx| &self.fields[idx])
    }

    /// Checks the table invariants: numbers in range and strictly
    /// ascending. Tables are hand-written, so tests run this per type.
    pub fn validate(&self) -> Result<(), WireError> {
        let mut prev = 0u32;
        for field in self.fields {
            if field.number == 0 || field.number > MAX_FIELD_NUMBER {
                return Err(WireError::InvalidDescriptor {
                    message: self.name,
                    reason: format!("field {} number {} out of range", field.name, field.number),
                });
            }
            if field.number <= prev {
                return Err(WireError::InvalidDescriptor {
                    message: self.name,
                    reason: format!("field {} number {} not ascending", field.name, field.number),
                });
            }
            prev = field.number;
        }
        Ok(())
    }
}

/// A message type with a static dispatch table.
pub trait WireMessage: Sized + 'static {
    /// The dispatch table for this type.
    fn descriptor() -> &'static MessageDescriptor<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Sample {
        id: Option<u32>,
        flag: Option<bool>,
    }

    static SAMPLE_FIELDS: &[FieldDescriptor<Sample>] = &[
        FieldDescriptor {
            number: 1,
            name: "id",
            label: Label::Optional,
            kind: FieldKind::Scalar(ScalarKind::Uint32(Accessor {
                set: |m, v| m.id = Some(v),
                get: |m| m.id,
            })),
        },
        FieldDescriptor {
            number: 4,
            name: "flag",
            label: Label::Optional,
            kind: FieldKind::Scalar(ScalarKind::Bool(Accessor {
                set: |m, v| m.flag = Some(v),
                get: |m| m.flag,
            })),
        },
    ];

    static SAMPLE: MessageDescriptor<Sample> = MessageDescriptor {
        name: "Sample",
        fields: SAMPLE_FIELDS,
    };

    static UNSORTED: MessageDescriptor<Sample> = MessageDescriptor {
        name: "Unsorted",
        fields: &[
            FieldDescriptor {
                number: 4,
                name: "flag",
                label: Label::Optional,
                kind: FieldKind::Scalar(ScalarKind::Bool(Accessor {
                    set: |m, v| m.flag = Some(v),
                    get: |m| m.flag,
                })),
            },
            FieldDescriptor {
                number: 1,
                name: "id",
                label: Label::Optional,
                kind: FieldKind::Scalar(ScalarKind::Uint32(Accessor {
                    set: |m, v| m.id = Some(v),
                    get: |m| m.id,
                })),
            },
        ],
    };

    static ZERO_NUMBER: MessageDescriptor<Sample> = MessageDescriptor {
        name: "ZeroNumber",
        fields: &[FieldDescriptor {
            number: 0,
            name: "id",
            label: Label::Optional,
            kind: FieldKind::Scalar(ScalarKind::Uint32(Accessor {
                set: |m, v| m.id = Some(v),
                get: |m| m.id,
            })),
        }],
    };

    #[test]
    fn test_field_lookup() {
        assert_eq!(SAMPLE.field(1).unwrap().name, "id");
        assert_eq!(SAMPLE.field(4).unwrap().name, "flag");
        assert!(SAMPLE.field(2).is_none());
        assert!(SAMPLE.field(5).is_none());
    }

    #[test]
    fn test_accessors_store_and_load() {
        let mut sample = Sample::default();
        let FieldKind::Scalar(ScalarKind::Uint32(accessor)) = &SAMPLE.field(1).unwrap().kind
        else {
            panic!("id should be a uint32 scalar");
        };
        assert_eq!((accessor.get)(&sample), None);
        (accessor.set)(&mut sample, 42);
        assert_eq!((accessor.get)(&sample), Some(42));
    }

    #[test]
    fn test_validate_accepts_sorted_table() {
        SAMPLE.validate().unwrap();
    }

    #[test]
    fn test_validate_rejects_unsorted_table() {
        assert!(matches!(
            UNSORTED.validate(),
            Err(WireError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_number() {
        assert!(matches!(
            ZERO_NUMBER.validate(),
            Err(WireError::InvalidDescriptor { .. })
        ));
    }

    #[test]
    fn test_scalar_wire_types() {
        fn kind_of(number: u32) -> WireType {
            SAMPLE.field(number).unwrap().wire_type().unwrap()
        }
        assert_eq!(kind_of(1), WireType::Varint);
        assert_eq!(kind_of(4), WireType::Varint);

        let float_kind: ScalarKind<Sample> = ScalarKind::Float(Accessor {
            set: |_, _| {},
            get: |_| None,
        });
        assert_eq!(float_kind.wire_type(), WireType::Fixed32);

        let double_kind: ScalarKind<Sample> = ScalarKind::Double(Accessor {
            set: |_, _| {},
            get: |_| None,
        });
        assert_eq!(double_kind.wire_type(), WireType::Fixed64);
    }
}
