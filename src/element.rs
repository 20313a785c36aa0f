//! SDP Data Element Value Model
//!
//! Data elements are the building blocks of a decoded service record: a
//! tagged tree of primitives, sequences and alternatives. The response
//! decoder that produced the tree owns all of its storage; the types here
//! only borrow into it, so a tree is valid exactly as long as the decoder's
//! buffers are.

/// Bluetooth Base UUID: 00000000-0000-1000-8000-00805F9B34FB
///
/// 16- and 32-bit short-form UUIDs are promoted to 128 bits by placing them
/// in the first 32 bits of this base value.
pub const BLUETOOTH_BASE_UUID: u128 = 0x0000_0000_0000_1000_8000_0080_5F9B_34FB;

/// Data element type identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DataElementType {
    /// Nil (null value)
    Nil = 0,
    /// Unsigned integer
    UnsignedInt = 1,
    /// Signed integer
    SignedInt = 2,
    /// UUID
    Uuid = 3,
    /// Text string
    TextString = 4,
    /// Boolean
    Boolean = 5,
    /// Data element sequence
    Sequence = 6,
    /// Data element alternative
    Alternative = 7,
    /// URL
    Url = 8,
}

/// SDP Data Element
///
/// One node of a decoded service record attribute. Composite kinds hold
/// their children as a borrowed slice in encoded order; string kinds hold a
/// borrowed view of the raw payload bytes. All variants are `Copy`, so
/// walking a tree never moves or duplicates payload data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataElement<'a> {
    /// Nil (null value)
    Nil,
    /// Boolean value
    Boolean(bool),
    /// Unsigned 8-bit integer
    UnsignedInt8(u8),
    /// Unsigned 16-bit integer
    UnsignedInt16(u16),
    /// Unsigned 32-bit integer
    UnsignedInt32(u32),
    /// Unsigned 64-bit integer
    UnsignedInt64(u64),
    /// Unsigned 128-bit integer
    UnsignedInt128(u128),
    /// Signed 8-bit integer
    SignedInt8(i8),
    /// Signed 16-bit integer
    SignedInt16(i16),
    /// Signed 32-bit integer
    SignedInt32(i32),
    /// Signed 64-bit integer
    SignedInt64(i64),
    /// Signed 128-bit integer
    SignedInt128(i128),
    /// 16-bit UUID
    Uuid16(u16),
    /// 32-bit UUID
    Uuid32(u32),
    /// 128-bit UUID
    Uuid128(u128),
    /// Text string (raw bytes, usually UTF-8)
    TextString(&'a [u8]),
    /// URL string (raw bytes)
    Url(&'a [u8]),
    /// Data element sequence
    Sequence(&'a [DataElement<'a>]),
    /// Data element alternative
    Alternative(&'a [DataElement<'a>]),
}

impl<'a> DataElement<'a> {
    /// Get the data element type
    #[must_use]
    pub const fn data_type(&self) -> DataElementType {
        match self {
            Self::Nil => DataElementType::Nil,
            Self::Boolean(_) => DataElementType::Boolean,
            Self::UnsignedInt8(_)
            | Self::UnsignedInt16(_)
            | Self::UnsignedInt32(_)
            | Self::UnsignedInt64(_)
            | Self::UnsignedInt128(_) => DataElementType::UnsignedInt,
            Self::SignedInt8(_)
            | Self::SignedInt16(_)
            | Self::SignedInt32(_)
            | Self::SignedInt64(_)
            | Self::SignedInt128(_) => DataElementType::SignedInt,
            Self::Uuid16(_) | Self::Uuid32(_) | Self::Uuid128(_) => DataElementType::Uuid,
            Self::TextString(_) => DataElementType::TextString,
            Self::Url(_) => DataElementType::Url,
            Self::Sequence(_) => DataElementType::Sequence,
            Self::Alternative(_) => DataElementType::Alternative,
        }
    }

    /// Get the element length
    ///
    /// For primitive kinds this is the payload byte count; for `Sequence`
    /// and `Alternative` it is the number of children.
    #[must_use]
    pub const fn len(&self) -> usize {
        match self {
            Self::Nil => 0,
            Self::Boolean(_) | Self::UnsignedInt8(_) | Self::SignedInt8(_) => 1,
            Self::UnsignedInt16(_) | Self::SignedInt16(_) | Self::Uuid16(_) => 2,
            Self::UnsignedInt32(_) | Self::SignedInt32(_) | Self::Uuid32(_) => 4,
            Self::UnsignedInt64(_) | Self::SignedInt64(_) => 8,
            Self::UnsignedInt128(_) | Self::SignedInt128(_) | Self::Uuid128(_) => 16,
            Self::TextString(bytes) | Self::Url(bytes) => bytes.len(),
            Self::Sequence(children) | Self::Alternative(children) => children.len(),
        }
    }

    /// Check whether the element carries no payload or children
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the short-form (16-bit) UUID embedded in a UUID element
    ///
    /// All three encodings carry the same canonical 16-bit identifier at a
    /// fixed offset: bytes 0..2 of the 16-bit form, bytes 2..4 of the
    /// 32-bit form, and bytes 2..4 of the 128-bit form. Non-UUID kinds
    /// yield 0 rather than an error, so callers can probe freely.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn uuid16(&self) -> u16 {
        match self {
            Self::Uuid16(uuid) => *uuid,
            Self::Uuid32(uuid) => *uuid as u16,
            Self::Uuid128(uuid) => (*uuid >> 96) as u16,
            _ => 0,
        }
    }

    /// Get the full 128-bit UUID of a UUID element
    ///
    /// Short forms are promoted onto [`BLUETOOTH_BASE_UUID`]. Returns
    /// `None` for non-UUID kinds.
    #[must_use]
    pub const fn uuid128(&self) -> Option<u128> {
        match self {
            Self::Uuid16(uuid) => Some(BLUETOOTH_BASE_UUID | ((*uuid as u128) << 96)),
            Self::Uuid32(uuid) => Some(BLUETOOTH_BASE_UUID | ((*uuid as u128) << 96)),
            Self::Uuid128(uuid) => Some(*uuid),
            _ => None,
        }
    }

    /// Get a small unsigned integer value widened to `u16`
    ///
    /// Covers the 8- and 16-bit unsigned kinds used for protocol parameters
    /// (RFCOMM channels, PSMs) and profile versions. Wider integers and
    /// every other kind yield `None`.
    #[must_use]
    pub const fn uint16(&self) -> Option<u16> {
        match self {
            Self::UnsignedInt8(value) => Some(*value as u16),
            Self::UnsignedInt16(value) => Some(*value),
            _ => None,
        }
    }

    /// Get the children of a `Sequence` element
    #[must_use]
    pub const fn sequence(&self) -> Option<&'a [DataElement<'a>]> {
        match self {
            Self::Sequence(children) => Some(*children),
            _ => None,
        }
    }

    /// Get the text payload of a `TextString` element
    #[must_use]
    pub const fn text(&self) -> Option<&'a [u8]> {
        match self {
            Self::TextString(bytes) => Some(*bytes),
            _ => None,
        }
    }
}
