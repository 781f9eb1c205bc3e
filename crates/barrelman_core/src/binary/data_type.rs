//! One-byte tags that prefix every value in a record stream.
//!
//! Constants that occur often (zero, one, min, max, empty) are encoded as the
//! tag alone, without payload bytes.

pub const UNKNOWN: u8 = 0;
pub const EOS: u8 = 1;
pub const NULL: u8 = 2;
pub const BOOLEAN_TRUE: u8 = 3;
pub const BOOLEAN_FALSE: u8 = 4;

pub const ZERO_CHAR: u8 = 5;
pub const ONE_CHAR: u8 = 6;
pub const MAX_CHAR: u8 = 7;
pub const CHAR: u8 = 8;

pub const ZERO_BYTE: u8 = 9;
pub const ONE_BYTE: u8 = 10;
pub const MAX_BYTE: u8 = 11;
pub const BYTE: u8 = 12;

pub const MIN_SBYTE: u8 = 13;
pub const MINUS_ONE_SBYTE: u8 = 14;
pub const ZERO_SBYTE: u8 = 15;
pub const ONE_SBYTE: u8 = 16;
pub const MAX_SBYTE: u8 = 17;
pub const SBYTE: u8 = 18;

pub const MIN_INT16: u8 = 19;
pub const MINUS_ONE_INT16: u8 = 20;
pub const ZERO_INT16: u8 = 21;
pub const ONE_INT16: u8 = 22;
pub const MAX_INT16: u8 = 23;
pub const INT16: u8 = 24;

pub const ZERO_UINT16: u8 = 25;
pub const ONE_UINT16: u8 = 26;
pub const MAX_UINT16: u8 = 27;
pub const UINT16: u8 = 28;

pub const MIN_INT32: u8 = 29;
pub const MINUS_ONE_INT32: u8 = 30;
pub const ZERO_INT32: u8 = 31;
pub const ONE_INT32: u8 = 32;
pub const MAX_INT32: u8 = 33;
pub const INT32: u8 = 34;

pub const ZERO_UINT32: u8 = 35;
pub const ONE_UINT32: u8 = 36;
pub const MAX_UINT32: u8 = 37;
pub const UINT32: u8 = 38;

pub const MIN_INT64: u8 = 39;
pub const MINUS_ONE_INT64: u8 = 40;
pub const ZERO_INT64: u8 = 41;
pub const ONE_INT64: u8 = 42;
pub const MAX_INT64: u8 = 43;
pub const INT64: u8 = 44;

pub const ZERO_UINT64: u8 = 45;
pub const ONE_UINT64: u8 = 46;
pub const MAX_UINT64: u8 = 47;
pub const UINT64: u8 = 48;

pub const SINGLE_NEGATIVE_INFINITY: u8 = 49;
pub const MIN_SINGLE: u8 = 50;
pub const MINUS_ONE_SINGLE: u8 = 51;
pub const ZERO_SINGLE: u8 = 52;
pub const ONE_SINGLE: u8 = 53;
pub const MAX_SINGLE: u8 = 54;
pub const SINGLE_POSITIVE_INFINITY: u8 = 55;
pub const SINGLE_NAN: u8 = 56;
pub const SINGLE: u8 = 57;

pub const DOUBLE_NEGATIVE_INFINITY: u8 = 58;
pub const MIN_DOUBLE: u8 = 59;
pub const MINUS_ONE_DOUBLE: u8 = 60;
pub const ZERO_DOUBLE: u8 = 61;
pub const ONE_DOUBLE: u8 = 62;
pub const MAX_DOUBLE: u8 = 63;
pub const DOUBLE_POSITIVE_INFINITY: u8 = 64;
pub const DOUBLE_NAN: u8 = 65;
pub const DOUBLE: u8 = 66;

pub const DATE_TIME: u8 = 67;
pub const ZERO_DATE_TIME: u8 = 68;
pub const TIME_SPAN: u8 = 69;
pub const ZERO_TIME_SPAN: u8 = 70;
pub const GUID: u8 = 71;
pub const EMPTY_GUID: u8 = 72;
/// UTF-8 text with a 7-bit encoded byte length.
pub const STRING: u8 = 73;
pub const EMPTY_STRING: u8 = 74;

/// Currency values are `i64` amounts scaled by 10 000.
pub const MIN_CURRENCY: u8 = 75;
pub const MINUS_ONE_CURRENCY: u8 = 76;
pub const ZERO_CURRENCY: u8 = 77;
pub const ONE_CURRENCY: u8 = 78;
pub const MAX_CURRENCY: u8 = 79;
pub const CURRENCY: u8 = 80;

/// Byte array size classes: `u8`, `u16` and `u32` element counts, then empty.
pub const SMALL_BYTE_ARRAY: u8 = 0x8C;
pub const BYTE_ARRAY: u8 = 0x8D;
pub const LARGE_BYTE_ARRAY: u8 = 0x8E;
pub const EMPTY_BYTE_ARRAY: u8 = 0x8F;

pub const CURRENCY_SCALE: i64 = 10_000;

/// Short label used in codec error messages.
pub fn name(tag: u8) -> &'static str {
    match tag {
        UNKNOWN => "Unknown",
        EOS => "Eos",
        NULL => "Null",
        BOOLEAN_TRUE | BOOLEAN_FALSE => "Boolean",
        ZERO_CHAR..=CHAR => "Char",
        ZERO_BYTE..=BYTE => "Byte",
        MIN_SBYTE..=SBYTE => "SByte",
        MIN_INT16..=INT16 => "Int16",
        ZERO_UINT16..=UINT16 => "UInt16",
        MIN_INT32..=INT32 => "Int32",
        ZERO_UINT32..=UINT32 => "UInt32",
        MIN_INT64..=INT64 => "Int64",
        ZERO_UINT64..=UINT64 => "UInt64",
        SINGLE_NEGATIVE_INFINITY..=SINGLE => "Single",
        DOUBLE_NEGATIVE_INFINITY..=DOUBLE => "Double",
        DATE_TIME | ZERO_DATE_TIME => "DateTime",
        TIME_SPAN | ZERO_TIME_SPAN => "TimeSpan",
        GUID | EMPTY_GUID => "Guid",
        STRING | EMPTY_STRING => "String",
        MIN_CURRENCY..=CURRENCY => "Currency",
        SMALL_BYTE_ARRAY..=EMPTY_BYTE_ARRAY => "ByteArray",
        _ => "Unsupported",
    }
}
