//! Tagged value reader over any `std::io::Read` source.

use super::data_type;
use super::{CodecError, CodecResult, Value};
use crate::model::{DateTime, Guid, TimeSpan};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Decodes tagged values written by `BinaryWriter`.
pub struct BinaryReader<R: Read> {
    inner: R,
}

impl<R: Read> BinaryReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    /// Reads one boolean value, as used by the result set framing.
    pub fn read_bool(&mut self) -> CodecResult<bool> {
        match self.inner.read_u8()? {
            data_type::BOOLEAN_TRUE => Ok(true),
            data_type::BOOLEAN_FALSE => Ok(false),
            found => Err(CodecError::UnexpectedDataType {
                expected: "Boolean",
                found,
            }),
        }
    }

    /// Decodes a `(true, record)* false` stream.
    ///
    /// `record_len` receives the first value of each record (the
    /// discriminator) and returns the total number of values in that record,
    /// the first one included.
    pub fn read_result_set<F>(&mut self, mut record_len: F) -> CodecResult<Vec<Vec<Value>>>
    where
        F: FnMut(&Value) -> CodecResult<usize>,
    {
        let mut records = Vec::new();
        while self.read_bool()? {
            let first = self.read_value()?;
            let len = record_len(&first)?;
            let mut record = Vec::with_capacity(len);
            record.push(first);
            for _ in 1..len {
                record.push(self.read_value()?);
            }
            records.push(record);
        }
        Ok(records)
    }

    pub fn read_value(&mut self) -> CodecResult<Value> {
        let tag = self.inner.read_u8()?;
        let value = match tag {
            data_type::NULL => Value::Null,
            data_type::BOOLEAN_TRUE => Value::Boolean(true),
            data_type::BOOLEAN_FALSE => Value::Boolean(false),

            data_type::ZERO_CHAR => Value::Char(0),
            data_type::ONE_CHAR => Value::Char(1),
            data_type::MAX_CHAR => Value::Char(u16::MAX),
            data_type::CHAR => Value::Char(self.inner.read_u16::<LittleEndian>()?),

            data_type::ZERO_BYTE => Value::Byte(0),
            data_type::ONE_BYTE => Value::Byte(1),
            data_type::MAX_BYTE => Value::Byte(u8::MAX),
            data_type::BYTE => Value::Byte(self.inner.read_u8()?),

            data_type::MIN_SBYTE => Value::SByte(i8::MIN),
            data_type::MINUS_ONE_SBYTE => Value::SByte(-1),
            data_type::ZERO_SBYTE => Value::SByte(0),
            data_type::ONE_SBYTE => Value::SByte(1),
            data_type::MAX_SBYTE => Value::SByte(i8::MAX),
            data_type::SBYTE => Value::SByte(self.inner.read_i8()?),

            data_type::MIN_INT16 => Value::Int16(i16::MIN),
            data_type::MINUS_ONE_INT16 => Value::Int16(-1),
            data_type::ZERO_INT16 => Value::Int16(0),
            data_type::ONE_INT16 => Value::Int16(1),
            data_type::MAX_INT16 => Value::Int16(i16::MAX),
            data_type::INT16 => Value::Int16(self.inner.read_i16::<LittleEndian>()?),

            data_type::ZERO_UINT16 => Value::UInt16(0),
            data_type::ONE_UINT16 => Value::UInt16(1),
            data_type::MAX_UINT16 => Value::UInt16(u16::MAX),
            data_type::UINT16 => Value::UInt16(self.inner.read_u16::<LittleEndian>()?),

            data_type::MIN_INT32 => Value::Int32(i32::MIN),
            data_type::MINUS_ONE_INT32 => Value::Int32(-1),
            data_type::ZERO_INT32 => Value::Int32(0),
            data_type::ONE_INT32 => Value::Int32(1),
            data_type::MAX_INT32 => Value::Int32(i32::MAX),
            data_type::INT32 => Value::Int32(self.inner.read_i32::<LittleEndian>()?),

            data_type::ZERO_UINT32 => Value::UInt32(0),
            data_type::ONE_UINT32 => Value::UInt32(1),
            data_type::MAX_UINT32 => Value::UInt32(u32::MAX),
            data_type::UINT32 => Value::UInt32(self.inner.read_u32::<LittleEndian>()?),

            data_type::MIN_INT64 => Value::Int64(i64::MIN),
            data_type::MINUS_ONE_INT64 => Value::Int64(-1),
            data_type::ZERO_INT64 => Value::Int64(0),
            data_type::ONE_INT64 => Value::Int64(1),
            data_type::MAX_INT64 => Value::Int64(i64::MAX),
            data_type::INT64 => Value::Int64(self.inner.read_i64::<LittleEndian>()?),

            data_type::ZERO_UINT64 => Value::UInt64(0),
            data_type::ONE_UINT64 => Value::UInt64(1),
            data_type::MAX_UINT64 => Value::UInt64(u64::MAX),
            data_type::UINT64 => Value::UInt64(self.inner.read_u64::<LittleEndian>()?),

            data_type::SINGLE_NEGATIVE_INFINITY => Value::Single(f32::NEG_INFINITY),
            data_type::MIN_SINGLE => Value::Single(f32::MIN),
            data_type::MINUS_ONE_SINGLE => Value::Single(-1.0),
            data_type::ZERO_SINGLE => Value::Single(0.0),
            data_type::ONE_SINGLE => Value::Single(1.0),
            data_type::MAX_SINGLE => Value::Single(f32::MAX),
            data_type::SINGLE_POSITIVE_INFINITY => Value::Single(f32::INFINITY),
            data_type::SINGLE_NAN => Value::Single(f32::NAN),
            data_type::SINGLE => Value::Single(self.inner.read_f32::<LittleEndian>()?),

            data_type::DOUBLE_NEGATIVE_INFINITY => Value::Double(f64::NEG_INFINITY),
            data_type::MIN_DOUBLE => Value::Double(f64::MIN),
            data_type::MINUS_ONE_DOUBLE => Value::Double(-1.0),
            data_type::ZERO_DOUBLE => Value::Double(0.0),
            data_type::ONE_DOUBLE => Value::Double(1.0),
            data_type::MAX_DOUBLE => Value::Double(f64::MAX),
            data_type::DOUBLE_POSITIVE_INFINITY => Value::Double(f64::INFINITY),
            data_type::DOUBLE_NAN => Value::Double(f64::NAN),
            data_type::DOUBLE => Value::Double(self.inner.read_f64::<LittleEndian>()?),

            data_type::MIN_CURRENCY => Value::Currency(i64::MIN),
            data_type::MINUS_ONE_CURRENCY => Value::Currency(-data_type::CURRENCY_SCALE),
            data_type::ZERO_CURRENCY => Value::Currency(0),
            data_type::ONE_CURRENCY => Value::Currency(data_type::CURRENCY_SCALE),
            data_type::MAX_CURRENCY => Value::Currency(i64::MAX),
            data_type::CURRENCY => Value::Currency(self.inner.read_i64::<LittleEndian>()?),

            data_type::ZERO_DATE_TIME => Value::DateTime(DateTime::ZERO),
            data_type::DATE_TIME => {
                Value::DateTime(DateTime::from_ticks(self.inner.read_i64::<LittleEndian>()?))
            }
            data_type::ZERO_TIME_SPAN => Value::TimeSpan(TimeSpan::ZERO),
            data_type::TIME_SPAN => {
                Value::TimeSpan(TimeSpan::from_ticks(self.inner.read_i64::<LittleEndian>()?))
            }

            data_type::EMPTY_GUID => Value::Guid(Guid::nil()),
            data_type::GUID => {
                let mut bytes = [0u8; 16];
                self.inner.read_exact(&mut bytes)?;
                Value::Guid(Guid::from_bytes_le(bytes))
            }

            data_type::EMPTY_STRING => Value::String(String::new()),
            data_type::STRING => {
                let len = self.read_7bit_encoded()?;
                let bytes = self.read_exact_vec(len)?;
                Value::String(String::from_utf8(bytes).map_err(|_| CodecError::InvalidUtf8)?)
            }

            data_type::EMPTY_BYTE_ARRAY => Value::Bytes(Vec::new()),
            data_type::SMALL_BYTE_ARRAY => {
                let len = u64::from(self.inner.read_u8()?);
                Value::Bytes(self.read_exact_vec(len)?)
            }
            data_type::BYTE_ARRAY => {
                let len = u64::from(self.inner.read_u16::<LittleEndian>()?);
                Value::Bytes(self.read_exact_vec(len)?)
            }
            data_type::LARGE_BYTE_ARRAY => {
                let len = u64::from(self.inner.read_u32::<LittleEndian>()?);
                Value::Bytes(self.read_exact_vec(len)?)
            }

            other => return Err(CodecError::UnknownDataType(other)),
        };
        Ok(value)
    }

    fn read_exact_vec(&mut self, len: u64) -> CodecResult<Vec<u8>> {
        let mut bytes = Vec::new();
        let read = (&mut self.inner).take(len).read_to_end(&mut bytes)?;
        if (read as u64) < len {
            return Err(CodecError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("expected {len} payload bytes, got {read}"),
            )));
        }
        Ok(bytes)
    }

    fn read_7bit_encoded(&mut self) -> CodecResult<u64> {
        let mut value = 0u64;
        for group in 0..8 {
            let byte = self.inner.read_u8()?;
            value |= u64::from(byte & 0x7F) << (7 * group);
            if byte & 0x80 == 0 {
                return Ok(value);
            }
        }
        let last = self.inner.read_u8()?;
        Ok(value | (u64::from(last) << 56))
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryReader;
    use crate::binary::{data_type, BinaryWriter, CodecError, Value};
    use crate::model::{DateTime, Guid, TimeSpan};

    #[test]
    fn reads_values_written_by_writer() {
        let id = Guid::new_v4();
        let mut writer = BinaryWriter::new(Vec::new());
        writer.write_i32(34500).unwrap();
        writer.write_u8(2).unwrap();
        writer.write_guid(id).unwrap();
        writer.write_str("radar power").unwrap();
        writer.write_nullable_guid(None).unwrap();
        writer.write_date_time(DateTime::from_ticks(638_000_000_000_000_000)).unwrap();
        writer.write_time_span(TimeSpan::from_seconds(-3)).unwrap();
        writer.write_bytes(&[1, 2, 3]).unwrap();
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(bytes.as_slice());
        assert_eq!(reader.read_value().unwrap(), Value::Int32(34500));
        assert_eq!(reader.read_value().unwrap(), Value::Byte(2));
        assert_eq!(reader.read_value().unwrap(), Value::Guid(id));
        assert_eq!(
            reader.read_value().unwrap(),
            Value::String("radar power".to_string())
        );
        assert_eq!(reader.read_value().unwrap(), Value::Null);
        assert_eq!(
            reader.read_value().unwrap(),
            Value::DateTime(DateTime::from_ticks(638_000_000_000_000_000))
        );
        assert_eq!(
            reader.read_value().unwrap(),
            Value::TimeSpan(TimeSpan::from_seconds(-3))
        );
        assert_eq!(reader.read_value().unwrap(), Value::Bytes(vec![1, 2, 3]));
    }

    #[test]
    fn long_varint_lengths_decode() {
        let text = "é".repeat(10_000);
        let mut writer = BinaryWriter::new(Vec::new());
        writer.write_str(&text).unwrap();
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(bytes.as_slice());
        assert_eq!(reader.read_value().unwrap(), Value::String(text));
    }

    #[test]
    fn result_set_framing_is_decoded() {
        let mut writer = BinaryWriter::new(Vec::new());
        for value in [7, 9] {
            writer.write_bool(true).unwrap();
            writer.write_i32(value).unwrap();
            writer.write_str("x").unwrap();
        }
        writer.write_bool(false).unwrap();
        let bytes = writer.into_inner();

        let mut reader = BinaryReader::new(bytes.as_slice());
        let records = reader.read_result_set(|_| Ok(2)).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1][0], Value::Int32(9));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let bytes = [0xF0u8];
        let mut reader = BinaryReader::new(&bytes[..]);
        assert!(matches!(
            reader.read_value(),
            Err(CodecError::UnknownDataType(0xF0))
        ));
    }

    #[test]
    fn framing_requires_boolean() {
        let bytes = [data_type::ZERO_INT32];
        let mut reader = BinaryReader::new(&bytes[..]);
        assert!(matches!(
            reader.read_bool(),
            Err(CodecError::UnexpectedDataType {
                expected: "Boolean",
                found: data_type::ZERO_INT32
            })
        ));
    }

    #[test]
    fn truncated_payload_is_an_io_error() {
        let bytes = [data_type::SMALL_BYTE_ARRAY, 4, 1];
        let mut reader = BinaryReader::new(&bytes[..]);
        assert!(matches!(reader.read_value(), Err(CodecError::Io(_))));
    }
}
