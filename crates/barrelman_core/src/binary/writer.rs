//! Tagged value writer over any `std::io::Write` sink.

use super::data_type;
use super::CodecResult;
use crate::model::{DateTime, Guid, TimeSpan};
use byteorder::{LittleEndian, WriteBytesExt};
use std::io::Write;

/// Writes tagged values to an underlying sink.
///
/// The writer does no buffering of its own; wrap the sink in a
/// `BufWriter` when writing to files or sockets.
pub struct BinaryWriter<W: Write> {
    inner: W,
}

impl<W: Write> BinaryWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    pub fn flush(&mut self) -> CodecResult<()> {
        self.inner.flush()?;
        Ok(())
    }

    pub fn write_null(&mut self) -> CodecResult<()> {
        self.tag(data_type::NULL)
    }

    pub fn write_bool(&mut self, value: bool) -> CodecResult<()> {
        self.tag(if value {
            data_type::BOOLEAN_TRUE
        } else {
            data_type::BOOLEAN_FALSE
        })
    }

    pub fn write_u8(&mut self, value: u8) -> CodecResult<()> {
        match value {
            0 => self.tag(data_type::ZERO_BYTE),
            1 => self.tag(data_type::ONE_BYTE),
            u8::MAX => self.tag(data_type::MAX_BYTE),
            _ => {
                self.tag(data_type::BYTE)?;
                self.inner.write_u8(value)?;
                Ok(())
            }
        }
    }

    pub fn write_i8(&mut self, value: i8) -> CodecResult<()> {
        match value {
            i8::MIN => self.tag(data_type::MIN_SBYTE),
            -1 => self.tag(data_type::MINUS_ONE_SBYTE),
            0 => self.tag(data_type::ZERO_SBYTE),
            1 => self.tag(data_type::ONE_SBYTE),
            i8::MAX => self.tag(data_type::MAX_SBYTE),
            _ => {
                self.tag(data_type::SBYTE)?;
                self.inner.write_i8(value)?;
                Ok(())
            }
        }
    }

    pub fn write_i16(&mut self, value: i16) -> CodecResult<()> {
        match value {
            i16::MIN => self.tag(data_type::MIN_INT16),
            -1 => self.tag(data_type::MINUS_ONE_INT16),
            0 => self.tag(data_type::ZERO_INT16),
            1 => self.tag(data_type::ONE_INT16),
            i16::MAX => self.tag(data_type::MAX_INT16),
            _ => {
                self.tag(data_type::INT16)?;
                self.inner.write_i16::<LittleEndian>(value)?;
                Ok(())
            }
        }
    }

    pub fn write_u16(&mut self, value: u16) -> CodecResult<()> {
        match value {
            0 => self.tag(data_type::ZERO_UINT16),
            1 => self.tag(data_type::ONE_UINT16),
            u16::MAX => self.tag(data_type::MAX_UINT16),
            _ => {
                self.tag(data_type::UINT16)?;
                self.inner.write_u16::<LittleEndian>(value)?;
                Ok(())
            }
        }
    }

    pub fn write_i32(&mut self, value: i32) -> CodecResult<()> {
        match value {
            i32::MIN => self.tag(data_type::MIN_INT32),
            -1 => self.tag(data_type::MINUS_ONE_INT32),
            0 => self.tag(data_type::ZERO_INT32),
            1 => self.tag(data_type::ONE_INT32),
            i32::MAX => self.tag(data_type::MAX_INT32),
            _ => {
                self.tag(data_type::INT32)?;
                self.inner.write_i32::<LittleEndian>(value)?;
                Ok(())
            }
        }
    }

    pub fn write_u32(&mut self, value: u32) -> CodecResult<()> {
        match value {
            0 => self.tag(data_type::ZERO_UINT32),
            1 => self.tag(data_type::ONE_UINT32),
            u32::MAX => self.tag(data_type::MAX_UINT32),
            _ => {
                self.tag(data_type::UINT32)?;
                self.inner.write_u32::<LittleEndian>(value)?;
                Ok(())
            }
        }
    }

    pub fn write_i64(&mut self, value: i64) -> CodecResult<()> {
        match value {
            i64::MIN => self.tag(data_type::MIN_INT64),
            -1 => self.tag(data_type::MINUS_ONE_INT64),
            0 => self.tag(data_type::ZERO_INT64),
            1 => self.tag(data_type::ONE_INT64),
            i64::MAX => self.tag(data_type::MAX_INT64),
            _ => self.tagged_i64(data_type::INT64, value),
        }
    }

    pub fn write_f32(&mut self, value: f32) -> CodecResult<()> {
        if value.is_nan() {
            self.tag(data_type::SINGLE_NAN)
        } else if value == f32::NEG_INFINITY {
            self.tag(data_type::SINGLE_NEGATIVE_INFINITY)
        } else if value == f32::MIN {
            self.tag(data_type::MIN_SINGLE)
        } else if value == -1.0 {
            self.tag(data_type::MINUS_ONE_SINGLE)
        } else if value == 0.0 {
            self.tag(data_type::ZERO_SINGLE)
        } else if value == 1.0 {
            self.tag(data_type::ONE_SINGLE)
        } else if value == f32::MAX {
            self.tag(data_type::MAX_SINGLE)
        } else if value == f32::INFINITY {
            self.tag(data_type::SINGLE_POSITIVE_INFINITY)
        } else {
            self.tag(data_type::SINGLE)?;
            self.inner.write_f32::<LittleEndian>(value)?;
            Ok(())
        }
    }

    pub fn write_f64(&mut self, value: f64) -> CodecResult<()> {
        if value.is_nan() {
            self.tag(data_type::DOUBLE_NAN)
        } else if value == f64::NEG_INFINITY {
            self.tag(data_type::DOUBLE_NEGATIVE_INFINITY)
        } else if value == f64::MIN {
            self.tag(data_type::MIN_DOUBLE)
        } else if value == -1.0 {
            self.tag(data_type::MINUS_ONE_DOUBLE)
        } else if value == 0.0 {
            self.tag(data_type::ZERO_DOUBLE)
        } else if value == 1.0 {
            self.tag(data_type::ONE_DOUBLE)
        } else if value == f64::MAX {
            self.tag(data_type::MAX_DOUBLE)
        } else if value == f64::INFINITY {
            self.tag(data_type::DOUBLE_POSITIVE_INFINITY)
        } else {
            self.tag(data_type::DOUBLE)?;
            self.inner.write_f64::<LittleEndian>(value)?;
            Ok(())
        }
    }

    pub fn write_date_time(&mut self, value: DateTime) -> CodecResult<()> {
        if value.is_zero() {
            self.tag(data_type::ZERO_DATE_TIME)
        } else {
            self.tagged_i64(data_type::DATE_TIME, value.ticks())
        }
    }

    pub fn write_time_span(&mut self, value: TimeSpan) -> CodecResult<()> {
        if value.is_zero() {
            self.tag(data_type::ZERO_TIME_SPAN)
        } else {
            self.tagged_i64(data_type::TIME_SPAN, value.ticks())
        }
    }

    /// Writes a Guid in the mixed-endian field layout used on the wire.
    pub fn write_guid(&mut self, value: Guid) -> CodecResult<()> {
        if value.is_nil() {
            return self.tag(data_type::EMPTY_GUID);
        }
        self.tag(data_type::GUID)?;
        self.inner.write_all(&value.to_bytes_le())?;
        Ok(())
    }

    pub fn write_str(&mut self, value: &str) -> CodecResult<()> {
        if value.is_empty() {
            return self.tag(data_type::EMPTY_STRING);
        }
        self.tag(data_type::STRING)?;
        self.write_7bit_encoded(value.len() as u64)?;
        self.inner.write_all(value.as_bytes())?;
        Ok(())
    }

    pub fn write_bytes(&mut self, value: &[u8]) -> CodecResult<()> {
        let count = value.len();
        if count == 0 {
            return self.tag(data_type::EMPTY_BYTE_ARRAY);
        }
        if let Ok(small) = u8::try_from(count) {
            self.tag(data_type::SMALL_BYTE_ARRAY)?;
            self.inner.write_u8(small)?;
        } else if let Ok(medium) = u16::try_from(count) {
            self.tag(data_type::BYTE_ARRAY)?;
            self.inner.write_u16::<LittleEndian>(medium)?;
        } else {
            let large = u32::try_from(count).map_err(|_| {
                std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!("byte array of {count} elements exceeds u32 size class"),
                )
            })?;
            self.tag(data_type::LARGE_BYTE_ARRAY)?;
            self.inner.write_u32::<LittleEndian>(large)?;
        }
        self.inner.write_all(value)?;
        Ok(())
    }

    pub fn write_nullable_i32(&mut self, value: Option<i32>) -> CodecResult<()> {
        match value {
            Some(value) => self.write_i32(value),
            None => self.write_null(),
        }
    }

    pub fn write_nullable_f64(&mut self, value: Option<f64>) -> CodecResult<()> {
        match value {
            Some(value) => self.write_f64(value),
            None => self.write_null(),
        }
    }

    pub fn write_nullable_date_time(&mut self, value: Option<DateTime>) -> CodecResult<()> {
        match value {
            Some(value) => self.write_date_time(value),
            None => self.write_null(),
        }
    }

    pub fn write_nullable_time_span(&mut self, value: Option<TimeSpan>) -> CodecResult<()> {
        match value {
            Some(value) => self.write_time_span(value),
            None => self.write_null(),
        }
    }

    pub fn write_nullable_guid(&mut self, value: Option<Guid>) -> CodecResult<()> {
        match value {
            Some(value) => self.write_guid(value),
            None => self.write_null(),
        }
    }

    fn tag(&mut self, tag: u8) -> CodecResult<()> {
        self.inner.write_u8(tag)?;
        Ok(())
    }

    fn tagged_i64(&mut self, tag: u8, value: i64) -> CodecResult<()> {
        self.tag(tag)?;
        self.inner.write_i64::<LittleEndian>(value)?;
        Ok(())
    }

    /// Eight 7-bit groups with continuation bits, then a full ninth byte.
    fn write_7bit_encoded(&mut self, mut value: u64) -> CodecResult<()> {
        let mut buffer = [0u8; 9];
        let mut count = 0;
        while count < 8 {
            let group = (value & 0x7F) as u8;
            value >>= 7;
            if value == 0 {
                buffer[count] = group;
                count += 1;
                return self.write_raw(&buffer[..count]);
            }
            buffer[count] = group | 0x80;
            count += 1;
        }
        buffer[8] = value as u8;
        self.write_raw(&buffer)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> CodecResult<()> {
        self.inner.write_all(bytes)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::BinaryWriter;
    use crate::binary::data_type;
    use crate::model::{DateTime, Guid, TimeSpan};

    fn written(f: impl FnOnce(&mut BinaryWriter<Vec<u8>>)) -> Vec<u8> {
        let mut writer = BinaryWriter::new(Vec::new());
        f(&mut writer);
        writer.into_inner()
    }

    #[test]
    fn integer_constants_collapse_into_tag() {
        assert_eq!(written(|w| w.write_i32(0).unwrap()), vec![data_type::ZERO_INT32]);
        assert_eq!(written(|w| w.write_i32(-1).unwrap()), vec![data_type::MINUS_ONE_INT32]);
        assert_eq!(written(|w| w.write_i64(i64::MAX).unwrap()), vec![data_type::MAX_INT64]);
        assert_eq!(written(|w| w.write_u8(255).unwrap()), vec![data_type::MAX_BYTE]);
    }

    #[test]
    fn integer_payload_is_little_endian() {
        assert_eq!(
            written(|w| w.write_i32(34500).unwrap()),
            vec![data_type::INT32, 0xC4, 0x86, 0x00, 0x00]
        );
        assert_eq!(
            written(|w| w.write_u16(0x1234).unwrap()),
            vec![data_type::UINT16, 0x34, 0x12]
        );
    }

    #[test]
    fn double_special_values_use_dedicated_tags() {
        assert_eq!(written(|w| w.write_f64(f64::NAN).unwrap()), vec![data_type::DOUBLE_NAN]);
        assert_eq!(written(|w| w.write_f64(f64::MIN).unwrap()), vec![data_type::MIN_DOUBLE]);
        assert_eq!(written(|w| w.write_f64(1.0).unwrap()), vec![data_type::ONE_DOUBLE]);
        let bytes = written(|w| w.write_f64(2.5).unwrap());
        assert_eq!(bytes[0], data_type::DOUBLE);
        assert_eq!(&bytes[1..], &2.5f64.to_le_bytes());
    }

    #[test]
    fn zero_time_values_use_zero_tags() {
        assert_eq!(
            written(|w| w.write_date_time(DateTime::ZERO).unwrap()),
            vec![data_type::ZERO_DATE_TIME]
        );
        assert_eq!(
            written(|w| w.write_time_span(TimeSpan::ZERO).unwrap()),
            vec![data_type::ZERO_TIME_SPAN]
        );
    }

    #[test]
    fn guid_uses_mixed_endian_layout() {
        let id = Guid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap();
        let bytes = written(|w| w.write_guid(id).unwrap());
        assert_eq!(bytes[0], data_type::GUID);
        assert_eq!(
            &bytes[1..],
            &[
                0x33, 0x22, 0x11, 0x00, 0x55, 0x44, 0x77, 0x66, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ]
        );
        assert_eq!(written(|w| w.write_guid(Guid::nil()).unwrap()), vec![data_type::EMPTY_GUID]);
    }

    #[test]
    fn string_uses_7bit_length_prefix() {
        let text = "x".repeat(200);
        let bytes = written(|w| w.write_str(&text).unwrap());
        assert_eq!(&bytes[..3], &[data_type::STRING, 0xC8, 0x01]);
        assert_eq!(bytes.len(), 3 + 200);
        assert_eq!(written(|w| w.write_str("").unwrap()), vec![data_type::EMPTY_STRING]);
    }

    #[test]
    fn byte_arrays_pick_smallest_size_class() {
        assert_eq!(
            written(|w| w.write_bytes(&[]).unwrap()),
            vec![data_type::EMPTY_BYTE_ARRAY]
        );
        assert_eq!(
            written(|w| w.write_bytes(&[7, 8]).unwrap()),
            vec![data_type::SMALL_BYTE_ARRAY, 2, 7, 8]
        );
        let medium = vec![1u8; 300];
        let bytes = written(|w| w.write_bytes(&medium).unwrap());
        assert_eq!(&bytes[..3], &[data_type::BYTE_ARRAY, 0x2C, 0x01]);
    }

    #[test]
    fn nullable_none_writes_null_tag() {
        assert_eq!(written(|w| w.write_nullable_guid(None).unwrap()), vec![data_type::NULL]);
        assert_eq!(written(|w| w.write_nullable_f64(None).unwrap()), vec![data_type::NULL]);
        assert_eq!(
            written(|w| w.write_nullable_time_span(None).unwrap()),
            vec![data_type::NULL]
        );
    }
}
