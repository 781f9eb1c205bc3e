//! Property family.
//!
//! # Responsibility
//! - Project `PropertyView` rows onto typed value properties and timeseries
//!   reference properties.
//!
//! # Invariants
//! - Every handled kind carries exactly one payload field after the base
//!   fields, so every record has the same length.
//! - `UInt64Property` values are stored and written as signed 64-bit integers.
//! - The abstract `Property` and `TimeseriesProperty` kinds fail with
//!   `UnknownKind`.

use crate::binary::{BinaryWriter, CodecResult};
use crate::model::{DateTime, Guid, Kind, ObjectState, TimeSpan};
use crate::reader::columns::{
    get_binary, get_date_time, get_guid, get_nullable_guid, get_time_span, get_u64,
};
use crate::reader::{
    unknown_kind, ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink,
    LogErrorSink, ReaderResult, ENTITY_TYPE_FIELD_ID,
};
use rusqlite::Row;
use serde::Serialize;
use std::io::Write;

pub const BASE_QUERY: &str = "SELECT
  p.[Id],
  p.[EntityType],
  p.[RowVersion],
  p.[Element],
  p.[Definition],
  bop.[Value],
  byp.[Value],
  dtp.[Value],
  dp.[Value],
  gp.[Value],
  i16p.[Value],
  i32p.[Value],
  i64p.[Value],
  rp.[Value],
  sp.[Value],
  sip.[Value],
  stp.[Value],
  btp.[Timeseries],
  botp.[Timeseries],
  bytp.[Timeseries],
  dttp.[Timeseries],
  dotp.[Timeseries],
  gtp.[Timeseries],
  i16tp.[Timeseries],
  i32tp.[Timeseries],
  i64tp.[Timeseries],
  rtp.[Timeseries],
  sbtp.[Timeseries],
  sitp.[Timeseries],
  sttp.[Timeseries],
  tstp.[Timeseries],
  u16tp.[Timeseries],
  u32tp.[Timeseries],
  u64tp.[Timeseries],
  tsp.[Value],
  u16p.[Value],
  u32p.[Value],
  u64p.[Value],
  bp.[Value]
FROM [PropertyView] p
  LEFT JOIN [BinaryProperty] bp ON(p.[Id] = bp.[Id] )
  LEFT JOIN [BooleanProperty] bop ON(p.[Id] = bop.[Id] )
  LEFT JOIN [ByteProperty] byp ON(p.[Id] = byp.[Id] )
  LEFT JOIN [DateTimeProperty] dtp ON(p.[Id] = dtp.[Id] )
  LEFT JOIN [DoubleProperty] dp ON(p.[Id] = dp.[Id] )
  LEFT JOIN [GuidProperty] gp ON(p.[Id] = gp.[Id] )
  LEFT JOIN [Int16Property] i16p ON(p.[Id] = i16p.[Id] )
  LEFT JOIN [Int32Property] i32p ON(p.[Id] = i32p.[Id] )
  LEFT JOIN [Int64Property] i64p ON(p.[Id] = i64p.[Id] )
  LEFT JOIN [ReferenceProperty] rp ON(p.[Id] = rp.[Id] )
  LEFT JOIN [SByteProperty] sp ON(p.[Id] = sp.[Id] )
  LEFT JOIN [SingleProperty] sip ON(p.[Id] = sip.[Id] )
  LEFT JOIN [StringProperty] stp ON(p.[Id] = stp.[Id] )
  LEFT JOIN [TimeseriesProperty] tp ON(p.[Id] = tp.[Id] )
  LEFT JOIN [BinaryTimeseriesProperty] btp ON(p.[Id] = btp.[Id] )
  LEFT JOIN [BooleanTimeseriesProperty] botp ON(p.[Id] = botp.[Id] )
  LEFT JOIN [ByteTimeseriesProperty] bytp ON(p.[Id] = bytp.[Id] )
  LEFT JOIN [DateTimeTimeseriesProperty] dttp ON(p.[Id] = dttp.[Id] )
  LEFT JOIN [DoubleTimeseriesProperty] dotp ON(p.[Id] = dotp.[Id] )
  LEFT JOIN [GuidTimeseriesProperty] gtp ON(p.[Id] = gtp.[Id] )
  LEFT JOIN [Int16TimeseriesProperty] i16tp ON(p.[Id] = i16tp.[Id] )
  LEFT JOIN [Int32TimeseriesProperty] i32tp ON(p.[Id] = i32tp.[Id] )
  LEFT JOIN [Int64TimeseriesProperty] i64tp ON(p.[Id] = i64tp.[Id] )
  LEFT JOIN [ReferenceTimeseriesProperty] rtp ON(p.[Id] = rtp.[Id] )
  LEFT JOIN [SByteTimeseriesProperty] sbtp ON(p.[Id] = sbtp.[Id] )
  LEFT JOIN [SingleTimeseriesProperty] sitp ON(p.[Id] = sitp.[Id] )
  LEFT JOIN [StringTimeseriesProperty] sttp ON(p.[Id] = sttp.[Id] )
  LEFT JOIN [TimeSpanTimeseriesProperty] tstp ON(p.[Id] = tstp.[Id] )
  LEFT JOIN [UInt16TimeseriesProperty] u16tp ON(p.[Id] = u16tp.[Id] )
  LEFT JOIN [UInt32TimeseriesProperty] u32tp ON(p.[Id] = u32tp.[Id] )
  LEFT JOIN [UInt64TimeseriesProperty] u64tp ON(p.[Id] = u64tp.[Id] )
  LEFT JOIN [TimeSpanProperty] tsp ON(p.[Id] = tsp.[Id] )
  LEFT JOIN [UInt16Property] u16p ON(p.[Id] = u16p.[Id] )
  LEFT JOIN [UInt32Property] u32p ON(p.[Id] = u32p.[Id] )
  LEFT JOIN [UInt64Property] u64p ON(p.[Id] = u64p.[Id] )
";

pub const BASE_VIEW_NAME: &str = "PropertyView";
pub const VIEW_ALIAS_NAME: &str = "p";

pub const P_ID_FIELD_ID: usize = 0;
pub const P_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const P_ROWVERSION_FIELD_ID: usize = 2;
pub const P_ELEMENT_FIELD_ID: usize = 3;
pub const P_DEFINITION_FIELD_ID: usize = 4;
pub const BOP_VALUE_FIELD_ID: usize = 5;
pub const BYP_VALUE_FIELD_ID: usize = 6;
pub const DTP_VALUE_FIELD_ID: usize = 7;
pub const DP_VALUE_FIELD_ID: usize = 8;
pub const GP_VALUE_FIELD_ID: usize = 9;
pub const I16P_VALUE_FIELD_ID: usize = 10;
pub const I32P_VALUE_FIELD_ID: usize = 11;
pub const I64P_VALUE_FIELD_ID: usize = 12;
pub const RP_VALUE_FIELD_ID: usize = 13;
pub const SP_VALUE_FIELD_ID: usize = 14;
pub const SIP_VALUE_FIELD_ID: usize = 15;
pub const STP_VALUE_FIELD_ID: usize = 16;
pub const BTP_TIMESERIES_FIELD_ID: usize = 17;
pub const BOTP_TIMESERIES_FIELD_ID: usize = 18;
pub const BYTP_TIMESERIES_FIELD_ID: usize = 19;
pub const DTTP_TIMESERIES_FIELD_ID: usize = 20;
pub const DOTP_TIMESERIES_FIELD_ID: usize = 21;
pub const GTP_TIMESERIES_FIELD_ID: usize = 22;
pub const I16TP_TIMESERIES_FIELD_ID: usize = 23;
pub const I32TP_TIMESERIES_FIELD_ID: usize = 24;
pub const I64TP_TIMESERIES_FIELD_ID: usize = 25;
pub const RTP_TIMESERIES_FIELD_ID: usize = 26;
pub const SBTP_TIMESERIES_FIELD_ID: usize = 27;
pub const SITP_TIMESERIES_FIELD_ID: usize = 28;
pub const STTP_TIMESERIES_FIELD_ID: usize = 29;
pub const TSTP_TIMESERIES_FIELD_ID: usize = 30;
pub const U16TP_TIMESERIES_FIELD_ID: usize = 31;
pub const U32TP_TIMESERIES_FIELD_ID: usize = 32;
pub const U64TP_TIMESERIES_FIELD_ID: usize = 33;
pub const TSP_VALUE_FIELD_ID: usize = 34;
pub const U16P_VALUE_FIELD_ID: usize = 35;
pub const U32P_VALUE_FIELD_ID: usize = 36;
pub const U64P_VALUE_FIELD_ID: usize = 37;
pub const BP_VALUE_FIELD_ID: usize = 38;

const RECORD_LEN: usize = 7;

#[derive(Debug, Clone, Copy)]
pub struct PropertyFamily;

pub type ComplexPropertyDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, PropertyFamily, S>;

/// Typed accessors over one row of `BASE_QUERY`.
#[derive(Clone, Copy)]
pub struct PropertyColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> PropertyColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, P_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        Ok(self.row.get(P_KIND_FIELD_ID)?)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        Ok(self.row.get(P_ROWVERSION_FIELD_ID)?)
    }

    pub fn element(&self) -> ReaderResult<Guid> {
        get_guid(self.row, P_ELEMENT_FIELD_ID)
    }

    pub fn definition(&self) -> ReaderResult<Guid> {
        get_guid(self.row, P_DEFINITION_FIELD_ID)
    }

    pub fn binary_value(&self) -> ReaderResult<Vec<u8>> {
        get_binary(self.row, BP_VALUE_FIELD_ID)
    }

    pub fn boolean_value(&self) -> ReaderResult<bool> {
        Ok(self.row.get(BOP_VALUE_FIELD_ID)?)
    }

    pub fn byte_value(&self) -> ReaderResult<u8> {
        Ok(self.row.get(BYP_VALUE_FIELD_ID)?)
    }

    pub fn date_time_value(&self) -> ReaderResult<DateTime> {
        get_date_time(self.row, DTP_VALUE_FIELD_ID)
    }

    pub fn double_value(&self) -> ReaderResult<f64> {
        Ok(self.row.get(DP_VALUE_FIELD_ID)?)
    }

    pub fn guid_value(&self) -> ReaderResult<Guid> {
        get_guid(self.row, GP_VALUE_FIELD_ID)
    }

    pub fn int16_value(&self) -> ReaderResult<i16> {
        Ok(self.row.get(I16P_VALUE_FIELD_ID)?)
    }

    pub fn int32_value(&self) -> ReaderResult<i32> {
        Ok(self.row.get(I32P_VALUE_FIELD_ID)?)
    }

    pub fn int64_value(&self) -> ReaderResult<i64> {
        Ok(self.row.get(I64P_VALUE_FIELD_ID)?)
    }

    pub fn reference_value(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, RP_VALUE_FIELD_ID)
    }

    pub fn sbyte_value(&self) -> ReaderResult<i8> {
        Ok(self.row.get(SP_VALUE_FIELD_ID)?)
    }

    pub fn single_value(&self) -> ReaderResult<f32> {
        Ok(self.row.get(SIP_VALUE_FIELD_ID)?)
    }

    pub fn string_value(&self) -> ReaderResult<String> {
        Ok(self.row.get(STP_VALUE_FIELD_ID)?)
    }

    pub fn time_span_value(&self) -> ReaderResult<TimeSpan> {
        get_time_span(self.row, TSP_VALUE_FIELD_ID)
    }

    pub fn uint16_value(&self) -> ReaderResult<u16> {
        Ok(self.row.get(U16P_VALUE_FIELD_ID)?)
    }

    pub fn uint32_value(&self) -> ReaderResult<u32> {
        Ok(self.row.get(U32P_VALUE_FIELD_ID)?)
    }

    pub fn uint64_value(&self) -> ReaderResult<u64> {
        get_u64(self.row, U64P_VALUE_FIELD_ID)
    }

    /// Timeseries reference of a timeseries property of `value_type`.
    pub fn timeseries(&self, value_type: TimeseriesValueType) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, value_type.ordinal())
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, PropertyFamily, S> {
    pub fn columns(&self) -> PropertyColumns<'a, 'stmt> {
        PropertyColumns::new(self.row())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyObject {
    pub object_state: ObjectState,
    pub id: Guid,
    pub row_version: i64,
    pub element: Guid,
    pub definition: Guid,
    pub variant: PropertyVariant,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PropertyVariant {
    Value { value: PropertyValue },
    Timeseries {
        value_type: TimeseriesValueType,
        timeseries: Option<Guid>,
    },
}

/// Payload of a value property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum PropertyValue {
    Binary(Vec<u8>),
    Boolean(bool),
    Byte(u8),
    DateTime(DateTime),
    Double(f64),
    Guid(Guid),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    Reference(Option<Guid>),
    SByte(i8),
    Single(f32),
    String(String),
    TimeSpan(TimeSpan),
    UInt16(u16),
    UInt32(u32),
    UInt64(u64),
}

impl PropertyValue {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Binary(_) => Kind::BinaryProperty,
            Self::Boolean(_) => Kind::BooleanProperty,
            Self::Byte(_) => Kind::ByteProperty,
            Self::DateTime(_) => Kind::DateTimeProperty,
            Self::Double(_) => Kind::DoubleProperty,
            Self::Guid(_) => Kind::GuidProperty,
            Self::Int16(_) => Kind::Int16Property,
            Self::Int32(_) => Kind::Int32Property,
            Self::Int64(_) => Kind::Int64Property,
            Self::Reference(_) => Kind::ReferenceProperty,
            Self::SByte(_) => Kind::SByteProperty,
            Self::Single(_) => Kind::SingleProperty,
            Self::String(_) => Kind::StringProperty,
            Self::TimeSpan(_) => Kind::TimeSpanProperty,
            Self::UInt16(_) => Kind::UInt16Property,
            Self::UInt32(_) => Kind::UInt32Property,
            Self::UInt64(_) => Kind::UInt64Property,
        }
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        match self {
            Self::Binary(value) => writer.write_bytes(value),
            Self::Boolean(value) => writer.write_bool(*value),
            Self::Byte(value) => writer.write_u8(*value),
            Self::DateTime(value) => writer.write_date_time(*value),
            Self::Double(value) => writer.write_f64(*value),
            Self::Guid(value) => writer.write_guid(*value),
            Self::Int16(value) => writer.write_i16(*value),
            Self::Int32(value) => writer.write_i32(*value),
            Self::Int64(value) => writer.write_i64(*value),
            Self::Reference(value) => writer.write_nullable_guid(*value),
            Self::SByte(value) => writer.write_i8(*value),
            Self::Single(value) => writer.write_f32(*value),
            Self::String(value) => writer.write_str(value),
            Self::TimeSpan(value) => writer.write_time_span(*value),
            Self::UInt16(value) => writer.write_u16(*value),
            Self::UInt32(value) => writer.write_u32(*value),
            Self::UInt64(value) => writer.write_i64(*value as i64),
        }
    }

    fn decode(kind: Kind, c: &PropertyColumns<'_, '_>) -> ReaderResult<Option<Self>> {
        let value = match kind {
            Kind::BinaryProperty => Self::Binary(c.binary_value()?),
            Kind::BooleanProperty => Self::Boolean(c.boolean_value()?),
            Kind::ByteProperty => Self::Byte(c.byte_value()?),
            Kind::DateTimeProperty => Self::DateTime(c.date_time_value()?),
            Kind::DoubleProperty => Self::Double(c.double_value()?),
            Kind::GuidProperty => Self::Guid(c.guid_value()?),
            Kind::Int16Property => Self::Int16(c.int16_value()?),
            Kind::Int32Property => Self::Int32(c.int32_value()?),
            Kind::Int64Property => Self::Int64(c.int64_value()?),
            Kind::ReferenceProperty => Self::Reference(c.reference_value()?),
            Kind::SByteProperty => Self::SByte(c.sbyte_value()?),
            Kind::SingleProperty => Self::Single(c.single_value()?),
            Kind::StringProperty => Self::String(c.string_value()?),
            Kind::TimeSpanProperty => Self::TimeSpan(c.time_span_value()?),
            Kind::UInt16Property => Self::UInt16(c.uint16_value()?),
            Kind::UInt32Property => Self::UInt32(c.uint32_value()?),
            Kind::UInt64Property => Self::UInt64(c.uint64_value()?),
            _ => return Ok(None),
        };
        Ok(Some(value))
    }
}

/// Element type of the timeseries a timeseries property points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeseriesValueType {
    Binary,
    Boolean,
    Byte,
    DateTime,
    Double,
    Guid,
    Int16,
    Int32,
    Int64,
    Reference,
    SByte,
    Single,
    String,
    TimeSpan,
    UInt16,
    UInt32,
    UInt64,
}

impl TimeseriesValueType {
    pub fn from_kind(kind: Kind) -> Option<Self> {
        let value_type = match kind {
            Kind::BinaryTimeseriesProperty => Self::Binary,
            Kind::BooleanTimeseriesProperty => Self::Boolean,
            Kind::ByteTimeseriesProperty => Self::Byte,
            Kind::DateTimeTimeseriesProperty => Self::DateTime,
            Kind::DoubleTimeseriesProperty => Self::Double,
            Kind::GuidTimeseriesProperty => Self::Guid,
            Kind::Int16TimeseriesProperty => Self::Int16,
            Kind::Int32TimeseriesProperty => Self::Int32,
            Kind::Int64TimeseriesProperty => Self::Int64,
            Kind::ReferenceTimeseriesProperty => Self::Reference,
            Kind::SByteTimeseriesProperty => Self::SByte,
            Kind::SingleTimeseriesProperty => Self::Single,
            Kind::StringTimeseriesProperty => Self::String,
            Kind::TimeSpanTimeseriesProperty => Self::TimeSpan,
            Kind::UInt16TimeseriesProperty => Self::UInt16,
            Kind::UInt32TimeseriesProperty => Self::UInt32,
            Kind::UInt64TimeseriesProperty => Self::UInt64,
            _ => return None,
        };
        Some(value_type)
    }

    pub fn kind(self) -> Kind {
        match self {
            Self::Binary => Kind::BinaryTimeseriesProperty,
            Self::Boolean => Kind::BooleanTimeseriesProperty,
            Self::Byte => Kind::ByteTimeseriesProperty,
            Self::DateTime => Kind::DateTimeTimeseriesProperty,
            Self::Double => Kind::DoubleTimeseriesProperty,
            Self::Guid => Kind::GuidTimeseriesProperty,
            Self::Int16 => Kind::Int16TimeseriesProperty,
            Self::Int32 => Kind::Int32TimeseriesProperty,
            Self::Int64 => Kind::Int64TimeseriesProperty,
            Self::Reference => Kind::ReferenceTimeseriesProperty,
            Self::SByte => Kind::SByteTimeseriesProperty,
            Self::Single => Kind::SingleTimeseriesProperty,
            Self::String => Kind::StringTimeseriesProperty,
            Self::TimeSpan => Kind::TimeSpanTimeseriesProperty,
            Self::UInt16 => Kind::UInt16TimeseriesProperty,
            Self::UInt32 => Kind::UInt32TimeseriesProperty,
            Self::UInt64 => Kind::UInt64TimeseriesProperty,
        }
    }

    /// Ordinal of the `Timeseries` column of the matching subtype table.
    pub fn ordinal(self) -> usize {
        match self {
            Self::Binary => BTP_TIMESERIES_FIELD_ID,
            Self::Boolean => BOTP_TIMESERIES_FIELD_ID,
            Self::Byte => BYTP_TIMESERIES_FIELD_ID,
            Self::DateTime => DTTP_TIMESERIES_FIELD_ID,
            Self::Double => DOTP_TIMESERIES_FIELD_ID,
            Self::Guid => GTP_TIMESERIES_FIELD_ID,
            Self::Int16 => I16TP_TIMESERIES_FIELD_ID,
            Self::Int32 => I32TP_TIMESERIES_FIELD_ID,
            Self::Int64 => I64TP_TIMESERIES_FIELD_ID,
            Self::Reference => RTP_TIMESERIES_FIELD_ID,
            Self::SByte => SBTP_TIMESERIES_FIELD_ID,
            Self::Single => SITP_TIMESERIES_FIELD_ID,
            Self::String => STTP_TIMESERIES_FIELD_ID,
            Self::TimeSpan => TSTP_TIMESERIES_FIELD_ID,
            Self::UInt16 => U16TP_TIMESERIES_FIELD_ID,
            Self::UInt32 => U32TP_TIMESERIES_FIELD_ID,
            Self::UInt64 => U64TP_TIMESERIES_FIELD_ID,
        }
    }
}

impl PropertyVariant {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Value { value } => value.kind(),
            Self::Timeseries { value_type, .. } => value_type.kind(),
        }
    }
}

impl DataObject for PropertyObject {
    fn kind(&self) -> Kind {
        self.variant.kind()
    }

    fn object_state(&self) -> ObjectState {
        self.object_state
    }

    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_i32(self.kind().as_i32())?;
        writer.write_u8(self.object_state.as_u8())?;
        writer.write_guid(self.id)?;
        writer.write_i64(self.row_version)?;
        writer.write_guid(self.element)?;
        writer.write_guid(self.definition)?;
        match &self.variant {
            PropertyVariant::Value { value } => value.write_to(writer),
            PropertyVariant::Timeseries { timeseries, .. } => {
                writer.write_nullable_guid(*timeseries)
            }
        }
    }
}

impl ComplexFamily for PropertyFamily {
    const FAMILY: &'static str = "Property";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = PropertyObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        let c = PropertyColumns::new(row);
        let entity_type = c.entity_type()?;
        let Some(kind) = Kind::from_i32(entity_type) else {
            return Err(unknown_kind(Self::FAMILY, entity_type));
        };
        let variant = if let Some(value_type) = TimeseriesValueType::from_kind(kind) {
            PropertyVariant::Timeseries {
                value_type,
                timeseries: c.timeseries(value_type)?,
            }
        } else if let Some(value) = PropertyValue::decode(kind, &c)? {
            PropertyVariant::Value { value }
        } else {
            return Err(unknown_kind(Self::FAMILY, entity_type));
        };

        Ok(PropertyObject {
            object_state: ObjectState::Stored,
            id: c.id()?,
            row_version: c.row_version()?,
            element: c.element()?,
            definition: c.definition()?,
            variant,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        let handled = TimeseriesValueType::from_kind(kind).is_some()
            || matches!(
                kind,
                Kind::BinaryProperty
                    | Kind::BooleanProperty
                    | Kind::ByteProperty
                    | Kind::DateTimeProperty
                    | Kind::DoubleProperty
                    | Kind::GuidProperty
                    | Kind::Int16Property
                    | Kind::Int32Property
                    | Kind::Int64Property
                    | Kind::ReferenceProperty
                    | Kind::SByteProperty
                    | Kind::SingleProperty
                    | Kind::StringProperty
                    | Kind::TimeSpanProperty
                    | Kind::UInt16Property
                    | Kind::UInt32Property
                    | Kind::UInt64Property
            );
        handled.then_some(RECORD_LEN)
    }
}

#[cfg(test)]
mod tests {
    use super::{PropertyFamily, TimeseriesValueType};
    use crate::model::Kind;
    use crate::reader::ComplexFamily;

    #[test]
    fn timeseries_value_types_round_trip_through_kind() {
        for kind in Kind::ALL {
            if let Some(value_type) = TimeseriesValueType::from_kind(*kind) {
                assert_eq!(value_type.kind(), *kind);
            }
        }
    }

    #[test]
    fn abstract_kinds_have_no_record() {
        assert_eq!(PropertyFamily::record_len(Kind::Property), None);
        assert_eq!(PropertyFamily::record_len(Kind::TimeseriesProperty), None);
        assert_eq!(PropertyFamily::record_len(Kind::UInt64Property), Some(7));
        assert_eq!(
            PropertyFamily::record_len(Kind::StringTimeseriesProperty),
            Some(7)
        );
    }
}
