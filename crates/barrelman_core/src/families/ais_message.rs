//! AIS message family.
//!
//! # Responsibility
//! - Project `AisMessageView` rows onto the concrete AIS message variants.
//!
//! # Invariants
//! - The abstract `AisMessage` and `AisPositionReportClassAMessageBase` kinds
//!   have no projection; rows of those kinds fail with `UnknownKind`.
//! - The three class A position reports share the columns of their common
//!   base table and differ only in kind.
//! - Coded AIS fields such as ship type or fix type are carried as raw
//!   integers and written with the 32-bit writer.

use crate::binary::{BinaryWriter, CodecResult};
use crate::model::{DateTime, Guid, Kind, ObjectState};
use crate::reader::columns::{get_date_time, get_guid, get_nullable_date_time, get_nullable_guid};
use crate::reader::{
    unknown_kind, ComplexDataReader, ComplexFamily, ComplexRow, DataObject, ErrorSink,
    LogErrorSink, ReaderResult, ENTITY_TYPE_FIELD_ID,
};
use rusqlite::types::FromSql;
use rusqlite::Row;
use serde::Serialize;
use std::io::Write;

pub const BASE_QUERY: &str = "SELECT
  am.[Id],
  am.[EntityType],
  am.[RowVersion],
  am.[AisDevice],
  am.[ReceivedTimestamp],
  am.[MessageSequenceNumber],
  am.[Repeat],
  am.[Mmsi],
  atnrm.[NavigationalAidType],
  atnrm.[Name],
  atnrm.[PositionAccuracy],
  atnrm.[Longitude],
  atnrm.[Latitude],
  atnrm.[DimensionToBow],
  atnrm.[DimensionToStern],
  atnrm.[DimensionToPort],
  atnrm.[DimensionToStarboard],
  atnrm.[PositionFixType],
  atnrm.[Timestamp],
  atnrm.[OffPosition],
  atnrm.[RegionalReserved],
  atnrm.[Raim],
  atnrm.[VirtualAid],
  atnrm.[Assigned],
  atnrm.[Spare],
  atnrm.[NameExtension],
  aasrm.[SequenceNumber],
  aasrm.[DestinationMmsi],
  aasrm.[RetransmitFlag],
  aasrm.[Spare],
  aasrm.[Text],
  absrm.[Timestamp],
  absrm.[PositionAccuracy],
  absrm.[Longitude],
  absrm.[Latitude],
  absrm.[PositionFixType],
  absrm.[Spare],
  absrm.[Raim],
  absrm.[RadioStatus],
  abac.[Spare],
  abac.[SequenceNumber1],
  abac.[Mmsi1],
  abac.[SequenceNumber2],
  abac.[Mmsi2],
  abac.[SequenceNumber3],
  abac.[Mmsi3],
  abac.[SequenceNumber4],
  abac.[Mmsi4],
  abam.[SequenceNumber],
  abam.[DestinationMmsi],
  abam.[RetransmitFlag],
  abam.[Spare],
  abam.[DesignatedAreaCode],
  abam.[FunctionalId],
  abbm.[Spare],
  abbm.[DesignatedAreaCode],
  abbm.[FunctionalId],
  adlmm.[Spare],
  adlmm.[Offset1],
  adlmm.[ReservedSlots1],
  adlmm.[Timeout1],
  adlmm.[Increment1],
  adlmm.[Offset2],
  adlmm.[ReservedSlots2],
  adlmm.[Timeout2],
  adlmm.[Increment2],
  adlmm.[Offset3],
  adlmm.[ReservedSlots3],
  adlmm.[Timeout3],
  adlmm.[Increment3],
  adlmm.[Offset4],
  adlmm.[ReservedSlots4],
  adlmm.[Timeout4],
  adlmm.[Increment4],
  aecbprm.[Reserved],
  aecbprm.[SpeedOverGround],
  aecbprm.[PositionAccuracy],
  aecbprm.[Longitude],
  aecbprm.[Latitude],
  aecbprm.[CourseOverGround],
  aecbprm.[TrueHeading],
  aecbprm.[Timestamp],
  aecbprm.[RegionalReserved],
  aecbprm.[Name],
  aecbprm.[ShipType],
  aecbprm.[DimensionToBow],
  aecbprm.[DimensionToStern],
  aecbprm.[DimensionToPort],
  aecbprm.[DimensionToStarboard],
  aecbprm.[PositionFixType],
  aecbprm.[Raim],
  aecbprm.[DataTerminalReady],
  aecbprm.[Assigned],
  aecbprm.[Spare],
  aim.[InterrogatedMmsi],
  aim.[FirstMessageType],
  aim.[FirstSlotOffset],
  aim.[SecondMessageType],
  aim.[SecondSlotOffset],
  aim.[SecondStationInterrogationMmsi],
  aim.[SecondStationFirstMessageType],
  aim.[SecondStationFirstSlotOffset],
  aprcab.[NavigationStatus],
  aprcab.[RateOfTurn],
  aprcab.[SpeedOverGround],
  aprcab.[PositionAccuracy],
  aprcab.[Longitude],
  aprcab.[Latitude],
  aprcab.[CourseOverGround],
  aprcab.[TrueHeading],
  aprcab.[Timestamp],
  aprcab.[ManeuverIndicator],
  aprcab.[Spare],
  aprcab.[Raim],
  aprcab.[RadioStatus],
  aprflram.[PositionAccuracy],
  aprflram.[Raim],
  aprflram.[NavigationStatus],
  aprflram.[Longitude],
  aprflram.[Latitude],
  aprflram.[SpeedOverGround],
  aprflram.[CourseOverGround],
  aprflram.[GnssPositionStatus],
  aprflram.[Spare],
  asram.[Spare],
  asram.[SequenceNumber1],
  asram.[Mmsi1],
  asram.[SequenceNumber2],
  asram.[Mmsi2],
  asram.[SequenceNumber3],
  asram.[Mmsi3],
  asram.[SequenceNumber4],
  asram.[Mmsi4],
  ascbprm.[Reserved],
  ascbprm.[SpeedOverGround],
  ascbprm.[PositionAccuracy],
  ascbprm.[Longitude],
  ascbprm.[Latitude],
  ascbprm.[CourseOverGround],
  ascbprm.[TrueHeading],
  ascbprm.[Timestamp],
  ascbprm.[RegionalReserved],
  ascbprm.[IsCsUnit],
  ascbprm.[HasDisplay],
  ascbprm.[HasDscCapability],
  ascbprm.[Band],
  ascbprm.[CanAcceptMessage22],
  ascbprm.[Assigned],
  ascbprm.[Raim],
  ascbprm.[RadioStatus],
  assaprm.[Altitude],
  assaprm.[SpeedOverGround],
  assaprm.[PositionAccuracy],
  assaprm.[Longitude],
  assaprm.[Latitude],
  assaprm.[CourseOverGround],
  assaprm.[Timestamp],
  assaprm.[Reserved],
  assaprm.[DataTerminalReady],
  assaprm.[Spare],
  assaprm.[Assigned],
  assaprm.[Raim],
  assaprm.[RadioStatus],
  asavrdm.[AisVersion],
  asavrdm.[ImoNumber],
  asavrdm.[Callsign],
  asavrdm.[ShipName],
  asavrdm.[ShipType],
  asavrdm.[DimensionToBow],
  asavrdm.[DimensionToStern],
  asavrdm.[DimensionToPort],
  asavrdm.[DimensionToStarboard],
  asavrdm.[PositionFixType],
  asavrdm.[EstimatedTimeOfArrival],
  asavrdm.[Draught],
  asavrdm.[Destination],
  asavrdm.[DataTerminalReady],
  asavrdm.[Spare],
  asdrm.[PartNumber],
  asdrpa.[ShipName],
  asdrpa.[Spare],
  asdrpb.[ShipType],
  asdrpb.[VendorId],
  asdrpb.[UnitModelCode],
  asdrpb.[SerialNumber],
  asdrpb.[Callsign],
  asdrpb.[DimensionToBow],
  asdrpb.[DimensionToStern],
  asdrpb.[DimensionToPort],
  asdrpb.[DimensionToStarboard],
  asdrpb.[MothershipMmsi],
  asdrpb.[PositionFixType],
  asdrpb.[Spare],
  auadim.[Spare1],
  auadim.[DestinationMmsi],
  auadim.[Spare2],
  auadrm.[Datetime],
  auadrm.[PositionAccuracy],
  auadrm.[Longitude],
  auadrm.[Latitude],
  auadrm.[PositionFixType],
  auadrm.[Spare],
  auadrm.[Raim],
  auadrm.[RadioStatus],
  abam.[Data],
  abbm.[Data]
FROM [AisMessageView] am
  LEFT JOIN [AidToNavigationReportMessage] atnrm ON(am.[Id] = atnrm.[Id] )
  LEFT JOIN [AisAddressedSafetyRelatedMessage] aasrm ON(am.[Id] = aasrm.[Id] )
  LEFT JOIN [AisBaseStationReportMessage] absrm ON(am.[Id] = absrm.[Id] )
  LEFT JOIN [AisBinaryAcknowledgeMessage] abac ON(am.[Id] = abac.[Id] )
  LEFT JOIN [AisBinaryAddressedMessage] abam ON(am.[Id] = abam.[Id] )
  LEFT JOIN [AisBinaryBroadcastMessage] abbm ON(am.[Id] = abbm.[Id] )
  LEFT JOIN [AisDataLinkManagementMessage] adlmm ON(am.[Id] = adlmm.[Id] )
  LEFT JOIN [AisExtendedClassBCsPositionReportMessage] aecbprm ON(am.[Id] = aecbprm.[Id] )
  LEFT JOIN [AisInterrogationMessage] aim ON(am.[Id] = aim.[Id] )
  LEFT JOIN [AisPositionReportClassAMessageBase] aprcab ON(am.[Id] = aprcab.[Id] )
  LEFT JOIN [AisPositionReportClassAAssignedScheduleMessage] aprcasm ON(am.[Id] = aprcasm.[Id] )
  LEFT JOIN [AisPositionReportClassAMessage] aprca ON(am.[Id] = aprca.[Id] )
  LEFT JOIN [AisPositionReportClassAResponseToInterrogationMessage] aprcatim ON(am.[Id] = aprcatim.[Id] )
  LEFT JOIN [AisPositionReportForLongRangeApplicationsMessage] aprflram ON(am.[Id] = aprflram.[Id] )
  LEFT JOIN [AisSafetyRelatedAcknowledgmentMessage] asram ON(am.[Id] = asram.[Id] )
  LEFT JOIN [AisStandardClassBCsPositionReportMessage] ascbprm ON(am.[Id] = ascbprm.[Id] )
  LEFT JOIN [AisStandardSarAircraftPositionReportMessage] assaprm ON(am.[Id] = assaprm.[Id] )
  LEFT JOIN [AisStaticAndVoyageRelatedDataMessage] asavrdm ON(am.[Id] = asavrdm.[Id] )
  LEFT JOIN [AisStaticDataReportMessage] asdrm ON(am.[Id] = asdrm.[Id] )
  LEFT JOIN [AisStaticDataReportPartAMessage] asdrpa ON(am.[Id] = asdrpa.[Id] )
  LEFT JOIN [AisStaticDataReportPartBMessage] asdrpb ON(am.[Id] = asdrpb.[Id] )
  LEFT JOIN [AisUtcAndDateInquiryMessage] auadim ON(am.[Id] = auadim.[Id] )
  LEFT JOIN [AisUtcAndDateResponseMessage] auadrm ON(am.[Id] = auadrm.[Id] )
";

pub const BASE_VIEW_NAME: &str = "AisMessageView";
pub const VIEW_ALIAS_NAME: &str = "am";

pub const AM_ID_FIELD_ID: usize = 0;
pub const AM_KIND_FIELD_ID: usize = ENTITY_TYPE_FIELD_ID;
pub const AM_ROWVERSION_FIELD_ID: usize = 2;
pub const AM_AISDEVICE_FIELD_ID: usize = 3;
pub const AM_RECEIVEDTIMESTAMP_FIELD_ID: usize = 4;
pub const AM_MESSAGESEQUENCENUMBER_FIELD_ID: usize = 5;
pub const AM_REPEAT_FIELD_ID: usize = 6;
pub const AM_MMSI_FIELD_ID: usize = 7;
pub const ATNRM_NAVIGATIONALAIDTYPE_FIELD_ID: usize = 8;
pub const ATNRM_NAME_FIELD_ID: usize = 9;
pub const ATNRM_POSITIONACCURACY_FIELD_ID: usize = 10;
pub const ATNRM_LONGITUDE_FIELD_ID: usize = 11;
pub const ATNRM_LATITUDE_FIELD_ID: usize = 12;
pub const ATNRM_DIMENSIONTOBOW_FIELD_ID: usize = 13;
pub const ATNRM_DIMENSIONTOSTERN_FIELD_ID: usize = 14;
pub const ATNRM_DIMENSIONTOPORT_FIELD_ID: usize = 15;
pub const ATNRM_DIMENSIONTOSTARBOARD_FIELD_ID: usize = 16;
pub const ATNRM_POSITIONFIXTYPE_FIELD_ID: usize = 17;
pub const ATNRM_TIMESTAMP_FIELD_ID: usize = 18;
pub const ATNRM_OFFPOSITION_FIELD_ID: usize = 19;
pub const ATNRM_REGIONALRESERVED_FIELD_ID: usize = 20;
pub const ATNRM_RAIM_FIELD_ID: usize = 21;
pub const ATNRM_VIRTUALAID_FIELD_ID: usize = 22;
pub const ATNRM_ASSIGNED_FIELD_ID: usize = 23;
pub const ATNRM_SPARE_FIELD_ID: usize = 24;
pub const ATNRM_NAMEEXTENSION_FIELD_ID: usize = 25;
pub const AASRM_SEQUENCENUMBER_FIELD_ID: usize = 26;
pub const AASRM_DESTINATIONMMSI_FIELD_ID: usize = 27;
pub const AASRM_RETRANSMITFLAG_FIELD_ID: usize = 28;
pub const AASRM_SPARE_FIELD_ID: usize = 29;
pub const AASRM_TEXT_FIELD_ID: usize = 30;
pub const ABSRM_TIMESTAMP_FIELD_ID: usize = 31;
pub const ABSRM_POSITIONACCURACY_FIELD_ID: usize = 32;
pub const ABSRM_LONGITUDE_FIELD_ID: usize = 33;
pub const ABSRM_LATITUDE_FIELD_ID: usize = 34;
pub const ABSRM_POSITIONFIXTYPE_FIELD_ID: usize = 35;
pub const ABSRM_SPARE_FIELD_ID: usize = 36;
pub const ABSRM_RAIM_FIELD_ID: usize = 37;
pub const ABSRM_RADIOSTATUS_FIELD_ID: usize = 38;
pub const ABAC_SPARE_FIELD_ID: usize = 39;
pub const ABAC_SEQUENCENUMBER1_FIELD_ID: usize = 40;
pub const ABAC_MMSI1_FIELD_ID: usize = 41;
pub const ABAC_SEQUENCENUMBER2_FIELD_ID: usize = 42;
pub const ABAC_MMSI2_FIELD_ID: usize = 43;
pub const ABAC_SEQUENCENUMBER3_FIELD_ID: usize = 44;
pub const ABAC_MMSI3_FIELD_ID: usize = 45;
pub const ABAC_SEQUENCENUMBER4_FIELD_ID: usize = 46;
pub const ABAC_MMSI4_FIELD_ID: usize = 47;
pub const ABAM_SEQUENCENUMBER_FIELD_ID: usize = 48;
pub const ABAM_DESTINATIONMMSI_FIELD_ID: usize = 49;
pub const ABAM_RETRANSMITFLAG_FIELD_ID: usize = 50;
pub const ABAM_SPARE_FIELD_ID: usize = 51;
pub const ABAM_DESIGNATEDAREACODE_FIELD_ID: usize = 52;
pub const ABAM_FUNCTIONALID_FIELD_ID: usize = 53;
pub const ABBM_SPARE_FIELD_ID: usize = 54;
pub const ABBM_DESIGNATEDAREACODE_FIELD_ID: usize = 55;
pub const ABBM_FUNCTIONALID_FIELD_ID: usize = 56;
pub const ADLMM_SPARE_FIELD_ID: usize = 57;
pub const ADLMM_OFFSET1_FIELD_ID: usize = 58;
pub const ADLMM_RESERVEDSLOTS1_FIELD_ID: usize = 59;
pub const ADLMM_TIMEOUT1_FIELD_ID: usize = 60;
pub const ADLMM_INCREMENT1_FIELD_ID: usize = 61;
pub const ADLMM_OFFSET2_FIELD_ID: usize = 62;
pub const ADLMM_RESERVEDSLOTS2_FIELD_ID: usize = 63;
pub const ADLMM_TIMEOUT2_FIELD_ID: usize = 64;
pub const ADLMM_INCREMENT2_FIELD_ID: usize = 65;
pub const ADLMM_OFFSET3_FIELD_ID: usize = 66;
pub const ADLMM_RESERVEDSLOTS3_FIELD_ID: usize = 67;
pub const ADLMM_TIMEOUT3_FIELD_ID: usize = 68;
pub const ADLMM_INCREMENT3_FIELD_ID: usize = 69;
pub const ADLMM_OFFSET4_FIELD_ID: usize = 70;
pub const ADLMM_RESERVEDSLOTS4_FIELD_ID: usize = 71;
pub const ADLMM_TIMEOUT4_FIELD_ID: usize = 72;
pub const ADLMM_INCREMENT4_FIELD_ID: usize = 73;
pub const AECBPRM_RESERVED_FIELD_ID: usize = 74;
pub const AECBPRM_SPEEDOVERGROUND_FIELD_ID: usize = 75;
pub const AECBPRM_POSITIONACCURACY_FIELD_ID: usize = 76;
pub const AECBPRM_LONGITUDE_FIELD_ID: usize = 77;
pub const AECBPRM_LATITUDE_FIELD_ID: usize = 78;
pub const AECBPRM_COURSEOVERGROUND_FIELD_ID: usize = 79;
pub const AECBPRM_TRUEHEADING_FIELD_ID: usize = 80;
pub const AECBPRM_TIMESTAMP_FIELD_ID: usize = 81;
pub const AECBPRM_REGIONALRESERVED_FIELD_ID: usize = 82;
pub const AECBPRM_NAME_FIELD_ID: usize = 83;
pub const AECBPRM_SHIPTYPE_FIELD_ID: usize = 84;
pub const AECBPRM_DIMENSIONTOBOW_FIELD_ID: usize = 85;
pub const AECBPRM_DIMENSIONTOSTERN_FIELD_ID: usize = 86;
pub const AECBPRM_DIMENSIONTOPORT_FIELD_ID: usize = 87;
pub const AECBPRM_DIMENSIONTOSTARBOARD_FIELD_ID: usize = 88;
pub const AECBPRM_POSITIONFIXTYPE_FIELD_ID: usize = 89;
pub const AECBPRM_RAIM_FIELD_ID: usize = 90;
pub const AECBPRM_DATATERMINALREADY_FIELD_ID: usize = 91;
pub const AECBPRM_ASSIGNED_FIELD_ID: usize = 92;
pub const AECBPRM_SPARE_FIELD_ID: usize = 93;
pub const AIM_INTERROGATEDMMSI_FIELD_ID: usize = 94;
pub const AIM_FIRSTMESSAGETYPE_FIELD_ID: usize = 95;
pub const AIM_FIRSTSLOTOFFSET_FIELD_ID: usize = 96;
pub const AIM_SECONDMESSAGETYPE_FIELD_ID: usize = 97;
pub const AIM_SECONDSLOTOFFSET_FIELD_ID: usize = 98;
pub const AIM_SECONDSTATIONINTERROGATIONMMSI_FIELD_ID: usize = 99;
pub const AIM_SECONDSTATIONFIRSTMESSAGETYPE_FIELD_ID: usize = 100;
pub const AIM_SECONDSTATIONFIRSTSLOTOFFSET_FIELD_ID: usize = 101;
pub const APRCAB_NAVIGATIONSTATUS_FIELD_ID: usize = 102;
pub const APRCAB_RATEOFTURN_FIELD_ID: usize = 103;
pub const APRCAB_SPEEDOVERGROUND_FIELD_ID: usize = 104;
pub const APRCAB_POSITIONACCURACY_FIELD_ID: usize = 105;
pub const APRCAB_LONGITUDE_FIELD_ID: usize = 106;
pub const APRCAB_LATITUDE_FIELD_ID: usize = 107;
pub const APRCAB_COURSEOVERGROUND_FIELD_ID: usize = 108;
pub const APRCAB_TRUEHEADING_FIELD_ID: usize = 109;
pub const APRCAB_TIMESTAMP_FIELD_ID: usize = 110;
pub const APRCAB_MANEUVERINDICATOR_FIELD_ID: usize = 111;
pub const APRCAB_SPARE_FIELD_ID: usize = 112;
pub const APRCAB_RAIM_FIELD_ID: usize = 113;
pub const APRCAB_RADIOSTATUS_FIELD_ID: usize = 114;
pub const APRFLRAM_POSITIONACCURACY_FIELD_ID: usize = 115;
pub const APRFLRAM_RAIM_FIELD_ID: usize = 116;
pub const APRFLRAM_NAVIGATIONSTATUS_FIELD_ID: usize = 117;
pub const APRFLRAM_LONGITUDE_FIELD_ID: usize = 118;
pub const APRFLRAM_LATITUDE_FIELD_ID: usize = 119;
pub const APRFLRAM_SPEEDOVERGROUND_FIELD_ID: usize = 120;
pub const APRFLRAM_COURSEOVERGROUND_FIELD_ID: usize = 121;
pub const APRFLRAM_GNSSPOSITIONSTATUS_FIELD_ID: usize = 122;
pub const APRFLRAM_SPARE_FIELD_ID: usize = 123;
pub const ASRAM_SPARE_FIELD_ID: usize = 124;
pub const ASRAM_SEQUENCENUMBER1_FIELD_ID: usize = 125;
pub const ASRAM_MMSI1_FIELD_ID: usize = 126;
pub const ASRAM_SEQUENCENUMBER2_FIELD_ID: usize = 127;
pub const ASRAM_MMSI2_FIELD_ID: usize = 128;
pub const ASRAM_SEQUENCENUMBER3_FIELD_ID: usize = 129;
pub const ASRAM_MMSI3_FIELD_ID: usize = 130;
pub const ASRAM_SEQUENCENUMBER4_FIELD_ID: usize = 131;
pub const ASRAM_MMSI4_FIELD_ID: usize = 132;
pub const ASCBPRM_RESERVED_FIELD_ID: usize = 133;
pub const ASCBPRM_SPEEDOVERGROUND_FIELD_ID: usize = 134;
pub const ASCBPRM_POSITIONACCURACY_FIELD_ID: usize = 135;
pub const ASCBPRM_LONGITUDE_FIELD_ID: usize = 136;
pub const ASCBPRM_LATITUDE_FIELD_ID: usize = 137;
pub const ASCBPRM_COURSEOVERGROUND_FIELD_ID: usize = 138;
pub const ASCBPRM_TRUEHEADING_FIELD_ID: usize = 139;
pub const ASCBPRM_TIMESTAMP_FIELD_ID: usize = 140;
pub const ASCBPRM_REGIONALRESERVED_FIELD_ID: usize = 141;
pub const ASCBPRM_ISCSUNIT_FIELD_ID: usize = 142;
pub const ASCBPRM_HASDISPLAY_FIELD_ID: usize = 143;
pub const ASCBPRM_HASDSCCAPABILITY_FIELD_ID: usize = 144;
pub const ASCBPRM_BAND_FIELD_ID: usize = 145;
pub const ASCBPRM_CANACCEPTMESSAGE22_FIELD_ID: usize = 146;
pub const ASCBPRM_ASSIGNED_FIELD_ID: usize = 147;
pub const ASCBPRM_RAIM_FIELD_ID: usize = 148;
pub const ASCBPRM_RADIOSTATUS_FIELD_ID: usize = 149;
pub const ASSAPRM_ALTITUDE_FIELD_ID: usize = 150;
pub const ASSAPRM_SPEEDOVERGROUND_FIELD_ID: usize = 151;
pub const ASSAPRM_POSITIONACCURACY_FIELD_ID: usize = 152;
pub const ASSAPRM_LONGITUDE_FIELD_ID: usize = 153;
pub const ASSAPRM_LATITUDE_FIELD_ID: usize = 154;
pub const ASSAPRM_COURSEOVERGROUND_FIELD_ID: usize = 155;
pub const ASSAPRM_TIMESTAMP_FIELD_ID: usize = 156;
pub const ASSAPRM_RESERVED_FIELD_ID: usize = 157;
pub const ASSAPRM_DATATERMINALREADY_FIELD_ID: usize = 158;
pub const ASSAPRM_SPARE_FIELD_ID: usize = 159;
pub const ASSAPRM_ASSIGNED_FIELD_ID: usize = 160;
pub const ASSAPRM_RAIM_FIELD_ID: usize = 161;
pub const ASSAPRM_RADIOSTATUS_FIELD_ID: usize = 162;
pub const ASAVRDM_AISVERSION_FIELD_ID: usize = 163;
pub const ASAVRDM_IMONUMBER_FIELD_ID: usize = 164;
pub const ASAVRDM_CALLSIGN_FIELD_ID: usize = 165;
pub const ASAVRDM_SHIPNAME_FIELD_ID: usize = 166;
pub const ASAVRDM_SHIPTYPE_FIELD_ID: usize = 167;
pub const ASAVRDM_DIMENSIONTOBOW_FIELD_ID: usize = 168;
pub const ASAVRDM_DIMENSIONTOSTERN_FIELD_ID: usize = 169;
pub const ASAVRDM_DIMENSIONTOPORT_FIELD_ID: usize = 170;
pub const ASAVRDM_DIMENSIONTOSTARBOARD_FIELD_ID: usize = 171;
pub const ASAVRDM_POSITIONFIXTYPE_FIELD_ID: usize = 172;
pub const ASAVRDM_ESTIMATEDTIMEOFARRIVAL_FIELD_ID: usize = 173;
pub const ASAVRDM_DRAUGHT_FIELD_ID: usize = 174;
pub const ASAVRDM_DESTINATION_FIELD_ID: usize = 175;
pub const ASAVRDM_DATATERMINALREADY_FIELD_ID: usize = 176;
pub const ASAVRDM_SPARE_FIELD_ID: usize = 177;
pub const ASDRM_PARTNUMBER_FIELD_ID: usize = 178;
pub const ASDRPA_SHIPNAME_FIELD_ID: usize = 179;
pub const ASDRPA_SPARE_FIELD_ID: usize = 180;
pub const ASDRPB_SHIPTYPE_FIELD_ID: usize = 181;
pub const ASDRPB_VENDORID_FIELD_ID: usize = 182;
pub const ASDRPB_UNITMODELCODE_FIELD_ID: usize = 183;
pub const ASDRPB_SERIALNUMBER_FIELD_ID: usize = 184;
pub const ASDRPB_CALLSIGN_FIELD_ID: usize = 185;
pub const ASDRPB_DIMENSIONTOBOW_FIELD_ID: usize = 186;
pub const ASDRPB_DIMENSIONTOSTERN_FIELD_ID: usize = 187;
pub const ASDRPB_DIMENSIONTOPORT_FIELD_ID: usize = 188;
pub const ASDRPB_DIMENSIONTOSTARBOARD_FIELD_ID: usize = 189;
pub const ASDRPB_MOTHERSHIPMMSI_FIELD_ID: usize = 190;
pub const ASDRPB_POSITIONFIXTYPE_FIELD_ID: usize = 191;
pub const ASDRPB_SPARE_FIELD_ID: usize = 192;
pub const AUADIM_SPARE1_FIELD_ID: usize = 193;
pub const AUADIM_DESTINATIONMMSI_FIELD_ID: usize = 194;
pub const AUADIM_SPARE2_FIELD_ID: usize = 195;
pub const AUADRM_DATETIME_FIELD_ID: usize = 196;
pub const AUADRM_POSITIONACCURACY_FIELD_ID: usize = 197;
pub const AUADRM_LONGITUDE_FIELD_ID: usize = 198;
pub const AUADRM_LATITUDE_FIELD_ID: usize = 199;
pub const AUADRM_POSITIONFIXTYPE_FIELD_ID: usize = 200;
pub const AUADRM_SPARE_FIELD_ID: usize = 201;
pub const AUADRM_RAIM_FIELD_ID: usize = 202;
pub const AUADRM_RADIOSTATUS_FIELD_ID: usize = 203;
pub const ABAM_DATA_FIELD_ID: usize = 204;
pub const ABBM_DATA_FIELD_ID: usize = 205;

/// Fields written before the variant fields: kind, state and the base columns.
const BASE_RECORD_LEN: usize = 9;

/// Marker type binding the AIS message query to the generic reader.
#[derive(Debug, Clone, Copy)]
pub struct AisMessageFamily;

pub type ComplexAisMessageDataReader<'stmt, S = LogErrorSink> =
    ComplexDataReader<'stmt, AisMessageFamily, S>;

/// Typed accessors over one row of `BASE_QUERY`.
///
/// Base columns have one accessor each; subtype columns are read as a whole
/// section, since a subtype's columns are only meaningful together.
#[derive(Clone, Copy)]
pub struct AisMessageColumns<'a, 'stmt> {
    row: &'a Row<'stmt>,
}

impl<'a, 'stmt> AisMessageColumns<'a, 'stmt> {
    pub fn new(row: &'a Row<'stmt>) -> Self {
        Self { row }
    }

    pub fn id(&self) -> ReaderResult<Guid> {
        get_guid(self.row, AM_ID_FIELD_ID)
    }

    pub fn entity_type(&self) -> ReaderResult<i32> {
        self.value(AM_KIND_FIELD_ID)
    }

    pub fn row_version(&self) -> ReaderResult<i64> {
        self.value(AM_ROWVERSION_FIELD_ID)
    }

    pub fn ais_device(&self) -> ReaderResult<Guid> {
        get_guid(self.row, AM_AISDEVICE_FIELD_ID)
    }

    pub fn received_timestamp(&self) -> ReaderResult<DateTime> {
        get_date_time(self.row, AM_RECEIVEDTIMESTAMP_FIELD_ID)
    }

    pub fn message_sequence_number(&self) -> ReaderResult<i64> {
        self.value(AM_MESSAGESEQUENCENUMBER_FIELD_ID)
    }

    pub fn repeat(&self) -> ReaderResult<i32> {
        self.value(AM_REPEAT_FIELD_ID)
    }

    pub fn mmsi(&self) -> ReaderResult<Option<Guid>> {
        get_nullable_guid(self.row, AM_MMSI_FIELD_ID)
    }

    pub fn aid_to_navigation_report(&self) -> ReaderResult<AidToNavigationReport> {
        Ok(AidToNavigationReport {
            navigational_aid_type: self.value(ATNRM_NAVIGATIONALAIDTYPE_FIELD_ID)?,
            name: self.value(ATNRM_NAME_FIELD_ID)?,
            position_accuracy: self.value(ATNRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(ATNRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(ATNRM_LATITUDE_FIELD_ID)?,
            dimensions: self.dimensions(ATNRM_DIMENSIONTOBOW_FIELD_ID)?,
            position_fix_type: self.value(ATNRM_POSITIONFIXTYPE_FIELD_ID)?,
            timestamp: self.value(ATNRM_TIMESTAMP_FIELD_ID)?,
            off_position: self.value(ATNRM_OFFPOSITION_FIELD_ID)?,
            regional_reserved: self.value(ATNRM_REGIONALRESERVED_FIELD_ID)?,
            raim: self.value(ATNRM_RAIM_FIELD_ID)?,
            virtual_aid: self.value(ATNRM_VIRTUALAID_FIELD_ID)?,
            assigned: self.value(ATNRM_ASSIGNED_FIELD_ID)?,
            spare: self.value(ATNRM_SPARE_FIELD_ID)?,
            name_extension: self.value(ATNRM_NAMEEXTENSION_FIELD_ID)?,
        })
    }

    pub fn addressed_safety_related(&self) -> ReaderResult<AddressedSafetyRelated> {
        Ok(AddressedSafetyRelated {
            sequence_number: self.value(AASRM_SEQUENCENUMBER_FIELD_ID)?,
            destination_mmsi: get_nullable_guid(self.row, AASRM_DESTINATIONMMSI_FIELD_ID)?,
            retransmit_flag: self.value(AASRM_RETRANSMITFLAG_FIELD_ID)?,
            spare: self.value(AASRM_SPARE_FIELD_ID)?,
            text: self.value(AASRM_TEXT_FIELD_ID)?,
        })
    }

    pub fn base_station_report(&self) -> ReaderResult<BaseStationReport> {
        Ok(BaseStationReport {
            timestamp: get_date_time(self.row, ABSRM_TIMESTAMP_FIELD_ID)?,
            position_accuracy: self.value(ABSRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(ABSRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(ABSRM_LATITUDE_FIELD_ID)?,
            position_fix_type: self.value(ABSRM_POSITIONFIXTYPE_FIELD_ID)?,
            spare: self.value(ABSRM_SPARE_FIELD_ID)?,
            raim: self.value(ABSRM_RAIM_FIELD_ID)?,
            radio_status: self.value(ABSRM_RADIOSTATUS_FIELD_ID)?,
        })
    }

    pub fn binary_acknowledge(&self) -> ReaderResult<Acknowledgement> {
        self.acknowledgement(ABAC_SPARE_FIELD_ID)
    }

    pub fn binary_addressed(&self) -> ReaderResult<BinaryAddressed> {
        Ok(BinaryAddressed {
            sequence_number: self.value(ABAM_SEQUENCENUMBER_FIELD_ID)?,
            destination_mmsi: get_nullable_guid(self.row, ABAM_DESTINATIONMMSI_FIELD_ID)?,
            retransmit_flag: self.value(ABAM_RETRANSMITFLAG_FIELD_ID)?,
            spare: self.value(ABAM_SPARE_FIELD_ID)?,
            designated_area_code: self.value(ABAM_DESIGNATEDAREACODE_FIELD_ID)?,
            functional_id: self.value(ABAM_FUNCTIONALID_FIELD_ID)?,
            data: self.value(ABAM_DATA_FIELD_ID)?,
        })
    }

    pub fn binary_broadcast(&self) -> ReaderResult<BinaryBroadcast> {
        Ok(BinaryBroadcast {
            spare: self.value(ABBM_SPARE_FIELD_ID)?,
            designated_area_code: self.value(ABBM_DESIGNATEDAREACODE_FIELD_ID)?,
            functional_id: self.value(ABBM_FUNCTIONALID_FIELD_ID)?,
            data: self.value(ABBM_DATA_FIELD_ID)?,
        })
    }

    pub fn data_link_management(&self) -> ReaderResult<DataLinkManagement> {
        Ok(DataLinkManagement {
            spare: self.value(ADLMM_SPARE_FIELD_ID)?,
            first: self.slot_reservation(ADLMM_OFFSET1_FIELD_ID)?,
            second: self.slot_reservation(ADLMM_OFFSET2_FIELD_ID)?,
            third: self.slot_reservation(ADLMM_OFFSET3_FIELD_ID)?,
            fourth: self.slot_reservation(ADLMM_OFFSET4_FIELD_ID)?,
        })
    }

    pub fn extended_class_b_cs_position_report(
        &self,
    ) -> ReaderResult<ExtendedClassBCsPositionReport> {
        Ok(ExtendedClassBCsPositionReport {
            reserved: self.value(AECBPRM_RESERVED_FIELD_ID)?,
            speed_over_ground: self.value(AECBPRM_SPEEDOVERGROUND_FIELD_ID)?,
            position_accuracy: self.value(AECBPRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(AECBPRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(AECBPRM_LATITUDE_FIELD_ID)?,
            course_over_ground: self.value(AECBPRM_COURSEOVERGROUND_FIELD_ID)?,
            true_heading: self.value(AECBPRM_TRUEHEADING_FIELD_ID)?,
            timestamp: self.value(AECBPRM_TIMESTAMP_FIELD_ID)?,
            regional_reserved: self.value(AECBPRM_REGIONALRESERVED_FIELD_ID)?,
            name: get_nullable_guid(self.row, AECBPRM_NAME_FIELD_ID)?,
            ship_type: self.value(AECBPRM_SHIPTYPE_FIELD_ID)?,
            dimensions: self.dimensions(AECBPRM_DIMENSIONTOBOW_FIELD_ID)?,
            position_fix_type: self.value(AECBPRM_POSITIONFIXTYPE_FIELD_ID)?,
            raim: self.value(AECBPRM_RAIM_FIELD_ID)?,
            data_terminal_ready: self.value(AECBPRM_DATATERMINALREADY_FIELD_ID)?,
            assigned: self.value(AECBPRM_ASSIGNED_FIELD_ID)?,
            spare: self.value(AECBPRM_SPARE_FIELD_ID)?,
        })
    }

    pub fn interrogation(&self) -> ReaderResult<Interrogation> {
        Ok(Interrogation {
            interrogated_mmsi: get_nullable_guid(self.row, AIM_INTERROGATEDMMSI_FIELD_ID)?,
            first_message_type: self.value(AIM_FIRSTMESSAGETYPE_FIELD_ID)?,
            first_slot_offset: self.value(AIM_FIRSTSLOTOFFSET_FIELD_ID)?,
            second_message_type: self.value(AIM_SECONDMESSAGETYPE_FIELD_ID)?,
            second_slot_offset: self.value(AIM_SECONDSLOTOFFSET_FIELD_ID)?,
            second_station_interrogation_mmsi: get_nullable_guid(
                self.row,
                AIM_SECONDSTATIONINTERROGATIONMMSI_FIELD_ID,
            )?,
            second_station_first_message_type: self
                .value(AIM_SECONDSTATIONFIRSTMESSAGETYPE_FIELD_ID)?,
            second_station_first_slot_offset: self
                .value(AIM_SECONDSTATIONFIRSTSLOTOFFSET_FIELD_ID)?,
        })
    }

    pub fn class_a_position_report(&self) -> ReaderResult<ClassAPositionReport> {
        Ok(ClassAPositionReport {
            navigation_status: self.value(APRCAB_NAVIGATIONSTATUS_FIELD_ID)?,
            rate_of_turn: self.value(APRCAB_RATEOFTURN_FIELD_ID)?,
            speed_over_ground: self.value(APRCAB_SPEEDOVERGROUND_FIELD_ID)?,
            position_accuracy: self.value(APRCAB_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(APRCAB_LONGITUDE_FIELD_ID)?,
            latitude: self.value(APRCAB_LATITUDE_FIELD_ID)?,
            course_over_ground: self.value(APRCAB_COURSEOVERGROUND_FIELD_ID)?,
            true_heading: self.value(APRCAB_TRUEHEADING_FIELD_ID)?,
            timestamp: self.value(APRCAB_TIMESTAMP_FIELD_ID)?,
            maneuver_indicator: self.value(APRCAB_MANEUVERINDICATOR_FIELD_ID)?,
            spare: self.value(APRCAB_SPARE_FIELD_ID)?,
            raim: self.value(APRCAB_RAIM_FIELD_ID)?,
            radio_status: self.value(APRCAB_RADIOSTATUS_FIELD_ID)?,
        })
    }

    pub fn long_range_position_report(&self) -> ReaderResult<LongRangePositionReport> {
        Ok(LongRangePositionReport {
            position_accuracy: self.value(APRFLRAM_POSITIONACCURACY_FIELD_ID)?,
            raim: self.value(APRFLRAM_RAIM_FIELD_ID)?,
            navigation_status: self.value(APRFLRAM_NAVIGATIONSTATUS_FIELD_ID)?,
            longitude: self.value(APRFLRAM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(APRFLRAM_LATITUDE_FIELD_ID)?,
            speed_over_ground: self.value(APRFLRAM_SPEEDOVERGROUND_FIELD_ID)?,
            course_over_ground: self.value(APRFLRAM_COURSEOVERGROUND_FIELD_ID)?,
            gnss_position_status: self.value(APRFLRAM_GNSSPOSITIONSTATUS_FIELD_ID)?,
            spare: self.value(APRFLRAM_SPARE_FIELD_ID)?,
        })
    }

    pub fn safety_related_acknowledgment(&self) -> ReaderResult<Acknowledgement> {
        self.acknowledgement(ASRAM_SPARE_FIELD_ID)
    }

    pub fn standard_class_b_cs_position_report(
        &self,
    ) -> ReaderResult<StandardClassBCsPositionReport> {
        Ok(StandardClassBCsPositionReport {
            reserved: self.value(ASCBPRM_RESERVED_FIELD_ID)?,
            speed_over_ground: self.value(ASCBPRM_SPEEDOVERGROUND_FIELD_ID)?,
            position_accuracy: self.value(ASCBPRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(ASCBPRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(ASCBPRM_LATITUDE_FIELD_ID)?,
            course_over_ground: self.value(ASCBPRM_COURSEOVERGROUND_FIELD_ID)?,
            true_heading: self.value(ASCBPRM_TRUEHEADING_FIELD_ID)?,
            timestamp: self.value(ASCBPRM_TIMESTAMP_FIELD_ID)?,
            regional_reserved: self.value(ASCBPRM_REGIONALRESERVED_FIELD_ID)?,
            is_cs_unit: self.value(ASCBPRM_ISCSUNIT_FIELD_ID)?,
            has_display: self.value(ASCBPRM_HASDISPLAY_FIELD_ID)?,
            has_dsc_capability: self.value(ASCBPRM_HASDSCCAPABILITY_FIELD_ID)?,
            band: self.value(ASCBPRM_BAND_FIELD_ID)?,
            can_accept_message22: self.value(ASCBPRM_CANACCEPTMESSAGE22_FIELD_ID)?,
            assigned: self.value(ASCBPRM_ASSIGNED_FIELD_ID)?,
            raim: self.value(ASCBPRM_RAIM_FIELD_ID)?,
            radio_status: self.value(ASCBPRM_RADIOSTATUS_FIELD_ID)?,
        })
    }

    pub fn standard_sar_aircraft_position_report(
        &self,
    ) -> ReaderResult<SarAircraftPositionReport> {
        Ok(SarAircraftPositionReport {
            altitude: self.value(ASSAPRM_ALTITUDE_FIELD_ID)?,
            speed_over_ground: self.value(ASSAPRM_SPEEDOVERGROUND_FIELD_ID)?,
            position_accuracy: self.value(ASSAPRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(ASSAPRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(ASSAPRM_LATITUDE_FIELD_ID)?,
            course_over_ground: self.value(ASSAPRM_COURSEOVERGROUND_FIELD_ID)?,
            timestamp: self.value(ASSAPRM_TIMESTAMP_FIELD_ID)?,
            reserved: self.value(ASSAPRM_RESERVED_FIELD_ID)?,
            data_terminal_ready: self.value(ASSAPRM_DATATERMINALREADY_FIELD_ID)?,
            spare: self.value(ASSAPRM_SPARE_FIELD_ID)?,
            assigned: self.value(ASSAPRM_ASSIGNED_FIELD_ID)?,
            raim: self.value(ASSAPRM_RAIM_FIELD_ID)?,
            radio_status: self.value(ASSAPRM_RADIOSTATUS_FIELD_ID)?,
        })
    }

    pub fn static_and_voyage_related_data(&self) -> ReaderResult<StaticAndVoyageRelatedData> {
        Ok(StaticAndVoyageRelatedData {
            ais_version: self.value(ASAVRDM_AISVERSION_FIELD_ID)?,
            imo_number: get_nullable_guid(self.row, ASAVRDM_IMONUMBER_FIELD_ID)?,
            callsign: get_nullable_guid(self.row, ASAVRDM_CALLSIGN_FIELD_ID)?,
            ship_name: get_nullable_guid(self.row, ASAVRDM_SHIPNAME_FIELD_ID)?,
            ship_type: self.value(ASAVRDM_SHIPTYPE_FIELD_ID)?,
            dimensions: self.dimensions(ASAVRDM_DIMENSIONTOBOW_FIELD_ID)?,
            position_fix_type: self.value(ASAVRDM_POSITIONFIXTYPE_FIELD_ID)?,
            estimated_time_of_arrival: get_nullable_date_time(
                self.row,
                ASAVRDM_ESTIMATEDTIMEOFARRIVAL_FIELD_ID,
            )?,
            draught: self.value(ASAVRDM_DRAUGHT_FIELD_ID)?,
            destination: self.value(ASAVRDM_DESTINATION_FIELD_ID)?,
            data_terminal_ready: self.value(ASAVRDM_DATATERMINALREADY_FIELD_ID)?,
            spare: self.value(ASAVRDM_SPARE_FIELD_ID)?,
        })
    }

    pub fn static_data_report_part_number(&self) -> ReaderResult<i32> {
        self.value(ASDRM_PARTNUMBER_FIELD_ID)
    }

    pub fn static_data_report_part_a(&self) -> ReaderResult<StaticDataReportPartA> {
        Ok(StaticDataReportPartA {
            part_number: self.static_data_report_part_number()?,
            ship_name: get_nullable_guid(self.row, ASDRPA_SHIPNAME_FIELD_ID)?,
            spare: self.value(ASDRPA_SPARE_FIELD_ID)?,
        })
    }

    pub fn static_data_report_part_b(&self) -> ReaderResult<StaticDataReportPartB> {
        Ok(StaticDataReportPartB {
            part_number: self.static_data_report_part_number()?,
            ship_type: self.value(ASDRPB_SHIPTYPE_FIELD_ID)?,
            vendor_id: self.value(ASDRPB_VENDORID_FIELD_ID)?,
            unit_model_code: self.value(ASDRPB_UNITMODELCODE_FIELD_ID)?,
            serial_number: self.value(ASDRPB_SERIALNUMBER_FIELD_ID)?,
            callsign: get_nullable_guid(self.row, ASDRPB_CALLSIGN_FIELD_ID)?,
            dimensions: self.dimensions(ASDRPB_DIMENSIONTOBOW_FIELD_ID)?,
            mothership_mmsi: get_nullable_guid(self.row, ASDRPB_MOTHERSHIPMMSI_FIELD_ID)?,
            position_fix_type: self.value(ASDRPB_POSITIONFIXTYPE_FIELD_ID)?,
            spare: self.value(ASDRPB_SPARE_FIELD_ID)?,
        })
    }

    pub fn utc_and_date_inquiry(&self) -> ReaderResult<UtcAndDateInquiry> {
        Ok(UtcAndDateInquiry {
            spare1: self.value(AUADIM_SPARE1_FIELD_ID)?,
            destination_mmsi: get_nullable_guid(self.row, AUADIM_DESTINATIONMMSI_FIELD_ID)?,
            spare2: self.value(AUADIM_SPARE2_FIELD_ID)?,
        })
    }

    pub fn utc_and_date_response(&self) -> ReaderResult<UtcAndDateResponse> {
        Ok(UtcAndDateResponse {
            datetime: get_date_time(self.row, AUADRM_DATETIME_FIELD_ID)?,
            position_accuracy: self.value(AUADRM_POSITIONACCURACY_FIELD_ID)?,
            longitude: self.value(AUADRM_LONGITUDE_FIELD_ID)?,
            latitude: self.value(AUADRM_LATITUDE_FIELD_ID)?,
            position_fix_type: self.value(AUADRM_POSITIONFIXTYPE_FIELD_ID)?,
            spare: self.value(AUADRM_SPARE_FIELD_ID)?,
            raim: self.value(AUADRM_RAIM_FIELD_ID)?,
            radio_status: self.value(AUADRM_RADIOSTATUS_FIELD_ID)?,
        })
    }

    fn value<T: FromSql>(&self, ordinal: usize) -> ReaderResult<T> {
        Ok(self.row.get(ordinal)?)
    }

    /// Reads the four dimension columns starting at `to_bow`.
    fn dimensions(&self, to_bow: usize) -> ReaderResult<Dimensions> {
        Ok(Dimensions {
            to_bow: self.value(to_bow)?,
            to_stern: self.value(to_bow + 1)?,
            to_port: self.value(to_bow + 2)?,
            to_starboard: self.value(to_bow + 3)?,
        })
    }

    /// Reads offset, reserved slots, timeout and increment starting at `offset`.
    fn slot_reservation<T: FromSql>(&self, offset: usize) -> ReaderResult<SlotReservation<T>> {
        Ok(SlotReservation {
            offset: self.value(offset)?,
            reserved_slots: self.value(offset + 1)?,
            timeout: self.value(offset + 2)?,
            increment: self.value(offset + 3)?,
        })
    }

    /// Reads the spare column and the four sequence number / MMSI pairs after it.
    fn acknowledgement(&self, spare: usize) -> ReaderResult<Acknowledgement> {
        Ok(Acknowledgement {
            spare: self.value(spare)?,
            sequence_number1: self.value(spare + 1)?,
            mmsi1: get_nullable_guid(self.row, spare + 2)?,
            sequence_number2: self.value(spare + 3)?,
            mmsi2: get_nullable_guid(self.row, spare + 4)?,
            sequence_number3: self.value(spare + 5)?,
            mmsi3: get_nullable_guid(self.row, spare + 6)?,
            sequence_number4: self.value(spare + 7)?,
            mmsi4: get_nullable_guid(self.row, spare + 8)?,
        })
    }
}

impl<'a, 'stmt, S: ErrorSink> ComplexRow<'a, 'stmt, AisMessageFamily, S> {
    pub fn columns(&self) -> AisMessageColumns<'a, 'stmt> {
        AisMessageColumns::new(self.row())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AisMessageObject {
    pub object_state: ObjectState,
    pub id: Guid,
    pub row_version: i64,
    pub ais_device: Guid,
    pub received_timestamp: DateTime,
    pub message_sequence_number: i64,
    pub repeat: i32,
    pub mmsi: Option<Guid>,
    pub variant: AisMessageVariant,
}

/// Subtype-specific part of an AIS message.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum AisMessageVariant {
    AidToNavigationReport(Box<AidToNavigationReport>),
    AddressedSafetyRelated(AddressedSafetyRelated),
    BaseStationReport(BaseStationReport),
    BinaryAcknowledge(Acknowledgement),
    BinaryAddressed(BinaryAddressed),
    BinaryBroadcast(BinaryBroadcast),
    DataLinkManagement(DataLinkManagement),
    ExtendedClassBCsPositionReport(Box<ExtendedClassBCsPositionReport>),
    Interrogation(Interrogation),
    PositionReportClassAAssignedSchedule(ClassAPositionReport),
    PositionReportClassA(ClassAPositionReport),
    PositionReportClassAResponseToInterrogation(ClassAPositionReport),
    PositionReportForLongRangeApplications(LongRangePositionReport),
    SafetyRelatedAcknowledgment(Acknowledgement),
    StandardClassBCsPositionReport(Box<StandardClassBCsPositionReport>),
    StandardSarAircraftPositionReport(SarAircraftPositionReport),
    StaticAndVoyageRelatedData(Box<StaticAndVoyageRelatedData>),
    StaticDataReport { part_number: i32 },
    StaticDataReportPartA(StaticDataReportPartA),
    StaticDataReportPartB(Box<StaticDataReportPartB>),
    UtcAndDateInquiry(UtcAndDateInquiry),
    UtcAndDateResponse(UtcAndDateResponse),
}

/// Distances from the reference point, in metres.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub to_bow: i32,
    pub to_stern: i32,
    pub to_port: i32,
    pub to_starboard: i32,
}

impl Dimensions {
    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_i32(self.to_bow)?;
        writer.write_i32(self.to_stern)?;
        writer.write_i32(self.to_port)?;
        writer.write_i32(self.to_starboard)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AidToNavigationReport {
    pub navigational_aid_type: i32,
    pub name: String,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub dimensions: Dimensions,
    pub position_fix_type: i32,
    pub timestamp: i32,
    pub off_position: bool,
    pub regional_reserved: i32,
    pub raim: i32,
    pub virtual_aid: bool,
    pub assigned: bool,
    pub spare: i32,
    pub name_extension: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddressedSafetyRelated {
    pub sequence_number: i32,
    pub destination_mmsi: Option<Guid>,
    pub retransmit_flag: bool,
    pub spare: i32,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BaseStationReport {
    pub timestamp: DateTime,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub position_fix_type: i32,
    pub spare: i32,
    pub raim: i32,
    pub radio_status: i32,
}

/// Shared shape of binary and safety related acknowledgements: one mandatory
/// entry and up to three optional ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub spare: i32,
    pub sequence_number1: i32,
    pub mmsi1: Option<Guid>,
    pub sequence_number2: Option<i32>,
    pub mmsi2: Option<Guid>,
    pub sequence_number3: Option<i32>,
    pub mmsi3: Option<Guid>,
    pub sequence_number4: Option<i32>,
    pub mmsi4: Option<Guid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryAddressed {
    pub sequence_number: i32,
    pub destination_mmsi: Option<Guid>,
    pub retransmit_flag: bool,
    pub spare: i32,
    pub designated_area_code: i32,
    pub functional_id: i32,
    pub data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BinaryBroadcast {
    pub spare: i32,
    pub designated_area_code: i32,
    pub functional_id: i32,
    pub data: String,
}

/// One reserved slot block of a data link management message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlotReservation<T> {
    pub offset: T,
    pub reserved_slots: T,
    pub timeout: T,
    pub increment: T,
}

impl SlotReservation<i32> {
    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_i32(self.offset)?;
        writer.write_i32(self.reserved_slots)?;
        writer.write_i32(self.timeout)?;
        writer.write_i32(self.increment)
    }
}

impl SlotReservation<Option<i32>> {
    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        writer.write_nullable_i32(self.offset)?;
        writer.write_nullable_i32(self.reserved_slots)?;
        writer.write_nullable_i32(self.timeout)?;
        writer.write_nullable_i32(self.increment)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataLinkManagement {
    pub spare: i32,
    pub first: SlotReservation<i32>,
    pub second: SlotReservation<Option<i32>>,
    pub third: SlotReservation<Option<i32>>,
    pub fourth: SlotReservation<Option<i32>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtendedClassBCsPositionReport {
    pub reserved: i32,
    pub speed_over_ground: f64,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub course_over_ground: f64,
    pub true_heading: Option<i32>,
    pub timestamp: i32,
    pub regional_reserved: i32,
    pub name: Option<Guid>,
    pub ship_type: i32,
    pub dimensions: Dimensions,
    pub position_fix_type: i32,
    pub raim: i32,
    pub data_terminal_ready: bool,
    pub assigned: bool,
    pub spare: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Interrogation {
    pub interrogated_mmsi: Option<Guid>,
    pub first_message_type: i32,
    pub first_slot_offset: i32,
    pub second_message_type: Option<i32>,
    pub second_slot_offset: Option<i32>,
    pub second_station_interrogation_mmsi: Option<Guid>,
    pub second_station_first_message_type: Option<i32>,
    pub second_station_first_slot_offset: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassAPositionReport {
    pub navigation_status: i32,
    pub rate_of_turn: Option<i32>,
    pub speed_over_ground: f64,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub course_over_ground: f64,
    pub true_heading: Option<i32>,
    pub timestamp: i32,
    pub maneuver_indicator: i32,
    pub spare: i32,
    pub raim: i32,
    pub radio_status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LongRangePositionReport {
    pub position_accuracy: i32,
    pub raim: i32,
    pub navigation_status: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub speed_over_ground: f64,
    pub course_over_ground: f64,
    pub gnss_position_status: i32,
    pub spare: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardClassBCsPositionReport {
    pub reserved: i32,
    pub speed_over_ground: f64,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub course_over_ground: f64,
    pub true_heading: Option<i32>,
    pub timestamp: i32,
    pub regional_reserved: i32,
    pub is_cs_unit: bool,
    pub has_display: bool,
    pub has_dsc_capability: bool,
    pub band: bool,
    pub can_accept_message22: bool,
    pub assigned: bool,
    pub raim: i32,
    pub radio_status: i32,
}

/// Search and rescue aircraft report. Speed over ground is whole knots here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SarAircraftPositionReport {
    pub altitude: i32,
    pub speed_over_ground: i32,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub course_over_ground: f64,
    pub timestamp: i32,
    pub reserved: i32,
    pub data_terminal_ready: bool,
    pub spare: i32,
    pub assigned: bool,
    pub raim: i32,
    pub radio_status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticAndVoyageRelatedData {
    pub ais_version: i32,
    pub imo_number: Option<Guid>,
    pub callsign: Option<Guid>,
    pub ship_name: Option<Guid>,
    pub ship_type: i32,
    pub dimensions: Dimensions,
    pub position_fix_type: i32,
    pub estimated_time_of_arrival: Option<DateTime>,
    pub draught: f64,
    pub destination: String,
    pub data_terminal_ready: bool,
    pub spare: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticDataReportPartA {
    pub part_number: i32,
    pub ship_name: Option<Guid>,
    pub spare: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticDataReportPartB {
    pub part_number: i32,
    pub ship_type: i32,
    pub vendor_id: String,
    pub unit_model_code: i32,
    pub serial_number: i32,
    pub callsign: Option<Guid>,
    pub dimensions: Dimensions,
    pub mothership_mmsi: Option<Guid>,
    pub position_fix_type: i32,
    pub spare: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UtcAndDateInquiry {
    pub spare1: i32,
    pub destination_mmsi: Option<Guid>,
    pub spare2: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UtcAndDateResponse {
    pub datetime: DateTime,
    pub position_accuracy: i32,
    pub longitude: f64,
    pub latitude: f64,
    pub position_fix_type: i32,
    pub spare: i32,
    pub raim: i32,
    pub radio_status: i32,
}

impl AisMessageVariant {
    pub fn kind(&self) -> Kind {
        match self {
            Self::AidToNavigationReport(_) => Kind::AidToNavigationReportMessage,
            Self::AddressedSafetyRelated(_) => Kind::AisAddressedSafetyRelatedMessage,
            Self::BaseStationReport(_) => Kind::AisBaseStationReportMessage,
            Self::BinaryAcknowledge(_) => Kind::AisBinaryAcknowledgeMessage,
            Self::BinaryAddressed(_) => Kind::AisBinaryAddressedMessage,
            Self::BinaryBroadcast(_) => Kind::AisBinaryBroadcastMessage,
            Self::DataLinkManagement(_) => Kind::AisDataLinkManagementMessage,
            Self::ExtendedClassBCsPositionReport(_) => {
                Kind::AisExtendedClassBCsPositionReportMessage
            }
            Self::Interrogation(_) => Kind::AisInterrogationMessage,
            Self::PositionReportClassAAssignedSchedule(_) => {
                Kind::AisPositionReportClassAAssignedScheduleMessage
            }
            Self::PositionReportClassA(_) => Kind::AisPositionReportClassAMessage,
            Self::PositionReportClassAResponseToInterrogation(_) => {
                Kind::AisPositionReportClassAResponseToInterrogationMessage
            }
            Self::PositionReportForLongRangeApplications(_) => {
                Kind::AisPositionReportForLongRangeApplicationsMessage
            }
            Self::SafetyRelatedAcknowledgment(_) => Kind::AisSafetyRelatedAcknowledgmentMessage,
            Self::StandardClassBCsPositionReport(_) => {
                Kind::AisStandardClassBCsPositionReportMessage
            }
            Self::StandardSarAircraftPositionReport(_) => {
                Kind::AisStandardSarAircraftPositionReportMessage
            }
            Self::StaticAndVoyageRelatedData(_) => Kind::AisStaticAndVoyageRelatedDataMessage,
            Self::StaticDataReport { .. } => Kind::AisStaticDataReportMessage,
            Self::StaticDataReportPartA(_) => Kind::AisStaticDataReportPartAMessage,
            Self::StaticDataReportPartB(_) => Kind::AisStaticDataReportPartBMessage,
            Self::UtcAndDateInquiry(_) => Kind::AisUtcAndDateInquiryMessage,
            Self::UtcAndDateResponse(_) => Kind::AisUtcAndDateResponseMessage,
        }
    }

    /// Writes the subtype fields in column order.
    fn write_to<W: Write>(&self, writer: &mut BinaryWriter<W>) -> CodecResult<()> {
        match self {
            Self::AidToNavigationReport(m) => {
                writer.write_i32(m.navigational_aid_type)?;
                writer.write_str(&m.name)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                m.dimensions.write_to(writer)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_i32(m.timestamp)?;
                writer.write_bool(m.off_position)?;
                writer.write_i32(m.regional_reserved)?;
                writer.write_i32(m.raim)?;
                writer.write_bool(m.virtual_aid)?;
                writer.write_bool(m.assigned)?;
                writer.write_i32(m.spare)?;
                writer.write_str(&m.name_extension)
            }
            Self::AddressedSafetyRelated(m) => {
                writer.write_i32(m.sequence_number)?;
                writer.write_nullable_guid(m.destination_mmsi)?;
                writer.write_bool(m.retransmit_flag)?;
                writer.write_i32(m.spare)?;
                writer.write_str(&m.text)
            }
            Self::BaseStationReport(m) => {
                writer.write_date_time(m.timestamp)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_i32(m.spare)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.radio_status)
            }
            Self::BinaryAcknowledge(m) | Self::SafetyRelatedAcknowledgment(m) => {
                writer.write_i32(m.spare)?;
                writer.write_i32(m.sequence_number1)?;
                writer.write_nullable_guid(m.mmsi1)?;
                writer.write_nullable_i32(m.sequence_number2)?;
                writer.write_nullable_guid(m.mmsi2)?;
                writer.write_nullable_i32(m.sequence_number3)?;
                writer.write_nullable_guid(m.mmsi3)?;
                writer.write_nullable_i32(m.sequence_number4)?;
                writer.write_nullable_guid(m.mmsi4)
            }
            Self::BinaryAddressed(m) => {
                writer.write_i32(m.sequence_number)?;
                writer.write_nullable_guid(m.destination_mmsi)?;
                writer.write_bool(m.retransmit_flag)?;
                writer.write_i32(m.spare)?;
                writer.write_i32(m.designated_area_code)?;
                writer.write_i32(m.functional_id)?;
                writer.write_str(&m.data)
            }
            Self::BinaryBroadcast(m) => {
                writer.write_i32(m.spare)?;
                writer.write_i32(m.designated_area_code)?;
                writer.write_i32(m.functional_id)?;
                writer.write_str(&m.data)
            }
            Self::DataLinkManagement(m) => {
                writer.write_i32(m.spare)?;
                m.first.write_to(writer)?;
                m.second.write_to(writer)?;
                m.third.write_to(writer)?;
                m.fourth.write_to(writer)
            }
            Self::ExtendedClassBCsPositionReport(m) => {
                writer.write_i32(m.reserved)?;
                writer.write_f64(m.speed_over_ground)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_f64(m.course_over_ground)?;
                writer.write_nullable_i32(m.true_heading)?;
                writer.write_i32(m.timestamp)?;
                writer.write_i32(m.regional_reserved)?;
                writer.write_nullable_guid(m.name)?;
                writer.write_i32(m.ship_type)?;
                m.dimensions.write_to(writer)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_i32(m.raim)?;
                writer.write_bool(m.data_terminal_ready)?;
                writer.write_bool(m.assigned)?;
                writer.write_i32(m.spare)
            }
            Self::Interrogation(m) => {
                writer.write_nullable_guid(m.interrogated_mmsi)?;
                writer.write_i32(m.first_message_type)?;
                writer.write_i32(m.first_slot_offset)?;
                writer.write_nullable_i32(m.second_message_type)?;
                writer.write_nullable_i32(m.second_slot_offset)?;
                writer.write_nullable_guid(m.second_station_interrogation_mmsi)?;
                writer.write_nullable_i32(m.second_station_first_message_type)?;
                writer.write_nullable_i32(m.second_station_first_slot_offset)
            }
            Self::PositionReportClassAAssignedSchedule(m)
            | Self::PositionReportClassA(m)
            | Self::PositionReportClassAResponseToInterrogation(m) => {
                writer.write_i32(m.navigation_status)?;
                writer.write_nullable_i32(m.rate_of_turn)?;
                writer.write_f64(m.speed_over_ground)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_f64(m.course_over_ground)?;
                writer.write_nullable_i32(m.true_heading)?;
                writer.write_i32(m.timestamp)?;
                writer.write_i32(m.maneuver_indicator)?;
                writer.write_i32(m.spare)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.radio_status)
            }
            Self::PositionReportForLongRangeApplications(m) => {
                writer.write_i32(m.position_accuracy)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.navigation_status)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_f64(m.speed_over_ground)?;
                writer.write_f64(m.course_over_ground)?;
                writer.write_i32(m.gnss_position_status)?;
                writer.write_i32(m.spare)
            }
            Self::StandardClassBCsPositionReport(m) => {
                writer.write_i32(m.reserved)?;
                writer.write_f64(m.speed_over_ground)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_f64(m.course_over_ground)?;
                writer.write_nullable_i32(m.true_heading)?;
                writer.write_i32(m.timestamp)?;
                writer.write_i32(m.regional_reserved)?;
                writer.write_bool(m.is_cs_unit)?;
                writer.write_bool(m.has_display)?;
                writer.write_bool(m.has_dsc_capability)?;
                writer.write_bool(m.band)?;
                writer.write_bool(m.can_accept_message22)?;
                writer.write_bool(m.assigned)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.radio_status)
            }
            Self::StandardSarAircraftPositionReport(m) => {
                writer.write_i32(m.altitude)?;
                writer.write_i32(m.speed_over_ground)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_f64(m.course_over_ground)?;
                writer.write_i32(m.timestamp)?;
                writer.write_i32(m.reserved)?;
                writer.write_bool(m.data_terminal_ready)?;
                writer.write_i32(m.spare)?;
                writer.write_bool(m.assigned)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.radio_status)
            }
            Self::StaticAndVoyageRelatedData(m) => {
                writer.write_i32(m.ais_version)?;
                writer.write_nullable_guid(m.imo_number)?;
                writer.write_nullable_guid(m.callsign)?;
                writer.write_nullable_guid(m.ship_name)?;
                writer.write_i32(m.ship_type)?;
                m.dimensions.write_to(writer)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_nullable_date_time(m.estimated_time_of_arrival)?;
                writer.write_f64(m.draught)?;
                writer.write_str(&m.destination)?;
                writer.write_bool(m.data_terminal_ready)?;
                writer.write_i32(m.spare)
            }
            Self::StaticDataReport { part_number } => writer.write_i32(*part_number),
            Self::StaticDataReportPartA(m) => {
                writer.write_i32(m.part_number)?;
                writer.write_nullable_guid(m.ship_name)?;
                writer.write_i32(m.spare)
            }
            Self::StaticDataReportPartB(m) => {
                writer.write_i32(m.part_number)?;
                writer.write_i32(m.ship_type)?;
                writer.write_str(&m.vendor_id)?;
                writer.write_i32(m.unit_model_code)?;
                writer.write_i32(m.serial_number)?;
                writer.write_nullable_guid(m.callsign)?;
                m.dimensions.write_to(writer)?;
                writer.write_nullable_guid(m.mothership_mmsi)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_i32(m.spare)
            }
            Self::UtcAndDateInquiry(m) => {
                writer.write_i32(m.spare1)?;
                writer.write_nullable_guid(m.destination_mmsi)?;
                writer.write_i32(m.spare2)
            }
            Self::UtcAndDateResponse(m) => {
                writer.write_date_time(m.datetime)?;
                writer.write_i32(m.position_accuracy)?;
                writer.write_f64(m.longitude)?;
                writer.write_f64(m.latitude)?;
                writer.write_i32(m.position_fix_type)?;
                writer.write_i32(m.spare)?;
                writer.write_i32(m.raim)?;
                writer.write_i32(m.radio_status)
            }
        }
    }
}

impl DataObject for AisMessageObject {
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
        writer.write_guid(self.ais_device)?;
        writer.write_date_time(self.received_timestamp)?;
        writer.write_i64(self.message_sequence_number)?;
        writer.write_i32(self.repeat)?;
        writer.write_nullable_guid(self.mmsi)?;
        self.variant.write_to(writer)
    }
}

impl ComplexFamily for AisMessageFamily {
    const FAMILY: &'static str = "AisMessage";
    const BASE_QUERY: &'static str = BASE_QUERY;
    const BASE_VIEW_NAME: &'static str = BASE_VIEW_NAME;
    const VIEW_ALIAS_NAME: &'static str = VIEW_ALIAS_NAME;

    type Object = AisMessageObject;

    fn decode(row: &Row<'_>) -> ReaderResult<Self::Object> {
        use AisMessageVariant as V;

        let columns = AisMessageColumns::new(row);
        let entity_type = columns.entity_type()?;
        let variant = match Kind::from_i32(entity_type) {
            Some(Kind::AidToNavigationReportMessage) => {
                V::AidToNavigationReport(Box::new(columns.aid_to_navigation_report()?))
            }
            Some(Kind::AisAddressedSafetyRelatedMessage) => {
                V::AddressedSafetyRelated(columns.addressed_safety_related()?)
            }
            Some(Kind::AisBaseStationReportMessage) => {
                V::BaseStationReport(columns.base_station_report()?)
            }
            Some(Kind::AisBinaryAcknowledgeMessage) => {
                V::BinaryAcknowledge(columns.binary_acknowledge()?)
            }
            Some(Kind::AisBinaryAddressedMessage) => {
                V::BinaryAddressed(columns.binary_addressed()?)
            }
            Some(Kind::AisBinaryBroadcastMessage) => {
                V::BinaryBroadcast(columns.binary_broadcast()?)
            }
            Some(Kind::AisDataLinkManagementMessage) => {
                V::DataLinkManagement(columns.data_link_management()?)
            }
            Some(Kind::AisExtendedClassBCsPositionReportMessage) => {
                V::ExtendedClassBCsPositionReport(Box::new(
                    columns.extended_class_b_cs_position_report()?,
                ))
            }
            Some(Kind::AisInterrogationMessage) => V::Interrogation(columns.interrogation()?),
            Some(Kind::AisPositionReportClassAAssignedScheduleMessage) => {
                V::PositionReportClassAAssignedSchedule(columns.class_a_position_report()?)
            }
            Some(Kind::AisPositionReportClassAMessage) => {
                V::PositionReportClassA(columns.class_a_position_report()?)
            }
            Some(Kind::AisPositionReportClassAResponseToInterrogationMessage) => {
                V::PositionReportClassAResponseToInterrogation(columns.class_a_position_report()?)
            }
            Some(Kind::AisPositionReportForLongRangeApplicationsMessage) => {
                V::PositionReportForLongRangeApplications(columns.long_range_position_report()?)
            }
            Some(Kind::AisSafetyRelatedAcknowledgmentMessage) => {
                V::SafetyRelatedAcknowledgment(columns.safety_related_acknowledgment()?)
            }
            Some(Kind::AisStandardClassBCsPositionReportMessage) => {
                V::StandardClassBCsPositionReport(Box::new(
                    columns.standard_class_b_cs_position_report()?,
                ))
            }
            Some(Kind::AisStandardSarAircraftPositionReportMessage) => {
                V::StandardSarAircraftPositionReport(
                    columns.standard_sar_aircraft_position_report()?,
                )
            }
            Some(Kind::AisStaticAndVoyageRelatedDataMessage) => {
                V::StaticAndVoyageRelatedData(Box::new(columns.static_and_voyage_related_data()?))
            }
            Some(Kind::AisStaticDataReportMessage) => V::StaticDataReport {
                part_number: columns.static_data_report_part_number()?,
            },
            Some(Kind::AisStaticDataReportPartAMessage) => {
                V::StaticDataReportPartA(columns.static_data_report_part_a()?)
            }
            Some(Kind::AisStaticDataReportPartBMessage) => {
                V::StaticDataReportPartB(Box::new(columns.static_data_report_part_b()?))
            }
            Some(Kind::AisUtcAndDateInquiryMessage) => {
                V::UtcAndDateInquiry(columns.utc_and_date_inquiry()?)
            }
            Some(Kind::AisUtcAndDateResponseMessage) => {
                V::UtcAndDateResponse(columns.utc_and_date_response()?)
            }
            _ => return Err(unknown_kind(Self::FAMILY, entity_type)),
        };

        Ok(AisMessageObject {
            object_state: ObjectState::Stored,
            id: columns.id()?,
            row_version: columns.row_version()?,
            ais_device: columns.ais_device()?,
            received_timestamp: columns.received_timestamp()?,
            message_sequence_number: columns.message_sequence_number()?,
            repeat: columns.repeat()?,
            mmsi: columns.mmsi()?,
            variant,
        })
    }

    fn record_len(kind: Kind) -> Option<usize> {
        let variant_len = match kind {
            Kind::AidToNavigationReportMessage => 18,
            Kind::AisAddressedSafetyRelatedMessage => 5,
            Kind::AisBaseStationReportMessage => 8,
            Kind::AisBinaryAcknowledgeMessage | Kind::AisSafetyRelatedAcknowledgmentMessage => 9,
            Kind::AisBinaryAddressedMessage => 7,
            Kind::AisBinaryBroadcastMessage => 4,
            Kind::AisDataLinkManagementMessage => 17,
            Kind::AisExtendedClassBCsPositionReportMessage => 21,
            Kind::AisInterrogationMessage => 8,
            Kind::AisPositionReportClassAAssignedScheduleMessage
            | Kind::AisPositionReportClassAMessage
            | Kind::AisPositionReportClassAResponseToInterrogationMessage => 13,
            Kind::AisPositionReportForLongRangeApplicationsMessage => 9,
            Kind::AisStandardClassBCsPositionReportMessage => 17,
            Kind::AisStandardSarAircraftPositionReportMessage => 13,
            Kind::AisStaticAndVoyageRelatedDataMessage => 15,
            Kind::AisStaticDataReportMessage => 1,
            Kind::AisStaticDataReportPartAMessage => 3,
            Kind::AisStaticDataReportPartBMessage => 13,
            Kind::AisUtcAndDateInquiryMessage => 3,
            Kind::AisUtcAndDateResponseMessage => 8,
            _ => return None,
        };
        Some(BASE_RECORD_LEN + variant_len)
    }
}
