use super::dataset::{
    AccessCapability, AssociationType, DeviceInfo, DevicePropDesc, Form, GetSet, ObjectInfo,
    ProtectionStatus, StorageInfo, StorageType, VendorExtensionMap, decode_handle_array,
    decode_prop_value, decode_vendor_extension_maps, encode_handle_array,
    encode_vendor_extension_maps,
};
use super::{Codec, CodecError, Endian, PtpValue};
use crate::registry::codes::{datatypes as dt, events, formats, operations, properties};
use crate::types::{DataTypeCode, FilesystemTypeCode, PropertyCode, VendorExtensionId};
use bytes::Bytes;

fn sample_device_info() -> DeviceInfo {
    DeviceInfo {
        standard_version: 100,
        vendor_extension_id: VendorExtensionId(0x0000_000B),
        vendor_extension_version: 100,
        vendor_extension_desc: "example.com: 1.0".to_string(),
        functional_mode: 0,
        operations_supported: vec![
            operations::GET_DEVICE_INFO,
            operations::OPEN_SESSION,
            operations::CLOSE_SESSION,
        ],
        events_supported: vec![events::OBJECT_ADDED, events::CAPTURE_COMPLETE],
        device_properties_supported: vec![properties::BATTERY_LEVEL, properties::F_NUMBER],
        capture_formats: vec![formats::EXIF_JPEG],
        image_formats: vec![formats::EXIF_JPEG, formats::PNG],
        manufacturer: "Example".to_string(),
        model: "Examplar X".to_string(),
        device_version: "1.2.3".to_string(),
        serial_number: "0042".to_string(),
    }
}

#[test]
fn test_device_info_round_trip() {
    for endian in [Endian::Little, Endian::Big, Endian::Native] {
        let codec = Codec::new(endian);
        let info = sample_device_info();
        let mut w = codec.writer();
        info.encode(&mut w).unwrap();
        let bytes = w.into_bytes();
        let mut r = codec.reader(&bytes);
        let decoded = DeviceInfo::decode(&mut r).unwrap();
        assert_eq!(decoded, info);
        assert!(r.is_empty());
    }
}

#[test]
fn test_device_info_truncated() {
    let codec = Codec::default();
    let info = sample_device_info();
    let mut w = codec.writer();
    info.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let mut r = codec.reader(&bytes[..bytes.len() - 3]);
    assert!(matches!(
        DeviceInfo::decode(&mut r),
        Err(CodecError::Truncated { .. })
    ));
}

#[test]
fn test_storage_info_round_trip() {
    let codec = Codec::default();
    let info = StorageInfo {
        storage_type: StorageType::RemovableRam,
        filesystem_type: FilesystemTypeCode(0x0003),
        access_capability: AccessCapability::ReadWrite,
        max_capacity: 64 * 1024 * 1024 * 1024,
        free_space_in_bytes: 1024,
        free_space_in_images: 3,
        storage_description: "SD card".to_string(),
        volume_label: "DCIM".to_string(),
    };
    let mut w = codec.writer();
    info.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let decoded = StorageInfo::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, info);
}

#[test]
fn test_object_info_round_trip() {
    let codec = Codec::default();
    let info = ObjectInfo {
        storage_id: 0x0001_0001,
        object_format: formats::EXIF_JPEG,
        protection_status: ProtectionStatus::ReadOnly,
        object_compressed_size: 123_456,
        thumb_format: formats::JFIF,
        thumb_compressed_size: 2048,
        thumb_pix_width: 160,
        thumb_pix_height: 120,
        image_pix_width: 4000,
        image_pix_height: 3000,
        image_bit_depth: 24,
        parent_object: 0,
        association_type: AssociationType::Undefined,
        association_desc: 0,
        sequence_number: 7,
        filename: "IMG_0007.JPG".to_string(),
        capture_date: "20260807T120000".to_string(),
        modification_date: "20260807T120005".to_string(),
        keywords: String::new(),
    };
    let mut w = codec.writer();
    info.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let decoded = ObjectInfo::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, info);
}

#[test]
fn test_prop_desc_range_form() {
    // FormFlag=Range with DataTypeCode=UInt8 must decode exactly
    // min, max, step as three UInt8 values, in that order.
    let codec = Codec::default();
    let desc = DevicePropDesc {
        property_code: properties::BATTERY_LEVEL,
        data_type: dt::UINT8,
        get_set: GetSet::Get,
        factory_default: PtpValue::UInt8(100),
        current_value: PtpValue::UInt8(67),
        form: Form::Range {
            min: PtpValue::UInt8(0),
            max: PtpValue::UInt8(100),
            step: PtpValue::UInt8(1),
        },
    };
    let mut w = codec.writer();
    desc.encode(&mut w).unwrap();
    let bytes = w.into_bytes();

    // property(2) + type(2) + getset(1) + two values(2) + flag(1) + range(3)
    assert_eq!(bytes.len(), 11);
    assert_eq!(&bytes[bytes.len() - 3..], &[0, 100, 1]);

    let decoded = DevicePropDesc::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, desc);
}

#[test]
fn test_prop_desc_enumeration_form() {
    let codec = Codec::default();
    let desc = DevicePropDesc {
        property_code: properties::WHITE_BALANCE,
        data_type: dt::UINT16,
        get_set: GetSet::GetSet,
        factory_default: PtpValue::UInt16(2),
        current_value: PtpValue::UInt16(4),
        form: Form::Enumeration(vec![
            PtpValue::UInt16(1),
            PtpValue::UInt16(2),
            PtpValue::UInt16(4),
        ]),
    };
    let mut w = codec.writer();
    desc.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let decoded = DevicePropDesc::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, desc);
}

#[test]
fn test_prop_desc_string_property() {
    let codec = Codec::default();
    let desc = DevicePropDesc {
        property_code: properties::DATE_TIME,
        data_type: dt::STRING,
        get_set: GetSet::GetSet,
        factory_default: PtpValue::String(String::new()),
        current_value: PtpValue::String("20260807T083000".to_string()),
        form: Form::None,
    };
    let mut w = codec.writer();
    desc.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let decoded = DevicePropDesc::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, desc);
}

#[test]
fn test_prop_desc_unknown_form_flag() {
    let codec = Codec::default();
    let desc = DevicePropDesc {
        property_code: PropertyCode(0xD201),
        data_type: dt::UINT8,
        get_set: GetSet::Other(0x02),
        factory_default: PtpValue::UInt8(0),
        current_value: PtpValue::UInt8(1),
        form: Form::Other(0x77),
    };
    let mut w = codec.writer();
    desc.encode(&mut w).unwrap();
    let bytes = w.into_bytes();
    let decoded = DevicePropDesc::decode(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, desc);
}

#[test]
fn test_vendor_extension_maps_u64_prefix() {
    let codec = Codec::default();
    let maps = vec![
        VendorExtensionMap {
            native_code: 0x9001,
            mapped_code: 0x9801,
            mapped_vendor_extension_id: VendorExtensionId(0x0000_0006),
        },
        VendorExtensionMap {
            native_code: 0x9002,
            mapped_code: 0x9101,
            mapped_vendor_extension_id: VendorExtensionId(0x0000_0006),
        },
    ];
    let mut w = codec.writer();
    encode_vendor_extension_maps(&mut w, &maps);
    let bytes = w.into_bytes();
    // u64 count + 2 entries of 8 bytes
    assert_eq!(bytes.len(), 8 + 16);
    let decoded = decode_vendor_extension_maps(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, maps);
}

#[test]
fn test_handle_array_round_trip() {
    let codec = Codec::default();
    let handles = vec![0x1000_0001, 0x1000_0002, 0x1000_0003];
    let mut w = codec.writer();
    encode_handle_array(&mut w, &handles);
    let bytes = w.into_bytes();
    let decoded = decode_handle_array(&mut codec.reader(&bytes)).unwrap();
    assert_eq!(decoded, handles);
}

#[test]
fn test_prop_value_unknown_type_is_opaque() {
    let codec = Codec::default();
    let payload = [0x01, 0x02, 0x03];
    let mut r = codec.reader(&payload);
    let value = decode_prop_value(&mut r, DataTypeCode(0xC003)).unwrap();
    assert_eq!(
        value,
        PtpValue::Undefined(Bytes::from_static(&[0x01, 0x02, 0x03]))
    );
    assert!(r.is_empty());
}
