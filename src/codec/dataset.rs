//! Composite dataset codecs: `DeviceInfo`, `StorageInfo`, `ObjectInfo`,
//! `DevicePropDesc`, and the vendor extension map.
//!
//! Datasets decode strictly sequentially; fields whose width depends on an
//! earlier discriminant (`DataTypeCode`, `FormFlag`) receive it as an
//! explicit argument. Every codec here is bidirectional because the engine
//! decodes what devices send and test doubles must produce the same bytes.

use bytes::Bytes;

use super::value::{read_array, read_string, write_array, write_string};
use super::{CodecError, PtpValue, Reader, Writer};
use crate::types::{
    DataTypeCode, EventCode, FilesystemTypeCode, ObjectFormatCode, OperationCode, PropertyCode,
    VendorExtensionId,
};

/// Everything a device declares about itself.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    /// PTP standard version in hundredths (100 = 1.00)
    pub standard_version: u16,
    /// Vendor extension the device speaks, 0 for none
    pub vendor_extension_id: VendorExtensionId,
    /// Vendor extension version in hundredths
    pub vendor_extension_version: u16,
    /// Free-form vendor extension description
    pub vendor_extension_desc: String,
    /// Current functional mode
    pub functional_mode: u16,
    /// Operations the device implements
    pub operations_supported: Vec<OperationCode>,
    /// Events the device can emit
    pub events_supported: Vec<EventCode>,
    /// Properties the device exposes
    pub device_properties_supported: Vec<PropertyCode>,
    /// Formats the device can capture directly
    pub capture_formats: Vec<ObjectFormatCode>,
    /// Formats the device can store
    pub image_formats: Vec<ObjectFormatCode>,
    /// Manufacturer name
    pub manufacturer: String,
    /// Model name
    pub model: String,
    /// Device firmware/software version
    pub device_version: String,
    /// Serial number
    pub serial_number: String,
}

impl DeviceInfo {
    /// Decode a `DeviceInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or malformed input.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            standard_version: r.read_u16()?,
            vendor_extension_id: VendorExtensionId(r.read_u32()?),
            vendor_extension_version: r.read_u16()?,
            vendor_extension_desc: read_string(r)?,
            functional_mode: r.read_u16()?,
            operations_supported: read_code_array(r, OperationCode)?,
            events_supported: read_code_array(r, EventCode)?,
            device_properties_supported: read_code_array(r, PropertyCode)?,
            capture_formats: read_code_array(r, ObjectFormatCode)?,
            image_formats: read_code_array(r, ObjectFormatCode)?,
            manufacturer: read_string(r)?,
            model: read_string(r)?,
            device_version: read_string(r)?,
            serial_number: read_string(r)?,
        })
    }

    /// Encode a `DeviceInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if a string field exceeds the wire limit.
    pub fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u16(self.standard_version);
        w.put_u32(self.vendor_extension_id.raw());
        w.put_u16(self.vendor_extension_version);
        write_string(w, &self.vendor_extension_desc)?;
        w.put_u16(self.functional_mode);
        write_code_array(w, &self.operations_supported, |c| c.raw());
        write_code_array(w, &self.events_supported, |c| c.raw());
        write_code_array(w, &self.device_properties_supported, |c| c.raw());
        write_code_array(w, &self.capture_formats, |c| c.raw());
        write_code_array(w, &self.image_formats, |c| c.raw());
        write_string(w, &self.manufacturer)?;
        write_string(w, &self.model)?;
        write_string(w, &self.device_version)?;
        write_string(w, &self.serial_number)?;
        Ok(())
    }
}

fn read_code_array<C>(
    r: &mut Reader<'_>,
    wrap: impl Fn(u16) -> C,
) -> Result<Vec<C>, CodecError> {
    Ok(read_array(r, 2, |rr| rr.read_u16())?
        .into_iter()
        .map(wrap)
        .collect())
}

fn write_code_array<C: Copy>(w: &mut Writer, codes: &[C], raw: impl Fn(C) -> u16) {
    write_array(w, codes, |w, c| w.put_u16(raw(*c)));
}

/// Physical storage kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// Not reported
    Undefined,
    /// Non-removable read-only store
    FixedRom,
    /// Removable read-only store
    RemovableRom,
    /// Non-removable writable store
    FixedRam,
    /// Removable writable store (memory cards)
    RemovableRam,
    /// Anything else the device reports
    Other(u16),
}

impl StorageType {
    /// Parse from the wire value.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            0x0000 => Self::Undefined,
            0x0001 => Self::FixedRom,
            0x0002 => Self::RemovableRom,
            0x0003 => Self::FixedRam,
            0x0004 => Self::RemovableRam,
            other => Self::Other(other),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::Undefined => 0x0000,
            Self::FixedRom => 0x0001,
            Self::RemovableRom => 0x0002,
            Self::FixedRam => 0x0003,
            Self::RemovableRam => 0x0004,
            Self::Other(value) => value,
        }
    }
}

/// What the initiator is allowed to do to a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessCapability {
    /// Full read/write access
    ReadWrite,
    /// Read-only, objects cannot be deleted
    ReadOnlyWithoutObjectDeletion,
    /// Read-only, but objects may be deleted
    ReadOnlyWithObjectDeletion,
    /// Anything else the device reports
    Other(u16),
}

impl AccessCapability {
    /// Parse from the wire value.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            0x0000 => Self::ReadWrite,
            0x0001 => Self::ReadOnlyWithoutObjectDeletion,
            0x0002 => Self::ReadOnlyWithObjectDeletion,
            other => Self::Other(other),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::ReadWrite => 0x0000,
            Self::ReadOnlyWithoutObjectDeletion => 0x0001,
            Self::ReadOnlyWithObjectDeletion => 0x0002,
            Self::Other(value) => value,
        }
    }
}

/// Description of one storage unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageInfo {
    /// Physical storage kind
    pub storage_type: StorageType,
    /// Filesystem layout
    pub filesystem_type: FilesystemTypeCode,
    /// Access rights for the initiator
    pub access_capability: AccessCapability,
    /// Total capacity in bytes
    pub max_capacity: u64,
    /// Free space in bytes
    pub free_space_in_bytes: u64,
    /// Free space as an image count estimate
    pub free_space_in_images: u32,
    /// Free-form description
    pub storage_description: String,
    /// Volume label
    pub volume_label: String,
}

impl StorageInfo {
    /// Decode a `StorageInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or malformed input.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            storage_type: StorageType::from_raw(r.read_u16()?),
            filesystem_type: FilesystemTypeCode(r.read_u16()?),
            access_capability: AccessCapability::from_raw(r.read_u16()?),
            max_capacity: r.read_u64()?,
            free_space_in_bytes: r.read_u64()?,
            free_space_in_images: r.read_u32()?,
            storage_description: read_string(r)?,
            volume_label: read_string(r)?,
        })
    }

    /// Encode a `StorageInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if a string field exceeds the wire limit.
    pub fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u16(self.storage_type.raw());
        w.put_u16(self.filesystem_type.raw());
        w.put_u16(self.access_capability.raw());
        w.put_u64(self.max_capacity);
        w.put_u64(self.free_space_in_bytes);
        w.put_u32(self.free_space_in_images);
        write_string(w, &self.storage_description)?;
        write_string(w, &self.volume_label)?;
        Ok(())
    }
}

/// Write protection state of an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectionStatus {
    /// Object may be modified or deleted
    NoProtection,
    /// Object is write-protected
    ReadOnly,
    /// Anything else the device reports
    Other(u16),
}

impl ProtectionStatus {
    /// Parse from the wire value.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            0x0000 => Self::NoProtection,
            0x0001 => Self::ReadOnly,
            other => Self::Other(other),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::NoProtection => 0x0000,
            Self::ReadOnly => 0x0001,
            Self::Other(value) => value,
        }
    }
}

/// Association (folder) semantics for grouping objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssociationType {
    /// Not an association
    Undefined,
    /// Plain folder
    GenericFolder,
    /// Album
    Album,
    /// Burst or time-lapse sequence
    TimeSequence,
    /// Horizontal panorama pieces
    HorizontalPanoramic,
    /// Vertical panorama pieces
    VerticalPanoramic,
    /// 2D panorama grid
    Panoramic2D,
    /// Ancillary data for another object
    AncillaryData,
    /// Anything else the device reports
    Other(u16),
}

impl AssociationType {
    /// Parse from the wire value.
    #[must_use]
    pub fn from_raw(value: u16) -> Self {
        match value {
            0x0000 => Self::Undefined,
            0x0001 => Self::GenericFolder,
            0x0002 => Self::Album,
            0x0003 => Self::TimeSequence,
            0x0004 => Self::HorizontalPanoramic,
            0x0005 => Self::VerticalPanoramic,
            0x0006 => Self::Panoramic2D,
            0x0007 => Self::AncillaryData,
            other => Self::Other(other),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn raw(self) -> u16 {
        match self {
            Self::Undefined => 0x0000,
            Self::GenericFolder => 0x0001,
            Self::Album => 0x0002,
            Self::TimeSequence => 0x0003,
            Self::HorizontalPanoramic => 0x0004,
            Self::VerticalPanoramic => 0x0005,
            Self::Panoramic2D => 0x0006,
            Self::AncillaryData => 0x0007,
            Self::Other(value) => value,
        }
    }
}

/// Metadata for one stored object.
///
/// The date fields keep the raw PTP `DateTime` string
/// (`YYYYMMDDThhmmss[.s][Z|±hhmm]`); devices disagree enough about the
/// optional parts that interpretation is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectInfo {
    /// Store holding the object
    pub storage_id: u32,
    /// Format of the object
    pub object_format: ObjectFormatCode,
    /// Write protection state
    pub protection_status: ProtectionStatus,
    /// Size in bytes
    pub object_compressed_size: u32,
    /// Format of the thumbnail
    pub thumb_format: ObjectFormatCode,
    /// Thumbnail size in bytes
    pub thumb_compressed_size: u32,
    /// Thumbnail width in pixels
    pub thumb_pix_width: u32,
    /// Thumbnail height in pixels
    pub thumb_pix_height: u32,
    /// Image width in pixels
    pub image_pix_width: u32,
    /// Image height in pixels
    pub image_pix_height: u32,
    /// Image bit depth
    pub image_bit_depth: u32,
    /// Handle of the containing association, 0 for the root
    pub parent_object: u32,
    /// Association semantics if this object is a folder
    pub association_type: AssociationType,
    /// Association-type-specific qualifier
    pub association_desc: u32,
    /// Capture sequence number
    pub sequence_number: u32,
    /// File name
    pub filename: String,
    /// Capture time as a PTP `DateTime` string
    pub capture_date: String,
    /// Modification time as a PTP `DateTime` string
    pub modification_date: String,
    /// Free-form keywords
    pub keywords: String,
}

impl Default for ProtectionStatus {
    fn default() -> Self {
        Self::NoProtection
    }
}

impl Default for AssociationType {
    fn default() -> Self {
        Self::Undefined
    }
}

impl ObjectInfo {
    /// Decode an `ObjectInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or malformed input.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            storage_id: r.read_u32()?,
            object_format: ObjectFormatCode(r.read_u16()?),
            protection_status: ProtectionStatus::from_raw(r.read_u16()?),
            object_compressed_size: r.read_u32()?,
            thumb_format: ObjectFormatCode(r.read_u16()?),
            thumb_compressed_size: r.read_u32()?,
            thumb_pix_width: r.read_u32()?,
            thumb_pix_height: r.read_u32()?,
            image_pix_width: r.read_u32()?,
            image_pix_height: r.read_u32()?,
            image_bit_depth: r.read_u32()?,
            parent_object: r.read_u32()?,
            association_type: AssociationType::from_raw(r.read_u16()?),
            association_desc: r.read_u32()?,
            sequence_number: r.read_u32()?,
            filename: read_string(r)?,
            capture_date: read_string(r)?,
            modification_date: read_string(r)?,
            keywords: read_string(r)?,
        })
    }

    /// Encode an `ObjectInfo` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if a string field exceeds the wire limit.
    pub fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u32(self.storage_id);
        w.put_u16(self.object_format.raw());
        w.put_u16(self.protection_status.raw());
        w.put_u32(self.object_compressed_size);
        w.put_u16(self.thumb_format.raw());
        w.put_u32(self.thumb_compressed_size);
        w.put_u32(self.thumb_pix_width);
        w.put_u32(self.thumb_pix_height);
        w.put_u32(self.image_pix_width);
        w.put_u32(self.image_pix_height);
        w.put_u32(self.image_bit_depth);
        w.put_u32(self.parent_object);
        w.put_u16(self.association_type.raw());
        w.put_u32(self.association_desc);
        w.put_u32(self.sequence_number);
        write_string(w, &self.filename)?;
        write_string(w, &self.capture_date)?;
        write_string(w, &self.modification_date)?;
        write_string(w, &self.keywords)?;
        Ok(())
    }
}

/// Whether a property accepts writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GetSet {
    /// Read-only
    Get,
    /// Readable and writable
    GetSet,
    /// Anything else the device reports
    Other(u8),
}

impl GetSet {
    /// Parse from the wire value.
    #[must_use]
    pub fn from_raw(value: u8) -> Self {
        match value {
            0x00 => Self::Get,
            0x01 => Self::GetSet,
            other => Self::Other(other),
        }
    }

    /// The wire value.
    #[must_use]
    pub fn raw(self) -> u8 {
        match self {
            Self::Get => 0x00,
            Self::GetSet => 0x01,
            Self::Other(value) => value,
        }
    }
}

/// Constraint on the values a property accepts.
///
/// Selected by the `FormFlag` byte; both forms are typed by the sibling
/// `DataTypeCode` of the enclosing descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Form {
    /// No constraint declared
    None,
    /// Closed interval with a step size
    Range {
        /// Smallest accepted value
        min: PtpValue,
        /// Largest accepted value
        max: PtpValue,
        /// Increment between accepted values
        step: PtpValue,
    },
    /// Explicit list of accepted values (u16-count prefixed)
    Enumeration(Vec<PtpValue>),
    /// Unrecognized form flag, body left undecoded
    Other(u8),
}

impl Form {
    /// The `FormFlag` wire value for this form.
    #[must_use]
    pub fn flag(&self) -> u8 {
        match self {
            Form::None => 0x00,
            Form::Range { .. } => 0x01,
            Form::Enumeration(_) => 0x02,
            Form::Other(flag) => *flag,
        }
    }
}

/// Full description of one device property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePropDesc {
    /// The property being described
    pub property_code: PropertyCode,
    /// Wire type of the property's values
    pub data_type: DataTypeCode,
    /// Whether the property accepts writes
    pub get_set: GetSet,
    /// Factory default value
    pub factory_default: PtpValue,
    /// Value at the time the descriptor was read
    pub current_value: PtpValue,
    /// Constraint on accepted values
    pub form: Form,
}

impl DevicePropDesc {
    /// Decode a `DevicePropDesc` dataset.
    ///
    /// The `DataTypeCode` field read early in the dataset types the two
    /// value fields and the form that follow it.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated or malformed input.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        let property_code = PropertyCode(r.read_u16()?);
        let data_type = DataTypeCode(r.read_u16()?);
        let get_set = GetSet::from_raw(r.read_u8()?);
        let factory_default = PtpValue::decode(r, data_type)?;
        let current_value = PtpValue::decode(r, data_type)?;
        let form = match r.read_u8()? {
            0x00 => Form::None,
            0x01 => Form::Range {
                min: PtpValue::decode(r, data_type)?,
                max: PtpValue::decode(r, data_type)?,
                step: PtpValue::decode(r, data_type)?,
            },
            0x02 => {
                let count = r.read_u16()? as usize;
                let mut values = Vec::with_capacity(count.min(r.remaining()));
                for _ in 0..count {
                    values.push(PtpValue::decode(r, data_type)?);
                }
                Form::Enumeration(values)
            }
            other => Form::Other(other),
        };
        Ok(Self {
            property_code,
            data_type,
            get_set,
            factory_default,
            current_value,
            form,
        })
    }

    /// Encode a `DevicePropDesc` dataset.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] if a value cannot be encoded.
    pub fn encode(&self, w: &mut Writer) -> Result<(), CodecError> {
        w.put_u16(self.property_code.raw());
        w.put_u16(self.data_type.raw());
        w.put_u8(self.get_set.raw());
        self.factory_default.encode(w)?;
        self.current_value.encode(w)?;
        w.put_u8(self.form.flag());
        match &self.form {
            Form::None | Form::Other(_) => {}
            Form::Range { min, max, step } => {
                min.encode(w)?;
                max.encode(w)?;
                step.encode(w)?;
            }
            Form::Enumeration(values) => {
                #[allow(clippy::cast_possible_truncation)]
                w.put_u16(values.len() as u16);
                for value in values {
                    value.encode(w)?;
                }
            }
        }
        Ok(())
    }
}

/// One entry of the vendor extension code map reported by devices that
/// speak more than one extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorExtensionMap {
    /// Code as the device natively reports it
    pub native_code: u16,
    /// Code it maps to inside the mapped extension
    pub mapped_code: u16,
    /// Extension the mapped code belongs to
    pub mapped_vendor_extension_id: VendorExtensionId,
}

impl VendorExtensionMap {
    /// Decode one map entry.
    ///
    /// # Errors
    ///
    /// Returns a [`CodecError`] on truncated input.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, CodecError> {
        Ok(Self {
            native_code: r.read_u16()?,
            mapped_code: r.read_u16()?,
            mapped_vendor_extension_id: VendorExtensionId(r.read_u32()?),
        })
    }

    /// Encode one map entry.
    pub fn encode(&self, w: &mut Writer) {
        w.put_u16(self.native_code);
        w.put_u16(self.mapped_code);
        w.put_u32(self.mapped_vendor_extension_id.raw());
    }
}

/// Decode the u64-count-prefixed array of vendor extension maps.
///
/// # Errors
///
/// Returns a [`CodecError`] on truncated input or a hostile count.
pub fn decode_vendor_extension_maps(
    r: &mut Reader<'_>,
) -> Result<Vec<VendorExtensionMap>, CodecError> {
    let count = r.read_u64()?;
    let count = usize::try_from(count).map_err(|_| CodecError::Truncated {
        needed: usize::MAX,
        have: r.remaining(),
    })?;
    let needed = count.saturating_mul(8);
    if needed > r.remaining() {
        return Err(CodecError::Truncated {
            needed,
            have: r.remaining(),
        });
    }
    let mut maps = Vec::with_capacity(count);
    for _ in 0..count {
        maps.push(VendorExtensionMap::decode(r)?);
    }
    Ok(maps)
}

/// Encode the u64-count-prefixed array of vendor extension maps.
pub fn encode_vendor_extension_maps(w: &mut Writer, maps: &[VendorExtensionMap]) {
    w.put_u64(maps.len() as u64);
    for map in maps {
        map.encode(w);
    }
}

/// Decode a u32-count-prefixed array of object handles or storage IDs.
///
/// # Errors
///
/// Returns a [`CodecError`] on truncated input or a hostile count.
pub fn decode_handle_array(r: &mut Reader<'_>) -> Result<Vec<u32>, CodecError> {
    read_array(r, 4, |rr| rr.read_u32())
}

/// Encode a u32-count-prefixed array of object handles or storage IDs.
pub fn encode_handle_array(w: &mut Writer, handles: &[u32]) {
    write_array(w, handles, |w, h| w.put_u32(*h));
}

/// Decode a bare property value payload typed by `ty`.
///
/// When `ty` is not a type this client implements, the whole payload is
/// returned opaquely so it can still round-trip.
///
/// # Errors
///
/// Returns a [`CodecError`] on truncated or malformed input.
pub fn decode_prop_value(r: &mut Reader<'_>, ty: DataTypeCode) -> Result<PtpValue, CodecError> {
    if PtpValue::is_known_type(ty) {
        PtpValue::decode(r, ty)
    } else {
        Ok(PtpValue::Undefined(Bytes::copy_from_slice(r.rest())))
    }
}
