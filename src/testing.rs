//! Testing utilities: an in-memory device on the other end of the
//! transport contract.
//!
//! [`MockTransport`] behaves like a small camera: it keeps a property
//! table, a store with a few objects, and an event queue, and it services
//! the standard operation set. Exchanges run through the real frame
//! codec, including fragmentation of the data phase, so everything above
//! the transport sees production wire behavior. Fault-injection knobs
//! cover the failure paths a real device would exercise: transient busy
//! responses on outgoing dataphases and corrupted identity fields on
//! incoming ones.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use bytes::Bytes;

use crate::codec::container::{Command, DataPacket, Event, Response};
use crate::codec::dataset::{
    AccessCapability, DeviceInfo, DevicePropDesc, Form, GetSet, ObjectInfo, ProtectionStatus,
    StorageInfo, StorageType, encode_handle_array, encode_vendor_extension_maps,
};
use crate::codec::{Codec, Endian, PtpValue};
use crate::error::PtpError;
use crate::event::{EventQueue, EventSender, event_queue};
use crate::registry::codes::{datatypes as dt, events, extensions, formats, operations as ops,
    properties, responses};
use crate::transport::framing::{Frame, FrameAssembler};
use crate::transport::{DataLeg, PtpTransport, Received};
use crate::types::{FilesystemTypeCode, PropertyCode, ALL};

/// Which identity field of the next incoming dataphase to corrupt.
///
/// Used to exercise the engine's cross-phase identity checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corruption {
    /// Skew the data leg's TransactionID by one.
    DataTransactionId,
    /// Skew the data leg's SessionID by one.
    DataSessionId,
    /// Replace the data leg's OperationCode.
    DataOperationCode,
    /// Skew the response's TransactionID by one.
    ResponseTransactionId,
}

/// The default storage ID the mock device reports.
pub const STORAGE_ID: u32 = 0x0001_0001;

struct MockState {
    session_id: Option<u32>,
    props: HashMap<u16, DevicePropDesc>,
    objects: HashMap<u32, (ObjectInfo, Bytes)>,
    next_handle: u32,
    pending_object_info: Option<ObjectInfo>,
    fail_sends: u32,
    corruption: Option<Corruption>,
    sent: Vec<Command>,
}

/// An in-memory implementation of [`PtpTransport`] backed by a virtual
/// camera.
pub struct MockTransport {
    codec: Codec,
    state: Mutex<MockState>,
    event_tx: EventSender,
    event_queue: EventQueue,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn battery_desc() -> DevicePropDesc {
    DevicePropDesc {
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
    }
}

fn white_balance_desc() -> DevicePropDesc {
    DevicePropDesc {
        property_code: properties::WHITE_BALANCE,
        data_type: dt::UINT16,
        get_set: GetSet::GetSet,
        factory_default: PtpValue::UInt16(2),
        current_value: PtpValue::UInt16(2),
        form: Form::Enumeration(vec![
            PtpValue::UInt16(1),
            PtpValue::UInt16(2),
            PtpValue::UInt16(4),
            PtpValue::UInt16(6),
        ]),
    }
}

fn exposure_time_desc() -> DevicePropDesc {
    DevicePropDesc {
        property_code: properties::EXPOSURE_TIME,
        data_type: dt::UINT32,
        get_set: GetSet::GetSet,
        factory_default: PtpValue::UInt32(10_000),
        current_value: PtpValue::UInt32(20_000),
        form: Form::None,
    }
}

fn date_time_desc() -> DevicePropDesc {
    DevicePropDesc {
        property_code: properties::DATE_TIME,
        data_type: dt::STRING,
        get_set: GetSet::GetSet,
        factory_default: PtpValue::String(String::new()),
        current_value: PtpValue::String("20260807T090000".to_string()),
        form: Form::None,
    }
}

fn sample_object(seq: u32) -> ObjectInfo {
    ObjectInfo {
        storage_id: STORAGE_ID,
        object_format: formats::EXIF_JPEG,
        protection_status: ProtectionStatus::NoProtection,
        object_compressed_size: 4,
        thumb_format: formats::JFIF,
        thumb_compressed_size: 2,
        thumb_pix_width: 160,
        thumb_pix_height: 120,
        image_pix_width: 4000,
        image_pix_height: 3000,
        image_bit_depth: 24,
        parent_object: 0,
        association_type: crate::codec::dataset::AssociationType::Undefined,
        association_desc: 0,
        sequence_number: seq,
        filename: format!("IMG_{seq:04}.JPG"),
        capture_date: "20260807T090000".to_string(),
        modification_date: "20260807T090000".to_string(),
        keywords: String::new(),
    }
}

impl MockTransport {
    /// A fresh little-endian virtual camera with a few properties and one
    /// stored image.
    #[must_use]
    pub fn new() -> Self {
        Self::with_endian(Endian::Little)
    }

    /// A virtual camera speaking the given endianness.
    #[must_use]
    pub fn with_endian(endian: Endian) -> Self {
        let mut props = HashMap::new();
        for desc in [
            battery_desc(),
            white_balance_desc(),
            exposure_time_desc(),
            date_time_desc(),
        ] {
            props.insert(desc.property_code.raw(), desc);
        }
        let mut objects = HashMap::new();
        objects.insert(
            0x0000_0001,
            (sample_object(1), Bytes::from_static(b"\xFF\xD8\xFF\xD9")),
        );

        let (event_tx, event_queue) = event_queue();
        Self {
            codec: Codec::new(endian),
            state: Mutex::new(MockState {
                session_id: None,
                props,
                objects,
                next_handle: 0x0000_0002,
                pending_object_info: None,
                fail_sends: 0,
                corruption: None,
                sent: Vec::new(),
            }),
            event_tx,
            event_queue,
        }
    }

    /// The device description served by `GetDeviceInfo`.
    #[must_use]
    pub fn device_info(&self) -> DeviceInfo {
        let state = self.state.lock().unwrap();
        let mut properties_supported: Vec<PropertyCode> =
            state.props.keys().map(|&code| PropertyCode(code)).collect();
        properties_supported.sort_unstable();
        DeviceInfo {
            standard_version: 100,
            vendor_extension_id: extensions::MICROSOFT,
            vendor_extension_version: 100,
            vendor_extension_desc: "microsoft.com: 1.0".to_string(),
            functional_mode: 0,
            operations_supported: vec![
                ops::GET_DEVICE_INFO,
                ops::OPEN_SESSION,
                ops::CLOSE_SESSION,
                ops::GET_STORAGE_IDS,
                ops::GET_STORAGE_INFO,
                ops::GET_NUM_OBJECTS,
                ops::GET_OBJECT_HANDLES,
                ops::GET_OBJECT_INFO,
                ops::GET_OBJECT,
                ops::GET_THUMB,
                ops::GET_PARTIAL_OBJECT,
                ops::DELETE_OBJECT,
                ops::SEND_OBJECT_INFO,
                ops::SEND_OBJECT,
                ops::MOVE_OBJECT,
                ops::COPY_OBJECT,
                ops::INITIATE_CAPTURE,
                ops::GET_DEVICE_PROP_DESC,
                ops::GET_DEVICE_PROP_VALUE,
                ops::SET_DEVICE_PROP_VALUE,
                ops::RESET_DEVICE_PROP_VALUE,
                ops::RESET_DEVICE,
                ops::POWER_DOWN,
                ops::GET_VENDOR_EXTENSION_MAPS,
                ops::GET_VENDOR_DEVICE_INFO,
            ],
            events_supported: vec![
                events::OBJECT_ADDED,
                events::CAPTURE_COMPLETE,
                events::DEVICE_PROP_CHANGED,
            ],
            device_properties_supported: properties_supported,
            capture_formats: vec![formats::EXIF_JPEG],
            image_formats: vec![formats::EXIF_JPEG, formats::JFIF],
            manufacturer: "Example".to_string(),
            model: "Examplar X100".to_string(),
            device_version: "1.2.3".to_string(),
            serial_number: "EX100-0042".to_string(),
        }
    }

    /// Make the next `n` outgoing dataphase attempts answer `DeviceBusy`.
    pub fn fail_next_sends(&self, n: u32) {
        self.state.lock().unwrap().fail_sends = n;
    }

    /// Corrupt one identity field on the next incoming dataphase.
    pub fn corrupt_next(&self, corruption: Corruption) {
        self.state.lock().unwrap().corruption = Some(corruption);
    }

    /// Push an event as the device's background channel would.
    pub fn inject_event(&self, event: Event) {
        self.event_tx.send(event);
    }

    /// Commands the engine has sent, in order.
    #[must_use]
    pub fn sent_commands(&self) -> Vec<Command> {
        self.state.lock().unwrap().sent.clone()
    }

    /// The current value the virtual device holds for a property.
    #[must_use]
    pub fn current_value(&self, property: PropertyCode) -> Option<PtpValue> {
        self.state
            .lock()
            .unwrap()
            .props
            .get(&property.raw())
            .map(|desc| desc.current_value.clone())
    }

    // --- internals ---

    /// Run a command through the wire codec exactly as a cabled transport
    /// would: encode, reassemble from fragments, decode.
    fn loopback_command(&self, command: &Command) -> Result<Command, PtpError> {
        let frame = Frame::from_command(command, &self.codec).map_err(PtpError::Codec)?;
        let wire = frame.encode(&self.codec);
        let mut asm = FrameAssembler::new(self.codec);
        asm.feed(&wire);
        let frame = asm
            .next_frame()
            .map_err(PtpError::Codec)?
            .ok_or_else(|| PtpError::transport_msg("short command frame"))?;
        let mut decoded = frame
            .to_command(&self.codec, command.session_id)
            .map_err(PtpError::Codec)?;
        // Trailing zero parameters are legitimately absent on the wire.
        decoded.params.resize(command.params.len().max(decoded.params.len()), 0);
        Ok(decoded)
    }

    /// Deliver a data payload the way a bulk endpoint would: framed, then
    /// chopped into 64-byte reads and reassembled.
    fn loopback_data(&self, data: &DataPacket) -> Result<DataLeg, PtpError> {
        let wire = Frame::from_data(data).encode(&self.codec);
        let mut asm = FrameAssembler::new(self.codec);
        let mut complete = None;
        for chunk in wire.chunks(64) {
            asm.feed(chunk);
            if let Some(frame) = asm.next_frame().map_err(PtpError::Codec)? {
                complete = Some(frame);
            }
        }
        let frame = complete.ok_or_else(|| PtpError::transport_msg("short data frame"))?;
        let leg = frame.to_data(data.session_id);
        Ok(DataLeg {
            code: leg.code,
            session_id: leg.session_id,
            transaction_id: leg.transaction_id,
            payload: leg.payload,
        })
    }

    fn respond(command: &Command, code: crate::types::ResponseCode, params: Vec<u32>) -> Response {
        Response::new(code, command.session_id, command.transaction_id, params)
    }

    fn ok(command: &Command) -> Response {
        Self::respond(command, responses::OK, vec![])
    }

    fn requires_session(op: crate::types::OperationCode) -> bool {
        !matches!(op, ops::GET_DEVICE_INFO | ops::OPEN_SESSION)
    }

    /// Property codes travel as u32 parameters; only the low half matters.
    #[allow(clippy::cast_possible_truncation)]
    fn prop_code(param: u32) -> u16 {
        (param & 0xFFFF) as u16
    }

    fn encode_dataset(
        &self,
        build: impl FnOnce(&mut crate::codec::Writer) -> Result<(), crate::codec::CodecError>,
    ) -> Result<Bytes, PtpError> {
        let mut w = self.codec.writer();
        build(&mut w).map_err(PtpError::Codec)?;
        Ok(w.into_bytes())
    }

    /// Service one exchange, producing the response and optional payload.
    #[allow(clippy::too_many_lines)]
    fn serve(
        &self,
        command: &Command,
        outgoing: Option<&Bytes>,
    ) -> Result<(Response, Option<Bytes>), PtpError> {
        let mut state = self.state.lock().unwrap();
        state.sent.push(command.clone());

        if Self::requires_session(command.code) && state.session_id.is_none() {
            return Ok((
                Self::respond(command, responses::SESSION_NOT_OPEN, vec![]),
                None,
            ));
        }

        match command.code {
            ops::OPEN_SESSION => {
                if state.session_id.is_some() {
                    return Ok((
                        Self::respond(command, responses::SESSION_ALREADY_OPENED, vec![]),
                        None,
                    ));
                }
                state.session_id = Some(command.params.first().copied().unwrap_or(0));
                Ok((Self::ok(command), None))
            }
            ops::CLOSE_SESSION | ops::RESET_DEVICE | ops::POWER_DOWN => {
                state.session_id = None;
                Ok((Self::ok(command), None))
            }
            ops::GET_DEVICE_INFO | ops::GET_VENDOR_DEVICE_INFO => {
                drop(state);
                let info = self.device_info();
                let data = self.encode_dataset(|w| info.encode(w))?;
                Ok((Self::ok(command), Some(data)))
            }
            ops::GET_STORAGE_IDS => {
                let data = self.encode_dataset(|w| {
                    encode_handle_array(w, &[STORAGE_ID]);
                    Ok(())
                })?;
                Ok((Self::ok(command), Some(data)))
            }
            ops::GET_STORAGE_INFO => {
                let info = StorageInfo {
                    storage_type: StorageType::RemovableRam,
                    filesystem_type: FilesystemTypeCode(0x0003),
                    access_capability: AccessCapability::ReadWrite,
                    max_capacity: 32 * 1024 * 1024 * 1024,
                    free_space_in_bytes: 16 * 1024 * 1024 * 1024,
                    free_space_in_images: 4000,
                    storage_description: "SD card".to_string(),
                    volume_label: "EXAMPLAR".to_string(),
                };
                let data = self.encode_dataset(|w| info.encode(w))?;
                Ok((Self::ok(command), Some(data)))
            }
            ops::GET_NUM_OBJECTS => {
                #[allow(clippy::cast_possible_truncation)]
                let count = state.objects.len() as u32;
                Ok((Self::respond(command, responses::OK, vec![count]), None))
            }
            ops::GET_OBJECT_HANDLES => {
                let mut handles: Vec<u32> = state.objects.keys().copied().collect();
                handles.sort_unstable();
                drop(state);
                let data = self.encode_dataset(|w| {
                    encode_handle_array(w, &handles);
                    Ok(())
                })?;
                Ok((Self::ok(command), Some(data)))
            }
            ops::GET_OBJECT_INFO => {
                let handle = command.params.first().copied().unwrap_or(0);
                match state.objects.get(&handle) {
                    Some((info, _)) => {
                        let info = info.clone();
                        drop(state);
                        let data = self.encode_dataset(|w| info.encode(w))?;
                        Ok((Self::ok(command), Some(data)))
                    }
                    None => Ok((
                        Self::respond(command, responses::INVALID_OBJECT_HANDLE, vec![]),
                        None,
                    )),
                }
            }
            ops::GET_OBJECT | ops::GET_THUMB => {
                let handle = command.params.first().copied().unwrap_or(0);
                match state.objects.get(&handle) {
                    Some((_, bytes)) => Ok((Self::ok(command), Some(bytes.clone()))),
                    None => Ok((
                        Self::respond(command, responses::INVALID_OBJECT_HANDLE, vec![]),
                        None,
                    )),
                }
            }
            ops::GET_PARTIAL_OBJECT => {
                let handle = command.params.first().copied().unwrap_or(0);
                let offset = command.params.get(1).copied().unwrap_or(0) as usize;
                let max = command.params.get(2).copied().unwrap_or(ALL);
                match state.objects.get(&handle) {
                    Some((_, bytes)) => {
                        let start = offset.min(bytes.len());
                        let end = if max == ALL {
                            bytes.len()
                        } else {
                            (start + max as usize).min(bytes.len())
                        };
                        let slice = bytes.slice(start..end);
                        #[allow(clippy::cast_possible_truncation)]
                        let sent = slice.len() as u32;
                        Ok((
                            Self::respond(command, responses::OK, vec![sent]),
                            Some(slice),
                        ))
                    }
                    None => Ok((
                        Self::respond(command, responses::INVALID_OBJECT_HANDLE, vec![]),
                        None,
                    )),
                }
            }
            ops::DELETE_OBJECT => {
                let handle = command.params.first().copied().unwrap_or(0);
                if handle == ALL {
                    state.objects.clear();
                    Ok((Self::ok(command), None))
                } else if state.objects.remove(&handle).is_some() {
                    Ok((Self::ok(command), None))
                } else {
                    Ok((
                        Self::respond(command, responses::INVALID_OBJECT_HANDLE, vec![]),
                        None,
                    ))
                }
            }
            ops::MOVE_OBJECT | ops::COPY_OBJECT => {
                let handle = command.params.first().copied().unwrap_or(0);
                if !state.objects.contains_key(&handle) {
                    return Ok((
                        Self::respond(command, responses::INVALID_OBJECT_HANDLE, vec![]),
                        None,
                    ));
                }
                if command.code == ops::COPY_OBJECT {
                    let copied = state.objects[&handle].clone();
                    let new_handle = state.next_handle;
                    state.next_handle += 1;
                    state.objects.insert(new_handle, copied);
                    return Ok((
                        Self::respond(command, responses::OK, vec![new_handle]),
                        None,
                    ));
                }
                Ok((Self::ok(command), None))
            }
            ops::INITIATE_CAPTURE => {
                let handle = state.next_handle;
                state.next_handle += 1;
                let seq = handle;
                state
                    .objects
                    .insert(handle, (sample_object(seq), Bytes::from_static(b"\xFF\xD8")));
                let session_id = state.session_id.unwrap_or(0);
                drop(state);
                self.event_tx.send(Event::new(
                    events::OBJECT_ADDED,
                    session_id,
                    command.transaction_id,
                    vec![handle],
                ));
                self.event_tx.send(Event::new(
                    events::CAPTURE_COMPLETE,
                    session_id,
                    command.transaction_id,
                    vec![],
                ));
                Ok((Self::ok(command), None))
            }
            ops::GET_DEVICE_PROP_DESC => {
                let code = Self::prop_code(command.params.first().copied().unwrap_or(0));
                match state.props.get(&code) {
                    Some(desc) => {
                        let desc = desc.clone();
                        drop(state);
                        let data = self.encode_dataset(|w| desc.encode(w))?;
                        Ok((Self::ok(command), Some(data)))
                    }
                    None => Ok((
                        Self::respond(command, responses::DEVICE_PROP_NOT_SUPPORTED, vec![]),
                        None,
                    )),
                }
            }
            ops::GET_DEVICE_PROP_VALUE => {
                let code = Self::prop_code(command.params.first().copied().unwrap_or(0));
                match state.props.get(&code) {
                    Some(desc) => {
                        let value = desc.current_value.clone();
                        drop(state);
                        let data = self.encode_dataset(|w| value.encode(w))?;
                        Ok((Self::ok(command), Some(data)))
                    }
                    None => Ok((
                        Self::respond(command, responses::DEVICE_PROP_NOT_SUPPORTED, vec![]),
                        None,
                    )),
                }
            }
            ops::SET_DEVICE_PROP_VALUE => {
                let code = command.params.first().copied().unwrap_or(0);
                let Some(payload) = outgoing else {
                    return Ok((
                        Self::respond(command, responses::INCOMPLETE_TRANSFER, vec![]),
                        None,
                    ));
                };
                let Some(desc) = state.props.get_mut(&Self::prop_code(code)) else {
                    return Ok((
                        Self::respond(command, responses::DEVICE_PROP_NOT_SUPPORTED, vec![]),
                        None,
                    ));
                };
                if desc.get_set != GetSet::GetSet {
                    return Ok((
                        Self::respond(command, responses::ACCESS_DENIED, vec![]),
                        None,
                    ));
                }
                let mut r = self.codec.reader(payload);
                match PtpValue::decode(&mut r, desc.data_type) {
                    Ok(value) => {
                        desc.current_value = value;
                        Ok((Self::ok(command), None))
                    }
                    Err(_) => Ok((
                        Self::respond(command, responses::INVALID_DEVICE_PROP_VALUE, vec![]),
                        None,
                    )),
                }
            }
            ops::RESET_DEVICE_PROP_VALUE => {
                let code = command.params.first().copied().unwrap_or(0);
                if code == ALL {
                    for desc in state.props.values_mut() {
                        desc.current_value = desc.factory_default.clone();
                    }
                    return Ok((Self::ok(command), None));
                }
                match state.props.get_mut(&Self::prop_code(code)) {
                    Some(desc) => {
                        desc.current_value = desc.factory_default.clone();
                        Ok((Self::ok(command), None))
                    }
                    None => Ok((
                        Self::respond(command, responses::DEVICE_PROP_NOT_SUPPORTED, vec![]),
                        None,
                    )),
                }
            }
            ops::SEND_OBJECT_INFO => {
                let Some(payload) = outgoing else {
                    return Ok((
                        Self::respond(command, responses::INCOMPLETE_TRANSFER, vec![]),
                        None,
                    ));
                };
                let mut r = self.codec.reader(payload);
                match ObjectInfo::decode(&mut r) {
                    Ok(info) => {
                        let handle = state.next_handle;
                        state.pending_object_info = Some(info);
                        Ok((
                            Self::respond(
                                command,
                                responses::OK,
                                vec![STORAGE_ID, 0, handle],
                            ),
                            None,
                        ))
                    }
                    Err(_) => Ok((
                        Self::respond(command, responses::INVALID_DATASET, vec![]),
                        None,
                    )),
                }
            }
            ops::SEND_OBJECT => {
                let Some(payload) = outgoing else {
                    return Ok((
                        Self::respond(command, responses::INCOMPLETE_TRANSFER, vec![]),
                        None,
                    ));
                };
                let Some(info) = state.pending_object_info.take() else {
                    return Ok((
                        Self::respond(command, responses::NO_VALID_OBJECT_INFO, vec![]),
                        None,
                    ));
                };
                let handle = state.next_handle;
                state.next_handle += 1;
                state.objects.insert(handle, (info, payload.clone()));
                Ok((Self::ok(command), None))
            }
            ops::GET_VENDOR_EXTENSION_MAPS => {
                drop(state);
                let data = self.encode_dataset(|w| {
                    encode_vendor_extension_maps(w, &[]);
                    Ok(())
                })?;
                Ok((Self::ok(command), Some(data)))
            }
            _ => Ok((
                Self::respond(command, responses::OPERATION_NOT_SUPPORTED, vec![]),
                None,
            )),
        }
    }
}

#[async_trait]
impl PtpTransport for MockTransport {
    async fn mesg(&self, command: &Command) -> Result<Response, PtpError> {
        let command = self.loopback_command(command)?;
        let (response, _) = self.serve(&command, None)?;
        Ok(response)
    }

    async fn send(&self, command: &Command, payload: Bytes) -> Result<Response, PtpError> {
        let command = self.loopback_command(command)?;
        {
            let mut state = self.state.lock().unwrap();
            if state.fail_sends > 0 {
                state.fail_sends -= 1;
                state.sent.push(command.clone());
                return Ok(Self::respond(&command, responses::DEVICE_BUSY, vec![]));
            }
        }
        // The outgoing payload crosses the wire as a data frame too.
        let data = DataPacket::new(
            command.code,
            command.session_id,
            command.transaction_id,
            payload,
        );
        let leg = self.loopback_data(&data)?;
        let (response, _) = self.serve(&command, Some(&leg.payload))?;
        Ok(response)
    }

    async fn recv(&self, command: &Command) -> Result<Received, PtpError> {
        let command = self.loopback_command(command)?;
        let (mut response, payload) = self.serve(&command, None)?;
        let mut data = match payload {
            Some(payload) => Some(self.loopback_data(&DataPacket::new(
                command.code,
                command.session_id,
                command.transaction_id,
                payload,
            ))?),
            None => None,
        };

        let corruption = self.state.lock().unwrap().corruption.take();
        if let Some(corruption) = corruption {
            match (corruption, data.as_mut()) {
                (Corruption::DataTransactionId, Some(leg)) => leg.transaction_id ^= 1,
                (Corruption::DataSessionId, Some(leg)) => leg.session_id ^= 1,
                (Corruption::DataOperationCode, Some(leg)) => {
                    leg.code = crate::types::OperationCode(0x1FFF);
                }
                (Corruption::ResponseTransactionId, _) => response.transaction_id ^= 1,
                (_, None) => {}
            }
        }

        Ok(Received { response, data })
    }

    async fn event(&self, wait: bool) -> Result<Option<Event>, PtpError> {
        Ok(self.event_queue.next(wait).await)
    }
}
