use criterion::{Criterion, black_box, criterion_group, criterion_main};

use ptp_engine::codec::container::Command;
use ptp_engine::registry::codes::{formats, operations, properties};
use ptp_engine::transport::framing::{Frame, FrameAssembler};
use ptp_engine::{Codec, DeviceInfo, Endian, PtpValue};

fn sample_device_info() -> DeviceInfo {
    DeviceInfo {
        standard_version: 100,
        vendor_extension_id: ptp_engine::types::VendorExtensionId(6),
        vendor_extension_version: 100,
        vendor_extension_desc: "microsoft.com: 1.0".to_string(),
        functional_mode: 0,
        operations_supported: (0x1001..0x1026)
            .map(ptp_engine::types::OperationCode)
            .collect(),
        events_supported: (0x4001..0x400F)
            .map(ptp_engine::types::EventCode)
            .collect(),
        device_properties_supported: vec![
            properties::BATTERY_LEVEL,
            properties::WHITE_BALANCE,
            properties::EXPOSURE_TIME,
            properties::F_NUMBER,
            properties::DATE_TIME,
        ],
        capture_formats: vec![formats::EXIF_JPEG],
        image_formats: vec![formats::EXIF_JPEG, formats::PNG, formats::DNG],
        manufacturer: "Example".to_string(),
        model: "Examplar X100".to_string(),
        device_version: "1.2.3".to_string(),
        serial_number: "EX100-0042".to_string(),
    }
}

fn device_info_benchmark(c: &mut Criterion) {
    let codec = Codec::new(Endian::Little);
    let info = sample_device_info();
    let mut w = codec.writer();
    info.encode(&mut w).unwrap();
    let bytes = w.into_bytes();

    c.bench_function("device_info_encode", |b| {
        b.iter(|| {
            let mut w = codec.writer();
            black_box(&info).encode(&mut w).unwrap();
            black_box(w.into_bytes())
        });
    });

    c.bench_function("device_info_decode", |b| {
        b.iter(|| DeviceInfo::decode(&mut codec.reader(black_box(&bytes))).unwrap());
    });
}

fn value_benchmark(c: &mut Criterion) {
    let codec = Codec::new(Endian::Little);
    let value = PtpValue::UInt16Array((0..512).collect());
    let mut w = codec.writer();
    value.encode(&mut w).unwrap();
    let bytes = w.into_bytes();

    c.bench_function("u16_array_decode_512", |b| {
        b.iter(|| {
            PtpValue::decode(&mut codec.reader(black_box(&bytes)), value.data_type()).unwrap()
        });
    });
}

fn framing_benchmark(c: &mut Criterion) {
    let codec = Codec::new(Endian::Little);
    let cmd = Command::new(operations::GET_OBJECT_HANDLES, 1, 42, vec![0xFFFF_FFFF, 0, 0]);
    let wire = Frame::from_command(&cmd, &codec).unwrap().encode(&codec);

    c.bench_function("command_frame_round_trip", |b| {
        b.iter(|| {
            let mut asm = FrameAssembler::new(codec);
            asm.feed(black_box(&wire));
            asm.next_frame().unwrap().unwrap()
        });
    });
}

criterion_group!(
    benches,
    device_info_benchmark,
    value_benchmark,
    framing_benchmark
);
criterion_main!(benches);
