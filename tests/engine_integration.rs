//! End-to-end exercises of the engine against the mock device.

use std::sync::Arc;

use bytes::Bytes;

use ptp_engine::codec::dataset::Form;
use ptp_engine::engine::ObjectQuery;
use ptp_engine::registry::codes::{datatypes as dt, events, formats, properties, responses};
use ptp_engine::testing::{MockTransport, STORAGE_ID};
use ptp_engine::types::ALL;
use ptp_engine::{PtpEngine, PtpValue, vendor};

fn engine() -> PtpEngine<MockTransport> {
    PtpEngine::builder(MockTransport::new()).build()
}

#[tokio::test]
async fn test_overlay_selection_from_device_info() {
    // First pass: a plain engine just to read DeviceInfo.
    let probe = engine();
    let info = probe.get_device_info().await.unwrap().data.unwrap();

    // The mock declares the Microsoft extension.
    let overlay = vendor::select(&info).expect("overlay for the declared extension");
    assert_eq!(overlay.name(), "Microsoft");

    // Second pass: the real engine with the overlay composed in.
    let engine = PtpEngine::builder(MockTransport::new())
        .overlay(overlay)
        .build();
    assert_eq!(
        engine
            .registry()
            .value_of(ptp_engine::CodeSpace::Property, "DeviceFriendlyName"),
        Some(0xD402)
    );
    assert_eq!(engine.registry().overlay_names(), &["Microsoft"]);
}

#[tokio::test]
async fn test_full_camera_session() {
    let engine = engine();

    engine
        .with_session(async {
            // Storage enumeration.
            let ids = engine.get_storage_ids().await?.data.unwrap();
            assert_eq!(ids, vec![STORAGE_ID]);
            let storage = engine.get_storage_info(STORAGE_ID).await?.data.unwrap();
            assert_eq!(storage.volume_label, "EXAMPLAR");

            // Object enumeration.
            let query = ObjectQuery::all();
            let count = engine.get_num_objects(&query).await?.data.unwrap();
            assert_eq!(count, 1);
            let handles = engine.get_object_handles(&query).await?.data.unwrap();
            assert_eq!(handles.len(), 1);

            // Object metadata and content.
            let handle = handles[0];
            let info = engine.get_object_info(handle).await?.data.unwrap();
            assert_eq!(info.filename, "IMG_0001.JPG");
            assert_eq!(info.object_format, formats::EXIF_JPEG);

            let object = engine.get_object(handle).await?.data.unwrap();
            assert_eq!(&object[..], b"\xFF\xD8\xFF\xD9");

            let partial = engine.get_partial_object(handle, 1, 2, false).await?;
            assert_eq!(partial.response.param(0), 2);
            assert_eq!(&partial.data.unwrap()[..], b"\xD8\xFF");

            let tail = engine.get_partial_object(handle, 2, 0, true).await?;
            assert_eq!(&tail.data.unwrap()[..], b"\xFF\xD9");

            Ok(())
        })
        .await
        .unwrap();

    assert!(!engine.is_session_open().await);
}

#[tokio::test]
async fn test_upload_flow() {
    let engine = engine();
    engine
        .with_session(async {
            let before = engine
                .get_num_objects(&ObjectQuery::all())
                .await?
                .data
                .unwrap();

            let mut info = engine.get_object_info(1).await?.data.unwrap();
            info.filename = "UPLOAD01.JPG".to_string();
            info.object_compressed_size = 6;
            let response = engine.send_object_info(&info, STORAGE_ID, 0).await?;
            assert!(response.is_ok());
            // Store, parent, and reserved handle come back as parameters.
            assert_eq!(response.param(0), STORAGE_ID);

            let response = engine
                .send_object(Bytes::from_static(b"\xFF\xD8ab\xFF\xD9"))
                .await?;
            assert!(response.is_ok());

            let after = engine
                .get_num_objects(&ObjectQuery::all())
                .await?
                .data
                .unwrap();
            assert_eq!(after, before + 1);
            Ok(())
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_capture_and_event_flow() {
    let engine = engine();
    engine
        .with_session(async {
            let response = engine.initiate_capture(0, 0u16).await?;
            assert!(response.is_ok());

            // Events arrive on their own channel, in FIFO order among
            // themselves. Nothing relates their timing to the response
            // above - only the queue order is guaranteed.
            let added = engine.event(false).await?.unwrap();
            assert_eq!(added.code, events::OBJECT_ADDED);
            let new_handle = added.params[0];

            let complete = engine.event(false).await?.unwrap();
            assert_eq!(complete.code, events::CAPTURE_COMPLETE);

            // The object the event announced is really there.
            let info = engine.get_object_info(new_handle).await?.data.unwrap();
            assert_eq!(info.object_format, formats::EXIF_JPEG);
            Ok(())
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_blocking_event_wait() {
    let engine = Arc::new(engine());
    let waiter = {
        let engine = Arc::clone(&engine);
        tokio::spawn(async move { engine.event(true).await })
    };
    tokio::task::yield_now().await;

    engine.transport().inject_event(ptp_engine::Event::new(
        events::DEVICE_PROP_CHANGED,
        1,
        ALL,
        vec![u32::from(properties::BATTERY_LEVEL.raw())],
    ));

    let event = waiter.await.unwrap().unwrap().unwrap();
    assert_eq!(event.code, events::DEVICE_PROP_CHANGED);
}

#[tokio::test]
async fn test_knowledge_cache_consistency() {
    let engine = engine();
    let info = engine.obtain_knowledge().await.unwrap().data.unwrap();
    assert!(engine.has_knowledge().await);

    engine
        .with_session(async {
            for prop in info.device_properties_supported {
                let desc = engine.get_device_prop_desc(prop).await?.data.unwrap();
                let value = engine.get_device_prop_value(prop).await?.data.unwrap();
                assert_eq!(value, desc.current_value);
            }
            Ok(())
        })
        .await
        .unwrap();

    // The battery descriptor keeps its Range-form UInt8 shape.
    let battery = engine
        .cached_prop_desc(properties::BATTERY_LEVEL)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(battery.data_type, dt::UINT8);
    assert!(matches!(
        battery.form,
        Form::Range {
            min: PtpValue::UInt8(0),
            max: PtpValue::UInt8(100),
            step: PtpValue::UInt8(1),
        }
    ));
}

#[tokio::test]
async fn test_set_then_get_round_trip_through_device() {
    let engine = engine();
    engine.obtain_knowledge().await.unwrap();

    engine
        .with_session(async {
            let response = engine
                .set_device_prop_value("ExposureTime", &PtpValue::UInt32(500))
                .await?;
            assert!(response.is_ok());

            let value = engine
                .get_device_prop_value("ExposureTime")
                .await?
                .data
                .unwrap();
            assert_eq!(value, PtpValue::UInt32(500));

            // Reset restores the factory default.
            engine
                .reset_device_prop_value("ExposureTime", false)
                .await?;
            let value = engine
                .get_device_prop_value("ExposureTime")
                .await?
                .data
                .unwrap();
            assert_eq!(value, PtpValue::UInt32(10_000));
            Ok(())
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_readonly_property_rejection_is_data_not_error() {
    let engine = engine();
    engine.obtain_knowledge().await.unwrap();
    engine
        .with_session(async {
            // BatteryLevel is Get-only; the device refuses, and that
            // refusal is a response, not an engine fault. The automatic
            // retry makes it two attempts on the wire.
            let response = engine
                .set_device_prop_value("BatteryLevel", &PtpValue::UInt8(5))
                .await?;
            assert_eq!(response.code, responses::ACCESS_DENIED);
            Ok(())
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_delete_all_objects() {
    let engine = engine();
    engine
        .with_session(async {
            let response = engine.delete_object(0, 0u16, true, false).await?;
            assert!(response.is_ok());
            let count = engine
                .get_num_objects(&ObjectQuery::all())
                .await?
                .data
                .unwrap();
            assert_eq!(count, 0);
            Ok(())
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn test_contradictory_object_query_rejected() {
    let engine = engine();
    engine.open_session().await.unwrap();
    let query = ObjectQuery {
        parent_handle: 0x42,
        in_root: true,
        ..ObjectQuery::storage(STORAGE_ID)
    };
    let err = engine.get_object_handles(&query).await.unwrap_err();
    assert!(matches!(
        err,
        ptp_engine::PtpError::InvalidArgument { .. }
    ));
}

#[tokio::test]
async fn test_big_endian_device() {
    // The same engine logic against a big-endian wire.
    let engine = PtpEngine::builder(MockTransport::with_endian(ptp_engine::Endian::Big))
        .endian(ptp_engine::Endian::Big)
        .build();
    engine
        .with_session(async {
            let info = engine.get_device_info().await?.data.unwrap();
            assert_eq!(info.model, "Examplar X100");
            let handles = engine
                .get_object_handles(&ObjectQuery::all())
                .await?
                .data
                .unwrap();
            assert_eq!(handles, vec![1]);
            Ok(())
        })
        .await
        .unwrap();
}
