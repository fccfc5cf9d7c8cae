use super::codes::{operations, properties};
use super::{CodeOverlay, CodeRef, CodeRegistry, CodeSpace, ExtensionRef};
use crate::error::PtpError;
use crate::types::VendorExtensionId;

struct OverlayA;

impl CodeOverlay for OverlayA {
    fn name(&self) -> &'static str {
        "A"
    }

    fn entries(&self, space: CodeSpace) -> &'static [(&'static str, u16)] {
        match space {
            CodeSpace::Operation => &[("WarmShutter", 0x9101), ("SharedOp", 0x9110)],
            CodeSpace::Property => &[("ShutterCount", 0xD101)],
            _ => &[],
        }
    }
}

struct OverlayB;

impl CodeOverlay for OverlayB {
    fn name(&self) -> &'static str {
        "B"
    }

    fn entries(&self, space: CodeSpace) -> &'static [(&'static str, u16)] {
        match space {
            // Redefines SharedOp to a different integer.
            CodeSpace::Operation => &[("SharedOp", 0x9210), ("ColdShutter", 0x9201)],
            _ => &[],
        }
    }
}

#[test]
fn test_base_bidirectional_resolution() {
    let reg = CodeRegistry::base();
    assert_eq!(
        reg.value_of(CodeSpace::Operation, "GetDeviceInfo"),
        Some(0x1001)
    );
    assert_eq!(
        reg.name_of(CodeSpace::Operation, 0x1001),
        Some("GetDeviceInfo")
    );
    assert_eq!(reg.value_of(CodeSpace::Response, "OK"), Some(0x2001));
    assert_eq!(
        reg.value_of(CodeSpace::Property, "BatteryLevel"),
        Some(properties::BATTERY_LEVEL.raw())
    );
    // Both directions agree for every base operation.
    for &(name, value) in super::codes::OPERATION_NAMES {
        assert_eq!(reg.value_of(CodeSpace::Operation, name), Some(value));
        assert_eq!(reg.name_of(CodeSpace::Operation, value), Some(name));
    }
}

#[test]
fn test_unknown_integer_passes_through() {
    let reg = CodeRegistry::base();
    assert_eq!(reg.name_of(CodeSpace::Operation, 0x9999), None);
    assert_eq!(
        reg.resolve(CodeSpace::Operation, CodeRef::Value(0x9999))
            .unwrap(),
        0x9999
    );
    assert_eq!(reg.describe(CodeSpace::Operation, 0x9999), "0x9999");
}

#[test]
fn test_unknown_name_is_a_usage_fault() {
    let reg = CodeRegistry::base();
    let err = reg
        .resolve(CodeSpace::Property, CodeRef::Name("NoSuchProperty"))
        .unwrap_err();
    assert!(matches!(err, PtpError::UnknownName { name, .. } if name == "NoSuchProperty"));
}

#[test]
fn test_overlay_entries_coexist_with_base() {
    let reg = CodeRegistry::builder().overlay(&OverlayA).build();
    // Base entries untouched.
    assert_eq!(
        reg.value_of(CodeSpace::Operation, "OpenSession"),
        Some(operations::OPEN_SESSION.raw())
    );
    // Overlay entries resolvable both ways.
    assert_eq!(reg.value_of(CodeSpace::Operation, "WarmShutter"), Some(0x9101));
    assert_eq!(reg.name_of(CodeSpace::Property, 0xD101), Some("ShutterCount"));
    assert_eq!(reg.overlay_names(), &["A"]);
}

#[test]
fn test_overlay_precedence_last_applied_wins() {
    let reg = CodeRegistry::builder()
        .overlay(&OverlayA)
        .overlay(&OverlayB)
        .build();

    // B redefined SharedOp, so the symbol resolves to B's integer.
    assert_eq!(reg.value_of(CodeSpace::Operation, "SharedOp"), Some(0x9210));
    // Symbols unique to either overlay remain resolvable.
    assert_eq!(reg.value_of(CodeSpace::Operation, "WarmShutter"), Some(0x9101));
    assert_eq!(reg.value_of(CodeSpace::Operation, "ColdShutter"), Some(0x9201));
    // A's integer for SharedOp still decodes to that name.
    assert_eq!(reg.name_of(CodeSpace::Operation, 0x9110), Some("SharedOp"));
}

#[test]
fn test_overlay_can_shadow_base_integer() {
    struct Shadow;
    impl CodeOverlay for Shadow {
        fn name(&self) -> &'static str {
            "Shadow"
        }
        fn entries(&self, space: CodeSpace) -> &'static [(&'static str, u16)] {
            match space {
                CodeSpace::Operation => &[("FancyCapture", 0x100E)],
                _ => &[],
            }
        }
    }

    let reg = CodeRegistry::builder().overlay(&Shadow).build();
    // Overlay order determines which name wins the integer.
    assert_eq!(reg.name_of(CodeSpace::Operation, 0x100E), Some("FancyCapture"));
    // The base symbol still encodes to the same integer.
    assert_eq!(reg.value_of(CodeSpace::Operation, "InitiateCapture"), Some(0x100E));
}

#[test]
fn test_describe_known_code() {
    let reg = CodeRegistry::base();
    assert_eq!(
        reg.describe(CodeSpace::Response, 0x2001),
        "OK (0x2001)"
    );
}

#[test]
fn test_extension_resolution() {
    let reg = CodeRegistry::base();
    assert_eq!(
        reg.resolve_extension(ExtensionRef::Name("Canon")).unwrap(),
        0x0000_000B
    );
    assert_eq!(
        reg.resolve_extension(ExtensionRef::Value(0x42)).unwrap(),
        0x42
    );
    assert!(reg.resolve_extension(ExtensionRef::Name("Nokia")).is_err());
    assert_eq!(
        CodeRegistry::extension_name(VendorExtensionId(0x0000_000A)),
        Some("Nikon")
    );
}

#[test]
fn test_datatype_space_is_composed() {
    let reg = CodeRegistry::base();
    assert_eq!(reg.value_of(CodeSpace::DataType, "UInt8"), Some(0x0002));
    assert_eq!(reg.name_of(CodeSpace::DataType, 0xFFFF), Some("String"));
}
