use crate::codec::CodecError;
use crate::error::PtpError;
use crate::registry::CodeSpace;

#[test]
fn test_phase_mismatch_display() {
    let err = PtpError::PhaseMismatch {
        leg: "data",
        field: "TransactionID",
        expected: 5,
        actual: 7,
    };
    let msg = err.to_string();
    assert!(msg.contains("data"));
    assert!(msg.contains("TransactionID"));
    assert!(msg.contains("0x5"));
    assert!(msg.contains("0x7"));
}

#[test]
fn test_unknown_name_display() {
    let err = PtpError::UnknownName {
        space: CodeSpace::Property,
        name: "NoSuchProp".to_string(),
    };
    assert!(err.to_string().contains("NoSuchProp"));
    assert!(err.to_string().contains("Property"));
}

#[test]
fn test_codec_error_wraps() {
    let err: PtpError = CodecError::Truncated { needed: 4, have: 2 }.into();
    assert!(matches!(err, PtpError::Codec(_)));
}

#[test]
fn test_fatality_classification() {
    assert!(
        PtpError::PhaseMismatch {
            leg: "response",
            field: "SessionID",
            expected: 1,
            actual: 2,
        }
        .is_fatal_to_connection()
    );
    assert!(PtpError::transport_msg("gone").is_fatal_to_connection());
    assert!(
        !PtpError::InvalidArgument {
            message: "bad".into()
        }
        .is_fatal_to_connection()
    );
}
