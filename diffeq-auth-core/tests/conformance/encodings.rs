//! Conformance: Wire Frames
//!
//! Secret, challenge and response frames are little-endian IEEE-754 and
//! preserve every bit, so a response decoded on the server verifies at
//! any positive tolerance.

use diffeq_auth_core::encoding::{
    decode_challenge, decode_response, decode_secret, encode_challenge, encode_response,
    encode_secret, from_hex, to_hex,
};
use diffeq_auth_core::{verify_response, AuthError, Engine, Variant};

use crate::{reference_challenge, REFERENCE_SECRET};

#[test]
fn conformance_reference_secret_frame() {
    let frame = encode_secret(&REFERENCE_SECRET);
    assert_eq!(to_hex(&frame), "00002040cdcc4c3f39300000");
    assert_eq!(decode_secret(&frame).unwrap(), REFERENCE_SECRET);
}

#[test]
fn conformance_decoded_response_verifies_exactly() {
    for variant in [Variant::Baseline, Variant::Hardened] {
        let engine = Engine::new(variant);
        let expected = engine.respond(&REFERENCE_SECRET, &reference_challenge()).unwrap();
        let wire = to_hex(&encode_response(&expected));
        let decoded = decode_response(&from_hex(&wire).unwrap()).unwrap();
        assert_eq!(decoded.variant(), variant);
        assert!(verify_response(&decoded, &expected, f32::MIN_POSITIVE).unwrap());
    }
}

#[test]
fn conformance_hardened_reference_response_frame() {
    let r = Engine::new(Variant::Hardened)
        .respond(&REFERENCE_SECRET, &reference_challenge())
        .unwrap();
    assert_eq!(
        to_hex(&encode_response(&r)),
        "af078840b6282cbf2c6ab93d782bec3e19b0913f57cae73f1b316a414899593f"
    );
}

#[test]
fn conformance_challenge_frame_feeds_engine() {
    let bytes = encode_challenge(&reference_challenge());
    assert_eq!(bytes.len(), 200);
    let challenge = decode_challenge(&bytes).unwrap();
    let engine = Engine::new(Variant::Baseline);
    assert_eq!(
        engine.respond(&REFERENCE_SECRET, &challenge).unwrap(),
        engine.respond(&REFERENCE_SECRET, &reference_challenge()).unwrap()
    );
}

#[test]
fn conformance_bad_frames_are_encoding_errors() {
    assert!(matches!(decode_secret(&[0u8; 13]), Err(AuthError::Encoding(_))));
    assert!(matches!(decode_challenge(&[0u8; 3]), Err(AuthError::Encoding(_))));
    assert!(matches!(decode_response(&[0u8; 24]), Err(AuthError::Encoding(_))));
    assert!(matches!(from_hex("0g"), Err(AuthError::Encoding(_))));
}
