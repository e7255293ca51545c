//! # Signed Message Parser
//!
//! Decodes the bridge wire format into a [`SignedMessage`]:
//!
//! ```text
//! version             1 byte
//! guardian_set_index  4 bytes
//! signature_count     1 byte
//! signatures          66 bytes each: index(1) r(32) s(32) recovery(1)
//! body                4+4+2+32+8+1 bytes, then payload to the end
//! ```
//!
//! All integers are big-endian. The double-Keccak digest of the body
//! bytes is computed here, once, and cached on the message.

use crate::domain::entities::{MessageBody, RecoverableSignature, SignedMessage};
use crate::domain::errors::VerificationError;
use crate::recovery::double_keccak256;
use crate::PROTOCOL_VERSION;
use sb_01_wire_codec::ByteCursor;
use shared_types::UniversalAddress;

/// Decode a raw signed message.
///
/// The payload consumes every byte after the fixed body fields, so a
/// well-formed frame can never have trailing bytes; truncation anywhere
/// surfaces as a codec underrun.
pub fn parse(data: &[u8]) -> Result<SignedMessage, VerificationError> {
    let mut cursor = ByteCursor::new(data);

    let version = cursor.take_u8()?;
    if version != PROTOCOL_VERSION {
        return Err(VerificationError::UnsupportedVersion(version));
    }

    let guardian_set_index = cursor.take_u32()?;
    let signature_count = cursor.take_u8()?;
    let mut signatures = Vec::with_capacity(signature_count as usize);
    for _ in 0..signature_count {
        signatures.push(parse_signature(&mut cursor)?);
    }

    let body_bytes = cursor.rest();
    let digest = double_keccak256(body_bytes);
    let body = parse_body(body_bytes)?;

    Ok(SignedMessage {
        version,
        guardian_set_index,
        signatures,
        body,
        digest,
    })
}

fn parse_signature(
    cursor: &mut ByteCursor<'_>,
) -> Result<RecoverableSignature, VerificationError> {
    Ok(RecoverableSignature {
        guardian_index: cursor.take_u8()?,
        r: cursor.take_array()?,
        s: cursor.take_array()?,
        recovery_id: cursor.take_u8()?,
    })
}

fn parse_body(data: &[u8]) -> Result<MessageBody, VerificationError> {
    let mut cursor = ByteCursor::new(data);

    let timestamp = cursor.take_u32()?;
    let nonce = cursor.take_u32()?;
    let emitter_chain = cursor.take_u16()?;
    let emitter_address = UniversalAddress::new(cursor.take_array()?);
    let sequence = cursor.take_u64()?;
    let consistency_level = cursor.take_u8()?;
    let payload = cursor.rest().to_vec();

    Ok(MessageBody {
        timestamp,
        nonce,
        emitter_chain,
        emitter_address,
        sequence,
        consistency_level,
        payload,
    })
}
