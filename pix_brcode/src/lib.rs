#![cfg_attr(not(test), deny(clippy::unwrap_used))]

//! Encoder for static Pix payment payloads, also known as BRCode, the EMV
//! merchant-presented QR format used by the Brazilian instant payment network:
//!
//!   * [`PixCode`] holds the payment parameters (destination key, beneficiary
//!     name and city, optional amount) and serializes them with
//!     [`PixCode::payload()`]
//!   * [`verify()`] re-checks the trailing CRC of an existing payload
//!   * [`payload_to_text_qr()`] and [`payload_to_uri_qr()`] render a payload as
//!     a QR code for a terminal or an html page
//!
//! The produced string is accepted by payer apps both as scanned QR content and
//! as "copy and paste" text.

pub mod amount;
mod crc;
mod error;
mod payload;
mod qr;
mod tlv;

pub use crate::amount::Amount;
pub use crate::crc::{checksum, crc16_ccitt_false, verify};
pub use crate::error::Error;
pub use crate::payload::{PixCode, PIX_GUI, UNSPECIFIED_LABEL};
pub use crate::qr::*;
pub use crate::tlv::MAX_VALUE_LEN;

/// Build the payload for a payment request in a single call.
///
/// Convenience over [`PixCode`] for callers that already hold every parameter.
/// A `None` amount leaves the value to be typed by the payer, a `None`
/// reference label encodes the "unspecified" placeholder.
///
/// ```
/// # use pix_brcode::build_payload;
/// let payload = build_payload("user@example.com", "JOAO DA SILVA", "SAO PAULO", None, None).unwrap();
/// assert!(payload.starts_with("000201"));
/// ```
pub fn build_payload(
    key: &str,
    merchant_name: &str,
    merchant_city: &str,
    amount: Option<Amount>,
    reference_label: Option<&str>,
) -> Result<String, Error> {
    let mut code = PixCode::new(key, merchant_name, merchant_city);
    if let Some(amount) = amount {
        code = code.with_amount(amount);
    }
    if let Some(label) = reference_label {
        code = code.with_reference_label(label);
    }
    code.payload()
}
