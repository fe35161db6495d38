//! Assembly of the static payload string behind "copy and paste" payments and
//! their QR codes.

use crate::amount::Amount;
use crate::crc;
use crate::error::Error;
use crate::tlv::{self, tag};

/// Scheme identifier assigned to Pix by the Banco Central do Brasil, carried
/// in the merchant account block of every payload.
pub const PIX_GUI: &str = "br.gov.bcb.pix";

/// Reference label meaning "no transaction id" on the receiving side.
pub const UNSPECIFIED_LABEL: &str = "***";

/// Initiation method of a static, reusable payload. Dynamic payloads ("12")
/// reference a server side transaction and are not produced here.
const STATIC_INITIATION: &str = "11";

/// Generic merchant category, no business classification is modeled.
const CATEGORY_UNSPECIFIED: &str = "0000";

/// ISO 4217 numeric code of the only supported currency, the brazilian real.
const CURRENCY_BRL: &str = "986";

const COUNTRY_BR: &str = "BR";

const MAX_NAME_LEN: usize = 25;
const MAX_CITY_LEN: usize = 15;
const MAX_LABEL_LEN: usize = 25;

/// Parameters of a static Pix payment request.
///
/// The destination key is carried verbatim: a key that does not fit the TLV
/// length arithmetic fails [`PixCode::payload()`] with
/// [`Error::FieldTooLong`] instead of being altered. Name, city and reference
/// label are truncated to the wire format limits and never cause an error.
///
/// ```
/// # use pix_brcode::{Amount, PixCode};
/// let code = PixCode::new("user@example.com", "Joao da Silva", "Sao Paulo")
///     .with_amount(Amount::from_centavos(1250));
/// let payload = code.payload().unwrap();
/// assert!(payload.starts_with("000201"));
/// assert!(payload.contains("540512.50"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixCode {
    key: String,
    merchant_name: String,
    merchant_city: String,
    amount: Option<Amount>,
    reference_label: String,
}

impl PixCode {
    /// A request paying `key`, displayed by the payer app as `merchant_name`
    /// in `merchant_city`, with no fixed amount and no reference label.
    ///
    /// The key is opaque here: phone number, tax id, email or random key are
    /// all sent as given, validity for the payment network is on the caller.
    pub fn new(
        key: impl Into<String>,
        merchant_name: impl Into<String>,
        merchant_city: impl Into<String>,
    ) -> Self {
        Self {
            key: key.into(),
            merchant_name: merchant_name.into(),
            merchant_city: merchant_city.into(),
            amount: None,
            reference_label: UNSPECIFIED_LABEL.to_string(),
        }
    }

    /// Fix the amount the payer is asked to transfer.
    ///
    /// Without an amount the field is omitted entirely and the payer app asks
    /// for a value, an empty amount field is not the same thing to scanners.
    pub fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Attach a reference label (transaction id) for reconciliation.
    pub fn with_reference_label(mut self, label: impl Into<String>) -> Self {
        self.reference_label = label.into();
        self
    }

    /// The destination key as it will be encoded.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The fixed amount, if one was set.
    pub fn amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Serialize to the checksummed wire string.
    ///
    /// Field order is part of the wire contract: scanners assume the
    /// canonical EMV ordering even though the format is nominally
    /// positional-by-tag.
    pub fn payload(&self) -> Result<String, Error> {
        let mut out = String::with_capacity(160);
        out.push_str(&tlv::encode(tag::PAYLOAD_FORMAT, "01")?);
        out.push_str(&tlv::encode(tag::INITIATION_METHOD, STATIC_INITIATION)?);
        out.push_str(&merchant_account_info(&self.key)?);
        out.push_str(&tlv::encode(tag::MERCHANT_CATEGORY_CODE, CATEGORY_UNSPECIFIED)?);
        out.push_str(&tlv::encode(tag::CURRENCY, CURRENCY_BRL)?);
        if let Some(amount) = self.amount {
            out.push_str(&tlv::encode(tag::AMOUNT, &amount.to_string())?);
        }
        out.push_str(&tlv::encode(tag::COUNTRY_CODE, COUNTRY_BR)?);
        out.push_str(&tlv::encode(
            tag::MERCHANT_NAME,
            &truncate_upper(&self.merchant_name, MAX_NAME_LEN),
        )?);
        out.push_str(&tlv::encode(
            tag::MERCHANT_CITY,
            &truncate_upper(&self.merchant_city, MAX_CITY_LEN),
        )?);
        out.push_str(&additional_data(&self.reference_label)?);

        // the checksum covers everything so far plus its own tag and length
        out.push_str(tag::CHECKSUM);
        out.push_str("04");
        let checksum = crc::checksum(&out);
        out.push_str(&checksum);
        Ok(out)
    }
}

/// Tag 26 block identifying the scheme and the destination key.
fn merchant_account_info(key: &str) -> Result<String, Error> {
    let mut inner = tlv::encode(tag::ACCOUNT_GUI, PIX_GUI)?;
    inner.push_str(&tlv::encode(tag::ACCOUNT_KEY, key)?);
    tlv::encode(tag::MERCHANT_ACCOUNT_INFO, &inner)
}

/// Tag 62 block carrying the reference label.
fn additional_data(label: &str) -> Result<String, Error> {
    let inner = tlv::encode(tag::REFERENCE_LABEL, truncate(label, MAX_LABEL_LEN))?;
    tlv::encode(tag::ADDITIONAL_DATA, &inner)
}

fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((idx, _)) => &value[..idx],
        None => value,
    }
}

fn truncate_upper(value: &str, max_chars: usize) -> String {
    truncate(value, max_chars).to_uppercase()
}
