//! Tag-length-value encoding of payload fields.

use crate::error::Error;

/// Longest value the two digit decimal length prefix can describe.
pub const MAX_VALUE_LEN: usize = 99;

/// EMV tags used by a static payload, in the order they are emitted.
pub(crate) mod tag {
    pub const PAYLOAD_FORMAT: &str = "00";
    pub const INITIATION_METHOD: &str = "01";
    pub const MERCHANT_ACCOUNT_INFO: &str = "26";
    pub const MERCHANT_CATEGORY_CODE: &str = "52";
    pub const CURRENCY: &str = "53";
    pub const AMOUNT: &str = "54";
    pub const COUNTRY_CODE: &str = "58";
    pub const MERCHANT_NAME: &str = "59";
    pub const MERCHANT_CITY: &str = "60";
    pub const ADDITIONAL_DATA: &str = "62";
    pub const CHECKSUM: &str = "63";

    // sub-tags of MERCHANT_ACCOUNT_INFO
    pub const ACCOUNT_GUI: &str = "00";
    pub const ACCOUNT_KEY: &str = "01";

    // sub-tag of ADDITIONAL_DATA
    pub const REFERENCE_LABEL: &str = "05";
}

/// Encode a single field as tag, zero padded two digit length, value.
///
/// Composite fields encode their children first and pass the concatenation as
/// `value`, so the 99 character ceiling applies at every nesting level.
pub(crate) fn encode(tag: &str, value: &str) -> Result<String, Error> {
    let len = value.len();
    if len > MAX_VALUE_LEN {
        return Err(Error::FieldTooLong {
            tag: tag.to_string(),
            len,
        });
    }
    Ok(format!("{tag}{len:02}{value}"))
}

/// Split a concatenation of encoded fields back into (tag, value) pairs.
///
/// Panics on malformed input, only suitable for asserting on generated
/// payloads.
#[cfg(test)]
pub(crate) fn walk(encoded: &str) -> Vec<(String, String)> {
    let mut fields = vec![];
    let mut rest = encoded;
    while !rest.is_empty() {
        let (tag, after) = rest.split_at(2);
        let (len, after) = after.split_at(2);
        let len: usize = len.parse().unwrap();
        let (value, after) = after.split_at(len);
        fields.push((tag.to_string(), value.to_string()));
        rest = after;
    }
    fields
}
