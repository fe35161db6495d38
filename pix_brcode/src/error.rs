/// Error type for the whole crate.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Value for tag {tag} is {len} characters, the TLV length prefix holds at most 99")]
    FieldTooLong { tag: String, len: usize },

    #[error(transparent)]
    Amount(#[from] crate::amount::ParseAmountError),

    #[error("The payload does not fit in a QR code")]
    QrEncoding,

    #[error(transparent)]
    StdIOError(#[from] std::io::Error),
}
