use base64::engine::general_purpose;

use crate::error::Error;

/// Convert the given payload in a string representing a QR code to be consumed
/// from a terminal
pub fn payload_to_text_qr(payload: &str) -> Result<String, Error> {
    let qr_code = qr_code::QrCode::new(payload).map_err(|_| Error::QrEncoding)?;
    Ok(qr_code.to_string(true, 3))
}

/// Convert the given payload to an image uri
///
/// The image format is monocromatic bitmap, encoded in base64 in the uri.
///
/// Without `pixel_per_module` the default is no border, and 1 pixel per module,
/// to be used for example in html:
/// `style="image-rendering: pixelated; border: 20px solid white;"`
pub fn payload_to_uri_qr(payload: &str, pixel_per_module: Option<u8>) -> Result<String, Error> {
    let qr_code = qr_code::QrCode::new(payload).map_err(|_| Error::QrEncoding)?;
    let mut bmp = qr_code.to_bmp();
    if let Some(pixel_per_module) = pixel_per_module {
        bmp = bmp
            .add_white_border(1)
            .map_err(|_| Error::QrEncoding)?
            .mul(pixel_per_module)
            .map_err(|_| Error::QrEncoding)?;
    }
    let mut enc = base64::write::EncoderWriter::new(Vec::new(), &general_purpose::STANDARD);

    bmp.write(&mut enc).map_err(|_| Error::QrEncoding)?;
    let delegate = enc.finish()?;

    let base64 = String::from_utf8_lossy(&delegate);
    Ok(format!("data:image/bmp;base64,{}", base64))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PixCode;

    fn payload() -> String {
        PixCode::new("user@example.com", "JOAO DA SILVA", "SAO PAULO")
            .payload()
            .unwrap()
    }

    #[test]
    fn test_payload_to_text_qr() {
        let text_qr = payload_to_text_qr(&payload()).unwrap();
        assert!(text_qr.contains('█'));
        // stable rendering for the same payload
        assert_eq!(text_qr, payload_to_text_qr(&payload()).unwrap());
    }

    #[test]
    fn test_payload_to_uri_qr() {
        let uri_qr = payload_to_uri_qr(&payload(), None).unwrap();
        // "Qk" is the base64 encoding of the bitmap magic "BM"
        assert!(uri_qr.starts_with("data:image/bmp;base64,Qk"));

        let bigger = payload_to_uri_qr(&payload(), Some(4)).unwrap();
        assert!(bigger.starts_with("data:image/bmp;base64,Qk"));
        assert!(bigger.len() > uri_qr.len());
    }
}
