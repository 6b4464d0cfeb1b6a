use crate::error::AppError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Media type a file declares through its name, the way a browser reports
/// `File.type`.
pub fn declared_media_type(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

pub fn is_image_media_type(media_type: &str) -> bool {
    media_type.starts_with("image/")
}

pub fn encode_data_url(media_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", media_type, STANDARD.encode(bytes))
}

pub fn decode_data_url(data_url: &str) -> Result<(String, Vec<u8>), AppError> {
    let rest = data_url
        .strip_prefix("data:")
        .ok_or_else(|| AppError::Read("not a data URL".to_string()))?;
    let (header, body) = rest
        .split_once(',')
        .ok_or_else(|| AppError::Read("data URL has no payload".to_string()))?;
    let media_type = header
        .strip_suffix(";base64")
        .ok_or_else(|| AppError::Read("data URL is not base64 encoded".to_string()))?;
    let bytes = STANDARD
        .decode(body)
        .map_err(|e| AppError::Read(format!("invalid base64 payload: {}", e)))?;
    Ok((media_type.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declared_media_types() {
        assert_eq!(declared_media_type("federer.jpg"), "image/jpeg");
        assert_eq!(declared_media_type("kohli.PNG"), "image/png");
        assert_eq!(declared_media_type("notes.txt"), "text/plain");
        assert_eq!(declared_media_type("no_extension"), "application/octet-stream");
    }

    #[test]
    fn test_data_url_round_trip() {
        let bytes: Vec<u8> = (0..=255).collect();
        let encoded = encode_data_url("image/png", &bytes);

        assert!(encoded.starts_with("data:image/png;base64,"));
        let (media_type, decoded) = decode_data_url(&encoded).unwrap();
        assert_eq!(media_type, "image/png");
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn test_empty_payload_round_trip() {
        let encoded = encode_data_url("image/gif", &[]);
        assert_eq!(encoded, "data:image/gif;base64,");
        assert_eq!(decode_data_url(&encoded).unwrap().1, Vec::<u8>::new());
    }

    #[test]
    fn test_decode_rejects_malformed_urls() {
        assert!(decode_data_url("image/png;base64,AAAA").is_err());
        assert!(decode_data_url("data:image/png;base64").is_err());
        assert!(decode_data_url("data:image/png,AAAA").is_err());
        assert!(decode_data_url("data:image/png;base64,%%%").is_err());
    }
}
