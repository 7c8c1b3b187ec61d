use sqlx::PgPool;
use storage::{
    error::Result,
    repository::{athlete::AthleteRepository, event::EventRepository, race::RaceRepository},
};
use uuid::Uuid;

pub async fn athlete_image(pool: &PgPool, id: Uuid) -> Result<Option<Vec<u8>>> {
    AthleteRepository::new(pool).image(id).await
}

pub async fn event_image(pool: &PgPool, id: Uuid) -> Result<Option<Vec<u8>>> {
    EventRepository::new(pool).image(id).await
}

pub async fn race_image(pool: &PgPool, id: Uuid) -> Result<Option<Vec<u8>>> {
    RaceRepository::new(pool).image(id).await
}

/// Guess an image MIME type from its leading bytes
pub fn sniff_content_type(bytes: &[u8]) -> &'static str {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    const JPEG: &[u8] = &[0xFF, 0xD8, 0xFF];

    if bytes.starts_with(PNG) {
        "image/png"
    } else if bytes.starts_with(JPEG) {
        "image/jpeg"
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        "image/gif"
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        "image/webp"
    } else {
        "application/octet-stream"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sniff_known_formats() {
        assert_eq!(sniff_content_type(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR"), "image/png");
        assert_eq!(sniff_content_type(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00]), "image/jpeg");
        assert_eq!(sniff_content_type(b"GIF89a\x01\x00"), "image/gif");
        assert_eq!(sniff_content_type(b"RIFF\x24\x00\x00\x00WEBPVP8 "), "image/webp");
    }

    #[test]
    fn test_sniff_unknown_falls_back() {
        assert_eq!(sniff_content_type(b""), "application/octet-stream");
        assert_eq!(sniff_content_type(b"RIFF\x24\x00"), "application/octet-stream");
        assert_eq!(sniff_content_type(b"plain text"), "application/octet-stream");
    }
}
