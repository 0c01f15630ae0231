pub mod error;

use image::RgbaImage;
use reqwest::Url;
use tracing::debug;

use crate::constants::QR_API_BASE_URL;
use error::GenerateError;

/// Client for the remote QR generation endpoint.
pub struct QrApiClient {
    client: reqwest::Client,
}

impl QrApiClient {
    pub fn new() -> QrApiClient {
        QrApiClient {
            client: reqwest::Client::new(),
        }
    }

    /// Build the request URL for `text` at `pixel_size × pixel_size`, with
    /// the text percent-encoded as a query parameter.
    pub fn qr_api_url(text: &str, pixel_size: u32) -> Url {
        let mut url = Url::parse(QR_API_BASE_URL).unwrap();
        url.query_pairs_mut()
            .append_pair("size", &format!("{pixel_size}x{pixel_size}"))
            .append_pair("data", text);
        url
    }

    /// Fetch and decode the QR bitmap for `text`. A single attempt: network,
    /// HTTP, and decode failures all abort the generation.
    pub async fn fetch_qr(&self, text: &str, pixel_size: u32) -> Result<RgbaImage, GenerateError> {
        let url = Self::qr_api_url(text, pixel_size);
        debug!(%url, "fetching QR bitmap");

        let bytes = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let bitmap = image::load_from_memory(&bytes)?.to_rgba8();
        debug!(
            width = bitmap.width(),
            height = bitmap.height(),
            "decoded QR bitmap"
        );
        Ok(bitmap)
    }
}

impl Default for QrApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_targets_the_qr_service_with_a_square_size() {
        let url = QrApiClient::qr_api_url("hello", 1500);
        assert_eq!(url.host_str(), Some("api.qrserver.com"));
        assert_eq!(url.path(), "/v1/create-qr-code/");

        let size = url
            .query_pairs()
            .find(|(k, _)| k == "size")
            .map(|(_, v)| v.into_owned())
            .unwrap();
        assert_eq!(size, "1500x1500");
    }

    #[test]
    fn data_parameter_round_trips_through_encoding() {
        for text in ["hello world", "https://example.com/?a=1&b=2", "çà va"] {
            let url = QrApiClient::qr_api_url(text, 1024);
            let data = url
                .query_pairs()
                .find(|(k, _)| k == "data")
                .map(|(_, v)| v.into_owned())
                .unwrap();
            assert_eq!(data, text);
        }
    }

    #[test]
    fn reserved_characters_are_percent_encoded() {
        let url = QrApiClient::qr_api_url("a&b=c", 1024);
        let query = url.query().unwrap();
        assert!(query.contains("data=a%26b%3Dc"));
    }
}
