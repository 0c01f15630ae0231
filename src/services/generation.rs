use anyhow::Result;
use tracing::{debug, info};

use qrglass_api::client::QrApiClient;
use qrglass_api::compose::{self, ComposedImage};
use qrglass_api::request::GenerationRequest;

pub trait ClientFactory {
    fn new_client(&self) -> QrApiClient;
}
pub struct DefaultClientFactory;
impl ClientFactory for DefaultClientFactory {
    fn new_client(&self) -> QrApiClient {
        qrglass_api::get_client()
    }
}

/// Runs one generation end to end: derive the badge, fetch the raw QR bitmap,
/// compose the styled card. Exactly one generation runs per call, awaited
/// sequentially, so there is never a second composition in flight.
pub struct GenerationService {
    client_factory: Box<dyn ClientFactory>,
}

impl GenerationService {
    pub fn new(client_factory: Box<dyn ClientFactory>) -> Self {
        Self { client_factory }
    }

    pub fn with_defaults() -> Self {
        Self::new(Box::new(DefaultClientFactory))
    }

    pub async fn generate(&self, request: &GenerationRequest) -> Result<ComposedImage> {
        let badge = request.badge_text();
        if !badge.is_empty() {
            debug!(badge = badge.as_str(), "derived badge text");
        }

        let client = self.client_factory.new_client();
        info!("Fetching QR bitmap ({0}×{0}) ...", request.api_size());
        let bitmap = client
            .fetch_qr(request.text().as_str(), request.api_size())
            .await?;

        info!("Composing styled card ...");
        let composed = compose::compose(&bitmap, &badge, request)?;
        Ok(composed)
    }
}
