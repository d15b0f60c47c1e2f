use gloo_net::http::Request;
use thiserror::Error;
use crate::billing::vat_models::{VatLookupRequest, VatLookupResult};
use crate::config;

#[derive(Debug, Error)]
pub enum VatLookupError {
    #[error("network error: {0}")]
    Network(String),
    #[error("lookup returned HTTP {0}")]
    Status(u16),
    #[error("malformed lookup response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a VAT lookup. The browser uses [`HttpVatLookup`].
#[allow(async_fn_in_trait)]
pub trait VatLookup {
    async fn lookup(&self, request: &VatLookupRequest) -> Result<VatLookupResult, VatLookupError>;
}

#[derive(Clone, Debug, PartialEq)]
pub struct HttpVatLookup {
    url: String,
}

impl HttpVatLookup {
    pub fn new(base_url: &str) -> Self {
        HttpVatLookup {
            url: format!("{}{}", base_url, config::VAT_LOOKUP_PATH),
        }
    }
}

impl Default for HttpVatLookup {
    fn default() -> Self {
        Self::new(config::get_backend_url())
    }
}

impl VatLookup for HttpVatLookup {
    async fn lookup(&self, request: &VatLookupRequest) -> Result<VatLookupResult, VatLookupError> {
        let response = Request::post(&self.url)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .header("X-Requested-With", "XMLHttpRequest")
            .body(request.form_body())
            .send()
            .await
            .map_err(|e| VatLookupError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(VatLookupError::Status(response.status()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| VatLookupError::Network(e.to_string()))?;
        Ok(serde_json::from_str(&text)?)
    }
}
