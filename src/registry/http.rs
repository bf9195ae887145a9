use super::{FingerprintRegistry, RegistryError, RegistryRecord};
use crate::config::RegistrySettings;
use crate::fingerprint::Fingerprint;
use reqwest::StatusCode;
use std::time::Duration;

/// Registry reached over HTTP: `GET {base}/api/v1/fingerprints/{hex}`.
pub struct HttpRegistry {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpRegistry {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, RegistryError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn from_settings(settings: &RegistrySettings) -> Result<Option<Self>, RegistryError> {
        settings
            .base_url
            .as_deref()
            .map(|url| Self::new(url, Duration::from_secs(settings.timeout_secs)))
            .transpose()
    }

    pub fn lookup_url(&self, fingerprint: &Fingerprint) -> String {
        format!("{}/api/v1/fingerprints/{}", self.base_url, fingerprint)
    }
}

impl FingerprintRegistry for HttpRegistry {
    fn find_by_fingerprint(
        &self,
        fingerprint: &Fingerprint,
    ) -> Result<Vec<RegistryRecord>, RegistryError> {
        let url = self.lookup_url(fingerprint);
        log::debug!("Registry lookup: {}", url);

        let resp = self.client.get(&url).send()?;
        match resp.status() {
            StatusCode::NOT_FOUND => Ok(Vec::new()),
            status if status.is_success() => resp
                .json::<Vec<RegistryRecord>>()
                .map_err(|e| RegistryError::InvalidResponse(e.to_string())),
            status => Err(RegistryError::Status {
                status: status.as_u16(),
                url,
            }),
        }
    }
}
