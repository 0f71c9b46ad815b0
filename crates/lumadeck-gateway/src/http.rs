//! HTTP/JSON implementation of the light service boundary

use std::time::Duration;

use lumadeck_core::prelude::*;
use lumadeck_core::{DeviceEntry, DeviceInfo, DeviceStatus, Rgb};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

use crate::gateway::DeviceGateway;
use crate::protocol;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Basic-auth user name. The service only checks the password.
const AUTH_USER: &str = "lumadeck";

/// Characters left as-is in query values, matching `encodeURIComponent`
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Connection settings for [`HttpGateway`]
#[derive(Debug, Clone)]
pub struct HttpGatewayConfig {
    /// Service root, e.g. `http://192.168.1.20:8080`
    pub base_url: String,
    /// Password for HTTP basic auth, if the service requires one
    pub password: Option<String>,
    /// Per-request timeout. A request that outlives it fails as a transport error.
    pub timeout: Duration,
}

impl Default for HttpGatewayConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            password: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Talks to the light service over HTTP
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: Url,
    password: Option<String>,
}

impl HttpGateway {
    pub fn new(config: HttpGatewayConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| Error::config(format!("invalid gateway URL {:?}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::config(format!(
                "gateway URL {:?} cannot be used as a base",
                config.base_url
            )));
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        info!("Light service at {}", base_url);

        Ok(Self {
            client,
            base_url,
            password: config.password.filter(|p| !p.is_empty()),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build an endpoint URL with percent-encoded query parameters
    pub fn endpoint(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = self
            .base_url
            .join(path)
            .map_err(|e| Error::config(format!("invalid endpoint {:?}: {}", path, e)))?;

        if !params.is_empty() {
            let query = params
                .iter()
                .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
                .collect::<Vec<_>>()
                .join("&");
            url.set_query(Some(&query));
        }

        Ok(url)
    }

    /// Issue a GET and run the body through the service's error channel
    async fn call(&self, url: Url, device_id: Option<&str>) -> Result<serde_json::Value> {
        debug!("GET {}", url);

        let mut request = self.client.get(url.clone());
        if let Some(ref password) = self.password {
            request = request.basic_auth(AUTH_USER, Some(password));
        }

        let response = request.send().await.map_err(transport_error)?;
        let http_status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        protocol::parse_body(http_status, &body, device_id).inspect_err(|e| {
            warn!("{} failed: {}", url.path(), e);
        })
    }

    #[instrument(level = "debug", skip(self, params))]
    async fn status_call(
        &self,
        path: &str,
        id: &str,
        params: &[(&str, String)],
    ) -> Result<DeviceStatus> {
        let mut all = vec![("id", id.to_string())];
        all.extend_from_slice(params);
        let url = self.endpoint(path, &all)?;
        protocol::decode_status(self.call(url, Some(id)).await?)
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        Error::transport("request timed out")
    } else if e.is_connect() {
        Error::transport(format!("could not connect: {}", e))
    } else {
        Error::transport(e.to_string())
    }
}

impl DeviceGateway for HttpGateway {
    async fn list_devices(&self) -> Result<Vec<DeviceInfo>> {
        let url = self.endpoint("/api/devices", &[])?;
        let entries = protocol::decode_roster(self.call(url, None).await?)?;
        Ok(entries.into_iter().map(|entry| entry.info).collect())
    }

    async fn list_devices_with_status(&self) -> Result<Vec<DeviceEntry>> {
        let url = self.endpoint("/api/devices", &[("update_status", "1".to_string())])?;
        protocol::decode_roster(self.call(url, None).await?)
    }

    async fn get_status(&self, id: &str) -> Result<DeviceStatus> {
        self.status_call("/api/device/status", id, &[]).await
    }

    async fn set_on_off(&self, id: &str, on: bool) -> Result<DeviceStatus> {
        let on = if on { "1" } else { "0" };
        self.status_call("/api/device/set_on", id, &[("on", on.to_string())])
            .await
    }

    async fn set_brightness(&self, id: &str, brightness: u8) -> Result<DeviceStatus> {
        self.status_call(
            "/api/device/set_brightness",
            id,
            &[("brightness", brightness.to_string())],
        )
        .await
    }

    async fn set_tone(&self, id: &str, tone: u8) -> Result<DeviceStatus> {
        self.status_call(
            "/api/device/set_color_tone",
            id,
            &[("color_tone", tone.to_string())],
        )
        .await
    }

    async fn set_rgb(&self, id: &str, rgb: Rgb) -> Result<DeviceStatus> {
        self.status_call(
            "/api/device/set_rgb",
            id,
            &[
                ("r", rgb.r.to_string()),
                ("g", rgb.g.to_string()),
                ("b", rgb.b.to_string()),
            ],
        )
        .await
    }
}
