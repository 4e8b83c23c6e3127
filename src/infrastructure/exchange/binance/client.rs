use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use reqwest::Client;
use std::fmt;
use url::{form_urlencoded, Url};

use crate::config_loader::ExchangeConfig;
use crate::domain::constants::*;
use crate::domain::errors::OrderError;
use crate::domain::model::order::VenueOrderParams;
use crate::domain::model::order_result::OrderResult;
use crate::domain::traits::OrderGateway;
use crate::infrastructure::exchange::binance::parsers::BinanceParser;
use crate::infrastructure::exchange::binance::signer::BinanceSigner;

#[derive(Clone, PartialEq, Eq)]
pub struct BinanceKeys {
    pub api_key: String,
    pub api_secret: String,
}

// Keep the secret out of logs
impl fmt::Debug for BinanceKeys {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinanceKeys")
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

/// Signed REST client for the USDⓈ-M futures order endpoint
pub struct BinanceFuturesClient {
    http: Client,
    base_url: Url,
    keys: BinanceKeys,
    signer: BinanceSigner,
    recv_window_ms: u64,
}

impl BinanceFuturesClient {
    pub fn new(keys: BinanceKeys, config: &ExchangeConfig) -> Result<Self, OrderError> {
        if keys.api_key.is_empty() || keys.api_secret.is_empty() {
            return Err(OrderError::Configuration(
                "API key and secret cannot be empty".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            OrderError::Configuration(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;

        // Timeout comes from config; no retries anywhere in this client
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| OrderError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        let signer = BinanceSigner::new(&keys.api_secret);

        Ok(Self {
            http,
            base_url,
            keys,
            signer,
            recv_window_ms: config.recv_window_ms,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Connectivity check against the unauthenticated ping endpoint
    pub async fn ping(&self) -> Result<(), OrderError> {
        let url = self.endpoint(PING_PATH)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(OrderError::Transport(format!(
                "Ping returned HTTP {}: {}",
                status.as_u16(),
                body.trim()
            )))
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, OrderError> {
        self.base_url
            .join(path)
            .map_err(|e| OrderError::Configuration(format!("Invalid endpoint '{}': {}", path, e)))
    }

    /// Builds `params&recvWindow=..&timestamp=..&signature=..`.
    /// The signature covers everything before it, byte for byte.
    fn signed_query(&self, params: &VenueOrderParams, timestamp_ms: i64) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params.iter() {
            serializer.append_pair(key, value);
        }
        serializer.append_pair("recvWindow", &self.recv_window_ms.to_string());
        serializer.append_pair("timestamp", &timestamp_ms.to_string());
        let query = serializer.finish();

        let signature = self.signer.sign(&query);
        format!("{}&signature={}", query, signature)
    }
}

#[async_trait]
impl OrderGateway for BinanceFuturesClient {
    async fn place_order(&self, params: &VenueOrderParams) -> Result<OrderResult, OrderError> {
        let mut url = self.endpoint(ORDER_PATH)?;
        let query = self.signed_query(params, Utc::now().timestamp_millis());
        url.set_query(Some(&query));

        debug!("POST {} ({} params)", ORDER_PATH, params.len());

        let response = self
            .http
            .post(url)
            .header(API_KEY_HEADER, &self.keys.api_key)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await?;
        debug!("Order endpoint answered HTTP {}: {}", status, body);

        BinanceParser::parse_order_response(status, &body)
    }
}
