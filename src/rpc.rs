//! Lightweight Solana RPC access.
//!
//! A minimal JSON-RPC client that implements only the single read this crate
//! needs (`getAccountInfo`), avoiding the heavy dependency chain of
//! solana-client.

use std::time::Duration;

use base64::Engine;
use serde::Deserialize;
use serde_json::{json, Value};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

use crate::core::{MetadataError, MetadataResult};

/// Read-only source of raw account bytes.
///
/// Absence is `Ok(None)`; transport and RPC-level failures are
/// `Err(Connection)`. Passed explicitly so the resolution flow can run
/// against a substitute in tests.
pub trait AccountReader {
    fn account_data(&self, address: &Pubkey) -> MetadataResult<Option<Vec<u8>>>;
}

impl<T: AccountReader + ?Sized> AccountReader for &T {
    fn account_data(&self, address: &Pubkey) -> MetadataResult<Option<Vec<u8>>> {
        (**self).account_data(address)
    }
}

/// Fetch the raw metadata account, treating absence as a distinct error.
pub fn fetch_metadata_account<R: AccountReader>(
    reader: &R,
    address: &Pubkey,
) -> MetadataResult<Vec<u8>> {
    reader
        .account_data(address)?
        .ok_or(MetadataError::AccountNotFound(*address))
}

/// JSON-RPC connection to a Solana node.
pub struct RpcConnection {
    url: String,
    agent: ureq::Agent,
}

/// RPC response wrapper
#[derive(Debug, Deserialize)]
struct RpcResponse {
    result: Option<Value>,
    error: Option<RpcError>,
}

/// RPC error structure
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// Account data response from RPC
#[derive(Debug, Deserialize)]
struct AccountInfo {
    data: (String, String), // (data, encoding)
}

impl RpcConnection {
    pub fn new(url: impl Into<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout_read(Duration::from_secs(30))
            .build();

        Self {
            url: url.into(),
            agent,
        }
    }

    /// RPC endpoint this connection talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make a JSON-RPC call. No retries.
    fn call(&self, method: &str, params: Value) -> MetadataResult<Value> {
        let request_body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params
        });

        debug!("RPC call: {} to {}", method, self.url);

        let response = self
            .agent
            .post(&self.url)
            .set("Content-Type", "application/json")
            .send_json(request_body)
            .map_err(|e| MetadataError::Connection(e.to_string()))?;

        let rpc_response: RpcResponse = response
            .into_json()
            .map_err(|e| MetadataError::Connection(format!("invalid RPC response: {}", e)))?;

        if let Some(error) = rpc_response.error {
            return Err(MetadataError::Connection(format!(
                "RPC error {}: {}",
                error.code, error.message
            )));
        }

        rpc_response
            .result
            .ok_or_else(|| MetadataError::Connection("no result in RPC response".to_string()))
    }
}

impl AccountReader for RpcConnection {
    fn account_data(&self, address: &Pubkey) -> MetadataResult<Option<Vec<u8>>> {
        let params = json!([
            address.to_string(),
            {
                "encoding": "base64",
                "commitment": "confirmed"
            }
        ]);

        let response = self.call("getAccountInfo", params)?;

        if response["value"].is_null() {
            return Ok(None);
        }

        let account_info: AccountInfo = serde_json::from_value(response["value"].clone())
            .map_err(|e| MetadataError::Connection(format!("invalid account response: {}", e)))?;

        if account_info.data.1 != "base64" {
            return Err(MetadataError::Connection(format!(
                "unsupported account data encoding: {}",
                account_info.data.1
            )));
        }

        let data = base64::engine::general_purpose::STANDARD
            .decode(&account_info.data.0)
            .map_err(|e| MetadataError::Connection(format!("bad account data: {}", e)))?;

        Ok(Some(data))
    }
}
