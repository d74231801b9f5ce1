//! API credential handling and request signing.
//!
//! The venue authenticates signed endpoints with an HMAC SHA256 digest
//! of the full query string, hex-encoded lowercase, plus the API key in
//! the `X-MBX-APIKEY` header.

use crate::error::{GatewayError, GatewayResult};
use aws_lc_rs::hmac;
use zeroize::ZeroizeOnDrop;

/// Execution context the credentials are resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Mainnet,
    #[default]
    Testnet,
}

impl Environment {
    /// REST base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://fapi.binance.com",
            Self::Testnet => "https://testnet.binancefuture.com",
        }
    }

    fn env_var_names(&self) -> (&'static str, &'static str) {
        match self {
            Self::Mainnet => ("FAPI_API_KEY", "FAPI_API_SECRET"),
            Self::Testnet => ("FAPI_TESTNET_API_KEY", "FAPI_TESTNET_API_SECRET"),
        }
    }
}

/// API credentials for signing requests (HMAC SHA256).
#[derive(Clone, ZeroizeOnDrop)]
pub struct Credential {
    #[zeroize(skip)]
    api_key: String,
    api_secret: Box<[u8]>,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct(stringify!(Credential))
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .finish()
    }
}

impl Credential {
    pub fn new(api_key: String, api_secret: String) -> Self {
        Self {
            api_key,
            api_secret: api_secret.into_bytes().into_boxed_slice(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Sign a message with HMAC SHA256, returning a lowercase hex digest.
    pub fn sign(&self, message: &str) -> String {
        let key = hmac::Key::new(hmac::HMAC_SHA256, &self.api_secret);
        let tag = hmac::sign(&key, message.as_bytes());
        hex::encode(tag.as_ref())
    }
}

/// Resolve credentials for an execution context.
///
/// Explicit config values win; otherwise the environment-specific
/// variables are consulted (`FAPI_API_KEY`/`FAPI_API_SECRET` for
/// mainnet, `FAPI_TESTNET_*` for testnet).
pub fn resolve_credentials(
    config_api_key: Option<String>,
    config_api_secret: Option<String>,
    environment: Environment,
) -> GatewayResult<Credential> {
    let (key_var, secret_var) = environment.env_var_names();

    let api_key = config_api_key
        .or_else(|| std::env::var(key_var).ok())
        .ok_or_else(|| {
            GatewayError::MissingCredentials(format!("{key_var} not found in config or environment"))
        })?;

    let api_secret = config_api_secret
        .or_else(|| std::env::var(secret_var).ok())
        .ok_or_else(|| {
            GatewayError::MissingCredentials(format!(
                "{secret_var} not found in config or environment"
            ))
        })?;

    Ok(Credential::new(api_key, api_secret))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Official test vectors from the venue's signature examples.
    const TEST_SECRET: &str = "NhqPtmdSJYdKjVHjA7PZj4Mge3R5YNiP1e3UZjInClVN65XAbvqqM6A7H5fATj0j";

    #[test]
    fn test_sign_matches_test_vector_simple() {
        let cred = Credential::new("test_key".to_string(), TEST_SECRET.to_string());
        let message = "timestamp=1578963600000";
        let expected = "d84e6641b1e328e7b418fff030caed655c266299c9355e36ce801ed14631eed4";

        assert_eq!(cred.sign(message), expected);
    }

    #[test]
    fn test_sign_matches_test_vector_order() {
        let cred = Credential::new("test_key".to_string(), TEST_SECRET.to_string());
        let message = "symbol=LTCBTC&side=BUY&type=LIMIT&timeInForce=GTC&quantity=1&price=0.1&recvWindow=5000&timestamp=1499827319559";
        let expected = "c8db56825ae71d6d79447849e617115f4a920fa2acdcab2b053c4b2838bd6b71";

        assert_eq!(cred.sign(message), expected);
    }

    #[test]
    fn test_debug_redacts_secret() {
        let cred = Credential::new("key".to_string(), "hunter2".to_string());
        let debug = format!("{cred:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_resolve_prefers_config_values() {
        let cred = resolve_credentials(
            Some("cfg_key".to_string()),
            Some("cfg_secret".to_string()),
            Environment::Testnet,
        )
        .unwrap();
        assert_eq!(cred.api_key(), "cfg_key");
    }

    #[test]
    fn test_environment_base_urls() {
        assert_eq!(Environment::Mainnet.base_url(), "https://fapi.binance.com");
        assert_eq!(
            Environment::Testnet.base_url(),
            "https://testnet.binancefuture.com"
        );
    }
}
