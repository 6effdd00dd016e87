//! Pinnacle client implementation.
//!
//! Provides the main entry point for interacting with the Pinnacle API
//! and for processing inbound webhook deliveries.

use crate::auth::AuthManager;
use crate::config::PinnacleConfig;
use crate::errors::PinnacleResult;
use crate::services::files::{FilesService, FilesServiceTrait};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::webhooks::WebhookVerifier;
use std::sync::Arc;

/// Main Pinnacle client
pub struct PinnacleClient {
    config: Arc<PinnacleConfig>,
    files_service: FilesService,
    webhook_verifier: WebhookVerifier,
}

impl PinnacleClient {
    /// Create a new client with the given configuration
    pub fn new(config: PinnacleConfig) -> PinnacleResult<Self> {
        let transport = Arc::new(ReqwestTransport::new(config.timeout)?);
        Self::with_transport(config, transport)
    }

    /// Create a client with a custom transport
    pub fn with_transport(
        config: PinnacleConfig,
        transport: Arc<dyn HttpTransport>,
    ) -> PinnacleResult<Self> {
        let config = Arc::new(config);
        let auth = AuthManager::new(config.clone());
        let base_url = config.build_url("");

        let files_service = FilesService::new(transport, auth, base_url);
        let webhook_verifier = WebhookVerifier::from_config(&config);

        Ok(Self {
            config,
            files_service,
            webhook_verifier,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &PinnacleConfig {
        &self.config
    }

    /// Get the files service
    pub fn files(&self) -> &dyn FilesServiceTrait {
        &self.files_service
    }

    /// Get the webhook verifier, configured with this client's signing
    /// secret
    pub fn webhooks(&self) -> &WebhookVerifier {
        &self.webhook_verifier
    }
}

impl std::fmt::Debug for PinnacleClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PinnacleClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
