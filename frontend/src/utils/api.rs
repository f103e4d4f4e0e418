use futures::future::LocalBoxFuture;
use futures::FutureExt;
use gloo_net::http::{Request, Response};
use gloo_net::Error as GlooError;

use crate::config;
use crate::state::contact::{ContactError, IntakeReply, LeadNotifier, LeadRequest};

/// Posts leads to the Web3Forms relay.
pub struct Web3Forms {
    endpoint: String,
}

impl Default for Web3Forms {
    fn default() -> Self {
        Self::new(config::web3forms_endpoint())
    }
}

impl Web3Forms {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.to_string(),
        }
    }

    async fn post(&self, lead: &LeadRequest) -> Result<IntakeReply, ContactError> {
        let request = Request::post(&self.endpoint)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json")
            .json(lead)
            .map_err(|e| ContactError::Decode(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ContactError::Network(e.to_string()))?;

        gloo_console::log!("Intake responded with status", response.status());
        read_reply(response).await
    }
}

async fn read_reply(response: Response) -> Result<IntakeReply, ContactError> {
    if !response.ok() {
        log::warn!("Intake returned HTTP {}", response.status());
    }
    match response.json::<IntakeReply>().await {
        Ok(reply) => Ok(reply),
        Err(GlooError::SerdeError(e)) => Err(ContactError::Decode(e.to_string())),
        Err(e) => Err(ContactError::Network(e.to_string())),
    }
}

impl LeadNotifier for Web3Forms {
    fn notify<'a>(&'a self, lead: &'a LeadRequest) -> LocalBoxFuture<'a, Result<IntakeReply, ContactError>> {
        self.post(lead).boxed_local()
    }
}
