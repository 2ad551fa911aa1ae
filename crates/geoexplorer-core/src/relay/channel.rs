//! Message channel between surfaces and a running [`Relay`].

use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tracing::debug;

use geoexplorer_protocols::error::RelayError;
use geoexplorer_protocols::{RelayRequest, RelayResponse};

use super::Relay;

const CHANNEL_CAPACITY: usize = 64;

enum Envelope {
    Typed(RelayRequest),
    Raw(Value),
}

struct Call {
    envelope: Envelope,
    reply: oneshot::Sender<RelayResponse>,
}

impl Relay {
    /// Run the relay on the current tokio runtime.
    ///
    /// Each request is handled on its own task, so a slow generator call does
    /// not hold up a favorites read. The relay stops once every client has
    /// been dropped.
    pub fn spawn(self) -> RelayClient {
        let (tx, mut rx) = mpsc::channel::<Call>(CHANNEL_CAPACITY);

        tokio::spawn(async move {
            while let Some(call) = rx.recv().await {
                let relay = self.clone();
                tokio::spawn(async move {
                    let response = match call.envelope {
                        Envelope::Typed(request) => relay.dispatch(request).await,
                        Envelope::Raw(value) => relay.dispatch_value(value).await,
                    };
                    if call.reply.send(response).is_err() {
                        debug!("Relay caller went away before the response was ready");
                    }
                });
            }
            debug!("Relay channel closed");
        });

        RelayClient { tx }
    }
}

/// Cloneable handle for sending requests to a spawned [`Relay`].
#[derive(Clone)]
pub struct RelayClient {
    tx: mpsc::Sender<Call>,
}

impl RelayClient {
    /// Send a typed request and wait for its response.
    pub async fn send(&self, request: RelayRequest) -> Result<RelayResponse, RelayError> {
        self.call(Envelope::Typed(request)).await
    }

    /// Send an untyped request and wait for its response.
    pub async fn send_raw(&self, value: Value) -> Result<RelayResponse, RelayError> {
        self.call(Envelope::Raw(value)).await
    }

    async fn call(&self, envelope: Envelope) -> Result<RelayResponse, RelayError> {
        let (reply, response) = oneshot::channel();
        self.tx
            .send(Call { envelope, reply })
            .await
            .map_err(|_| RelayError::ChannelClosed)?;
        response.await.map_err(|_| RelayError::ChannelClosed)
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;
