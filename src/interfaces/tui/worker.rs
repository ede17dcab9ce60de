//! Background request execution
//!
//! The blocking HTTP call runs on a short-lived worker thread; the outcome
//! comes back to the event loop over a channel. No cancellation: an
//! abandoned request finishes on its own and its outcome is dropped when
//! the receiver is gone.

use std::sync::Arc;
use std::thread;

use crossbeam_channel::Sender;
use tracing::{debug, warn};

use crate::api::{ShortenClient, ShortenResponse};
use crate::errors::{Result, SnaplinkError};

pub type ShortenOutcome = Result<ShortenResponse>;

/// Everything an event handler needs beyond the `App` itself, constructed
/// once at startup.
pub struct RuntimeContext {
    pub client: Arc<ShortenClient>,
    pub outcome_tx: Sender<ShortenOutcome>,
}

/// Run one shorten request on a worker thread, delivering exactly one
/// outcome message.
pub fn spawn_shorten(ctx: &RuntimeContext, url: String) {
    let client = Arc::clone(&ctx.client);
    let tx = ctx.outcome_tx.clone();

    let spawned = thread::Builder::new()
        .name("shorten-request".to_string())
        .spawn(move || {
            let outcome = client.shorten(&url);
            if tx.send(outcome).is_err() {
                debug!("ui exited before the shorten request completed");
            }
        });

    if let Err(e) = spawned {
        warn!("failed to spawn request thread: {}", e);
        let _ = ctx
            .outcome_tx
            .send(Err(SnaplinkError::network("could not start the request")));
    }
}
