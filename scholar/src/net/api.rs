//! Simulated message backend.
//!
//! The site has no server, so submission resolves locally after a fixed
//! delay. The contract a real backend must keep: accept a validated
//! payload, answer success or failure, and leave the caller free to
//! restore its submit control on both arms.

use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::form::ContactMessage;

/// Round-trip delay of the simulated backend.
const SEND_DELAY_MS: u32 = 1_500;

/// Failure surface of the message backend.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SendError {
    #[error("The message service is unavailable. Please try again later.")]
    Unavailable,
}

/// Deliver a contact message.
///
/// # Errors
///
/// The simulation always succeeds after [`SEND_DELAY_MS`];
/// [`SendError::Unavailable`] is the failure arm a real transport would
/// use.
pub async fn send_message(msg: &ContactMessage) -> Result<(), SendError> {
    TimeoutFuture::new(SEND_DELAY_MS).await;

    match serde_json::to_string(msg) {
        Ok(body) => log::info!("message accepted: {body}"),
        Err(_) => log::info!("message accepted from {}", msg.email),
    }
    Ok(())
}
