//! Mock support bot for the chat widget.
//!
//! Sending moves the draft into the transcript immediately and returns the
//! delayed bot reply as a future for the caller to spawn. The reply is never
//! cancelled by the widget opening or closing.

#[cfg(test)]
#[path = "chat_bot_test.rs"]
mod chat_bot_test;

use std::time::Duration;

use rand::Rng;
use tracing::debug;

use crate::state::chat::{ChatState, pick_canned_reply};
use crate::state::store::StateHandle;
use crate::util::timer;

/// Key that submits the chat input, same as clicking Send.
pub const ACTIVATION_KEY: &str = "Enter";

#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    key == ACTIVATION_KEY
}

/// Result of a scheduled bot reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplyDelivery {
    Delivered,
    /// The widget was torn down before the delay elapsed.
    Detached,
}

/// Send the current draft.
///
/// Returns `None` when the draft is blank (nothing changes) or the widget is
/// gone. Otherwise the user message is already in the transcript and the
/// returned future appends one canned bot reply after `delay`.
pub fn send_draft<H, R>(chat: H, rng: &mut R, delay: Duration) -> Option<impl Future<Output = ReplyDelivery> + use<H, R>>
where
    H: StateHandle<ChatState> + 'static,
    R: Rng + ?Sized,
{
    let sent = chat.apply(|state| state.take_draft().is_some())?;
    if !sent {
        return None;
    }
    let reply = pick_canned_reply(rng);
    debug!(delay = ?delay, "chat message sent; bot reply scheduled");
    Some(deliver_reply(chat, reply, delay))
}

/// Append `reply` as a bot message once `delay` has elapsed.
pub async fn deliver_reply<H>(chat: H, reply: &'static str, delay: Duration) -> ReplyDelivery
where
    H: StateHandle<ChatState>,
{
    timer::sleep(delay).await;
    if chat.apply(|state| state.push_bot_reply(reply)).is_some() {
        debug!("bot reply delivered");
        ReplyDelivery::Delivered
    } else {
        debug!("bot reply dropped: chat torn down");
        ReplyDelivery::Detached
    }
}
