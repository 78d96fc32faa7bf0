//! Per-session chat transcripts and the deferred echo reply.
//!
//! Sending a message appends it to the transcript and schedules the canned
//! assistant reply on a timer. The timer is a real task handle, not a bare
//! `setTimeout`: superseding the pending reply or tearing the transcript
//! down aborts it, so a reply can never land after its session is gone.
//! Exactly one of completion or cancellation happens per scheduled reply.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use chrono::Utc;
use tokio::task::AbortHandle;
use uuid::Uuid;

use lexiops_core::{ChatMessageId, ChatRole};

use crate::models::ChatMessage;

/// The fixed typing delay before the assistant reply appears.
pub const REPLY_DELAY: Duration = Duration::from_millis(1500);

/// The assistant message every new transcript opens with.
const GREETING: &str = "Hello! I'm Lexi, your AI assistant. How can I help you today?";

/// One session's transcript plus its pending reply, if any.
#[derive(Debug)]
struct Transcript {
    messages: Vec<ChatMessage>,
    next_id: i32,
    pending: Option<AbortHandle>,
}

impl Transcript {
    fn new() -> Self {
        let mut transcript = Self {
            messages: Vec::new(),
            next_id: 1,
            pending: None,
        };
        transcript.push(ChatRole::Assistant, GREETING.to_string());
        transcript
    }

    fn push(&mut self, role: ChatRole, content: String) {
        self.messages.push(ChatMessage {
            id: ChatMessageId::new(self.next_id),
            role,
            content,
            created_at: Utc::now(),
        });
        self.next_id += 1;
    }

    /// Abort the pending reply task, if one is scheduled.
    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

type Transcripts = Arc<Mutex<HashMap<Uuid, Transcript>>>;

/// All chat transcripts, keyed by the session's chat handle.
#[derive(Debug)]
pub struct ChatStore {
    delay: Duration,
    transcripts: Transcripts,
}

impl Default for ChatStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatStore {
    /// Create a store with the product's reply delay.
    #[must_use]
    pub fn new() -> Self {
        Self::with_delay(REPLY_DELAY)
    }

    /// Create a store with a custom reply delay.
    #[must_use]
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            delay,
            transcripts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// The transcript for `key`, created with the greeting on first use.
    #[must_use]
    pub fn messages(&self, key: Uuid) -> Vec<ChatMessage> {
        let mut transcripts = lock(&self.transcripts);
        transcripts
            .entry(key)
            .or_insert_with(Transcript::new)
            .messages
            .clone()
    }

    /// Whether a reply is currently scheduled for `key`.
    #[must_use]
    pub fn has_pending_reply(&self, key: Uuid) -> bool {
        lock(&self.transcripts)
            .get(&key)
            .is_some_and(|t| t.pending.is_some())
    }

    /// Append a user message and schedule the assistant reply.
    ///
    /// A reply still pending from an earlier message is superseded: its
    /// timer is aborted and only the new reply will fire. Must be called
    /// from within a tokio runtime.
    pub fn send(&self, key: Uuid, content: &str) {
        let content = content.trim();
        if content.is_empty() {
            return;
        }

        let reply = format!(
            "I received your message: \"{content}\". This is a dummy response demonstrating the chat interface."
        );

        let mut transcripts = lock(&self.transcripts);
        let transcript = transcripts.entry(key).or_insert_with(Transcript::new);
        transcript.cancel_pending();
        transcript.push(ChatRole::User, content.to_string());

        let store = Arc::clone(&self.transcripts);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut transcripts = lock(&store);
            // The transcript may have been torn down while we slept.
            if let Some(transcript) = transcripts.get_mut(&key) {
                transcript.push(ChatRole::Assistant, reply);
                transcript.pending = None;
            }
        });
        transcript.pending = Some(handle.abort_handle());
    }

    /// Reset the transcript for `key` back to the greeting.
    ///
    /// Aborts a pending reply so it cannot land in the fresh transcript.
    pub fn clear(&self, key: Uuid) {
        let mut transcripts = lock(&self.transcripts);
        if let Some(transcript) = transcripts.get_mut(&key) {
            transcript.cancel_pending();
        }
        transcripts.insert(key, Transcript::new());
    }

    /// Drop the transcript for `key`, aborting any pending reply.
    pub fn teardown(&self, key: Uuid) {
        let mut transcripts = lock(&self.transcripts);
        if let Some(mut transcript) = transcripts.remove(&key) {
            transcript.cancel_pending();
        }
    }
}

fn lock(
    transcripts: &Mutex<HashMap<Uuid, Transcript>>,
) -> std::sync::MutexGuard<'_, HashMap<Uuid, Transcript>> {
    transcripts.lock().unwrap_or_else(PoisonError::into_inner)
}
