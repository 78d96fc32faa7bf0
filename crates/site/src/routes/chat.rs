//! Chat page handlers.
//!
//! The transcript is keyed by a per-session handle stored in the session,
//! so each visitor chats with their own copy of Lexi.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use uuid::Uuid;

use lexiops_core::ChatRole;

use crate::error::AppError;
use crate::filters;
use crate::middleware::{CurrentUser, Theme};
use crate::models::{ChatMessage, session_keys};
use crate::state::AppState;

/// One rendered chat message.
#[derive(Debug, Clone)]
pub struct MessageView {
    pub is_user: bool,
    pub content: String,
    pub time: String,
}

impl From<&ChatMessage> for MessageView {
    fn from(message: &ChatMessage) -> Self {
        Self {
            is_user: message.role == ChatRole::User,
            content: message.content.clone(),
            time: message.created_at.format("%H:%M").to_string(),
        }
    }
}

/// Chat page template.
#[derive(Template, WebTemplate)]
#[template(path = "chat.html")]
pub struct ChatTemplate {
    pub theme: &'static str,
    pub account_name: Option<String>,
    pub messages: Vec<MessageView>,
    /// True while a reply is scheduled; the page shows a typing indicator.
    pub replying: bool,
}

/// Message form data.
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub message: String,
}

/// The session's chat handle, created on first use.
async fn chat_key(session: &Session) -> Result<Uuid, AppError> {
    if let Ok(Some(key)) = session.get::<Uuid>(session_keys::CHAT_KEY).await {
        return Ok(key);
    }

    let key = Uuid::new_v4();
    session
        .insert(session_keys::CHAT_KEY, key)
        .await
        .map_err(|e| AppError::Internal(format!("session insert failed: {e}")))?;
    Ok(key)
}

/// Chat page handler.
///
/// GET /chat
#[instrument(skip(state, session, user))]
pub async fn index(
    State(state): State<AppState>,
    theme: Theme,
    session: Session,
    CurrentUser(user): CurrentUser,
) -> Result<ChatTemplate, AppError> {
    let key = chat_key(&session).await?;
    let messages = state
        .chat()
        .messages(key)
        .iter()
        .map(MessageView::from)
        .collect();

    Ok(ChatTemplate {
        theme: theme.as_str(),
        account_name: user.map(|a| a.name),
        messages,
        replying: state.chat().has_pending_reply(key),
    })
}

/// Send a message and schedule the assistant reply.
///
/// POST /chat/messages
#[instrument(skip(state, session, form))]
pub async fn send_message(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    let key = chat_key(&session).await?;
    state.chat().send(key, &form.message);
    Ok(Redirect::to("/chat").into_response())
}

/// Reset the transcript.
///
/// POST /chat/clear
#[instrument(skip(state, session))]
pub async fn clear(
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let key = chat_key(&session).await?;
    state.chat().clear(key);
    Ok(Redirect::to("/chat").into_response())
}
