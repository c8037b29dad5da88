use crate::api::{AskResponse, SynapseBackend};
use crate::error::ApiResult;
use crate::types::{ChatMessage, Role};

pub const CONNECTION_FAILED_MESSAGE: &str = "⚠️ Connection failed. Is the Synapse backend running?";

/// Transcript for the chat panel.
///
/// A send is split in two so the UI can render the user's message before the
/// backend answers: [`ChatState::begin_send`] appends the user message and
/// hands back the query, [`ChatState::receive`] appends the single reply.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChatState {
    messages: Vec<ChatMessage>,
    is_loading: bool,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append the user's message. Returns `None` for blank input or while a
    /// reply is still pending.
    pub fn begin_send(&mut self, text: &str) -> Option<String> {
        let query = text.trim();
        if query.is_empty() || self.is_loading {
            return None;
        }
        self.messages.push(ChatMessage::new(Role::User, query));
        self.is_loading = true;
        Some(query.to_string())
    }

    pub fn receive(&mut self, result: ApiResult<AskResponse>) {
        let reply = match result {
            Ok(response) => {
                let mut msg = ChatMessage::new(Role::Assistant, response.answer);
                msg.sources = response.sources;
                msg.hardware_flow =
                    Some(response.hardware_flow).filter(|flow| !flow.trim().is_empty());
                msg
            }
            Err(err) => {
                tracing::warn!(error = %err, "chat query failed");
                ChatMessage::new(Role::Assistant, CONNECTION_FAILED_MESSAGE)
            }
        };
        self.messages.push(reply);
        self.is_loading = false;
    }

    /// Run a full round trip against `backend`. Returns false when the input
    /// was rejected and nothing was sent.
    pub async fn submit(&mut self, backend: &dyn SynapseBackend, text: &str) -> bool {
        let Some(query) = self.begin_send(text) else {
            return false;
        };
        let result = backend.ask(&query).await;
        self.receive(result);
        true
    }
}

/// Shorten a source snippet for display.
pub fn truncate_source(source: &str, max_chars: usize) -> String {
    if source.chars().count() <= max_chars {
        return source.to_string();
    }
    let mut truncated: String = source.chars().take(max_chars).collect();
    truncated.push('…');
    truncated
}

pub fn sources_label(count: usize) -> String {
    if count == 1 {
        "1 source".to_string()
    } else {
        format!("{count} sources")
    }
}
