use crate::api::{ChatBackend, ChatRequest, ChatResult};
use crate::types::ChatMessage;

pub const GREETING: &str = "Xin chào! Tôi có thể giúp gì cho bạn về các vấn đề pháp lý y tế?";

pub const FALLBACK_REPLY: &str =
    "Xin lỗi, hiện tôi không thể kết nối tới máy chủ. Vui lòng thử lại sau.";

/// Transcript and in-flight state for one app run.
///
/// Sending is split in two halves so the UI can release its borrow on the
/// session while the request is awaited: [`ChatSession::begin_submit`]
/// validates and records the user turn, [`ChatSession::finish_submit`]
/// records the reply.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatSession {
    session_id: String,
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatSession {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: vec![ChatMessage::bot(GREETING)],
            loading: false,
        }
    }

    pub fn with_random_id() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    pub fn begin_submit(&mut self, input: &str) -> Option<ChatRequest> {
        if !self.can_send(input) {
            return None;
        }

        // The bubble shows what was typed; the backend gets the trimmed query.
        self.messages.push(ChatMessage::user(input));
        self.loading = true;
        Some(ChatRequest::new(input.trim(), self.session_id.clone()))
    }

    pub fn finish_submit(&mut self, result: ChatResult<String>) {
        let text = match result {
            Ok(reply) => reply,
            Err(err) => {
                tracing::error!("chat request failed: {}", err);
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::bot(text));
        self.loading = false;
    }

    /// Run one full turn against `backend`. Returns whether a request was sent.
    pub async fn submit(&mut self, backend: &dyn ChatBackend, input: &str) -> bool {
        let Some(request) = self.begin_submit(input) else {
            return false;
        };
        let result = backend.send(&request).await;
        self.finish_submit(result);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ChatError;
    use crate::types::Sender;

    #[test]
    fn starts_with_greeting() {
        let session = ChatSession::new("s");
        assert_eq!(session.messages(), &[ChatMessage::bot(GREETING)]);
        assert!(!session.is_loading());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut session = ChatSession::new("s");
        for input in ["", "   ", "\n\t "] {
            assert!(!session.can_send(input));
            assert!(session.begin_submit(input).is_none());
        }
        assert_eq!(session.messages().len(), 1);
        assert!(!session.is_loading());
    }

    #[test]
    fn second_submit_is_rejected_while_loading() {
        let mut session = ChatSession::new("s");
        let request = session.begin_submit("  Hồ sơ cần gì?  ").unwrap();
        assert_eq!(request.query, "Hồ sơ cần gì?");
        assert_eq!(request.session_id, "s");
        assert!(session.is_loading());
        assert!(!session.can_send("another"));
        assert!(session.begin_submit("another").is_none());
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn transcript_keeps_raw_text_but_query_is_trimmed() {
        let mut session = ChatSession::new("s");
        let typed = "  Thủ tục khám bệnh\ncần những gì?\n";
        let request = session.begin_submit(typed).unwrap();
        assert_eq!(request.query, "Thủ tục khám bệnh\ncần những gì?");
        assert_eq!(session.messages()[1], ChatMessage::user(typed));
    }

    #[test]
    fn failure_appends_single_fallback() {
        let mut session = ChatSession::new("s");
        session.begin_submit("hello").unwrap();
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        session.finish_submit(Err(ChatError::Decode(err)));

        let senders: Vec<Sender> = session.messages().iter().map(|m| m.sender).collect();
        assert_eq!(senders, vec![Sender::Bot, Sender::User, Sender::Bot]);
        assert_eq!(session.messages()[2].text, FALLBACK_REPLY);
        assert!(!session.is_loading());
    }
}
