//! Integration tests for the chat request flow
//!
//! A throwaway axum server stands in for the LegalTalk backend.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use legaltalk::api::{ChatBackend, ChatError, ChatRequest, HttpChatBackend};
use legaltalk::chat::{ChatSession, FALLBACK_REPLY, GREETING};
use legaltalk::config::AppConfig;
use legaltalk::types::{ChatMessage, Sender};
use std::sync::Arc;
use std::sync::Mutex;

#[derive(Clone, Default)]
struct Recorded {
    requests: Arc<Mutex<Vec<ChatRequest>>>,
}

impl Recorded {
    fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

async fn echo(State(rec): State<Recorded>, Json(req): Json<ChatRequest>) -> Json<serde_json::Value> {
    let reply = format!("**Trả lời:** {}", req.query);
    rec.requests.lock().unwrap().push(req);
    Json(serde_json::json!({
        "response": reply,
        "intent": "specific",
        "source_documents": ["luat-kham-benh.pdf"],
    }))
}

async fn broken(State(rec): State<Recorded>, Json(req): Json<ChatRequest>) -> (StatusCode, String) {
    rec.requests.lock().unwrap().push(req);
    (StatusCode::INTERNAL_SERVER_ERROR, "model offline".to_string())
}

async fn not_json(State(rec): State<Recorded>, Json(req): Json<ChatRequest>) -> &'static str {
    rec.requests.lock().unwrap().push(req);
    "oops"
}

async fn wrong_shape(
    State(rec): State<Recorded>,
    Json(req): Json<ChatRequest>,
) -> Json<serde_json::Value> {
    rec.requests.lock().unwrap().push(req);
    Json(serde_json::json!({ "answer": "x" }))
}

async fn spawn_backend(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn backend_with(handler: &str) -> (HttpChatBackend, Recorded) {
    let rec = Recorded::default();
    let router = match handler {
        "echo" => Router::new().route("/chat", post(echo)),
        "not_json" => Router::new().route("/chat", post(not_json)),
        "wrong_shape" => Router::new().route("/chat", post(wrong_shape)),
        _ => Router::new().route("/chat", post(broken)),
    }
    .with_state(rec.clone());
    let base = spawn_backend(router).await;
    let config = AppConfig::from_value(Some(format!("{base}/")));
    (HttpChatBackend::new(&config), rec)
}

mod http_contract {
    use super::*;

    #[tokio::test]
    async fn posts_query_and_session_id() {
        let (backend, rec) = backend_with("echo").await;

        let reply = backend
            .send(&ChatRequest::new("Giấy phép hành nghề?", "session-42"))
            .await
            .expect("echo backend should answer");

        assert_eq!(reply, "**Trả lời:** Giấy phép hành nghề?");
        let requests = rec.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].session_id, "session-42");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let (backend, _rec) = backend_with("broken").await;

        let err = backend
            .send(&ChatRequest::new("hi", "s"))
            .await
            .unwrap_err();

        match err {
            ChatError::Status { status, body } => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "model offline");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_success_body_is_a_decode_error() {
        for handler in ["not_json", "wrong_shape"] {
            let (backend, rec) = backend_with(handler).await;

            let err = backend
                .send(&ChatRequest::new("hi", "s"))
                .await
                .unwrap_err();

            assert!(
                matches!(err, ChatError::Decode(_)),
                "{handler}: expected decode error, got {err:?}"
            );
            assert_eq!(rec.count(), 1);
        }
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let backend = HttpChatBackend::with_endpoint(format!("http://{addr}/chat"));
        let err = backend.send(&ChatRequest::new("hi", "s")).await.unwrap_err();
        assert!(matches!(err, ChatError::Transport(_)));
    }
}

mod session_flow {
    use super::*;

    #[tokio::test]
    async fn one_request_per_submission_in_send_order() {
        let (backend, rec) = backend_with("echo").await;
        let mut session = ChatSession::new("session-1");

        assert!(session.submit(&backend, "Câu hỏi một").await);
        assert!(session.submit(&backend, "Câu hỏi hai").await);

        assert_eq!(rec.count(), 2);
        assert_eq!(
            session.messages(),
            &[
                ChatMessage::bot(GREETING),
                ChatMessage::user("Câu hỏi một"),
                ChatMessage::bot("**Trả lời:** Câu hỏi một"),
                ChatMessage::user("Câu hỏi hai"),
                ChatMessage::bot("**Trả lời:** Câu hỏi hai"),
            ]
        );
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn blank_input_sends_nothing() {
        let (backend, rec) = backend_with("echo").await;
        let mut session = ChatSession::new("session-1");

        assert!(!session.submit(&backend, "").await);
        assert!(!session.submit(&backend, "   \n ").await);

        assert_eq!(rec.count(), 0);
        assert_eq!(session.messages().len(), 1);
    }

    #[tokio::test]
    async fn backend_failure_appends_one_fallback() {
        let (backend, rec) = backend_with("broken").await;
        let mut session = ChatSession::new("session-1");

        assert!(session.submit(&backend, "Có ai không?").await);

        assert_eq!(rec.count(), 1);
        let tail: Vec<(Sender, &str)> = session
            .messages()
            .iter()
            .skip(1)
            .map(|m| (m.sender, m.text.as_str()))
            .collect();
        assert_eq!(
            tail,
            vec![(Sender::User, "Có ai không?"), (Sender::Bot, FALLBACK_REPLY)]
        );
        assert!(!session.is_loading());
        assert!(session.can_send("thử lại"));
    }

    #[tokio::test]
    async fn undecodable_reply_appends_one_fallback() {
        for handler in ["not_json", "wrong_shape"] {
            let (backend, rec) = backend_with(handler).await;
            let mut session = ChatSession::new("session-1");

            assert!(session.submit(&backend, "Bảo hiểm y tế?").await);

            assert_eq!(rec.count(), 1);
            assert_eq!(
                session.messages(),
                &[
                    ChatMessage::bot(GREETING),
                    ChatMessage::user("Bảo hiểm y tế?"),
                    ChatMessage::bot(FALLBACK_REPLY),
                ],
                "{handler}"
            );
            assert!(!session.is_loading());
        }
    }

    #[tokio::test]
    async fn session_id_is_sent_with_every_turn() {
        let (backend, rec) = backend_with("echo").await;
        let mut session = ChatSession::with_random_id();
        let id = session.session_id().to_string();

        session.submit(&backend, "một").await;
        session.submit(&backend, "hai").await;

        let requests = rec.requests.lock().unwrap();
        assert!(requests.iter().all(|r| r.session_id == id));
    }
}
