use crate::api::ChatRequest;
use crate::chat::{ChatSession, markdown_to_html};
use crate::types::Sender;
use crate::ui::submit_chat_turn;
use dioxus::events::Key;
use dioxus::prelude::*;

const MAX_INPUT_ROWS: usize = 6;

const SCROLL_TO_END: &str =
    "document.getElementById('chat-end')?.scrollIntoView({ behavior: 'smooth' });";

/// Rows for the composer so it grows with its content.
fn input_rows(text: &str) -> usize {
    let lines = text.split('\n').count();
    lines.clamp(1, MAX_INPUT_ROWS)
}

#[component]
pub fn ChatView(session: Signal<ChatSession>) -> Element {
    let turns = use_coroutine_handle::<ChatRequest>();
    let mut input = use_signal(String::new);

    use_effect(move || {
        // Re-run whenever the transcript or loading flag changes.
        let _ = session.read().messages().len();
        let _ = session.read().is_loading();
        let _ = document::eval(SCROLL_TO_END);
    });

    let send_message = use_callback(move |text: String| {
        if submit_chat_turn(session, turns, &text) {
            input.set(String::new());
        }
    });

    let snapshot = session.read();
    let loading = snapshot.is_loading();
    let can_send = snapshot.can_send(&input());
    let rows = input_rows(&input()).to_string();

    rsx! {
        div { class: "chat-page-container",
            div { class: "chat-box",
                div { class: "chat-messages",
                    for msg in snapshot.messages().iter() {
                        {match msg.sender {
                            Sender::User => rsx! {
                                div { class: "message-bubble user", "{msg.text}" }
                            },
                            Sender::Bot => rsx! {
                                div { class: "message-bubble bot",
                                    BotBubble { content: msg.text.clone() }
                                }
                            },
                        }}
                    }
                    if loading {
                        div { class: "message-bubble bot typing-indicator",
                            span {}
                            span {}
                            span {}
                        }
                    }
                    div { id: "chat-end" }
                }
                div { class: "chat-input-area",
                    textarea {
                        rows: "{rows}",
                        placeholder: "Nhập câu hỏi của bạn (Shift + Enter để xuống dòng)...",
                        value: "{input}",
                        oninput: move |ev| input.set(ev.value()),
                        onkeydown: move |ev| {
                            if ev.key() == Key::Enter && !ev.modifiers().shift() {
                                ev.prevent_default();
                                send_message.call(input());
                            }
                        },
                        disabled: loading,
                        autofocus: true,
                    }
                    button {
                        r#type: "button",
                        title: "Gửi",
                        disabled: !can_send,
                        onclick: move |_| send_message.call(input()),
                        SendIcon {}
                    }
                }
            }
        }
    }
}

#[component]
fn BotBubble(content: String) -> Element {
    let content_html = markdown_to_html(&content);
    let copy_payload = content.clone();
    let on_copy = move |_| {
        let raw = copy_payload.clone();
        spawn(async move {
            #[cfg(any(feature = "desktop", feature = "mobile"))]
            {
                match arboard::Clipboard::new() {
                    Ok(mut cb) => {
                        if let Err(err) = cb.set_text(raw) {
                            tracing::warn!("Failed to copy reply: {}", err);
                        }
                    }
                    Err(err) => tracing::warn!("Clipboard unavailable: {}", err),
                }
            }
            #[cfg(not(any(feature = "desktop", feature = "mobile")))]
            {
                let _ = raw;
            }
        });
    };

    rsx! {
        div { class: "bubble-controls",
            button { class: "action-btn", title: "Sao chép", onclick: on_copy, "Sao chép" }
        }
        div { class: "md", dangerous_inner_html: "{content_html}" }
    }
}

#[component]
fn SendIcon() -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M3.478 2.405a.75.75 0 00-.926.94l2.432 7.905H13.5a.75.75 0 010 1.5H4.984l-2.432 7.905a.75.75 0 00.926.94 60.519 60.519 0 0018.445-8.986.75.75 0 000-1.218A60.517 60.517 0 003.478 2.405z" }
        }
    }
}
