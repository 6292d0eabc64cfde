use crate::api::{ChatBackend, ChatRequest, HttpChatBackend};
use crate::chat::ChatSession;
use crate::config::AppConfig;
use crate::particles::ParticleConfig;
use crate::storage::default_store;
use crate::theme::{load_theme, theme_definition};
use crate::types::ThemeMode;
use crate::views::{ChatView, Footer, HomeView, Navbar, ParticleBackground};
use dioxus::prelude::*;
use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use std::sync::Arc;

const LEGALTALK_CSS: Asset = asset!("/assets/legaltalk.css");

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppPage {
    Home,
    Chat,
}

/// Chat backend shared through context so views never build their own client.
#[derive(Clone)]
pub struct SharedBackend(pub Arc<dyn ChatBackend>);

/// Runs chat turns in the calling component's scope.
///
/// Mount this where the session signal lives, not in the chat view: a turn
/// must finish even if the view that started it has been unmounted.
pub fn use_chat_turns(
    mut session: Signal<ChatSession>,
    backend: SharedBackend,
) -> Coroutine<ChatRequest> {
    use_coroutine(move |mut rx: UnboundedReceiver<ChatRequest>| {
        let backend = backend.clone();
        async move {
            while let Some(request) = rx.next().await {
                let result = backend.0.send(&request).await;
                session.with_mut(|s| s.finish_submit(result));
            }
        }
    })
}

/// Record the user turn and hand the request to the turn runner.
/// Returns whether anything was sent.
pub fn submit_chat_turn(
    mut session: Signal<ChatSession>,
    turns: Coroutine<ChatRequest>,
    text: &str,
) -> bool {
    let Some(request) = session.with_mut(|s| s.begin_submit(text)) else {
        return false;
    };
    turns.send(request);
    true
}

#[component]
pub fn App() -> Element {
    let backend = use_context_provider(|| {
        let config = AppConfig::from_env();
        tracing::info!("chat endpoint: {}", config.chat_endpoint());
        SharedBackend(Arc::new(HttpChatBackend::new(&config)))
    });

    let page = use_signal(|| AppPage::Home);
    let theme = use_signal(|| load_theme(default_store()));
    let session = use_signal(ChatSession::with_random_id);
    let mut pointer = use_signal(|| Option::<(f64, f64)>::None);
    use_chat_turns(session, backend);

    rsx! {
        ThemeStyles { theme }
        div {
            class: "app-root",
            onmousemove: move |ev| {
                let at = ev.client_coordinates();
                pointer.set(Some((at.x, at.y)));
            },
            onmouseleave: move |_| pointer.set(None),
            Navbar { page, theme }
            {match page() {
                AppPage::Home => rsx! {
                    ParticleBackground { config: ParticleConfig::interactive(), pointer }
                    HomeView { page }
                    Footer {}
                },
                AppPage::Chat => rsx! {
                    ParticleBackground { config: ParticleConfig::ambient(), pointer }
                    ChatView { session }
                },
            }}
        }
    }
}

#[component]
fn ThemeStyles(theme: Signal<ThemeMode>) -> Element {
    let definition = theme_definition(theme());
    rsx! {
        document::Link { rel: "stylesheet", href: LEGALTALK_CSS }
        style { dangerous_inner_html: "{definition.css}" }
    }
}
