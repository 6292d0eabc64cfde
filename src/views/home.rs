use crate::ui::AppPage;
use dioxus::prelude::*;

const ABOUT_ID: &str = "about";
/// Share of the about section that must be on screen before it fades in.
const REVEAL_THRESHOLD: f64 = 0.2;

/// Script that answers `true` once the element with `id` scrolls into view.
/// Answers right away if the element or `IntersectionObserver` is missing.
fn reveal_script(id: &str, threshold: f64) -> String {
    format!(
        r#"const el = document.getElementById("{id}");
if (!el || !("IntersectionObserver" in window)) {{
    dioxus.send(true);
}} else {{
    const observer = new IntersectionObserver((entries) => {{
        if (entries.some((entry) => entry.isIntersecting)) {{
            observer.disconnect();
            dioxus.send(true);
        }}
    }}, {{ threshold: {threshold} }});
    observer.observe(el);
}}"#
    )
}

/// Whether to reveal after the observer answered. A failed script reveals anyway.
fn reveal_on<E: std::fmt::Debug>(answer: Result<bool, E>) -> bool {
    match answer {
        Ok(seen) => seen,
        Err(err) => {
            tracing::debug!("scroll observer unavailable, revealing: {:?}", err);
            true
        }
    }
}

struct Feature {
    title: &'static str,
    body: &'static str,
}

const FEATURES: &[Feature] = &[
    Feature {
        title: "Nhanh chóng",
        body: "Nhận câu trả lời ngay lập tức, không cần chờ đợi.",
    },
    Feature {
        title: "Chính xác",
        body: "Dữ liệu được huấn luyện từ các nguồn văn bản pháp luật chính thống.",
    },
    Feature {
        title: "Dễ tiếp cận",
        body: "Giao diện thân thiện, giúp mọi người đều có thể sử dụng.",
    },
];

#[component]
pub fn HomeView(mut page: Signal<AppPage>) -> Element {
    rsx! {
        section { class: "homepage-section",
            div { class: "homepage-content",
                p { class: "eyebrow-text", "TRỢ LÝ PHÁP LÝ AI DÀNH CHO NGƯỜI VIỆT" }
                h1 { "LegalTalk xin chào!" }
                p { class: "description",
                    "Nền tảng ứng dụng chuyên biệt hỗ trợ người Việt Nam tiếp cận các vấn đề "
                    "thủ tục hành chính và pháp lý trong lĩnh vực y tế công cộng."
                }
                button {
                    class: "cta-button",
                    r#type: "button",
                    onclick: move |_| page.set(AppPage::Chat),
                    span { "Bắt đầu trò chuyện" }
                    svg {
                        width: "20",
                        height: "20",
                        view_box: "0 0 24 24",
                        fill: "none",
                        path {
                            d: "M5 12H19M19 12L12 5M19 12L12 19",
                            stroke: "currentColor",
                            stroke_width: "2",
                            stroke_linecap: "round",
                            stroke_linejoin: "round",
                        }
                    }
                }
            }
        }
        AboutSection {}
    }
}

/// Fades in once, the first time it scrolls into view.
#[component]
fn AboutSection() -> Element {
    let mut visible = use_signal(|| false);
    let class = if visible() {
        "about-section is-visible"
    } else {
        "about-section"
    };

    rsx! {
        section {
            id: ABOUT_ID,
            class: class,
            onmounted: move |_| async move {
                if visible() {
                    return;
                }
                let mut observer = document::eval(&reveal_script(ABOUT_ID, REVEAL_THRESHOLD));
                if reveal_on(observer.recv::<bool>().await) {
                    visible.set(true);
                }
            },
            div { class: "about-container",
                h2 { "Về LegalTalk" }
                p { class: "about-subtitle",
                    "Một trợ lý ảo thông minh, giúp bạn giải đáp các thắc mắc pháp lý "
                    "trong lĩnh vực y tế một cách nhanh chóng và tin cậy."
                }
                div { class: "features-grid",
                    for feature in FEATURES {
                        div { class: "feature-card", key: "{feature.title}",
                            h3 { "{feature.title}" }
                            p { "{feature.body}" }
                        }
                    }
                }
            }
        }
    }
}
