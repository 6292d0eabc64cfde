use crate::storage::default_store;
use crate::theme::{theme_definition, toggle_theme};
use crate::types::ThemeMode;
use crate::ui::AppPage;
use dioxus::prelude::*;

#[component]
pub fn Navbar(mut page: Signal<AppPage>, mut theme: Signal<ThemeMode>) -> Element {
    let current = theme();
    let definition = theme_definition(current);
    let home_class = if page() == AppPage::Home {
        "nav-link active"
    } else {
        "nav-link"
    };

    rsx! {
        nav { class: "navbar",
            div { class: "navbar-container",
                button {
                    class: "navbar-logo",
                    r#type: "button",
                    onclick: move |_| page.set(AppPage::Home),
                    HeartIcon {}
                    "LegalTalk"
                }
                ul { class: "nav-menu",
                    li { class: "nav-item",
                        button {
                            class: home_class,
                            r#type: "button",
                            onclick: move |_| page.set(AppPage::Home),
                            "Trang chủ"
                        }
                    }
                }
                button {
                    class: "theme-toggle-button",
                    r#type: "button",
                    title: definition.toggle_label,
                    onclick: move |_| theme.set(toggle_theme(default_store(), theme())),
                    if matches!(current, ThemeMode::Light) {
                        MoonIcon {}
                    } else {
                        SunIcon {}
                    }
                }
            }
        }
    }
}

#[component]
fn HeartIcon() -> Element {
    rsx! {
        svg {
            class: "heart-beat-icon",
            width: "28",
            height: "28",
            view_box: "0 0 24 24",
            fill: "currentColor",
            path { d: "M12 21.35l-1.45-1.32C5.4 15.36 2 12.28 2 8.5 2 5.42 4.42 3 7.5 3c1.74 0 3.41.81 4.5 2.09C13.09 3.81 14.76 3 16.5 3 19.58 3 22 5.42 22 8.5c0 3.78-3.4 6.86-8.55 11.54L12 21.35z" }
        }
    }
}

#[component]
fn SunIcon() -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            circle { cx: "12", cy: "12", r: "5" }
            line { x1: "12", y1: "1", x2: "12", y2: "3" }
            line { x1: "12", y1: "21", x2: "12", y2: "23" }
            line { x1: "4.22", y1: "4.22", x2: "5.64", y2: "5.64" }
            line { x1: "18.36", y1: "18.36", x2: "19.78", y2: "19.78" }
            line { x1: "1", y1: "12", x2: "3", y2: "12" }
            line { x1: "21", y1: "12", x2: "23", y2: "12" }
            line { x1: "4.22", y1: "19.78", x2: "5.64", y2: "18.36" }
            line { x1: "18.36", y1: "5.64", x2: "19.78", y2: "4.22" }
        }
    }
}

#[component]
fn MoonIcon() -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            path { d: "M21 12.79A9 9 0 1 1 11.21 3 7 7 0 0 0 21 12.79z" }
        }
    }
}
