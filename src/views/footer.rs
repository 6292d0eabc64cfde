use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer-container",
            div { class: "footer-content",
                div { class: "footer-column",
                    h4 { "Về LegalTalk" }
                    p {
                        "Hệ thống hỗ trợ thủ tục hành chính và pháp lý trong y tế, được phát triển cho đồ án môn học "
                        strong { "CS221 - Xử lý ngôn ngữ tự nhiên" }
                        " tại "
                        strong { "trường Đại học Công nghệ Thông tin, ĐHQG-HCM" }
                        "."
                    }
                }
                div { class: "footer-column",
                    h4 { "Lưu ý" }
                    p {
                        "Thông tin do LegalTalk cung cấp chỉ mang tính tham khảo và không thay thế "
                        "cho tư vấn pháp lý chính thức."
                    }
                }
            }
            div { class: "footer-copyright",
                p { "© 2025 LegalTalk Team. All Rights Reserved." }
            }
        }
    }
}
