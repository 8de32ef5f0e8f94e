use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn style(self) -> &'static str {
        match self {
            NoticeLevel::Info => "background: #e8f1fb; color: #1d4f91; border: 1px solid #b9d3f2;",
            NoticeLevel::Warning => "background: #fff6e0; color: #7a5200; border: 1px solid #f2d48a;",
            NoticeLevel::Error => "background: #fdecec; color: #8a1c1c; border: 1px solid #f0b4b4;",
        }
    }
}

#[component]
pub fn Notice(level: NoticeLevel, message: String) -> Element {
    let level_style = level.style();

    rsx! {
        div {
            style: "padding: 10px 14px; border-radius: 6px; margin: 8px 0; {level_style}",
            "{message}"
        }
    }
}
