//! Selectable list rows

use dioxus::prelude::*;

/// Row with a trailing chevron
///
/// `warning` renders the title in the danger color (logout, account deletion).
/// `fill` gives the row a tinted background.
#[component]
pub fn SelectArrow(
    #[props(into)] title: String,
    #[props(default)] warning: bool,
    #[props(default)] fill: bool,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    let tone = if warning {
        "text-[var(--text-error)]"
    } else {
        "text-[var(--text-primary)]"
    };
    let background = if fill {
        "bg-[var(--bg-active)] rounded-xl"
    } else {
        "border-b border-[var(--border-subtle)]"
    };

    rsx! {
        button {
            r#type: "button",
            class: "w-full flex items-center justify-between px-6 py-4 text-left {background}",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            span { class: "font-medium {tone}", "{title}" }
            svg { width: "16", height: "16", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M9 18l6-6-6-6" } }
        }
    }
}

/// Plain text row
#[component]
pub fn SelectOption(#[props(into)] content: String, onclick: Option<EventHandler<MouseEvent>>) -> Element {
    rsx! {
        button {
            r#type: "button",
            class: "w-full py-4 text-left text-[var(--text-secondary)] hover:text-[var(--text-primary)] transition-colors",
            onclick: move |evt| {
                if let Some(handler) = onclick {
                    handler.call(evt);
                }
            },
            "{content}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_warning_row_uses_error_tone() {
        fn app() -> Element {
            rsx! { SelectArrow { title: "회원탈퇴", warning: true } }
        }

        let html = render(app);
        assert!(html.contains("회원탈퇴"));
        assert!(html.contains("text-[var(--text-error)]"));
    }

    #[test]
    fn test_plain_row() {
        fn app() -> Element {
            rsx! { SelectOption { content: "문의하기" } }
        }

        assert!(render(app).contains("문의하기"));
    }
}
