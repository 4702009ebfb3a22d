use dioxus::prelude::*;

/// Screen title with a back button
#[component]
pub fn ReturnArrow(#[props(into)] title: String) -> Element {
    let nav = navigator();

    rsx! {
        div {
            class: "flex items-center gap-3",
            button {
                r#type: "button",
                class: "p-2 rounded-full hover:bg-[var(--bg-hover)] text-[var(--text-secondary)] transition-colors",
                title: "뒤로",
                onclick: move |_| nav.go_back(),
                svg { width: "20", height: "20", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M15 18l-6-6 6-6" } }
            }
            h1 { class: "font-medium text-2xl", "{title}" }
        }
    }
}
