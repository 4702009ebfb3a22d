use dioxus::prelude::*;

#[component]
pub fn UserAvatar(#[props(default = 50)] width: u32, #[props(default = 50)] height: u32) -> Element {
    rsx! {
        div {
            class: "rounded-full bg-[var(--bg-active)] text-[var(--text-tertiary)] flex items-center justify-center overflow-hidden",
            style: "width: {width}px; height: {height}px;",
            svg { width: "60%", height: "60%", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", path { d: "M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2" }, circle { cx: "12", cy: "7", r: "4" } }
        }
    }
}
