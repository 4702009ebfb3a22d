use dioxus::prelude::*;

/// Full-height screen with a sticky header and a body
#[component]
pub fn Container(children: Element) -> Element {
    rsx! {
        div {
            class: "flex flex-col min-h-screen bg-[var(--bg-main)]",
            {children}
        }
    }
}

#[component]
pub fn ContainerHeader(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        header {
            class: "sticky top-0 z-10 p-4 flex items-center justify-between bg-[var(--bg-main)] {class}",
            {children}
        }
    }
}

#[component]
pub fn ContainerBody(#[props(default)] class: String, children: Element) -> Element {
    rsx! {
        section {
            class: "flex-1 flex flex-col {class}",
            {children}
        }
    }
}
