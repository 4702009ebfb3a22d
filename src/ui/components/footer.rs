//! Bottom navigation bar

use crate::route::Route;
use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    let current = use_route::<Route>();
    let on_mypage = matches!(current, Route::MyPage {});

    rsx! {
        nav {
            class: "sticky bottom-0 w-full flex justify-around py-3 border-t border-[var(--border-subtle)] bg-[var(--bg-main)]",
            FooterLink { to: Route::Landing {}, label: "홈", active: !on_mypage }
            FooterLink { to: Route::MyPage {}, label: "마이페이지", active: on_mypage }
        }
    }
}

#[component]
fn FooterLink(to: Route, label: String, active: bool) -> Element {
    let tone = if active {
        "text-[var(--accent-primary)] font-semibold"
    } else {
        "text-[var(--text-tertiary)]"
    };

    rsx! {
        Link {
            to,
            class: "text-sm {tone}",
            "{label}"
        }
    }
}
