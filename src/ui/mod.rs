//! UI components for the challenge frontend
//!
//! This module contains all user interface components built with Dioxus.

pub mod components;
pub mod guard;
pub mod landing;
pub mod mypage;
pub mod style;

use crate::route::Route;
use dioxus::prelude::*;

/// Shell shared by every screen
#[component]
pub fn Layout() -> Element {
    rsx! {
        div {
            class: "relative flex flex-col min-h-screen w-full max-w-md mx-auto bg-[var(--bg-main)] text-[var(--text-primary)] font-sans",

            // Button variants and palette
            link { rel: "stylesheet", href: "assets/styles.css" }

            Outlet::<Route> {}
        }
    }
}
