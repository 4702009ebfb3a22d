//! Landing and fallback screens

use crate::api::endpoints::DEVDAY_ATTENDEE_TICKET;
use crate::app::AppState;
use crate::route::Route;
use crate::ui::components::{Button, Container, ContainerBody, ContainerHeader, Footer};
use dioxus::prelude::*;

#[component]
pub fn Landing() -> Element {
    let app_state = use_context::<AppState>();
    let signed_in = app_state.session.read().is_authenticated();
    let nav = navigator();

    rsx! {
        Container {
            ContainerHeader {
                h1 { class: "font-bold text-2xl tracking-tight", "DevDay Challenge" }
            }
            ContainerBody {
                class: "p-6 gap-3",

                p {
                    class: "text-[var(--text-secondary)] mb-4",
                    "{DEVDAY_ATTENDEE_TICKET}를 걸고 챌린지에 참여하세요."
                }

                Button {
                    label: "마이페이지",
                    class: "w-full py-3".to_string(),
                    onclick: move |_| {
                        nav.push(Route::MyPage {});
                    },
                }
                Button {
                    label: "설정",
                    color: "secondary".to_string(),
                    fill: false,
                    class: "w-full py-3".to_string(),
                    disabled: !signed_in,
                    onclick: move |_| {
                        nav.push(Route::Settings {});
                    },
                }

                if !signed_in {
                    p {
                        class: "text-sm text-[var(--text-tertiary)]",
                        "설정은 로그인 후 이용할 수 있습니다."
                    }
                }
            }
            Footer {}
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    let nav = navigator();
    tracing::debug!("No screen for /{}", path);

    rsx! {
        Container {
            ContainerBody {
                class: "p-6 gap-4 items-center justify-center text-center",
                h1 { class: "text-xl font-semibold", "페이지를 찾을 수 없습니다" }
                p { class: "text-sm text-[var(--text-tertiary)] break-all", "/{path}" }
                Button {
                    label: "홈으로",
                    onclick: move |_| {
                        nav.replace(Route::Landing {});
                    },
                }
            }
        }
    }
}
