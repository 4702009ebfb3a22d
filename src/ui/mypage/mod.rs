//! My page
//!
//! Profile summary, balances and challenge status for the signed-in user.

pub mod settings;

use crate::api::endpoints::PROFILE;
use crate::api::{ApiClient, ApiError};
use crate::app::AppState;
use crate::route::Route;
use crate::ui::components::{Footer, SelectArrow, SelectOption, UserAvatar};
use dioxus::prelude::*;
use serde::Deserialize;

/// Subset of the user-service profile used here
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub nickname: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeTab {
    Joined,
    Completed,
    Leading,
}

impl ChallengeTab {
    pub const ALL: [ChallengeTab; 3] = [Self::Joined, Self::Completed, Self::Leading];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Joined => "참가중",
            Self::Completed => "완료",
            Self::Leading => "리더",
        }
    }
}

/// Format a won amount with thousands separators for the given locale.
///
/// Korean locales put the unit after the number (`12,000원`), others use the
/// currency sign (`₩12,000`).
pub fn format_won(amount: i64, locale: &str) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    let sign = if amount < 0 { "-" } else { "" };
    if locale.starts_with("ko") {
        format!("{sign}{grouped}원")
    } else {
        format!("{sign}₩{grouped}")
    }
}

async fn fetch_profile(api: &ApiClient, token: &str) -> Result<UserProfile, ApiError> {
    let path = PROFILE.path()?;
    api.get_json::<UserProfile>(&path, Some(token)).await
}

#[component]
pub fn MyPage() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session;
    let api = app_state.api.clone();
    let locale = app_state.config.read().locale.clone();
    let mut active_tab = use_signal(|| ChallengeTab::Joined);
    let nav = navigator();

    let profile = use_resource(move || {
        let api = api.clone();
        let token = session.read().authorization().map(str::to_string);
        async move {
            let (Some(api), Some(token)) = (api, token) else {
                return None;
            };
            match fetch_profile(&api, &token).await {
                Ok(profile) => Some(profile),
                Err(e) => {
                    tracing::warn!("Failed to load profile: {}", e);
                    None
                }
            }
        }
    });

    let nickname = profile
        .cloned()
        .flatten()
        .and_then(|profile| profile.nickname)
        .unwrap_or_else(|| "nickname".to_string());

    rsx! {
        div {
            class: "flex flex-col min-h-screen",

            // Header
            div {
                class: "sticky top-0 z-10 p-4 flex justify-between items-center bg-[var(--bg-main)]",
                h1 { class: "font-medium text-2xl", "마이페이지" }
                button {
                    r#type: "button",
                    class: "rounded-full bg-purple-300 w-10 h-10 flex justify-center items-center",
                    title: "설정",
                    onclick: move |_| {
                        nav.push(Route::Settings {});
                    },
                    svg { width: "22", height: "22", view_box: "0 0 24 24", fill: "none", stroke: "currentColor", stroke_width: "2", stroke_linecap: "round", stroke_linejoin: "round", circle { cx: "12", cy: "12", r: "3" }, path { d: "M19.4 15a1.65 1.65 0 0 0 .33 1.82l.06.06a2 2 0 0 1-2.83 2.83l-.06-.06a1.65 1.65 0 0 0-1.82-.33 1.65 1.65 0 0 0-1 1.51V21a2 2 0 0 1-4 0v-.09A1.65 1.65 0 0 0 9 19.4a1.65 1.65 0 0 0-1.82.33l-.06.06a2 2 0 0 1-2.83-2.83l.06-.06a1.65 1.65 0 0 0 .33-1.82 1.65 1.65 0 0 0-1.51-1H3a2 2 0 0 1 0-4h.09A1.65 1.65 0 0 0 4.6 9a1.65 1.65 0 0 0-.33-1.82l-.06-.06a2 2 0 0 1 2.83-2.83l.06.06a1.65 1.65 0 0 0 1.82.33H9a1.65 1.65 0 0 0 1-1.51V3a2 2 0 0 1 4 0v.09a1.65 1.65 0 0 0 1 1.51 1.65 1.65 0 0 0 1.82-.33l.06-.06a2 2 0 0 1 2.83 2.83l-.06.06a1.65 1.65 0 0 0-.33 1.82V9a1.65 1.65 0 0 0 1.51 1H21a2 2 0 0 1 0 4h-.09a1.65 1.65 0 0 0-1.51 1z" } }
                }
            }

            // Profile and balances
            div {
                class: "p-4 relative",
                div {
                    class: "absolute top-5 left-7",
                    UserAvatar { width: 50, height: 50 }
                }
                SelectArrow { title: nickname, fill: true }
                div {
                    class: "px-6 py-8",
                    BalanceRow { icon: "💰", label: "예치금", amount: 0, locale: locale.clone() }
                    BalanceRow { icon: "🏆", label: "상금", amount: 0, locale }
                }
            }

            // Challenge status
            div {
                p { class: "px-4", "챌린지 현황" }
                hr { class: "w-full" }
                div {
                    class: "flex justify-between my-5 mx-12",
                    for tab in ChallengeTab::ALL {
                        button {
                            key: "{tab.label()}",
                            r#type: "button",
                            class: if active_tab() == tab { "font-semibold text-[var(--accent-primary)]" } else { "text-[var(--text-secondary)]" },
                            onclick: move |_| active_tab.set(tab),
                            "{tab.label()}"
                        }
                    }
                }
                hr {}
            }

            div {
                class: "p-4 flex-1",
                SelectOption { content: "챌린지 개설하기" }
                SelectOption { content: "문의하기" }
            }

            Footer {}
        }
    }
}

#[component]
fn BalanceRow(icon: &'static str, label: &'static str, amount: i64, locale: String) -> Element {
    rsx! {
        div {
            class: "flex justify-between mb-5",
            div {
                class: "flex items-center",
                span { class: "w-6 mr-2", "{icon}" }
                p { "{label}" }
            }
            p { "{format_won(amount, &locale)}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_won() {
        assert_eq!(format_won(0, "ko-KR"), "0원");
        assert_eq!(format_won(999, "ko-KR"), "999원");
        assert_eq!(format_won(1000, "ko-KR"), "1,000원");
        assert_eq!(format_won(1_234_567, "ko-KR"), "1,234,567원");
        assert_eq!(format_won(-30_000, "ko-KR"), "-30,000원");
    }

    #[test]
    fn test_format_won_follows_locale() {
        assert_eq!(format_won(12_000, "en-US"), "₩12,000");
        assert_eq!(format_won(-500, "en-US"), "-₩500");
        assert_eq!(format_won(12_000, "ko"), "12,000원");
    }

    #[test]
    fn test_profile_tolerates_missing_fields() {
        let profile: UserProfile = serde_json::from_str(r#"{ "nickname": "devday", "userId": 3 }"#).unwrap();
        assert_eq!(profile.nickname.as_deref(), Some("devday"));
        assert_eq!(profile.email, None);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<_> = ChallengeTab::ALL.iter().map(ChallengeTab::label).collect();
        assert_eq!(labels, vec!["참가중", "완료", "리더"]);
    }
}
