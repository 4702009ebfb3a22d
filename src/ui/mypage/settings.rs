//! Account settings screens
//!
//! The settings list and one screen per account action. All of them are
//! mounted under the guarded layout.

use crate::api::endpoints::{DELETE_USER, GITHUB_BAEKJOON, NICKNAME, PASSWORD};
use crate::api::Endpoint;
use crate::app::AppState;
use crate::route::Route;
use crate::ui::components::{Button, Container, ContainerBody, ContainerHeader, ReturnArrow, SelectArrow};
use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsAction {
    ChangeNickname,
    ChangePassword,
    ChallengeAccounts,
    Logout,
    DeleteAccount,
}

impl SettingsAction {
    pub const ALL: [SettingsAction; 5] = [
        Self::ChangeNickname,
        Self::ChangePassword,
        Self::ChallengeAccounts,
        Self::Logout,
        Self::DeleteAccount,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::ChangeNickname => "닉네임 변경",
            Self::ChangePassword => "비밀번호 변경",
            Self::ChallengeAccounts => "Github, Solved.ac 계정 설정",
            Self::Logout => "로그아웃",
            Self::DeleteAccount => "회원탈퇴",
        }
    }

    /// Rendered in the danger tone
    pub fn is_warning(&self) -> bool {
        matches!(self, Self::Logout | Self::DeleteAccount)
    }

    /// Screen the action opens; logout has none
    pub fn route(&self) -> Option<Route> {
        match self {
            Self::ChangeNickname => Some(Route::NicknameSettings {}),
            Self::ChangePassword => Some(Route::PasswordSettings {}),
            Self::ChallengeAccounts => Some(Route::ChallengeInfoSettings {}),
            Self::Logout => None,
            Self::DeleteAccount => Some(Route::DeleteAccount {}),
        }
    }

    /// Backend endpoint the action's screen addresses
    pub fn endpoint(&self) -> Option<Endpoint> {
        match self {
            Self::ChangeNickname => Some(NICKNAME),
            Self::ChangePassword => Some(PASSWORD),
            Self::ChallengeAccounts => Some(GITHUB_BAEKJOON),
            Self::Logout => None,
            Self::DeleteAccount => Some(DELETE_USER),
        }
    }

    fn confirm_label(&self) -> &'static str {
        match self {
            Self::DeleteAccount => "탈퇴하기",
            _ => "저장",
        }
    }
}

#[component]
pub fn Settings() -> Element {
    let nav = navigator();
    let mut selected = use_signal(|| None::<SettingsAction>);

    rsx! {
        Container {
            ContainerHeader {
                class: "mb-10",
                ReturnArrow { title: "설정" }
            }
            ContainerBody {
                class: "m-6",
                for action in SettingsAction::ALL {
                    SelectArrow {
                        key: "{action.title()}",
                        title: action.title(),
                        warning: action.is_warning(),
                        onclick: move |_| {
                            selected.set(Some(action));
                            match action.route() {
                                Some(route) => {
                                    nav.push(route);
                                }
                                None => tracing::debug!("{:?} selected, no handler is configured", action),
                            }
                        },
                    }
                }

                if selected() == Some(SettingsAction::Logout) {
                    p {
                        class: "mt-4 text-sm text-[var(--text-tertiary)]",
                        "로그아웃은 아직 지원되지 않습니다."
                    }
                }
            }
        }
    }
}

#[component]
pub fn NicknameSettings() -> Element {
    rsx! { SettingsDetail { action: SettingsAction::ChangeNickname } }
}

#[component]
pub fn PasswordSettings() -> Element {
    rsx! { SettingsDetail { action: SettingsAction::ChangePassword } }
}

#[component]
pub fn ChallengeInfoSettings() -> Element {
    rsx! { SettingsDetail { action: SettingsAction::ChallengeAccounts } }
}

#[component]
pub fn DeleteAccount() -> Element {
    rsx! { SettingsDetail { action: SettingsAction::DeleteAccount } }
}

#[component]
fn SettingsDetail(action: SettingsAction) -> Element {
    let app_state = use_context::<AppState>();
    let target = action
        .endpoint()
        .and_then(|endpoint| endpoint.path().ok())
        .map(|path| match &app_state.api {
            Some(api) => api.url_for(&path),
            None => path,
        });
    let color = if action.is_warning() { "danger" } else { "primary" };

    rsx! {
        Container {
            ContainerHeader {
                class: "mb-10",
                ReturnArrow { title: action.title() }
            }
            ContainerBody {
                class: "m-6 gap-4",
                if let Some(url) = target {
                    p { class: "text-xs text-[var(--text-tertiary)] break-all", "{url}" }
                }
                Button {
                    label: action.confirm_label(),
                    color: color.to_string(),
                    class: "w-full py-3".to_string(),
                    disabled: true,
                    title: "준비 중".to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_order_and_titles() {
        let titles: Vec<_> = SettingsAction::ALL.iter().map(SettingsAction::title).collect();
        assert_eq!(
            titles,
            vec!["닉네임 변경", "비밀번호 변경", "Github, Solved.ac 계정 설정", "로그아웃", "회원탈퇴"]
        );
    }

    #[test]
    fn test_action_routes() {
        assert_eq!(
            SettingsAction::ChangeNickname.route().map(|r| r.to_string()),
            Some("/mypage/settings/nickname".to_string())
        );
        assert_eq!(
            SettingsAction::ChallengeAccounts.route().map(|r| r.to_string()),
            Some("/mypage/settings/challengeInfo".to_string())
        );
        assert_eq!(
            SettingsAction::DeleteAccount.route(),
            Some(Route::DeleteAccount {})
        );
        assert_eq!(SettingsAction::Logout.route(), None);
    }

    #[test]
    fn test_action_endpoints() {
        let path = |action: SettingsAction| action.endpoint().and_then(|e| e.path().ok());
        assert_eq!(path(SettingsAction::ChangeNickname).as_deref(), Some("user-service/nickname"));
        assert_eq!(path(SettingsAction::ChangePassword).as_deref(), Some("user-service/auth/user/password"));
        assert_eq!(path(SettingsAction::DeleteAccount).as_deref(), Some("user-service/auth/user"));
        assert_eq!(path(SettingsAction::Logout), None);
    }

    #[test]
    fn test_warning_actions() {
        let warnings: Vec<_> = SettingsAction::ALL.into_iter().filter(SettingsAction::is_warning).collect();
        assert_eq!(warnings, vec![SettingsAction::Logout, SettingsAction::DeleteAccount]);
    }
}
