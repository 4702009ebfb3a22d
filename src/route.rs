//! Screen routes
//!
//! Settings screens sit behind the [`Guarded`] layout.

use crate::ui::guard::Guarded;
use crate::ui::landing::{Landing, NotFound};
use crate::ui::mypage::settings::{
    ChallengeInfoSettings, DeleteAccount, NicknameSettings, PasswordSettings, Settings,
};
use crate::ui::mypage::MyPage;
use crate::ui::Layout;
use dioxus::prelude::*;

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        Landing {},
        #[route("/mypage")]
        MyPage {},
        #[layout(Guarded)]
            #[route("/mypage/settings")]
            Settings {},
            #[route("/mypage/settings/nickname")]
            NicknameSettings {},
            #[route("/mypage/settings/password")]
            PasswordSettings {},
            #[route("/mypage/settings/challengeInfo")]
            ChallengeInfoSettings {},
            #[route("/mypage/settings/delete-account")]
            DeleteAccount {},
        #[end_layout]
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
