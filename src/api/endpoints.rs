//! Backend endpoint table
//!
//! Every backend path the frontend addresses lives here. Entries are either
//! fixed paths or templates taking exactly one parameter, which is
//! interpolated verbatim.

use std::fmt;
use thiserror::Error;

const USER_SERVICE: &str = "user-service";
const CHALLENGE_SERVICE: &str = "challenge-service";
const PAY_SERVICE: &str = "pay-service";

/// Endpoint arity errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EndpointError {
    #[error("Endpoint template requires a parameter")]
    MissingParameter,
    #[error("Endpoint {0} does not take a parameter")]
    UnexpectedParameter(&'static str),
}

/// A backend path, either fixed or built from one parameter
#[derive(Clone, Copy)]
pub enum Endpoint {
    Fixed(&'static str),
    Template(fn(&str) -> String),
}

impl Endpoint {
    /// Resolve a fixed endpoint
    pub fn path(&self) -> Result<String, EndpointError> {
        match self {
            Endpoint::Fixed(path) => Ok((*path).to_string()),
            Endpoint::Template(_) => Err(EndpointError::MissingParameter),
        }
    }

    /// Resolve a template endpoint with its single parameter
    pub fn with_param(&self, param: &str) -> Result<String, EndpointError> {
        match self {
            Endpoint::Template(build) => Ok(build(param)),
            Endpoint::Fixed(path) => Err(EndpointError::UnexpectedParameter(*path)),
        }
    }

    pub fn is_parameterized(&self) -> bool {
        matches!(self, Endpoint::Template(_))
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Fixed(path) => f.debug_tuple("Fixed").field(path).finish(),
            Endpoint::Template(build) => f.debug_tuple("Template").field(&build("{}")).finish(),
        }
    }
}

// User service

pub const JOIN: Endpoint = Endpoint::Template(join);
pub const LOGIN: Endpoint = Endpoint::Fixed("user-service/login");
pub const EMAIL: Endpoint = Endpoint::Fixed("user-service/email");
pub const CONFIRM_EMAIL: Endpoint = Endpoint::Fixed("user-service/confirm-email");
pub const NICKNAME: Endpoint = Endpoint::Fixed("user-service/nickname");
pub const MYPAGE: Endpoint = Endpoint::Fixed("user-service/auth");
pub const PROFILE: Endpoint = Endpoint::Fixed("user-service/auth/user/detail");
pub const GITHUB_BAEKJOON: Endpoint = Endpoint::Fixed("user-service/auth/user/githubandbaekjoon");
pub const PASSWORD: Endpoint = Endpoint::Fixed("user-service/auth/user/password");
pub const DELETE_USER: Endpoint = Endpoint::Fixed("user-service/auth/user");

// Challenge service

pub const CHALLENGES: Endpoint = Endpoint::Fixed("challenge-service/auth/challenges");
pub const MY_CHALLENGES: Endpoint = Endpoint::Template(my_challenges);
pub const CHALLENGES_LIST: Endpoint = Endpoint::Template(challenges_list);
pub const CHALLENGES_SEARCH: Endpoint = Endpoint::Fixed("challenge-service/challenges");
pub const CHALLENGE_DETAIL: Endpoint = Endpoint::Fixed("challenge-service/challenges");
pub const CHALLENGE_JOIN: Endpoint = Endpoint::Fixed("challenge-service/auth/challenges/join");
pub const CHALLENGE_PHOTO_RECORD: Endpoint = Endpoint::Fixed("challenge-service/photo-record");

// Pay service

pub const MY_DEPOSIT_PRIZE: Endpoint = Endpoint::Template(my_deposit_prize);
pub const DEPOSIT_WITHDRAW: Endpoint = Endpoint::Fixed("pay-service/users/deposit");
pub const PRIZE_WITHDRAW: Endpoint = Endpoint::Fixed("pay-service/users/prize");
pub const PAYMENT_CHALLENGE_SUCCESS: Endpoint = Endpoint::Template(payment_challenge_success);

fn join(email_auth_id: &str) -> String {
    format!("{USER_SERVICE}/join/{email_auth_id}")
}

fn my_challenges(status: &str) -> String {
    format!("{CHALLENGE_SERVICE}/auth/challenges/my-challenge?status={status}")
}

fn challenges_list(category: &str) -> String {
    format!("{CHALLENGE_SERVICE}/challenges/list?category={category}")
}

fn my_deposit_prize(user_id: &str) -> String {
    format!("{PAY_SERVICE}/users/{user_id}")
}

fn payment_challenge_success(challenge_id: &str) -> String {
    format!("{PAY_SERVICE}/{challenge_id}/success")
}

/// Toss payments client key for the test environment
pub const PUBLIC_TOSS_CLIENT_KEY: &str = "test_ck_N5OWRapdA8dWR0eyPm6ro1zEqZKL";
pub const LOCALE: &str = "ko-KR";
/// Order name used for the DevDay attendee ticket payment
pub const DEVDAY_ATTENDEE_TICKET: &str = "DevDay 참가비";

/// Endpoints by logical name
pub const ENDPOINTS: &[(&str, Endpoint)] = &[
    ("join", JOIN),
    ("login", LOGIN),
    ("email", EMAIL),
    ("confirm_email", CONFIRM_EMAIL),
    ("nickname", NICKNAME),
    ("mypage", MYPAGE),
    ("profile", PROFILE),
    ("github_baekjoon", GITHUB_BAEKJOON),
    ("password", PASSWORD),
    ("delete_user", DELETE_USER),
    ("challenges", CHALLENGES),
    ("my_challenges", MY_CHALLENGES),
    ("challenges_list", CHALLENGES_LIST),
    ("challenges_search", CHALLENGES_SEARCH),
    ("challenge_detail", CHALLENGE_DETAIL),
    ("challenge_join", CHALLENGE_JOIN),
    ("challenge_photo_record", CHALLENGE_PHOTO_RECORD),
    ("my_deposit_prize", MY_DEPOSIT_PRIZE),
    ("deposit_withdraw", DEPOSIT_WITHDRAW),
    ("prize_withdraw", PRIZE_WITHDRAW),
    ("payment_challenge_success", PAYMENT_CHALLENGE_SUCCESS),
];

pub fn lookup(name: &str) -> Option<Endpoint> {
    ENDPOINTS
        .iter()
        .find(|(entry, _)| *entry == name)
        .map(|(_, endpoint)| *endpoint)
}
