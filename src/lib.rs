//! DevDay Challenge library
//!
//! UI primitives, routes and backend endpoint table for the challenge frontend.

pub mod api;
pub mod app;
pub mod route;
pub mod storage;
pub mod ui;
