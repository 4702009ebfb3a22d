//! Shared UI components
//!
//! Reusable components like buttons, rows, headers and other primitives.

pub mod avatar;
pub mod button;
pub mod container;
pub mod footer;
pub mod return_arrow;
pub mod select;

pub use avatar::UserAvatar;
pub use button::Button;
pub use container::{Container, ContainerBody, ContainerHeader};
pub use footer::Footer;
pub use return_arrow::ReturnArrow;
pub use select::{SelectArrow, SelectOption};
