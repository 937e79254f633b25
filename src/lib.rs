//! Stack Overflow search widget: fetches search results and top answers from
//! the Stack Exchange API and renders them as a styled HTML fragment for
//! embedding in a host page.

pub mod rank;
pub mod render;
pub mod stackexchange;
pub mod throttle;
pub mod widget;

pub const USER_AGENT: &str = concat!("stackview/", env!("CARGO_PKG_VERSION"));

pub use stackexchange::StackExchangeError;
pub use widget::{SearchParams, Settings, render_search_results};
