//! API handlers.

mod health;
mod redirect;
mod shorten;
mod stats;

pub use health::{health_handler, root_handler};
pub use redirect::redirect_handler;
pub use shorten::shorten_handler;
pub use stats::stats_handler;
