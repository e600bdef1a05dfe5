pub mod api;
pub mod app;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod page;
pub mod state;
pub mod stats;
pub mod toast;
pub mod ui;
pub mod widgets;

pub use app::load_page;
pub use config::PageConfig;
pub use controller::{ActionOutcome, Confirm, GoalPageController};
pub use handlers::{dispatch, FormKind, PageEvent};
pub use state::PageState;
