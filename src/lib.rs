pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod model;
pub mod store;
pub mod ui;
pub mod view_models;

pub use app::QuizApp;
pub use error::StoreError;
pub use store::{QuizStore, SubscriptionId};
