// Library surface for the binary, headless integration tests and reuse.
pub mod app;
pub mod app_dirs;
pub mod clock;
pub mod config;
pub mod controller;
pub mod deck;
pub mod demo;
pub mod error;
pub mod navigator;
pub mod notes;
pub mod report;
pub mod runtime;
pub mod session;
pub mod timer;
pub mod ui;
pub mod util;

pub use controller::{DisplayFrame, SessionController, SessionEvent, SessionObserver};
pub use session::Phase;
