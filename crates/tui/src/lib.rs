//! # sf-tui
//!
//! Terminal user interface for stepform.
//!
//! The TUI drives an in-process `sf-core` `FormEngine` through the `Op` and
//! `Event` protocol defined in `sf-protocol`. Tokio only powers terminal
//! input streaming and frame scheduling; every form operation is a
//! synchronous call.

pub mod app;
pub mod event;
pub mod event_handler;
pub mod tui;
pub mod widgets;

pub use app::App;
pub use tui::Tui;

use sf_protocol::GlobalConfig;
use tracing::info;

/// Run the form until the user quits.
///
/// Takes over the terminal for the duration and restores it on return,
/// including when the loop fails.
pub async fn run_app(config: &GlobalConfig) -> anyhow::Result<()> {
    let mut tui = Tui::init()?;
    let mut app = App::new(config);

    info!(title = %config.title, "starting form");
    let result = app.run(&mut tui).await;
    tui.restore()?;

    info!(submissions = app.engine.submissions().len(), "form closed");
    result
}
