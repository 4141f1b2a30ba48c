// Mock authentication. No credentials are checked and no session is created.

pub mod handlers;

use std::time::Duration;

use tracing::info;

use crate::view::{Page, View};

/// Shows the loader, waits `delay`, then sends the user to the main page.
pub async fn login<V: View + Send>(view: &mut V, delay: Duration) {
    view.set_loading(true);
    tokio::time::sleep(delay).await;
    info!("Mock login complete, redirecting to {}", Page::Main.path());
    view.navigate(Page::Main);
}

pub fn logout<V: View + ?Sized>(view: &mut V) {
    view.navigate(Page::Index);
}
