//! # Page Controls Demo
//!
//! Drives the sample course page through a scripted session:
//! 1.  Page load: both lifecycle signals arrive, the menu initializes once.
//! 2.  Menu: open with the toggle, close with a link, open again, close with an outside click.
//! 3.  Contact form: a rejected submission, corrections, an accepted submission and the
//!     acknowledgment hiding itself.
//!
//! Set `PAGE_CONFIG` to a TOML file to override element ids or the acknowledgment delay.

use page_controls::config::PageConfig;
use page_controls::dom::sample::course_site;
use page_controls::lifecycle::{setup_tracing, LifecycleEvent, Page};
use tracing::{info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = match std::env::var("PAGE_CONFIG") {
        Ok(path) => PageConfig::load(&path).map_err(|e| e.to_string())?,
        Err(_) => PageConfig::default(),
    };
    let delay = config.form.acknowledgment_delay();

    info!("Starting page session");
    let site = course_site();
    let page = Page::new(site.document, config);

    let span = tracing::info_span!("page_load");
    async {
        page.lifecycle(LifecycleEvent::DomContentLoaded).await;
        let report = page.lifecycle(LifecycleEvent::Load).await;
        info!(menu = ?report.menu, "Page loaded");
    }
    .instrument(span)
    .await;

    let span = tracing::info_span!("navigation");
    async {
        page.click(site.toggle).await;
        page.click(site.links[1]).await;
        page.click(site.toggle).await;
        page.click(site.course_card).await;
        let open = page.menu_client.is_open().await.map_err(|e| e.to_string())?;
        info!(open, "Navigation finished");
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    let span = tracing::info_span!("contact_form");
    async {
        page.input(site.name, "Al").await;
        page.input(site.email, "alice@example").await;
        page.click(site.submit).await;

        page.input(site.name, "Alice").await;
        page.input(site.email, "alice@example.com").await;
        page.input(site.message, "When does the next cohort start?").await;
        page.click(site.submit).await;

        let acknowledged = page.dom().read(|doc| !doc.is_hidden(site.success));
        info!(acknowledged, "Submission sent");

        tokio::time::sleep(delay + std::time::Duration::from_millis(100)).await;
        let acknowledged = page.dom().read(|doc| !doc.is_hidden(site.success));
        info!(acknowledged, "Acknowledgment expired");
    }
    .instrument(span)
    .await;

    // Shutdown page gracefully
    page.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
