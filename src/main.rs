use goal_page::{dispatch, load_page, ui, PageConfig, PageEvent};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = PageConfig::from_env()?;
    info!(base_url = %config.base_url, "loading goal page");

    // Nothing is deleted during a page load.
    let controller = load_page(&config, |_: &str| false).await?;
    dispatch(&controller, PageEvent::Ready { today: ui::today() }).await;

    let page = controller.state().page.lock().await;
    for row in &page.rows {
        info!(
            goal_id = %row.goal_id,
            title = %row.title,
            status = %row.select,
            due = row.due_label.as_deref().unwrap_or("-"),
            "goal"
        );
    }
    let text = |slot: &Option<goal_page::page::TextSlot>| {
        slot.as_ref().map(|slot| slot.text.clone()).unwrap_or_default()
    };
    info!(
        total = %text(&page.summary.total),
        in_progress = %text(&page.summary.in_progress),
        completed = %text(&page.summary.completed),
        "goal summary"
    );

    Ok(())
}
