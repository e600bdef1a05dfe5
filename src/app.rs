use crate::api::{GoalApi, HttpGoalApi};
use crate::config::PageConfig;
use crate::controller::{Confirm, GoalPageController};
use crate::errors::ApiResult;
use crate::page::GoalPage;
use crate::state::PageState;
use tracing::info;

/// Loads the goal list and builds the standard page around it, wired to the
/// HTTP endpoints described by `config`.
pub async fn load_page<C: Confirm>(
    config: &PageConfig,
    confirm: C,
) -> ApiResult<GoalPageController<HttpGoalApi, C>> {
    let api = HttpGoalApi::new(config);
    let goals = api.list_goals().await?;
    info!(count = goals.len(), base_url = %config.base_url, "loaded goals");

    let page = GoalPage::standard(config).with_goals(&goals);
    Ok(GoalPageController::new(api, confirm, PageState::new(page)))
}
