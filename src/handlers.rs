use crate::api::GoalApi;
use crate::controller::{ActionOutcome, Confirm, GoalPageController};
use crate::models::{GoalId, GoalStatus};
use chrono::NaiveDate;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    /// `goalForm`, submitted through the create flow.
    Goal,
    /// `addGoalForm`, validated then submitted natively.
    AddGoal,
}

/// User and lifecycle events the page reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Ready { today: NaiveDate },
    StatusSelected { goal_id: GoalId, status: GoalStatus },
    EditRequested(GoalId),
    EditSubmitted,
    DeleteRequested(GoalId),
    Submitted(FormKind),
}

pub async fn dispatch<A, C>(controller: &GoalPageController<A, C>, event: PageEvent) -> ActionOutcome
where
    A: GoalApi,
    C: Confirm,
{
    debug!(?event, "page event");
    match event {
        PageEvent::Ready { today } => {
            controller.initialize(today).await;
            ActionOutcome::Applied
        }
        PageEvent::StatusSelected { goal_id, status } => {
            let selected = controller
                .state()
                .page
                .lock()
                .await
                .select_status(&goal_id, status.clone());
            if !selected {
                debug!(%goal_id, "status selected for a goal not on the page");
            }
            controller.update_goal_status(&goal_id, status).await
        }
        PageEvent::EditRequested(goal_id) => controller.edit_goal(&goal_id).await,
        PageEvent::EditSubmitted => controller.save_goal_edit().await,
        PageEvent::DeleteRequested(goal_id) => controller.delete_goal(&goal_id).await,
        PageEvent::Submitted(kind) => {
            let bindings = controller.state().page.lock().await.bindings;
            match kind {
                FormKind::Goal if bindings.goal_form => controller.add_goal().await,
                FormKind::AddGoal if bindings.add_goal_form => {
                    controller.validate_add_goal_form().await
                }
                _ => {
                    debug!(?kind, "submit on a form without a handler");
                    ActionOutcome::Ignored
                }
            }
        }
    }
}
