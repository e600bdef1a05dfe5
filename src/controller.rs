use crate::api::GoalApi;
use crate::models::{GoalId, GoalStatus, GoalUpdate, StatusUpdate};
use crate::state::PageState;
use crate::stats::{build_stats, render_stats, GoalStatistics};
use crate::toast::ToastKind;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

pub const STATUS_UPDATED: &str = "Goal status updated successfully";
pub const STATUS_UPDATE_FAILED: &str = "Error updating goal status";
pub const LOAD_FAILED: &str = "Error loading goal details";
pub const GOAL_UPDATED: &str = "Goal updated successfully";
pub const GOAL_UPDATE_FAILED: &str = "Error updating goal";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this goal?";
pub const GOAL_DELETED: &str = "Goal deleted successfully";
pub const DELETE_FAILED: &str = "Error deleting goal";
pub const GOAL_ADDED: &str = "Goal added successfully";
pub const ADD_FAILED: &str = "Failed to add goal. Please try again.";
pub const TITLE_REQUIRED: &str = "Goal title is required";
pub const REFRESH_FAILED: &str = "Error refreshing goals";

/// Blocking yes/no prompt shown before destructive actions.
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change and the page reflects it.
    Applied,
    /// The server answered with an `error` message, shown verbatim.
    Rejected(String),
    /// Transport or unexpected failure; a generic message was shown.
    Failed,
    /// The user declined the confirmation prompt.
    Cancelled,
    /// Local validation stopped the submission.
    Prevented,
    /// The form is already submitting.
    Busy,
    /// Validation passed and the form submits natively.
    Passthrough,
    /// The event targets something that is not on the page or not bound.
    Ignored,
}

pub struct GoalPageController<A, C> {
    api: Arc<A>,
    confirm: Arc<C>,
    state: PageState,
}

impl<A, C> Clone for GoalPageController<A, C> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            confirm: Arc::clone(&self.confirm),
            state: self.state.clone(),
        }
    }
}

impl<A: GoalApi, C: Confirm> GoalPageController<A, C> {
    pub fn new(api: A, confirm: C, state: PageState) -> Self {
        Self {
            api: Arc::new(api),
            confirm: Arc::new(confirm),
            state,
        }
    }

    pub fn state(&self) -> &PageState {
        &self.state
    }

    /// Page-ready: clamp date inputs to `today`, bind the forms present on
    /// the page and render the initial summary.
    pub async fn initialize(&self, today: NaiveDate) -> GoalStatistics {
        info!(%today, "initializing goal page");
        {
            let mut page = self.state.page.lock().await;
            for input in &mut page.date_inputs {
                input.min = Some(today);
            }

            page.bindings.goal_form = page.goal_form.is_some();
            page.bindings.add_goal_form = page.add_goal_form.is_some();
            if !page.bindings.goal_form {
                debug!("goal form not on page");
            }
            if !page.bindings.add_goal_form {
                debug!("add goal form not on page");
            }
        }

        self.update_goal_statistics().await
    }

    pub async fn update_goal_status(&self, goal_id: &GoalId, status: GoalStatus) -> ActionOutcome {
        info!(%goal_id, %status, "updating goal status");
        let update = GoalUpdate::Status(StatusUpdate { status });

        match self.api.update_goal(goal_id, &update).await {
            Ok(reply) => {
                if let Some(message) = reply.error_message() {
                    warn!(%goal_id, %message, "status update rejected");
                    return self.reject(message).await;
                }
                self.state.notify(ToastKind::Success, STATUS_UPDATED).await;
                self.update_goal_statistics().await;
                ActionOutcome::Applied
            }
            Err(err) => {
                error!(%goal_id, error = %err, "status update failed");
                self.fail(STATUS_UPDATE_FAILED).await
            }
        }
    }

    pub async fn edit_goal(&self, goal_id: &GoalId) -> ActionOutcome {
        info!(%goal_id, "loading goal for edit");
        let goal = match self.api.fetch_goal(goal_id).await {
            Ok(goal) => goal,
            Err(err) => {
                error!(%goal_id, error = %err, "loading goal failed");
                return self.fail(LOAD_FAILED).await;
            }
        };

        let mut page = self.state.page.lock().await;
        page.edit_form.populate(&goal);
        if page.edit_modal.open().is_err() {
            debug!(%goal_id, "edit modal already open, refilled in place");
        }
        ActionOutcome::Applied
    }

    pub async fn save_goal_edit(&self) -> ActionOutcome {
        let (goal_id, edit) = self.state.page.lock().await.edit_form.read();
        if goal_id.is_empty() {
            warn!("edit form has no goal id");
            return self.fail(GOAL_UPDATE_FAILED).await;
        }

        info!(%goal_id, "saving goal edit");
        match self.api.update_goal(&goal_id, &GoalUpdate::Details(edit)).await {
            Ok(reply) => {
                if let Some(message) = reply.error_message() {
                    warn!(%goal_id, %message, "goal edit rejected");
                    return self.reject(message).await;
                }
            }
            Err(err) => {
                error!(%goal_id, error = %err, "saving goal failed");
                return self.fail(GOAL_UPDATE_FAILED).await;
            }
        }

        self.state.notify(ToastKind::Success, GOAL_UPDATED).await;
        {
            let mut page = self.state.page.lock().await;
            if page.edit_modal.close().is_err() {
                debug!("edit modal was not open");
            }
        }
        self.resync_goal(&goal_id).await;
        ActionOutcome::Applied
    }

    pub async fn delete_goal(&self, goal_id: &GoalId) -> ActionOutcome {
        if !self.confirm.confirm(DELETE_PROMPT) {
            debug!(%goal_id, "delete cancelled");
            return ActionOutcome::Cancelled;
        }

        info!(%goal_id, "deleting goal");
        match self.api.delete_goal(goal_id).await {
            Ok(()) => {
                self.state.notify(ToastKind::Success, GOAL_DELETED).await;
                self.state.page.lock().await.remove_row(goal_id);
                self.update_goal_statistics().await;
                ActionOutcome::Applied
            }
            Err(err) => {
                error!(%goal_id, error = %err, "deleting goal failed");
                match err.server_message() {
                    Some(message) => self.reject(message).await,
                    None => self.fail(DELETE_FAILED).await,
                }
            }
        }
    }

    pub async fn add_goal(&self) -> ActionOutcome {
        let (action, fields) = {
            let mut page = self.state.page.lock().await;
            let Some(form) = page.goal_form.as_mut() else {
                debug!("no goal form on page");
                return ActionOutcome::Ignored;
            };
            if let Err(err) = form.submit.begin() {
                debug!(error = %err, "goal form submission refused");
                return ActionOutcome::Busy;
            }
            (form.action.clone(), form.fields.clone())
        };

        for (name, value) in fields.iter() {
            debug!(name, value, "goal form field");
        }
        info!(%action, "submitting goal form");

        let outcome = match self.api.create_goal(&action, &fields).await {
            Ok(()) => {
                {
                    let mut page = self.state.page.lock().await;
                    match page.add_goal_modal.as_mut() {
                        Some(modal) if modal.is_open() => {
                            debug!("closing add goal modal");
                            let _ = modal.close();
                        }
                        Some(_) => debug!("add goal modal already closed"),
                        None => debug!("add goal modal instance not found"),
                    }
                    if let Some(form) = page.goal_form.as_mut() {
                        form.reset();
                    }
                }
                self.state.notify(ToastKind::Success, GOAL_ADDED).await;
                self.resync_rows().await;
                ActionOutcome::Applied
            }
            Err(err) => {
                error!(%action, error = %err, "goal form submission failed");
                self.fail(ADD_FAILED).await
            }
        };

        if let Some(form) = self.state.page.lock().await.goal_form.as_mut() {
            if let Err(err) = form.submit.settle() {
                warn!(error = %err, "submit button was not submitting");
            }
        }

        outcome
    }

    /// Required-field check for the natively submitted add-goal form.
    pub async fn validate_add_goal_form(&self) -> ActionOutcome {
        let title = {
            let page = self.state.page.lock().await;
            match page.add_goal_form.as_ref() {
                Some(form) => form.title.trim().to_string(),
                None => return ActionOutcome::Ignored,
            }
        };

        if title.is_empty() {
            debug!("add goal form title missing");
            self.state.notify(ToastKind::Warning, TITLE_REQUIRED).await;
            return ActionOutcome::Prevented;
        }

        debug!(%title, "add goal form validated");
        ActionOutcome::Passthrough
    }

    pub async fn update_goal_statistics(&self) -> GoalStatistics {
        let mut page = self.state.page.lock().await;
        let stats = build_stats(&page.rows);
        render_stats(&stats, &mut page.summary);
        debug!(
            total = stats.total,
            in_progress = stats.in_progress,
            completed = stats.completed,
            "goal statistics"
        );
        stats
    }

    /// Re-fetches one goal and replaces its row.
    pub async fn resync_goal(&self, goal_id: &GoalId) -> bool {
        match self.api.fetch_goal(goal_id).await {
            Ok(goal) => {
                self.state.page.lock().await.replace_row(&goal);
                self.update_goal_statistics().await;
                true
            }
            Err(err) => {
                error!(%goal_id, error = %err, "refreshing goal failed");
                self.state.notify(ToastKind::Danger, REFRESH_FAILED).await;
                false
            }
        }
    }

    /// Re-fetches the goal list and re-renders every row.
    pub async fn resync_rows(&self) -> bool {
        match self.api.list_goals().await {
            Ok(goals) => {
                self.state.page.lock().await.render_rows(&goals);
                self.update_goal_statistics().await;
                true
            }
            Err(err) => {
                error!(error = %err, "refreshing goal list failed");
                self.state.notify(ToastKind::Danger, REFRESH_FAILED).await;
                false
            }
        }
    }

    async fn reject(&self, message: &str) -> ActionOutcome {
        self.state.notify(ToastKind::Danger, message).await;
        ActionOutcome::Rejected(message.to_string())
    }

    async fn fail(&self, message: &str) -> ActionOutcome {
        self.state.notify(ToastKind::Danger, message).await;
        ActionOutcome::Failed
    }
}
