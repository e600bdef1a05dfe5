use crate::config::PageConfig;
use crate::models::{FormFields, Goal, GoalEdit, GoalId, GoalStatus};
use crate::toast::{ToastHost, ToastRack};
use crate::ui::format_date;
use crate::widgets::{Modal, SubmitButton};
use chrono::NaiveDate;
use std::time::Duration;

/// Names of the create form's fields, in submission order.
pub const GOAL_FORM_FIELDS: [&str; 4] = ["title", "description", "start_date", "target_date"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateInput {
    pub name: String,
    pub value: String,
    pub min: Option<NaiveDate>,
}

impl DateInput {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: String::new(),
            min: None,
        }
    }
}

/// One rendered goal. `select` is the status selector's current value.
#[derive(Debug, Clone, PartialEq)]
pub struct GoalRow {
    pub goal_id: GoalId,
    pub title: String,
    pub due_label: Option<String>,
    pub select: GoalStatus,
}

impl GoalRow {
    pub fn from_goal(goal: &Goal) -> Self {
        Self {
            goal_id: goal.goal_id.clone(),
            title: goal.title.clone(),
            due_label: goal.target_date.map(format_date),
            select: goal.status.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot {
    pub text: String,
}

/// Summary display elements. Each is optional on the page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryTargets {
    pub total: Option<TextSlot>,
    pub in_progress: Option<TextSlot>,
    pub completed: Option<TextSlot>,
}

impl SummaryTargets {
    pub fn all() -> Self {
        Self {
            total: Some(TextSlot::default()),
            in_progress: Some(TextSlot::default()),
            completed: Some(TextSlot::default()),
        }
    }
}

/// Dedicated element toasts are appended to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ToastContainer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditGoalForm {
    pub goal_id: String,
    pub title: String,
    pub description: String,
    pub start_date: String,
    pub target_date: String,
}

impl EditGoalForm {
    pub fn populate(&mut self, goal: &Goal) {
        self.goal_id = goal.goal_id.to_string();
        self.title = goal.title.clone();
        self.description = goal.description.clone().unwrap_or_default();
        self.start_date = goal.start_date.map(|date| date.to_string()).unwrap_or_default();
        self.target_date = goal.target_date.map(|date| date.to_string()).unwrap_or_default();
    }

    pub fn read(&self) -> (GoalId, GoalEdit) {
        (
            GoalId::new(self.goal_id.trim()),
            GoalEdit {
                title: self.title.clone(),
                description: self.description.clone(),
                start_date: self.start_date.clone(),
                target_date: self.target_date.clone(),
            },
        )
    }
}

/// Form submitted through the create flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoalForm {
    pub action: String,
    pub fields: FormFields,
    pub submit: SubmitButton,
    defaults: FormFields,
}

impl GoalForm {
    pub fn new(action: impl Into<String>, fields: FormFields, submit_label: &str) -> Self {
        Self {
            action: action.into(),
            defaults: fields.clone(),
            fields,
            submit: SubmitButton::new(submit_label),
        }
    }

    pub fn set(&mut self, name: &str, value: &str) {
        self.fields.set(name, value);
    }

    pub fn reset(&mut self) {
        self.fields = self.defaults.clone();
    }
}

/// Form that submits natively once its title passes validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddGoalForm {
    pub title: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormBindings {
    pub goal_form: bool,
    pub add_goal_form: bool,
}

#[derive(Debug, Clone)]
pub struct GoalPage {
    pub date_inputs: Vec<DateInput>,
    pub rows: Vec<GoalRow>,
    pub summary: SummaryTargets,
    pub toast_container: Option<ToastContainer>,
    pub edit_form: EditGoalForm,
    pub edit_modal: Modal,
    /// `None` until a modal instance is associated with the add-goal dialog.
    pub add_goal_modal: Option<Modal>,
    pub goal_form: Option<GoalForm>,
    pub add_goal_form: Option<AddGoalForm>,
    pub toasts: ToastRack,
    pub bindings: FormBindings,
}

impl GoalPage {
    /// A page with nothing optional on it.
    pub fn bare(toast_delay: Duration) -> Self {
        Self {
            date_inputs: Vec::new(),
            rows: Vec::new(),
            summary: SummaryTargets::default(),
            toast_container: None,
            edit_form: EditGoalForm::default(),
            edit_modal: Modal::new(),
            add_goal_modal: None,
            goal_form: None,
            add_goal_form: None,
            toasts: ToastRack::new(toast_delay),
            bindings: FormBindings::default(),
        }
    }

    /// The dashboard layout: create form in a modal, edit modal, summary cards.
    pub fn standard(config: &PageConfig) -> Self {
        let mut fields = FormFields::new();
        for name in GOAL_FORM_FIELDS {
            fields.set(name, "");
        }

        Self {
            date_inputs: ["start_date", "target_date", "editStartDate", "editTargetDate"]
                .into_iter()
                .map(DateInput::new)
                .collect(),
            summary: SummaryTargets::all(),
            toast_container: Some(ToastContainer),
            add_goal_modal: Some(Modal::new()),
            goal_form: Some(GoalForm::new(config.list_path.clone(), fields, "Add Goal")),
            ..Self::bare(config.toast_delay)
        }
    }

    /// Toasts go to the container when the page has one, otherwise to the body.
    pub fn toast_host(&self) -> ToastHost {
        match self.toast_container {
            Some(_) => ToastHost::Container,
            None => ToastHost::Body,
        }
    }

    pub fn with_goals(mut self, goals: &[Goal]) -> Self {
        self.render_rows(goals);
        self
    }

    pub fn render_rows(&mut self, goals: &[Goal]) {
        self.rows = goals.iter().map(GoalRow::from_goal).collect();
    }

    pub fn row(&self, goal_id: &GoalId) -> Option<&GoalRow> {
        self.rows.iter().find(|row| &row.goal_id == goal_id)
    }

    pub fn select_status(&mut self, goal_id: &GoalId, status: GoalStatus) -> bool {
        match self.rows.iter_mut().find(|row| &row.goal_id == goal_id) {
            Some(row) => {
                row.select = status;
                true
            }
            None => false,
        }
    }

    /// Replaces the row for `goal`, appending it if it is not on the page.
    pub fn replace_row(&mut self, goal: &Goal) {
        let fresh = GoalRow::from_goal(goal);
        match self.rows.iter_mut().find(|row| row.goal_id == goal.goal_id) {
            Some(row) => *row = fresh,
            None => self.rows.push(fresh),
        }
    }

    pub fn remove_row(&mut self, goal_id: &GoalId) -> bool {
        let before = self.rows.len();
        self.rows.retain(|row| &row.goal_id != goal_id);
        before != self.rows.len()
    }
}
