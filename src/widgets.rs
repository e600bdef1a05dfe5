use crate::errors::WidgetError;
use crate::ui::LOADING_LABEL;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Modal {
    state: ModalState,
}

impl Modal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ModalState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) -> Result<(), WidgetError> {
        match self.state {
            ModalState::Open => Err(WidgetError::AlreadyOpen),
            ModalState::Closed => {
                self.state = ModalState::Open;
                Ok(())
            }
        }
    }

    pub fn close(&mut self) -> Result<(), WidgetError> {
        match self.state {
            ModalState::Closed => Err(WidgetError::NotOpen),
            ModalState::Open => {
                self.state = ModalState::Closed;
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitState {
    Idle { label: String },
    Submitting { original_label: String },
}

/// Submit control of a form. Disabled and showing [`LOADING_LABEL`] while a
/// submission is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitButton {
    state: SubmitState,
}

impl SubmitButton {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            state: SubmitState::Idle {
                label: label.into(),
            },
        }
    }

    pub fn state(&self) -> &SubmitState {
        &self.state
    }

    pub fn label(&self) -> &str {
        match &self.state {
            SubmitState::Idle { label } => label,
            SubmitState::Submitting { .. } => LOADING_LABEL,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self.state, SubmitState::Submitting { .. })
    }

    pub fn begin(&mut self) -> Result<(), WidgetError> {
        match &mut self.state {
            SubmitState::Submitting { .. } => Err(WidgetError::AlreadySubmitting),
            SubmitState::Idle { label } => {
                let original_label = std::mem::take(label);
                self.state = SubmitState::Submitting { original_label };
                Ok(())
            }
        }
    }

    pub fn settle(&mut self) -> Result<(), WidgetError> {
        match &mut self.state {
            SubmitState::Idle { .. } => Err(WidgetError::NotSubmitting),
            SubmitState::Submitting { original_label } => {
                let label = std::mem::take(original_label);
                self.state = SubmitState::Idle { label };
                Ok(())
            }
        }
    }
}
