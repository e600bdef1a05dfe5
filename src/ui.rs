use crate::toast::ToastKind;
use chrono::{Local, NaiveDate};
use html_escape::encode_text;

pub const LOADING_LABEL: &str = r#"<span class="spinner-border spinner-border-sm" role="status" aria-hidden="true"></span> Adding..."#;

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Long-form date label, e.g. `October 19, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

pub fn render_toast(kind: ToastKind, message: &str) -> String {
    TOAST_HTML
        .replace("{{KIND}}", kind.as_str())
        .replace("{{MESSAGE}}", &encode_text(message))
}

const TOAST_HTML: &str = r#"<div class="toast align-items-center text-white bg-{{KIND}} border-0" role="alert" aria-live="assertive" aria-atomic="true">
  <div class="d-flex">
    <div class="toast-body">
      {{MESSAGE}}
    </div>
    <button type="button" class="btn-close btn-close-white me-2 m-auto" data-bs-dismiss="toast" aria-label="Close"></button>
  </div>
</div>"#;
