use crate::page::GoalPage;
use crate::toast::{ToastId, ToastKind};
use std::sync::Arc;
use tokio::{sync::Mutex, time::Instant};

/// Shared handle to the page. Handlers lock it only between network calls.
#[derive(Clone)]
pub struct PageState {
    pub page: Arc<Mutex<GoalPage>>,
}

impl PageState {
    pub fn new(page: GoalPage) -> Self {
        Self {
            page: Arc::new(Mutex::new(page)),
        }
    }

    /// Shows a toast and schedules its removal once the rack's delay elapses.
    pub async fn notify(&self, kind: ToastKind, message: impl Into<String>) -> ToastId {
        let (id, delay) = {
            let mut page = self.page.lock().await;
            let host = page.toast_host();
            let id = page.toasts.show(host, kind, message, Instant::now());
            (id, page.toasts.delay())
        };

        let page = Arc::clone(&self.page);
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            page.lock().await.toasts.expire(Instant::now());
        });

        id
    }
}
