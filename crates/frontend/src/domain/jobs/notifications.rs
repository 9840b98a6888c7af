//! Background deadline watcher shared through context.
//!
//! Polls the job list every five minutes and keeps the set of jobs inside
//! the attention window; the sidebar badge and dashboard strip read it.

use contracts::jobs::{upcoming_jobs, DueJob};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use crate::domain::jobs::api;
use crate::shared::date_utils::today;

const POLL_INTERVAL_MS: u32 = 5 * 60 * 1000;

#[derive(Clone, Copy)]
pub struct NotificationService {
    pub due: RwSignal<Vec<DueJob>>,
    pub count: RwSignal<usize>,
}

impl NotificationService {
    pub fn new() -> Self {
        let service = Self {
            due: RwSignal::new(Vec::new()),
            count: RwSignal::new(0),
        };
        wasm_bindgen_futures::spawn_local(async move {
            loop {
                service.refresh().await;
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
            }
        });
        service
    }

    pub async fn refresh(&self) {
        match api::fetch_jobs(None).await {
            Ok(jobs) => {
                let due = upcoming_jobs(&jobs, today());
                self.count.set(due.len());
                self.due.set(due);
            }
            Err(e) => log::error!("Failed to refresh deadline notifications: {}", e),
        }
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}
