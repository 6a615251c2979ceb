//! Toast notices shown in the top-right corner.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Oldest notices are dropped beyond this many.
const MAX_VISIBLE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

impl NoticeKind {
    fn css_class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "pos-notification pos-notification--success",
            NoticeKind::Warning => "pos-notification pos-notification--warning",
            NoticeKind::Error => "pos-notification pos-notification--error",
        }
    }

    /// How long the notice stays on screen, in milliseconds.
    pub fn ttl_ms(&self) -> u32 {
        match self {
            NoticeKind::Success => 2300,
            NoticeKind::Warning => 4000,
            NoticeKind::Error => 5000,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct NoticeQueue {
    next_id: u64,
    items: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notice {
            id,
            kind,
            message: message.into(),
        });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        before != self.items.len()
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

/// Reactive handle over the notice queue; copies share the same queue.
#[derive(Clone, Copy)]
pub struct NoticeService {
    queue: RwSignal<NoticeQueue>,
}

impl NoticeService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    /// Show a notice and schedule its removal.
    pub fn push(&self, kind: NoticeKind, message: impl Into<String>) {
        let Some(id) = self.queue.try_update(|q| q.push(kind, message)) else {
            return;
        };
        let queue = self.queue;
        spawn_local(async move {
            TimeoutFuture::new(kind.ttl_ms()).await;
            queue.update(|q| {
                q.dismiss(id);
            });
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message);
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| {
            q.dismiss(id);
        });
    }
}

impl Default for NoticeService {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn NoticeStack(service: NoticeService) -> impl IntoView {
    view! {
        <div class="pos-notifications">
            {move || {
                service
                    .queue
                    .with(|q| q.items().to_vec())
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=notice.kind.css_class()
                                role="status"
                                on:click=move |_| service.dismiss(id)
                            >
                                {notice.message}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
