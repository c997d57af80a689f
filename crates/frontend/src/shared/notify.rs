//! "Notify user" port
//!
//! Screens report failures and confirmations through [`Notify`]. The browser
//! implementation is a blocking modal queue: one notice at a time, dismissed
//! with "Aceptar".

use leptos::prelude::*;
use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

pub trait Notify {
    fn notify(&self, notice: Notice);
}

/// Log a failure and hand its message to the user.
pub fn report_failure<N: Notify + ?Sized>(notify: &N, action: &str, message: impl Into<String>) {
    let message = message.into();
    log::error!("{}: {}", action, message);
    notify.notify(Notice::error(message));
}

/// FIFO of pending notices; only the front one is shown.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoticeQueue {
    pending: VecDeque<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, notice: Notice) {
        self.pending.push_back(notice);
    }

    pub fn current(&self) -> Option<&Notice> {
        self.pending.front()
    }

    pub fn dismiss(&mut self) -> Option<Notice> {
        self.pending.pop_front()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

/// Blocking notification service provided at the application root.
#[derive(Clone, Copy)]
pub struct NotificationService {
    queue: RwSignal<NoticeQueue>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.queue.with(|q| q.current().cloned())
    }

    pub fn dismiss(&self) {
        self.queue.update(|q| {
            q.dismiss();
        });
    }
}

impl Notify for NotificationService {
    fn notify(&self, notice: Notice) {
        self.queue.update(|q| q.push(notice));
    }
}

/// Renders the front notice of the queue as a blocking dialog.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications =
        use_context::<NotificationService>().expect("NotificationService not provided in context");

    view! {
        {move || match notifications.current() {
            Some(notice) => {
                let (class, title) = match notice.level {
                    NoticeLevel::Error => ("notice notice--error", "Error"),
                    NoticeLevel::Info => ("notice notice--info", "Aviso"),
                };
                view! {
                    <div class="modal-overlay notice-overlay">
                        <div class=class role="alertdialog">
                            <h3 class="notice__title">{title}</h3>
                            <pre class="notice__message">{notice.message}</pre>
                            <div class="notice__actions">
                                <button class="btn btn--primary" on:click=move |_| notifications.dismiss()>
                                    "Aceptar"
                                </button>
                            </div>
                        </div>
                    </div>
                }
                .into_any()
            }
            None => view! { <></> }.into_any(),
        }}
    }
}

#[cfg(test)]
pub use recording::RecordingNotifier;


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_shows_one_notice_at_a_time() {
        let mut queue = NoticeQueue::default();
        queue.push(Notice::error("No se pudo listar."));
        queue.push(Notice::info("Registro guardado"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current().map(|n| n.message.as_str()), Some("No se pudo listar."));
        queue.dismiss();
        assert_eq!(queue.current(), Some(&Notice::info("Registro guardado")));
        queue.dismiss();
        assert!(queue.is_empty());
        assert_eq!(queue.dismiss(), None);
    }

    #[test]
    fn test_report_failure_notifies_error() {
        let notifier = RecordingNotifier::default();
        report_failure(&notifier, "save area", "• body.Area: field required");
        let notices = notifier.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "• body.Area: field required");
    }
}
