//! Shared application state for the dashboard.
//!
//! A single `CampusStore` plus the latest user-facing notice, driven
//! through a Yew reducer. Pages dispatch `Action`s; every mutation goes
//! through the store's own operations, and the reducer only records the
//! resulting notification.

use std::rc::Rc;

use core_types::UserStatus;
use store::CampusStore;
use yew::prelude::*;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
}

/// A user-facing notification produced by the latest mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: String) -> Self {
        Self {
            kind: NoticeKind::Success,
            text,
        }
    }

    fn warning(text: String) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text,
        }
    }
}

/// Mutations the UI can request.
pub enum Action {
    AddCourse { title: String, description: String },
    DeleteCourse(u32),
    ToggleUser(u32),
    DismissNotice,
}

/// Store state plus the latest notification.
#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    pub store: CampusStore,
    pub notice: Option<Notice>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self {
            store: CampusStore::seeded(),
            notice: None,
        }
    }
}

impl Reducible for AppStore {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();

        match action {
            Action::AddCourse { title, description } => {
                next.notice = match next.store.add_course(&title, &description) {
                    Ok(course) => Some(Notice::success(format!(
                        "Course \"{}\" added successfully",
                        course.title
                    ))),
                    Err(err) => Some(Notice::warning(err.to_string())),
                };
            }
            Action::DeleteCourse(id) => {
                // Absent ids stay silent.
                if let Some(course) = next.store.delete_course(id) {
                    next.notice = Some(Notice::success(format!(
                        "Course \"{}\" deleted successfully",
                        course.title
                    )));
                }
            }
            Action::ToggleUser(id) => {
                if let Some(user) = next.store.toggle_user_status(id) {
                    let text = match user.status {
                        UserStatus::Blocked => format!("User {} has been blocked.", user.name),
                        UserStatus::Active => format!("User {} has been unblocked.", user.name),
                    };
                    next.notice = Some(Notice::success(text));
                }
            }
            Action::DismissNotice => next.notice = None,
        }

        Rc::new(next)
    }
}

/// Handle to the shared application state, provided via context.
pub type StoreHandle = UseReducerHandle<AppStore>;
