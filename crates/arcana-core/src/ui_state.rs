//! Window-level UI state: theme, sidebar, toasts and the modal slot.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// CSS class applied to the app root.
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Dark => "theme-dark",
            Theme::Light => "theme-light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub level: NotificationLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalKind {
    /// Enlarged card face
    CardPreview,
    ConfirmLogout,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_open: bool,
    pub notifications: Vec<Notification>,
    pub current_page: String,
    pub modal: Option<(ModalKind, Option<String>)>,
    next_notification: u64,
}

impl UiState {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    /// Queue a notification and return its id.
    pub fn notify(&mut self, level: NotificationLevel, message: impl Into<String>) -> u64 {
        self.next_notification += 1;
        let id = self.next_notification;
        self.notifications.push(Notification {
            id,
            level,
            message: message.into(),
        });
        id
    }

    pub fn remove_notification(&mut self, id: u64) {
        self.notifications.retain(|n| n.id != id);
    }

    pub fn clear_notifications(&mut self) {
        self.notifications.clear();
    }

    pub fn set_current_page(&mut self, page: impl Into<String>) {
        self.current_page = page.into();
    }

    pub fn open_modal(&mut self, kind: ModalKind, data: Option<String>) {
        self.modal = Some((kind, data));
    }

    pub fn close_modal(&mut self) {
        self.modal = None;
    }

    pub fn modal_open(&self) -> bool {
        self.modal.is_some()
    }
}
