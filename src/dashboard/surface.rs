use std::fmt;

use super::view::{CategoryRow, ComparisonView, DetailView, ProductListView, StatCards};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Info,
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Where rendered view models are committed.
pub trait DisplaySurface {
    /// Show or hide the blocking loading indicator.
    fn set_loading(&mut self, visible: bool);

    fn render_products(&mut self, view: &ProductListView);

    fn render_stats(&mut self, stats: &StatCards);

    fn render_categories(&mut self, rows: &[CategoryRow]);

    fn show_detail(&mut self, view: &DetailView);

    fn close_detail(&mut self);

    fn show_comparison(&mut self, view: &ComparisonView);

    fn notify(&mut self, notification: Notification);
}
