pub mod downloads;
pub mod logs;
pub mod releases;
pub mod schedule;
pub mod settings;
pub mod shows;
pub mod sources;

use iced::Task;

use crate::app;
use crate::toast::ToastKind;

/// Which page is currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Schedule,
    Shows,
    Sources,
    Downloads,
    Releases,
    Logs,
    Settings,
}

/// Actions that a screen can request from the app router.
///
/// Screens return these from `update()` instead of directly mutating
/// shared state. The app interprets them in one place.
pub enum Action {
    /// No side-effect.
    None,
    /// Update the status bar message.
    SetStatus(String),
    /// Show a modal dialog.
    ShowModal(ModalKind),
    /// Dismiss the current modal.
    DismissModal,
    /// Run an async Iced task that eventually produces an app::Message.
    RunTask(Task<app::Message>),
    /// Show a toast notification.
    ShowToast(String, ToastKind),
}

/// What kind of modal is currently shown.
///
/// Form state lives in the owning screen; this only records which
/// overlay the app should draw.
#[derive(Debug, Clone)]
pub enum ModalKind {
    AddShow,
    EditShow,
    ProfileForm,
    ConfirmDeleteProfile { id: i64, name: String },
    ConfirmUntrack { id: i64, name: String },
    ConfirmClearLogs,
    ConfirmCleanupArtwork,
}
