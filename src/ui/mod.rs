// src/ui/mod.rs
use bevy::prelude::*;
use std::time::Duration;

pub mod selection;
pub mod systems;

use crate::tables::TableSystemSet;
use selection::{
    handle_commit_edit, handle_delete_selection, sync_cell_selection, RequestCommitEdit,
    RequestDeleteSelection, TableSelection,
};
use systems::{handle_ui_feedback, tick_feedback_dismissal};

/// How long a transient notification stays up unless the settings say otherwise.
pub const DEFAULT_NOTIFICATION_DURATION: Duration = Duration::from_secs(2);

/// Transient status line shown after an operation (e.g. "Copied 3 row(s) as TSV.").
#[derive(Resource, Debug, Clone)]
pub struct UiFeedbackState {
    pub last_message: String,
    pub is_error: bool,
    dismiss_timer: Timer,
}

impl UiFeedbackState {
    pub fn new(display_duration: Duration) -> Self {
        Self {
            last_message: String::new(),
            is_error: false,
            dismiss_timer: Timer::new(display_duration, TimerMode::Once),
        }
    }

    pub fn is_visible(&self) -> bool {
        !self.last_message.is_empty()
    }

    pub(crate) fn show(&mut self, message: String, is_error: bool) {
        self.last_message = message;
        self.is_error = is_error;
        self.dismiss_timer.reset();
    }

    pub(crate) fn dismiss(&mut self) {
        self.last_message.clear();
        self.is_error = false;
    }
}

impl Default for UiFeedbackState {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_DURATION)
    }
}

/// Presentation-side state for the table editor screen: selection, the
/// editing cell, and transient feedback. Draws nothing.
pub struct EditorUiPlugin {
    pub notification_duration: Duration,
}

impl Default for EditorUiPlugin {
    fn default() -> Self {
        Self {
            notification_duration: DEFAULT_NOTIFICATION_DURATION,
        }
    }
}

impl Plugin for EditorUiPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(UiFeedbackState::new(self.notification_duration))
            .init_resource::<TableSelection>()
            .add_event::<RequestDeleteSelection>()
            .add_event::<RequestCommitEdit>()
            .add_systems(
                Update,
                (handle_delete_selection, handle_commit_edit).in_set(TableSystemSet::UserInput),
            )
            .add_systems(
                Update,
                sync_cell_selection.after(TableSystemSet::ApplyChanges),
            )
            .add_systems(
                Update,
                (tick_feedback_dismissal, handle_ui_feedback)
                    .chain()
                    .after(TableSystemSet::Export),
            );

        info!(
            "EditorUiPlugin initialized (notifications dismiss after {:?}).",
            self.notification_duration
        );
    }
}
