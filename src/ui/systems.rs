// src/ui/systems.rs
use crate::{tables::events::TableOperationFeedback, ui::UiFeedbackState};
use bevy::prelude::*;

pub fn handle_ui_feedback(
    mut feedback_events: EventReader<TableOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    for event in feedback_events.read() {
        last_message = Some((event.message.clone(), event.is_error));
        // Prioritize showing the first non-error, or the last error
        if !event.is_error {
            break;
        }
    }
    // Drain anything left after the early break.
    feedback_events.clear();

    if let Some((msg, is_error)) = last_message {
        if is_error {
            warn!("UI Feedback (Error): {}", msg);
        } else {
            info!("UI Feedback: {}", msg);
        }
        ui_feedback_state.show(msg, is_error);
    }
}

/// Hides the feedback line once its display time has run out. Only reads the
/// clock, so table requests keep flowing while a message is up.
pub fn tick_feedback_dismissal(time: Res<Time>, mut ui_feedback_state: ResMut<UiFeedbackState>) {
    if !ui_feedback_state.is_visible() {
        return;
    }
    if ui_feedback_state.dismiss_timer.tick(time.delta()).just_finished() {
        trace!("Dismissing feedback '{}'.", ui_feedback_state.last_message);
        ui_feedback_state.dismiss();
    }
}
