//! Mutation lifecycle state machines for the player dialogs.
//!
//! The flows encode what the editing surfaces do once a mutation settles:
//! which notice to show, whether the dialog closes or stays open for retry,
//! and which cached collection is stale. Components hold a flow in their
//! state and apply the returned effects; the flows themselves perform no IO.

use crate::client::ApiError;
use crate::query::QueryKey;

/// Severity of a user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient user notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Notice {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Whether a save flow persists a new record or an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveAction {
    Create,
    Update,
}

impl SaveAction {
    fn success_message(self) -> &'static str {
        match self {
            SaveAction::Create => "Player created successfully.",
            SaveAction::Update => "Player updated successfully.",
        }
    }
}

/// Effects of a settled create/update, applied by the dialog.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub notice: Notice,
    /// Close the editing surface and reset the form to defaults.
    pub close_editor: bool,
    pub invalidate: Option<QueryKey>,
}

/// Create/update lifecycle: `Idle → Saving → Idle`.
///
/// Single-flight: `begin` refuses while a save is in flight; the caller
/// keeps the submit trigger disabled for as long as [`SaveFlow::in_flight`]
/// holds. A second submit is prevented, never queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveFlow {
    action: SaveAction,
    saving: bool,
}

impl SaveFlow {
    pub fn new(action: SaveAction) -> Self {
        SaveFlow {
            action,
            saving: false,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.saving
    }

    /// Marks the flow busy. Returns false when a save is already running.
    pub fn begin(&mut self) -> bool {
        if self.saving {
            return false;
        }
        self.saving = true;
        true
    }

    /// Reduces the settled result into the effects the dialog applies. On
    /// success the editor closes; on failure it stays open and populated for
    /// retry. The players listing is marked stale either way, matching the
    /// refetch-on-settle behavior of the list view.
    pub fn settle(&mut self, result: Result<(), ApiError>) -> SaveOutcome {
        self.saving = false;
        match result {
            Ok(()) => SaveOutcome {
                notice: Notice::success(self.action.success_message()),
                close_editor: true,
                invalidate: Some(QueryKey::Players),
            },
            Err(err) => SaveOutcome {
                notice: Notice::error(err.user_message()),
                close_editor: false,
                invalidate: Some(QueryKey::Players),
            },
        }
    }
}

/// Effects of a settled delete.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteOutcome {
    pub notice: Notice,
    pub close_dialog: bool,
    pub invalidate: Option<QueryKey>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteStage {
    Confirming,
    Deleting,
    Closed,
}

/// Delete lifecycle: `Confirming → Deleting → Closed`.
///
/// The backend call may only be issued after [`DeleteFlow::confirm`]
/// succeeds; opening the dialog alone never causes a request. On failure
/// the flow returns to `Confirming` so the user can retry or cancel; the
/// dialog closes only on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteFlow {
    stage: DeleteStage,
}

impl Default for DeleteFlow {
    fn default() -> Self {
        DeleteFlow::new()
    }
}

impl DeleteFlow {
    pub fn new() -> Self {
        DeleteFlow {
            stage: DeleteStage::Confirming,
        }
    }

    pub fn in_flight(&self) -> bool {
        self.stage == DeleteStage::Deleting
    }

    pub fn is_closed(&self) -> bool {
        self.stage == DeleteStage::Closed
    }

    /// The explicit confirmation step. Returns false (and the caller must
    /// not issue the call) unless the flow is awaiting confirmation.
    pub fn confirm(&mut self) -> bool {
        if self.stage != DeleteStage::Confirming {
            return false;
        }
        self.stage = DeleteStage::Deleting;
        true
    }

    pub fn settle(&mut self, result: Result<(), ApiError>) -> DeleteOutcome {
        match result {
            Ok(()) => {
                self.stage = DeleteStage::Closed;
                DeleteOutcome {
                    notice: Notice::success("Player deleted successfully."),
                    close_dialog: true,
                    invalidate: Some(QueryKey::Players),
                }
            }
            Err(err) => {
                self.stage = DeleteStage::Confirming;
                DeleteOutcome {
                    notice: Notice::error(err.user_message()),
                    close_dialog: false,
                    invalidate: Some(QueryKey::Players),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_is_single_flight() {
        let mut flow = SaveFlow::new(SaveAction::Create);
        assert!(flow.begin());
        assert!(flow.in_flight());
        assert!(!flow.begin());

        flow.settle(Ok(()));
        assert!(!flow.in_flight());
        assert!(flow.begin());
    }

    #[test]
    fn successful_save_closes_and_invalidates() {
        let mut flow = SaveFlow::new(SaveAction::Create);
        flow.begin();
        let outcome = flow.settle(Ok(()));

        assert_eq!(outcome.notice.level, NoticeLevel::Success);
        assert_eq!(outcome.notice.message, "Player created successfully.");
        assert!(outcome.close_editor);
        assert_eq!(outcome.invalidate, Some(QueryKey::Players));
    }

    #[test]
    fn failed_save_keeps_editor_open_for_retry() {
        let mut flow = SaveFlow::new(SaveAction::Update);
        flow.begin();
        let outcome = flow.settle(Err(ApiError::Network("offline".to_string())));

        assert_eq!(outcome.notice.level, NoticeLevel::Error);
        assert!(!outcome.close_editor);
        assert_eq!(outcome.invalidate, Some(QueryKey::Players));
        // Flow is idle again so the user can resubmit.
        assert!(!flow.in_flight());
    }

    #[test]
    fn delete_requires_confirmation() {
        let mut flow = DeleteFlow::new();
        assert!(!flow.in_flight());

        assert!(flow.confirm());
        assert!(flow.in_flight());
        // Double-confirm while deleting is refused.
        assert!(!flow.confirm());
    }

    #[test]
    fn successful_delete_closes_dialog() {
        let mut flow = DeleteFlow::new();
        flow.confirm();
        let outcome = flow.settle(Ok(()));

        assert!(outcome.close_dialog);
        assert!(flow.is_closed());
        assert_eq!(outcome.invalidate, Some(QueryKey::Players));
        // A closed flow cannot fire again.
        assert!(!flow.confirm());
    }

    #[test]
    fn failed_delete_returns_to_confirmation() {
        let mut flow = DeleteFlow::new();
        flow.confirm();
        let outcome = flow.settle(Err(ApiError::Status {
            code: 500,
            message: String::new(),
        }));

        assert_eq!(outcome.notice.level, NoticeLevel::Error);
        assert!(!outcome.close_dialog);
        assert!(!flow.is_closed());
        // Retry is possible after a failure.
        assert!(flow.confirm());
    }
}
