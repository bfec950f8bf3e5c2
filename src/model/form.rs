use validator::{ValidateUrl, ValidationError};

use crate::model::{groups_for_division, Division, DivisionGroup, Player};

/// Raw field contents of the player form, exactly as the inputs hold them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerFormValues {
    pub full_name: String,
    pub photo_url: String,
    pub rating: String,
    pub division_id: String,
    pub group_id: String,
}

impl PlayerFormValues {
    /// Defaults for the add dialog. Rating starts at 0 like the backend
    /// default.
    pub fn for_new_player() -> Self {
        PlayerFormValues {
            rating: "0".to_string(),
            ..PlayerFormValues::default()
        }
    }

    /// Initial values for editing an existing record.
    pub fn from_player(player: &Player) -> Self {
        PlayerFormValues {
            full_name: player.full_name.clone(),
            photo_url: player.photo_url.clone().unwrap_or_default(),
            rating: format_rating(player.rating),
            division_id: player.division_id.clone(),
            group_id: player.group_id.clone().unwrap_or_default(),
        }
    }
}

fn format_rating(rating: f64) -> String {
    if rating.fract() == 0.0 {
        (rating as i64).to_string()
    } else {
        rating.to_string()
    }
}

/// A fully validated form submission, ready to become a payload.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    pub full_name: String,
    pub photo_url: Option<String>,
    pub rating: f64,
    pub division_id: String,
    pub group_id: Option<String>,
}

/// Per-field validation messages, rendered inline next to each input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub full_name: Option<String>,
    pub photo_url: Option<String>,
    pub rating: Option<String>,
    pub division_id: Option<String>,
    pub group_id: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.photo_url.is_none()
            && self.rating.is_none()
            && self.division_id.is_none()
            && self.group_id.is_none()
    }
}

pub fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(field_error("full_name_required", "Full name is required."));
    }
    if trimmed.chars().count() < 2 {
        return Err(field_error(
            "full_name_length",
            "Name must be at least 2 characters.",
        ));
    }
    Ok(())
}

pub fn validate_photo_url(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if !value.validate_url() {
        return Err(field_error("photo_url_format", "Enter a valid URL."));
    }
    Ok(())
}

pub fn validate_rating(value: &str) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(field_error("rating_required", "Rating is required."));
    }
    let rating: f64 = trimmed
        .parse()
        .map_err(|_| field_error("rating_number", "Rating must be a number."))?;
    if !rating.is_finite() {
        return Err(field_error("rating_number", "Rating must be a number."));
    }
    if rating < 0.0 {
        return Err(field_error("rating_range", "Rating must be 0 or higher."));
    }
    Ok(())
}

fn field_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn message_of(result: Result<(), ValidationError>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(err) => err.message.map(|message| message.to_string()),
    }
}

/// In-progress edit state of one player record.
///
/// Holds the raw field strings plus the initial snapshot used by
/// [`PlayerFormState::reset`]. The division → group dependency is enforced
/// inside [`PlayerFormState::set_division_id`], so a stale cross-division
/// group reference is cleared in the same transition that changes the
/// division and can never survive into a submittable state.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerFormState {
    initial: PlayerFormValues,
    values: PlayerFormValues,
}

impl PlayerFormState {
    pub fn new(initial: PlayerFormValues) -> Self {
        PlayerFormState {
            values: initial.clone(),
            initial,
        }
    }

    pub fn values(&self) -> &PlayerFormValues {
        &self.values
    }

    pub fn set_full_name(&mut self, value: String) {
        self.values.full_name = value;
    }

    pub fn set_photo_url(&mut self, value: String) {
        self.values.photo_url = value;
    }

    pub fn set_rating(&mut self, value: String) {
        self.values.rating = value;
    }

    pub fn set_group_id(&mut self, value: String) {
        self.values.group_id = value;
    }

    /// Changes the division and re-enforces the group invariant: if the
    /// selected group does not belong to the new division (or no division is
    /// selected), the group selection is cleared.
    pub fn set_division_id(&mut self, value: String, groups: &[DivisionGroup]) {
        self.values.division_id = value;

        if self.values.group_id.is_empty() {
            return;
        }
        let stale = self.values.division_id.is_empty()
            || !self
                .available_groups(groups)
                .iter()
                .any(|group| group.id == self.values.group_id);
        if stale {
            self.values.group_id.clear();
        }
    }

    /// Groups selectable under the current division, in listing order.
    pub fn available_groups<'a>(&self, groups: &'a [DivisionGroup]) -> Vec<&'a DivisionGroup> {
        if self.values.division_id.is_empty() {
            return Vec::new();
        }
        groups_for_division(groups, &self.values.division_id)
    }

    pub fn errors(&self, divisions: &[Division], groups: &[DivisionGroup]) -> FieldErrors {
        let mut errors = FieldErrors {
            full_name: message_of(validate_full_name(&self.values.full_name)),
            photo_url: message_of(validate_photo_url(&self.values.photo_url)),
            rating: message_of(validate_rating(&self.values.rating)),
            division_id: None,
            group_id: None,
        };

        let division_known = divisions
            .iter()
            .any(|division| division.id == self.values.division_id);
        if self.values.division_id.is_empty() || !division_known {
            errors.division_id = Some("Select a division.".to_string());
        }

        if !self.values.group_id.is_empty() {
            let group_available = self
                .available_groups(groups)
                .iter()
                .any(|group| group.id == self.values.group_id);
            if !group_available {
                errors.group_id = Some("Select a group from the chosen division.".to_string());
            }
        }

        errors
    }

    pub fn is_valid(&self, divisions: &[Division], groups: &[DivisionGroup]) -> bool {
        self.errors(divisions, groups).is_empty()
    }

    /// The submit gate: false while any field is invalid, while a submission
    /// is in flight, or while the caller disabled the form externally.
    pub fn can_submit(
        &self,
        divisions: &[Division],
        groups: &[DivisionGroup],
        busy: bool,
        disabled: bool,
    ) -> bool {
        !busy && !disabled && self.is_valid(divisions, groups)
    }

    /// Converts the current fields into a validated draft, or `None` while
    /// any rule fails.
    pub fn draft(&self, divisions: &[Division], groups: &[DivisionGroup]) -> Option<PlayerDraft> {
        if !self.is_valid(divisions, groups) {
            return None;
        }
        let rating: f64 = self.values.rating.trim().parse().ok()?;
        Some(PlayerDraft {
            full_name: self.values.full_name.trim().to_string(),
            photo_url: none_if_empty(&self.values.photo_url),
            rating,
            division_id: self.values.division_id.clone(),
            group_id: none_if_empty(&self.values.group_id),
        })
    }

    /// Restores the initial snapshot. Used by cancel, which performs no
    /// remote call.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
    }
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
