// SPDX-License-Identifier: GPL-3.0-only

//! Message handler modules
//!
//! This module organizes message handlers by functional domain,
//! keeping related functionality together for easier maintenance.

pub mod camera;
pub mod capture;
pub mod settings;

use crate::errors::ActionError;
use crate::ui_state::SingleSelectableUiState;
use std::fmt::Debug;

/// Check that a user-picked `value` is offered and selectable
///
/// An empty option list means the control is not shown at all.
pub(crate) fn require_selectable<T: Copy + PartialEq + Debug>(
    concern: &'static str,
    options: &[SingleSelectableUiState<T>],
    value: T,
) -> Result<(), ActionError> {
    if options.is_empty() {
        return Err(ActionError::Unavailable { concern });
    }
    match options.iter().find(|option| option.value() == value) {
        None => Err(ActionError::NotOffered {
            concern,
            value: format!("{:?}", value),
        }),
        Some(SingleSelectableUiState::Disabled { reason, .. }) => Err(ActionError::Disabled {
            concern,
            value: format!("{:?}", value),
            reason: *reason,
        }),
        Some(SingleSelectableUiState::Selectable { .. }) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FlashMode;
    use crate::ui_state::DisabledReason;

    #[test]
    fn test_require_selectable() {
        let options = vec![
            SingleSelectableUiState::selectable(FlashMode::Off),
            SingleSelectableUiState::disabled(
                FlashMode::On,
                DisabledReason::HdrUnsupportedConcurrentCamera,
            ),
        ];
        assert_eq!(require_selectable("flash mode", &options, FlashMode::Off), Ok(()));
        assert!(matches!(
            require_selectable("flash mode", &options, FlashMode::On),
            Err(ActionError::Disabled { .. })
        ));
        assert!(matches!(
            require_selectable("flash mode", &options, FlashMode::Auto),
            Err(ActionError::NotOffered { .. })
        ));
        assert_eq!(
            require_selectable::<FlashMode>("flash mode", &[], FlashMode::Off),
            Err(ActionError::Unavailable {
                concern: "flash mode"
            })
        );
    }
}
