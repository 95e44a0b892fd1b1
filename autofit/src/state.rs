// Copyright 2025 the Autofit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::FitConfig;

/// The mutable part of fitting, owned by one widget for its whole lifetime.
///
/// Only [`fit`](crate::fit) produces new states; hosts store the state from
/// the last [`FitReport`](crate::FitReport) and pass it back on the next call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitState {
    current_size: f64,
    has_shrunk: bool,
}

impl FitState {
    /// Starts fitting from the widget's initial font size.
    ///
    /// The size is clamped into the configured range.
    #[must_use]
    pub fn new(config: &FitConfig, initial_size: f64) -> Self {
        Self::resume(config, initial_size, false)
    }

    /// Rebuilds a state directly, e.g. when restoring a widget.
    ///
    /// The size is clamped into the configured range.
    #[must_use]
    pub fn resume(config: &FitConfig, current_size: f64, has_shrunk: bool) -> Self {
        Self {
            current_size: config.clamp(current_size),
            has_shrunk,
        }
    }

    pub(crate) fn from_parts(current_size: f64, has_shrunk: bool) -> Self {
        Self {
            current_size,
            has_shrunk,
        }
    }

    /// The active font size.
    #[must_use]
    pub fn current_size(&self) -> f64 {
        self.current_size
    }

    /// Whether the size has ever been reduced.
    ///
    /// Growing back toward the maximum is only allowed once this is set, and
    /// it is never cleared.
    #[must_use]
    pub fn has_shrunk(&self) -> bool {
        self.has_shrunk
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_clamped_and_unshrunk() {
        let config = FitConfig::new(Some(10.0), Some(30.0), 30.0);
        let state = FitState::new(&config, 45.0);
        assert_eq!(state.current_size(), 30.0, "initial size clamped to maximum");
        assert!(!state.has_shrunk(), "fresh state has not shrunk");
    }

    #[test]
    fn resume_keeps_the_shrunk_flag() {
        let config = FitConfig::new(Some(10.0), Some(30.0), 30.0);
        let state = FitState::resume(&config, 4.0, true);
        assert_eq!(state.current_size(), 10.0, "resumed size clamped to minimum");
        assert!(state.has_shrunk(), "flag carried over");
    }
}
