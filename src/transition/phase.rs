use crate::consts::{MELT_DURATION, TRANSITION_DURATION};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strum_macros::{Display, EnumIter, EnumString};

/// Cover animation phases, in the only order they may occur.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, Display, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Outgoing page is being covered.
    Melt,
    /// Incoming page is being uncovered. Content has already been swapped.
    Reform,
    /// Idle.
    Complete,
}

impl Phase {
    pub fn next(self) -> Option<Phase> {
        match self {
            Self::Melt => Some(Self::Reform),
            Self::Reform => Some(Self::Complete),
            Self::Complete => None,
        }
    }

    /// Offset from `begin()` at which this phase ends.
    pub fn ends_at(self) -> Option<Duration> {
        match self {
            Self::Melt => Some(MELT_DURATION),
            Self::Reform => Some(TRANSITION_DURATION),
            Self::Complete => None,
        }
    }
}

/// A navigation event asking for a cover animation between two pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionRequest {
    pub from_page: String,
    pub to_page: String,
    pub is_active: bool,
}

impl TransitionRequest {
    pub fn new(from_page: impl Into<String>, to_page: impl Into<String>) -> Self {
        Self {
            from_page: from_page.into(),
            to_page: to_page.into(),
            is_active: true,
        }
    }

    /// The caller lowering its `is_active` flag for this page pair.
    pub fn inactive(from_page: impl Into<String>, to_page: impl Into<String>) -> Self {
        Self {
            is_active: false,
            ..Self::new(from_page, to_page)
        }
    }
}

/// What a rendering surface needs to draw the cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSnapshot {
    pub phase: Phase,
    pub is_active: bool,
    pub from_page: Option<String>,
    pub to_page: Option<String>,
}

impl TransitionSnapshot {
    /// False once the caller is inactive and the cover has finished.
    pub fn is_transitioning(&self) -> bool {
        self.is_active || self.phase != Phase::Complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_phases_only_move_forward() {
        let order: Vec<Phase> = Phase::iter().collect();
        assert_eq!(order, vec![Phase::Melt, Phase::Reform, Phase::Complete]);
        for pair in order.windows(2) {
            assert_eq!(pair[0].next(), Some(pair[1]));
        }
        assert_eq!(Phase::Complete.next(), None);
    }

    #[test]
    fn test_phase_names() {
        assert_eq!(Phase::Reform.to_string(), "reform");
        assert_eq!(Phase::from_str("melt").unwrap(), Phase::Melt);
    }

    #[test]
    fn test_idle_snapshot() {
        let snap = TransitionSnapshot {
            phase: Phase::Complete,
            is_active: false,
            from_page: None,
            to_page: None,
        };
        assert!(!snap.is_transitioning());
        assert!(TransitionSnapshot {
            is_active: true,
            ..snap.clone()
        }
        .is_transitioning());
        assert!(TransitionSnapshot {
            phase: Phase::Reform,
            ..snap
        }
        .is_transitioning());
    }
}
