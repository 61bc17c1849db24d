//! Status badge states and their display descriptors

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// State of the project status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeState {
    /// Nothing in flight (default)
    #[default]
    Idle,
    /// Version or metadata update in progress
    Updating,
    /// Long-running work in progress
    Processing,
}

/// Fixed display triple for a badge state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateDescriptor {
    pub icon: &'static str,
    pub label: &'static str,
    pub animated: bool,
}

const IDLE: StateDescriptor = StateDescriptor {
    icon: "🔄",
    label: "Idle",
    animated: false,
};

const UPDATING: StateDescriptor = StateDescriptor {
    icon: "⏳",
    label: "Updating...",
    animated: true,
};

const PROCESSING: StateDescriptor = StateDescriptor {
    icon: "⚙",
    label: "Processing",
    animated: true,
};

impl BadgeState {
    pub const ALL: [BadgeState; 3] = [BadgeState::Idle, BadgeState::Updating, BadgeState::Processing];

    /// Name used for persistence and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeState::Idle => "idle",
            BadgeState::Updating => "updating",
            BadgeState::Processing => "processing",
        }
    }

    pub fn descriptor(&self) -> &'static StateDescriptor {
        match self {
            BadgeState::Idle => &IDLE,
            BadgeState::Updating => &UPDATING,
            BadgeState::Processing => &PROCESSING,
        }
    }
}

impl fmt::Display for BadgeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for names outside the known state set
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown badge state: {0}")]
pub struct UnknownState(pub String);

impl FromStr for BadgeState {
    type Err = UnknownState;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| UnknownState(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_states() {
        assert_eq!("idle".parse::<BadgeState>().unwrap(), BadgeState::Idle);
        assert_eq!("updating".parse::<BadgeState>().unwrap(), BadgeState::Updating);
        assert_eq!("processing".parse::<BadgeState>().unwrap(), BadgeState::Processing);
    }

    #[test]
    fn test_parse_is_exact() {
        assert!("Idle".parse::<BadgeState>().is_err());
        assert!(" idle".parse::<BadgeState>().is_err());
        assert_eq!(
            "sleeping".parse::<BadgeState>(),
            Err(UnknownState("sleeping".to_string()))
        );
    }

    #[test]
    fn test_only_idle_is_static() {
        assert!(!BadgeState::Idle.descriptor().animated);
        assert!(BadgeState::Updating.descriptor().animated);
        assert!(BadgeState::Processing.descriptor().animated);
        assert_eq!(BadgeState::default(), BadgeState::Idle);
    }
}
