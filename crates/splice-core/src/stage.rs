//! Lifecycle of a single edit

use std::fmt;

use serde::Serialize;

/// How far an edit got.
///
/// An edit moves `Unstarted → Loaded → Located → Spliced → Persisted`, or to
/// `Failed` from any step. Nothing is retained once a terminal stage is
/// reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Unstarted,
    Loaded,
    Located,
    Spliced,
    Persisted,
    Failed,
}

impl Stage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Persisted | Self::Failed)
    }

    /// The stage that follows this one on success.
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Unstarted => Some(Self::Loaded),
            Self::Loaded => Some(Self::Located),
            Self::Located => Some(Self::Spliced),
            Self::Spliced => Some(Self::Persisted),
            Self::Persisted | Self::Failed => None,
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unstarted => "unstarted",
            Self::Loaded => "loaded",
            Self::Located => "located",
            Self::Spliced => "spliced",
            Self::Persisted => "persisted",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_path_ends_persisted() {
        let mut stage = Stage::Unstarted;
        let mut seen = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                Stage::Unstarted,
                Stage::Loaded,
                Stage::Located,
                Stage::Spliced,
                Stage::Persisted
            ]
        );
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_failed_is_terminal() {
        assert!(Stage::Failed.is_terminal());
        assert_eq!(Stage::Failed.next(), None);
        assert!(!Stage::Spliced.is_terminal());
    }
}
