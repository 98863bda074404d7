//! Asset readiness gate
//!
//! The host registers what must be loaded before play and reports each
//! outcome. The loop driver asks `is_ready` before every start.

use std::collections::BTreeMap;

use crate::error::StartError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AssetStatus {
    Pending,
    Loaded,
    Failed,
}

/// Named required assets and their load status
#[derive(Debug, Clone, Default)]
pub struct AssetGate {
    assets: BTreeMap<String, AssetStatus>,
}

impl AssetGate {
    /// Gate with nothing required (always ready)
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate waiting on the given assets
    pub fn requiring<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut gate = Self::new();
        for name in names {
            gate.require(name);
        }
        gate
    }

    pub fn require(&mut self, name: impl Into<String>) {
        self.assets.insert(name.into(), AssetStatus::Pending);
    }

    pub fn mark_loaded(&mut self, name: &str) {
        self.set(name, AssetStatus::Loaded);
    }

    pub fn mark_failed(&mut self, name: &str) {
        log::warn!("Asset failed to load: {name}");
        self.set(name, AssetStatus::Failed);
    }

    fn set(&mut self, name: &str, status: AssetStatus) {
        match self.assets.get_mut(name) {
            Some(slot) => *slot = status,
            None => log::debug!("Ignoring status for unregistered asset {name}"),
        }
    }

    pub fn is_ready(&self) -> bool {
        self.assets.values().all(|s| *s == AssetStatus::Loaded)
    }

    fn names_with(&self, status: AssetStatus) -> Vec<String> {
        self.assets
            .iter()
            .filter(|(_, s)| **s == status)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// `Ok` when ready, otherwise what is still missing
    pub fn check(&self) -> Result<(), StartError> {
        if self.is_ready() {
            Ok(())
        } else {
            Err(StartError::AssetsNotReady {
                pending: self.names_with(AssetStatus::Pending),
                failed: self.names_with(AssetStatus::Failed),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_gate_is_ready() {
        assert!(AssetGate::new().is_ready());
        assert!(AssetGate::new().check().is_ok());
    }

    #[test]
    fn test_ready_after_all_loaded() {
        let mut gate = AssetGate::requiring(["renderer", "audio"]);
        assert!(!gate.is_ready());

        gate.mark_loaded("renderer");
        assert_eq!(
            gate.check(),
            Err(StartError::AssetsNotReady {
                pending: vec!["audio".into()],
                failed: vec![],
            })
        );

        gate.mark_loaded("audio");
        assert!(gate.is_ready());
    }

    #[test]
    fn test_failure_blocks() {
        let mut gate = AssetGate::requiring(["audio"]);
        gate.mark_failed("audio");
        gate.mark_loaded("unknown");
        assert_eq!(
            gate.check(),
            Err(StartError::AssetsNotReady {
                pending: vec![],
                failed: vec!["audio".into()],
            })
        );
    }
}
