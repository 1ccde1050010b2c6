use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

/// Key bindings as they appear in a preset file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
struct BindingTable {
    bindings: FxHashMap<KeyAction, String>,
}

/// Which key triggers each [`KeyAction`].
///
/// A preset only lists the actions it rebinds; the rest keep their stock
/// keys. Each key string (`KeyboardEvent.code`) maps to at most one action:
/// binding a key that is already taken unbinds its previous action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BindingTable", into = "BindingTable")]
pub struct KeybindingOptions {
    by_action: FxHashMap<KeyAction, String>,
    by_key: FxHashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let mut opts = Self {
            by_action: FxHashMap::default(),
            by_key: FxHashMap::default(),
        };
        opts.bind(KeyAction::PanLeft, "ArrowLeft");
        opts.bind(KeyAction::PanRight, "ArrowRight");
        opts.bind(KeyAction::Cancel, "Escape");
        opts
    }
}

impl From<BindingTable> for KeybindingOptions {
    fn from(table: BindingTable) -> Self {
        let mut opts = Self::default();
        // Clear overridden keys first so swapped bindings do not evict
        // each other.
        for action in table.bindings.keys() {
            opts.unbind(*action);
        }
        for (action, key) in table.bindings {
            opts.bind(action, key);
        }
        opts
    }
}

impl From<KeybindingOptions> for BindingTable {
    fn from(opts: KeybindingOptions) -> Self {
        Self {
            bindings: opts.by_action,
        }
    }
}

impl KeybindingOptions {
    /// Bind `action` to `key`, replacing the action's previous key and the
    /// key's previous action.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let key = key.into();
        self.unbind(action);
        if let Some(previous) = self.by_key.insert(key.clone(), action) {
            let _ = self.by_action.remove(&previous);
        }
        let _ = self.by_action.insert(action, key);
    }

    /// Remove `action`'s binding, if any.
    pub fn unbind(&mut self, action: KeyAction) {
        if let Some(key) = self.by_action.remove(&action) {
            let _ = self.by_key.remove(&key);
        }
    }

    /// The action bound to `key`.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.by_key.get(key).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rebinding_a_taken_key_evicts_its_action() {
        let mut keys = KeybindingOptions::default();
        keys.bind(KeyAction::Cancel, "ArrowLeft");
        assert_eq!(keys.lookup("ArrowLeft"), Some(KeyAction::Cancel));
        assert!(!keys.by_action.contains_key(&KeyAction::PanLeft));
        assert_eq!(keys.lookup("Escape"), None);
    }

    #[test]
    fn preset_can_swap_keys() {
        let table = BindingTable {
            bindings: [
                (KeyAction::PanLeft, "ArrowRight".to_owned()),
                (KeyAction::PanRight, "ArrowLeft".to_owned()),
            ]
            .into_iter()
            .collect(),
        };
        let keys = KeybindingOptions::from(table);
        assert_eq!(keys.lookup("ArrowRight"), Some(KeyAction::PanLeft));
        assert_eq!(keys.lookup("ArrowLeft"), Some(KeyAction::PanRight));
        assert_eq!(keys.lookup("Escape"), Some(KeyAction::Cancel));
    }
}
