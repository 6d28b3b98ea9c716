//! Hook registry.
//!
//! Applications mark points in their output (for example shell prompt
//! boundaries) with `ESC P <name> ESC \`. The sequence prints nothing; if
//! `<name>` is registered, its fired flag is raised until drained.

use std::collections::HashMap;

use tracing::trace;

/// Names of interest and whether each fired since it was last checked.
#[derive(Debug, Clone, Default)]
pub struct HookRegistry {
    fired: HashMap<String, bool>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register interest in `names`, replacing any previous registrations.
    pub fn set_hooks<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fired = names.into_iter().map(|n| (n.into(), false)).collect();
    }

    /// Drain the fired flag for `name`.
    ///
    /// Returns `None` if `name` was never registered, otherwise whether it
    /// fired since the last call.
    pub fn hook(&mut self, name: &str) -> Option<bool> {
        self.fired.get_mut(name).map(std::mem::take)
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.fired.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fired.keys().map(String::as_str)
    }

    /// Record an occurrence of `name`. Unregistered names are ignored.
    pub(crate) fn fire(&mut self, name: &str) {
        match self.fired.get_mut(name) {
            Some(flag) => *flag = true,
            None => trace!(name = %name, "Ignoring unregistered hook"),
        }
    }
}

/// Build the byte sequence that fires hook `name`.
pub fn hook_sequence(name: &str) -> String {
    format!("\x1bP{}\x1b\\", name)
}
