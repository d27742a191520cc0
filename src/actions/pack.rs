use std::collections::HashMap;
use std::path::PathBuf;

use crate::actions::action::Action;

/// The parsed contents of one configuration file
#[derive(Debug, Clone, Default)]
pub struct Pack {
    /// File this pack was loaded from
    pub path: PathBuf,
    pub default: Option<Action>,
    pub actions: Vec<Action>,
    pub env: HashMap<String, String>,
    pub shell: String,
}

/// An action paired with the pack that declared it.
///
/// Only produced by lookups; the pack is borrowed for shell and env fallback.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedAction<'a> {
    pub action: &'a Action,
    pub owner: &'a Pack,
}

impl<'a> ResolvedAction<'a> {
    /// Interpreter for this action: its own shell, else the owner's, else `default_shell`.
    #[must_use]
    pub fn shell(&self, default_shell: &'a str) -> &'a str {
        let (action, owner) = (self.action, self.owner);
        action
            .shell
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| Some(owner.shell.as_str()).filter(|s| !s.is_empty()))
            .unwrap_or(default_shell)
    }

    /// Environment entries in application order: owner first, then the action's own.
    pub fn env(&self) -> impl Iterator<Item = (&'a String, &'a String)> + use<'a> {
        let (action, owner) = (self.action, self.owner);
        owner.env.iter().chain(action.env.iter())
    }
}

impl Pack {
    /// Actions that pass validation, in declaration order
    pub fn valid_actions(&self) -> impl Iterator<Item = &Action> {
        self.actions.iter().filter(|a| a.is_valid())
    }

    /// Find the first valid action called `name` in this pack.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<ResolvedAction<'_>> {
        self.valid_actions()
            .find(|a| a.name == name)
            .map(|action| ResolvedAction {
                action,
                owner: self,
            })
    }

    /// This pack's default action, if one is declared and valid.
    #[must_use]
    pub fn default_action(&self) -> Option<ResolvedAction<'_>> {
        self.default
            .as_ref()
            .filter(|a| a.is_valid())
            .map(|action| ResolvedAction {
                action,
                owner: self,
            })
    }
}
