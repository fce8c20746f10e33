//! Ordered groups of variable lines and their activation state.
//!
//! The model is a passive record: it answers questions about the current state
//! but never decides transitions. The editor owns every mutation.

use std::collections::HashMap;

use crate::{ConfigLine, Error, Result, Variable};

/// A named cluster of alternative lines that is enabled or disabled as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariableGroup {
    /// Stable identifier, unique within a model.
    key: String,
    /// Lines in file order.
    lines: Vec<ConfigLine>,
    /// Whether the group as a whole is enabled.
    pub is_active: bool,
    /// Index into `lines` of the live selection. Only meaningful while active.
    pub active_line: Option<usize>,
    /// Most recent selection held while active; survives deactivation.
    pub last_active_line: Option<usize>,
}

impl VariableGroup {
    /// An inactive group that has never had a selection.
    pub fn new(key: impl Into<String>, lines: Vec<ConfigLine>) -> Self {
        Self {
            key: key.into(),
            lines,
            is_active: false,
            active_line: None,
            last_active_line: None,
        }
    }

    /// Mark the group active with `line` as the live selection.
    pub fn with_active(mut self, line: usize) -> Self {
        self.is_active = true;
        self.active_line = Some(line);
        self.last_active_line = Some(line);
        self
    }

    /// Group identifier.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Lines in file order.
    pub fn lines(&self) -> &[ConfigLine] {
        &self.lines
    }

    /// The variable at `index`, or `None` when out of range or not a variable.
    pub fn variable_at(&self, index: usize) -> Option<&Variable> {
        self.lines.get(index).and_then(ConfigLine::as_variable)
    }

    /// True when `index` points at a variable line.
    pub fn is_variable_index(&self, index: usize) -> bool {
        self.variable_at(index).is_some()
    }

    /// Positions of the variable lines, in order.
    pub fn variable_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.as_variable().is_some())
            .map(|(i, _)| i)
    }

    /// Position of the first variable line.
    pub fn first_variable(&self) -> Option<usize> {
        self.variable_indices().next()
    }

    /// The line that is written uncommented: the active line of an active group,
    /// provided it points at a variable.
    pub fn live_line(&self) -> Option<usize> {
        if !self.is_active {
            return None;
        }
        self.active_line.filter(|&i| self.is_variable_index(i))
    }

    /// Append a line, returning its index.
    pub(crate) fn push_line(&mut self, line: ConfigLine) -> usize {
        self.lines.push(line);
        self.lines.len() - 1
    }
}

/// The whole document: groups in display order plus a lookup by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigModel {
    /// Group keys in file order. Never contains duplicates.
    group_order: Vec<String>,
    /// Groups by key. Holds exactly the keys in `group_order`.
    groups: HashMap<String, VariableGroup>,
}

impl ConfigModel {
    /// An empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a model from groups in display order.
    pub fn from_groups(groups: impl IntoIterator<Item = VariableGroup>) -> Result<Self> {
        let mut model = Self::new();
        for group in groups {
            model.push_group(group)?;
        }
        Ok(model)
    }

    /// Append a group, returning its index. Fails if the key is already taken.
    pub fn push_group(&mut self, group: VariableGroup) -> Result<usize> {
        if self.groups.contains_key(group.key()) {
            return Err(Error::DuplicateGroup(group.key().to_string()));
        }
        self.group_order.push(group.key().to_string());
        self.groups.insert(group.key().to_string(), group);
        Ok(self.group_order.len() - 1)
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.group_order.len()
    }

    /// True when the model has no groups.
    pub fn is_empty(&self) -> bool {
        self.group_order.is_empty()
    }

    /// Group keys in display order.
    pub fn group_order(&self) -> &[String] {
        &self.group_order
    }

    /// Position of `key` in the display order.
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.group_order.iter().position(|k| k == key)
    }

    /// Look a group up by key.
    pub fn group(&self, key: &str) -> Option<&VariableGroup> {
        self.groups.get(key)
    }

    /// Mutable lookup by key.
    pub fn group_mut(&mut self, key: &str) -> Option<&mut VariableGroup> {
        self.groups.get_mut(key)
    }

    /// Group at display position `index`.
    pub fn group_at(&self, index: usize) -> Option<&VariableGroup> {
        self.group_order.get(index).and_then(|k| self.groups.get(k))
    }

    /// Mutable group at display position `index`.
    pub fn group_at_mut(&mut self, index: usize) -> Option<&mut VariableGroup> {
        let key = self.group_order.get(index)?;
        self.groups.get_mut(key)
    }

    /// Groups in display order.
    ///
    /// # Panics
    ///
    /// Panics if a key in the order has no group, which means the model was
    /// corrupted upstream.
    pub fn iter(&self) -> impl Iterator<Item = &VariableGroup> {
        self.group_order.iter().map(|key| {
            self.groups
                .get(key)
                .unwrap_or_else(|| panic!("group `{key}` is ordered but missing from the model"))
        })
    }
}
