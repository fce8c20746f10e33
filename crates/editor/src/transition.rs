//! Activation transitions for a single group.
//!
//! Each function returns `true` when it changed the group.

use envfile::VariableGroup;

/// Turn an active group off, remembering its selection.
pub fn deactivate(group: &mut VariableGroup) -> bool {
    if !group.is_active {
        return false;
    }
    group.last_active_line = group.active_line;
    group.is_active = false;
    true
}

/// Turn an inactive group on.
///
/// The remembered selection is restored when it still names a variable line;
/// otherwise the first variable line is chosen. A group without variable lines
/// stays off.
pub fn activate(group: &mut VariableGroup) -> bool {
    if group.is_active {
        return false;
    }
    let line = group
        .last_active_line
        .filter(|&i| group.is_variable_index(i))
        .or_else(|| group.first_variable());
    let Some(line) = line else {
        return false;
    };
    group.is_active = true;
    group.active_line = Some(line);
    group.last_active_line = Some(line);
    true
}

/// Flip a group between on and off.
pub fn toggle_group(group: &mut VariableGroup) -> bool {
    if group.is_active {
        deactivate(group)
    } else {
        activate(group)
    }
}

/// Make `line` the live selection, turning the group on if needed.
pub fn select(group: &mut VariableGroup, line: usize) -> bool {
    if !group.is_variable_index(line) {
        return false;
    }
    if group.is_active && group.active_line == Some(line) {
        return false;
    }
    group.is_active = true;
    group.active_line = Some(line);
    group.last_active_line = Some(line);
    true
}
