//! The flattening algorithm.

use envfile::{ConfigModel, VariableGroup};
use tracing::trace;

use crate::{DisplayRow, Glyphs, Marker};

/// Project `model` using the default glyphs.
pub fn project(model: &ConfigModel) -> Vec<DisplayRow> {
    project_with(model, &Glyphs::default())
}

/// Project `model` into display rows, one header per group followed by one row
/// per variable line. Comment, blank and other lines produce no rows.
///
/// # Panics
///
/// Panics if the model lists a group key it does not hold.
pub fn project_with(model: &ConfigModel, glyphs: &Glyphs) -> Vec<DisplayRow> {
    let mut rows = Vec::new();
    for (group_index, group) in model.iter().enumerate() {
        rows.push(header_row(group_index, group));
        let checked = checked_line(group);
        for value_index in group.variable_indices() {
            let Some(var) = group.variable_at(value_index) else {
                continue;
            };
            let is_empty = var.value.is_empty();
            rows.push(DisplayRow {
                is_header: false,
                group_index,
                value_index: Some(value_index),
                marker: if checked == Some(value_index) {
                    Marker::Selected
                } else {
                    Marker::Unselected
                },
                label: if is_empty {
                    glyphs.empty_value.clone()
                } else {
                    var.value.clone()
                },
                is_disabled: !group.is_active,
                is_selected: group.is_active && group.active_line == Some(value_index),
                is_empty_placeholder: is_empty,
                is_cursor: false,
            });
        }
    }
    trace!(groups = model.len(), rows = rows.len(), "projected");
    rows
}

/// Header row for a group. Headers stay interactable when the group is off.
fn header_row(group_index: usize, group: &VariableGroup) -> DisplayRow {
    DisplayRow {
        is_header: true,
        group_index,
        value_index: None,
        marker: if group.is_active {
            Marker::GroupEnabled
        } else {
            Marker::GroupDisabled
        },
        label: group.key().to_string(),
        is_disabled: false,
        is_selected: group.is_active,
        is_empty_placeholder: false,
        is_cursor: false,
    }
}

/// The line that shows the selected marker: the live line of an active group,
/// or the remembered line of an inactive one when it still names a variable.
fn checked_line(group: &VariableGroup) -> Option<usize> {
    if group.is_active {
        group.active_line
    } else {
        group
            .last_active_line
            .filter(|&i| group.is_variable_index(i))
    }
}

/// Flag the row under the cursor. Any previous cursor flag is cleared.
pub fn mark_cursor(rows: &mut [DisplayRow], cursor: usize) {
    for (i, row) in rows.iter_mut().enumerate() {
        row.is_cursor = i == cursor;
    }
}

/// Position of the row for `(group_index, value_index)`.
pub fn row_position(
    rows: &[DisplayRow],
    group_index: usize,
    value_index: Option<usize>,
) -> Option<usize> {
    rows.iter()
        .position(|r| r.group_index == group_index && r.value_index == value_index)
}

#[cfg(test)]
mod tests {
    use envfile::{ConfigLine, VariableGroup};

    use super::*;

    fn db_group() -> VariableGroup {
        VariableGroup::new(
            "db",
            vec![ConfigLine::variable("url", "a"), ConfigLine::variable("url", "")],
        )
    }

    fn model(groups: Vec<VariableGroup>) -> ConfigModel {
        ConfigModel::from_groups(groups).unwrap()
    }

    fn markers(rows: &[DisplayRow]) -> Vec<Marker> {
        rows.iter().map(|r| r.marker).collect()
    }

    #[test]
    fn active_group_scenario() {
        let rows = project(&model(vec![db_group().with_active(0)]));
        assert_eq!(rows.len(), 3);

        assert!(rows[0].is_header);
        assert_eq!(rows[0].marker, Marker::GroupEnabled);
        assert_eq!(rows[0].label, "db");
        assert_eq!(rows[0].value_index, None);

        assert_eq!(rows[1].marker, Marker::Selected);
        assert_eq!(rows[1].label, "a");
        assert!(!rows[1].is_disabled);
        assert!(rows[1].is_selected);

        assert_eq!(rows[2].marker, Marker::Unselected);
        assert_eq!(rows[2].label, Glyphs::default().empty_value);
        assert!(rows[2].is_empty_placeholder);
        assert!(!rows[2].is_disabled);
        assert!(!rows[2].is_selected);
    }

    #[test]
    fn inactive_group_shows_remembered_choice() {
        let mut g = db_group();
        g.last_active_line = Some(1);
        let rows = project(&model(vec![g]));

        assert_eq!(
            markers(&rows),
            [Marker::GroupDisabled, Marker::Unselected, Marker::Selected]
        );
        assert!(!rows[0].is_disabled);
        assert!(!rows[0].is_selected);
        assert!(rows[1].is_disabled && rows[2].is_disabled);
        assert!(!rows[2].is_selected, "remembered choice is not live");
    }

    #[test]
    fn projection_is_deterministic() {
        let m = model(vec![
            db_group().with_active(1),
            VariableGroup::new("empty", vec![]),
            VariableGroup::new("x", vec![ConfigLine::variable("x", "1")]),
        ]);
        assert_eq!(project(&m), project(&m));
    }

    #[test]
    fn one_header_per_group() {
        let m = model(vec![
            db_group(),
            VariableGroup::new("empty", vec![]),
            VariableGroup::new("notes", vec![ConfigLine::Comment("# n".into())]),
        ]);
        let rows = project(&m);
        assert_eq!(rows.iter().filter(|r| r.is_header).count(), m.len());
    }

    #[test]
    fn at_most_one_selected_marker_per_group() {
        let mut inactive = VariableGroup::new(
            "b",
            vec![
                ConfigLine::variable("b", "1"),
                ConfigLine::variable("b", "2"),
                ConfigLine::variable("b", "3"),
            ],
        );
        inactive.last_active_line = Some(2);
        let m = model(vec![db_group().with_active(1), inactive]);
        let rows = project(&m);
        for g in 0..m.len() {
            let selected = rows
                .iter()
                .filter(|r| r.group_index == g && r.marker == Marker::Selected)
                .count();
            assert!(selected <= 1, "group {g} has {selected} selected rows");
        }
    }

    #[test]
    fn reactivation_restores_selection() {
        let mut m = model(vec![db_group().with_active(1)]);
        let selected = |m: &ConfigModel| project(m)[2].marker;
        assert_eq!(selected(&m), Marker::Selected);

        let g = m.group_at_mut(0).unwrap();
        g.last_active_line = g.active_line;
        g.is_active = false;
        assert_eq!(selected(&m), Marker::Selected);
        assert!(project(&m)[2].is_disabled);

        let g = m.group_at_mut(0).unwrap();
        g.is_active = true;
        g.active_line = g.last_active_line;
        assert_eq!(selected(&m), Marker::Selected);
        assert!(project(&m)[2].is_selected);
    }

    #[test]
    fn stale_remembered_index_selects_nothing() {
        let mut g = db_group();
        g.last_active_line = Some(99);
        let rows = project(&model(vec![g]));
        assert!(rows[1..].iter().all(|r| r.marker == Marker::Unselected));
        assert!(rows[1..].iter().all(|r| r.is_disabled));
    }

    #[test]
    fn remembered_index_on_comment_selects_nothing() {
        let mut g = VariableGroup::new(
            "c",
            vec![ConfigLine::Comment("# c".into()), ConfigLine::variable("c", "1")],
        );
        g.last_active_line = Some(0);
        let rows = project(&model(vec![g]));
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].marker, Marker::Unselected);
        assert_eq!(rows[1].value_index, Some(1));
    }

    #[test]
    fn never_selected_inactive_group_is_all_unselected() {
        let rows = project(&model(vec![db_group()]));
        assert_eq!(
            markers(&rows),
            [Marker::GroupDisabled, Marker::Unselected, Marker::Unselected]
        );
    }

    #[test]
    fn empty_group_renders_header_only() {
        let rows = project(&model(vec![VariableGroup::new("lonely", vec![])]));
        assert_eq!(rows.len(), 1);
        assert!(rows[0].is_header);
    }

    #[test]
    fn placeholder_only_for_empty_values() {
        let glyphs = Glyphs {
            empty_value: "∅".into(),
            ..Glyphs::default()
        };
        let g = VariableGroup::new(
            "v",
            vec![ConfigLine::variable("v", ""), ConfigLine::variable("v", "x")],
        )
        .with_active(1);
        let rows = project_with(&model(vec![g]), &glyphs);
        assert!(rows[1].is_empty_placeholder);
        assert_eq!(rows[1].label, "∅");
        assert!(!rows[2].is_empty_placeholder);
        assert_eq!(rows[2].label, "x");
    }

    #[test]
    fn cursor_flag_moves() {
        let m = model(vec![db_group().with_active(0)]);
        let mut rows = project(&m);
        assert!(rows.iter().all(|r| !r.is_cursor));
        mark_cursor(&mut rows, 2);
        mark_cursor(&mut rows, 1);
        let flagged: Vec<_> = rows.iter().map(|r| r.is_cursor).collect();
        assert_eq!(flagged, [false, true, false]);
        assert_eq!(row_position(&rows, 0, Some(1)), Some(2));
        assert_eq!(row_position(&rows, 0, None), Some(0));
        assert_eq!(row_position(&rows, 3, None), None);
    }
}
