use crate::models::GoalStatus;
use crate::page::{GoalRow, SummaryTargets, TextSlot};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoalStatistics {
    pub total: usize,
    pub in_progress: usize,
    pub completed: usize,
}

pub fn build_stats(rows: &[GoalRow]) -> GoalStatistics {
    let mut stats = GoalStatistics {
        total: rows.len(),
        ..GoalStatistics::default()
    };

    for row in rows {
        match row.select {
            GoalStatus::InProgress => stats.in_progress += 1,
            GoalStatus::Completed => stats.completed += 1,
            GoalStatus::Other(_) => {}
        }
    }

    stats
}

/// Writes each tally into its slot; slots missing from the page are skipped.
pub fn render_stats(stats: &GoalStatistics, targets: &mut SummaryTargets) {
    write_slot(targets.total.as_mut(), stats.total);
    write_slot(targets.in_progress.as_mut(), stats.in_progress);
    write_slot(targets.completed.as_mut(), stats.completed);
}

fn write_slot(slot: Option<&mut TextSlot>, value: usize) {
    if let Some(slot) = slot {
        slot.text = value.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalId;

    fn rows(statuses: &[&str]) -> Vec<GoalRow> {
        statuses
            .iter()
            .enumerate()
            .map(|(index, status)| GoalRow {
                goal_id: GoalId::from(index as i64),
                title: format!("goal {index}"),
                due_label: None,
                select: GoalStatus::from(*status),
            })
            .collect()
    }

    #[test]
    fn stats_count_known_statuses_and_exclude_others() {
        let stats = build_stats(&rows(&[
            "in_progress",
            "completed",
            "not_started",
            "completed",
            "in_progress",
            "in_progress",
        ]));
        assert_eq!(
            stats,
            GoalStatistics {
                total: 6,
                in_progress: 3,
                completed: 2,
            }
        );
    }

    #[test]
    fn stats_of_empty_page_are_zero() {
        assert_eq!(build_stats(&[]), GoalStatistics::default());
    }

    #[test]
    fn render_skips_missing_slots() {
        let mut targets = SummaryTargets {
            total: Some(TextSlot::default()),
            in_progress: None,
            completed: Some(TextSlot::default()),
        };
        let stats = build_stats(&rows(&["completed", "on_hold"]));
        render_stats(&stats, &mut targets);

        assert_eq!(targets.total.unwrap().text, "2");
        assert!(targets.in_progress.is_none());
        assert_eq!(targets.completed.unwrap().text, "1");
    }
}
