use crate::models::statement::ImpactStatement;

pub const ENHANCEMENT_PER_STATEMENT: u32 = 150;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionSummary {
    pub selected_count: usize,
    pub total_score_impact: u32,
}

impl SelectionSummary {
    pub fn estimated_enhancement(&self) -> u32 {
        self.selected_count as u32 * ENHANCEMENT_PER_STATEMENT
    }
}

pub fn summarize(statements: &[ImpactStatement]) -> SelectionSummary {
    statements
        .iter()
        .filter(|s| s.selected)
        .fold(SelectionSummary::default(), |acc, s| SelectionSummary {
            selected_count: acc.selected_count + 1,
            total_score_impact: acc.total_score_impact + s.score_impact,
        })
}

/// Flips `selected` on the statement with `id`. Returns `false` if none matched.
pub fn toggle(statements: &mut [ImpactStatement], id: &str) -> bool {
    match statements.iter_mut().find(|s| s.id == id) {
        Some(statement) => {
            statement.selected = !statement.selected;
            true
        }
        None => false,
    }
}

/// Ordered set of city ids picked for a comparison report.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComparisonSet {
    ids: Vec<&'static str>,
}

impl ComparisonSet {
    pub fn toggle(&mut self, id: &'static str) {
        if let Some(pos) = self.ids.iter().position(|existing| *existing == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id);
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| *existing == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn report_price(&self, per_city: u32) -> u32 {
        self.ids.len() as u32 * per_city
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::statement::sample_statements;

    fn buffalo() -> Vec<ImpactStatement> {
        sample_statements("buffalo-ny").unwrap_or_default()
    }

    #[test]
    fn nothing_selected_sums_to_zero() {
        assert_eq!(summarize(&buffalo()), SelectionSummary::default());
    }

    #[test]
    fn totals_follow_selection_flags() {
        let mut statements = buffalo();
        let ids: Vec<&str> = statements.iter().map(|s| s.id).collect();

        assert!(toggle(&mut statements, ids[0]));
        assert!(toggle(&mut statements, ids[2]));
        let summary = summarize(&statements);
        assert_eq!(summary.selected_count, 2);
        assert_eq!(summary.total_score_impact, 7);
        assert_eq!(summary.estimated_enhancement(), 300);

        toggle(&mut statements, ids[0]);
        let summary = summarize(&statements);
        assert_eq!(summary.selected_count, 1);
        assert_eq!(summary.total_score_impact, 4);
    }

    #[test]
    fn toggling_unknown_id_changes_nothing() {
        let mut statements = buffalo();
        assert!(!toggle(&mut statements, "99"));
        assert_eq!(summarize(&statements).selected_count, 0);
    }

    #[test]
    fn comparison_set_toggles_membership() {
        let mut set = ComparisonSet::default();
        set.toggle("austin-tx");
        set.toggle("denver-co");
        assert_eq!(set.report_price(400), 800);
        set.toggle("austin-tx");
        assert!(!set.contains("austin-tx"));
        assert!(set.contains("denver-co"));
        set.clear();
        assert!(set.is_empty());
    }
}
