use super::domain::{Dimension, QuestionId};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

type RuleRow = (u16, &'static [i32]);

const STANDARD_RULES: [(Dimension, [RuleRow; 9]); 6] = [
    (
        Dimension::WantedInclusion,
        [
            (28, &[5, 6]),
            (31, &[5, 6]),
            (34, &[5, 6]),
            (37, &[6]),
            (39, &[6]),
            (42, &[5, 6]),
            (45, &[5, 6]),
            (48, &[5, 6]),
            (51, &[5, 6]),
        ],
    ),
    (
        Dimension::ExpressedInclusion,
        [
            (1, &[4, 5, 6]),
            (3, &[3, 4, 5, 6]),
            (5, &[3, 4, 5, 6]),
            (7, &[4, 5, 6]),
            (9, &[5, 6]),
            (11, &[5, 6]),
            (13, &[5, 6]),
            (15, &[6]),
            (16, &[6]),
        ],
    ),
    (
        Dimension::WantedControl,
        [
            (2, &[3, 4, 5, 6]),
            (6, &[3, 4, 5, 6]),
            (10, &[4, 5, 6]),
            (14, &[4, 5, 6]),
            (18, &[4, 5, 6]),
            (20, &[4, 5, 6]),
            (22, &[3, 4, 5, 6]),
            (24, &[4, 5, 6]),
            (26, &[4, 5, 6]),
        ],
    ),
    (
        Dimension::ExpressedControl,
        [
            (30, &[4, 5, 6]),
            (33, &[4, 5, 6]),
            (36, &[5, 6]),
            (41, &[3, 4, 5, 6]),
            (44, &[4, 5, 6]),
            (47, &[4, 5, 6]),
            (50, &[5, 6]),
            (53, &[5, 6]),
            (54, &[5, 6]),
        ],
    ),
    (
        Dimension::WantedAffection,
        [
            (29, &[5, 6]),
            (32, &[5, 6]),
            (35, &[1, 2]),
            (38, &[5, 6]),
            (40, &[1, 2]),
            (43, &[6]),
            (46, &[1, 2]),
            (49, &[5, 6]),
            (52, &[1, 2]),
        ],
    ),
    (
        Dimension::ExpressedAffection,
        [
            (4, &[5, 6]),
            (8, &[5, 6]),
            (12, &[6]),
            (17, &[5, 6]),
            (19, &[1, 2, 3]),
            (21, &[5, 6]),
            (23, &[5, 6]),
            (25, &[1, 2, 3]),
            (27, &[5, 6]),
        ],
    ),
];

/// Answer values that count toward one dimension, keyed by question.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionRules {
    accepted: BTreeMap<QuestionId, BTreeSet<i32>>,
}

impl DimensionRules {
    pub fn new(accepted: BTreeMap<QuestionId, BTreeSet<i32>>) -> Self {
        Self { accepted }
    }

    pub fn accepts(&self, question_id: QuestionId, value: i32) -> bool {
        self.accepted
            .get(&question_id)
            .is_some_and(|values| values.contains(&value))
    }

    pub fn accepted_values(&self, question_id: QuestionId) -> Option<&BTreeSet<i32>> {
        self.accepted.get(&question_id)
    }

    pub fn question_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.accepted.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &BTreeSet<i32>)> + '_ {
        self.accepted.iter().map(|(id, values)| (*id, values))
    }

    /// Highest attainable score: one point per rule.
    pub fn max_score(&self) -> u32 {
        self.accepted.len() as u32
    }

    pub fn len(&self) -> usize {
        self.accepted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accepted.is_empty()
    }
}

/// Static scoring key mapping each dimension to its qualifying answers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringRuleTable {
    groups: BTreeMap<Dimension, DimensionRules>,
}

impl ScoringRuleTable {
    /// Process-wide scoring key for the inventory.
    pub fn standard() -> &'static Self {
        static TABLE: OnceLock<ScoringRuleTable> = OnceLock::new();
        TABLE.get_or_init(standard_table)
    }

    /// Build a table from explicit groups. Dimensions without a group score 0.
    pub fn from_groups(groups: BTreeMap<Dimension, DimensionRules>) -> Self {
        Self { groups }
    }

    pub fn rules_for(&self, dimension: Dimension) -> Option<&DimensionRules> {
        self.groups.get(&dimension)
    }

    pub fn max_score(&self, dimension: Dimension) -> u32 {
        self.rules_for(dimension)
            .map(DimensionRules::max_score)
            .unwrap_or(0)
    }

    pub fn dimension_of(&self, question_id: QuestionId) -> Option<Dimension> {
        self.groups
            .iter()
            .find(|(_, rules)| rules.accepted_values(question_id).is_some())
            .map(|(dimension, _)| *dimension)
    }

    pub fn groups(&self) -> impl Iterator<Item = (Dimension, &DimensionRules)> + '_ {
        self.groups.iter().map(|(dimension, rules)| (*dimension, rules))
    }

    pub fn referenced_question_ids(&self) -> BTreeSet<QuestionId> {
        self.groups
            .values()
            .flat_map(DimensionRules::question_ids)
            .collect()
    }
}

fn standard_table() -> ScoringRuleTable {
    let groups = STANDARD_RULES
        .iter()
        .map(|(dimension, rows)| {
            let accepted = rows
                .iter()
                .map(|(id, values)| (QuestionId(*id), values.iter().copied().collect()))
                .collect();
            (*dimension, DimensionRules::new(accepted))
        })
        .collect();

    ScoringRuleTable::from_groups(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_dimension_has_nine_rules() {
        let table = ScoringRuleTable::standard();
        for dimension in Dimension::ordered() {
            let rules = table.rules_for(dimension).expect("dimension present");
            assert_eq!(rules.len(), 9, "{dimension:?}");
            assert_eq!(table.max_score(dimension), 9);
            assert!(rules.iter().all(|(_, values)| !values.is_empty()));
        }
    }

    #[test]
    fn referenced_ids_cover_the_whole_inventory_once() {
        let table = ScoringRuleTable::standard();
        let referenced = table.referenced_question_ids();
        let expected: BTreeSet<QuestionId> = (1..=54).map(QuestionId).collect();
        assert_eq!(referenced, expected);

        let total: usize = table.groups().map(|(_, rules)| rules.len()).sum();
        assert_eq!(total, referenced.len(), "no question is shared by two groups");
    }

    #[test]
    fn accepted_values_stay_on_the_six_point_scale() {
        let table = ScoringRuleTable::standard();
        for (_, rules) in table.groups() {
            for (_, values) in rules.iter() {
                assert!(values.iter().all(|value| (1..=6).contains(value)));
            }
        }
    }

    #[test]
    fn affection_reverse_keyed_items_accept_low_answers() {
        let table = ScoringRuleTable::standard();
        let wanted = table
            .rules_for(Dimension::WantedAffection)
            .expect("wanted affection present");
        assert!(wanted.accepts(QuestionId(35), 1));
        assert!(!wanted.accepts(QuestionId(35), 5));

        let expressed = table
            .rules_for(Dimension::ExpressedAffection)
            .expect("expressed affection present");
        assert!(expressed.accepts(QuestionId(19), 3));
        assert!(!expressed.accepts(QuestionId(19), 4));
    }

    #[test]
    fn dimension_lookup_by_question() {
        let table = ScoringRuleTable::standard();
        assert_eq!(
            table.dimension_of(QuestionId(37)),
            Some(Dimension::WantedInclusion)
        );
        assert_eq!(
            table.dimension_of(QuestionId(41)),
            Some(Dimension::ExpressedControl)
        );
        assert_eq!(table.dimension_of(QuestionId(99)), None);
    }

    #[test]
    fn max_score_follows_rule_count() {
        let mut accepted = BTreeMap::new();
        accepted.insert(QuestionId(1), BTreeSet::from([6]));
        accepted.insert(QuestionId(2), BTreeSet::from([6]));
        let mut groups = BTreeMap::new();
        groups.insert(Dimension::WantedControl, DimensionRules::new(accepted));
        let table = ScoringRuleTable::from_groups(groups);

        assert_eq!(table.max_score(Dimension::WantedControl), 2);
        assert_eq!(table.max_score(Dimension::WantedInclusion), 0);
    }
}
