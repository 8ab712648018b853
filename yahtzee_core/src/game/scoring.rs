use crate::game::primitives::*;

// Index by die value; slot 0 is unused.
pub type ValueOccurrences = [u8; (MAX_DIE_VALUE + 1) as usize];

pub fn value_occurrences(roll: &Roll) -> ValueOccurrences {
    let mut occurrences = ValueOccurrences::default();
    for value in roll {
        occurrences[*value as usize] += 1;
    }
    occurrences
}

pub fn roll_sum(roll: &Roll) -> Score {
    roll.iter().map(|value| *value as Score).sum()
}

fn distinct_value_count(occurrences: &ValueOccurrences) -> usize {
    occurrences.iter().filter(|count| **count > 0).count()
}

fn contains_run(occurrences: &ValueOccurrences, low: DieValue, high: DieValue) -> bool {
    (low..=high).all(|value| occurrences[value as usize] > 0)
}

// Highest die value occurring exactly `kind` times, if any. A quad does not
// count as a pair or a triple.
fn best_exact_kind(occurrences: &ValueOccurrences, kind: KindCount) -> Option<DieValue> {
    (MIN_DIE_VALUE..=MAX_DIE_VALUE)
        .rev()
        .find(|value| occurrences[*value as usize] == kind)
}

pub fn score_rule(rule: Rule, roll: &Roll) -> Score {
    match rule {
        Rule::SpecificValue(target) => roll
            .iter()
            .filter(|value| **value == target)
            .map(|value| *value as Score)
            .sum(),
        Rule::NOfAKind(kind) => {
            let occurrences = value_occurrences(roll);
            match best_exact_kind(&occurrences, kind) {
                Some(value) => value as Score * kind as Score,
                None => 0,
            }
        }
        Rule::TwoPairs => {
            let occurrences = value_occurrences(roll);
            let pair_values: Vec<DieValue> = (MIN_DIE_VALUE..=MAX_DIE_VALUE)
                .filter(|value| occurrences[*value as usize] == 2)
                .collect();
            if pair_values.len() < 2 {
                return 0;
            }
            pair_values.iter().map(|value| *value as Score * 2).sum()
        }
        Rule::SmallStraight => {
            let occurrences = value_occurrences(roll);
            if contains_run(&occurrences, 1, 5) {
                SMALL_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Rule::LargeStraight => {
            let occurrences = value_occurrences(roll);
            if contains_run(&occurrences, 2, 6) {
                LARGE_STRAIGHT_SCORE
            } else {
                0
            }
        }
        Rule::FullHouse => {
            let occurrences = value_occurrences(roll);
            if distinct_value_count(&occurrences) == 2 {
                roll_sum(roll)
            } else {
                0
            }
        }
        Rule::Yahtzee => {
            let occurrences = value_occurrences(roll);
            if distinct_value_count(&occurrences) == 1 {
                roll_sum(roll)
            } else {
                0
            }
        }
        Rule::Chance => roll_sum(roll),
    }
}
