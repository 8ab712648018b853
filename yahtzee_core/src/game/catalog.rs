use crate::game::primitives::*;
use crate::game::scoring::score_rule;
use enum_map::{enum_map, EnumMap};
use lazy_static::lazy_static;
use std::str::FromStr;

lazy_static! {
    pub static ref CATALOG: Catalog = Catalog::new();
}

pub struct Catalog {
    rules: EnumMap<Category, Rule>,
}

impl Catalog {
    fn new() -> Self {
        let rules = enum_map! {
            Category::Ones => Rule::SpecificValue(1),
            Category::Twos => Rule::SpecificValue(2),
            Category::Threes => Rule::SpecificValue(3),
            Category::Fours => Rule::SpecificValue(4),
            Category::Fives => Rule::SpecificValue(5),
            Category::Sixes => Rule::SpecificValue(6),
            Category::TwoOfAKind => Rule::NOfAKind(2),
            Category::ThreeOfAKind => Rule::NOfAKind(3),
            Category::FourOfAKind => Rule::NOfAKind(4),
            Category::TwoPairs => Rule::TwoPairs,
            Category::SmallStraight => Rule::SmallStraight,
            Category::LargeStraight => Rule::LargeStraight,
            Category::FullHouse => Rule::FullHouse,
            Category::Yahtzee => Rule::Yahtzee,
            Category::Chance => Rule::Chance,
        };

        Self { rules }
    }

    pub fn rule_for(&self, category: Category) -> Rule {
        self.rules[category]
    }

    pub fn evaluate(&self, category: Category, roll: &Roll) -> Score {
        score_rule(self.rules[category], roll)
    }

    pub fn evaluate_label(&self, label: &str, roll: &Roll) -> Result<Score, String> {
        let category = string_to_category_result(label)?;
        Ok(self.evaluate(category, roll))
    }
}

pub fn string_to_category_result(input: &str) -> Result<Category, String> {
    Category::from_str(input).map_err(|_| format!("unknown category label: {input}"))
}

pub fn string_to_category(input: &str) -> Category {
    string_to_category_result(input).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    #[test]
    fn test_labels_round_trip() {
        for category in Category::iter() {
            assert_eq!(string_to_category(&category.to_string()), category);
        }
    }

    #[test]
    fn test_unknown_label() {
        let result = string_to_category_result("bogus-label");
        assert_eq!(
            result,
            Err("unknown category label: bogus-label".to_owned())
        );
        assert!(CATALOG.evaluate_label("YY", &[1, 2, 3, 4, 5]).is_err());
    }

    #[test]
    fn test_evaluate_label() {
        assert_eq!(CATALOG.evaluate_label("C", &[1, 1, 2, 2, 3]), Ok(9));
        assert_eq!(CATALOG.evaluate_label("Y", &[3, 3, 3, 3, 3]), Ok(15));
        assert_eq!(CATALOG.evaluate_label("2P", &[2, 2, 5, 5, 1]), Ok(14));
    }

    #[test]
    fn test_every_category_has_a_rule() {
        for category in Category::iter() {
            // Evaluation is total over any valid roll.
            let _ = CATALOG.evaluate(category, &[1, 2, 3, 4, 5]);
        }
        assert_eq!(CATALOG.rule_for(Category::Fives), Rule::SpecificValue(5));
        assert_eq!(CATALOG.rule_for(Category::FourOfAKind), Rule::NOfAKind(4));
    }
}
