use enum_map::Enum;
use strum_macros;

pub type DieValue = u8;
pub type Score = u32;
pub type KindCount = u8;

pub const ROLL_LEN: usize = 5;
pub const MIN_DIE_VALUE: DieValue = 1;
pub const MAX_DIE_VALUE: DieValue = 6;

pub type Roll = [DieValue; ROLL_LEN];

pub const SMALL_STRAIGHT_SCORE: Score = 15;
pub const LARGE_STRAIGHT_SCORE: Score = 20;

#[derive(
    strum_macros::Display,
    strum_macros::EnumIter,
    strum_macros::EnumString,
    Enum,
    Copy,
    Clone,
    Debug,
    PartialEq,
    Eq,
    Hash,
)]
pub enum Category {
    #[strum(serialize = "1")]
    Ones,
    #[strum(serialize = "2")]
    Twos,
    #[strum(serialize = "3")]
    Threes,
    #[strum(serialize = "4")]
    Fours,
    #[strum(serialize = "5")]
    Fives,
    #[strum(serialize = "6")]
    Sixes,
    #[strum(serialize = "2K")]
    TwoOfAKind,
    #[strum(serialize = "3K")]
    ThreeOfAKind,
    #[strum(serialize = "4K")]
    FourOfAKind,
    #[strum(serialize = "2P")]
    TwoPairs,
    #[strum(serialize = "SS")]
    SmallStraight,
    #[strum(serialize = "LS")]
    LargeStraight,
    #[strum(serialize = "FH")]
    FullHouse,
    #[strum(serialize = "Y")]
    Yahtzee,
    #[strum(serialize = "C")]
    Chance,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Rule {
    SpecificValue(DieValue),
    NOfAKind(KindCount),
    TwoPairs,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Yahtzee,
    Chance,
}
