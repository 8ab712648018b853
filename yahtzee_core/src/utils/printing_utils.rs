use crate::game::primitives::*;
use colored::Colorize;
use itertools::Itertools;

pub fn format_roll_for_cli(roll: &Roll) -> String {
    format!("[{}]", roll.iter().join(", "))
}

pub fn print_roll_result(roll: &Roll, category: Category, score: Score) {
    println!("Roll: {}", format_roll_for_cli(roll));
    println!("Category: {}", category);

    let score_string = score.to_string();
    let colored_score = if score == 0 {
        score_string.red()
    } else {
        score_string.green()
    };
    println!("Score: {}", colored_score);
}
