use clap::Parser;
use cli::*;
use std::process::exit;
use yahtzee_core::game::*;
use yahtzee_core::utils::*;

fn main() {
    let args = StandardArgs::parse();

    let Some(label) = args.category.clone() else {
        print_category_help();
        exit(1);
    };

    let category = match string_to_category_result(&label) {
        Ok(category) => category,
        Err(err) => {
            println!("{err}");
            exit(2);
        }
    };

    let roll = get_roll_from_args(&args);
    let score = CATALOG.evaluate(category, &roll);
    print_roll_result(&roll, category, score);
}
