use clap::Parser;
use rand::thread_rng;
use rand::RngCore;
use rand_pcg::Pcg64;
use rand_seeder::Seeder;
use yahtzee_core::game::*;
use yahtzee_core::utils::*;

#[derive(Parser, Debug)]
pub struct StandardArgs {
    pub category: Option<String>,
    #[clap(short, long, value_parser=string_to_roll_result)]
    pub roll: Option<Roll>,
    #[clap(short, long)]
    pub seed: Option<String>,
}

pub fn get_roll_from_args(args: &StandardArgs) -> Roll {
    if let Some(roll) = args.roll {
        roll
    } else {
        let mut rng: Box<dyn RngCore> = if let Some(seed) = args.seed.clone() {
            Box::new(Seeder::from(seed).make_rng::<Pcg64>())
        } else {
            Box::new(thread_rng())
        };

        get_random_roll(&mut rng)
    }
}

pub fn print_category_help() {
    println!("Specific value       : 1 | 2 | 3 | 4 | 5 | 6");
    println!("Kind                 : 2K | 3K | 4K");
    println!("Pair                 : 2P");
    println!("Small/Large Straight : SS | LS");
    println!("Full House           : FH");
    println!("Yahtzee              : Y");
    println!("Chance               : C");
    println!();
    println!("Usage: <category>");
}
