use crate::game::primitives::*;
use rand::Rng;
use regex::Regex;

pub fn get_random_roll<R: Rng>(rng: &mut R) -> Roll {
    let mut roll = Roll::default();
    for die in roll.iter_mut() {
        *die = rng.gen_range(MIN_DIE_VALUE..=MAX_DIE_VALUE);
    }
    roll
}

// Accepts both spaced ("2 3 3 4 5") and compact ("23345") forms.
pub fn string_to_roll_result(input: &str) -> Result<Roll, String> {
    let re = Regex::new(r"[1-6]").unwrap();

    let mut roll = Roll::default();
    let mut count = 0;

    for found in re.find_iter(input) {
        if count == ROLL_LEN {
            return Err(format!("expected exactly {ROLL_LEN} dice"));
        }
        roll[count] = found.as_str().parse().map_err(|err| format!("{err:?}"))?;
        count += 1;
    }

    if count != ROLL_LEN {
        return Err(format!("expected exactly {ROLL_LEN} dice"));
    }

    Ok(roll)
}

pub fn string_to_roll(input: &str) -> Roll {
    string_to_roll_result(input).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;

    #[test]
    fn test_string_to_roll_spaced() {
        assert_eq!(string_to_roll("2 3 3 4 5"), [2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_string_to_roll_compact() {
        assert_eq!(string_to_roll("23345"), [2, 3, 3, 4, 5]);
    }

    #[test]
    fn test_string_to_roll_wrong_count() {
        assert!(string_to_roll_result("2 3 3 4").is_err());
        assert!(string_to_roll_result("2 3 3 4 5 6").is_err());
        assert!(string_to_roll_result("").is_err());
    }

    #[test]
    fn test_string_to_roll_out_of_range_digits_ignored() {
        // 7 and 0 never match, so this comes up one die short.
        assert!(string_to_roll_result("2 3 4 5 7").is_err());
        assert!(string_to_roll_result("0 1 2 3 4").is_err());
    }

    #[test]
    fn test_random_roll_in_range() {
        let mut rng = rand::rngs::StdRng::seed_from_u64(7);
        for _ in 0..100 {
            let roll = get_random_roll(&mut rng);
            for value in roll {
                assert!((MIN_DIE_VALUE..=MAX_DIE_VALUE).contains(&value));
            }
        }
    }
}
