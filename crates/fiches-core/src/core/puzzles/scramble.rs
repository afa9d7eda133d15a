use rand::Rng;
use rand::seq::SliceRandom;

const MAX_SHUFFLES: usize = 32;

/// Shuffles the letters of a word, spaces removed.
///
/// When the word has at least two distinct letters the result always differs from the
/// space-free word; otherwise it is returned as is.
pub fn scramble(word: &str, rng: &mut impl Rng) -> String {
    let letters: Vec<char> = word.chars().filter(|c| *c != ' ').collect();
    if letters.len() <= 1 || letters.iter().all(|&c| c == letters[0]) {
        return letters.into_iter().collect();
    }

    let mut shuffled = letters.clone();
    for _ in 0..MAX_SHUFFLES {
        shuffled.shuffle(rng);
        if shuffled != letters {
            return shuffled.into_iter().collect();
        }
    }

    // A non-constant sequence never equals its own rotation by one.
    let mut rotated = letters;
    rotated.rotate_left(1);
    rotated.into_iter().collect()
}

/// Keeps the first letter in place and shuffles the rest, spaces removed.
pub fn scramble_keep_first(word: &str, rng: &mut impl Rng) -> String {
    let mut letters: Vec<char> = word.chars().filter(|c| *c != ' ').collect();
    if letters.len() > 1 {
        letters[1..].shuffle(rng);
    }
    letters.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sorted(s: &str) -> Vec<char> {
        let mut chars: Vec<char> = s.chars().collect();
        chars.sort_unstable();
        chars
    }

    #[test]
    fn scramble_is_a_permutation_that_differs() {
        let mut rng = StdRng::seed_from_u64(0);
        for word in ["le chat", "ab", "maison", "été"] {
            for _ in 0..20 {
                let result = scramble(word, &mut rng);
                let compact: String = word.chars().filter(|c| *c != ' ').collect();
                assert_eq!(sorted(&result), sorted(&compact));
                assert_ne!(result, compact);
            }
        }
    }

    #[test]
    fn scramble_leaves_trivial_words_alone() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(scramble("a", &mut rng), "a");
        assert_eq!(scramble("", &mut rng), "");
        assert_eq!(scramble("oo", &mut rng), "oo");
        assert_eq!(scramble("a a", &mut rng), "aa");
    }

    #[test]
    fn keep_first_preserves_first_letter() {
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..20 {
            let result = scramble_keep_first("la pomme", &mut rng);
            assert!(result.starts_with('l'));
            assert_eq!(sorted(&result), sorted("lapomme"));
        }
        assert_eq!(scramble_keep_first("x", &mut rng), "x");
    }
}
