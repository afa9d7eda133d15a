use rand::Rng;
use rand::seq::SliceRandom;

/// Leading articles removed for the article-free snake, matched case-insensitively.
pub const ARTICLES: [&str; 8] = ["le ", "la ", "l'", "l’", "les ", "un ", "une ", "des "];

/// Words run together without separators, once with and once without their articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSnake {
    pub with_articles: String,
    pub without_articles: String,
}

pub fn strip_article(word: &str) -> &str {
    ARTICLES
        .iter()
        .find_map(|article| {
            word.get(..article.len())
                .filter(|prefix| prefix.eq_ignore_ascii_case(article))
                .map(|_| &word[article.len()..])
        })
        .unwrap_or(word)
}

/// Shuffles `words` once and builds both snakes from that order.
pub fn build_word_snake<S: AsRef<str>>(words: &[S], rng: &mut impl Rng) -> WordSnake {
    let mut order: Vec<&str> = words.iter().map(AsRef::as_ref).collect();
    order.shuffle(rng);

    WordSnake {
        with_articles: join_snake(order.iter().copied()),
        without_articles: join_snake(order.iter().map(|w| strip_article(w))),
    }
}

fn join_snake<'a>(words: impl Iterator<Item = &'a str>) -> String {
    words
        .map(|w| w.to_lowercase().replace(' ', ""))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn strip_article_handles_each_article() {
        assert_eq!(strip_article("le chat"), "chat");
        assert_eq!(strip_article("La maison"), "maison");
        assert_eq!(strip_article("l'école"), "école");
        assert_eq!(strip_article("l’hôtel"), "hôtel");
        assert_eq!(strip_article("les enfants"), "enfants");
        assert_eq!(strip_article("une pomme"), "pomme");
        assert_eq!(strip_article("des amis"), "amis");
        assert_eq!(strip_article("lent"), "lent");
        assert_eq!(strip_article("é"), "é");
    }

    #[test]
    fn both_snakes_share_one_order() {
        let mut rng = StdRng::seed_from_u64(2);
        let words = ["le chat", "la souris", "un chien"];
        let snake = build_word_snake(&words, &mut rng);

        assert_eq!(snake.with_articles.len(), "lechatlasourisunchien".len());
        assert!(!snake.with_articles.contains(' '));

        // Rebuild the article-free snake from the order found in the full one.
        let mut order: Vec<&str> = words.to_vec();
        order.sort_by_key(|w| {
            snake
                .with_articles
                .find(&w.to_lowercase().replace(' ', ""))
                .unwrap()
        });
        let expected: String = order
            .iter()
            .map(|w| strip_article(w).replace(' ', ""))
            .collect();
        assert_eq!(snake.without_articles, expected);
    }

    #[test]
    fn snake_is_lowercase() {
        let mut rng = StdRng::seed_from_u64(2);
        let snake = build_word_snake(&["Le Château"], &mut rng);
        assert_eq!(snake.with_articles, "lechâteau");
        assert_eq!(snake.without_articles, "château");
    }
}
