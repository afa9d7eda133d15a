use crate::core::models::vocab::VocabEntry;
use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, instrument};

pub const DEFAULT_GRID_SIZE: usize = 20;
pub const DEFAULT_MAX_ATTEMPTS: usize = 200;

const FILLER_LETTERS: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
}

impl Direction {
    #[inline]
    fn cell(self, row: usize, col: usize, offset: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => (row, col + offset),
            Direction::Vertical => (row + offset, col),
        }
    }
}

/// A square grid of letters with every cell filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterGrid {
    size: usize,
    cells: Vec<char>,
}

impl LetterGrid {
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        // chunks(0) panics; an empty grid has no rows anyway.
        self.cells.chunks(self.size.max(1))
    }

    /// Reads `len` letters starting at `(row, col)` in `direction`.
    ///
    /// Returns `None` if the run leaves the grid.
    pub fn read(&self, row: usize, col: usize, direction: Direction, len: usize) -> Option<String> {
        (0..len)
            .map(|i| {
                let (r, c) = direction.cell(row, col, i);
                self.get(r, c)
            })
            .collect()
    }
}

/// A word that made it into the grid, with where it was put.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedWord {
    pub entry: VocabEntry,
    /// The normalized letters actually written into the grid.
    pub letters: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

#[derive(Debug, Clone)]
pub struct WordSearch {
    pub grid: LetterGrid,
    /// Only the entries that were placed; unplaceable words are dropped.
    pub placed: Vec<PlacedWord>,
}

impl WordSearch {
    pub fn placed_entries(&self) -> impl Iterator<Item = &VocabEntry> {
        self.placed.iter().map(|p| &p.entry)
    }
}

/// Upper-cases a word and strips everything that is not a letter (spaces, apostrophes,
/// hyphens). Accented letters are kept; letters without an upper case (`ª`, `º`) are not.
pub fn normalize_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_uppercase)
        .filter(|c| c.is_uppercase())
        .collect()
}

/// Builds a `size`×`size` word-search grid.
///
/// Entries are shuffled, then each word gets up to `max_attempts` random trials: a uniformly
/// random start cell and direction, accepted only if the word fits and every cell it covers
/// is empty or already holds the same letter. Words that never fit are dropped silently.
/// Remaining empty cells are filled with random letters `A`-`Z`.
#[instrument(level = "debug", skip(entries, rng))]
pub fn build_word_search(
    entries: &[VocabEntry],
    size: usize,
    max_attempts: usize,
    rng: &mut impl Rng,
) -> WordSearch {
    let mut shuffled: Vec<&VocabEntry> = entries.iter().collect();
    shuffled.shuffle(rng);

    let mut cells: Vec<Option<char>> = vec![None; size * size];
    let mut placed = Vec::new();

    for entry in shuffled {
        let letters: Vec<char> = normalize_word(&entry.word).chars().collect();
        if letters.is_empty() {
            debug!("Skipping '{}': no letters left after normalization.", entry.word);
            continue;
        }

        match try_place(&mut cells, size, &letters, max_attempts, rng) {
            Some((row, col, direction)) => placed.push(PlacedWord {
                entry: entry.clone(),
                letters: letters.iter().collect(),
                row,
                col,
                direction,
            }),
            None => debug!(
                "Dropping '{}': no free slot after {} attempts.",
                entry.word, max_attempts
            ),
        }
    }

    let cells = cells
        .into_iter()
        .map(|cell| {
            cell.unwrap_or_else(|| FILLER_LETTERS[rng.gen_range(0..FILLER_LETTERS.len())] as char)
        })
        .collect();

    debug!("Placed {} of {} words.", placed.len(), entries.len());
    WordSearch {
        grid: LetterGrid { size, cells },
        placed,
    }
}

fn try_place(
    cells: &mut [Option<char>],
    size: usize,
    letters: &[char],
    max_attempts: usize,
    rng: &mut impl Rng,
) -> Option<(usize, usize, Direction)> {
    if size == 0 || letters.len() > size {
        return None;
    }

    for _ in 0..max_attempts {
        let row = rng.gen_range(0..size);
        let col = rng.gen_range(0..size);
        let direction = if rng.gen_bool(0.5) {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };

        let end = match direction {
            Direction::Horizontal => col + letters.len(),
            Direction::Vertical => row + letters.len(),
        };
        if end > size {
            continue;
        }

        let fits = letters.iter().enumerate().all(|(i, &letter)| {
            let (r, c) = direction.cell(row, col, i);
            matches!(cells[r * size + c], None) || cells[r * size + c] == Some(letter)
        });
        if fits {
            for (i, &letter) in letters.iter().enumerate() {
                let (r, c) = direction.cell(row, col, i);
                cells[r * size + c] = Some(letter);
            }
            return Some((row, col, direction));
        }
    }
    None
}
