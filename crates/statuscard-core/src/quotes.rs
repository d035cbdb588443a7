//! Quote list parsing and the shuffled deck with a wrap-around cursor.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::error::LoadError;

/// Split on line breaks (`\n` or `\r\n`), trim, drop empty lines.
pub fn parse_quotes(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// A shuffled, fixed quote list and the index of the quote on display.
///
/// Until `load_text` succeeds the deck is empty and `advance` does nothing.
#[derive(Debug, Clone)]
pub struct QuoteDeck {
    quotes: Vec<String>,
    current: usize,
    rng: StdRng,
}

impl QuoteDeck {
    /// Deck seeded from the thread RNG.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_rng(&mut rand::rng()))
    }

    /// Deck with a caller-provided RNG, for reproducible shuffles.
    pub fn with_rng(rng: StdRng) -> Self {
        Self {
            quotes: Vec::new(),
            current: 0,
            rng,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    /// Parse `text`, shuffle it once and make it the deck.
    ///
    /// An empty result leaves the deck empty and returns `LoadError::Empty`.
    pub fn load_text(&mut self, text: &str) -> Result<usize, LoadError> {
        let mut quotes = parse_quotes(text);
        if quotes.is_empty() {
            self.quotes.clear();
            self.current = 0;
            return Err(LoadError::Empty);
        }
        quotes.shuffle(&mut self.rng);
        self.quotes = quotes;
        self.current = 0;
        Ok(self.quotes.len())
    }

    /// Move to the next quote and return it.
    ///
    /// The first advance picks a uniformly random index; later ones step
    /// forward and wrap. Returns `None` on an empty deck.
    pub fn advance(&mut self, is_first: bool) -> Option<&str> {
        if self.quotes.is_empty() {
            return None;
        }
        self.current = if is_first {
            self.rng.random_range(0..self.quotes.len())
        } else {
            (self.current + 1) % self.quotes.len()
        };
        self.quotes.get(self.current).map(String::as_str)
    }

    pub fn current(&self) -> Option<&str> {
        self.quotes.get(self.current).map(String::as_str)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn quotes(&self) -> &[String] {
        &self.quotes
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

impl Default for QuoteDeck {
    fn default() -> Self {
        Self::new()
    }
}
