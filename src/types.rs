// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a single word as an owned `String`. Reference list entries and
/// unclassified words are always stored lowercase.
pub type Word = String;

/// Represents a borrowed view of a word as a `str`. This is used when ownership is not required.
pub type WordRef = str;

/// The sentiment weight attached to a positive or negative reference word.
///
/// Positive words carry weights `>= 0` and negative words carry weights `<= 0`.
pub type SentimentWeight = i32;

/// The number of words (tokens) in an utterance, or a per-category tally.
pub type WordCount = usize;

/// The aggregate phrase strength. Always within `base_strength..=base_strength + 5`
/// under the default configuration (5 to 10).
pub type Strength = i32;

/// A normalized, clamped `0.0..=1.0` value used for progress-bar style display.
pub type Position = f32;
