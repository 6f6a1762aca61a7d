//! Dialog lines creatures say now and then.

use pet_core::Mood;

const CHEERFUL: [&str; 10] = [
    "I love making new friends!",
    "What a beautiful day!",
    "I'm feeling energetic!",
    "Want to play?",
    "*happy dance*",
    "You're the best!",
    "Yay!",
    "This is fun!",
    "I'm so happy!",
    "Let's go on an adventure!",
];

const HUNGRY: [&str; 5] = [
    "I'm starving...",
    "Got any snacks?",
    "My tummy is rumbling",
    "Food please!",
    "*stomach growls*",
];

const SAD: [&str; 5] = [
    "I'm feeling blue...",
    "*sighs*",
    "Need a hug",
    "I miss being happy",
    ":'(",
];

const LONELY: [&str; 5] = [
    "I miss my parent...",
    "Anyone want to adopt me?",
    "I feel so alone",
    "Looking for a family",
    "*sniff*",
];

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|line| line.to_string()).collect()
}

/// Lines grouped by the mood that triggers them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PhraseBook {
    pub cheerful: Vec<String>,
    pub hungry: Vec<String>,
    pub sad: Vec<String>,
    pub lonely: Vec<String>,
}

impl PhraseBook {
    pub fn lines(&self, mood: Mood) -> &[String] {
        match mood {
            Mood::Cheerful => &self.cheerful,
            Mood::Hungry => &self.hungry,
            Mood::Sad => &self.sad,
            Mood::Lonely => &self.lonely,
        }
    }

    /// Picks a line for `mood`. `roll` may be any number; it wraps around.
    ///
    /// Falls back to the cheerful lines when the mood has none, and returns
    /// `None` only when both are empty.
    pub fn pick(&self, mood: Mood, roll: usize) -> Option<&str> {
        let lines = match self.lines(mood) {
            [] => self.lines(Mood::Cheerful),
            lines => lines,
        };
        if lines.is_empty() {
            return None;
        }
        Some(lines[roll % lines.len()].as_str())
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        Self {
            cheerful: owned(&CHEERFUL),
            hungry: owned(&HUNGRY),
            sad: owned(&SAD),
            lonely: owned(&LONELY),
        }
    }
}
