use std::rc::Rc;

pub const DEFAULT_TYPING_INTERVAL_MS: u32 = 100;
pub const DEFAULT_DELETING_INTERVAL_MS: u32 = 50;
pub const DEFAULT_HOLD_MS: u32 = 1_800;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypingConfig {
    pub typing_interval_ms: u32,
    pub deleting_interval_ms: u32,
    pub hold_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            typing_interval_ms: DEFAULT_TYPING_INTERVAL_MS,
            deleting_interval_ms: DEFAULT_DELETING_INTERVAL_MS,
            hold_ms: DEFAULT_HOLD_MS,
        }
    }
}

/// A phrase list guaranteed to hold at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NonEmptyPhrases(Rc<[String]>);

impl NonEmptyPhrases {
    pub fn new<I, S>(phrases: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases: Rc<[String]> = phrases.into_iter().map(Into::into).collect();
        if phrases.is_empty() {
            None
        } else {
            Some(Self(phrases))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> &str {
        &self.0[index % self.0.len()]
    }

    pub fn first(&self) -> &str {
        self.get(0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Typing,
    Holding,
    Deleting,
    Advancing,
}

/// Types each phrase out one character at a time, holds, deletes it, then moves
/// on to the next phrase, forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingMarquee {
    phrases: NonEmptyPhrases,
    config: TypingConfig,
    phrase_index: usize,
    displayed_len: usize,
    deleting: bool,
}

impl TypingMarquee {
    pub fn new(phrases: NonEmptyPhrases, config: TypingConfig) -> Self {
        Self {
            phrases,
            config,
            phrase_index: 0,
            displayed_len: 0,
            deleting: false,
        }
    }

    pub fn reset(&mut self) {
        self.phrase_index = 0;
        self.displayed_len = 0;
        self.deleting = false;
    }

    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    pub fn displayed_len(&self) -> usize {
        self.displayed_len
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    fn current_phrase(&self) -> &str {
        self.phrases.get(self.phrase_index)
    }

    fn current_phrase_len(&self) -> usize {
        self.current_phrase().chars().count()
    }

    pub fn displayed(&self) -> &str {
        let phrase = self.current_phrase();
        let end = phrase
            .char_indices()
            .nth(self.displayed_len)
            .map(|(byte_index, _)| byte_index)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn phase(&self) -> TypingPhase {
        match (self.deleting, self.displayed_len) {
            (false, len) if len < self.current_phrase_len() => TypingPhase::Typing,
            (false, _) => TypingPhase::Holding,
            (true, 0) => TypingPhase::Advancing,
            (true, _) => TypingPhase::Deleting,
        }
    }

    /// Wait before the next `tick`. Zero means the transition is immediate.
    pub fn delay_ms(&self) -> u32 {
        match self.phase() {
            TypingPhase::Typing => self.config.typing_interval_ms,
            TypingPhase::Holding => self.config.hold_ms,
            TypingPhase::Deleting => self.config.deleting_interval_ms,
            TypingPhase::Advancing => 0,
        }
    }

    /// Applies exactly one transition.
    pub fn tick(&mut self) {
        match self.phase() {
            TypingPhase::Typing => self.displayed_len += 1,
            TypingPhase::Holding => self.deleting = true,
            TypingPhase::Deleting => self.displayed_len -= 1,
            TypingPhase::Advancing => {
                self.deleting = false;
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
            }
        }
    }

    /// Infinite sequence of `(elapsed_ms, text)` pairs, one per visible change,
    /// starting from the current state without mutating it.
    pub fn frames(&self) -> Frames {
        Frames {
            marquee: self.clone(),
        }
    }
}

pub struct Frames {
    marquee: TypingMarquee,
}

impl Iterator for Frames {
    type Item = (u32, String);

    fn next(&mut self) -> Option<Self::Item> {
        if self.marquee.phrases.0.iter().all(String::is_empty) {
            return None;
        }

        let before = self.marquee.displayed().to_string();
        let mut elapsed: u32 = 0;

        loop {
            elapsed = elapsed.saturating_add(self.marquee.delay_ms());
            self.marquee.tick();

            let shown = self.marquee.displayed();
            if shown != before {
                return Some((elapsed, shown.to_string()));
            }
        }
    }
}
