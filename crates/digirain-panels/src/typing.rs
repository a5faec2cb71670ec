//! Typewriter text effect.

/// Delay between revealed characters, in milliseconds.
pub const TYPING_INTERVAL_MS: u64 = 50;

/// Text revealed one character per interval from a start time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypingText {
    text: String,
    started_ms: u64,
    interval_ms: u64,
}

impl TypingText {
    pub fn new(text: impl Into<String>, started_ms: u64) -> Self {
        Self {
            text: text.into(),
            started_ms,
            interval_ms: TYPING_INTERVAL_MS,
        }
    }

    pub fn with_interval(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms.max(1);
        self
    }

    /// Number of characters visible at `now_ms`.
    pub fn visible_chars(&self, now_ms: u64) -> usize {
        let elapsed = now_ms.saturating_sub(self.started_ms);
        let typed = (elapsed / self.interval_ms) as usize;
        typed.min(self.text.chars().count())
    }

    /// The revealed prefix at `now_ms`.
    pub fn visible(&self, now_ms: u64) -> &str {
        let count = self.visible_chars(now_ms);
        match self.text.char_indices().nth(count) {
            Some((end, _)) => &self.text[..end],
            None => &self.text,
        }
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        self.visible_chars(now_ms) == self.text.chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveals_one_char_per_interval() {
        let typing = TypingText::new("ACCESS", 1000);
        assert_eq!(typing.visible(1000), "");
        assert_eq!(typing.visible(1049), "");
        assert_eq!(typing.visible(1050), "A");
        assert_eq!(typing.visible(1150), "ACC");
        assert!(!typing.is_done(1250));
        assert_eq!(typing.visible(1300), "ACCESS");
        assert!(typing.is_done(1300));
        assert_eq!(typing.visible(99_999), "ACCESS");
    }

    #[test]
    fn test_before_start_shows_nothing() {
        let typing = TypingText::new("abc", 500);
        assert_eq!(typing.visible(0), "");
    }

    #[test]
    fn test_multibyte_boundaries() {
        let typing = TypingText::new("アイウ", 0).with_interval(10);
        assert_eq!(typing.visible(10), "ア");
        assert_eq!(typing.visible(25), "アイ");
        assert_eq!(typing.visible(30), "アイウ");
    }
}
