//! Copy targets and their transient "copied" indicators

use std::fmt;
use std::time::{Duration, Instant};

/// How long a copy indicator stays lit after a copy
pub const COPY_INDICATOR_DURATION: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopyTarget {
    /// The composed style prompt
    Style,
    /// The current lyrics
    Lyrics,
    /// Style and lyrics combined into one block
    All,
}

impl CopyTarget {
    pub const ALL: [CopyTarget; 3] = [Self::Style, Self::Lyrics, Self::All];

    fn index(self) -> usize {
        match self {
            Self::Style => 0,
            Self::Lyrics => 1,
            Self::All => 2,
        }
    }
}

impl fmt::Display for CopyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Style => "style",
            Self::Lyrics => "lyrics",
            Self::All => "all",
        };
        f.write_str(name)
    }
}

/// The combined block produced by [`CopyTarget::All`]
pub fn master_prompt(style: &str, lyrics: &str) -> String {
    format!("STYLE PROMPT:\n{}\n\nLYRICS:\n{}", style, lyrics)
}

/// One independent indicator per copy target
#[derive(Debug, Clone, Default)]
pub struct CopyIndicators {
    copied_at: [Option<Instant>; 3],
}

impl CopyIndicators {
    pub fn mark(&mut self, target: CopyTarget, now: Instant) {
        self.copied_at[target.index()] = Some(now);
    }

    pub fn is_copied(&self, target: CopyTarget, now: Instant) -> bool {
        self.copied_at[target.index()]
            .is_some_and(|at| now.saturating_duration_since(at) < COPY_INDICATOR_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_reverts_after_two_seconds() {
        let start = Instant::now();
        let mut indicators = CopyIndicators::default();
        indicators.mark(CopyTarget::Style, start);

        assert!(indicators.is_copied(CopyTarget::Style, start));
        assert!(indicators.is_copied(
            CopyTarget::Style,
            start + Duration::from_millis(1900)
        ));
        assert!(!indicators.is_copied(CopyTarget::Style, start + Duration::from_secs(2)));
    }

    #[test]
    fn test_indicators_are_independent() {
        let start = Instant::now();
        let mut indicators = CopyIndicators::default();
        indicators.mark(CopyTarget::Lyrics, start);

        assert!(indicators.is_copied(CopyTarget::Lyrics, start));
        assert!(!indicators.is_copied(CopyTarget::Style, start));
        assert!(!indicators.is_copied(CopyTarget::All, start));
    }

    #[test]
    fn test_master_prompt_layout() {
        assert_eq!(
            master_prompt("Lo-Fi", "[Verse 1]\nline"),
            "STYLE PROMPT:\nLo-Fi\n\nLYRICS:\n[Verse 1]\nline"
        );
    }
}
