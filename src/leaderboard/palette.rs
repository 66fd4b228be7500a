const LEAGUE_SYMBOLS: [&str; 8] = [
    "🥇", "🥈", "🥉", "⭐", "😭", "👍", "💃", "🤦 oh no..",
];
const LEAGUE_FALLBACK: &str = "😅";

/// Fixed table of rank decorations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    symbols: [&'static str; 8],
    fallback: &'static str,
}

impl Palette {
    pub fn new(symbols: [&'static str; 8], fallback: &'static str) -> Self {
        Self { symbols, fallback }
    }

    /// Symbol for a 0-based rank; ranks past the table get the fallback
    pub fn decoration(&self, rank_index: usize) -> &'static str {
        self.symbols
            .get(rank_index)
            .copied()
            .unwrap_or(self.fallback)
    }

    pub fn fallback(&self) -> &'static str {
        self.fallback
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(LEAGUE_SYMBOLS, LEAGUE_FALLBACK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoration_follows_table_order() {
        let palette = Palette::default();

        for (rank, symbol) in LEAGUE_SYMBOLS.iter().enumerate() {
            assert_eq!(palette.decoration(rank), *symbol);
        }
    }

    #[test]
    fn test_decoration_past_table_uses_fallback() {
        let palette = Palette::default();

        assert_eq!(palette.decoration(8), "😅");
        assert_eq!(palette.decoration(1_000), palette.fallback());
    }
}
