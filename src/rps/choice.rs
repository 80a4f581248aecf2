use std::str::FromStr;

use super::RpsError;

#[derive(Debug, PartialEq, Eq, Hash, Copy, Clone)]
pub enum Choice {
    Rock,
    Paper,
    Scissors,
}

// Both alphabets live in one table: the opponent writes A/B/C, the player X/Y/Z.
const SYMBOLS: [(char, Choice); 6] = [
    ('A', Choice::Rock),
    ('B', Choice::Paper),
    ('C', Choice::Scissors),
    ('X', Choice::Rock),
    ('Y', Choice::Paper),
    ('Z', Choice::Scissors),
];

impl Choice {
    pub const ALL: [Choice; 3] = [Choice::Rock, Choice::Paper, Choice::Scissors];

    /// Maps a raw token to its choice. Case and surrounding whitespace are ignored.
    pub fn from_symbol(symbol: &str) -> Result<Choice, RpsError> {
        let trimmed = symbol.trim();
        let mut chars = trimmed.chars();

        let letter = match (chars.next(), chars.next()) {
            (Some(c), None) => c.to_ascii_uppercase(),
            _ => return Err(RpsError::InvalidSymbol(symbol.to_string())),
        };

        SYMBOLS
            .iter()
            .find(|(s, _)| *s == letter)
            .map(|(_, choice)| *choice)
            .ok_or_else(|| RpsError::InvalidSymbol(symbol.to_string()))
    }
}

impl FromStr for Choice {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Choice::from_symbol(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_six_symbols_map_to_choices() {
        assert_eq!(Choice::from_symbol("A"), Ok(Choice::Rock));
        assert_eq!(Choice::from_symbol("B"), Ok(Choice::Paper));
        assert_eq!(Choice::from_symbol("C"), Ok(Choice::Scissors));
        assert_eq!(Choice::from_symbol("X"), Ok(Choice::Rock));
        assert_eq!(Choice::from_symbol("Y"), Ok(Choice::Paper));
        assert_eq!(Choice::from_symbol("Z"), Ok(Choice::Scissors));
    }

    #[test]
    fn case_and_whitespace_are_ignored() {
        assert_eq!(Choice::from_symbol(" a "), Ok(Choice::Rock));
        assert_eq!(Choice::from_symbol("z\n"), Ok(Choice::Scissors));
        assert_eq!("\ty".parse::<Choice>(), Ok(Choice::Paper));
    }

    #[test]
    fn unknown_symbols_are_rejected() {
        for bad in ["W", "D", "", "  ", "AX", "rock", "1"] {
            assert_eq!(
                Choice::from_symbol(bad),
                Err(RpsError::InvalidSymbol(bad.to_string())),
                "symbol {:?}",
                bad
            );
        }
    }
}
