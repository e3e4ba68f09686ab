use core::fmt;

use serde::{Deserialize, Serialize};

/// Player-visible state of a single cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellVisibility {
    #[default]
    Hidden,
    Revealed(u8),
    Flagged,
    Guessed,
}

impl CellVisibility {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// Three character display token for one cell of a rendered frame.
///
/// `exposed_mine` is only set while the no-fog overlay is active, in which case the token is
/// wrapped in angle brackets instead of spaces.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellToken {
    pub visibility: CellVisibility,
    pub exposed_mine: bool,
}

impl fmt::Display for CellToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = if self.exposed_mine {
            ('<', '>')
        } else {
            (' ', ' ')
        };
        match self.visibility {
            CellVisibility::Hidden => write!(f, "{open} {close}"),
            CellVisibility::Revealed(count) => write!(f, "{open}{count}{close}"),
            CellVisibility::Flagged => write!(f, "{open}F{close}"),
            CellVisibility::Guessed => write!(f, "{open}?{close}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(visibility: CellVisibility, exposed_mine: bool) -> String {
        CellToken {
            visibility,
            exposed_mine,
        }
        .to_string()
    }

    #[test]
    fn fogged_tokens() {
        assert_eq!(token(CellVisibility::Hidden, false), "   ");
        assert_eq!(token(CellVisibility::Revealed(3), false), " 3 ");
        assert_eq!(token(CellVisibility::Flagged, false), " F ");
        assert_eq!(token(CellVisibility::Guessed, false), " ? ");
    }

    #[test]
    fn visibility_predicates() {
        assert!(CellVisibility::Revealed(0).is_revealed());
        assert!(!CellVisibility::Flagged.is_revealed());
        assert!(CellVisibility::Flagged.is_flagged());
        assert!(!CellVisibility::Guessed.is_flagged());
        assert!(!CellVisibility::Hidden.is_flagged());
    }

    #[test]
    fn exposed_mine_tokens() {
        assert_eq!(token(CellVisibility::Hidden, true), "< >");
        assert_eq!(token(CellVisibility::Flagged, true), "<F>");
        assert_eq!(token(CellVisibility::Guessed, true), "<?>");
    }
}
