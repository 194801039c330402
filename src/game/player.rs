use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

/// Colour a player's pieces are drawn in. Front ends map this onto their own palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Red,
    Blue,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Player number as shown to people: 1 or 2
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        Cell::Occupied(self)
    }

    /// Get player name for display
    pub fn display_name(self) -> &'static str {
        match self {
            Player::One => "Red",
            Player::Two => "Blue",
        }
    }

    pub fn display_color(self) -> PieceColor {
        match self {
            Player::One => PieceColor::Red,
            Player::Two => PieceColor::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
    }

    #[test]
    fn test_display_is_derived_from_player() {
        assert_eq!(Player::One.display_name(), "Red");
        assert_eq!(Player::Two.display_name(), "Blue");
        assert_eq!(Player::One.display_color(), PieceColor::Red);
        assert_eq!(Player::Two.display_color(), PieceColor::Blue);
        assert_eq!(Player::One.other().display_name(), "Blue");
    }
}
