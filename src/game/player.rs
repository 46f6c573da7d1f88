/// One of the two participants. The name and color are display attributes
/// only; the engine never inspects them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Player {
    name: String,
    color: String,
}

impl Player {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Player {
            name: name.into(),
            color: color.into(),
        }
    }

    /// Get player name for display
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the color label chosen for this player
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// The slot a player was registered in. Cells record seats rather than
/// players, so identity never depends on the display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Index into a two-element player array
    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_seat() {
        assert_eq!(Seat::First.other(), Seat::Second);
        assert_eq!(Seat::Second.other(), Seat::First);
    }

    #[test]
    fn test_seat_index() {
        assert_eq!(Seat::First.index(), 0);
        assert_eq!(Seat::Second.index(), 1);
    }

    #[test]
    fn test_player_attributes() {
        let player = Player::new("Alice", "red");
        assert_eq!(player.name(), "Alice");
        assert_eq!(player.color(), "red");
    }
}
