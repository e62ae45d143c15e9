//! Difficulty filter hint forwarded to reply providers.
//!
//! The session core treats the difficulty as an opaque preference; only
//! providers interpret it.
//!
//! ```rust
//! use lprovider::Difficulty;
//!
//! assert_eq!(Difficulty::default(), Difficulty::All);
//! assert_eq!(Difficulty::Beginner.to_string(), "beginner");
//! ```

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Difficulty {
    #[default]
    All,
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Every selectable level, in presentation order.
    pub const LEVELS: [Difficulty; 4] = [
        Difficulty::All,
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            Self::All => "all",
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        };

        f.write_str(level)
    }
}
