//! Chat command grammar.

/// Command recognised in a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `!incursions`: list every active incursion.
    Incursions,
    /// `!info <constellation>`: show the incursion in one constellation.
    Info(String),
    /// `!entrance`: show the current entrance and its distances.
    Entrance,
    /// `!setentrance <system>`: set the entrance and recompute distances.
    SetEntrance(String),
}

impl Command {
    /// Parses message content into a command.
    ///
    /// `!incursions` and `!entrance` must match exactly. Commands taking an argument use
    /// the remainder after the first space, trimmed; a missing or blank argument yields no
    /// command.
    pub fn parse(content: &str) -> Option<Self> {
        match content {
            "!incursions" => return Some(Self::Incursions),
            "!entrance" => return Some(Self::Entrance),
            _ => {}
        }

        let (name, argument) = content.split_once(' ')?;
        let argument = argument.trim();
        if argument.is_empty() {
            return None;
        }

        match name {
            "!info" => Some(Self::Info(argument.to_string())),
            "!setentrance" => Some(Self::SetEntrance(argument.to_string())),
            _ => None,
        }
    }
}
