//! Command-line interface commands.

/// Available CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliCommand {
    /// Request tag suggestions for every persona and write the tagged table.
    Tag,
    /// Compute the likely-follower table and write it.
    Followers,
    /// Print the distinct tag vocabulary.
    Vocab,
    /// Show version information.
    Version,
}

impl std::fmt::Display for CliCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tag => write!(f, "tag"),
            Self::Followers => write!(f, "followers"),
            Self::Vocab => write!(f, "vocab"),
            Self::Version => write!(f, "version"),
        }
    }
}

/// Parse a CLI command from a string.
pub fn parse_command(cmd: &str) -> Option<CliCommand> {
    match cmd {
        "tag" => Some(CliCommand::Tag),
        "followers" | "follow" => Some(CliCommand::Followers),
        "vocab" | "vocabulary" => Some(CliCommand::Vocab),
        "version" | "--version" | "-v" => Some(CliCommand::Version),
        _ => None,
    }
}

/// Usage text for the binary.
pub fn usage() -> String {
    "usage: followcast <command> [args]\n\
     \n\
     commands:\n\
     \x20 tag <personas.csv> <tagged.csv>        suggest tags for every persona\n\
     \x20 followers <personas.csv> <out.csv>     compute the likely-follower table\n\
     \x20 vocab <personas.csv>                   print the distinct tag vocabulary\n\
     \x20 version                                show version information"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("tag"), Some(CliCommand::Tag));
        assert_eq!(parse_command("followers"), Some(CliCommand::Followers));
        assert_eq!(parse_command("follow"), Some(CliCommand::Followers));
        assert_eq!(parse_command("vocab"), Some(CliCommand::Vocab));
        assert_eq!(parse_command("-v"), Some(CliCommand::Version));
        assert_eq!(parse_command("bogus"), None);
    }

    #[test]
    fn test_display_round_trips() {
        for command in [
            CliCommand::Tag,
            CliCommand::Followers,
            CliCommand::Vocab,
            CliCommand::Version,
        ] {
            assert_eq!(parse_command(&command.to_string()), Some(command));
        }
    }
}
