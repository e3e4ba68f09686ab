use crate::*;

/// Listing shown for `h`/`help`.
pub const HELP_TEXT: &str = "\
Commands Available...
 - Reveal: r/reveal row col
 -   Mark: m/mark   row col
 -  Guess: g/guess  row col
 -   Help: h/help
 -   Quit: q/quit";

/// One line of player input, parsed but not yet applied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(RawCoord2),
    Mark(RawCoord2),
    Guess(RawCoord2),
    Help,
    Quit,
    NoFog,
    /// Unknown first token, kept for logging.
    Invalid(String),
}

impl Command {
    /// Parses one line of input. Keywords are case-sensitive.
    ///
    /// Commands on a cell need exactly two integers after the keyword, the others ignore any
    /// extra tokens. A line with no tokens at all is reported as [`Command::Invalid`].
    pub fn parse(line: &str) -> Result<Self> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(Self::Invalid(String::new()));
        };

        Ok(match keyword {
            "r" | "reveal" => Self::Reveal(parse_coords(tokens)?),
            "m" | "mark" => Self::Mark(parse_coords(tokens)?),
            "g" | "guess" => Self::Guess(parse_coords(tokens)?),
            "h" | "help" => Self::Help,
            "q" | "quit" => Self::Quit,
            "nofog" => Self::NoFog,
            other => Self::Invalid(other.to_owned()),
        })
    }
}

fn parse_coords<'a>(mut tokens: impl Iterator<Item = &'a str>) -> Result<RawCoord2> {
    let mut next = || -> Result<i64> {
        tokens
            .next()
            .and_then(|token| token.parse().ok())
            .ok_or(CommandError::WrongArity)
    };
    let coords = (next()?, next()?);
    if tokens.next().is_some() {
        return Err(CommandError::WrongArity);
    }
    Ok(coords)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_cell_commands() {
        assert_eq!(Command::parse("r 1 2"), Ok(Command::Reveal((1, 2))));
        assert_eq!(Command::parse("reveal 0 0"), Ok(Command::Reveal((0, 0))));
        assert_eq!(Command::parse("  m   3\t4 "), Ok(Command::Mark((3, 4))));
        assert_eq!(Command::parse("mark 3 4"), Ok(Command::Mark((3, 4))));
        assert_eq!(Command::parse("g 9 9"), Ok(Command::Guess((9, 9))));
        assert_eq!(Command::parse("guess -1 20"), Ok(Command::Guess((-1, 20))));
    }

    #[test]
    fn cell_commands_need_exactly_two_integers() {
        assert_eq!(Command::parse("r 0"), Err(CommandError::WrongArity));
        assert_eq!(Command::parse("r"), Err(CommandError::WrongArity));
        assert_eq!(Command::parse("m 1 x"), Err(CommandError::WrongArity));
        assert_eq!(Command::parse("g 1 2 3"), Err(CommandError::WrongArity));
        assert_eq!(Command::parse("r 1.5 2"), Err(CommandError::WrongArity));
    }

    #[test]
    fn argument_free_commands_ignore_extra_tokens() {
        assert_eq!(Command::parse("h"), Ok(Command::Help));
        assert_eq!(Command::parse("help me please"), Ok(Command::Help));
        assert_eq!(Command::parse("q now"), Ok(Command::Quit));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("nofog 1 2"), Ok(Command::NoFog));
    }

    #[test]
    fn unknown_keywords_are_invalid() {
        assert_eq!(
            Command::parse("R 1 1"),
            Ok(Command::Invalid("R".to_owned()))
        );
        assert_eq!(
            Command::parse("fog"),
            Ok(Command::Invalid("fog".to_owned()))
        );
        assert_eq!(Command::parse("   "), Ok(Command::Invalid(String::new())));
    }
}
