//! The positional command line: a command token followed by glyph names.

use crate::name::GlyphName;

/// Usage text listing the commands.
pub static USAGE: &str = "\
usage:
        glyphreg +G glyph [glyph ...]
            Adds glyphs to the various font masters.

        glyphreg -G glyph [glyph ...]
            Removes glyphs from the various font masters.

        glyphreg +L glyph glyph [glyph ...] ligature-glyph
            Adds a new ligature associated with the given ligature-glyph.

        glyphreg -L glyph glyph [glyph ...]
            Removes a ligature.

NOTE: All glyphs are defined by their character name, not by the characters themselves.
";

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `+G`: add each glyph to every master.
    AddGlyphs(Vec<GlyphName>),
    /// `-G`: remove each glyph from every master.
    RemoveGlyphs(Vec<GlyphName>),
    /// `+L`: add a ligature of `glyphs`, drawn by `ligature`.
    AddLigature {
        /// The component glyphs, in order.
        glyphs: Vec<GlyphName>,
        /// The glyph that replaces them.
        ligature: GlyphName,
    },
    /// `-L`: remove the ligature of these glyphs.
    RemoveLigature(Vec<GlyphName>),
}

/// A command line that cannot be run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    /// No command token at all.
    #[error("No command given.")]
    MissingCommand,
    /// `+G` or `-G` without glyphs. The string is "add" or "remove".
    #[error("Need to specify at least one glyph to {0}.")]
    MissingGlyphs(&'static str),
    /// `+L` with fewer than two glyphs plus the ligature glyph.
    #[error("Need to specify at least two glyphs and one ligature-glyph.")]
    AddLigatureArguments,
    /// `-L` with fewer than two glyphs.
    #[error("Need to specify at least two glyphs to form a ligature.")]
    RemoveLigatureArguments,
    /// A command token that is not one of `+G`, `-G`, `+L`, `-L`.
    #[error("Unknown command '{0}'.")]
    UnknownCommand(String),
    /// An argument that is not a valid glyph name.
    #[error("Invalid glyph name '{0}'.")]
    InvalidGlyphName(String),
}

impl Command {
    /// Parses a command token and its arguments.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, UsageError> {
        let Some((command, rest)) = args.split_first() else {
            return Err(UsageError::MissingCommand);
        };
        match command.as_ref() {
            "+G" | "-G" => {
                let add = command.as_ref() == "+G";
                if rest.is_empty() {
                    return Err(UsageError::MissingGlyphs(if add { "add" } else { "remove" }));
                }
                let glyphs = glyph_names(rest)?;
                Ok(if add { Command::AddGlyphs(glyphs) } else { Command::RemoveGlyphs(glyphs) })
            }
            "+L" => {
                if rest.len() < 3 {
                    return Err(UsageError::AddLigatureArguments);
                }
                let mut glyphs = glyph_names(rest)?;
                // checked above: at least three names
                let ligature = glyphs.pop().ok_or(UsageError::AddLigatureArguments)?;
                Ok(Command::AddLigature { glyphs, ligature })
            }
            "-L" => {
                if rest.len() < 2 {
                    return Err(UsageError::RemoveLigatureArguments);
                }
                Ok(Command::RemoveLigature(glyph_names(rest)?))
            }
            other => Err(UsageError::UnknownCommand(other.to_owned())),
        }
    }

    /// Returns `true` if this command adds something.
    pub fn is_add(&self) -> bool {
        matches!(self, Command::AddGlyphs(_) | Command::AddLigature { .. })
    }
}

fn glyph_names<S: AsRef<str>>(args: &[S]) -> Result<Vec<GlyphName>, UsageError> {
    args.iter()
        .map(|arg| {
            GlyphName::new(arg.as_ref())
                .map_err(|_| UsageError::InvalidGlyphName(arg.as_ref().to_owned()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(names: &[&str]) -> Vec<GlyphName> {
        names.iter().map(|name| GlyphName::new(name).unwrap()).collect()
    }

    #[test]
    fn glyph_commands() {
        assert_eq!(Command::parse(&["+G", "a", "b"]), Ok(Command::AddGlyphs(names(&["a", "b"]))));
        assert_eq!(Command::parse(&["-G", "a"]), Ok(Command::RemoveGlyphs(names(&["a"]))));
        assert!(Command::parse(&["+G", "a"]).unwrap().is_add());
        assert!(!Command::parse(&["-G", "a"]).unwrap().is_add());
    }

    #[test]
    fn ligature_commands() {
        assert_eq!(
            Command::parse(&["+L", "f", "i", "f_i"]),
            Ok(Command::AddLigature {
                glyphs: names(&["f", "i"]),
                ligature: GlyphName::new("f_i").unwrap()
            })
        );
        assert_eq!(
            Command::parse(&["-L", "f", "f", "i"]),
            Ok(Command::RemoveLigature(names(&["f", "f", "i"])))
        );
    }

    #[test]
    fn usage_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(Command::parse(&empty), Err(UsageError::MissingCommand));
        assert_eq!(Command::parse(&["+G"]), Err(UsageError::MissingGlyphs("add")));
        assert_eq!(Command::parse(&["-G"]), Err(UsageError::MissingGlyphs("remove")));
        assert_eq!(Command::parse(&["+L", "f", "i"]), Err(UsageError::AddLigatureArguments));
        assert_eq!(Command::parse(&["-L", "f"]), Err(UsageError::RemoveLigatureArguments));
        assert_eq!(Command::parse(&["G"]), Err(UsageError::UnknownCommand("G".into())));
        assert_eq!(Command::parse(&["*G", "a"]), Err(UsageError::UnknownCommand("*G".into())));
        assert_eq!(
            Command::parse(&["+G", "a", ""]),
            Err(UsageError::InvalidGlyphName(String::new()))
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            UsageError::MissingGlyphs("remove").to_string(),
            "Need to specify at least one glyph to remove."
        );
        assert_eq!(UsageError::UnknownCommand("+X".into()).to_string(), "Unknown command '+X'.");
    }
}
