use std::fmt;

/// Non-fatal findings recorded while a tree is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Diagnostic {
    /// An atom that was not written in uppercase. It is stored uppercased
    /// when the letter has a single-character uppercase form. `offset` is the
    /// byte offset of the atom in the normalized input.
    LowercaseAtom { letter: char, offset: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::LowercaseAtom { letter, offset } => {
                write!(f, "atom '{letter}' at offset {offset} is not uppercase")
            }
        }
    }
}
