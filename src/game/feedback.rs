//! Player-facing status messages
//!
//! Each variant is one condition the game reports back; `Display` gives the
//! default wording.

use std::fmt;

use super::ledger::UnitKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// The current phrase was solved
    Solved,
    /// The decryption does not match the phrase yet
    NotSolved,
    /// No phrases left to solve
    AllPhrasesComplete,
    /// Every grid slot holds a letter
    CipherComplete,
    /// Some grid slots are still unknown
    LettersRemain { unknown: usize },
    /// A new cipher was refused because the grid is not filled in
    CipherIncomplete,
    /// A new cipher replaced the old one
    NewCipher,
    /// An expedition brought back a phrase
    NewPhrase(String),
    /// The reward pool has run dry
    PoolEmpty,
    /// An expedition revealed a letter
    LetterRevealed(char),
    /// Every letter was already known
    NothingToReveal,
    /// A team was sent out
    TeamSent { pin: String, days: u32 },
    Bought(UnitKind),
    NotEnoughMoney,
    UnknownItem,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Solved => write!(f, "Puzzle Solved!"),
            Feedback::NotSolved => write!(f, "Not quite correct. Keep trying!"),
            Feedback::AllPhrasesComplete => {
                write!(f, "All phrases decoded. Send scouts to find more!")
            }
            Feedback::CipherComplete => write!(f, "All letters discovered! Cipher complete."),
            Feedback::LettersRemain { unknown } => {
                write!(f, "Some letters remain unknown ({}).", unknown)
            }
            Feedback::CipherIncomplete => {
                write!(f, "You must complete the current cipher first.")
            }
            Feedback::NewCipher => write!(f, "A new cipher has been generated."),
            Feedback::NewPhrase(phrase) => write!(f, "Your scouts found a new phrase: {}", phrase),
            Feedback::PoolEmpty => write!(f, "There are no more phrases to find."),
            Feedback::LetterRevealed(letter) => {
                write!(f, "Your scouts uncovered the letter {}", letter)
            }
            Feedback::NothingToReveal => write!(f, "Your scouts found nothing new."),
            Feedback::TeamSent { pin, days } => {
                write!(f, "Team sent to {}. Expected back in {} days.", pin, days)
            }
            Feedback::Bought(UnitKind::Scouts) => write!(f, "Bought: Scout"),
            Feedback::Bought(UnitKind::Shovels) => write!(f, "Bought: Shovel"),
            Feedback::NotEnoughMoney => write!(f, "Not enough money!"),
            Feedback::UnknownItem => write!(f, "That item is not for sale."),
        }
    }
}
