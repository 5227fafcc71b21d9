//! # Gender — Gênero de uma Pessoa
//!
//! Apenas dois valores são reconhecidos pelas regras `brother`/`sister`.
//! Pessoas sem gênero declarado simplesmente não satisfazem essas regras.

use std::fmt;
use std::str::FromStr;

use crate::error::KinshipError;

/// Gênero declarado de uma pessoa.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Retorna o label textual usado na entrada e na saída ("male"/"female").
    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Conversão a partir de texto livre.
///
/// A comparação é exata (sem `to_lowercase`): "Male" é rejeitado,
/// assim como qualquer valor fora do conjunto.
impl FromStr for Gender {
    type Err = KinshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(KinshipError::InvalidGender(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_labels() {
        assert_eq!("male".parse::<Gender>(), Ok(Gender::Male));
        assert_eq!("female".parse::<Gender>(), Ok(Gender::Female));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert_eq!(
            "Male".parse::<Gender>(),
            Err(KinshipError::InvalidGender("Male".to_string()))
        );
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("unknown".parse::<Gender>().is_err());
        assert!("".parse::<Gender>().is_err());
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
