use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

/// Languages the API can localize names and descriptions into.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    En,
    Es,
    De,
    Fr,
    Zh,
}

impl Display for Language {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::Fr => "fr",
            Self::Zh => "zh",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Error)]
#[error("could not parse language \"{0}\"")]
pub struct ParseLanguageError(String);

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();

        if lower.starts_with("en") {
            Ok(Self::En)
        } else if lower.starts_with("es") || lower.starts_with("sp") {
            Ok(Self::Es)
        } else if lower.starts_with("de") || lower.starts_with("ge") {
            Ok(Self::De)
        } else if lower.starts_with("fr") {
            Ok(Self::Fr)
        } else if lower.starts_with("zh") || lower.starts_with("ch") || lower.starts_with("cn") {
            Ok(Self::Zh)
        } else {
            Err(ParseLanguageError(s.to_owned()))
        }
    }
}
