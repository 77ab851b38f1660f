use colored::Colorize;
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};
use thiserror::Error;

pub const COPPER_PER_SILVER: i64 = 100;
pub const COPPER_PER_GOLD: i64 = 100 * COPPER_PER_SILVER;

/// An amount of coin split into its denominations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Coins {
    pub gold: i64,
    pub silver: i64,
    pub copper: i64,
}

impl Coins {
    #[must_use]
    pub fn total(&self) -> i64 {
        gold_to_coins(self.gold, self.silver, self.copper)
    }
}

/// Splits an amount of copper into gold, silver and copper. The sign is dropped.
#[must_use]
pub fn coins_to_gold(copper: i64) -> Coins {
    let copper = copper.saturating_abs();

    Coins {
        gold: copper / COPPER_PER_GOLD,
        silver: copper % COPPER_PER_GOLD / COPPER_PER_SILVER,
        copper: copper % COPPER_PER_SILVER,
    }
}

/// Total copper in the given denominations, saturating at the bounds of `i64`.
#[must_use]
pub fn gold_to_coins(gold: i64, silver: i64, copper: i64) -> i64 {
    gold.saturating_mul(COPPER_PER_GOLD)
        .saturating_add(silver.saturating_mul(COPPER_PER_SILVER))
        .saturating_add(copper)
}

/// `12g 34s 56c`, leaving out leading zero denominations.
/// The alternate form `{:#}` colors each denomination for the terminal.
impl Display for Coins {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts = [(self.gold, 'g'), (self.silver, 's'), (self.copper, 'c')];
        let first = parts.iter().position(|(n, _)| *n != 0).unwrap_or(2);

        for (i, (amount, unit)) in parts[first..].iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let part = format!("{amount}{unit}");
            if f.alternate() {
                let part = match unit {
                    'g' => part.yellow(),
                    's' => part.white(),
                    _ => part.truecolor(184, 115, 51),
                };
                write!(f, "{part}")?;
            } else {
                write!(f, "{part}")?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not read \"{0}\" as coins. Use a copper amount or a form like 1g 20s 5c")]
pub struct ParseCoinsError(String);

impl FromStr for Coins {
    type Err = ParseCoinsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCoinsError(s.to_owned());

        if s.trim().is_empty() {
            return Err(err());
        }
        if let Ok(copper) = s.trim().parse::<i64>() {
            return Ok(coins_to_gold(copper));
        }

        let mut total = 0_i64;
        for token in s.split_whitespace() {
            let unit = token.chars().last().ok_or_else(err)?;
            let amount = token[..token.len() - unit.len_utf8()].parse::<i64>().map_err(|_| err())?;
            let copper = match unit.to_ascii_lowercase() {
                'g' => amount.checked_mul(COPPER_PER_GOLD),
                's' => amount.checked_mul(COPPER_PER_SILVER),
                'c' => Some(amount),
                _ => return Err(err()),
            };
            total = copper.and_then(|c| total.checked_add(c)).ok_or_else(err)?;
        }

        Ok(coins_to_gold(total))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_denominations() {
        assert_eq!(coins_to_gold(123_456), Coins { gold: 12, silver: 34, copper: 56 });
        assert_eq!(coins_to_gold(-250), Coins { gold: 0, silver: 2, copper: 50 });
        assert_eq!(coins_to_gold(0), Coins::default());
    }

    #[test]
    fn round_trips_valid_decompositions() {
        for gold in [0, 1, 7, 12_345] {
            for silver in [0, 1, 50, 99] {
                for copper in [0, 1, 42, 99] {
                    let coins = Coins { gold, silver, copper };
                    assert_eq!(coins_to_gold(gold_to_coins(gold, silver, copper)), coins);
                    assert_eq!(coins_to_gold(coins.total()), coins);
                }
            }
        }
    }

    #[test]
    fn displays_without_leading_zeroes() {
        assert_eq!(coins_to_gold(123_456).to_string(), "12g 34s 56c");
        assert_eq!(coins_to_gold(305).to_string(), "3s 5c");
        assert_eq!(coins_to_gold(10_000).to_string(), "1g 0s 0c");
        assert_eq!(coins_to_gold(0).to_string(), "0c");
    }

    #[test]
    fn parses_both_notations() {
        assert_eq!("123456".parse(), Ok(coins_to_gold(123_456)));
        assert_eq!("12g 34s 56c".parse(), Ok(coins_to_gold(123_456)));
        assert_eq!("1G 5c".parse(), Ok(coins_to_gold(10_005)));
        assert_eq!("150s".parse(), Ok(coins_to_gold(15_000)));
        assert!("12x".parse::<Coins>().is_err());
        assert!("".parse::<Coins>().is_err());
    }

    #[test]
    fn oversized_amounts_are_rejected() {
        assert!("99999999999999999g".parse::<Coins>().is_err());
        assert!("92233720368547759s".parse::<Coins>().is_err());
        assert!("9223372036854775807c 1c".parse::<Coins>().is_err());
        assert_eq!("922337203685g".parse::<Coins>().map(|c| c.gold), Ok(922_337_203_685));
    }

    #[test]
    fn totals_saturate() {
        assert_eq!(gold_to_coins(i64::MAX / 2, 0, 0), i64::MAX);
        assert_eq!(gold_to_coins(i64::MIN / 2, 0, 0), i64::MIN);
        assert_eq!(Coins { gold: 1, silver: 0, copper: i64::MAX }.total(), i64::MAX);
    }
}
