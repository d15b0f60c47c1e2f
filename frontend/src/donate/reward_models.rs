use thiserror::Error;

use crate::config;

#[derive(Debug, Error, PartialEq)]
pub enum RewardError {
    #[error("no reward tiers configured")]
    EmptyTiers,
    #[error("reward {reward} has invalid minimum {minimum}")]
    InvalidMinimum { reward: u8, minimum: f64 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct RewardTier {
    pub reward: u8,
    pub label: String,
    pub minimum: f64,
}

/// Donation amount as typed by the user. Anything that is not a finite,
/// non-negative number counts as zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct DonationAmount(f64);

impl DonationAmount {
    pub fn parse(input: &str) -> Self {
        match input.trim().parse::<f64>() {
            Ok(value) if value.is_finite() && value >= 0.0 => DonationAmount(value),
            _ => DonationAmount(0.0),
        }
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl From<u32> for DonationAmount {
    fn from(value: u32) -> Self {
        DonationAmount(value as f64)
    }
}

/// Which tier ended up checked after a recomputation. Holding a single index
/// keeps exactly one tier checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckedTier {
    /// Highest tier whose minimum the amount reaches.
    Qualifying(usize),
    /// Nothing qualifies, the top tier is checked instead.
    Fallback(usize),
}

impl CheckedTier {
    pub fn index(&self) -> usize {
        match *self {
            CheckedTier::Qualifying(index) | CheckedTier::Fallback(index) => index,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TierSelection {
    pub checked: CheckedTier,
    pub small: Vec<bool>,
    pub qualifying: usize,
}

impl TierSelection {
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.index() == index
    }

    pub fn is_small(&self, index: usize) -> bool {
        self.small.get(index).copied().unwrap_or(false)
    }

    pub fn shows_multiple(&self) -> bool {
        self.qualifying > 1
    }
}

/// Non-empty set of reward tiers in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct RewardTiers {
    tiers: Vec<RewardTier>,
    // index of the tier with the largest minimum
    top: usize,
}

impl RewardTiers {
    pub fn new(tiers: Vec<RewardTier>) -> Result<Self, RewardError> {
        if tiers.is_empty() {
            return Err(RewardError::EmptyTiers);
        }
        if let Some(bad) = tiers
            .iter()
            .find(|tier| !tier.minimum.is_finite() || tier.minimum < 0.0)
        {
            return Err(RewardError::InvalidMinimum {
                reward: bad.reward,
                minimum: bad.minimum,
            });
        }

        let mut top = 0;
        for (index, tier) in tiers.iter().enumerate() {
            if tier.minimum >= tiers[top].minimum {
                top = index;
            }
        }

        Ok(RewardTiers { tiers, top })
    }

    pub fn from_config() -> Result<Self, RewardError> {
        Self::new(
            config::REWARD_LEVELS
                .iter()
                .map(|(reward, label, minimum)| RewardTier {
                    reward: *reward,
                    label: label.to_string(),
                    minimum: *minimum,
                })
                .collect(),
        )
    }

    pub fn tiers(&self) -> &[RewardTier] {
        &self.tiers
    }

    /// Recompute checked and de-emphasized state for the given amount.
    pub fn select(&self, amount: DonationAmount) -> TierSelection {
        let amount = amount.value();
        let mut small = Vec::with_capacity(self.tiers.len());
        let mut best: Option<usize> = None;
        let mut qualifying = 0;

        for (index, tier) in self.tiers.iter().enumerate() {
            let below = amount < tier.minimum;
            small.push(below);
            if below {
                continue;
            }
            qualifying += 1;
            match best {
                Some(current) if self.tiers[current].minimum > tier.minimum => {}
                _ => best = Some(index),
            }
        }

        let checked = match best {
            Some(index) => CheckedTier::Qualifying(index),
            None => CheckedTier::Fallback(self.top),
        };

        TierSelection {
            checked,
            small,
            qualifying,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiers(minima: &[f64]) -> RewardTiers {
        RewardTiers::new(
            minima
                .iter()
                .enumerate()
                .map(|(i, minimum)| RewardTier {
                    reward: i as u8,
                    label: format!("tier {}", i),
                    minimum: *minimum,
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_selects_highest_qualifying_tier() {
        let tiers = tiers(&[10.0, 25.0, 50.0, 100.0]);
        let selection = tiers.select(DonationAmount::parse("30"));

        assert_eq!(selection.checked, CheckedTier::Qualifying(1));
        assert_eq!(selection.small, vec![false, false, true, true]);
        assert_eq!(selection.qualifying, 2);
        assert!(selection.shows_multiple());
    }

    #[test]
    fn test_falls_back_to_top_tier() {
        let tiers = tiers(&[10.0, 25.0, 50.0, 100.0]);
        let selection = tiers.select(DonationAmount::parse("5"));

        assert_eq!(selection.checked, CheckedTier::Fallback(3));
        assert_eq!(selection.small, vec![true; 4]);
        assert_eq!(selection.qualifying, 0);
        assert!(!selection.shows_multiple());
    }

    #[test]
    fn test_fallback_follows_largest_minimum_not_position() {
        let tiers = tiers(&[50.0, 100.0, 10.0]);
        let selection = tiers.select(DonationAmount::parse("1"));
        assert_eq!(selection.checked, CheckedTier::Fallback(1));

        let selection = tiers.select(DonationAmount::parse("60"));
        assert_eq!(selection.checked, CheckedTier::Qualifying(0));
        assert_eq!(selection.qualifying, 2);
    }

    #[test]
    fn test_exact_minimum_qualifies() {
        let tiers = tiers(&[10.0, 25.0, 50.0, 100.0]);
        let selection = tiers.select(DonationAmount::parse("100"));

        assert_eq!(selection.checked, CheckedTier::Qualifying(3));
        assert_eq!(selection.small, vec![false; 4]);
        assert_eq!(selection.qualifying, 4);
    }

    #[test]
    fn test_single_qualifying_tier_hides_indicator() {
        let tiers = tiers(&[10.0, 25.0]);
        let selection = tiers.select(DonationAmount::parse("12"));

        assert_eq!(selection.checked, CheckedTier::Qualifying(0));
        assert!(!selection.shows_multiple());
    }

    #[test]
    fn test_malformed_amount_counts_as_zero() {
        for input in ["", "  ", "abc", "-20", "NaN", "inf", "1e400"] {
            assert_eq!(DonationAmount::parse(input).value(), 0.0, "input {:?}", input);
        }
        assert_eq!(DonationAmount::parse(" 12.5 ").value(), 12.5);

        let tiers = tiers(&[0.0, 25.0]);
        let selection = tiers.select(DonationAmount::parse("garbage"));
        assert_eq!(selection.checked, CheckedTier::Qualifying(0));
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let tiers = tiers(&[10.0, 25.0, 50.0, 100.0]);
        for amount in ["0", "10", "26", "75", "1000"] {
            let amount = DonationAmount::parse(amount);
            assert_eq!(tiers.select(amount), tiers.select(amount));
        }
    }

    #[test]
    fn test_checked_tier_is_largest_qualifying_minimum() {
        let minima = [5.0, 20.0, 45.0, 90.0, 200.0];
        let tiers = tiers(&minima);
        for amount in 0u32..250 {
            let selection = tiers.select(DonationAmount::from(amount));
            let expected = minima
                .iter()
                .rposition(|m| *m <= amount as f64)
                .map(CheckedTier::Qualifying)
                .unwrap_or(CheckedTier::Fallback(minima.len() - 1));
            assert_eq!(selection.checked, expected, "amount {}", amount);
            assert_eq!(
                selection.shows_multiple(),
                minima.iter().filter(|m| **m <= amount as f64).count() > 1
            );
        }
    }

    #[test]
    fn test_rejects_invalid_tier_sets() {
        assert_eq!(RewardTiers::new(vec![]), Err(RewardError::EmptyTiers));

        let result = RewardTiers::new(vec![RewardTier {
            reward: 2,
            label: "broken".to_string(),
            minimum: -1.0,
        }]);
        assert_eq!(
            result,
            Err(RewardError::InvalidMinimum { reward: 2, minimum: -1.0 })
        );
    }

    #[test]
    fn test_config_levels_are_valid() {
        let tiers = RewardTiers::from_config().unwrap();
        assert_eq!(tiers.tiers().len(), config::REWARD_LEVELS.len());
    }
}
