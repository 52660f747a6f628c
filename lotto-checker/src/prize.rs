use serde::{Deserialize, Serialize};

/// Prize tier for a ticket, by number of matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrizeTier {
    Jackpot,
    Second,
    Third,
    Fourth,
    NoPrize,
}

impl PrizeTier {
    /// Winning tiers, best first.
    pub const WINNING: [PrizeTier; 4] = [
        PrizeTier::Jackpot,
        PrizeTier::Second,
        PrizeTier::Third,
        PrizeTier::Fourth,
    ];

    pub fn from_match_count(match_count: usize) -> Self {
        debug_assert!(match_count <= 6, "match count {match_count} out of range");

        match match_count {
            6 => PrizeTier::Jackpot,
            5 => PrizeTier::Second,
            4 => PrizeTier::Third,
            3 => PrizeTier::Fourth,
            _ => PrizeTier::NoPrize,
        }
    }

    /// Prize text as stored on a scan record.
    pub fn prize(self) -> &'static str {
        match self {
            PrizeTier::Jackpot => "JACKPOT WINNER!",
            PrizeTier::Second => "₱50,000.00",
            PrizeTier::Third => "₱2,000.00",
            PrizeTier::Fourth => "₱150.00",
            PrizeTier::NoPrize => "No Prize",
        }
    }

    pub fn is_winner(self) -> bool {
        !matches!(self, PrizeTier::NoPrize)
    }

    pub fn required_matches(self) -> Option<usize> {
        match self {
            PrizeTier::Jackpot => Some(6),
            PrizeTier::Second => Some(5),
            PrizeTier::Third => Some(4),
            PrizeTier::Fourth => Some(3),
            PrizeTier::NoPrize => None,
        }
    }

    /// Short amount for the prize breakdown table.
    pub fn breakdown_amount(self) -> &'static str {
        match self {
            PrizeTier::Jackpot => "Jackpot",
            PrizeTier::Second => "₱50,000",
            PrizeTier::Third => "₱2,000",
            PrizeTier::Fourth => "₱150",
            PrizeTier::NoPrize => "-",
        }
    }

    /// `(matches, amount)` rows for every winning tier.
    pub fn breakdown() -> Vec<(usize, &'static str)> {
        Self::WINNING
            .iter()
            .filter_map(|tier| Some((tier.required_matches()?, tier.breakdown_amount())))
            .collect()
    }
}

/// Result of classifying a match count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prize {
    pub tier: PrizeTier,
    pub prize: &'static str,
    pub is_winner: bool,
}

pub fn classify(match_count: usize) -> Prize {
    let tier = PrizeTier::from_match_count(match_count);
    Prize {
        tier,
        prize: tier.prize(),
        is_winner: tier.is_winner(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prize_table() {
        assert_eq!(classify(6).prize, "JACKPOT WINNER!");
        assert!(classify(6).is_winner);

        assert_eq!(classify(5).prize, "₱50,000.00");
        assert_eq!(classify(4).prize, "₱2,000.00");
        assert_eq!(classify(3).prize, "₱150.00");
        for m in 3..=5 {
            assert!(classify(m).is_winner);
        }

        for m in 0..=2 {
            let prize = classify(m);
            assert_eq!(prize.prize, "No Prize");
            assert!(!prize.is_winner);
            assert_eq!(prize.tier, PrizeTier::NoPrize);
        }
    }

    #[test]
    fn test_tiers_round_trip_through_match_count() {
        for tier in PrizeTier::WINNING {
            let matches = tier.required_matches().unwrap();
            assert_eq!(PrizeTier::from_match_count(matches), tier);
        }
    }

    #[test]
    fn test_breakdown() {
        assert_eq!(
            PrizeTier::breakdown(),
            vec![(6, "Jackpot"), (5, "₱50,000"), (4, "₱2,000"), (3, "₱150")]
        );
    }
}
