use serde::{Deserialize, Serialize};

use crate::domain::roster::Side;

pub const DEFAULT_SET_TARGET: u16 = 25;
pub const DEFAULT_DECIDING_SET_TARGET: u16 = 15;
pub const DEFAULT_MIN_LEAD: u16 = 2;
pub const DEFAULT_SETS_TO_WIN: u8 = 3;
pub const DEFAULT_TIMEOUTS_PER_SET: u8 = 2;

/// Scoring thresholds for one match. Defaults are standard indoor rules:
/// sets to 25, deciding set to 15, win by 2, best of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchRules {
    pub set_target: u16,
    pub deciding_set_target: u16,
    pub min_lead: u16,
    pub sets_to_win: u8,
    pub timeouts_per_set: u8,
}

impl Default for MatchRules {
    fn default() -> Self {
        Self {
            set_target: DEFAULT_SET_TARGET,
            deciding_set_target: DEFAULT_DECIDING_SET_TARGET,
            min_lead: DEFAULT_MIN_LEAD,
            sets_to_win: DEFAULT_SETS_TO_WIN,
            timeouts_per_set: DEFAULT_TIMEOUTS_PER_SET,
        }
    }
}

impl MatchRules {
    /// Most sets a match can run to (5 for best of five).
    pub const fn max_sets(&self) -> u8 {
        self.sets_to_win.saturating_mul(2).saturating_sub(1)
    }

    pub const fn is_deciding_set(&self, set_number: u8) -> bool {
        set_number == self.max_sets()
    }

    pub const fn target_for_set(&self, set_number: u8) -> u16 {
        if self.is_deciding_set(set_number) {
            self.deciding_set_target
        } else {
            self.set_target
        }
    }

    /// Side that has won the set at this score, if any.
    pub fn set_winner(&self, set_number: u8, home: u16, away: u16) -> Option<Side> {
        let target = self.target_for_set(set_number);
        let (leader, lead, top) = if home >= away {
            (Side::Home, home - away, home)
        } else {
            (Side::Away, away - home, away)
        };
        (top >= target && lead >= self.min_lead).then_some(leader)
    }
}
