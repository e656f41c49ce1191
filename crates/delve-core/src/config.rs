//! Item rules configuration
//!
//! Tunables for item generation and the inscription command. Every field has
//! a default, so a partial JSON document is enough to override one value.

use serde::{Deserialize, Serialize};

/// Width of the line the inscription prompt shares with the item description.
const PROMPT_WIDTH: usize = 78;

/// Rules for item creation and inscription
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemRules {
    /// Longest inscription the inscription command accepts
    pub inscription_max_len: usize,
    /// Enchantment roll constants
    pub magic: MagicRules,
}

impl Default for ItemRules {
    fn default() -> Self {
        Self {
            inscription_max_len: 12,
            magic: MagicRules::default(),
        }
    }
}

impl ItemRules {
    /// Room left for an inscription after showing `description` on the prompt line.
    pub fn inscription_limit(&self, description: &str) -> usize {
        PROMPT_WIDTH
            .saturating_sub(description.chars().count())
            .min(self.inscription_max_len)
    }

    /// Truncate user-entered text to the inscription limit for `description`.
    pub fn clip_inscription(&self, description: &str, text: &str) -> String {
        text.chars().take(self.inscription_limit(description)).collect()
    }
}

/// Constants that shape magical item generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MagicRules {
    /// Base percent chance that an item is magical, before depth
    pub base_chance: u32,
    /// Cap on the magical chance
    pub max_chance: u32,
    /// Special (ego) chance is the magic chance divided by this
    pub special_divisor: u32,
    /// Cursed chance is ten times the magic chance divided by this
    pub cursed_divisor: u32,
    /// Bonus spread grows by this many hundredths of a point per level
    pub level_std_adjust: i32,
    /// Minimum bonus spread
    pub level_min_std: i32,
}

impl Default for MagicRules {
    fn default() -> Self {
        Self {
            base_chance: 15,
            max_chance: 70,
            special_divisor: 6,
            cursed_divisor: 13,
            level_std_adjust: 125,
            level_min_std: 7,
        }
    }
}

impl MagicRules {
    /// Percent chance that an item found at `depth` is magical
    pub fn magic_chance(&self, depth: u8) -> u32 {
        (self.base_chance + u32::from(depth)).min(self.max_chance)
    }

    /// Percent chance that a magical item also gets a special ability
    pub fn special_chance(&self, depth: u8) -> u32 {
        self.magic_chance(depth) / self.special_divisor.max(1)
    }

    /// Percent chance that a non-magical item is cursed instead
    pub fn cursed_chance(&self, depth: u8) -> u32 {
        10 * self.magic_chance(depth) / self.cursed_divisor.max(1)
    }

    /// Standard deviation used for bonus rolls at `depth`, capped at `max_std`
    pub fn bonus_std(&self, depth: u8, max_std: i32) -> i32 {
        (self.level_std_adjust * i32::from(depth) / 100 + self.level_min_std).min(max_std)
    }
}
