//! Item categories

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Enumerated kind of an object template.
///
/// Discriminants are the legacy type codes, which the ordering predicates
/// below depend on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
#[repr(u8)]
pub enum ItemCategory {
    #[default]
    Nothing = 0,
    Misc = 1,
    Chest = 2,
    SlingAmmo = 10,
    Bolt = 11,
    Arrow = 12,
    Spike = 13,
    Light = 15,
    Bow = 20,
    Hafted = 21,
    Polearm = 22,
    Sword = 23,
    Digging = 25,
    Boots = 30,
    Gloves = 31,
    Cloak = 32,
    Helm = 33,
    Shield = 34,
    HardArmor = 35,
    SoftArmor = 36,
    Amulet = 40,
    Ring = 45,
    Staff = 55,
    Wand = 65,
    Scroll1 = 70,
    Scroll2 = 71,
    Potion1 = 75,
    Potion2 = 76,
    Flask = 77,
    Food = 80,
    MagicBook = 90,
    PrayerBook = 91,
    Gold = 100,
    InvisibleTrap = 101,
    VisibleTrap = 102,
    Rubble = 103,
    OpenDoor = 104,
    ClosedDoor = 105,
    UpStair = 107,
    DownStair = 108,
    SecretDoor = 109,
    StoreDoor = 110,
}

impl ItemCategory {
    /// Legacy numeric type code
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Can be worn or wielded
    pub const fn is_wearable(self) -> bool {
        let code = self.code();
        code >= 10 && code <= 50
    }

    /// Takes to-hit, to-damage or armor enchantments
    pub const fn is_enchantable(self) -> bool {
        let code = self.code();
        code >= 10 && code <= 39
    }

    /// Melee weapon or digging tool
    pub const fn is_weapon(self) -> bool {
        matches!(
            self,
            ItemCategory::Hafted | ItemCategory::Polearm | ItemCategory::Sword | ItemCategory::Digging
        )
    }

    /// Fired from a launcher
    pub const fn is_missile(self) -> bool {
        matches!(
            self,
            ItemCategory::SlingAmmo | ItemCategory::Bolt | ItemCategory::Arrow
        )
    }

    /// Body armor, shields and worn accessories with an armor class
    pub const fn is_armor(self) -> bool {
        let code = self.code();
        code >= 30 && code <= 36
    }

    pub const fn is_scroll(self) -> bool {
        matches!(self, ItemCategory::Scroll1 | ItemCategory::Scroll2)
    }

    pub const fn is_potion(self) -> bool {
        matches!(self, ItemCategory::Potion1 | ItemCategory::Potion2)
    }

    pub const fn is_book(self) -> bool {
        matches!(self, ItemCategory::MagicBook | ItemCategory::PrayerBook)
    }

    /// Uses charges
    pub const fn has_charges(self) -> bool {
        matches!(self, ItemCategory::Wand | ItemCategory::Staff)
    }

    /// Can be carried in a pack
    pub const fn is_portable(self) -> bool {
        self.code() <= ItemCategory::Gold.code()
    }

    /// Doors, stairs, traps and rubble: map features stored as objects
    pub const fn is_dungeon_feature(self) -> bool {
        self.code() > ItemCategory::Gold.code()
    }

    /// Categories sharing one namespace of stack codes.
    ///
    /// Scrolls and potions each span two categories; a stack code denotes
    /// the same object whichever half it appears in.
    pub const fn family(self) -> ItemCategory {
        match self {
            ItemCategory::Scroll2 => ItemCategory::Scroll1,
            ItemCategory::Potion2 => ItemCategory::Potion1,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_parse_ignores_case() {
        assert_eq!("hardarmor".parse::<ItemCategory>(), Ok(ItemCategory::HardArmor));
        assert_eq!("Potion1".parse::<ItemCategory>(), Ok(ItemCategory::Potion1));
        assert!("armour".parse::<ItemCategory>().is_err());
    }

    #[test]
    fn test_codes() {
        assert_eq!(ItemCategory::Arrow.code(), 12);
        assert_eq!(ItemCategory::Food.code(), 80);
        assert_eq!(ItemCategory::StoreDoor.code(), 110);
    }

    #[test]
    fn test_predicates() {
        assert!(ItemCategory::Sword.is_weapon());
        assert!(ItemCategory::Sword.is_enchantable());
        assert!(ItemCategory::Ring.is_wearable());
        assert!(!ItemCategory::Ring.is_enchantable());
        assert!(ItemCategory::Arrow.is_missile());
        assert!(ItemCategory::Cloak.is_armor());
        assert!(!ItemCategory::Bow.is_armor());
        assert!(ItemCategory::Gold.is_portable());
        assert!(ItemCategory::Rubble.is_dungeon_feature());
        assert!(!ItemCategory::Gold.is_dungeon_feature());
    }

    #[test]
    fn test_families() {
        assert_eq!(ItemCategory::Scroll2.family(), ItemCategory::Scroll1);
        assert_eq!(ItemCategory::Potion1.family(), ItemCategory::Potion1);
        assert_eq!(ItemCategory::Wand.family(), ItemCategory::Wand);
    }

    #[test]
    fn test_portable_and_feature_partition() {
        for category in ItemCategory::iter() {
            assert_ne!(category.is_portable(), category.is_dungeon_feature());
        }
    }
}
