//! Effect sets
//!
//! Every template carries one 32-bit ability word whose meaning depends on
//! its category: the same bit is "cures poison" on a mushroom and "speed"
//! on a ring. [`Effects`] decodes the word into a typed set chosen by
//! category, so bits from one category can never be read as another's.
//!
//! Each flag type below is the compatibility table for its category. Bits
//! without a name are preserved by [`Effects::bits`].

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::ItemCategory;

bitflags! {
    /// Abilities of worn and wielded items
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WearFlags: u32 {
        const STR = 0x0000_0001;
        const INT = 0x0000_0002;
        const WIS = 0x0000_0004;
        const DEX = 0x0000_0008;
        const CON = 0x0000_0010;
        const CHR = 0x0000_0020;
        const SEARCH = 0x0000_0040;
        const SLOW_DIGEST = 0x0000_0080;
        const STEALTH = 0x0000_0100;
        const AGGRAVATE = 0x0000_0200;
        const TELEPORT = 0x0000_0400;
        const REGEN = 0x0000_0800;
        const SPEED = 0x0000_1000;
        const SLAY_DRAGON = 0x0000_2000;
        const SLAY_ANIMAL = 0x0000_4000;
        const SLAY_EVIL = 0x0000_8000;
        const SLAY_UNDEAD = 0x0001_0000;
        const FROST_BRAND = 0x0002_0000;
        const FLAME_TONGUE = 0x0004_0000;
        const RES_FIRE = 0x0008_0000;
        const RES_ACID = 0x0010_0000;
        const RES_COLD = 0x0020_0000;
        const SUST_STAT = 0x0040_0000;
        const FREE_ACT = 0x0080_0000;
        const SEE_INVIS = 0x0100_0000;
        const RES_LIGHT = 0x0200_0000;
        const FFALL = 0x0400_0000;
        const BLIND = 0x0800_0000;
        const TIMID = 0x1000_0000;
        const TUNNEL = 0x2000_0000;
        const INFRA = 0x4000_0000;
        const CURSED = 0x8000_0000;

        /// Abilities that show up as a signed pluses value
        const STATS = Self::STR.bits() | Self::INT.bits() | Self::WIS.bits()
            | Self::DEX.bits() | Self::CON.bits() | Self::CHR.bits();
    }
}

bitflags! {
    /// Effects of eating
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FoodFlags: u32 {
        const POISON = 1 << 0;
        const BLINDNESS = 1 << 1;
        const PARANOIA = 1 << 2;
        const CONFUSION = 1 << 3;
        const HALLUCINATION = 1 << 4;
        const CURE_POISON = 1 << 5;
        const CURE_BLINDNESS = 1 << 6;
        const CURE_PARANOIA = 1 << 7;
        const CURE_CONFUSION = 1 << 8;
        const WEAKNESS = 1 << 9;
        const UNHEALTH = 1 << 10;
        const RESTORE_STR = 1 << 15;
        const RESTORE_CON = 1 << 16;
        const RESTORE_INT = 1 << 17;
        const RESTORE_WIS = 1 << 18;
        const RESTORE_DEX = 1 << 19;
        const RESTORE_CHR = 1 << 20;
        const FIRST_AID = 1 << 21;
        const MINOR_CURES = 1 << 22;
        const LIGHT_CURES = 1 << 23;
        const MAJOR_CURES = 1 << 25;
        const POISONOUS_DAMAGE = 1 << 26;
    }
}

bitflags! {
    /// Effects of the first potion family
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Potion1Flags: u32 {
        const GAIN_STR = 1 << 0;
        const LOSE_STR = 1 << 1;
        const RESTORE_STR = 1 << 2;
        const GAIN_INT = 1 << 3;
        const LOSE_INT = 1 << 4;
        const RESTORE_INT = 1 << 5;
        const GAIN_WIS = 1 << 6;
        const LOSE_WIS = 1 << 7;
        const RESTORE_WIS = 1 << 8;
        const GAIN_CHR = 1 << 9;
        const LOSE_CHR = 1 << 10;
        const RESTORE_CHR = 1 << 11;
        const CURE_LIGHT = 1 << 12;
        const CURE_SERIOUS = 1 << 13;
        const CURE_CRITICAL = 1 << 14;
        const HEALING = 1 << 15;
        const GAIN_CON = 1 << 16;
        const GAIN_EXPERIENCE = 1 << 17;
        const SLEEP = 1 << 18;
        const BLINDNESS = 1 << 19;
        const CONFUSION = 1 << 20;
        const POISON = 1 << 21;
        const HASTE_SELF = 1 << 22;
        const SLOWNESS = 1 << 23;
        const GAIN_DEX = 1 << 25;
        const RESTORE_DEX = 1 << 26;
        const RESTORE_CON = 1 << 27;
        const CURE_BLINDNESS = 1 << 28;
        const CURE_CONFUSION = 1 << 29;
        const CURE_POISON = 1 << 30;
    }
}

bitflags! {
    /// Effects of the second potion family
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Potion2Flags: u32 {
        const LOSE_EXPERIENCE = 1 << 1;
        const SALT_WATER = 1 << 2;
        const INVULNERABILITY = 1 << 3;
        const HEROISM = 1 << 4;
        const SUPER_HEROISM = 1 << 5;
        const BOLDNESS = 1 << 6;
        const RESTORE_LIFE_LEVELS = 1 << 7;
        const RESIST_HEAT = 1 << 8;
        const RESIST_COLD = 1 << 9;
        const DETECT_INVISIBLE = 1 << 10;
        const SLOW_POISON = 1 << 11;
        const NEUTRALIZE_POISON = 1 << 12;
        const RESTORE_MANA = 1 << 13;
        const INFRA_VISION = 1 << 14;
    }
}

bitflags! {
    /// Effects of the first scroll family
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Scroll1Flags: u32 {
        const ENCHANT_TO_HIT = 1 << 0;
        const ENCHANT_TO_DAM = 1 << 1;
        const ENCHANT_ARMOR = 1 << 2;
        const IDENTIFY = 1 << 3;
        const REMOVE_CURSE = 1 << 4;
        const LIGHT = 1 << 5;
        const SUMMON_MONSTER = 1 << 6;
        const PHASE_DOOR = 1 << 7;
        const TELEPORT = 1 << 8;
        const TELEPORT_LEVEL = 1 << 9;
        const MONSTER_CONFUSION = 1 << 10;
        const MAGIC_MAPPING = 1 << 11;
        const SLEEP_MONSTER = 1 << 12;
        const RUNE_OF_PROTECTION = 1 << 13;
        const TREASURE_DETECTION = 1 << 14;
        const OBJECT_DETECTION = 1 << 15;
        const TRAP_DETECTION = 1 << 16;
        const DOOR_STAIR_LOCATION = 1 << 17;
        const MASS_GENOCIDE = 1 << 18;
        const DETECT_INVISIBLE = 1 << 19;
        const AGGRAVATE_MONSTER = 1 << 20;
        const TRAP_CREATION = 1 << 21;
        const TRAP_DOOR_DESTRUCTION = 1 << 22;
        const DOOR_CREATION = 1 << 23;
        const RECHARGING = 1 << 24;
        const GENOCIDE = 1 << 25;
        const DARKNESS = 1 << 26;
        const PROTECTION_FROM_EVIL = 1 << 27;
        const CREATE_FOOD = 1 << 28;
        const DISPEL_UNDEAD = 1 << 29;
    }
}

bitflags! {
    /// Effects of the second scroll family
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Scroll2Flags: u32 {
        const STAR_ENCHANT_WEAPON = 1 << 0;
        const CURSE_WEAPON = 1 << 1;
        const STAR_ENCHANT_ARMOR = 1 << 2;
        const CURSE_ARMOR = 1 << 3;
        const SUMMON_UNDEAD = 1 << 4;
        const BLESSING = 1 << 5;
        const HOLY_CHANT = 1 << 6;
        const HOLY_PRAYER = 1 << 7;
        const WORD_OF_RECALL = 1 << 8;
        const STAR_DESTRUCTION = 1 << 9;
    }
}

bitflags! {
    /// Effects of aiming a wand
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WandFlags: u32 {
        const LIGHT = 1 << 0;
        const LIGHTNING_BOLT = 1 << 1;
        const FROST_BOLT = 1 << 2;
        const FIRE_BOLT = 1 << 3;
        const STONE_TO_MUD = 1 << 4;
        const POLYMORPH = 1 << 5;
        const HEAL_MONSTER = 1 << 6;
        const HASTE_MONSTER = 1 << 7;
        const SLOW_MONSTER = 1 << 8;
        const CONFUSE_MONSTER = 1 << 9;
        const SLEEP_MONSTER = 1 << 10;
        const DRAIN_LIFE = 1 << 11;
        const TRAP_DOOR_DESTRUCTION = 1 << 12;
        const MAGIC_MISSILE = 1 << 13;
        const WALL_BUILDING = 1 << 14;
        const CLONE_MONSTER = 1 << 15;
        const TELEPORT_AWAY = 1 << 16;
        const DISARMING = 1 << 17;
        const LIGHTNING_BALL = 1 << 18;
        const COLD_BALL = 1 << 19;
        const FIRE_BALL = 1 << 20;
        const STINKING_CLOUD = 1 << 21;
        const ACID_BALL = 1 << 22;
        const WONDER = 1 << 23;
    }
}

bitflags! {
    /// Effects of using a staff
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StaffFlags: u32 {
        const LIGHT = 1 << 0;
        const DOOR_STAIR_LOCATION = 1 << 1;
        const TRAP_LOCATION = 1 << 2;
        const TREASURE_LOCATION = 1 << 3;
        const OBJECT_LOCATION = 1 << 4;
        const TELEPORTATION = 1 << 5;
        const EARTHQUAKES = 1 << 6;
        const SUMMONING = 1 << 7;
        const DESTRUCTION = 1 << 9;
        const STARLIGHT = 1 << 10;
        const HASTE_MONSTERS = 1 << 11;
        const SLOW_MONSTERS = 1 << 12;
        const SLEEP_MONSTERS = 1 << 13;
        const CURE_LIGHT_WOUNDS = 1 << 14;
        const DETECT_INVISIBLE = 1 << 15;
        const SPEED = 1 << 16;
        const SLOWNESS = 1 << 17;
        const MASS_POLYMORPH = 1 << 18;
        const REMOVE_CURSE = 1 << 19;
        const DETECT_EVIL = 1 << 20;
        const CURING = 1 << 21;
        const DISPEL_EVIL = 1 << 22;
        const DARKNESS = 1 << 24;
    }
}

bitflags! {
    /// Chest locks, traps and contents
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ChestFlags: u32 {
        const LOCKED = 0x0000_0001;
        const LOSE_STR = 0x0000_0010;
        const POISON = 0x0000_0020;
        const PARALYSED = 0x0000_0040;
        const EXPLODE = 0x0000_0080;
        const SUMMON = 0x0000_0100;
        const CARRY_OBJ = 0x0080_0000;
        const CARRY_GOLD = 0x0100_0000;
        const RANDOM_60 = 0x0400_0000;
        const RANDOM_90 = 0x0800_0000;
        const ITEMS_1D2 = 0x1000_0000;
        const ITEMS_2D2 = 0x2000_0000;
        const ITEMS_4D2 = 0x4000_0000;

        /// Any trap
        const TRAPPED = Self::LOSE_STR.bits() | Self::POISON.bits()
            | Self::PARALYSED.bits() | Self::EXPLODE.bits() | Self::SUMMON.bits();
    }
}

// Flag sets serialize as their raw bits, unknown bits included.
macro_rules! bits_serde {
    ($($flags:ty),* $(,)?) => {$(
        impl Serialize for $flags {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                self.bits().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $flags {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let bits = u32::deserialize(deserializer)?;
                Ok(<$flags>::from_bits_retain(bits))
            }
        }
    )*};
}

bits_serde!(
    WearFlags,
    FoodFlags,
    Potion1Flags,
    Potion2Flags,
    Scroll1Flags,
    Scroll2Flags,
    WandFlags,
    StaffFlags,
    ChestFlags,
);

/// Spells contained in a book, one bit per spell index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SpellSet(pub u32);

impl SpellSet {
    pub const fn contains(self, spell: u8) -> bool {
        spell < 32 && self.0 & (1 << spell) != 0
    }

    /// Spell indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (0..32u8).filter(move |&spell| self.contains(spell))
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

/// A template's ability word, decoded according to its category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effects {
    Wear(WearFlags),
    Food(FoodFlags),
    Potion1(Potion1Flags),
    Potion2(Potion2Flags),
    Scroll1(Scroll1Flags),
    Scroll2(Scroll2Flags),
    Wand(WandFlags),
    Staff(StaffFlags),
    Chest(ChestFlags),
    Spells(SpellSet),
    /// Categories whose word carries no meaning; the bits are kept as-is
    Inert(u32),
}

impl Effects {
    /// Decode a raw ability word for an item of `category`.
    pub const fn decode(category: ItemCategory, bits: u32) -> Self {
        match category {
            ItemCategory::Food => Effects::Food(FoodFlags::from_bits_retain(bits)),
            ItemCategory::Potion1 => Effects::Potion1(Potion1Flags::from_bits_retain(bits)),
            ItemCategory::Potion2 => Effects::Potion2(Potion2Flags::from_bits_retain(bits)),
            ItemCategory::Scroll1 => Effects::Scroll1(Scroll1Flags::from_bits_retain(bits)),
            ItemCategory::Scroll2 => Effects::Scroll2(Scroll2Flags::from_bits_retain(bits)),
            ItemCategory::Wand => Effects::Wand(WandFlags::from_bits_retain(bits)),
            ItemCategory::Staff => Effects::Staff(StaffFlags::from_bits_retain(bits)),
            ItemCategory::Chest => Effects::Chest(ChestFlags::from_bits_retain(bits)),
            ItemCategory::MagicBook | ItemCategory::PrayerBook => Effects::Spells(SpellSet(bits)),
            ItemCategory::Flask => Effects::Wear(WearFlags::from_bits_retain(bits)),
            other if other.is_wearable() => Effects::Wear(WearFlags::from_bits_retain(bits)),
            _ => Effects::Inert(bits),
        }
    }

    /// Raw ability word, unknown bits included
    pub const fn bits(self) -> u32 {
        match self {
            Effects::Wear(flags) => flags.bits(),
            Effects::Food(flags) => flags.bits(),
            Effects::Potion1(flags) => flags.bits(),
            Effects::Potion2(flags) => flags.bits(),
            Effects::Scroll1(flags) => flags.bits(),
            Effects::Scroll2(flags) => flags.bits(),
            Effects::Wand(flags) => flags.bits(),
            Effects::Staff(flags) => flags.bits(),
            Effects::Chest(flags) => flags.bits(),
            Effects::Spells(spells) => spells.0,
            Effects::Inert(bits) => bits,
        }
    }

    /// Worn abilities, if this is a wearable's effect set
    pub const fn wear(self) -> Option<WearFlags> {
        match self {
            Effects::Wear(flags) => Some(flags),
            _ => None,
        }
    }

    /// The item carries a curse
    pub const fn is_cursed(self) -> bool {
        match self {
            Effects::Wear(flags) => flags.contains(WearFlags::CURSED),
            _ => false,
        }
    }
}
