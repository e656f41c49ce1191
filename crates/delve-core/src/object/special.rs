//! Special-name fragments
//!
//! Egos, curses and chest states are shown as short fragments after the
//! base name, e.g. "(RF)" or "of Slay Evil". Index 0 is the empty fragment.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use super::{ChestFlags, WearFlags};

/// Special-name table entry
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
    EnumIter,
    EnumCount,
)]
#[repr(u8)]
pub enum SpecialName {
    #[default]
    None = 0,
    Resist = 1,
    ResistAcid = 2,
    ResistFire = 3,
    ResistCold = 4,
    ResistLight = 5,
    HolyAvenger = 6,
    Defender = 7,
    SlayAnimalShort = 8,
    SlayDragonShort = 9,
    SlayEvilShort = 10,
    SlayUndeadShort = 11,
    FlameTongue = 12,
    FrostBrand = 13,
    FreeAction = 14,
    Slaying = 15,
    Clumsiness = 16,
    Weakness = 17,
    SlowDescent = 18,
    Speed = 19,
    Stealth = 20,
    Slowness = 21,
    Noise = 22,
    GreatMass = 23,
    Intelligence = 24,
    Wisdom = 25,
    InfraVision = 26,
    Might = 27,
    Lordliness = 28,
    Magi = 29,
    Beauty = 30,
    Seeing = 31,
    Regeneration = 32,
    Stupidity = 33,
    Dullness = 34,
    Blindness = 35,
    Timidness = 36,
    Teleportation = 37,
    Ugliness = 38,
    Protection = 39,
    Irritation = 40,
    Vulnerability = 41,
    Enveloping = 42,
    Fire = 43,
    SlayEvil = 44,
    DragonSlaying = 45,
    Empty = 46,
    Locked = 47,
    PoisonNeedle = 48,
    GasTrap = 49,
    ExplosionDevice = 50,
    SummoningRunes = 51,
    MultipleTraps = 52,
    Disarmed = 53,
    Unlocked = 54,
    SlayAnimal = 55,
}

/// Which discovered ability bits make a fragment visible before full
/// identification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMask {
    /// Only full identification shows it
    Identified,
    Wear(WearFlags),
    Chest(ChestFlags),
}

impl RevealMask {
    pub const fn bits(self) -> u32 {
        match self {
            RevealMask::Identified => 0,
            RevealMask::Wear(flags) => flags.bits(),
            RevealMask::Chest(flags) => flags.bits(),
        }
    }
}

impl SpecialName {
    /// Display order when an item carries several fragments.
    ///
    /// Resistances and weapon egos come first, then "of ..." qualities,
    /// then chest states. This order is part of the naming contract.
    pub const CANONICAL_ORDER: [SpecialName; 55] = [
        SpecialName::Resist,
        SpecialName::ResistAcid,
        SpecialName::ResistFire,
        SpecialName::ResistCold,
        SpecialName::ResistLight,
        SpecialName::HolyAvenger,
        SpecialName::Defender,
        SpecialName::SlayAnimalShort,
        SpecialName::SlayDragonShort,
        SpecialName::SlayEvilShort,
        SpecialName::SlayUndeadShort,
        SpecialName::FlameTongue,
        SpecialName::FrostBrand,
        SpecialName::FreeAction,
        SpecialName::Slaying,
        SpecialName::Clumsiness,
        SpecialName::Weakness,
        SpecialName::SlowDescent,
        SpecialName::Speed,
        SpecialName::Stealth,
        SpecialName::Slowness,
        SpecialName::Noise,
        SpecialName::GreatMass,
        SpecialName::Intelligence,
        SpecialName::Wisdom,
        SpecialName::InfraVision,
        SpecialName::Might,
        SpecialName::Lordliness,
        SpecialName::Magi,
        SpecialName::Beauty,
        SpecialName::Seeing,
        SpecialName::Regeneration,
        SpecialName::Stupidity,
        SpecialName::Dullness,
        SpecialName::Blindness,
        SpecialName::Timidness,
        SpecialName::Teleportation,
        SpecialName::Ugliness,
        SpecialName::Protection,
        SpecialName::Irritation,
        SpecialName::Vulnerability,
        SpecialName::Enveloping,
        SpecialName::Fire,
        SpecialName::SlayEvil,
        SpecialName::DragonSlaying,
        SpecialName::SlayAnimal,
        SpecialName::Empty,
        SpecialName::Locked,
        SpecialName::PoisonNeedle,
        SpecialName::GasTrap,
        SpecialName::ExplosionDevice,
        SpecialName::SummoningRunes,
        SpecialName::MultipleTraps,
        SpecialName::Disarmed,
        SpecialName::Unlocked,
    ];

    /// Table index
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        SpecialName::iter().nth(index)
    }

    /// Display fragment
    pub const fn fragment(self) -> &'static str {
        match self {
            SpecialName::None => "",
            SpecialName::Resist => "(R)",
            SpecialName::ResistAcid => "(RA)",
            SpecialName::ResistFire => "(RF)",
            SpecialName::ResistCold => "(RC)",
            SpecialName::ResistLight => "(RL)",
            SpecialName::HolyAvenger => "(HA)",
            SpecialName::Defender => "(DF)",
            SpecialName::SlayAnimalShort => "(SA)",
            SpecialName::SlayDragonShort => "(SD)",
            SpecialName::SlayEvilShort => "(SE)",
            SpecialName::SlayUndeadShort => "(SU)",
            SpecialName::FlameTongue => "(FT)",
            SpecialName::FrostBrand => "(FB)",
            SpecialName::FreeAction => "of Free Action",
            SpecialName::Slaying => "of Slaying",
            SpecialName::Clumsiness => "of Clumsiness",
            SpecialName::Weakness => "of Weakness",
            SpecialName::SlowDescent => "of Slow Descent",
            SpecialName::Speed => "of Speed",
            SpecialName::Stealth => "of Stealth",
            SpecialName::Slowness => "of Slowness",
            SpecialName::Noise => "of Noise",
            SpecialName::GreatMass => "of Great Mass",
            SpecialName::Intelligence => "of Intelligence",
            SpecialName::Wisdom => "of Wisdom",
            SpecialName::InfraVision => "of Infra-Vision",
            SpecialName::Might => "of Might",
            SpecialName::Lordliness => "of Lordliness",
            SpecialName::Magi => "of the Magi",
            SpecialName::Beauty => "of Beauty",
            SpecialName::Seeing => "of Seeing",
            SpecialName::Regeneration => "of Regeneration",
            SpecialName::Stupidity => "of Stupidity",
            SpecialName::Dullness => "of Dullness",
            SpecialName::Blindness => "of Blindness",
            SpecialName::Timidness => "of Timidness",
            SpecialName::Teleportation => "of Teleportation",
            SpecialName::Ugliness => "of Ugliness",
            SpecialName::Protection => "of Protection",
            SpecialName::Irritation => "of Irritation",
            SpecialName::Vulnerability => "of Vulnerability",
            SpecialName::Enveloping => "of Enveloping",
            SpecialName::Fire => "of Fire",
            SpecialName::SlayEvil => "of Slay Evil",
            SpecialName::DragonSlaying => "of Dragon Slaying",
            SpecialName::Empty => "(Empty)",
            SpecialName::Locked => "(Locked)",
            SpecialName::PoisonNeedle => "(Poison Needle)",
            SpecialName::GasTrap => "(Gas Trap)",
            SpecialName::ExplosionDevice => "(Explosion Device)",
            SpecialName::SummoningRunes => "(Summoning Runes)",
            SpecialName::MultipleTraps => "(Multiple Traps)",
            SpecialName::Disarmed => "(Disarmed)",
            SpecialName::Unlocked => "(Unlocked)",
            SpecialName::SlayAnimal => "of Slay Animal",
        }
    }

    /// Ability bits that expose this fragment once discovered
    pub const fn revealed_by(self) -> RevealMask {
        use RevealMask::{Chest, Identified, Wear};
        match self {
            SpecialName::Resist => Wear(
                WearFlags::RES_ACID
                    .union(WearFlags::RES_FIRE)
                    .union(WearFlags::RES_COLD)
                    .union(WearFlags::RES_LIGHT),
            ),
            SpecialName::ResistAcid => Wear(WearFlags::RES_ACID),
            SpecialName::ResistFire => Wear(WearFlags::RES_FIRE),
            SpecialName::ResistCold => Wear(WearFlags::RES_COLD),
            SpecialName::ResistLight => Wear(WearFlags::RES_LIGHT),
            SpecialName::HolyAvenger => Wear(WearFlags::SLAY_EVIL.union(WearFlags::SLAY_UNDEAD)),
            SpecialName::Defender => Wear(WearFlags::FREE_ACT.union(WearFlags::FFALL)),
            SpecialName::SlayAnimalShort | SpecialName::SlayAnimal => {
                Wear(WearFlags::SLAY_ANIMAL)
            }
            SpecialName::SlayDragonShort | SpecialName::DragonSlaying => {
                Wear(WearFlags::SLAY_DRAGON)
            }
            SpecialName::SlayEvilShort | SpecialName::SlayEvil => Wear(WearFlags::SLAY_EVIL),
            SpecialName::SlayUndeadShort => Wear(WearFlags::SLAY_UNDEAD),
            SpecialName::FlameTongue | SpecialName::Fire => Wear(WearFlags::FLAME_TONGUE),
            SpecialName::FrostBrand => Wear(WearFlags::FROST_BRAND),
            SpecialName::FreeAction => Wear(WearFlags::FREE_ACT),
            SpecialName::Clumsiness => Wear(WearFlags::DEX),
            SpecialName::Weakness | SpecialName::Might => Wear(WearFlags::STR),
            SpecialName::SlowDescent => Wear(WearFlags::FFALL),
            SpecialName::Speed | SpecialName::Slowness => Wear(WearFlags::SPEED),
            SpecialName::Stealth => Wear(WearFlags::STEALTH),
            SpecialName::Noise | SpecialName::Irritation => Wear(WearFlags::AGGRAVATE),
            SpecialName::Intelligence | SpecialName::Stupidity | SpecialName::Magi => {
                Wear(WearFlags::INT)
            }
            SpecialName::Wisdom | SpecialName::Dullness => Wear(WearFlags::WIS),
            SpecialName::Lordliness => Wear(WearFlags::WIS.union(WearFlags::CHR)),
            SpecialName::Beauty | SpecialName::Ugliness => Wear(WearFlags::CHR),
            SpecialName::InfraVision => Wear(WearFlags::INFRA),
            SpecialName::Seeing => Wear(WearFlags::SEE_INVIS),
            SpecialName::Regeneration => Wear(WearFlags::REGEN),
            SpecialName::Blindness => Wear(WearFlags::BLIND),
            SpecialName::Timidness => Wear(WearFlags::TIMID),
            SpecialName::Teleportation => Wear(WearFlags::TELEPORT),
            SpecialName::Locked => Chest(ChestFlags::LOCKED),
            SpecialName::PoisonNeedle => Chest(ChestFlags::LOSE_STR.union(ChestFlags::POISON)),
            SpecialName::GasTrap => Chest(ChestFlags::PARALYSED),
            SpecialName::ExplosionDevice => Chest(ChestFlags::EXPLODE),
            SpecialName::SummoningRunes => Chest(ChestFlags::SUMMON),
            SpecialName::MultipleTraps => Chest(ChestFlags::TRAPPED),
            SpecialName::None
            | SpecialName::Slaying
            | SpecialName::GreatMass
            | SpecialName::Protection
            | SpecialName::Vulnerability
            | SpecialName::Enveloping
            | SpecialName::Empty
            | SpecialName::Disarmed
            | SpecialName::Unlocked => Identified,
        }
    }

    const fn bit(self) -> u64 {
        1u64 << (self as u8)
    }
}

bitflags! {
    /// Set of special names carried by one item
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SpecialNames: u64 {
        const _ = !0;
    }
}

impl SpecialNames {
    pub const fn of(name: SpecialName) -> Self {
        Self::from_bits_retain(name.bit())
    }

    pub const fn has(self, name: SpecialName) -> bool {
        self.bits() & name.bit() != 0
    }

    pub fn add(&mut self, name: SpecialName) {
        if name != SpecialName::None {
            *self |= Self::of(name);
        }
    }

    /// Members in canonical display order
    pub fn in_display_order(self) -> impl Iterator<Item = SpecialName> {
        SpecialName::CANONICAL_ORDER
            .into_iter()
            .filter(move |&name| self.has(name))
    }
}

impl Serialize for SpecialNames {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SpecialNames {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u64::deserialize(deserializer)?;
        Ok(SpecialNames::from_bits_retain(bits))
    }
}
