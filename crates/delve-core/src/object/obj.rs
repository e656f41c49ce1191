//! Item instances
//!
//! An instance is a concrete occurrence of a template: a stack on the
//! floor, in a pack or in a shop. It refers to its template by id and owns
//! everything rolled for it at creation.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::{Effects, ItemCategory, ObjectTemplate, SpecialName, SpecialNames, TemplateId, WearFlags};

/// Unique identifier for item instances
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(pub u32);

impl ItemId {
    pub const NONE: ItemId = ItemId(0);

    pub fn next(self) -> Self {
        ItemId(self.0.wrapping_add(1))
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "item {}", self.0)
    }
}

bitflags! {
    /// What the player knows about one instance
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct IdentFlags: u16 {
        /// Sensed to be magical
        const MAGIK = 0x0001;
        /// Sensed or known to be cursed
        const DAMNED = 0x0002;
        /// Known to have no charges left
        const EMPTY = 0x0004;
        /// Fully identified
        const KNOWN = 0x0008;
        /// Bought from a shop, so fully known
        const STORE_BOUGHT = 0x0010;
        /// Show to-hit and to-damage even when both are zero
        const SHOW_HIT_DAM = 0x0020;
        /// Never show the pluses value
        const NO_SHOW_P1 = 0x0040;
        /// Always show the pluses value
        const SHOW_P1 = 0x0080;
        /// Carries a player inscription
        const INSCRIBED = 0x0100;
        /// Used at least once without learning what it does
        const TRIED = 0x0200;
    }
}

impl Serialize for IdentFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IdentFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u16::deserialize(deserializer)?;
        Ok(IdentFlags::from_bits_truncate(bits))
    }
}

/// Everything rolled for an instance at creation.
///
/// Two stacks of the same template merge only if these are equal in the
/// grouped and exact-match bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ComputedBonuses {
    /// Charges, fuel, pluses or food value
    pub misc_use: i32,
    pub to_hit: i16,
    pub to_damage: i16,
    pub to_ac: i16,
    /// Template abilities plus any granted by an ego
    pub abilities: u32,
    pub specials: SpecialNames,
}

impl ComputedBonuses {
    /// Unrolled values copied from a template
    pub fn from_template(template: &ObjectTemplate) -> Self {
        Self {
            misc_use: template.def.misc_use,
            to_hit: template.def.to_hit,
            to_damage: template.def.to_damage,
            to_ac: template.def.to_ac,
            abilities: template.def.flags,
            specials: SpecialNames::empty(),
        }
    }
}

/// Item instance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemInstance {
    /// Unique identifier
    pub id: ItemId,

    /// Weight of one item; egos such as "of Great Mass" change it
    pub weight: u16,

    /// Value of one item
    pub cost: i32,

    pub(crate) template: TemplateId,
    pub(crate) category: ItemCategory,
    pub(crate) stack_code: u8,
    pub(crate) quantity: u16,
    pub(crate) ident: IdentFlags,
    pub(crate) discovered: u32,
    pub(crate) inscription: Option<String>,
    pub(crate) bonuses: ComputedBonuses,
}

impl ItemInstance {
    /// A plain copy of `template` with nothing rolled.
    ///
    /// Quantity is the template's group size, at least one.
    pub fn new(id: ItemId, template: &ObjectTemplate) -> Self {
        Self {
            id,
            weight: template.def.weight,
            cost: template.def.cost,
            template: template.id,
            category: template.def.category,
            stack_code: template.def.stack_code,
            quantity: u16::from(template.def.group_size.max(1)),
            ident: IdentFlags::empty(),
            discovered: 0,
            inscription: None,
            bonuses: ComputedBonuses::from_template(template),
        }
    }

    pub fn template(&self) -> TemplateId {
        self.template
    }

    /// Category, cached from the template
    pub fn category(&self) -> ItemCategory {
        self.category
    }

    /// Stack code, cached from the template
    pub fn stack_code(&self) -> u8 {
        self.stack_code
    }

    pub fn quantity(&self) -> u16 {
        self.quantity
    }

    pub fn ident(&self) -> IdentFlags {
        self.ident
    }

    pub fn bonuses(&self) -> &ComputedBonuses {
        &self.bonuses
    }

    pub fn inscription(&self) -> Option<&str> {
        self.inscription.as_deref()
    }

    /// Ability bits the player has learned; always a subset of [`Self::abilities`]
    pub fn discovered(&self) -> u32 {
        self.discovered
    }

    /// Ability bits this instance carries
    pub fn abilities(&self) -> u32 {
        self.bonuses.abilities
    }

    pub fn specials(&self) -> SpecialNames {
        self.bonuses.specials
    }

    pub fn effects(&self) -> Effects {
        Effects::decode(self.category, self.bonuses.abilities)
    }

    pub fn is_known(&self) -> bool {
        self.ident.contains(IdentFlags::KNOWN)
    }

    pub fn is_cursed(&self) -> bool {
        self.effects().is_cursed()
    }

    /// Carries rolled bonuses or an ego
    pub fn is_magical(&self) -> bool {
        let b = &self.bonuses;
        b.to_hit > 0 || b.to_damage > 0 || b.to_ac > 0 || !b.specials.is_empty()
    }

    /// Total weight of the stack
    pub fn total_weight(&self) -> u32 {
        u32::from(self.weight) * u32::from(self.quantity)
    }

    /// Replace the inscription. Empty text removes it.
    pub fn set_inscription(&mut self, text: &str) {
        if text.is_empty() {
            self.inscription = None;
            self.ident.remove(IdentFlags::INSCRIBED);
        } else {
            self.inscription = Some(text.to_string());
            self.ident.insert(IdentFlags::INSCRIBED);
        }
    }

    /// Add identification flags
    pub fn add_ident(&mut self, flags: IdentFlags) {
        self.ident.insert(flags);
    }

    /// Learn the ability bits in `bits` that this instance carries.
    ///
    /// Bits the instance does not carry are ignored, keeping the discovered
    /// set a subset of the carried one. Returns whether anything was learned.
    pub fn reveal_ability(&mut self, bits: u32) -> bool {
        let carried = bits & self.bonuses.abilities;
        if carried != bits {
            tracing::warn!(
                item = %self.id,
                bits = format_args!("{:#x}", bits & !carried),
                "revealing abilities the item does not carry"
            );
        }
        let before = self.discovered;
        self.discovered |= carried;
        self.discovered != before
    }

    /// Fully identify the instance.
    pub fn identify(&mut self) {
        self.ident.insert(IdentFlags::KNOWN | IdentFlags::SHOW_HIT_DAM);
        self.ident.remove(IdentFlags::MAGIK | IdentFlags::TRIED);
        if self.is_cursed() {
            self.ident.insert(IdentFlags::DAMNED);
        }
        self.discovered = self.bonuses.abilities;
        tracing::debug!(item = %self.id, template = %self.template, "identified");
    }

    /// Sense whether the instance is magical or cursed without identifying it.
    ///
    /// Returns whether anything was sensed.
    pub fn sense_magic(&mut self) -> bool {
        if self.is_known() {
            return false;
        }
        if self.is_cursed() {
            self.ident.insert(IdentFlags::DAMNED);
            true
        } else if self.is_magical() {
            self.ident.insert(IdentFlags::MAGIK);
            true
        } else {
            false
        }
    }

    /// Used without learning what it does
    pub fn mark_tried(&mut self) {
        if !self.is_known() {
            self.ident.insert(IdentFlags::TRIED);
        }
    }

    /// Known to be out of charges
    pub fn mark_empty(&mut self) {
        self.ident.insert(IdentFlags::EMPTY);
    }

    /// Shop stock is always fully identified
    pub fn mark_store_bought(&mut self) {
        self.ident.insert(IdentFlags::STORE_BOUGHT);
        self.identify();
    }

    /// Whether the ego `name` is visible: full identification shows every
    /// fragment, partial identification only those whose abilities are known.
    pub fn special_visible(&self, name: SpecialName) -> bool {
        if !self.bonuses.specials.has(name) {
            return false;
        }
        if self.is_known() {
            return true;
        }
        let mask = name.revealed_by().bits();
        mask != 0 && self.discovered & mask != 0
    }

    /// Stat pluses that should be shown for this instance
    pub(crate) fn shows_pluses(&self) -> bool {
        if self.ident.contains(IdentFlags::NO_SHOW_P1) {
            return false;
        }
        if self.ident.contains(IdentFlags::SHOW_P1) {
            return true;
        }
        // Only worn abilities use the pluses; other categories reuse these bits.
        let Some(worn) = self.effects().wear() else {
            return false;
        };
        let stats = WearFlags::STATS
            | WearFlags::SEARCH
            | WearFlags::STEALTH
            | WearFlags::SPEED
            | WearFlags::INFRA
            | WearFlags::TUNNEL;
        self.bonuses.misc_use != 0 && worn.intersects(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dice, ObjectDef};

    fn template(category: ItemCategory, flags: u32) -> ObjectTemplate {
        ObjectTemplate {
            id: TemplateId(3),
            def: ObjectDef {
                name: "& Test Item~",
                flags,
                category,
                stack_code: 1,
                group_size: 1,
                weight: 30,
                damage: Dice::new(1, 4),
                ..ObjectDef::NOTHING
            },
        }
    }

    #[test]
    fn test_item_id_next() {
        assert_eq!(ItemId(4).next(), ItemId(5));
        assert_eq!(ItemId(4).to_string(), "item 4");
    }

    #[test]
    fn test_new_copies_template() {
        let t = template(ItemCategory::Ring, WearFlags::SPEED.bits());
        let item = ItemInstance::new(ItemId(1), &t);
        assert_eq!(item.template(), TemplateId(3));
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.abilities(), WearFlags::SPEED.bits());
        assert_eq!(item.discovered(), 0);
        assert_eq!(item.total_weight(), 30);
    }

    #[test]
    fn test_zero_group_size_still_one_item() {
        let t = ObjectTemplate {
            id: TemplateId(0),
            def: ObjectDef::NOTHING,
        };
        assert_eq!(ItemInstance::new(ItemId(1), &t).quantity(), 1);
    }

    #[test]
    fn test_set_inscription_is_idempotent() {
        let mut item = ItemInstance::new(ItemId(1), &template(ItemCategory::Sword, 0));
        item.set_inscription("keep");
        let once = item.clone();
        item.set_inscription("keep");
        assert_eq!(item, once);
        assert!(item.ident().contains(IdentFlags::INSCRIBED));

        item.set_inscription("");
        assert_eq!(item.inscription(), None);
        assert!(!item.ident().contains(IdentFlags::INSCRIBED));
    }

    #[test]
    fn test_reveal_ability_only_carried_bits() {
        let flags = (WearFlags::RES_FIRE | WearFlags::SEE_INVIS).bits();
        let mut item = ItemInstance::new(ItemId(1), &template(ItemCategory::Helm, flags));

        assert!(item.reveal_ability(WearFlags::RES_FIRE.bits()));
        assert!(!item.reveal_ability(WearFlags::RES_FIRE.bits()));
        assert_eq!(item.discovered(), WearFlags::RES_FIRE.bits());

        assert!(!item.reveal_ability(WearFlags::SPEED.bits()));
        assert_eq!(item.discovered() & !item.abilities(), 0);
    }

    #[test]
    fn test_identify_discovers_everything() {
        let flags = (WearFlags::TELEPORT | WearFlags::CURSED).bits();
        let mut item = ItemInstance::new(ItemId(1), &template(ItemCategory::Ring, flags));
        item.mark_tried();
        item.identify();
        assert!(item.is_known());
        assert_eq!(item.discovered(), flags);
        assert!(item.ident().contains(IdentFlags::DAMNED));
        assert!(!item.ident().contains(IdentFlags::TRIED));
    }

    #[test]
    fn test_sense_magic() {
        let mut plain = ItemInstance::new(ItemId(1), &template(ItemCategory::Sword, 0));
        assert!(!plain.sense_magic());

        let mut enchanted = plain.clone();
        enchanted.bonuses.to_hit = 3;
        assert!(enchanted.sense_magic());
        assert!(enchanted.ident().contains(IdentFlags::MAGIK));

        plain.bonuses.abilities = WearFlags::CURSED.bits();
        assert!(plain.sense_magic());
        assert!(plain.ident().contains(IdentFlags::DAMNED));
    }

    #[test]
    fn test_special_visibility() {
        let mut item = ItemInstance::new(
            ItemId(1),
            &template(ItemCategory::SoftArmor, WearFlags::RES_FIRE.bits()),
        );
        item.bonuses.specials.add(SpecialName::ResistFire);
        assert!(!item.special_visible(SpecialName::ResistFire));
        item.reveal_ability(WearFlags::RES_FIRE.bits());
        assert!(item.special_visible(SpecialName::ResistFire));

        item.bonuses.specials.add(SpecialName::GreatMass);
        assert!(!item.special_visible(SpecialName::GreatMass));
        item.identify();
        assert!(item.special_visible(SpecialName::GreatMass));
    }

    #[test]
    fn test_pluses_only_for_worn_stats() {
        // Bit 0 is STR on a ring but an ordinary effect on a wand.
        let stat = WearFlags::STR.bits();
        let mut ring = ItemInstance::new(ItemId(1), &template(ItemCategory::Ring, stat));
        ring.bonuses.misc_use = 2;
        assert!(ring.shows_pluses());

        let mut wand = ItemInstance::new(ItemId(2), &template(ItemCategory::Wand, stat));
        wand.bonuses.misc_use = 7;
        assert!(!wand.shows_pluses());

        wand.add_ident(IdentFlags::SHOW_P1);
        assert!(wand.shows_pluses());

        ring.add_ident(IdentFlags::NO_SHOW_P1);
        assert!(!ring.shows_pluses());
    }
}
