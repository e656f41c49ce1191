//! Item creation, merging and splitting
//!
//! Creation copies a template and rolls its variable fields: ammunition
//! counts, light fuel and wand charges always; enchantments, egos, curses
//! and chest traps only when the item is generated at a dungeon depth.

use super::{
    ChestFlags, IdentFlags, ItemCategory, ItemId, ItemInstance, MAX_STACK, ObjectRegistry,
    SpecialName, TemplateId, WearFlags, can_stack,
};
use crate::config::MagicRules;
use crate::error::ItemError;
use crate::rng::GameRng;
use crate::sampler::randnor;

/// Item creation context
#[derive(Debug, Clone)]
pub struct MkItemContext {
    next_id: ItemId,
    depth: Option<u8>,
    rules: MagicRules,
}

impl MkItemContext {
    /// Context for mundane items: shop stock, starting kit, rewards
    pub fn new() -> Self {
        Self {
            next_id: ItemId(1),
            depth: None,
            rules: MagicRules::default(),
        }
    }

    /// Context for items generated on dungeon level `depth`
    pub fn at_depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            ..Self::new()
        }
    }

    pub fn with_rules(mut self, rules: MagicRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn set_depth(&mut self, depth: Option<u8>) {
        self.depth = depth;
    }

    pub fn depth(&self) -> Option<u8> {
        self.depth
    }

    pub fn rules(&self) -> &MagicRules {
        &self.rules
    }

    /// Get next unique item ID
    pub fn next_id(&mut self) -> ItemId {
        let id = self.next_id;
        self.next_id = self.next_id.next();
        if self.next_id == ItemId::NONE {
            self.next_id = ItemId(1); // Skip 0
        }
        id
    }
}

impl Default for MkItemContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Enchantment bonus for an item found at `depth`.
///
/// The spread grows with depth up to `max_std`; the result is never below
/// `base`.
pub fn enchantment_bonus(
    rng: &mut GameRng,
    base: i32,
    max_std: i32,
    depth: u8,
    rules: &MagicRules,
) -> i32 {
    let std_dev = rules.bonus_std(depth, max_std);
    let bonus = randnor(rng, 0, std_dev).abs() / 10 + base;
    bonus.max(base)
}

/// Create an instance of `template`.
///
/// `quantity` replaces the rolled or template quantity.
pub fn create_item(
    ctx: &mut MkItemContext,
    registry: &ObjectRegistry,
    rng: &mut GameRng,
    template: TemplateId,
    quantity: Option<u16>,
) -> Result<ItemInstance, ItemError> {
    let def = registry
        .lookup(template)
        .map_err(|_| ItemError::UnknownTemplate(template))?;

    match quantity {
        Some(0) => return Err(ItemError::ZeroQuantity),
        Some(n) if n > MAX_STACK => {
            return Err(ItemError::StackFull {
                total: u32::from(n),
            });
        }
        _ => {}
    }

    let mut item = ItemInstance::new(ctx.next_id(), def);
    roll_mundane(&mut item, rng);

    if let Some(depth) = ctx.depth {
        let mut enchanter = Enchanter::new(rng, depth, ctx.rules);
        enchanter.apply(&mut item);
    }

    if let Some(n) = quantity {
        item.quantity = n;
    }

    tracing::debug!(
        item = %item.id,
        template = %template,
        quantity = item.quantity,
        depth = ?ctx.depth,
        "created item"
    );
    Ok(item)
}

// (sides, base) per stack code: charges are base + 1d(sides).
const WAND_CHARGES: [(u32, i32); 24] = [
    (10, 6),  // light
    (8, 6),   // lightning bolts
    (5, 6),   // frost bolts
    (8, 6),   // fire bolts
    (4, 4),   // stone to mud
    (8, 6),   // polymorph
    (20, 12), // heal monster
    (20, 12), // haste monster
    (10, 12), // slow monster
    (10, 12), // confuse monster
    (10, 12), // sleep monster
    (5, 3),   // drain life
    (5, 6),   // trap/door destruction
    (15, 6),  // magic missile
    (4, 5),   // wall building
    (10, 10), // clone monster
    (5, 4),   // teleport away
    (10, 4),  // disarming
    (8, 4),   // lightning balls
    (5, 2),   // cold balls
    (5, 2),   // fire balls
    (8, 5),   // stinking cloud
    (5, 2),   // acid balls
    (10, 12), // wonder
];

const STAFF_CHARGES: [(u32, i32); 23] = [
    (20, 12), // light
    (10, 6),  // door/stair location
    (15, 6),  // trap location
    (20, 12), // treasure location
    (15, 6),  // object location
    (5, 6),   // teleportation
    (5, 6),   // earthquakes
    (10, 6),  // summoning
    (3, 4),   // destruction
    (5, 6),   // starlight
    (10, 12), // haste monsters
    (10, 6),  // slow monsters
    (10, 6),  // sleep monsters
    (5, 6),   // cure light wounds
    (5, 6),   // detect invisible
    (5, 6),   // speed
    (5, 6),   // slowness
    (5, 6),   // mass polymorph
    (3, 4),   // remove curse
    (10, 12), // detect evil
    (3, 4),   // curing
    (5, 6),   // dispel evil
    (30, 12), // darkness
];

/// Rolls made for every new item, magical or not.
fn roll_mundane(item: &mut ItemInstance, rng: &mut GameRng) {
    match item.category {
        c if c.is_missile() || c == ItemCategory::Spike => {
            item.quantity = rng.dice(7, 6) as u16;
        }
        // Odd codes are dungeon lights with partly burnt fuel.
        ItemCategory::Light if item.stack_code % 2 == 1 => {
            let fuel = u32::try_from(item.bonuses.misc_use).unwrap_or(0);
            item.bonuses.misc_use = rng.rnd(fuel) as i32;
        }
        ItemCategory::Wand => roll_charges(item, rng, &WAND_CHARGES),
        ItemCategory::Staff => roll_charges(item, rng, &STAFF_CHARGES),
        _ => {}
    }
}

fn roll_charges(item: &mut ItemInstance, rng: &mut GameRng, table: &[(u32, i32)]) {
    if let Some(&(sides, base)) = table.get(usize::from(item.stack_code)) {
        item.bonuses.misc_use = rng.rnd(sides) as i32 + base;
    }
}

fn to_i16(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

/// Enchantment rolls for one item at one depth
struct Enchanter<'a> {
    rng: &'a mut GameRng,
    depth: u8,
    rules: MagicRules,
    magic: u32,
    special: u32,
    cursed: u32,
}

impl<'a> Enchanter<'a> {
    fn new(rng: &'a mut GameRng, depth: u8, rules: MagicRules) -> Self {
        Self {
            rng,
            depth,
            magic: rules.magic_chance(depth),
            special: rules.special_chance(depth),
            cursed: rules.cursed_chance(depth),
            rules,
        }
    }

    fn bonus(&mut self, base: i32, max_std: i32) -> i16 {
        to_i16(enchantment_bonus(
            self.rng,
            base,
            max_std,
            self.depth,
            &self.rules,
        ))
    }

    fn is_magic(&mut self) -> bool {
        self.rng.percent(self.magic)
    }

    fn is_special(&mut self) -> bool {
        self.rng.percent(self.special)
    }

    fn is_cursed(&mut self) -> bool {
        self.rng.percent(self.cursed)
    }

    fn rnd(&mut self, n: u32) -> i32 {
        self.rng.rnd(n) as i32
    }

    fn apply(&mut self, item: &mut ItemInstance) {
        match item.category {
            ItemCategory::Digging => self.digger(item),
            c if c.is_weapon() => self.weapon(item),
            ItemCategory::Bow => self.bow(item),
            c if c.is_missile() => self.missile(item),
            ItemCategory::HardArmor | ItemCategory::SoftArmor | ItemCategory::Shield => {
                self.body_armor(item)
            }
            ItemCategory::Gloves => self.gloves(item),
            ItemCategory::Boots => self.boots(item),
            ItemCategory::Helm => self.helm(item),
            ItemCategory::Cloak => self.cloak(item),
            ItemCategory::Ring => self.ring(item),
            ItemCategory::Amulet => self.amulet(item),
            ItemCategory::Chest => self.chest(item),
            _ => {}
        }
    }

    fn weapon(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_hit += self.bonus(0, 40);
            item.bonuses.to_damage += self.bonus(0, 40);
            if self.is_special() {
                self.weapon_ego(item);
            }
        } else if self.is_cursed() {
            item.bonuses.to_hit -= self.bonus(1, 55);
            item.bonuses.to_damage -= self.bonus(1, 55);
            curse(item);
        }
    }

    fn weapon_ego(&mut self, item: &mut ItemInstance) {
        let (flags, name, hit, dam, cost) = match self.rng.rnd(16) {
            1 => {
                item.bonuses.to_ac += self.rnd(4) as i16;
                item.bonuses.misc_use = self.rnd(4);
                item.cost += item.bonuses.misc_use * 500 + 10000;
                (
                    WearFlags::SEE_INVIS
                        | WearFlags::SUST_STAT
                        | WearFlags::SLAY_UNDEAD
                        | WearFlags::SLAY_EVIL
                        | WearFlags::STR,
                    SpecialName::HolyAvenger,
                    5,
                    5,
                    0,
                )
            }
            2 => {
                item.bonuses.to_ac += 5 + self.rnd(5) as i16;
                item.bonuses.misc_use = self.rnd(4);
                item.cost += item.bonuses.misc_use * 500 + 7500;
                (
                    WearFlags::FFALL
                        | WearFlags::RES_LIGHT
                        | WearFlags::SEE_INVIS
                        | WearFlags::FREE_ACT
                        | WearFlags::RES_COLD
                        | WearFlags::RES_ACID
                        | WearFlags::RES_FIRE
                        | WearFlags::REGEN
                        | WearFlags::STEALTH,
                    SpecialName::Defender,
                    3,
                    3,
                    0,
                )
            }
            3 | 4 => (WearFlags::FLAME_TONGUE, SpecialName::FlameTongue, 2, 3, 2000),
            5 | 6 => (WearFlags::FROST_BRAND, SpecialName::FrostBrand, 2, 2, 1200),
            7 | 8 => (WearFlags::SLAY_ANIMAL, SpecialName::SlayAnimalShort, 2, 2, 3000),
            9 | 10 => (WearFlags::SLAY_DRAGON, SpecialName::SlayDragonShort, 3, 3, 4000),
            11 | 12 => (WearFlags::SLAY_EVIL, SpecialName::SlayEvilShort, 3, 3, 4000),
            13 | 14 => (
                WearFlags::SLAY_UNDEAD | WearFlags::SEE_INVIS,
                SpecialName::SlayUndeadShort,
                2,
                2,
                3000,
            ),
            _ => return,
        };
        grant(item, flags, name);
        item.bonuses.to_hit += hit;
        item.bonuses.to_damage += dam;
        item.cost += cost;
    }

    fn bow(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_hit += self.bonus(1, 30);
            item.bonuses.to_damage += self.bonus(1, 20);
        } else if self.is_cursed() {
            item.bonuses.to_hit -= self.bonus(1, 50);
            item.bonuses.to_damage -= self.bonus(1, 30);
            curse(item);
        }
    }

    fn digger(&mut self, item: &mut ItemInstance) {
        if !self.is_magic() {
            return;
        }
        if self.rng.rnd(3) < 3 {
            item.bonuses.misc_use += i32::from(self.bonus(0, 25));
        } else {
            item.bonuses.misc_use = -i32::from(self.bonus(1, 30));
            curse(item);
        }
    }

    fn missile(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_hit += self.bonus(1, 35);
            item.bonuses.to_damage += self.bonus(1, 35);
            if !self.is_special() {
                return;
            }
            let (flags, name, hit, dam, cost) = match self.rng.rnd(10) {
                1..=3 => (WearFlags::empty(), SpecialName::Slaying, 5, 5, 20),
                4 | 5 => (WearFlags::FLAME_TONGUE, SpecialName::Fire, 2, 4, 25),
                6 | 7 => (WearFlags::SLAY_EVIL, SpecialName::SlayEvil, 3, 3, 25),
                8 | 9 => (WearFlags::SLAY_ANIMAL, SpecialName::SlayAnimal, 2, 2, 30),
                _ => (WearFlags::SLAY_DRAGON, SpecialName::DragonSlaying, 3, 3, 35),
            };
            grant(item, flags, name);
            item.bonuses.to_hit += hit;
            item.bonuses.to_damage += dam;
            item.cost += cost;
        } else if self.is_cursed() {
            item.bonuses.to_hit -= self.bonus(5, 55);
            item.bonuses.to_damage -= self.bonus(5, 55);
            curse(item);
        }
    }

    fn body_armor(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_ac += self.bonus(1, 30);
            if !self.is_special() {
                return;
            }
            match self.rng.rnd(9) {
                1 => {
                    grant(
                        item,
                        WearFlags::RES_LIGHT
                            | WearFlags::RES_COLD
                            | WearFlags::RES_ACID
                            | WearFlags::RES_FIRE,
                        SpecialName::Resist,
                    );
                    item.bonuses.to_ac += 5 + self.rnd(5) as i16;
                    item.cost += 2500;
                }
                2 => {
                    grant(item, WearFlags::RES_ACID, SpecialName::ResistAcid);
                    item.cost += 1000;
                }
                3 | 4 => {
                    grant(item, WearFlags::RES_FIRE, SpecialName::ResistFire);
                    item.cost += 600;
                }
                5 | 6 => {
                    grant(item, WearFlags::RES_COLD, SpecialName::ResistCold);
                    item.cost += 600;
                }
                _ => {
                    grant(item, WearFlags::RES_LIGHT, SpecialName::ResistLight);
                    item.cost += 500;
                }
            }
        } else if self.is_cursed() {
            item.bonuses.to_ac -= self.bonus(1, 40);
            curse(item);
        }
    }

    fn gloves(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_ac += self.bonus(1, 20);
            if !self.is_special() {
                return;
            }
            if self.rng.rnd(2) == 1 {
                grant(item, WearFlags::FREE_ACT, SpecialName::FreeAction);
                item.cost += 1000;
            } else {
                item.bonuses.specials.add(SpecialName::Slaying);
                item.ident.insert(IdentFlags::SHOW_HIT_DAM);
                item.bonuses.to_hit += 1 + self.rnd(5) as i16;
                item.bonuses.to_damage += 1 + self.rnd(5) as i16;
                item.cost +=
                    (i32::from(item.bonuses.to_hit) + i32::from(item.bonuses.to_damage)) * 250;
            }
        } else if self.is_cursed() {
            if self.is_special() {
                let (flags, name) = if self.rng.rnd(2) == 1 {
                    (WearFlags::DEX, SpecialName::Clumsiness)
                } else {
                    (WearFlags::STR, SpecialName::Weakness)
                };
                grant(item, flags, name);
                item.bonuses.misc_use = -i32::from(self.bonus(1, 10));
            }
            item.bonuses.to_ac -= self.bonus(1, 40);
            curse(item);
        }
    }

    fn boots(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_ac += self.bonus(1, 20);
            if !self.is_special() {
                return;
            }
            match self.rng.rnd(12) {
                1 => {
                    grant(item, WearFlags::SPEED, SpecialName::Speed);
                    item.bonuses.misc_use = 1;
                    item.cost += 5000;
                }
                2..=5 => {
                    grant(item, WearFlags::STEALTH, SpecialName::Stealth);
                    item.bonuses.misc_use = self.rnd(3);
                    item.cost += 500;
                }
                _ => {
                    grant(item, WearFlags::FFALL, SpecialName::SlowDescent);
                    item.cost += 250;
                }
            }
        } else if self.is_cursed() {
            match self.rng.rnd(3) {
                1 => {
                    grant(item, WearFlags::SPEED, SpecialName::Slowness);
                    item.bonuses.misc_use = -1;
                }
                2 => grant(item, WearFlags::AGGRAVATE, SpecialName::Noise),
                _ => {
                    item.bonuses.specials.add(SpecialName::GreatMass);
                    item.weight = item.weight.saturating_mul(5);
                }
            }
            item.bonuses.to_ac -= self.bonus(2, 45);
            curse(item);
        }
    }

    fn helm(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_ac += self.bonus(1, 20);
            if !self.is_special() {
                return;
            }
            if item.stack_code < 6 {
                self.helm_ego(item);
            } else {
                self.crown_ego(item);
            }
        } else if self.is_cursed() {
            item.bonuses.to_ac -= self.bonus(1, 45);
            curse(item);
            if !self.is_special() {
                return;
            }
            match self.rng.rnd(7) {
                1 => {
                    grant(item, WearFlags::INT, SpecialName::Stupidity);
                    item.bonuses.misc_use = -self.rnd(5);
                }
                2 => {
                    grant(item, WearFlags::WIS, SpecialName::Dullness);
                    item.bonuses.misc_use = -self.rnd(5);
                }
                3 => grant(item, WearFlags::BLIND, SpecialName::Blindness),
                4 => grant(item, WearFlags::TIMID, SpecialName::Timidness),
                5 => grant(item, WearFlags::TELEPORT, SpecialName::Teleportation),
                6 => {
                    grant(item, WearFlags::CHR, SpecialName::Ugliness);
                    item.bonuses.misc_use = -self.rnd(5);
                }
                _ => {}
            }
        }
    }

    fn helm_ego(&mut self, item: &mut ItemInstance) {
        match self.rng.rnd(3) {
            1 => {
                grant(item, WearFlags::INT, SpecialName::Intelligence);
                item.bonuses.misc_use = self.rnd(2);
                item.cost += item.bonuses.misc_use * 500;
            }
            2 => {
                grant(item, WearFlags::WIS, SpecialName::Wisdom);
                item.bonuses.misc_use = self.rnd(2);
                item.cost += item.bonuses.misc_use * 500;
            }
            _ => {
                grant(item, WearFlags::INFRA, SpecialName::InfraVision);
                item.bonuses.misc_use = 1 + self.rnd(4);
                item.cost += item.bonuses.misc_use * 250;
            }
        }
    }

    fn crown_ego(&mut self, item: &mut ItemInstance) {
        match self.rng.rnd(6) {
            1 => {
                grant(
                    item,
                    WearFlags::STR | WearFlags::FREE_ACT | WearFlags::SUST_STAT,
                    SpecialName::Might,
                );
                item.bonuses.misc_use = self.rnd(3);
                item.cost += 1000 + item.bonuses.misc_use * 500;
            }
            2 => {
                grant(item, WearFlags::WIS | WearFlags::CHR, SpecialName::Lordliness);
                item.bonuses.misc_use = self.rnd(3);
                item.cost += 1000 + item.bonuses.misc_use * 500;
            }
            3 => {
                grant(
                    item,
                    WearFlags::INT
                        | WearFlags::RES_LIGHT
                        | WearFlags::RES_COLD
                        | WearFlags::RES_ACID
                        | WearFlags::RES_FIRE,
                    SpecialName::Magi,
                );
                item.bonuses.misc_use = self.rnd(3);
                item.cost += 3000 + item.bonuses.misc_use * 500;
            }
            4 => {
                grant(item, WearFlags::CHR, SpecialName::Beauty);
                item.bonuses.misc_use = self.rnd(3);
                item.cost += 750;
            }
            5 => {
                grant(item, WearFlags::SEE_INVIS | WearFlags::SEARCH, SpecialName::Seeing);
                item.bonuses.misc_use = 5 * (1 + self.rnd(4));
                item.cost += 1000 + item.bonuses.misc_use * 100;
            }
            _ => {
                grant(item, WearFlags::REGEN, SpecialName::Regeneration);
                item.cost += 1500;
            }
        }
    }

    fn cloak(&mut self, item: &mut ItemInstance) {
        if self.is_magic() {
            item.bonuses.to_ac += self.bonus(1, 20);
            if !self.is_special() {
                return;
            }
            if self.rng.rnd(2) == 1 {
                item.bonuses.specials.add(SpecialName::Protection);
                item.bonuses.to_ac += self.bonus(2, 40);
                item.cost += 250;
            } else {
                grant(item, WearFlags::STEALTH, SpecialName::Stealth);
                item.bonuses.misc_use = self.rnd(3);
                item.bonuses.to_ac += self.bonus(1, 20);
                item.cost += item.bonuses.misc_use * 500;
            }
        } else if self.is_cursed() {
            match self.rng.rnd(3) {
                1 => {
                    grant(item, WearFlags::AGGRAVATE, SpecialName::Irritation);
                    item.bonuses.to_hit -= self.bonus(1, 10);
                    item.bonuses.to_damage -= self.bonus(1, 10);
                    item.ident.insert(IdentFlags::SHOW_HIT_DAM);
                }
                2 => {
                    item.bonuses.specials.add(SpecialName::Vulnerability);
                    item.bonuses.to_ac -= self.bonus(10, 100);
                }
                _ => {
                    item.bonuses.specials.add(SpecialName::Enveloping);
                    item.bonuses.to_hit -= self.bonus(2, 40);
                    item.bonuses.to_damage -= self.bonus(2, 40);
                    item.ident.insert(IdentFlags::SHOW_HIT_DAM);
                }
            }
            item.bonuses.to_ac -= self.bonus(1, 45);
            curse(item);
        }
    }

    fn ring(&mut self, item: &mut ItemInstance) {
        match item.stack_code {
            // gain strength, dexterity, constitution, intelligence
            0..=3 => self.stat_bonus(item),
            4 => {
                if self.is_cursed() {
                    item.bonuses.misc_use = -self.rnd(3);
                    curse(item);
                } else {
                    item.bonuses.misc_use = 1;
                }
            }
            5 => self.searching(item, 20),
            14..=16 => {
                item.bonuses.to_ac += self.bonus(0, 10);
                item.cost += i32::from(item.bonuses.to_ac) * 100;
            }
            19 => {
                let bonus = self.bonus(1, 20);
                item.bonuses.to_damage += bonus;
                item.cost += i32::from(bonus) * 100;
                if self.is_cursed() {
                    item.bonuses.to_damage = -item.bonuses.to_damage;
                    curse(item);
                }
            }
            20 => {
                let bonus = self.bonus(1, 20);
                item.bonuses.to_hit += bonus;
                item.cost += i32::from(bonus) * 100;
                if self.is_cursed() {
                    item.bonuses.to_hit = -item.bonuses.to_hit;
                    curse(item);
                }
            }
            21 => {
                let bonus = self.bonus(1, 20);
                item.bonuses.to_ac += bonus;
                item.cost += i32::from(bonus) * 100;
                if self.is_cursed() {
                    item.bonuses.to_ac = -item.bonuses.to_ac;
                    curse(item);
                }
            }
            30 => {
                item.bonuses.to_hit = self.bonus(1, 25);
                item.bonuses.to_damage = self.bonus(1, 25);
                item.cost += (i32::from(item.bonuses.to_hit)
                    + i32::from(item.bonuses.to_damage))
                    * 100;
                if self.is_cursed() {
                    item.bonuses.to_hit = -item.bonuses.to_hit;
                    item.bonuses.to_damage = -item.bonuses.to_damage;
                    curse(item);
                }
            }
            _ => {}
        }
    }

    fn amulet(&mut self, item: &mut ItemInstance) {
        match item.stack_code {
            // wisdom, charisma
            0 | 1 => self.stat_bonus(item),
            2 => self.searching(item, 25),
            8 => {
                item.bonuses.misc_use = 5 * i32::from(self.bonus(1, 25));
                item.cost += item.bonuses.misc_use * 100;
            }
            9 => {
                item.bonuses.misc_use = -(self.rnd(5) + i32::from(self.bonus(2, 25)));
                curse(item);
            }
            _ => {}
        }
    }

    fn stat_bonus(&mut self, item: &mut ItemInstance) {
        if self.is_cursed() {
            item.bonuses.misc_use = -i32::from(self.bonus(1, 20));
            curse(item);
        } else {
            item.bonuses.misc_use = i32::from(self.bonus(1, 10));
            item.cost += item.bonuses.misc_use * 100;
        }
    }

    fn searching(&mut self, item: &mut ItemInstance, max_std: i32) {
        item.bonuses.misc_use = 5 * i32::from(self.bonus(1, max_std));
        item.cost += item.bonuses.misc_use * 50;
        if self.is_cursed() {
            item.bonuses.misc_use = -item.bonuses.misc_use;
            curse(item);
        }
    }

    fn chest(&mut self, item: &mut ItemInstance) {
        let roll = self.rng.rnd(u32::from(self.depth) + 4);
        let (flags, name) = match roll {
            1 => {
                // Nothing inside and nothing guarding it.
                item.bonuses.abilities = 0;
                (ChestFlags::empty(), SpecialName::Empty)
            }
            2 => (ChestFlags::LOCKED, SpecialName::Locked),
            3 | 4 => (ChestFlags::LOSE_STR, SpecialName::PoisonNeedle),
            5 | 6 => (ChestFlags::POISON, SpecialName::PoisonNeedle),
            7..=9 => (ChestFlags::PARALYSED, SpecialName::GasTrap),
            10 | 11 => (ChestFlags::EXPLODE, SpecialName::ExplosionDevice),
            12..=14 => (ChestFlags::SUMMON, SpecialName::SummoningRunes),
            15..=17 => (
                ChestFlags::PARALYSED | ChestFlags::POISON | ChestFlags::LOSE_STR,
                SpecialName::MultipleTraps,
            ),
            _ => (
                ChestFlags::SUMMON | ChestFlags::EXPLODE,
                SpecialName::MultipleTraps,
            ),
        };
        let flags = if roll > 1 {
            flags | ChestFlags::LOCKED
        } else {
            flags
        };
        item.bonuses.abilities |= flags.bits();
        item.bonuses.specials.add(name);
    }
}

fn grant(item: &mut ItemInstance, flags: WearFlags, name: SpecialName) {
    item.bonuses.abilities |= flags.bits();
    item.bonuses.specials.add(name);
}

fn curse(item: &mut ItemInstance) {
    item.bonuses.abilities |= WearFlags::CURSED.bits();
    item.cost = 0;
}

/// Merge `b` into a copy of `a`.
pub fn merge_items(a: &ItemInstance, b: &ItemInstance) -> Result<ItemInstance, ItemError> {
    let mut merged = a.clone();
    merge_into(&mut merged, b)?;
    Ok(merged)
}

/// Add the items of `other` to `target`.
///
/// The stack keeps `target`'s id; identification flags of both are kept.
pub fn merge_into(target: &mut ItemInstance, other: &ItemInstance) -> Result<(), ItemError> {
    if !can_stack(target, other) {
        return Err(ItemError::Incompatible {
            left: target.id,
            right: other.id,
        });
    }
    let total = u32::from(target.quantity) + u32::from(other.quantity);
    if total > u32::from(MAX_STACK) {
        return Err(ItemError::StackFull { total });
    }

    target.quantity = total as u16;
    target.ident |= other.ident;
    // A known stack has nothing left to sense or try.
    if target.is_known() {
        target.ident.remove(IdentFlags::MAGIK | IdentFlags::TRIED);
    }
    tracing::debug!(item = %target.id, from = %other.id, quantity = total, "merged stacks");
    Ok(())
}

/// Split `count` items off `item` into a new instance with a fresh id.
///
/// At least one item must stay behind.
pub fn split_item(
    ctx: &mut MkItemContext,
    item: &mut ItemInstance,
    count: u16,
) -> Result<ItemInstance, ItemError> {
    if count == 0 {
        return Err(ItemError::ZeroQuantity);
    }
    if count >= item.quantity {
        return Err(ItemError::InsufficientQuantity {
            requested: count,
            available: item.quantity,
        });
    }

    let mut part = item.clone();
    part.id = ctx.next_id();
    part.quantity = count;
    item.quantity -= count;
    tracing::debug!(item = %item.id, part = %part.id, count, "split stack");
    Ok(part)
}

/// Put `item` on a pile, merging it into the first stack that takes it.
///
/// Returns the index of the stack that now holds the items.
pub fn stack_into(pile: &mut Vec<ItemInstance>, item: ItemInstance) -> usize {
    for (index, stack) in pile.iter_mut().enumerate() {
        if merge_into(stack, &item).is_ok() {
            return index;
        }
    }
    pile.push(item);
    pile.len() - 1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dice, ObjectDef, SpecialNames};

    fn def(name: &'static str, category: ItemCategory, stack_code: u8) -> ObjectDef {
        ObjectDef {
            name,
            category,
            stack_code,
            group_size: 1,
            cost: 100,
            weight: 20,
            damage: Dice::new(1, 4),
            ..ObjectDef::NOTHING
        }
    }

    const ARROW: TemplateId = TemplateId(0);
    const SWORD: TemplateId = TemplateId(1);
    const WAND: TemplateId = TemplateId(2);
    const TORCH: TemplateId = TemplateId(3);
    const CHEST: TemplateId = TemplateId(4);
    const RATION: TemplateId = TemplateId(5);
    const MAIL: TemplateId = TemplateId(6);

    fn registry() -> ObjectRegistry {
        ObjectRegistry::load(&[
            def("& Arrow~", ItemCategory::Arrow, 193),
            def("& Long Sword", ItemCategory::Sword, 7),
            def("Light", ItemCategory::Wand, 0),
            ObjectDef {
                misc_use: 4000,
                ..def("& Wooden Torch~", ItemCategory::Light, 193)
            },
            def("& Small Wooden Chest", ItemCategory::Chest, 1),
            ObjectDef {
                group_size: 5,
                ..def("& Ration~ of Food", ItemCategory::Food, 90)
            },
            ObjectDef {
                ac: 20,
                ..def("Chain Mail", ItemCategory::HardArmor, 4)
            },
        ])
        .unwrap()
    }

    #[test]
    fn test_context_ids() {
        let mut ctx = MkItemContext::new();
        assert_eq!(ctx.next_id(), ItemId(1));
        assert_eq!(ctx.next_id(), ItemId(2));

        ctx.next_id = ItemId(u32::MAX);
        assert_eq!(ctx.next_id(), ItemId(u32::MAX));
        assert_eq!(ctx.next_id(), ItemId(1));
    }

    #[test]
    fn test_create_unknown_template() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(1);
        assert_eq!(
            create_item(&mut ctx, &registry, &mut rng, TemplateId(999), None),
            Err(ItemError::UnknownTemplate(TemplateId(999)))
        );
    }

    #[test]
    fn test_create_quantity() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(2);

        let rations = create_item(&mut ctx, &registry, &mut rng, RATION, None).unwrap();
        assert_eq!(rations.quantity(), 5);

        for _ in 0..50 {
            let arrows = create_item(&mut ctx, &registry, &mut rng, ARROW, None).unwrap();
            assert!((7..=42).contains(&arrows.quantity()));
        }

        let one = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(1)).unwrap();
        assert_eq!(one.quantity(), 1);

        assert_eq!(
            create_item(&mut ctx, &registry, &mut rng, ARROW, Some(0)),
            Err(ItemError::ZeroQuantity)
        );
    }

    #[test]
    fn test_mundane_items_are_plain() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(3);
        for _ in 0..200 {
            let sword = create_item(&mut ctx, &registry, &mut rng, SWORD, None).unwrap();
            assert_eq!(sword.bonuses().to_hit, 0);
            assert!(sword.specials().is_empty());
            assert!(!sword.is_cursed());
        }
    }

    #[test]
    fn test_charges_and_fuel() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(4);
        for _ in 0..100 {
            let wand = create_item(&mut ctx, &registry, &mut rng, WAND, None).unwrap();
            assert!((7..=16).contains(&wand.bonuses().misc_use));
            let torch = create_item(&mut ctx, &registry, &mut rng, TORCH, None).unwrap();
            assert!((1..=4000).contains(&torch.bonuses().misc_use));
        }
    }

    #[test]
    fn test_deep_weapons_get_enchanted() {
        let registry = registry();
        let mut ctx = MkItemContext::at_depth(40);
        let mut rng = GameRng::new(5);
        let mut enchanted = 0;
        let mut cursed = 0;
        for _ in 0..500 {
            let sword = create_item(&mut ctx, &registry, &mut rng, SWORD, None).unwrap();
            if sword.is_cursed() {
                cursed += 1;
                assert_eq!(sword.cost, 0);
                assert!(sword.bonuses().to_hit < 0);
            } else if sword.bonuses().to_hit > 0 || !sword.specials().is_empty() {
                enchanted += 1;
            }
        }
        assert!(enchanted > 100, "{enchanted}");
        assert!(cursed > 20, "{cursed}");
    }

    #[test]
    fn test_armor_egos_carry_their_abilities() {
        let registry = registry();
        let mut ctx = MkItemContext::at_depth(50);
        let mut rng = GameRng::new(6);
        for _ in 0..1000 {
            let mail = create_item(&mut ctx, &registry, &mut rng, MAIL, None).unwrap();
            if mail.specials().has(SpecialName::ResistFire) {
                assert!(mail.abilities() & WearFlags::RES_FIRE.bits() != 0);
            }
        }
    }

    #[test]
    fn test_chest_traps() {
        let registry = registry();
        let mut ctx = MkItemContext::at_depth(30);
        let mut rng = GameRng::new(7);
        for _ in 0..200 {
            let chest = create_item(&mut ctx, &registry, &mut rng, CHEST, None).unwrap();
            assert_eq!(chest.specials().bits().count_ones(), 1);
            if !chest.specials().has(SpecialName::Empty) {
                assert!(chest.abilities() & ChestFlags::LOCKED.bits() != 0);
            }
        }
    }

    #[test]
    fn test_enchantment_bonus_floor() {
        let rules = MagicRules::default();
        let mut rng = GameRng::new(8);
        for _ in 0..1000 {
            let bonus = enchantment_bonus(&mut rng, 2, 40, 0, &rules);
            assert!((2..=5).contains(&bonus), "{bonus}");
        }
    }

    #[test]
    fn test_merge_and_split() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(9);
        let a = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(10)).unwrap();
        let b = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(4)).unwrap();

        let mut merged = merge_items(&a, &b).unwrap();
        assert_eq!(merged.quantity(), 14);
        assert_eq!(merged.id, a.id);

        let part = split_item(&mut ctx, &mut merged, 6).unwrap();
        assert_eq!((merged.quantity(), part.quantity()), (8, 6));
        assert_ne!(part.id, merged.id);

        assert_eq!(
            split_item(&mut ctx, &mut merged, 8),
            Err(ItemError::InsufficientQuantity {
                requested: 8,
                available: 8
            })
        );
        assert_eq!(split_item(&mut ctx, &mut merged, 0), Err(ItemError::ZeroQuantity));
    }

    #[test]
    fn test_merge_with_known_stack_drops_stale_markers() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(11);
        let mut known = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(3)).unwrap();
        let mut tried = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(3)).unwrap();
        known.identify();
        tried.mark_tried();
        tried.add_ident(IdentFlags::MAGIK);

        let both_ways = [
            merge_items(&known, &tried).unwrap(),
            merge_items(&tried, &known).unwrap(),
        ];
        for merged in both_ways {
            assert_eq!(merged.quantity(), 6);
            assert!(merged.is_known());
            assert!(!merged.ident().intersects(IdentFlags::MAGIK | IdentFlags::TRIED));
        }

        let mut unknown = tried.clone();
        merge_into(&mut unknown, &tried).unwrap();
        assert!(unknown.ident().contains(IdentFlags::TRIED | IdentFlags::MAGIK));
    }

    #[test]
    fn test_merge_rejects_incompatible_and_overfull() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(10);
        let arrows = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(200)).unwrap();
        let more = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(100)).unwrap();
        let sword = create_item(&mut ctx, &registry, &mut rng, SWORD, None).unwrap();

        assert_eq!(
            merge_items(&arrows, &sword),
            Err(ItemError::Incompatible {
                left: arrows.id,
                right: sword.id
            })
        );
        assert_eq!(
            merge_items(&arrows, &more),
            Err(ItemError::StackFull { total: 300 })
        );
    }

    #[test]
    fn test_stack_into_pile() {
        let registry = registry();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(11);
        let mut pile = Vec::new();

        let sword = create_item(&mut ctx, &registry, &mut rng, SWORD, None).unwrap();
        assert_eq!(stack_into(&mut pile, sword), 0);
        let arrows = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(3)).unwrap();
        assert_eq!(stack_into(&mut pile, arrows.clone()), 1);
        assert_eq!(stack_into(&mut pile, arrows), 1);
        assert_eq!(pile.len(), 2);
        assert_eq!(pile[1].quantity(), 6);

        let mut fire = create_item(&mut ctx, &registry, &mut rng, ARROW, Some(3)).unwrap();
        fire.bonuses.specials = SpecialNames::of(SpecialName::Fire);
        assert_eq!(stack_into(&mut pile, fire), 2);
    }
}
