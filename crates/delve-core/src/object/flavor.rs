//! Unidentified flavors
//!
//! Until a kind is identified, potions show a color, rings a stone, wands a
//! metal and so on. The pool of flavor names is static data supplied
//! through [`FlavorTables`]; which flavor each kind gets is decided once per
//! game session by [`FlavorSession`].

use std::fmt;
use std::sync::OnceLock;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter};

use super::{ItemCategory, ObjectTemplate};
use crate::color::Color;
use crate::rng::GameRng;

/// Pool a flavored kind draws its unidentified name from
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumCount,
)]
#[repr(u8)]
pub enum FlavorKind {
    /// Potion colors
    Potion,
    Mushroom,
    /// Staff woods
    Wood,
    /// Wand metals
    Metal,
    /// Ring stones
    Rock,
    /// Amulet materials
    Amulet,
    /// Generated scroll titles
    ScrollTitle,
}

/// Stack codes of food that appears as mushrooms
const MUSHROOM_CODES: std::ops::RangeInclusive<u8> = 64..=84;

impl FlavorKind {
    /// Flavor pool and slot for a template, or `None` for kinds that are
    /// always shown by their true name.
    pub fn for_template(category: ItemCategory, stack_code: u8) -> Option<(FlavorKind, usize)> {
        let kind = match category {
            ItemCategory::Amulet => FlavorKind::Amulet,
            ItemCategory::Ring => FlavorKind::Rock,
            ItemCategory::Staff => FlavorKind::Wood,
            ItemCategory::Wand => FlavorKind::Metal,
            ItemCategory::Potion1 | ItemCategory::Potion2 => FlavorKind::Potion,
            ItemCategory::Scroll1 | ItemCategory::Scroll2 => FlavorKind::ScrollTitle,
            ItemCategory::Food if MUSHROOM_CODES.contains(&stack_code) => FlavorKind::Mushroom,
            _ => return None,
        };
        Some((kind, usize::from(stack_code & 63)))
    }

    /// Leading pool entries that are never shuffled.
    ///
    /// The first three potions (slime mold juice, apple juice and water)
    /// always look the same.
    pub const fn fixed_prefix(self) -> usize {
        match self {
            FlavorKind::Potion => 3,
            _ => 0,
        }
    }
}

/// Static flavor data
pub trait FlavorTables: Send + Sync {
    /// Flavor name at `index` of the pool. Unused for scroll titles,
    /// which are generated from [`FlavorTables::syllables`].
    fn flavor_name(&self, kind: FlavorKind, index: usize) -> &'static str;

    /// Display color of the flavor at `index` of the pool
    fn color_of(&self, kind: FlavorKind, index: usize) -> Color;

    /// Number of flavors in the pool
    fn pool_size(&self, kind: FlavorKind) -> usize;

    /// Syllables scroll titles are built from
    fn syllables(&self) -> &[&'static str];
}

/// Longest generated scroll title
const TITLE_LEN: usize = 9;

/// One game session's flavor assignment and kind discoveries.
///
/// Each pool is shuffled on first use from a generator derived from the
/// session seed and the pool, so the mapping never re-rolls within a
/// session and does not depend on which item was displayed first.
pub struct FlavorSession<'t> {
    tables: &'t dyn FlavorTables,
    seed: u64,
    shuffles: [OnceLock<Vec<usize>>; FlavorKind::COUNT],
    titles: OnceLock<Vec<String>>,
    known: HashSet<(FlavorKind, usize)>,
}

impl fmt::Debug for FlavorSession<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlavorSession")
            .field("seed", &self.seed)
            .field("known", &self.known.len())
            .finish_non_exhaustive()
    }
}

impl<'t> FlavorSession<'t> {
    pub fn new(tables: &'t dyn FlavorTables, seed: u64) -> Self {
        Self {
            tables,
            seed,
            shuffles: std::array::from_fn(|_| OnceLock::new()),
            titles: OnceLock::new(),
            known: HashSet::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn order(&self, kind: FlavorKind) -> &[usize] {
        self.shuffles[kind as usize].get_or_init(|| {
            let size = self.tables.pool_size(kind);
            let mut order: Vec<usize> = (0..size).collect();
            let fixed = kind.fixed_prefix().min(size);
            let mut rng = GameRng::derive(self.seed, kind as u64 + 1);
            rng.shuffle(&mut order[fixed..]);
            tracing::trace!(%kind, size, "assigned flavors");
            order
        })
    }

    fn titles(&self) -> &[String] {
        self.titles.get_or_init(|| {
            let syllables = self.tables.syllables();
            let count = self.tables.pool_size(FlavorKind::ScrollTitle);
            let mut rng = GameRng::derive(self.seed, FlavorKind::ScrollTitle as u64 + 1);
            (0..count)
                .map(|_| scroll_title(&mut rng, syllables))
                .collect()
        })
    }

    /// Pool index assigned to `slot` of `kind`
    pub fn pool_index(&self, kind: FlavorKind, slot: usize) -> usize {
        let order = self.order(kind);
        debug_assert!(slot < order.len(), "{kind} flavor slot {slot} outside pool");
        order.get(slot).copied().unwrap_or(slot)
    }

    /// Unidentified name for `slot` of `kind`
    pub fn flavor_name(&self, kind: FlavorKind, slot: usize) -> &str {
        if kind == FlavorKind::ScrollTitle {
            return self.titles().get(slot).map(String::as_str).unwrap_or("");
        }
        self.tables.flavor_name(kind, self.pool_index(kind, slot))
    }

    /// Unidentified name of a template, if it is flavored
    pub fn flavor_of(&self, template: &ObjectTemplate) -> Option<&str> {
        template
            .flavor()
            .map(|(kind, slot)| self.flavor_name(kind, slot))
    }

    /// Color to draw a template with: its flavor's color while flavored,
    /// otherwise the template's own color.
    pub fn display_color(&self, template: &ObjectTemplate) -> Color {
        match template.flavor() {
            Some((kind, slot)) if kind != FlavorKind::ScrollTitle => {
                self.tables.color_of(kind, self.pool_index(kind, slot))
            }
            _ => template.def.color,
        }
    }

    /// Whether the kind of `template` has been learned this session.
    /// Unflavored kinds are always known.
    pub fn is_known(&self, template: &ObjectTemplate) -> bool {
        match template.flavor() {
            Some(key) => self.known.contains(&key),
            None => true,
        }
    }

    /// Learn the kind of `template`. Returns whether it was new.
    pub fn learn(&mut self, template: &ObjectTemplate) -> bool {
        match template.flavor() {
            Some(key) => {
                let added = self.known.insert(key);
                if added {
                    tracing::debug!(template = %template.id, "learned kind");
                }
                added
            }
            None => false,
        }
    }

    /// Learned kinds, for saving and restoring a session
    pub fn known(&self) -> impl Iterator<Item = (FlavorKind, usize)> + '_ {
        self.known.iter().copied()
    }

    /// Restore a learned kind
    pub fn learn_flavor(&mut self, kind: FlavorKind, slot: usize) {
        self.known.insert((kind, slot));
    }
}

/// Two or three words of one or two syllables, cut to fit the title width.
fn scroll_title(rng: &mut GameRng, syllables: &[&'static str]) -> String {
    if syllables.is_empty() {
        return String::new();
    }
    let words = rng.rnd(2) + 1;
    let mut title = String::new();
    for word in 0..words {
        for _ in 0..rng.rnd(2) {
            title.push_str(syllables[rng.rn2(syllables.len() as u32) as usize]);
        }
        if word + 1 < words {
            title.push(' ');
        }
    }

    // Never end on the space between words.
    let mut chars: Vec<char> = title.chars().collect();
    let cut = if chars.get(TITLE_LEN - 1) == Some(&' ') {
        TITLE_LEN - 1
    } else {
        TITLE_LEN
    };
    chars.truncate(cut);
    chars.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dice, ObjectDef, TemplateId};

    struct TestTables;

    const NAMES: [&str; 6] = ["Red", "Green", "Blue", "Clear", "Black", "White"];

    impl FlavorTables for TestTables {
        fn flavor_name(&self, _kind: FlavorKind, index: usize) -> &'static str {
            NAMES.get(index).copied().unwrap_or("")
        }

        fn color_of(&self, _kind: FlavorKind, index: usize) -> Color {
            Color(index as u8)
        }

        fn pool_size(&self, _kind: FlavorKind) -> usize {
            NAMES.len()
        }

        fn syllables(&self) -> &[&'static str] {
            &["ab", "zun", "ox", "ther"]
        }
    }

    fn template(category: ItemCategory, stack_code: u8) -> ObjectTemplate {
        ObjectTemplate {
            id: TemplateId(7),
            def: ObjectDef {
                name: "Test",
                category,
                stack_code,
                group_size: 1,
                damage: Dice::new(0, 0),
                color: Color::TAN,
                ..ObjectDef::NOTHING
            },
        }
    }

    #[test]
    fn test_flavor_kinds() {
        assert_eq!(
            FlavorKind::for_template(ItemCategory::Potion2, 95),
            Some((FlavorKind::Potion, 31))
        );
        assert_eq!(
            FlavorKind::for_template(ItemCategory::Food, 84),
            Some((FlavorKind::Mushroom, 20))
        );
        assert_eq!(FlavorKind::for_template(ItemCategory::Food, 90), None);
        assert_eq!(FlavorKind::for_template(ItemCategory::Arrow, 193), None);
    }

    #[test]
    fn test_same_seed_same_flavors() {
        let a = FlavorSession::new(&TestTables, 11);
        let b = FlavorSession::new(&TestTables, 11);
        for slot in 0..NAMES.len() {
            assert_eq!(
                a.flavor_name(FlavorKind::Rock, slot),
                b.flavor_name(FlavorKind::Rock, slot)
            );
        }
    }

    #[test]
    fn test_assignment_independent_of_display_order() {
        let a = FlavorSession::new(&TestTables, 11);
        let b = FlavorSession::new(&TestTables, 11);
        // Touch pools in opposite orders.
        let a_metal = a.flavor_name(FlavorKind::Metal, 2).to_string();
        let a_rock = a.flavor_name(FlavorKind::Rock, 2).to_string();
        let b_rock = b.flavor_name(FlavorKind::Rock, 2).to_string();
        let b_metal = b.flavor_name(FlavorKind::Metal, 2).to_string();
        assert_eq!(a_metal, b_metal);
        assert_eq!(a_rock, b_rock);
    }

    #[test]
    fn test_assignment_is_a_permutation() {
        let session = FlavorSession::new(&TestTables, 99);
        let mut seen: Vec<usize> = (0..NAMES.len())
            .map(|slot| session.pool_index(FlavorKind::Wood, slot))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (0..NAMES.len()).collect::<Vec<_>>());
    }

    #[test]
    fn test_first_potions_fixed() {
        for seed in 0..20 {
            let session = FlavorSession::new(&TestTables, seed);
            for slot in 0..3 {
                assert_eq!(session.pool_index(FlavorKind::Potion, slot), slot);
            }
        }
    }

    #[test]
    fn test_scroll_titles() {
        let session = FlavorSession::new(&TestTables, 5);
        for slot in 0..NAMES.len() {
            let title = session.flavor_name(FlavorKind::ScrollTitle, slot);
            assert!(!title.is_empty());
            assert!(title.chars().count() <= TITLE_LEN);
            assert!(!title.ends_with(' '));
        }
        // Cached, not re-rolled.
        let first = session.flavor_name(FlavorKind::ScrollTitle, 0).to_string();
        assert_eq!(session.flavor_name(FlavorKind::ScrollTitle, 0), first);
    }

    #[test]
    fn test_learning_kinds() {
        let mut session = FlavorSession::new(&TestTables, 1);
        let ring = template(ItemCategory::Ring, 3);
        let sword = template(ItemCategory::Sword, 3);
        assert!(!session.is_known(&ring));
        assert!(session.is_known(&sword));
        assert!(session.learn(&ring));
        assert!(!session.learn(&ring));
        assert!(session.is_known(&ring));
        assert_eq!(session.known().count(), 1);
    }

    #[test]
    fn test_display_color() {
        let session = FlavorSession::new(&TestTables, 1);
        let ring = template(ItemCategory::Ring, 2);
        let index = session.pool_index(FlavorKind::Rock, 2);
        assert_eq!(session.display_color(&ring), Color(index as u8));
        let scroll = template(ItemCategory::Scroll1, 70);
        assert_eq!(session.display_color(&scroll), Color::TAN);
    }
}
