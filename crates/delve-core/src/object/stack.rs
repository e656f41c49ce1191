//! Stacking classifier
//!
//! Whether two instances may share one pile is decided by their template's
//! stack code, which falls into one of five bands:
//!
//! | Codes   | Band                                           |
//! |---------|------------------------------------------------|
//! | 0-63    | unique, never stacks                           |
//! | 64-127  | dungeon stackable, same template is enough     |
//! | 128-191 | reserved, treated as unique                    |
//! | 192     | stacks on identical bonuses, tracked per unit  |
//! | 193-255 | stacks on identical bonuses, one group         |
//!
//! In every band, instances with different inscriptions or different
//! discovered abilities stay apart, and identity is by template id.

use serde::{Deserialize, Serialize};

use super::{ComputedBonuses, ItemInstance, TemplateId};

/// Largest quantity one stack may hold
pub const MAX_STACK: u16 = 255;

/// Stacking band of a stack code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StackPolicy {
    /// Never stacks
    Unique,
    /// Stacks with any instance of the same template
    Dungeon,
    /// Unused codes; never stacks
    Reserved,
    /// Stacks on identical bonuses, but each unit stays an individual
    /// (e.g. torches with different fuel must not pool their fuel)
    ExactMatch,
    /// Stacks on identical bonuses as one group
    Grouped,
}

impl StackPolicy {
    pub const fn from_code(code: u8) -> Self {
        match code {
            0..=63 => StackPolicy::Unique,
            64..=127 => StackPolicy::Dungeon,
            128..=191 => StackPolicy::Reserved,
            192 => StackPolicy::ExactMatch,
            _ => StackPolicy::Grouped,
        }
    }

    /// Whether instances in this band can ever share a pile
    pub const fn can_stack(self) -> bool {
        matches!(
            self,
            StackPolicy::Dungeon | StackPolicy::ExactMatch | StackPolicy::Grouped
        )
    }

    /// Whether stacked instances must have equal bonuses
    pub const fn needs_equal_bonuses(self) -> bool {
        matches!(self, StackPolicy::ExactMatch | StackPolicy::Grouped)
    }
}

/// Grouping key for stack candidates.
///
/// Instances with different keys never stack; instances with equal keys
/// always do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StackKey {
    template: TemplateId,
    inscription: Option<String>,
    discovered: u32,
    bonuses: Option<ComputedBonuses>,
}

/// Key used to bucket `item` with its stack candidates, or `None` if the
/// item never stacks.
pub fn stack_key(item: &ItemInstance) -> Option<StackKey> {
    let policy = StackPolicy::from_code(item.stack_code);
    if !policy.can_stack() {
        return None;
    }
    Some(StackKey {
        template: item.template,
        inscription: item.inscription.clone(),
        discovered: item.discovered,
        bonuses: policy.needs_equal_bonuses().then_some(item.bonuses),
    })
}

/// Check if two instances may share one stack
pub fn can_stack(a: &ItemInstance, b: &ItemInstance) -> bool {
    // Identity is by template, never by name.
    if a.template != b.template {
        return false;
    }

    let policy = StackPolicy::from_code(a.stack_code);
    if !policy.can_stack() {
        return false;
    }

    // Different inscriptions never stack
    if a.inscription != b.inscription {
        return false;
    }

    // Partial identification must not merge with full identification
    if a.discovered != b.discovered {
        return false;
    }

    if policy.needs_equal_bonuses() && a.bonuses != b.bonuses {
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::{Dice, ItemCategory, ItemId, ObjectDef, ObjectTemplate};

    fn item(id: u16, stack_code: u8) -> ItemInstance {
        let template = ObjectTemplate {
            id: TemplateId(id),
            def: ObjectDef {
                name: "& Thing~",
                category: ItemCategory::Misc,
                stack_code,
                group_size: 1,
                damage: Dice::new(1, 1),
                ..ObjectDef::NOTHING
            },
        };
        ItemInstance::new(ItemId(u32::from(id)), &template)
    }

    #[test]
    fn test_band_boundaries() {
        assert_eq!(StackPolicy::from_code(0), StackPolicy::Unique);
        assert_eq!(StackPolicy::from_code(63), StackPolicy::Unique);
        assert_eq!(StackPolicy::from_code(64), StackPolicy::Dungeon);
        assert_eq!(StackPolicy::from_code(127), StackPolicy::Dungeon);
        assert_eq!(StackPolicy::from_code(128), StackPolicy::Reserved);
        assert_eq!(StackPolicy::from_code(191), StackPolicy::Reserved);
        assert_eq!(StackPolicy::from_code(192), StackPolicy::ExactMatch);
        assert_eq!(StackPolicy::from_code(193), StackPolicy::Grouped);
        assert_eq!(StackPolicy::from_code(255), StackPolicy::Grouped);
    }

    #[test]
    fn test_unique_never_stacks() {
        let a = item(1, 5);
        assert!(!can_stack(&a, &a.clone()));
        assert!(stack_key(&a).is_none());
    }

    #[test]
    fn test_reserved_never_stacks() {
        let a = item(1, 150);
        assert!(!can_stack(&a, &a.clone()));
    }

    #[test]
    fn test_dungeon_ignores_bonuses() {
        let a = item(1, 70);
        let mut b = a.clone();
        b.bonuses.misc_use = 99;
        assert!(can_stack(&a, &b));
        assert_eq!(stack_key(&a), stack_key(&b));
    }

    #[test]
    fn test_grouped_needs_equal_bonuses() {
        let a = item(1, 193);
        let mut b = a.clone();
        assert!(can_stack(&a, &b));
        b.bonuses.to_hit = 2;
        assert!(!can_stack(&a, &b));
        assert_ne!(stack_key(&a), stack_key(&b));
    }

    #[test]
    fn test_exact_match_compares_fuel() {
        let a = item(1, 192);
        let mut b = a.clone();
        b.bonuses.misc_use = a.bonuses.misc_use + 1;
        assert!(!can_stack(&a, &b));
    }

    #[test]
    fn test_different_templates_never_stack() {
        assert!(!can_stack(&item(1, 193), &item(2, 193)));
    }

    #[test]
    fn test_inscription_and_discovery_split_stacks() {
        let a = item(1, 70);
        let mut b = a.clone();
        b.set_inscription("mine");
        assert!(!can_stack(&a, &b));

        let mut c = a.clone();
        c.bonuses.abilities = 1;
        c.discovered = 1;
        assert!(!can_stack(&a, &c));
    }
}
