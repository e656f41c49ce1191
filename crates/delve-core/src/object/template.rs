//! Object templates
//!
//! A template is one immutable catalog row: the master definition every
//! concrete item of that kind is copied from.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Effects, FlavorKind, ItemCategory, StackPolicy};
use crate::color::Color;

/// Dense registry index of a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TemplateId(pub u16);

impl TemplateId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Damage dice, `count`d`sides`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Dice {
    pub count: u8,
    pub sides: u8,
}

impl Dice {
    pub const fn new(count: u8, sides: u8) -> Self {
        Self { count, sides }
    }

    /// Largest possible roll
    pub const fn max(self) -> u32 {
        self.count as u32 * self.sides as u32
    }
}

impl fmt::Display for Dice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

/// One catalog row (static data)
///
/// The name is a format string. A leading `& ` stands for the article or
/// count, and `~` marks where the plural suffix goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectDef {
    /// Name format string
    pub name: &'static str,

    /// Raw ability word; see [`Effects`] for its meaning per category
    pub flags: u32,

    pub category: ItemCategory,

    /// Map symbol
    pub symbol: char,

    /// Catch-all value: charges, fuel, food value, bow multiplier, pluses
    /// for stat items, disarm experience for traps
    pub misc_use: i32,

    /// Base cost in gold
    pub cost: i32,

    /// Stacking code; also selects the flavor of unidentified kinds
    pub stack_code: u8,

    /// Number of items created together
    pub group_size: u8,

    /// Weight in tenths of a pound
    pub weight: u16,

    pub to_hit: i16,
    pub to_damage: i16,
    /// Base armor class
    pub ac: i16,
    pub to_ac: i16,

    pub damage: Dice,

    /// Minimum dungeon depth, or disarm difficulty for traps
    pub depth: u8,

    pub color: Color,
}

impl ObjectDef {
    /// Inventory placeholder used when a lookup misses
    pub const NOTHING: ObjectDef = ObjectDef {
        name: "nothing",
        flags: 0,
        category: ItemCategory::Nothing,
        symbol: ' ',
        misc_use: 0,
        cost: 0,
        stack_code: 64,
        group_size: 0,
        weight: 0,
        to_hit: 0,
        to_damage: 0,
        ac: 0,
        to_ac: 0,
        damage: Dice::new(0, 0),
        depth: 0,
        color: Color::RED,
    };

    /// Name with the article and plural markers removed
    pub fn plain_name(&self) -> String {
        self.name.trim_start_matches("& ").replace('~', "")
    }
}

/// A catalog row bound to its registry id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ObjectTemplate {
    pub id: TemplateId,
    pub def: ObjectDef,
}

impl ObjectTemplate {
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub fn category(&self) -> ItemCategory {
        self.def.category
    }

    pub fn stack_code(&self) -> u8 {
        self.def.stack_code
    }

    pub fn stack_policy(&self) -> StackPolicy {
        StackPolicy::from_code(self.def.stack_code)
    }

    /// Typed view of the ability word
    pub fn effects(&self) -> Effects {
        Effects::decode(self.def.category, self.def.flags)
    }

    /// Flavor pool and slot used while this kind is unidentified
    pub fn flavor(&self) -> Option<(FlavorKind, usize)> {
        FlavorKind::for_template(self.def.category, self.def.stack_code)
    }

    /// Whether the template is the "nothing" placeholder
    pub fn is_nothing(&self) -> bool {
        self.def.category == ItemCategory::Nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_display() {
        assert_eq!(Dice::new(1, 4).to_string(), "1d4");
        assert_eq!(Dice::new(3, 6).max(), 18);
    }

    #[test]
    fn test_plain_name() {
        let def = ObjectDef {
            name: "& Ration~ of Food",
            ..ObjectDef::NOTHING
        };
        assert_eq!(def.plain_name(), "Ration of Food");
    }

    #[test]
    fn test_nothing_template() {
        let template = ObjectTemplate {
            id: TemplateId(417),
            def: ObjectDef::NOTHING,
        };
        assert!(template.is_nothing());
        assert_eq!(template.id.to_string(), "#417");
        assert!(template.flavor().is_none());
    }
}
