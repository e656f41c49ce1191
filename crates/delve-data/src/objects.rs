//! Object catalog
//!
//! Every object the game knows about, in catalog order. A row's position
//! is its [`TemplateId`](delve_core::object::TemplateId) once loaded.
//!
//! Columns: name, ability word, category, symbol, misc_use, cost,
//! stack code, group size, weight, to-hit, to-damage, ac, to-ac, damage
//! dice, depth, color.

use delve_core::Color;
use delve_core::object::{Dice, ItemCategory, ObjectDef};

/// Number of rows that can be generated on a dungeon level
pub const MAX_DUNGEON_OBJECTS: usize = 344;

/// Index of the inventory placeholder
pub const OBJ_NOTHING: usize = 417;

/// Index of the opened, looted chest
pub const OBJ_RUINED_CHEST: usize = 418;

macro_rules! object {
    (
        $name:expr, $flags:expr, $category:ident, $symbol:expr, $misc:expr, $cost:expr,
        $stack:expr, $group:expr, $weight:expr, $hit:expr, $dam:expr, $ac:expr, $to_ac:expr,
        ($dice:expr, $sides:expr), $depth:expr, $color:expr $(,)?
    ) => {
        ObjectDef {
            name: $name,
            flags: $flags,
            category: ItemCategory::$category,
            symbol: $symbol,
            misc_use: $misc,
            cost: $cost,
            stack_code: $stack,
            group_size: $group,
            weight: $weight,
            to_hit: $hit,
            to_damage: $dam,
            ac: $ac,
            to_ac: $to_ac,
            damage: Dice::new($dice, $sides),
            depth: $depth,
            color: $color,
        }
    };
}

/// All objects in catalog order
pub static OBJECTS: &[ObjectDef] = &[
    // Dungeon items
    object!("Poison", 0x00000001, Food, ',', 500, 0, 64, 1, 1, 0, 0, 0, 0, (0, 0), 7, Color::FOOD),
    object!("Blindness", 0x00000002, Food, ',', 500, 0, 65, 1, 1, 0, 0, 0, 0, (0, 0), 9, Color::FOOD),
    object!("Paranoia", 0x00000004, Food, ',', 500, 0, 66, 1, 1, 0, 0, 0, 0, (0, 0), 9, Color::FOOD),
    object!("Confusion", 0x00000008, Food, ',', 500, 0, 67, 1, 1, 0, 0, 0, 0, (0, 0), 7, Color::FOOD),
    object!("Hallucination", 0x00000010, Food, ',', 500, 0, 68, 1, 1, 0, 0, 0, 0, (0, 0), 13, Color::FOOD),
    object!("Cure Poison", 0x00000020, Food, ',', 500, 60, 69, 1, 1, 0, 0, 0, 0, (0, 0), 8, Color::FOOD),
    object!("Cure Blindness", 0x00000040, Food, ',', 500, 50, 70, 1, 1, 0, 0, 0, 0, (0, 0), 10, Color::FOOD),
    object!("Cure Paranoia", 0x00000080, Food, ',', 500, 25, 71, 1, 1, 0, 0, 0, 0, (0, 0), 12, Color::FOOD),
    object!("Cure Confusion", 0x00000100, Food, ',', 500, 50, 72, 1, 1, 0, 0, 0, 0, (0, 0), 6, Color::FOOD),
    object!("Weakness", 0x04000200, Food, ',', 500, 0, 73, 1, 1, 0, 0, 0, 0, (0, 0), 7, Color::FOOD),
    object!("Unhealth", 0x04000400, Food, ',', 500, 50, 74, 1, 1, 0, 0, 0, 0, (10, 10), 15, Color::FOOD),
    object!("Restore Constitution", 0x00010000, Food, ',', 500, 350, 75, 1, 1, 0, 0, 0, 0, (0, 0), 20, Color::FOOD),
    object!("First-Aid", 0x00200000, Food, ',', 500, 5, 76, 1, 1, 0, 0, 0, 0, (0, 0), 6, Color::FOOD),
    object!("Minor Cures", 0x00400000, Food, ',', 500, 20, 77, 1, 1, 0, 0, 0, 0, (0, 0), 7, Color::FOOD),
    object!("Light Cures", 0x00800000, Food, ',', 500, 30, 78, 1, 1, 0, 0, 0, 0, (0, 0), 10, Color::FOOD),
    object!("Restoration", 0x001F8000, Food, ',', 500, 1000, 79, 1, 1, 0, 0, 0, 0, (0, 0), 30, Color::FOOD),
    object!("Poison", 0x00000001, Food, ',', 1200, 0, 80, 1, 1, 0, 0, 0, 0, (0, 0), 15, Color::FOOD),
    object!("Hallucination", 0x00000010, Food, ',', 1200, 0, 81, 1, 1, 0, 0, 0, 0, (0, 0), 18, Color::FOOD),
    object!("Cure Poison", 0x00000020, Food, ',', 1200, 75, 82, 1, 1, 0, 0, 0, 0, (0, 0), 19, Color::FOOD),
    object!("Unhealth", 0x04000400, Food, ',', 1200, 75, 83, 1, 1, 0, 0, 0, 0, (10, 12), 28, Color::FOOD),
    object!("Major Cures", 0x02000000, Food, ',', 1200, 75, 84, 1, 2, 0, 0, 0, 0, (0, 0), 16, Color::FOOD),
    object!("& Ration~ of Food", 0x00000000, Food, ',', 5000, 3, 90, 1, 10, 0, 0, 0, 0, (0, 0), 0, Color::FOOD),
    object!("& Ration~ of Food", 0x00000000, Food, ',', 5000, 3, 90, 1, 10, 0, 0, 0, 0, (0, 0), 5, Color::FOOD),
    object!("& Ration~ of Food", 0x00000000, Food, ',', 5000, 3, 90, 1, 10, 0, 0, 0, 0, (0, 0), 10, Color::FOOD),
    object!("& Slime Mold~", 0x00000000, Food, ',', 3000, 2, 91, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::SLIMY),
    object!("& Piece~ of Elvish Waybread", 0x02000020, Food, ',', 7500, 25, 92, 1, 3, 0, 0, 0, 0, (0, 0), 6, Color::CREAM),
    object!("& Piece~ of Elvish Waybread", 0x02000020, Food, ',', 7500, 25, 92, 1, 3, 0, 0, 0, 0, (0, 0), 12, Color::CREAM),
    object!("& Piece~ of Elvish Waybread", 0x02000020, Food, ',', 7500, 25, 92, 1, 3, 0, 0, 0, 0, (0, 0), 20, Color::CREAM),
    object!("& Dagger (Main Gauche)", 0x00000000, Sword, '|', 0, 25, 1, 1, 30, 0, 0, 0, 0, (1, 5), 2, Color::IRON),
    object!("& Dagger (Misericorde)", 0x00000000, Sword, '|', 0, 10, 2, 1, 15, 0, 0, 0, 0, (1, 4), 0, Color::IRON),
    object!("& Dagger (Stiletto)", 0x00000000, Sword, '|', 0, 10, 3, 1, 12, 0, 0, 0, 0, (1, 4), 0, Color::STEEL),
    object!("& Dagger (Bodkin)", 0x00000000, Sword, '|', 0, 10, 4, 1, 20, 0, 0, 0, 0, (1, 4), 1, Color::IRON),
    object!("& Broken Dagger", 0x00000000, Sword, '|', 0, 0, 5, 1, 15, -2, -2, 0, 0, (1, 1), 0, Color::CAST_IRON),
    object!("& Backsword", 0x00000000, Sword, '|', 0, 150, 6, 1, 95, 0, 0, 0, 0, (1, 9), 7, Color::IRON),
    object!("& Bastard Sword", 0x00000000, Sword, '|', 0, 350, 7, 1, 140, 0, 0, 0, 0, (3, 4), 14, Color::STEEL),
    object!("& Thrusting Sword (Bilbo)", 0x00000000, Sword, '|', 0, 60, 8, 1, 80, 0, 0, 0, 0, (1, 6), 4, Color::STEEL),
    object!("& Thrusting Sword (Baselard)", 0x00000000, Sword, '|', 0, 80, 9, 1, 100, 0, 0, 0, 0, (1, 7), 5, Color::STEEL),
    object!("& Broadsword", 0x00000000, Sword, '|', 0, 255, 10, 1, 150, 0, 0, 0, 0, (2, 5), 9, Color::STEEL),
    object!("& Two-Handed Sword (Claymore)", 0x00000000, Sword, '|', 0, 775, 11, 1, 200, 0, 0, 0, 0, (3, 6), 30, Color::SILVER),
    object!("& Cutlass", 0x00000000, Sword, '|', 0, 85, 12, 1, 110, 0, 0, 0, 0, (1, 7), 7, Color::IRON),
    object!("& Two-Handed Sword (Espadon)", 0x00000000, Sword, '|', 0, 655, 13, 1, 180, 0, 0, 0, 0, (3, 6), 35, Color::SILVER),
    object!("& Executioner's Sword", 0x00000000, Sword, '|', 0, 850, 14, 1, 260, 0, 0, 0, 0, (4, 5), 40, Color::SILVER),
    object!("& Two-Handed Sword (Flamberge)", 0x00000000, Sword, '|', 0, 1000, 15, 1, 240, 0, 0, 0, 0, (4, 5), 45, Color::SILVER),
    object!("& Foil", 0x00000000, Sword, '|', 0, 35, 16, 1, 30, 0, 0, 0, 0, (1, 5), 2, Color::STEEL),
    object!("& Katana", 0x00000000, Sword, '|', 0, 400, 17, 1, 120, 0, 0, 0, 0, (3, 4), 18, Color::STEEL),
    object!("& Longsword", 0x00000000, Sword, '|', 0, 200, 18, 1, 130, 0, 0, 0, 0, (1, 10), 12, Color::STEEL),
    object!("& Two-Handed Sword (No-Dachi)", 0x00000000, Sword, '|', 0, 675, 19, 1, 200, 0, 0, 0, 0, (4, 4), 45, Color::SILVER),
    object!("& Rapier", 0x00000000, Sword, '|', 0, 42, 20, 1, 40, 0, 0, 0, 0, (1, 6), 4, Color::STEEL),
    object!("& Sabre", 0x00000000, Sword, '|', 0, 50, 21, 1, 50, 0, 0, 0, 0, (1, 7), 5, Color::IRON),
    object!("& Small Sword", 0x00000000, Sword, '|', 0, 48, 22, 1, 75, 0, 0, 0, 0, (1, 6), 5, Color::STEEL),
    object!("& Two-Handed Sword (Zweihander)", 0x00000000, Sword, '|', 0, 1500, 23, 1, 280, 0, 0, 0, 0, (4, 6), 50, Color::SILVER),
    object!("& Broken Sword", 0x00000000, Sword, '|', 0, 0, 24, 1, 75, -2, -2, 0, 0, (1, 1), 0, Color::CAST_IRON),
    object!("& Ball and Chain", 0x00000000, Hafted, '\\', 0, 200, 1, 1, 150, 0, 0, 0, 0, (2, 4), 20, Color::CAST_IRON),
    object!("& Cat-o'-Nine-Tails", 0x00000000, Hafted, '\\', 0, 14, 2, 1, 40, 0, 0, 0, 0, (1, 4), 3, Color::CORD),
    object!("& Wooden Club", 0x00000000, Hafted, '\\', 0, 10, 3, 1, 100, 0, 0, 0, 0, (1, 3), 0, Color::WOODEN),
    object!("& Flail", 0x00000000, Hafted, '\\', 0, 353, 4, 1, 150, 0, 0, 0, 0, (2, 6), 12, Color::WOODEN),
    object!("& Two-Handed Great Flail", 0x00000000, Hafted, '\\', 0, 590, 5, 1, 280, 0, 0, 0, 0, (3, 6), 45, Color::WOODEN),
    object!("& Morningstar", 0x00000000, Hafted, '\\', 0, 396, 6, 1, 150, 0, 0, 0, 0, (2, 6), 10, Color::STEEL),
    object!("& Mace", 0x00000000, Hafted, '\\', 0, 130, 7, 1, 120, 0, 0, 0, 0, (2, 4), 6, Color::IRON),
    object!("& War Hammer", 0x00000000, Hafted, '\\', 0, 225, 8, 1, 120, 0, 0, 0, 0, (3, 3), 5, Color::CAST_IRON),
    object!("& Lead-Filled Mace", 0x00000000, Hafted, '\\', 0, 502, 9, 1, 180, 0, 0, 0, 0, (3, 4), 15, Color::CAST_IRON),
    object!("& Awl-Pike", 0x00000000, Polearm, '/', 0, 200, 1, 1, 160, 0, 0, 0, 0, (1, 8), 8, Color::WOODEN),
    object!("& Beaked Axe", 0x00000000, Polearm, '/', 0, 408, 2, 1, 180, 0, 0, 0, 0, (2, 6), 15, Color::WOODEN),
    object!("& Fauchard", 0x00000000, Polearm, '/', 0, 326, 3, 1, 170, 0, 0, 0, 0, (1, 10), 17, Color::WOODEN),
    object!("& Glaive", 0x00000000, Polearm, '/', 0, 363, 4, 1, 190, 0, 0, 0, 0, (2, 6), 20, Color::WOODEN),
    object!("& Halberd", 0x00000000, Polearm, '/', 0, 430, 5, 1, 190, 0, 0, 0, 0, (3, 4), 22, Color::WOODEN),
    object!("& Lucerne Hammer", 0x00000000, Polearm, '/', 0, 376, 6, 1, 120, 0, 0, 0, 0, (2, 5), 11, Color::WOODEN),
    object!("& Pike", 0x00000000, Polearm, '/', 0, 358, 7, 1, 160, 0, 0, 0, 0, (2, 5), 15, Color::WOODEN),
    object!("& Spear", 0x00000000, Polearm, '/', 0, 36, 8, 1, 50, 0, 0, 0, 0, (1, 6), 5, Color::WOODEN),
    object!("& Lance", 0x00000000, Polearm, '/', 0, 230, 9, 1, 300, 0, 0, 0, 0, (2, 8), 10, Color::WOODEN),
    object!("& Javelin", 0x00000000, Polearm, '/', 0, 18, 10, 1, 30, 0, 0, 0, 0, (1, 4), 4, Color::WOODEN),
    object!("& Battle Axe (Balestarius)", 0x00000000, Polearm, '/', 0, 500, 11, 1, 180, 0, 0, 0, 0, (2, 8), 30, Color::WOODEN),
    object!("& Battle Axe (European)", 0x00000000, Polearm, '/', 0, 334, 12, 1, 170, 0, 0, 0, 0, (3, 4), 13, Color::WOODEN),
    object!("& Broad Axe", 0x00000000, Polearm, '/', 0, 304, 13, 1, 160, 0, 0, 0, 0, (2, 6), 17, Color::WOODEN),
    object!("& Short Bow", 0x00000000, Bow, '}', 2, 50, 1, 1, 30, 0, 0, 0, 0, (0, 0), 3, Color::WOODEN),
    object!("& Long Bow", 0x00000000, Bow, '}', 3, 120, 2, 1, 40, 0, 0, 0, 0, (0, 0), 10, Color::WOODEN),
    object!("& Composite Bow", 0x00000000, Bow, '}', 4, 240, 3, 1, 40, 0, 0, 0, 0, (0, 0), 40, Color::WOODEN),
    object!("& Light Crossbow", 0x00000000, Bow, '}', 5, 140, 10, 1, 110, 0, 0, 0, 0, (0, 0), 15, Color::WOODEN),
    object!("& Heavy Crossbow", 0x00000000, Bow, '}', 6, 300, 11, 1, 200, 0, 0, 0, 0, (1, 1), 30, Color::WOODEN),
    object!("& Sling", 0x00000000, Bow, '}', 1, 5, 20, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::LEATHER),
    object!("& Arrow~", 0x00000000, Arrow, '{', 0, 1, 193, 1, 2, 0, 0, 0, 0, (1, 4), 2, Color::WOODEN),
    object!("& Bolt~", 0x00000000, Bolt, '{', 0, 2, 193, 1, 3, 0, 0, 0, 0, (1, 5), 2, Color::WOODEN),
    object!("& Rounded Pebble~", 0x00000000, SlingAmmo, '{', 0, 1, 193, 1, 4, 0, 0, 0, 0, (1, 2), 0, Color::STONE),
    object!("& Iron Shot~", 0x00000000, SlingAmmo, '{', 0, 2, 194, 1, 5, 0, 0, 0, 0, (1, 3), 3, Color::IRON),
    object!("& Iron Spike~", 0x00000000, Spike, '~', 0, 1, 193, 1, 10, 0, 0, 0, 0, (1, 1), 1, Color::IRON),
    object!("& Brass Lantern~", 0x00000000, Light, '~', 7500, 35, 1, 1, 50, 0, 0, 0, 0, (1, 1), 1, Color::BRASS),
    object!("& Wooden Torch~", 0x00000000, Light, '~', 4000, 2, 193, 1, 30, 0, 0, 0, 0, (1, 1), 1, Color::WOODEN),
    object!("& Orcish Pick", 0x20000000, Digging, '\\', 2, 500, 2, 1, 180, 0, 0, 0, 0, (1, 3), 20, Color::IRON),
    object!("& Dwarven Pick", 0x20000000, Digging, '\\', 3, 1200, 3, 1, 200, 0, 0, 0, 0, (1, 4), 50, Color::MITHRIL),
    object!("& Gnomish Shovel", 0x20000000, Digging, '\\', 1, 100, 5, 1, 50, 0, 0, 0, 0, (1, 2), 20, Color::STEEL),
    object!("& Dwarven Shovel", 0x20000000, Digging, '\\', 2, 250, 6, 1, 120, 0, 0, 0, 0, (1, 3), 40, Color::MITHRIL),
    object!("& Pair of Soft Leather Shoes", 0x00000000, Boots, ']', 0, 4, 1, 1, 5, 0, 0, 1, 0, (0, 0), 1, Color::LEATHER),
    object!("& Pair of Soft Leather Boots", 0x00000000, Boots, ']', 0, 7, 2, 1, 20, 0, 0, 2, 0, (1, 1), 4, Color::LEATHER),
    object!("& Pair of Hard Leather Boots", 0x00000000, Boots, ']', 0, 12, 3, 1, 40, 0, 0, 3, 0, (1, 1), 6, Color::LEATHER),
    object!("& Soft Leather Cap", 0x00000000, Helm, ']', 0, 4, 1, 1, 10, 0, 0, 1, 0, (0, 0), 2, Color::LEATHER),
    object!("& Hard Leather Cap", 0x00000000, Helm, ']', 0, 12, 2, 1, 15, 0, 0, 2, 0, (0, 0), 4, Color::LEATHER),
    object!("& Metal Cap", 0x00000000, Helm, ']', 0, 30, 3, 1, 20, 0, 0, 3, 0, (1, 1), 7, Color::IRON),
    object!("& Iron Helm", 0x00000000, Helm, ']', 0, 75, 4, 1, 75, 0, 0, 5, 0, (1, 3), 20, Color::IRON),
    object!("& Steel Helm", 0x00000000, Helm, ']', 0, 200, 5, 1, 60, 0, 0, 6, 0, (1, 3), 40, Color::STEEL),
    object!("& Silver Crown", 0x00000000, Helm, ']', 0, 500, 6, 1, 20, 0, 0, 0, 0, (1, 1), 44, Color::SILVER),
    object!("& Golden Crown", 0x00000000, Helm, ']', 0, 1000, 7, 1, 30, 0, 0, 0, 0, (1, 2), 47, Color::GOLD),
    object!("& Jewel-Encrusted Crown", 0x00000000, Helm, ']', 0, 2000, 8, 1, 40, 0, 0, 0, 0, (1, 3), 50, Color::AMETHYST),
    object!("& Robe", 0x00000000, SoftArmor, '(', 0, 4, 1, 1, 20, 0, 0, 2, 0, (0, 0), 1, Color::DARK_BLUE),
    object!("Soft Leather Armor", 0x00000000, SoftArmor, '(', 0, 18, 2, 1, 80, 0, 0, 4, 0, (0, 0), 2, Color::LEATHER),
    object!("Soft Studded Leather", 0x00000000, SoftArmor, '(', 0, 35, 3, 1, 90, 0, 0, 5, 0, (1, 1), 3, Color::LEATHER),
    object!("Hard Leather Armor", 0x00000000, SoftArmor, '(', 0, 55, 4, 1, 100, -1, 0, 6, 0, (1, 1), 5, Color::LEATHER),
    object!("Hard Studded Leather", 0x00000000, SoftArmor, '(', 0, 100, 5, 1, 110, -1, 0, 7, 0, (1, 2), 7, Color::LEATHER),
    object!("Woven Cord Armor", 0x00000000, SoftArmor, '(', 0, 45, 6, 1, 150, -1, 0, 6, 0, (0, 0), 7, Color::CORD),
    object!("Soft Leather Ring Mail", 0x00000000, SoftArmor, '(', 0, 160, 7, 1, 130, -1, 0, 6, 0, (1, 2), 10, Color::LEATHER),
    object!("Hard Leather Ring Mail", 0x00000000, SoftArmor, '(', 0, 230, 8, 1, 150, -2, 0, 8, 0, (1, 3), 12, Color::LEATHER),
    object!("Leather Scale Mail", 0x00000000, SoftArmor, '(', 0, 330, 9, 1, 140, -1, 0, 11, 0, (1, 1), 14, Color::LEATHER),
    object!("Metal Scale Mail", 0x00000000, HardArmor, '[', 0, 430, 1, 1, 250, -2, 0, 13, 0, (1, 4), 24, Color::IRON),
    object!("Chain Mail", 0x00000000, HardArmor, '[', 0, 530, 2, 1, 220, -2, 0, 14, 0, (1, 4), 26, Color::IRON),
    object!("Rusty Chain Mail", 0x00000000, HardArmor, '[', 0, 0, 3, 1, 220, -5, 0, 14, -8, (1, 4), 26, Color::RUSTY),
    object!("Double Chain Mail", 0x00000000, HardArmor, '[', 0, 630, 4, 1, 260, -2, 0, 15, 0, (1, 4), 28, Color::IRON),
    object!("Augmented Chain Mail", 0x00000000, HardArmor, '[', 0, 675, 5, 1, 270, -2, 0, 16, 0, (1, 4), 30, Color::IRON),
    object!("Bar Chain Mail", 0x00000000, HardArmor, '[', 0, 720, 6, 1, 280, -2, 0, 18, 0, (1, 4), 34, Color::IRON),
    object!("Metal Brigandine Armor", 0x00000000, HardArmor, '[', 0, 775, 7, 1, 290, -3, 0, 19, 0, (1, 4), 36, Color::STEEL),
    object!("Laminated Armor", 0x00000000, HardArmor, '[', 0, 825, 8, 1, 300, -3, 0, 20, 0, (1, 4), 38, Color::STEEL),
    object!("Partial Plate Armor", 0x00000000, HardArmor, '[', 0, 900, 9, 1, 320, -3, 0, 22, 0, (1, 6), 42, Color::STEEL),
    object!("Metal Lamellar Armor", 0x00000000, HardArmor, '[', 0, 950, 10, 1, 340, -3, 0, 23, 0, (1, 6), 44, Color::STEEL),
    object!("Full Plate Armor", 0x00000000, HardArmor, '[', 0, 1050, 11, 1, 380, -3, 0, 25, 0, (2, 4), 48, Color::SILVER),
    object!("Ribbed Plate Armor", 0x00000000, HardArmor, '[', 0, 1200, 12, 1, 380, -3, 0, 28, 0, (2, 4), 50, Color::SILVER),
    object!("& Cloak", 0x00000000, Cloak, '(', 0, 3, 1, 1, 10, 0, 0, 1, 0, (0, 0), 1, Color::DARK_GREEN),
    object!("& Set of Leather Gloves", 0x00000000, Gloves, ']', 0, 3, 1, 1, 5, 0, 0, 1, 0, (0, 0), 1, Color::LEATHER),
    object!("& Set of Gauntlets", 0x00000000, Gloves, ']', 0, 35, 2, 1, 25, 0, 0, 2, 0, (1, 1), 12, Color::IRON),
    object!("& Small Leather Shield", 0x00000000, Shield, ')', 0, 30, 1, 1, 50, 0, 0, 2, 0, (1, 1), 3, Color::LEATHER),
    object!("& Medium Leather Shield", 0x00000000, Shield, ')', 0, 60, 2, 1, 75, 0, 0, 3, 0, (1, 2), 8, Color::LEATHER),
    object!("& Large Leather Shield", 0x00000000, Shield, ')', 0, 120, 3, 1, 100, 0, 0, 4, 0, (1, 2), 15, Color::LEATHER),
    object!("& Small Metal Shield", 0x00000000, Shield, ')', 0, 50, 4, 1, 65, 0, 0, 3, 0, (1, 2), 10, Color::IRON),
    object!("& Medium Metal Shield", 0x00000000, Shield, ')', 0, 125, 5, 1, 90, 0, 0, 4, 0, (1, 3), 20, Color::IRON),
    object!("& Large Metal Shield", 0x00000000, Shield, ')', 0, 200, 6, 1, 120, 0, 0, 5, 0, (1, 3), 30, Color::IRON),
    object!("Strength", 0x00000001, Ring, '=', 0, 400, 0, 1, 2, 0, 0, 0, 0, (0, 0), 30, Color::GOLD),
    object!("Dexterity", 0x00000008, Ring, '=', 0, 400, 1, 1, 2, 0, 0, 0, 0, (0, 0), 30, Color::GOLD),
    object!("Constitution", 0x00000010, Ring, '=', 0, 400, 2, 1, 2, 0, 0, 0, 0, (0, 0), 30, Color::GOLD),
    object!("Intelligence", 0x00000002, Ring, '=', 0, 400, 3, 1, 2, 0, 0, 0, 0, (0, 0), 30, Color::GOLD),
    object!("Speed", 0x00001000, Ring, '=', 0, 3000, 4, 1, 2, 0, 0, 0, 0, (0, 0), 50, Color::GOLD),
    object!("Searching", 0x00000040, Ring, '=', 0, 250, 5, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Teleportation", 0x80000400, Ring, '=', 0, 0, 6, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Slow Digestion", 0x00000080, Ring, '=', 0, 200, 7, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Resist Fire", 0x00080000, Ring, '=', 0, 250, 8, 1, 2, 0, 0, 0, 0, (0, 0), 14, Color::GOLD),
    object!("Resist Cold", 0x00200000, Ring, '=', 0, 250, 9, 1, 2, 0, 0, 0, 0, (0, 0), 14, Color::GOLD),
    object!("Feather Falling", 0x04000000, Ring, '=', 0, 200, 10, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Adornment", 0x00000000, Ring, '=', 0, 20, 11, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("& Arrow~", 0x00000000, Arrow, '{', 0, 1, 193, 1, 2, 0, 0, 0, 0, (1, 4), 15, Color::WOODEN),
    object!("Weakness", 0x80000001, Ring, '=', -5, 0, 13, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Lordly Protection (FIRE)", 0x00080000, Ring, '=', 0, 1200, 14, 1, 2, 0, 0, 0, 5, (0, 0), 50, Color::GOLD),
    object!("Lordly Protection (ACID)", 0x00100000, Ring, '=', 0, 1200, 15, 1, 2, 0, 0, 0, 5, (0, 0), 50, Color::GOLD),
    object!("Lordly Protection (COLD)", 0x00200000, Ring, '=', 0, 1200, 16, 1, 2, 0, 0, 0, 5, (0, 0), 50, Color::GOLD),
    object!("WOE", 0x80000644, Ring, '=', -5, 0, 17, 1, 2, 0, 0, 0, -3, (0, 0), 50, Color::GOLD),
    object!("Stupidity", 0x80000002, Ring, '=', -5, 0, 18, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Increase Damage", 0x00000000, Ring, '=', 0, 100, 19, 1, 2, 0, 0, 0, 0, (0, 0), 20, Color::GOLD),
    object!("Increase To-Hit", 0x00000000, Ring, '=', 0, 100, 20, 1, 2, 0, 0, 0, 0, (0, 0), 20, Color::GOLD),
    object!("Protection", 0x00000000, Ring, '=', 0, 100, 21, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("Aggravate Monster", 0x80000200, Ring, '=', 0, 0, 22, 1, 2, 0, 0, 0, 0, (0, 0), 7, Color::GOLD),
    object!("See Invisible", 0x01000000, Ring, '=', 0, 500, 23, 1, 2, 0, 0, 0, 0, (0, 0), 40, Color::GOLD),
    object!("Sustain Strength", 0x00400000, Ring, '=', 1, 750, 24, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Sustain Intelligence", 0x00400000, Ring, '=', 2, 600, 25, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Sustain Wisdom", 0x00400000, Ring, '=', 3, 600, 26, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Sustain Constitution", 0x00400000, Ring, '=', 4, 750, 27, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Sustain Dexterity", 0x00400000, Ring, '=', 5, 750, 28, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Sustain Charisma", 0x00400000, Ring, '=', 6, 500, 29, 1, 2, 0, 0, 0, 0, (0, 0), 44, Color::GOLD),
    object!("Slaying", 0x00000000, Ring, '=', 0, 1000, 30, 1, 2, 0, 0, 0, 0, (0, 0), 50, Color::GOLD),
    object!("Wisdom", 0x00000004, Amulet, '"', 0, 300, 0, 1, 3, 0, 0, 0, 0, (0, 0), 20, Color::SILVER),
    object!("Charisma", 0x00000020, Amulet, '"', 0, 250, 1, 1, 3, 0, 0, 0, 0, (0, 0), 20, Color::SILVER),
    object!("Searching", 0x00000040, Amulet, '"', 0, 250, 2, 1, 3, 0, 0, 0, 0, (0, 0), 14, Color::SILVER),
    object!("Teleportation", 0x80000400, Amulet, '"', 0, 0, 3, 1, 3, 0, 0, 0, 0, (0, 0), 14, Color::SILVER),
    object!("Slow Digestion", 0x00000080, Amulet, '"', 0, 200, 4, 1, 3, 0, 0, 0, 0, (0, 0), 14, Color::SILVER),
    object!("Resist Acid", 0x00100000, Amulet, '"', 0, 250, 5, 1, 3, 0, 0, 0, 0, (0, 0), 24, Color::SILVER),
    object!("Adornment", 0x00000000, Amulet, '"', 0, 20, 6, 1, 3, 0, 0, 0, 0, (0, 0), 16, Color::SILVER),
    object!("& Bolt~", 0x00000000, Bolt, '{', 0, 2, 193, 1, 3, 0, 0, 0, 0, (1, 5), 25, Color::WOODEN),
    object!("the Magi", 0x01800040, Amulet, '"', 0, 5000, 8, 1, 3, 0, 0, 0, 3, (0, 0), 50, Color::SILVER),
    object!("DOOM", 0x8000007F, Amulet, '"', -5, 0, 9, 1, 3, 0, 0, 0, 0, (0, 0), 50, Color::SILVER),
    object!("Enchant Weapon To-Hit", 0x00000001, Scroll1, '?', 0, 125, 64, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Enchant Weapon To-Dam", 0x00000002, Scroll1, '?', 0, 125, 65, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Enchant Armor", 0x00000004, Scroll1, '?', 0, 125, 66, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Identify", 0x00000008, Scroll1, '?', 0, 50, 67, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Identify", 0x00000008, Scroll1, '?', 0, 50, 67, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Identify", 0x00000008, Scroll1, '?', 0, 50, 67, 1, 5, 0, 0, 0, 0, (0, 0), 10, Color::PAPER),
    object!("Identify", 0x00000008, Scroll1, '?', 0, 50, 67, 1, 5, 0, 0, 0, 0, (0, 0), 30, Color::PAPER),
    object!("Remove Curse", 0x00000010, Scroll1, '?', 0, 100, 68, 1, 5, 0, 0, 0, 0, (0, 0), 7, Color::PAPER),
    object!("Light", 0x00000020, Scroll1, '?', 0, 15, 69, 1, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Light", 0x00000020, Scroll1, '?', 0, 15, 69, 1, 5, 0, 0, 0, 0, (0, 0), 3, Color::PAPER),
    object!("Light", 0x00000020, Scroll1, '?', 0, 15, 69, 1, 5, 0, 0, 0, 0, (0, 0), 7, Color::PAPER),
    object!("Summon Monster", 0x00000040, Scroll1, '?', 0, 0, 70, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Phase Door", 0x00000080, Scroll1, '?', 0, 15, 71, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Teleport", 0x00000100, Scroll1, '?', 0, 40, 72, 1, 5, 0, 0, 0, 0, (0, 0), 10, Color::PAPER),
    object!("Teleport Level", 0x00000200, Scroll1, '?', 0, 50, 73, 1, 5, 0, 0, 0, 0, (0, 0), 20, Color::PAPER),
    object!("Monster Confusion", 0x00000400, Scroll1, '?', 0, 30, 74, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Magic Mapping", 0x00000800, Scroll1, '?', 0, 40, 75, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Sleep Monster", 0x00001000, Scroll1, '?', 0, 35, 76, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Rune of Protection", 0x00002000, Scroll1, '?', 0, 500, 77, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("Treasure Detection", 0x00004000, Scroll1, '?', 0, 15, 78, 1, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Object Detection", 0x00008000, Scroll1, '?', 0, 15, 79, 1, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Trap Detection", 0x00010000, Scroll1, '?', 0, 35, 80, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Trap Detection", 0x00010000, Scroll1, '?', 0, 35, 80, 1, 5, 0, 0, 0, 0, (0, 0), 8, Color::PAPER),
    object!("Trap Detection", 0x00010000, Scroll1, '?', 0, 35, 80, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Door/Stair Location", 0x00020000, Scroll1, '?', 0, 35, 81, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Door/Stair Location", 0x00020000, Scroll1, '?', 0, 35, 81, 1, 5, 0, 0, 0, 0, (0, 0), 10, Color::PAPER),
    object!("Door/Stair Location", 0x00020000, Scroll1, '?', 0, 35, 81, 1, 5, 0, 0, 0, 0, (0, 0), 15, Color::PAPER),
    object!("Mass Genocide", 0x00040000, Scroll1, '?', 0, 1000, 82, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("Detect Invisible", 0x00080000, Scroll1, '?', 0, 15, 83, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Aggravate Monster", 0x00100000, Scroll1, '?', 0, 0, 84, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Trap Creation", 0x00200000, Scroll1, '?', 0, 0, 85, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Trap/Door Destruction", 0x00400000, Scroll1, '?', 0, 50, 86, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Door Creation", 0x00800000, Scroll1, '?', 0, 100, 87, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Recharging", 0x01000000, Scroll1, '?', 0, 200, 88, 1, 5, 0, 0, 0, 0, (0, 0), 40, Color::PAPER),
    object!("Genocide", 0x02000000, Scroll1, '?', 0, 750, 89, 1, 5, 0, 0, 0, 0, (0, 0), 35, Color::PAPER),
    object!("Darkness", 0x04000000, Scroll1, '?', 0, 0, 90, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Protection from Evil", 0x08000000, Scroll1, '?', 0, 100, 91, 1, 5, 0, 0, 0, 0, (0, 0), 30, Color::PAPER),
    object!("Create Food", 0x10000000, Scroll1, '?', 0, 10, 92, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("Dispel Undead", 0x20000000, Scroll1, '?', 0, 200, 93, 1, 5, 0, 0, 0, 0, (0, 0), 40, Color::PAPER),
    object!("*Enchant Weapon*", 0x00000001, Scroll2, '?', 0, 500, 94, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("Curse Weapon", 0x00000002, Scroll2, '?', 0, 0, 95, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("*Enchant Armor*", 0x00000004, Scroll2, '?', 0, 500, 96, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("Curse Armor", 0x00000008, Scroll2, '?', 0, 0, 97, 1, 5, 0, 0, 0, 0, (0, 0), 50, Color::PAPER),
    object!("Summon Undead", 0x00000010, Scroll2, '?', 0, 0, 98, 1, 5, 0, 0, 0, 0, (0, 0), 15, Color::PAPER),
    object!("Blessing", 0x00000020, Scroll2, '?', 0, 15, 99, 1, 5, 0, 0, 0, 0, (0, 0), 1, Color::PAPER),
    object!("Holy Chant", 0x00000040, Scroll2, '?', 0, 40, 100, 1, 5, 0, 0, 0, 0, (0, 0), 12, Color::PAPER),
    object!("Holy Prayer", 0x00000080, Scroll2, '?', 0, 80, 101, 1, 5, 0, 0, 0, 0, (0, 0), 24, Color::PAPER),
    object!("Word-of-Recall", 0x00000100, Scroll2, '?', 0, 150, 102, 1, 5, 0, 0, 0, 0, (0, 0), 5, Color::PAPER),
    object!("*Destruction*", 0x00000200, Scroll2, '?', 0, 750, 103, 1, 5, 0, 0, 0, 0, (0, 0), 40, Color::PAPER),
    object!("Slime Mold Juice", 0x30000000, Potion1, '!', 400, 2, 64, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::ICKY_GREEN),
    object!("Apple Juice", 0x00000000, Potion1, '!', 250, 1, 65, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::LIGHT_BROWN),
    object!("Water", 0x00000000, Potion1, '!', 200, 0, 66, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::CLEAR),
    object!("Strength", 0x00000001, Potion1, '!', 50, 300, 67, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Weakness", 0x00000002, Potion1, '!', 0, 0, 68, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("Restore Strength", 0x00000004, Potion1, '!', 0, 300, 69, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Intelligence", 0x00000008, Potion1, '!', 0, 300, 70, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Lose Intelligence", 0x00000010, Potion1, '!', 0, 0, 71, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Restore Intelligence", 0x00000020, Potion1, '!', 0, 300, 72, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Wisdom", 0x00000040, Potion1, '!', 0, 300, 73, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Lose Wisdom", 0x00000080, Potion1, '!', 0, 0, 74, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Restore Wisdom", 0x00000100, Potion1, '!', 0, 300, 75, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Charisma", 0x00000200, Potion1, '!', 0, 300, 76, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Ugliness", 0x00000400, Potion1, '!', 0, 0, 77, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Restore Charisma", 0x00000800, Potion1, '!', 0, 300, 78, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Cure Light Wounds", 0x10001000, Potion1, '!', 50, 15, 79, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Cure Light Wounds", 0x10001000, Potion1, '!', 50, 15, 79, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Cure Light Wounds", 0x10001000, Potion1, '!', 50, 15, 79, 1, 4, 0, 0, 0, 0, (1, 1), 2, Color::BLUE),
    object!("Cure Serious Wounds", 0x30002000, Potion1, '!', 100, 40, 80, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("Cure Critical Wounds", 0x70004000, Potion1, '!', 100, 100, 81, 1, 4, 0, 0, 0, 0, (1, 1), 5, Color::BLUE),
    object!("Healing", 0x70008000, Potion1, '!', 200, 200, 82, 1, 4, 0, 0, 0, 0, (1, 1), 12, Color::BLUE),
    object!("Constitution", 0x00010000, Potion1, '!', 50, 300, 83, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Gain Experience", 0x00020000, Potion1, '!', 0, 2500, 84, 1, 4, 0, 0, 0, 0, (1, 1), 50, Color::BLUE),
    object!("Sleep", 0x00040000, Potion1, '!', 100, 0, 85, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Blindness", 0x00080000, Potion1, '!', 0, 0, 86, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Confusion", 0x00100000, Potion1, '!', 50, 0, 87, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Poison", 0x00200000, Potion1, '!', 0, 0, 88, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("Haste Self", 0x00400000, Potion1, '!', 0, 75, 89, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Slowness", 0x00800000, Potion1, '!', 50, 0, 90, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Dexterity", 0x02000000, Potion1, '!', 0, 300, 91, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Restore Dexterity", 0x04000000, Potion1, '!', 0, 300, 92, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Restore Constitution", 0x68000000, Potion1, '!', 0, 300, 93, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Lose Experience", 0x00000002, Potion2, '!', 0, 0, 95, 1, 4, 0, 0, 0, 0, (1, 1), 10, Color::BLUE),
    object!("Salt Water", 0x00000004, Potion2, '!', 0, 0, 96, 1, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Invulnerability", 0x00000008, Potion2, '!', 0, 1000, 97, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Heroism", 0x00000010, Potion2, '!', 0, 35, 98, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Super Heroism", 0x00000020, Potion2, '!', 0, 100, 99, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("Boldness", 0x00000040, Potion2, '!', 0, 10, 100, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Restore Life Levels", 0x00000080, Potion2, '!', 0, 400, 101, 1, 4, 0, 0, 0, 0, (1, 1), 40, Color::BLUE),
    object!("Resist Heat", 0x00000100, Potion2, '!', 0, 30, 102, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Resist Cold", 0x00000200, Potion2, '!', 0, 30, 103, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Detect Invisible", 0x00000400, Potion2, '!', 0, 50, 104, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("Slow Poison", 0x00000800, Potion2, '!', 0, 25, 105, 1, 4, 0, 0, 0, 0, (1, 1), 1, Color::BLUE),
    object!("Neutralize Poison", 0x00001000, Potion2, '!', 0, 75, 106, 1, 4, 0, 0, 0, 0, (1, 1), 5, Color::BLUE),
    object!("Restore Mana", 0x00002000, Potion2, '!', 0, 350, 107, 1, 4, 0, 0, 0, 0, (1, 1), 25, Color::BLUE),
    object!("Infra-Vision", 0x00004000, Potion2, '!', 0, 20, 108, 1, 4, 0, 0, 0, 0, (1, 1), 3, Color::BLUE),
    object!("& Flask~ of Oil", 0x00040000, Flask, '!', 7500, 3, 64, 1, 10, 0, 0, 0, 0, (2, 6), 1, Color::OIL),
    object!("Light", 0x00000001, Wand, '-', 0, 200, 0, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Lightning Bolts", 0x00000002, Wand, '-', 0, 600, 1, 1, 10, 0, 0, 0, 0, (1, 1), 15, Color::IRON),
    object!("Frost Bolts", 0x00000004, Wand, '-', 0, 800, 2, 1, 10, 0, 0, 0, 0, (1, 1), 20, Color::IRON),
    object!("Fire Bolts", 0x00000008, Wand, '-', 0, 1000, 3, 1, 10, 0, 0, 0, 0, (1, 1), 30, Color::IRON),
    object!("Stone-to-Mud", 0x00000010, Wand, '-', 0, 300, 4, 1, 10, 0, 0, 0, 0, (1, 1), 12, Color::IRON),
    object!("Polymorph", 0x00000020, Wand, '-', 0, 400, 5, 1, 10, 0, 0, 0, 0, (1, 1), 20, Color::IRON),
    object!("Heal Monster", 0x00000040, Wand, '-', 0, 0, 6, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Haste Monster", 0x00000080, Wand, '-', 0, 0, 7, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Slow Monster", 0x00000100, Wand, '-', 0, 500, 8, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Confuse Monster", 0x00000200, Wand, '-', 0, 400, 9, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Sleep Monster", 0x00000400, Wand, '-', 0, 500, 10, 1, 10, 0, 0, 0, 0, (1, 1), 7, Color::IRON),
    object!("Drain Life", 0x00000800, Wand, '-', 0, 1200, 11, 1, 10, 0, 0, 0, 0, (1, 1), 50, Color::IRON),
    object!("Trap/Door Destruction", 0x00001000, Wand, '-', 0, 500, 12, 1, 10, 0, 0, 0, 0, (1, 1), 12, Color::IRON),
    object!("Magic Missile", 0x00002000, Wand, '-', 0, 200, 13, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Wall Building", 0x00004000, Wand, '-', 0, 400, 14, 1, 10, 0, 0, 0, 0, (1, 1), 25, Color::IRON),
    object!("Clone Monster", 0x00008000, Wand, '-', 0, 0, 15, 1, 10, 0, 0, 0, 0, (1, 1), 15, Color::IRON),
    object!("Teleport Away", 0x00010000, Wand, '-', 0, 350, 16, 1, 10, 0, 0, 0, 0, (1, 1), 20, Color::IRON),
    object!("Disarming", 0x00020000, Wand, '-', 0, 500, 17, 1, 10, 0, 0, 0, 0, (1, 1), 20, Color::IRON),
    object!("Lightning Balls", 0x00040000, Wand, '-', 0, 1200, 18, 1, 10, 0, 0, 0, 0, (1, 1), 35, Color::IRON),
    object!("Cold Balls", 0x00080000, Wand, '-', 0, 1500, 19, 1, 10, 0, 0, 0, 0, (1, 1), 40, Color::IRON),
    object!("Fire Balls", 0x00100000, Wand, '-', 0, 1800, 20, 1, 10, 0, 0, 0, 0, (1, 1), 50, Color::IRON),
    object!("Stinking Cloud", 0x00200000, Wand, '-', 0, 400, 21, 1, 10, 0, 0, 0, 0, (1, 1), 5, Color::IRON),
    object!("Acid Balls", 0x00400000, Wand, '-', 0, 1650, 22, 1, 10, 0, 0, 0, 0, (1, 1), 48, Color::IRON),
    object!("Wonder", 0x00800000, Wand, '-', 0, 250, 23, 1, 10, 0, 0, 0, 0, (1, 1), 2, Color::IRON),
    object!("Light", 0x00000001, Staff, '_', 0, 250, 0, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("Door/Stair Location", 0x00000002, Staff, '_', 0, 350, 1, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Trap Location", 0x00000004, Staff, '_', 0, 350, 2, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Treasure Location", 0x00000008, Staff, '_', 0, 200, 3, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("Object Location", 0x00000010, Staff, '_', 0, 200, 4, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("Teleportation", 0x00000020, Staff, '_', 0, 800, 5, 1, 50, 0, 0, 0, 0, (1, 2), 20, Color::WOODEN),
    object!("Earthquakes", 0x00000040, Staff, '_', 0, 350, 6, 1, 50, 0, 0, 0, 0, (1, 2), 40, Color::WOODEN),
    object!("Summoning", 0x00000080, Staff, '_', 0, 0, 7, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Summoning", 0x00000080, Staff, '_', 0, 0, 7, 1, 50, 0, 0, 0, 0, (1, 2), 50, Color::WOODEN),
    object!("*Destruction*", 0x00000200, Staff, '_', 0, 2500, 8, 1, 50, 0, 0, 0, 0, (1, 2), 50, Color::WOODEN),
    object!("Starlight", 0x00000400, Staff, '_', 0, 400, 9, 1, 50, 0, 0, 0, 0, (1, 2), 20, Color::WOODEN),
    object!("Haste Monsters", 0x00000800, Staff, '_', 0, 0, 10, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Slow Monsters", 0x00001000, Staff, '_', 0, 800, 11, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Sleep Monsters", 0x00002000, Staff, '_', 0, 700, 12, 1, 50, 0, 0, 0, 0, (1, 2), 10, Color::WOODEN),
    object!("Cure Light Wounds", 0x00004000, Staff, '_', 0, 200, 13, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("Detect Invisible", 0x00008000, Staff, '_', 0, 200, 14, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("Speed", 0x00010000, Staff, '_', 0, 1000, 15, 1, 50, 0, 0, 0, 0, (1, 2), 40, Color::WOODEN),
    object!("Slowness", 0x00020000, Staff, '_', 0, 0, 16, 1, 50, 0, 0, 0, 0, (1, 2), 40, Color::WOODEN),
    object!("Mass Polymorph", 0x00040000, Staff, '_', 0, 750, 17, 1, 50, 0, 0, 0, 0, (1, 2), 46, Color::WOODEN),
    object!("Remove Curse", 0x00080000, Staff, '_', 0, 500, 18, 1, 50, 0, 0, 0, 0, (1, 2), 47, Color::WOODEN),
    object!("Detect Evil", 0x00100000, Staff, '_', 0, 350, 19, 1, 50, 0, 0, 0, 0, (1, 2), 20, Color::WOODEN),
    object!("Curing", 0x00200000, Staff, '_', 0, 1000, 20, 1, 50, 0, 0, 0, 0, (1, 2), 25, Color::WOODEN),
    object!("Dispel Evil", 0x00400000, Staff, '_', 0, 1200, 21, 1, 50, 0, 0, 0, 0, (1, 2), 49, Color::WOODEN),
    object!("Darkness", 0x01000000, Staff, '_', 0, 0, 22, 1, 50, 0, 0, 0, 0, (1, 2), 50, Color::WOODEN),
    object!("Darkness", 0x01000000, Staff, '_', 0, 0, 22, 1, 50, 0, 0, 0, 0, (1, 2), 5, Color::WOODEN),
    object!("[Beginners-Magick]", 0x0000007F, MagicBook, '?', 0, 25, 64, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Magick I]", 0x0000FF80, MagicBook, '?', 0, 100, 65, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Magick II]", 0x00FF0000, MagicBook, '?', 0, 400, 66, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[The Mages' Guide to Power]", 0x7F000000, MagicBook, '?', 0, 800, 67, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Beginners Handbook]", 0x000000FF, PrayerBook, '?', 0, 25, 64, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Words of Wisdom]", 0x0000FF00, PrayerBook, '?', 0, 100, 65, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Chants and Blessings]", 0x01FF0000, PrayerBook, '?', 0, 400, 66, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("[Exorcisms and Dispellings]", 0x7E000000, PrayerBook, '?', 0, 800, 67, 1, 30, 0, 0, 0, 0, (1, 1), 40, Color::OLD_PARCHMENT),
    object!("& Small Wooden Chest", 0x13800000, Chest, '&', 0, 20, 1, 1, 250, 0, 0, 0, 0, (2, 3), 7, Color::WOODEN),
    object!("& Large Wooden Chest", 0x17800000, Chest, '&', 0, 60, 4, 1, 500, 0, 0, 0, 0, (2, 5), 15, Color::WOODEN),
    object!("& Small Iron Chest", 0x17800000, Chest, '&', 0, 100, 7, 1, 500, 0, 0, 0, 0, (2, 4), 25, Color::IRON),
    object!("& Large Iron Chest", 0x23800000, Chest, '&', 0, 150, 10, 1, 1000, 0, 0, 0, 0, (2, 6), 35, Color::IRON),
    object!("& Small Steel Chest", 0x1B800000, Chest, '&', 0, 200, 13, 1, 500, 0, 0, 0, 0, (2, 4), 45, Color::STEEL),
    object!("& Large Steel Chest", 0x33800000, Chest, '&', 0, 250, 16, 1, 1000, 0, 0, 0, 0, (2, 6), 50, Color::STEEL),
    object!("& Rat Skeleton", 0x00000000, Misc, 's', 0, 0, 1, 1, 10, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("& Giant Centipede Skeleton", 0x00000000, Misc, 's', 0, 0, 2, 1, 25, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("some Filthy Rags", 0x00000000, SoftArmor, '~', 0, 0, 63, 1, 20, 0, 0, 1, 0, (0, 0), 0, Color::DIRT),
    object!("& empty bottle", 0x00000000, Misc, '!', 0, 0, 4, 1, 2, 0, 0, 0, 0, (1, 1), 0, Color::CLEAR),
    object!("some shards of pottery", 0x00000000, Misc, '~', 0, 0, 5, 1, 5, 0, 0, 0, 0, (1, 1), 0, Color::POTTERY),
    object!("& Human Skeleton", 0x00000000, Misc, 's', 0, 0, 7, 1, 60, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("& Dwarf Skeleton", 0x00000000, Misc, 's', 0, 0, 8, 1, 50, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("& Elf Skeleton", 0x00000000, Misc, 's', 0, 0, 9, 1, 40, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("& Gnome Skeleton", 0x00000000, Misc, 's', 0, 0, 10, 1, 25, 0, 0, 0, 0, (1, 1), 1, Color::BONE),
    object!("& broken set of teeth", 0x00000000, Misc, 's', 0, 0, 11, 1, 3, 0, 0, 0, 0, (1, 1), 0, Color::BONE),
    object!("& large broken bone", 0x00000000, Misc, 's', 0, 0, 12, 1, 2, 0, 0, 0, 0, (1, 1), 0, Color::BONE),
    object!("& broken stick", 0x00000000, Misc, '~', 0, 0, 13, 1, 3, 0, 0, 0, 0, (1, 1), 0, Color::WOODEN),
    // Store stock that is not also a dungeon item
    object!("& Ration~ of Food", 0x00000000, Food, ',', 5000, 3, 90, 5, 10, 0, 0, 0, 0, (0, 0), 0, Color::FOOD),
    object!("& Hard Biscuit~", 0x00000000, Food, ',', 500, 1, 93, 5, 2, 0, 0, 0, 0, (0, 0), 0, Color::FOOD),
    object!("& Strip~ of Beef Jerky", 0x00000000, Food, ',', 1750, 2, 94, 5, 4, 0, 0, 0, 0, (0, 0), 0, Color::FOOD),
    object!("& Pint~ of Fine Ale", 0x00000000, Food, ',', 500, 1, 95, 3, 10, 0, 0, 0, 0, (0, 0), 0, Color::BROWN),
    object!("& Pint~ of Fine Wine", 0x00000000, Food, ',', 400, 2, 96, 1, 10, 0, 0, 0, 0, (0, 0), 0, Color::WINE),
    object!("& Pick", 0x20000000, Digging, '\\', 1, 50, 1, 1, 150, 0, 0, 0, 0, (1, 3), 0, Color::IRON),
    object!("& Shovel", 0x20000000, Digging, '\\', 0, 15, 4, 1, 60, 0, 0, 0, 0, (1, 2), 0, Color::IRON),
    object!("Identify", 0x00000008, Scroll1, '?', 0, 50, 67, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Light", 0x00000020, Scroll1, '?', 0, 15, 69, 3, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Phase Door", 0x00000080, Scroll1, '?', 0, 15, 71, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Magic Mapping", 0x00000800, Scroll1, '?', 0, 40, 75, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Treasure Detection", 0x00004000, Scroll1, '?', 0, 15, 78, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Object Detection", 0x00008000, Scroll1, '?', 0, 15, 79, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Detect Invisible", 0x00080000, Scroll1, '?', 0, 15, 83, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Blessing", 0x00000020, Scroll2, '?', 0, 15, 99, 2, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Word-of-Recall", 0x00000100, Scroll2, '?', 0, 150, 102, 3, 5, 0, 0, 0, 0, (0, 0), 0, Color::PAPER),
    object!("Cure Light Wounds", 0x10001000, Potion1, '!', 50, 15, 79, 2, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Heroism", 0x00000010, Potion2, '!', 0, 35, 98, 2, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Boldness", 0x00000040, Potion2, '!', 0, 10, 100, 2, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("Slow Poison", 0x00000800, Potion2, '!', 0, 25, 105, 2, 4, 0, 0, 0, 0, (1, 1), 0, Color::BLUE),
    object!("& Brass Lantern~", 0x00000000, Light, '~', 7500, 35, 0, 1, 50, 0, 0, 0, 0, (1, 1), 1, Color::BRASS),
    object!("& Wooden Torch~", 0x00000000, Light, '~', 4000, 2, 192, 5, 30, 0, 0, 0, 0, (1, 1), 1, Color::WOODEN),
    object!("& Flask~ of Oil", 0x00040000, Flask, '!', 7500, 3, 64, 5, 10, 0, 0, 0, 0, (2, 6), 1, Color::OIL),
    // Doors
    object!("& open door", 0x00000000, OpenDoor, '\'', 0, 0, 1, 1, 0, 0, 0, 0, 0, (1, 1), 0, Color::WOODEN),
    object!("& closed door", 0x00000000, ClosedDoor, '+', 0, 0, 19, 1, 0, 0, 0, 0, 0, (1, 1), 0, Color::WOODEN),
    object!("& secret door", 0x00000000, SecretDoor, '#', 0, 0, 19, 1, 0, 0, 0, 0, 0, (1, 1), 0, Color::WALL),
    // Stairs
    object!("an up staircase", 0x00000000, UpStair, '<', 0, 0, 1, 1, 0, 0, 0, 0, 0, (1, 1), 0, Color::WOODEN),
    object!("a down staircase", 0x00000000, DownStair, '>', 0, 0, 1, 1, 0, 0, 0, 0, 0, (1, 1), 0, Color::WOODEN),
    // Store entrances
    object!("General Store", 0x00000000, StoreDoor, '1', 0, 0, 101, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::RED),
    object!("Armory", 0x00000000, StoreDoor, '2', 0, 0, 102, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::GREEN),
    object!("Weapon Smiths", 0x00000000, StoreDoor, '3', 0, 0, 103, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::BLUE),
    object!("Temple", 0x00000000, StoreDoor, '4', 0, 0, 104, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::YELLOW),
    object!("Alchemy Shop", 0x00000000, StoreDoor, '5', 0, 0, 105, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::CYAN),
    object!("Magic Shop", 0x00000000, StoreDoor, '6', 0, 0, 106, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::PURPLE),
    // Traps: depth is the disarm difficulty, misc_use the experience for disarming
    object!("an open pit", 0x00000000, VisibleTrap, ' ', 1, 0, 1, 1, 0, 0, 0, 0, 0, (2, 6), 50, Color::WARNING),
    object!("an arrow trap", 0x00000000, InvisibleTrap, '^', 3, 0, 2, 1, 0, 0, 0, 0, 0, (1, 8), 90, Color::WOODEN),
    object!("a covered pit", 0x00000000, InvisibleTrap, '^', 2, 0, 3, 1, 0, 0, 0, 0, 0, (2, 6), 60, Color::DIRT),
    object!("a trap door", 0x00000000, InvisibleTrap, '^', 5, 0, 4, 1, 0, 0, 0, 0, 0, (2, 8), 75, Color::WOODEN),
    object!("a gas trap", 0x00000000, InvisibleTrap, '^', 3, 0, 5, 1, 0, 0, 0, 0, 0, (1, 4), 95, Color::WHITE),
    object!("a loose rock", 0x00000000, InvisibleTrap, ';', 0, 0, 6, 1, 0, 0, 0, 0, 0, (0, 0), 10, Color::WALL),
    object!("a dart trap", 0x00000000, InvisibleTrap, '^', 5, 0, 7, 1, 0, 0, 0, 0, 0, (1, 4), 110, Color::WARNING),
    object!("a strange rune", 0x00000000, InvisibleTrap, '^', 5, 0, 8, 1, 0, 0, 0, 0, 0, (0, 0), 90, Color::LIGHT_BLUE),
    object!("some loose rock", 0x00000000, InvisibleTrap, '^', 5, 0, 9, 1, 0, 0, 0, 0, 0, (2, 6), 90, Color::WALL),
    object!("a gas trap", 0x00000000, InvisibleTrap, '^', 10, 0, 10, 1, 0, 0, 0, 0, 0, (1, 4), 105, Color::ACID),
    object!("a strange rune", 0x00000000, InvisibleTrap, '^', 5, 0, 11, 1, 0, 0, 0, 0, 0, (0, 0), 90, Color::LIGHT_BLUE),
    object!("a blackened spot", 0x00000000, InvisibleTrap, '^', 10, 0, 12, 1, 0, 0, 0, 0, 0, (4, 6), 110, Color::BLACK),
    object!("some corroded rock", 0x00000000, InvisibleTrap, '^', 10, 0, 13, 1, 0, 0, 0, 0, 0, (4, 6), 110, Color::ACID),
    object!("a gas trap", 0x00000000, InvisibleTrap, '^', 5, 0, 14, 1, 0, 0, 0, 0, 0, (2, 6), 105, Color::POISON_GAS),
    object!("a gas trap", 0x00000000, InvisibleTrap, '^', 5, 0, 15, 1, 0, 0, 0, 0, 0, (1, 4), 110, Color::ORANGE),
    object!("a gas trap", 0x00000000, InvisibleTrap, '^', 5, 0, 16, 1, 0, 0, 0, 0, 0, (1, 8), 105, Color::POISON_GAS),
    object!("a dart trap", 0x00000000, InvisibleTrap, '^', 5, 0, 17, 1, 0, 0, 0, 0, 0, (1, 8), 110, Color::YELLOW),
    object!("a dart trap", 0x00000000, InvisibleTrap, '^', 5, 0, 18, 1, 0, 0, 0, 0, 0, (1, 8), 110, Color::WARNING),
    // Rubble
    object!("some rubble", 0x00000000, Rubble, ':', 0, 0, 1, 1, 0, 0, 0, 0, 0, (0, 0), 0, Color::STONE),
    object!("& Pint~ of Fine Grade Mush", 0x00000000, Food, ',', 1500, 1, 97, 1, 1, 0, 0, 0, 0, (1, 1), 1, Color::LEPROUS),
    // Special trap
    object!("a strange rune", 0x00000000, VisibleTrap, '^', 0, 0, 99, 1, 0, 0, 0, 0, 0, (0, 0), 10, Color::RANDOM),
    // Gold and gems
    object!("copper", 0x00000000, Gold, '$', 0, 3, 1, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::COPPER),
    object!("copper", 0x00000000, Gold, '$', 0, 4, 2, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::COPPER),
    object!("copper", 0x00000000, Gold, '$', 0, 5, 3, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::COPPER),
    object!("silver", 0x00000000, Gold, '$', 0, 6, 4, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::SILVER),
    object!("silver", 0x00000000, Gold, '$', 0, 7, 5, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::SILVER),
    object!("silver", 0x00000000, Gold, '$', 0, 8, 6, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::SILVER),
    object!("garnets", 0x00000000, Gold, '*', 0, 9, 7, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GARNET),
    object!("garnets", 0x00000000, Gold, '*', 0, 10, 8, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GARNET),
    object!("gold", 0x00000000, Gold, '$', 0, 12, 9, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GOLD),
    object!("gold", 0x00000000, Gold, '$', 0, 14, 10, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GOLD),
    object!("gold", 0x00000000, Gold, '$', 0, 16, 11, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GOLD),
    object!("opals", 0x00000000, Gold, '*', 0, 18, 12, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::RANDOM),
    object!("sapphires", 0x00000000, Gold, '*', 0, 20, 13, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::SAPPHIRE),
    object!("gold", 0x00000000, Gold, '$', 0, 24, 14, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::GOLD),
    object!("rubies", 0x00000000, Gold, '*', 0, 28, 15, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::RUBY),
    object!("diamonds", 0x00000000, Gold, '*', 0, 32, 16, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::DIAMOND),
    object!("emeralds", 0x00000000, Gold, '*', 0, 40, 17, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::EMERALD),
    object!("mithril", 0x00000000, Gold, '$', 0, 80, 18, 1, 0, 0, 0, 0, 0, (0, 0), 1, Color::MITHRIL),
    // Inventory placeholder; stackable so it can be picked up
    object!("nothing", 0x00000000, Nothing, ' ', 0, 0, 64, 0, 0, 0, 0, 0, 0, (0, 0), 0, Color::RED),
    // Entries only needed for their names
    object!("& ruined chest", 0x00000000, Chest, '&', 0, 0, 0, 1, 250, 0, 0, 0, 0, (0, 0), 0, Color::MEDIUM_GREY_LOW),
    object!("", 0x00000000, Nothing, ' ', 0, 0, 0, 0, 0, 0, 0, 0, 0, (0, 0), 0, Color::RED),
];

/// Get a catalog row by index
pub fn get_object(index: usize) -> Option<&'static ObjectDef> {
    OBJECTS.get(index)
}

/// Get the number of catalog rows
pub fn num_objects() -> usize {
    OBJECTS.len()
}

/// Dungeon-generated rows with `depth` at most `max_depth`
pub fn dungeon_objects(max_depth: u8) -> impl Iterator<Item = (usize, &'static ObjectDef)> {
    OBJECTS[..MAX_DUNGEON_OBJECTS]
        .iter()
        .enumerate()
        .filter(move |(_, def)| def.depth <= max_depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_size() {
        assert_eq!(num_objects(), 420);
        assert_eq!(get_object(OBJ_NOTHING).map(|d| d.name), Some("nothing"));
        assert_eq!(get_object(OBJ_RUINED_CHEST).map(|d| d.category), Some(ItemCategory::Chest));
        assert!(get_object(420).is_none());
    }

    #[test]
    fn test_known_rows() {
        let ration = &OBJECTS[21];
        assert_eq!(ration.name, "& Ration~ of Food");
        assert_eq!(ration.stack_code, 90);

        let torch = &OBJECTS[86];
        assert_eq!(torch.category, ItemCategory::Light);
        assert_eq!(torch.stack_code, 193);
        assert_eq!(torch.misc_use, 4000);

        let arrow = &OBJECTS[80];
        assert_eq!(arrow.name, "& Arrow~");
        assert_eq!(arrow.damage, Dice::new(1, 4));
    }

    #[test]
    fn test_store_stock_follows_dungeon_items() {
        let store_ration = &OBJECTS[MAX_DUNGEON_OBJECTS];
        assert_eq!(store_ration.name, "& Ration~ of Food");
        assert_eq!(store_ration.group_size, 5);
    }

    #[test]
    fn test_dungeon_objects_by_depth() {
        assert!(dungeon_objects(0).all(|(_, def)| def.depth == 0));
        assert!(dungeon_objects(0).count() < dungeon_objects(50).count());
        assert!(dungeon_objects(255).all(|(index, _)| index < MAX_DUNGEON_OBJECTS));
    }
}
