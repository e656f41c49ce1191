//! Flavor tables
//!
//! Names and colors that unidentified potions, mushrooms, staffs, wands,
//! rings and amulets are shown with, and the syllables scroll titles are
//! made of. Which flavor a kind gets is decided per session by
//! [`FlavorSession`](delve_core::object::FlavorSession).

use delve_core::Color;
use delve_core::object::{FlavorKind, FlavorTables};

/// Number of scroll titles generated per session
pub const MAX_TITLES: usize = 45;

/// Potion liquids. The first three never move.
pub static POTIONS: [&str; 49] = [
    "Icky Green", "Light Brown", "Clear", "Azure", "Blue", "Blue Speckled",
    "Black", "Brown", "Brown Speckled", "Bubbling", "Chartreuse", "Cloudy",
    "Copper Speckled", "Crimson", "Cyan", "Dark Blue", "Dark Green", "Dark Red",
    "Gold Speckled", "Green", "Green Speckled", "Grey", "Grey Speckled", "Hazy",
    "Indigo", "Light Blue", "Light Green", "Magenta", "Metallic Blue", "Metallic Red",
    "Metallic Green", "Metallic Purple", "Misty", "Orange", "Orange Speckled", "Pink",
    "Pink Speckled", "Puce", "Purple", "Purple Speckled", "Red", "Red Speckled",
    "Silver Speckled", "Smoky", "Tangerine", "Violet", "Vermilion", "White",
    "Yellow",
];

pub static POTION_COLORS: [Color; 49] = [
    Color::ICKY_GREEN, Color::LIGHT_BROWN, Color::CLEAR, Color::AZURE,
    Color::BLUE, Color::BLUE, Color::BLACK, Color::BROWN,
    Color::BROWN, Color::BUBBLING, Color::CHARTREUSE, Color::CLOUDY,
    Color::COPPER, Color::CRIMSON, Color::CYAN, Color::DARK_BLUE,
    Color::DARK_GREEN, Color::DARK_RED, Color::GOLD, Color::GREEN,
    Color::GREEN, Color::MEDIUM_GREY_HIGH, Color::MEDIUM_GREY_LOW, Color::HAZY,
    Color::INDIGO, Color::LIGHT_BLUE, Color::LIGHT_GREEN, Color::MAGENTA,
    Color::METALLIC_BLUE, Color::METALLIC_RED, Color::METALLIC_GREEN, Color::METALLIC_PURPLE,
    Color::MISTY, Color::ORANGE, Color::ORANGE, Color::PINK,
    Color::PINK, Color::PUCE, Color::PURPLE, Color::PURPLE,
    Color::RED, Color::RED, Color::SILVER, Color::SMOKY,
    Color::TANGERINE, Color::VIOLET, Color::VERMILION, Color::WHITE,
    Color::YELLOW,
];

/// Mushroom looks
pub static MUSHROOMS: [&str; 22] = [
    "Blue", "Black", "Black Spotted", "Brown", "Dark Blue", "Dark Green",
    "Dark Red", "Ecru", "Furry", "Green", "Grey", "Light Blue",
    "Light Green", "Plaid", "Red", "Slimy", "Tan", "White",
    "White Spotted", "Wooden", "Wrinkled", "Yellow",
];

pub static MUSHROOM_COLORS: [Color; 22] = [
    Color::BLUE, Color::BLACK, Color::BLACK, Color::BROWN,
    Color::DARK_BLUE, Color::DARK_GREEN, Color::DARK_RED, Color::ECRU,
    Color::FURRY, Color::GREEN, Color::MEDIUM_GREY_HIGH, Color::LIGHT_BLUE,
    Color::LIGHT_GREEN, Color::PLAID, Color::RED, Color::SLIMY,
    Color::TAN, Color::WHITE, Color::WHITE, Color::WOODEN,
    Color::WRINKLED, Color::YELLOW,
];

/// Staff woods
pub static WOODS: [&str; 25] = [
    "Aspen", "Balsa", "Banyan", "Birch", "Cedar", "Cottonwood",
    "Cypress", "Dogwood", "Elm", "Eucalyptus", "Hemlock", "Hickory",
    "Ironwood", "Locust", "Mahogany", "Maple", "Mulberry", "Oak",
    "Pine", "Redwood", "Rosewood", "Spruce", "Sycamore", "Teak",
    "Walnut",
];

pub static WOOD_COLORS: [Color; 25] = [
    Color::ASPEN, Color::BALSA, Color::BANYAN, Color::BIRCH,
    Color::CEDAR, Color::COTTONWOOD, Color::CYPRESS, Color::DOGWOOD,
    Color::ELM, Color::EUCALYPTUS, Color::HEMLOCK, Color::HICKORY,
    Color::IRONWOOD, Color::LOCUST, Color::MAHOGANY, Color::MAPLE,
    Color::MULBERRY, Color::OAK, Color::PINE, Color::REDWOOD,
    Color::ROSEWOOD, Color::SPRUCE, Color::SYCAMORE, Color::TEAK,
    Color::WALNUT,
];

/// Wand metals
pub static METALS: [&str; 25] = [
    "Aluminum", "Cast Iron", "Chromium", "Copper", "Gold", "Iron",
    "Magnesium", "Molybdenum", "Nickel", "Rusty", "Silver", "Steel",
    "Tin", "Titanium", "Tungsten", "Zirconium", "Zinc", "Aluminum-Plated",
    "Copper-Plated", "Gold-Plated", "Nickel-Plated", "Silver-Plated", "Steel-Plated", "Tin-Plated",
    "Zinc-Plated",
];

pub static METAL_COLORS: [Color; 25] = [
    Color::ALUMINUM, Color::CAST_IRON, Color::CHROMIUM, Color::COPPER,
    Color::GOLD, Color::IRON, Color::MAGNESIUM, Color::MOLYBDENUM,
    Color::NICKEL, Color::RUSTY, Color::SILVER, Color::STEEL,
    Color::TIN, Color::TITANIUM, Color::TUNGSTEN, Color::ZIRCONIUM,
    Color::ZINC, Color::ALUMINUM, Color::COPPER, Color::GOLD,
    Color::NICKEL, Color::SILVER, Color::STEEL, Color::TIN,
    Color::ZINC,
];

/// Ring stones
pub static ROCKS: [&str; 32] = [
    "Alexandrite", "Amethyst", "Aquamarine", "Azurite", "Beryl", "Bloodstone",
    "Calcite", "Carnelian", "Corundum", "Diamond", "Emerald", "Fluorite",
    "Garnet", "Granite", "Jade", "Jasper", "Lapis Lazuli", "Malachite",
    "Marble", "Moonstone", "Onyx", "Opal", "Pearl", "Quartz",
    "Quartzite", "Rhodonite", "Ruby", "Sapphire", "Tiger Eye", "Topaz",
    "Turquoise", "Zircon",
];

pub static ROCK_COLORS: [Color; 32] = [
    Color::ALEXANDRITE, Color::AMETHYST, Color::AQUAMARINE, Color::AZURITE,
    Color::BERYL, Color::BLOODSTONE, Color::CALCITE, Color::CARNELIAN,
    Color::CORUNDUM, Color::DIAMOND, Color::EMERALD, Color::FLUORITE,
    Color::GARNET, Color::GRANITE, Color::JADE, Color::JASPER,
    Color::LAPIS_LAZULI, Color::MALACHITE, Color::MARBLE, Color::MOONSTONE,
    Color::ONYX, Color::OPAL, Color::PEARL, Color::QUARTZ,
    Color::QUARTZITE, Color::RHODONITE, Color::RUBY, Color::SAPPHIRE,
    Color::TIGER_EYE, Color::TOPAZ, Color::TURQUOISE, Color::ZIRCON,
];

/// Amulet materials
pub static AMULETS: [&str; 11] = [
    "Amber", "Driftwood", "Coral", "Agate", "Ivory", "Obsidian",
    "Bone", "Brass", "Bronze", "Pewter", "Tortoise Shell",
];

pub static AMULET_COLORS: [Color; 11] = [
    Color::AMBER, Color::DRIFTWOOD, Color::CORAL, Color::AGATE,
    Color::IVORY, Color::OBSIDIAN, Color::BONE, Color::BRASS,
    Color::BRONZE, Color::PEWTER, Color::TORTOISE_SHELL,
];

/// Scroll title syllables
pub static SYLLABLES: [&str; 153] = [
    "a", "ab", "ag", "aks", "ala", "an", "ankh", "app", "arg",
    "arze", "ash", "aus", "ban", "bar", "bat", "bek", "bie", "bin",
    "bit", "bjor", "blu", "bot", "bu", "byt", "comp", "con", "cos",
    "cre", "dalf", "dan", "den", "doe", "dok", "eep", "el", "eng",
    "er", "ere", "erk", "esh", "evs", "fa", "fid", "for", "fri",
    "fu", "gan", "gar", "glen", "gop", "gre", "ha", "he", "hyd",
    "i", "ing", "ion", "ip", "ish", "it", "ite", "iv", "jo",
    "kho", "kli", "klis", "la", "lech", "man", "mar", "me", "mi",
    "mic", "mik", "mon", "mung", "mur", "nej", "nelg", "nep", "ner",
    "nes", "nis", "nih", "nin", "o", "od", "ood", "org", "orn",
    "ox", "oxy", "pay", "pet", "ple", "plu", "po", "pot", "prok",
    "re", "rea", "rhov", "ri", "ro", "rog", "rok", "rol", "sa",
    "san", "sat", "see", "sef", "seh", "shu", "ski", "sna", "sne",
    "snik", "sno", "so", "sol", "sri", "sta", "sun", "ta", "tab",
    "tem", "ther", "ti", "tox", "trol", "tue", "turs", "u", "ulk",
    "um", "un", "uni", "ur", "val", "viv", "vly", "vom", "wah",
    "wed", "werg", "wex", "whon", "wun", "x", "yerg", "yp", "zun",
];

/// The standard flavor tables
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFlavors;

impl StandardFlavors {
    fn names(kind: FlavorKind) -> &'static [&'static str] {
        match kind {
            FlavorKind::Potion => &POTIONS,
            FlavorKind::Mushroom => &MUSHROOMS,
            FlavorKind::Wood => &WOODS,
            FlavorKind::Metal => &METALS,
            FlavorKind::Rock => &ROCKS,
            FlavorKind::Amulet => &AMULETS,
            FlavorKind::ScrollTitle => &[],
        }
    }

    fn colors(kind: FlavorKind) -> &'static [Color] {
        match kind {
            FlavorKind::Potion => &POTION_COLORS,
            FlavorKind::Mushroom => &MUSHROOM_COLORS,
            FlavorKind::Wood => &WOOD_COLORS,
            FlavorKind::Metal => &METAL_COLORS,
            FlavorKind::Rock => &ROCK_COLORS,
            FlavorKind::Amulet => &AMULET_COLORS,
            FlavorKind::ScrollTitle => &[],
        }
    }
}

impl FlavorTables for StandardFlavors {
    fn flavor_name(&self, kind: FlavorKind, index: usize) -> &'static str {
        Self::names(kind).get(index).copied().unwrap_or("")
    }

    fn color_of(&self, kind: FlavorKind, index: usize) -> Color {
        Self::colors(kind).get(index).copied().unwrap_or(Color::WHITE)
    }

    fn pool_size(&self, kind: FlavorKind) -> usize {
        match kind {
            FlavorKind::ScrollTitle => MAX_TITLES,
            _ => Self::names(kind).len(),
        }
    }

    fn syllables(&self) -> &[&'static str] {
        &SYLLABLES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_pool_sizes() {
        let tables = StandardFlavors;
        assert_eq!(tables.pool_size(FlavorKind::Potion), 49);
        assert_eq!(tables.pool_size(FlavorKind::Mushroom), 22);
        assert_eq!(tables.pool_size(FlavorKind::Wood), 25);
        assert_eq!(tables.pool_size(FlavorKind::Metal), 25);
        assert_eq!(tables.pool_size(FlavorKind::Rock), 32);
        assert_eq!(tables.pool_size(FlavorKind::Amulet), 11);
        assert_eq!(tables.pool_size(FlavorKind::ScrollTitle), MAX_TITLES);
    }

    #[test]
    fn test_every_name_has_a_color() {
        for kind in FlavorKind::iter().filter(|&k| k != FlavorKind::ScrollTitle) {
            assert_eq!(
                StandardFlavors::names(kind).len(),
                StandardFlavors::colors(kind).len(),
                "{kind}"
            );
        }
    }

    #[test]
    fn test_lookups() {
        let tables = StandardFlavors;
        assert_eq!(tables.flavor_name(FlavorKind::Rock, 13), "Granite");
        assert_eq!(tables.color_of(FlavorKind::Rock, 13), Color::GRANITE);
        assert_eq!(tables.flavor_name(FlavorKind::Wood, 99), "");
        assert_eq!(tables.syllables().first(), Some(&"a"));
    }
}
