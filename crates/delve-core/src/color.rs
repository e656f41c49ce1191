//! Display colors
//!
//! Palette indices for objects and flavors. The renderer owns the actual
//! RGB values; this crate only carries the index.

use serde::{Deserialize, Serialize};

/// Palette index of a displayable color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    pub const WHITE: Color = Color(0);
    pub const LIGHT_GREY_HIGH: Color = Color(1);
    pub const LIGHT_GREY_LOW: Color = Color(2);
    pub const MEDIUM_GREY_HIGH: Color = Color(3);
    pub const MEDIUM_GREY_LOW: Color = Color(4);
    pub const DARK_GREY_HIGH: Color = Color(5);
    pub const DARK_GREY_LOW: Color = Color(6);
    pub const BLACK: Color = Color(7);
    pub const LIGHT_RED: Color = Color(8);
    pub const LIGHT_GREEN: Color = Color(9);
    pub const LIGHT_YELLOW: Color = Color(10);
    pub const LIGHT_BLUE: Color = Color(11);
    pub const LIGHT_ORANGE: Color = Color(12);
    pub const LIGHT_PURPLE: Color = Color(13);
    pub const RED: Color = Color(14);
    pub const GREEN: Color = Color(15);
    pub const YELLOW: Color = Color(16);
    pub const BLUE: Color = Color(17);
    pub const ORANGE: Color = Color(18);
    pub const PURPLE: Color = Color(19);
    pub const DARK_RED: Color = Color(20);
    pub const DARK_GREEN: Color = Color(21);
    pub const DARK_YELLOW: Color = Color(22);
    pub const DARK_BLUE: Color = Color(23);
    pub const DARK_ORANGE: Color = Color(24);
    pub const DARK_PURPLE: Color = Color(25);
    pub const CREAM: Color = Color(26);
    pub const AMBER: Color = Color(27);
    pub const DRIFTWOOD: Color = Color(28);
    pub const CORAL: Color = Color(29);
    pub const AGATE: Color = Color(30);
    pub const IVORY: Color = Color(31);
    pub const OBSIDIAN: Color = Color(32);
    pub const BONE: Color = Color(33);
    pub const BRASS: Color = Color(34);
    pub const BRONZE: Color = Color(35);
    pub const PEWTER: Color = Color(36);
    pub const TORTOISE_SHELL: Color = Color(37);
    pub const ALUMINUM: Color = Color(38);
    pub const CAST_IRON: Color = Color(39);
    pub const CHROMIUM: Color = Color(40);
    pub const COPPER: Color = Color(41);
    pub const GOLD: Color = Color(42);
    pub const IRON: Color = Color(43);
    pub const MAGNESIUM: Color = Color(44);
    pub const MOLYBDENUM: Color = Color(45);
    pub const NICKEL: Color = Color(46);
    pub const RUSTY: Color = Color(47);
    pub const SILVER: Color = Color(48);
    pub const STEEL: Color = Color(49);
    pub const TIN: Color = Color(50);
    pub const TITANIUM: Color = Color(51);
    pub const TUNGSTEN: Color = Color(52);
    pub const ZIRCONIUM: Color = Color(53);
    pub const ZINC: Color = Color(54);
    pub const DIRT: Color = Color(55);
    pub const LEPROUS: Color = Color(56);
    pub const FLESH: Color = Color(57);
    pub const DISENCHANTING: Color = Color(58);
    pub const ROTTING: Color = Color(59);
    pub const CLAY: Color = Color(60);
    pub const STONE: Color = Color(61);
    pub const FIRE: Color = Color(62);
    pub const WATER: Color = Color(63);
    pub const EARTH: Color = Color(64);
    pub const AIR: Color = Color(65);
    pub const FROST: Color = Color(66);
    pub const GLOWING: Color = Color(67);
    pub const GELATINOUS: Color = Color(68);
    pub const UMBER: Color = Color(69);
    pub const CRYSTAL: Color = Color(70);
    pub const BROWN: Color = Color(71);
    pub const ECRU: Color = Color(72);
    pub const FURRY: Color = Color(73);
    pub const PLAID: Color = Color(74);
    pub const SLIMY: Color = Color(75);
    pub const TAN: Color = Color(76);
    pub const WOODEN: Color = Color(77);
    pub const WRINKLED: Color = Color(78);
    pub const ICKY_GREEN: Color = Color(79);
    pub const LIGHT_BROWN: Color = Color(80);
    pub const CLEAR: Color = Color(81);
    pub const AZURE: Color = Color(82);
    pub const BUBBLING: Color = Color(83);
    pub const CHARTREUSE: Color = Color(84);
    pub const CLOUDY: Color = Color(85);
    pub const CRIMSON: Color = Color(86);
    pub const CYAN: Color = Color(87);
    pub const HAZY: Color = Color(88);
    pub const INDIGO: Color = Color(89);
    pub const MAGENTA: Color = Color(90);
    pub const METALLIC_BLUE: Color = Color(91);
    pub const METALLIC_RED: Color = Color(92);
    pub const METALLIC_GREEN: Color = Color(93);
    pub const METALLIC_PURPLE: Color = Color(94);
    pub const MISTY: Color = Color(95);
    pub const PINK: Color = Color(96);
    pub const PUCE: Color = Color(97);
    pub const SMOKY: Color = Color(98);
    pub const TANGERINE: Color = Color(99);
    pub const VIOLET: Color = Color(100);
    pub const VERMILION: Color = Color(101);
    pub const ALEXANDRITE: Color = Color(102);
    pub const AMETHYST: Color = Color(103);
    pub const AQUAMARINE: Color = Color(104);
    pub const AZURITE: Color = Color(105);
    pub const BERYL: Color = Color(106);
    pub const BLOODSTONE: Color = Color(107);
    pub const CALCITE: Color = Color(108);
    pub const CARNELIAN: Color = Color(109);
    pub const CORUNDUM: Color = Color(110);
    pub const DIAMOND: Color = Color(111);
    pub const EMERALD: Color = Color(112);
    pub const FLUORITE: Color = Color(113);
    pub const GARNET: Color = Color(114);
    pub const GRANITE: Color = Color(115);
    pub const JADE: Color = Color(116);
    pub const JASPER: Color = Color(117);
    pub const LAPIS_LAZULI: Color = Color(118);
    pub const MAGMA: Color = Color(119);
    pub const MALACHITE: Color = Color(120);
    pub const MARBLE: Color = Color(121);
    pub const MOONSTONE: Color = Color(122);
    pub const ONYX: Color = Color(123);
    pub const PEARL: Color = Color(124);
    pub const QUARTZ: Color = Color(125);
    pub const QUARTZITE: Color = Color(126);
    pub const RHODONITE: Color = Color(127);
    pub const RUBY: Color = Color(128);
    pub const SAPPHIRE: Color = Color(129);
    pub const TIGER_EYE: Color = Color(130);
    pub const TOPAZ: Color = Color(131);
    pub const TURQUOISE: Color = Color(132);
    pub const ZIRCON: Color = Color(133);
    pub const FOOD: Color = Color(134);
    pub const SLIME: Color = Color(135);
    pub const LEATHER: Color = Color(136);
    pub const CORD: Color = Color(137);
    pub const PAPER: Color = Color(138);
    pub const OLD_PARCHMENT: Color = Color(139);
    pub const APPLE: Color = Color(140);
    pub const OIL: Color = Color(141);
    pub const MAGIC_LIGHT: Color = Color(142);
    pub const MUD: Color = Color(143);
    pub const ACID: Color = Color(144);
    pub const POTTERY: Color = Color(145);
    pub const WINE: Color = Color(146);
    pub const MITHRIL: Color = Color(147);
    pub const ASPEN: Color = Color(148);
    pub const BALSA: Color = Color(149);
    pub const BANYAN: Color = Color(150);
    pub const BIRCH: Color = Color(151);
    pub const CEDAR: Color = Color(152);
    pub const COTTONWOOD: Color = Color(153);
    pub const CYPRESS: Color = Color(154);
    pub const DOGWOOD: Color = Color(155);
    pub const ELM: Color = Color(156);
    pub const EUCALYPTUS: Color = Color(157);
    pub const HEMLOCK: Color = Color(158);
    pub const HICKORY: Color = Color(159);
    pub const IRONWOOD: Color = Color(160);
    pub const LOCUST: Color = Color(161);
    pub const MAHOGANY: Color = Color(162);
    pub const MAPLE: Color = Color(163);
    pub const MULBERRY: Color = Color(164);
    pub const OAK: Color = Color(165);
    pub const PINE: Color = Color(166);
    pub const REDWOOD: Color = Color(167);
    pub const ROSEWOOD: Color = Color(168);
    pub const SPRUCE: Color = Color(169);
    pub const SYCAMORE: Color = Color(170);
    pub const TEAK: Color = Color(171);
    pub const WALNUT: Color = Color(172);
    pub const MAGIC_MISSILE: Color = Color(173);
    pub const POISON_GAS: Color = Color(174);
    pub const HOLY_ORB: Color = Color(175);
    pub const LIGHTNING: Color = Color(176);
    pub const DEEP_BLACK: Color = Color(177);
    pub const SHADOW_AND_FLAME: Color = Color(178);

    /// Renderer picks a fresh color every frame
    pub const RANDOM: Color = Color(255);

    // Aliases
    pub const OPAL: Color = Color::RANDOM;
    pub const MULTI_HUED: Color = Color::RANDOM;
    pub const IRIDESCENT: Color = Color::RANDOM;
    pub const WARNING: Color = Color::RED;
    pub const DAMNED: Color = Color::RED;
    pub const MAGIK: Color = Color::GREEN;
    pub const EMPTY: Color = Color::DARK_GREY_HIGH;
    pub const WALL: Color = Color::MEDIUM_GREY_HIGH;

    /// Whether the renderer should pick a fresh color every frame
    pub const fn is_random(self) -> bool {
        self.0 == Self::RANDOM.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases_resolve() {
        assert_eq!(Color::WARNING, Color::RED);
        assert_eq!(Color::WALL, Color::MEDIUM_GREY_HIGH);
        assert!(Color::OPAL.is_random());
        assert!(!Color::GOLD.is_random());
    }
}
