//! Object naming
//!
//! Builds the player-visible description of an item. Template names are
//! format strings: a leading `& ` is replaced by an article or count, and
//! `~` by the plural suffix. Unidentified flavored kinds show their
//! session flavor instead of the true name.

use std::fmt::Write;

use super::{
    FlavorSession, IdentFlags, ItemCategory, ItemInstance, ObjectRegistry, ObjectTemplate,
};

/// Name format for a template as the player sees it.
///
/// `known` selects the true name for flavored kinds. The result still
/// contains the `&` and `~` placeholders.
pub fn base_name(template: &ObjectTemplate, session: &FlavorSession<'_>, known: bool) -> String {
    let name = template.def.name;
    let flavor = if known {
        None
    } else {
        session.flavor_of(template)
    };

    match template.def.category {
        ItemCategory::Amulet => flavored("Amulet", name, flavor),
        ItemCategory::Ring => flavored("Ring", name, flavor),
        ItemCategory::Staff => flavored("Staff", name, flavor),
        ItemCategory::Wand => flavored("Wand", name, flavor),
        ItemCategory::Potion1 | ItemCategory::Potion2 => flavored("Potion~", name, flavor),
        ItemCategory::Scroll1 | ItemCategory::Scroll2 => match flavor {
            Some(title) => format!("& Scroll~ titled \"{title}\""),
            None => format!("& Scroll~ of {name}"),
        },
        ItemCategory::Food if template.flavor().is_some() => flavored("Mushroom~", name, flavor),
        ItemCategory::MagicBook => format!("& Book~ of Magic Spells {name}"),
        ItemCategory::PrayerBook => format!("& Holy Book~ of Prayers {name}"),
        _ => name.to_string(),
    }
}

fn flavored(noun: &str, name: &str, flavor: Option<&str>) -> String {
    match flavor {
        Some(flavor) => format!("& {flavor} {noun}"),
        None => format!("& {noun} of {name}"),
    }
}

/// Resolve the article and plural placeholders for `quantity` items.
fn resolve_placeholders(format: &str, quantity: u16) -> String {
    let (counted, body) = match format.strip_prefix("& ") {
        Some(rest) => (true, rest),
        None => (false, format),
    };

    let mut noun = String::with_capacity(body.len() + 2);
    let mut prev = None;
    for ch in body.chars() {
        if ch == '~' {
            if quantity != 1 {
                noun.push_str(if matches!(prev, Some('s' | 'h')) { "es" } else { "s" });
            }
        } else {
            noun.push(ch);
            prev = Some(ch);
        }
    }

    if !counted {
        return noun;
    }
    match quantity {
        0 => format!("no more {noun}"),
        1 if starts_with_vowel(&noun) => format!("an {noun}"),
        1 => format!("a {noun}"),
        n => format!("{n} {noun}"),
    }
}

fn starts_with_vowel(word: &str) -> bool {
    word.chars()
        .next()
        .is_some_and(|c| "aeiouAEIOU".contains(c))
}

/// Describe an item for the player.
///
/// The terse form is the name with its article, visible special
/// fragments and inscription. The verbose form adds dice, bonuses, armor,
/// charges and the identification markers.
pub fn describe(
    item: &ItemInstance,
    registry: &ObjectRegistry,
    session: &FlavorSession<'_>,
    verbose: bool,
) -> String {
    let template = registry.lookup_or_nothing(item.template);
    let known = item.is_known() || session.is_known(template);

    let mut out = resolve_placeholders(&base_name(template, session, known), item.quantity);

    for name in item.bonuses.specials.in_display_order() {
        if item.special_visible(name) {
            out.push(' ');
            out.push_str(name.fragment());
        }
    }

    if verbose {
        push_details(&mut out, item, template);
    }

    let mut markers: Vec<&str> = Vec::new();
    if verbose {
        if item.ident.contains(IdentFlags::EMPTY) {
            markers.push("empty");
        } else if item.ident.contains(IdentFlags::TRIED) {
            markers.push("tried");
        }
        if item.ident.contains(IdentFlags::MAGIK) {
            markers.push("magik");
        } else if item.ident.contains(IdentFlags::DAMNED) {
            markers.push("damned");
        }
    }
    if let Some(text) = item.inscription() {
        markers.push(text);
    }
    if !markers.is_empty() {
        let _ = write!(out, " {{{}}}", markers.join(", "));
    }

    out
}

fn push_details(out: &mut String, item: &ItemInstance, template: &ObjectTemplate) {
    let category = item.category;
    let def = &template.def;
    let bonuses = &item.bonuses;
    let known = item.is_known();

    match category {
        ItemCategory::Bow => {
            let _ = write!(out, " (x{})", bonuses.misc_use);
        }
        c if c.is_weapon()
            || c.is_missile()
            || matches!(c, ItemCategory::Flask | ItemCategory::Spike) =>
        {
            let _ = write!(out, " ({})", def.damage);
        }
        ItemCategory::Light => {
            let _ = write!(out, " with {} turns of light", bonuses.misc_use);
        }
        _ => {}
    }

    if known {
        let shows_hit_dam = item.ident.contains(IdentFlags::SHOW_HIT_DAM)
            && (category.is_weapon() || category.is_missile() || category == ItemCategory::Bow);
        if shows_hit_dam || bonuses.to_hit != 0 || bonuses.to_damage != 0 {
            let _ = write!(out, " ({:+},{:+})", bonuses.to_hit, bonuses.to_damage);
        }
    }

    if category.is_armor() || def.ac != 0 {
        if known {
            let _ = write!(out, " [{},{:+}]", def.ac, bonuses.to_ac);
        } else {
            let _ = write!(out, " [{}]", def.ac);
        }
    } else if known && bonuses.to_ac != 0 {
        let _ = write!(out, " [{:+}]", bonuses.to_ac);
    }

    if known && item.shows_pluses() {
        let _ = write!(out, " ({:+})", bonuses.misc_use);
    }

    if known && category.has_charges() {
        let _ = write!(out, " ({} charges)", bonuses.misc_use);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::object::{
        Dice, FlavorKind, FlavorTables, ItemId, ObjectDef, SpecialName, TemplateId, WearFlags,
    };

    struct Plain;

    impl FlavorTables for Plain {
        fn flavor_name(&self, kind: FlavorKind, _index: usize) -> &'static str {
            match kind {
                FlavorKind::Rock => "Granite",
                FlavorKind::Potion => "Icky Green",
                _ => "Odd",
            }
        }

        fn color_of(&self, _kind: FlavorKind, _index: usize) -> Color {
            Color::WHITE
        }

        fn pool_size(&self, _kind: FlavorKind) -> usize {
            64
        }

        fn syllables(&self) -> &[&'static str] {
            &["blu"]
        }
    }

    fn def(
        name: &'static str,
        category: ItemCategory,
        stack_code: u8,
        flags: u32,
    ) -> ObjectDef {
        ObjectDef {
            name,
            flags,
            category,
            stack_code,
            group_size: 1,
            damage: Dice::new(1, 4),
            ..ObjectDef::NOTHING
        }
    }

    fn registry() -> ObjectRegistry {
        ObjectRegistry::load(&[
            def("& Ration~ of Food", ItemCategory::Food, 90, 0),
            def("Strength", ItemCategory::Ring, 0, WearFlags::STR.bits()),
            def("& Arrow~", ItemCategory::Arrow, 193, 0),
            ObjectDef {
                ac: 8,
                ..def("Soft Leather Armor", ItemCategory::SoftArmor, 2, 0)
            },
            def("& Wooden Torch~", ItemCategory::Light, 193, 0),
            def("Light", ItemCategory::Wand, 0, 1),
            def("[Magick I]", ItemCategory::MagicBook, 65, 0xFF80),
            def("Identify", ItemCategory::Scroll1, 67, 0x8),
        ])
        .unwrap()
    }

    fn item(registry: &ObjectRegistry, id: u16, quantity: u16) -> ItemInstance {
        let mut item = ItemInstance::new(ItemId(1), registry.lookup(TemplateId(id)).unwrap());
        item.quantity = quantity;
        item
    }

    #[test]
    fn test_articles_and_counts() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        assert_eq!(
            describe(&item(&registry, 0, 1), &registry, &session, false),
            "a Ration of Food"
        );
        assert_eq!(
            describe(&item(&registry, 0, 5), &registry, &session, false),
            "5 Rations of Food"
        );
        assert_eq!(
            describe(&item(&registry, 0, 0), &registry, &session, false),
            "no more Rations of Food"
        );
        assert_eq!(
            describe(&item(&registry, 2, 1), &registry, &session, false),
            "an Arrow"
        );
    }

    #[test]
    fn test_plural_after_h() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        assert_eq!(
            describe(&item(&registry, 4, 3), &registry, &session, false),
            "3 Wooden Torches"
        );
    }

    #[test]
    fn test_name_without_article() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        let armor = item(&registry, 3, 1);
        assert_eq!(
            describe(&armor, &registry, &session, true),
            "Soft Leather Armor [8]"
        );
    }

    #[test]
    fn test_flavor_until_known() {
        let registry = registry();
        let mut session = FlavorSession::new(&Plain, 0);
        let mut ring = item(&registry, 1, 1);
        assert_eq!(describe(&ring, &registry, &session, false), "a Granite Ring");

        session.learn(registry.lookup(TemplateId(1)).unwrap());
        assert_eq!(
            describe(&ring, &registry, &session, false),
            "a Ring of Strength"
        );

        ring.bonuses.misc_use = 2;
        ring.identify();
        assert_eq!(
            describe(&ring, &registry, &session, true),
            "a Ring of Strength (+2)"
        );
    }

    #[test]
    fn test_scroll_title() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        let scroll = item(&registry, 7, 2);
        let text = describe(&scroll, &registry, &session, false);
        assert!(text.starts_with("2 Scrolls titled \""), "{text}");
    }

    #[test]
    fn test_books_always_named() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        assert_eq!(
            describe(&item(&registry, 6, 1), &registry, &session, false),
            "a Book of Magic Spells [Magick I]"
        );
    }

    #[test]
    fn test_specials_in_canonical_order() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        let mut arrows = item(&registry, 2, 2);
        arrows.bonuses.specials.add(SpecialName::SlayEvil);
        arrows.bonuses.specials.add(SpecialName::Fire);
        arrows.bonuses.to_hit = 3;
        arrows.bonuses.to_damage = 3;

        assert_eq!(
            describe(&arrows, &registry, &session, true),
            "2 Arrows (1d4)"
        );

        arrows.identify();
        assert_eq!(
            describe(&arrows, &registry, &session, true),
            "2 Arrows of Fire of Slay Evil (1d4) (+3,+3)"
        );
    }

    #[test]
    fn test_markers_and_inscription() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        let mut wand = item(&registry, 5, 1);
        wand.mark_tried();
        wand.set_inscription("zap");
        assert_eq!(
            describe(&wand, &registry, &session, true),
            "an Odd Wand {tried, zap}"
        );
        assert_eq!(
            describe(&wand, &registry, &session, false),
            "an Odd Wand {zap}"
        );

        wand.bonuses.misc_use = 7;
        wand.identify();
        assert_eq!(
            describe(&wand, &registry, &session, true),
            "a Wand of Light (7 charges) {zap}"
        );
    }

    #[test]
    fn test_light_fuel() {
        let registry = registry();
        let session = FlavorSession::new(&Plain, 0);
        let mut torch = item(&registry, 4, 1);
        torch.bonuses.misc_use = 2500;
        assert_eq!(
            describe(&torch, &registry, &session, true),
            "a Wooden Torch with 2500 turns of light"
        );
    }
}
