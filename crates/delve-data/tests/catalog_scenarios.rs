//! End-to-end scenarios over the standard catalog

use delve_core::GameRng;
use delve_core::object::{
    ItemCategory, MkItemContext, SpecialName, StackPolicy, TemplateId, create_item, describe,
    merge_items, split_item, stack_into,
};
use delve_data::{flavor_session, standard_registry};

const RATION: TemplateId = TemplateId(21);
const ARROW: TemplateId = TemplateId(80);
const DUNGEON_TORCH: TemplateId = TemplateId(86);
const STORE_TORCH: TemplateId = TemplateId(365);

#[test]
fn test_ration_articles() {
    let registry = standard_registry();
    let session = flavor_session(1);
    let mut ctx = MkItemContext::new();
    let mut rng = GameRng::new(1);

    let one = create_item(&mut ctx, registry, &mut rng, RATION, Some(1)).unwrap();
    assert_eq!(describe(&one, registry, &session, false), "a Ration of Food");

    let five = create_item(&mut ctx, registry, &mut rng, RATION, Some(5)).unwrap();
    assert_eq!(describe(&five, registry, &session, false), "5 Rations of Food");
}

#[test]
fn test_arrows_show_egos_only_once_identified() {
    let registry = standard_registry();
    let session = flavor_session(2);
    let mut ctx = MkItemContext::at_depth(40);
    let mut rng = GameRng::new(2);

    let mut found = None;
    for _ in 0..5000 {
        let arrows = create_item(&mut ctx, registry, &mut rng, ARROW, None).unwrap();
        if !arrows.specials().is_empty() && !arrows.is_cursed() {
            found = Some(arrows);
            break;
        }
    }
    let mut bundle = found.expect("no ego arrows rolled");

    let a = split_item(&mut ctx, &mut bundle, 1).unwrap();
    let b = split_item(&mut ctx, &mut bundle, 1).unwrap();
    let mut pair = merge_items(&a, &b).unwrap();
    assert_eq!(pair.quantity(), 2);

    assert_eq!(describe(&pair, registry, &session, true), "2 Arrows (1d4)");

    pair.identify();
    let text = describe(&pair, registry, &session, true);
    let fragments: Vec<&str> = pair
        .specials()
        .in_display_order()
        .map(SpecialName::fragment)
        .collect();
    assert!(text.starts_with(&format!("2 Arrows {}", fragments.join(" "))), "{text}");
    assert!(text.contains("(1d4) ("), "{text}");
}

#[test]
fn test_potions_show_flavor_until_learned() {
    let registry = standard_registry();
    let mut session = flavor_session(3);
    let mut ctx = MkItemContext::new();
    let mut rng = GameRng::new(3);

    let template = registry
        .find(ItemCategory::Potion1, "Cure Light Wounds")
        .expect("catalog has Cure Light Wounds");
    let a = create_item(&mut ctx, registry, &mut rng, template.id, None).unwrap();
    let b = create_item(&mut ctx, registry, &mut rng, template.id, None).unwrap();
    let pair = merge_items(&a, &b).unwrap();

    let flavor = session.flavor_of(template).unwrap().to_string();
    let text = describe(&pair, registry, &session, false);
    assert_eq!(text, format!("2 {flavor} Potions"));
    assert!(!text.contains("Cure Light Wounds"));

    assert!(session.learn(template));
    assert_eq!(
        describe(&pair, registry, &session, false),
        "2 Potions of Cure Light Wounds"
    );
}

#[test]
fn test_flavors_stable_within_session() {
    let registry = standard_registry();
    let session = flavor_session(4);
    let rings: Vec<_> = registry
        .iter()
        .filter(|t| t.category() == ItemCategory::Ring)
        .collect();
    let first: Vec<String> = rings
        .iter()
        .map(|t| session.flavor_of(t).unwrap().to_string())
        .collect();
    let again: Vec<String> = rings
        .iter()
        .rev()
        .map(|t| session.flavor_of(t).unwrap().to_string())
        .collect();
    assert_eq!(first, again.into_iter().rev().collect::<Vec<_>>());
}

#[test]
fn test_torches_stack_by_fuel() {
    let registry = standard_registry();
    let mut ctx = MkItemContext::new();
    let mut rng = GameRng::new(5);

    assert_eq!(
        registry.lookup(STORE_TORCH).unwrap().stack_policy(),
        StackPolicy::ExactMatch
    );

    let mut pile = Vec::new();
    for _ in 0..3 {
        let torches = create_item(&mut ctx, registry, &mut rng, STORE_TORCH, None).unwrap();
        stack_into(&mut pile, torches);
    }
    assert_eq!(pile.len(), 1);
    assert_eq!(pile[0].quantity(), 15);

    let mut dungeon = Vec::new();
    for _ in 0..3 {
        let torch = create_item(&mut ctx, registry, &mut rng, DUNGEON_TORCH, None).unwrap();
        let fuel = torch.bonuses().misc_use;
        let index = stack_into(&mut dungeon, torch);
        assert_eq!(dungeon[index].bonuses().misc_use, fuel);
    }
}

#[test]
fn test_whole_catalog_describes() {
    let registry = standard_registry();
    let session = flavor_session(6);
    let mut ctx = MkItemContext::at_depth(30);
    let mut rng = GameRng::new(6);
    for template in registry.iter() {
        let item = create_item(&mut ctx, registry, &mut rng, template.id, None).unwrap();
        let _ = describe(&item, registry, &session, true);
    }
}

/// A "(+N)" or "(-N)" group anywhere in `text`
fn has_pluses(text: &str) -> bool {
    text.match_indices('(').any(|(at, _)| {
        let rest = &text[at + 1..];
        let Some(end) = rest.find(')') else {
            return false;
        };
        let inner = &rest[..end];
        inner.len() > 1
            && (inner.starts_with('+') || inner.starts_with('-'))
            && inner[1..].chars().all(|c| c.is_ascii_digit())
    })
}

#[test]
fn test_identified_non_wearables_never_show_pluses() {
    let registry = standard_registry();
    let mut session = flavor_session(7);
    let mut ctx = MkItemContext::new();
    let mut rng = GameRng::new(7);

    let mut checked = 0;
    for template in registry.iter() {
        if template.effects().wear().is_some() {
            continue;
        }
        let mut item = create_item(&mut ctx, registry, &mut rng, template.id, None).unwrap();
        item.identify();
        session.learn(template);
        let text = describe(&item, registry, &session, true);
        assert!(!has_pluses(&text), "{}: {text}", template.id);
        checked += 1;
    }
    assert!(checked > 100);
}

#[test]
fn test_identified_ring_shows_pluses() {
    let registry = standard_registry();
    let mut session = flavor_session(8);
    let ring = registry.find(ItemCategory::Ring, "Strength").unwrap();
    let mut ctx = MkItemContext::at_depth(20);
    let mut rng = GameRng::new(8);
    let mut item = create_item(&mut ctx, registry, &mut rng, ring.id, None).unwrap();
    item.identify();
    session.learn(ring);
    assert!(has_pluses(&describe(&item, registry, &session, true)));
}
