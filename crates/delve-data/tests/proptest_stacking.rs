//! Property-based tests for stacking over the real catalog
//!
//! - A template's stack band alone decides whether copies can ever stack
//! - In the grouped band, stacking is exactly bonus equality
//! - Merging is associative and respects the stack limit
//! - Splitting and merging back restores the original stack

use delve_core::GameRng;
use delve_core::error::ItemError;
use delve_core::object::{
    ItemInstance, MAX_STACK, MkItemContext, TemplateId, can_stack, create_item, merge_into,
    merge_items, split_item, stack_key,
};
use delve_data::{num_objects, standard_registry};
use proptest::prelude::*;

/// "& Arrow~", stack code 193
const ARROW: TemplateId = TemplateId(80);

fn arrows(ctx: &mut MkItemContext, quantity: u16) -> ItemInstance {
    let mut rng = GameRng::new(0);
    create_item(ctx, standard_registry(), &mut rng, ARROW, Some(quantity)).unwrap()
}

proptest! {
    /// Property: copies of an item stack exactly when the template's band allows it
    #[test]
    fn band_decides_stacking(index in 0..num_objects(), seed in any::<u64>()) {
        let registry = standard_registry();
        let id = TemplateId(index as u16);
        let template = registry.lookup(id).unwrap();
        let mut ctx = MkItemContext::new();
        let mut rng = GameRng::new(seed);
        let item = create_item(&mut ctx, registry, &mut rng, id, None).unwrap();

        let policy = template.stack_policy();
        prop_assert_eq!(can_stack(&item, &item.clone()), policy.can_stack());
        prop_assert_eq!(stack_key(&item).is_some(), policy.can_stack());
    }

    /// Property: grouped-band items stack iff their rolled bonuses are equal
    #[test]
    fn grouped_band_needs_equal_bonuses(
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
        depth in 0u8..60,
    ) {
        let registry = standard_registry();
        let mut ctx = MkItemContext::at_depth(depth);
        let a = create_item(&mut ctx, registry, &mut GameRng::new(seed_a), ARROW, None).unwrap();
        let b = create_item(&mut ctx, registry, &mut GameRng::new(seed_b), ARROW, None).unwrap();

        prop_assert_eq!(can_stack(&a, &b), a.bonuses() == b.bonuses());
        prop_assert_eq!(can_stack(&a, &b), stack_key(&a) == stack_key(&b));
    }

    /// Property: merge order does not change the resulting stack
    #[test]
    fn merge_is_associative(q1 in 1u16..=85, q2 in 1u16..=85, q3 in 1u16..=85) {
        let mut ctx = MkItemContext::new();
        let a = arrows(&mut ctx, q1);
        let b = arrows(&mut ctx, q2);
        let c = arrows(&mut ctx, q3);

        let left = merge_items(&merge_items(&a, &b).unwrap(), &c).unwrap();
        let right = merge_items(&a, &merge_items(&b, &c).unwrap()).unwrap();

        prop_assert_eq!(left.quantity(), q1 + q2 + q3);
        prop_assert_eq!(left, right);
    }

    /// Property: a merge past the stack limit fails and changes nothing
    #[test]
    fn merge_respects_stack_limit(q1 in 1u16..=MAX_STACK, q2 in 1u16..=MAX_STACK) {
        let mut ctx = MkItemContext::new();
        let mut a = arrows(&mut ctx, q1);
        let b = arrows(&mut ctx, q2);
        let before = a.clone();

        let total = u32::from(q1) + u32::from(q2);
        match merge_into(&mut a, &b) {
            Ok(()) => prop_assert_eq!(u32::from(a.quantity()), total),
            Err(err) => {
                prop_assert_eq!(err, ItemError::StackFull { total });
                prop_assert!(total > u32::from(MAX_STACK));
                prop_assert_eq!(a, before);
            }
        }
    }

    /// Property: splitting and merging back restores the original stack
    #[test]
    fn split_then_merge_round_trips(
        (quantity, count) in (2u16..=MAX_STACK).prop_flat_map(|q| (Just(q), 1..q)),
    ) {
        let mut ctx = MkItemContext::new();
        let original = arrows(&mut ctx, quantity);
        let mut item = original.clone();

        let part = split_item(&mut ctx, &mut item, count).unwrap();
        prop_assert_eq!(item.quantity() + part.quantity(), quantity);
        prop_assert_ne!(item.id, part.id);

        merge_into(&mut item, &part).unwrap();
        prop_assert_eq!(item, original);
    }
}
