//! delve-data: static content for the delve item engine
//!
//! Contains the object catalog, flavor names and colors, and the
//! scroll-title syllables.

pub mod flavors;
pub mod objects;

use std::sync::OnceLock;

use delve_core::object::{FlavorSession, ObjectRegistry};

pub use flavors::{
    AMULET_COLORS, AMULETS, MAX_TITLES, METAL_COLORS, METALS, MUSHROOM_COLORS, MUSHROOMS,
    POTION_COLORS, POTIONS, ROCK_COLORS, ROCKS, SYLLABLES, StandardFlavors, WOOD_COLORS, WOODS,
};
pub use objects::{
    MAX_DUNGEON_OBJECTS, OBJ_NOTHING, OBJ_RUINED_CHEST, OBJECTS, dungeon_objects, get_object,
    num_objects,
};

/// The standard flavor tables
pub static STANDARD_FLAVORS: StandardFlavors = StandardFlavors;

static REGISTRY: OnceLock<ObjectRegistry> = OnceLock::new();

/// Registry over the full catalog, built on first use.
///
/// The catalog is checked by this crate's tests; should it ever fail to
/// load, the error is logged and a registry holding only the placeholder
/// is used instead.
pub fn standard_registry() -> &'static ObjectRegistry {
    REGISTRY.get_or_init(|| match ObjectRegistry::load(OBJECTS) {
        Ok(registry) => registry,
        Err(err) => {
            tracing::error!(%err, "object catalog failed to load");
            ObjectRegistry::placeholder()
        }
    })
}

/// A flavor session over the standard tables
pub fn flavor_session(seed: u64) -> FlavorSession<'static> {
    FlavorSession::new(&STANDARD_FLAVORS, seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_loads_whole_catalog() {
        let registry = standard_registry();
        assert_eq!(registry.count(), num_objects());
        assert_eq!(registry.nothing().id.index(), OBJ_NOTHING);
        assert!(std::ptr::eq(registry, standard_registry()));
    }

    #[test]
    fn test_flavor_session_is_seeded() {
        let a = flavor_session(7);
        let b = flavor_session(7);
        assert_eq!(a.seed(), 7);
        assert_eq!(
            a.flavor_name(delve_core::object::FlavorKind::Rock, 3),
            b.flavor_name(delve_core::object::FlavorKind::Rock, 3)
        );
    }
}
