//! Object system
//!
//! Templates, the registry that holds them, item instances and the rules
//! that create, stack and name them.

mod category;
mod effects;
mod flavor;
mod mkobj;
mod obj;
mod objname;
mod registry;
mod special;
mod stack;
mod template;

pub use category::ItemCategory;
pub use effects::{
    ChestFlags, Effects, FoodFlags, Potion1Flags, Potion2Flags, Scroll1Flags, Scroll2Flags,
    SpellSet, StaffFlags, WandFlags, WearFlags,
};
pub use flavor::{FlavorKind, FlavorSession, FlavorTables};
pub use mkobj::{
    MkItemContext, create_item, enchantment_bonus, merge_into, merge_items, split_item,
    stack_into,
};
pub use obj::{ComputedBonuses, IdentFlags, ItemId, ItemInstance};
pub use objname::{base_name, describe};
pub use registry::ObjectRegistry;
pub use special::{RevealMask, SpecialName, SpecialNames};
pub use stack::{MAX_STACK, StackKey, StackPolicy, can_stack, stack_key};
pub use template::{Dice, ObjectDef, ObjectTemplate, TemplateId};
