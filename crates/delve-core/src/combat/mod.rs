//! Combat rate resolution
//!
//! Derives how many blows a character lands per round from strength,
//! dexterity and weapon weight.

mod blows;

pub use blows::{
    AttackProfile, BLOWS_TABLE, DEX_BUCKETS, STR_BUCKETS, attack_blows, blows_per_round,
    dexterity_bucket, strength_bucket,
};
