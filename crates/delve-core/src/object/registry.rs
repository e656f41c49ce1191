//! Object template registry
//!
//! The catalog is loaded once and is read-only afterwards, so a shared
//! reference can be handed to any number of readers without locking.

use hashbrown::HashMap;

use super::{ItemCategory, ObjectDef, ObjectTemplate, TemplateId};
use crate::error::{ItemError, RegistryError};

/// Immutable catalog of object templates, indexed by [`TemplateId`]
#[derive(Debug, Clone)]
pub struct ObjectRegistry {
    templates: Vec<ObjectTemplate>,
    nothing: TemplateId,
}

impl ObjectRegistry {
    /// Build a registry from catalog rows.
    ///
    /// Ids are assigned densely in row order. Scroll and potion families
    /// are checked so that a stack code never names two different objects.
    /// If the catalog lacks a "nothing" placeholder one is appended.
    pub fn load(defs: &[ObjectDef]) -> Result<Self, RegistryError> {
        if defs.is_empty() {
            return Err(RegistryError::Empty);
        }
        // Leave room for an appended placeholder.
        if defs.len() >= usize::from(u16::MAX) {
            return Err(RegistryError::TooManyTemplates(defs.len()));
        }

        check_families(defs)?;

        let mut templates: Vec<ObjectTemplate> = defs
            .iter()
            .enumerate()
            .map(|(index, def)| ObjectTemplate {
                id: TemplateId(index as u16),
                def: *def,
            })
            .collect();

        let nothing = match templates
            .iter()
            .find(|t| t.def.category == ItemCategory::Nothing && t.def.name == "nothing")
        {
            Some(template) => template.id,
            None => {
                let id = TemplateId(templates.len() as u16);
                templates.push(ObjectTemplate {
                    id,
                    def: ObjectDef::NOTHING,
                });
                id
            }
        };

        tracing::debug!(count = templates.len(), nothing = %nothing, "loaded object registry");
        Ok(Self { templates, nothing })
    }

    /// A registry holding only the "nothing" placeholder
    pub fn placeholder() -> Self {
        Self {
            templates: vec![ObjectTemplate {
                id: TemplateId(0),
                def: ObjectDef::NOTHING,
            }],
            nothing: TemplateId(0),
        }
    }

    /// Look up a template by id.
    pub fn lookup(&self, id: TemplateId) -> Result<&ObjectTemplate, ItemError> {
        self.templates.get(id.index()).ok_or(ItemError::NotFound(id))
    }

    /// Look up a template, falling back to the "nothing" placeholder.
    ///
    /// A miss is a content bug: debug builds assert, release builds log it
    /// and carry on with the placeholder.
    pub fn lookup_or_nothing(&self, id: TemplateId) -> &ObjectTemplate {
        match self.templates.get(id.index()) {
            Some(template) => template,
            None => {
                debug_assert!(false, "template {id} is outside the loaded catalog");
                tracing::warn!(template = %id, "unknown template, using placeholder");
                self.nothing()
            }
        }
    }

    /// Number of templates, placeholder included
    pub fn count(&self) -> usize {
        self.templates.len()
    }

    /// The inventory placeholder template
    pub fn nothing(&self) -> &ObjectTemplate {
        &self.templates[self.nothing.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ObjectTemplate> {
        self.templates.iter()
    }

    /// First template of `category` whose plain name is `name` (case-insensitive)
    pub fn find(&self, category: ItemCategory, name: &str) -> Option<&ObjectTemplate> {
        self.templates.iter().find(|t| {
            t.def.category == category && t.def.plain_name().eq_ignore_ascii_case(name)
        })
    }
}

fn check_families(defs: &[ObjectDef]) -> Result<(), RegistryError> {
    let mut seen: HashMap<(ItemCategory, u8), &'static str> = HashMap::new();
    for def in defs {
        let family = def.category.family();
        if !(family.is_scroll() || family.is_potion()) {
            continue;
        }
        let first = *seen.entry((family, def.stack_code)).or_insert(def.name);
        if first != def.name {
            return Err(RegistryError::ConflictingStackCode {
                category: family,
                stack_code: def.stack_code,
                first,
                second: def.name,
            });
        }
    }
    Ok(())
}
