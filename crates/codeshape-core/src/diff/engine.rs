//! Recursive change-set computation.
//!
//! Each level matches entities from `new` to `old` by an identity key
//! (name, or full name for classes) and then compares structural hashes:
//!
//! | counterpart | hashes | output |
//! |---|---|---|
//! | none | - | the new entity, whole |
//! | found | equal | nothing |
//! | found | differ, container (Project, Class) | identity fields plus recursive child diff |
//! | found | differ, leaf (Property, Method) | the new entity, whole |
//!
//! Parameters and method bodies travel inside their method, which is a
//! leaf, so they are never sub-diffed.

use std::collections::HashMap;

use crate::hash::StructurallyHashed;
use crate::model::{Class, Project};

/// Compute what is new or different in `new` relative to `old`.
///
/// Returns freshly constructed projects; inputs are never modified.
/// Output order follows `new`.
pub fn diff(old: &[Project], new: &[Project]) -> Vec<Project> {
    let old_by_name = index_first(old, Project::name);
    let changes: Vec<Project> = new
        .iter()
        .filter_map(|project| match old_by_name.get(project.name()) {
            None => Some(project.clone()),
            Some(previous) if same_content(*previous, project) => None,
            Some(previous) => Some(project.with_classes(diff_classes(
                previous.classes(),
                project.classes(),
            ))),
        })
        .collect();

    tracing::debug!(
        old_projects = old.len(),
        new_projects = new.len(),
        changed_projects = changes.len(),
        "diffed projects"
    );
    changes
}

fn diff_classes(old: &[Class], new: &[Class]) -> Vec<Class> {
    let old_by_name = index_first(old, Class::full_name);
    let changes: Vec<Class> = new
        .iter()
        .filter_map(|class| match old_by_name.get(class.full_name()) {
            None => Some(class.clone()),
            Some(previous) if same_content(*previous, class) => None,
            Some(previous) => Some(class.with_members(
                diff_leaves(previous.properties(), class.properties(), |p| p.name()),
                diff_leaves(previous.methods(), class.methods(), |m| m.name()),
            )),
        })
        .collect();

    tracing::debug!(
        old_classes = old.len(),
        new_classes = new.len(),
        changed_classes = changes.len(),
        "diffed classes"
    );
    changes
}

/// Leaf level: added or changed entities are emitted whole.
fn diff_leaves<T, K>(old: &[T], new: &[T], key: K) -> Vec<T>
where
    T: StructurallyHashed + Clone,
    K: Fn(&T) -> &str,
{
    let old_by_name = index_first(old, &key);
    new.iter()
        .filter(|entity| match old_by_name.get(key(*entity)) {
            None => true,
            Some(previous) => !same_content(*previous, *entity),
        })
        .cloned()
        .collect()
}

/// Index by identity key. When a key repeats, the first occurrence wins,
/// so lookups agree with a front-to-back linear scan.
fn index_first<'a, T, K>(entities: &'a [T], key: K) -> HashMap<&'a str, &'a T>
where
    K: Fn(&'a T) -> &'a str,
{
    let mut index = HashMap::with_capacity(entities.len());
    for entity in entities {
        index.entry(key(entity)).or_insert(entity);
    }
    index
}

fn same_content<T: StructurallyHashed>(a: &T, b: &T) -> bool {
    a.structural_hash() == b.structural_hash()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Property, TypeRef};

    fn prop(ty: &str, name: &str) -> Property {
        Property::new(TypeRef::parse(ty), name)
    }

    #[test]
    fn test_index_first_keeps_first_duplicate() {
        let props = vec![prop("int", "X"), prop("string", "X")];
        let index = index_first(&props, |p: &Property| p.name());
        assert_eq!(index.len(), 1);
        assert_eq!(index["X"].type_ref().full_name(), "int");
    }

    #[test]
    fn test_diff_leaves_reports_added_and_changed_only() {
        let old = vec![prop("int", "A"), prop("int", "B"), prop("int", "Gone")];
        let new = vec![prop("int", "A"), prop("long", "B"), prop("int", "C")];
        let changed = diff_leaves(&old, &new, |p: &Property| p.name());
        let names: Vec<&str> = changed.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["B", "C"]);
        assert_eq!(changed[0].type_ref().full_name(), "long");
    }

    #[test]
    fn test_changed_class_keeps_identity_fields() {
        let old_class = Class::builder("NS", "A")
            .base_type(Some(TypeRef::parse("NS.Base")))
            .interface_type(TypeRef::parse("NS.IThing"))
            .property(prop("int", "X"))
            .build();
        let new_class = Class::builder("NS", "A")
            .base_type(Some(TypeRef::parse("NS.Base")))
            .interface_type(TypeRef::parse("NS.IThing"))
            .properties([prop("int", "X"), prop("int", "Y")])
            .build();
        let changed = diff_classes(&[old_class], &[new_class]);
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].full_name(), "NS.A");
        assert_eq!(changed[0].base_type().map(|t| t.full_name()), Some("NS.Base"));
        assert_eq!(changed[0].interface_types().len(), 1);
        assert_eq!(changed[0].properties().len(), 1);
        assert_eq!(changed[0].properties()[0].name(), "Y");
    }
}
