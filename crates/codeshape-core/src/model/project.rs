use std::fmt;

use super::{impl_content_eq, Class};
use crate::hash::{EntityKind, StructuralHash, StructuralHasher, StructurallyHashed};

/// A compilation unit grouping classes.
#[derive(Clone)]
pub struct Project {
    name: String,
    classes: Vec<Class>,
    hash: StructuralHash,
}

impl_content_eq!(Project);

impl Project {
    pub fn new(name: impl Into<String>, classes: Vec<Class>) -> Self {
        let name = name.into();
        let hash = StructuralHasher::new(EntityKind::Project)
            .str(&name)
            .ordered(classes.iter().map(|c| c.structural_hash()))
            .finish();
        Self {
            name,
            classes,
            hash,
        }
    }

    pub fn empty() -> Self {
        Self::new(String::new(), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn classes(&self) -> &[Class] {
        &self.classes
    }

    /// A copy with the same name holding the given classes.
    pub fn with_classes(&self, classes: Vec<Class>) -> Self {
        Self::new(self.name.clone(), classes)
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("name", &self.name)
            .field("classes", &self.classes)
            .finish_non_exhaustive()
    }
}
