//! Entity counts over a snapshot or change-set.

use serde::Serialize;

use crate::model::Project;

/// Project, class, property and method counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SnapshotOverview {
    pub projects: usize,
    pub classes: usize,
    pub properties: usize,
    pub methods: usize,
}

impl SnapshotOverview {
    pub fn from_projects(projects: &[Project]) -> Self {
        let classes = projects.iter().flat_map(|p| p.classes());
        let (classes, properties, methods) =
            classes.fold((0, 0, 0), |(c, p, m), class| {
                (c + 1, p + class.properties().len(), m + class.methods().len())
            });
        Self {
            projects: projects.len(),
            classes,
            properties,
            methods,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.projects == 0
    }
}

/// Render an overview as plain text, one count per line.
pub fn render_overview(overview: &SnapshotOverview) -> String {
    let mut out = String::new();
    out.push_str(&format!("Projects:   {}\n", overview.projects));
    out.push_str(&format!("Classes:    {}\n", overview.classes));
    out.push_str(&format!("Properties: {}\n", overview.properties));
    out.push_str(&format!("Methods:    {}\n", overview.methods));
    out
}
