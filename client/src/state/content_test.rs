use super::*;
use std::collections::HashSet;

fn assert_unique(ids: impl IntoIterator<Item = u32>) {
    let mut seen = HashSet::new();
    for id in ids {
        assert!(seen.insert(id), "duplicate id {id}");
    }
}

#[test]
fn list_ids_are_unique() {
    assert_unique(CAREER.iter().map(|c| c.id));
    assert_unique(PROJECTS.iter().map(|p| p.id));
    assert_unique(ARTICLES.iter().map(|a| a.id));
    assert_unique(LINKS.iter().map(|l| l.id));
}

#[test]
fn technology_names_are_unique_per_project() {
    for project in PROJECTS {
        let names: HashSet<_> = project.technologies.iter().map(|t| t.name).collect();
        assert_eq!(names.len(), project.technologies.len(), "project {}", project.id);
    }
}

#[test]
fn section_sizes_match_placeholder_content() {
    assert_eq!(CAREER.len(), 2);
    assert_eq!(PROJECTS.len(), 2);
    assert!(PROJECTS.iter().all(|p| p.technologies.len() == 3));
    assert_eq!(ARTICLES.len(), 2);
    assert_eq!(
        LINKS.iter().map(|l| l.name).collect::<Vec<_>>(),
        vec!["GitHub", "Twitter / X", "LinkedIn", "Qiita"]
    );
}

#[test]
fn tone_classes_are_bem_modifiers() {
    assert_eq!(BadgeTone::Indigo.class(), "tech-badge--indigo");
    assert_eq!(IconTone::DeepBlue.class(), "link-icon--deep-blue");
}
