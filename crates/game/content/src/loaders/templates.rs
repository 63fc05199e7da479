//! Crawler template catalog loader.
//!
//! Loads crawler templates (players, enemies, NPCs) from RON files.

use std::collections::HashSet;
use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::template::CrawlerTemplate;

/// Templates keyed by id, in file order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: Vec<CrawlerTemplate>,
}

impl TemplateCatalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(templates: Vec<CrawlerTemplate>) -> LoadResult<Self> {
        let mut seen = HashSet::new();
        for template in &templates {
            if !seen.insert(template.id.as_str()) {
                anyhow::bail!("Duplicate crawler template id '{}'", template.id);
            }
        }
        Ok(Self { templates })
    }

    pub fn get(&self, id: &str) -> Option<&CrawlerTemplate> {
        self.templates.iter().find(|template| template.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CrawlerTemplate> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Loader for crawler templates from RON files.
pub struct TemplateLoader;

impl TemplateLoader {
    /// Load a template catalog from a RON file.
    ///
    /// RON format: `Vec<CrawlerTemplate>`
    ///
    /// ```ron
    /// [
    ///     (
    ///         id: "goblin",
    ///         class: enemy,
    ///         spec: (name: "Goblin", max_health: 30, defence_points: 1, level: 1, attack_points: 6),
    ///         growth: Some((max_health: 5, attack: 2, defence: 1)),
    ///     ),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<TemplateCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a template catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<TemplateCatalog> {
        let templates: Vec<CrawlerTemplate> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse crawler template RON: {}", e))?;

        let catalog = TemplateCatalog::new(templates)?;
        tracing::debug!(
            target: "delve_content::loaders",
            count = catalog.len(),
            "loaded crawler templates"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use delve_core::{CrawlerClass, LevelGrowth};

    const CATALOG: &str = r#"
    [
        (
            id: "hero",
            class: player,
            spec: (name: "Hero", max_health: 100, defence_points: 5, level: 1, attack_points: 10),
        ),
        (
            id: "goblin",
            class: enemy,
            spec: (name: "Goblin", max_health: 30, defence_points: 1, level: 1, attack_points: 6),
            growth: Some((max_health: 5, attack: 2, defence: 1)),
        ),
    ]
    "#;

    #[test]
    fn parses_templates_in_order() {
        let catalog = TemplateLoader::parse(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        let hero = catalog.get("hero").unwrap();
        assert_eq!(hero.class, CrawlerClass::Player);
        assert_eq!(hero.growth, None);
        assert_eq!(hero.spec.max_health, 100);

        let goblin = catalog.get("goblin").unwrap();
        assert_eq!(goblin.growth, Some(LevelGrowth::new(5, 2, 1)));

        let ids: Vec<_> = catalog.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, ["hero", "goblin"]);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let duplicated = r#"
        [
            (id: "rat", class: enemy, spec: (name: "Rat", max_health: 5, defence_points: 0, level: 0, attack_points: 1)),
            (id: "rat", class: enemy, spec: (name: "Rat", max_health: 5, defence_points: 0, level: 0, attack_points: 1)),
        ]
        "#;
        let err = TemplateLoader::parse(duplicated).unwrap_err();
        assert!(err.to_string().contains("Duplicate crawler template id 'rat'"));
    }

    #[test]
    fn reports_malformed_ron() {
        let err = TemplateLoader::parse("[ (id: ").unwrap_err();
        assert!(err.to_string().contains("crawler template RON"));
    }
}
