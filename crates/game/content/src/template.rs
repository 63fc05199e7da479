//! Crawler templates: construction data for one kind of crawler.

use delve_core::{CrawlerClass, CrawlerSpec, LevelGrowth, TemplateKind};

/// A named crawler definition loaded from content.
///
/// `growth` is optional for players (the rules' player curve applies) and
/// required for every other class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrawlerTemplate {
    /// Catalog key, unique within a template file.
    pub id: String,
    pub class: CrawlerClass,
    pub spec: CrawlerSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub growth: Option<LevelGrowth>,
}

impl CrawlerTemplate {
    pub fn new(id: impl Into<String>, class: CrawlerClass, spec: CrawlerSpec) -> Self {
        Self {
            id: id.into(),
            class,
            spec,
            growth: None,
        }
    }

    pub fn with_growth(mut self, growth: LevelGrowth) -> Self {
        self.growth = Some(growth);
        self
    }

    /// Kind for a non-player template, if it declares a growth curve.
    pub fn template_kind(&self) -> Option<TemplateKind> {
        self.growth.map(|growth| TemplateKind::new(self.class, growth))
    }
}
