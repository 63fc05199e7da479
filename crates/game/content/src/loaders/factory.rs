//! Content factory for building crawlers from data files.

use std::path::{Path, PathBuf};

use delve_core::{Combatant, CrawlerClass, PlayerCrawler, RulesConfig, TemplateCrawler};

use crate::loaders::{ConfigLoader, LoadResult, TemplateCatalog, TemplateLoader};
use crate::template::CrawlerTemplate;

/// Content factory that loads crawler content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── rules.toml
/// └── crawlers.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load rules from `rules.toml`, or defaults if the file does not exist.
    pub fn load_rules(&self) -> LoadResult<RulesConfig> {
        let path = self.data_dir.join("rules.toml");
        if !path.exists() {
            return Ok(RulesConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the template catalog from `crawlers.ron`.
    pub fn load_templates(&self) -> LoadResult<TemplateCatalog> {
        let path = self.data_dir.join("crawlers.ron");
        TemplateLoader::load(&path)
    }

    /// Load rules and build a crawler factory from them.
    pub fn crawler_factory(&self) -> LoadResult<CrawlerFactory> {
        Ok(CrawlerFactory::new(self.load_rules()?))
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Builds live crawlers from templates under a set of rules.
#[derive(Clone, Debug, Default)]
pub struct CrawlerFactory {
    rules: RulesConfig,
}

impl CrawlerFactory {
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Build a player crawler.
    ///
    /// The template's own growth, if any, overrides the rules' player curve.
    pub fn build_player(&self, template: &CrawlerTemplate) -> LoadResult<PlayerCrawler> {
        if template.class != CrawlerClass::Player {
            anyhow::bail!(
                "Crawler template '{}' is {}, not player",
                template.id,
                template.class
            );
        }
        let kind = match template.growth {
            Some(growth) => RulesConfig::with_player_growth(growth).player_kind(),
            None => self.rules.player_kind(),
        };
        PlayerCrawler::from_spec(template.spec.clone(), kind)
            .map_err(|e| anyhow::anyhow!("Invalid crawler template '{}': {}", template.id, e))
    }

    /// Build any crawler; players become [`PlayerCrawler`], every other class
    /// a [`TemplateCrawler`] with the template's growth curve.
    pub fn build(&self, template: &CrawlerTemplate) -> LoadResult<Box<dyn Combatant>> {
        if template.class == CrawlerClass::Player {
            return Ok(Box::new(self.build_player(template)?));
        }

        let kind = template.template_kind().ok_or_else(|| {
            anyhow::anyhow!(
                "Crawler template '{}' ({}) must declare a growth curve",
                template.id,
                template.class
            )
        })?;
        let crawler = TemplateCrawler::from_spec(template.spec.clone(), kind)
            .map_err(|e| anyhow::anyhow!("Invalid crawler template '{}': {}", template.id, e))?;

        tracing::debug!(
            target: "delve_content::factory",
            template = %template.id,
            class = %template.class,
            "built crawler"
        );
        Ok(Box::new(crawler))
    }
}
