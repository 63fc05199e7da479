use std::fs;

use delve_content::{ContentFactory, CrawlerFactory, CrawlerTemplate};
use delve_core::{Combatant, Crawler, CrawlerClass, CrawlerSpec, LevelGrowth, RulesConfig};

const CRAWLERS: &str = r#"
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
    (
        id: "merchant",
        class: npc,
        spec: (name: "Merchant", max_health: 40, defence_points: 2, level: 3, attack_points: 0),
        growth: Some((max_health: 0, attack: 0, defence: 0)),
    ),
]
"#;

const RULES: &str = r#"
[player_growth]
max_health = 20
attack = 3
defence = 1
"#;

fn data_dir(with_rules: bool) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(dir.path().join("crawlers.ron"), CRAWLERS).expect("write crawlers");
    if with_rules {
        fs::write(dir.path().join("rules.toml"), RULES).expect("write rules");
    }
    dir
}

#[test]
fn builds_every_class_from_data_directory() {
    let dir = data_dir(false);
    let content = ContentFactory::new(dir.path());
    assert_eq!(content.data_dir(), dir.path());
    let catalog = content.load_templates().unwrap();
    let factory = content.crawler_factory().unwrap();

    let built: Vec<Box<dyn Combatant>> = catalog
        .iter()
        .map(|template| factory.build(template).unwrap())
        .collect();

    let classes: Vec<_> = built.iter().map(|c| c.class()).collect();
    assert_eq!(
        classes,
        [CrawlerClass::Player, CrawlerClass::Enemy, CrawlerClass::Npc]
    );
    assert!(built.iter().all(|c| c.health() == c.max_health()));
}

#[test]
fn missing_rules_file_uses_default_player_growth() {
    let dir = data_dir(false);
    let content = ContentFactory::new(dir.path());
    let catalog = content.load_templates().unwrap();

    let mut hero = content
        .crawler_factory()
        .unwrap()
        .build_player(catalog.get("hero").unwrap())
        .unwrap();
    hero.level_up().unwrap();

    assert_eq!(hero.max_health(), 115);
    assert_eq!(hero.attack_power(), 15);
    assert_eq!(hero.defence(), 7);
}

#[test]
fn rules_file_overrides_player_growth() {
    let dir = data_dir(true);
    let content = ContentFactory::new(dir.path());
    let catalog = content.load_templates().unwrap();

    let mut hero = content
        .crawler_factory()
        .unwrap()
        .build(catalog.get("hero").unwrap())
        .unwrap();
    hero.level_up().unwrap();

    assert_eq!(hero.max_health(), 120);
    assert_eq!(hero.attack_power(), 13);
    assert_eq!(hero.defence(), 6);
}

#[test]
fn template_growth_overrides_rules_for_player() {
    let template = CrawlerTemplate::new(
        "tank",
        CrawlerClass::Player,
        CrawlerSpec::new("Tank", 200, 10, 0, 4),
    )
    .with_growth(LevelGrowth::new(30, 1, 4));
    let factory = CrawlerFactory::new(RulesConfig::default());

    let mut tank = factory.build_player(&template).unwrap();
    tank.level_up().unwrap();

    assert_eq!(tank.max_health(), 230);
    assert_eq!(tank.defence(), 14);
}

#[test]
fn built_crawlers_fight_with_shared_rules() {
    let dir = data_dir(false);
    let content = ContentFactory::new(dir.path());
    let catalog = content.load_templates().unwrap();
    let factory = content.crawler_factory().unwrap();

    let hero = factory.build(catalog.get("hero").unwrap()).unwrap();
    let mut goblin = factory.build(catalog.get("goblin").unwrap()).unwrap();

    hero.strike(goblin.as_crawler_mut()).unwrap();
    assert_eq!(goblin.health(), 21);

    let mut second_hero = factory.build(catalog.get("hero").unwrap()).unwrap();
    goblin.strike(second_hero.as_crawler_mut()).unwrap();
    assert_eq!(second_hero.health(), 99);
}

#[test]
fn enemy_without_growth_is_rejected() {
    let template = CrawlerTemplate::new(
        "slime",
        CrawlerClass::Enemy,
        CrawlerSpec::new("Slime", 10, 0, 0, 1),
    );

    let err = CrawlerFactory::default().build(&template).err().unwrap();

    assert!(err.to_string().contains("'slime'"));
    assert!(err.to_string().contains("growth curve"));
}

#[test]
fn invalid_spec_error_names_template() {
    let template = CrawlerTemplate::new(
        "ghost",
        CrawlerClass::Enemy,
        CrawlerSpec::new("Ghost", 0, 0, 0, 1),
    )
    .with_growth(LevelGrowth::flat());

    let err = CrawlerFactory::default().build(&template).err().unwrap();

    assert_eq!(
        err.to_string(),
        "Invalid crawler template 'ghost': max health must be greater than 0, got 0"
    );
}

#[test]
fn build_player_rejects_other_classes() {
    let template = CrawlerTemplate::new(
        "rat",
        CrawlerClass::Enemy,
        CrawlerSpec::new("Rat", 5, 0, 0, 1),
    );

    let err = CrawlerFactory::default().build_player(&template).unwrap_err();

    assert_eq!(err.to_string(), "Crawler template 'rat' is enemy, not player");
}
