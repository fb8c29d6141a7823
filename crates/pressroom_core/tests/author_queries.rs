use pressroom_core::{CatalogService, EntityKind, ErrorKind, RepoError};
use uuid::Uuid;

#[test]
fn add_article_scenario_links_author_magazine_and_title() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();

    let article = service
        .add_article(ada.id(), weekly.id(), "Systems Design 101")
        .unwrap();

    let author = service.author(article.author_id()).unwrap();
    let magazine = service.magazine(article.magazine_id()).unwrap();
    assert_eq!(author.name(), "Ada");
    assert_eq!(magazine.category(), "Technology");
    assert_eq!(article.title(), "Systems Design 101");
    assert_eq!(
        service.article_titles(weekly.id()).unwrap(),
        Some(vec!["Systems Design 101"])
    );
    assert_eq!(
        service.topic_areas(ada.id()).unwrap(),
        Some(vec!["Technology"])
    );
}

#[test]
fn topic_areas_is_none_without_articles() {
    let mut service = CatalogService::in_memory();
    let idle = service.register_author("Idle Writer").unwrap();
    service.register_magazine("Quiet", "Nothing").unwrap();

    assert_eq!(service.topic_areas(idle.id()).unwrap(), None);
    assert!(service.author_articles(idle.id()).unwrap().is_empty());
    assert!(service.author_magazines(idle.id()).unwrap().is_empty());
}

#[test]
fn author_articles_follow_registry_order_and_skip_other_authors() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let grace = service.register_author("Grace").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();

    service.add_article(ada.id(), weekly.id(), "First piece").unwrap();
    service.add_article(grace.id(), weekly.id(), "Compilers today").unwrap();
    service.add_article(ada.id(), weekly.id(), "Second piece").unwrap();

    let titles: Vec<&str> = service
        .author_articles(ada.id())
        .unwrap()
        .into_iter()
        .map(|article| article.title())
        .collect();
    assert_eq!(titles, vec!["First piece", "Second piece"]);
}

#[test]
fn author_magazines_and_topic_areas_are_deduplicated() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();
    let monthly = service.register_magazine("Code Monthly", "Technology").unwrap();
    let kitchen = service.register_magazine("Kitchen", "Food").unwrap();

    service.add_article(ada.id(), weekly.id(), "Systems Design 101").unwrap();
    service.add_article(ada.id(), weekly.id(), "Systems Design 102").unwrap();
    service.add_article(ada.id(), monthly.id(), "Borrow checking").unwrap();
    service.add_article(ada.id(), kitchen.id(), "Baking bread").unwrap();

    let magazines: Vec<_> = service
        .author_magazines(ada.id())
        .unwrap()
        .into_iter()
        .map(|magazine| magazine.id())
        .collect();
    assert_eq!(magazines, vec![weekly.id(), monthly.id(), kitchen.id()]);
    assert_eq!(
        service.topic_areas(ada.id()).unwrap(),
        Some(vec!["Technology", "Food"])
    );
}

#[test]
fn add_article_propagates_validation_and_leaves_registry_untouched() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();

    let err = service.add_article(ada.id(), weekly.id(), "Tiny").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Value));

    let err = service
        .add_article(ada.id(), Uuid::new_v4(), "Valid Title")
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Type));

    assert!(service.articles().is_empty());
}

#[test]
fn queries_on_unknown_author_report_type_error() {
    let service = CatalogService::in_memory();
    let ghost = Uuid::new_v4();

    let err = service.author_articles(ghost).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Type));
    assert!(matches!(
        service.topic_areas(ghost),
        Err(RepoError::Validation(_))
    ));
}

#[test]
fn register_author_rejects_empty_name() {
    let mut service = CatalogService::in_memory();

    let err = service.register_author("").unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Value));
    assert!(service.authors().is_empty());

    // not found is distinct from a validation failure
    let missing = service.reassign_author(Uuid::new_v4(), Uuid::new_v4());
    assert!(matches!(
        missing,
        Err(RepoError::NotFound {
            entity: EntityKind::Article,
            ..
        })
    ));
}
