use pressroom_core::{
    Article, ArticleRepository, CatalogService, ErrorKind, Magazine, RepoError, ValidationError,
};
use uuid::Uuid;

#[test]
fn out_of_range_titles_fail_without_registering() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();

    let long_title = "x".repeat(51);
    for title in ["", "abcd", long_title.as_str()] {
        let before = service.articles().len();
        let err = service
            .register_article(ada.id(), weekly.id(), title)
            .unwrap_err();
        assert_eq!(err.kind(), Some(ErrorKind::Value), "title {title:?}");
        assert_eq!(service.articles().len(), before);
    }

    service.register_article(ada.id(), weekly.id(), "abcde").unwrap();
    service
        .register_article(ada.id(), weekly.id(), "x".repeat(50))
        .unwrap();
    assert_eq!(service.articles().len(), 2);
}

#[test]
fn reference_checks_run_before_title_checks() {
    let mut service = CatalogService::in_memory();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();
    let ghost = Uuid::new_v4();

    let err = service.register_article(ghost, weekly.id(), "Tiny").unwrap_err();
    assert_eq!(
        err,
        RepoError::Validation(ValidationError::UnknownAuthor(ghost))
    );
}

#[test]
fn title_is_immutable_after_registration() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();
    let article = service
        .register_article(ada.id(), weekly.id(), "Systems Design 101")
        .unwrap();

    let err = service
        .retitle_article(article.id(), "Systems Design 201")
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Immutable));
    assert_eq!(
        service.article(article.id()).unwrap().title(),
        "Systems Design 101"
    );

    let unchanged = service
        .retitle_article(article.id(), "Systems Design 101")
        .unwrap();
    assert_eq!(unchanged, article);
}

#[test]
fn author_and_magazine_can_be_reassigned_to_registered_entities() {
    let mut service = CatalogService::in_memory();
    let ada = service.register_author("Ada").unwrap();
    let grace = service.register_author("Grace").unwrap();
    let weekly = service.register_magazine("Tech Weekly", "Technology").unwrap();
    let kitchen = service.register_magazine("Kitchen", "Food").unwrap();
    let article = service
        .register_article(ada.id(), weekly.id(), "Systems Design 101")
        .unwrap();

    service.reassign_author(article.id(), grace.id()).unwrap();
    let moved = service.move_article(article.id(), kitchen.id()).unwrap();
    assert_eq!(moved.author_id(), grace.id());
    assert_eq!(moved.magazine_id(), kitchen.id());
    assert!(service.author_articles(ada.id()).unwrap().is_empty());
    assert_eq!(service.magazine_articles(kitchen.id()).unwrap().len(), 1);

    let err = service
        .move_article(article.id(), Uuid::new_v4())
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Type));
    assert_eq!(
        service.article(article.id()).unwrap().magazine_id(),
        kitchen.id()
    );
}

#[test]
fn magazine_construction_bounds() {
    for name in ["ab", "Tech Weekly", "sixteen chars!!!"] {
        let magazine = Magazine::new(name, "Technology").unwrap();
        assert_eq!(magazine.name(), name);
        assert_eq!(magazine.category(), "Technology");
    }

    let err = Magazine::new("A", "Tech").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Value);
    assert_eq!(
        Magazine::new("Tech Weekly", "").unwrap_err(),
        ValidationError::EmptyCategory
    );
}

#[test]
fn repository_registry_is_injectable_and_reusable() {
    let mut first = CatalogService::in_memory();
    let ada = first.register_author("Ada").unwrap();
    let weekly = first.register_magazine("Tech Weekly", "Technology").unwrap();
    first.add_article(ada.id(), weekly.id(), "Systems Design 101").unwrap();

    let catalog = first.into_repo();
    assert_eq!(catalog.list_articles().len(), 1);

    let resumed = CatalogService::new(catalog);
    assert_eq!(resumed.articles().len(), 1);
    assert!(CatalogService::in_memory().articles().is_empty());

    let stray = Article::new(ada.id(), weekly.id(), "Unregistered").unwrap();
    assert!(resumed.article(stray.id()).is_none());
}
