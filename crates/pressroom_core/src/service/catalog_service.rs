//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide construction, mutation and derived-query entry points.
//! - Compute reverse views (author -> articles, magazine -> articles) by
//!   filtering the article registry.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Reverse views follow article registry order; deduplicated results keep
//!   first-appearance order.
//! - "No data" is reported as `None`, never as an empty list.

use crate::model::article::{Article, ArticleId};
use crate::model::author::{Author, AuthorId};
use crate::model::magazine::{Magazine, MagazineId};
use crate::model::validation::ValidationError;
use crate::repo::catalog_repo::{
    CatalogRepository, EntityKind, InMemoryCatalog, RepoError, RepoResult,
};
use log::warn;
use std::collections::HashSet;
use std::hash::Hash;

/// An author needs at least this many articles in one magazine to count as a
/// contributing author of it.
pub const CONTRIBUTING_AUTHOR_MIN_ARTICLES: usize = 2;

/// Use-case facade over a catalog repository.
pub struct CatalogService<R: CatalogRepository = InMemoryCatalog> {
    repo: R,
}

impl CatalogService<InMemoryCatalog> {
    /// Creates a service over a fresh, empty in-memory catalog.
    pub fn in_memory() -> Self {
        Self::new(InMemoryCatalog::new())
    }
}

impl<R: CatalogRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Consumes the service and hands back the underlying registry.
    pub fn into_repo(self) -> R {
        self.repo
    }

    pub fn register_author(&mut self, name: impl Into<String>) -> RepoResult<Author> {
        let author = Author::new(name)?;
        self.repo.create_author(author.clone())?;
        Ok(author)
    }

    pub fn register_magazine(
        &mut self,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let magazine = Magazine::new(name, category)?;
        self.repo.create_magazine(magazine.clone())?;
        Ok(magazine)
    }

    /// Constructs and registers one article.
    ///
    /// # Contract
    /// - Checks the author reference, then the magazine reference, then the
    ///   title; the first failure is returned.
    /// - On any failure the article registry is unchanged.
    pub fn register_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        self.require_author(author_id)?;
        self.require_magazine(magazine_id)?;
        let article = Article::new(author_id, magazine_id, title)?;
        self.repo.create_article(article.clone())?;
        Ok(article)
    }

    /// Author-side entry point for writing a new article.
    ///
    /// Same contract as [`Self::register_article`].
    pub fn add_article(
        &mut self,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: impl Into<String>,
    ) -> RepoResult<Article> {
        self.register_article(author_id, magazine_id, title)
    }

    pub fn rename_magazine(
        &mut self,
        id: MagazineId,
        name: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self.magazine_or_not_found(id)?.clone();
        magazine.set_name(name)?;
        self.repo.update_magazine(magazine.clone())?;
        Ok(magazine)
    }

    pub fn recategorize_magazine(
        &mut self,
        id: MagazineId,
        category: impl Into<String>,
    ) -> RepoResult<Magazine> {
        let mut magazine = self.magazine_or_not_found(id)?.clone();
        magazine.set_category(category)?;
        self.repo.update_magazine(magazine.clone())?;
        Ok(magazine)
    }

    /// Credits an existing article to another registered author.
    pub fn reassign_author(&mut self, id: ArticleId, author_id: AuthorId) -> RepoResult<Article> {
        let mut article = self.article_or_not_found(id)?.clone();
        article.set_author(author_id);
        self.repo.update_article(article.clone())?;
        Ok(article)
    }

    /// Moves an existing article to another registered magazine.
    pub fn move_article(&mut self, id: ArticleId, magazine_id: MagazineId) -> RepoResult<Article> {
        let mut article = self.article_or_not_found(id)?.clone();
        article.set_magazine(magazine_id);
        self.repo.update_article(article.clone())?;
        Ok(article)
    }

    /// Titles are fixed at registration.
    ///
    /// Re-applying the current title is a no-op; any other title is rejected
    /// with `ImmutableField { field: "title" }`.
    pub fn retitle_article(&mut self, id: ArticleId, title: &str) -> RepoResult<Article> {
        let article = self.article_or_not_found(id)?;
        if article.title() == title {
            return Ok(article.clone());
        }
        warn!("event=article_retitle module=service status=rejected article_id={id}");
        Err(ValidationError::ImmutableField { field: "title" }.into())
    }

    pub fn author(&self, id: AuthorId) -> Option<&Author> {
        self.repo.get_author(id)
    }

    pub fn magazine(&self, id: MagazineId) -> Option<&Magazine> {
        self.repo.get_magazine(id)
    }

    pub fn article(&self, id: ArticleId) -> Option<&Article> {
        self.repo.get_article(id)
    }

    /// The full article registry in insertion order.
    pub fn articles(&self) -> &[Article] {
        self.repo.list_articles()
    }

    pub fn magazines(&self) -> &[Magazine] {
        self.repo.list_magazines()
    }

    pub fn authors(&self) -> &[Author] {
        self.repo.list_authors()
    }

    /// Articles written by one author, in registry order.
    pub fn author_articles(&self, author_id: AuthorId) -> RepoResult<Vec<&Article>> {
        self.require_author(author_id)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.author_id() == author_id)
            .collect())
    }

    /// Distinct magazines an author has written for.
    pub fn author_magazines(&self, author_id: AuthorId) -> RepoResult<Vec<&Magazine>> {
        let articles = self.author_articles(author_id)?;
        let magazines = dedup_by(
            articles.iter().map(|article| article.magazine_id()),
            |id| *id,
        );
        magazines
            .into_iter()
            .map(|id| self.magazine_or_not_found(id))
            .collect()
    }

    /// Distinct categories across an author's magazines.
    ///
    /// Returns `None` when the author has not written anything.
    pub fn topic_areas(&self, author_id: AuthorId) -> RepoResult<Option<Vec<&str>>> {
        let magazines = self.author_magazines(author_id)?;
        let categories = dedup_by(magazines.into_iter().map(Magazine::category), |c| *c);
        Ok(non_empty(categories))
    }

    /// Articles published in one magazine, in registry order.
    pub fn magazine_articles(&self, magazine_id: MagazineId) -> RepoResult<Vec<&Article>> {
        self.require_magazine(magazine_id)?;
        Ok(self
            .repo
            .list_articles()
            .iter()
            .filter(|article| article.magazine_id() == magazine_id)
            .collect())
    }

    /// Distinct authors who wrote for one magazine.
    pub fn contributors(&self, magazine_id: MagazineId) -> RepoResult<Vec<&Author>> {
        let articles = self.magazine_articles(magazine_id)?;
        dedup_by(articles.iter().map(|article| article.author_id()), |id| *id)
            .into_iter()
            .map(|id| self.author_or_not_found(id))
            .collect()
    }

    /// Titles of one magazine's articles, or `None` when it has none.
    pub fn article_titles(&self, magazine_id: MagazineId) -> RepoResult<Option<Vec<&str>>> {
        let titles = self
            .magazine_articles(magazine_id)?
            .into_iter()
            .map(Article::title)
            .collect::<Vec<_>>();
        Ok(non_empty(titles))
    }

    /// Authors with at least [`CONTRIBUTING_AUTHOR_MIN_ARTICLES`] articles in
    /// one magazine, or `None` when nobody qualifies.
    pub fn contributing_authors(
        &self,
        magazine_id: MagazineId,
    ) -> RepoResult<Option<Vec<&Author>>> {
        let mut counts: Vec<(AuthorId, usize)> = Vec::new();
        for article in self.magazine_articles(magazine_id)? {
            match counts.iter_mut().find(|(id, _)| *id == article.author_id()) {
                Some((_, count)) => *count += 1,
                None => counts.push((article.author_id(), 1)),
            }
        }

        let authors = counts
            .into_iter()
            .filter(|(_, count)| *count >= CONTRIBUTING_AUTHOR_MIN_ARTICLES)
            .map(|(id, _)| self.author_or_not_found(id))
            .collect::<RepoResult<Vec<_>>>()?;
        Ok(non_empty(authors))
    }

    /// The magazine with the most articles across the whole catalog.
    ///
    /// Ties go to the magazine registered first. Returns `None` when no
    /// article exists anywhere.
    pub fn top_publisher(&self) -> Option<&Magazine> {
        let articles = self.repo.list_articles();
        if articles.is_empty() {
            return None;
        }

        let mut top: Option<(&Magazine, usize)> = None;
        for magazine in self.repo.list_magazines() {
            let count = articles
                .iter()
                .filter(|article| article.magazine_id() == magazine.id())
                .count();
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((magazine, count));
            }
        }
        top.map(|(magazine, _)| magazine)
    }

    fn require_author(&self, id: AuthorId) -> RepoResult<()> {
        match self.repo.get_author(id) {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownAuthor(id).into()),
        }
    }

    fn require_magazine(&self, id: MagazineId) -> RepoResult<()> {
        match self.repo.get_magazine(id) {
            Some(_) => Ok(()),
            None => Err(ValidationError::UnknownMagazine(id).into()),
        }
    }

    fn author_or_not_found(&self, id: AuthorId) -> RepoResult<&Author> {
        self.repo.get_author(id).ok_or(RepoError::NotFound {
            entity: EntityKind::Author,
            id,
        })
    }

    fn magazine_or_not_found(&self, id: MagazineId) -> RepoResult<&Magazine> {
        self.repo.get_magazine(id).ok_or(RepoError::NotFound {
            entity: EntityKind::Magazine,
            id,
        })
    }

    fn article_or_not_found(&self, id: ArticleId) -> RepoResult<&Article> {
        self.repo.get_article(id).ok_or(RepoError::NotFound {
            entity: EntityKind::Article,
            id,
        })
    }
}

fn dedup_by<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

fn non_empty<T>(items: Vec<T>) -> Option<Vec<T>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::{dedup_by, non_empty};

    #[test]
    fn dedup_by_keeps_first_appearance_order() {
        let deduped = dedup_by(vec!["b", "a", "b", "c", "a"], |item| *item);
        assert_eq!(deduped, vec!["b", "a", "c"]);
    }

    #[test]
    fn non_empty_maps_empty_to_none() {
        assert_eq!(non_empty(Vec::<u8>::new()), None);
        assert_eq!(non_empty(vec![1]), Some(vec![1]));
    }
}
