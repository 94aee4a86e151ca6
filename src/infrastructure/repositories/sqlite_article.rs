use crate::domain::article::{
    Article, ArticleId, ArticleListing, ArticleSort, ArticleStatus, ArticleTitle, ArticleUpdate,
    AuthorName, CategoryId, NewArticle, Slug,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

/// Column list shared by every article select; `category_ids` arrives as a
/// comma-separated aggregate so one row carries the whole entity.
const ARTICLE_COLUMNS: &str = "a.id, a.title, a.slug, a.author, a.image, a.excerpt, a.body, \
     a.status, a.is_featured, a.view_count, a.created_at, a.updated_at, \
     (SELECT group_concat(ac.category_id) FROM article_categories ac WHERE ac.article_id = a.id) AS category_ids";

#[derive(Clone)]
pub struct SqliteArticleWriteRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleWriteRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct SqliteArticleReadRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteArticleReadRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    title: String,
    slug: String,
    author: String,
    image: Option<String>,
    excerpt: String,
    body: String,
    status: String,
    is_featured: i64,
    view_count: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    category_ids: Option<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        let categories = row
            .category_ids
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|s| {
                s.parse::<i64>()
                    .map_err(|e| DomainError::Persistence(format!("bad category id: {e}")))
                    .and_then(CategoryId::new)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Article {
            id: ArticleId::new(row.id)?,
            title: ArticleTitle::new(row.title)?,
            slug: Slug::new(row.slug)?,
            author: AuthorName::new(row.author)?,
            image: row.image,
            excerpt: row.excerpt,
            body: row.body,
            categories,
            status: ArticleStatus::parse(&row.status)?,
            is_featured: row.is_featured != 0,
            view_count: u64::try_from(row.view_count).unwrap_or(0),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

async fn fetch_by_id<'e, E>(executor: E, id: i64) -> DomainResult<Option<Article>>
where
    E: sqlx::Executor<'e, Database = Sqlite>,
{
    let row = sqlx::query_as::<_, ArticleRow>(&format!(
        "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.id = ?"
    ))
    .bind(id)
    .fetch_optional(executor)
    .await
    .map_err(map_sqlx)?;

    row.map(Article::try_from).transpose()
}

#[async_trait]
impl crate::domain::article::ArticleWriteRepository for SqliteArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            slug,
            author,
            image,
            excerpt,
            body,
            categories,
            status,
            is_featured,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO articles (title, slug, author, image, excerpt, body, status, is_featured, view_count, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?) RETURNING id",
        )
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(author.as_str())
        .bind(&image)
        .bind(&excerpt)
        .bind(&body)
        .bind(status.as_str())
        .bind(if is_featured { 1 } else { 0 })
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        for category in &categories {
            sqlx::query("INSERT INTO article_categories (article_id, category_id) VALUES (?, ?)")
                .bind(id)
                .bind(i64::from(*category))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        let stored = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn update(&self, update: ArticleUpdate) -> DomainResult<Article> {
        let ArticleUpdate {
            id,
            title,
            author,
            image,
            excerpt,
            body,
            categories,
            status,
            is_featured,
            updated_at,
        } = update;
        let id = i64::from(id);

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE articles SET title = COALESCE(?, title), author = COALESCE(?, author), \
             excerpt = COALESCE(?, excerpt), body = COALESCE(?, body), \
             status = COALESCE(?, status), is_featured = COALESCE(?, is_featured), \
             updated_at = ? WHERE id = ?",
        )
        .bind(title.as_ref().map(|t| t.as_str()))
        .bind(author.as_ref().map(|a| a.as_str()))
        .bind(excerpt.as_deref())
        .bind(body.as_deref())
        .bind(status.map(ArticleStatus::as_str))
        .bind(is_featured.map(|f| if f { 1 } else { 0 }))
        .bind(updated_at)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        if let Some(image) = image {
            sqlx::query("UPDATE articles SET image = ? WHERE id = ?")
                .bind(&image)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        if let Some(categories) = categories {
            sqlx::query("DELETE FROM article_categories WHERE article_id = ?")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            for category in &categories {
                sqlx::query(
                    "INSERT INTO article_categories (article_id, category_id) VALUES (?, ?)",
                )
                .bind(id)
                .bind(i64::from(*category))
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
            }
        }

        let stored = fetch_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;
        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn increment_view_count(&self, id: ArticleId) -> DomainResult<u64> {
        let count: Option<i64> = sqlx::query_scalar(
            "UPDATE articles SET view_count = view_count + 1 WHERE id = ? RETURNING view_count",
        )
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        count
            .map(|c| u64::try_from(c).unwrap_or(0))
            .ok_or_else(|| DomainError::NotFound("article not found".into()))
    }
}

/// WHERE clauses shared by the list and count queries: published only, then
/// the three-field substring search, then category-union membership. The
/// IN-subquery form keeps multi-category matches de-duplicated.
fn apply_listing_conditions<'a>(builder: &mut QueryBuilder<'a, Sqlite>, listing: &'a ArticleListing) {
    builder.push(" WHERE a.status = 'published'");

    if let Some(search) = &listing.search {
        let pattern = format!("%{search}%");
        builder.push(" AND (a.title LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR a.body LIKE ");
        builder.push_bind(pattern.clone());
        builder.push(" OR a.excerpt LIKE ");
        builder.push_bind(pattern);
        builder.push(")");
    }

    if !listing.categories.is_empty() {
        builder.push(" AND a.id IN (SELECT ac.article_id FROM article_categories ac WHERE ac.category_id IN (");
        let mut separated = builder.separated(", ");
        for category in &listing.categories {
            separated.push_bind(i64::from(*category));
        }
        builder.push("))");
    }
}

fn order_clause(sort: ArticleSort) -> &'static str {
    match sort {
        ArticleSort::Recent => " ORDER BY a.created_at DESC, a.id DESC",
        ArticleSort::Oldest => " ORDER BY a.created_at ASC, a.id ASC",
        ArticleSort::Popular => " ORDER BY a.view_count DESC, a.created_at DESC, a.id DESC",
        ArticleSort::TitleAsc => " ORDER BY a.title COLLATE NOCASE ASC, a.id ASC",
        ArticleSort::TitleDesc => " ORDER BY a.title COLLATE NOCASE DESC, a.id DESC",
    }
}

#[async_trait]
impl crate::domain::article::ArticleReadRepository for SqliteArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        fetch_by_id(&*self.pool, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &Slug) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.slug = ?"
        ))
        .bind(slug.as_str())
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn count_filtered(&self, listing: &ArticleListing) -> DomainResult<u64> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT COUNT(1) FROM articles a");
        apply_listing_conditions(&mut builder, listing);

        let total: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or(0))
    }

    async fn list_filtered(
        &self,
        listing: &ArticleListing,
        window: Option<(u32, u64)>,
    ) -> DomainResult<Vec<Article>> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {ARTICLE_COLUMNS} FROM articles a"));
        apply_listing_conditions(&mut builder, listing);
        builder.push(order_clause(listing.sort));

        if let Some((limit, offset)) = window {
            builder.push(" LIMIT ");
            builder.push_bind(i64::from(limit));
            builder.push(" OFFSET ");
            builder.push_bind(i64::try_from(offset).unwrap_or(i64::MAX));
        }

        let rows = builder
            .build_query_as::<ArticleRow>()
            .fetch_all(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn find_featured(&self) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             WHERE a.status = 'published' AND a.is_featured = 1 \
             ORDER BY a.created_at DESC, a.id DESC LIMIT 1"
        ))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn list_related(&self, id: ArticleId, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a \
             WHERE a.status = 'published' AND a.id <> ? AND a.id IN ( \
                 SELECT ac.article_id FROM article_categories ac WHERE ac.category_id IN ( \
                     SELECT category_id FROM article_categories WHERE article_id = ?)) \
             ORDER BY a.created_at DESC, a.id DESC LIMIT ?"
        ))
        .bind(i64::from(id))
        .bind(i64::from(id))
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn list_latest(&self, limit: u32) -> DomainResult<Vec<Article>> {
        let rows = sqlx::query_as::<_, ArticleRow>(&format!(
            "SELECT {ARTICLE_COLUMNS} FROM articles a WHERE a.status = 'published' \
             ORDER BY a.created_at DESC, a.id DESC LIMIT ?"
        ))
        .bind(i64::from(limit))
        .fetch_all(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }
}
