use async_trait::async_trait;
use sqlx::{MySqlPool, Row};
use std::sync::Arc;
use tracing::debug;
use typed_builder::TypedBuilder;
use urlmini_core::store::Result;
use urlmini_core::{Alias, Fragment, InsertOutcome, MappingStore, StorageError, UrlMapping};

/// Default name of the mapping table.
pub const DEFAULT_TABLE_NAME: &str = "url_mappings";

const CREATE_TABLE_TEMPLATE: &str = include_str!("../ddl/mysql/url_mappings.sql");

/// Configures a [`MySqlStore`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct MySqlStoreSettings {
    /// Table holding the mappings. Either `table` or `schema.table`.
    #[builder(default = DEFAULT_TABLE_NAME.to_string(), setter(into))]
    pub table_name: String,
}

impl Default for MySqlStoreSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug)]
struct Queries {
    create_table: String,
    find_alias_by_url: String,
    insert: String,
    find_url_by_fragment: String,
}

impl Queries {
    fn for_table(table: &str) -> Self {
        Self {
            create_table: CREATE_TABLE_TEMPLATE.replace("{table}", table),
            find_alias_by_url: format!(
                "SELECT alias FROM {table} \
                 WHERE original_url_hash = UNHEX(SHA2(?, 256)) AND original_url = ? \
                 LIMIT 1"
            ),
            insert: format!(
                "INSERT INTO {table} \
                 (original_url, original_url_hash, fragment, alias, created_at, created_by) \
                 VALUES (?, UNHEX(SHA2(?, 256)), ?, ?, ?, ?)"
            ),
            find_url_by_fragment: format!(
                "SELECT original_url FROM {table} WHERE fragment = ? LIMIT 1"
            ),
        }
    }
}

/// MySQL implementation of the [`MappingStore`] contract.
///
/// Uniqueness is enforced by the `uq_fragment` and `uq_original_url_hash`
/// indexes, so concurrent inserts are arbitrated by the server. The URL index
/// is over `UNHEX(SHA2(original_url, 256))` because `TEXT` columns cannot be
/// uniquely indexed in full.
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
    table_name: String,
    queries: Arc<Queries>,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool, settings: MySqlStoreSettings) -> Result<Self> {
        let quoted = quote_table_name(&settings.table_name)?;
        Ok(Self {
            pool,
            queries: Arc::new(Queries::for_table(&quoted)),
            table_name: settings.table_name,
        })
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str, settings: MySqlStoreSettings) -> Result<Self> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Self::new(pool, settings)
    }

    /// Creates the mapping table if it does not exist.
    pub async fn create_table(&self) -> Result<()> {
        sqlx::query(&self.queries.create_table)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(())
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

/// Validates `name` as `table` or `schema.table` and quotes each part.
///
/// Table names are interpolated into SQL, so only ASCII letters, digits and
/// `_` are accepted.
fn quote_table_name(name: &str) -> Result<String> {
    let parts: Vec<&str> = name.split('.').collect();
    if parts.len() > 2 {
        return Err(StorageError::InvalidData(format!(
            "table name '{}' has too many parts",
            name
        )));
    }

    let valid = |part: &str| {
        !part.is_empty()
            && part.len() <= 64
            && part.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'_')
    };
    if !parts.iter().all(|part| valid(part)) {
        return Err(StorageError::InvalidData(format!(
            "table name '{}' must contain only ascii letters, digits or underscores",
            name
        )));
    }

    Ok(parts
        .iter()
        .map(|part| format!("`{}`", part))
        .collect::<Vec<_>>()
        .join("."))
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StorageError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StorageError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StorageError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StorageError::InvalidData(message),
        _ => StorageError::Query(message),
    }
}

#[async_trait]
impl MappingStore for MySqlStore {
    async fn find_alias_by_url(&self, url: &str) -> Result<Option<Alias>> {
        let row = sqlx::query(&self.queries.find_alias_by_url)
            .bind(url)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let alias: String = row.try_get("alias").map_err(map_sqlx_error)?;
        Ok(Some(Alias::new_unchecked(alias)))
    }

    async fn insert(&self, mapping: &UrlMapping) -> Result<InsertOutcome> {
        let result = sqlx::query(&self.queries.insert)
            .bind(mapping.original_url.as_str())
            .bind(mapping.original_url.as_str())
            .bind(mapping.fragment.as_str())
            .bind(mapping.alias.as_str())
            .bind(mapping.created_at.as_second())
            .bind(mapping.created_by.as_str())
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(InsertOutcome::Inserted),
            Err(err) if is_unique_violation(&err) => {
                // Either index may have fired; the URL index wins if the URL is present.
                debug!(fragment = %mapping.fragment, error = %err, "insert hit a unique index");
                match self.find_alias_by_url(&mapping.original_url).await? {
                    Some(alias) => Ok(InsertOutcome::UrlTaken { alias }),
                    None => Ok(InsertOutcome::FragmentTaken),
                }
            }
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn find_url_by_fragment(&self, fragment: &Fragment) -> Result<Option<String>> {
        let row = sqlx::query(&self.queries.find_url_by_fragment)
            .bind(fragment.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let original_url: String = row.try_get("original_url").map_err(map_sqlx_error)?;
        Ok(Some(original_url))
    }
}
