//! PostgreSQL-backed user directory.

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::directory::UserDirectory;
use crate::error::Result;
use crate::user::User;

pub const DEFAULT_CREDENTIALS: &str = "postgres";
pub const DEFAULT_DATABASE_NAME: &str = "mailauth";
pub const DEFAULT_POOL_SIZE: u32 = 10;

/// [`UserDirectory`] over a `users` table.
#[derive(Clone)]
pub struct PgDirectory {
    pool: PgPool,
}

impl PgDirectory {
    /// Init database connection.
    pub async fn new(
        hostname: &str,
        username: &str,
        password: &str,
        db: &str,
        pool: u32,
    ) -> std::result::Result<Self, sqlx::Error> {
        let addr = format!("postgres://{username}:{password}@{hostname}/{db}");
        let pool = PgPoolOptions::new().max_connections(pool);
        let postgres = pool.connect(&addr).await?;

        tracing::info!(%hostname, %db, "postgres connected");

        Ok(Self { pool: postgres })
    }

    /// Reuse an existing pool.
    pub fn with_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert [`User`] into database.
    ///
    /// Provisioning helper for the directory owner; the authentication
    /// backend itself never writes.
    pub async fn insert(&self, user: &User) -> Result<i64> {
        let id: (i64,) = sqlx::query_as(
            r#"INSERT INTO users (username, email, password, created_at)
                VALUES ($1, $2, $3, $4)
                RETURNING id"#,
        )
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password)
        .bind(user.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(id.0)
    }
}

#[async_trait]
impl UserDirectory for PgDirectory {
    async fn find_by_email(&self, email: &str) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            r#"SELECT id, username, email, password, created_at
                FROM users
                WHERE LOWER(email) = LOWER($1)
                ORDER BY id ASC"#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}
