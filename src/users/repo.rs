use sqlx::PgPool;

use crate::error::DbError;
use crate::users::repo_types::User;

impl User {
    /// Find a user by email, matched case-insensitively.
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE email ILIKE $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Find a user by id.
    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<User>, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, name, email, password
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(user)
    }

    /// Insert a new user and return the created row.
    pub async fn create(
        db: &PgPool,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<User, DbError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, email, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, password
            "#,
        )
        .bind(name)
        .bind(email)
        .bind(password)
        .fetch_one(db)
        .await?;
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set

    async fn pool() -> PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL");
        PgPool::connect(&url).await.expect("connect")
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_find_by_email_round_trip() {
        let db = pool().await;
        let email = "roundtrip@example.com";
        sqlx::query("DELETE FROM users WHERE email = $1")
            .bind(email)
            .execute(&db)
            .await
            .expect("cleanup");

        let created = User::create(&db, "Round Trip", email, "secret")
            .await
            .expect("create user");
        let found = User::find_by_email(&db, email)
            .await
            .expect("lookup")
            .expect("user present");
        assert_eq!(found.id, created.id);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_by_id_absent_is_none() {
        let db = pool().await;
        let found = User::find_by_id(&db, i32::MAX).await.expect("lookup");
        assert!(found.is_none());
    }
}
