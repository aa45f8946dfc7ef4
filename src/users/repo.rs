use sqlx::{FromRow, PgPool};

/// User row. Never serialized directly; every response goes through a DTO,
/// which is what keeps the password hash out of all bodies.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    pub password: String,
}

pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
    /// Argon2 PHC string, hashed before it reaches the repo.
    pub password: String,
}

impl User {
    pub async fn find_by_email(db: &PgPool, email: &str) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            SELECT id, first_name, last_name, email_address, password
            FROM users
            WHERE email_address = $1
            "#,
        )
        .bind(email)
        .fetch_optional(db)
        .await
    }

    pub async fn email_taken(db: &PgPool, email: &str) -> Result<bool, sqlx::Error> {
        let (taken,): (bool,) =
            sqlx::query_as(r#"SELECT EXISTS (SELECT 1 FROM users WHERE email_address = $1)"#)
                .bind(email)
                .fetch_one(db)
                .await?;
        Ok(taken)
    }

    pub async fn create(db: &PgPool, new: NewUser) -> Result<User, sqlx::Error> {
        sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (first_name, last_name, email_address, password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, first_name, last_name, email_address, password
            "#,
        )
        .bind(&new.first_name)
        .bind(&new.last_name)
        .bind(&new.email_address)
        .bind(&new.password)
        .fetch_one(db)
        .await
    }
}
