use sqlx::{FromRow, PgPool};

#[derive(Debug, Clone, FromRow)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i32,
}

/// One course row joined with its owner's public columns.
#[derive(Debug, Clone, FromRow)]
pub struct CourseWithOwner {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email_address: String,
}

/// Course fields as supplied by a client. Required columns stay optional
/// here: creation is deliberately unvalidated at the route level, so the
/// store's NOT NULL constraints are what reject an incomplete body.
pub struct CourseInput {
    pub title: Option<String>,
    pub description: Option<String>,
    pub estimated_time: Option<String>,
    pub materials_needed: Option<String>,
}

impl Course {
    pub async fn list_with_owners(db: &PgPool) -> Result<Vec<CourseWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
                   c.user_id, u.first_name, u.last_name, u.email_address
            FROM courses c
            JOIN users u ON u.id = c.user_id
            ORDER BY c.id
            "#,
        )
        .fetch_all(db)
        .await
    }

    pub async fn find_with_owner(
        db: &PgPool,
        id: i32,
    ) -> Result<Option<CourseWithOwner>, sqlx::Error> {
        sqlx::query_as::<_, CourseWithOwner>(
            r#"
            SELECT c.id, c.title, c.description, c.estimated_time, c.materials_needed,
                   c.user_id, u.first_name, u.last_name, u.email_address
            FROM courses c
            JOIN users u ON u.id = c.user_id
            WHERE c.id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Option<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed, user_id
            FROM courses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
    }

    pub async fn list_by_owner(db: &PgPool, user_id: i32) -> Result<Vec<Course>, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            r#"
            SELECT id, title, description, estimated_time, materials_needed, user_id
            FROM courses
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id)
        .fetch_all(db)
        .await
    }

    /// Insert with ownership forced to `user_id`; whatever the client sent
    /// for ownership never reaches this point.
    pub async fn create(db: &PgPool, user_id: i32, input: CourseInput) -> Result<Course, sqlx::Error> {
        sqlx::query_as::<_, Course>(
            r#"
            INSERT INTO courses (title, description, estimated_time, materials_needed, user_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, description, estimated_time, materials_needed, user_id
            "#,
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.estimated_time)
        .bind(&input.materials_needed)
        .bind(user_id)
        .fetch_one(db)
        .await
    }

    /// Optional fields absent from the body keep their stored values.
    pub async fn update(db: &PgPool, id: i32, input: CourseInput) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            UPDATE courses
            SET title = $2,
                description = $3,
                estimated_time = COALESCE($4, estimated_time),
                materials_needed = COALESCE($5, materials_needed)
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(&input.estimated_time)
        .bind(&input.materials_needed)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn delete(db: &PgPool, id: i32) -> Result<(), sqlx::Error> {
        sqlx::query(r#"DELETE FROM courses WHERE id = $1"#)
            .bind(id)
            .execute(db)
            .await?;
        Ok(())
    }
}
