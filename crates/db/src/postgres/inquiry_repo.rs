//! Repository for the `inquiries` table on PostgreSQL.

use async_trait::async_trait;
use intake_core::status::STATUS_NEW;
use intake_core::types::DbId;
use sqlx::PgPool;

use crate::error::StorageError;
use crate::models::inquiry::{CreateInquiry, Inquiry, UpdateInquiry};
use crate::store::InquiryStore;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, submission_date, status, client_name, contact_person, email, phone, \
                       project_name, project_description, due_date, budget, duration";

/// Provides CRUD operations for inquiries.
#[derive(Debug, Clone)]
pub struct InquiryRepo {
    pool: PgPool,
}

impl InquiryRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InquiryStore for InquiryRepo {
    async fn create(&self, input: &CreateInquiry) -> Result<DbId, StorageError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO inquiries (submission_date, status, client_name, contact_person, email,
                                    phone, project_name, project_description, due_date,
                                    budget, duration)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING id",
        )
        .bind(crate::now())
        .bind(STATUS_NEW)
        .bind(&input.client_name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.project_name)
        .bind(&input.project_description)
        .bind(&input.due_date)
        .bind(input.budget)
        .bind(input.duration)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Inquiry>, StorageError> {
        let query =
            format!("SELECT {COLUMNS} FROM inquiries ORDER BY submission_date DESC, id DESC");
        let rows = sqlx::query_as::<_, Inquiry>(&query)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn update(&self, id: DbId, input: &UpdateInquiry) -> Result<u64, StorageError> {
        let result = sqlx::query(
            "UPDATE inquiries SET
                client_name = $2,
                contact_person = $3,
                email = $4,
                phone = $5,
                project_name = $6,
                project_description = $7,
                due_date = $8,
                budget = $9,
                duration = $10
             WHERE id = $1",
        )
        .bind(id)
        .bind(&input.client_name)
        .bind(&input.contact_person)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.project_name)
        .bind(&input.project_description)
        .bind(&input.due_date)
        .bind(input.budget)
        .bind(input.duration)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn patch_status(&self, id: DbId, status: &str) -> Result<u64, StorageError> {
        let result = sqlx::query("UPDATE inquiries SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: DbId) -> Result<u64, StorageError> {
        let result = sqlx::query("DELETE FROM inquiries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
