//! Members repository for database operations

use sqlx::{Pool, Sqlite};

use super::SearchFilter;
use crate::{
    error::{AppError, AppResult},
    models::member::{Member, MemberInput},
};

#[derive(Clone)]
pub struct MembersRepository {
    pool: Pool<Sqlite>,
}

impl MembersRepository {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    /// Get member by ID
    pub async fn get_by_id(&self, id: i64) -> AppResult<Member> {
        sqlx::query_as::<_, Member>("SELECT * FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// List members whose name or phone contains `search`, newest first
    pub async fn list(&self, search: Option<&str>) -> AppResult<Vec<Member>> {
        let filter = SearchFilter::new(search);

        let members = sqlx::query_as::<_, Member>("SELECT * FROM members ORDER BY id DESC")
            .fetch_all(&self.pool)
            .await?
            .into_iter()
            .filter(|m| filter.matches([m.name.as_str(), m.phone.as_deref().unwrap_or("")]))
            .collect();

        Ok(members)
    }

    /// Insert a member
    pub async fn create(&self, data: &MemberInput) -> AppResult<Member> {
        let member = sqlx::query_as::<_, Member>(
            "INSERT INTO members (name, phone) VALUES (?, ?) RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .fetch_one(&self.pool)
        .await?;

        Ok(member)
    }

    /// Update a member
    pub async fn update(&self, id: i64, data: &MemberInput) -> AppResult<Member> {
        sqlx::query_as::<_, Member>(
            "UPDATE members SET name = ?, phone = ? WHERE id = ? RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.phone)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Member with id {} not found", id)))
    }

    /// Delete a member that has no open loan. Their returned loans go with them.
    pub async fn delete(&self, id: i64) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        let open_loans: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE member_id = ? AND return_date IS NULL",
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if open_loans > 0 {
            return Err(AppError::Conflict(format!(
                "Member {} has {} open loan(s)",
                id, open_loans
            )));
        }

        sqlx::query("DELETE FROM loans WHERE member_id = ? AND return_date IS NOT NULL")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member with id {} not found", id)));
        }

        tx.commit().await?;
        Ok(())
    }
}
