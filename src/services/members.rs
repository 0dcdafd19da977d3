//! Member management service

use validator::Validate;

use crate::{
    error::AppResult,
    models::{
        loan::OpenLoan,
        member::{Member, MemberInput},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Get a member by ID
    pub async fn get_member(&self, id: i64) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    /// List members matching `search` on name or phone (all when empty)
    pub async fn list_members(&self, search: Option<&str>) -> AppResult<Vec<Member>> {
        tracing::debug!("Listing members, search: {:?}", search);
        self.repository.members.list(search).await
    }

    pub async fn add_member(&self, data: MemberInput) -> AppResult<Member> {
        let data = data.normalized();
        data.validate()?;

        let member = self.repository.members.create(&data).await?;
        tracing::info!("Member {} added", member.id);
        Ok(member)
    }

    /// Edit a member. An unknown ID is reported as not found.
    pub async fn update_member(&self, id: i64, data: MemberInput) -> AppResult<Member> {
        let data = data.normalized();
        data.validate()?;

        let member = self.repository.members.update(id, &data).await?;
        tracing::info!("Member {} updated", member.id);
        Ok(member)
    }

    /// Delete a member with no open loan
    pub async fn delete_member(&self, id: i64) -> AppResult<()> {
        self.repository.members.delete(id).await.inspect_err(|e| {
            tracing::warn!("Member {} not deleted: {}", id, e);
        })?;
        tracing::info!("Member {} deleted", id);
        Ok(())
    }

    /// Open loans of a member
    pub async fn list_member_loans(&self, member_id: i64) -> AppResult<Vec<OpenLoan>> {
        // Verify member exists
        self.repository.members.get_by_id(member_id).await?;
        self.repository.loans.list_open_for_member(member_id).await
    }
}
