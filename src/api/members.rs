//! Member endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        loan::OpenLoan,
        member::{Member, MemberInput, MemberQuery},
    },
    AppState,
};

use super::{ValidJson, ValidPath, ValidQuery};

/// List members, optionally filtered by name/phone substring
#[utoipa::path(
    get,
    path = "/members",
    tag = "members",
    params(MemberQuery),
    responses(
        (status = 200, description = "Members, newest first", body = Vec<Member>)
    )
)]
pub async fn list_members(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<MemberQuery>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.members.list_members(query.search.as_deref()).await?;
    Ok(Json(members))
}

#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.get_member(id).await?;
    Ok(Json(member))
}

#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = MemberInput,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Name missing")
    )
)]
pub async fn create_member(
    State(state): State<AppState>,
    ValidJson(data): ValidJson<MemberInput>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let member = state.services.members.add_member(data).await?;
    Ok((StatusCode::CREATED, Json(member)))
}

#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    request_body = MemberInput,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 400, description = "Name missing"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
    ValidJson(data): ValidJson<MemberInput>,
) -> AppResult<Json<Member>> {
    let member = state.services.members.update_member(id, data).await?;
    Ok(Json(member))
}

#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found"),
        (status = 409, description = "Member has open loans")
    )
)]
pub async fn delete_member(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<StatusCode> {
    state.services.members.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Open loans of a member
#[utoipa::path(
    get,
    path = "/members/{id}/loans",
    tag = "members",
    params(("id" = i64, Path, description = "Member ID")),
    responses(
        (status = 200, description = "Member's open loans", body = Vec<OpenLoan>),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member_loans(
    State(state): State<AppState>,
    ValidPath(id): ValidPath<i64>,
) -> AppResult<Json<Vec<OpenLoan>>> {
    let loans = state.services.members.list_member_loans(id).await?;
    Ok(Json(loans))
}
