//! Handlers for the index page and the add/edit/delete forms
//!
//! Form fields are all optional so that a missing field is reported as a 400
//! rather than a framework rejection.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::{Html, Redirect};
use axum::Form;
use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;
use super::AppState;
use crate::domain::{DeleteSelector, DomainError, ListTable};
use crate::view::{render_index, ListsPage};

#[derive(Debug, Default, Deserialize)]
pub struct AddForm {
    #[serde(rename = "newItem")]
    pub new_item: Option<String>,
    #[serde(rename = "tableName")]
    pub table_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct EditForm {
    #[serde(rename = "updatedItemTitle")]
    pub updated_item_title: Option<String>,
    #[serde(rename = "updatedItemId")]
    pub updated_item_id: Option<String>,
    #[serde(rename = "tableName")]
    pub table_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DeleteForm {
    #[serde(rename = "deleteItemId")]
    pub delete_item_id: Option<String>,
    #[serde(rename = "deleteItemIdWeek")]
    pub delete_item_id_week: Option<String>,
    #[serde(rename = "deleteItemIdMonth")]
    pub delete_item_id_month: Option<String>,
}

fn required(value: Option<String>, field: &str) -> Result<String, ApiError> {
    value.ok_or_else(|| ApiError(DomainError::MalformedRequest(format!("missing field {}", field))))
}

/// Resolved before any other field is read
fn target(table_name: Option<String>) -> Result<ListTable, ApiError> {
    Ok(table_name.unwrap_or_default().parse::<ListTable>()?)
}

/// GET / - render all three lists
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let lists = state.lists.list_all().await?;
    Ok(Html(render_index(&ListsPage::from(lists))))
}

/// POST /add
pub async fn add_item(
    State(state): State<AppState>,
    form: Result<Form<AddForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let table = target(form.table_name)?;
    let title = required(form.new_item, "newItem")?;

    state.lists.add(table.as_str(), &title).await?;
    Ok(Redirect::to("/"))
}

/// POST /edit
pub async fn edit_item(
    State(state): State<AppState>,
    form: Result<Form<EditForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    let table = target(form.table_name)?;
    let id = required(form.updated_item_id, "updatedItemId")?;
    let title = required(form.updated_item_title, "updatedItemTitle")?;

    state.lists.edit(table.as_str(), &id, &title).await?;
    Ok(Redirect::to("/"))
}

/// POST /delete - the table is chosen by which selector field is present
pub async fn delete_item(
    State(state): State<AppState>,
    form: Result<Form<DeleteForm>, FormRejection>,
) -> Result<Redirect, ApiError> {
    let Form(form) = form?;
    debug!(?form, "Delete request");

    let selector = DeleteSelector::from_fields(
        form.delete_item_id.as_deref(),
        form.delete_item_id_week.as_deref(),
        form.delete_item_id_month.as_deref(),
    )?;

    state.lists.delete(selector).await?;
    Ok(Redirect::to("/"))
}
