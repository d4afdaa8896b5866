//! Drug name record use cases.

use crate::error::AppError;
use crate::infra::{get_connection, DbPool, RecordRow, RecordStore};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_PAGE_SIZE: i64 = 6;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameCreateReq {
    pub drug_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameUpdateReq {
    pub id: String,
    pub drug_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameDto {
    pub id: String,
    pub drug_name: String,
    pub created_at: i64,
    pub updated_at: i64,
    pub deleted_at: Option<i64>,
}

impl From<RecordRow> for DrugNameDto {
    fn from(r: RecordRow) -> Self {
        Self {
            id: r.id,
            drug_name: r.drug_name,
            created_at: r.created_at,
            updated_at: r.updated_at,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNamePage {
    pub records: Vec<DrugNameDto>,
    pub total_pages: i64,
    pub current_page: i64,
    pub total_count: i64,
}

fn required_name(raw: &str) -> Result<&str, AppError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(AppError::Validation("drug name is required".into()));
    }
    Ok(name)
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub fn drug_name_create(pool: &DbPool, req: DrugNameCreateReq) -> Result<DrugNameDto, AppError> {
    let name = required_name(&req.drug_name)?;
    let now = now_millis();
    let row = RecordRow {
        id: Uuid::new_v4().to_string(),
        drug_name: name.to_string(),
        created_at: now,
        updated_at: now,
        deleted_at: None,
    };

    let conn = get_connection(pool)?;
    RecordStore::new(&conn).insert(&row)?;
    log::debug!("created record {}", row.id);
    Ok(row.into())
}

pub fn drug_name_update(pool: &DbPool, req: DrugNameUpdateReq) -> Result<DrugNameDto, AppError> {
    let name = required_name(&req.drug_name)?;
    let conn = get_connection(pool)?;
    let store = RecordStore::new(&conn);

    if store.update_by_id(&req.id, name, now_millis())? == 0 {
        return Err(AppError::NotFound(format!("record {}", req.id)));
    }
    store
        .get_by_id(&req.id)?
        .map(DrugNameDto::from)
        .ok_or_else(|| AppError::NotFound(format!("record {}", req.id)))
}

/// Hard delete. Succeeds whether or not the record existed.
pub fn drug_name_delete(pool: &DbPool, id: &str) -> Result<(), AppError> {
    let conn = get_connection(pool)?;
    let removed = RecordStore::new(&conn).delete_by_id(id)?;
    log::debug!("delete {}: {} row(s)", id, removed);
    Ok(())
}

/// `None` when no record has this id.
pub fn drug_name_get(pool: &DbPool, id: &str) -> Result<Option<DrugNameDto>, AppError> {
    let conn = get_connection(pool)?;
    let row = RecordStore::new(&conn).get_by_id(id)?;
    Ok(row.map(DrugNameDto::from))
}

/// One 1-based page plus the page count. Pages past the end are empty, not clamped.
///
/// Count and page are read by separate statements, so under concurrent writes
/// they may disagree.
pub fn drug_name_list(pool: &DbPool, page: i64, page_size: i64) -> Result<DrugNamePage, AppError> {
    if page < 1 {
        return Err(AppError::Validation(format!("page must be >= 1, got {}", page)));
    }
    if page_size < 1 {
        return Err(AppError::Validation(format!(
            "page size must be >= 1, got {}",
            page_size
        )));
    }
    let offset = (page - 1).saturating_mul(page_size);

    let conn = get_connection(pool)?;
    let store = RecordStore::new(&conn);
    let records = store
        .list_page(offset, page_size)?
        .into_iter()
        .map(DrugNameDto::from)
        .collect();
    let total_count = store.count()?;

    Ok(DrugNamePage {
        records,
        total_pages: total_pages(total_count, page_size),
        current_page: page,
        total_count,
    })
}

fn total_pages(total_count: i64, page_size: i64) -> i64 {
    total_count / page_size + i64::from(total_count % page_size != 0)
}
