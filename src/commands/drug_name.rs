use crate::app::{
    drug_name_create, drug_name_delete, drug_name_get, drug_name_list, drug_name_update,
    DrugNameCreateReq, DrugNameDto, DrugNamePage, DrugNameUpdateReq,
};
use crate::error::AppError;
use crate::infra::DbPool;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameIdReq {
    pub id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrugNameListReq {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

/// `{"success": msg}` or `{"error": msg}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ActionResult {
    Success { success: String },
    Error { error: String },
}

impl ActionResult {
    fn success(msg: &str) -> Self {
        Self::Success {
            success: msg.to_string(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }
}

/// The record, `null` on a miss, or `{"error": msg}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GetOneResult {
    Record(DrugNameDto),
    Error { error: String },
    NotFound,
}

/// `{records, totalPages, currentPage, totalCount}` or `{"error": msg}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListPagedResult {
    Page(DrugNamePage),
    Error { error: String },
}

fn failure(op: &str, fallback: &str, e: &AppError) -> String {
    log::error!("{} failed [{}]: {}", op, e.code(), e);
    match e {
        AppError::Validation(_) if op == "create" || op == "update" => {
            "Drug Name is required".to_string()
        }
        AppError::Validation(_) => e.to_string(),
        AppError::NotFound(_) => "Record not found".to_string(),
        AppError::Db(_) => fallback.to_string(),
    }
}

pub fn cmd_drug_name_create(pool: &DbPool, req: DrugNameCreateReq) -> ActionResult {
    match drug_name_create(pool, req) {
        Ok(_) => ActionResult::success("Record Created"),
        Err(e) => ActionResult::Error {
            error: failure("create", "Failed to create record", &e),
        },
    }
}

pub fn cmd_drug_name_update(pool: &DbPool, req: DrugNameUpdateReq) -> ActionResult {
    match drug_name_update(pool, req) {
        Ok(_) => ActionResult::success("Record Updated"),
        Err(e) => ActionResult::Error {
            error: failure("update", "Failed to update record", &e),
        },
    }
}

pub fn cmd_drug_name_delete(pool: &DbPool, req: DrugNameIdReq) -> ActionResult {
    match drug_name_delete(pool, &req.id) {
        Ok(()) => ActionResult::success("Record Deleted"),
        Err(e) => ActionResult::Error {
            error: failure("delete", "Failed to delete record", &e),
        },
    }
}

pub fn cmd_drug_name_get_one(pool: &DbPool, req: DrugNameIdReq) -> GetOneResult {
    match drug_name_get(pool, &req.id) {
        Ok(Some(dto)) => GetOneResult::Record(dto),
        Ok(None) => GetOneResult::NotFound,
        Err(e) => GetOneResult::Error {
            error: failure("getOne", "Failed to query record", &e),
        },
    }
}

pub fn cmd_drug_name_list_paged(
    pool: &DbPool,
    req: Option<DrugNameListReq>,
    default_page_size: i64,
) -> ListPagedResult {
    let req = req.unwrap_or_default();
    let page = req.page.unwrap_or(1);
    let page_size = req.page_size.unwrap_or(default_page_size);
    match drug_name_list(pool, page, page_size) {
        Ok(p) => ListPagedResult::Page(p),
        Err(e) => ListPagedResult::Error {
            error: failure("listPaged", "Failed to query all records", &e),
        },
    }
}

/// A single request on the JSON surface, tagged by `op`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Invocation {
    Create(DrugNameCreateReq),
    Update(DrugNameUpdateReq),
    Delete(DrugNameIdReq),
    GetOne(DrugNameIdReq),
    ListPaged(DrugNameListReq),
}

pub fn dispatch(pool: &DbPool, invocation: Invocation, default_page_size: i64) -> serde_json::Value {
    let out = match invocation {
        Invocation::Create(req) => serde_json::to_value(cmd_drug_name_create(pool, req)),
        Invocation::Update(req) => serde_json::to_value(cmd_drug_name_update(pool, req)),
        Invocation::Delete(req) => serde_json::to_value(cmd_drug_name_delete(pool, req)),
        Invocation::GetOne(req) => serde_json::to_value(cmd_drug_name_get_one(pool, req)),
        Invocation::ListPaged(req) => {
            serde_json::to_value(cmd_drug_name_list_paged(pool, Some(req), default_page_size))
        }
    };
    out.unwrap_or_else(|e| serde_json::json!({ "error": e.to_string() }))
}

/// Parse one JSON request line and answer with one JSON line.
pub fn dispatch_line(pool: &DbPool, line: &str, default_page_size: i64) -> String {
    let value = match serde_json::from_str::<Invocation>(line) {
        Ok(inv) => dispatch(pool, inv, default_page_size),
        Err(e) => {
            log::warn!("rejected request: {}", e);
            serde_json::json!({ "error": format!("Invalid request: {}", e) })
        }
    };
    value.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_result_shapes() {
        let ok = serde_json::to_value(ActionResult::success("Record Created")).unwrap();
        assert_eq!(ok, serde_json::json!({ "success": "Record Created" }));
        let err = serde_json::to_value(ActionResult::Error {
            error: "boom".into(),
        })
        .unwrap();
        assert_eq!(err, serde_json::json!({ "error": "boom" }));
    }

    #[test]
    fn get_one_miss_is_null() {
        assert!(serde_json::to_value(GetOneResult::NotFound).unwrap().is_null());
    }

    #[test]
    fn invocation_parses_camel_case() {
        let inv: Invocation =
            serde_json::from_str(r#"{"op":"update","id":"x","drugName":"Aspirin"}"#).unwrap();
        match inv {
            Invocation::Update(req) => {
                assert_eq!(req.id, "x");
                assert_eq!(req.drug_name, "Aspirin");
            }
            other => panic!("unexpected {:?}", other),
        }
        let inv: Invocation = serde_json::from_str(r#"{"op":"listPaged"}"#).unwrap();
        assert!(matches!(
            inv,
            Invocation::ListPaged(DrugNameListReq {
                page: None,
                page_size: None
            })
        ));
    }
}
