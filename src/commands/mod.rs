//! Command handlers (DTO boundary).

pub mod drug_name;

pub use drug_name::{
    cmd_drug_name_create, cmd_drug_name_delete, cmd_drug_name_get_one,
    cmd_drug_name_list_paged, cmd_drug_name_update, dispatch, dispatch_line, ActionResult,
    DrugNameIdReq, DrugNameListReq, GetOneResult, Invocation, ListPagedResult,
};
