//! Application use cases.

mod drug_name;

pub use drug_name::{
    drug_name_create, drug_name_delete, drug_name_get, drug_name_list, drug_name_update,
    DrugNameCreateReq, DrugNameDto, DrugNamePage, DrugNameUpdateReq, DEFAULT_PAGE_SIZE,
};
