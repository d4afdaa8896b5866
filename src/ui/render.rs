//! Text rendering of the drug name view.

use super::state::{FormMode, ViewState};
use chrono::{DateTime, Local};
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Style},
};

/// Millisecond timestamp in local time; raw number if out of range.
pub fn format_timestamp(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|dt| {
            dt.with_timezone(&Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|| millis.to_string())
}

pub fn render_table(state: &ViewState) -> String {
    let mut builder = Builder::default();
    builder.push_record(["#", "Drug name", "Created", "Updated"]);
    for (i, record) in state.filtered.iter().enumerate() {
        builder.push_record([
            (i + 1).to_string(),
            record.drug_name.clone(),
            format_timestamp(record.created_at),
            format_timestamp(record.updated_at),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern_rounded())
        .modify(Columns::new(2..), Alignment::center());
    table.to_string()
}

pub fn render_form(state: &ViewState) -> String {
    let action = match state.mode() {
        FormMode::Idle => "create",
        FormMode::Editing => "update",
    };
    let mut line = format!("[{}] > {}", action, state.input);
    if !state.search.is_empty() {
        line.push_str(&format!("    search: {}", state.search));
    }
    line
}

pub fn render_pager(state: &ViewState) -> String {
    let prev = if state.prev_enabled() { "< prev" } else { "  ----" };
    let next = if state.next_enabled() { "next >" } else { "----  " };
    format!(
        "{}   Page {} of {}   {}",
        prev, state.current_page, state.total_pages, next
    )
}

/// The whole view: form line, table, pager.
pub fn render(state: &ViewState) -> String {
    format!(
        "{}\n{}\n{}",
        render_form(state),
        render_table(state),
        render_pager(state)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DrugNameDto;

    fn record(id: &str, name: &str) -> DrugNameDto {
        DrugNameDto {
            id: id.into(),
            drug_name: name.into(),
            created_at: 1_700_000_000_000,
            updated_at: 1_700_000_000_000,
            deleted_at: None,
        }
    }

    #[test]
    fn table_lists_filtered_rows_with_index() {
        let state = ViewState {
            records: vec![record("a", "Aspirin"), record("b", "Ibuprofen")],
            filtered: vec![record("b", "Ibuprofen")],
            ..Default::default()
        };
        let out = render_table(&state);
        assert!(out.contains("Drug name"));
        assert!(out.contains("Ibuprofen"));
        assert!(!out.contains("Aspirin"));
        assert!(out.contains('1'));
    }

    #[test]
    fn form_shows_mode() {
        let mut state = ViewState {
            input: "Aspirin".into(),
            ..Default::default()
        };
        assert_eq!(render_form(&state), "[create] > Aspirin");
        state.selected = Some(record("a", "Aspirin"));
        assert_eq!(render_form(&state), "[update] > Aspirin");
    }

    #[test]
    fn pager_marks_disabled_directions() {
        let state = ViewState {
            current_page: 1,
            total_pages: 3,
            ..Default::default()
        };
        let line = render_pager(&state);
        assert!(line.contains("Page 1 of 3"));
        assert!(!line.contains("< prev"));
        assert!(line.contains("next >"));

        let last = ViewState {
            current_page: 3,
            total_pages: 3,
            ..Default::default()
        };
        let line = render_pager(&last);
        assert!(line.contains("< prev"));
        assert!(!line.contains("next >"));
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_number() {
        assert_eq!(format_timestamp(i64::MAX), i64::MAX.to_string());
    }
}
