//! Line commands for the interactive view.

use super::state::{UiEvent, ViewState};

pub const HELP: &str = "\
i <text>   set the drug name input
s          submit (create, or update when editing)
e <row>    edit a row of the table
d <row>    delete a row of the table
/<text>    filter the current page (/ alone clears)
n, p       next / previous page
g <page>   go to page
?          help
q          quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Event(UiEvent),
    Help,
    Quit,
    Invalid(String),
}

/// Map one input line to a view event. Row numbers are 1-based over the visible rows.
pub fn parse_line(line: &str, state: &ViewState) -> Parsed {
    let line = line.trim_end_matches(['\r', '\n']);
    if let Some(keyword) = line.strip_prefix('/') {
        return Parsed::Event(UiEvent::SearchChanged(keyword.to_string()));
    }
    let (cmd, arg) = match line.trim_start().split_once(' ') {
        Some((c, a)) => (c, a),
        None => (line.trim(), ""),
    };
    match cmd {
        "q" | "quit" => Parsed::Quit,
        "?" | "h" | "help" => Parsed::Help,
        "i" => Parsed::Event(UiEvent::InputChanged(arg.to_string())),
        "s" => Parsed::Event(UiEvent::Submitted),
        "n" => Parsed::Event(UiEvent::PageRequested(state.current_page + 1)),
        "p" => Parsed::Event(UiEvent::PageRequested(state.current_page - 1)),
        "g" => match arg.trim().parse::<i64>() {
            Ok(page) => Parsed::Event(UiEvent::PageRequested(page)),
            Err(_) => Parsed::Invalid(format!("not a page number: {}", arg.trim())),
        },
        "e" | "d" => match row_id(arg, state) {
            Some(id) if cmd == "e" => Parsed::Event(UiEvent::EditRequested(id)),
            Some(id) => Parsed::Event(UiEvent::DeleteRequested(id)),
            None => Parsed::Invalid(format!("no such row: {}", arg.trim())),
        },
        "" => Parsed::Invalid(String::new()),
        other => Parsed::Invalid(format!("unknown command: {}", other)),
    }
}

fn row_id(arg: &str, state: &ViewState) -> Option<String> {
    let row: usize = arg.trim().parse().ok()?;
    state
        .filtered
        .get(row.checked_sub(1)?)
        .map(|r| r.id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::DrugNameDto;

    fn state_with(names: &[&str]) -> ViewState {
        let records: Vec<DrugNameDto> = names
            .iter()
            .enumerate()
            .map(|(i, n)| DrugNameDto {
                id: format!("id{}", i),
                drug_name: n.to_string(),
                created_at: 0,
                updated_at: 0,
                deleted_at: None,
            })
            .collect();
        ViewState {
            filtered: records.clone(),
            records,
            current_page: 2,
            total_pages: 3,
            ..Default::default()
        }
    }

    #[test]
    fn input_keeps_inner_spaces() {
        let s = state_with(&[]);
        assert_eq!(
            parse_line("i Aspirin 500mg", &s),
            Parsed::Event(UiEvent::InputChanged("Aspirin 500mg".into()))
        );
    }

    #[test]
    fn rows_map_to_ids() {
        let s = state_with(&["Aspirin", "Ibuprofen"]);
        assert_eq!(
            parse_line("e 2", &s),
            Parsed::Event(UiEvent::EditRequested("id1".into()))
        );
        assert_eq!(
            parse_line("d 1", &s),
            Parsed::Event(UiEvent::DeleteRequested("id0".into()))
        );
        assert!(matches!(parse_line("e 0", &s), Parsed::Invalid(_)));
        assert!(matches!(parse_line("d 3", &s), Parsed::Invalid(_)));
    }

    #[test]
    fn paging_is_relative_to_current_page() {
        let s = state_with(&[]);
        assert_eq!(parse_line("n", &s), Parsed::Event(UiEvent::PageRequested(3)));
        assert_eq!(parse_line("p", &s), Parsed::Event(UiEvent::PageRequested(1)));
        assert_eq!(parse_line("g 1", &s), Parsed::Event(UiEvent::PageRequested(1)));
        assert!(matches!(parse_line("g x", &s), Parsed::Invalid(_)));
    }

    #[test]
    fn search_and_control() {
        let s = state_with(&[]);
        assert_eq!(
            parse_line("/spir", &s),
            Parsed::Event(UiEvent::SearchChanged("spir".into()))
        );
        assert_eq!(parse_line("/", &s), Parsed::Event(UiEvent::SearchChanged(String::new())));
        assert_eq!(parse_line("q", &s), Parsed::Quit);
        assert_eq!(parse_line("?", &s), Parsed::Help);
    }
}
