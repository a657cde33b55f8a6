//! Plain-text rendering of the board.

use std::fmt::Write;

use domain::HealthCheck;

use crate::board::{Board, LoadPhase};
use crate::form::HealthCheckForm;

pub const TITLE: &str = "Team Health Check";

/// Renders the whole screen.
pub fn render(board: &Board) -> String {
    if board.load_phase() == LoadPhase::Loading {
        return "Loading...\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(out, "{TITLE}");
    let _ = writeln!(out, "{}", "=".repeat(TITLE.len()));

    if let Some(error) = board.error() {
        let _ = writeln!(out, "\nError: {error}");
    }

    let _ = writeln!(out, "\nRecent Health Checks");
    if board.records().is_empty() {
        let _ = writeln!(out, "  (none yet)");
    }
    for record in board.records() {
        out.push_str(&render_record(record));
    }
    out
}

fn render_record(record: &HealthCheck) -> String {
    format!(
        "\n  {}\n  Feeling: {}\n  {}\n",
        record.name,
        record.feeling,
        record.date.format("%Y-%m-%d %H:%M UTC"),
    )
}

/// Renders the per-field messages of a rejected form, one per line.
pub fn render_form_errors(form: &HealthCheckForm) -> String {
    let Some(errors) = form.errors() else {
        return String::new();
    };
    errors
        .issues()
        .iter()
        .map(|issue| match issue.field() {
            Some(field) => format!("{field}: {}\n", issue.message),
            None => format!("{}\n", issue.message),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use domain::{NewHealthCheck, RecordId};

    use super::*;
    use crate::error::ClientError;

    fn record(id: i64, name: &str, feeling: &str) -> HealthCheck {
        let at = Utc.with_ymd_and_hms(2024, 6, 1, 9, 30, 0).unwrap();
        NewHealthCheck::new(name, feeling, at).into_record(RecordId::new(id), at)
    }

    #[test]
    fn loading_board_shows_indicator_only() {
        assert_eq!(render(&Board::new()), "Loading...\n");
    }

    #[test]
    fn ready_board_lists_records_in_order() {
        let mut board = Board::new();
        board.finish_load(Ok(vec![record(2, "Ben", "Okay"), record(1, "Ana", "Good")]));

        let screen = render(&board);

        assert!(screen.starts_with("Team Health Check\n"));
        assert!(screen.contains("Feeling: Okay"));
        assert!(screen.contains("2024-06-01 09:30 UTC"));
        let ben = screen.find("Ben").unwrap();
        let ana = screen.find("Ana").unwrap();
        assert!(ben < ana);
        assert!(!screen.contains("Error:"));
    }

    #[test]
    fn error_line_is_shown() {
        let mut board = Board::new();
        board.finish_load(Err(ClientError::Api {
            status: 400,
            message: "permission denied".to_string(),
        }));

        let screen = render(&board);

        assert!(screen.contains("Error: permission denied"));
        assert!(screen.contains("(none yet)"));
    }

    #[test]
    fn form_errors_are_listed_by_field() {
        let mut form = HealthCheckForm::new(Utc::now());
        form.name = "Ana".to_string();
        form.date = "soon".to_string();
        assert!(form.check().is_none());

        assert_eq!(
            render_form_errors(&form),
            "feeling: Feeling is required\ndate: Invalid date format\n"
        );
    }
}
