//! Table of accepted records, one row per submission.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;
use sf_protocol::{Field, Submission};

/// Renders every submission in insertion order.
///
/// Columns are a shortened submission ID followed by all eleven form
/// fields, headed by their labels. Draws nothing while the list is empty.
pub fn render_submissions(frame: &mut Frame, area: Rect, submissions: &[Submission]) {
    if submissions.is_empty() {
        return;
    }

    let rows: Vec<Row> = submissions
        .iter()
        .map(|submission| {
            let mut cells = vec![
                Cell::from(format_uuid(&submission.id)).style(Style::default().fg(Color::DarkGray))
            ];
            cells.extend(
                Field::ALL
                    .iter()
                    .map(|field| Cell::from(submission.record.display_value(*field))),
            );
            Row::new(cells)
        })
        .collect();

    let header = Row::new(
        std::iter::once(Cell::from("ID"))
            .chain(Field::ALL.iter().map(|field| Cell::from(field.label())))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .add_modifier(Modifier::BOLD)
            .fg(Color::Cyan),
    );

    let widths = std::iter::once(Constraint::Length(8))
        .chain(Field::ALL.iter().map(|_| Constraint::Fill(1)))
        .collect::<Vec<_>>();

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Submitted Records ({}) ", submissions.len()))
            .style(Style::default().fg(Color::White)),
    );

    frame.render_widget(table, area);
}

/// Format UUID to show only the first 8 characters.
fn format_uuid(uuid: &uuid::Uuid) -> String {
    uuid.to_string().chars().take(8).collect()
}
