//! Main rendering logic for the diff viewer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table};

use snapdiff_core::fmt::truncate_units;
use snapdiff_core::view::{
    CellStyleClass, DiffCell, DiffTableBody, DiffTableViewModel, build_diff_table_view,
};

use crate::state::{AppState, ColumnEdge};
use crate::style::Styles;

/// Main render function. Also refreshes the column edge geometry used for
/// mouse hit-testing, so edges always match the frame on screen.
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let chunks = Layout::vertical([
        Constraint::Length(1), // Table tabs
        Constraint::Min(5),    // Diff table
        Constraint::Length(1), // Footer
    ])
    .split(area);

    let vm = build_diff_table_view(state.current_diff(), state.current_state(), &state.config);

    render_tabs(frame, chunks[0], state);
    render_table(frame, chunks[1], state, &vm);
    render_footer(frame, chunks[2], state, &vm);

    if state.show_help {
        render_help(frame, area);
    }
}

/// One tab per table in the diff, current one highlighted.
fn render_tabs(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut spans = vec![Span::styled(" snapdiff ", Styles::header())];
    for (i, table) in state.diff.table_diffs.iter().enumerate() {
        spans.push(Span::raw(" "));
        let style = if i == state.current_table {
            Styles::tab_active()
        } else {
            Styles::tab_inactive()
        };
        spans.push(Span::styled(table.table_name.clone(), style));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_table(frame: &mut Frame, area: Rect, state: &mut AppState, vm: &DiffTableViewModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", vm.table_name));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    state.column_edges = column_edges(vm, inner);

    let primary_w = cells_wide(vm.primary_width);
    let mut widths = vec![Constraint::Length(primary_w)];
    widths.extend(vm.columns.iter().map(|c| Constraint::Length(cells_wide(c.width))));

    let mut header_cells = vec![Cell::from(vm.primary_col_name.clone())];
    header_cells.extend(vm.columns.iter().map(|c| {
        let w = cells_wide(c.width) as usize;
        Cell::from(truncate_units(&c.name, w))
    }));
    let header = Row::new(header_cells).style(Styles::table_header());

    let rows = match &vm.body {
        DiffTableBody::Paired(pairs) => {
            let mut rows = Vec::with_capacity(pairs.len() * 2);
            for pair in pairs {
                rows.push(body_row(Some(&pair.primary_value), &pair.snapshot1, vm));
                rows.push(body_row(None, &pair.snapshot2, vm));
            }
            rows
        }
        DiffTableBody::PrimaryOnly(entries) => entries
            .iter()
            .map(|r| {
                Row::new(vec![Cell::from(r.primary_value.clone())])
                    .style(Styles::from_class(r.style).add_modifier(Modifier::BOLD))
            })
            .collect(),
    };

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    frame.render_widget(table, inner);
}

/// One snapshot row of a pair. The primary cell appears on the first row
/// only; the second row leaves it blank so the pair reads as one record.
fn body_row<'a>(primary: Option<&'a str>, cells: &'a [DiffCell], vm: &DiffTableViewModel) -> Row<'a> {
    let mut out = Vec::with_capacity(cells.len() + 1);
    out.push(Cell::from(primary.unwrap_or_default()));
    for (cell, col) in cells.iter().zip(&vm.columns) {
        let w = cells_wide(col.width) as usize;
        let style = if cell.is_null {
            Styles::null_value(cell.style)
        } else {
            Styles::from_class(cell.style)
        };
        out.push(Cell::from(truncate_units(&cell.text, w)).style(style));
    }
    Row::new(out)
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, vm: &DiffTableViewModel) {
    let mut spans = vec![Span::styled(format!(" {} ", vm.page.label()), Styles::default())];
    if !vm.page.back_enabled {
        spans.push(Span::styled("|< ", Styles::dim()));
    }
    if !vm.page.forward_enabled {
        spans.push(Span::styled(">| ", Styles::dim()));
    }
    if state.current_state().is_expanded {
        spans.push(Span::styled("[expanded] ", Styles::tab_active()));
    }
    if !state.current_state().show_no_diff_cols && vm.has_hidden_columns {
        spans.push(Span::styled("[no-diff hidden] ", Styles::tab_active()));
    }
    spans.push(Span::styled(
        "Tab:table PgUp/PgDn:page e:expand h:hide 0:reset ?:help q:quit",
        Styles::help(),
    ));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_help(frame: &mut Frame, area: Rect) {
    let lines: Vec<Line> = [
        ("Tab / Shift-Tab", "next / previous table"),
        ("Left / Right", "previous / next table"),
        ("PgDn / Space / f", "next page"),
        ("PgUp / b", "previous page"),
        ("Home / End", "first / last page"),
        ("e", "toggle full column widths"),
        ("h", "toggle no-diff columns"),
        ("mouse drag on column edge", "resize column"),
        ("0", "reset column widths"),
        ("q / Esc", "quit"),
    ]
    .iter()
    .map(|(k, v)| {
        Line::from(vec![
            Span::styled(format!(" {:<26}", k), Styles::help_key()),
            Span::styled((*v).to_string(), Styles::help()),
        ])
    })
    .collect();

    let height = lines.len() as u16 + 2;
    let width = 60.min(area.width);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    };
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Keys ")
                .style(Style::default()),
        ),
        popup,
    );
}

/// Right-edge terminal column of each diff column, for resize hit-testing.
/// Mirrors the layout used by [`render_table`]: primary column first, one
/// cell of spacing between columns.
fn column_edges(vm: &DiffTableViewModel, inner: Rect) -> Vec<ColumnEdge> {
    let mut edges = Vec::with_capacity(vm.columns.len());
    let mut x = inner.x + cells_wide(vm.primary_width);
    for col in &vm.columns {
        x = x.saturating_add(1); // column spacing
        x = x.saturating_add(cells_wide(col.width));
        if x >= inner.x + inner.width {
            break;
        }
        edges.push(ColumnEdge {
            name: col.name.clone(),
            x,
            rendered_width: col.width,
            full_width: col.full_width,
        });
    }
    edges
}

/// f64 layout width to whole terminal cells.
fn cells_wide(w: f64) -> u16 {
    if !w.is_finite() || w <= 0.0 {
        return 0;
    }
    w.round().min(u16::MAX as f64) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_wide_rounds_and_clamps() {
        assert_eq!(cells_wide(4.4), 4);
        assert_eq!(cells_wide(4.5), 5);
        assert_eq!(cells_wide(0.0), 0);
        assert_eq!(cells_wide(-3.0), 0);
        assert_eq!(cells_wide(f64::NAN), 0);
        assert_eq!(cells_wide(1e9), u16::MAX);
    }
}
