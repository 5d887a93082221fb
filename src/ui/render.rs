use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Tabs},
    Frame,
};

use super::app::{App, Focus};
use super::form::FormField;
use super::theme;
use super::util::truncate;
use super::view::{ListView, SummaryView};
use crate::models::{Filter, RecordType};

/// Rows taken by everything except the record list body.
pub(crate) const CHROME_ROWS: u16 = 10;

const FORM_WIDTH: u16 = 44;

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Filter bar
            Constraint::Length(5), // Summary cards
            Constraint::Min(5),    // Form + list
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Message bar
        ])
        .split(f.area());

    render_filter_bar(f, chunks[0], app);
    render_summary(f, chunks[1], &app.view.summary);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
        .split(chunks[2]);
    render_form(f, body[0], app);
    render_list(f, body[1], app);

    render_status_bar(f, chunks[3], app);
    render_message_bar(f, chunks[4], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_filter_bar(f: &mut Frame, area: Rect, app: &App) {
    let titles: Vec<Line> = Filter::all()
        .iter()
        .enumerate()
        .map(|(i, filter)| Line::from(format!("{}:{filter}", i + 1)))
        .collect();
    let selected = Filter::all()
        .iter()
        .position(|filter| *filter == app.view.filter)
        .unwrap_or(0);

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(theme::dim_style().bg(theme::HEADER_BG))
        .highlight_style(
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::styled(" | ", Style::default().fg(theme::OVERLAY)));
    f.render_widget(tabs, area);
}

fn render_summary(f: &mut Frame, area: Rect, summary: &SummaryView) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    render_card(f, cards[0], "Income", &summary.income, theme::GREEN);
    render_card(f, cards[1], "Expense", &summary.expense, theme::RED);
    render_card(
        f,
        cards[2],
        "Balance",
        &summary.balance,
        theme::polarity_color(summary.polarity),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: &str, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(format!(" {title} "), theme::title_style()));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            amount.to_string(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);
    f.render_widget(text, area);
}

fn render_form(f: &mut Frame, area: Rect, app: &App) {
    let form = &app.form;
    let editing = app.focus == Focus::Form;

    let type_span = |kind: RecordType| {
        let label = format!(" {kind} ");
        if form.kind == kind {
            Span::styled(
                label,
                Style::default()
                    .fg(theme::HEADER_BG)
                    .bg(theme::kind_color(kind))
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(label, theme::dim_style())
        }
    };

    let field_label = |field: FormField| {
        let marker = if editing && form.field == field { "▸ " } else { "  " };
        Span::styled(
            format!("{marker}{:<9}", format!("{field}:")),
            if editing && form.field == field {
                Style::default().fg(theme::ACCENT)
            } else {
                theme::dim_style()
            },
        )
    };

    let category = form
        .selected_category()
        .unwrap_or_else(|| form.kind.fallback_category());
    let enabled: Vec<&'static str> = form
        .category_options()
        .into_iter()
        .filter(|o| o.enabled)
        .map(|o| o.label)
        .collect();
    let position = enabled
        .iter()
        .position(|label| *label == category)
        .map(|i| format!(" {}/{}", i + 1, enabled.len()))
        .unwrap_or_default();

    let lines = vec![
        Line::from(vec![
            Span::styled("  Type:    ", theme::dim_style()),
            type_span(RecordType::Income),
            Span::raw(" "),
            type_span(RecordType::Expense),
        ]),
        Line::from(""),
        Line::from(vec![
            field_label(FormField::Amount),
            Span::styled(form.amount.clone(), theme::normal_style()),
        ]),
        Line::from(vec![
            field_label(FormField::Category),
            Span::styled("‹ ", theme::dim_style()),
            Span::styled(category, theme::normal_style()),
            Span::styled(" ›", theme::dim_style()),
            Span::styled(position, theme::dim_style()),
        ]),
        Line::from(vec![
            field_label(FormField::Note),
            Span::styled(truncate(&form.note, 28), theme::normal_style()),
        ]),
        Line::from(vec![
            field_label(FormField::Date),
            Span::styled(form.date.clone(), theme::normal_style()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "  Enter save · Ctrl-t type · +/- category",
            theme::dim_style(),
        )),
    ];

    let border = if editing { theme::ACCENT } else { theme::OVERLAY };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(" New record ", theme::title_style()));
    f.render_widget(Paragraph::new(lines).block(block), area);

    if editing {
        let row = FormField::all()
            .iter()
            .position(|field| *field == form.field)
            .unwrap_or(0) as u16;
        let text_len = match form.field {
            FormField::Amount => Some(form.amount.chars().count()),
            FormField::Note => Some(form.note.chars().count().min(28)),
            FormField::Date => Some(form.date.chars().count()),
            FormField::Category => None,
        };
        if let Some(len) = text_len {
            // border + "▸ " + padded label
            let x = area.x + 1 + 2 + 9 + len as u16;
            let y = area.y + 1 + 2 + row;
            if x < area.x + area.width.saturating_sub(1) && y < area.y + area.height {
                f.set_cursor_position((x, y));
            }
        }
    }
}

fn render_list(f: &mut Frame, area: Rect, app: &App) {
    let border = if app.focus == Focus::List {
        theme::ACCENT
    } else {
        theme::OVERLAY
    };
    let title = Span::styled(
        format!(" Records ({}) ", app.view.list.len()),
        theme::title_style(),
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(title);

    let items = match &app.view.list {
        ListView::Empty => {
            let msg = vec![
                Line::from(""),
                Line::from(Span::styled("No records yet", theme::dim_style())),
                Line::from(""),
                Line::from(Span::styled(
                    "Fill in the form and press Enter",
                    theme::dim_style(),
                )),
            ];
            f.render_widget(Paragraph::new(msg).centered().block(block), area);
            return;
        }
        ListView::Items(items) => items,
    };

    let rows: Vec<Row> = items
        .iter()
        .enumerate()
        .skip(app.list_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .map(|(i, item)| {
            let style = if app.focus == Focus::List && i == app.list_index {
                theme::selected_style()
            } else if i % 2 == 1 {
                theme::alt_row_style()
            } else {
                theme::normal_style()
            };
            Row::new(vec![
                Cell::from(truncate(&item.title, 30)),
                Cell::from(Span::styled(item.meta.clone(), theme::dim_style())),
                Cell::from(Span::styled(
                    item.amount.clone(),
                    Style::default().fg(theme::kind_color(item.kind)),
                )),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(16),
        Constraint::Length(28),
        Constraint::Length(16),
    ];
    f.render_widget(Table::new(rows, widths).block(block), area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.focus);
    let mode_style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(match app.focus {
            Focus::Form => theme::GREEN,
            Focus::List => theme::ACCENT,
        })
        .add_modifier(Modifier::BOLD);

    let info = format!(
        " {} | {} records | filter: {}",
        app.form.kind,
        app.ledger().len(),
        app.filter
    );
    let right = match app.focus {
        Focus::Form => " Tab next field | Esc list | ? help ",
        Focus::List => " j/k move | D delete | 1-3 filter | ? help ",
    };

    let used = mode_label.chars().count() + info.chars().count() + right.chars().count();
    let pad = (area.width as usize).saturating_sub(used);

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(&mode_label, mode_style),
        Span::styled(&info, theme::status_bar_style()),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_message_bar(f: &mut Frame, area: Rect, app: &App) {
    let line = if app.status_message.is_empty() {
        Line::from(Span::styled(" Press ? for help, Ctrl-q to quit", theme::dim_style()))
    } else {
        Line::from(Span::styled(
            format!(" {}", app.status_message),
            theme::command_bar_style(),
        ))
    };
    let bar = Paragraph::new(line).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let section = |title: &'static str| {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };
    let entry = |text: &'static str| Line::from(Span::styled(text, theme::normal_style()));

    let help_text = vec![
        Line::from(Span::styled(
            " LedgerUI Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        section(" Form"),
        entry("  Tab/Shift-Tab   Next/previous field    Enter      Save record"),
        entry("  Ctrl-t          Toggle income/expense  +/- Left/Right  Category"),
        entry("  Esc             Go to record list"),
        Line::from(""),
        section(" Record list"),
        entry("  j/k or Up/Down  Move cursor            g/G        Top/Bottom"),
        entry("  D or Delete     Delete record          t          Toggle type"),
        entry("  1/2/3           Show all/income/expense"),
        entry("  Tab or i        Back to form           Ctrl-q     Quit"),
        Line::from(""),
        Line::from(Span::styled(" Press any key to close ", theme::dim_style())),
    ];

    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
