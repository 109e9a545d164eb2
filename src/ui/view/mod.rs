//! 视图层模块
//!
//! 包含主渲染入口和各种视图组件

pub mod components;
pub mod layouts;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::state::{App, AppMode, InputField, RowEditor};
use crate::models::Item;
use components::{button, button_row, render_dialog_framework, render_input_widget};
use layouts::centered_rect;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // 标题
            Constraint::Length(3), // Add Item 按钮
            Constraint::Min(5),    // 清单
            Constraint::Length(3), // 帮助
        ])
        .split(frame.area());

    render_title(frame, chunks[0]);
    render_add_button(frame, app, chunks[1]);
    render_list(frame, app, chunks[2]);
    render_help(frame, app, chunks[3]);

    if app.show_dialog {
        render_add_dialog(frame, app);
    }
}

fn render_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new("🛒 Shopping List")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_add_button(frame: &mut Frame, app: &App, area: Rect) {
    let color = if app.mode() == AppMode::Normal {
        Color::Magenta
    } else {
        Color::DarkGray
    };
    let add = Paragraph::new(Line::from(button("a", "Add Item", color)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(add, area);
}

fn render_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .list
        .items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            // 按编辑标记分派：编辑行或展示行
            if item.is_editing {
                editor_row(&app.editor, app.input_field)
            } else {
                display_row(item, i == app.selected_index)
            }
        })
        .collect();

    let title = format!("Items ({})", app.list.len());
    let list_widget = List::new(items).block(Block::default().title(title).borders(Borders::ALL));

    let mut state = ListState::default();
    if !app.list.is_empty() {
        state.select(Some(app.selected_index));
    }

    frame.render_stateful_widget(list_widget, area, &mut state);
}

fn display_row(item: &Item, selected: bool) -> ListItem<'static> {
    let style = if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!("{:<24}", item.name), style),
        Span::styled(format!("Qty: {:<6}", item.quantity), style),
    ];
    if selected {
        spans.push(Span::raw("  "));
        spans.extend(button_row(vec![
            button("e", "✎ Edit", Color::Cyan),
            button("d", "🗑 Delete", Color::Red),
        ]).spans);
    }

    ListItem::new(Line::from(spans))
}

fn editor_row(editor: &RowEditor, field: InputField) -> ListItem<'static> {
    let field_line = |label: &str, value: &str, focused: bool| {
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let cursor = if focused { "_" } else { "" };
        Line::from(vec![
            Span::styled(format!("  {:<10}", label), Style::default().fg(Color::DarkGray)),
            Span::styled(format!("{}{}", value, cursor), style),
        ])
    };

    let mut save = vec![Span::raw("  ")];
    save.extend(button("Enter", "Save", Color::Green));

    ListItem::new(vec![
        field_line("Name:", &editor.name, field == InputField::Name),
        field_line("Quantity:", &editor.quantity, field == InputField::Quantity),
        Line::from(save),
    ])
    .style(Style::default().bg(Color::DarkGray))
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.mode() {
        AppMode::Normal => "[a] Add Item  [e] Edit  [d] Delete  [j/k] Navigate  [q] Quit",
        AppMode::AddingItem => "[Tab] Switch field  [Enter] Add  [Esc] Cancel",
        AppMode::EditingItem(_) => "[Tab] Switch field  [Enter] Save",
    };

    let message = app.message.as_deref().unwrap_or("");
    let text = if message.is_empty() {
        help_text.to_string()
    } else {
        format!("{}  |  {}", help_text, message)
    };

    let help = Paragraph::new(text)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(help, area);
}

fn render_add_dialog(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 50, frame.area());
    let inner = render_dialog_framework(frame, area, "Add Shopping Item");

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_widget(
        frame,
        chunks[0],
        "Enter Item",
        &app.draft_name,
        app.input_field == InputField::Name,
    );
    render_input_widget(
        frame,
        chunks[1],
        "Enter Quantity",
        &app.draft_quantity,
        app.input_field == InputField::Quantity,
    );

    let buttons = button_row(vec![
        button("Enter", "Add", Color::Green),
        button("Esc", "Cancel", Color::Red),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        chunks[2],
    );
}
