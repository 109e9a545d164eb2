//! 通用 UI 组件
//!
//! 对话框、输入框、按钮

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// [组件] 弹窗基础框架
pub fn render_dialog_framework(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 单行输入框，聚焦时在末尾显示光标
pub fn render_input_widget(frame: &mut Frame, area: Rect, label: &str, value: &str, is_focused: bool) {
    let (style, text) = if is_focused {
        (
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            format!("{}_", value),
        )
    } else {
        (Style::default().fg(Color::Gray), value.to_string())
    };

    let input = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(label).borders(Borders::ALL));
    frame.render_widget(input, area);
}

/// [组件] 按钮文本，例如 `[Enter] Add`
pub fn button<'a>(key: &'a str, label: &'a str, color: Color) -> Vec<Span<'a>> {
    vec![
        Span::styled(format!("[{}] ", key), Style::default().fg(Color::DarkGray)),
        Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]
}

/// [组件] 一行按钮，按钮之间留空
pub fn button_row<'a>(buttons: Vec<Vec<Span<'a>>>) -> Line<'a> {
    let mut spans = Vec::new();
    for (i, mut b) in buttons.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("    "));
        }
        spans.append(&mut b);
    }
    Line::from(spans)
}
