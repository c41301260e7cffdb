use super::app::{App, Focus};
use crate::formatting::{
    format_document_info, format_group_label, format_note_header, format_occurrences,
};
use crate::render::StyledNote;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

const FOCUS_COLOR: Color = Color::LightGreen;
const BORDER_COLOR: Color = Color::Blue;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_LABEL_COLOR: Color = Color::Gray;

/// Draw the whole viewer into `frame`
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Percentage(40),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_info(frame, app, layout[0]);
    draw_annotations(frame, app, layout[1]);
    draw_notes(frame, app, layout[2]);
    draw_detail(frame, app, layout[3]);
    frame.render_widget(Paragraph::new(footer_line(app)), layout[4]);
}

fn border_style(app: &App, panel: Focus) -> Style {
    if app.focus() == panel {
        Style::default().fg(FOCUS_COLOR)
    } else {
        Style::default().fg(BORDER_COLOR)
    }
}

fn draw_info(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let info = format_document_info(app.path(), app.document(), app.groups().len());
    let paragraph = Paragraph::new(info).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Document Information")
            .border_style(Style::default().fg(BORDER_COLOR)),
    );
    frame.render_widget(paragraph, area);
}

fn draw_annotations(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            "Annotations by ICD-10 Code ({} codes)",
            app.groups().len()
        ))
        .border_style(border_style(app, Focus::Annotations));

    if app.groups().is_empty() {
        frame.render_widget(Paragraph::new("No annotations found").block(block), area);
        return;
    }

    let width = app.config.description_width;
    let items: Vec<ListItem> = app
        .listed_groups()
        .map(|group| {
            let selected = app.selection().is_selected(&group.code);
            let label = format_group_label(group, selected, width);
            let style = if selected {
                app.palette.style_for(group.system())
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(label, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn draw_notes(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Clinical Notes")
        .border_style(border_style(app, Focus::Notes));
    let inner = block.inner(area);
    let paragraph = Paragraph::new(notes_text(app)).wrap(Wrap { trim: false });
    if inner.width > 0 {
        app.set_notes_layout(inner.height, paragraph.line_count(inner.width));
    }
    let paragraph = paragraph.block(block).scroll((app.notes_scroll(), 0));
    frame.render_widget(paragraph, area);
}

fn draw_detail(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(group) = app.cursor_group() else {
        return;
    };
    let label = format!(" [{}] ", group.system());
    let used = group.code.chars().count() + label.chars().count();
    let width = usize::from(area.width).saturating_sub(used);
    let line = Line::from(vec![
        Span::styled(
            group.code.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw(label),
        Span::styled(
            format_occurrences(group, app.document(), width),
            Style::default().fg(Color::Gray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn footer_line(app: &App) -> Line<'static> {
    let key = Style::default().fg(FOOTER_KEY_COLOR);
    let label = Style::default().fg(FOOTER_LABEL_COLOR);
    Line::from(vec![
        Span::styled("↑↓", key),
        Span::styled(" move  ", label),
        Span::styled("space", key),
        Span::styled(" toggle  ", label),
        Span::styled("tab", key),
        Span::styled(" focus  ", label),
        Span::styled("pgup/pgdn", key),
        Span::styled(" scroll  ", label),
        Span::styled("q", key),
        Span::styled(" quit  ", label),
        Span::styled(format!("| {} selected", app.selection().len()), label),
    ])
}

/// Every note as a header line followed by its highlighted body
pub fn notes_text(app: &App) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();
    for (note, styled) in app.document().notes.iter().zip(app.styled_notes()) {
        lines.push(Line::styled(
            format_note_header(note),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        lines.extend(body_lines(styled, app));
        lines.push(Line::default());
    }
    Text::from(lines)
}

/// Split segments on newlines into styled lines
fn body_lines(styled: &StyledNote, app: &App) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    for segment in &styled.segments {
        let style = segment
            .highlight
            .as_ref()
            .map(|h| app.palette.style_for(h.system))
            .unwrap_or_default();
        let mut parts = segment.text.split('\n');
        if let Some(first) = parts.next()
            && !first.is_empty()
        {
            current.push(Span::styled(first.to_string(), style));
        }
        for part in parts {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !part.is_empty() {
                current.push(Span::styled(part.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}
