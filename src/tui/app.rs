use crate::config::{Palette, ViewerConfig};
use crate::mdace::{AnnotationGroup, AnnotationGroups, Document};
use crate::render::{StyledNote, render_document};
use crate::selection::SelectionState;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use log::debug;
use ratatui::widgets::ListState;
use std::path::{Path, PathBuf};

const DEFAULT_PAGE: u16 = 10;

/// Panel receiving the arrow keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Annotations,
    Notes,
}

/// State of one viewer session
///
/// Owns the loaded document, its groups and the selection. `styled` always
/// reflects `selection`: it is recomputed after every toggle.
pub struct App {
    path: PathBuf,
    document: Document,
    groups: AnnotationGroups,
    /// Group codes in listing order
    order: Vec<String>,
    selection: SelectionState,
    styled: Vec<StyledNote>,
    pub(crate) config: ViewerConfig,
    pub(crate) palette: Palette,
    pub(crate) list_state: ListState,
    notes_scroll: u16,
    /// Inner height of the notes panel at the last draw
    notes_viewport: u16,
    /// Wrapped row count of the notes panel at the last draw
    notes_rows: Option<usize>,
    focus: Focus,
    should_quit: bool,
}

impl App {
    pub fn new(path: impl AsRef<Path>, document: Document, config: ViewerConfig) -> Result<Self> {
        let palette = config.palette()?;
        let groups = AnnotationGroups::from_document(&document);
        let order: Vec<String> = groups
            .ordered(config.group_order)
            .into_iter()
            .map(|g| g.code.clone())
            .collect();
        let selection = SelectionState::new();
        let styled = render_document(&document, &selection);

        let mut list_state = ListState::default();
        if !order.is_empty() {
            list_state.select(Some(0));
        }

        Ok(Self {
            path: path.as_ref().to_path_buf(),
            document,
            groups,
            order,
            selection,
            styled,
            config,
            palette,
            list_state,
            notes_scroll: 0,
            notes_viewport: DEFAULT_PAGE,
            notes_rows: None,
            focus: Focus::Annotations,
            should_quit: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn groups(&self) -> &AnnotationGroups {
        &self.groups
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn styled_notes(&self) -> &[StyledNote] {
        &self.styled
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn notes_scroll(&self) -> u16 {
        self.notes_scroll
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Groups in listing order
    pub fn listed_groups(&self) -> impl Iterator<Item = &AnnotationGroup> {
        self.order.iter().filter_map(|code| self.groups.get(code))
    }

    /// Group under the list cursor
    pub fn cursor_group(&self) -> Option<&AnnotationGroup> {
        let idx = self.list_state.selected()?;
        self.groups.get(self.order.get(idx)?)
    }

    /// Flip `code` and re-render every note
    ///
    /// Codes absent from the document are ignored. Returns whether the code is
    /// selected afterwards.
    pub fn toggle_code(&mut self, code: &str) -> bool {
        if !self.groups.contains(code) {
            return false;
        }
        let selected = self.selection.toggle(code);
        debug!(
            "{} {} ({} selected)",
            if selected { "Selected" } else { "Deselected" },
            code,
            self.selection.len()
        );
        self.styled = render_document(&self.document, &self.selection);
        selected
    }

    pub fn toggle_cursor(&mut self) {
        if let Some(code) = self.cursor_group().map(|g| g.code.clone()) {
            self.toggle_code(&code);
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        if self.order.is_empty() {
            return;
        }
        let last = self.order.len() - 1;
        let current = self.list_state.selected().unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.list_state.select(Some(next));
    }

    /// Rows in the notes panel
    ///
    /// Counts wrapped rows once the panel has been drawn, and unwrapped lines
    /// before that.
    pub fn notes_line_count(&self) -> usize {
        if let Some(rows) = self.notes_rows {
            return rows;
        }
        // header + body lines + blank separator, per note
        self.document
            .notes
            .iter()
            .map(|n| n.text.split('\n').count() + 2)
            .sum()
    }

    /// Record the notes panel's inner height and wrapped row count
    pub(crate) fn set_notes_layout(&mut self, viewport: u16, rows: usize) {
        self.notes_viewport = viewport;
        self.notes_rows = Some(rows);
        self.notes_scroll = self.notes_scroll.min(self.max_scroll());
    }

    /// Scroll offset that puts the last row at the bottom of the panel
    fn max_scroll(&self) -> u16 {
        let lines = self
            .notes_line_count()
            .saturating_sub(usize::from(self.notes_viewport));
        u16::try_from(lines).unwrap_or(u16::MAX)
    }

    fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.notes_scroll) + delta).clamp(0, i32::from(self.max_scroll()));
        self.notes_scroll = next as u16;
    }

    fn page(&self) -> i32 {
        i32::from(self.notes_viewport.max(1))
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.scroll_by(-self.page() / 2),
            KeyCode::Char('d') if ctrl => self.scroll_by(self.page() / 2),
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = match self.focus {
                    Focus::Annotations => Focus::Notes,
                    Focus::Notes => Focus::Annotations,
                };
            }
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Annotations => self.move_cursor(-1),
                Focus::Notes => self.scroll_by(-1),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Annotations => self.move_cursor(1),
                Focus::Notes => self.scroll_by(1),
            },
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('x') => self.toggle_cursor(),
            KeyCode::PageUp => self.scroll_by(-self.page()),
            KeyCode::PageDown => self.scroll_by(self.page()),
            KeyCode::Home | KeyCode::Char('g') => self.notes_scroll = 0,
            KeyCode::End | KeyCode::Char('G') => self.notes_scroll = self.max_scroll(),
            _ => {}
        }
    }
}
