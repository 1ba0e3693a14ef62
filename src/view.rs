// 🖥️ View Renderer - item data <-> on-screen presentation
//
// Holds presentation state only (input buffers, rows, visibility, total text).
// The coordinator decides WHAT to show; this module decides HOW.

use crate::items::{row_id, Calories, Item, ItemId};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use std::collections::HashMap;
use thiserror::Error;

// ============================================================================
// ANCHORS
// ============================================================================

/// Logical UI anchor points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Anchor {
    NameInput,
    CaloriesInput,
    AddButton,
    UpdateButton,
    DeleteButton,
    BackButton,
    ClearButton,
    ItemList,
    TotalCalories,
}

impl Anchor {
    pub const ALL: [Anchor; 9] = [
        Anchor::NameInput,
        Anchor::CaloriesInput,
        Anchor::AddButton,
        Anchor::UpdateButton,
        Anchor::DeleteButton,
        Anchor::BackButton,
        Anchor::ClearButton,
        Anchor::ItemList,
        Anchor::TotalCalories,
    ];

    /// Button caption, including its hotkey
    pub fn label(&self) -> &'static str {
        match self {
            Anchor::AddButton => "Add Meal ^A",
            Anchor::UpdateButton => "Update ^U",
            Anchor::DeleteButton => "Delete ^D",
            Anchor::BackButton => "Back Esc",
            Anchor::ClearButton => "Clear All ^L",
            Anchor::NameInput => "Item Name",
            Anchor::CaloriesInput => "Calories",
            Anchor::ItemList => "Meals",
            Anchor::TotalCalories => "Total Calories",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error("terminal is {width}x{height}, need at least {min_width}x{min_height}")]
    TerminalTooSmall {
        width: u16,
        height: u16,
        min_width: u16,
        min_height: u16,
    },

    #[error("anchor {0:?} has no room on screen")]
    MissingAnchor(Anchor),
}

/// Screen region for every anchor, derived from one layout pass
#[derive(Debug, Clone, PartialEq)]
pub struct Anchors {
    regions: HashMap<Anchor, Rect>,
    title: Rect,
    status: Rect,
}

impl Anchors {
    pub const MIN_WIDTH: u16 = 70;
    pub const MIN_HEIGHT: u16 = 15;

    /// Lay out the screen. Fails if any anchor would end up with no area.
    pub fn compute(area: Rect) -> Result<Self, ViewError> {
        if area.width < Self::MIN_WIDTH || area.height < Self::MIN_HEIGHT {
            return Err(ViewError::TerminalTooSmall {
                width: area.width,
                height: area.height,
                min_width: Self::MIN_WIDTH,
                min_height: Self::MIN_HEIGHT,
            });
        }

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title + total
                Constraint::Length(3), // Inputs
                Constraint::Length(3), // Buttons
                Constraint::Min(3),    // Item list
                Constraint::Length(3), // Status bar
            ])
            .split(area);

        let title = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(26)])
            .split(rows[0]);

        let inputs = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(rows[1]);

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(button_width(Anchor::AddButton)),
                Constraint::Length(button_width(Anchor::UpdateButton)),
                Constraint::Length(button_width(Anchor::DeleteButton)),
                Constraint::Length(button_width(Anchor::BackButton)),
                Constraint::Min(0),
                Constraint::Length(button_width(Anchor::ClearButton)),
            ])
            .split(rows[2]);

        let regions: HashMap<Anchor, Rect> = [
            (Anchor::TotalCalories, title[1]),
            (Anchor::NameInput, inputs[0]),
            (Anchor::CaloriesInput, inputs[1]),
            (Anchor::AddButton, buttons[0]),
            (Anchor::UpdateButton, buttons[1]),
            (Anchor::DeleteButton, buttons[2]),
            (Anchor::BackButton, buttons[3]),
            (Anchor::ClearButton, buttons[5]),
            (Anchor::ItemList, rows[3]),
        ]
        .into_iter()
        .collect();

        for anchor in Anchor::ALL {
            match regions.get(&anchor) {
                Some(rect) if rect.width > 0 && rect.height > 0 => {}
                _ => return Err(ViewError::MissingAnchor(anchor)),
            }
        }

        Ok(Self {
            regions,
            title: title[0],
            status: rows[4],
        })
    }

    pub fn get(&self, anchor: Anchor) -> Rect {
        self.regions.get(&anchor).copied().unwrap_or_default()
    }

    /// Anchor under the given cell, if any
    pub fn at(&self, x: u16, y: u16) -> Option<Anchor> {
        Anchor::ALL
            .into_iter()
            .find(|anchor| contains(self.get(*anchor), x, y))
    }
}

fn button_width(anchor: Anchor) -> u16 {
    anchor.label().len() as u16 + 4
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

// ============================================================================
// PRESENTATION STATE
// ============================================================================

/// Which set of controls is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    #[default]
    Default,
    Editing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Calories,
    List,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Focus::Name => Focus::Calories,
            Focus::Calories => Focus::List,
            Focus::List => Focus::Name,
        }
    }

    pub fn previous(&self) -> Self {
        match self {
            Focus::Name => Focus::List,
            Focus::Calories => Focus::Name,
            Focus::List => Focus::Calories,
        }
    }
}

/// Raw form contents, exactly as typed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormInput {
    pub name: String,
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRow {
    pub row_id: String,
    pub name: String,
    pub calories: Calories,
}

impl ListRow {
    fn from_item(item: &Item) -> Self {
        Self {
            row_id: item.row_id(),
            name: item.name.clone(),
            calories: item.calories,
        }
    }
}

/// What a mouse click landed on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hit {
    Anchor(Anchor),
    Row(String),
}

#[derive(Debug, Default)]
pub struct View {
    input: FormInput,
    focus: Focus,
    rows: Vec<ListRow>,
    list_visible: bool,
    list_state: ListState,
    controls: UiMode,
    total_display: String,
    anchors: Option<Anchors>,
}

impl View {
    pub fn new() -> Self {
        Self {
            total_display: "0".to_string(),
            ..Self::default()
        }
    }

    // ------------------------------------------------------------------------
    // List
    // ------------------------------------------------------------------------

    /// Replace every row and show the list
    pub fn render_list(&mut self, items: &[Item]) {
        self.rows = items.iter().map(ListRow::from_item).collect();
        self.list_visible = true;
        self.clamp_highlight();
    }

    pub fn append_row(&mut self, item: &Item) {
        self.rows.push(ListRow::from_item(item));
        self.list_visible = true;
        self.clamp_highlight();
    }

    pub fn update_row(&mut self, item: &Item) {
        let target = item.row_id();
        if let Some(row) = self.rows.iter_mut().find(|row| row.row_id == target) {
            *row = ListRow::from_item(item);
        }
    }

    pub fn remove_row(&mut self, id: ItemId) {
        let target = row_id(id);
        self.rows.retain(|row| row.row_id != target);
        self.clamp_highlight();
    }

    pub fn remove_rows(&mut self) {
        self.rows.clear();
        self.clamp_highlight();
    }

    pub fn hide_list(&mut self) {
        self.list_visible = false;
    }

    pub fn rows(&self) -> &[ListRow] {
        &self.rows
    }

    pub fn is_list_visible(&self) -> bool {
        self.list_visible
    }

    pub fn highlight_next(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.rows.len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn highlight_previous(&mut self) {
        if self.rows.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(0) | None => self.rows.len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    pub fn highlighted_row_id(&self) -> Option<&str> {
        self.list_state
            .selected()
            .and_then(|i| self.rows.get(i))
            .map(|row| row.row_id.as_str())
    }

    fn clamp_highlight(&mut self) {
        let selected = match (self.rows.len(), self.list_state.selected()) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
        self.list_state.select(selected);
    }

    // ------------------------------------------------------------------------
    // Form
    // ------------------------------------------------------------------------

    pub fn read_input(&self) -> FormInput {
        self.input.clone()
    }

    pub fn clear_inputs(&mut self) {
        self.input = FormInput::default();
    }

    pub fn fill_form_for_edit(&mut self, item: &Item) {
        self.input = FormInput {
            name: item.name.clone(),
            calories: item.calories.to_string(),
        };
        self.focus = Focus::Name;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Type into the focused input; ignored while the list has focus
    pub fn type_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            field.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            field.pop();
        }
    }

    fn focused_field(&mut self) -> Option<&mut String> {
        match self.focus {
            Focus::Name => Some(&mut self.input.name),
            Focus::Calories => Some(&mut self.input.calories),
            Focus::List => None,
        }
    }

    // ------------------------------------------------------------------------
    // Controls & total
    // ------------------------------------------------------------------------

    /// Single source of truth for which buttons show in each mode
    pub fn render_controls(&mut self, mode: UiMode) {
        self.controls = mode;
    }

    pub fn controls(&self) -> UiMode {
        self.controls
    }

    pub fn is_visible(&self, anchor: Anchor) -> bool {
        match anchor {
            Anchor::AddButton => self.controls == UiMode::Default,
            Anchor::UpdateButton | Anchor::DeleteButton | Anchor::BackButton => {
                self.controls == UiMode::Editing
            }
            Anchor::ItemList => self.list_visible,
            Anchor::NameInput
            | Anchor::CaloriesInput
            | Anchor::ClearButton
            | Anchor::TotalCalories => true,
        }
    }

    pub fn set_total_display(&mut self, total: u64) {
        self.total_display = total.to_string();
    }

    pub fn total_display(&self) -> &str {
        &self.total_display
    }

    // ------------------------------------------------------------------------
    // Hit testing
    // ------------------------------------------------------------------------

    /// Layout from the last successful draw
    pub fn anchors(&self) -> Option<&Anchors> {
        self.anchors.as_ref()
    }

    /// Resolve a click to a visible anchor or a list row
    pub fn hit(&self, x: u16, y: u16) -> Option<Hit> {
        let anchors = self.anchors.as_ref()?;
        let anchor = anchors.at(x, y)?;
        if !self.is_visible(anchor) {
            return None;
        }

        if anchor != Anchor::ItemList {
            return Some(Hit::Anchor(anchor));
        }

        let inner = anchors.get(Anchor::ItemList).inner(&Margin {
            horizontal: 1,
            vertical: 1,
        });
        if !contains(inner, x, y) {
            return None;
        }
        let index = (y - inner.y) as usize + self.list_state.offset();
        self.rows.get(index).map(|row| Hit::Row(row.row_id.clone()))
    }

    // ------------------------------------------------------------------------
    // Drawing
    // ------------------------------------------------------------------------

    pub fn draw(&mut self, f: &mut Frame) {
        let anchors = match Anchors::compute(f.size()) {
            Ok(anchors) => anchors,
            Err(err) => {
                self.anchors = None;
                let notice = Paragraph::new(format!("{} (resize to continue, ^Q quits)", err))
                    .style(Style::default().fg(Color::Red));
                f.render_widget(notice, f.size());
                return;
            }
        };

        render_title(f, &anchors, &self.total_display);
        self.render_inputs(f, &anchors);
        self.render_buttons(f, &anchors);
        self.render_item_list(f, &anchors);
        render_status_bar(f, anchors.status, self.controls);

        self.anchors = Some(anchors);
    }

    fn render_inputs(&self, f: &mut Frame, anchors: &Anchors) {
        let fields = [
            (Anchor::NameInput, Focus::Name, &self.input.name),
            (Anchor::CaloriesInput, Focus::Calories, &self.input.calories),
        ];

        for (anchor, focus, value) in fields {
            let area = anchors.get(anchor);
            let focused = self.focus == focus;
            let border = if focused {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::White)
            };

            let input = Paragraph::new(value.as_str()).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(format!(" {} ", anchor.label())),
            );
            f.render_widget(input, area);

            if focused {
                let max_x = area.x + area.width.saturating_sub(2);
                let x = (area.x + 1 + value.chars().count() as u16).min(max_x);
                f.set_cursor(x, area.y + 1);
            }
        }
    }

    fn render_buttons(&self, f: &mut Frame, anchors: &Anchors) {
        let buttons = [
            (Anchor::AddButton, Color::Green),
            (Anchor::UpdateButton, Color::Yellow),
            (Anchor::DeleteButton, Color::Red),
            (Anchor::BackButton, Color::DarkGray),
            (Anchor::ClearButton, Color::Cyan),
        ];

        for (anchor, color) in buttons {
            if !self.is_visible(anchor) {
                continue;
            }
            let button = Paragraph::new(Line::from(Span::styled(
                anchor.label(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            );
            f.render_widget(button, anchors.get(anchor));
        }
    }

    fn render_item_list(&mut self, f: &mut Frame, anchors: &Anchors) {
        let area = anchors.get(Anchor::ItemList);
        let border = if self.focus == Focus::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", Anchor::ItemList.label()));

        if !self.list_visible {
            f.render_widget(block, area);
            return;
        }

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("{}: ", row.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{} Calories", row.calories),
                        Style::default().add_modifier(Modifier::ITALIC),
                    ),
                    Span::raw("  "),
                    Span::styled("[edit]", Style::default().fg(Color::Yellow)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .block(block)
            .highlight_style(
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("→ ");

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}

fn render_title(f: &mut Frame, anchors: &Anchors, total: &str) {
    let title = Paragraph::new(Line::from(vec![Span::styled(
        "Calorie Tracker",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, anchors.title);

    let total = Paragraph::new(Line::from(vec![
        Span::raw(format!("{}: ", Anchor::TotalCalories.label())),
        Span::styled(
            total.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(total, anchors.get(Anchor::TotalCalories));
}

fn render_status_bar(f: &mut Frame, area: Rect, mode: UiMode) {
    let mut spans = vec![Span::styled(
        match mode {
            UiMode::Default => " ADD ",
            UiMode::Editing => " EDIT ",
        },
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    let hints = [("Tab", " Field | "), ("↑/↓", " Select | "), ("Enter", " Edit | ")];
    spans.push(Span::raw(" "));
    for (key, what) in hints {
        spans.push(Span::styled(key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(what));
    }
    spans.push(Span::styled("^Q", Style::default().fg(Color::Red)));
    spans.push(Span::raw(" Quit"));

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(status, area);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn item(id: ItemId, name: &str, calories: u32) -> Item {
        Item {
            id,
            name: name.to_string(),
            calories: Calories::new(calories),
        }
    }

    fn draw(view: &mut View, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| view.draw(f)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn center(rect: Rect) -> (u16, u16) {
        (rect.x + rect.width / 2, rect.y + rect.height / 2)
    }

    #[test]
    fn test_anchors_reject_small_terminal() {
        let err = Anchors::compute(Rect::new(0, 0, 40, 10)).unwrap_err();
        assert!(matches!(err, ViewError::TerminalTooSmall { width: 40, height: 10, .. }));
    }

    #[test]
    fn test_anchors_cover_every_anchor() {
        let anchors = Anchors::compute(Rect::new(0, 0, 80, 24)).unwrap();
        for anchor in Anchor::ALL {
            let rect = anchors.get(anchor);
            assert!(rect.width > 0 && rect.height > 0, "{:?} has no area", anchor);
            assert_eq!(anchors.at(center(rect).0, center(rect).1), Some(anchor));
        }
    }

    #[test]
    fn test_render_list_replaces_rows_and_shows_list() {
        let mut view = View::new();
        view.append_row(&item(9, "Old", 1));

        view.render_list(&[item(0, "Eggs", 250), item(1, "Toast", 100)]);

        let ids: Vec<&str> = view.rows().iter().map(|r| r.row_id.as_str()).collect();
        assert_eq!(ids, vec!["item-0", "item-1"]);
        assert!(view.is_list_visible());
        assert_eq!(view.highlighted_row_id(), Some("item-0"));
    }

    #[test]
    fn test_incremental_row_updates() {
        let mut view = View::new();
        view.append_row(&item(0, "Eggs", 250));
        view.append_row(&item(1, "Toast", 100));

        view.update_row(&item(0, "Eggs", 300));
        assert_eq!(view.rows()[0].calories, Calories::new(300));

        view.remove_row(0);
        assert_eq!(view.rows().len(), 1);
        assert_eq!(view.rows()[0].row_id, "item-1");

        // Unknown rows are ignored
        view.update_row(&item(5, "Ghost", 1));
        view.remove_row(5);
        assert_eq!(view.rows().len(), 1);
    }

    #[test]
    fn test_controls_exactly_one_state() {
        let mut view = View::new();

        view.render_controls(UiMode::Default);
        assert!(view.is_visible(Anchor::AddButton));
        assert!(!view.is_visible(Anchor::UpdateButton));
        assert!(!view.is_visible(Anchor::DeleteButton));
        assert!(!view.is_visible(Anchor::BackButton));

        view.render_controls(UiMode::Editing);
        assert!(!view.is_visible(Anchor::AddButton));
        assert!(view.is_visible(Anchor::UpdateButton));
        assert!(view.is_visible(Anchor::DeleteButton));
        assert!(view.is_visible(Anchor::BackButton));

        assert!(view.is_visible(Anchor::ClearButton));
    }

    #[test]
    fn test_typing_goes_to_focused_input() {
        let mut view = View::new();
        for c in "Eggs".chars() {
            view.type_char(c);
        }
        view.focus_next();
        for c in "2500".chars() {
            view.type_char(c);
        }
        view.backspace();

        view.focus_next();
        assert_eq!(view.focus(), Focus::List);
        view.type_char('x');

        assert_eq!(
            view.read_input(),
            FormInput {
                name: "Eggs".to_string(),
                calories: "250".to_string()
            }
        );

        view.clear_inputs();
        assert_eq!(view.read_input(), FormInput::default());
    }

    #[test]
    fn test_fill_form_for_edit() {
        let mut view = View::new();
        view.set_focus(Focus::List);

        view.fill_form_for_edit(&item(3, "Steak Dinner", 1200));

        let input = view.read_input();
        assert_eq!(input.name, "Steak Dinner");
        assert_eq!(input.calories, "1200");
        assert_eq!(view.focus(), Focus::Name);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut view = View::new();
        view.render_list(&[item(0, "A", 1), item(1, "B", 2)]);

        view.highlight_next();
        assert_eq!(view.highlighted_row_id(), Some("item-1"));
        view.highlight_next();
        assert_eq!(view.highlighted_row_id(), Some("item-0"));
        view.highlight_previous();
        assert_eq!(view.highlighted_row_id(), Some("item-1"));

        view.remove_rows();
        assert_eq!(view.highlighted_row_id(), None);
    }

    #[test]
    fn test_draw_shows_rows_and_total() {
        let mut view = View::new();
        view.render_list(&[item(0, "Eggs", 250)]);
        view.set_total_display(250);

        let screen = draw(&mut view, 80, 24);

        assert!(screen.contains("Eggs: 250 Calories"));
        assert!(screen.contains("Total Calories: 250"));
        assert!(screen.contains("Add Meal ^A"));
        assert!(!screen.contains("Update ^U"));
    }

    #[test]
    fn test_hidden_list_draws_no_rows() {
        let mut view = View::new();
        view.render_list(&[item(0, "Eggs", 250)]);
        view.hide_list();

        let screen = draw(&mut view, 80, 24);
        assert!(!screen.contains("Eggs"));
    }

    #[test]
    fn test_draw_too_small_shows_notice() {
        let mut view = View::new();
        let screen = draw(&mut view, 60, 10);

        assert!(screen.contains("terminal is 60x10"));
        assert!(view.anchors().is_none());
    }

    #[test]
    fn test_hit_respects_visibility_and_rows() {
        let mut view = View::new();
        view.render_list(&[item(0, "Eggs", 250), item(1, "Toast", 100)]);
        draw(&mut view, 80, 24);

        let anchors = view.anchors().unwrap().clone();
        let (x, y) = center(anchors.get(Anchor::AddButton));
        assert_eq!(view.hit(x, y), Some(Hit::Anchor(Anchor::AddButton)));

        let (x, y) = center(anchors.get(Anchor::UpdateButton));
        assert_eq!(view.hit(x, y), None);

        let list = anchors.get(Anchor::ItemList);
        assert_eq!(
            view.hit(list.x + 3, list.y + 2),
            Some(Hit::Row("item-1".to_string()))
        );
        assert_eq!(view.hit(list.x + 3, list.y + 3), None);
    }
}
