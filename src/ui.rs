// ⌨️ Terminal runtime - owns the terminal and turns key/mouse input into events

use crate::app::{App, UiEvent};
use crate::view::{Anchor, Anchors, Focus, Hit};
use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::{debug, warn};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run_ui(app: &mut App) -> Result<()> {
    // Refuse to start on a terminal that cannot hold every anchor
    let (width, height) = crossterm::terminal::size().context("Failed to read terminal size")?;
    Anchors::compute(Rect::new(0, 0, width, height))?;

    // Setup terminal; from here on every exit path restores it
    enable_raw_mode()?;
    let _restore = RestoreGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);
    terminal.show_cursor()?;

    res
}

/// Runs `restore` when dropped, including on early `?` returns
struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!("event=terminal_restore module=ui status=error step=raw_mode error={}", err);
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture) {
        warn!("event=terminal_restore module=ui status=error step=screen error={}", err);
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| app.view_mut().draw(f))?;

        let flow = match event::read()? {
            Event::Key(key) => handle_key(app, key),
            Event::Mouse(mouse) => handle_mouse(app, mouse),
            _ => Flow::Continue,
        };

        if flow == Flow::Quit {
            return Ok(());
        }
    }
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> Flow {
    if key.kind != KeyEventKind::Press {
        return Flow::Continue;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('c') => return Flow::Quit,
            KeyCode::Char('a') => press(app, Anchor::AddButton),
            KeyCode::Char('u') => press(app, Anchor::UpdateButton),
            KeyCode::Char('d') => press(app, Anchor::DeleteButton),
            KeyCode::Char('l') => press(app, Anchor::ClearButton),
            _ => {}
        }
        return Flow::Continue;
    }

    let focus = app.view().focus();
    match key.code {
        KeyCode::Esc => press(app, Anchor::BackButton),
        KeyCode::Tab => app.view_mut().focus_next(),
        KeyCode::BackTab => app.view_mut().focus_previous(),
        KeyCode::Enter if focus == Focus::List => edit_highlighted(app),
        // Enter inside a field never submits; the buttons do
        KeyCode::Enter => debug!("event=key_enter module=ui status=suppressed"),
        KeyCode::Char('e') if focus == Focus::List => edit_highlighted(app),
        KeyCode::Down | KeyCode::Char('j') if focus == Focus::List => {
            app.view_mut().highlight_next()
        }
        KeyCode::Up | KeyCode::Char('k') if focus == Focus::List => {
            app.view_mut().highlight_previous()
        }
        KeyCode::Char(c) => app.view_mut().type_char(c),
        KeyCode::Backspace => app.view_mut().backspace(),
        _ => {}
    }

    Flow::Continue
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) -> Flow {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Flow::Continue;
    }

    match app.view().hit(mouse.column, mouse.row) {
        Some(Hit::Row(row_id)) => {
            app.view_mut().set_focus(Focus::List);
            app.handle(UiEvent::EditClick(row_id));
        }
        Some(Hit::Anchor(Anchor::NameInput)) => app.view_mut().set_focus(Focus::Name),
        Some(Hit::Anchor(Anchor::CaloriesInput)) => app.view_mut().set_focus(Focus::Calories),
        Some(Hit::Anchor(anchor)) => press(app, anchor),
        None => {}
    }

    Flow::Continue
}

/// Activate a button. Hidden buttons cannot be pressed.
fn press(app: &mut App, anchor: Anchor) {
    if !app.view().is_visible(anchor) {
        debug!("event=button_press module=ui status=hidden anchor={:?}", anchor);
        return;
    }

    let event = match anchor {
        Anchor::AddButton => UiEvent::AddSubmit,
        Anchor::UpdateButton => UiEvent::UpdateSubmit,
        Anchor::DeleteButton => UiEvent::DeleteSubmit,
        Anchor::BackButton => UiEvent::Back,
        Anchor::ClearButton => UiEvent::ClearAll,
        Anchor::NameInput | Anchor::CaloriesInput | Anchor::ItemList | Anchor::TotalCalories => {
            return
        }
    };
    app.handle(event);
}

fn edit_highlighted(app: &mut App) {
    if let Some(row_id) = app.view().highlighted_row_id().map(str::to_string) {
        app.handle(UiEvent::EditClick(row_id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{ItemStorage, LocalStorage};
    use crate::view::UiMode;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;
    use std::cell::Cell;

    fn started_app() -> App {
        let storage = ItemStorage::new(LocalStorage::open_in_memory().unwrap());
        let mut app = App::new(storage);
        app.init();
        app
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            handle_key(app, key(KeyCode::Char(c)));
        }
    }

    fn click(app: &mut App, x: u16, y: u16) {
        let mouse = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(app, mouse);
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|f| app.view_mut().draw(f)).unwrap();
    }

    #[test]
    fn test_keyboard_add_flow() {
        let mut app = started_app();

        type_str(&mut app, "Eggs");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "250");
        handle_key(&mut app, ctrl('a'));

        assert_eq!(app.store().len(), 1);
        assert_eq!(app.view().total_display(), "250");
    }

    #[test]
    fn test_enter_in_input_does_not_submit() {
        let mut app = started_app();

        type_str(&mut app, "Eggs");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "250");
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.store().is_empty());
        assert_eq!(app.view().read_input().calories, "250");
    }

    #[test]
    fn test_list_enter_edits_then_escape_backs_out() {
        let mut app = started_app();
        type_str(&mut app, "Eggs");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "250");
        handle_key(&mut app, ctrl('a'));

        handle_key(&mut app, key(KeyCode::Tab));
        assert_eq!(app.view().focus(), Focus::List);
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.mode(), UiMode::Editing);
        assert_eq!(app.view().read_input().name, "Eggs");

        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode(), UiMode::Default);
    }

    #[test]
    fn test_hidden_buttons_cannot_be_pressed() {
        let mut app = started_app();
        type_str(&mut app, "Eggs");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "250");
        handle_key(&mut app, ctrl('a'));

        // Editing: add is hidden
        app.handle(UiEvent::EditClick("item-0".to_string()));
        handle_key(&mut app, ctrl('a'));
        assert_eq!(app.store().len(), 1);

        // Default: delete is hidden
        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, ctrl('d'));
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = started_app();
        let release = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };

        handle_key(&mut app, release);

        assert_eq!(app.view().read_input().name, "");
    }

    #[test]
    fn test_restore_guard_runs_on_early_return() {
        let restored = Cell::new(0);
        let setup = || -> Result<()> {
            let _restore = RestoreGuard::new(|| restored.set(restored.get() + 1));
            anyhow::bail!("alternate screen unavailable");
        };

        assert!(setup().is_err());
        assert_eq!(restored.get(), 1, "terminal must be restored exactly once");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = started_app();
        assert_eq!(handle_key(&mut app, ctrl('q')), Flow::Quit);
        assert_eq!(handle_key(&mut app, ctrl('c')), Flow::Quit);
        assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), Flow::Continue);
    }

    #[test]
    fn test_mouse_row_click_edits_and_delete_button_removes() {
        let mut app = started_app();
        type_str(&mut app, "Eggs");
        handle_key(&mut app, key(KeyCode::Tab));
        type_str(&mut app, "250");
        handle_key(&mut app, ctrl('a'));
        draw(&mut app);

        let list = app.view().anchors().unwrap().get(Anchor::ItemList);
        click(&mut app, list.x + 4, list.y + 1);
        assert_eq!(app.mode(), UiMode::Editing);

        // Controls changed, so lay out again before clicking
        draw(&mut app);
        let delete = app.view().anchors().unwrap().get(Anchor::DeleteButton);
        click(&mut app, delete.x + 1, delete.y + 1);

        assert!(app.store().is_empty());
        assert_eq!(app.mode(), UiMode::Default);
    }
}
