//! Application state and event handling
//!
//! This is the core of tintshell, managing:
//! - Display mode and the derived theme
//! - Tab selection
//! - Panel height, including mouse drag on the panel's bottom border

use crate::types::{DisplayMode, Variant};
use crate::ui::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Header bar height in rows (title row plus padding).
pub const HEADER_HEIGHT: u16 = 3;
/// Status bar height in rows.
pub const STATUS_HEIGHT: u16 = 1;
/// Smallest useful panel: tab row plus the bottom border.
pub const MIN_PANEL_HEIGHT: u16 = 3;

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub variant: Variant,
    pub mode: DisplayMode,
    pub theme: Theme,
    pub selected_tab: usize,
    pub panel_height: u16,
    dragging: bool,
}

impl App {
    /// Create a new App instance with an already-resolved variant and mode.
    pub fn new(variant: Variant, mode: DisplayMode, panel_height: u16) -> Self {
        Self {
            should_quit: false,
            variant,
            mode,
            theme: Theme::derive(variant, mode),
            selected_tab: 0,
            panel_height: panel_height.max(MIN_PANEL_HEIGHT),
            dragging: false,
        }
    }

    /// Flip between light and dark and re-derive the theme.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.theme = Theme::derive(self.variant, self.mode);
    }

    /// Select a tab by index. Out-of-range indices leave the selection
    /// unchanged.
    pub fn select_tab(&mut self, index: usize) {
        if index < self.variant.tab_count() {
            self.selected_tab = index;
        }
    }

    pub fn next_tab(&mut self) {
        self.selected_tab = (self.selected_tab + 1) % self.variant.tab_count();
    }

    pub fn prev_tab(&mut self) {
        let count = self.variant.tab_count();
        self.selected_tab = (self.selected_tab + count - 1) % count;
    }

    /// Advance to the next palette variant, keeping the tab selection inside
    /// the new tab count.
    pub fn cycle_variant(&mut self) {
        self.variant = self.variant.next();
        self.selected_tab = self.selected_tab.min(self.variant.tab_count() - 1);
        self.theme = Theme::derive(self.variant, self.mode);
    }

    /// Adjust the panel height by `delta` rows, clamped to the screen.
    pub fn resize_panel(&mut self, delta: i32, area: Rect) {
        let height = self.panel_height as i32 + delta;
        self.panel_height = height.clamp(
            MIN_PANEL_HEIGHT as i32,
            Self::max_panel_height(area) as i32,
        ) as u16;
    }

    /// Largest panel height that still leaves room for header and status bar.
    pub fn max_panel_height(area: Rect) -> u16 {
        area.height
            .saturating_sub(HEADER_HEIGHT + STATUS_HEIGHT)
            .max(MIN_PANEL_HEIGHT)
    }

    /// Panel height as actually rendered for the given screen size.
    pub fn effective_panel_height(&self, area: Rect) -> u16 {
        self.panel_height
            .clamp(MIN_PANEL_HEIGHT, Self::max_panel_height(area))
    }

    /// Screen position of the mode toggle glyph in the header.
    pub fn toggle_button_area(area: Rect) -> Rect {
        Rect {
            x: area.x + area.width.saturating_sub(5),
            y: area.y + 1,
            width: 3.min(area.width),
            height: 1,
        }
    }

    /// Row of the panel's bottom border, which doubles as the drag handle.
    fn drag_handle_row(&self, area: Rect) -> u16 {
        area.y + HEADER_HEIGHT + self.effective_panel_height(area) - 1
    }

    /// Handle a key event.
    pub fn handle_key(&mut self, key: KeyEvent, area: Rect) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('t') | KeyCode::Char(' ') => self.toggle_mode(),
            KeyCode::Char('v') => self.cycle_variant(),
            KeyCode::Char(c @ '1'..='9') => self.select_tab((c as u8 - b'1') as usize),
            KeyCode::Left | KeyCode::Char('h') => self.prev_tab(),
            KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => self.next_tab(),
            KeyCode::Char('+') | KeyCode::Char('=') => self.resize_panel(1, area),
            KeyCode::Char('-') | KeyCode::Char('_') => self.resize_panel(-1, area),
            _ => {}
        }
    }

    /// Handle a mouse event: click on the toggle glyph, or drag of the
    /// panel's bottom border.
    pub fn handle_mouse(&mut self, event: MouseEvent, area: Rect) {
        let position = Position::new(event.column, event.row);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if Self::toggle_button_area(area).contains(position) {
                    self.toggle_mode();
                } else if event.row == self.drag_handle_row(area) {
                    self.dragging = true;
                }
            }
            MouseEventKind::Drag(MouseButton::Left) if self.dragging => {
                // The border follows the pointer row.
                let height = (event.row + 1).saturating_sub(area.y + HEADER_HEIGHT);
                self.panel_height =
                    height.clamp(MIN_PANEL_HEIGHT, Self::max_panel_height(area));
            }
            MouseEventKind::Up(MouseButton::Left) => self.dragging = false,
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn screen() -> Rect {
        Rect::new(0, 0, 80, 24)
    }

    fn app() -> App {
        App::new(Variant::Classic, DisplayMode::Light, 12)
    }

    #[test]
    fn test_even_toggle_count_restores_mode() {
        let mut app = app();
        for _ in 0..4 {
            app.toggle_mode();
        }
        assert_eq!(app.mode, DisplayMode::Light);

        app.toggle_mode();
        assert_eq!(app.mode, DisplayMode::Dark);
    }

    #[test]
    fn test_toggle_rederives_theme() {
        let mut app = app();
        let light_primary = app.theme.primary;

        app.toggle_mode();
        assert_eq!(app.theme.primary.hex(), "#90caf9");

        app.toggle_mode();
        assert_eq!(app.theme.primary, light_primary);
    }

    #[test]
    fn test_initial_mode_follows_preference() {
        let dark = App::new(Variant::Classic, DisplayMode::Dark, 12);
        assert_eq!(dark.mode, DisplayMode::Dark);
        assert_eq!(dark.theme.mode, DisplayMode::Dark);

        let light = App::new(Variant::Classic, DisplayMode::Light, 12);
        assert_eq!(light.mode, DisplayMode::Light);
    }

    #[test]
    fn test_select_tab_in_range() {
        let mut app = app();
        app.select_tab(1);
        assert_eq!(app.selected_tab, 1);
        app.select_tab(2);
        assert_eq!(app.selected_tab, 2);
    }

    #[test]
    fn test_select_tab_out_of_range_is_ignored() {
        let mut app = app();
        app.select_tab(1);
        app.select_tab(7);
        assert_eq!(app.selected_tab, 1);
    }

    #[test]
    fn test_tab_selection_survives_mode_toggle() {
        let mut app = app();
        app.select_tab(1);
        app.toggle_mode();
        app.toggle_mode();
        assert_eq!(app.selected_tab, 1);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut app = app();
        app.next_tab();
        app.next_tab();
        assert_eq!(app.selected_tab, 2);
        app.next_tab();
        assert_eq!(app.selected_tab, 0);
        app.prev_tab();
        assert_eq!(app.selected_tab, 2);
    }

    #[test]
    fn test_cycle_variant_clamps_tab_selection() {
        let mut app = app();
        app.select_tab(2);
        app.cycle_variant();
        assert_eq!(app.variant, Variant::Harvest);
        assert_eq!(app.selected_tab, 1);
    }

    #[test]
    fn test_resize_clamps_to_bounds() {
        let mut app = app();
        app.resize_panel(-100, screen());
        assert_eq!(app.panel_height, MIN_PANEL_HEIGHT);

        app.resize_panel(100, screen());
        assert_eq!(app.panel_height, App::max_panel_height(screen()));
    }

    #[test]
    fn test_drag_resizes_panel() {
        let mut app = app();
        let area = screen();

        // Bottom border of a 12-row panel under a 3-row header.
        let handle_row = HEADER_HEIGHT + 12 - 1;
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, handle_row), area);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, handle_row + 4), area);
        assert_eq!(app.panel_height, 16);

        app.handle_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 10, handle_row + 4), area);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 5), area);
        assert_eq!(app.panel_height, 16);
    }

    #[test]
    fn test_drag_ignored_away_from_handle() {
        let mut app = app();
        let area = screen();

        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), 10, 6), area);
        app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 10, 20), area);
        assert_eq!(app.panel_height, 12);
    }

    #[test]
    fn test_click_on_toggle_glyph_flips_mode() {
        let mut app = app();
        let area = screen();
        let button = App::toggle_button_area(area);

        app.handle_mouse(
            mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y),
            area,
        );
        assert_eq!(app.mode, DisplayMode::Dark);
    }

    #[test]
    fn test_key_handling() {
        let mut app = app();
        let area = screen();

        app.handle_key(key(KeyCode::Char('2')), area);
        assert_eq!(app.selected_tab, 1);

        app.handle_key(key(KeyCode::Char('t')), area);
        assert_eq!(app.mode, DisplayMode::Dark);
        assert_eq!(app.selected_tab, 1);

        app.handle_key(key(KeyCode::Char('+')), area);
        assert_eq!(app.panel_height, 13);

        app.handle_key(key(KeyCode::Char('q')), area);
        assert!(app.should_quit);
    }
}
