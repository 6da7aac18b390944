//! Main rendering module
//!
//! Handles rendering the complete UI:
//! - Header bar with the mode toggle glyph
//! - Resizable panel with the tab strip
//! - Content area (palette card in the Vivid variant)
//! - Status bar

use crate::app::{App, HEADER_HEIGHT, STATUS_HEIGHT};
use crate::ui::widgets;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

/// Main render function - entry point for all UI rendering
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let layout = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Length(app.effective_panel_height(area)),
        Constraint::Min(0),
        Constraint::Length(STATUS_HEIGHT),
    ])
    .split(area);

    render_header(frame, app, layout[0]);
    render_panel(frame, app, layout[1]);
    render_content(frame, app, layout[2]);
    render_status_bar(frame, app, layout[3]);
}

/// Render the header bar: title on the left, mode toggle glyph on the right.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    frame.render_widget(Block::default().style(theme.header()), area);

    let title_area = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: 1,
    };
    let title = Paragraph::new("tintshell").style(theme.header_title());
    frame.render_widget(title, title_area);

    // ☀ offers the switch to light, ☾ the switch to dark.
    let glyph = if app.mode.is_dark() { "[☀]" } else { "[☾]" };
    let button = Paragraph::new(glyph).style(theme.toggle_button());
    frame.render_widget(button, App::toggle_button_area(area));
}

/// Render the resizable panel: tab strip on the surface background, with the
/// bottom border acting as the drag handle.
fn render_panel(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.divider())
        .title_bottom(Line::styled(" ↕ ", theme.divider()).centered())
        .style(theme.panel());
    frame.render_widget(block, area);

    let tab_titles: Vec<Line> = app
        .variant
        .tab_labels()
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let style = if app.selected_tab == i {
                theme.tab_active()
            } else {
                theme.tab_inactive()
            };
            Line::styled(format!(" {} ", label), style)
        })
        .collect();

    let tabs = Tabs::new(tab_titles)
        .select(app.selected_tab)
        .highlight_style(theme.tab_active())
        .divider("│")
        .style(theme.panel());

    let tabs_area = Rect {
        x: area.x + 2,
        y: area.y,
        width: area.width.saturating_sub(4),
        height: 1.min(area.height),
    };
    frame.render_widget(tabs, tabs_area);
}

/// Render the area below the panel: background fill, plus the palette card
/// for the Vivid variant. Tabs have no content of their own.
fn render_content(frame: &mut Frame, app: &App, area: Rect) {
    let theme = &app.theme;

    frame.render_widget(Block::default().style(theme.base()), area);

    if app.variant.has_palette_card() {
        widgets::render_palette_card(frame, theme, area);
    }
}

/// Render the status bar with keybindings and the current variant/mode.
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let hints = format!(
        "[t] Toggle Mode  [1-{}] Tabs  [+/-] Resize  [v] Variant  [q] Quit",
        app.variant.tab_count()
    );
    let info = format!("{} · {} ", app.variant.as_str(), app.mode.as_str());

    widgets::render_status_bar(frame, &hints, &info, &app.theme, area);
}
