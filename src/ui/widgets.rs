//! Reusable UI widgets
//!
//! Contains the pieces shared by the render layer:
//! - Status bar
//! - Palette card (Vivid variant)
//! - Rect helpers

use crate::ui::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar: key hints on the left, variant/mode on the right.
pub fn render_status_bar(
    frame: &mut Frame,
    left_content: &str,
    right_content: &str,
    theme: &Theme,
    area: Rect,
) {
    frame.render_widget(Block::default().style(theme.status()), area);

    let left_widget = Paragraph::new(format!(" {}", left_content)).style(theme.status_hint());

    let right_len = right_content.len() as u16;
    let right_area = Rect {
        x: area.x + area.width.saturating_sub(right_len + 1),
        y: area.y,
        width: (right_len + 1).min(area.width),
        height: 1,
    };
    let right_widget = Paragraph::new(right_content).style(theme.status_info());

    frame.render_widget(left_widget, area);
    frame.render_widget(right_widget, right_area);
}

/// Render the static palette card: two color-styled text samples and two
/// inert buttons filled with the primary and secondary colors.
pub fn render_palette_card(frame: &mut Frame, theme: &Theme, area: Rect) {
    let mut content = vec![
        Line::from(Span::styled(
            format!("Aa  primary    {}", theme.primary.hex()),
            theme.swatch_primary(),
        )),
    ];

    if let Some(secondary) = theme.secondary {
        content.push(Line::from(Span::styled(
            format!("Aa  secondary  {}", secondary.hex()),
            theme.swatch_secondary(),
        )));
    }

    content.push(Line::raw(""));
    content.push(Line::from(vec![
        Span::styled("  Primary  ", theme.button_primary()),
        Span::styled("   ", theme.card()),
        Span::styled("  Secondary  ", theme.button_secondary()),
    ]));

    if let Some(font) = theme.font_family {
        content.push(Line::raw(""));
        content.push(Line::styled(format!("font: {}", font), theme.tab_inactive()));
    }

    let card_width = 40.min(area.width.saturating_sub(2));
    let card_height = (content.len() as u16 + 4).min(area.height);
    if card_width < 4 || card_height < 4 {
        return;
    }

    let card_area = centered_rect(card_width, card_height, area);

    let block = Block::default()
        .title(" Palette ")
        .title_style(theme.card_title())
        .borders(Borders::ALL)
        .border_style(theme.divider())
        .style(theme.card());
    frame.render_widget(block, card_area);

    let inner = Rect {
        x: card_area.x + 2,
        y: card_area.y + 2,
        width: card_area.width.saturating_sub(4),
        height: card_area.height.saturating_sub(4),
    };

    let card = Paragraph::new(content)
        .style(theme.card())
        .alignment(Alignment::Left);
    frame.render_widget(card, inner);
}

/// Helper: Create a centered rect of given size
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let card = centered_rect(40, 20, area);

        assert_eq!(card.x, 30);
        assert_eq!(card.y, 15);
        assert_eq!(card.width, 40);
        assert_eq!(card.height, 20);
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(0, 0, 10, 5);
        let card = centered_rect(40, 20, area);

        assert_eq!(card.x, 0);
        assert_eq!(card.y, 0);
    }
}
