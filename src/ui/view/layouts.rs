//! 弹窗布局

use ratatui::layout::{Constraint, Direction, Flex, Layout, Rect};

/// 居中的矩形区域，用于提示对话框
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .split(vertical[0])[0]
}

/// 贴底的矩形区域，用于底部弹出面板
pub fn bottom_sheet_rect(height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height - height,
        width: area.width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottom_sheet_is_anchored_to_bottom() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(bottom_sheet_rect(8, area), Rect::new(0, 16, 80, 8));
        assert_eq!(bottom_sheet_rect(40, area), area);
    }

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(50, 20, area);
        assert_eq!(rect.width, 50);
        assert_eq!(rect.height, 10);
        assert_eq!(rect.x, 25);
        assert_eq!(rect.y, 20);
    }
}
