use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};

/// Nav bar on top, legend at the bottom, the active screen in between.
pub struct Page {
    pub nav: Rect,
    pub body: Rect,
    pub body_inner: Rect,
    pub legend: Rect,
    pub legend_inner: Rect,
}

pub fn page_layout(size: Rect, max_width: u16) -> Page {
    // mobile-ish column: never wider than max_width
    let width = size.width.min(max_width);
    let column = Rect {
        x: size.x + (size.width - width) / 2,
        y: size.y,
        width,
        height: size.height,
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(column);

    Page {
        nav: chunks[0],
        body: chunks[1],
        body_inner: chunks[1].inner(&Margin { horizontal: 2, vertical: 1 }),
        legend: chunks[2],
        legend_inner: chunks[2].inner(&Margin { horizontal: 1, vertical: 1 }),
    }
}

// Also expose the centering helper used by the modals.
pub fn centered_rect_abs(width: u16, height: u16, r: Rect) -> Rect {
    let w = width.min(r.width.saturating_sub(2));
    let h = height.min(r.height.saturating_sub(2));
    let x = r.x + (r.width.saturating_sub(w)) / 2;
    let y = r.y + (r.height.saturating_sub(h)) / 2;
    Rect { x, y, width: w, height: h }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_is_capped_and_centered() {
        let page = page_layout(Rect::new(0, 0, 200, 40), 72);
        assert_eq!(page.nav.width, 70);
        assert_eq!(page.nav.x, 65);
        assert_eq!(page.nav.height, 3);
        assert_eq!(page.legend.height, 3);
        assert_eq!(page.body.height, 40 - 2 - 6);
    }

    #[test]
    fn test_centered_rect_never_exceeds_area() {
        let area = Rect::new(0, 0, 20, 6);
        let r = centered_rect_abs(80, 10, area);
        assert_eq!(r, Rect::new(1, 1, 18, 4));
    }
}
