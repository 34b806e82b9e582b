use ratatui::layout::Rect;

pub const FORM_WIDTH: u16 = 48;

/// Rect for the form card, centered in `area` and clamped to fit.
pub fn card_rect(area: Rect, height: u16) -> Rect {
    let width = FORM_WIDTH.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    }
}

/// Bottom strip reserved for the footer.
pub fn footer_rect(area: Rect) -> Rect {
    let height = 3.min(area.height);
    Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(height),
        width: area.width,
        height,
    }
}

/// Everything above the footer.
pub fn body_rect(area: Rect) -> Rect {
    let footer_height = 3.min(area.height);
    Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: area.height.saturating_sub(footer_height),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_is_centered_and_clamped() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 100,
            height: 40,
        };
        let card = card_rect(area, 20);
        assert_eq!(card.width, FORM_WIDTH);
        assert_eq!(card.x, (100 - FORM_WIDTH) / 2);
        assert_eq!(card.y, 10);

        let tiny = Rect {
            x: 0,
            y: 0,
            width: 20,
            height: 5,
        };
        let card = card_rect(tiny, 20);
        assert_eq!(card.width, 20);
        assert_eq!(card.height, 5);
    }

    #[test]
    fn body_and_footer_partition_the_area() {
        let area = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let body = body_rect(area);
        let footer = footer_rect(area);
        assert_eq!(body.height + footer.height, area.height);
        assert_eq!(footer.y, body.height);
    }
}
