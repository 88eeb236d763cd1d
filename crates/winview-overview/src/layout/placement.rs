//! Tree-to-pixels placement.
//!
//! Boxes stack vertically with `spacing` between them. Monitor labels sit
//! one tab stop in, card rows two. A card is a title row (icon button,
//! label, close button) above its thumbnail.

use winview_common::Rect;

use super::types::{
    Button, ButtonKind, Label, Metrics, Overview, Placement, ThumbnailSlot, WindowCard,
};

pub fn place(overview: &Overview, metrics: &Metrics) -> Placement {
    let mut placer = Placer::new(*metrics);
    match overview {
        Overview::Grouped(groups) => {
            for group in groups {
                placer.label(&group.label, 0);
                for monitor in &group.monitors {
                    placer.label(&monitor.label, 1);
                    placer.row(&monitor.cards, 2);
                }
            }
        }
        Overview::Flat(cards) => placer.row(cards, 0),
    }
    placer.finish()
}

struct Placer {
    metrics: Metrics,
    y: i32,
    right: i32,
    out: Placement,
}

impl Placer {
    fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            y: metrics.spacing as i32,
            right: 0,
            out: Placement::default(),
        }
    }

    fn x_at(&self, depth: u32) -> i32 {
        (self.metrics.spacing + depth * self.metrics.indent) as i32
    }

    fn label(&mut self, text: &str, depth: u32) {
        let rect = Rect::new(
            self.x_at(depth),
            self.y,
            self.metrics.text_width(text),
            self.metrics.line_height,
        );
        self.extend(&rect);
        self.out.labels.push(Label {
            text: text.to_string(),
            rect,
        });
        self.y += (self.metrics.line_height + self.metrics.spacing) as i32;
    }

    fn row(&mut self, cards: &[WindowCard], depth: u32) {
        if cards.is_empty() {
            return;
        }
        let mut x = self.x_at(depth);
        for card in cards {
            let width = self.card(card, x);
            x += (width + self.metrics.spacing) as i32;
        }
        self.y += (self.card_height() + self.metrics.spacing) as i32;
    }

    fn row_height(&self) -> u32 {
        self.metrics.icon_size.max(self.metrics.line_height)
    }

    fn card_height(&self) -> u32 {
        self.row_height() + self.metrics.spacing + self.metrics.thumbnail_height
    }

    /// Place one card with its top-left corner at `(x, self.y)`; returns its width.
    fn card(&mut self, card: &WindowCard, x: i32) -> u32 {
        let m = self.metrics;
        let y = self.y;
        let row_height = self.row_height();

        let icon = Rect::new(x, y, m.icon_size, m.icon_size);
        let title = Rect::new(
            icon.right() as i32 + m.spacing as i32,
            y + ((row_height - m.line_height) / 2) as i32,
            m.text_width(&card.title),
            m.line_height,
        );
        let close = Rect::new(
            title.right() as i32 + m.spacing as i32,
            y,
            m.icon_size,
            m.icon_size,
        );
        let thumbnail = Rect::new(
            x,
            y + (row_height + m.spacing) as i32,
            m.thumbnail_width,
            m.thumbnail_height,
        );

        self.out.buttons.push(Button {
            rect: icon,
            kind: ButtonKind::Icon(card.window),
            action: card.activate(),
        });
        self.out.labels.push(Label {
            text: card.title.clone(),
            rect: title,
        });
        self.out.buttons.push(Button {
            rect: close,
            kind: ButtonKind::Close,
            action: card.close(),
        });
        self.out.thumbnails.push(ThumbnailSlot {
            window: card.window,
            rect: thumbnail,
        });

        let width = (close.right() - i64::from(x)).max(i64::from(m.thumbnail_width)) as u32;
        self.extend(&Rect::new(x, y, width, self.card_height()));
        width
    }

    fn extend(&mut self, rect: &Rect) {
        self.right = self.right.max(rect.right() as i32);
    }

    fn finish(mut self) -> Placement {
        self.out.width = (self.right + self.metrics.spacing as i32).max(0) as u32;
        self.out.height = self.y.max(0) as u32;
        self.out
    }
}
