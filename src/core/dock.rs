//! Dock illustration: a rounded housing holding a row of battery banks.

use svg::node::element::{Circle, Ellipse, Rectangle, Text};
use svg::Document;

use crate::core::attrs::{view_box, Num, SVG_NAMESPACE};
use crate::domain::model::{ColorVariant, DockLayout, LedState, BANK_HEIGHT, BANK_WIDTH};

const LOGO_FONT: &str = "Inter, Helvetica, Arial, sans-serif";
const FULL_LED: &str = "#a3ffa3";
const LED_STROKE: &str = "#10b981";
const WHITE: &str = "#ffffff";

/// Renders a dock with `banks` slots painted in `variant`.
pub fn render_dock(banks: u32, variant: ColorVariant) -> Document {
    let layout = DockLayout::new(banks);
    let colors = variant.palette();
    let (width, height) = (layout.width(), layout.height());

    let background = Rectangle::new()
        .set("width", "100%")
        .set("height", "100%")
        .set("fill", WHITE);
    // shadow under the dock
    let shadow = Ellipse::new()
        .set("cx", Num(width / 2.0))
        .set("cy", Num(height - 10.0))
        .set("rx", Num(width * 0.42))
        .set("ry", 10)
        .set("fill", "rgba(0,0,0,0.08)");
    let dock = Rectangle::new()
        .set("x", 10)
        .set("y", 12)
        .set("width", Num(width - 20.0))
        .set("height", Num(height - 28.0))
        .set("rx", 22)
        .set("fill", colors.dock);
    let dock_highlight = Rectangle::new()
        .set("x", 14)
        .set("y", 16)
        .set("width", Num(width - 28.0))
        .set("height", Num(height - 36.0))
        .set("rx", 20)
        .set("fill", colors.dock_highlight)
        .set("opacity", 0.18);
    let logo = Text::new("g")
        .set("x", Num(width - 44.0))
        .set("y", Num(height - 44.0))
        .set("font-family", LOGO_FONT)
        .set("font-size", 20)
        .set("fill", colors.logo)
        .set("opacity", 0.7);

    let mut doc = Document::new()
        .set("xmlns", SVG_NAMESPACE)
        .set("width", Num(width))
        .set("height", Num(height))
        .set("viewBox", view_box(width, height))
        .add(background)
        .add(shadow)
        .add(dock)
        .add(dock_highlight)
        .add(logo);

    for i in 0..layout.bank_count() {
        let (x, y) = layout.bank_origin(i);

        let recess = Rectangle::new()
            .set("x", Num(x - 6.0))
            .set("y", Num(y - 6.0))
            .set("width", Num(BANK_WIDTH + 12.0))
            .set("height", Num(BANK_HEIGHT + 12.0))
            .set("rx", 18)
            .set("fill", "#000000")
            .set("opacity", 0.06);
        let body = Rectangle::new()
            .set("x", Num(x))
            .set("y", Num(y))
            .set("width", Num(BANK_WIDTH))
            .set("height", Num(BANK_HEIGHT))
            .set("rx", 16)
            .set("fill", colors.bank);
        let highlight = Rectangle::new()
            .set("x", Num(x))
            .set("y", Num(y))
            .set("width", Num(BANK_WIDTH))
            .set("height", Num(BANK_HEIGHT / 2.0))
            .set("rx", 16)
            .set("fill", colors.bank_highlight)
            .set("opacity", 0.18);
        let lens = Circle::new()
            .set("cx", Num(x + BANK_WIDTH / 2.0))
            .set("cy", Num(y + 18.0))
            .set("r", 10)
            .set("fill", WHITE)
            .set("opacity", 0.06);

        doc = doc
            .add(recess)
            .add(body)
            .add(highlight)
            .add(lens)
            .add(led(
                LedState::for_bank(i),
                x + BANK_WIDTH / 2.0,
                y + BANK_HEIGHT - 16.0,
            ));
    }

    doc
}

fn led(state: LedState, cx: f64, cy: f64) -> Circle {
    let dot = Circle::new().set("cx", Num(cx)).set("cy", Num(cy)).set("r", 5);
    match state {
        LedState::Full => dot
            .set("fill", FULL_LED)
            .set("opacity", 0.95)
            .set("stroke", LED_STROKE)
            .set("stroke-width", 1),
        LedState::Charging => dot.set("fill", WHITE).set("opacity", 0.7),
    }
}

/// String-labelled entry point: `color` is matched case-insensitively, unknown names render grey.
pub fn generate_svg(banks: u32, color: &str) -> String {
    let variant = ColorVariant::from_label(color);
    tracing::debug!(banks, variant = %variant, "Rendering dock");
    render_dock(banks, variant).to_string()
}
