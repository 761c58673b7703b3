//! Terminal rendering of the wheel
//!
//! Draws the same geometry as the SVG renderer onto a ratatui canvas whose
//! bounds match the 0–100 viewbox. Canvas y grows upwards, so viewbox points
//! are flipped on the way in.

use crate::app::AppState;
use crate::components::Component;
use crate::events::Action;
use crate::geometry::{CENTER, FRAME_ROTATION, Point, RADIUS, SectorGeometry, layout_label};
use crate::segment::SegmentFill;
use crate::ui::styles::{StyledComponent, hex_color};
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, BorderType, Borders,
        canvas::{Canvas, Circle, Line as CanvasLine, Painter, Shape},
    },
};

const HUB_RADIUS: f64 = 8.0;
const HUB_INNER_RADIUS: f64 = 5.5;
const FILL_RADIUS_STEP: f64 = 0.8;

/// Viewbox point at `radius` along logical `angle`, with the wheel turned by `rotation`,
/// converted to canvas coordinates
fn canvas_point(angle: f64, radius: f64, rotation: f64) -> (f64, f64) {
    let p = Point::polar(CENTER, radius, angle + FRAME_ROTATION + rotation);
    (p.x, 100.0 - p.y)
}

/// Filled pie slice between the hub and the rim
struct SectorFill {
    start_angle: f64,
    end_angle: f64,
    rotation: f64,
    color: Color,
}

impl Shape for SectorFill {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        let span = self.end_angle - self.start_angle;
        let mut radius = HUB_RADIUS;
        while radius <= RADIUS {
            // Keep neighbouring samples about one unit apart along the arc.
            let steps = ((span.to_radians() * radius).ceil() as usize).max(1);
            for step in 0..=steps {
                let angle = self.start_angle + span * step as f64 / steps as f64;
                let (x, y) = canvas_point(angle, radius, self.rotation);
                if let Some((px, py)) = painter.get_point(x, y) {
                    painter.paint(px, py, self.color);
                }
            }
            radius += FILL_RADIUS_STEP;
        }
    }
}

pub struct WheelView {}

impl WheelView {
    pub fn new() -> Self {
        Self {}
    }

    /// Largest area inside `area` that looks square, given cells twice as tall as wide
    fn square_area(area: Rect) -> Rect {
        let width = area.width.min(area.height.saturating_mul(2));
        let height = (width / 2).min(area.height);
        Rect::new(
            area.x + (area.width - width) / 2,
            area.y + (area.height - height) / 2,
            width,
            height,
        )
    }
}

impl Component for WheelView {
    fn handle_key_events(&mut self, key: KeyCode, _app: &mut AppState) -> Option<Action> {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Spin),
            KeyCode::Esc => Some(Action::CancelSpin),
            KeyCode::Char('e') | KeyCode::Char('E') => Some(Action::ExportSvg),
            _ => None,
        }
    }

    fn draw(&mut self, f: &mut Frame, app: &mut AppState, area: Rect) {
        let colors = app.colors();
        let palette = app.palette();
        let rotation = app.displayed_rotation();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(StyledComponent::block_border(colors))
            .title(Span::styled(" Wheel ", StyledComponent::block_title(colors)));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let wheel_area = Self::square_area(inner);
        if wheel_area.width < 4 || wheel_area.height < 2 {
            return;
        }

        // Canvas units per terminal cell, for placing text.
        let cell_w = 100.0 / f64::from(wheel_area.width);
        let cell_h = 100.0 / f64::from(wheel_area.height);

        let segments = app.segments();
        let sectors: &[SectorGeometry] = &app.sectors;
        let winner = if app.spin.state().is_idle() {
            app.last_winner
        } else {
            None
        };
        let divider = hex_color(palette.divider);

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, 100.0])
            .y_bounds([0.0, 100.0])
            .paint(|ctx| {
                for (sector, segment) in sectors.iter().zip(segments) {
                    let fill = SegmentFill::classify(sector.index, segment);
                    ctx.draw(&SectorFill {
                        start_angle: sector.start_angle,
                        end_angle: sector.end_angle,
                        rotation,
                        color: palette.fill_color(fill),
                    });
                }
                ctx.layer();

                ctx.draw(&Circle {
                    x: CENTER.x,
                    y: CENTER.y,
                    radius: RADIUS,
                    color: divider,
                });
                if sectors.len() > 1 {
                    for sector in sectors {
                        let (x1, y1) = canvas_point(sector.start_angle, HUB_RADIUS, rotation);
                        let (x2, y2) = canvas_point(sector.start_angle, RADIUS, rotation);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: divider,
                        });
                    }
                }
                ctx.layer();

                for (sector, segment) in sectors.iter().zip(segments) {
                    let fill = SegmentFill::classify(sector.index, segment);
                    let mut style = Style::default()
                        .fg(hex_color(palette.text_hex(fill)))
                        .bg(palette.fill_color(fill));
                    if winner == Some(sector.index) {
                        style = StyledComponent::winner(colors).bg(palette.fill_color(fill));
                    }

                    let lines = layout_label(&segment.label);
                    let (ax, ay) = canvas_point(sector.mid_angle, 38.0, rotation);
                    let first_row = (lines.len() as f64 - 1.0) / 2.0;
                    for (i, line) in lines.iter().enumerate() {
                        let width = line.text.chars().count() as f64 * cell_w;
                        let y = ay + (first_row - i as f64) * cell_h;
                        ctx.print(ax - width / 2.0, y, Span::styled(line.text.clone(), style));
                    }

                    let (ix, iy) = canvas_point(sector.mid_angle, 24.0, rotation);
                    ctx.print(ix - cell_w, iy, Span::raw(segment.icon().to_string()));
                }
                ctx.layer();

                // Hub and pointer stay put while the wheel turns.
                ctx.draw(&Circle {
                    x: CENTER.x,
                    y: CENTER.y,
                    radius: HUB_RADIUS,
                    color: hex_color(palette.hub_outer),
                });
                ctx.draw(&Circle {
                    x: CENTER.x,
                    y: CENTER.y,
                    radius: HUB_INNER_RADIUS,
                    color: hex_color(palette.hub_inner),
                });
                ctx.print(
                    CENTER.x - cell_w / 2.0,
                    CENTER.y,
                    Span::styled(
                        "❤",
                        Style::default()
                            .fg(hex_color(palette.heart))
                            .add_modifier(Modifier::BOLD),
                    ),
                );

                let pointer = hex_color(palette.pointer);
                for (x1, y1, x2, y2) in [
                    (46.0, 100.0, 54.0, 100.0),
                    (54.0, 100.0, 50.0, 93.0),
                    (50.0, 93.0, 46.0, 100.0),
                ] {
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: pointer,
                    });
                }
            });

        f.render_widget(canvas, wheel_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_point_puts_logical_zero_on_top() {
        let (x, y) = canvas_point(0.0, RADIUS, 0.0);
        assert!((x - 50.0).abs() < 1e-9);
        assert!((y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_canvas_point_follows_rotation() {
        // A quarter turn clockwise moves the top point to the right.
        let (x, y) = canvas_point(0.0, RADIUS, 90.0);
        assert!((x - 100.0).abs() < 1e-9);
        assert!((y - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_square_area_fits() {
        let area = WheelView::square_area(Rect::new(0, 0, 100, 30));
        assert_eq!(area.width, 60);
        assert_eq!(area.height, 30);
        assert_eq!(area.x, 20);

        let tall = WheelView::square_area(Rect::new(0, 0, 40, 50));
        assert_eq!(tall.width, 40);
        assert_eq!(tall.height, 20);
    }

    #[test]
    fn test_spin_keys() {
        let mut view = WheelView::new();
        let mut app = AppState::new(crate::config::Config::default());
        assert_eq!(
            view.handle_key_events(KeyCode::Enter, &mut app),
            Some(Action::Spin)
        );
        assert_eq!(
            view.handle_key_events(KeyCode::Esc, &mut app),
            Some(Action::CancelSpin)
        );
        assert_eq!(view.handle_key_events(KeyCode::Char('x'), &mut app), None);
    }
}
