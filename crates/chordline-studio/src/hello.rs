//! Hello window: four colored quadrants in the square plot area.

use glam::Vec2;

use chordline_engine::core::{App, AppControl, FrameCtx, InputCtx};
use chordline_engine::input::{InputEvent, Key};
use chordline_engine::paint::Color;
use chordline_engine::render::LineRenderer;
use chordline_engine::scene::{DrawList, ZIndex};

/// Quadrant corners in NDC and their colors, bottom-left first.
pub const QUADRANTS: [([f32; 2], [f32; 2], [f32; 3]); 4] = [
    ([-1.0, -1.0], [0.0, 0.0], [0.0, 0.4, 0.7]),
    ([-1.0, 0.0], [0.0, 1.0], [1.0, 0.0, 0.0]),
    ([0.0, -1.0], [1.0, 0.0], [1.0, 1.0, 0.0]),
    ([0.0, 0.0], [1.0, 1.0], [0.0, 0.65, 0.3]),
];

/// Records the four quadrant fills.
pub fn push_quadrants(list: &mut DrawList) {
    for (a, b, [r, g, bl]) in QUADRANTS {
        list.push_fill(ZIndex::BACKGROUND, Vec2::from(a), Vec2::from(b), Color::rgb(r, g, bl));
    }
}

pub struct HelloApp {
    draw_list: DrawList,
    lines: LineRenderer,
}

impl HelloApp {
    pub fn new() -> Self {
        let mut draw_list = DrawList::new();
        push_quadrants(&mut draw_list);
        Self { draw_list, lines: LineRenderer::new() }
    }
}

impl Default for HelloApp {
    fn default() -> Self {
        Self::new()
    }
}

impl App for HelloApp {
    fn on_input(&mut self, _ctx: &mut InputCtx<'_>, event: &InputEvent) -> AppControl {
        if event.is_key_press(Key::Escape) {
            return AppControl::Exit;
        }
        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let plot = ctx.window.viewport().square_fit();
        let lines = &mut self.lines;
        let list = &mut self.draw_list;

        ctx.render(Color::rgb(0.0, 0.0, 0.0), |rctx, target| {
            lines.render(rctx, target, list, plot);
        })
    }
}

#[cfg(test)]
mod tests {
    use chordline_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn quadrants_tile_the_plot() {
        let mut list = DrawList::new();
        push_quadrants(&mut list);

        let fills: Vec<_> = list
            .items()
            .iter()
            .map(|i| match &i.cmd {
                DrawCmd::Fill(f) => f.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(fills.len(), 4);

        let area: f32 = fills
            .iter()
            .map(|f| (f.max.x - f.min.x) * (f.max.y - f.min.y))
            .sum();
        assert_eq!(area, 4.0);

        let top_right = &fills[3];
        assert_eq!(top_right.min, Vec2::new(0.0, 0.0));
        assert_eq!(top_right.color, Color::rgb(0.0, 0.65, 0.3));
    }

    #[test]
    fn new_app_has_the_quadrants_recorded() {
        let app = HelloApp::new();
        assert_eq!(app.draw_list.len(), 4);
    }
}
