//! The circle/segment intersection exercise.
//!
//! Left-drag inside the square plot: the first drag defines a circle
//! (center at the press, rim at the release), the second a segment. The
//! intersection is solved when the segment is released and listed in the
//! status text. `R` starts over, `Escape` quits.

use anyhow::Context;
use glam::Mat4;

use chordline_engine::coords::{Rect, Vec2};
use chordline_engine::core::{App, AppControl, FrameCtx, InputCtx};
use chordline_engine::input::{InputEvent, Key, MouseButton, MouseButtonState};
use chordline_engine::overlay::{Axes, TextHandle, TextOverlay};
use chordline_engine::paint::Color;
use chordline_engine::render::{LineRenderer, TextRenderer};
use chordline_engine::scene::DrawList;
use chordline_engine::text::{FontId, FontSystem, SYSTEM_FONT_PATHS};
use chordline_geom::{
    build_scene, Point2D, PointerEvent, SceneStyle, Session, StatusLines, STATUS_SLOTS,
};

use crate::draw::push_scene;
use crate::options::StudioOptions;

/// What an input event means to the exercise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Exit,
    Reset,
    Pointer(PointerEvent),
}

/// Interprets `event` against the plot rectangle (logical px).
///
/// Presses outside the plot are ignored; moves and releases are forwarded
/// wherever they happen so a drag can end outside.
pub fn interpret(plot: Rect, event: &InputEvent) -> Option<Command> {
    if event.is_key_press(Key::Escape) {
        return Some(Command::Exit);
    }
    if event.is_key_press(Key::R) {
        return Some(Command::Reset);
    }

    match event {
        InputEvent::PointerMoved(m) => {
            to_ndc(plot, Vec2::new(m.x, m.y)).map(|p| Command::Pointer(PointerEvent::Move(p)))
        }
        InputEvent::PointerButton(b) if b.button == MouseButton::Left => match b.state {
            MouseButtonState::Pressed => {
                let pos = Vec2::new(b.x, b.y);
                if !plot.contains(pos) {
                    return None;
                }
                to_ndc(plot, pos).map(|p| Command::Pointer(PointerEvent::Down(p)))
            }
            MouseButtonState::Released => Some(Command::Pointer(PointerEvent::Up)),
        },
        _ => None,
    }
}

fn to_ndc(plot: Rect, pos: Vec2) -> Option<Point2D> {
    if plot.is_empty() {
        return None;
    }
    let local = plot.local(pos);
    Some(Point2D::from_pixels(local.x, local.y, plot.size.x, plot.size.y))
}

/// The three status lines bound to overlay slots 1 to 3.
struct StatusText {
    overlay: TextOverlay,
    handles: [TextHandle; STATUS_SLOTS],
}

impl StatusText {
    fn new(mut overlay: TextOverlay, session: &Session) -> Self {
        let lines = StatusLines::from_session(session);
        let slots = lines.slots();
        let handles = std::array::from_fn(|i| overlay.setup_text(slots[i], i + 1));
        Self { overlay, handles }
    }

    fn refresh(&mut self, session: &Session) {
        let lines = StatusLines::from_session(session);
        for (handle, text) in self.handles.iter().zip(lines.slots()) {
            self.overlay.update_text(*handle, text);
        }
    }
}

pub struct IntersectApp {
    session: Session,
    style: SceneStyle,
    background: Color,
    marker_size_px: f32,
    axes: Axes,

    fonts: FontSystem,
    font: FontId,
    text_size: f32,
    status: StatusText,

    draw_list: DrawList,
    lines: LineRenderer,
    text: TextRenderer,
}

impl IntersectApp {
    /// Fails when no usable font can be loaded.
    pub fn new(options: &StudioOptions) -> anyhow::Result<Self> {
        let mut fonts = FontSystem::new();
        let font = match &options.text.font_path {
            Some(path) => fonts
                .load_first_available(&[path])
                .with_context(|| format!("failed to load font {}", path.display()))?,
            None => fonts
                .load_first_available(SYSTEM_FONT_PATHS)
                .context("failed to load a system font")?,
        };

        let session = Session::new();
        let overlay = TextOverlay::new(
            font,
            options.text.size,
            Color::from_rgba_array(options.colors.text),
        );
        let status = StatusText::new(overlay, &session);

        let axes = Axes::default()
            .with_length(options.scene.axes_length)
            .with_colors(
                Color::from_rgba_array(options.colors.axis_x),
                Color::from_rgba_array(options.colors.axis_y),
            );

        Ok(Self {
            session,
            style: options.scene_style(),
            background: options.background(),
            marker_size_px: options.scene.marker_size_px,
            axes,
            fonts,
            font,
            text_size: options.text.size,
            status,
            draw_list: DrawList::new(),
            lines: LineRenderer::new(),
            text: TextRenderer::new(),
        })
    }

    fn rebuild_draw_list(&mut self, plot: Rect) {
        self.draw_list.clear();

        let items = build_scene(&self.session, &self.style);
        push_scene(&mut self.draw_list, &items, self.marker_size_px);
        self.axes.push(&mut self.draw_list, Mat4::IDENTITY, Mat4::IDENTITY);

        let line_height = self.fonts.line_height(self.font, self.text_size);
        self.status.overlay.set_anchor(plot.origin, line_height);
        self.status.overlay.push(&mut self.draw_list);
    }
}

impl App for IntersectApp {
    fn on_input(&mut self, ctx: &mut InputCtx<'_>, event: &InputEvent) -> AppControl {
        let plot = ctx.window.viewport().square_fit();
        let Some(command) = interpret(plot, event) else {
            return AppControl::Continue;
        };

        match command {
            Command::Exit => return AppControl::Exit,
            Command::Reset => {
                self.session.reset();
                self.status.refresh(&self.session);
                ctx.runtime.request_redraw();
            }
            Command::Pointer(ev) => {
                let effects = self.session.handle(ev);
                if effects.finalized.is_some() {
                    self.status.refresh(&self.session);
                }
                if effects.redraw {
                    ctx.runtime.request_redraw();
                }
            }
        }

        AppControl::Continue
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let plot = ctx.window.viewport().square_fit();
        self.rebuild_draw_list(plot);

        let lines = &mut self.lines;
        let text = &mut self.text;
        let list = &mut self.draw_list;
        let fonts = &self.fonts;

        ctx.render(self.background, |rctx, target| {
            lines.render(rctx, target, list, plot);
            text.render(rctx, target, list, fonts);
        })
    }
}
