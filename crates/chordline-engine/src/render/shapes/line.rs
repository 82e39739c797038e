use std::ops::Range;

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::coords::Rect;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::shapes::{FillCmd, MarkerCmd, PolylineCmd};
use crate::scene::{DrawCmd, DrawList};

use super::common::{ensure_vertex_capacity, premul_alpha_blend, primitive_state};

// ── GPU types ─────────────────────────────────────────────────────────────

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct LineVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl LineVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos (NDC)
        1 => Float32x4  // color (premultiplied)
    ];

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Topology {
    Lines,
    Triangles,
}

/// Contiguous run of vertices drawn with one pipeline.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Batch {
    pub topology: Topology,
    pub vertices: Range<u32>,
}

/// CPU-side vertex stream for one frame.
#[derive(Debug, Default)]
pub(crate) struct LineMesh {
    pub vertices: Vec<LineVertex>,
    pub batches: Vec<Batch>,
}

impl LineMesh {
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    /// Converts geometry commands, in paint order, into batched vertices.
    ///
    /// `plot_size` is the logical pixel size of the area NDC maps onto; it
    /// converts marker sizes from pixels to NDC.
    pub fn build(&mut self, draw_list: &mut DrawList, plot_size: Vec2) {
        self.clear();
        let px_to_ndc = Vec2::new(2.0 / plot_size.x.max(1.0), 2.0 / plot_size.y.max(1.0));

        for item in draw_list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Polyline(cmd) => self.polyline(cmd),
                DrawCmd::Marker(cmd) => self.marker(cmd, px_to_ndc),
                DrawCmd::Fill(cmd) => self.fill(cmd),
                DrawCmd::Text(_) => {}
            }
        }
    }

    fn polyline(&mut self, cmd: &PolylineCmd) {
        let color = cmd.color.to_array();
        let start = self.begin(Topology::Lines);
        for (a, b) in cmd.segments() {
            self.vertices.push(LineVertex { pos: a.to_array(), color });
            self.vertices.push(LineVertex { pos: b.to_array(), color });
        }
        self.end(start);
    }

    fn marker(&mut self, cmd: &MarkerCmd, px_to_ndc: Vec2) {
        let half = px_to_ndc * (cmd.size_px * 0.5);
        let quad = FillCmd {
            min: cmd.center - half,
            max: cmd.center + half,
            color: cmd.color,
        };
        self.fill(&quad);
    }

    fn fill(&mut self, cmd: &FillCmd) {
        let color = cmd.color.to_array();
        let [a, b, c, d] = cmd.corners();
        let start = self.begin(Topology::Triangles);
        for p in [a, b, c, a, c, d] {
            self.vertices.push(LineVertex { pos: p.to_array(), color });
        }
        self.end(start);
    }

    fn begin(&mut self, topology: Topology) -> u32 {
        let start = self.vertices.len() as u32;
        let extend = self
            .batches
            .last()
            .is_some_and(|b| b.topology == topology && b.vertices.end == start);
        if !extend {
            self.batches.push(Batch { topology, vertices: start..start });
        }
        start
    }

    fn end(&mut self, start: u32) {
        let end = self.vertices.len() as u32;
        if let Some(batch) = self.batches.last_mut() {
            batch.vertices.end = end;
            if batch.vertices.is_empty() && batch.vertices.start == start {
                self.batches.pop();
            }
        }
    }
}

// ── renderer ──────────────────────────────────────────────────────────────

/// Renderer for `DrawCmd::{Polyline, Marker, Fill}`.
///
/// All geometry shares one vertex buffer. Lines go through a `LineList`
/// pipeline and markers/fills through a `TriangleList` pipeline, switching
/// as paint order requires.
#[derive(Default)]
pub struct LineRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    line_pipeline: Option<wgpu::RenderPipeline>,
    fill_pipeline: Option<wgpu::RenderPipeline>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    mesh: LineMesh,
}

impl LineRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the geometry of `draw_list` into `plot` (logical px).
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        draw_list: &mut DrawList,
        plot: Rect,
    ) {
        if plot.is_empty() {
            return;
        }

        self.mesh.build(draw_list, plot.size.to_glam());
        if self.mesh.vertices.is_empty() {
            return;
        }

        let Some((x, y, w, h)) = physical_viewport(plot, ctx) else { return; };

        self.ensure_pipelines(ctx);
        self.vbo_capacity = ensure_vertex_capacity(
            ctx.device,
            "chordline line vbo",
            &mut self.vbo,
            self.vbo_capacity,
            self.mesh.vertices.len(),
            std::mem::size_of::<LineVertex>(),
        );

        let Some(vbo) = self.vbo.as_ref() else { return; };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.mesh.vertices));

        let Some(line_pipeline) = self.line_pipeline.as_ref() else { return; };
        let Some(fill_pipeline) = self.fill_pipeline.as_ref() else { return; };

        let mut rpass = target.load_pass("chordline line pass");
        rpass.set_viewport(x, y, w, h, 0.0, 1.0);
        rpass.set_vertex_buffer(0, vbo.slice(..));

        for batch in &self.mesh.batches {
            let pipeline = match batch.topology {
                Topology::Lines => line_pipeline,
                Topology::Triangles => fill_pipeline,
            };
            rpass.set_pipeline(pipeline);
            rpass.draw(batch.vertices.clone(), 0..1);
        }
    }

    fn ensure_pipelines(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format)
            && self.line_pipeline.is_some()
            && self.fill_pipeline.is_some()
        {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("chordline line shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/line.wgsl").into()),
        });

        let layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("chordline line pipeline layout"),
            bind_group_layouts: &[],
            immediate_size: 0,
        });

        let make = |label: &str, topology: wgpu::PrimitiveTopology| {
            ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
                label: Some(label),
                layout: Some(&layout),
                vertex: wgpu::VertexState {
                    module: &shader,
                    entry_point: Some("vs_main"),
                    compilation_options: Default::default(),
                    buffers: &[LineVertex::layout()],
                },
                fragment: Some(wgpu::FragmentState {
                    module: &shader,
                    entry_point: Some("fs_main"),
                    compilation_options: Default::default(),
                    targets: &[Some(wgpu::ColorTargetState {
                        format: ctx.surface_format,
                        blend: Some(premul_alpha_blend()),
                        write_mask: wgpu::ColorWrites::ALL,
                    })],
                }),
                primitive: primitive_state(topology),
                depth_stencil: None,
                multisample: wgpu::MultisampleState::default(),
                multiview_mask: None,
                cache: None,
            })
        };

        self.line_pipeline = Some(make("chordline line pipeline", wgpu::PrimitiveTopology::LineList));
        self.fill_pipeline = Some(make("chordline fill pipeline", wgpu::PrimitiveTopology::TriangleList));
        self.pipeline_format = Some(ctx.surface_format);
    }
}

/// Plot rectangle in physical pixels, clamped to the surface.
fn physical_viewport(plot: Rect, ctx: &RenderCtx<'_>) -> Option<(f32, f32, f32, f32)> {
    let surface = ctx.viewport.bounds().to_physical(ctx.scale_factor);
    let p = plot.to_physical(ctx.scale_factor);

    let x0 = p.origin.x.max(0.0);
    let y0 = p.origin.y.max(0.0);
    let x1 = (p.origin.x + p.size.x).min(surface.size.x);
    let y1 = (p.origin.y + p.size.y).min(surface.size.y);

    (x1 > x0 && y1 > y0).then(|| (x0, y0, x1 - x0, y1 - y0))
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::paint::Color;
    use crate::scene::ZIndex;

    fn build(list: &mut DrawList, plot: f32) -> LineMesh {
        let mut mesh = LineMesh::default();
        mesh.build(list, Vec2::splat(plot));
        mesh
    }

    #[test]
    fn closed_polyline_becomes_line_pairs() {
        let mut list = DrawList::new();
        let ring = (0..100).map(|i| {
            let a = i as f32 * std::f32::consts::TAU / 100.0;
            Vec2::new(a.cos(), a.sin())
        });
        list.push_polyline(ZIndex::GEOMETRY, ring, true, Color::WHITE);

        let mesh = build(&mut list, 700.0);
        assert_eq!(mesh.vertices.len(), 200);
        assert_eq!(mesh.batches, [Batch { topology: Topology::Lines, vertices: 0..200 }]);
    }

    #[test]
    fn marker_is_square_of_requested_pixel_size() {
        let mut list = DrawList::new();
        list.push_marker(ZIndex::GEOMETRY, Vec2::ZERO, 10.0, Color::WHITE);

        let mesh = build(&mut list, 700.0);
        assert_eq!(mesh.vertices.len(), 6);
        // 10 px over a 700 px plot spanning 2 NDC units.
        let half = 10.0 / 700.0;
        assert_relative_eq!(mesh.vertices[0].pos[0], -half);
        assert_relative_eq!(mesh.vertices[2].pos[1], half);
    }

    #[test]
    fn adjacent_commands_share_a_batch() {
        let mut list = DrawList::new();
        list.push_line(ZIndex::GEOMETRY, Vec2::ZERO, Vec2::X, Color::WHITE);
        list.push_line(ZIndex::GEOMETRY, Vec2::ZERO, Vec2::Y, Color::WHITE);
        list.push_marker(ZIndex::GEOMETRY, Vec2::ZERO, 10.0, Color::WHITE);
        list.push_marker(ZIndex::GEOMETRY, Vec2::ONE, 10.0, Color::WHITE);
        list.push_line(ZIndex::OVERLAY, Vec2::ZERO, Vec2::NEG_X, Color::WHITE);

        let mesh = build(&mut list, 500.0);
        let topo: Vec<_> = mesh.batches.iter().map(|b| (b.topology, b.vertices.clone())).collect();
        assert_eq!(
            topo,
            [
                (Topology::Lines, 0..4),
                (Topology::Triangles, 4..16),
                (Topology::Lines, 16..18),
            ]
        );
    }

    #[test]
    fn text_is_not_tessellated() {
        let mut list = DrawList::new();
        list.push_text(
            ZIndex::OVERLAY,
            "status",
            crate::text::FontId(0),
            16.0,
            Color::WHITE,
            crate::coords::Vec2::zero(),
        );
        let mesh = build(&mut list, 500.0);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.batches.is_empty());
    }

    #[test]
    fn colors_are_premultiplied() {
        let mut list = DrawList::new();
        list.push_line(
            ZIndex::GEOMETRY,
            Vec2::ZERO,
            Vec2::X,
            Color::from_straight(1.0, 0.5, 0.0, 0.5),
        );
        let mesh = build(&mut list, 500.0);
        assert_eq!(mesh.vertices[0].color, [0.5, 0.25, 0.0, 0.5]);
    }
}
