// Recording `Surface` for host-side tests.

use trail_canvas::core::{Composite, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Composite(Composite),
    Clear,
    StrokeStyle(String),
    LineWidth(f64),
    BeginPath,
    MoveTo(f64, f64),
    Quad(f64, f64, f64, f64),
    Stroke,
    ClosePath,
}

#[derive(Default)]
pub struct Recorder {
    pub ops: Vec<Op>,
}

impl Recorder {
    pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (u32, u32) {
        (800, 600)
    }
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }
    fn set_composite(&mut self, mode: Composite) -> anyhow::Result<()> {
        self.ops.push(Op::Composite(mode));
        Ok(())
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::StrokeStyle(style.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn begin_path(&mut self) {
        self.ops.push(Op::BeginPath);
    }
    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(Op::MoveTo(x, y));
    }
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64) {
        self.ops.push(Op::Quad(cpx, cpy, x, y));
    }
    fn stroke(&mut self) {
        self.ops.push(Op::Stroke);
    }
    fn close_path(&mut self) {
        self.ops.push(Op::ClosePath);
    }
}

/// Surface whose compositing call always fails.
pub struct BrokenSurface;

impl Surface for BrokenSurface {
    fn size(&self) -> (u32, u32) {
        (0, 0)
    }
    fn clear(&mut self) {}
    fn set_composite(&mut self, mode: Composite) -> anyhow::Result<()> {
        anyhow::bail!("context lost while setting {}", mode.as_str())
    }
    fn set_stroke_style(&mut self, _style: &str) {}
    fn set_line_width(&mut self, _width: f64) {}
    fn begin_path(&mut self) {}
    fn move_to(&mut self, _x: f64, _y: f64) {}
    fn quadratic_curve_to(&mut self, _cpx: f64, _cpy: f64, _x: f64, _y: f64) {}
    fn stroke(&mut self) {}
    fn close_path(&mut self) {}
}
