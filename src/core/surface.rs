//! Immediate-mode 2D drawing interface used by the render loop.
//!
//! The browser implementation wraps `CanvasRenderingContext2d`; host tests use
//! a recorder. Only the primitives the trails need are exposed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    Lighter,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

pub trait Surface {
    /// Current backing size in pixels.
    fn size(&self) -> (u32, u32);
    /// Clear the whole surface.
    fn clear(&mut self);
    fn set_composite(&mut self, mode: Composite) -> anyhow::Result<()>;
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn quadratic_curve_to(&mut self, cpx: f64, cpy: f64, x: f64, y: f64);
    fn stroke(&mut self);
    fn close_path(&mut self);
}
