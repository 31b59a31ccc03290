use piston_window::math::Matrix2d;
use piston_window::{Context, Graphics, Transformed, clear, line, rectangle};

use crate::agent::Population;
use crate::board::Board;
use crate::error::RenderError;
use crate::style::Palette;

const GRID_LINE_RADIUS: f64 = 0.5;

/// Drawing surface in logical coordinates.
pub trait Canvas {
    fn clear(&mut self, color: [f32; 4]) -> Result<(), RenderError>;
    fn line(&mut self, color: [f32; 4], coords: [f64; 4]) -> Result<(), RenderError>;
    fn fill_rect(&mut self, color: [f32; 4], rect: [f64; 4]) -> Result<(), RenderError>;
}

/// Background, then grid, then agents in storage order.
///
/// Takes an already parsed [`Palette`], so a malformed color constant fails
/// in `Palette::load` before any canvas call is made.
pub fn render_frame<C: Canvas>(
    canvas: &mut C,
    board: &Board,
    population: &Population,
    palette: &Palette,
) -> Result<(), RenderError> {
    canvas.clear(palette.background)?;
    render_grid(canvas, board, palette.grid)?;
    for agent in population.iter() {
        canvas.fill_rect(palette.agent, board.cell_rect(agent.position))?;
    }
    Ok(())
}

fn render_grid<C: Canvas>(
    canvas: &mut C,
    board: &Board,
    color: [f32; 4],
) -> Result<(), RenderError> {
    for coords in board.vertical_lines().chain(board.horizontal_lines()) {
        canvas.line(color, coords)?;
    }
    Ok(())
}

/// Uniform scale plus centering offset that fits the logical surface into
/// the window, leaving bars on the long axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub scale: f64,
    pub offset: [f64; 2],
}

impl Letterbox {
    pub fn fit(logical: [f64; 2], view: [f64; 2]) -> Self {
        let scale = (view[0] / logical[0]).min(view[1] / logical[1]);
        Letterbox {
            scale,
            offset: [
                (view[0] - logical[0] * scale) / 2.0,
                (view[1] - logical[1] * scale) / 2.0,
            ],
        }
    }

    pub fn apply(&self, transform: Matrix2d) -> Matrix2d {
        transform
            .trans(self.offset[0], self.offset[1])
            .scale(self.scale, self.scale)
    }
}

pub struct PistonCanvas<'a, G: Graphics> {
    transform: Matrix2d,
    g: &'a mut G,
}

impl<'a, G: Graphics> PistonCanvas<'a, G> {
    pub fn new(c: &Context, logical: [f64; 2], g: &'a mut G) -> Self {
        let letterbox = Letterbox::fit(logical, c.get_view_size());
        PistonCanvas {
            transform: letterbox.apply(c.transform),
            g,
        }
    }
}

fn finite(op: &'static str, values: &[f64]) -> Result<(), RenderError> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(RenderError::Draw {
            op,
            reason: format!("non-finite coordinate {v}"),
        }),
        None => Ok(()),
    }
}

impl<G: Graphics> Canvas for PistonCanvas<'_, G> {
    fn clear(&mut self, color: [f32; 4]) -> Result<(), RenderError> {
        clear(color, &mut *self.g);
        Ok(())
    }

    fn line(&mut self, color: [f32; 4], coords: [f64; 4]) -> Result<(), RenderError> {
        finite("draw line", &coords)?;
        line(color, GRID_LINE_RADIUS, coords, self.transform, &mut *self.g);
        Ok(())
    }

    fn fill_rect(&mut self, color: [f32; 4], rect: [f64; 4]) -> Result<(), RenderError> {
        finite("fill rect", &rect)?;
        rectangle(color, rect, self.transform, &mut *self.g);
        Ok(())
    }
}
