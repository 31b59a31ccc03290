use crate::agent::Position;

/// Logical grid mapped onto a fixed logical screen size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    pub screen_width: u32,
    pub screen_height: u32,
}

impl Board {
    pub fn new(width: u32, height: u32, screen_width: u32, screen_height: u32) -> Self {
        Board {
            width,
            height,
            screen_width,
            screen_height,
        }
    }

    pub fn cell_width(&self) -> f32 {
        self.screen_width as f32 / self.width as f32
    }

    pub fn cell_height(&self) -> f32 {
        self.screen_height as f32 / self.height as f32
    }

    pub fn contains(&self, pos: Position) -> bool {
        (0..self.width as i32).contains(&pos.x) && (0..self.height as i32).contains(&pos.y)
    }

    /// Pixel rectangle `[x, y, w, h]` covering one cell.
    pub fn cell_rect(&self, pos: Position) -> [f64; 4] {
        let (cw, ch) = (self.cell_width(), self.cell_height());
        [
            (pos.x as f32 * cw).floor() as f64,
            (pos.y as f32 * ch).floor() as f64,
            cw.floor() as f64,
            ch.floor() as f64,
        ]
    }

    /// Interior vertical boundaries as `[x1, y1, x2, y2]`. The outer edges
    /// coincide with the surface edges and are not drawn.
    pub fn vertical_lines(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        let height = self.screen_height as f64;
        (1..self.width).map(move |i| {
            let x = (i as f32 * self.cell_width()) as f64;
            [x, 0.0, x, height]
        })
    }

    pub fn horizontal_lines(&self) -> impl Iterator<Item = [f64; 4]> + '_ {
        let width = self.screen_width as f64;
        (1..self.height).map(move |j| {
            let y = (j as f32 * self.cell_height()) as f64;
            [0.0, y, width, y]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> Board {
        Board::new(10, 10, 800, 600)
    }

    #[test]
    fn cell_size_is_derived_from_screen() {
        assert_eq!(board().cell_width(), 80.0);
        assert_eq!(board().cell_height(), 60.0);
    }

    #[test]
    fn origin_cell_rect() {
        assert_eq!(board().cell_rect(Position::new(0, 0)), [0.0, 0.0, 80.0, 60.0]);
        assert_eq!(board().cell_rect(Position::new(9, 9)), [720.0, 540.0, 80.0, 60.0]);
    }

    #[test]
    fn fractional_cells_are_floored() {
        let board = Board::new(3, 7, 100, 100);
        // 33.33 x 14.28
        assert_eq!(board.cell_rect(Position::new(2, 3)), [66.0, 42.0, 33.0, 14.0]);
    }

    #[test]
    fn only_interior_boundaries_are_drawn() {
        let board = board();
        let vertical: Vec<_> = board.vertical_lines().collect();
        let horizontal: Vec<_> = board.horizontal_lines().collect();
        assert_eq!(vertical.len(), 9);
        assert_eq!(horizontal.len(), 9);
        assert_eq!(vertical[0], [80.0, 0.0, 80.0, 600.0]);
        assert_eq!(vertical[8], [720.0, 0.0, 720.0, 600.0]);
        assert_eq!(horizontal[0], [0.0, 60.0, 800.0, 60.0]);
        assert_eq!(horizontal[8], [0.0, 540.0, 800.0, 540.0]);
    }

    #[test]
    fn bounds() {
        let board = board();
        assert!(board.contains(Position::new(0, 0)));
        assert!(board.contains(Position::new(9, 9)));
        assert!(!board.contains(Position::new(10, 0)));
        assert!(!board.contains(Position::new(0, -1)));
    }
}
