use std::ops::Range;

/// Where `fit` places the camera before any panning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraAnchor {
    /// Legacy placement: centre over a quarter of the window,
    /// `camera = (window_px / 4 - visible_cells) / 2`.
    QuarterWindow,
    /// Centre the board in the window
    #[default]
    Centered,
}

/// ViewPort maps window pixels onto board cells.
///
/// The camera is the board cell drawn at the window's top-left corner,
/// so screen cell `(r, c)` shows board cell `(r + camera_y, c + camera_x)`.
/// It is derived state: rebuild it whenever the window or board changes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewPort {
    pub cell_size_px: u32,
    pub camera_x: i32,
    pub camera_y: i32,
    pub window_width_px: u32,
    pub window_height_px: u32,
    pub visible_rows: u32,
    pub visible_columns: u32,
    pub pan_speed_cells: i32,
    board_rows: usize,
    board_columns: usize,
    anchor: CameraAnchor,
}

impl ViewPort {
    /// Fit a board into a window using the legacy quarter-window camera
    pub fn fit(rows: usize, columns: usize, window_width_px: u32, window_height_px: u32) -> Self {
        Self::fit_with(
            rows,
            columns,
            window_width_px,
            window_height_px,
            CameraAnchor::QuarterWindow,
            1,
        )
    }

    /// Fit a board into a window with an explicit camera anchor and pan speed
    pub fn fit_with(
        rows: usize,
        columns: usize,
        window_width_px: u32,
        window_height_px: u32,
        anchor: CameraAnchor,
        pan_speed_cells: i32,
    ) -> Self {
        let cell_size_px = cell_size(rows, columns, window_width_px, window_height_px);
        let visible_rows = window_height_px / cell_size_px;
        let visible_columns = window_width_px / cell_size_px;

        let (camera_x, camera_y) = match anchor {
            CameraAnchor::QuarterWindow => (
                (window_width_px as i32 / 4 - visible_columns as i32) / 2,
                (window_height_px as i32 / 4 - visible_rows as i32) / 2,
            ),
            CameraAnchor::Centered => (
                (columns as i32 - visible_columns as i32) / 2,
                (rows as i32 - visible_rows as i32) / 2,
            ),
        };

        Self {
            cell_size_px,
            camera_x,
            camera_y,
            window_width_px,
            window_height_px,
            visible_rows,
            visible_columns,
            pan_speed_cells: pan_speed_cells.max(1),
            board_rows: rows,
            board_columns: columns,
            anchor,
        }
    }

    /// Recompute after the host window was resized
    pub fn refit(&mut self, window_width_px: u32, window_height_px: u32) {
        *self = Self::fit_with(
            self.board_rows,
            self.board_columns,
            window_width_px,
            window_height_px,
            self.anchor,
            self.pan_speed_cells,
        );
    }

    pub const fn anchor(&self) -> CameraAnchor {
        self.anchor
    }

    /// Window pixel to screen-relative cell `(row, col)`.
    /// Does not add the camera and does not bounds-check.
    pub fn pixel_to_cell(&self, px: i32, py: i32) -> (i32, i32) {
        let size = self.cell_size_px as i32;
        (py.div_euclid(size), px.div_euclid(size))
    }

    /// Window pixel to board cell `(row, col)`, camera included.
    /// The result may lie off the board; check before touching the grid.
    pub fn pixel_to_board(&self, px: i32, py: i32) -> (i64, i64) {
        let (row, col) = self.pixel_to_cell(px, py);
        (
            row as i64 + self.camera_y as i64,
            col as i64 + self.camera_x as i64,
        )
    }

    /// Top-left pixel of a board cell, or None when it is off screen
    pub fn cell_to_pixel(&self, row: usize, col: usize) -> Option<(i32, i32)> {
        let screen_row = row as i64 - self.camera_y as i64;
        let screen_col = col as i64 - self.camera_x as i64;
        let on_screen = (0..self.visible_rows as i64).contains(&screen_row)
            && (0..self.visible_columns as i64).contains(&screen_col);
        on_screen.then(|| {
            let size = self.cell_size_px as i64;
            ((screen_col * size) as i32, (screen_row * size) as i32)
        })
    }

    /// Board rows and columns currently on screen, clipped to the board
    pub fn visible_range(&self) -> (Range<usize>, Range<usize>) {
        let clip = |camera: i32, visible: u32, len: usize| {
            let start = (camera as i64).clamp(0, len as i64) as usize;
            let end = (camera as i64 + visible as i64).clamp(0, len as i64) as usize;
            start..end.max(start)
        };
        (
            clip(self.camera_y, self.visible_rows, self.board_rows),
            clip(self.camera_x, self.visible_columns, self.board_columns),
        )
    }

    /// Move the camera by `pan_speed_cells` steps.
    ///
    /// The camera is clamped so at least one board cell stays on screen.
    pub fn pan(&mut self, d_rows: i32, d_cols: i32) {
        let step = self.pan_speed_cells;
        self.camera_y = clamp_axis(
            self.camera_y.saturating_add(d_rows.saturating_mul(step)),
            self.visible_rows,
            self.board_rows,
        );
        self.camera_x = clamp_axis(
            self.camera_x.saturating_add(d_cols.saturating_mul(step)),
            self.visible_columns,
            self.board_columns,
        );
    }
}

/// min(height / rows, width / columns), never below one pixel
fn cell_size(rows: usize, columns: usize, width: u32, height: u32) -> u32 {
    let by_rows = height as usize / rows.max(1);
    let by_columns = width as usize / columns.max(1);
    by_rows.min(by_columns).clamp(1, u32::MAX as usize) as u32
}

fn clamp_axis(camera: i32, visible: u32, board_len: usize) -> i32 {
    let low = 1 - visible.max(1) as i32;
    let high = board_len as i32 - 1;
    camera.clamp(low, high.max(low))
}
