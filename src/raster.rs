use crate::{Error, Grid, Result};

/// Two packed colors used for the cells.
///
/// Colors are little-endian RGBA bytes packed into `u32` (`0xAABBGGRR`), i.e. the
/// layout of an RGBA byte buffer viewed as `u32` on the usual hardware.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub alive: u32,
    pub dead: u32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: 0xff00_0000, // opaque black
            dead: 0xffff_ffff,  // opaque white
        }
    }
}

/// Square image of packed colors, row-major.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: Vec<u32>,
    side: usize,
}

impl PixelBuffer {
    pub fn side(&self) -> usize {
        self.side
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.side + x]
    }

    /// Unpacks the image into RGBA bytes
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_le_bytes()).collect()
    }
}

/// Maps a field onto a fixed-size canvas.
///
/// Cell pixel size is `canvas_size / grid_size` and may be fractional; pixel
/// `(x, y)` shows cell `(floor(y / cell_size), floor(x / cell_size))`. The floor is
/// evaluated exactly as `y * grid_size / canvas_size` in integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rasterizer {
    canvas_size: usize,
    palette: Palette,
}

impl Rasterizer {
    pub fn new(canvas_size: usize, palette: Palette) -> Result<Self> {
        if canvas_size == 0 {
            return Err(crate::ConfigError::CanvasSize(canvas_size).into());
        }
        Ok(Self {
            canvas_size,
            palette,
        })
    }

    pub fn render(&self, grid: &Grid) -> PixelBuffer {
        let mut dst = PixelBuffer::default();
        self.render_into(grid, &mut dst);
        dst
    }

    /// Same as [`Rasterizer::render`], but reuses the allocation of `dst`.
    pub fn render_into(&self, grid: &Grid, dst: &mut PixelBuffer) {
        let (p, n) = (self.canvas_size, grid.size());
        dst.side = p;
        dst.pixels.resize(p * p, self.palette.dead);

        // source column of every pixel column
        let columns = (0..p).map(|x| x * n / p).collect::<Vec<_>>();
        let cells = grid.cells();
        for (y, line) in dst.pixels.chunks_exact_mut(p).enumerate() {
            let row = &cells[(y * n / p) * n..][..n];
            for (pixel, &column) in line.iter_mut().zip(columns.iter()) {
                *pixel = if row[column] {
                    self.palette.alive
                } else {
                    self.palette.dead
                };
            }
        }
    }

    /// Cell `(row, column)` shown at canvas pixel `(x, y)`, using the same mapping as rendering.
    pub fn cell_at_pixel(&self, grid_size: usize, x: usize, y: usize) -> Result<(usize, usize)> {
        let p = self.canvas_size;
        if x >= p || y >= p {
            return Err(Error::PixelOutOfBounds { x, y, canvas: p });
        }
        Ok((y * grid_size / p, x * grid_size / p))
    }
}

/// Renders `grid` onto a `canvas_size x canvas_size` image.
pub fn render(grid: &Grid, canvas_size: usize, alive: u32, dead: u32) -> Result<PixelBuffer> {
    let rasterizer = Rasterizer::new(canvas_size, Palette { alive, dead })?;
    Ok(rasterizer.render(grid))
}
