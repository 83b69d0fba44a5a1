use std::path::{Path, PathBuf};

use image::{ImageBuffer, ImageFormat, Rgba, RgbaImage};

use crate::{create_parent_dir, line::{COORD_MIN, COORD_SPAN}, CanvasError, Line, Record};


/// Visualization sink for a verification pass.
pub trait Canvas {
    fn draw_point(&mut self, x: i32, y: i32, positive: bool);
    fn draw_linear_function(&mut self, slope: i32, intercept: i32);
    /// Flushes every prior draw call to its destination.
    fn save(self) -> Result<(), CanvasError> where Self: Sized;
}

/// Pixels per world unit.
pub const SCALE: i64 = 2;
const WORLD_MIN: i64 = COORD_MIN as i64;
const WORLD_MAX: i64 = (COORD_MIN + COORD_SPAN) as i64;
pub const SIZE: u32 = ((WORLD_MAX - WORLD_MIN + 1) * SCALE) as u32;
const POINT_RADIUS: i64 = 3;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const AXIS: Rgba<u8> = Rgba([200, 200, 200, 255]);
const LINE: Rgba<u8> = Rgba([0, 0, 0, 255]);
pub const POSITIVE: Rgba<u8> = Rgba([0, 170, 0, 255]);
pub const NEGATIVE: Rgba<u8> = Rgba([220, 0, 0, 255]);

#[inline(always)]
fn to_px(x: f64) -> f64 { (x - WORLD_MIN as f64) * SCALE as f64 }
#[inline(always)]
fn to_py(y: f64) -> f64 { (WORLD_MAX as f64 - y) * SCALE as f64 }

/// PNG-backed canvas covering the sampled coordinate window, y axis up.
pub struct ImageCanvas {
    image: RgbaImage,
    path: PathBuf,
}

impl ImageCanvas {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let mut canvas = Self {
            image: ImageBuffer::from_pixel(SIZE, SIZE, BACKGROUND),
            path: path.as_ref().to_path_buf(),
        };
        let ox = to_px(0.) as i64;
        let oy = to_py(0.) as i64;
        for i in 0..SIZE as i64 {
            canvas.put(i, oy, AXIS);
            canvas.put(ox, i, AXIS);
        }
        canvas
    }

    #[inline(always)]
    pub fn image(&self) -> &RgbaImage { &self.image }
    #[inline(always)]
    pub fn path(&self) -> &Path { &self.path }

    #[inline(always)]
    fn put(&mut self, px: i64, py: i64, color: Rgba<u8>) {
        if px >= 0 && py >= 0 && px < SIZE as i64 && py < SIZE as i64 {
            self.image.put_pixel(px as u32, py as u32, color);
        }
    }
}

impl Canvas for ImageCanvas {
    fn draw_point(&mut self, x: i32, y: i32, positive: bool) {
        let color = if positive { POSITIVE } else { NEGATIVE };
        let cx = to_px(x as f64) as i64;
        let cy = to_py(y as f64) as i64;
        for dy in -POINT_RADIUS..=POINT_RADIUS {
            for dx in -POINT_RADIUS..=POINT_RADIUS {
                if dx * dx + dy * dy <= POINT_RADIUS * POINT_RADIUS {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    fn draw_linear_function(&mut self, slope: i32, intercept: i32) {
        let f = |x: f64| slope as f64 * x + intercept as f64;
        let max_row = SIZE as f64 - 1.;
        for column in 0..SIZE as i64 {
            // world x at both edges of the pixel column
            let x0 = column as f64 / SCALE as f64 + WORLD_MIN as f64;
            let x1 = (column + 1) as f64 / SCALE as f64 + WORLD_MIN as f64;
            let y0 = to_py(f(x0));
            let y1 = to_py(f(x1));
            let (top, bottom) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
            if bottom < 0. || top > max_row {
                continue;
            }
            let top = top.max(0.).floor() as i64;
            let bottom = bottom.min(max_row).floor() as i64;
            for row in top..=bottom {
                self.put(column, row, LINE);
            }
        }
    }

    fn save(self) -> Result<(), CanvasError> {
        create_parent_dir(&self.path)?;
        self.image.save_with_format(&self.path, ImageFormat::Png)?;
        Ok(())
    }
}

/// Plots every record by its predicted class, then the ground-truth line.
pub fn render_verification<C: Canvas, I: IntoIterator<Item = Record>>(canvas: &mut C, line: &Line, records: I) {
    for record in records {
        canvas.draw_point(record.point.x, record.point.y, record.is_positive());
    }
    canvas.draw_linear_function(line.slope, line.intercept);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    #[derive(Default)]
    struct RecordingCanvas {
        points: Vec<(i32, i32, bool)>,
        lines: Vec<(i32, i32)>,
    }

    impl Canvas for RecordingCanvas {
        fn draw_point(&mut self, x: i32, y: i32, positive: bool) { self.points.push((x, y, positive)) }
        fn draw_linear_function(&mut self, slope: i32, intercept: i32) { self.lines.push((slope, intercept)) }
        fn save(self) -> Result<(), CanvasError> { Ok(()) }
    }

    fn pixel_at(canvas: &ImageCanvas, x: i32, y: i32) -> Rgba<u8> {
        *canvas.image().get_pixel(to_px(x as f64) as u32, to_py(y as f64) as u32)
    }

    #[test]
    fn test_canvas_size() {
        let canvas = ImageCanvas::new("unused.png");
        assert_eq!((404, 404), canvas.image().dimensions());
        assert_eq!(BACKGROUND, pixel_at(&canvas, 50, 50));
        assert_eq!(AXIS, pixel_at(&canvas, 0, 50));
    }

    #[test]
    fn test_draw_point_colors() {
        let mut canvas = ImageCanvas::new("unused.png");
        canvas.draw_point(10, 20, true);
        canvas.draw_point(-30, -40, false);
        assert_eq!(POSITIVE, pixel_at(&canvas, 10, 20));
        assert_eq!(NEGATIVE, pixel_at(&canvas, -30, -40));
    }

    #[test]
    fn test_draw_point_clipped() {
        let mut canvas = ImageCanvas::new("unused.png");
        canvas.draw_point(-101, -101, true);
        canvas.draw_point(500, 500, true);
        assert_eq!(POSITIVE, *canvas.image().get_pixel(0, SIZE - 1));
    }

    #[test]
    fn test_draw_linear_function() {
        let mut canvas = ImageCanvas::new("unused.png");
        canvas.draw_linear_function(1, 10);
        assert_eq!(LINE, pixel_at(&canvas, 0, 10));
        assert_eq!(LINE, pixel_at(&canvas, 40, 50));
        assert_eq!(BACKGROUND, pixel_at(&canvas, 40, 20));
    }

    #[test]
    fn test_draw_steep_line_is_continuous() {
        let mut canvas = ImageCanvas::new("unused.png");
        canvas.draw_linear_function(-6, 0);
        for y in -60..=60 {
            // x = -y / 6 lies inside a single pixel column per world unit step
            let x = -(y as f64) / 6.;
            let column = to_px(x).floor() as u32;
            let row = to_py(y as f64) as u32;
            let hit = (column.saturating_sub(1)..=column + 1)
                .any(|c| *canvas.image().get_pixel(c, row) == LINE);
            assert!(hit, "gap at y = {}", y);
        }
    }

    #[test]
    fn test_save_writes_png() {
        let dir = std::env::temp_dir().join(format!("line_perceptron_canvas_{}", std::process::id()));
        let path = dir.join("nested").join("result.png");
        let mut canvas = ImageCanvas::new(&path);
        canvas.draw_point(0, 0, true);
        canvas.draw_linear_function(2, -3);
        canvas.save().unwrap();

        let loaded = image::open(&path).unwrap().into_rgba8();
        assert_eq!((SIZE, SIZE), loaded.dimensions());
        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_render_verification() {
        let mut canvas = RecordingCanvas::default();
        let records = vec![
            Record { point: Point::new(1, 2), predicted: 1, expected: 1 },
            Record { point: Point::new(-5, 7), predicted: 0, expected: 1 },
        ];
        render_verification(&mut canvas, &Line::new(-2, 4), records);
        assert_eq!(vec![(1, 2, true), (-5, 7, false)], canvas.points);
        assert_eq!(vec![(-2, 4)], canvas.lines);
        canvas.save().unwrap();
    }
}
