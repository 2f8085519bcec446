use crate::error::PlotterError::CanvasInitFailure;
use crate::error::PlotterError::ScreenshotFailure;
use crate::error::PlotterResult;
use crate::events::InputEvent;
use crate::geometry::Float;
use crate::geometry::Point;

use wizdraw::stroke;

use vek::vec::Vec2;

#[allow(unused_imports)]
use num_traits::real::Real;

use rgb::RGBA8;

use alloc::{vec, vec::Vec};

/// Window-like drawing surface used by the interactive backend.
pub trait Canvas {
    /// Width and height in pixels
    fn size(&self) -> (u32, u32);

    /// Reallocates the backing surface after the window changed size.
    fn resize(&mut self, width: u32, height: u32);

    fn fill(&mut self, color: RGBA8);

    fn draw_line(&mut self, start: Point, end: Point, width: Float, color: RGBA8);

    /// Shows the frame drawn since the last call.
    fn present(&mut self);

    /// Input received since the last call.
    fn poll_events(&mut self) -> Vec<InputEvent>;

    fn save_frame(&mut self, path: &str) -> PlotterResult<()>;
}

const SSAA: usize = 4;

/// Software canvas: an RGBA8 frame buffer fed by a scripted event source.
///
/// Once `events` runs dry the canvas reports `Quit`, so a session over a
/// finite script always ends.
pub struct RasterCanvas<E> {
    width: u32,
    height: u32,
    pixels: Vec<RGBA8>,
    mask: Vec<u8>,
    events: E,
    frames: usize,
}

/// Largest accepted width or height, in pixels
pub const MAX_SIDE: u32 = 16384;

fn area(width: u32, height: u32) -> Option<usize> {
    match width <= MAX_SIDE && height <= MAX_SIDE {
        true => (width as usize).checked_mul(height as usize),
        false => None,
    }
}

impl<E: Iterator<Item = InputEvent>> RasterCanvas<E> {
    pub fn new(width: u32, height: u32, events: E) -> PlotterResult<Self> {
        let length = match area(width, height) {
            Some(0) => return Err(CanvasInitFailure(alloc::format!("empty {}x{} surface", width, height))),
            Some(length) => length,
            None => return Err(CanvasInitFailure(alloc::format!("{}x{} is too large", width, height))),
        };

        log::info!("created {}x{} canvas", width, height);
        Ok(Self {
            width,
            height,
            pixels: vec![RGBA8::default(); length],
            mask: vec![0; length],
            events,
            frames: 0,
        })
    }

    /// Row-major pixels of the current frame
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        match x < self.width && y < self.height {
            true => Some(self.pixels[(y as usize) * (self.width as usize) + (x as usize)]),
            false => None,
        }
    }

    /// Number of presented frames
    pub fn frames(&self) -> usize {
        self.frames
    }

    #[cfg(feature = "std")]
    pub fn encode_png(&self) -> PlotterResult<Vec<u8>> {
        use png::BitDepth::Eight;
        use png::ColorType::Rgba;
        use png::Encoder;
        use rgb::ComponentBytes;

        let failure = |e: png::EncodingError| ScreenshotFailure(e.to_string());

        let mut png_buf = Vec::new();
        {
            let mut encoder = Encoder::new(&mut png_buf, self.width, self.height);
            encoder.set_color(Rgba);
            encoder.set_depth(Eight);
            let mut writer = encoder.write_header().map_err(failure)?;
            writer.write_image_data(self.pixels.as_bytes()).map_err(failure)?;
        }
        Ok(png_buf)
    }
}

impl<E: Iterator<Item = InputEvent>> Canvas for RasterCanvas<E> {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        let Some(length) = area(width, height) else {
            log::warn!("ignoring resize to {}x{}", width, height);
            return;
        };

        self.width = width;
        self.height = height;
        self.pixels = vec![RGBA8::default(); length];
        self.mask = vec![0; length];
        log::debug!("canvas resized to {}x{}", width, height);
    }

    fn fill(&mut self, color: RGBA8) {
        self.pixels.fill(color);
    }

    fn draw_line(&mut self, start: Point, end: Point, width: Float, color: RGBA8) {
        let (w, h) = (self.width as usize, self.height as usize);
        // region the stroke can touch
        let reach = width * 0.5 + 2.0;
        let min = Point::new(-reach, -reach);
        let max = Point::new((w - 1) as Float + reach, (h - 1) as Float + reach);
        let Some((start, end)) = clip_segment(start, end, min, max) else {
            return;
        };

        let x0 = (start.x.min(end.x) - reach).max(0.0) as usize;
        let y0 = (start.y.min(end.y) - reach).max(0.0) as usize;
        let x1 = ((start.x.max(end.x) + reach).ceil() as usize).min(w - 1);
        let y1 = ((start.y.max(end.y) + reach).ceil() as usize).min(h - 1);

        for y in y0..=y1 {
            self.mask[y * w..][x0..=x1].fill(0);
        }

        stroke::<SSAA>(&[start, end], &mut self.mask, Vec2::new(w, h), width);

        for y in y0..=y1 {
            let line = y * w;
            for x in x0..=x1 {
                let q = self.mask[line + x];
                if q != 0 {
                    blend_pixel(&mut self.pixels[line + x], color, q, true);
                }
            }
        }
    }

    fn present(&mut self) {
        self.frames += 1;
        log::trace!("frame {} presented", self.frames);
    }

    fn poll_events(&mut self) -> Vec<InputEvent> {
        match self.events.next() {
            Some(event) => vec![event],
            None => vec![InputEvent::Quit],
        }
    }

    #[cfg(feature = "std")]
    fn save_frame(&mut self, path: &str) -> PlotterResult<()> {
        let png_buf = self.encode_png()?;
        std::fs::write(path, &png_buf).map_err(|e| ScreenshotFailure(e.to_string()))?;
        log::info!("saved screenshot to {}", path);
        Ok(())
    }

    #[cfg(not(feature = "std"))]
    fn save_frame(&mut self, path: &str) -> PlotterResult<()> {
        Err(ScreenshotFailure(alloc::format!("{}: no filesystem", path)))
    }
}

/// Liang-Barsky clipping of a segment against the `min`..`max` rectangle.
pub fn clip_segment(start: Point, end: Point, min: Point, max: Point) -> Option<(Point, Point)> {
    let d = end - start;
    let mut t0: Float = 0.0;
    let mut t1: Float = 1.0;

    let edges = [
        (-d.x, start.x - min.x),
        (d.x, max.x - start.x),
        (-d.y, start.y - min.y),
        (d.y, max.y - start.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            // parallel to this edge
            if q < 0.0 {
                return None;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }

    match t0 <= t1 {
        true => Some((start + d * t0, start + d * t1)),
        false => None,
    }
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8, alpha_blend_dst: bool) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
    } else {
        let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
        let u8_max = u8::MAX as u32;
        let dst_alpha = u8_max - src_alpha;

        let for_each = |src: u8, dst: &mut u8| {
            let src_scaled = (src as u32) * src_alpha;
            *dst = match alpha_blend_dst {
                true => ((src_scaled + (*dst as u32) * dst_alpha) / u8_max) as u8,
                false => (src_scaled / u8_max) as u8,
            };
        };

        for_each(src_pixel.r, &mut dst_pixel.r);
        for_each(src_pixel.g, &mut dst_pixel.g);
        for_each(src_pixel.b, &mut dst_pixel.b);
        for_each(src_pixel.a, &mut dst_pixel.a);
    }
}
