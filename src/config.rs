use crate::geometry::Dimensions;
use crate::geometry::Float;
use crate::geometry::Point;

use rgb::RGBA8;
use alloc::string::String;

/// Parameters of the symmetric-strings routine.
#[derive(Debug, Clone, PartialEq)]
pub struct StringArt {
    pub point_count: usize,
    pub stride: usize,
    /// kept between the circle and the edge of the drawable area
    pub margin: Float,
}

impl Default for StringArt {
    fn default() -> Self {
        Self {
            point_count: 197,
            stride: 80,
            margin: 0.0,
        }
    }
}

impl StringArt {
    pub fn radius_for(&self, dimensions: &Dimensions) -> Float {
        dimensions.inscribed_radius() - self.margin
    }
}

/// Drawable part of the physical bed, in millimeters.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Bed {
    pub min: Point,
    pub max: Point,
}

impl Default for Bed {
    fn default() -> Self {
        Self {
            min: Point::new(10.0, 20.0),
            max: Point::new(190.0, 200.0),
        }
    }
}

impl Bed {
    pub fn dimensions(&self) -> Dimensions {
        let size = self.max - self.min;
        Dimensions::new(self.min, size.x, size.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DeviceSettings {
    /// millimeters
    pub tool_diameter: Float,
    pub speed: u32,
    pub force: u32,
}

impl Default for DeviceSettings {
    /// A pen at full speed and the lightest force.
    fn default() -> Self {
        Self {
            tool_diameter: 0.9,
            speed: 10,
            force: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub zoom_step: Float,
    pub initial_zoom: Float,
    pub background: RGBA8,
    pub ink: RGBA8,
    pub screenshot_path: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            zoom_step: 0.1,
            initial_zoom: 1.0,
            background: RGBA8::new(255, 255, 255, 255),
            ink: RGBA8::new(0, 0, 0, 255),
            screenshot_path: "string-art.png".into(),
        }
    }
}

/// Settings for every backend; only the selected one is used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlotterConfig {
    pub device: DeviceSettings,
    pub bed: Bed,
    pub viewer: ViewerConfig,
}
