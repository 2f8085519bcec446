use alloc::string::String;
use core::fmt;

use PlotterError::*;

#[derive(Debug, Clone, PartialEq)]
pub enum PlotterError {
    /// The backend identifier matched neither `physical` nor `interactive`
    UnsupportedBackend(String),
    /// No drawing routine goes by this name
    UnknownRoutine(String),
    /// The device refused its tool, speed or force settings
    DeviceConfigurationFailure(String),
    /// The drawing surface could not be created
    CanvasInitFailure(String),
    /// The device sink rejected queued commands
    DeviceTransport,
    /// Non-finite or degenerate circle geometry
    InvalidGeometry,
    ScreenshotFailure(String),
}

pub type PlotterResult<T> = Result<T, PlotterError>;

impl fmt::Display for PlotterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnsupportedBackend(id) => write!(f, "unsupported backend: {:?}", id),
            UnknownRoutine(name) => write!(f, "unknown drawing routine: {:?}", name),
            DeviceConfigurationFailure(why) => write!(f, "device configuration rejected: {}", why),
            CanvasInitFailure(why) => write!(f, "could not create canvas: {}", why),
            DeviceTransport => write!(f, "device transport failed"),
            InvalidGeometry => write!(f, "circle geometry must be finite with a positive radius"),
            ScreenshotFailure(why) => write!(f, "could not save screenshot: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PlotterError {}
