#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod geometry;
pub mod error;
pub mod config;
pub mod path;
pub mod device;
pub mod events;
pub mod canvas;
pub mod viewer;
pub mod plotter;
pub mod drawing;


#[doc(inline)]
pub use {
    geometry::Float,
    geometry::Point,
    geometry::Move,
    geometry::Dimensions,
    error::PlotterError,
    error::PlotterResult,
    config::PlotterConfig,
    config::StringArt,
    path::generate_circle_points,
    path::generate_string_path,
    device::PhysicalDevice,
    device::CommandBuffer,
    events::InputEvent,
    canvas::Canvas,
    canvas::RasterCanvas,
    plotter::Backend,
    plotter::Plotter,
    drawing::Routine,
};
