use crate::canvas::Canvas;
use crate::config::StringArt;
use crate::device::PhysicalDevice;
use crate::error::PlotterError;
use crate::error::PlotterError::UnknownRoutine;
use crate::error::PlotterResult;
use crate::path::string_art;
use crate::plotter::Plotter;

use core::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Routine {
    /// Strings stretched across a circle of evenly spaced pins
    SymmetricStrings,
}

impl FromStr for Routine {
    type Err = PlotterError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "symmetric-strings" => Ok(Routine::SymmetricStrings),
            _ => Err(UnknownRoutine(name.into())),
        }
    }
}

impl Routine {
    /// Draws on `plotter`, then homes and flushes it.
    pub fn draw<D: PhysicalDevice, C: Canvas>(self, plotter: &mut Plotter<D, C>, art: &StringArt) -> PlotterResult<()> {
        match self {
            Routine::SymmetricStrings => symmetric_strings(plotter, art),
        }
    }
}

fn symmetric_strings<D: PhysicalDevice, C: Canvas>(plotter: &mut Plotter<D, C>, art: &StringArt) -> PlotterResult<()> {
    let dimensions = plotter.dimensions();
    let center = dimensions.center();
    let radius = art.radius_for(&dimensions);
    log::info!("{} strings around {:?}, radius {}", art.point_count, center, radius);

    for step in string_art(art.point_count, art.stride, center, radius)? {
        plotter.move_to(step.target, step.pen_down);
    }

    plotter.move_home();
    plotter.flush()
}
