use crate::config::DeviceSettings;
use crate::error::PlotterError::DeviceConfigurationFailure;
use crate::error::PlotterError::DeviceTransport;
use crate::error::PlotterResult;
use crate::geometry::Point;

use core::fmt::Write;
use alloc::vec::Vec;

/// Motion interface of a pen plotter.
pub trait PhysicalDevice {
    fn configure(&mut self, settings: &DeviceSettings) -> PlotterResult<()>;

    fn move_to(&mut self, target: Point, pen_down: bool);

    /// Dedicated homing motion, not a regular move to (0, 0).
    fn move_home(&mut self);

    /// Sends everything queued so far.
    fn flush(&mut self) -> PlotterResult<()>;
}

impl<D: PhysicalDevice + ?Sized> PhysicalDevice for &mut D {
    fn configure(&mut self, settings: &DeviceSettings) -> PlotterResult<()> {
        (**self).configure(settings)
    }

    fn move_to(&mut self, target: Point, pen_down: bool) {
        (**self).move_to(target, pen_down)
    }

    fn move_home(&mut self) {
        (**self).move_home()
    }

    fn flush(&mut self) -> PlotterResult<()> {
        (**self).flush()
    }
}

pub const MAX_FORCE: u32 = 33;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Command {
    Configure(DeviceSettings),
    Travel(Point),
    Draw(Point),
    Home,
}

impl Command {
    pub fn write_to<W: Write>(&self, w: &mut W) -> core::fmt::Result {
        match self {
            Command::Configure(s) => {
                writeln!(w, "TOOL {}", s.tool_diameter)?;
                writeln!(w, "SPEED {}", s.speed)?;
                writeln!(w, "FORCE {}", s.force)
            }
            Command::Travel(p) => writeln!(w, "M {},{}", p.x, p.y),
            Command::Draw(p) => writeln!(w, "D {},{}", p.x, p.y),
            Command::Home => writeln!(w, "H"),
        }
    }
}

/// Queues motion commands and writes them, one per line, to `sink`
/// when flushed.
pub struct CommandBuffer<W> {
    sink: W,
    queue: Vec<Command>,
    sent: usize,
}

impl<W: Write> CommandBuffer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            queue: Vec::new(),
            sent: 0,
        }
    }

    pub fn queued(&self) -> &[Command] {
        &self.queue
    }

    /// Number of commands written to the sink so far
    pub fn sent(&self) -> usize {
        self.sent
    }

    pub fn sink(&self) -> &W {
        &self.sink
    }

    pub fn into_sink(self) -> W {
        self.sink
    }
}

impl<W: Write> PhysicalDevice for CommandBuffer<W> {
    fn configure(&mut self, settings: &DeviceSettings) -> PlotterResult<()> {
        let DeviceSettings { tool_diameter, speed, force } = *settings;

        if !(tool_diameter.is_finite() && tool_diameter > 0.0) {
            return Err(DeviceConfigurationFailure(alloc::format!("tool diameter {}", tool_diameter)));
        }
        if speed == 0 {
            return Err(DeviceConfigurationFailure("speed must be positive".into()));
        }
        if !(1..=MAX_FORCE).contains(&force) {
            return Err(DeviceConfigurationFailure(alloc::format!("force {} not in 1..={}", force, MAX_FORCE)));
        }

        log::info!("tool {}mm, speed {}, force {}", tool_diameter, speed, force);
        self.queue.push(Command::Configure(*settings));
        Ok(())
    }

    fn move_to(&mut self, target: Point, pen_down: bool) {
        self.queue.push(match pen_down {
            true => Command::Draw(target),
            false => Command::Travel(target),
        });
    }

    fn move_home(&mut self) {
        self.queue.push(Command::Home);
    }

    fn flush(&mut self) -> PlotterResult<()> {
        for command in &self.queue {
            command.write_to(&mut self.sink).map_err(|_| DeviceTransport)?;
        }

        log::info!("sent {} commands", self.queue.len());
        self.sent += self.queue.len();
        self.queue.clear();
        Ok(())
    }
}
