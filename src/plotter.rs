use crate::canvas::Canvas;
use crate::config::Bed;
use crate::config::DeviceSettings;
use crate::config::PlotterConfig;
use crate::config::ViewerConfig;
use crate::device::PhysicalDevice;
use crate::error::PlotterError::UnsupportedBackend;
use crate::error::PlotterError;
use crate::error::PlotterResult;
use crate::geometry::Dimensions;
use crate::geometry::Float;
use crate::geometry::Point;
use crate::geometry::ORIGIN;
use crate::viewer::run_session;
use crate::viewer::DrawingSession;
use crate::viewer::ViewState;

use core::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Backend {
    Physical,
    Interactive,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Physical => "physical",
            Backend::Interactive => "interactive",
        }
    }
}

impl FromStr for Backend {
    type Err = PlotterError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        match id {
            "physical" => Ok(Backend::Physical),
            "interactive" => Ok(Backend::Interactive),
            _ => Err(UnsupportedBackend(id.into())),
        }
    }
}

/// Forwards moves to a pen plotter as they come.
pub struct PhysicalPlotter<D> {
    device: D,
    bed: Bed,
    position: Point,
}

impl<D: PhysicalDevice> PhysicalPlotter<D> {
    /// Fails if the device rejects `settings`; nothing is moved then.
    pub fn new(mut device: D, settings: &DeviceSettings, bed: Bed) -> PlotterResult<Self> {
        device.configure(settings)?;
        Ok(Self {
            device,
            bed,
            position: ORIGIN,
        })
    }

    pub fn device(&self) -> &D {
        &self.device
    }

    pub fn into_device(self) -> D {
        self.device
    }
}

/// Records moves, then shows them in a pan & zoom view on flush.
pub struct InteractivePlotter<C> {
    canvas: C,
    config: ViewerConfig,
    session: DrawingSession,
    view: ViewState,
}

impl<C: Canvas> InteractivePlotter<C> {
    pub fn new(canvas: C, config: ViewerConfig) -> PlotterResult<Self> {
        let view = ViewState::new(config.zoom_step, config.initial_zoom)?;
        Ok(Self {
            canvas,
            config,
            session: DrawingSession::new(ORIGIN),
            view,
        })
    }

    pub fn canvas(&self) -> &C {
        &self.canvas
    }

    pub fn session(&self) -> &DrawingSession {
        &self.session
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }
}

/// Drawing surface shared by both backends.
pub enum Plotter<D, C> {
    Physical(PhysicalPlotter<D>),
    Interactive(InteractivePlotter<C>),
}

impl<D: PhysicalDevice, C: Canvas> Plotter<D, C> {
    /// Selects the backend named `backend`. The identifier is checked before
    /// either factory runs, so an unknown name opens no device or window.
    pub fn open<FD, FC>(backend: &str, config: PlotterConfig, make_device: FD, make_canvas: FC) -> PlotterResult<Self>
    where
        FD: FnOnce() -> PlotterResult<D>,
        FC: FnOnce(&ViewerConfig) -> PlotterResult<C>,
    {
        let backend: Backend = backend.parse()?;
        log::info!("opening {} backend", backend.as_str());

        Ok(match backend {
            Backend::Physical => {
                let device = make_device()?;
                Plotter::Physical(PhysicalPlotter::new(device, &config.device, config.bed)?)
            }
            Backend::Interactive => {
                let canvas = make_canvas(&config.viewer)?;
                Plotter::Interactive(InteractivePlotter::new(canvas, config.viewer)?)
            }
        })
    }

    pub fn backend(&self) -> Backend {
        match self {
            Plotter::Physical(_) => Backend::Physical,
            Plotter::Interactive(_) => Backend::Interactive,
        }
    }

    /// Bed size for the physical backend, current window size otherwise.
    pub fn dimensions(&self) -> Dimensions {
        match self {
            Plotter::Physical(p) => p.bed.dimensions(),
            Plotter::Interactive(p) => {
                let (width, height) = p.canvas.size();
                Dimensions::new(ORIGIN, width as Float, height as Float)
            }
        }
    }

    pub fn position(&self) -> Point {
        match self {
            Plotter::Physical(p) => p.position,
            Plotter::Interactive(p) => p.session.current(),
        }
    }

    pub fn home(&self) -> Point {
        ORIGIN
    }

    pub fn move_to(&mut self, target: Point, pen_down: bool) {
        match self {
            Plotter::Physical(p) => {
                log::trace!("moving to {:?}, pen down: {}", target, pen_down);
                p.device.move_to(target, pen_down);
                p.position = target;
            }
            Plotter::Interactive(p) => p.session.record(target, pen_down),
        }
    }

    pub fn move_home(&mut self) {
        match self {
            Plotter::Physical(p) => {
                p.device.move_home();
                p.position = ORIGIN;
            }
            Plotter::Interactive(p) => p.session.go_home(),
        }
    }

    /// Physical: sends the queued commands. Interactive: blocks until the
    /// view is closed.
    pub fn flush(&mut self) -> PlotterResult<()> {
        match self {
            Plotter::Physical(p) => p.device.flush(),
            Plotter::Interactive(p) => {
                run_session(&mut p.canvas, &p.session, &mut p.view, &p.config);
                Ok(())
            }
        }
    }

    pub fn physical(&self) -> Option<&PhysicalPlotter<D>> {
        match self {
            Plotter::Physical(p) => Some(p),
            Plotter::Interactive(_) => None,
        }
    }

    pub fn interactive(&self) -> Option<&InteractivePlotter<C>> {
        match self {
            Plotter::Physical(_) => None,
            Plotter::Interactive(p) => Some(p),
        }
    }

    pub fn session(&self) -> Option<&DrawingSession> {
        match self {
            Plotter::Physical(_) => None,
            Plotter::Interactive(p) => Some(&p.session),
        }
    }

    pub fn view(&self) -> Option<&ViewState> {
        match self {
            Plotter::Physical(_) => None,
            Plotter::Interactive(p) => Some(&p.view),
        }
    }
}
