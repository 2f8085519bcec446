use crate::canvas::Canvas;
use crate::config::ViewerConfig;
use crate::error::PlotterError::CanvasInitFailure;
use crate::error::PlotterResult;
use crate::events::InputEvent;
use crate::events::Button;
use crate::events::Key;
use crate::events::QUIT_KEY;
use crate::events::SCREENSHOT_KEY;
use crate::geometry::Float;
use crate::geometry::Move;
use crate::geometry::Point;
use crate::geometry::ORIGIN;

#[allow(unused_imports)]
use num_traits::real::Real;

use rgb::RGBA8;

use alloc::vec::Vec;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DragState {
    Idle,
    /// `anchor` is the last seen pointer position
    Dragging { anchor: Point },
}

/// What the session loop must do after an event.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Control {
    Continue,
    Resize(u32, u32),
    Screenshot,
    Quit,
}

/// Pan and zoom applied when rendering a recorded drawing.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewState {
    zoom_level: Float,
    zoom_step: Float,
    pan_offset: Point,
    drag: DragState,
}

impl ViewState {
    /// `initial_zoom` is raised to `zoom_step` if below it. Fails unless
    /// `zoom_step` is finite and positive and `initial_zoom` is finite.
    pub fn new(zoom_step: Float, initial_zoom: Float) -> PlotterResult<Self> {
        if !(zoom_step.is_finite() && zoom_step > 0.0) {
            return Err(CanvasInitFailure(alloc::format!("zoom step {}", zoom_step)));
        }
        if !initial_zoom.is_finite() {
            return Err(CanvasInitFailure(alloc::format!("initial zoom {}", initial_zoom)));
        }

        Ok(Self {
            zoom_level: initial_zoom.max(zoom_step),
            zoom_step,
            pan_offset: ORIGIN,
            drag: DragState::Idle,
        })
    }

    pub fn zoom_level(&self) -> Float {
        self.zoom_level
    }

    pub fn zoom_step(&self) -> Float {
        self.zoom_step
    }

    pub fn pan_offset(&self) -> Point {
        self.pan_offset
    }

    pub fn drag(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    pub fn zoom_in(&mut self) {
        self.zoom_level += self.zoom_step;
    }

    /// Never goes below one zoom step.
    pub fn zoom_out(&mut self) {
        self.zoom_level = (self.zoom_level - self.zoom_step).max(self.zoom_step);
    }

    pub fn pan_by(&mut self, delta: Point) {
        self.pan_offset += delta;
    }

    pub fn to_screen(&self, p: Point) -> Point {
        (p + self.pan_offset) * self.zoom_level
    }

    /// Stroke width for the current zoom level
    pub fn line_width(&self) -> Float {
        (self.zoom_level / 1.8).floor().max(1.0)
    }

    pub fn handle(&mut self, event: InputEvent) -> Control {
        use DragState::*;

        match (event, self.drag) {
            (InputEvent::PointerDown { button: Button::Primary, position }, Idle) => {
                log::debug!("drag started at {:?}", position);
                self.drag = Dragging { anchor: position };
            }
            (InputEvent::PointerMove { position }, Dragging { anchor }) => {
                self.pan_by(position - anchor);
                self.drag = Dragging { anchor: position };
            }
            (InputEvent::PointerUp { button: Button::Primary, .. }, Dragging { .. }) => {
                log::debug!("drag ended, pan offset is {:?}", self.pan_offset);
                self.drag = Idle;
            }
            (InputEvent::Scroll { delta }, _) => {
                match delta.signum() {
                    1 => self.zoom_in(),
                    -1 => self.zoom_out(),
                    _ => (),
                }
                log::debug!("zoom level is {}", self.zoom_level);
            }
            (InputEvent::Key(key), _) if key == SCREENSHOT_KEY => return Control::Screenshot,
            (InputEvent::Key(key), _) if key == QUIT_KEY || key == Key::Escape => return Control::Quit,
            (InputEvent::Resize { width, height }, _) => return Control::Resize(width, height),
            (InputEvent::Quit, _) => return Control::Quit,
            _ => (),
        }

        Control::Continue
    }
}

/// Everything the interactive backend was asked to draw, in order.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingSession {
    home: Point,
    current: Point,
    moves: Vec<Move>,
}

impl DrawingSession {
    pub fn new(home: Point) -> Self {
        Self {
            home,
            current: home,
            moves: Vec::new(),
        }
    }

    pub fn home(&self) -> Point {
        self.home
    }

    pub fn current(&self) -> Point {
        self.current
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn record(&mut self, target: Point, pen_down: bool) {
        log::trace!("recorded move to {:?}, pen down: {}", target, pen_down);
        self.moves.push(Move { target, pen_down });
        self.current = target;
    }

    /// Travels back to `home`; the travel is recorded so that later
    /// segments start from the right place.
    pub fn go_home(&mut self) {
        self.record(self.home, false);
    }

    /// Redraws the whole history through `view`.
    pub fn render<C: Canvas + ?Sized>(&self, view: &ViewState, canvas: &mut C, ink: RGBA8) {
        let width = view.line_width();
        let mut prev = self.home;

        for m in &self.moves {
            if m.pen_down {
                canvas.draw_line(view.to_screen(prev), view.to_screen(m.target), width, ink);
            }
            prev = m.target;
        }
    }
}

/// Shows `session` until the user closes the view.
///
/// Each frame is redrawn from scratch, then pending input is handled.
pub fn run_session<C: Canvas + ?Sized>(
    canvas: &mut C,
    session: &DrawingSession,
    view: &mut ViewState,
    config: &ViewerConfig,
) {
    log::info!("viewing {} moves", session.moves().len());

    loop {
        canvas.fill(config.background);
        session.render(view, canvas, config.ink);
        canvas.present();

        for event in canvas.poll_events() {
            match view.handle(event) {
                Control::Continue => (),
                Control::Resize(width, height) => canvas.resize(width, height),
                Control::Screenshot => {
                    if let Err(e) = canvas.save_frame(&config.screenshot_path) {
                        log::warn!("{}", e);
                    }
                }
                Control::Quit => {
                    log::info!("view closed");
                    return;
                }
            }
        }
    }
}
