use crate::geometry::is_finite;
use crate::geometry::Float;
use crate::geometry::Point;

use core::str::FromStr;
use core::str::SplitWhitespace;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Button {
    Primary,
    Secondary,
    Middle,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

pub const SCREENSHOT_KEY: Key = Key::Char('s');
pub const QUIT_KEY: Key = Key::Char('q');

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown { button: Button, position: Point },
    PointerMove { position: Point },
    PointerUp { button: Button, position: Point },
    /// positive zooms in, negative zooms out
    Scroll { delta: i32 },
    Key(Key),
    Resize { width: u32, height: u32 },
    Quit,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct InvalidEvent;

fn next<T: FromStr>(words: &mut SplitWhitespace) -> Result<T, InvalidEvent> {
    words.next().ok_or(InvalidEvent)?.parse().map_err(|_| InvalidEvent)
}

fn position(words: &mut SplitWhitespace) -> Result<Point, InvalidEvent> {
    let x: Float = next(words)?;
    let y: Float = next(words)?;
    let p = Point::new(x, y);
    match is_finite(p) {
        true => Ok(p),
        false => Err(InvalidEvent),
    }
}

fn button(words: &mut SplitWhitespace) -> Result<Button, InvalidEvent> {
    match words.next() {
        None | Some("primary") | Some("left") => Ok(Button::Primary),
        Some("secondary") | Some("right") => Ok(Button::Secondary),
        Some("middle") => Ok(Button::Middle),
        Some(_) => Err(InvalidEvent),
    }
}

/// Text form, one event per line:
///
/// | line                  | event                     |
/// |-----------------------|---------------------------|
/// | `down X Y [button]`   | `PointerDown`             |
/// | `move X Y`            | `PointerMove`             |
/// | `up X Y [button]`     | `PointerUp`               |
/// | `scroll N`            | `Scroll`                  |
/// | `zoom-in`, `zoom-out` | `Scroll` of +1 / -1       |
/// | `key C`               | `Key(Char(C))`            |
/// | `escape`              | `Key(Escape)`             |
/// | `resize W H`          | `Resize`                  |
/// | `quit`                | `Quit`                    |
impl FromStr for InputEvent {
    type Err = InvalidEvent;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let words = &mut words;

        let event = match words.next().ok_or(InvalidEvent)? {
            "down" => {
                let position = position(words)?;
                InputEvent::PointerDown { button: button(words)?, position }
            }
            "move" => InputEvent::PointerMove { position: position(words)? },
            "up" => {
                let position = position(words)?;
                InputEvent::PointerUp { button: button(words)?, position }
            }
            "scroll" => InputEvent::Scroll { delta: next(words)? },
            "zoom-in" => InputEvent::Scroll { delta: 1 },
            "zoom-out" => InputEvent::Scroll { delta: -1 },
            "key" => {
                let mut chars = words.next().ok_or(InvalidEvent)?.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => InputEvent::Key(Key::Char(c)),
                    _ => return Err(InvalidEvent),
                }
            }
            "escape" => InputEvent::Key(Key::Escape),
            "resize" => InputEvent::Resize {
                width: next(words)?,
                height: next(words)?,
            },
            "quit" => InputEvent::Quit,
            _ => return Err(InvalidEvent),
        };

        match words.next() {
            None => Ok(event),
            Some(_) => Err(InvalidEvent),
        }
    }
}
