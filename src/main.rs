use std::env::args;
use std::fmt;
use std::io::{self, Write as _};
use std::process::ExitCode;

use stringplot::*;

/// Stdout as a command sink for the device.
struct Stdout(io::Stdout);

impl fmt::Write for Stdout {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		self.0.write_all(s.as_bytes()).map_err(|_| fmt::Error)
	}
}

/// One event per stdin line, until EOF.
fn stdin_events() -> impl Iterator<Item = InputEvent> {
	io::stdin().lines().map_while(Result::ok).filter_map(|line| {
		let line = line.trim();
		if line.is_empty() {
			return None;
		}
		match line.parse() {
			Ok(event) => Some(event),
			Err(_) => {
				log::warn!("skipping unknown event {:?}", line);
				None
			}
		}
	})
}

fn run(routine: &str, backend: &str) -> PlotterResult<()> {
	let routine: Routine = routine.parse()?;

	let mut plotter = Plotter::open(
		backend,
		PlotterConfig::default(),
		|| Ok(CommandBuffer::new(Stdout(io::stdout()))),
		|viewer| {
			log::info!("reading view events from stdin, close with `quit` or EOF");
			RasterCanvas::new(viewer.width, viewer.height, stdin_events())
		},
	)?;

	routine.draw(&mut plotter, &StringArt::default())
}

fn main() -> ExitCode {
	env_logger::init();

	let mut args = args().skip(1);
	let (Some(routine), Some(backend)) = (args.next(), args.next()) else {
		eprintln!("usage: stringplot <routine> <physical|interactive>");
		return ExitCode::FAILURE;
	};

	match run(&routine, &backend) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			log::error!("{}", e);
			eprintln!("stringplot: {}", e);
			ExitCode::FAILURE
		}
	}
}
