//! Tile Garden entry point
//!
//! The native build is a line-oriented driver: a background ticker advances
//! the garden while commands are read from stdin. The web build is driven
//! from JS through `tile_garden::web`.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::io::{self, BufRead, Write};
    use std::sync::mpsc;

    use tile_garden::platform::ticker::period_from_ms;
    use tile_garden::platform::{FileStorage, Ticker};
    use tile_garden::{GardenSession, Settings, Storage};

    const HELP: &str = "commands: t ROW COL | tick | seed [CHANCE] | reset | pause | show | help | quit";

    enum Event {
        Tick,
        Line(String),
        Eof,
    }

    #[derive(Debug, PartialEq)]
    enum Command {
        Toggle(usize, usize),
        Tick,
        Seed(Option<f64>),
        Reset,
        Pause,
        Show,
        Help,
        Quit,
    }

    fn parse_command(line: &str) -> Result<Command, String> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Command::Show);
        };
        let number = |s: Option<&str>, what: &str| -> Result<usize, String> {
            s.ok_or_else(|| format!("missing {what}"))?
                .parse()
                .map_err(|_| format!("bad {what}"))
        };
        match head {
            "t" | "toggle" => {
                let row = number(parts.next(), "row")?;
                let col = number(parts.next(), "column")?;
                Ok(Command::Toggle(row, col))
            }
            "tick" => Ok(Command::Tick),
            "seed" | "random" => match parts.next() {
                Some(s) => s
                    .parse()
                    .map(|c| Command::Seed(Some(c)))
                    .map_err(|_| "bad chance".to_string()),
                None => Ok(Command::Seed(None)),
            },
            "reset" => Ok(Command::Reset),
            "p" | "pause" => Ok(Command::Pause),
            "show" => Ok(Command::Show),
            "help" | "?" => Ok(Command::Help),
            "q" | "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}'")),
        }
    }

    fn print_garden<S: Storage>(session: &GardenSession<S>) {
        let grid = session.grid();
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for row in grid.render_rows() {
            let _ = writeln!(out, "{row}");
        }
        let _ = writeln!(
            out,
            "[{}] planted {} / blooming {}",
            if session.is_running() { "running" } else { "paused" },
            grid.planted_count(),
            grid.bloom_count()
        );
    }

    pub fn run() {
        env_logger::init();
        log::info!("Tile Garden (native) starting...");

        let data_dir = std::env::args()
            .nth(1)
            .unwrap_or_else(|| "tile_garden_data".to_string());
        let store = FileStorage::new(&data_dir);
        let settings = Settings::load(&store);
        let mut session = GardenSession::from_settings(store, &settings);
        log::info!("Saving to {}", session.store().dir().display());

        let (tx, rx) = mpsc::channel::<Event>();

        let tick_tx = tx.clone();
        let ticker = Ticker::start(period_from_ms(settings.tick_ms), move || {
            let _ = tick_tx.send(Event::Tick);
        });

        std::thread::spawn(move || {
            for line in io::stdin().lock().lines() {
                match line {
                    Ok(line) => {
                        if tx.send(Event::Line(line)).is_err() {
                            return;
                        }
                    }
                    Err(e) => {
                        log::warn!("stdin error: {}", e);
                        break;
                    }
                }
            }
            let _ = tx.send(Event::Eof);
        });

        println!("{HELP}");
        print_garden(&session);

        for event in rx {
            match event {
                Event::Tick => {
                    session.on_tick();
                }
                Event::Eof => break,
                Event::Line(line) => match parse_command(&line) {
                    Ok(Command::Toggle(row, col)) => {
                        if session.on_user_toggle(row, col).is_none() {
                            println!("({row}, {col}) is outside the garden");
                        }
                        print_garden(&session);
                    }
                    Ok(Command::Tick) => {
                        session.on_tick();
                        print_garden(&session);
                    }
                    Ok(Command::Seed(chance)) => {
                        session.randomize_seed(chance.unwrap_or(settings.seed_chance));
                        print_garden(&session);
                    }
                    Ok(Command::Reset) => {
                        session.reset();
                        print_garden(&session);
                    }
                    Ok(Command::Pause) => {
                        session.toggle_running();
                        print_garden(&session);
                    }
                    Ok(Command::Show) => print_garden(&session),
                    Ok(Command::Help) => println!("{HELP}"),
                    Ok(Command::Quit) => break,
                    Err(msg) => println!("{msg}; {HELP}"),
                },
            }
        }

        drop(ticker);
        if let Err(e) = session.save_now() {
            log::warn!("Final save failed: {}", e);
        }
        log::info!("Goodbye");
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is tile_garden::web::wasm_start, this is just to satisfy the compiler
}
