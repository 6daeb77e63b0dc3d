use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};

use bracketlight::config::{self, Config};
use bracketlight::libs::term_size;
use bracketlight::{ansi, log, println_stderr, rcfile};
use bracketlight::{parse_keys, prompt_width, ActivePolicy, MoveStyle, Paint, Screen, Session};

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ", built ", env!("BUILD_DATE"), ")"
);

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One line of op names per key press
    Ops,
    /// Escape sequences with ESC shown as ^[
    Escaped,
    /// Escape sequences written to the terminal
    Raw,
}

#[derive(Debug, Parser)]
#[command(name = "bracketlight", version = VERSION,
    about = "Replay cursor keys over a command line and show the bracket highlighting output")]
struct Opt {
    /// Command line as typed, the cursor starts at its end
    command_line: String,

    /// Key script, e.g. "left(6) right(6) enter"
    #[arg(short, long, default_value = "enter")]
    keys: String,

    /// Prompt shown before the command line
    #[arg(short, long, default_value = "$ ")]
    prompt: String,

    /// Terminal width in columns [default: tty width, or 80]
    #[arg(short, long)]
    width: Option<usize>,

    /// Do not highlight matching brackets
    #[arg(long)]
    no_character_highlight: bool,

    /// Ends of a pair to paint: both, partner
    #[arg(long, value_parser = config::parse_paint)]
    paint: Option<Paint>,

    /// How to reach a bracket: relative, line-start
    #[arg(long, value_parser = config::parse_move_style)]
    move_style: Option<MoveStyle>,

    /// Which bracket is active: under-cursor, left-then-under
    #[arg(long, value_parser = config::parse_active)]
    active_bracket: Option<ActivePolicy>,

    #[arg(short, long, value_enum, default_value_t = Format::Ops)]
    format: Format,

    /// Read settings from this file instead of ~/.bracketlightrc
    #[arg(long)]
    rcfile: Option<String>,
}

fn load_config(opt: &Opt) -> Config {
    let mut config = Config::default();
    match &opt.rcfile {
        Some(path) => rcfile::load_rcfile_from(path, &mut config),
        None => rcfile::load_rcfile(&mut config),
    }

    if opt.no_character_highlight {
        config.enabled = false;
    }
    if let Some(x) = opt.paint {
        config.paint = x;
    }
    if let Some(x) = opt.move_style {
        config.moves = x;
    }
    if let Some(x) = opt.active_bracket {
        config.active = x;
    }
    config
}

fn main() {
    let opt = Opt::parse();
    let config = load_config(&opt);

    let width = match opt.width {
        Some(0) => {
            println_stderr!("bracketlight: width must be at least 1");
            process::exit(1);
        }
        Some(x) => x,
        None => term_size::columns_or(80),
    };

    let keys = match parse_keys(&opt.keys) {
        Ok(x) => x,
        Err(e) => {
            println_stderr!("bracketlight: {}", e);
            process::exit(1);
        }
    };

    let screen = Screen::new(prompt_width(&opt.prompt), width);
    let mut session = Session::new(&opt.command_line, screen, &config);
    log!("replay {:?} keys={:?} width={} config={:?}", opt.command_line, opt.keys, width, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let result = match opt.format {
        Format::Ops => {
            let mut r = Ok(());
            for key in &keys {
                let ops = session.press(*key);
                r = writeln!(out, "{:?}: {}", key, ansi::describe(&ops));
                if r.is_err() {
                    break;
                }
            }
            r
        }
        Format::Escaped => {
            let ops = session.press_all(&keys);
            writeln!(out, "{}", ansi::escape_visible(&ansi::encode(&ops, &config.style)))
        }
        Format::Raw => {
            let ops = session.press_all(&keys);
            write!(out, "{}{}{}", opt.prompt, opt.command_line, ansi::encode(&ops, &config.style))
                .and_then(|_| writeln!(out))
        }
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        log!("write error: {:?}", e);
        process::exit(1);
    }
}
