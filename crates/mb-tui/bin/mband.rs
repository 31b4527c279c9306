//! mband terminal client
//!
//! Main entry point: connects the account prompts and the character
//! birth flow to a terminal.

use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use mb_core::GameRng;
use mb_core::birth::BirthFlow;
use mb_core::quickstart::{self, QuickStart};
use mb_tui::session;
use mb_tui::{App, Theme};

/// mband terminal client
#[derive(Parser, Debug)]
#[command(name = "mband")]
#[command(author, version, about = "mband - create a character and play", long_about = None)]
struct Args {
    /// Account name
    #[arg(short = 'u', long = "name")]
    name: Option<String>,

    /// Game server, host or host:port (skips the metaserver)
    #[arg(short = 's', long = "server")]
    server: Option<String>,

    /// Metaserver address
    #[arg(long = "meta", default_value = "meta.mband.org:8802")]
    meta: String,

    /// RNG seed (random if omitted)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Force the light terminal theme
    #[arg(long = "light")]
    light: bool,

    /// Skip the quick-start prompt even when a previous character exists
    #[arg(long = "no-quickstart")]
    no_quickstart: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    // Resolve the server list before touching the terminal; a failed
    // fetch degrades to manual entry inside the UI.
    let (servers, server) = if let Some(ref addr) = args.server {
        (None, Some(session::parse_manual_server(addr)))
    } else {
        match session::fetch_server_list(&args.meta) {
            Ok(list) => (Some(list), None),
            Err(e) => {
                eprintln!("metaserver unavailable: {e}");
                (None, None)
            }
        }
    };

    let quick = if args.no_quickstart {
        None
    } else {
        QuickStart::load(&quickstart::default_path()).ok()
    };

    let theme = if args.light {
        Theme::light()
    } else {
        Theme::detect()
    };

    let flow_rng = match args.seed {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    };
    let ui_rng = GameRng::from_entropy();
    let flow = BirthFlow::new(flow_rng, quick);
    let mut app = App::new(flow, theme, ui_rng, servers, server, args.name);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);

            if app.should_quit() {
                break;
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Some(sheet) = app.sheet() {
        if let Err(e) = QuickStart::from_sheet(sheet).save(&quickstart::default_path()) {
            eprintln!("could not record quick-start data: {e}");
        }
        println!(
            "{} the {} {} {} is ready.",
            app.account_name(),
            sheet.sex.title(),
            sheet.race.name,
            sheet.class.name
        );
        if let Some(server) = app.server() {
            println!("Connect to {}:{} to play.", server.name, server.port);
        }
    }

    Ok(())
}
