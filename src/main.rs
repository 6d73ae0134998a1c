// cointoss: interactive coin toss simulator with a virtualized sequence view

mod sim;
mod ui;
mod window;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ui::App;

/// Starting toss count when none is given on the command line
const DEFAULT_TOSSES: usize = 100;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();

    let initial_tosses = match args.get(1) {
        None => DEFAULT_TOSSES,
        Some(raw) => match raw.parse::<usize>() {
            Ok(n) => n,
            Err(_) => {
                let program_name = args.first().map(|s| s.as_str()).unwrap_or("cointoss");
                eprintln!("Error: '{}' is not a valid toss count", raw);
                eprintln!();
                eprintln!("Usage: {} [tosses]", program_name);
                eprintln!();
                eprintln!("Examples:");
                eprintln!("  {}                # start with {} tosses", program_name, DEFAULT_TOSSES);
                eprintln!("  {} 100000         # start with a hundred thousand", program_name);
                std::process::exit(1);
            }
        },
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(initial_tosses);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
