// algotty: Step-Through Algorithm Visualizer with Time-Travel Playback

mod algorithms;
mod playback;
mod trace;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use playback::PlaybackController;
use ui::App;

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <algorithm> <inputs...>", program_name);
    eprintln!();
    eprintln!("Algorithms:");
    for algo in algorithms::registry() {
        eprintln!(
            "  {:<14} {:<24} {}",
            algo.name(),
            algo.usage(),
            algo.summary()
        );
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} triplet-sum \"-1,0,1,2,-1,-4\"", program_name);
    eprintln!("  {} min-window ADOBECODEBANC ABC", program_name);
    eprintln!("  {} build-tree \"3,9,20,15,7\" \"9,3,15,20,7\"", program_name);
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args
        .first()
        .map(|s| s.as_str())
        .unwrap_or("algotty")
        .to_string();

    if args.len() < 2 {
        eprintln!("Error: No algorithm specified");
        eprintln!();
        print_usage(&program_name);
        std::process::exit(1);
    }

    let algorithm = match algorithms::find(&args[1]) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&program_name);
            std::process::exit(1);
        }
    };

    // Generate the full trace up front; validation failures surface here,
    // before the terminal is put into raw mode
    eprintln!("Generating trace for '{}'...", algorithm.name());
    let trace = match algorithm.generate_trace(&args[2..]) {
        Ok(trace) => trace,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            eprintln!();
            eprintln!(
                "Usage: {} {} {}",
                program_name,
                algorithm.name(),
                algorithm.usage()
            );
            std::process::exit(1);
        }
    };
    eprintln!("Trace complete: {} snapshot(s).", trace.len());

    let mut controller = PlaybackController::new();
    controller.load(trace);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(controller, algorithm.name().to_string());
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
