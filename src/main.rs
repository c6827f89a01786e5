//! main.rs
//! Entry point for lsdr

use lsdr::app::render_listing;
use lsdr::config::Config;
use lsdr::core::{ListError, terminal};
use lsdr::utils::cli::handle_args;

fn main() {
    let cli = handle_args();
    let config = Config::from_cli(&cli);

    let mut stderr = std::io::stderr();
    let rendered = match render_listing(&config, &mut stderr) {
        Ok(rendered) => rendered,
        Err(e) => fail(&e),
    };

    if let Err(e) = terminal::write_output(&rendered) {
        eprintln!("[lsdr] Error: cannot write output: {}", e);
        std::process::exit(1);
    }
}

fn fail(err: &ListError) -> ! {
    eprintln!("[lsdr] Error: {}", err);
    std::process::exit(1);
}
