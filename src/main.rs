//! main.rs
//! Entry point for lsx

use lsx::app::Lister;
use lsx::config::Config;
use lsx::core::{stdout_is_terminal, terminal_width};
use lsx::utils::cli::{CliAction, handle_args};
use lsx::utils::init_logging;

use std::io::{self, BufWriter, ErrorKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let options = match handle_args() {
        CliAction::List(options) => options,
        CliAction::Exit => return ExitCode::SUCCESS,
    };

    let config = Config::load();
    let painter = config.painter(stdout_is_terminal());
    let width = terminal_width(config.general().fallback_width());
    let lister = Lister::new(&config, options.mode(), painter, width);

    let mut out = BufWriter::new(io::stdout().lock());
    let mut err = io::stderr().lock();

    match lister.run(options.paths(), &mut out, &mut err) {
        Ok(()) => ExitCode::SUCCESS,
        // e.g. `lsx | head`
        Err(e) if e.kind() == ErrorKind::BrokenPipe => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("lsx: {}", e);
            ExitCode::FAILURE
        }
    }
}
