//! shline command-line entry point.

use shline::config::Config;
use shline::input::Source;
use shline::output::render;
use shline::shell::parse_script;

use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    let arg = env::args().nth(1);
    let source = Source::from_arg(arg.as_deref());

    let script = match source.read() {
        Ok(s) => s,
        Err(e) => {
            eprintln!("shline: {e}");
            return ExitCode::FAILURE;
        }
    };

    // A broken config should not fail the run; warn and use defaults.
    let cwd = env::current_dir().ok();
    let config = match Config::load(cwd.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("shline: config error: {e}");
            Config::default()
        }
    };

    let commands = parse_script(&script);

    match render(&commands, &config) {
        Ok(out) => {
            println!("{out}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("shline: {e}");
            ExitCode::FAILURE
        }
    }
}
