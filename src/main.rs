//! PeerTodo - personal todo lists that persist between runs

use std::process::ExitCode;

fn main() -> ExitCode {
    if let Err(e) = peertodo::cli::run() {
        eprintln!("Error: {:#}", e);
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
