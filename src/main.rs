//! rTimesheet main entrypoint.

use rtimesheet::errors::AppError;
use rtimesheet::run;
use rtimesheet::ui::messages::{error, warning};

fn main() {
    println!();
    match run() {
        Ok(()) => {}
        Err(e @ (AppError::NoInputFound(_) | AppError::InputFileMissing(_))) => {
            warning(&e);
            std::process::exit(e.exit_code());
        }
        Err(e) => {
            error(format!("Error: {e}"));
            std::process::exit(e.exit_code());
        }
    }
}
