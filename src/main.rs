//! opsboard main entrypoint.

use opsboard::run;
use opsboard::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
