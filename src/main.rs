//! gymattend entrypoint.

use gymattend::run;
use gymattend::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
