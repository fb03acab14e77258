//! worktime main entrypoint.

use worktime::run;

fn main() {
    if let Err(e) = run() {
        worktime::ui::messages::error(e);
        std::process::exit(1);
    }
}
