use cfbs_check::cli;
use cfbs_check::ui::output;

fn main() {
    if let Err(error) = cli::run() {
        output::error(&error);
        std::process::exit(1);
    }
}
