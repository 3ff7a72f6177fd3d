use clap::Parser;
use vkdeck::cli::Cli;
use vkdeck::io::paths;

fn main() {
    let cli = Cli::parse();
    let data_dir = paths::data_dir(cli.data_dir);

    if let Err(e) = vkdeck::tui::run(data_dir) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
