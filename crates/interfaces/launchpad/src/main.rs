#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = launchpad_ui::run() {
        eprintln!("LaunchPad failed: {err}");
        std::process::exit(1);
    }
}
