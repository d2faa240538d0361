#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = homedeck_ui::run() {
        eprintln!("Homedeck failed: {err}");
        std::process::exit(1);
    }
}
