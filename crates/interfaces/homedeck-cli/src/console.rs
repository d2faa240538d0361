use std::io::{self, BufRead, IsTerminal, Write};

use homedeck_app_core::{Navigator, Notifier};
use homedeck_core::LinkTarget;

/// Prints the message and, on a terminal, waits for Enter like a modal alert.
pub struct ConsoleNotifier {
    wait_for_ack: bool,
}

impl ConsoleNotifier {
    pub fn new(wait_for_ack: bool) -> Self {
        Self { wait_for_ack }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&self, message: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{message}");

        let stdin = io::stdin();
        if !self.wait_for_ack || !stdin.is_terminal() {
            return;
        }
        let _ = write!(out, "[press Enter to continue]");
        let _ = out.flush();
        drop(out);

        let mut line = String::new();
        let _ = stdin.lock().read_line(&mut line);
    }
}

/// A terminal cannot open tabs; it prints where the browser would go.
pub struct PrintNavigator;

impl Navigator for PrintNavigator {
    fn navigate(&self, target: &LinkTarget) {
        println!("{} (target {})", target.url, target.window.as_attr());
    }
}
