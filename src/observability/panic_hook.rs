//! Panic hook that prints a short crash report instead of a bare backtrace.

use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let message = payload_message(info);
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown location".to_string());
        eprintln!("{}", crash_report(&message, &location));
    }));
}

fn payload_message(info: &PanicHookInfo<'_>) -> String {
    info.payload()
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| info.payload().downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic payload".to_string())
}

fn crash_report(message: &str, location: &str) -> String {
    format!(
        "\nreadiness {VERSION} crashed ({os}, {time})\n  {message}\n  at {location}\n\nSet RUST_BACKTRACE=1 for a backtrace.",
        os = std::env::consts::OS,
        time = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
    )
}
