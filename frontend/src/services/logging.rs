use log::Level;

/// Route the `log` facade to the browser console.
///
/// The level comes from `EXPENSE_LOG_LEVEL` at build time and defaults to
/// `info`.
pub fn init() {
    let level = parse_level(option_env!("EXPENSE_LOG_LEVEL"));
    wasm_logger::init(wasm_logger::Config::new(level));
    log::info!("Logging initialized at {} level", level);
}

fn parse_level(value: Option<&str>) -> Level {
    match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        Some("error") => Level::Error,
        Some("warn") | Some("warning") => Level::Warn,
        Some("debug") => Level::Debug,
        Some("trace") => Level::Trace,
        _ => Level::Info,
    }
}
