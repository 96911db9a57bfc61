use env_logger::{Builder, Env};
use log::LevelFilter;
use std::io::Write;

/// Set up logging for the server and the command-line client.
///
/// Uploads, stored carrier images and failed requests are reported at info/warn/error;
/// codec internals (bits embedded, terminator position) only at debug, e.g.
/// `RUST_LOG=stegochat=debug`. Lines look like `[2024-05-01 12:00:00] [INFO] [src/web/handlers.rs:92] ...`.
pub fn init_logger() {
    Builder::new()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] [{}] [{}:{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .filter_level(LevelFilter::Info)
        .parse_env(Env::default())
        .init();
}
