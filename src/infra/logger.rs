use env_logger::{Builder, Env};
use log::Level;
use std::io::Write;

fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "error",
        1 => "warn",
        2 => "info",
        _ => "debug",
    }
}

fn level_color(level: Level) -> &'static str {
    match level {
        Level::Error => "31",
        Level::Warn => "33",
        Level::Info => "32",
        Level::Debug => "36",
        Level::Trace => "35",
    }
}

pub fn setup_logger(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let env = Env::default().filter_or("SRCBUNDLE_LOG_LEVEL", level_for(verbosity));

    // try_init: tests set the logger more than once per process.
    Builder::from_env(env)
        .format(|buf, record| {
            writeln!(
                buf,
                "\x1B[{}m[{}]\x1B[0m [{}] {}",
                level_color(record.level()),
                record.level(),
                buf.timestamp(),
                record.args()
            )
        })
        .format_timestamp_secs()
        .try_init()
}
