use crate::control::LibraryControl;
use crate::error::{ConsoleError, StackTrace};
use crate::handler::Session;
use crate::terminal::Terminal;
use driver::storage::FileStorage;
use error_stack::ResultExt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

mod control;
mod controller;
mod error;
mod handler;
mod option;
mod request;
mod response;
mod terminal;

fn main() -> Result<(), StackTrace> {
    // stdout belongs to the menu, so logs only go to files.
    let appender = tracing_appender::rolling::daily(std::path::Path::new("./logs/"), "debug.log");
    let (non_blocking_appender, _guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::Layer::default()
                .with_writer(non_blocking_appender)
                .with_ansi(false)
                .with_filter(tracing_subscriber::EnvFilter::new(
                    std::env::var("RUST_LOG").unwrap_or_else(|_| {
                        "console=info,application=info,driver=info".into()
                    }),
                )),
        )
        .init();

    let storage = FileStorage::from_env()
        .change_context(ConsoleError::Config)
        .attach_printable("Check LIBRARY_DATA_FORMAT and LIBRARY_DATA_PATH")?;
    let session = Session::init(storage);

    let terminal = Terminal::new(std::io::stdin().lock(), std::io::stdout().lock());
    LibraryControl::new(session, terminal).control_loop()?;

    Ok(())
}
