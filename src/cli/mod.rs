//! Command line interface of `font2img`
use env_logger::Env;
use log::LevelFilter;

mod batch;
pub mod opt;

pub use batch::run;

/// Set up CLI
pub fn init<T: clap::Parser>() -> color_eyre::Result<T> {
    color_eyre::install()?;
    env_logger::Builder::new()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_env(Env::new().filter("FONT2IMG_LOG"))
        .init();
    let args = T::parse();
    Ok(args)
}
