use flag_envs::{get_all_flags, Error, FlagSet};
use log::info;

const FLAGS: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/flags.toml");

fn main() -> Result<(), Error> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mut flags = FlagSet::from_toml_file("envs-demo", FLAGS)?;
    match flags.parse(std::env::args_os()) {
        Ok(()) => {}
        Err(Error::Cli(e)) => e.exit(),
        Err(e) => return Err(e),
    }

    // LISTEN_ADDR, DB_URL and READ_ONLY override the command line.
    get_all_flags(&mut flags)?;

    info!(
        "listening on {} (read-only: {})",
        flags.get("listen-addr").unwrap_or_default(),
        flags.get_bool("read-only").unwrap_or_default()
    );
    Ok(())
}
