use anyhow::Result;
use clap::{App, load_yaml, value_t};
use env_logger::Builder;
use libc::pid_t;
use log::info;
use log::LevelFilter::*;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let pid = value_t!(args, "pid", pid_t)?;

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("querying process table for pid {}", pid);

    let snapshot = kinfo::lookup(pid)?;
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
