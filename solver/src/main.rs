use std::{env, process};

use solver::{
    config::{Settings, log_filter},
    options::Options,
    run,
};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var("RUST_LOG").ok().as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: Bad environment setting.");
            eprintln!("Details: {}.", e);
            process::exit(1);
        }
    };

    let args: Vec<String> = env::args().skip(1).collect();
    let options = match Options::parse_from_args(&args, &settings) {
        Ok(options) => options,
        Err(e) => e.exit(),
    };

    if let Err(e) = run::run(&options) {
        eprintln!("Error: {}.", e);
        process::exit(1);
    }
}
