use std::path::PathBuf;

use anyhow::Result;
use clap::{arg, command};
use stackwm::Config;
use stackwm_core::{FlatStack, LayerGroup, Manager, StackPosition, WindowHandle};

fn main() -> Result<()> {
    let matches = command!("stackwm Check")
        .about("Checks the stacking configuration file")
        .help_template(stackwm::utils::get_help_template())
        .args(&[
            arg!(-v --verbose "Outputs the loaded configuration and a sample stacking."),
            arg!([INPUT] "Sets the input file to use. Uses the XDG config file otherwise."),
        ])
        .get_matches();

    let verbose = matches.get_flag("verbose");
    stackwm::utils::log::setup_logging(verbose.then_some("debug"))?;

    println!(
        "\x1b[0;94m::\x1b[0m stackwm version: {}",
        env!("CARGO_PKG_VERSION")
    );

    let path = match matches.get_one::<String>("INPUT") {
        Some(input) => PathBuf::from(input),
        None => stackwm::default_path()?,
    };
    println!(
        "\x1b[0;94m::\x1b[0m Loading configuration from {} . . .",
        path.display()
    );
    match stackwm::load_from_file(&path) {
        Ok(config) => {
            println!("\x1b[0;92m    -> Configuration loaded OK \x1b[0m");
            if verbose {
                dbg!(&config);
                sample_stacking(config)?;
            }
        }
        Err(err) => {
            println!("\x1b[1;91mERROR:\x1b[0m\x1b[1m Configuration failed. Reason: {err:?} \x1b[0m");
        }
    }
    Ok(())
}

/// Stack a handful of windows with the loaded settings and print the result.
fn sample_stacking(config: Config) -> Result<()> {
    let mut manager = Manager::new(config, FlatStack::<i32>::new());
    manager.add_window(WindowHandle(1));
    manager.add_window(WindowHandle(2));
    manager.add_window_at(WindowHandle(3), LayerGroup::Top, StackPosition::Top);
    manager.set_fullscreen(&WindowHandle(1), true);
    manager.on_focus_change(&WindowHandle(2));

    println!("\x1b[0;94m::\x1b[0m Sample stacking:");
    println!("{}", manager.stacking_info().to_json()?);
    let display_server = manager.shutdown();
    println!("    -> flat order {:?}", display_server.order());
    Ok(())
}
