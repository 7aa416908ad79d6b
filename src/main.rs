//! SoundEmbed - Audio Asset Embedder

use clap::Parser;
use std::path::PathBuf;
use std::process;
use soundembed::{init_logging, Args, Config, Converter, EmbedError, Result};

fn main() {
    let args = Args::parse();
    let save_config = args.save_config.clone();

    let result = Config::from_args_and_config(args).and_then(|config| {
        init_logging(config.verbose());
        run(config, save_config)
    });

    if let Err(e) = result {
        match e {
            // Printed on stdout, like the original converter script
            EmbedError::InputNotFound { .. } => println!("Error: {}", e),
            _ => eprintln!("Error: {}", e),
        }
        process::exit(1);
    }
}

fn run(config: Config, save_config: Option<PathBuf>) -> Result<()> {
    if config.verbose() {
        println!("{}", soundembed::get_library_info());
    }

    if let Some(path) = save_config {
        config.save_to_file(&path)?;
        println!("Config written to {}", path.display());
        return Ok(());
    }

    if config.verbose() {
        println!("Input: {}", config.input_path.display());
        println!("Output: {}", config.output_path.display());
        println!("Constant: {}", config.identifier());
    }

    let report = Converter::new(config)?.convert()?;
    println!("{}", report);

    if report.verified {
        println!("Verified: {} bytes round-trip", report.input_bytes);
    }

    Ok(())
}
