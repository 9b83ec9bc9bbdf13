mod codegen;
mod config;
mod error;
mod file_utils;

use std::path::{Path, PathBuf};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let dir = target_dir_from_args();
    run(&dir)?;

    Ok(())
}

/// First non-flag argument selects the target directory; defaults to the
/// current working directory.
fn target_dir_from_args() -> PathBuf {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .next()
        .unwrap_or_else(|| PathBuf::from("."))
}

fn run(dir: &Path) -> error::Result<()> {
    let identifiers = file_utils::scan_directory(dir)?;
    let document = codegen::render_drawable_map(&identifiers);

    let out_path = dir.join(config::OUTPUT_FILENAME);
    codegen::write_output(&out_path, &document)?;

    log::info!(
        "Wrote {} drawable entries to {:?}",
        identifiers.len(),
        out_path
    );

    Ok(())
}
