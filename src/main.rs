// src/main.rs

use std::env;
use std::error::Error;
use std::path::PathBuf;

use ground_mask_viewer::crate_version;
use ground_mask_viewer::data_input::test_cases::TEST_CASES;
use ground_mask_viewer::driver;
use ground_mask_viewer::viewer::WindowViewer;

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [data_dir]");
    eprintln!();
    eprintln!("Shows each LiDAR range image next to its ground mask, one window per test case.");
    eprintln!("Matrix paths are resolved relative to data_dir (default: current directory).");
    eprintln!("Close a window (or press Esc / q) to continue with the next test case.");
    eprintln!();
    eprintln!("Logging verbosity follows RUST_LOG (default: ground_mask_viewer=info).");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ground_mask_viewer=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("ground_mask_viewer");

    let mut data_dir: Option<PathBuf> = None;
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(program);
                return Ok(());
            }
            "-V" | "--version" => {
                println!("{program} {}", crate_version());
                return Ok(());
            }
            flag if flag.starts_with('-') => {
                eprintln!("Error: unknown option '{flag}'");
                print_usage(program);
                std::process::exit(1);
            }
            dir => {
                if data_dir.is_some() {
                    eprintln!("Error: more than one data directory given");
                    print_usage(program);
                    std::process::exit(1);
                }
                data_dir = Some(PathBuf::from(dir));
            }
        }
    }
    let data_dir = data_dir.unwrap_or_else(|| PathBuf::from("."));

    let mut viewer = WindowViewer;
    driver::run(&TEST_CASES, &data_dir, &mut viewer)?;
    Ok(())
}
