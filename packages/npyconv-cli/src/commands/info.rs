use crate::cli::InfoArgs;
use crate::exit_codes;
use crate::output;
use npyconv_rs::{DEFAULT_NUM_WINDOWS, DEFAULT_TOLERANCE};
use serde::Serialize;

#[derive(Serialize)]
struct InfoOutput {
    cli_version: String,
    platform: String,
    arch: String,
    supported_formats: Vec<&'static str>,
    default_windows: usize,
    default_tolerance: f64,
}

pub fn execute(args: InfoArgs) -> i32 {
    let info = InfoOutput {
        cli_version: env!("CARGO_PKG_VERSION").to_string(),
        platform: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        supported_formats: vec!["npy"],
        default_windows: DEFAULT_NUM_WINDOWS,
        default_tolerance: DEFAULT_TOLERANCE,
    };

    if args.json {
        match output::to_json(&info) {
            Ok(json) => {
                if let Err(e) = output::write_output(&json, None) {
                    eprintln!("Error: {}", e);
                    return exit_codes::EXECUTION_ERROR;
                }
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                return exit_codes::EXECUTION_ERROR;
            }
        }
    } else {
        println!("npyconv CLI v{}", info.cli_version);
        println!("Platform: {} ({})", info.platform, info.arch);
        println!();
        println!("Supported input formats: {}", info.supported_formats.join(", "));
        println!("Default window count: {}", info.default_windows);
        println!("Default overlap tolerance: {:e}", info.default_tolerance);
    }

    exit_codes::SUCCESS
}
