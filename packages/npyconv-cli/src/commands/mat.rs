use crate::cli::MatArgs;
use crate::exit_codes;
use crate::params;
use npyconv_rs::mat::save_mat;
use npyconv_rs::deoverlap_file;

pub fn execute(args: MatArgs) -> i32 {
    if let Err(msg) = params::validate_file(&args.file) {
        eprintln!("Error: {}", msg);
        return exit_codes::INPUT_ERROR;
    }

    let request = match params::build_request(
        &args.file,
        args.windows,
        args.tolerance,
        args.strict,
        args.varname.clone(),
    ) {
        Ok(r) => r,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if !args.quiet {
        eprintln!("Converting {}...", args.file);
    }

    let result = match deoverlap_file(&request) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    if !args.quiet {
        eprintln!(
            "  Clipped windows: {} x {}",
            result.num_windows, result.window_length
        );
        eprintln!(
            "  Inferred stride: {} (window length {})",
            result.stride, result.window_length
        );
        eprintln!("  Flattened signal: {} samples", result.signal.len());
    }

    let out_path = args.output.clone().unwrap_or_else(|| {
        params::default_mat_path(&args.file, args.windows)
            .to_string_lossy()
            .into_owned()
    });

    if let Err(e) = save_mat(&out_path, &result.variable_name, &result.signal, &result.time) {
        eprintln!("Error: {}", e);
        return exit_codes::EXECUTION_ERROR;
    }

    if !args.quiet {
        eprintln!(
            "Saved {}: variable '{}' length {}",
            out_path,
            result.variable_name,
            result.signal.len()
        );
    }
    exit_codes::SUCCESS
}
