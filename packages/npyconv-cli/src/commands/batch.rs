use crate::cli::BatchArgs;
use crate::exit_codes;
use crate::params;
use npyconv_rs::deoverlap_file;
use npyconv_rs::mat::save_mat;
use std::path::Path;
use std::time::Instant;

pub fn execute(args: BatchArgs) -> i32 {
    let files = match resolve_files(&args) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("Error: {}", msg);
            return exit_codes::INPUT_ERROR;
        }
    };

    if files.is_empty() {
        eprintln!("Error: No matching files found");
        return exit_codes::INPUT_ERROR;
    }

    if args.dry_run {
        for f in &files {
            println!("{}", f);
        }
        if !args.quiet {
            eprintln!("Found {} file(s)", files.len());
        }
        return exit_codes::SUCCESS;
    }

    if let Some(ref dir) = args.output_dir {
        if let Err(e) = std::fs::create_dir_all(dir) {
            eprintln!("Error: Failed to create output directory '{}': {}", dir, e);
            return exit_codes::EXECUTION_ERROR;
        }
    }

    let total = files.len();
    let mut succeeded = 0usize;
    let start_time = Instant::now();

    // Sequential, not fault-isolated: the first failing file aborts the
    // whole run.
    for (i, file_path) in files.iter().enumerate() {
        if !args.quiet {
            eprintln!("[{}/{}] {}...", i + 1, total, file_path);
        }

        if let Err(msg) = params::validate_file(file_path) {
            eprintln!("  Error: {}", msg);
            break;
        }

        let request = match params::build_request(
            file_path,
            args.windows,
            args.tolerance,
            args.strict,
            None,
        ) {
            Ok(r) => r,
            Err(msg) => {
                eprintln!("  Error: {}", msg);
                break;
            }
        };

        let result = match deoverlap_file(&request) {
            Ok(r) => r,
            Err(e) => {
                eprintln!("  Error: {}", e);
                break;
            }
        };

        if !args.quiet {
            eprintln!(
                "  Inferred stride: {} (window length {}), {} samples",
                result.stride,
                result.window_length,
                result.signal.len()
            );
        }

        let out_path = output_path_for(file_path, args.windows, args.output_dir.as_deref());
        if let Err(e) = save_mat(&out_path, &result.variable_name, &result.signal, &result.time) {
            eprintln!("  Error: {}", e);
            break;
        }

        if !args.quiet {
            eprintln!(
                "  Saved {}: variable '{}' length {}",
                out_path.display(),
                result.variable_name,
                result.signal.len()
            );
        }
        succeeded += 1;
    }

    let elapsed = start_time.elapsed();
    let failed = total - succeeded;

    if !args.quiet {
        if failed == 0 {
            eprintln!(
                "Batch complete: {}/{} succeeded, {:.1}s",
                succeeded,
                total,
                elapsed.as_secs_f64()
            );
        } else {
            eprintln!(
                "Batch aborted after failure: {}/{} succeeded, {:.1}s",
                succeeded,
                total,
                elapsed.as_secs_f64()
            );
        }
    }

    if failed == 0 {
        exit_codes::SUCCESS
    } else if succeeded > 0 {
        exit_codes::PARTIAL_FAILURE
    } else {
        exit_codes::EXECUTION_ERROR
    }
}

fn output_path_for(
    input: &str,
    windows: usize,
    output_dir: Option<&str>,
) -> std::path::PathBuf {
    let default = params::default_mat_path(input, windows);
    match output_dir {
        Some(dir) => {
            let name = default
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "output.mat".into());
            Path::new(dir).join(name)
        }
        None => default,
    }
}

fn resolve_files(args: &BatchArgs) -> Result<Vec<String>, String> {
    if let Some(ref pattern) = args.glob {
        resolve_glob(pattern)
    } else if let Some(ref files) = args.files {
        Ok(files.clone())
    } else {
        Err("One of --glob or --files must be specified".to_string())
    }
}

fn resolve_glob(pattern: &str) -> Result<Vec<String>, String> {
    let paths =
        glob::glob(pattern).map_err(|e| format!("Invalid glob pattern '{}': {}", pattern, e))?;

    let mut files: Vec<String> = Vec::new();
    for entry in paths {
        match entry {
            Ok(path) => {
                if path.is_file() {
                    if let Some(s) = path.to_str() {
                        files.push(s.to_string());
                    }
                }
            }
            Err(e) => {
                eprintln!("Warning: glob error: {}", e);
            }
        }
    }
    files.sort();
    Ok(files)
}
