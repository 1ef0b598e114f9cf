use crate::cli::ValidateArgs;
use crate::exit_codes;
use crate::output;
use npyconv_rs::npy::read_npy_header;
use npyconv_rs::FileType;
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
struct ValidateOutput {
    file: String,
    exists: bool,
    readable: bool,
    supported: bool,
    dtype: Option<String>,
    shape: Option<Vec<usize>>,
    error: Option<String>,
}

pub fn execute(args: ValidateArgs) -> i32 {
    let path = Path::new(&args.file);

    let exists = path.exists();
    let readable = path.is_file() && std::fs::File::open(path).is_ok();

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let supported = FileType::from_extension(extension).is_some();

    // Probe the header only; the payload is not loaded.
    let (dtype, shape, header_error) = if exists && readable && supported {
        match read_npy_header(path) {
            Ok(header) => (Some(header.descr), Some(header.shape), None),
            Err(e) => (None, None, Some(e.to_string())),
        }
    } else {
        (None, None, None)
    };

    let error = if !exists {
        Some(format!("File not found: {}", args.file))
    } else if !readable {
        Some(format!("File is not readable: {}", args.file))
    } else if !supported {
        Some(format!(
            "Unsupported file extension '{}'. Supported: npy",
            extension
        ))
    } else {
        header_error
    };

    let result = ValidateOutput {
        file: args.file.clone(),
        exists,
        readable,
        supported,
        dtype: dtype.clone(),
        shape: shape.clone(),
        error: error.clone(),
    };

    if args.json {
        match output::to_json(&result) {
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
    } else if let Some(ref err) = error {
        eprintln!("Error: {}", err);
    } else {
        println!(
            "File '{}' is valid ({}, shape {:?})",
            args.file,
            dtype.unwrap_or_default(),
            shape.unwrap_or_default()
        );
    }

    if error.is_some() {
        exit_codes::INPUT_ERROR
    } else {
        exit_codes::SUCCESS
    }
}
