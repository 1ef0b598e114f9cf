use crate::cli::CsvArgs;
use crate::exit_codes;
use crate::output;
use crate::params;
use npyconv_rs::npy::read_npy;

pub fn execute(args: CsvArgs) -> i32 {
    if let Err(msg) = params::validate_file(&args.file) {
        eprintln!("Error: {}", msg);
        return exit_codes::INPUT_ERROR;
    }

    let tensor = match read_npy(&args.file) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_codes::INPUT_ERROR;
        }
    };

    let out_path = args.output.clone().unwrap_or_else(|| {
        params::default_csv_path(&args.file)
            .to_string_lossy()
            .into_owned()
    });

    if let Err(msg) = output::write_csv(&tensor, &out_path) {
        eprintln!("Error: {}", msg);
        return exit_codes::EXECUTION_ERROR;
    }

    if !args.quiet {
        eprintln!("Converted {} to {}", args.file, out_path);
    }
    exit_codes::SUCCESS
}
