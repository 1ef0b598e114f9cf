use clap::{Args, Parser, Subcommand};
use npyconv_rs::{DEFAULT_NUM_WINDOWS, DEFAULT_TOLERANCE};

#[derive(Parser)]
#[command(
    name = "npyconv",
    version,
    about = "NumPy tensor file converter (CSV and MATLAB export)",
    long_about = "Convert .npy tensor files to CSV tables or compressed MATLAB .mat files.\n\
                  The mat subcommand reconstructs a 1-D signal from a windowed tensor by\n\
                  inferring the hop between overlapping windows and removing the overlap."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a tensor file to CSV
    Csv(CsvArgs),
    /// De-overlap a windowed tensor and export it as a MATLAB .mat file
    Mat(MatArgs),
    /// Convert many tensor files to .mat in one run
    Batch(BatchArgs),
    /// Validate a tensor file
    Validate(ValidateArgs),
    /// Show version, defaults, and supported formats
    Info(InfoArgs),
}

#[derive(Args)]
pub struct CsvArgs {
    /// Input tensor file path (.npy)
    #[arg(long)]
    pub file: String,

    /// Output CSV path (default: input path with a .csv extension)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct MatArgs {
    /// Input tensor file path (.npy), shape (num_windows, window_length, axes)
    #[arg(long)]
    pub file: String,

    /// Output .mat path (default: <input stem>_clip<K>.mat)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Number of windows to keep (K)
    #[arg(long, default_value_t = DEFAULT_NUM_WINDOWS)]
    pub windows: usize,

    /// Absolute tolerance for overlap matching
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Fail instead of clamping when --windows exceeds the available count
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Override the exported variable name
    #[arg(long)]
    pub varname: Option<String>,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern selecting input files
    #[arg(long, conflicts_with = "files")]
    pub glob: Option<String>,

    /// Explicit list of input files
    #[arg(long, num_args = 1..)]
    pub files: Option<Vec<String>>,

    /// Directory for the .mat outputs (default: next to each input)
    #[arg(long)]
    pub output_dir: Option<String>,

    /// Number of windows to keep (K)
    #[arg(long, default_value_t = DEFAULT_NUM_WINDOWS)]
    pub windows: usize,

    /// Absolute tolerance for overlap matching
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    pub tolerance: f64,

    /// Fail instead of clamping when --windows exceeds the available count
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Print the resolved file list and exit
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Suppress progress messages on stderr
    #[arg(long, default_value_t = false)]
    pub quiet: bool,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Input tensor file path
    #[arg(long)]
    pub file: String,

    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
