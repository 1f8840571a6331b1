use clap::Parser;
use std::path::PathBuf;

/// Android app forensic artifact extractor and secret/endpoint scanner.
#[derive(Clone, Parser)]
#[command(name = "droidhound")]
#[command(about = "Extract APK and device artifacts, then scan them for secrets and endpoints.")]
pub struct Cli {
    /// Path to the APK file.
    #[arg(long, short = 'a', value_name = "APK")]
    pub apk: PathBuf,

    /// App package name (e.g. com.example.app).
    #[arg(long, short = 'p', value_name = "PACKAGE")]
    pub package: String,

    /// Output directory. Default: `<package>_output`.
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Device data directory. Default: `/data/data/<package>`.
    #[arg(long, short = 'd')]
    pub device_dir: Option<String>,

    /// Run MobSF static analysis (requires docker). Default: true.
    #[arg(long, short = 'm', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub mobsf: Option<bool>,

    /// Capture device traffic with mitmproxy while extracting.
    #[arg(long, short = 't', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub traffic: Option<bool>,

    /// Verbose output.
    #[arg(long, short = 'v', num_args = 0..=1, default_missing_value = "true", value_parser = clap::value_parser!(bool))]
    pub verbose: Option<bool>,

    /// Number of scan workers. Default: 5.
    #[arg(long, short = 'n', value_name = "N")]
    pub threads: Option<usize>,

    /// Skip extraction and scan an existing output tree.
    #[arg(long)]
    pub scan_only: bool,
}

impl Cli {
    /// Output directory, defaulting to `<package>_output` next to the cwd.
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}_output", self.package)))
    }

    /// Device data directory, defaulting to `/data/data/<package>`.
    pub fn device_dir(&self) -> String {
        self.device_dir
            .clone()
            .unwrap_or_else(|| format!("/data/data/{}", self.package))
    }
}
