use std::{io, path::PathBuf, time::Duration};

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde_json::json;
use stillcut::{
    FfmpegLogLevel, Remuxer, SizePreset, extract_thumbnails, probe_dimensions, probe_duration,
    resize_video_frame,
};

const CLI_AFTER_HELP: &str = "Examples:\n  stillcut probe input.mp4 --json\n  stillcut resize input.mp4 small.jpg --size small\n  stillcut resize input.mp4 banner.jpg --size 1280x720\n  stillcut convert movie.webm\n  stillcut thumbs movie.webm thumbnail.jpg\n  stillcut completions zsh > _stillcut";

#[derive(Debug, Parser)]
#[command(
    name = "stillcut",
    version,
    about = "Extract, resize, and remux video stills and containers",
    after_help = CLI_AFTER_HELP
)]
struct Cli {
    #[command(flatten)]
    global: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Parser, Clone, Default)]
struct GlobalOptions {
    /// FFmpeg log level (quiet, panic, fatal, error, warning, info, verbose, debug, trace).
    #[arg(long)]
    log_level: Option<String>,

    /// Allow overwriting existing output files.
    #[arg(long)]
    overwrite: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the native dimensions and duration of a media file.
    #[command(
        about = "Probe video dimensions and duration",
        visible_alias = "info",
        after_help = "Examples:\n  stillcut probe input.mp4\n  stillcut probe input.mp4 --json"
    )]
    Probe {
        /// Input media path.
        input: PathBuf,

        /// Output as machine-readable JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resize the first video frame into a JPEG still.
    #[command(
        about = "Resize the first video frame to a JPEG",
        after_help = "Examples:\n  stillcut resize input.mp4 small.jpg --size small\n  stillcut resize input.mp4 banner.jpg --size 1280x720"
    )]
    Resize {
        /// Input media path.
        input: PathBuf,
        /// Output JPEG path.
        output: PathBuf,
        /// Target size: small | medium | large | WIDTHxHEIGHT.
        #[arg(long)]
        size: String,
    },

    /// Remux a video into MP4 and extract a thumbnail set.
    #[command(
        about = "Convert container to MP4 and extract thumbnails",
        after_help = "Examples:\n  stillcut convert movie.webm\n  stillcut convert movie.webm --out movie.mp4 --format mp4 --no-thumbs"
    )]
    Convert {
        /// Input media path.
        input: PathBuf,
        /// Output container path.
        #[arg(long, default_value = "converted_video.mp4")]
        out: PathBuf,
        /// Force the output container format instead of inferring it from
        /// the extension.
        #[arg(long)]
        format: Option<String>,
        /// Base path for the thumbnail set.
        #[arg(long, default_value = "thumbnail.jpg")]
        thumbs: PathBuf,
        /// Skip thumbnail extraction.
        #[arg(long)]
        no_thumbs: bool,
    },

    /// Extract a representative thumbnail plus preset-sized derivatives.
    #[command(
        about = "Extract a thumbnail set",
        after_help = "Examples:\n  stillcut thumbs movie.webm thumbnail.jpg"
    )]
    Thumbs {
        /// Input media path.
        input: PathBuf,
        /// Base path for the thumbnail set; derivatives are written as
        /// siblings (<stem>_small.jpg, <stem>_medium.jpg, <stem>_large.jpg).
        #[arg(default_value = "thumbnail.jpg")]
        out: PathBuf,
    },

    /// Generate shell completions.
    #[command(about = "Generate shell completions")]
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

fn parse_log_level(value: &str) -> Option<FfmpegLogLevel> {
    match value.to_ascii_lowercase().as_str() {
        "quiet" => Some(FfmpegLogLevel::Quiet),
        "panic" => Some(FfmpegLogLevel::Panic),
        "fatal" => Some(FfmpegLogLevel::Fatal),
        "error" => Some(FfmpegLogLevel::Error),
        "warning" => Some(FfmpegLogLevel::Warning),
        "info" => Some(FfmpegLogLevel::Info),
        "verbose" => Some(FfmpegLogLevel::Verbose),
        "debug" => Some(FfmpegLogLevel::Debug),
        "trace" => Some(FfmpegLogLevel::Trace),
        _ => None,
    }
}

/// Parse `small`, `medium`, `large`, or an explicit `WIDTHxHEIGHT`.
fn parse_size(value: &str) -> Result<SizePreset, String> {
    match value.to_ascii_lowercase().as_str() {
        "small" | "s" => Ok(SizePreset::Small),
        "medium" | "m" => Ok(SizePreset::Medium),
        "large" | "l" => Ok(SizePreset::Large),
        custom => {
            let (width, height) = custom
                .split_once('x')
                .ok_or(format!("unsupported --size: {value}"))?;
            let width: u32 = width
                .parse()
                .map_err(|_| format!("invalid width in --size: {value}"))?;
            let height: u32 = height
                .parse()
                .map_err(|_| format!("invalid height in --size: {value}"))?;
            Ok(SizePreset::Custom { width, height })
        }
    }
}

fn ensure_writable_path(path: &std::path::Path, overwrite: bool) -> Result<(), String> {
    if path.exists() {
        if overwrite {
            eprintln!(
                "{} {}",
                "warning:".yellow().bold(),
                format!("overwriting {}", path.display()).yellow()
            );
        } else {
            return Err(format!(
                "output already exists: {} (use --overwrite to replace)",
                path.display()
            ));
        }
    }
    Ok(())
}

fn apply_global_options(global: &GlobalOptions) -> Result<(), String> {
    if let Some(level) = &global.log_level {
        let parsed = parse_log_level(level).ok_or(format!("unsupported --log-level: {level}"))?;
        stillcut::set_ffmpeg_log_level(parsed);
    }
    Ok(())
}

fn remux_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner().with_message(message);
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(Duration::from_millis(120));
    spinner
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    apply_global_options(&cli.global)?;

    match cli.command {
        Commands::Probe { input, json } => {
            let dimensions = probe_dimensions(&input)?;
            let duration = probe_duration(&input)?;

            if json {
                let payload = json!({
                    "path": input.display().to_string(),
                    "width": dimensions.width,
                    "height": dimensions.height,
                    "duration_seconds": duration.map(|d| d.as_secs_f64()),
                });
                println!("{payload:#}");
            } else {
                println!(
                    "{} {}x{}",
                    "dimensions:".cyan().bold(),
                    dimensions.width,
                    dimensions.height
                );
                match duration {
                    Some(duration) => println!(
                        "{} {:.2}s",
                        "duration:".cyan().bold(),
                        duration.as_secs_f64()
                    ),
                    None => println!("{} unknown", "duration:".cyan().bold()),
                }
            }
        }

        Commands::Resize {
            input,
            output,
            size,
        } => {
            let preset = parse_size(&size)?;
            ensure_writable_path(&output, cli.global.overwrite)?;
            let written = resize_video_frame(&input, &output, preset)?;
            println!(
                "{} {} ({}x{})",
                "saved".green().bold(),
                output.display(),
                written.width,
                written.height
            );
        }

        Commands::Convert {
            input,
            out,
            format,
            thumbs,
            no_thumbs,
        } => {
            ensure_writable_path(&out, cli.global.overwrite)?;

            let mut remuxer = Remuxer::new(&input, &out)?;
            if let Some(format) = format {
                remuxer = remuxer.with_format(format);
            }

            let spinner = remux_spinner(format!("remuxing {}", input.display()));
            let report = remuxer.run();
            spinner.finish_and_clear();
            let report = report?;

            println!(
                "{} {} ({} stream(s), {} packet(s))",
                "converted".green().bold(),
                out.display(),
                report.streams_mapped,
                report.packets_written
            );

            if !no_thumbs {
                ensure_writable_path(&thumbs, cli.global.overwrite)?;
                let set = extract_thumbnails(&input, &thumbs)?;
                for path in [&set.base, &set.small, &set.medium, &set.large] {
                    println!("{} {}", "saved".green().bold(), path.display());
                }
            }
        }

        Commands::Thumbs { input, out } => {
            ensure_writable_path(&out, cli.global.overwrite)?;
            let set = extract_thumbnails(&input, &out)?;
            for path in [&set.base, &set.small, &set.medium, &set.large] {
                println!("{} {}", "saved".green().bold(), path.display());
            }
        }

        Commands::Completions { shell } => {
            let mut command = Cli::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut io::stdout());
        }
    }

    Ok(())
}

fn main() {
    if let Err(error) = run() {
        eprintln!("{} {error}", "error:".red().bold());
        std::process::exit(1);
    }
}
