use clap::Parser;
use photo_intake::imaging::RustBackend;
use photo_intake::{config, output, pipeline};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "photo-intake")]
#[command(about = "Batch importer for photo collections")]
#[command(long_about = "\
Batch importer for photo collections

Copies a batch of JPEG photographs into a collection, renaming each file
to the next free serial in the collection's filename series
(IMG-0001.jpeg, IMG-0002.jpeg, ...), optionally stamping the photographer
into each file's EXIF Artist tag, deriving a 400x300-bounded preview per
image, and appending the admitted names to a TOML index.

Destination layout:

  collection/
  ├── import.toml          # Optional config (series prefix, preview bounds)
  ├── images/              # Admitted full-size files: IMG-0001.jpeg, ...
  └── thumbs/              # Bounded previews, same filenames

Serial allocation scans images/ on every run: the collection's own
filenames are the counter, so repeated imports continue numbering where
the previous batch stopped. Sources are admitted in filename order, and
a batch with a corrupt frame still imports the other frames — stamping
and preview failures are per-item warnings, not aborts.")]
#[command(version = version_string())]
struct Cli {
    /// Source directory containing the batch to import
    source: PathBuf,

    /// Destination collection directory
    destination: PathBuf,

    /// Photographer name to stamp into each file's EXIF Artist tag
    #[arg(long)]
    photographer: Option<String>,

    /// TOML index file to append admitted filenames to
    #[arg(long)]
    index_file: Option<PathBuf>,

    /// Override the configured filename series prefix for this run
    #[arg(long)]
    prefix: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if !cli.source.exists() {
        return Err(format!("source directory '{}' does not exist", cli.source.display()).into());
    }
    if !cli.source.is_dir() {
        return Err(format!("source path '{}' is not a directory", cli.source.display()).into());
    }

    let mut config = config::load_config(&cli.destination)?;
    if let Some(prefix) = cli.prefix {
        config.series.prefix = prefix;
        config::validate(&config)?;
    }

    std::fs::create_dir_all(cli.destination.join(pipeline::IMAGES_SUBDIR))?;
    std::fs::create_dir_all(cli.destination.join(pipeline::PREVIEWS_SUBDIR))?;

    let opts = pipeline::ImportOptions {
        source: cli.source,
        dest: cli.destination,
        photographer: cli.photographer,
        index_file: cli.index_file,
    };

    let report = pipeline::run(&RustBackend::new(), &opts, &config)?;
    output::print_report(&report, opts.index_file.as_deref());

    Ok(())
}
