use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use env_logger::{Builder, Env};
use safeview::config::{
    strip_format_prefix, GalleryConfig, DEFAULT_TEMPLATE, DEFAULT_UNZIP_DIR, DEFAULT_WIDTH,
};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "safeview",
    version,
    about = "Create a html file that shows the images, with footprints and start times from the matching .SAFE products"
)]
struct Cli {
    /// Path that contains the images
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Start time label shown on the page; the text between the first and second 'f' is kept
    /// (default: current local time)
    #[arg(short = 't', long = "time")]
    time: Option<String>,

    /// Image count label shown on the page; the text between the first and second 'f' is kept
    /// (default: number of images found)
    #[arg(short = 'I', long = "image")]
    image: Option<String>,

    /// Width of the images in the html file
    #[arg(short = 'w', long = "width", default_value_t = DEFAULT_WIDTH)]
    width: u32,

    /// Extension names of the images
    #[arg(short = 'e', long = "ext", num_args = 1.., default_values = ["jpg", "png"])]
    ext: Vec<String>,

    /// The template file of the html
    #[arg(short = 'T', long = "template", default_value = DEFAULT_TEMPLATE)]
    template: PathBuf,

    /// The output file name (default: <path>/View.html)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Directory with the extracted .SAFE products
    #[arg(short = 'u', long = "unzip", default_value = DEFAULT_UNZIP_DIR)]
    unzip: PathBuf,

    /// More log output (-v debug, -vv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> GalleryConfig {
        let mut config = GalleryConfig::new(&self.path)
            .with_width(self.width)
            .with_extensions(&self.ext)
            .with_template(&self.template)
            .with_unzip_dir(&self.unzip);

        if let Some(time) = &self.time {
            config = config.with_time_label(strip_format_prefix(time));
        }
        if let Some(image) = &self.image {
            config = config.with_image_label(strip_format_prefix(image));
        }
        if let Some(output) = &self.output {
            config = config.with_output(output);
        }
        config
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    let mut builder = Builder::from_env(Env::default().default_filter_or(level));
    builder.format_timestamp_secs();
    builder.init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.into_config();
    log::info!("Building gallery for {}", config.image_dir.display());

    let output = safeview::run(&config)
        .with_context(|| format!("Failed to build gallery for {}", config.image_dir.display()))?;

    log::info!("Done: {}", output.display());
    Ok(())
}
