use banner::executor::Executor;
use banner::{PipelineBuilder, PipelineConfig, PipelineError, SceneEdit, SceneObject};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use std::fs;
use std::path::{Path, PathBuf};

/// Adapt banner templates to output formats and export custom layouts.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the template catalog (JSON)
    catalog: PathBuf,

    /// Fail when a format is not listed by the template
    #[arg(long, default_value_t = false)]
    strict_formats: bool,

    /// Adapt formats one at a time instead of in parallel
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, default_value_t = false)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the templates in the catalog
    List,
    /// List the formats a template supports
    Formats { template: String },
    /// Print a template's elements adapted to a format as JSON
    Adapt { template: String, format: String },
    /// Adapt a template to all of its formats and summarize the scenes
    Preview { template: String },
    /// Write the custom layout JSON for a template in one format
    Export {
        template: String,
        format: String,
        /// Directory the layout file is written to
        #[arg(long, default_value = ".")]
        out_dir: PathBuf,
        /// JSON array of scene edits to apply before exporting
        #[arg(long)]
        edits: Option<PathBuf>,
    },
}

fn read_edits(path: &Path) -> Result<Vec<SceneEdit>, PipelineError> {
    let source = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&source)?)
}

fn main() -> Result<(), PipelineError> {
    let args = Args::parse();

    let default_filter = if args.debug { "banner=debug" } else { "banner=info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = PipelineConfig {
        strict_formats: args.strict_formats,
        parallel: !args.sequential,
    };
    let pipeline = PipelineBuilder::new()
        .with_catalog_file(&args.catalog)?
        .with_config(config)
        .build()?;

    match args.command {
        Command::List => {
            for template in pipeline.catalog().iter() {
                println!(
                    "{}\t{}\t{} element(s)\t{}",
                    template.id,
                    template.name,
                    template.elements.len(),
                    template.formats.iter().join(", ")
                );
            }
        }
        Command::Formats { template } => {
            let template = pipeline.catalog().require(&template)?;
            for format in &template.formats {
                println!("{}", format);
            }
        }
        Command::Adapt { template, format } => {
            let layout = pipeline.adapt(&template, &format)?;
            println!("{}", serde_json::to_string_pretty(&layout)?);
        }
        Command::Preview { template } => {
            println!(
                "Previewing '{}' with {} ({} worker(s))",
                template,
                pipeline.executor().name(),
                pipeline.executor().parallelism()
            );
            for result in pipeline.adapt_all_formats(&template)? {
                let layout = result?;
                let scene = banner::realize(layout.format, &layout.elements)?;
                let (images, texts): (Vec<_>, Vec<_>) = scene
                    .objects
                    .iter()
                    .partition(|o| matches!(o, SceneObject::Image(_)));
                println!(
                    "  {:>10}  {} image(s), {} text(s)",
                    layout.format,
                    images.len(),
                    texts.len()
                );
            }
        }
        Command::Export {
            template,
            format,
            out_dir,
            edits,
        } => {
            let edits = match edits {
                Some(path) => read_edits(&path)?,
                None => Vec::new(),
            };
            let export = pipeline.export_edited(&template, &format, &edits)?;
            let path = export.write_to_dir(&out_dir)?;
            println!("Exported {}", path.display());
        }
    }

    Ok(())
}
