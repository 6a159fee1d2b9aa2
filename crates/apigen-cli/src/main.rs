use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use log::{debug, info};

use apigen_aspnet::generator_for;
use apigen_core::GeneratedFile;
use apigen_core::config::{self, ApigenConfig, CONFIG_FILE_NAME};
use apigen_core::definition::Definition;
use apigen_core::parse::{self, spec::OpenApiSpec};
use apigen_core::transform;

#[derive(Parser)]
#[command(
    name = "apigen",
    about = "OpenAPI 3.x to ASP.NET Core code generator",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate code from an OpenAPI document
    Generate {
        /// Path to the OpenAPI document (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },

    /// Validate an OpenAPI document and the definition built from it
    Validate {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print the definition built from an OpenAPI document
    Inspect {
        /// Path to the OpenAPI document
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,
    },

    /// Initialize a new apigen configuration
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { input } => cmd_generate(input),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect { input, format } => cmd_inspect(input, format),

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "apigen", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<ApigenConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    Ok(config::load_config(&config_path)?)
}

/// Read and parse a document, choosing the format from the file extension.
fn load_document(path: &Path) -> Result<OpenApiSpec> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let format = parse::DocumentFormat::from_path(path);
    debug!("parsing {} as {format:?}", path.display());

    parse::from_str(&content, format)
        .with_context(|| format!("failed to parse {}", path.display()))
}

fn load_definition(path: &Path) -> Result<Definition> {
    let document = load_document(path)?;
    let definition = transform::build_definition(&document)
        .with_context(|| format!("failed to build definition for {}", path.display()))?;
    Ok(definition)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

/// Generate the "do not edit" README.
fn readme_content() -> &'static str {
    r#"# Generated Code - Do Not Edit

This directory is **auto-generated** by apigen.
Any manual changes will be overwritten the next time `apigen generate` is run.

To regenerate, run:
```
apigen generate
```

To customize the generated output, edit your `.apigen.yaml` configuration file.
"#
}

fn cmd_generate(input: Option<PathBuf>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let definition = load_definition(&input)?;

    if cfg.generators.is_empty() {
        eprintln!("No generators configured. Add a `generators` section to your config.");
        return Ok(());
    }

    let namespaces = cfg.namespaces();
    for (gen_id, gen_config) in &cfg.generators {
        eprintln!(
            "Generating {gen_id} ({}) → {}",
            namespaces.of(*gen_id),
            gen_config.output
        );

        let files = generator_for(*gen_id)
            .generate(&definition, &namespaces)
            .with_context(|| format!("{gen_id} generator failed"))?;

        let output_dir = PathBuf::from(&gen_config.output);
        fs::create_dir_all(&output_dir).with_context(|| {
            format!("failed to create output directory {}", output_dir.display())
        })?;

        write_files(&output_dir, &files)?;

        let readme_path = output_dir.join("README.md");
        fs::write(&readme_path, readme_content())
            .with_context(|| format!("failed to write {}", readme_path.display()))?;
        eprintln!("  wrote {}", readme_path.display());

        info!("{gen_id}: {} files", files.len());
        eprintln!(
            "Generated {} files in {}",
            files.len() + 1, // +1 for README
            output_dir.display()
        );
    }

    eprintln!(
        "\nThe generated directories should not be edited manually; changes will be overwritten."
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let parsed = load_document(&input)?;

    eprintln!(
        "Valid OpenAPI {} document: {}",
        parsed.openapi, parsed.info.title
    );
    eprintln!("  Version: {}", parsed.info.version);
    eprintln!("  Paths: {}", parsed.paths.len());

    if let Some(ref components) = parsed.components {
        eprintln!("  Component schemas: {}", components.schemas.len());
    }

    let definition = transform::build_definition(&parsed)
        .with_context(|| format!("failed to build definition for {}", input.display()))?;
    eprintln!("  Routes: {}", definition.routes.len());
    eprintln!("  Operations: {}", definition.operation_count());
    eprintln!("  Schema definitions: {}", definition.schemas.len());

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat) -> Result<()> {
    let definition = load_definition(&input)?;

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&definition)?;
            print!("{yaml}");
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&definition)?;
            println!("{json}");
        }
    }

    Ok(())
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}
