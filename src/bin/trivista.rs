use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "trivista", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the scene and write it as an SVG document.
    Generate(GenerateArgs),
    /// Compose the scene and print it as JSON.
    DumpJson(DumpJsonArgs),
    /// Compose the scene and print its geometry fingerprint.
    Fingerprint(SceneArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Scene configuration JSON (omitted fields use the reference scene).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Canvas width.
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// Canvas height.
    #[arg(long, default_value_t = 800)]
    height: u32,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output SVG path.
    #[arg(long, default_value = "docs/competition.svg")]
    out: PathBuf,

    /// Texture image path, relative to `--root` (overrides the config).
    #[arg(long)]
    texture: Option<String>,

    /// Project root that texture and output paths are resolved against.
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Omit per-layer XML comments.
    #[arg(long)]
    no_comments: bool,
}

#[derive(Args, Debug)]
struct DumpJsonArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Pretty-print the JSON.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::DumpJson(args) => cmd_dump_json(args),
        Command::Fingerprint(args) => cmd_fingerprint(args),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> anyhow::Result<trivista::SceneConfig> {
    match path {
        Some(p) => trivista::SceneConfig::from_path(p)
            .with_context(|| format!("load scene config '{}'", p.display())),
        None => Ok(trivista::SceneConfig::default()),
    }
}

fn compose_from(args: &SceneArgs, texture: Option<&str>) -> anyhow::Result<trivista::Scene> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(tex) = texture {
        config.texture.path = tex.to_string();
    }
    let scene = trivista::try_compose(&config, args.width, args.height)
        .with_context(|| "compose scene")?;
    Ok(scene)
}

/// Output path as seen from the project root, for document-relative texture paths.
fn document_rel_path(out: &Path, root: &Path) -> anyhow::Result<String> {
    let rel = if out.is_absolute() {
        let root = root
            .canonicalize()
            .with_context(|| format!("resolve root '{}'", root.display()))?;
        out.strip_prefix(&root)
            .with_context(|| {
                format!(
                    "output '{}' is outside root '{}'",
                    out.display(),
                    root.display()
                )
            })?
            .to_path_buf()
    } else {
        out.strip_prefix(root).unwrap_or(out).to_path_buf()
    };
    Ok(rel.to_string_lossy().into_owned())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let scene = compose_from(&args.scene, args.texture.as_deref())?;

    for tex in &scene.textures {
        let on_disk = args.root.join(&tex.path);
        if !on_disk.is_file() {
            anyhow::bail!("texture '{}' not found at '{}'", tex.id, on_disk.display());
        }
    }

    let opts = trivista::SvgOptions {
        layer_comments: !args.no_comments,
        document_path: Some(document_rel_path(&args.out, &args.root)?),
    };
    trivista::write_svg(&scene, &args.out, &opts)
        .with_context(|| format!("write svg '{}'", args.out.display()))?;

    tracing::info!(
        primitives = scene.primitives.len(),
        textured = scene.textured_count(),
        fingerprint = %trivista::fingerprint_scene(&scene),
        "scene written"
    );
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_dump_json(args: DumpJsonArgs) -> anyhow::Result<()> {
    let scene = compose_from(&args.scene, None)?;
    let json = if args.pretty {
        serde_json::to_string_pretty(&scene)
    } else {
        serde_json::to_string(&scene)
    }
    .with_context(|| "serialize scene JSON")?;
    println!("{json}");
    Ok(())
}

fn cmd_fingerprint(args: SceneArgs) -> anyhow::Result<()> {
    let scene = compose_from(&args, None)?;
    println!("{}", trivista::fingerprint_scene(&scene));
    Ok(())
}
