use std::{
    fs::File,
    io::{BufReader, BufWriter, Write as _},
    path::PathBuf,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use shapeshift::{
    ArcDescriptor, ExportScene, Interpolator, Morph, Path, Point, arc_to_beziers, classify,
    status_message,
};

#[derive(Parser, Debug)]
#[command(name = "shapeshift", version, about = "Vector path morphing toolkit")]
struct Cli {
    /// Print debug-level diagnostics to stderr.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Classify a start/end pair and print the status line.
    Check(PairArgs),
    /// Print the interpolated path at one fraction.
    Frame(FrameArgs),
    /// Print evenly spaced, eased frames from start to end.
    Frames(FramesArgs),
    /// Print the total length of a path.
    Length {
        /// Path string.
        path: String,
    },
    /// Project a point onto a path, optionally splitting it there.
    Project(ProjectArgs),
    /// Convert an elliptical arc to cubic Beziers.
    Arc(ArcArgs),
    /// Generate an export plan from a scene JSON file.
    Export(ExportArgs),
}

#[derive(Parser, Debug)]
struct PairArgs {
    /// Start path string.
    #[arg(long)]
    start: String,

    /// End path string.
    #[arg(long)]
    end: String,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    pair: PairArgs,

    /// Animation fraction; values outside [0, 1] extrapolate.
    #[arg(long, allow_negative_numbers = true)]
    t: f64,
}

#[derive(Parser, Debug)]
struct FramesArgs {
    #[command(flatten)]
    pair: PairArgs,

    /// Number of frames, including both ends.
    #[arg(long, default_value_t = 10)]
    count: usize,

    /// Timing curve applied to the clock fraction.
    #[arg(long, default_value_t = Interpolator::Linear)]
    curve: Interpolator,
}

#[derive(Parser, Debug)]
struct ProjectArgs {
    /// Path string.
    #[arg(long)]
    path: String,

    #[arg(long, allow_negative_numbers = true)]
    x: f64,

    #[arg(long, allow_negative_numbers = true)]
    y: f64,

    /// Also print the path split at the projected point.
    #[arg(long)]
    split: bool,
}

#[derive(Parser, Debug)]
struct ArcArgs {
    #[arg(allow_negative_numbers = true)]
    start_x: f64,
    #[arg(allow_negative_numbers = true)]
    start_y: f64,
    rx: f64,
    ry: f64,
    #[arg(allow_negative_numbers = true)]
    rotation: f64,
    #[arg(action = clap::ArgAction::Set)]
    large_arc: bool,
    #[arg(action = clap::ArgAction::Set)]
    sweep: bool,
    #[arg(allow_negative_numbers = true)]
    end_x: f64,
    #[arg(allow_negative_numbers = true)]
    end_y: f64,
}

#[derive(Parser, Debug)]
struct ExportArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output plan JSON; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Check(args) => cmd_check(args),
        Command::Frame(args) => cmd_frame(args),
        Command::Frames(args) => cmd_frames(args),
        Command::Length { path } => cmd_length(&path),
        Command::Project(args) => cmd_project(args),
        Command::Arc(args) => cmd_arc(args),
        Command::Export(args) => cmd_export(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn parse_path(s: &str, what: &str) -> anyhow::Result<Path> {
    Path::parse(s).with_context(|| format!("parse {what} path '{s}'"))
}

fn parse_pair(args: &PairArgs) -> anyhow::Result<(Path, Path)> {
    Ok((
        parse_path(&args.start, "start")?,
        parse_path(&args.end, "end")?,
    ))
}

fn cmd_check(args: PairArgs) -> anyhow::Result<()> {
    let (start, end) = parse_pair(&args)?;
    println!("{:?}", classify(Some(&start), Some(&end)));
    println!("{}", status_message(Some(&start), Some(&end)));
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (start, end) = parse_pair(&args.pair)?;
    let morph = Morph::new(start, end).context("build morph")?;
    println!("{}", morph.at(args.t));
    Ok(())
}

fn cmd_frames(args: FramesArgs) -> anyhow::Result<()> {
    anyhow::ensure!(args.count >= 2, "--count must be at least 2");
    let (start, end) = parse_pair(&args.pair)?;
    let morph = Morph::new(start, end).context("build morph")?;
    let last = (args.count - 1) as f64;
    for i in 0..args.count {
        println!("{}", morph.sample(i as f64 / last, args.curve));
    }
    Ok(())
}

fn cmd_length(path: &str) -> anyhow::Result<()> {
    println!("{}", parse_path(path, "input")?.length());
    Ok(())
}

fn cmd_project(args: ProjectArgs) -> anyhow::Result<()> {
    let path = parse_path(&args.path, "input")?;
    let Some(projection) = path.project(Point::new(args.x, args.y)) else {
        anyhow::bail!("path has no drawable commands");
    };
    println!("{}", serde_json::to_string_pretty(&projection)?);
    if args.split {
        let split = path.split_at(&projection).context("split path")?;
        println!("{split}");
    }
    Ok(())
}

fn cmd_arc(args: ArcArgs) -> anyhow::Result<()> {
    let conversion = arc_to_beziers(&ArcDescriptor {
        start_x: args.start_x,
        start_y: args.start_y,
        rx: args.rx,
        ry: args.ry,
        x_axis_rotation_degrees: args.rotation,
        large_arc: args.large_arc,
        sweep: args.sweep,
        end_x: args.end_x,
        end_y: args.end_y,
    });
    println!("{}", serde_json::to_string_pretty(&conversion)?);
    Ok(())
}

fn cmd_export(args: ExportArgs) -> anyhow::Result<()> {
    let f = File::open(&args.in_path)
        .with_context(|| format!("open scene '{}'", args.in_path.display()))?;
    let scene: ExportScene =
        serde_json::from_reader(BufReader::new(f)).with_context(|| "parse scene JSON")?;
    let plan = scene.generate().context("generate export plan")?;

    match args.out {
        Some(out) => {
            let f = File::create(&out)
                .with_context(|| format!("create output '{}'", out.display()))?;
            let mut w = BufWriter::new(f);
            serde_json::to_writer_pretty(&mut w, &plan)?;
            w.flush()?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&plan)?),
    }
    Ok(())
}
