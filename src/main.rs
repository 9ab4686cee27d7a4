use std::fs;
use std::path::PathBuf;
use std::io::Write;
use structopt::StructOpt;
use anyhow::{Result, Context};
use fern::colors::{ColoredLevelConfig, Color};
use fern::Output;
use log::{info, warn};
use pbrt2prc::core::pbrt::{Options, DEFAULT_MESH_THRESHOLD};
use pbrt2prc::core::writer::Indent;
use pbrt2prc::pbrtparser::pbrtparser::pbrt_parse;

#[derive(StructOpt, Debug)]
#[structopt(name = "pbrt2prc", about = "Translates PBRT scene files into PearRay .prc files")]
struct Args {
    /// Path to PBRT scene description file
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Directory the translated files are written to
    #[structopt(short, long, parse(from_os_str), default_value = ".")]
    output: PathBuf,

    /// Only log warnings and errors
    #[structopt(short, long)]
    quiet: bool,

    /// set LOG verbosity
    #[structopt(short, long)]
    verbose: bool,

    /// Specify directory that the log file should be written to.
    /// Default: current directory.
    #[structopt(long, parse(from_os_str))]
    logdir: Option<PathBuf>,

    /// Print all logging messages to stderr
    #[structopt(short = "e", long)]
    logtostderr: bool,

    /// Directory, relative to the input, searched for includes that are
    /// not found next to the including file
    #[structopt(long, parse(from_os_str), default_value = "./")]
    include_offset: PathBuf,

    /// Ignore triangle and PLY meshes
    #[structopt(long)]
    skip_mesh: bool,

    /// Ignore curves
    #[structopt(long)]
    skip_curve: bool,

    /// Ignore analytic primitives such as spheres
    #[structopt(long)]
    skip_prim: bool,

    /// Ignore object instances
    #[structopt(long)]
    skip_instance: bool,

    #[structopt(long)]
    skip_light: bool,

    #[structopt(long)]
    skip_mat: bool,

    #[structopt(long)]
    skip_tex: bool,

    #[structopt(long)]
    skip_camera: bool,

    /// Do not wrap the output in a (scene ...) block
    #[structopt(long)]
    skip_world: bool,

    /// Translate each included file only once
    #[structopt(long)]
    skip_repetitive_includes: bool,

    /// Inline includes into the main output file
    #[structopt(long)]
    single_file: bool,

    /// Meshes with more vertices are exported to PLY files
    #[structopt(long, default_value = "1000")]
    mesh_threshold: usize,

    /// Keep one element parameter lists as lists
    #[structopt(long)]
    no_collapse_params: bool,

    /// Indent with the given number of spaces instead of tabs
    #[structopt(long)]
    indent_spaces: Option<usize>
}

fn setup_logging(level: log::LevelFilter, logfile: PathBuf, stderr: bool) -> Result<()> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow);
    let clevel = colors.clone().info(Color::Green);

    let file_config = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {}",
                record.level(),
                message
            ))
        })
        .chain(fern::log_file(&logfile)
            .with_context(|| format!("Failed to open log file \"{}\"", logfile.display()))?);

    let stderr_config = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{color_line}[{level}] {message}\x1B[0m",
                color_line = format_args!("\x1B[{}m", colors.get_color(&record.level()).to_fg_str()),
                level = clevel.color(record.level()),
                message = message,
            ));
        })
        .chain(Output::call(|record| {
            writeln!(std::io::stderr(), "{}", record.args()).ok();
        }));

    let mut base_config = fern::Dispatch::new()
        .level(level)
        .chain(file_config);

    if stderr { base_config = base_config.chain(stderr_config); }
    base_config.apply()?;

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::from_args();

    let level = if args.verbose {
        log::LevelFilter::Debug
    } else if args.quiet {
        log::LevelFilter::Warn
    } else {
        log::LevelFilter::Info
    };

    let logfile = args.logdir
        .clone()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("pbrt2prc.log");

    setup_logging(level, logfile, args.logtostderr)?;

    let mut opts = Options::new();
    opts.quiet = args.quiet;
    opts.verbose = args.verbose;
    opts.output_dir = args.output;
    opts.include_offset = args.include_offset;
    opts.skip_mesh = args.skip_mesh;
    opts.skip_curve = args.skip_curve;
    opts.skip_prim = args.skip_prim;
    opts.skip_instance = args.skip_instance;
    opts.skip_light = args.skip_light;
    opts.skip_mat = args.skip_mat;
    opts.skip_tex = args.skip_tex;
    opts.skip_camera = args.skip_camera;
    opts.skip_world = args.skip_world;
    opts.skip_repetitive_includes = args.skip_repetitive_includes;
    opts.single_file = args.single_file;
    opts.collapse_all_lists = !args.no_collapse_params;
    opts.mesh_threshold = args.mesh_threshold;

    if opts.mesh_threshold == 0 {
        warn!("Mesh threshold of 0 exports every mesh. Default is {}.", DEFAULT_MESH_THRESHOLD);
    }

    if let Some(n) = args.indent_spaces {
        opts.indent = Indent::Spaces(n);
    }

    fs::create_dir_all(&opts.output_dir)
        .with_context(|| format!("Failed to create output directory \"{}\"", opts.output_dir.display()))?;

    let translation = pbrt_parse(&args.input, &opts)?;
    let failed = translation.write_to(&opts.output_dir)?;

    let n = translation.diagnostics.len() + failed.len();
    if n > 0 {
        warn!("Translation finished with {} diagnostics", n);
    } else {
        info!("Translation finished");
    }

    Ok(())
}
