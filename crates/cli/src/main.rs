use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use decomp::api::{
    decompose_with_cfg, ear_clipping, remove_holes, winding, DecompCfg, Remapper, Winding,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;
mod svg;

use io::{to_pairs, Decomposition, Input, Triangulation};
use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "decomp")]
#[command(about = "Convex decomposition of polygons with holes")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Decompose into convex pieces; writes JSON and optionally SVG
    Run(RunArgs),
    /// Merge holes and triangulate; writes the triangle list as JSON
    Triangulate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
    },
    /// Check winding: outer counter-clockwise, holes clockwise
    Check {
        #[arg(long)]
        input: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Args, Clone, Debug)]
struct RunArgs {
    #[arg(long)]
    input: PathBuf,
    #[arg(long)]
    out: PathBuf,
    /// Also render the pieces over the input outline
    #[arg(long)]
    svg: Option<PathBuf>,
    /// Keep only the points used by the output, renumbered densely
    #[arg(long)]
    compact: bool,
    /// Skip edge-flip refinement before merging
    #[arg(long)]
    no_flip: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Run(args) => run(&args).map(|_| ()),
        Action::Triangulate { input, out } => triangulate(&input, &out),
        Action::Check { input } => check(&input),
        Action::Report => report(),
    }
}

fn run(args: &RunArgs) -> Result<Decomposition> {
    tracing::info!(input = %args.input.display(), out = %args.out.display(), no_flip = args.no_flip, compact = args.compact, "run");
    let input = Input::load(&args.input)?;
    let points = input.points();
    let cfg = DecompCfg {
        edge_flip: !args.no_flip,
        ..DecompCfg::default()
    };
    let polygons = decompose_with_cfg(
        &points,
        &input.outer,
        &input.holes,
        &input.fixed_edges(),
        cfg,
    )
    .with_context(|| format!("decomposing {}", args.input.display()))?;
    tracing::info!(pieces = polygons.len(), "decomposed");

    let doc = if args.compact {
        let mut remapper = Remapper::new();
        let polygons: Vec<_> = polygons.iter().map(|p| remapper.apply(p)).collect();
        Decomposition {
            points: to_pairs(&remapper.mapped(&points)?),
            polygons,
        }
    } else {
        Decomposition {
            points: input.points.clone(),
            polygons: polygons.clone(),
        }
    };
    io::write_json(&args.out, &doc)?;
    let params = json!({
        "edge_flip": cfg.edge_flip,
        "compact": args.compact,
        "pieces": doc.polygons.len(),
    });
    write_sidecar(&args.out, Payload::new(params.clone()).with_input(&args.input))?;

    if let Some(svg_path) = &args.svg {
        let mut outlines = vec![input.outer.clone()];
        outlines.extend(input.holes.iter().cloned());
        let rendered = svg::render(&points, &polygons, &outlines)?;
        io::write_artifact(svg_path, rendered.as_bytes())?;
        write_sidecar(svg_path, Payload::new(params).with_input(&args.input))?;
    }
    Ok(doc)
}

fn triangulate(input_path: &Path, out: &Path) -> Result<()> {
    tracing::info!(input = %input_path.display(), out = %out.display(), "triangulate");
    let input = Input::load(input_path)?;
    let points = input.points();
    let merged = remove_holes(&points, &input.outer, &input.holes)?;
    let triangles = ear_clipping(&points, &merged)?;
    tracing::info!(triangles = triangles.len() / 3, "triangulated");

    io::write_json(
        out,
        &Triangulation {
            points: input.points.clone(),
            triangles,
        },
    )?;
    let params = json!({ "holes": input.holes.len(), "merged_len": merged.len() });
    write_sidecar(out, Payload::new(params).with_input(input_path))?;
    Ok(())
}

/// Winding of the outer polygon and every hole, with a pass/fail verdict.
fn winding_report(input: &Input) -> serde_json::Value {
    let points = input.points();
    let outer = winding(&points, &input.outer);
    let holes: Vec<Winding> = input.holes.iter().map(|h| winding(&points, h)).collect();
    let ok = outer == Winding::CounterClockwise && holes.iter().all(|&w| w == Winding::Clockwise);
    json!({
        "outer": format!("{outer:?}"),
        "holes": holes.iter().map(|w| format!("{w:?}")).collect::<Vec<_>>(),
        "ok": ok,
    })
}

fn check(input_path: &Path) -> Result<()> {
    let input = Input::load(input_path)?;
    let report = winding_report(&input);
    println!("{}", serde_json::to_string_pretty(&report)?);
    if report["ok"] != true {
        bail!("{}: outer must be counter-clockwise and holes clockwise", input_path.display());
    }
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "decomp_version": decomp::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
