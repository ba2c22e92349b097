use clap::Parser;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use trellis::{
    FilesystemResourceProvider, Inflater, InflaterConfig, LayoutConfig, LayoutTree, NodeId,
    PipelineError, ResolverConfig, ResourceResolver,
};
use trellis_layout::Rect;
use trellis_resource::{IdRegistry, load_string_table};
use trellis_traits::{RecordingViewFactory, ResourceError};

/// Inflates a layout file into a viewport and prints every committed frame.
#[derive(Parser, Debug)]
#[command(name = "trellis", version)]
struct Args {
    /// Layout markup file. Other resources are looked up next to it.
    layout: PathBuf,

    /// Viewport width.
    #[arg(long, default_value_t = 320.0)]
    width: f32,

    /// Viewport height.
    #[arg(long, default_value_t = 480.0)]
    height: f32,

    /// Named color table (JSON object of name to hex code).
    #[arg(long, default_value = "colors.json")]
    colors: String,

    /// String table for `@string/` references (JSON object).
    #[arg(long)]
    strings: Option<String>,

    /// Fail on cyclic relative anchors instead of ignoring them.
    #[arg(long)]
    strict_anchors: bool,

    /// Let overcommitted weights produce negative extents.
    #[arg(long)]
    no_clamp: bool,

    /// Print frames as JSON.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct FrameReport {
    depth: usize,
    tag: String,
    id: Option<u32>,
    name: Option<String>,
    frame: Rect,
}

fn collect(
    tree: &LayoutTree,
    ids: &IdRegistry,
    id: NodeId,
    depth: usize,
    out: &mut Vec<FrameReport>,
) {
    let Ok(node) = tree.get(id) else {
        return;
    };
    out.push(FrameReport {
        depth,
        tag: node.tag.clone(),
        id: node.layout_id.map(u32::from),
        name: node.layout_id.and_then(|id| ids.name_of(id)).map(str::to_string),
        frame: node.frame(),
    });
    for &child in node.children() {
        collect(tree, ids, child, depth + 1, out);
    }
}

fn print_report(reports: &[FrameReport], json: bool) -> Result<(), PipelineError> {
    if json {
        let text = serde_json::to_string_pretty(reports)
            .map_err(|e| ResourceError::InvalidFormat(e.to_string()))?;
        println!("{}", text);
        return Ok(());
    }
    for report in reports {
        let id = match (&report.name, report.id) {
            (Some(name), Some(id)) => format!(" @{} #{}", name, id),
            (None, Some(id)) => format!(" #{}", id),
            _ => String::new(),
        };
        println!(
            "{:indent$}{}{} x={} y={} w={} h={}",
            "",
            report.tag,
            id,
            report.frame.x,
            report.frame.y,
            report.frame.width,
            report.frame.height,
            indent = report.depth * 2
        );
    }
    Ok(())
}

fn main() -> Result<(), PipelineError> {
    env_logger::init();
    let args = Args::parse();

    std::fs::metadata(&args.layout)?;
    let base = args.layout.parent().unwrap_or(Path::new("."));
    let name = args
        .layout
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| ResourceError::NotFound(args.layout.display().to_string()))?
        .to_string();

    let provider = Arc::new(FilesystemResourceProvider::new(base));
    let mut resolver = ResourceResolver::with_config(
        provider.clone(),
        ResolverConfig {
            color_table: args.colors.clone(),
        },
    );
    if let Some(strings) = &args.strings {
        resolver = resolver.with_localizer(load_string_table(provider.as_ref(), strings)?);
    }

    let config = InflaterConfig {
        layout: LayoutConfig {
            clamp_negative_extents: !args.no_clamp,
            strict_anchors: args.strict_anchors,
        },
        ..Default::default()
    };
    let mut inflater = Inflater::with_config(resolver, config);

    let mut tree = LayoutTree::new();
    let viewport = tree.add_viewport(args.width, args.height)?;
    let factory = RecordingViewFactory::new();

    let runtime = tokio::runtime::Builder::new_current_thread().build()?;
    let inflated = runtime.block_on(inflater.inflate_resource(
        &name,
        &mut tree,
        viewport,
        Some(&factory),
        |tree, roots| log::info!("Inflated {} roots into {} nodes", roots.len(), tree.len()),
    ))?;

    let mut reports = Vec::new();
    for &root in &inflated.roots {
        collect(&tree, inflater.resolver().ids(), root, 0, &mut reports);
    }
    print_report(&reports, args.json)
}
