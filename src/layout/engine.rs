use tracing::{debug, warn};

use super::{Cursor, DrawCommand, LayoutConfig, TreeLayout};
use crate::path_info::PathInfo;

/// Lay out the whole tree. `paths` must be relative to a common start folder
/// and in pre-order, so every path shares the same first segment.
pub fn layout_tree(paths: &[PathInfo], config: &LayoutConfig) -> TreeLayout {
    let segments = split_segments(paths);
    let layout = place_folder(&segments, Cursor::default(), 0, config);

    if !layout.is_complete(paths.len()) {
        warn!(
            consumed = layout.cursor.item,
            total = paths.len(),
            "tree layout stopped early; input is not one pre-order tree"
        );
    }
    debug!(
        nodes = layout.cursor.node,
        columns = layout.cursor.wrap + 1,
        connectors = layout.connectors.len(),
        "laid out folder tree"
    );
    layout
}

/// Lay out the folder entered by `items[cursor.item]` at `depth`, consuming
/// items until the folder's subtree ends. Returns the commands produced and
/// the advanced cursor.
pub fn layout_folder(
    items: &[PathInfo],
    cursor: Cursor,
    depth: usize,
    config: &LayoutConfig,
) -> TreeLayout {
    place_folder(&split_segments(items), cursor, depth, config)
}

/// One input path, pre-split.
struct Item<'a> {
    segments: Vec<&'a str>,
    path: String,
}

fn split_segments(paths: &[PathInfo]) -> Vec<Item<'_>> {
    paths
        .iter()
        .map(|p| {
            let mut segments: Vec<&str> = p.segments().collect();
            // Paths under the filesystem root lead with an empty segment.
            if segments.first() == Some(&"") {
                segments[0] = root_label(p.separator());
            }
            Item {
                segments,
                path: p.path_with_separator('/'),
            }
        })
        .collect()
}

fn root_label(separator: char) -> &'static str {
    if separator == '\\' {
        "\\"
    } else {
        "/"
    }
}

fn place_folder(
    items: &[Item<'_>],
    start: Cursor,
    depth: usize,
    config: &LayoutConfig,
) -> TreeLayout {
    let mut out = TreeLayout::starting_at(start);
    let Some(first) = items.get(start.item) else {
        return out;
    };
    if first.segments.len() <= depth {
        return out;
    }
    let folder = &first.segments[..=depth];

    let Cursor { item, node, wrap } = start;
    if depth != 0 {
        out.connectors.push(elbow(config, depth, node, wrap));
        out.connectors.extend(spines(config, depth - 1, node, wrap));
    }
    out.labels.push(DrawCommand::FolderLabel {
        text: folder[depth].to_string(),
        at: config.point(depth, node, wrap),
    });

    let depth = depth + 1;
    out.cursor = Cursor {
        item,
        node: node + 1,
        wrap,
    };

    while let Some(next) = items.get(out.cursor.item) {
        let segments = &next.segments;
        // Anything outside this folder ends its subtree.
        if segments.len() <= depth || segments[..depth] != *folder {
            break;
        }

        if segments.len() - 1 > depth {
            let before = out.cursor.item;
            out.absorb(place_folder(items, out.cursor, depth, config));
            if out.cursor.item == before {
                break;
            }
            continue;
        }

        let Cursor { item, node, wrap } = out.cursor;
        out.connectors.extend(spines(config, depth - 1, node, wrap));
        out.connectors.push(elbow(config, depth, node, wrap));
        out.labels.push(DrawCommand::FileLabel {
            text: segments[depth].to_string(),
            path: next.path.clone(),
            at: config.point(depth, node, wrap),
        });

        let node = node + 1;
        let wrap = if config.overflows(node, wrap) {
            wrap + 1
        } else {
            wrap
        };
        out.cursor = Cursor {
            item: item + 1,
            node,
            wrap,
        };
    }
    out
}

/// `|-` link from the previous node one level up to the node at `depth`.
fn elbow(config: &LayoutConfig, depth: usize, node: usize, wrap: usize) -> DrawCommand {
    DrawCommand::Connector {
        from: config.point(depth.saturating_sub(1), node.saturating_sub(1), wrap),
        to: config.point(depth, node, wrap),
    }
}

/// Vertical trunk segments for the first `count` ancestor columns, spanning
/// the previous node to this one.
fn spines(
    config: &LayoutConfig,
    count: usize,
    node: usize,
    wrap: usize,
) -> impl Iterator<Item = DrawCommand> + '_ {
    (0..count).map(move |level| DrawCommand::Connector {
        from: config.point(level, node.saturating_sub(1), wrap),
        to: config.point(level, node, wrap),
    })
}
