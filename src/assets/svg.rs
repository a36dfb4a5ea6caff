use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::core::{Affine, Rect};
use crate::foundation::error::{MotionError, MotionResult};
use crate::render::cpu::{FrameRgba8, unpremultiply_rgba8_in_place};

/// A group of the vector artwork addressable by id.
#[derive(Clone, Debug, PartialEq)]
pub struct SvgGroup {
    /// Element id.
    pub id: String,
    /// Bounds in document coordinates, used as the transform origin.
    pub bounds: Rect,
}

impl SvgGroup {
    /// Transform-origin centre.
    pub fn origin(&self) -> crate::foundation::core::Point {
        self.bounds.center()
    }
}

/// Parsed vector artwork.
#[derive(Clone)]
pub struct PreparedSvg {
    tree: Arc<usvg::Tree>,
}

impl std::fmt::Debug for PreparedSvg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (w, h) = self.size();
        f.debug_struct("PreparedSvg")
            .field("width", &w)
            .field("height", &h)
            .finish()
    }
}

impl PreparedSvg {
    /// Parse SVG markup.
    pub fn parse(text: &str) -> MotionResult<Self> {
        let opts = usvg::Options::default();
        let tree = usvg::Tree::from_str(text, &opts).context("parse svg tree")?;
        Ok(Self {
            tree: Arc::new(tree),
        })
    }

    /// Read and parse an SVG file.
    #[tracing::instrument(level = "debug")]
    pub fn from_file(path: &Path) -> MotionResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            MotionError::asset(format!("failed to read svg '{}': {e}", path.display()))
        })?;
        Self::parse(&text)
    }

    /// Document size.
    pub fn size(&self) -> (f64, f64) {
        let s = self.tree.size();
        (s.width() as f64, s.height() as f64)
    }

    /// Look up a group by id.
    pub fn group(&self, id: &str) -> Option<SvgGroup> {
        let node = self.tree.node_by_id(id)?;
        let b = node.abs_bounding_box();
        Some(SvgGroup {
            id: id.to_owned(),
            bounds: Rect::new(
                b.left() as f64,
                b.top() as f64,
                b.right() as f64,
                b.bottom() as f64,
            ),
        })
    }

    /// Resolve `ids`, silently skipping the ones the artwork does not contain.
    pub fn resolve_groups<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> Vec<SvgGroup> {
        ids.into_iter()
            .filter_map(|id| {
                let g = self.group(id);
                if g.is_none() {
                    tracing::debug!(id, "svg group not found; skipped");
                }
                g
            })
            .collect()
    }

    /// Rasterize the artwork fitted to `width` x `height`, with extra transforms (in document
    /// coordinates) applied to groups by id at any depth.
    ///
    /// A transformed group nested inside another transformed group moves with both. Ancestors of
    /// a transformed group are drawn child by child, so their opacity, clip and filter are not
    /// applied as a single layer.
    pub fn render(
        &self,
        width: u32,
        height: u32,
        group_transforms: &HashMap<String, Affine>,
    ) -> MotionResult<FrameRgba8> {
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| MotionError::render("failed to allocate svg pixmap"))?;
        let (dw, dh) = self.size();
        let fit = Affine::scale_non_uniform(
            width as f64 / dw.max(1e-6),
            height as f64 / dh.max(1e-6),
        );

        let root = self.tree.root();
        render_children(
            root,
            fit,
            from_skia(root.abs_transform()),
            group_transforms,
            &mut pixmap.as_mut(),
        );

        let mut data = pixmap.data().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        Ok(FrameRgba8 {
            width,
            height,
            data,
        })
    }
}

/// `placed` carries the fit plus every ancestor's extra transform; `parent_abs` is the parent's
/// resolved document transform.
fn render_children(
    parent: &usvg::Group,
    placed: Affine,
    parent_abs: Affine,
    transforms: &HashMap<String, Affine>,
    pixmap: &mut resvg::tiny_skia::PixmapMut<'_>,
) {
    for node in parent.children() {
        let placed = match transforms.get(node.id()) {
            Some(extra) => placed * *extra,
            None => placed,
        };
        if let usvg::Node::Group(group) = node
            && has_transformed_descendant(group, transforms)
        {
            render_children(
                group,
                placed,
                from_skia(group.abs_transform()),
                transforms,
                pixmap,
            );
            continue;
        }
        // resvg positions a node relative to its layer bounds; undo that shift.
        let Some(bbox) = node.abs_layer_bounding_box() else {
            continue;
        };
        let shift = Affine::translate((bbox.x() as f64, bbox.y() as f64));
        resvg::render_node(node, to_skia(placed * parent_abs * shift), pixmap);
    }
}

fn has_transformed_descendant(
    group: &usvg::Group,
    transforms: &HashMap<String, Affine>,
) -> bool {
    group.children().iter().any(|child| {
        transforms.contains_key(child.id())
            || matches!(child, usvg::Node::Group(g) if has_transformed_descendant(g, transforms))
    })
}

fn from_skia(t: resvg::tiny_skia::Transform) -> Affine {
    Affine::new([
        t.sx as f64,
        t.ky as f64,
        t.kx as f64,
        t.sy as f64,
        t.tx as f64,
        t.ty as f64,
    ])
}

fn to_skia(a: Affine) -> resvg::tiny_skia::Transform {
    let [sx, ky, kx, sy, tx, ty] = a.as_coeffs();
    resvg::tiny_skia::Transform::from_row(
        sx as f32, ky as f32, kx as f32, sy as f32, tx as f32, ty as f32,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/assets/svg.rs"]
mod tests;
