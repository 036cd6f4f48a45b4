//! Resolving components and finishing glyphs

use kurbo::Affine;

use crate::{
    builder::GlyphBuilder,
    glyph::{Component, ComponentFlags, CompositeGlyph, Glyph},
    transform, DrawGlyph, GlyphSet, OtRound, PenError,
};

/// Options for the glyph pens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PenOptions {
    /// Check that component transforms fit in an F2Dot14 (`-2.0 <= v < 2.0`).
    ///
    /// If any component of a glyph has a transform value greater than 2 or less
    /// than -2, all of the glyph's components are decomposed. Values very close
    /// to +2.0 are clamped to the largest F2Dot14 instead.
    ///
    /// If `false`, no check is done and transforms are kept as they are; they
    /// will fail to encode later if they are out of range.
    pub handle_overflowing_transforms: bool,
}

impl Default for PenOptions {
    fn default() -> Self {
        PenOptions {
            handle_overflowing_transforms: true,
        }
    }
}

/// A pen that can draw a referenced glyph into itself.
pub(crate) trait Decompose {
    fn builder(&mut self) -> &mut GlyphBuilder;

    /// Draw `glyph` into this pen, transformed by `transform`, using the same
    /// drawing protocol the pen itself implements.
    fn draw_transformed(&mut self, glyph: &dyn DrawGlyph, transform: Affine)
        -> Result<(), PenError>;
}

/// Build the final glyph from everything drawn into `pen`.
///
/// The pen's state is cleared whether or not this succeeds.
pub(crate) fn finish_glyph<P: Decompose, G: GlyphSet>(
    pen: &mut P,
    glyph_set: &G,
    options: PenOptions,
    flags: ComponentFlags,
) -> Result<Glyph, PenError> {
    let components = build_components(pen, glyph_set, options, flags);
    let builder = pen.builder();
    let glyph = components.map(|components| {
        if components.is_empty() {
            Glyph::Simple(builder.to_simple_glyph())
        } else {
            Glyph::Composite(CompositeGlyph { components })
        }
    });
    builder.clear();
    glyph
}

fn build_components<P: Decompose, G: GlyphSet>(
    pen: &mut P,
    glyph_set: &G,
    options: PenOptions,
    flags: ComponentFlags,
) -> Result<Vec<Component>, PenError> {
    // we can't encode transform values > 2 or < -2 in F2Dot14,
    // so we must decompose the glyph if any transform exceeds these
    let overflowing = options.handle_overflowing_transforms
        && pen
            .builder()
            .components()
            .iter()
            .any(|(_, transform)| transform::is_overflowing(transform));

    let mut components = Vec::new();
    // for each pending component, the one whose decomposition added it
    let mut parents = vec![None; pen.builder().components().len()];
    // decomposing a composite glyph adds to the pending components, so
    // this can't hold an iterator.
    let mut next = 0;
    while let Some((glyph_name, transform)) = pen.builder().components().get(next).cloned() {
        let current = next;
        next += 1;
        let Some(glyph) = glyph_set.get(&glyph_name) else {
            log::warn!("skipped non-existing component '{glyph_name}'");
            continue;
        };
        if pen.builder().has_points() || overflowing {
            if is_cyclic(pen.builder().components(), &parents, current) {
                log::warn!("skipped component '{glyph_name}' that references itself");
                continue;
            }
            // can't have both coordinates and components, so decompose
            log::debug!("decomposing component '{glyph_name}'");
            pen.draw_transformed(glyph, transform)?;
            parents.resize(pen.builder().components().len(), Some(current));
            continue;
        }

        let (x, y) = transform.translation().ot_round();
        components.push(Component {
            glyph_name,
            x,
            y,
            transform: transform::quantize(&transform, options.handle_overflowing_transforms),
            flags,
        });
    }
    Ok(components)
}

/// `true` if the component at `index` was added by decomposing a glyph of
/// the same name.
fn is_cyclic(components: &[(String, Affine)], parents: &[Option<usize>], index: usize) -> bool {
    let Some((glyph_name, _)) = components.get(index) else {
        return false;
    };
    std::iter::successors(parents.get(index).copied().flatten(), |parent| {
        parents.get(*parent).copied().flatten()
    })
    .any(|parent| {
        components
            .get(parent)
            .is_some_and(|(name, _)| name == glyph_name)
    })
}
