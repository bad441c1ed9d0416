// core/src/allocator.rs
//
// Allocation of placeholder component glyphs for one jamo class.

use crate::error::{Result, TemplateError};
use crate::jamo::JamoClass;
use crate::project::{Glyph, GlyphStore};
use crate::CollisionPolicy;
use serde::Serialize;

/// `variant row × alphabet column → component id` for one class of one template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentGrid {
    class: JamoClass,
    rows: Vec<Vec<u32>>,
}

impl ComponentGrid {
    pub fn class(&self) -> JamoClass {
        self.class
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn columns(&self) -> usize {
        self.class.len()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u32> {
        self.rows.get(row)?.get(column).copied()
    }

    /// Ids in row-major order.
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.rows.iter().flatten().copied()
    }
}

/// Placeholder name: `"{template} | {class} | {row + 1} | {symbol}"`.
pub fn placeholder_name(template: &str, class: JamoClass, row: usize, column: usize) -> String {
    let symbol = class.symbol(column).unwrap_or('?');
    format!("{} | {} | {} | {}", template, class.tag(), row + 1, symbol)
}

/// Allocate `rows × class.len()` placeholder glyphs with ids counting up from `start`.
///
/// Returns the grid and the next free id (`start + rows·columns`). The range
/// is checked before anything is written: an overflow always fails, and an
/// occupied id fails under `CollisionPolicy::Error`.
pub fn allocate_components<S: GlyphStore + ?Sized>(
    store: &mut S,
    rows: usize,
    class: JamoClass,
    start: u32,
    template: &str,
    policy: CollisionPolicy,
) -> Result<(ComponentGrid, u32)> {
    let next = placeholder_end(start, rows * class.len())?;

    for id in start..next {
        if store.contains_glyph(id) {
            match policy {
                CollisionPolicy::Error => {
                    return Err(TemplateError::IdCollision {
                        id,
                        template: template.to_string(),
                        class,
                    })
                }
                CollisionPolicy::Overwrite => {
                    tracing::warn!(id, template, %class, "overwriting existing glyph with placeholder");
                }
            }
        }
    }

    Ok(write_grid(store, rows, class, start, template))
}

/// First id after `count` placeholders from `start`.
pub(crate) fn placeholder_end(start: u32, count: usize) -> Result<u32> {
    u32::try_from(count)
        .ok()
        .and_then(|n| start.checked_add(n))
        .ok_or(TemplateError::PointerOverflow { start, count })
}

/// Write one grid without range checks. The caller has already validated
/// `start..start + rows·columns` with `placeholder_end`.
pub(crate) fn write_grid<S: GlyphStore + ?Sized>(
    store: &mut S,
    rows: usize,
    class: JamoClass,
    start: u32,
    template: &str,
) -> (ComponentGrid, u32) {
    let columns = class.len();
    let mut ptr = start;
    let mut grid = Vec::with_capacity(rows);
    for row in 0..rows {
        let mut ids = Vec::with_capacity(columns);
        for column in 0..columns {
            store.set_glyph(ptr, Glyph::new(placeholder_name(template, class, row, column)));
            ids.push(ptr);
            ptr += 1;
        }
        grid.push(ids);
    }

    tracing::debug!(template, %class, rows, columns, start, next = ptr, "allocated component grid");

    (ComponentGrid { class, rows: grid }, ptr)
}
