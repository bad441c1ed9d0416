// core/src/template.rs
//
// Hangul template definition and the application engine.
//
// Applying a template:
// 1. select variants for all 11,172 syllables and check them against the
//    declared counts,
// 2. check that every syllable glyph exists, that the placeholder id range
//    fits in `u32` and, under `CollisionPolicy::Error`, that it is free,
// 3. allocate the choseong, jungseong and jongseong grids back to back,
// 4. rewrite the component list of every syllable glyph in canonical order.
//
// Steps 1 and 2 run before any write, so a malformed template or a bad
// project leaves the store unchanged.

use crate::allocator::{placeholder_end, write_grid, ComponentGrid};
use crate::error::{Result, TemplateError};
use crate::jamo::JamoClass;
use crate::project::GlyphStore;
use crate::syllable::{Syllable, SYLLABLE_COUNT};
use crate::variant::{VariantCounts, VariantRule, VariantSelection};
use crate::CollisionPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Human-readable description of every declared variant, per class.
///
/// Used by tooling only; never consulted by the rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateDocs {
    pub choseong: Vec<String>,
    pub jungseong: Vec<String>,
    pub jongseong: Vec<String>,
}

impl TemplateDocs {
    pub fn new<S: AsRef<str>>(choseong: &[S], jungseong: &[S], jongseong: &[S]) -> Self {
        let own = |rows: &[S]| rows.iter().map(|r| r.as_ref().to_string()).collect();
        Self {
            choseong: own(choseong),
            jungseong: own(jungseong),
            jongseong: own(jongseong),
        }
    }

    pub fn rows(&self, class: JamoClass) -> &[String] {
        match class {
            JamoClass::Choseong => &self.choseong,
            JamoClass::Jungseong => &self.jungseong,
            JamoClass::Jongseong => &self.jongseong,
        }
    }
}

/// A named rule plus the variant counts it selects from.
pub struct HangulTemplate {
    name: String,
    counts: VariantCounts,
    rule: Box<dyn VariantRule>,
    docs: TemplateDocs,
}

impl fmt::Debug for HangulTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HangulTemplate")
            .field("name", &self.name)
            .field("counts", &self.counts)
            .finish_non_exhaustive()
    }
}

/// What one `apply` call allocated and wired.
#[derive(Debug, Clone, Serialize)]
pub struct ApplyReport {
    pub template: String,
    pub choseong: ComponentGrid,
    pub jungseong: ComponentGrid,
    pub jongseong: ComponentGrid,
    /// First placeholder id.
    pub start_pointer: u32,
    /// First id after the last placeholder.
    pub next_pointer: u32,
    /// Syllable glyphs whose component lists were rewritten.
    pub syllables: usize,
}

impl ApplyReport {
    pub fn grid(&self, class: JamoClass) -> &ComponentGrid {
        match class {
            JamoClass::Choseong => &self.choseong,
            JamoClass::Jungseong => &self.jungseong,
            JamoClass::Jongseong => &self.jongseong,
        }
    }

    /// Component ids a syllable receives under `selection`, in attach order.
    ///
    /// Fails with `VariantOutOfRange` if `selection` names a row the grids
    /// do not have.
    pub fn components_for(&self, syllable: Syllable, selection: VariantSelection) -> Result<Vec<u32>> {
        let counts = VariantCounts::new(self.choseong.rows(), self.jungseong.rows(), self.jongseong.rows());
        selection.check(&counts, &self.template, syllable)?;

        let mut ids = Vec::with_capacity(3);
        ids.extend(self.choseong.get(selection.choseong, syllable.choseong.index()));
        ids.extend(self.jungseong.get(selection.jungseong, syllable.jungseong.index()));
        if syllable.has_jongseong() {
            ids.extend(self.jongseong.get(selection.jongseong, syllable.jongseong.index()));
        }
        Ok(ids)
    }

    pub fn placeholder_count(&self) -> usize {
        (self.next_pointer - self.start_pointer) as usize
    }
}

impl HangulTemplate {
    /// Build a template. Fails if a count is zero or a documentation row
    /// count differs from the declared variant count.
    pub fn new<N, R>(name: N, counts: VariantCounts, rule: R, docs: TemplateDocs) -> Result<Self>
    where
        N: Into<String>,
        R: VariantRule + 'static,
    {
        let name = name.into();
        for class in JamoClass::ALL {
            let declared = counts.get(class);
            if declared == 0 {
                return Err(TemplateError::InvalidTemplate {
                    template: name,
                    reason: format!("{} declares no variants", class),
                });
            }
            let documented = docs.rows(class).len();
            if documented != declared {
                return Err(TemplateError::InvalidTemplate {
                    template: name,
                    reason: format!(
                        "{} declares {} variants but documents {}",
                        class, declared, documented
                    ),
                });
            }
        }
        Ok(Self {
            name,
            counts,
            rule: Box::new(rule),
            docs,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn counts(&self) -> VariantCounts {
        self.counts
    }

    pub fn docs(&self) -> &TemplateDocs {
        &self.docs
    }

    /// Documentation row of one variant.
    pub fn describe(&self, class: JamoClass, variant: usize) -> Option<&str> {
        self.docs.rows(class).get(variant).map(String::as_str)
    }

    /// Raw rule output, unchecked.
    pub fn select(&self, syllable: Syllable) -> VariantSelection {
        self.rule.select(syllable)
    }

    /// Rule output checked against the declared counts.
    pub fn checked_select(&self, syllable: Syllable) -> Result<VariantSelection> {
        let selection = self.rule.select(syllable);
        selection.check(&self.counts, &self.name, syllable)?;
        Ok(selection)
    }

    /// Check the rule over the whole 19 × 21 × 28 domain.
    pub fn validate_rule(&self) -> Result<()> {
        for syllable in Syllable::all() {
            self.checked_select(syllable)?;
        }
        Ok(())
    }

    /// Apply with the default (collision-rejecting) policy.
    pub fn apply<S: GlyphStore + ?Sized>(&self, project: &mut S, start: u32) -> Result<ApplyReport> {
        self.apply_with_policy(project, start, CollisionPolicy::Error)
    }

    /// Allocate the three component grids from `start` and wire every syllable
    /// glyph to its selected components.
    ///
    /// Preconditions: all syllable glyphs U+AC00..=U+D7A3 exist in `project`,
    /// the next `nCho·19 + nJung·21 + nJong·28` ids from `start` fit in
    /// `u32`, and (under `CollisionPolicy::Error`) those ids are unused.
    ///
    /// Component lists are replaced, so applying again rewires the same
    /// syllables instead of accumulating components.
    pub fn apply_with_policy<S: GlyphStore + ?Sized>(
        &self,
        project: &mut S,
        start: u32,
        policy: CollisionPolicy,
    ) -> Result<ApplyReport> {
        let mut plan = Vec::with_capacity(SYLLABLE_COUNT);
        for syllable in Syllable::all() {
            let selection = self.checked_select(syllable)?;
            let codepoint = syllable.codepoint();
            if !project.contains_glyph(codepoint) {
                return Err(TemplateError::MissingSyllableGlyph { codepoint });
            }
            plan.push((syllable, selection));
        }

        // Range and collisions are settled here so a failure writes nothing.
        let end = placeholder_end(start, self.counts.placeholder_count())?;
        for id in (start..end).filter(|&id| project.contains_glyph(id)) {
            let class = self.class_at(id - start);
            match policy {
                CollisionPolicy::Error => {
                    return Err(TemplateError::IdCollision {
                        id,
                        template: self.name.clone(),
                        class,
                    })
                }
                CollisionPolicy::Overwrite => {
                    tracing::warn!(id, template = %self.name, %class, "overwriting existing glyph with placeholder");
                }
            }
        }

        let (choseong, ptr) = write_grid(project, self.counts.choseong, JamoClass::Choseong, start, &self.name);
        let (jungseong, ptr) = write_grid(project, self.counts.jungseong, JamoClass::Jungseong, ptr, &self.name);
        let (jongseong, ptr) = write_grid(project, self.counts.jongseong, JamoClass::Jongseong, ptr, &self.name);

        let report = ApplyReport {
            template: self.name.clone(),
            choseong,
            jungseong,
            jongseong,
            start_pointer: start,
            next_pointer: ptr,
            syllables: plan.len(),
        };

        for (syllable, selection) in plan {
            let codepoint = syllable.codepoint();
            let mut glyph = project
                .get_glyph(codepoint)
                .ok_or(TemplateError::MissingSyllableGlyph { codepoint })?;
            let components = report.components_for(syllable, selection)?;
            glyph.clear_components();
            for id in components {
                glyph.add_component(id);
            }
            tracing::trace!(%syllable, ?selection, components = ?glyph.components(), "wired syllable");
            project.set_glyph(codepoint, glyph);
        }

        tracing::info!(
            template = %self.name,
            start = report.start_pointer,
            next = report.next_pointer,
            placeholders = report.placeholder_count(),
            syllables = report.syllables,
            "applied hangul template"
        );

        Ok(report)
    }

    /// Class whose grid holds the placeholder at `offset` from the start pointer.
    fn class_at(&self, offset: u32) -> JamoClass {
        let offset = offset as usize;
        let choseong_end = self.counts.choseong * JamoClass::Choseong.len();
        let jungseong_end = choseong_end + self.counts.jungseong * JamoClass::Jungseong.len();
        if offset < choseong_end {
            JamoClass::Choseong
        } else if offset < jungseong_end {
            JamoClass::Jungseong
        } else {
            JamoClass::Jongseong
        }
    }
}
