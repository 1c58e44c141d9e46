//! Gallery reconciliation: map stored project records onto display cards.
//!
//! [`reconcile`] is pure and idempotent. It never mutates the input records;
//! every adjustment (seed artwork, placeholder de-duplication and backfill,
//! technology fallback, identity de-duplication) lives only on the returned
//! [`DisplayProject`] values and is recomputed on every render.

use std::collections::HashSet;

use serde::Serialize;

use crate::projects::ProjectRecord;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Number of placeholder images in a gallery.
pub const PLACEHOLDER_COUNT: usize = 3;

/// Stand-in images served from the static asset host.
pub const DEFAULT_PLACEHOLDERS: [&str; PLACEHOLDER_COUNT] =
    ["/project1.jpg", "/project2.jpg", "/project3.jpg"];

/// Canonical showcase records. `SEED_IDS[i]` always renders placeholder `i`.
pub const SEED_IDS: [DbId; PLACEHOLDER_COUNT] = [1, 2, 3];

/// Labels shown for a project that has no technologies of its own.
pub const DEFAULT_TECHNOLOGIES: [&str; 3] = ["HTML", "CSS", "JavaScript"];

/// Technology labels shown on a card before the "+N more" counter.
pub const VISIBLE_TECHNOLOGY_COUNT: usize = 3;

// ---------------------------------------------------------------------------
// Placeholders
// ---------------------------------------------------------------------------

/// The fixed, ordered placeholder set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders([String; PLACEHOLDER_COUNT]);

impl Placeholders {
    pub fn new(images: [String; PLACEHOLDER_COUNT]) -> Self {
        Self(images)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Slot index of `image` if it is one of the placeholders.
    pub fn position(&self, image: &str) -> Option<usize> {
        self.0.iter().position(|p| p == image)
    }

    fn for_seed(&self, id: Option<DbId>) -> Option<&str> {
        let id = id?;
        SEED_IDS
            .iter()
            .position(|seed| *seed == id)
            .map(|slot| self.0[slot].as_str())
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        Self(DEFAULT_PLACEHOLDERS.map(String::from))
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

/// Where a card's image came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSource {
    /// The record's own `imageUrl`.
    Authored,
    /// Forced placeholder for a seed record.
    Seed,
    /// An unused placeholder assigned to an imageless record.
    Placeholder,
    /// No image; render the empty-state tile.
    None,
}

/// A record plus its resolved display attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayProject {
    /// The record exactly as received.
    pub record: ProjectRecord,
    pub display_image: Option<String>,
    pub image_source: ImageSource,
    pub display_technologies: Vec<String>,
    /// `true` when `display_technologies` is [`DEFAULT_TECHNOLOGIES`] rather
    /// than authored data.
    pub technologies_fallback: bool,
}

impl DisplayProject {
    /// Labels to render on the card and the count of labels left over.
    pub fn visible_technologies(&self) -> (&[String], usize) {
        truncate_technologies(&self.display_technologies)
    }
}

/// Split a label list into the first [`VISIBLE_TECHNOLOGY_COUNT`] labels and
/// the number of remaining ones.
pub fn truncate_technologies(technologies: &[String]) -> (&[String], usize) {
    let shown = technologies.len().min(VISIBLE_TECHNOLOGY_COUNT);
    (&technologies[..shown], technologies.len() - shown)
}

// ---------------------------------------------------------------------------
// Reconciler
// ---------------------------------------------------------------------------

/// Produce the ordered, de-duplicated display list for `records`.
///
/// 1. Sort ascending by id (missing id sorts as 0); the sort is stable.
/// 2. Seed ids take their placeholder regardless of the stored image.
/// 3. The first record showing a placeholder claims it; later records showing
///    the same placeholder lose their image.
/// 4. Unclaimed placeholders go, in order, to the imageless records in scan
///    order, one each.
/// 5. Records without technologies display [`DEFAULT_TECHNOLOGIES`].
/// 6. Entries sharing an identity key are collapsed to the first one.
pub fn reconcile(records: &[ProjectRecord], placeholders: &Placeholders) -> Vec<DisplayProject> {
    let mut ordered: Vec<&ProjectRecord> = records.iter().collect();
    ordered.sort_by_key(|record| record.id.unwrap_or(0));

    let mut claimed = [false; PLACEHOLDER_COUNT];
    let mut images: Vec<(Option<String>, ImageSource)> = Vec::with_capacity(ordered.len());

    for record in &ordered {
        let (image, source) = match placeholders.for_seed(record.id) {
            Some(seed) => (Some(seed.to_string()), ImageSource::Seed),
            None => match record.image_url.as_deref().filter(|u| !u.is_empty()) {
                Some(url) => (Some(url.to_string()), ImageSource::Authored),
                None => (None, ImageSource::None),
            },
        };

        let slot = image.as_deref().and_then(|url| placeholders.position(url));
        match slot {
            Some(slot) if claimed[slot] => images.push((None, ImageSource::None)),
            Some(slot) => {
                claimed[slot] = true;
                images.push((image, source));
            }
            None => images.push((image, source)),
        }
    }

    let mut unclaimed = placeholders
        .as_slice()
        .iter()
        .zip(claimed)
        .filter(|(_, taken)| !taken)
        .map(|(placeholder, _)| placeholder);

    for (image, source) in images.iter_mut().filter(|(image, _)| image.is_none()) {
        let Some(placeholder) = unclaimed.next() else {
            break;
        };
        *image = Some(placeholder.clone());
        *source = ImageSource::Placeholder;
    }

    let mut seen = HashSet::with_capacity(ordered.len());
    ordered
        .into_iter()
        .zip(images)
        .filter(|(record, _)| seen.insert(identity_key(record)))
        .map(|(record, (display_image, image_source))| {
            let technologies_fallback = record.technologies.is_empty();
            let display_technologies = if technologies_fallback {
                DEFAULT_TECHNOLOGIES.map(String::from).to_vec()
            } else {
                record.technologies.clone()
            };
            DisplayProject {
                record: record.clone(),
                display_image,
                image_source,
                display_technologies,
                technologies_fallback,
            }
        })
        .collect()
}

/// Identity used for display de-duplication.
///
/// Records with a non-zero id use `id:<id>`; the rest fall back to their
/// trimmed title and description.
pub fn identity_key(record: &ProjectRecord) -> String {
    match record.id {
        Some(id) if id != 0 => format!("id:{id}"),
        _ => format!(
            "txt:{}|{}",
            record.title.trim(),
            record.description.trim()
        ),
    }
}
