//! Showcase page layout
//!
//! The page is laid out in document rows. Controllers work in pixel-like
//! document units, so every cell maps to a `CELL_WIDTH` x `CELL_HEIGHT`
//! box; reveal offsets and root margins keep their usual magnitudes.

use aperture_core::geometry::{Point, Rect};
use aperture_core::reveal::RevealVariant;

pub const CELL_WIDTH: f64 = 8.0;
pub const CELL_HEIGHT: f64 = 16.0;

/// Horizontal inset of framed blocks, in cells
pub const INSET: u16 = 4;

const HERO_ROWS: u16 = 12;
const SECTION_ROWS: u16 = 7;
const PICTURE_BLOCK_ROWS: u16 = 16;
const GALLERY_ROWS: u16 = 10;
const FOOTER_ROWS: u16 = 5;
const GAP: u16 = 2;

/// Procedural stand-in for a photograph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scene {
    Coast,
    Portrait,
    Skyline,
    Forest,
    Studio,
}

#[derive(Debug, Clone)]
pub struct Photo {
    pub title: &'static str,
    pub caption: &'static str,
    pub scene: Scene,
}

pub fn gallery_photos() -> Vec<Photo> {
    vec![
        Photo {
            title: "Golden Hour",
            caption: "Coastline, late September",
            scene: Scene::Coast,
        },
        Photo {
            title: "Quiet Light",
            caption: "Window portrait, north light",
            scene: Scene::Portrait,
        },
        Photo {
            title: "Blue City",
            caption: "Skyline after rain",
            scene: Scene::Skyline,
        },
        Photo {
            title: "Understory",
            caption: "Forest floor, 35mm",
            scene: Scene::Forest,
        },
        Photo {
            title: "Paper Backdrop",
            caption: "Studio session, two lights",
            scene: Scene::Studio,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub enum BlockKind {
    Hero,
    Section {
        title: &'static str,
        body: &'static str,
        variant: RevealVariant,
    },
    Compare,
    Zoom,
    Gallery,
    Footer,
}

impl BlockKind {
    /// Blocks that animate in on scroll
    pub fn reveal_variant(&self) -> Option<RevealVariant> {
        match self {
            BlockKind::Section { variant, .. } => Some(*variant),
            BlockKind::Footer => Some(RevealVariant::None),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    /// First document row
    pub top: u16,
    pub height: u16,
}

impl Block {
    pub fn bottom(&self) -> u16 {
        self.top + self.height
    }
}

/// Cell-space rectangle inside the document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub col: u16,
    pub row: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    /// Same area in document units
    pub fn to_document(self) -> Rect {
        Rect::new(
            self.col as f64 * CELL_WIDTH,
            self.row as f64 * CELL_HEIGHT,
            self.width as f64 * CELL_WIDTH,
            self.height as f64 * CELL_HEIGHT,
        )
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        col >= self.col
            && col < self.col + self.width
            && row >= self.row
            && row < self.row + self.height
    }
}

#[derive(Debug, Clone)]
pub struct PageLayout {
    pub width: u16,
    pub blocks: Vec<Block>,
    pub height: u16,
}

impl PageLayout {
    /// Stack the showcase blocks for a terminal `width` cells wide
    pub fn build(width: u16, about_variant: RevealVariant) -> Self {
        let kinds = [
            (BlockKind::Hero, HERO_ROWS),
            (
                BlockKind::Section {
                    title: "About the Studio",
                    body: "Natural light, honest moments and prints that last. \
                           Every session is planned around the story you want to keep.",
                    variant: about_variant,
                },
                SECTION_ROWS,
            ),
            (
                BlockKind::Section {
                    title: "Portrait Sessions",
                    body: "Individual, family and headshot sessions in the studio or on location.",
                    variant: RevealVariant::SlideUp,
                },
                SECTION_ROWS,
            ),
            (
                BlockKind::Section {
                    title: "Weddings",
                    body: "Full-day coverage from preparation to the last dance.",
                    variant: RevealVariant::SlideIn,
                },
                SECTION_ROWS,
            ),
            (
                BlockKind::Section {
                    title: "Commercial",
                    body: "Product, food and interior work for brands that care about craft.",
                    variant: RevealVariant::Scale,
                },
                SECTION_ROWS,
            ),
            (BlockKind::Compare, PICTURE_BLOCK_ROWS),
            (BlockKind::Zoom, PICTURE_BLOCK_ROWS),
            (BlockKind::Gallery, GALLERY_ROWS),
            (BlockKind::Footer, FOOTER_ROWS),
        ];

        let mut blocks = Vec::with_capacity(kinds.len());
        let mut row = 0u16;
        for (kind, height) in kinds {
            blocks.push(Block {
                kind,
                top: row,
                height,
            });
            row += height + GAP;
        }

        Self {
            width,
            blocks,
            height: row.saturating_sub(GAP),
        }
    }

    pub fn block(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    fn find(&self, predicate: impl Fn(&BlockKind) -> bool) -> Option<&Block> {
        self.blocks.iter().find(|b| predicate(&b.kind))
    }

    /// Whole block in cells, full width
    pub fn block_cells(&self, block: &Block) -> CellRect {
        CellRect {
            col: 0,
            row: block.top,
            width: self.width,
            height: block.height,
        }
    }

    /// Picture area inside a framed block: below the title row, inset
    fn picture_cells(&self, block: &Block) -> CellRect {
        CellRect {
            col: INSET + 1,
            row: block.top + 2,
            width: self.width.saturating_sub(2 * INSET + 2),
            height: block.height.saturating_sub(4),
        }
    }

    pub fn compare_cells(&self) -> CellRect {
        self.find(|k| *k == BlockKind::Compare)
            .map(|b| self.picture_cells(b))
            .unwrap_or_default()
    }

    pub fn zoom_cells(&self) -> CellRect {
        self.find(|k| *k == BlockKind::Zoom)
            .map(|b| self.picture_cells(b))
            .unwrap_or_default()
    }

    /// One thumbnail per photo, side by side in the gallery strip
    pub fn thumbnail_cells(&self, count: usize) -> Vec<CellRect> {
        let Some(block) = self.find(|k| *k == BlockKind::Gallery) else {
            return Vec::new();
        };
        if count == 0 {
            return Vec::new();
        }
        let area = self.picture_cells(block);
        let slot = area.width / count as u16;
        (0..count as u16)
            .map(|i| CellRect {
                col: area.col + i * slot,
                row: area.row,
                width: slot.saturating_sub(1),
                height: area.height,
            })
            .collect()
    }

    /// Furthest scroll row for a viewport `rows` tall
    pub fn max_scroll(&self, rows: u16) -> u16 {
        self.height.saturating_sub(rows)
    }
}

/// Document position of the center of a screen cell
pub fn cell_center(col: u16, doc_row: f64) -> Point {
    Point::new(
        (col as f64 + 0.5) * CELL_WIDTH,
        (doc_row + 0.5) * CELL_HEIGHT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_do_not_overlap() {
        let layout = PageLayout::build(80, RevealVariant::FadeIn);
        for pair in layout.blocks.windows(2) {
            assert!(pair[0].bottom() < pair[1].top);
        }
        assert_eq!(layout.height, layout.blocks.last().unwrap().bottom());
    }

    #[test]
    fn test_footer_never_animates() {
        let layout = PageLayout::build(80, RevealVariant::FadeIn);
        let footer = layout.blocks.last().unwrap();
        assert_eq!(footer.kind.reveal_variant(), Some(RevealVariant::None));
    }

    #[test]
    fn test_picture_regions_sit_inside_blocks() {
        let layout = PageLayout::build(80, RevealVariant::FadeIn);
        let compare = layout.compare_cells();
        assert_eq!(compare.col, INSET + 1);
        assert_eq!(compare.width, 80 - 2 * INSET - 2);
        assert!(compare.height > 0);
        assert_eq!(compare.to_document().left, (INSET + 1) as f64 * CELL_WIDTH);
    }

    #[test]
    fn test_cell_maps_to_eight_by_sixteen_units() {
        let cell = CellRect {
            col: 2,
            row: 3,
            width: 1,
            height: 1,
        };
        let rect = cell.to_document();
        assert_eq!((rect.left, rect.top), (16.0, 48.0));
        assert_eq!((rect.width, rect.height), (8.0, 16.0));
    }

    #[test]
    fn test_thumbnails_split_strip() {
        let layout = PageLayout::build(80, RevealVariant::FadeIn);
        let thumbs = layout.thumbnail_cells(5);
        assert_eq!(thumbs.len(), 5);
        assert!(thumbs.windows(2).all(|p| p[0].col + p[0].width < p[1].col));
        assert!(layout.thumbnail_cells(0).is_empty());
    }

    #[test]
    fn test_max_scroll() {
        let layout = PageLayout::build(80, RevealVariant::FadeIn);
        assert_eq!(layout.max_scroll(layout.height + 10), 0);
        assert_eq!(layout.max_scroll(20), layout.height - 20);
    }
}
