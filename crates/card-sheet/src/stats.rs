use crate::page::{GuideKind, Page};

/// Summary of an arrangement result
#[derive(Debug, Clone, PartialEq)]
pub struct ArrangementStatistics {
    /// Total number of pages produced
    pub pages: usize,
    /// Placed components, blanks included
    pub placements: usize,
    /// Blank placeholders standing in for missing backs
    pub blank_placements: usize,
    pub cut_guides: usize,
    pub fold_guides: usize,
    /// Share of the pages' printable area covered by non-blank components
    pub fill_ratio: f32,
}

/// Calculate statistics for a list of arranged pages
pub fn calculate_statistics(pages: &[Page]) -> ArrangementStatistics {
    let mut placements = 0;
    let mut blank_placements = 0;
    let mut covered_mm2 = 0.0;
    let mut available_mm2 = 0.0;

    for page in pages {
        available_mm2 += page.extent().area_mm2();
        for placement in page.placements() {
            placements += 1;
            if placement.component.is_blank() {
                blank_placements += 1;
            } else {
                covered_mm2 += placement.extent().area_mm2();
            }
        }
    }

    let count_guides = |kind: GuideKind| {
        pages
            .iter()
            .flat_map(|page| page.guides())
            .filter(|guide| guide.kind == kind)
            .count()
    };

    let fill_ratio = if available_mm2 > 0.0 {
        covered_mm2 / available_mm2
    } else {
        0.0
    };

    ArrangementStatistics {
        pages: pages.len(),
        placements,
        blank_placements,
        cut_guides: count_guides(GuideKind::Cut),
        fold_guides: count_guides(GuideKind::Fold),
        fill_ratio,
    }
}
