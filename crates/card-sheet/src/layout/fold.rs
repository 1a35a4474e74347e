//! Fold layout: fronts on the top half, backs mirrored below a fold line

use log::debug;

use super::{Flow, pack_left_to_right};
use crate::component::Component;
use crate::geometry::{Distance, Size};
use crate::page::{CoordinateMode, Page, Placement};
use crate::types::*;

pub(crate) fn arrange_fold(
    components: &[Component],
    spacing: Size,
    gutter: Distance,
    bounds: Size,
) -> Result<Vec<Page>> {
    let Some(reference) = components.first() else {
        return Ok(Vec::new());
    };

    // Measured from the trim edge so the gutter is the trim-to-fold distance
    let trim_to_bleed = reference.real().bottom();
    let region = Size::new(bounds.width, bounds.height / 2.0 - gutter + trim_to_bleed);
    let extent = reference.portrait_oriented_extent();
    if !extent.fits_within(region) {
        return Err(ArrangeError::Invariant(format!(
            "fold reference component {} does not fit the half-page region {}",
            extent, region
        )));
    }
    let fold_y = region.height - trim_to_bleed + gutter;

    let halves = pack_left_to_right(components, spacing, region, Flow::Forward);
    debug!(
        "fold packed {} half pages, fold line at {}",
        halves.len(),
        fold_y
    );

    let mut pages = Vec::with_capacity(halves.len());
    for half in &halves {
        let mut page = Page::new(bounds, CoordinateMode::PageMargin);
        for placement in half.placements() {
            let front = &placement.component;
            page.arrange(front.front_only(), placement.x, placement.y, placement.rotation);
            if let Some(back) = front.back() {
                let (y, rotation) = folded_back_position(placement, back, fold_y);
                let extent = back.portrait_oriented_extent();
                if (placement.x + extent.width).exceeds(bounds.width)
                    || (y + extent.height).exceeds(bounds.height)
                {
                    return Err(ArrangeError::OutOfBounds(extent));
                }
                page.arrange(back.clone(), placement.x, y, rotation);
            }
        }
        page.fold(Distance::ZERO, fold_y, bounds.width, Axis::Horizontal);
        pages.push(page);
    }

    Ok(pages)
}

/// Where a back goes so folding at `fold_y` lays its trim edge over the front's
fn folded_back_position(
    front: &Placement,
    back: &Component,
    fold_y: Distance,
) -> (Distance, Rotation) {
    let front_trim_bottom = front.bottom() - front.component.real().bottom();
    let gap = fold_y - front_trim_bottom;
    let y = fold_y + gap - back.real().top();

    // Landscape cards turn over their long edge; portrait cards end up
    // upside down after folding unless pre-rotated
    let rotation = if front.component.is_landscape() {
        Rotation::None
    } else {
        Rotation::Clockwise180
    };
    (y, rotation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::GuideKind;

    fn paired(width: f32, height: f32, bleed: f32) -> Component {
        let bleed = Distance::mm(bleed);
        Component::with_cut_size("front", Size::mm(width, height), bleed)
            .with_back(Component::with_cut_size("back", Size::mm(width, height), bleed))
    }

    fn trim_edges(page: &Page) -> Vec<(Distance, Distance)> {
        let placements: Vec<&Placement> = page.placements().collect();
        placements
            .chunks(2)
            .map(|pair| {
                let front = pair[0];
                let back = pair[1];
                (
                    front.bottom() - front.component.real().bottom(),
                    back.y + back.component.real().top(),
                )
            })
            .collect()
    }

    #[test]
    fn test_fold_line_and_rotation_for_portrait() {
        let bounds = Size::mm(194.0, 281.0);
        let components = vec![paired(63.0, 88.0, 3.0), paired(63.0, 88.0, 3.0)];
        let pages = arrange_fold(&components, Size::ZERO, Distance::mm(2.0), bounds).unwrap();

        assert_eq!(pages.len(), 1);
        let page = &pages[0];
        let guide = page.guides().next().unwrap();
        assert_eq!(guide.kind, GuideKind::Fold);
        assert!(guide.y.approx_eq(Distance::mm(140.5)));
        assert_eq!(guide.length, bounds.width);

        let backs: Vec<&Placement> = page.placements().skip(1).step_by(2).collect();
        assert!(backs.iter().all(|b| b.rotation == Rotation::Clockwise180));
        assert!(backs.iter().all(|b| !b.bottom().exceeds(bounds.height)));
    }

    #[test]
    fn test_trim_edges_align_across_fold() {
        let bounds = Size::mm(194.0, 281.0);
        let gutter = Distance::mm(2.0);
        for components in [
            vec![paired(63.0, 88.0, 3.0); 3],
            vec![paired(88.0, 63.0, 3.0); 3],
        ] {
            let pages = arrange_fold(&components, Size::ZERO, gutter, bounds).unwrap();
            let fold_y = pages[0].guides().next().unwrap().y;

            for (front_trim, back_trim) in trim_edges(&pages[0]) {
                assert!((fold_y - front_trim).approx_eq(back_trim - fold_y));
                assert!(!(fold_y - front_trim).exceeds(Distance::mm(281.0 / 2.0)));
            }
        }
    }

    #[test]
    fn test_trim_edges_align_across_fold_on_every_row() {
        let bounds = Size::mm(194.0, 281.0);
        let components = vec![paired(25.0, 25.0, 2.0); 24];
        let pages = arrange_fold(&components, Size::mm(1.0, 1.0), Distance::mm(2.0), bounds)
            .unwrap();

        assert_eq!(pages.len(), 1);
        let fold_y = pages[0].guides().next().unwrap().y;
        let edges = trim_edges(&pages[0]);
        assert_eq!(edges.len(), 24);

        let mut rows: Vec<Distance> = edges.iter().map(|(front, _)| *front).collect();
        rows.dedup_by(|a, b| a.approx_eq(*b));
        assert!(rows.len() >= 2);

        for (front_trim, back_trim) in edges {
            assert!((fold_y - front_trim).approx_eq(back_trim - fold_y));
        }
        for back in pages[0].placements().skip(1).step_by(2) {
            assert!(!back.bottom().exceeds(bounds.height));
        }
    }

    #[test]
    fn test_back_taller_than_half_page_is_rejected() {
        let front = Component::new("front", Size::mm(63.0, 88.0))
            .with_back(Component::new("back", Size::mm(63.0, 120.0)));
        let result =
            arrange_fold(&[front], Size::ZERO, Distance::mm(2.0), Size::mm(194.0, 281.0));

        match result {
            Err(ArrangeError::OutOfBounds(size)) => assert_eq!(size, Size::mm(63.0, 120.0)),
            other => panic!("Expected OutOfBounds error, got {other:?}"),
        }
    }

    #[test]
    fn test_landscape_backs_are_not_rotated() {
        let components = vec![paired(88.0, 63.0, 0.0)];
        let pages =
            arrange_fold(&components, Size::ZERO, Distance::mm(2.0), Size::mm(194.0, 281.0))
                .unwrap();

        let back = pages[0].placements().nth(1).unwrap();
        assert_eq!(back.rotation, Rotation::None);
    }

    #[test]
    fn test_reference_component_must_fit_half_page() {
        let components = vec![paired(63.0, 200.0, 0.0)];
        let result =
            arrange_fold(&components, Size::ZERO, Distance::mm(2.0), Size::mm(194.0, 281.0));

        assert!(matches!(result, Err(ArrangeError::Invariant(_))));
    }

    #[test]
    fn test_components_without_backs_leave_gaps() {
        let components = vec![Component::new("solo", Size::mm(63.0, 88.0))];
        let pages =
            arrange_fold(&components, Size::ZERO, Distance::mm(2.0), Size::mm(194.0, 281.0))
                .unwrap();

        assert_eq!(pages[0].placements().count(), 1);
        assert_eq!(pages[0].guides().count(), 1);
    }
}
