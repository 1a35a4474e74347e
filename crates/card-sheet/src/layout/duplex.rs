//! Double-sided layout: every front page is followed by its back page

use log::debug;

use super::{Flow, pack_left_to_right};
use crate::component::Component;
use crate::geometry::Size;
use crate::page::Page;
use crate::types::*;

pub(crate) fn arrange_duplex(
    components: &[Component],
    spacing: Size,
    bounds: Size,
) -> Result<Vec<Page>> {
    let fronts: Vec<Component> = components.iter().map(Component::front_only).collect();
    let backs: Vec<Component> = components.iter().map(Component::back_or_blank).collect();

    let front_pages = pack_left_to_right(&fronts, spacing, bounds, Flow::Forward);
    let back_pages = pack_left_to_right(&backs, spacing, bounds, Flow::Reverse);
    debug!(
        "duplex packed {} front pages and {} back pages",
        front_pages.len(),
        back_pages.len()
    );

    interleave(front_pages, back_pages)
}

/// Pair front and back pages one to one
pub(crate) fn interleave(front_pages: Vec<Page>, back_pages: Vec<Page>) -> Result<Vec<Page>> {
    if front_pages.len() != back_pages.len() {
        return Err(ArrangeError::Invariant(format!(
            "duplex produced {} front pages but {} back pages",
            front_pages.len(),
            back_pages.len()
        )));
    }

    let pages: Vec<Page> = front_pages
        .into_iter()
        .zip(back_pages)
        .flat_map(|(front, back)| [front, back])
        .collect();

    if pages.len() % 2 != 0 {
        return Err(ArrangeError::Invariant(format!(
            "duplex produced an odd page count ({})",
            pages.len()
        )));
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Distance;
    use crate::page::CoordinateMode;

    fn card(label: &str) -> Component {
        Component::new(label, Size::mm(60.0, 90.0))
    }

    #[test]
    fn test_missing_backs_become_blanks() {
        let components = vec![card("a").with_back(card("a-back")), card("b")];
        let pages = arrange_duplex(&components, Size::ZERO, Size::mm(200.0, 280.0)).unwrap();

        assert_eq!(pages.len(), 2);
        let back: Vec<&Component> = pages[1].placements().map(|p| &p.component).collect();
        assert_eq!(back[0].label, "a-back");
        assert!(back[1].is_blank());
        assert_eq!(back[1].portrait_oriented_extent(), Size::mm(60.0, 90.0));
    }

    #[test]
    fn test_back_page_mirrors_front_page() {
        let components = vec![
            card("a").with_back(card("a-back")),
            card("b").with_back(card("b-back")),
        ];
        let pages = arrange_duplex(&components, Size::ZERO, Size::mm(200.0, 280.0)).unwrap();

        let front_x: Vec<Distance> = pages[0].placements().map(|p| p.x).collect();
        let back_x: Vec<Distance> = pages[1].placements().map(|p| p.x).collect();
        assert_eq!(front_x, vec![Distance::ZERO, Distance::mm(60.0)]);
        assert_eq!(back_x, vec![Distance::mm(60.0), Distance::ZERO]);
    }

    #[test]
    fn test_page_count_is_even_across_page_breaks() {
        let components: Vec<Component> = (0..13).map(|i| card(&format!("c{i}"))).collect();
        let pages = arrange_duplex(&components, Size::ZERO, Size::mm(130.0, 280.0)).unwrap();

        // 6 per page: 3 front pages, 3 back pages
        assert_eq!(pages.len(), 6);
        assert_eq!(pages.len() % 2, 0);
    }

    #[test]
    fn test_mismatched_page_lists_are_rejected() {
        let bounds = Size::mm(100.0, 100.0);
        let fronts = vec![
            Page::new(bounds, CoordinateMode::BoundingBox),
            Page::new(bounds, CoordinateMode::BoundingBox),
        ];
        let backs = vec![Page::new(bounds, CoordinateMode::BoundingBox)];

        let result = interleave(fronts, backs);
        assert!(matches!(result, Err(ArrangeError::Invariant(_))));
    }

    #[test]
    fn test_oversized_backs_break_pairing() {
        // Backs larger than their fronts need more pages than the fronts do
        let components: Vec<Component> = (0..2)
            .map(|i| {
                card(&format!("c{i}"))
                    .with_back(Component::new("wide", Size::mm(90.0, 200.0)))
            })
            .collect();
        let result = arrange_duplex(&components, Size::ZERO, Size::mm(130.0, 280.0));

        assert!(matches!(result, Err(ArrangeError::Invariant(_))));
    }
}
