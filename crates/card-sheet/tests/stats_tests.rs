use card_sheet::*;

fn a4() -> Paper {
    Paper::from_preset(PaperSize::A4, Orientation::Portrait, Distance::mm(8.0)).unwrap()
}

fn card(label: &str) -> Component {
    Component::new(label, Size::inches(2.5, 3.5))
}

#[test]
fn test_stats_no_pages() {
    let stats = calculate_statistics(&[]);
    assert_eq!(stats.pages, 0);
    assert_eq!(stats.placements, 0);
    assert_eq!(stats.fill_ratio, 0.0);
}

#[test]
fn test_stats_duplex_counts_blanks() {
    let components = vec![card("a").with_back(card("a-back")), card("b"), card("c")];
    let pages = arrange(a4(), vec![Layout::new(components, Method::duplex())]).unwrap();

    let stats = calculate_statistics(&pages);
    assert_eq!(stats.pages, 2);
    assert_eq!(stats.placements, 6);
    assert_eq!(stats.blank_placements, 2);
    assert_eq!(stats.cut_guides, 0);
    assert_eq!(stats.fold_guides, 0);
}

#[test]
fn test_stats_guides() {
    let arrangement = Arrangement::new()
        .place(Distance::ZERO, Distance::ZERO)
        .cut(Distance::inches(3.5), Axis::Horizontal)
        .cut(Distance::inches(2.5), Axis::Vertical);
    let layouts = vec![
        Layout::new(vec![card("a"), card("b")], Method::Custom(arrangement)),
        Layout::new(
            vec![card("c").with_back(card("c-back"))],
            Method::fold(Distance::mm(2.0)),
        ),
    ];

    let stats = calculate_statistics(&arrange(a4(), layouts).unwrap());
    assert_eq!(stats.pages, 3);
    assert_eq!(stats.cut_guides, 4);
    assert_eq!(stats.fold_guides, 1);
}

#[test]
fn test_stats_fill_ratio() {
    let components = (0..9).map(|i| card(&format!("{i}"))).collect();
    let pages = arrange(a4(), vec![Layout::new(components, Method::natural())]).unwrap();

    let stats = calculate_statistics(&pages);
    let expected = 9.0 * 63.5 * 88.9 / (194.0 * 281.0);
    assert!((stats.fill_ratio - expected).abs() < 1e-3);
}
