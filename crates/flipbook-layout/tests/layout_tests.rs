use flipbook_layout::*;

fn filenames(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}

fn frames(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("frame-{:04}.png", i)).collect()
}

fn settings(rows: usize, columns: usize) -> LayoutSettings {
    LayoutSettings {
        rows,
        columns,
        ..Default::default()
    }
}

fn page_contents(document: &LayoutDocument) -> Vec<Vec<Option<String>>> {
    document
        .pages()
        .iter()
        .map(|page| {
            page.panels
                .iter()
                .map(|panel| panel.filename().map(str::to_string))
                .collect()
        })
        .collect()
}

fn some(name: &str) -> Option<String> {
    Some(name.to_string())
}

#[test]
fn test_sequential_five_frames_two_per_page() {
    let names = filenames(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
    let document = build_layout(&names, &settings(1, 2)).unwrap();

    assert_eq!(document.panel_count(), 5);
    assert_eq!(document.page_count(), 3);
    assert_eq!(document.page_direction(), PageDirection::Ltr);
    // Last page is short; there is no blank filler panel
    assert_eq!(
        page_contents(&document),
        vec![
            vec![some("a.png"), some("b.png")],
            vec![some("c.png"), some("d.png")],
            vec![some("e.png")],
        ]
    );
}

#[test]
fn test_imposition_one_panel_per_page_is_sequential() {
    let names = filenames(&["a.png", "b.png", "c.png", "d.png", "e.png"]);
    let mut options = settings(1, 1);
    options.order = PanelOrder::Imposition;

    let document = build_layout(&names, &options).unwrap();

    assert_eq!(document.page_count(), 5);
    assert_eq!(
        page_contents(&document),
        vec![
            vec![some("a.png")],
            vec![some("b.png")],
            vec![some("c.png")],
            vec![some("d.png")],
            vec![some("e.png")],
        ]
    );
}

#[test]
fn test_cover_with_flyleaves() {
    let names = filenames(&["a.png", "b.png"]);
    let mut options = settings(1, 2);
    options.flyleaves_count = 1;
    options.cover = CoverSelection::File("cvr.png".to_string());

    let document = build_layout(&names, &options).unwrap();

    assert_eq!(document.panel_count(), 5);
    assert_eq!(document.page_count(), 3);

    let panels: Vec<&Panel> = document.panels().collect();
    assert_eq!(panels[0].filename(), Some("cvr.png"));
    assert!(panels[0].is_cover);
    assert_eq!(panels[0].id, 1);
    assert!(panels[1].is_blank());
    assert_eq!(panels[2].filename(), Some("a.png"));
    assert_eq!(panels[3].filename(), Some("b.png"));
    assert!(panels[4].is_blank());
    assert_eq!(document.cover().map(|p| p.id), Some(1));
}

#[test]
fn test_imposition_multi_page() {
    // 6 frames, 2 per page => 3 pages: [1, 4], [2, 5], [3, 6]
    let names = filenames(&["1", "2", "3", "4", "5", "6"]);
    let mut options = settings(2, 1);
    options.order = PanelOrder::Imposition;

    let document = build_layout(&names, &options).unwrap();

    assert_eq!(
        page_contents(&document),
        vec![
            vec![some("1"), some("4")],
            vec![some("2"), some("5")],
            vec![some("3"), some("6")],
        ]
    );
}

#[test]
fn test_imposition_single_page_matches_sequential() {
    let names = frames(3);
    let mut imposed = settings(2, 3);
    imposed.order = PanelOrder::Imposition;

    let imposed = build_layout(&names, &imposed).unwrap();
    let sequential = build_layout(&names, &settings(2, 3)).unwrap();

    assert_eq!(imposed.page_count(), 1);
    assert_eq!(sequential.page_count(), 1);

    let imposed_frames: Vec<_> = imposed.panels().filter_map(Panel::filename).collect();
    let sequential_frames: Vec<_> = sequential.panels().filter_map(Panel::filename).collect();
    assert_eq!(imposed_frames, sequential_frames);
}

#[test]
fn test_page_count_formula() {
    for frame_count in 0..12 {
        for (rows, columns) in [(1, 1), (1, 2), (2, 2), (5, 2), (3, 4)] {
            for flyleaves in 0..3 {
                for with_cover in [false, true] {
                    let mut options = settings(rows, columns);
                    options.flyleaves_count = flyleaves;
                    if with_cover {
                        options.cover = CoverSelection::File("cover.png".to_string());
                    }

                    let document = build_layout(&frames(frame_count), &options).unwrap();

                    let panel_count = frame_count + 2 * flyleaves + usize::from(with_cover);
                    let expected_pages = panel_count.div_ceil(rows * columns);
                    assert_eq!(document.panel_count(), panel_count);
                    assert_eq!(document.page_count(), expected_pages);
                    assert_eq!(document.pages().len(), expected_pages);
                }
            }
        }
    }
}

#[test]
fn test_every_page_number_represented_once() {
    let mut options = settings(2, 2);
    options.flyleaves_count = 2;
    let document = build_layout(&frames(9), &options).unwrap();

    let mut numbers: Vec<usize> = document
        .pages()
        .iter()
        .map(|page| page.number().unwrap())
        .collect();
    numbers.sort_unstable();
    assert_eq!(numbers, (1..=document.page_count()).collect::<Vec<_>>());

    for page in document.pages() {
        let number = page.number().unwrap();
        assert!(page.panels.len() <= 4);
        assert!(page.panels.iter().all(|p| p.page == number));
    }
    assert!(
        document
            .panels()
            .all(|p| (1..=document.page_count()).contains(&p.page))
    );
}

#[test]
fn test_back_side_reverses_front() {
    let mut front = settings(2, 2);
    front.flyleaves_count = 1;
    front.cover = CoverSelection::File("cover.png".to_string());
    let mut back = front.clone();
    back.page_side = PageSide::Back;

    let front_doc = build_layout(&frames(10), &front).unwrap();
    let back_doc = build_layout(&frames(10), &back).unwrap();

    assert_eq!(back_doc.page_direction(), PageDirection::Rtl);
    assert_eq!(back_doc.panel_count(), front_doc.panel_count());

    let mut reversed = front_doc.pages().to_vec();
    reversed.reverse();
    assert_eq!(back_doc.pages(), reversed.as_slice());
}

#[test]
fn test_flyleaves_are_blank_at_both_ends() {
    let flyleaves = 2;
    for cover in [CoverSelection::None, CoverSelection::File("c.png".to_string())] {
        let mut options = settings(3, 2);
        options.flyleaves_count = flyleaves;
        options.cover = cover;

        let document = build_layout(&frames(7), &options).unwrap();
        let non_cover: Vec<&Panel> = document.panels().filter(|p| !p.is_cover).collect();

        assert!(non_cover[..flyleaves].iter().all(|p| p.is_blank()));
        assert!(
            non_cover[non_cover.len() - flyleaves..]
                .iter()
                .all(|p| p.is_blank())
        );
        assert!(document.panels().filter(|p| p.is_blank()).all(|p| !p.is_cover));
    }
}

#[test]
fn test_deterministic() {
    let mut options = settings(2, 3);
    options.order = PanelOrder::Imposition;
    options.flyleaves_count = 1;
    options.cover = CoverSelection::MedianFrame;

    let first = build_layout(&frames(17), &options).unwrap();
    let second = build_layout(&frames(17), &options).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_no_frames() {
    let document = build_layout(&[], &settings(2, 2)).unwrap();
    assert_eq!(document.panel_count(), 0);
    assert_eq!(document.page_count(), 0);
    assert!(document.pages().is_empty());

    let mut options = settings(2, 2);
    options.flyleaves_count = 1;
    let document = build_layout(&[], &options).unwrap();
    assert_eq!(document.panel_count(), 2);
    assert_eq!(document.page_count(), 1);
    assert!(document.panels().all(Panel::is_blank));
}

#[test]
fn test_median_cover_policy() {
    let names = filenames(&["a", "b", "c", "d", "e"]);
    let mut options = settings(1, 3);
    options.cover = CoverSelection::MedianFrame;

    let document = build_layout(&names, &options).unwrap();

    let cover = document.cover().unwrap();
    assert_eq!(cover.id, 1);
    assert_eq!(cover.filename(), Some("d"));
    // The chosen frame keeps its place in the sequence too
    assert_eq!(document.panel_count(), 6);
    assert_eq!(
        document
            .panels()
            .filter(|p| p.filename() == Some("d"))
            .count(),
        2
    );
}

#[test]
fn test_median_cover_without_frames() {
    let mut options = settings(1, 3);
    options.cover = CoverSelection::MedianFrame;

    let document = build_layout(&[], &options).unwrap();
    assert!(document.cover().is_none());
    assert_eq!(document.panel_count(), 0);
}

#[test]
fn test_invalid_grid_rejected() {
    for (rows, columns) in [(0, 2), (2, 0), (0, 0)] {
        let result = build_layout(&frames(3), &settings(rows, columns));
        match result {
            Err(LayoutError::Config(_)) => {}
            other => panic!("Expected Config error, got {:?}", other),
        }
    }
}

#[test]
fn test_panel_ids_follow_assembly_order() {
    let mut options = settings(2, 2);
    options.page_side = PageSide::Back;
    options.flyleaves_count = 1;

    let document = build_layout(&frames(6), &options).unwrap();

    // Pages are reversed but ids inside each page stay ascending
    for page in document.pages() {
        let ids: Vec<usize> = page.panels.iter().map(|p| p.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
    }
    assert_eq!(document.pages()[0].number(), Some(document.page_count()));
}

#[test]
fn test_imposition_padding_counts_as_panels() {
    let names = filenames(&["a", "b", "c", "d", "e"]);
    let mut options = settings(1, 2);
    options.order = PanelOrder::Imposition;
    options.cover = CoverSelection::File("cover.png".to_string());

    let document = build_layout(&names, &options).unwrap();

    // cover + [a, d, b, e, c, blank]
    assert_eq!(document.panel_count(), 7);
    assert_eq!(document.page_count(), 7_usize.div_ceil(2));
    assert_eq!(
        page_contents(&document),
        vec![
            vec![some("cover.png"), some("a")],
            vec![some("d"), some("b")],
            vec![some("e"), some("c")],
            vec![None],
        ]
    );
}
