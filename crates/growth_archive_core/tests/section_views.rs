use growth_archive_core::{
    build_card_view, build_structure_view, build_timeline_view, flatten_units, group_by_month,
    month_label, month_rank, AccordionState, CardView, Catalog, Category, RecordItem, RecordKind,
    RecordSource, Section, Subcategory, TimelineView, RECENT_LABEL,
};

fn dated(id: &str, date: &str) -> RecordItem {
    RecordItem::new(id, id, RecordKind::Observation, date)
}

fn entry_ids(view: &TimelineView, month: usize) -> Vec<String> {
    view.months()[month]
        .entries
        .iter()
        .map(|entry| entry.id.clone())
        .collect()
}

#[test]
fn card_view_item_count_matches_section_total() {
    for section in Catalog::builtin().sections() {
        let view = build_card_view(&flatten_units(&section.categories));
        assert_eq!(view.card_count(), section.item_count(), "section {}", section.id);
    }
}

#[test]
fn builtin_section_totals() {
    let catalog = Catalog::builtin();
    assert_eq!(catalog.section("growth-records").item_count(), 14);
    assert_eq!(catalog.section("english-course").item_count(), 8);
    assert_eq!(catalog.section("transition-course").item_count(), 10);
}

#[test]
fn card_view_merges_transition_subcategories_into_categories() {
    let section = Catalog::builtin().section("transition-course");
    let view = build_card_view(&flatten_units(&section.categories));

    let titles: Vec<&str> = view.groups().iter().map(|g| g.title.as_str()).collect();
    assert_eq!(titles, vec!["数学基础", "阅读与识字", "学习习惯", "综合衔接测评"]);
    let math: Vec<&str> = view.groups()[0].cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(math, vec!["math-qty-1", "math-calc-1", "math-shape-1"]);
}

#[test]
fn structure_and_card_views_omit_empty_categories() {
    let categories = vec![
        Category::with_items("a", "有记录", "x", vec![dated("a1", "11-01")]),
        Category::with_items("b", "无记录", "x", Vec::new()),
        Category::with_subcategories(
            "c",
            "空子分类",
            "x",
            vec![Subcategory::new("c-1", "空", Vec::new())],
        ),
    ];

    let structure = build_structure_view(&categories, |_| false, &AccordionState::default());
    let structure_ids: Vec<&str> = structure.groups().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(structure_ids, vec!["a"]);

    let cards = build_card_view(&flatten_units(&categories));
    let card_ids: Vec<&str> = cards.groups().iter().map(|g| g.unit_id.as_str()).collect();
    assert_eq!(card_ids, vec!["a"]);
}

#[test]
fn empty_section_signals_no_content_and_no_timeline() {
    let section = Section::new(
        "empty",
        "空档案",
        "x",
        vec![Category::with_items("a", "A", "x", Vec::new())],
    );
    let units = flatten_units(&section.categories);
    assert_eq!(build_card_view(&units), CardView::NoContent);
    assert_eq!(build_timeline_view(&units), TimelineView::NoData);
}

#[test]
fn growth_timeline_is_one_november_group_sorted_descending() {
    let section = Catalog::builtin().section("growth-records");
    let view = build_timeline_view(&flatten_units(&section.categories));

    assert_eq!(view.months().len(), 1);
    assert_eq!(view.months()[0].label, "十一月");
    assert_eq!(
        entry_ids(&view, 0),
        vec![
            "lang-1", "outdoor-1", "social-1", "lang-2", "craft-1", "habit-1", "social-2",
            "lang-3", "emo-1", "comp-1", "craft-2", "care-1", "outdoor-2", "cog-1",
        ]
    );
}

#[test]
fn timeline_sort_is_lexicographic_descending() {
    let items = vec![dated("a", "11-15"), dated("b", "11-20"), dated("c", "11-25")];
    let groups = group_by_month(&items);
    let dates: Vec<&str> = groups[0].1.iter().map(|i| i.date.as_str()).collect();
    assert_eq!(dates, vec!["11-25", "11-20", "11-15"]);
}

#[test]
fn timeline_excludes_undated_records() {
    let categories = vec![Category::with_items(
        "a",
        "A",
        "x",
        vec![dated("undated", ""), dated("dated", "10-03")],
    )];
    let view = build_timeline_view(&flatten_units(&categories));
    let all: Vec<String> = view
        .months()
        .iter()
        .flat_map(|m| m.entries.iter().map(|e| e.id.clone()))
        .collect();
    assert_eq!(all, vec!["dated"]);
}

#[test]
fn month_labels_follow_both_date_grammars() {
    assert_eq!(month_label("11-25"), "十一月");
    assert_eq!(month_label("2024年9月1日"), "九月");
    assert_eq!(month_label("not-a-date"), RECENT_LABEL);
}

#[test]
fn month_groups_rank_descending_with_recent_trailing() {
    let items = vec![
        dated("sep", "09-02"),
        dated("jun", "06-30"),
        dated("recent", "近日"),
        dated("oct", "10-11"),
        dated("jul", "07-04"),
        dated("aug", "08-15"),
    ];
    let labels: Vec<String> = group_by_month(&items)
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(labels, vec!["十月", "九月", "八月", "七月", "六月", RECENT_LABEL]);
}

#[test]
fn june_outranks_recent_even_when_recent_appears_first() {
    // "近日" sorts above every digit-led date byte-wise, so its group is
    // created before 六月.
    let items = vec![dated("jun", "06-30"), dated("recent", "近日"), dated("oct", "10-11")];
    let labels: Vec<String> = group_by_month(&items)
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(labels, vec!["十月", "六月", RECENT_LABEL]);
    assert_eq!(month_rank("六月"), 6);
}

#[test]
fn early_months_tie_with_recent_in_first_appearance_order() {
    let items = vec![dated("jan", "01-05"), dated("recent", "近日"), dated("may", "05-20")];
    let labels: Vec<String> = group_by_month(&items)
        .into_iter()
        .map(|(label, _)| label)
        .collect();

    assert_eq!(labels, vec![RECENT_LABEL, "五月", "一月"]);
    assert_eq!(month_rank("五月"), 0);
    assert_eq!(month_rank(RECENT_LABEL), 0);
}

#[test]
fn mixed_date_formats_keep_byte_order_quirk() {
    let items = vec![
        dated("short", "09-01"),
        dated("long", "2024年9月1日"),
        dated("nov", "11-25"),
    ];
    let groups = group_by_month(&items);

    let labels: Vec<&str> = groups.iter().map(|(label, _)| label.as_str()).collect();
    assert_eq!(labels, vec!["十一月", "九月"]);
    // "2024年..." compares above "09-01" because '2' > '0'.
    let september: Vec<&str> = groups[1].1.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(september, vec!["long", "short"]);
}
