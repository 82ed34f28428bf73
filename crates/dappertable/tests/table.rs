//! End-to-end table behaviour: construction, row lifecycle and printing.

use dappertable::{
    display_width, DapperTable, DapperTableError, Header, HeaderSet, Line, Pagination, RowContent,
};

// ============================================================================
// Helpers
// ============================================================================

fn pos_name() -> HeaderSet {
    HeaderSet::new(vec![Header::new("pos", 3), Header::new("name", 4)]).unwrap()
}

fn paged(pagination: Pagination) -> DapperTable {
    DapperTable::new(None, pagination).unwrap()
}

// ============================================================================
// Printing scenarios
// ============================================================================

#[test]
fn row_count_pages_include_header_lines() {
    let mut table = DapperTable::new(Some(pos_name()), Pagination::ByRowCount(2)).unwrap();
    table.add_row(["1", "a"]).unwrap();
    table.add_row(["2", "b"]).unwrap();
    table.add_row(["3", "c"]).unwrap();

    assert_eq!(
        table.print().unwrap(),
        vec!["pos|| name\n----------", "1  || a\n2  || b", "3  || c"]
    );
}

#[test]
fn display_length_pages() {
    let mut table = paged(Pagination::ByDisplayLength(10));
    for _ in 0..3 {
        table.add_row("1234").unwrap();
    }
    assert_eq!(table.print().unwrap(), vec!["1234\n1234", "1234"]);
}

#[test]
fn display_length_line_too_long() {
    let mut table = paged(Pagination::ByDisplayLength(10));
    table.add_row("1234789012345").unwrap();

    let err = table.print().unwrap_err();
    assert!(matches!(
        &err,
        DapperTableError::Capacity { content, limit: 10 } if content == "1234789012345"
    ));
    let msg = err.to_string();
    assert!(msg.contains("1234789012345"));
    assert!(msg.contains("10"));
}

#[test]
fn prefix_and_suffix_on_boundary_pages() {
    let mut table = DapperTable::builder()
        .pagination(Pagination::ByDisplayLength(10))
        .prefix("[")
        .suffix("]")
        .build()
        .unwrap();
    for _ in 0..3 {
        table.add_row("1234").unwrap();
    }
    assert_eq!(table.print().unwrap(), vec!["[1234\n1234", "1234]"]);
}

#[test]
fn unpaginated_table_is_single_page() {
    let headers = HeaderSet::new(vec![Header::new("Pos", 3), Header::new("Title", 24)]).unwrap();
    let mut table = DapperTable::new(Some(headers), Pagination::None).unwrap();
    table.add_row(["1", "foo1234"]).unwrap();
    table.add_row(["2", "すせそなにぬねのまみむめも〜"]).unwrap();

    let pages = table.print().unwrap();
    assert_eq!(pages.len(), 1);
    assert_eq!(
        pages[0],
        "Pos|| Title\n-----------\n1  || foo1234\n2  || すせそなにぬねのまみむ.."
    );
    assert_eq!(table.print_single().unwrap(), pages[0]);
}

#[test]
fn row_count_after_adding_more_rows() {
    let headers = HeaderSet::new(vec![Header::new("Pos", 3), Header::new("Title", 24)]).unwrap();
    let mut table = DapperTable::new(Some(headers), Pagination::ByRowCount(3)).unwrap();
    table.add_row(["1", "foo1234"]).unwrap();
    table.add_row(["2", "すせそなにぬねのまみむめも〜"]).unwrap();
    table.add_row(["3", "日本語は"]).unwrap();

    let pages = table.print().unwrap();
    assert_eq!(
        pages,
        vec![
            "Pos|| Title\n-----------\n1  || foo1234",
            "2  || すせそなにぬねのまみむ..\n3  || 日本語は",
        ]
    );
}

#[test]
fn empty_table_prints_one_page() {
    let table = paged(Pagination::ByRowCount(5));
    assert_eq!(table.print().unwrap(), vec![""]);

    let table = DapperTable::new(Some(pos_name()), Pagination::None).unwrap();
    assert_eq!(table.print().unwrap(), vec!["pos|| name\n----------"]);
}

#[test]
fn enclosure_pages_stay_within_limit() {
    let mut table = DapperTable::builder()
        .headers(pos_name())
        .pagination(Pagination::ByDisplayLength(40))
        .prefix("Queue:\n")
        .enclosure("```\n", "\n```")
        .suffix("\nend")
        .build()
        .unwrap();
    for i in 0..12 {
        table.add_row([i.to_string(), "日本".to_string()]).unwrap();
    }

    let pages = table.print().unwrap();
    assert!(pages.len() > 1);
    for page in &pages {
        assert!(display_width(page) <= 40, "page too long: {:?}", page);
        assert!(page.contains("```\n"));
    }
    assert!(pages[0].starts_with("Queue:\n```\npos|| name"));
    assert!(pages.last().unwrap().ends_with("\n```\nend"));
}

#[test]
fn collapse_newlines_in_rows() {
    let mut table = paged(Pagination::None);
    table.add_row("first\n\n\nsecond").unwrap();
    table.add_row("").unwrap();
    table.add_row("third\n").unwrap();
    assert_eq!(table.print_single().unwrap(), "first\nsecond\nthird");

    let mut raw = DapperTable::builder().collapse_newlines(false).build().unwrap();
    raw.add_row("a").unwrap();
    raw.add_row("").unwrap();
    raw.add_row("b").unwrap();
    assert_eq!(raw.print_single().unwrap(), "a\n\nb");
}

// ============================================================================
// Row lifecycle
// ============================================================================

#[test]
fn edit_and_remove_rows() {
    let mut table = DapperTable::new(Some(pos_name()), Pagination::None).unwrap();
    table.add_row(["1", "a"]).unwrap();
    table.add_row(["2", "b"]).unwrap();
    table.add_row(["3", "c"]).unwrap();

    table.edit_row(1, ["2", "bee"]).unwrap();
    let removed = table.remove_row(0).unwrap();
    assert_eq!(removed, RowContent::from(["1", "a"]));
    assert_eq!(table.size(), 2);

    assert_eq!(
        table.print_single().unwrap(),
        "pos|| name\n----------\n2  || bee\n3  || c"
    );
}

#[test]
fn invalid_indices_rejected() {
    let mut table = paged(Pagination::None);
    table.add_row("only").unwrap();

    assert_eq!(
        table.edit_row(1, "x").unwrap_err(),
        DapperTableError::Index { index: 1, len: 1 }
    );
    assert_eq!(
        table.remove_row(3).unwrap_err(),
        DapperTableError::Index { index: 3, len: 1 }
    );
    assert_eq!(table.print_single().unwrap(), "only");
}

#[test]
fn header_lines_are_not_rows() {
    let mut table = DapperTable::new(Some(pos_name()), Pagination::None).unwrap();
    table.add_row(["1", "a"]).unwrap();
    assert_eq!(table.size(), 1);
    assert_eq!(table.lines().len(), 3);

    table.remove_row(0).unwrap();
    assert!(table.is_empty());
    assert_eq!(table.lines().len(), 2);
}

#[test]
fn zero_padded_index_across_boundary() {
    let headers = HeaderSet::new(vec![
        Header::new("#", 3).zero_pad_index(),
        Header::new("song", 6),
    ])
    .unwrap();
    let mut table = DapperTable::new(Some(headers), Pagination::None).unwrap();
    for i in 0..10 {
        table.add_row([i.to_string(), "x".to_string()]).unwrap();
    }

    let out = table.print_single().unwrap();
    let rows: Vec<&str> = out.lines().skip(2).collect();
    assert_eq!(rows[0], "00 || x");
    assert_eq!(rows[8], "08 || x");
    assert_eq!(rows[9], "09 || x");
}

// ============================================================================
// Construction errors
// ============================================================================

#[test]
fn construction_errors() {
    assert!(matches!(
        HeaderSet::new(vec![]),
        Err(DapperTableError::Config(_))
    ));
    assert!(matches!(
        paged_result(Pagination::ByRowCount(0)),
        Err(DapperTableError::Config(_))
    ));
    assert!(matches!(
        paged_result(Pagination::ByDisplayLength(0)),
        Err(DapperTableError::Config(_))
    ));

    let long_prefix = DapperTable::builder()
        .pagination(Pagination::ByDisplayLength(5))
        .prefix("123456")
        .build();
    assert!(matches!(long_prefix, Err(DapperTableError::Config(_))));

    let long_suffix = DapperTable::builder()
        .pagination(Pagination::ByDisplayLength(5))
        .suffix("日本語")
        .build();
    assert!(matches!(long_suffix, Err(DapperTableError::Config(_))));

    // Wrapper lengths only matter when pages are bounded by length
    assert!(DapperTable::builder()
        .pagination(Pagination::ByRowCount(1))
        .prefix("123456")
        .build()
        .is_ok());
}

fn paged_result(pagination: Pagination) -> dappertable::Result<DapperTable> {
    DapperTable::new(None, pagination)
}

// ============================================================================
// Paged lines
// ============================================================================

#[test]
fn paginated_lines_carry_sources() {
    let mut table = DapperTable::new(Some(pos_name()), Pagination::ByRowCount(2)).unwrap();
    table.add_row(["1", "a"]).unwrap();
    table.add_row(["2", "b"]).unwrap();

    let pages = table.get_paginated_lines().unwrap();
    assert_eq!(pages.len(), 2);
    assert!(pages[0].iter().all(|l| l.source.is_none()));
    assert_eq!(pages[1][0].source, Some(RowContent::from(["1", "a"])));
}

#[test]
fn edited_lines_render_without_rebuilding() {
    let mut table = DapperTable::new(Some(pos_name()), Pagination::ByRowCount(2)).unwrap();
    table.add_row(["1", "a"]).unwrap();
    table.add_row(["2", "b"]).unwrap();

    let mut pages = table.get_paginated_lines().unwrap();
    pages[1][1] = Line {
        text: format!("{} <- now playing", pages[1][1].text),
        source: pages[1][1].source.clone(),
    };

    assert_eq!(
        table.render(&pages),
        vec!["pos|| name\n----------", "1  || a\n2  || b <- now playing"]
    );
    // the table itself is untouched
    assert_eq!(table.print().unwrap()[1], "1  || a\n2  || b");
}
