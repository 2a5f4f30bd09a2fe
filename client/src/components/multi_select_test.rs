use super::*;

fn option(name: &str) -> DatabaseOption {
    DatabaseOption {
        dbname: name.to_owned(),
        query_count: 1,
        total_occurrences: 1,
    }
}

fn names(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn filter_is_case_insensitive_substring() {
    let options = vec![option("Orders"), option("users"), option("order_archive")];
    let hits = filter_options(&options, "ORDER");
    assert_eq!(hits.len(), 2);
    assert_eq!(filter_options(&options, "  ").len(), 3);
    assert!(filter_options(&options, "billing").is_empty());
}

#[test]
fn toggle_selection_adds_and_removes() {
    let selected = names(&["a", "b"]);
    assert_eq!(toggle_selection(&selected, "c"), names(&["a", "b", "c"]));
    assert_eq!(toggle_selection(&selected, "a"), names(&["b"]));
}

#[test]
fn toggle_all_selects_visible_then_clears() {
    let options = vec![option("a"), option("b")];
    let visible = options.iter().collect::<Vec<_>>();
    let all = toggle_all(&[], &visible);
    assert_eq!(all, names(&["a", "b"]));
    assert!(all_visible_selected(&all, &visible));
    assert!(toggle_all(&all, &visible).is_empty());
}

#[test]
fn toggle_all_with_no_visible_options_clears() {
    assert!(toggle_all(&names(&["a"]), &[]).is_empty());
    assert!(!all_visible_selected(&names(&["a"]), &[]));
}

#[test]
fn display_text_collapses_long_selections() {
    assert_eq!(display_text(&[], "All databases"), "All databases");
    assert_eq!(display_text(&names(&["a"]), "x"), "a");
    assert_eq!(display_text(&names(&["a", "b"]), "x"), "a, b");
    assert_eq!(display_text(&names(&["a", "b", "c", "d"]), "x"), "a, b and 2 more");
}
