use blocko::{clean_html_with_options, Options};

const INPUT: &str = "<p></p><p><b>a</b><b>b</b>  *c*</p><ul><li>d_e</li></ul><pre>f\n\ng</pre>";

#[test]
fn options_default_runs_every_pass() {
    let (html, stats) = clean_html_with_options(INPUT, &Options::default());
    assert_eq!(
        html,
        "<p><b>ab</b> \\*c\\*</p><ul><li><p>d\\_e</p></li></ul><pre>f\n\ng</pre>"
    );
    assert_eq!(stats.merged_siblings, 1);
    assert_eq!(stats.removed_paragraphs, 1);
    assert_eq!(stats.wrapped_list_items, 1);
}

#[test]
fn options_without_escaping() {
    let options = Options {
        escape_specials: false,
        ..Options::default()
    };
    let (html, stats) = clean_html_with_options(INPUT, &options);
    assert!(html.contains("<p><b>ab</b> *c*</p>"));
    assert!(html.contains("<li><p>d_e</p></li>"));
    assert_eq!(stats.escaped_text_nodes, 0);
}

#[test]
fn options_without_whitespace_normalization() {
    let options = Options {
        normalize_whitespace: false,
        ..Options::default()
    };
    let (html, _) = clean_html_with_options(INPUT, &options);
    assert!(html.contains("<b>ab</b>  \\*c\\*"));
}

#[test]
fn options_without_list_wrapping() {
    let options = Options {
        wrap_bare_list_items: false,
        ..Options::default()
    };
    let (html, stats) = clean_html_with_options(INPUT, &options);
    // list text is outside any paragraph, so it is not escaped either
    assert!(html.contains("<ul><li>d_e</li></ul>"));
    assert_eq!(stats.wrapped_list_items, 0);
}

#[test]
fn options_without_merging() {
    let options = Options {
        merge_siblings: false,
        ..Options::default()
    };
    let (html, _) = clean_html_with_options(INPUT, &options);
    assert!(html.contains("<b>a</b><b>b</b>"));
}

#[test]
fn options_without_paragraph_removal() {
    let options = Options {
        remove_empty_paragraphs: false,
        ..Options::default()
    };
    let (html, _) = clean_html_with_options(INPUT, &options);
    assert!(html.starts_with("<p></p>"));
}

#[test]
fn options_structure_only_and_text_only_compose() {
    let (structural, _) = clean_html_with_options(INPUT, &Options::structure_only());
    let (both, _) = clean_html_with_options(&structural, &Options::text_only());
    let (all, _) = clean_html_with_options(INPUT, &Options::default());
    assert_eq!(both, all);
}
