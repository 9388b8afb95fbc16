//! Tests for whole-document placeholder replacement

#[cfg(test)]
mod tests {
    use clockface::substitution::filter::ImageSubsets;
    use clockface::substitution::slots::Slot;
    use clockface::substitution::substitutor::substitute;

    fn subsets(paths: &[&str]) -> ImageSubsets {
        let list: Vec<String> = paths.iter().map(|&p| p.to_owned()).collect();
        ImageSubsets::from_images(&list)
    }

    fn placeholder(n: usize) -> String {
        format!(r#"<div class="image-placeholder">IMG {n}</div>"#)
    }

    fn all_placeholders() -> String {
        (1..=24).map(placeholder).collect::<Vec<_>>().join("\n")
    }

    // Tests hand slots fill in order and the rest stay untouched
    // Verified by filling slots past the subset length
    #[test]
    fn test_partial_hand_fill() {
        let html = all_placeholders();
        let result = substitute(&html, &subsets(&["/hand/a.png", "/hand/b.png"]));

        assert!(
            result
                .html
                .contains(r#"<img src="/hand/a.png" alt="Hand Image 1" class="clock-image">"#)
        );
        assert!(
            result
                .html
                .contains(r#"<img src="/hand/b.png" alt="Hand Image 2" class="clock-image">"#)
        );
        for n in 3..=24 {
            assert!(result.html.contains(&placeholder(n)), "slot {n} should remain");
        }
        assert_eq!(result.report.filled.len(), 2);
        assert_eq!(result.report.unavailable.len(), 22);
    }

    // Tests additional slots map from index zero at slot 13
    // Verified by offsetting additional index by twelve
    #[test]
    fn test_additional_slot_13() {
        let html = format!("<main>{}</main>", placeholder(13));
        let result = substitute(&html, &subsets(&["/collection/x.png"]));

        assert_eq!(
            result.html,
            r#"<main><img src="/collection/x.png" alt="Additional Image 13" class="additional-clock-image"></main>"#
        );
        assert_eq!(result.report.filled, vec![Slot::new(13).unwrap()]);
    }

    // Tests repeated placeholders are all replaced identically
    // Verified by replacing only the first occurrence
    #[test]
    fn test_global_replacement() {
        let html = format!("{0} and again {0}", placeholder(1));
        let result = substitute(&html, &subsets(&["/hand/a.png"]));

        assert!(!result.html.contains("IMG 1<"));
        assert_eq!(result.html.matches("Hand Image 1").count(), 2);
        assert_eq!(result.report.occurrences, 2);
    }

    // Tests IMG 1 does not clobber the prefix of IMG 10..12
    // Verified by dropping the closing tag from the placeholder
    #[test]
    fn test_no_prefix_collision() {
        let html = format!("{}{}", placeholder(1), placeholder(10));
        let result = substitute(&html, &subsets(&["/hand/a.png"]));

        assert!(result.html.contains(&placeholder(10)));
        assert!(!result.html.contains(&placeholder(1)));
    }

    // Tests documents without placeholders are returned unchanged
    // Verified by normalizing whitespace in output
    #[test]
    fn test_no_placeholders_unchanged() {
        let html = "<html>\n  <body>IMG 1 <div>IMG 2</div></body>\n</html>\n";
        let result = substitute(html, &subsets(&["/hand/a.png", "/hand/b.png"]));

        assert_eq!(result.html, html);
        assert!(result.report.is_unchanged());
        assert!(result.report.filled.is_empty());
    }

    // Tests an empty image list leaves every placeholder
    // Verified by substituting empty paths
    #[test]
    fn test_empty_list_unchanged() {
        let html = all_placeholders();
        let result = substitute(&html, &ImageSubsets::default());

        assert_eq!(result.html, html);
        assert_eq!(result.report.unavailable.len(), 24);
    }

    // Tests a second pass over output performs no substitutions
    // Verified by matching placeholders loosely
    #[test]
    fn test_second_pass_is_noop() {
        let images = subsets(&["/hand/a.png", "/polka/p.png"]);
        let first = substitute(&all_placeholders(), &images);
        let second = substitute(&first.html, &images);

        assert_eq!(second.html, first.html);
        assert!(second.report.is_unchanged());
    }

    // Tests a path matching both filters fills both groups
    // Verified by making filters exclusive
    #[test]
    fn test_shared_path_fills_both_groups() {
        let html = format!("{}|{}", placeholder(1), placeholder(13));
        let result = substitute(&html, &subsets(&["/hand/collection/z.png"]));

        assert_eq!(
            result.html,
            concat!(
                r#"<img src="/hand/collection/z.png" alt="Hand Image 1" class="clock-image">|"#,
                r#"<img src="/hand/collection/z.png" alt="Additional Image 13" class="additional-clock-image">"#
            )
        );
    }
}
