use pretty_assertions::assert_eq;
use server::excerpt::rewrite_relative_links;

const BASE: &str = "https://www.courtlistener.com";

#[test]
fn realistic_excerpt_with_citations_is_rewritten() {
    let html = concat!(
        r#"<p>The rule in <a href="/opinion/103222/pierson-v-post/">Pierson v. Post</a> "#,
        r#"controls. See also <a href="/opinion/108713/ghen-v-rich/">Ghen v. Rich</a>, "#,
        r#"which applied the custom of the whaling trade.</p>"#,
    );
    let out = rewrite_relative_links(html, BASE);
    assert_eq!(
        out,
        concat!(
            r#"<p>The rule in <a href="https://www.courtlistener.com/opinion/103222/pierson-v-post/">Pierson v. Post</a> "#,
            r#"controls. See also <a href="https://www.courtlistener.com/opinion/108713/ghen-v-rich/">Ghen v. Rich</a>, "#,
            r#"which applied the custom of the whaling trade.</p>"#,
        )
    );
}

#[test]
fn excerpt_with_pagination_spans_survives() {
    let html = r#"<span class="star-pagination">*175</span> the defendant <em>knew</em> of the claim"#;
    assert_eq!(rewrite_relative_links(html, BASE), html);
}

#[test]
fn external_links_are_not_touched() {
    let html = r#"<a href="https://www.law.cornell.edu/uscode/text/17/107">17 U.S.C. 107</a>"#;
    assert_eq!(rewrite_relative_links(html, BASE), html);
}

#[test]
fn truncated_fragment_falls_back_to_original() {
    // Mid-tag truncation, as produced by fixed-size excerpt windows
    let html = r#"the court held <a href="/opin"#;
    assert_eq!(rewrite_relative_links(html, BASE), html);
}

#[test]
fn entities_in_text_are_preserved() {
    let html = r#"<p>Smith &amp; Jones v. <a href="/opinion/5/doe/">Doe</a></p>"#;
    let out = rewrite_relative_links(html, BASE);
    assert!(out.contains("Smith &amp; Jones"));
    assert!(out.contains("https://www.courtlistener.com/opinion/5/doe/"));
}
