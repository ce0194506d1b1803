use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Rewrite site-relative anchor hrefs in an HTML excerpt to absolute URLs.
///
/// CourtListener excerpts link to other opinions with paths like
/// `/opinion/123/foo/`; those links are dead once the markup is rendered
/// outside their site, so each href starting with `/` gets `base` prefixed.
/// All other markup passes through untouched.
///
/// Excerpts are mid-document fragments and frequently malformed, so any
/// parse failure returns the original string unchanged.
pub fn rewrite_relative_links(html: &str, base: &str) -> String {
    try_rewrite(html, base).unwrap_or_else(|| html.to_string())
}

fn try_rewrite(html: &str, base: &str) -> Option<String> {
    let mut reader = Reader::from_str(html);
    // Fragments routinely open tags they never close
    reader.config_mut().check_end_names = false;
    let mut writer = Writer::new(Vec::new());

    loop {
        match reader.read_event().ok()? {
            Event::Start(e) if e.name().as_ref().eq_ignore_ascii_case(b"a") => {
                writer.write_event(Event::Start(rewrite_anchor(&e, base)?)).ok()?;
            }
            Event::Empty(e) if e.name().as_ref().eq_ignore_ascii_case(b"a") => {
                writer.write_event(Event::Empty(rewrite_anchor(&e, base)?)).ok()?;
            }
            Event::Eof => break,
            event => writer.write_event(event).ok()?,
        }
    }

    String::from_utf8(writer.into_inner()).ok()
}

fn rewrite_anchor(elem: &BytesStart<'_>, base: &str) -> Option<BytesStart<'static>> {
    let name = String::from_utf8(elem.name().as_ref().to_vec()).ok()?;
    let mut out = BytesStart::new(name);
    for attr in elem.attributes() {
        let attr = attr.ok()?;
        if attr.key.as_ref().eq_ignore_ascii_case(b"href") {
            let value = attr.unescape_value().ok()?;
            if value.starts_with('/') {
                out.push_attribute(("href", format!("{base}{value}").as_str()));
                continue;
            }
        }
        out.push_attribute(attr);
    }
    Some(out)
}
