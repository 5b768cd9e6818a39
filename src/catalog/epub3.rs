//! EPUB 3 fixtures with inline navigation documents.

use super::templates::{MIMETYPE, container_xml, nav_document, package_opf, xhtml_page};
use super::Fixture;
use crate::tree::DocumentTree;

const PACKAGE_PATH: &str = "EPUB/package.opf";

const NAV_ITEM: &str = r#"    <item id="nav" href="nav.xhtml"
        media-type="application/xhtml+xml" properties="nav"/>
"#;

fn xhtml_item(id: &str, href: &str) -> String {
    format!(
        "    <item id=\"{id}\" href=\"{href}\"\n        media-type=\"application/xhtml+xml\"/>\n"
    )
}

fn base_tree() -> DocumentTree {
    DocumentTree::new()
        .with_file("mimetype", MIMETYPE)
        .with_file("META-INF/container.xml", container_xml(PACKAGE_PATH))
}

/// Three navigation collections (toc, landmarks, page-list) in one document.
pub fn multi_nav() -> Fixture {
    let manifest = [
        NAV_ITEM.to_string(),
        xhtml_item("cover", "cover.xhtml"),
        xhtml_item("c1", "c1.xhtml"),
        xhtml_item("c2", "c2.xhtml"),
    ]
    .concat();
    let spine = r#"    <itemref idref="cover" linear="no"/>
    <itemref idref="c1"/>
    <itemref idref="c2"/>
"#;

    let nav = r#"    <nav epub:type="toc" id="toc">
      <ol>
        <li><a href="cover.xhtml">Cover</a></li>
        <li><a href="c1.xhtml">Chapter 1</a></li>
        <li>
          <a href="c2.xhtml">Chapter 2</a>
          <ol>
            <li><a href="c2.xhtml#s1">Section 2.1</a></li>
            <li><a href="c2.xhtml#s2">Section 2.2</a></li>
          </ol>
        </li>
      </ol>
    </nav>
    <nav epub:type="landmarks" id="landmarks">
      <ol>
        <li>
          <a epub:type="cover" href="cover.xhtml">Cover</a>
        </li>
        <li>
          <a epub:type="bodymatter" href="c1.xhtml">Body</a>
        </li>
      </ol>
    </nav>
    <nav epub:type="page-list" id="page-list">
      <ol>
        <li><a href="c1.xhtml#p1">1</a></li>
        <li><a href="c2.xhtml#p2">2</a></li>
      </ol>
    </nav>
"#;

    let tree = base_tree()
        .with_file(
            PACKAGE_PATH,
            package_opf(
                "3.0",
                "urn:uuid:multi-nav",
                "Fixture - EPUB3 Multi Nav",
                &manifest,
                "",
                spine,
            ),
        )
        .with_file("EPUB/nav.xhtml", nav_document(nav))
        .with_file(
            "EPUB/cover.xhtml",
            xhtml_page("Cover", "    <h1 id=\"cover\">Cover</h1>\n"),
        )
        .with_file(
            "EPUB/c1.xhtml",
            xhtml_page(
                "Chapter 1",
                "    <h1 id=\"p1\">Chapter 1</h1>\n    <p id=\"s1\">Section 1</p>\n",
            ),
        )
        .with_file(
            "EPUB/c2.xhtml",
            xhtml_page(
                "Chapter 2",
                "    <h1 id=\"p2\">Chapter 2</h1>\n    <p id=\"s1\">Section 2.1</p>\n    <p id=\"s2\">Section 2.2</p>\n",
            ),
        );

    Fixture::new("epub3_multi_nav", tree)
}

/// Four levels of nested `<ol>` under the first root, then a sibling root.
pub fn deep_nesting() -> Fixture {
    let manifest = [NAV_ITEM.to_string(), xhtml_item("c1", "c1.xhtml")].concat();

    let nav = r#"    <nav epub:type="toc" id="toc">
      <ol>
        <li>
          <a href="c1.xhtml#l1">Level 1</a>
          <ol>
            <li>
              <a href="c1.xhtml#l1-1">Level 2</a>
              <ol>
                <li>
                  <a href="c1.xhtml#l1-1-1">Level 3</a>
                  <ol>
                    <li>
                      <a href="c1.xhtml#l1-1-1-1">Level 4</a>
                    </li>
                  </ol>
                </li>
              </ol>
            </li>
          </ol>
        </li>
        <li><a href="c1.xhtml#l2">Another Root</a></li>
      </ol>
    </nav>
"#;

    let body = r#"    <h1 id="l1">Level 1</h1>
    <h2 id="l1-1">Level 2</h2>
    <h3 id="l1-1-1">Level 3</h3>
    <h4 id="l1-1-1-1">Level 4</h4>
    <h1 id="l2">Another Root</h1>
"#;

    let tree = base_tree()
        .with_file(
            PACKAGE_PATH,
            package_opf(
                "3.0",
                "urn:uuid:deep-nesting",
                "Fixture - EPUB3 Deep Nesting",
                &manifest,
                "",
                "    <itemref idref=\"c1\"/>\n",
            ),
        )
        .with_file("EPUB/nav.xhtml", nav_document(nav))
        .with_file("EPUB/c1.xhtml", xhtml_page("Deep Nesting", body));

    Fixture::new("epub3_deep_nesting", tree)
}

/// Percent-encoded, fragment-bearing and fragment-only hrefs.
///
/// The content file is stored under a literal space while every href keeps
/// the `%20` escape.
pub fn edge_hrefs() -> Fixture {
    let manifest = [
        NAV_ITEM.to_string(),
        xhtml_item("c1", "c1.xhtml"),
        xhtml_item("file-space", "file%20name.xhtml"),
    ]
    .concat();
    let spine = r#"    <itemref idref="c1"/>
    <itemref idref="file-space"/>
"#;

    let nav = r##"    <nav epub:type="toc" id="toc">
      <ol>
        <li><a href="c1.xhtml#p1">Chapter 1</a></li>
        <li>
          <a href="file%20name.xhtml#p2">File With Spaces</a>
        </li>
        <li><a href="#local">Local Fragment</a></li>
      </ol>
    </nav>
    <section id="local">Local Target</section>
"##;

    let tree = base_tree()
        .with_file(
            PACKAGE_PATH,
            package_opf(
                "3.0",
                "urn:uuid:edge-hrefs",
                "Fixture - EPUB3 Edge Hrefs",
                &manifest,
                "",
                spine,
            ),
        )
        .with_file("EPUB/nav.xhtml", nav_document(nav))
        .with_file(
            "EPUB/c1.xhtml",
            xhtml_page("Chapter 1", "    <h1 id=\"p1\">Chapter 1</h1>\n"),
        )
        .with_file(
            "EPUB/file name.xhtml",
            xhtml_page("File With Spaces", "    <h1 id=\"p2\">File With Spaces</h1>\n"),
        );

    Fixture::new("epub3_edge_hrefs", tree)
}
