//! EPUB 2 fixtures navigated through an NCX control file.

use super::templates::{MIMETYPE, container_xml, package_opf, xhtml_page};
use super::Fixture;
use crate::tree::DocumentTree;

const PACKAGE_PATH: &str = "OEBPS/content.opf";

/// Nested navPoints whose `playOrder` disagrees with document order:
/// Chapter 1 (2) holds Chapter 1.1 (1), followed by Chapter 2 (3).
pub fn ncx_nested() -> Fixture {
    let manifest = r#"    <item id="ncx" href="toc.ncx"
        media-type="application/x-dtbncx+xml"/>
    <item id="c1" href="c1.xhtml"
        media-type="application/xhtml+xml"/>
    <item id="c2" href="c2.xhtml"
        media-type="application/xhtml+xml"/>
"#;
    let spine = r#"    <itemref idref="c1"/>
    <itemref idref="c2"/>
"#;

    let ncx = r#"<?xml version="1.0" encoding="utf-8"?>
<ncx xmlns="http://www.daisy.org/z3986/2005/ncx/"
    version="2005-1">
  <head>
    <meta name="dtb:uid" content="urn:uuid:ncx-nested"/>
    <meta name="dtb:depth" content="2"/>
    <meta name="dtb:totalPageCount" content="0"/>
    <meta name="dtb:maxPageNumber" content="0"/>
  </head>
  <docTitle><text>NCX Nested</text></docTitle>
  <navMap>
    <navPoint id="np1" playOrder="2">
      <navLabel><text>Chapter 1</text></navLabel>
      <content src="c1.xhtml"/>
      <navPoint id="np1-1" playOrder="1">
        <navLabel><text>Chapter 1.1</text></navLabel>
        <content src="c1.xhtml#s1"/>
      </navPoint>
    </navPoint>
    <navPoint id="np2" playOrder="3">
      <navLabel><text>Chapter 2</text></navLabel>
      <content src="c2.xhtml"/>
    </navPoint>
  </navMap>
</ncx>
"#;

    let tree = DocumentTree::new()
        .with_file("mimetype", MIMETYPE)
        .with_file("META-INF/container.xml", container_xml(PACKAGE_PATH))
        .with_file(
            PACKAGE_PATH,
            package_opf(
                "2.0",
                "urn:uuid:ncx-nested",
                "Fixture - EPUB2 NCX Nested",
                manifest,
                " toc=\"ncx\"",
                spine,
            ),
        )
        .with_file("OEBPS/toc.ncx", ncx)
        .with_file(
            "OEBPS/c1.xhtml",
            xhtml_page(
                "Chapter 1",
                "    <h1>Chapter 1</h1>\n    <p id=\"s1\">Section 1.1</p>\n",
            ),
        )
        .with_file(
            "OEBPS/c2.xhtml",
            xhtml_page("Chapter 2", "    <h1>Chapter 2</h1>\n"),
        );

    Fixture::new("epub2_ncx_nested", tree)
}
