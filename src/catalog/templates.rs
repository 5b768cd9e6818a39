//! Shared package boilerplate.

pub use crate::tree::EPUB_MEDIA_TYPE as MIMETYPE;

/// `META-INF/container.xml` pointing at the package document at `package_path`.
pub fn container_xml(package_path: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<container version="1.0"
    xmlns="urn:oasis:names:tc:opendocument:xmlns:container">
  <rootfiles>
    <rootfile full-path="{package_path}"
        media-type="application/oebps-package+xml"/>
  </rootfiles>
</container>
"#
    )
}

/// Package document skeleton: metadata block, then `manifest` and `spine`
/// bodies verbatim.
pub fn package_opf(
    version: &str,
    identifier: &str,
    title: &str,
    manifest: &str,
    spine_attrs: &str,
    spine: &str,
) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<package xmlns="http://www.idpf.org/2007/opf"
    unique-identifier="uid" version="{version}">
  <metadata xmlns:dc="http://purl.org/dc/elements/1.1/">
    <dc:identifier id="uid">{identifier}</dc:identifier>
    <dc:title>{title}</dc:title>
    <dc:language>en</dc:language>
  </metadata>
  <manifest>
{manifest}  </manifest>
  <spine{spine_attrs}>
{spine}  </spine>
</package>
"#
    )
}

/// A minimal XHTML content document.
pub fn xhtml_page(title: &str, body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml">
  <head><title>{title}</title></head>
  <body>
{body}  </body>
</html>
"#
    )
}

/// An EPUB 3 navigation document wrapping the given `<nav>` elements.
pub fn nav_document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<html xmlns="http://www.w3.org/1999/xhtml"
    xmlns:epub="http://www.idpf.org/2007/ops">
  <head>
    <title>Navigation</title>
  </head>
  <body>
{body}  </body>
</html>
"#
    )
}
