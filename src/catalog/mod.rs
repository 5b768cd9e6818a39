//! The fixed set of named fixtures.
//!
//! Each fixture targets one navigation edge case:
//!
//! | Name                 | Exercises                                           |
//! |----------------------|-----------------------------------------------------|
//! | `epub3_multi_nav`    | toc, landmarks and page-list navs in one document   |
//! | `epub3_deep_nesting` | four nested toc levels plus a sibling root          |
//! | `epub3_edge_hrefs`   | `%20` paths, fragments, fragment-only references    |
//! | `epub2_ncx_nested`   | NCX navPoints ordered by `playOrder`, not position  |

mod epub2;
mod epub3;
pub mod templates;

use crate::tree::DocumentTree;

/// One named fixture and its files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    name: &'static str,
    tree: DocumentTree,
}

impl Fixture {
    pub fn new(name: &'static str, tree: DocumentTree) -> Self {
        Self { name, tree }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tree(&self) -> &DocumentTree {
        &self.tree
    }
}

/// Ordered, immutable collection of fixtures.
///
/// Built once at startup and passed by reference to the generator.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    fixtures: Vec<Fixture>,
}

impl Catalog {
    /// The navigation fixture corpus.
    pub fn standard() -> Self {
        Self::from_fixtures(vec![
            epub3::multi_nav(),
            epub3::deep_nesting(),
            epub3::edge_hrefs(),
            epub2::ncx_nested(),
        ])
    }

    /// Build a catalog from arbitrary fixtures, kept in the given order.
    pub fn from_fixtures(fixtures: Vec<Fixture>) -> Self {
        Self { fixtures }
    }

    pub fn get(&self, name: &str) -> Option<&Fixture> {
        self.fixtures.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Fixture> {
        self.fixtures.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fixtures.iter().map(Fixture::name)
    }

    pub fn len(&self) -> usize {
        self.fixtures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fixtures.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Fixture;
    type IntoIter = std::slice::Iter<'a, Fixture>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
