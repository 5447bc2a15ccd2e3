#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

/// Compile-time selector of edge semantics. Implemented by the [`Directed`]
/// and [`Undirected`] markers only.
pub trait EdgeKind: private::Sealed + 'static {
    fn is_directed() -> bool;
}

impl EdgeKind for Undirected {
    fn is_directed() -> bool {
        false
    }
}

impl EdgeKind for Directed {
    fn is_directed() -> bool {
        true
    }
}

mod private {
    use super::*;

    pub trait Sealed {}

    impl Sealed for Undirected {}
    impl Sealed for Directed {}
}
