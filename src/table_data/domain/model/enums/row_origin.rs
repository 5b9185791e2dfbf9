/// Where a handler found the rows it returned.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum RowOrigin {
    /// Read from the relational source during this request.
    #[default]
    Database,
    /// Served from an entry written by an earlier request.
    Cache,
}
