//! Request path construction for the data API's row-level read surface.
//!
//! The data API encodes filtering, ordering, and resource embedding in the
//! query string. Building those strings is kept free of any HTTP concern so
//! filter composition can be tested without a network.

use std::fmt::Write;

/// Path prefix of the row-level data API.
pub const REST_PREFIX: &str = "/rest/v1";

/// Sort direction for an `order` key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    fn suffix(self) -> &'static str {
        match self {
            Direction::Ascending => "asc",
            Direction::Descending => "desc",
        }
    }
}

/// Builder for a row-level read against one table.
///
/// Filters are applied in insertion order; ordering keys compose into a
/// single `order` parameter with earlier keys taking precedence.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectQuery {
    table: &'static str,
    columns: &'static str,
    filters: Vec<(&'static str, String)>,
    order: Vec<(&'static str, Direction)>,
    single: bool,
}

impl SelectQuery {
    pub fn new(table: &'static str) -> Self {
        Self {
            table,
            columns: "*",
            filters: Vec::new(),
            order: Vec::new(),
            single: false,
        }
    }

    /// Column projection, including embedded resource projections such as
    /// `profiles(username)`.
    pub fn columns(mut self, columns: &'static str) -> Self {
        self.columns = columns;
        self
    }

    /// Equality filter on a column.
    pub fn eq(mut self, column: &'static str, value: &str) -> Self {
        self.filters.push((column, format!("eq.{}", encode_component(value))));
        self
    }

    /// Case-insensitive substring match against any of the given columns.
    pub fn search_any(mut self, columns: &[&str], term: &str) -> Self {
        // Commas and parentheses are structural in the filter grammar and
        // cannot be escaped inside it, so they are stripped from the term.
        let term: String = term
            .chars()
            .filter(|c| !matches!(c, ',' | '(' | ')'))
            .collect();
        let encoded = encode_component(&term);
        let parts: Vec<String> = columns
            .iter()
            .map(|column| format!("{column}.ilike.*{encoded}*"))
            .collect();
        self.filters.push(("or", format!("({})", parts.join(","))));
        self
    }

    /// Append an ordering key. Earlier keys sort first.
    pub fn order(mut self, column: &'static str, direction: Direction) -> Self {
        self.order.push((column, direction));
        self
    }

    /// Request exactly one object instead of a row array.
    pub fn single(mut self) -> Self {
        self.single = true;
        self
    }

    /// Whether the response should be decoded as a single object.
    pub fn is_single(&self) -> bool {
        self.single
    }

    /// Render the request path and query string.
    pub fn path(&self) -> String {
        let mut path = format!("{REST_PREFIX}/{}?select={}", self.table, self.columns);
        for (key, value) in &self.filters {
            let _ = write!(path, "&{key}={value}");
        }
        if !self.order.is_empty() {
            let keys: Vec<String> = self
                .order
                .iter()
                .map(|(column, direction)| format!("{column}.{}", direction.suffix()))
                .collect();
            let _ = write!(path, "&order={}", keys.join(","));
        }
        path
    }
}

/// Path for a row insert against one table.
pub fn insert_path(table: &str) -> String {
    format!("{REST_PREFIX}/{table}")
}

/// Path for a remote procedure call.
pub fn rpc_path(function: &str) -> String {
    format!("{REST_PREFIX}/rpc/{function}")
}

/// Percent-encode a value for embedding in a query string.
///
/// Everything outside the unreserved set is encoded; structural characters
/// of the filter grammar are written by the builder itself, never by this.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                let _ = write!(out, "%{byte:02X}");
            }
        }
    }
    out
}
