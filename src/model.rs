//! In-memory representation of tabular data.
//!
//! Workbooks are loaded into a plain [`Table`] with no header row: row 0 is
//! data. Rows may be ragged; every accessor treats a missing trailing cell as
//! [`Cell::Empty`] so that short rows never cause an index panic.

/// A single spreadsheet cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Absent or blank cell.
    Empty,
    /// Text content.
    Text(String),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

/// An ordered sequence of cells.
pub type Row = Vec<Cell>;

/// An ordered sequence of rows read from a single worksheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    pub rows: Vec<Row>,
}

impl Cell {
    /// Returns true when the cell carries no content. A zero-length string
    /// counts as empty; whitespace does not.
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(value) => value.is_empty(),
            _ => false,
        }
    }

    /// Numeric value of the cell, treating empty and unparsable content as 0.
    /// The silent fallback is deliberate: malformed cells must contribute 0
    /// to a merge sum rather than abort the run.
    pub fn numeric_or_zero(&self) -> f64 {
        match self {
            Cell::Int(value) => *value as f64,
            Cell::Float(value) => *value,
            Cell::Bool(value) => {
                if *value {
                    1.0
                } else {
                    0.0
                }
            }
            Cell::Text(value) => value.trim().parse::<f64>().unwrap_or(0.0),
            Cell::Empty => 0.0,
        }
    }

    /// True for cells whose numeric value is inherently integral. Text that
    /// happens to parse as a whole number does not qualify.
    pub fn is_integral(&self) -> bool {
        matches!(self, Cell::Int(_) | Cell::Bool(_))
    }

    /// Textual rendering used by the matching operations.
    pub fn to_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(value) => value.clone(),
            Cell::Int(value) => value.to_string(),
            Cell::Float(value) => value.to_string(),
            Cell::Bool(value) => value.to_string(),
        }
    }

    /// Compares two cells for grouping purposes. Numeric cells compare by
    /// value so that `Int(1)` matches `Float(1.0)`; everything else compares
    /// structurally.
    pub fn key_eq(&self, other: &Cell) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(lhs), Some(rhs)) => lhs == rhs,
            _ => self == other,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Int(value) => Some(*value as f64),
            Cell::Float(value) => Some(*value),
            _ => None,
        }
    }
}

impl Table {
    /// Creates a table from pre-built rows.
    pub fn from_rows(rows: Vec<Row>) -> Self {
        Self { rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Widest row in the table.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

/// Cell at the given position of a row, with missing cells read as empty.
pub fn cell_at(row: &Row, index: usize) -> &Cell {
    row.get(index).unwrap_or(&Cell::Empty)
}
