//! Board grid and its persisted form.
//!
//! The persisted form is a JSON array of rows, each row an array of
//! `null | "X" | "O"`. It is the same shape the presentation layer returns.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, InfraErrorKind};

/// The mark written into a cell. Seat A always writes `X`, seat B `O`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    X,
    O,
}

impl Symbol {
    pub fn opposite(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::X => "X",
            Symbol::O => "O",
        }
    }
}

impl Serialize for Symbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            "X" => Ok(Symbol::X),
            "O" => Ok(Symbol::O),
            _ => Err(serde::de::Error::custom(format!("Invalid symbol: {s}"))),
        }
    }
}

/// Square N×N grid; `None` is an empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: Vec<Option<Symbol>>,
}

impl Board {
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// True when `(row, col)` addresses a cell on this board.
    pub fn in_bounds(&self, row: i64, col: i64) -> bool {
        let n = self.size as i64;
        (0..n).contains(&row) && (0..n).contains(&col)
    }

    /// Cell at `(row, col)`; `None` for empty or out-of-range cells.
    pub fn get(&self, row: usize, col: usize) -> Option<Symbol> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[row * self.size + col]
    }

    /// Writes `symbol` at `(row, col)`. Callers check bounds first.
    pub fn set(&mut self, row: usize, col: usize, symbol: Symbol) {
        if row < self.size && col < self.size {
            self.cells[row * self.size + col] = Some(symbol);
        }
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Row-major nested view, as rendered to clients.
    pub fn rows(&self) -> Vec<Vec<Option<Symbol>>> {
        if self.size == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.size).map(<[_]>::to_vec).collect()
    }
}

/// Decodes a persisted board. Absent input yields an empty board of `size`.
pub fn decode(serialized: Option<&str>, size: usize) -> Result<Board, DomainError> {
    let Some(raw) = serialized else {
        return Ok(Board::empty(size));
    };
    if raw.trim().is_empty() {
        return Ok(Board::empty(size));
    }

    let rows: Vec<Vec<Option<Symbol>>> = serde_json::from_str(raw).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("board state is not valid JSON: {e}"),
        )
    })?;

    if rows.len() != size {
        return Err(DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("board state has {} rows, expected {size}", rows.len()),
        ));
    }

    let mut cells = Vec::with_capacity(size * size);
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != size {
            return Err(DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("board row {i} has {} cells, expected {size}", row.len()),
            ));
        }
        cells.extend(row);
    }

    Ok(Board { size, cells })
}

pub fn encode(board: &Board) -> String {
    // Serializing nested Vec<Option<Symbol>> cannot fail.
    serde_json::to_string(&board.rows()).unwrap_or_else(|_| "[]".to_string())
}
