//! Shared fixtures: an in-memory cell buffer, scrollback store and
//! selection manager for driving the renderer in tests.
//!
//! Each test binary includes this via `mod common;`; the
//! `#[allow(dead_code)]` suppresses warnings when only a subset of
//! fixtures is used per file.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use termframe::{
    Cell, CursorState, GridSize, Renderable, ScrollbackProvider, SelectionCoords,
    SelectionProvider,
};

/// A scriptable `Renderable` backed by plain vectors.
pub struct TestBuffer {
    pub cols: usize,
    pub rows: usize,
    lines: Vec<Vec<Cell>>,
    dirty: Vec<bool>,
    cursor: CursorState,
    full_redraw: bool,
    graphemes: HashMap<(usize, usize), String>,
    missing_rows: HashSet<usize>,
}

impl TestBuffer {
    /// A buffer of empty cells with every row initially dirty, the way
    /// an emulator hands over a freshly attached grid.
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            lines: vec![vec![Cell::default(); cols]; rows],
            dirty: vec![true; rows],
            cursor: CursorState {
                x: 0,
                y: 0,
                visible: true,
            },
            full_redraw: false,
            graphemes: HashMap::new(),
            missing_rows: HashSet::new(),
        }
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.lines[row][col] = cell;
        self.dirty[row] = true;
    }

    /// Write `text` one char per cell starting at `(row, col)`.
    pub fn set_text(&mut self, row: usize, col: usize, text: &str) {
        for (i, ch) in text.chars().enumerate() {
            self.set_cell(row, col + i, Cell::new(ch));
        }
    }

    /// Fill an entire row with `ch`.
    pub fn fill_row(&mut self, row: usize, ch: char) {
        for col in 0..self.cols {
            self.set_cell(row, col, Cell::new(ch));
        }
    }

    /// Overwrite a cell without touching dirty bits, to simulate an
    /// emulator write the renderer has not been told about.
    pub fn set_cell_silently(&mut self, row: usize, col: usize, cell: Cell) {
        self.lines[row][col] = cell;
    }

    pub fn set_cursor(&mut self, x: usize, y: usize, visible: bool) {
        self.cursor = CursorState { x, y, visible };
    }

    pub fn mark_dirty(&mut self, row: usize) {
        self.dirty[row] = true;
    }

    pub fn set_full_redraw(&mut self, value: bool) {
        self.full_redraw = value;
    }

    pub fn set_grapheme(&mut self, row: usize, col: usize, cluster: &str) {
        let mut chars = cluster.chars();
        let base = chars.next().unwrap();
        let mut cell = Cell::new(base);
        cell.grapheme_len = cluster.chars().count() as u8;
        self.set_cell(row, col, cell);
        self.graphemes.insert((row, col), cluster.to_string());
    }

    pub fn set_row_missing(&mut self, row: usize) {
        self.missing_rows.insert(row);
    }

    pub fn dirty_row_count(&self) -> usize {
        self.dirty.iter().filter(|d| **d).count()
    }
}

impl Renderable for TestBuffer {
    fn dimensions(&self) -> GridSize {
        GridSize {
            cols: self.cols,
            rows: self.rows,
        }
    }

    fn line(&self, y: usize) -> Option<&[Cell]> {
        if self.missing_rows.contains(&y) {
            return None;
        }
        self.lines.get(y).map(|row| row.as_slice())
    }

    fn cursor(&mut self) -> CursorState {
        self.cursor
    }

    fn is_row_dirty(&self, y: usize) -> bool {
        self.dirty.get(y).copied().unwrap_or(false)
    }

    fn clear_dirty(&mut self) {
        self.dirty.fill(false);
        self.full_redraw = false;
    }

    fn needs_full_redraw(&self) -> bool {
        self.full_redraw
    }

    fn grapheme(&self, row: usize, col: usize) -> Option<String> {
        self.graphemes.get(&(row, col)).cloned()
    }
}

/// Scrollback provider over a vector of prepared lines.
#[derive(Default)]
pub struct TestScrollback {
    lines: Vec<Vec<Cell>>,
}

impl TestScrollback {
    /// `count` lines of `cols` cells, each filled with a marker letter
    /// cycling a–z so tests can tell lines apart.
    pub fn with_marker_lines(count: usize, cols: usize) -> Self {
        let mut scrollback = Self::default();
        for i in 0..count {
            let marker = char::from(b'a' + (i % 26) as u8);
            scrollback.push_line(cols, marker);
        }
        scrollback
    }

    pub fn push_line(&mut self, cols: usize, ch: char) {
        self.lines.push(vec![Cell::new(ch); cols]);
    }
}

impl ScrollbackProvider for TestScrollback {
    fn scrollback_line(&self, offset: usize) -> Option<&[Cell]> {
        self.lines.get(offset).map(|row| row.as_slice())
    }

    fn scrollback_len(&self) -> usize {
        self.lines.len()
    }
}

/// Selection manager fixture with an explicit dirty-row set.
#[derive(Default)]
pub struct TestSelection {
    coords: Option<SelectionCoords>,
    dirty: Vec<usize>,
}

impl TestSelection {
    pub fn select(&mut self, coords: SelectionCoords) {
        for y in coords.start_row..=coords.end_row {
            self.dirty.push(y);
        }
        self.coords = Some(coords);
    }

    pub fn clear_selection(&mut self) {
        if let Some(coords) = self.coords.take() {
            for y in coords.start_row..=coords.end_row {
                self.dirty.push(y);
            }
        }
    }

    pub fn dirty_row_count(&self) -> usize {
        self.dirty.len()
    }
}

impl SelectionProvider for TestSelection {
    fn has_selection(&self) -> bool {
        self.coords.is_some()
    }

    fn selection_coords(&self) -> Option<SelectionCoords> {
        self.coords
    }

    fn dirty_rows(&self) -> Vec<usize> {
        self.dirty.clone()
    }

    fn clear_dirty_rows(&mut self) {
        self.dirty.clear();
    }
}
