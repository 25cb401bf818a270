/// One grid cell, 1-indexed: `row` and `col` are both in `1..=n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Site {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    North, East, South, West,
}

impl Direction {
    pub fn adjacent_directions() -> [Direction; 4] {
        [Direction::North, Direction::East,
        Direction::South, Direction::West]
    }
}

impl Site {
    pub fn new(row: usize, col: usize) -> Site {
        Site { row, col }
    }

    pub fn in_bounds(&self, n: usize) -> bool {
        (1..=n).contains(&self.row) && (1..=n).contains(&self.col)
    }

    /// The adjacent site in `dir`, or `None` when it would fall off an
    /// `n`x`n` grid.
    pub fn neighbor(&self, dir: Direction, n: usize) -> Option<Site> {
        let (row, col) = match dir {
            Direction::North => (self.row.checked_sub(1)?, self.col),
            Direction::South => (self.row + 1, self.col),
            Direction::West => (self.row, self.col.checked_sub(1)?),
            Direction::East => (self.row, self.col + 1),
        };
        let site = Site { row, col };
        if site.in_bounds(n) { Some(site) } else { None }
    }

    pub fn neighbors(&self, n: usize) -> impl Iterator<Item = Site> + '_ {
        Direction::adjacent_directions()
            .into_iter()
            .filter_map(move |dir| self.neighbor(dir, n))
    }
}
