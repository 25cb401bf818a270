use crate::disjoint_set::DisjointSet;
use crate::error::{Error, Result};
use crate::site::Site;

const TOP: usize = 0;

/// An `n`x`n` grid of sites, each blocked or open.
///
/// Connectivity lives in two disjoint sets over the same site ids. `flow`
/// also holds the virtual bottom node and answers `percolates`; `fill` has
/// only the virtual top node and answers `is_full`, so a site touching the
/// bottom row can never look full just because the bottom node is already
/// joined to the top.
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    open: Vec<bool>,
    open_count: usize,
    flow: DisjointSet,
    fill: DisjointSet,
}

impl Percolation {
    /// All sites start blocked.
    pub fn new(n: usize) -> Result<Percolation> {
        if n == 0 {
            return Err(Error::InvalidArgument { name: "grid size", value: 0 });
        }
        let sites = n.checked_mul(n).ok_or(Error::InvalidArgument {
            name: "grid size",
            value: n as i64,
        })?;
        Ok(Percolation {
            n,
            open: vec![false; sites],
            open_count: 0,
            flow: DisjointSet::new(sites + 2)?,
            fill: DisjointSet::new(sites + 1)?,
        })
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn number_of_open_sites(&self) -> usize {
        self.open_count
    }

    fn bottom(&self) -> usize {
        self.n * self.n + 1
    }

    fn validate(&self, row: usize, col: usize) -> Result<Site> {
        let site = Site::new(row, col);
        if !site.in_bounds(self.n) {
            return Err(Error::SiteOutOfRange { row, col, n: self.n });
        }
        Ok(site)
    }

    /// Disjoint-set id of an in-bounds site; 0 and n²+1 are the virtual caps.
    fn id(&self, site: Site) -> usize {
        self.n * (site.row - 1) + site.col
    }

    fn cell(&self, site: Site) -> usize {
        self.id(site) - 1
    }

    /// Opens the site if it is blocked; opening an open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.validate(row, col)?;
        let cell = self.cell(site);
        if self.open[cell] {
            return Ok(());
        }
        self.open[cell] = true;
        self.open_count += 1;
        trace!("opened ({}, {})", row, col);

        let id = self.id(site);
        if site.row == 1 {
            self.flow.union(id, TOP)?;
            self.fill.union(id, TOP)?;
        }
        if site.row == self.n {
            let bottom = self.bottom();
            self.flow.union(id, bottom)?;
        }
        for next in site.neighbors(self.n) {
            if self.open[self.cell(next)] {
                let other = self.id(next);
                self.flow.union(id, other)?;
                self.fill.union(id, other)?;
            }
        }
        Ok(())
    }

    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        Ok(self.open[self.cell(site)])
    }

    /// An open site joined to the top row through a chain of open sites.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let site = self.validate(row, col)?;
        let id = self.id(site);
        self.fill.connected(TOP, id)
    }

    pub fn percolates(&mut self) -> bool {
        let bottom = self.bottom();
        // both caps are always inside the universe
        self.flow.connected(TOP, bottom).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn opened(n: usize, sites: &[(usize, usize)]) -> Percolation {
        let mut perc = Percolation::new(n).unwrap();
        for &(row, col) in sites {
            perc.open(row, col).unwrap();
        }
        perc
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(
            Percolation::new(0).unwrap_err(),
            Error::InvalidArgument { name: "grid size", value: 0 }
        );
    }

    #[test]
    fn starts_blocked() {
        let mut perc = Percolation::new(4).unwrap();
        for row in 1..=4 {
            for col in 1..=4 {
                assert!(!perc.is_open(row, col).unwrap());
                assert!(!perc.is_full(row, col).unwrap());
            }
        }
        assert_eq!(perc.number_of_open_sites(), 0);
        assert!(!perc.percolates());
    }

    #[test]
    fn single_site_grid() {
        let mut perc = Percolation::new(1).unwrap();
        assert!(!perc.percolates());
        perc.open(1, 1).unwrap();
        assert!(perc.percolates());
        assert!(perc.is_full(1, 1).unwrap());
    }

    #[rstest]
    #[case(1)]
    #[case(2)]
    #[case(5)]
    #[case(13)]
    fn fully_open_grid_percolates(#[case] n: usize) {
        let mut perc = Percolation::new(n).unwrap();
        for row in 1..=n {
            for col in 1..=n {
                perc.open(row, col).unwrap();
            }
        }
        assert!(perc.percolates());
        assert_eq!(perc.number_of_open_sites(), n * n);
        assert!(perc.is_full(n, n).unwrap());
    }

    #[rstest]
    #[case(2)]
    #[case(6)]
    fn column_path_fills_to_the_bottom(#[case] n: usize) {
        let path: Vec<_> = (1..=n).map(|row| (row, 1)).collect();
        let mut perc = opened(n, &path);
        assert!(perc.is_full(n, 1).unwrap());
        assert!(perc.percolates());
        assert!(!perc.is_full(1, 2).unwrap());
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(8)]
    fn bottom_row_alone_is_not_full(#[case] n: usize) {
        let mut perc = opened(n, &[(n, 1), (n, 2)]);
        assert!(!perc.percolates());
        assert!(!perc.is_full(n, 1).unwrap());
        assert!(!perc.is_full(n, 2).unwrap());
    }

    #[test]
    fn no_backwash_once_percolating() {
        // column 1 percolates; (3, 3) touches the bottom cap but is cut off
        let mut perc = opened(3, &[(1, 1), (2, 1), (3, 1), (3, 3)]);
        assert!(perc.percolates());
        assert!(perc.is_open(3, 3).unwrap());
        assert!(!perc.is_full(3, 3).unwrap());
        perc.open(3, 2).unwrap();
        assert!(perc.is_full(3, 3).unwrap());
    }

    #[test]
    fn open_is_idempotent() {
        let mut once = opened(3, &[(1, 2), (2, 2)]);
        let mut twice = opened(3, &[(1, 2), (2, 2), (2, 2), (1, 2)]);
        assert_eq!(once.number_of_open_sites(), twice.number_of_open_sites());
        assert_eq!(once.open, twice.open);
        assert_eq!(once.flow.count(), twice.flow.count());
        assert_eq!(once.fill.count(), twice.fill.count());
        for row in 1..=3 {
            for col in 1..=3 {
                assert_eq!(once.is_full(row, col).unwrap(), twice.is_full(row, col).unwrap());
            }
        }
    }

    #[test]
    fn diagonal_sites_do_not_connect() {
        let mut perc = opened(2, &[(1, 1), (2, 2)]);
        assert!(!perc.percolates());
        assert!(!perc.is_full(2, 2).unwrap());
    }

    #[rstest]
    #[case(1, 0, 1)]
    #[case(1, 1, 0)]
    #[case(1, 2, 1)]
    #[case(1, 1, 2)]
    #[case(4, 0, 3)]
    #[case(4, 5, 1)]
    #[case(4, 1, 5)]
    #[case(4, 9, 9)]
    fn out_of_range_sites_fail(#[case] n: usize, #[case] row: usize, #[case] col: usize) {
        let mut perc = Percolation::new(n).unwrap();
        let expected = Error::SiteOutOfRange { row, col, n };
        assert_eq!(perc.open(row, col).unwrap_err(), expected);
        assert_eq!(perc.is_open(row, col).unwrap_err(), expected);
        assert_eq!(perc.is_full(row, col).unwrap_err(), expected);
        assert_eq!(perc.number_of_open_sites(), 0);
    }
}
