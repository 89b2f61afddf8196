use super::*;

/// Double buffer for the relaxation.
/// Exactly one grid is "current" (last fully written)
/// and the other is "next" (scratch target for the upcoming pass).
/// `swap` flips the roles by index, the buffers never move or copy.
#[derive(Debug, Clone)]
pub struct GridPair {
    grids: [Grid; 2],
    current: usize,
}

impl GridPair {
    /// Both roles start from a value identical copy of `grid`.
    pub fn duplicate(grid: Grid) -> Self {
        let next = grid.clone();
        GridPair {
            grids: [grid, next],
            current: 0,
        }
    }

    pub fn bounds(&self) -> &SquareBounds {
        self.grids[0].bounds()
    }

    pub fn current(&self) -> &Grid {
        &self.grids[self.current]
    }

    pub fn next(&self) -> &Grid {
        &self.grids[1 - self.current]
    }

    /// Borrow current for reading and next for writing.
    pub fn current_next_mut(&mut self) -> (&Grid, &mut Grid) {
        let (first, second) = self.grids.split_at_mut(1);
        if self.current == 0 {
            (&first[0], &mut second[0])
        } else {
            (&second[0], &mut first[0])
        }
    }

    pub fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Hand off both buffers, (current, next).
    pub fn into_parts(self) -> (Grid, Grid) {
        let [a, b] = self.grids;
        if self.current == 0 {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn duplicate_test() {
        let mut g = Grid::new(SquareBounds::new(4));
        g.par_set_values(|c| (c[0] + c[1]) as f64, 3);
        let pair = GridPair::duplicate(g);
        assert_eq!(pair.current(), pair.next());
        assert_ne!(
            pair.current().buffer().as_ptr(),
            pair.next().buffer().as_ptr()
        );
    }

    #[test]
    fn swap_test() {
        let mut pair =
            GridPair::duplicate(Grid::new(SquareBounds::new(3)));
        let a_ptr = pair.current().buffer().as_ptr();
        let b_ptr = pair.next().buffer().as_ptr();
        {
            let (_, next) = pair.current_next_mut();
            next.set_coord(&vector![1, 1], 1.0);
        }
        pair.swap();
        assert_eq!(pair.current().buffer().as_ptr(), b_ptr);
        assert_eq!(pair.next().buffer().as_ptr(), a_ptr);
        assert_eq!(pair.current().view(&vector![1, 1]), 1.0);
        assert_eq!(pair.next().view(&vector![1, 1]), 0.0);

        pair.swap();
        assert_eq!(pair.current().buffer().as_ptr(), a_ptr);

        pair.swap();
        let (current, next) = pair.into_parts();
        assert_eq!(current.view(&vector![1, 1]), 1.0);
        assert_eq!(next.view(&vector![1, 1]), 0.0);
    }
}
