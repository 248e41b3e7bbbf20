//! Geometry Utilities
//!
//! Rectangles, points and the spatial drop-target partition of a bar.

/// A point in viewport coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A measured rectangle in viewport coordinates.
/// Always a snapshot: never keep one across a layout change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    /// Inclusive on all four sides
    pub fn contains(&self, p: Point) -> bool {
        self.contains_x(p.x) && p.y >= self.y && p.y <= self.bottom()
    }

    /// Horizontal-only hit test (inclusive)
    pub fn contains_x(&self, x: f64) -> bool {
        x >= self.x && x <= self.right()
    }
}

/// A spatial zone that maps to an insertion slot
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DropTarget {
    pub rect: Rect,
    /// Slot in `[0, N]` of the order measured when the targets were built
    pub insert_at: usize,
}

/// Partition the horizontal extent of `rects` into `N + 1` drop targets.
///
/// Boundaries sit on item centers, so a reorder triggers when the pointer
/// crosses the middle of a neighbour rather than its edge. The outer
/// regions reach half an item width past the first and last items.
/// No rects means no targets.
pub fn build_drop_targets(rects: &[Rect]) -> Vec<DropTarget> {
    let (Some(first), Some(last)) = (rects.first(), rects.last()) else {
        return Vec::new();
    };

    let mut bounds = Vec::with_capacity(rects.len() + 2);
    bounds.push(first.x - first.width / 2.0);
    bounds.extend(rects.iter().map(Rect::center_x));
    bounds.push(last.right() + last.width / 2.0);

    bounds
        .windows(2)
        .enumerate()
        .map(|(insert_at, w)| DropTarget {
            rect: Rect::new(w[0], first.y, w[1] - w[0], first.height),
            insert_at,
        })
        .collect()
}

/// Find the target covering `x`. Only x is compared: reordering is
/// single-row.
pub fn target_at(targets: &[DropTarget], x: f64) -> Option<&DropTarget> {
    targets.iter().find(|t| t.rect.contains_x(x))
}

/// Where to place an avatar's top-left corner so that the grabbed point
/// stays under the pointer
pub fn avatar_origin(pointer: Point, grab_offset: Point) -> Point {
    Point::new(pointer.x - grab_offset.x, pointer.y - grab_offset.y)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(widths: &[f64]) -> Vec<Rect> {
        let mut x = 10.0;
        widths
            .iter()
            .map(|w| {
                let r = Rect::new(x, 100.0, *w, 30.0);
                x += w + 4.0;
                r
            })
            .collect()
    }

    #[test]
    fn test_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(r.contains(Point::new(10.0, 10.0)));
        assert!(!r.contains(Point::new(10.1, 5.0)));
        assert!(!r.contains(Point::new(5.0, -0.1)));
    }

    #[test]
    fn test_no_rects_no_targets() {
        assert!(build_drop_targets(&[]).is_empty());
    }

    #[test]
    fn test_partition_shape() {
        for n in 1..6 {
            let rects = row(&vec![50.0; n]);
            let targets = build_drop_targets(&rects);
            assert_eq!(targets.len(), n + 1);

            let first = rects[0];
            let last = rects[n - 1];
            assert_eq!(targets[0].rect.x, first.x - first.width / 2.0);
            assert_eq!(targets[n].rect.right(), last.right() + last.width / 2.0);

            for (i, t) in targets.iter().enumerate() {
                assert_eq!(t.insert_at, i);
                assert!(t.rect.width > 0.0);
            }
            // Contiguous: each region starts where the previous one ends
            for pair in targets.windows(2) {
                assert_eq!(pair[0].rect.right(), pair[1].rect.x);
            }
        }
    }

    #[test]
    fn test_boundaries_on_centers() {
        let rects = row(&[40.0, 80.0, 60.0]);
        let targets = build_drop_targets(&rects);
        assert_eq!(targets[1].rect.x, rects[0].center_x());
        assert_eq!(targets[1].rect.right(), rects[1].center_x());
        assert_eq!(targets[3].rect.x, rects[2].center_x());
    }

    #[test]
    fn test_target_at() {
        let rects = row(&[50.0, 50.0]);
        let targets = build_drop_targets(&rects);
        // Left of first center
        assert_eq!(target_at(&targets, rects[0].x + 5.0).unwrap().insert_at, 0);
        // Between centers
        assert_eq!(target_at(&targets, rects[0].right()).unwrap().insert_at, 1);
        // Past the last center
        assert_eq!(target_at(&targets, rects[1].right() + 10.0).unwrap().insert_at, 2);
        // Way outside
        assert!(target_at(&targets, -500.0).is_none());
        assert!(target_at(&targets, 5000.0).is_none());
    }

    #[test]
    fn test_avatar_origin() {
        let p = avatar_origin(Point::new(120.0, 60.0), Point::new(20.0, 5.0));
        assert_eq!(p, Point::new(100.0, 55.0));
    }
}
