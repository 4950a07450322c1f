use super::reveal::IntersectionReport;

pub const DEFAULT_PARALLAX_DIVISOR: f64 = 35.0;
pub const DEFAULT_PARALLAX_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Offset {
    pub x: f64,
    pub y: f64,
}

impl Offset {
    pub const ORIGIN: Offset = Offset { x: 0.0, y: 0.0 };

    pub fn to_translate(self) -> String {
        format!("translate({:.2}px, {:.2}px)", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A bounding box in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point {
            x: self.left + self.width / 2.0,
            y: self.top + self.height / 2.0,
        }
    }

    /// Edges count as inside.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Pointer is not hovering or the region is off screen.
    Inactive,
    /// Pointer left the box; offset is already back at the origin.
    Snapped,
    /// A target offset is waiting for the next frame. `request_frame` is false
    /// when a frame is already outstanding.
    Queued { request_frame: bool },
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointerParallax {
    divisor: f64,
    hovered: bool,
    in_view: bool,
    offset: Offset,
    pending: Option<Offset>,
    frame_outstanding: bool,
}

impl Default for PointerParallax {
    fn default() -> Self {
        Self::new(DEFAULT_PARALLAX_DIVISOR)
    }
}

impl PointerParallax {
    pub fn new(divisor: f64) -> Self {
        Self {
            divisor,
            hovered: false,
            in_view: false,
            offset: Offset::ORIGIN,
            pending: None,
            frame_outstanding: false,
        }
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn is_active(&self) -> bool {
        self.hovered && self.in_view
    }

    pub fn has_pending_frame(&self) -> bool {
        self.frame_outstanding
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.suspend();
    }

    pub fn set_in_view(&mut self, in_view: bool) {
        self.in_view = in_view;
        if !in_view {
            self.suspend();
        }
    }

    /// Follows the latest report's intersecting flag. The observer threshold
    /// only decides when reports fire, so a region still on screen below that
    /// ratio stays in view.
    pub fn on_visibility_reports<I>(&mut self, reports: I)
    where
        I: IntoIterator<Item = IntersectionReport<()>>,
    {
        if let Some(latest) = reports.into_iter().last() {
            self.set_in_view(latest.is_intersecting);
        }
    }

    pub fn target_offset(&self, pointer: Point, bounds: Bounds) -> Offset {
        if !bounds.contains(pointer) {
            return Offset::ORIGIN;
        }

        let center = bounds.center();
        Offset {
            x: (pointer.x - center.x) / self.divisor,
            y: (pointer.y - center.y) / self.divisor,
        }
    }

    pub fn pointer_moved(&mut self, pointer: Point, bounds: Bounds) -> MoveOutcome {
        if !self.is_active() {
            return MoveOutcome::Inactive;
        }

        if !bounds.contains(pointer) {
            self.suspend();
            return MoveOutcome::Snapped;
        }

        self.pending = Some(self.target_offset(pointer, bounds));
        let request_frame = !self.frame_outstanding;
        self.frame_outstanding = true;
        MoveOutcome::Queued { request_frame }
    }

    /// Applies the newest queued target. Returns whether the offset changed.
    pub fn frame(&mut self) -> bool {
        self.frame_outstanding = false;

        match self.pending.take() {
            Some(next) if self.is_active() && next != self.offset => {
                self.offset = next;
                true
            }
            _ => false,
        }
    }

    fn suspend(&mut self) {
        self.pending = None;
        self.frame_outstanding = false;
        self.offset = Offset::ORIGIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Bounds {
        Bounds {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }

    fn active() -> PointerParallax {
        let mut parallax = PointerParallax::default();
        parallax.set_in_view(true);
        parallax.pointer_enter();
        parallax
    }

    #[test]
    fn requires_both_hover_and_visibility() {
        let mut parallax = PointerParallax::default();
        let pointer = Point { x: 80.0, y: 20.0 };

        parallax.pointer_enter();
        assert_eq!(parallax.pointer_moved(pointer, square()), MoveOutcome::Inactive);

        parallax.pointer_leave();
        parallax.set_in_view(true);
        assert_eq!(parallax.pointer_moved(pointer, square()), MoveOutcome::Inactive);

        parallax.pointer_enter();
        assert!(parallax.is_active());
        assert_eq!(
            parallax.pointer_moved(pointer, square()),
            MoveOutcome::Queued { request_frame: true }
        );
    }

    #[test]
    fn offset_is_distance_from_center_over_divisor() {
        let mut parallax = active();

        parallax.pointer_moved(Point { x: 85.0, y: 15.0 }, square());
        assert!(parallax.frame());

        assert_eq!(parallax.offset(), Offset { x: 1.0, y: -1.0 });
    }

    #[test]
    fn moves_within_one_frame_coalesce_to_latest() {
        let mut parallax = active();

        assert_eq!(
            parallax.pointer_moved(Point { x: 10.0, y: 10.0 }, square()),
            MoveOutcome::Queued { request_frame: true }
        );
        assert_eq!(
            parallax.pointer_moved(Point { x: 50.0, y: 85.0 }, square()),
            MoveOutcome::Queued { request_frame: false }
        );

        assert!(parallax.frame());
        assert_eq!(parallax.offset(), Offset { x: 0.0, y: 1.0 });
        assert!(!parallax.has_pending_frame());
        assert!(!parallax.frame());
    }

    #[test]
    fn intersecting_region_below_threshold_ratio_stays_in_view() {
        let mut parallax = PointerParallax::default();
        parallax.pointer_enter();

        parallax.on_visibility_reports([IntersectionReport::new((), true, 0.5)]);
        assert!(parallax.is_active());

        parallax.on_visibility_reports([IntersectionReport::new((), true, 0.1)]);
        assert!(parallax.is_active());

        parallax.on_visibility_reports([
            IntersectionReport::new((), true, 0.2),
            IntersectionReport::new((), false, 0.0),
        ]);
        assert!(!parallax.is_active());
        assert_eq!(parallax.offset(), Offset::ORIGIN);
    }

    #[test]
    fn empty_visibility_batch_keeps_state() {
        let mut parallax = active();

        parallax.on_visibility_reports(Vec::new());

        assert!(parallax.is_active());
    }

    #[test]
    fn pointer_leave_resets_offset() {
        let mut parallax = active();
        parallax.pointer_moved(Point { x: 100.0, y: 100.0 }, square());
        parallax.frame();
        assert_ne!(parallax.offset(), Offset::ORIGIN);

        parallax.pointer_leave();

        assert_eq!(parallax.offset(), Offset::ORIGIN);
        assert!(!parallax.is_active());
    }

    #[test]
    fn leaving_viewport_resets_offset_and_drops_pending_frame() {
        let mut parallax = active();
        parallax.pointer_moved(Point { x: 0.0, y: 0.0 }, square());
        parallax.frame();
        parallax.pointer_moved(Point { x: 90.0, y: 90.0 }, square());

        parallax.set_in_view(false);
        assert_eq!(parallax.offset(), Offset::ORIGIN);
        assert!(!parallax.frame());
        assert_eq!(parallax.offset(), Offset::ORIGIN);
    }

    #[test]
    fn out_of_bounds_pointer_snaps_to_origin() {
        let mut parallax = active();
        parallax.pointer_moved(Point { x: 90.0, y: 50.0 }, square());
        parallax.frame();

        let outcome = parallax.pointer_moved(Point { x: 150.0, y: 50.0 }, square());

        assert_eq!(outcome, MoveOutcome::Snapped);
        assert_eq!(parallax.offset(), Offset::ORIGIN);
        assert_eq!(
            parallax.target_offset(Point { x: 150.0, y: 50.0 }, square()),
            Offset::ORIGIN
        );
    }

    #[test]
    fn snap_cancels_frame_queued_earlier() {
        let mut parallax = active();
        parallax.pointer_moved(Point { x: 95.0, y: 95.0 }, square());

        parallax.pointer_moved(Point { x: -5.0, y: 50.0 }, square());

        assert!(!parallax.has_pending_frame());
        assert!(!parallax.frame());
        assert_eq!(parallax.offset(), Offset::ORIGIN);
    }

    #[test]
    fn box_edges_count_as_inside() {
        let bounds = square();

        assert!(bounds.contains(Point { x: 0.0, y: 100.0 }));
        assert!(!bounds.contains(Point { x: 100.01, y: 50.0 }));
        assert_eq!(Offset { x: 1.5, y: -0.25 }.to_translate(), "translate(1.50px, -0.25px)");
    }
}
