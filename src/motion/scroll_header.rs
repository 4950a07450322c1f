use super::reveal::IntersectionReport;

pub const DEFAULT_HIDE_THRESHOLD_PX: f64 = 100.0;
pub const DEFAULT_SECTION_THRESHOLD: f64 = 0.6;

/// In-page anchors shared by the navigation links and the active-section observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NavSection {
    Home,
    About,
    Skills,
    Experience,
    Projects,
    Leadership,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 7] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Experience,
        Self::Projects,
        Self::Leadership,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Experience => "experience",
            Self::Projects => "projects",
            Self::Leadership => "leadership",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Experience => "Experience",
            Self::Projects => "Projects",
            Self::Leadership => "Leadership",
            Self::Contact => "Contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

/// Raw scroll readings taken at one scroll event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_y: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn scrollable_height(&self) -> f64 {
        self.document_height - self.viewport_height
    }

    /// Zero when the page cannot scroll; clamped to `[0, 100]` for overscroll.
    pub fn progress_percent(&self) -> f64 {
        let scrollable = self.scrollable_height();
        if scrollable <= 0.0 || !scrollable.is_finite() {
            return 0.0;
        }

        (self.scroll_y / scrollable * 100.0).clamp(0.0, 100.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ScrollHeader {
    hide_threshold_px: f64,
    last_position: f64,
    hidden: bool,
    progress_percent: f64,
    active_section: NavSection,
}

impl Default for ScrollHeader {
    fn default() -> Self {
        Self::new(DEFAULT_HIDE_THRESHOLD_PX)
    }
}

impl ScrollHeader {
    pub fn new(hide_threshold_px: f64) -> Self {
        Self {
            hide_threshold_px,
            last_position: 0.0,
            hidden: false,
            progress_percent: 0.0,
            active_section: NavSection::Home,
        }
    }

    pub fn hidden(&self) -> bool {
        self.hidden
    }

    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn active_section(&self) -> NavSection {
        self.active_section
    }

    pub fn last_position(&self) -> f64 {
        self.last_position
    }

    /// Hides only while moving down past the threshold; any upward move shows.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) {
        let y = metrics.scroll_y;

        self.hidden = y > self.last_position && y > self.hide_threshold_px;
        self.last_position = y;
        self.progress_percent = metrics.progress_percent();
    }

    /// The last intersecting report in batch order wins, whatever its ratio:
    /// a section taller than the viewport never reaches the observer threshold.
    /// Returns the new section when it changed.
    pub fn on_section_reports<I>(&mut self, reports: I) -> Option<NavSection>
    where
        I: IntoIterator<Item = IntersectionReport<NavSection>>,
    {
        let previous = self.active_section;

        for report in reports {
            if report.is_intersecting {
                self.active_section = report.id;
            }
        }

        (self.active_section != previous).then_some(self.active_section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(scroll_y: f64) -> ScrollMetrics {
        ScrollMetrics {
            scroll_y,
            document_height: 2_000.0,
            viewport_height: 1_000.0,
        }
    }

    #[test]
    fn header_hides_only_when_scrolling_down_past_threshold() {
        let mut header = ScrollHeader::default();
        header.on_scroll(at(50.0));
        assert!(!header.hidden());

        header.on_scroll(at(80.0));
        assert!(!header.hidden());

        header.on_scroll(at(150.0));
        assert!(header.hidden());

        header.on_scroll(at(120.0));
        assert!(!header.hidden());
        assert_eq!(header.last_position(), 120.0);
    }

    #[test]
    fn same_position_keeps_header_visible() {
        let mut header = ScrollHeader::default();
        header.on_scroll(at(400.0));
        assert!(header.hidden());

        header.on_scroll(at(400.0));
        assert!(!header.hidden());
    }

    #[test]
    fn progress_is_ratio_of_scrollable_height() {
        let mut header = ScrollHeader::default();

        header.on_scroll(at(500.0));
        assert_eq!(header.progress_percent(), 50.0);

        header.on_scroll(at(1_000.0));
        assert_eq!(header.progress_percent(), 100.0);

        header.on_scroll(at(0.0));
        assert_eq!(header.progress_percent(), 0.0);
    }

    #[test]
    fn progress_is_zero_when_content_fits_viewport() {
        let metrics = ScrollMetrics {
            scroll_y: 0.0,
            document_height: 800.0,
            viewport_height: 800.0,
        };

        assert_eq!(metrics.progress_percent(), 0.0);
        assert!(metrics.progress_percent().is_finite());
    }

    #[test]
    fn progress_clamps_overscroll() {
        let bounce_top = at(-40.0);
        let bounce_bottom = at(1_060.0);

        assert_eq!(bounce_top.progress_percent(), 0.0);
        assert_eq!(bounce_bottom.progress_percent(), 100.0);
    }

    #[test]
    fn last_intersecting_section_in_batch_wins() {
        let mut header = ScrollHeader::default();

        let changed = header.on_section_reports([
            IntersectionReport::new(NavSection::About, true, 0.7),
            IntersectionReport::new(NavSection::Skills, true, 0.65),
            IntersectionReport::new(NavSection::Experience, false, 0.0),
        ]);

        assert_eq!(changed, Some(NavSection::Skills));
        assert_eq!(header.active_section(), NavSection::Skills);
    }

    #[test]
    fn leaving_sections_keep_active_section() {
        let mut header = ScrollHeader::default();
        header.on_section_reports([IntersectionReport::new(NavSection::Projects, true, 0.9)]);

        let changed = header.on_section_reports([
            IntersectionReport::new(NavSection::Projects, false, 0.2),
            IntersectionReport::new(NavSection::Leadership, false, 0.0),
        ]);

        assert_eq!(changed, None);
        assert_eq!(header.active_section(), NavSection::Projects);
    }

    #[test]
    fn tall_section_below_threshold_ratio_becomes_active() {
        let mut header = ScrollHeader::default();

        let changed =
            header.on_section_reports([IntersectionReport::new(NavSection::Projects, true, 0.45)]);

        assert_eq!(changed, Some(NavSection::Projects));
        assert_eq!(header.active_section(), NavSection::Projects);
    }

    #[test]
    fn nav_sections_round_trip_through_ids() {
        for section in NavSection::ALL {
            assert_eq!(NavSection::from_id(section.id()), Some(section));
        }
        assert_eq!(NavSection::from_id("blog"), None);
        assert_eq!(NavSection::Leadership.href(), "#leadership");
    }
}
