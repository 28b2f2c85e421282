//! Page sections and the router that picks the one under the viewport center.

use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Projects,
    Skills,
    Certificates,
    Contact,
}

impl SectionId {
    /// Document order. The router evaluates sections in this order.
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Certificates,
        SectionId::Contact,
    ];

    /// Element id of the section, also used as the nav link target.
    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::About => "about",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Certificates => "certificates",
            SectionId::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == id)
    }

    /// Where the background camera sits while this section is active.
    pub fn camera_position(self) -> Vec3 {
        match self {
            SectionId::Home => Vec3::new(0.0, 0.0, 5.0),
            SectionId::About => Vec3::new(-3.0, 2.0, 7.0),
            SectionId::Projects => Vec3::new(3.0, -1.0, 8.0),
            SectionId::Skills => Vec3::new(0.0, 3.0, 6.0),
            SectionId::Certificates => Vec3::new(-2.0, -2.0, 5.0),
            SectionId::Contact => Vec3::new(1.0, -1.0, 4.0),
        }
    }
}

/// Camera position for a raw section id; unknown ids fall back to home.
pub fn camera_position_for(id: &str) -> Vec3 {
    SectionId::from_id(id)
        .unwrap_or(SectionId::Home)
        .camera_position()
}

/// Document-relative vertical span of a section (`offsetTop`/`offsetHeight`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionSpan {
    pub id: SectionId,
    pub top: f32,
    pub height: f32,
}

impl SectionSpan {
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Pick the section whose span contains the viewport's vertical midpoint.
///
/// Spans are checked in the order given; the first containing span wins.
pub fn active_section(spans: &[SectionSpan], scroll_y: f32, viewport_height: f32) -> Option<SectionId> {
    let midpoint = scroll_y + viewport_height / 2.0;
    spans.iter().find(|s| s.contains(midpoint)).map(|s| s.id)
}

/// Holds the active section between scroll events.
#[derive(Clone, Debug)]
pub struct SectionRouter {
    current: SectionId,
}

impl Default for SectionRouter {
    fn default() -> Self {
        Self {
            current: SectionId::Home,
        }
    }
}

impl SectionRouter {
    #[inline]
    pub fn current(&self) -> SectionId {
        self.current
    }

    /// Re-evaluate against fresh geometry. Returns `true` if the active
    /// section changed. No containing span keeps the current section.
    pub fn update(&mut self, spans: &[SectionSpan], scroll_y: f32, viewport_height: f32) -> bool {
        match active_section(spans, scroll_y, viewport_height) {
            Some(id) if id != self.current => {
                self.current = id;
                true
            }
            _ => false,
        }
    }
}
