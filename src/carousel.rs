use crate::constants::EDGE_TOLERANCE_PX;

/// One tutor profile. Immutable, rendered once into the DOM.
#[derive(Clone, Copy, Debug)]
pub struct TutorCard {
    pub name: &'static str,
    pub subject: &'static str,
    pub image: &'static str,
    pub bio: &'static str,
}

pub const TUTORS: &[TutorCard] = &[
    TutorCard { name: "Adam C.", subject: "Maths", image: "tutors/adam.jpg", bio: "GCSE and A-level maths, eight years of tutoring." },
    TutorCard { name: "Ashe V.", subject: "Further Maths", image: "tutors/ashe.jpg", bio: "Loves mechanics questions and exam technique drills." },
    TutorCard { name: "Cassie M.", subject: "Physics", image: "tutors/cassie.jpg", bio: "PhD student, patient with first-principles explanations." },
    TutorCard { name: "Ellie L.", subject: "Maths", image: "tutors/ellie.jpg", bio: "Specialises in building confidence before mocks." },
    TutorCard { name: "Jamie W.", subject: "Statistics", image: "tutors/jamie.jpg", bio: "Makes hypothesis testing feel almost reasonable." },
    TutorCard { name: "Louise P.", subject: "Maths", image: "tutors/louise.jpg", bio: "Primary and KS3, games-first approach to numeracy." },
    TutorCard { name: "Max I.", subject: "Computer Science", image: "tutors/max-i.jpg", bio: "Algorithms and NEA project rescue missions." },
    TutorCard { name: "Max W.", subject: "Maths", image: "tutors/max-w.jpg", bio: "Former teacher, knows every mark scheme by heart." },
    TutorCard { name: "Michael A.", subject: "Chemistry", image: "tutors/michael.jpg", bio: "Organic mechanisms drawn until they stick." },
    TutorCard { name: "Molly W.", subject: "Maths", image: "tutors/molly.jpg", bio: "STEP and MAT preparation for university entry." },
];

/// Markup for one card body; the caller owns the enclosing `<li>`.
pub fn card_markup(card: &TutorCard) -> String {
    format!(
        concat!(
            "<div class=\"img\"><img src=\"{image}\" alt=\"{name}\"></div>",
            "<h2>{name}</h2>",
            "<span>{subject}</span>",
            "<p class=\"bio\">{bio}</p>",
        ),
        image = card.image,
        name = card.name,
        subject = card.subject,
        bio = card.bio,
    )
}

/// Pure presentation state: which cards are visually expanded. No model data
/// changes on click, only this toggle.
pub struct CarouselModel {
    expanded: Vec<bool>,
}

impl CarouselModel {
    pub fn new(card_count: usize) -> Self {
        Self {
            expanded: vec![false; card_count],
        }
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }

    /// Flip a card's expanded state and return the new value.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(e) => {
                *e = !*e;
                *e
            }
            None => false,
        }
    }
}

/// Whether the prev/next controls should be enabled for a given scroll
/// position. The right extreme is detected within `EDGE_TOLERANCE_PX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavState {
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

pub fn nav_state(scroll_left: f64, scroll_width: f64, client_width: f64) -> NavState {
    let max_scroll = (scroll_width - client_width).max(0.0);
    NavState {
        prev_enabled: scroll_left > 0.0,
        next_enabled: scroll_left < max_scroll - EDGE_TOLERANCE_PX,
    }
}

/// Distance one navigation click scrolls: one card width plus the inter-card
/// gap, both measured from the rendered layout.
#[inline]
pub fn scroll_step(card_width: f64, gap: f64) -> f64 {
    card_width + gap
}
