//! Fixed marketing copy fed to the landing page sections.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub attribution: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Audience {
    pub label: &'static str,
    pub text: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub num: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub num: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub cadence: &'static str,
    pub summary: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub const BRAND: &str = "Emotional Fitness Lab";

pub const AUDIENCES: &[Audience] = &[
    Audience {
        label: "For Venues & Social Clubs",
        text: "Your members want programming that's deeper than another happy hour and more accessible than therapy. Emotional fitness classes create the kind of transformational experiences that build loyalty and word-of-mouth.",
    },
    Audience {
        label: "For Employers",
        text: "Emotional intelligence is the #1 predictor of workplace performance and leadership effectiveness. Your team needs more than a meditation app. They need a real, facilitated practice.",
    },
    Audience {
        label: "For Studios & Wellness Spaces",
        text: "You already offer yoga, breathwork, and sound baths. Emotional fitness is the missing piece: a structured EQ practice that fills a need nothing else on your schedule addresses.",
    },
];

pub const STATS: &[Stat] = &[
    Stat { num: "2 hr", label: "Per session" },
    Stat { num: "6–24", label: "Participants" },
    Stat { num: "15+", label: "Months of testing" },
    Stat { num: "300+", label: "Attendees and counting" },
    Stat { num: "Drop-in", label: "Each session stands alone" },
];

pub const TOPICS: &[&str] = &[
    "Deep Goal Setting",
    "Approaching & Being Approachable",
    "Gratitude & Grievances",
    "Using Emotions as Data",
    "Recognizing Negative Self-Talk",
    "Positivity",
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "This class is unlike anything else I've experienced. It gave me tools I actually use in my daily life. Not just concepts, but real skills I practice.",
        attribution: "Attendee testimonial",
    },
    Testimonial {
        quote: "I came for curiosity and kept coming back because every session genuinely shifted something. The group dynamic makes it so much more powerful than doing this work alone.",
        attribution: "Attendee testimonial",
    },
    Testimonial {
        quote: "I've done therapy, meditation, retreats. This fills a completely different need. It's the only place I go to actively practice emotional skills with other people.",
        attribution: "Attendee testimonial",
    },
];

pub const STEPS: &[Step] = &[
    Step {
        num: "01",
        title: "You provide the space and the people",
        desc: "A room, a group, and a schedule. That's all you need. Whether it's a members' lounge, a conference room, or a studio, we work with what you have.",
    },
    Step {
        num: "02",
        title: "We bring the experience",
        desc: "A trained facilitator, a proven curriculum, and everything needed to run a powerful session. Each workshop is a standalone experience selected from a catalog of tested topics.",
    },
    Step {
        num: "03",
        title: "Your community gets hooked",
        desc: "Attendees leave with real skills they use immediately, and they come back. This is the kind of programming that builds loyalty, generates word-of-mouth, and fills a gap nothing else on your calendar addresses.",
    },
];

pub const PRICING_TIERS: &[PricingTier] = &[
    PricingTier {
        name: "Single Session",
        price: "Custom quote",
        cadence: "one-time",
        summary: "Try the format with your community before committing to a series.",
        features: &[
            "One 2-hour facilitated class",
            "6 to 24 participants",
            "Topic chosen from the catalog",
        ],
        featured: false,
    },
    PricingTier {
        name: "Monthly Series",
        price: "Custom quote",
        cadence: "per month",
        summary: "A recurring class your members can build into their routine.",
        features: &[
            "A session every month",
            "Rotating topics, each one drop-in friendly",
            "Attendance and feedback summary",
        ],
        featured: true,
    },
    PricingTier {
        name: "Workplace Program",
        price: "Custom quote",
        cadence: "per engagement",
        summary: "Emotional fitness as part of your team's development plan.",
        features: &[
            "Sessions scheduled around your team",
            "Topics matched to your goals",
            "On-site or at a partner venue",
        ],
        featured: false,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_have_content() {
        assert_eq!(AUDIENCES.len(), 3);
        assert_eq!(STATS.len(), 5);
        assert_eq!(STEPS.len(), 3);
        assert!(!TESTIMONIALS.is_empty());
        assert!(!TOPICS.is_empty());
    }

    #[test]
    fn exactly_one_featured_tier() {
        assert_eq!(PRICING_TIERS.iter().filter(|t| t.featured).count(), 1);
        assert!(PRICING_TIERS.iter().all(|t| !t.features.is_empty()));
    }
}
