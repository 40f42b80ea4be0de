//! The standard value catalog.

use super::entities::{Catalog, Category, Source};

const CATEGORIES: &[(&str, &[&str])] = &[
    (
        "I. Authenticity & Integrity",
        &[
            "Authenticity",
            "Honesty",
            "Integrity",
            "Sincerity",
            "Vulnerability",
            "Truth",
            "Uniqueness",
            "Intuition",
            "Self-respect",
        ],
    ),
    (
        "II. Personal Growth & Achievement",
        &[
            "Achievement",
            "Ambition",
            "Growth",
            "Learning",
            "Determination",
            "Perseverance",
            "Discipline / Self-discipline",
            "Initiative",
            "Curiosity",
            "Innovation",
            "Creativity",
            "Resourcefulness",
            "Accountability",
            "Legacy",
            "Risk-taking",
            "Personal Fulfillment",
            "Understanding",
            "Wisdom",
            "Adaptability",
            "Commitment",
            "Competence",
            "Excellence",
            "Knowledge",
            "Pride",
            "Success",
            "Diligence",
        ],
    ),
    (
        "III. Independence & Freedom",
        &["Autonomy", "Freedom", "Independence", "Self-reliance"],
    ),
    (
        "IV. Interpersonal Relationships & Connection",
        &[
            "Connection",
            "Compassion",
            "Empathy",
            "Kindness",
            "Caring",
            "Friendship",
            "Belonging",
            "Community",
            "Loyalty",
            "Family",
            "Teamwork",
            "Collaboration",
            "Cooperation",
            "Love",
            "Trust",
        ],
    ),
    (
        "V. Leadership & Influence",
        &[
            "Authority",
            "Leadership",
            "Influence",
            "Confidence",
            "Power",
            "Recognition",
            "Vision",
        ],
    ),
    (
        "VI. Well-being, Balance & Happiness",
        &[
            "Balance",
            "Harmony",
            "Health",
            "Well-being",
            "Joy",
            "Contentment",
            "Peace",
            "Serenity",
            "Fun",
            "Optimism",
            "Patience",
            "Gratitude",
            "Hope",
            "Humor",
            "Leisure",
            "Wholeheartedness",
            "Simplicity",
        ],
    ),
    (
        "VII. Ethical & Moral Values",
        &[
            "Fairness",
            "Justice",
            "Ethics",
            "Responsibility",
            "Respect",
            "Honor",
            "Humility",
            "Forgiveness",
            "Non-violence",
            "Tradition",
            "Dignity",
        ],
    ),
    (
        "VIII. Stability & Security",
        &[
            "Financial Stability",
            "Job Security",
            "Safety",
            "Security",
            "Order",
            "Stability",
            "Dependability",
            "Reliability",
            "Thrift",
            "Home",
            "Wealth",
        ],
    ),
    (
        "IX. Generosity & Contribution",
        &[
            "Generosity",
            "Contribution",
            "Service",
            "Giving",
            "Making a Difference",
            "Stewardship",
            "Altruism",
            "Future Generations",
        ],
    ),
    (
        "X. Aesthetics & Appreciation",
        &["Beauty", "Appreciation", "Grace"],
    ),
    (
        "XI. Exploration & Experience",
        &[
            "Adventure",
            "Boldness",
            "Bravery",
            "Travel",
            "Challenge",
            "Courage",
        ],
    ),
    (
        "XII. Miscellaneous & Broader Values",
        &[
            "Citizenship",
            "Efficiency",
            "Enthusiasm",
            "Equality",
            "Faith",
            "Inclusion",
            "Career",
            "Nature",
            "Environment",
            "Openness",
            "Parenting",
            "Patriotism",
            "Self-expression",
            "Sportsmanship",
            "Time",
            "Usefulness",
            "Diversity",
            "Spirituality",
        ],
    ),
];

const SOURCES: &[(&str, &str)] = &[
    ("James Clear", "https://jamesclear.com/core-values"),
    (
        "Brené Brown",
        "https://brenebrown.com/resources/dare-to-lead-list-of-values/",
    ),
    ("Nir Eyal", "https://www.nirandfar.com/common-values/"),
    (
        "Colin Breck",
        "https://blog.colinbreck.com/understanding-our-core-values-an-exercise-for-individuals-and-teams/",
    ),
];

impl Catalog {
    /// The twelve-category catalog shipped with the questionnaire
    pub fn standard() -> Self {
        let categories = CATEGORIES
            .iter()
            .map(|(label, values)| Category::new(*label, values.iter().copied()))
            .collect();
        let sources = SOURCES
            .iter()
            .map(|(name, url)| Source {
                name: (*name).to_string(),
                url: (*url).to_string(),
            })
            .collect();
        Catalog::from_trusted(categories, sources)
    }
}
