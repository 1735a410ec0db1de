//! Static copy for the informational pages

use super::CDN;

/// Headline figure with a label, used by stat rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// Titled blurb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blurb {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusArea {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub goals: &'static [&'static str],
    pub activities: &'static [&'static str],
}

impl FocusArea {
    pub fn image_url(&self) -> String {
        format!("{CDN}/{}", self.image)
    }
}

/// Option of a select or radio group: (value, label)
pub type Choice = (&'static str, &'static str);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VolunteerOpportunity {
    pub title: &'static str,
    pub description: &'static str,
    pub requirements: &'static str,
}

pub const HOME_STATS: &[Highlight] = &[
    Highlight { value: "7,000+", label: "Hectares Protected", description: "" },
    Highlight { value: "18,000", label: "Indigenous Landowners", description: "" },
    Highlight { value: "8", label: "Council Wards", description: "" },
    Highlight { value: "5", label: "Conservation CBOs", description: "" },
];

pub const FOCUS_SUMMARIES: &[Blurb] = &[
    Blurb {
        title: "Forest Conservation",
        description: "Protecting biodiversity, restoring degraded habitats, and promoting sustainable environmental interactions through community-led initiatives.",
    },
    Blurb {
        title: "Eco-Tourism",
        description: "Promoting sustainable travel that supports conservation and local culture while preserving cultural sites and traditional practices.",
    },
    Blurb {
        title: "Community Development",
        description: "Empowering communities through training programs, sustainable practices, and economic development opportunities.",
    },
    Blurb {
        title: "Leadership & Governance",
        description: "Strengthening local leadership, promoting transparency, and ensuring effective governance for sustainable development.",
    },
];

pub const ACHIEVEMENTS: &[Highlight] = &[
    Highlight {
        value: "5",
        label: "Conservation CBOs",
        description: "Community-based organizations actively involved",
    },
    Highlight { value: "50%", label: "Forest Mapped", description: "Of Kakondo's remaining intact forests GPS mapped" },
    Highlight {
        value: "7,000+",
        label: "Hectares Protected",
        description: "Tropical montane rainforest under community management",
    },
    Highlight { value: "18,000", label: "Landowners", description: "Indigenous landowners across 8 council wards" },
];

pub const FOCUS_AREAS: &[FocusArea] = &[
    FocusArea {
        id: "conservation",
        title: "Community-Based Conservation and Environmental Stewardship",
        subtitle: "Forest Conservation",
        description: "KPAM works to protect Kakondo's forests, watershed, and wildlife through community-led conservation efforts, including habitat restoration and biodiversity monitoring. We blend traditional knowledge with modern practices to safeguard natural resources.",
        image: "dada7a7d-82e0-48b2-8a63-0e681f51aaed.jpg",
        goals: &[
            "Protect and restore 7,000+ hectares of tropical montane rainforest",
            "Monitor and preserve endemic flora and fauna species",
            "Implement community-led reforestation programs",
            "Establish sustainable forest management practices",
        ],
        activities: &[
            "GPS mapping of forest boundaries",
            "Biodiversity monitoring and inventory",
            "Habitat restoration projects",
            "Community conservation training",
        ],
    },
    FocusArea {
        id: "agriculture",
        title: "Sustainable Livelihoods and Climate-Smart Agriculture",
        subtitle: "Eco-Tourism",
        description: "KPAM supports sustainable agriculture, eco-tourism, and small businesses to create resilient, community-driven economies. By promoting climate-smart practices, we help communities adapt to climate change while improving food security and economic well-being.",
        image: "b81893ec-22f3-405f-a6e2-4d591073c4ae.jpg",
        goals: &[
            "Develop authentic eco-tourism experiences",
            "Create sustainable income opportunities",
            "Preserve cultural heritage and traditions",
            "Promote responsible travel practices",
        ],
        activities: &[
            "Eco-lodge construction and management",
            "Traditional footpath rehabilitation",
            "Cultural site preservation",
            "Tourism guide training programs",
        ],
    },
    FocusArea {
        id: "development",
        title: "Capacity Building for Climate-Smart Agriculture and Conservation",
        subtitle: "Community Development & Training",
        description: "We provide training in climate-smart agriculture, nature-based solutions, sustainable land use and conservation for men, women, youth, and children, equipping them with the skills to improve food security, build resilience to climate change, and protect the environment.",
        image: "b051396a-789c-4ebb-ac62-28022df5d8f5.jpg",
        goals: &[
            "Build local capacity in sustainable practices",
            "Empower women, youth, and farmers",
            "Improve food security and nutrition",
            "Strengthen climate adaptation skills",
        ],
        activities: &[
            "Climate-smart agriculture training",
            "Model farm establishment",
            "Skills development workshops",
            "Knowledge transfer programs",
        ],
    },
    FocusArea {
        id: "governance",
        title: "Leadership and Governance, including Law and Order",
        subtitle: "Leadership & Governance",
        description: "KPAM strengthens leadership and governance by training local leaders, youth, and community members. We focus on enhancing decision-making, fostering transparency, and prioritizing law and order to ensure traditional social order systems are strengthened and local authorities carry out effective and peaceful governance.",
        image: "edcf5c95-2c96-42d1-91c7-c87fdaa8e639.jpg",
        goals: &[
            "Strengthen local governance structures",
            "Enhance leadership capacity",
            "Promote transparency and accountability",
            "Maintain law and order",
        ],
        activities: &[
            "Leadership training programs",
            "Governance workshops",
            "Policy development support",
            "Conflict resolution training",
        ],
    },
];

pub const IMPLEMENTATION_APPROACH: &[Blurb] = &[
    Blurb {
        title: "Community-Led",
        description: "All initiatives are driven by local communities with traditional knowledge at the center of our conservation and development strategies.",
    },
    Blurb {
        title: "Science-Based",
        description: "Our programs integrate modern scientific methods with traditional practices to ensure effective and sustainable outcomes.",
    },
    Blurb {
        title: "Culturally Grounded",
        description: "We respect and strengthen traditional governance systems while building capacity for modern conservation and development challenges.",
    },
];

/// Involvement cards on Get Involved; the id doubles as the form value
pub const INVOLVEMENT_TYPES: &[(&str, Blurb)] = &[
    (
        "volunteer",
        Blurb {
            title: "Become a Volunteer",
            description: "Join our hands-on conservation efforts and community programs",
        },
    ),
    (
        "research",
        Blurb {
            title: "Research Collaboration",
            description: "Contribute to scientific research and environmental studies",
        },
    ),
    (
        "partner",
        Blurb { title: "Institutional Partnership", description: "Partner with us as an organization or institution" },
    ),
    (
        "donate",
        Blurb { title: "Support Our Cause", description: "Make a financial contribution to our conservation efforts" },
    ),
];

/// Radio options of the application form, same values as the cards
pub const INVOLVEMENT_CHOICES: &[Choice] = &[
    ("volunteer", "Volunteer"),
    ("research", "Research Collaboration"),
    ("partner", "Institutional Partnership"),
    ("donate", "Financial Support"),
];

pub const VOLUNTEER_OPPORTUNITIES: &[VolunteerOpportunity] = &[
    VolunteerOpportunity {
        title: "Forest Conservation",
        description: "Help with reforestation, habitat restoration, and biodiversity monitoring",
        requirements: "Physical fitness, outdoor enthusiasm",
    },
    VolunteerOpportunity {
        title: "Community Training",
        description: "Assist in capacity building and educational programs for local communities",
        requirements: "Teaching experience, communication skills",
    },
    VolunteerOpportunity {
        title: "Eco-Tourism Development",
        description: "Support sustainable tourism initiatives and cultural preservation",
        requirements: "Tourism experience, cultural sensitivity",
    },
    VolunteerOpportunity {
        title: "Documentation & Media",
        description: "Help document our activities and create promotional materials",
        requirements: "Photography/videography skills, creative abilities",
    },
];

pub const INTERESTS: &[&str] = &[
    "Forest Conservation",
    "Wildlife Protection",
    "Community Development",
    "Eco-Tourism",
    "Climate Change",
    "Education & Training",
    "Research & Documentation",
    "Agriculture",
    "Water & Sanitation",
    "Youth Programs",
    "Women Empowerment",
    "Traditional Culture",
];

pub const AVAILABILITY: &[Choice] = &[
    ("full-time", "Full-time commitment"),
    ("part-time", "Part-time (weekends/evenings)"),
    ("seasonal", "Seasonal availability"),
    ("project-based", "Project-based work"),
    ("remote", "Remote work only"),
];

pub const INQUIRY_TYPES: &[Choice] = &[
    ("general", "General Inquiry"),
    ("volunteer", "Volunteer Opportunity"),
    ("partnership", "Partnership"),
    ("donation", "Donation"),
    ("media", "Media Inquiry"),
    ("research", "Research Collaboration"),
];

pub const IMPACT: &[Blurb] = &[
    Blurb {
        title: "Conservation Impact",
        description: "Help protect endangered species and restore degraded habitats in the Bismarck Forest Corridor",
    },
    Blurb {
        title: "Community Development",
        description: "Support capacity building programs that empower local communities with sustainable practices",
    },
    Blurb {
        title: "Climate Action",
        description: "Contribute to climate-smart agriculture and nature-based solutions for climate adaptation",
    },
];

/// Label for a choice value, empty when unknown
pub fn choice_label(choices: &[Choice], value: &str) -> &'static str {
    choices
        .iter()
        .find(|(v, _)| *v == value)
        .map(|(_, label)| *label)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_four_focus_areas_with_goals() {
        assert_eq!(FOCUS_AREAS.len(), 4);
        assert!(FOCUS_AREAS.iter().all(|a| a.goals.len() == 4 && a.activities.len() == 4));
        assert!(FOCUS_AREAS[0].image_url().starts_with("https://"));
    }

    #[test]
    fn test_involvement_cards_match_radio_options() {
        let cards: Vec<&str> = INVOLVEMENT_TYPES.iter().map(|(id, _)| *id).collect();
        let radios: Vec<&str> = INVOLVEMENT_CHOICES.iter().map(|(value, _)| *value).collect();
        assert_eq!(cards, radios);
    }

    #[test]
    fn test_interest_areas() {
        assert_eq!(INTERESTS.len(), 12);
    }

    #[test]
    fn test_choice_label() {
        assert_eq!(choice_label(INQUIRY_TYPES, "media"), "Media Inquiry");
        assert_eq!(choice_label(AVAILABILITY, "weekly"), "");
    }
}
