//! Project portfolio

use super::{strings, CDN};
use crate::domain::{Project, ProjectStatus};

/// Category filter choices, sentinel first
pub const PROJECT_CATEGORIES: &[&str] = &[
    "all",
    "Conservation",
    "Agriculture",
    "Tourism",
    "Community Development",
    "Infrastructure",
    "Governance",
    "Partnership",
];

/// Tabbed showcase below the portfolio grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProject {
    pub key: &'static str,
    pub tab: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
    pub heading: &'static str,
    pub highlights: &'static [&'static str],
}

impl FeaturedProject {
    pub fn image_url(&self) -> String {
        format!("{CDN}/{}", self.image)
    }
}

pub const FEATURED_PROJECTS: &[FeaturedProject] = &[
    FeaturedProject {
        key: "conservation",
        tab: "Forest Restoration",
        title: "Forest Restoration Initiative",
        summary: "Restoring degraded forest areas to improve habitat quality and promote biodiversity",
        image: "dde2118f-8576-4d35-af35-b1f3ef0be926.jpeg",
        heading: "Project Highlights",
        highlights: &[
            "Over 10,000 native trees planted",
            "50+ community members trained in restoration techniques",
            "200 hectares of degraded land restored",
        ],
    },
    FeaturedProject {
        key: "development",
        tab: "Community Empowerment",
        title: "Community Empowerment Program",
        summary: "Training and supporting local communities to sustainably manage natural resources",
        image: "022a13f2-4964-4d96-a177-5a988e38afd7.jpg",
        heading: "Program Achievements",
        highlights: &[
            "150+ community members trained",
            "5 community resource centers established",
            "Water and sanitation projects implemented",
        ],
    },
    FeaturedProject {
        key: "tourism",
        tab: "Eco-Tourism",
        title: "Sustainable Eco-Tourism Development",
        summary: "Creating authentic tourism experiences that benefit local communities and conservation",
        image: "64b990c6-a12a-403c-a8fd-67e3494a3541.jpg",
        heading: "Tourism Initiatives",
        highlights: &[
            "2 eco-lodges constructed with local materials",
            "15km of cultural trails developed",
            "Local guides trained and certified",
        ],
    },
];

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "1".into(),
            title: "Forest Boundary GPS Mapping".into(),
            description: "Comprehensive mapping of traditional forest boundaries using modern GPS technology to establish baseline data for conservation planning.".into(),
            category: "Conservation".into(),
            status: ProjectStatus::Completed,
            year: "2020-2022".into(),
            location: "Kakondo Protected Area".into(),
            beneficiaries: 18000,
            budget: None,
            partners: strings(&["Local Youth Groups", "Seven Tribal Groups"]),
            outcomes: strings(&[
                "Mapped 50% of Kakondo's remaining intact forests",
                "Established digital boundary database",
                "Trained local youth in GPS technology",
                "Created foundation for future conservation planning",
            ]),
            image: format!("{CDN}/9c966519-cb12-4d53-984a-c10084383f50.jpeg"),
            details: "The Community conducted a traditional land (forest) boundary survey using modern land survey technologies. A team comprised of youths from the seven council wards and representatives of each seven tribal groups. The team was led by Mr. Mogia Kumuno, a Bachelor of Lands graduate from PNG University of Technology.".into(),
        },
        Project {
            id: "2".into(),
            title: "Irish Potato Farm Management Training".into(),
            description: "Intensive agricultural training program focusing on sustainable potato farming and agribusiness development for lead farmers.".into(),
            category: "Agriculture".into(),
            status: ProjectStatus::Completed,
            year: "2021".into(),
            location: "Dumun Village".into(),
            beneficiaries: 45,
            budget: None,
            partners: strings(&["PNG NARI", "Sinesine Yongomugl Farmers Association"]),
            outcomes: strings(&[
                "Trained 45 lead farmers in sustainable practices",
                "Improved potato yield by 30%",
                "Established farmer groups network",
                "Enhanced food security in the region",
            ]),
            image: format!("{CDN}/81031537-01c9-495d-8f67-ded4b7f4c122.jpeg"),
            details: "Potato Farm Management and Agribusiness training conducted with Potato Lead Farmers of Kakondo area. Training was led by Okrupa Mauro, a graduate from the PNG University of Natural Resources & Environment and current NARI scientist specializing in Climate Resilience Agriculture Systems.".into(),
        },
        Project {
            id: "3".into(),
            title: "Climate Resilient Model Farms".into(),
            description: "Establishment of demonstration farms showcasing climate-smart agriculture practices and sustainable food production systems.".into(),
            category: "Agriculture".into(),
            status: ProjectStatus::Ongoing,
            year: "2024-2025".into(),
            location: "Ward 14 Tabare LLG, Ward 6 Chuave LLG".into(),
            beneficiaries: 120,
            budget: Some("PGK 4,000".into()),
            partners: strings(&["Simbu Provincial Department of Agriculture", "Tabare LLG"]),
            outcomes: strings(&[
                "Established 6 model climate-resilient farms",
                "Demonstrated sustainable farming techniques",
                "Provided hands-on training to farmers",
                "Improved crop diversity and nutrition",
            ]),
            image: format!("{CDN}/fdd8d3d0-c365-412a-b576-d6955497a985.jpg"),
            details: "The executives of KPAM Inc established 6 climate resilient and income security model farms. Bulb onion and purple cabbage production on-farm training was conducted by Dom Kaupa, an Agricultural Graduate specializing in crop agronomy and value chain development.".into(),
        },
        Project {
            id: "4".into(),
            title: "Eco-Lodge Construction & Trail Development".into(),
            description: "Building sustainable tourism infrastructure including eco-lodges and rehabilitating ancestral forest pathways to promote responsible ecotourism.".into(),
            category: "Tourism".into(),
            status: ProjectStatus::Ongoing,
            year: "2022-2025".into(),
            location: "Kakondo Forest Area".into(),
            beneficiaries: 200,
            budget: None,
            partners: strings(&["Seven Tribal Youth Groups", "Traditional Leaders"]),
            outcomes: strings(&[
                "Constructed 2 eco-lodges with local materials",
                "Rehabilitated 15km of ancestral footpaths",
                "Created employment for local youth",
                "Enhanced cultural heritage preservation",
            ]),
            image: format!("{CDN}/8655594d-f989-40f0-afda-7f58b2960c0e.jpg"),
            details: "Construction of Eco-lodge and upgrading traditional ancestral tracks in the forest to promote ecotourism. The work was done with the help and collaborations of all the youths representing the seven tribes in Kakondo area.".into(),
        },
        Project {
            id: "5".into(),
            title: "Community Beautification Program".into(),
            description: "Village-level initiatives to improve community hygiene, health, and environmental aesthetics through collective action.".into(),
            category: "Agriculture".into(),
            status: ProjectStatus::Completed,
            year: "2023".into(),
            location: "Kaubasis Village".into(),
            beneficiaries: 85,
            budget: None,
            partners: strings(&["Local Mothers Groups", "Youth Volunteers"]),
            outcomes: strings(&[
                "Cleaned and beautified Kaubasis village",
                "Started household kitchen gardens with composted village waste",
                "Promoted community health and hygiene",
                "Strengthened community cooperation",
            ]),
            image: format!("{CDN}/ba25aa53-49cf-4231-a87d-0e58d59b2a34.jpeg"),
            details: "Mother and youth volunteers cleaned up their own village under the community health, hygiene and beautification program, demonstrating local ownership and pride in environmental stewardship.".into(),
        },
        Project {
            id: "6".into(),
            title: "Water Supply System Maintenance".into(),
            description: "Infrastructure maintenance and improvement project ensuring reliable access to clean water for community health and wellbeing.".into(),
            category: "Infrastructure".into(),
            status: ProjectStatus::Completed,
            year: "2023".into(),
            location: "Dumun Village".into(),
            beneficiaries: 300,
            budget: None,
            partners: strings(&["Village Council", "Technical Volunteers"]),
            outcomes: strings(&[
                "Restored water supply system functionality",
                "Improved water quality and access",
                "Trained local technicians",
                "Enhanced community health outcomes",
            ]),
            image: format!("{CDN}/78967b89-8d0b-4b04-bb2e-c32cb68a2d08.jpg"),
            details: "Helped maintain the water supply system in Dumun, ensuring reliable access to clean water and supporting community health and development initiatives.".into(),
        },
        Project {
            id: "7".into(),
            title: "Organizational Constitution & Roadmap".into(),
            description: "Development and official launch of KPAM's governance framework and strategic development roadmap for sustainable organizational growth.".into(),
            category: "Governance".into(),
            status: ProjectStatus::Completed,
            year: "2023".into(),
            location: "Kakondo Area".into(),
            beneficiaries: 18000,
            budget: Some("PGK 7,000 (Community Fundraised)".into()),
            partners: strings(&["Community Leaders", "Traditional Chiefs"]),
            outcomes: strings(&[
                "Launched comprehensive constitution",
                "Established governance framework",
                "Defined strategic development roadmap",
                "Strengthened organizational legitimacy",
            ]),
            image: format!("{CDN}/84966069-fbc2-4e91-8109-baaff58d158b.jpg"),
            details: "Official launching of the association constitution and roadmap in 2023, with local leaders raising PGK 7,000 for the event and community members contributing food, cash, and cultural performances.".into(),
        },
        Project {
            id: "8".into(),
            title: "Protected Area Network Participation".into(),
            description: "Active engagement in national and regional protected area initiatives to build partnerships and share best practices.".into(),
            category: "Partnership".into(),
            status: ProjectStatus::Ongoing,
            year: "2024-2025".into(),
            location: "PNG National Level".into(),
            beneficiaries: 50000,
            budget: None,
            partners: strings(&["CEPA", "UNDP", "Mt Wilhelm Protected Area"]),
            outcomes: strings(&[
                "Participated in PNG Protected Area Forum",
                "Completed financial management training",
                "Built national partnerships",
                "Positioned for PA deed signing",
            ]),
            image: format!("{CDN}/eced0bca-9636-4e81-97da-dc2ce702b4b1.jpeg"),
            details: "Attended the PNG Protected Area Forum in Port Moresby and participated in executive financial management training through the CEPA/UNDP-GEF6 program. Made public declaration as potential next site for PA deed signing.".into(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{Catalog, FilterCriteria, Selection};

    #[test]
    fn test_agriculture_filter_keeps_three_of_eight() {
        let catalog = Catalog::new(projects());
        assert_eq!(catalog.len(), 8);
        let criteria = FilterCriteria::new().with_category(Selection::from_choice("Agriculture"));
        let view = catalog.filter(&criteria);
        assert_eq!(view.len(), 3);
        assert!(view.iter().all(|p| p.category == "Agriculture"));
        // Relative order preserved
        let ids: Vec<&str> = view.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3", "5"]);
    }

    #[test]
    fn test_project_statistics_ignore_filters() {
        let catalog = Catalog::new(projects());
        let before = catalog.aggregate();
        let _view = catalog.filter(&FilterCriteria::new().with_category(Selection::from_choice("Tourism")));
        let after = catalog.aggregate();

        assert_eq!(before, after);
        assert_eq!(after.total, 8);
        assert_eq!(after.count(ProjectStatus::Ongoing), 3);
        assert_eq!(after.count(ProjectStatus::Completed), 5);
        assert_eq!(after.count(ProjectStatus::Planned), 0);
        assert_eq!(after.sum, 18000 + 45 + 120 + 200 + 85 + 300 + 18000 + 50000);
    }

    #[test]
    fn test_every_category_is_offered() {
        for project in projects() {
            assert!(PROJECT_CATEGORIES.iter().any(|c| *c == project.category));
        }
    }
}
