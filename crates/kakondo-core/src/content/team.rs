//! Team profiles and board composition

use super::CDN;
use crate::domain::{MemberKind, TeamMember};

/// (role, tribe represented)
pub const BOARD_OFFICERS: &[(&str, &str)] = &[
    ("Chairperson", "Kapma Gaten Representative"),
    ("Vice-Chairperson", "Bolku Representative"),
    ("Treasurer", "Kapma Gaten Representative"),
    ("Secretary", "Manuku Representative"),
];

pub const BOARD_TRIBAL_REPRESENTATIVES: &[(&str, &str)] = &[
    ("Board Member", "Kuiawa Representative"),
    ("Board Member", "Woma Representative"),
    ("Board Member", "Kimbaku Representative"),
    ("Board Member", "Kapma Mak Representative"),
];

#[allow(clippy::too_many_arguments)]
fn member(
    id: &str,
    name: &str,
    position: &str,
    age: u32,
    gender: &str,
    qualification: &str,
    specialization: &str,
    email: &str,
    phone: &str,
    background: &str,
    kind: MemberKind,
    image: &str,
) -> TeamMember {
    TeamMember {
        id: id.into(),
        name: name.into(),
        position: position.into(),
        age,
        gender: gender.into(),
        qualification: qualification.into(),
        specialization: specialization.into(),
        email: email.into(),
        phone: phone.into(),
        background: background.into(),
        kind,
        image: Some(format!("{CDN}/{image}")),
    }
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        member(
            "1",
            "Mr. Mauro Okrupa",
            "Chairman & Executive Director",
            38,
            "Male",
            "Bachelor of Tropical Agriculture, PNG UNRE",
            "Scientist - Agronomy and Climate Resilience Systems, PNG National Agriculture Research Institute",
            "mauro.okrupa@nari.gov.pg",
            "+675 7182 9634",
            "Mr. Mauro Okrupa is a seasoned agronomist, research leader, and conservation advocate with over nine years of progressive experience in agricultural research and development. As the lead scientist for the ACIAR Climate Smart Agriculture (CSA) project, he has pioneered the digital seasonal climate farm advisory service, a first of its kind in the Pacific.",
            MemberKind::Executive,
            "3005b45a-4340-470e-aa4c-192e44cfa947.jpg",
        ),
        member(
            "2",
            "Mr. Karl Kama",
            "Strategic Advisor and Program Director",
            36,
            "Male",
            "Bachelor's Degree in Social Science, Divine Word University",
            "Strategic Planning and MEAL Specialist, PNG National Agricultural Research Institute",
            "karl.kama@nari.gov.pg",
            "+675 8170 0969",
            "Mr. Karl Kama is a seasoned development professional with over seven years of experience in Program Management, Monitoring, Evaluation, Accountability, and Learning (MEAL). He was awarded the Academic and Research Excellence Award for his academic distinction and research leadership.",
            MemberKind::Executive,
            "a5005380-a7ea-4740-a6ec-cf88da4d1ed7.jpg",
        ),
        member(
            "3",
            "Mr. Paul Dinaropaa Rudolph",
            "Sustainable Development Program Manager",
            48,
            "Male",
            "Advanced Diploma in Sales Management and Marketing, Cambridge University",
            "Regional Operational Manager, Puma Energy",
            "paul.rudolph@pumaenergy.com",
            "+675 7318 3614",
            "Paul Rudolph brings over three decades of private sector leadership and international business experience. With 34 years of experience in the Oil and Gas industry, his understanding of commercial systems, compliance, and sustainable business practices is unmatched.",
            MemberKind::Volunteer,
            "5adfe122-e50e-4d44-a4f1-53eae2945cf9.jpg",
        ),
        member(
            "4",
            "Mr. Nick Kola",
            "Legal & Policy Advisor",
            33,
            "Male",
            "Diploma in Middle Management, Somare Institute of Leadership and Governance",
            "Community Policing and Policy Enforcement",
            "kolanick60@gmail.com",
            "+675 7854 3629",
            "Nick Kola brings experience in law enforcement and public administration. He currently serves as a High-Level Crime Investigator with the Royal Papua New Guinea Constabulary and is pursuing postgraduate studies in Law at the University of Papua New Guinea.",
            MemberKind::Volunteer,
            "0fc61aee-ae54-4776-8eb9-a1e07233c182.jpg",
        ),
        member(
            "5",
            "Ms. Gaibee Bal",
            "Tourism and Hospitality Officer",
            22,
            "Female",
            "Diploma in Tourism and Hospitality Management, Poly Tech",
            "Tourism and Hospitality",
            "gaibee.bal@kakondo.org",
            "+675 7123 4567",
            "Ms. Gaibee Bal is an emerging professional in tourism and hospitality, recently graduating in 2024. She brings fresh perspective and youthful energy to conservation-linked tourism development at Kakondo.",
            MemberKind::Program,
            "acd7de20-f7eb-44da-9061-04abb599cc5b.jpg",
        ),
        member(
            "6",
            "Mr. Dom Kaupa",
            "Agriculture Program Coordinator",
            36,
            "Male",
            "Diploma in Tropical Agriculture, PNG University of Natural Resources and Environment",
            "Agronomy and Agricultural Value Chain Development",
            "domson.kaupa@gmail.com",
            "+675 7129 9327",
            "Mr. Dom Kaupa is a dedicated Agronomist with over seven years of experience supporting smallholder farmers in Papua New Guinea. He served with the Fresh Produce Development Agency (FPDA) from 2013 to 2020, championing farmer training and climate-resilient horticulture.",
            MemberKind::Program,
            "3005b45a-4340-470e-aa4c-192e44cfa947.jpg",
        ),
        member(
            "7",
            "Ms. More Gerel",
            "Water, Health and Sanitation Program Coordinator",
            24,
            "Female",
            "Diploma in Nursing, Simbu (Kundiawa) Nursing College",
            "Health Sciences",
            "more.gerel@kakondo.org",
            "+675 7264 8779",
            "Ms. More Gerel is a passionate health professional who recently graduated with a Diploma in Nursing in 2024. She brings basic health education, hygiene promotion, and preventative care expertise to the community.",
            MemberKind::Program,
            "d86371f3-63cf-4e4f-b63e-63a436754222.jpg",
        ),
        member(
            "8",
            "Mr. Peter Mire",
            "ICT Manager",
            24,
            "Male",
            "Diploma in ICT, Poly Tech",
            "Information and Communication Technology",
            "peter.mire@kakondo.org",
            "+675 8129 3737",
            "Peter Mire is a recent ICT graduate and enthusiastic self-learner with a passion for digital innovation. He has designed and developed the official webpage for Kakondo Protected Area and manages the organization's digital presence.",
            MemberKind::Volunteer,
            "694aa2ab-ab81-4e05-ba36-1969b24680db.jpg",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Catalog;

    #[test]
    fn test_counts_by_kind() {
        let stats = Catalog::new(team_members()).aggregate();
        assert_eq!(stats.total, 8);
        assert_eq!(stats.count(MemberKind::Executive), 2);
        assert_eq!(stats.count(MemberKind::Program), 3);
        assert_eq!(stats.count(MemberKind::Volunteer), 3);
        assert_eq!(stats.count(MemberKind::Board), 0);
        assert_eq!(stats.sum, 0);
    }

    #[test]
    fn test_sections_keep_listing_order() {
        let catalog = Catalog::new(team_members());
        let volunteers = catalog.select(|m| m.kind == MemberKind::Volunteer);
        let ids: Vec<&str> = volunteers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["3", "4", "8"]);
    }
}
