//! Static department catalog.
//!
//! Fourteen fixed entries; ordering matters for display determinism and for
//! the mention scan in [`crate::domain::linker`]. Entries are never created
//! or destroyed at runtime.

/// A named destination category with a link target and a one-line
/// capability summary used in prompt construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Department {
    pub name: &'static str,
    pub link: &'static str,
    pub blurb: &'static str,
}

pub const CATALOG: [Department; 14] = [
    Department {
        name: "PR & Media Relations Team",
        link: "pr-media-relations-team.html",
        blurb: "Media monitoring, journalist outreach, press releases",
    },
    Department {
        name: "Behavioural Science Team",
        link: "behavioural-science-team.html",
        blurb: "Behavior change campaigns, government communications, research analysis",
    },
    Department {
        name: "Events & Experiential Team",
        link: "events-experiential-team.html",
        blurb: "Event planning, brand activations, experiential marketing",
    },
    Department {
        name: "Crisis Communications Team",
        link: "crisis-communications-team.html",
        blurb: "Crisis response, reputation management, stakeholder messaging",
    },
    Department {
        name: "Brand Strategy Team",
        link: "brand-strategy-team.html",
        blurb: "Brand positioning, competitive analysis, brand architecture",
    },
    Department {
        name: "Influencer & Partnership Team",
        link: "influencer-partnership-team.html",
        blurb: "Influencer relations, collaboration management, partnership strategy",
    },
    Department {
        name: "Government Relations Team",
        link: "government-relations-team.html",
        blurb: "Stakeholder mapping, policy communications, regulatory affairs",
    },
    Department {
        name: "Creative & Integrated Team",
        link: "creative-integrated-team.html",
        blurb: "Creative campaigns, integrated marketing, brand storytelling",
    },
    Department {
        name: "Social & Content Team",
        link: "social-content-team.html",
        blurb: "Social media strategy, content creation, digital campaigns",
    },
    Department {
        name: "Leadership Team",
        link: "leadership-team.html",
        blurb: "Strategic planning, executive communications, board presentations",
    },
    Department {
        name: "Client Experience Team",
        link: "client-experience-team.html",
        blurb: "Account management, client relations, project coordination",
    },
    Department {
        name: "Campaign Management Team",
        link: "campaign-management-team.html",
        blurb: "Project planning, campaign execution, performance tracking",
    },
    Department {
        name: "Insights & Measurement Team",
        link: "insights-measurement-team.html",
        blurb: "Analytics, performance measurement, data analysis",
    },
    Department {
        name: "Operations & Culture Team",
        link: "operations-culture-team.html",
        blurb: "Process optimization, team management, operational excellence",
    },
];

/// Looks up a catalog entry by exact name.
pub fn find(name: &str) -> Option<&'static Department> {
    CATALOG.iter().find(|department| department.name == name)
}
