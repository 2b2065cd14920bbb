//! Local fallback recommendations.
//!
//! Consulted only when the remote completion call does not succeed. Rules
//! are tested in fixed order against the lower-cased user text; the first
//! keyword hit wins, otherwise the generic fallback applies. Selection is
//! deterministic and total.

/// A keyword-triggered canned recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FallbackRule {
    pub keyword: &'static str,
    pub departments: &'static [&'static str],
    pub response: &'static str,
}

pub const RULES: [FallbackRule; 5] = [
    FallbackRule {
        keyword: "crisis",
        departments: &["Crisis Communications Team", "PR & Media Relations Team"],
        response: "For crisis situations, I recommend starting with our Crisis Communications Team for immediate response planning and stakeholder messaging. The PR & Media Relations Team can help manage media coverage and journalist relationships during the crisis.",
    },
    FallbackRule {
        keyword: "media",
        departments: &["PR & Media Relations Team", "Social & Content Team"],
        response: "For media-related challenges, our PR & Media Relations Team has tools for media monitoring, journalist outreach, and press release optimization. The Social & Content Team can help extend your reach through digital channels.",
    },
    FallbackRule {
        keyword: "government",
        departments: &["Behavioural Science Team", "Government Relations Team"],
        response: "For government communications, the Behavioural Science Team specializes in behavior change campaigns and public health messaging. The Government Relations Team handles stakeholder mapping and policy communications.",
    },
    FallbackRule {
        keyword: "event",
        departments: &["Events & Experiential Team", "Creative & Integrated Team"],
        response: "For events and activations, our Events & Experiential Team has comprehensive tools for event planning and brand activations. The Creative & Integrated Team can help develop compelling campaign creative.",
    },
    FallbackRule {
        keyword: "social",
        departments: &["Social & Content Team", "Influencer & Partnership Team"],
        response: "For social media challenges, the Social & Content Team provides tools for content creation and digital campaigns. The Influencer & Partnership Team can help with influencer relations and collaboration management.",
    },
];

pub const GENERIC_DEPARTMENTS: [&str; 3] = [
    "Insights & Measurement Team",
    "Campaign Management Team",
    "Client Experience Team",
];

pub const GENERIC_RESPONSE: &str = "I'm having trouble connecting to the AI service right now, but I can still help! Based on your message, you might want to explore these departments:\n\n\u{1F4CA} **Insights & Measurement Team** - For data analysis and performance tracking\n\u{1F3AF} **Campaign Management Team** - For project planning and execution\n\u{1F465} **Client Experience Team** - For stakeholder management and communication\n\nClick the department links below to access specific AI tools!";

/// A chosen fallback: canned prose plus the departments to link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fallback {
    pub departments: &'static [&'static str],
    pub response: &'static str,
}

/// Picks the fallback for the given user text: first rule whose keyword is
/// a substring of the lower-cased input, in rule order, else the generic
/// fallback.
pub fn select(user_text: &str) -> Fallback {
    let lowered = user_text.to_lowercase();

    for rule in &RULES {
        if lowered.contains(rule.keyword) {
            return Fallback {
                departments: rule.departments,
                response: rule.response,
            };
        }
    }

    Fallback {
        departments: &GENERIC_DEPARTMENTS,
        response: GENERIC_RESPONSE,
    }
}
