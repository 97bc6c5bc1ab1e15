//! Built-in disposition rule table
//!
//! Entries are `(disposition, sub-disposition, trigger phrases, temperature)`.
//! Order is priority: Dead disqualifiers, then Cold negatives (specific
//! "Not interested" reasons before the generic one), then Warm pending
//! signals, then Hot positives last so that "interested" never shadows
//! "not interested".
//!
//! Sub-dispositions that exist both as "Not Enquired" (Dead) and
//! "Not interested" (Cold) with the same phrases appear only under
//! "Not interested": a Dead copy placed first would make the Cold rule
//! unreachable.

use leadboard_config::RuleDefinition;
use leadboard_core::Temperature::{self, Cold, Dead, Hot, Warm};

type RuleRow = (
    &'static str,
    &'static str,
    &'static [&'static str],
    Temperature,
);

const RULES: &[RuleRow] = &[
    // Dead: definitive disqualifiers
    (
        "DNC",
        "DNC",
        &["do not call", "dnc", "do not contact", "stop calling", "remove from list", "unsubscribe"],
        Dead,
    ),
    (
        "Wrong Number",
        "Wrong Number",
        &["wrong number", "incorrect number", "number not valid", "invalid number", "wrong phone"],
        Dead,
    ),
    (
        "Not Eligible",
        "Education",
        &[
            "not eligible education",
            "qualification not met",
            "not eligible for the program",
            "education qualification",
            "does not qualify",
            "not eligible",
        ],
        Dead,
    ),
    (
        "Not Eligible",
        "Experience",
        &[
            "work experience requirement",
            "do not possess required",
            "insufficient experience",
            "experience not enough",
        ],
        Dead,
    ),
    (
        "Not Eligible",
        "Language Barrier",
        &[
            "language barrier",
            "not comfortable in english",
            "language issue",
            "cannot communicate",
            "language problem",
        ],
        Dead,
    ),
    (
        "Not Enquired",
        "Ad was not clear",
        &[
            "ad was not clear",
            "did not know what the ad",
            "confused by ad",
            "misleading ad",
            "unclear advertisement",
        ],
        Dead,
    ),
    (
        "Not Enquired",
        "Did not enquire",
        &[
            "did not enquire",
            "did not make enquiry",
            "never enquired",
            "no enquiry made",
            "accidental lead",
        ],
        Dead,
    ),
    (
        "Not Enquired",
        "Enquired by mistake",
        &[
            "enquired by mistake",
            "by mistake",
            "wrong enquiry",
            "accidental enquiry",
            "enquire about other",
        ],
        Dead,
    ),
    (
        "Not Enquired",
        "Looking for Degree",
        &["looking for degree", "looking for a degree"],
        Dead,
    ),
    (
        "Not Enquired",
        "Other Specialization",
        &[
            "other specialization",
            "other specialisation",
            "specialization that we do not offer",
            "different specialization",
        ],
        Dead,
    ),
    // Cold: "Not interested" reasons before the generic "not interested"
    (
        "Not interested",
        "Just Exploring",
        &[
            "just exploring",
            "just looking",
            "exploring options",
            "browsing",
            "window shopping",
            "not decided",
            "deciding phase",
        ],
        Cold,
    ),
    (
        "Not interested",
        "Looking for Job",
        &["looking for job", "looking for a job", "job search", "wants a job", "not education", "job opening"],
        Cold,
    ),
    (
        "Not interested",
        "Looking For A Regular Degree",
        &["regular degree", "regular program", "full time degree", "offline degree", "regular college"],
        Cold,
    ),
    (
        "Not interested",
        "Looking for Certification Course",
        &["certification course only", "certificate course only", "only certification"],
        Cold,
    ),
    (
        "Not interested",
        "Looking for degree course",
        &["degree course", "wants a degree", "degree program"],
        Cold,
    ),
    (
        "Not interested",
        "Syllabus disinterest",
        &[
            "not interested in syllabus",
            "not interested syllabus",
            "not interested curriculum",
            "syllabus disinterest",
        ],
        Cold,
    ),
    (
        "Not interested",
        "Time constraint",
        &["not interested time", "not interested busy"],
        Cold,
    ),
    (
        "Not interested",
        "Reason not shared",
        &[
            "not interested reason not shared",
            "not interested no reason",
            "not interested - reason",
        ],
        Cold,
    ),
    ("Not interested", "General", &["not interested"], Cold),
    // Cold: fallout and untouched leads
    (
        "Fallout",
        "Fee is high",
        &[
            "fee is high",
            "too expensive",
            "costly",
            "cannot afford",
            "budget issue",
            "price is high",
            "fees are high",
            "not affordable",
        ],
        Cold,
    ),
    (
        "Fallout",
        "Effort Exhaust",
        &[
            "effort exhaust",
            "tried many times",
            "no response after multiple",
            "exhausted efforts",
            "multiple attempts failed",
        ],
        Cold,
    ),
    (
        "Fallout",
        "Enrolled in other company",
        &[
            "enrolled in other company",
            "joined another",
            "taken admission with another",
            "enrolled elsewhere",
            "joined competitor",
            "went with another",
        ],
        Cold,
    ),
    (
        "Fallout",
        "Enrolled in other course",
        &["enrolled in other course", "another program", "taken admission in another"],
        Cold,
    ),
    (
        "Fallout",
        "Reason not shared",
        &[
            "reason not shared",
            "refused to share",
            "did not mention reason",
            "no reason given",
            "would not say",
        ],
        Cold,
    ),
    (
        "Fallout",
        "Syllabus disinterest",
        &["different domain", "course content not relevant", "different subject", "other curriculum"],
        Cold,
    ),
    (
        "Fallout",
        "Time constraint",
        &[
            "time constraint",
            "no time",
            "unable to invest time",
            "too busy for course",
            "cannot commit time",
            "schedule conflict",
        ],
        Cold,
    ),
    (
        "Fallout",
        "Free training",
        &["free training", "asked for free", "wants free", "looking for free", "free course"],
        Cold,
    ),
    (
        "New Lead",
        "New Lead",
        &[
            "new lead",
            "no conversation",
            "not contacted yet",
            "fresh lead",
            "did not have a conversation",
        ],
        Cold,
    ),
    ("Fallout", "Other course", &["different course", "other course"], Cold),
    (
        "Not interested",
        "Looking for Certification Course",
        &["certification course", "certificate course", "looking for certification", "wants certificate"],
        Cold,
    ),
    // Warm: neutral or pending
    (
        "Follow up",
        "Customer Busy",
        &[
            "busy at the moment",
            "busy right now",
            "in a meeting",
            "will call back later",
            "busy currently",
        ],
        Warm,
    ),
    (
        "Follow up",
        "Company Approval / Internal Discussion",
        &[
            "company approval",
            "internal discussion",
            "waiting for approval",
            "manager approval",
            "need to discuss internally",
            "checking with management",
        ],
        Warm,
    ),
    (
        "Follow up",
        "Not Answered",
        &[
            "not answered",
            "did not answer",
            "no answer",
            "not picking up",
            "unreachable",
            "switched off",
            "not reachable",
        ],
        Warm,
    ),
    (
        "Call Back",
        "Customer Busy",
        &["call back", "callback", "was busy", "cx busy", "customer busy"],
        Warm,
    ),
    (
        "Call Back",
        "Not answering",
        &["not answering", "did not pick"],
        Warm,
    ),
    (
        "Call Back",
        "RPC Not available",
        &[
            "rpc not available",
            "right person not available",
            "contact person unavailable",
            "person not available",
        ],
        Warm,
    ),
    (
        "Other Agent Callback",
        "Other Agent Callback",
        &["other counselor", "transferred to another agent"],
        Warm,
    ),
    (
        "Other Agent FollowUp",
        "Other Agent FollowUp",
        &["other agent follow", "transferred follow"],
        Warm,
    ),
    (
        "Next Batch",
        "Same course",
        &[
            "next batch same",
            "same course next batch",
            "next batch of the same",
            "same program next batch",
        ],
        Warm,
    ),
    (
        "Next Batch",
        "Other course",
        &["next batch other", "next batch another"],
        Warm,
    ),
    // Hot: positive signals, checked last
    (
        "Converted",
        "Converted",
        &["converted", "payment done", "admission confirmed", "paid in full"],
        Hot,
    ),
    (
        "Prospect",
        "Payment this week",
        &["payment this week", "pay this week", "paying this week"],
        Hot,
    ),
    (
        "Prospect",
        "Payment this month",
        &["payment this month", "pay this month", "paying this month"],
        Hot,
    ),
    (
        "Prospect",
        "Payment next month",
        &["payment next month", "pay next month", "paying next month"],
        Hot,
    ),
    (
        "Prospect",
        "Shared PO",
        &["shared po", "purchase order", "po shared", "po sent", "po raised"],
        Hot,
    ),
    (
        "Follow up",
        "Interested",
        &[
            "interested",
            "details shared",
            "program shared",
            "stay in touch",
            "wants to know more",
            "keen",
            "looking forward",
        ],
        Hot,
    ),
    ("Converted", "Enrolled", &["enrolled", "registered"], Hot),
];

/// The built-in table as rule definitions, in priority order
pub fn rule_definitions() -> Vec<RuleDefinition> {
    RULES
        .iter()
        .map(|(disposition, sub_disposition, phrases, temperature)| {
            RuleDefinition::new(*disposition, *sub_disposition, phrases, *temperature)
        })
        .collect()
}
